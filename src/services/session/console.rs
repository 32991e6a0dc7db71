use std::io::{BufRead, Write};

use crate::core::errors::{Error, Result};

pub const SEPARATOR: &str = "---------------------";
const ENTER_TO_END: &str = " == ENTER to END ==";

/// Line-oriented prompt/answer console over any reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Prints `question`, then reads one answer line without its line ending.
    pub fn prompt(&mut self, question: &str) -> Result<String> {
        writeln!(self.output, "{}", question)?;
        write!(self.output, "-> ")?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Err(Error::InputClosed);
        }
        Ok(answer.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Blocks until the user presses Enter. A closed input counts as Enter.
    pub fn wait_for_enter(&mut self) -> Result<()> {
        write!(self.output, "{}", ENTER_TO_END)?;
        self.output.flush()?;
        let mut discard = String::new();
        self.input.read_line(&mut discard)?;
        Ok(())
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn prompt_strips_line_endings() {
        let mut console = console("ftp.example.org:21\r\nsecond\n");

        assert_eq!(console.prompt("address?").unwrap(), "ftp.example.org:21");
        assert_eq!(console.prompt("again?").unwrap(), "second");

        let (_, out) = console.into_parts();
        assert_eq!(String::from_utf8(out).unwrap(), "address?\n-> again?\n-> ");
    }

    #[test]
    fn prompt_on_closed_input_fails() {
        let mut console = console("");
        assert!(matches!(console.prompt("x"), Err(Error::InputClosed)));
    }

    #[test]
    fn wait_for_enter_tolerates_closed_input() {
        let mut console = console("");
        console.wait_for_enter().unwrap();
    }
}
