pub mod console;
pub mod driver;

pub use console::Console;
pub use driver::{
    fetch_listing, finish, run_session, show_fatal_error, SessionConfig, SessionInputs,
};
