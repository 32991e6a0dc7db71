pub mod ftp;
pub mod report;
pub mod session;
