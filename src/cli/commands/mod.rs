pub mod config;
pub mod console;
pub mod init;
pub mod log;
