pub mod check;
pub mod command;
pub mod generate;
pub mod init;
pub mod source;
