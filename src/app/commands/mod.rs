pub mod action;
pub mod generate;
pub mod init;
pub mod list;
