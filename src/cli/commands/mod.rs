pub mod check;
pub mod edit;
pub mod init;
pub mod list;
