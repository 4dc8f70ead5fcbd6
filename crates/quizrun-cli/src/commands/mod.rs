pub mod init;
pub mod list;
pub mod menu;
pub mod run;
pub mod validate;
