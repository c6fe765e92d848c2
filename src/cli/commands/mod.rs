mod command_result;
pub mod defaults;
pub mod helper;
pub mod init;
pub mod pending;
pub mod translations;

pub use command_result::*;
