mod command_result;
pub mod init;
pub mod sift;

pub use command_result::*;
