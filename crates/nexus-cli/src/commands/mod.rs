//! Command handlers. Each translates parsed arguments into core calls and
//! renders the result; none of them holds generation logic.

pub mod completions;
pub mod generate;
pub mod init;
pub mod list;
