//! 应用层 - 命令

mod parse_commands;

pub mod handlers;

pub use parse_commands::*;
