//! Subcommands of the `camparamsctl` tool.

pub mod cmd_dump;
pub mod cmd_format;
pub mod cmd_get;
pub mod cmd_remove;
pub mod cmd_set;
pub mod common;
