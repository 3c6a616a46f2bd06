//! CLI command implementations.
//!
//! Each submodule handles one subcommand exposed by swift2activity.

pub mod classify;
pub mod diagram;
pub mod init;
