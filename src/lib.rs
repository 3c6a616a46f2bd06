// Export modules for library usage
pub mod classify;
pub mod cli;
pub mod commands;
pub mod config;
pub mod emit;
pub mod errors;
pub mod frontend;
pub mod io;
pub mod ir;

// Re-export commonly used types
pub use crate::classify::{classify, Label};
pub use crate::config::{get_config, Swift2ActivityConfig};
pub use crate::emit::{create_writer, DiagramFormat, DiagramWriter, Direction};
pub use crate::errors::Error;
pub use crate::frontend::CfgBuilder;
pub use crate::ir::{ActivityGraph, ActivityNode, EdgeLabel, NodeId};
