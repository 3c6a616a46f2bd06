//! Diagram emitters. Each format implements [`DiagramWriter`] over any
//! `io::Write` destination.

pub mod dot;
pub mod json;
pub mod mermaid;

pub use dot::DotWriter;
pub use json::JsonWriter;
pub use mermaid::MermaidWriter;

use crate::ir::ActivityGraph;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagramFormat {
    Mermaid,
    Dot,
    Json,
}

/// Flow direction of the emitted diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    /// Top-down
    #[default]
    Td,
    /// Left-right
    Lr,
    /// Bottom-top
    Bt,
    /// Right-left
    Rl,
}

impl Direction {
    /// Mermaid flowchart direction keyword.
    pub fn mermaid(self) -> &'static str {
        match self {
            Direction::Td => "TD",
            Direction::Lr => "LR",
            Direction::Bt => "BT",
            Direction::Rl => "RL",
        }
    }

    /// Graphviz `rankdir` value.
    pub fn dot(self) -> &'static str {
        match self {
            Direction::Td => "TB",
            Direction::Lr => "LR",
            Direction::Bt => "BT",
            Direction::Rl => "RL",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mermaid())
    }
}

pub trait DiagramWriter {
    fn write_graph(&mut self, graph: &ActivityGraph) -> anyhow::Result<()>;
}

pub fn create_writer<W: Write + 'static>(
    writer: W,
    format: DiagramFormat,
    direction: Direction,
) -> Box<dyn DiagramWriter> {
    match format {
        DiagramFormat::Mermaid => Box::new(MermaidWriter::new(writer, direction)),
        DiagramFormat::Dot => Box::new(DotWriter::new(writer, direction)),
        DiagramFormat::Json => Box::new(JsonWriter::new(writer)),
    }
}
