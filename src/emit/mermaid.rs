//! Mermaid flowchart emission.
//!
//! Node shapes follow UML activity conventions: initial/final nodes render
//! as circles `((…))`, decisions and merges as diamonds `{…}`, actions as
//! boxes `[…]`. Square brackets inside labels would confuse the Mermaid
//! parser, so they are rewritten to parentheses.

use super::{DiagramWriter, Direction};
use crate::ir::{ActivityGraph, ActivityNode};
use std::io::Write;

pub struct MermaidWriter<W: Write> {
    writer: W,
    direction: Direction,
}

impl<W: Write> MermaidWriter<W> {
    pub fn new(writer: W, direction: Direction) -> Self {
        Self { writer, direction }
    }
}

impl<W: Write> DiagramWriter for MermaidWriter<W> {
    fn write_graph(&mut self, graph: &ActivityGraph) -> anyhow::Result<()> {
        writeln!(self.writer, "flowchart {}", self.direction.mermaid())?;

        for (i, node) in graph.nodes() {
            match node {
                ActivityNode::Initial => writeln!(self.writer, "    N{i}((Start))")?,
                ActivityNode::Final => writeln!(self.writer, "    N{i}((End))")?,
                ActivityNode::Decision(cond) => {
                    writeln!(self.writer, "    N{i}{{{}}}", sanitize(cond))?
                }
                ActivityNode::Merge => writeln!(self.writer, "    N{i}{{merge}}")?,
                ActivityNode::Action(label) => {
                    writeln!(self.writer, "    N{i}[{}]", sanitize(label))?
                }
            }
        }

        for (from, to, label) in graph.edges() {
            match label {
                Some(label) => writeln!(self.writer, "    N{from} -->|{label}| N{to}")?,
                None => writeln!(self.writer, "    N{from} --> N{to}")?,
            }
        }

        Ok(())
    }
}

fn sanitize(text: &str) -> String {
    text.replace('[', "(")
        .replace(']', ")")
        .replace('\n', " ")
        .trim()
        .to_string()
}
