//! Graphviz output, same node-shape conventions as the Mermaid emitter.

use super::{DiagramWriter, Direction};
use crate::ir::{ActivityGraph, ActivityNode};
use std::io::Write;

pub struct DotWriter<W: Write> {
    writer: W,
    direction: Direction,
}

impl<W: Write> DotWriter<W> {
    pub fn new(writer: W, direction: Direction) -> Self {
        Self { writer, direction }
    }
}

impl<W: Write> DiagramWriter for DotWriter<W> {
    fn write_graph(&mut self, graph: &ActivityGraph) -> anyhow::Result<()> {
        writeln!(self.writer, "digraph activity {{")?;
        writeln!(self.writer, "    rankdir={};", self.direction.dot())?;

        for (i, node) in graph.nodes() {
            let (shape, label) = match node {
                ActivityNode::Initial => ("circle", "Start".to_string()),
                ActivityNode::Final => ("circle", "End".to_string()),
                ActivityNode::Decision(cond) => ("diamond", cond.clone()),
                ActivityNode::Merge => ("diamond", "merge".to_string()),
                ActivityNode::Action(label) => ("box", label.clone()),
            };
            writeln!(
                self.writer,
                "    N{i} [shape={shape}, label=\"{}\"];",
                escape(&label)
            )?;
        }

        for (from, to, label) in graph.edges() {
            match label {
                Some(label) => {
                    writeln!(self.writer, "    N{from} -> N{to} [label=\"{label}\"];")?
                }
                None => writeln!(self.writer, "    N{from} -> N{to};")?,
            }
        }

        writeln!(self.writer, "}}")?;
        Ok(())
    }
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', " ")
}
