//! JSON output: a pretty-printed snapshot of the graph.

use super::DiagramWriter;
use crate::ir::ActivityGraph;
use std::io::Write;

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> DiagramWriter for JsonWriter<W> {
    fn write_graph(&mut self, graph: &ActivityGraph) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(&graph.snapshot())?;
        self.writer.write_all(json.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}
