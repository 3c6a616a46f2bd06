use crate::config;
use crate::emit::{create_writer, DiagramFormat};
use crate::frontend::CfgBuilder;
use crate::io;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

pub struct DiagramOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: Option<DiagramFormat>,
    pub function: Option<String>,
}

pub fn run(options: DiagramOptions) -> Result<()> {
    let config = config::get_config();

    let source = io::read_file(&options.input)
        .with_context(|| format!("Failed to read {}", options.input.display()))?;

    let builder = CfgBuilder::new().with_max_label_length(config.diagram.max_label_length);
    let graph = builder
        .build(&source, options.function.as_deref())
        .with_context(|| format!("Failed to build activity graph for {}", options.input.display()))?;
    log::debug!(
        "built activity graph: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    let format = options.format.unwrap_or(config.output.default_format);
    let direction = config.diagram.direction;

    if options.output.as_os_str() == "-" {
        create_writer(std::io::stdout().lock(), format, direction).write_graph(&graph)?;
    } else {
        let file = File::create(&options.output)
            .with_context(|| format!("Failed to create {}", options.output.display()))?;
        create_writer(BufWriter::new(file), format, direction).write_graph(&graph)?;
        println!("OK: wrote {}", options.output.display());
    }

    Ok(())
}
