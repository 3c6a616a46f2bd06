use anyhow::Result;
use clap::Parser;
use swift2activity::cli::{Cli, Commands};
use swift2activity::commands;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Diagram {
            input,
            output,
            format,
            function,
        } => commands::diagram::run(commands::diagram::DiagramOptions {
            input,
            output,
            format,
            function,
        }),
        Commands::Classify { value } => commands::classify::run(value),
        Commands::Init { force } => commands::init::init_config(force),
    }
}
