use crate::emit::DiagramFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "swift2activity")]
#[command(about = "Swift to UML activity diagram converter", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build an activity diagram from a Swift source file
    Diagram {
        /// Swift source file
        input: PathBuf,

        /// Output file ("-" for stdout)
        #[arg(short, long, default_value = "out.mmd")]
        output: PathBuf,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<DiagramFormat>,

        /// Diagram the named function instead of the first one
        #[arg(long)]
        function: Option<String>,
    },

    /// Print the range label for an integer
    Classify {
        /// Integer value to classify
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },

    /// Create a default .swift2activity.toml configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_diagram_defaults() {
        let cli = Cli::try_parse_from(["swift2activity", "diagram", "sample.swift"]).unwrap();
        match cli.command {
            Commands::Diagram {
                input,
                output,
                format,
                function,
            } => {
                assert_eq!(input, PathBuf::from("sample.swift"));
                assert_eq!(output, PathBuf::from("out.mmd"));
                assert!(format.is_none());
                assert!(function.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_negative_classify_value() {
        let cli = Cli::try_parse_from(["swift2activity", "classify", "-7"]).unwrap();
        match cli.command {
            Commands::Classify { value } => assert_eq!(value, -7),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_non_integer_classify_value() {
        assert!(Cli::try_parse_from(["swift2activity", "classify", "ten"]).is_err());
    }
}
