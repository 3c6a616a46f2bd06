//! Swift frontend: tree-sitter parsing and activity-CFG construction.

pub mod cfg_builder;

pub use cfg_builder::CfgBuilder;

use crate::errors::Error;
use tree_sitter::{Parser, Tree};

/// Parse Swift source into a tree-sitter syntax tree.
pub fn parse(source: &str) -> Result<Tree, Error> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_swift::LANGUAGE.into())
        .map_err(|e| Error::Parse(format!("Failed to load Swift grammar: {e}")))?;
    parser
        .parse(source, None)
        .ok_or_else(|| Error::Parse("Failed to parse Swift source".to_string()))
}
