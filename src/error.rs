//! Error types for the casetree navigation engine.

use crate::types::{ContentId, NodeHandle};
use thiserror::Error;

/// Content-model lookup errors
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Content not found: {0}")]
    NotFound(ContentId),

    #[error("Content {child} names parent {parent}, which is not in the model")]
    DanglingParent { child: ContentId, parent: ContentId },
}

/// View-state errors raised by selection controllers
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("Node {0} is not a valid selection target")]
    InvalidSelection(NodeHandle),

    #[error("View rejected the selection: {0}")]
    SelectionVetoed(String),
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Load(String),

    #[error("Invalid log directive: {0}")]
    InvalidLogDirective(String),

    #[error("Configuration I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::Load(err.to_string())
    }
}
