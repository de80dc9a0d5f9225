//! Casetree: Evidence Tree Navigation
//!
//! Resolves root-to-leaf ancestor paths over a hierarchical case content
//! model and synchronizes a navigation tree and a result pane along them.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod navigator;
pub mod resolve;
pub mod sync;
pub mod types;
pub mod view;
