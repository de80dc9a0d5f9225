//! Core identifier types for the casetree navigation engine.

/// ContentId: stable identifier of a content item in the case hierarchy
pub type ContentId = u64;

/// NodeHandle: opaque handle to a node in the navigation tree view
pub type NodeHandle = usize;

/// ResultHandle: opaque handle to a row in the result view
pub type ResultHandle = usize;
