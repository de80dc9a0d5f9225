//! Property-based tests for the casetree navigation engine

mod resolve_paths;
