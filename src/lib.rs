#![doc = include_str!("../README.md")]

/// Opaque collaborator records: request keys, component paths, bindings, declarations
pub mod model;
/// The per-key resolution aggregate and its derived queries
pub mod resolution;
/// Defects (fatal invariant violations)
pub mod diagnostics;
/// Utilities which could go in any crate
pub mod misc;
