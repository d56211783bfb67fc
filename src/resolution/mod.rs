/// The per-key aggregate of resolved bindings and declarations
mod resolved_bindings;

pub use resolved_bindings::*;
