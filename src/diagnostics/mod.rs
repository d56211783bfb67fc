/// Defects: fatal usage-contract and invariant violations
mod defect;

pub use defect::*;
