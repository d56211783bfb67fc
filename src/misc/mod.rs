/// Owner-indexed multimap with unique-ownership enforcement
mod owner_indexed;
/// Order-independent hashing of collections
mod unordered_hash;

pub use owner_indexed::*;
pub use unordered_hash::*;
