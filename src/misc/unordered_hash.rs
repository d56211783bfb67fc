use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Hash of a collection that ignores iteration order: each element is hashed on its own
/// and the results are xor-combined. Used for the memoized structural hash of values
/// whose maps/sets compare equal regardless of insertion order.
pub fn unordered_hash<T: Hash>(items: impl IntoIterator<Item = T>) -> u64 {
    items
        .into_iter()
        .fold(0, |combined, item| combined ^ hash_one(&item))
}

/// Hash of a single value with the (deterministically keyed) default hasher
pub fn hash_one<T: Hash>(item: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    item.hash(&mut hasher);
    hasher.finish()
}
