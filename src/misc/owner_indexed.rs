use std::fmt::Debug;
use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};

use crate::defect;
use crate::misc::{hash_one, unordered_hash};
use crate::model::ComponentPath;

/// Multimap from owning component to the bindings it owns.
///
/// Insertion order is preserved within each owner's bucket (downstream multibinding
/// element ordering depends on it); iteration order across owners is not significant
/// and does not affect equality or [OwnerIndexed::unordered_hash]. Two invariants are
/// enforced on insertion: a binding has exactly one owner across the whole map, and no
/// bucket is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerIndexed<B: Eq + Hash + Debug> {
    buckets: IndexMap<ComponentPath, IndexSet<B>>,
}

impl<B: Eq + Hash + Debug> OwnerIndexed<B> {
    pub fn new() -> Self {
        OwnerIndexed { buckets: IndexMap::new() }
    }

    /// Insert a binding under its owner. Re-inserting the same (owner, binding) pair is
    /// a no-op; inserting the same binding under a second owner is a defect.
    pub fn insert(&mut self, owner: ComponentPath, binding: B) {
        if let Some(first_owner) = self.owner_of(&binding) {
            if *first_owner == owner {
                return;
            }
            defect!(DoublyOwnedBinding {
                binding: format!("{:?}", binding),
                first_owner: first_owner.clone(),
                second_owner: owner,
            });
        }
        self.buckets.entry(owner).or_insert_with(IndexSet::new).insert(binding);
    }

    /// The bindings owned by `owner`, in insertion order, or [None] if it owns nothing
    pub fn get(&self, owner: &ComponentPath) -> Option<&IndexSet<B>> {
        self.buckets.get(owner)
    }

    /// Reverse lookup: the unique owner of `binding`, or [None] if it isn't present
    pub fn owner_of(&self, binding: &B) -> Option<&ComponentPath> {
        self.buckets
            .iter()
            .find(|(_, bucket)| bucket.contains(binding))
            .map(|(owner, _)| owner)
    }

    pub fn owners(&self) -> impl Iterator<Item = &ComponentPath> {
        self.buckets.keys()
    }

    /// All bindings regardless of owner, bucket by bucket in within-bucket order
    pub fn values(&self) -> impl Iterator<Item = &B> {
        self.buckets.values().flat_map(|bucket| bucket.iter())
    }

    /// All (owner, binding) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&ComponentPath, &B)> {
        self.buckets
            .iter()
            .flat_map(|(owner, bucket)| bucket.iter().map(move |binding| (owner, binding)))
    }

    /// Total number of bindings across all owners
    pub fn len(&self) -> usize {
        self.buckets.values().map(IndexSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Structural hash, independent of owner iteration order and within-bucket order
    /// (consistent with equality, which is content-based on both levels)
    pub fn unordered_hash(&self) -> u64 {
        unordered_hash(self.buckets.iter().map(|(owner, bucket)| {
            hash_one(&(hash_one(owner), unordered_hash(bucket.iter())))
        }))
    }
}

impl<B: Eq + Hash + Debug> Default for OwnerIndexed<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Eq + Hash + Debug> FromIterator<(ComponentPath, B)> for OwnerIndexed<B> {
    fn from_iter<T: IntoIterator<Item = (ComponentPath, B)>>(iter: T) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<B: Eq + Hash + Debug> Extend<(ComponentPath, B)> for OwnerIndexed<B> {
    fn extend<T: IntoIterator<Item = (ComponentPath, B)>>(&mut self, iter: T) {
        for (owner, binding) in iter {
            self.insert(owner, binding);
        }
    }
}
