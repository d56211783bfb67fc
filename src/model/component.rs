use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};

use nonempty::NonEmpty;
use smol_str::SmolStr;

/// A scope handle: the path of component names from the root injector down to one
/// component in the hierarchy.
///
/// Identity is the whole path, so two subcomponents with the same name installed under
/// different parents are distinct scopes. The ancestor-chain relation is the prefix
/// relation on paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentPath(NonEmpty<SmolStr>);

impl ComponentPath {
    /// Path of a root component
    pub fn root(name: impl Into<SmolStr>) -> Self {
        ComponentPath(NonEmpty::new(name.into()))
    }

    /// Path of a direct child (subcomponent) of this component
    pub fn child_path(&self, name: impl Into<SmolStr>) -> Self {
        let mut segments = self.0.clone();
        segments.push(name.into());
        ComponentPath(segments)
    }

    /// Path of the parent component, or [None] for a root
    pub fn parent(&self) -> Option<Self> {
        let mut segments: Vec<SmolStr> = self.0.iter().cloned().collect();
        segments.pop();
        NonEmpty::from_vec(segments).map(ComponentPath)
    }

    /// Name of the component itself (the last path segment)
    pub fn name(&self) -> &str {
        self.0.last()
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Whether `self` is `other` or one of its ancestors
    pub fn is_ancestor_or_self_of(&self, other: &ComponentPath) -> bool {
        self.0.len() <= other.0.len()
            && self.0.iter().zip(other.0.iter()).all(|(a, b)| a == b)
    }

    /// Whether `self` is `other` or one of its descendants
    pub fn is_descendant_or_self_of(&self, other: &ComponentPath) -> bool {
        other.is_ancestor_or_self_of(self)
    }
}

impl Hash for ComponentPath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.len().hash(state);
        for segment in self.0.iter() {
            segment.hash(state);
        }
    }
}

impl Display for ComponentPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.first())?;
        for segment in self.0.tail.iter() {
            write!(f, ".{}", segment)?;
        }
        Ok(())
    }
}
