use smol_str::SmolStr;

use crate::defect;
use crate::model::{ContributionType, HasContributionType, Key};

/// Declares that a key is a set or map multibinding even if no elements were
/// contributed to it (e.g. a `@Multibinds` method). Carries no value itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MultibindingDeclaration {
    key: Key,
    contribution_type: ContributionType,
}

impl MultibindingDeclaration {
    /// `contribution_type` must be a multibinding kind; a unique contribution cannot be
    /// declared without a value.
    pub fn new(key: Key, contribution_type: ContributionType) -> Self {
        if !contribution_type.is_multibinding() {
            defect!(NotAMultibinding { key });
        }
        MultibindingDeclaration { key, contribution_type }
    }

    pub fn key(&self) -> &Key {
        &self.key
    }
}

impl HasContributionType for MultibindingDeclaration {
    fn contribution_type(&self) -> ContributionType {
        self.contribution_type
    }
}

/// Declares that a key denotes the factory (builder) for a subcomponent installed in
/// the hierarchy, so requesting the key provisions that factory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubcomponentDeclaration {
    key: Key,
    subcomponent: SmolStr,
}

impl SubcomponentDeclaration {
    pub fn new(key: Key, subcomponent: impl Into<SmolStr>) -> Self {
        SubcomponentDeclaration { key, subcomponent: subcomponent.into() }
    }

    pub fn key(&self) -> &Key {
        &self.key
    }

    /// Name of the declared subcomponent
    pub fn subcomponent(&self) -> &str {
        &self.subcomponent
    }
}

/// Declares that a key denotes an optional-wrapped binding (e.g. a `@BindsOptionalOf`
/// method): present if the underlying key is bound, absent otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OptionalBindingDeclaration {
    key: Key,
}

impl OptionalBindingDeclaration {
    pub fn new(key: Key) -> Self {
        OptionalBindingDeclaration { key }
    }

    pub fn key(&self) -> &Key {
        &self.key
    }
}
