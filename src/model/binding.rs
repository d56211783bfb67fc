use derive_more::Display;
use smol_str::SmolStr;

use crate::model::Key;

/// How a binding satisfies its key: by provisioning a new value, producing one
/// asynchronously, or injecting the members of an existing instance.
#[derive(Debug, Clone, Copy, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BindingType {
    #[display(fmt = "provision")]
    Provision,
    #[display(fmt = "production")]
    Production,
    #[display(fmt = "members injection")]
    MembersInjection,
}

/// Whether a contribution satisfies its key on its own or is one element of a
/// set/map multibinding.
#[derive(Debug, Clone, Copy, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContributionType {
    #[display(fmt = "unique")]
    Unique,
    #[display(fmt = "set")]
    Set,
    #[display(fmt = "map")]
    Map,
}

impl ContributionType {
    pub fn is_multibinding(self) -> bool {
        !matches!(self, ContributionType::Unique)
    }
}

/// A scope annotation tag on a binding (e.g. `Singleton`)
#[derive(Debug, Clone, Display, PartialEq, Eq, Hash)]
#[display(fmt = "@{}", _0)]
pub struct Scope(SmolStr);

impl Scope {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Scope(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Implemented by everything that classifies as unique or as a multibinding
/// contribution: bindings, multibinding declarations, and whole resolutions.
pub trait HasContributionType {
    fn contribution_type(&self) -> ContributionType;
}

/// A binding that provides (or produces) a value for a key. `provided_by` names the
/// declaring element (e.g. a module method or an injectable constructor), which is what
/// distinguishes two contributions to the same multibinding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContributionBinding {
    key: Key,
    provided_by: SmolStr,
    contribution_type: ContributionType,
    binding_type: BindingType,
    scope: Option<Scope>,
}

impl ContributionBinding {
    /// A synchronous provision binding
    pub fn provision(
        key: Key,
        provided_by: impl Into<SmolStr>,
        contribution_type: ContributionType,
    ) -> Self {
        ContributionBinding {
            key,
            provided_by: provided_by.into(),
            contribution_type,
            binding_type: BindingType::Provision,
            scope: None,
        }
    }

    /// An asynchronous production binding
    pub fn production(
        key: Key,
        provided_by: impl Into<SmolStr>,
        contribution_type: ContributionType,
    ) -> Self {
        ContributionBinding {
            binding_type: BindingType::Production,
            ..Self::provision(key, provided_by, contribution_type)
        }
    }

    /// The same binding with a scope annotation
    pub fn scoped(self, scope: Scope) -> Self {
        ContributionBinding { scope: Some(scope), ..self }
    }

    pub fn key(&self) -> &Key {
        &self.key
    }

    pub fn provided_by(&self) -> &str {
        &self.provided_by
    }

    /// [BindingType::Provision] or [BindingType::Production], never members injection
    pub fn binding_type(&self) -> BindingType {
        self.binding_type
    }

    pub fn scope(&self) -> Option<&Scope> {
        self.scope.as_ref()
    }
}

impl HasContributionType for ContributionBinding {
    fn contribution_type(&self) -> ContributionType {
        self.contribution_type
    }
}

/// A binding that injects the fields and methods of an already-constructed instance
/// of the key's type, as opposed to providing a new instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MembersInjectionBinding {
    key: Key,
}

impl MembersInjectionBinding {
    pub fn new(key: Key) -> Self {
        MembersInjectionBinding { key }
    }

    pub fn key(&self) -> &Key {
        &self.key
    }

    pub fn binding_type(&self) -> BindingType {
        BindingType::MembersInjection
    }
}

/// A borrowed view over either binding kind, so queries that range over "all bindings"
/// can return contribution and members-injection bindings uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingRef<'a> {
    Contribution(&'a ContributionBinding),
    MembersInjection(&'a MembersInjectionBinding),
}

impl<'a> BindingRef<'a> {
    pub fn key(&self) -> &'a Key {
        match self {
            BindingRef::Contribution(binding) => binding.key(),
            BindingRef::MembersInjection(binding) => binding.key(),
        }
    }

    pub fn binding_type(&self) -> BindingType {
        match self {
            BindingRef::Contribution(binding) => binding.binding_type(),
            BindingRef::MembersInjection(binding) => binding.binding_type(),
        }
    }

    /// The binding's scope annotation. Members-injection bindings are never scoped.
    pub fn scope(&self) -> Option<&'a Scope> {
        match self {
            BindingRef::Contribution(binding) => binding.scope(),
            BindingRef::MembersInjection(_) => None,
        }
    }

    /// The contribution binding, if this is one
    pub fn as_contribution(&self) -> Option<&'a ContributionBinding> {
        match self {
            BindingRef::Contribution(binding) => Some(binding),
            BindingRef::MembersInjection(_) => None,
        }
    }
}
