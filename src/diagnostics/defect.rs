use thiserror::Error;

use crate::model::{BindingType, ComponentPath, Key};

/// A violated usage contract or construction invariant.
///
/// Defects are programming errors in the caller (usually the upstream resolver), not
/// recoverable runtime conditions: a query was called on an aggregate that does not
/// satisfy its precondition, or a factory was fed inconsistent resolution results.
/// Raising one aborts via [Defect::raise]; returning a default instead would silently
/// turn into wrong generated wiring code. There is no other error class in this crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Defect {
    #[error("expected exactly one {what} for {key}, found {found}")]
    NotExactlyOne { what: &'static str, key: Key, found: usize },
    #[error("empty bindings for {key}")]
    EmptyBindings { key: Key },
    #[error("conflicting binding types for {key}: {types:?}")]
    ConflictingBindingTypes { key: Key, types: Vec<BindingType> },
    #[error("binding is not resolved for {key}: {binding}")]
    UnownedBinding { key: Key, binding: String },
    #[error("binding owned by both {first_owner} and {second_owner}: {binding}")]
    DoublyOwnedBinding { binding: String, first_owner: ComponentPath, second_owner: ComponentPath },
    #[error("{owner} owns a binding for {key} but is not an ancestor of resolving component {resolving}")]
    ForeignOwner { key: Key, owner: ComponentPath, resolving: ComponentPath },
    #[error("{to} cannot inherit the resolution of {key}: binding owner {owner} is not one of its ancestors")]
    NotInheritable { key: Key, owner: ComponentPath, to: ComponentPath },
    #[error("binding for {found} cannot satisfy a request for {expected}")]
    WrongKey { expected: Key, found: Key },
    #[error("multibinding declaration for {key} must be a set or map contribution")]
    NotAMultibinding { key: Key },
}

impl Defect {
    /// Log and abort. The panic message always starts with `defect: ` so tests can
    /// assert on the fatal path without matching unrelated panics.
    #[track_caller]
    pub fn raise(self) -> ! {
        log::error!("defect: {}", self);
        panic!("defect: {}", self)
    }
}

/// Construct a [Defect] variant and [raise](Defect::raise) it
#[macro_export]
macro_rules! defect {
    ($variant:ident { $($field:ident $(: $value:expr)?),* $(,)? }) => {
        $crate::diagnostics::Defect::$variant { $($field $(: $value)?),* }.raise()
    };
}

#[cfg(test)]
mod tests {
    use crate::model::Key;

    #[test]
    #[should_panic(expected = "defect: empty bindings for Foo")]
    fn raise_panics_with_defect_prefix() {
        crate::defect!(EmptyBindings { key: Key::new("Foo") });
    }
}
