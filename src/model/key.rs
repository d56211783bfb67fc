use std::fmt::{self, Display, Formatter};

use smol_str::SmolStr;

/// The identity of a dependency request: a type, plus an optional qualifier which
/// distinguishes otherwise identical types (e.g. `@Named("db") String` vs plain `String`).
///
/// Keys are the unit of resolution: the resolver produces one
/// [ResolvedBindings](crate::resolution::ResolvedBindings) per key per component.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key {
    type_name: SmolStr,
    qualifier: Option<SmolStr>,
}

impl Key {
    /// Key for an unqualified type
    pub fn new(type_name: impl Into<SmolStr>) -> Self {
        Key { type_name: type_name.into(), qualifier: None }
    }

    /// Key for a qualified type
    pub fn qualified(type_name: impl Into<SmolStr>, qualifier: impl Into<SmolStr>) -> Self {
        Key { type_name: type_name.into(), qualifier: Some(qualifier.into()) }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn qualifier(&self) -> Option<&str> {
        self.qualifier.as_deref()
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.qualifier {
            Some(qualifier) => write!(f, "@{} {}", qualifier, self.type_name),
            None => write!(f, "{}", self.type_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::model::Key;

    #[test]
    fn display() {
        assert_eq!(Key::new("Foo").to_string(), "Foo");
        assert_eq!(Key::qualified("Foo", "Named(db)").to_string(), "@Named(db) Foo");
    }

    #[test]
    fn qualifier_distinguishes() {
        assert_ne!(Key::new("Foo"), Key::qualified("Foo", "Blue"));
        assert_eq!(Key::qualified("Foo", "Blue"), Key::qualified("Foo", "Blue"));
    }
}
