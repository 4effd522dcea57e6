//! Per-flag provenance: where a configuration value came from.
//!
//! Only [`Provenance::Explicit`] values take part in the direct-mode decision.
//! A value the tool filled in itself (`Default`) must behave exactly as if the
//! flag had been omitted.

use std::collections::HashMap;
use std::fmt;

/// Three-valued origin of a raw option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Provenance {
    /// Typed on the invocation surface (command line or interactive answer).
    Explicit,
    /// Filled from a tool default, environment or config file.
    Default,
    /// Not supplied at all.
    #[default]
    Absent,
}

impl Provenance {
    pub const fn is_explicit(self) -> bool {
        matches!(self, Self::Explicit)
    }
}

/// Names of every raw option the resolver understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagName {
    Model,
    Type,
    Frontend,
    Css,
    FrontendArchitecture,
    Backend,
    Database,
    Name,
    Description,
    Author,
    PackageManager,
    Directory,
}

impl FlagName {
    /// Flags whose explicit presence selects direct mode.
    pub const V2_SURFACE: [Self; 4] = [Self::Type, Self::Frontend, Self::Backend, Self::Database];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Type => "type",
            Self::Frontend => "frontend",
            Self::Css => "css",
            Self::FrontendArchitecture => "frontend-architecture",
            Self::Backend => "backend",
            Self::Database => "database",
            Self::Name => "name",
            Self::Description => "description",
            Self::Author => "author",
            Self::PackageManager => "package-manager",
            Self::Directory => "directory",
        }
    }
}

impl fmt::Display for FlagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Provenance of every flag; unknown entries read as [`Provenance::Absent`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagProvenance(HashMap<FlagName, Provenance>);

impl FlagProvenance {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, flag: FlagName, provenance: Provenance) {
        self.0.insert(flag, provenance);
    }

    pub fn with(mut self, flag: FlagName, provenance: Provenance) -> Self {
        self.set(flag, provenance);
        self
    }

    pub fn get(&self, flag: FlagName) -> Provenance {
        self.0.get(&flag).copied().unwrap_or_default()
    }

    pub fn is_explicit(&self, flag: FlagName) -> bool {
        self.get(flag).is_explicit()
    }

    /// True when any v2-surface flag was typed by the user.
    pub fn any_v2_explicit(&self) -> bool {
        FlagName::V2_SURFACE.iter().any(|f| self.is_explicit(*f))
    }
}

/// A raw flag value together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flag<T> {
    pub value: Option<T>,
    pub provenance: Provenance,
}

impl<T> Flag<T> {
    pub fn explicit(value: T) -> Self {
        Self {
            value: Some(value),
            provenance: Provenance::Explicit,
        }
    }

    pub fn defaulted(value: T) -> Self {
        Self {
            value: Some(value),
            provenance: Provenance::Default,
        }
    }

    pub fn absent() -> Self {
        Self {
            value: None,
            provenance: Provenance::Absent,
        }
    }

    /// The value only if the caller actually typed it.
    pub fn explicit_value(&self) -> Option<&T> {
        if self.provenance.is_explicit() {
            self.value.as_ref()
        } else {
            None
        }
    }
}

impl<T> Default for Flag<T> {
    fn default() -> Self {
        Self::absent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_flag_defaults_to_absent() {
        let p = FlagProvenance::new();
        assert_eq!(p.get(FlagName::Database), Provenance::Absent);
        assert!(!p.is_explicit(FlagName::Database));
    }

    #[test]
    fn defaulted_v2_flag_does_not_count() {
        let p = FlagProvenance::new().with(FlagName::Database, Provenance::Default);
        assert!(!p.any_v2_explicit());

        let p = p.with(FlagName::Database, Provenance::Explicit);
        assert!(p.any_v2_explicit());
    }

    #[test]
    fn css_is_not_part_of_v2_surface() {
        let p = FlagProvenance::new().with(FlagName::Css, Provenance::Explicit);
        assert!(!p.any_v2_explicit());
    }

    #[test]
    fn explicit_value_hides_defaults() {
        assert_eq!(Flag::defaulted("none").explicit_value(), None);
        assert_eq!(Flag::explicit("pg").explicit_value(), Some(&"pg"));
        assert_eq!(Flag::<String>::absent().explicit_value(), None);
    }
}
