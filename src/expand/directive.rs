//! Directives and the registry that resolves them by name.

use super::error::ExpandError;
use super::generators;
use super::sink::OutputSink;
use std::collections::BTreeMap;
use std::fmt;

/// Maximum number of non-static data members, in `1..=255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Limit(u8);

impl Limit {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = u8::MAX;

    /// Returns `None` for zero.
    pub fn new(value: u8) -> Option<Self> {
        (value >= Self::MIN).then_some(Self(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u32> for Limit {
    type Error = u32;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(Limit::new)
            .ok_or(value)
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The fixed set of built-in directives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// `(@limit@)`: the limit as a decimal number.
    Limit,
    /// `(@generate_specializations@)`: one branch per arity.
    Specializations,
}

impl Directive {
    pub const ALL: [Directive; 2] = [Directive::Limit, Directive::Specializations];

    /// Name used inside a marker.
    pub fn name(self) -> &'static str {
        match self {
            Directive::Limit => "limit",
            Directive::Specializations => "generate_specializations",
        }
    }

    /// Run the generator, writing its lines to `sink`.
    pub fn run(self, limit: Option<Limit>, sink: &mut OutputSink) -> Result<(), ExpandError> {
        let limit = limit.ok_or(ExpandError::MissingParameter {
            directive: self.name(),
        })?;

        match self {
            Directive::Limit => generators::emit_limit(limit, sink),
            Directive::Specializations => generators::emit_specializations(limit, sink),
        }
        Ok(())
    }
}

/// Immutable mapping from directive name to directive.
#[derive(Debug, Clone)]
pub struct DirectiveRegistry {
    entries: BTreeMap<&'static str, Directive>,
}

impl DirectiveRegistry {
    /// Registry holding every built-in directive.
    pub fn builtin() -> Self {
        let entries = Directive::ALL.iter().map(|d| (d.name(), *d)).collect();
        Self { entries }
    }

    /// Look up a directive by the name found between the marker tokens.
    pub fn resolve(&self, name: &str) -> Option<Directive> {
        self.entries.get(name).copied()
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }
}

impl Default for DirectiveRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_bounds() {
        assert_eq!(Limit::new(0), None);
        assert_eq!(Limit::new(1).map(Limit::get), Some(1));
        assert_eq!(Limit::new(255).map(Limit::get), Some(255));
    }

    #[test]
    fn test_limit_try_from_u32() {
        assert_eq!(Limit::try_from(7u32).map(Limit::get), Ok(7));
        assert_eq!(Limit::try_from(0u32), Err(0));
        assert_eq!(Limit::try_from(256u32), Err(256));
    }

    #[test]
    fn test_registry_resolves_builtins() {
        let registry = DirectiveRegistry::builtin();
        assert_eq!(registry.resolve("limit"), Some(Directive::Limit));
        assert_eq!(
            registry.resolve("generate_specializations"),
            Some(Directive::Specializations)
        );
    }

    #[test]
    fn test_registry_miss() {
        let registry = DirectiveRegistry::builtin();
        assert_eq!(registry.resolve("frobnicate"), None);
        assert_eq!(registry.resolve(""), None);
        assert_eq!(registry.resolve(" limit "), None);
        assert_eq!(registry.resolve("LIMIT"), None);
    }

    #[test]
    fn test_registry_names() {
        let names: Vec<_> = DirectiveRegistry::builtin().names().collect();
        assert_eq!(names, vec!["generate_specializations", "limit"]);
    }

    #[test]
    fn test_run_without_limit_fails() {
        for directive in Directive::ALL {
            let mut sink = OutputSink::new();
            let err = directive.run(None, &mut sink).unwrap_err();
            assert_eq!(
                err,
                ExpandError::MissingParameter {
                    directive: directive.name()
                }
            );
            assert_eq!(sink.writes(), 0);
        }
    }

    #[test]
    fn test_run_limit() {
        let mut sink = OutputSink::new();
        Directive::Limit.run(Limit::new(42), &mut sink).unwrap();
        assert_eq!(sink.into_string(), "42\n");
    }
}
