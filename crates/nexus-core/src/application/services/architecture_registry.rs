//! Architecture Registry - lookup from architecture name to strategy.
//!
//! Aliasing is explicit: an alias resolves to a canonical name first, then a
//! single-key lookup finds the strategy. The registry therefore never stores
//! a strategy under more than one key, and `hexa`/`hexagonal` share one
//! `Arc` instance by construction.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use crate::application::ports::{ArchitectureStrategy, StrategyDescriptor};

/// One registered strategy as shown by listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistryEntry {
    #[serde(flatten)]
    pub descriptor: StrategyDescriptor,
    pub aliases: Vec<String>,
}

#[derive(Default)]
pub struct ArchitectureRegistry {
    /// Canonical names in registration order.
    order: Vec<String>,
    strategies: HashMap<String, Arc<dyn ArchitectureStrategy>>,
    /// alias -> canonical name
    aliases: HashMap<String, String>,
}

impl ArchitectureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a strategy under its canonical name (case-insensitive).
    ///
    /// Re-registering a name replaces the previous strategy.
    pub fn register(&mut self, name: &str, strategy: Arc<dyn ArchitectureStrategy>) {
        let key = normalise(name);
        if self.strategies.insert(key.clone(), strategy).is_none() {
            self.order.push(key);
        }
    }

    /// Make `alias` resolve to an already registered canonical name.
    ///
    /// Returns `false` (and changes nothing) if `canonical` is unknown.
    pub fn alias(&mut self, alias: &str, canonical: &str) -> bool {
        let canonical = normalise(canonical);
        if !self.strategies.contains_key(&canonical) {
            return false;
        }
        self.aliases.insert(normalise(alias), canonical);
        true
    }

    /// Canonical name for `name`, following one alias hop.
    pub fn canonical_name(&self, name: &str) -> Option<&str> {
        let key = normalise(name);
        let canonical = self.aliases.get(&key).unwrap_or(&key);
        self.strategies
            .get_key_value(canonical)
            .map(|(k, _)| k.as_str())
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn ArchitectureStrategy>> {
        let canonical = self.canonical_name(name)?;
        self.strategies.get(canonical).cloned()
    }

    pub fn has(&self, name: &str) -> bool {
        self.canonical_name(name).is_some()
    }

    /// Every canonical strategy with its aliases, in registration order.
    pub fn list(&self) -> Vec<RegistryEntry> {
        self.order
            .iter()
            .filter_map(|name| {
                let strategy = self.strategies.get(name)?;
                let mut aliases: Vec<String> = self
                    .aliases
                    .iter()
                    .filter(|(_, target)| *target == name)
                    .map(|(alias, _)| alias.clone())
                    .collect();
                aliases.sort();
                Some(RegistryEntry {
                    descriptor: strategy.descriptor(),
                    aliases,
                })
            })
            .collect()
    }

    /// Canonical names followed by aliases, for error messages.
    pub fn accepted_names(&self) -> Vec<String> {
        let mut aliases: Vec<String> = self.aliases.keys().cloned().collect();
        aliases.sort();
        self.order.iter().cloned().chain(aliases).collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl std::fmt::Debug for ArchitectureRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArchitectureRegistry")
            .field("strategies", &self.order)
            .field("aliases", &self.aliases)
            .finish()
    }
}

fn normalise(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockArchitectureStrategy;

    fn strategy(name: &'static str) -> Arc<dyn ArchitectureStrategy> {
        let mut mock = MockArchitectureStrategy::new();
        mock.expect_descriptor().returning(move || StrategyDescriptor {
            name,
            display_name: name,
            description: "test strategy",
            features: &[],
        });
        Arc::new(mock)
    }

    fn registry() -> ArchitectureRegistry {
        let mut r = ArchitectureRegistry::new();
        r.register("mvc", strategy("mvc"));
        r.register("clean", strategy("clean"));
        r.register("hexagonal", strategy("hexagonal"));
        assert!(r.alias("hexa", "hexagonal"));
        r
    }

    #[test]
    fn lookup_is_case_insensitive_for_every_name() {
        let r = registry();
        for name in ["mvc", "MVC", "Clean", "hexa", "HEXA", "hexagonal", "HexaGonal"] {
            assert!(r.get(name).is_some(), "{name} should resolve");
            assert!(r.has(name));
        }
    }

    #[test]
    fn alias_and_canonical_share_one_instance() {
        let r = registry();
        let a = r.get("hexa").unwrap();
        let b = r.get("hexagonal").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(r.canonical_name("HEXA"), Some("hexagonal"));
    }

    #[test]
    fn unknown_names_are_absent_not_errors() {
        let r = registry();
        assert!(r.get("onion").is_none());
        assert!(!r.has("onion"));
        assert_eq!(r.canonical_name("onion"), None);
    }

    #[test]
    fn alias_to_unknown_canonical_is_refused() {
        let mut r = registry();
        assert!(!r.alias("ports", "onion"));
        assert!(!r.has("ports"));
    }

    #[test]
    fn list_keeps_registration_order_and_aliases() {
        let r = registry();
        let entries = r.list();
        let names: Vec<_> = entries.iter().map(|e| e.descriptor.name).collect();
        assert_eq!(names, vec!["mvc", "clean", "hexagonal"]);
        assert_eq!(entries[2].aliases, vec!["hexa".to_string()]);
        assert!(entries[0].aliases.is_empty());
        assert_eq!(r.accepted_names(), vec!["mvc", "clean", "hexagonal", "hexa"]);
    }
}
