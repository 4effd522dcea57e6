use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::value_objects::Database;

/// Prefix applied to every script folded in from a nested manifest.
pub const NESTED_SCRIPT_NAMESPACE: &str = "frontend";

/// A `package.json`-equivalent dependency manifest.
///
/// Keys the generators do not model (`main`, `engines`, `keywords`, ...) are
/// kept in `extra` so a manifest survives a read/write cycle untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub scripts: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub dependencies: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub dev_dependencies: BTreeMap<String, String>,
}

impl Manifest {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            ..Self::default()
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn with_script(mut self, name: impl Into<String>, command: impl Into<String>) -> Self {
        self.scripts.insert(name.into(), command.into());
        self
    }

    pub fn with_dependency(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.dependencies.insert(name.into(), version.into());
        self
    }

    pub fn with_dev_dependency(
        mut self,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        self.dev_dependencies.insert(name.into(), version.into());
        self
    }

    /// Add the driver package for `database`; no-op for `none`.
    pub fn inject_database_driver(&mut self, database: Database) -> bool {
        match database.driver() {
            Some((package, version)) => {
                self.dependencies.insert(package.into(), version.into());
                true
            }
            None => false,
        }
    }

    /// Two-space indented JSON with a trailing newline, as npm writes it.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self).map(|mut s| {
            s.push('\n');
            s
        })
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

// ============================================================================
// Merging
// ============================================================================

/// Which map a collision happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestSection {
    Dependencies,
    DevDependencies,
    Scripts,
}

impl ManifestSection {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dependencies => "dependencies",
            Self::DevDependencies => "devDependencies",
            Self::Scripts => "scripts",
        }
    }
}

/// A key present in both manifests with different values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub section: ManifestSection,
    pub key: String,
    pub root_value: String,
    pub nested_value: String,
}

/// Merged manifest plus every collision that was resolved in favour of the
/// nested manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeReport {
    pub manifest: Manifest,
    pub collisions: Vec<Collision>,
}

/// Fold a nested (frontend) manifest into a root manifest.
///
/// Dependencies merge key-wise and the nested value wins. Nested scripts are
/// renamed to `frontend:<name>`, so the root's own scripts are never
/// replaced. Root identity fields (`name`, `version`, `extra`) are kept.
pub fn merge(root: Manifest, nested: &Manifest) -> MergeReport {
    let mut manifest = root;
    let mut collisions = Vec::new();

    merge_map(
        &mut manifest.dependencies,
        nested.dependencies.iter().map(|(k, v)| (k.clone(), v)),
        ManifestSection::Dependencies,
        &mut collisions,
    );
    merge_map(
        &mut manifest.dev_dependencies,
        nested.dev_dependencies.iter().map(|(k, v)| (k.clone(), v)),
        ManifestSection::DevDependencies,
        &mut collisions,
    );
    merge_map(
        &mut manifest.scripts,
        nested
            .scripts
            .iter()
            .map(|(k, v)| (format!("{NESTED_SCRIPT_NAMESPACE}:{k}"), v)),
        ManifestSection::Scripts,
        &mut collisions,
    );

    MergeReport {
        manifest,
        collisions,
    }
}

fn merge_map<'a>(
    target: &mut BTreeMap<String, String>,
    incoming: impl Iterator<Item = (String, &'a String)>,
    section: ManifestSection,
    collisions: &mut Vec<Collision>,
) {
    for (key, value) in incoming {
        let Some(previous) = target.insert(key.clone(), value.clone()) else {
            continue;
        };
        if previous != *value {
            collisions.push(Collision {
                section,
                key,
                root_value: previous,
                nested_value: value.clone(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_unions_dependencies_and_namespaces_scripts() {
        let root = Manifest::default()
            .with_dependency("a", "1")
            .with_script("dev", "x");
        let nested = Manifest::default()
            .with_dependency("b", "2")
            .with_script("dev", "y");

        let report = merge(root, &nested);

        let deps: Vec<_> = report.manifest.dependencies.iter().collect();
        assert_eq!(
            deps,
            vec![(&"a".to_string(), &"1".to_string()), (&"b".to_string(), &"2".to_string())]
        );
        assert_eq!(report.manifest.scripts.get("dev").map(String::as_str), Some("x"));
        assert_eq!(
            report.manifest.scripts.get("frontend:dev").map(String::as_str),
            Some("y")
        );
        assert!(report.collisions.is_empty());
    }

    #[test]
    fn nested_wins_on_dependency_collision_and_is_reported() {
        let root = Manifest::default().with_dev_dependency("vite", "^4.0.0");
        let nested = Manifest::default().with_dev_dependency("vite", "^5.0.0");

        let report = merge(root, &nested);

        assert_eq!(report.manifest.dev_dependencies["vite"], "^5.0.0");
        assert_eq!(report.collisions.len(), 1);
        assert_eq!(report.collisions[0].section, ManifestSection::DevDependencies);
        assert_eq!(report.collisions[0].root_value, "^4.0.0");
    }

    #[test]
    fn identical_values_are_not_collisions() {
        let root = Manifest::default().with_dependency("dotenv", "^16.3.1");
        let nested = Manifest::default().with_dependency("dotenv", "^16.3.1");
        assert!(merge(root, &nested).collisions.is_empty());
    }

    #[test]
    fn root_identity_is_preserved() {
        let root = Manifest::new("shop", "1.0.0").with_field("main", "src/server.js");
        let nested = Manifest::new("shop-frontend", "0.0.0").with_field("type", "module");

        let merged = merge(root, &nested).manifest;
        assert_eq!(merged.name, "shop");
        assert_eq!(merged.extra.get("main"), Some(&Value::from("src/server.js")));
        assert!(!merged.extra.contains_key("type"));
    }

    #[test]
    fn database_driver_injection() {
        let mut m = Manifest::default();
        assert!(m.inject_database_driver(Database::Postgres));
        assert_eq!(m.dependencies["pg"], "^8.11.0");

        let mut m = Manifest::default();
        assert!(!m.inject_database_driver(Database::None));
        assert!(m.dependencies.is_empty());
    }

    #[test]
    fn serializes_camel_case_and_reads_back() {
        let m = Manifest::new("shop", "1.0.0")
            .with_field("main", "src/server.js")
            .with_dev_dependency("jest", "^29.7.0");

        let json = m.to_json_pretty().unwrap();
        assert!(json.contains("\"devDependencies\""));
        assert!(json.ends_with('\n'));
        assert!(!json.contains("\"scripts\""));

        assert_eq!(Manifest::from_json(&json).unwrap(), m);
    }
}
