use std::collections::HashMap;

use chrono::Datelike;

use crate::domain::entities::project_config::ProjectConfig;

/// Context for generated file bodies.
///
/// A **Value Object** holding every `{{VARIABLE}}` a built-in generator may
/// reference. Immutable after creation; `with_variable` returns a new one.
///
/// ## Built-in Variables
///
/// | Variable | Example | Source |
/// |----------|---------|--------|
/// | `PROJECT_NAME` | "shop-api" | Resolved config |
/// | `PROJECT_NAME_SNAKE` | "shop_api" | Computed |
/// | `PROJECT_NAME_PASCAL` | "ShopApi" | Computed |
/// | `DESCRIPTION` | "Node.js project..." | Resolved config |
/// | `AUTHOR` | "Nexus Developer" | Resolved config |
/// | `PACKAGE_MANAGER` | "npm" | Resolved config |
/// | `YEAR` | "2026" | System clock |
#[derive(Debug, Clone)]
pub struct RenderContext {
    project_name: String,
    variables: HashMap<String, String>,
}

impl RenderContext {
    /// Create a context for a bare project name, deriving casing variants.
    pub fn new(project_name: impl Into<String>) -> Self {
        let name = project_name.into();
        let mut vars = HashMap::new();

        vars.insert("PROJECT_NAME".to_string(), name.clone());
        vars.insert("PROJECT_NAME_SNAKE".to_string(), to_snake_case(&name));
        vars.insert("PROJECT_NAME_PASCAL".to_string(), to_pascal_case(&name));
        vars.insert("YEAR".to_string(), chrono::Local::now().year().to_string());

        Self {
            project_name: name,
            variables: vars,
        }
    }

    /// Context carrying all metadata of a resolved configuration.
    pub fn from_config(config: &ProjectConfig) -> Self {
        Self::new(&config.project_name)
            .with_variable("DESCRIPTION", &config.description)
            .with_variable("AUTHOR", &config.author)
            .with_variable("PACKAGE_MANAGER", config.package_manager.as_str())
    }

    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Replace every known `{{VARIABLE}}` placeholder.
    ///
    /// Unknown placeholders are left untouched, so JSX such as `{{ color }}`
    /// in generated components survives rendering. Substituted values are
    /// copied verbatim and never rendered again.
    pub fn render(&self, template: &str) -> String {
        let mut result = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            result.push_str(&rest[..start]);
            let tail = &rest[start + 2..];
            let value = tail
                .find("}}")
                .and_then(|end| self.variables.get(&tail[..end]).map(|v| (end, v)));
            match value {
                Some((end, v)) => {
                    result.push_str(v);
                    rest = &tail[end + 2..];
                }
                None => {
                    result.push('{');
                    rest = &rest[start + 1..];
                }
            }
        }

        result.push_str(rest);
        result
    }
}

// ============================================================================
// String Case Conversion Helpers
// ============================================================================

fn words(s: &str) -> impl Iterator<Item = &str> {
    s.split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|w| !w.is_empty())
}

fn to_snake_case(s: &str) -> String {
    words(s)
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

fn to_pascal_case(s: &str) -> String {
    words(s)
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}
