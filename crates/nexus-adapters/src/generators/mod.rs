//! Built-in generators.
//!
//! Three backend architecture strategies (MVC, Clean, Hexagonal) and three
//! frontend generators (React, Vue, Angular). File bodies are `{{VAR}}`
//! templates rendered through [`RenderContext`].

pub mod backend;
pub mod frontend;

use std::sync::Arc;

use tracing::{debug, trace};

use nexus_core::{
    application::{ArchitectureRegistry, FrontendCatalog},
    domain::{ProjectStructure, RelativePath, RenderContext},
    error::NexusResult,
};

pub use backend::{CleanStrategy, HexagonalStrategy, MvcStrategy};
pub use frontend::{AngularGenerator, ReactGenerator, VueGenerator};

/// Registry with every built-in architecture, plus the `hexa` alias.
pub fn builtin_registry() -> ArchitectureRegistry {
    let mut registry = ArchitectureRegistry::new();
    registry.register("mvc", Arc::new(MvcStrategy));
    registry.register("clean", Arc::new(CleanStrategy));
    registry.register("hexagonal", Arc::new(HexagonalStrategy));
    registry.alias("hexa", "hexagonal");
    debug!(architectures = registry.len(), "Built-in architectures registered");
    registry
}

/// Catalog with every built-in frontend generator.
pub fn builtin_frontends() -> FrontendCatalog {
    let mut catalog = FrontendCatalog::new();
    catalog.register(Arc::new(ReactGenerator));
    catalog.register(Arc::new(VueGenerator));
    catalog.register(Arc::new(AngularGenerator));
    catalog
}

/// Render `template` and queue it at `path`.
pub(crate) fn render_into(
    structure: &mut ProjectStructure,
    ctx: &RenderContext,
    path: &str,
    template: &str,
) -> NexusResult<()> {
    trace!(path, "Rendering template");
    structure.add_file(RelativePath::try_new(path)?, ctx.render(template));
    Ok(())
}
