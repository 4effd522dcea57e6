use nexus_core::{
    application::ports::FrontendGenerator,
    domain::{FrontendFramework, Manifest, ProjectConfig, ProjectStructure, RenderContext},
    error::NexusResult,
};

use super::GITIGNORE;
use crate::generators::render_into;

/// Minimal Angular skeleton. The Angular CLI is expected to take over.
///
/// The CSS tool is ignored here.
#[derive(Debug, Clone, Copy, Default)]
pub struct AngularGenerator;

impl FrontendGenerator for AngularGenerator {
    fn framework(&self) -> FrontendFramework {
        FrontendFramework::Angular
    }

    fn display_name(&self) -> &'static str {
        "Angular"
    }

    fn manifest(&self, config: &ProjectConfig) -> Manifest {
        super::frontend_manifest(config, "angular")
            .with_script("start", "echo \"Set up the Angular CLI (ng) to start\"")
    }

    fn files(&self, _config: &ProjectConfig, ctx: &RenderContext) -> NexusResult<ProjectStructure> {
        let mut structure = ProjectStructure::new();
        render_into(&mut structure, ctx, "README.md", README)?;
        render_into(&mut structure, ctx, ".gitignore", GITIGNORE)?;
        render_into(&mut structure, ctx, "src/index.html", INDEX_HTML)?;
        Ok(structure)
    }
}

const README: &str = "# {{PROJECT_NAME}} (Angular)

This minimal skeleton needs the Angular CLI to be installed and initialised.
";

const INDEX_HTML: &str = r#"<!doctype html>
<html>
  <head>
    <meta charset="utf-8">
    <title>{{PROJECT_NAME}} - Angular</title>
  </head>
  <body>
    <app-root>Angular app</app-root>
  </body>
</html>
"#;
