use nexus_core::{
    application::ports::FrontendGenerator,
    domain::{CssTool, FrontendFramework, Manifest, ProjectConfig, ProjectStructure, RenderContext},
    error::NexusResult,
};

use super::{frontend_manifest, tailwind_files, vite_common, vite_context, vite_manifest};
use crate::generators::render_into;

#[derive(Debug, Clone, Copy, Default)]
pub struct ReactGenerator;

impl FrontendGenerator for ReactGenerator {
    fn framework(&self) -> FrontendFramework {
        FrontendFramework::React
    }

    fn display_name(&self) -> &'static str {
        "React"
    }

    fn manifest(&self, config: &ProjectConfig) -> Manifest {
        let manifest = frontend_manifest(config, "react")
            .with_dependency("react", "^18.2.0")
            .with_dependency("react-dom", "^18.2.0")
            .with_dev_dependency("@vitejs/plugin-react", "^4.2.0");
        vite_manifest(manifest, config.css_tool)
    }

    fn files(&self, config: &ProjectConfig, ctx: &RenderContext) -> NexusResult<ProjectStructure> {
        let ctx = vite_context(ctx, config, "React");

        let mut structure = vite_common(&ctx)?;
        render_into(&mut structure, &ctx, "index.html", INDEX_HTML)?;
        render_into(&mut structure, &ctx, "vite.config.js", VITE_CONFIG)?;
        render_into(&mut structure, &ctx, "src/App.jsx", APP_JSX)?;
        render_into(&mut structure, &ctx, "src/main.jsx", MAIN_JSX)?;
        if config.css_tool == CssTool::Tailwind {
            tailwind_files(&mut structure, &ctx, "./src/**/*.{js,ts,jsx,tsx}")?;
        }
        Ok(structure)
    }
}

const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{{PROJECT_NAME}} - React</title>
  </head>
  <body>
    <div id="root"></div>
    <script type="module" src="/src/main.jsx"></script>
  </body>
</html>
"#;

const VITE_CONFIG: &str = "import { defineConfig } from 'vite';
import react from '@vitejs/plugin-react';

export default defineConfig({
  plugins: [react()],
});
";

const APP_JSX: &str = r#"export function App() {
  return (
    <div className="min-h-screen flex items-center justify-center p-8">
      <div>
        <h1 className="text-2xl font-bold">{{PROJECT_NAME}} - React</h1>
        <p className="mt-2 text-gray-600">Generated with Nexus CLI</p>
      </div>
    </div>
  );
}
"#;

const MAIN_JSX: &str = "import React from 'react'
import ReactDOM from 'react-dom/client'
{{CSS_IMPORT}}import { App } from './App'

ReactDOM.createRoot(document.getElementById('root')).render(
  <React.StrictMode>
    <App />
  </React.StrictMode>
)
";

#[cfg(test)]
mod tests {
    use super::*;

    fn config(css: CssTool) -> ProjectConfig {
        ProjectConfig {
            project_name: "shop".into(),
            frontend_framework: Some(FrontendFramework::React),
            css_tool: css,
            ..ProjectConfig::default()
        }
    }

    fn paths(structure: &ProjectStructure) -> Vec<String> {
        structure.files().map(|f| f.path.to_string()).collect()
    }

    #[test]
    fn plain_project_has_no_tailwind_files() {
        let config = config(CssTool::None);
        let structure = ReactGenerator
            .files(&config, &RenderContext::from_config(&config))
            .unwrap();

        let paths = paths(&structure);
        assert!(paths.contains(&"src/main.jsx".to_string()));
        assert!(!paths.contains(&"tailwind.config.js".to_string()));

        let main = structure
            .files()
            .find(|f| f.path.to_string() == "src/main.jsx")
            .unwrap();
        assert!(!main.content.contains("index.css"));
    }

    #[test]
    fn tailwind_project_imports_stylesheet() {
        let config = config(CssTool::Tailwind);
        let structure = ReactGenerator
            .files(&config, &RenderContext::from_config(&config))
            .unwrap();

        let paths = paths(&structure);
        assert!(paths.contains(&"tailwind.config.js".to_string()));
        assert!(paths.contains(&"postcss.config.js".to_string()));
        assert!(paths.contains(&"src/index.css".to_string()));

        let main = structure
            .files()
            .find(|f| f.path.to_string() == "src/main.jsx")
            .unwrap();
        assert!(main.content.contains("import './index.css'"));
    }

    #[test]
    fn manifest_is_vite_based() {
        let manifest = ReactGenerator.manifest(&config(CssTool::None));
        assert_eq!(manifest.name, "shop-react");
        assert_eq!(manifest.scripts["dev"], "vite");
        assert_eq!(manifest.dependencies["react"], "^18.2.0");
    }
}
