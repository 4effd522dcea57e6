use nexus_core::{
    application::ports::FrontendGenerator,
    domain::{CssTool, FrontendFramework, Manifest, ProjectConfig, ProjectStructure, RenderContext},
    error::NexusResult,
};

use super::{frontend_manifest, tailwind_files, vite_common, vite_context, vite_manifest};
use crate::generators::render_into;

#[derive(Debug, Clone, Copy, Default)]
pub struct VueGenerator;

impl FrontendGenerator for VueGenerator {
    fn framework(&self) -> FrontendFramework {
        FrontendFramework::Vue
    }

    fn display_name(&self) -> &'static str {
        "Vue"
    }

    fn manifest(&self, config: &ProjectConfig) -> Manifest {
        let manifest = frontend_manifest(config, "vue")
            .with_dependency("vue", "^3.4.0")
            .with_dev_dependency("@vitejs/plugin-vue", "^5.0.0");
        vite_manifest(manifest, config.css_tool)
    }

    fn files(&self, config: &ProjectConfig, ctx: &RenderContext) -> NexusResult<ProjectStructure> {
        let ctx = vite_context(ctx, config, "Vue");

        let mut structure = vite_common(&ctx)?;
        render_into(&mut structure, &ctx, "index.html", INDEX_HTML)?;
        render_into(&mut structure, &ctx, "vite.config.js", VITE_CONFIG)?;
        render_into(&mut structure, &ctx, "src/App.vue", APP_VUE)?;
        render_into(&mut structure, &ctx, "src/main.js", MAIN_JS)?;
        if config.css_tool == CssTool::Tailwind {
            tailwind_files(&mut structure, &ctx, "./src/**/*.{js,ts,jsx,tsx,vue}")?;
        }
        Ok(structure)
    }
}

const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{{PROJECT_NAME}} - Vue</title>
  </head>
  <body>
    <div id="app"></div>
    <script type="module" src="/src/main.js"></script>
  </body>
</html>
"#;

const VITE_CONFIG: &str = "import { defineConfig } from 'vite';
import vue from '@vitejs/plugin-vue';

export default defineConfig({
  plugins: [vue()],
});
";

const APP_VUE: &str = r#"<template>
  <div class="min-h-screen flex items-center justify-center p-8">
    <div>
      <h1 class="text-2xl font-bold">{{PROJECT_NAME}} - Vue</h1>
      <p class="mt-2 text-gray-600">Generated with Nexus CLI</p>
    </div>
  </div>
</template>

<script setup>
</script>
"#;

const MAIN_JS: &str = "{{CSS_IMPORT}}import { createApp } from 'vue'
import App from './App.vue'

createApp(App).mount('#app')
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tailwind_glob_includes_vue_files() {
        let config = ProjectConfig {
            frontend_framework: Some(FrontendFramework::Vue),
            css_tool: CssTool::Tailwind,
            ..ProjectConfig::default()
        };
        let structure = VueGenerator
            .files(&config, &RenderContext::from_config(&config))
            .unwrap();

        let tailwind = structure
            .files()
            .find(|f| f.path.to_string() == "tailwind.config.js")
            .unwrap();
        assert!(tailwind.content.contains("tsx,vue}"));

        let main = structure
            .files()
            .find(|f| f.path.to_string() == "src/main.js")
            .unwrap();
        assert!(main.content.starts_with("import './index.css'"));
    }
}
