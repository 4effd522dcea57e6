//! Frontend framework generators.
//!
//! React and Vue are Vite projects with optional Tailwind wiring. Angular is
//! a minimal skeleton meant to be finished with the Angular CLI. The
//! `frontend_architecture` folders are added by the port's provided
//! `generate`, not here.

mod angular;
mod react;
mod vue;

pub use angular::AngularGenerator;
pub use react::ReactGenerator;
pub use vue::VueGenerator;

use nexus_core::{
    domain::{CssTool, Manifest, ProjectConfig, ProjectStructure, RenderContext},
    error::NexusResult,
};

use super::render_into;

/// Frontend manifests are private and versioned separately from the backend.
pub(crate) fn frontend_manifest(config: &ProjectConfig, suffix: &str) -> Manifest {
    Manifest::new(format!("{}-{suffix}", config.project_name), "0.1.0").with_field("private", true)
}

/// Vite's three scripts, plus Tailwind dev dependencies when selected.
pub(crate) fn vite_manifest(manifest: Manifest, css: CssTool) -> Manifest {
    let manifest = manifest
        .with_script("dev", "vite")
        .with_script("build", "vite build")
        .with_script("preview", "vite preview")
        .with_dev_dependency("vite", "^5.0.0");

    match css {
        CssTool::Tailwind => manifest
            .with_dev_dependency("tailwindcss", "^3.4.0")
            .with_dev_dependency("postcss", "^8.4.35")
            .with_dev_dependency("autoprefixer", "^10.4.16"),
        CssTool::None => manifest,
    }
}

/// Context additions shared by the Vite generators.
pub(crate) fn vite_context(
    ctx: &RenderContext,
    config: &ProjectConfig,
    framework: &str,
) -> RenderContext {
    let tailwind = config.css_tool == CssTool::Tailwind;
    ctx.clone()
        .with_variable("FRAMEWORK", framework)
        .with_variable("CSS_IMPORT", if tailwind { "import './index.css'\n" } else { "" })
        .with_variable(
            "TAILWIND_NOTE",
            if tailwind { "Tailwind CSS is preconfigured.\n" } else { "" },
        )
}

/// README and `.gitignore` for a Vite project.
pub(crate) fn vite_common(ctx: &RenderContext) -> NexusResult<ProjectStructure> {
    let mut structure = ProjectStructure::new();
    render_into(&mut structure, ctx, "README.md", VITE_README)?;
    render_into(&mut structure, ctx, ".gitignore", GITIGNORE)?;
    Ok(structure)
}

/// Tailwind and PostCSS configs plus the stylesheet `main` imports.
pub(crate) fn tailwind_files(
    structure: &mut ProjectStructure,
    ctx: &RenderContext,
    content_glob: &str,
) -> NexusResult<()> {
    let ctx = ctx.clone().with_variable("CONTENT_GLOB", content_glob);
    render_into(structure, &ctx, "tailwind.config.js", TAILWIND_CONFIG)?;
    render_into(structure, &ctx, "postcss.config.js", POSTCSS_CONFIG)?;
    render_into(structure, &ctx, "src/index.css", INDEX_CSS)?;
    Ok(())
}

pub(crate) const GITIGNORE: &str = "node_modules
dist
.vite
.DS_Store
Thumbs.db
";

const VITE_README: &str = "# {{PROJECT_NAME}} ({{FRAMEWORK}})

- Dev: {{PACKAGE_MANAGER}} run dev
- Build: {{PACKAGE_MANAGER}} run build
- Preview: {{PACKAGE_MANAGER}} run preview

{{TAILWIND_NOTE}}";

const TAILWIND_CONFIG: &str = "/** @type {import('tailwindcss').Config} */
export default {
  content: ['./index.html', '{{CONTENT_GLOB}}'],
  theme: { extend: {} },
  plugins: [],
};
";

const POSTCSS_CONFIG: &str = "export default {
  plugins: {
    tailwindcss: {},
    autoprefixer: {},
  },
}
";

const INDEX_CSS: &str = "@tailwind base;
@tailwind components;
@tailwind utilities;
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tailwind_adds_three_dev_dependencies() {
        let base = Manifest::new("x", "0.1.0");
        let plain = vite_manifest(base.clone(), CssTool::None);
        let styled = vite_manifest(base, CssTool::Tailwind);

        assert!(!plain.dev_dependencies.contains_key("tailwindcss"));
        assert_eq!(styled.dev_dependencies["tailwindcss"], "^3.4.0");
        assert_eq!(styled.dev_dependencies["postcss"], "^8.4.35");
        assert_eq!(styled.dev_dependencies["autoprefixer"], "^10.4.16");
        assert_eq!(styled.scripts.len(), 3);
    }

    #[test]
    fn manifest_name_is_suffixed() {
        let config = ProjectConfig {
            project_name: "shop".into(),
            ..ProjectConfig::default()
        };
        assert_eq!(frontend_manifest(&config, "vue").name, "shop-vue");
    }
}
