//! Backend architecture strategies.
//!
//! Every strategy emits the same Express skeleton (`src/app.js`,
//! `src/server.js`, README, `.gitignore`) and layers its own folders and base
//! classes on top.

mod clean;
mod hexagonal;
mod mvc;

pub use clean::CleanStrategy;
pub use hexagonal::HexagonalStrategy;
pub use mvc::MvcStrategy;

use serde_json::json;

use nexus_core::{
    domain::{Manifest, ProjectConfig, ProjectStructure, RenderContext},
    error::NexusResult,
};

use super::render_into;

/// Express manifest shared by every backend; `keywords` tag the style.
pub(crate) fn express_manifest(config: &ProjectConfig, keywords: &[&str]) -> Manifest {
    let mut all_keywords = vec!["nodejs", "express"];
    all_keywords.extend_from_slice(keywords);

    Manifest::new(&config.project_name, "1.0.0")
        .with_field("description", config.description.as_str())
        .with_field("main", "src/server.js")
        .with_field("keywords", json!(all_keywords))
        .with_field("author", config.author.as_str())
        .with_field("license", "MIT")
        .with_field("engines", json!({ "node": ">=16.0.0" }))
        .with_script("start", "node src/server.js")
        .with_script("dev", "nodemon src/server.js")
        .with_script("test", "jest")
        .with_dependency("express", "^4.18.2")
        .with_dependency("cors", "^2.8.5")
        .with_dependency("helmet", "^7.1.0")
        .with_dependency("morgan", "^1.10.0")
        .with_dependency("dotenv", "^16.3.1")
        .with_dev_dependency("nodemon", "^3.0.2")
        .with_dev_dependency("jest", "^29.7.0")
}

/// Files every backend gets. `routes_module` is what `app.js` mounts on `/api`.
pub(crate) fn express_skeleton(
    ctx: &RenderContext,
    architecture: &str,
    layout: &str,
    routes_module: &str,
) -> NexusResult<ProjectStructure> {
    let ctx = ctx
        .clone()
        .with_variable("ARCHITECTURE", architecture)
        .with_variable("LAYOUT", layout)
        .with_variable("ROUTES_MODULE", routes_module);

    let mut structure = ProjectStructure::new();
    render_into(&mut structure, &ctx, "README.md", README)?;
    render_into(&mut structure, &ctx, ".gitignore", GITIGNORE)?;
    render_into(&mut structure, &ctx, "src/app.js", APP_JS)?;
    render_into(&mut structure, &ctx, "src/server.js", SERVER_JS)?;
    Ok(structure)
}

const README: &str = r#"# {{PROJECT_NAME}}

{{DESCRIPTION}}

## Architecture

This project follows the **{{ARCHITECTURE}}** style on top of Express.

```
{{LAYOUT}}
```

## Getting started

```bash
{{PACKAGE_MANAGER}} install
cp .env.example .env
{{PACKAGE_MANAGER}} run dev
```

## Author

{{AUTHOR}}

---

Generated with Nexus CLI ({{YEAR}})
"#;

const GITIGNORE: &str = "# Dependencies
node_modules/
npm-debug.log*

# Environment variables
.env

# Logs
logs
*.log

# Coverage directory
coverage/

# IDE
.vscode/
.idea/

# OS
.DS_Store
Thumbs.db
";

const APP_JS: &str = r#"const express = require('express');
const cors = require('cors');
const helmet = require('helmet');
const morgan = require('morgan');
require('dotenv').config();

const routes = require('{{ROUTES_MODULE}}');

class {{PROJECT_NAME_PASCAL}}App {
  constructor() {
    this.app = express();
    this.port = process.env.PORT || 3000;
    this.setupMiddleware();
    this.setupRoutes();
  }

  setupMiddleware() {
    this.app.use(helmet());
    this.app.use(cors());
    this.app.use(morgan('combined'));
    this.app.use(express.json());
    this.app.use(express.urlencoded({ extended: true }));
  }

  setupRoutes() {
    this.app.use('/api', routes);

    this.app.get('/health', (req, res) => {
      res.status(200).json({ status: 'OK', timestamp: new Date().toISOString() });
    });
  }

  start() {
    this.app.listen(this.port, () => {
      console.log(`{{PROJECT_NAME}} listening on port ${this.port}`);
    });
  }
}

module.exports = {{PROJECT_NAME_PASCAL}}App;
"#;

const SERVER_JS: &str = "const {{PROJECT_NAME_PASCAL}}App = require('./app');

const app = new {{PROJECT_NAME_PASCAL}}App();
app.start();
";
