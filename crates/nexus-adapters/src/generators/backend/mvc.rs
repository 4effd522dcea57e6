use nexus_core::{
    application::ports::{ArchitectureStrategy, StrategyDescriptor},
    domain::{Manifest, ProjectConfig, ProjectStructure, RenderContext},
    error::NexusResult,
};

use super::{express_manifest, express_skeleton};
use crate::generators::render_into;

/// Model-View-Controller on Express.
#[derive(Debug, Clone, Copy, Default)]
pub struct MvcStrategy;

const DIRECTORIES: [&str; 6] = [
    "src/models",
    "src/controllers",
    "src/routes",
    "src/middleware",
    "src/config",
    "src/utils",
];

const LAYOUT: &str = "src/
├── controllers/   # request handlers
├── models/        # data models
├── routes/        # route definitions
├── middleware/    # custom middleware
├── utils/         # helpers
└── config/        # configuration";

impl ArchitectureStrategy for MvcStrategy {
    fn descriptor(&self) -> StrategyDescriptor {
        StrategyDescriptor {
            name: "mvc",
            display_name: "MVC (Model-View-Controller)",
            description: "Classic layering with a clear split of responsibilities",
            features: &[
                "Models/Views/Controllers separation",
                "Clear folder structure",
                "Express.js routing",
                "Centralised error handling",
            ],
        }
    }

    fn directories(&self) -> Vec<&'static str> {
        DIRECTORIES.to_vec()
    }

    fn manifest(&self, config: &ProjectConfig) -> Manifest {
        express_manifest(config, &["mvc", "api"])
    }

    fn files(&self, _config: &ProjectConfig, ctx: &RenderContext) -> NexusResult<ProjectStructure> {
        let mut structure = express_skeleton(ctx, "MVC (Model-View-Controller)", LAYOUT, "./routes")?;
        render_into(&mut structure, ctx, "src/routes/index.js", ROUTES_INDEX)?;
        render_into(
            &mut structure,
            ctx,
            "src/controllers/base.controller.js",
            BASE_CONTROLLER,
        )?;
        render_into(&mut structure, ctx, "src/models/base.model.js", BASE_MODEL)?;
        Ok(structure)
    }
}

const ROUTES_INDEX: &str = "const express = require('express');
const router = express.Router();

router.get('/', (req, res) => {
  res.json({ message: 'API {{PROJECT_NAME}} - MVC architecture' });
});

module.exports = router;
";

const BASE_CONTROLLER: &str = "class BaseController {
  success(res, data, message = 'OK', statusCode = 200) {
    return res.status(statusCode).json({
      success: true,
      message,
      data,
      timestamp: new Date().toISOString()
    });
  }

  error(res, message = 'Something went wrong', statusCode = 500) {
    return res.status(statusCode).json({
      success: false,
      message,
      timestamp: new Date().toISOString()
    });
  }
}

module.exports = BaseController;
";

const BASE_MODEL: &str = "class BaseModel {
  constructor() {
    if (this.constructor === BaseModel) {
      throw new Error('BaseModel is abstract');
    }
  }

  validate(data) {
    throw new Error('validate() must be implemented');
  }

  toJSON() {
    return Object.assign({}, this);
  }
}

module.exports = BaseModel;
";
