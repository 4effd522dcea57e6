use nexus_core::{
    application::ports::{ArchitectureStrategy, StrategyDescriptor},
    domain::{Manifest, ProjectConfig, ProjectStructure, RenderContext},
    error::NexusResult,
};

use super::{express_manifest, express_skeleton};
use crate::generators::render_into;

/// Clean Architecture: domain, application, infrastructure and presentation
/// layers with dependencies pointing inwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct CleanStrategy;

const DIRECTORIES: [&str; 15] = [
    "src/domain/entities",
    "src/domain/value-objects",
    "src/domain/repositories",
    "src/application/use-cases",
    "src/application/services",
    "src/application/dto",
    "src/infrastructure/database",
    "src/infrastructure/repositories",
    "src/infrastructure/http",
    "src/infrastructure/config",
    "src/presentation/controllers",
    "src/presentation/middleware",
    "src/presentation/routes",
    "src/shared/utils",
    "src/shared/errors",
];

const LAYOUT: &str = "src/
├── domain/           # entities, value objects, repository contracts
├── application/      # use cases, services, DTOs
├── infrastructure/   # database, repository impls, http, config
├── presentation/     # controllers, middleware, routes
└── shared/           # utils, errors";

impl ArchitectureStrategy for CleanStrategy {
    fn descriptor(&self) -> StrategyDescriptor {
        StrategyDescriptor {
            name: "clean",
            display_name: "Clean Architecture",
            description: "Layered architecture keeping business rules independent",
            features: &[
                "Entities/Use Cases/Interfaces/Frameworks layers",
                "Framework independence",
                "High testability",
                "Dependency inversion",
            ],
        }
    }

    fn directories(&self) -> Vec<&'static str> {
        DIRECTORIES.to_vec()
    }

    fn manifest(&self, config: &ProjectConfig) -> Manifest {
        express_manifest(config, &["clean-architecture", "ddd", "api"])
    }

    fn files(&self, _config: &ProjectConfig, ctx: &RenderContext) -> NexusResult<ProjectStructure> {
        let mut structure =
            express_skeleton(ctx, "Clean Architecture", LAYOUT, "./presentation/routes")?;
        render_into(
            &mut structure,
            ctx,
            "src/domain/entities/base.entity.js",
            BASE_ENTITY,
        )?;
        render_into(
            &mut structure,
            ctx,
            "src/domain/repositories/base.repository.js",
            BASE_REPOSITORY,
        )?;
        render_into(
            &mut structure,
            ctx,
            "src/application/use-cases/base.use-case.js",
            BASE_USE_CASE,
        )?;
        render_into(
            &mut structure,
            ctx,
            "src/presentation/controllers/base.controller.js",
            BASE_CONTROLLER,
        )?;
        render_into(
            &mut structure,
            ctx,
            "src/presentation/routes/index.js",
            ROUTES_INDEX,
        )?;
        Ok(structure)
    }
}

const BASE_ENTITY: &str = "class BaseEntity {
  constructor(id) {
    this.id = id;
    this.createdAt = new Date();
    this.updatedAt = new Date();
  }

  equals(other) {
    return other instanceof BaseEntity && this.id === other.id;
  }
}

module.exports = BaseEntity;
";

const BASE_REPOSITORY: &str = "class BaseRepository {
  async findById(id) {
    throw new Error('findById() must be implemented');
  }

  async findAll() {
    throw new Error('findAll() must be implemented');
  }

  async save(entity) {
    throw new Error('save() must be implemented');
  }

  async delete(id) {
    throw new Error('delete() must be implemented');
  }
}

module.exports = BaseRepository;
";

const BASE_USE_CASE: &str = "class BaseUseCase {
  async execute(request) {
    throw new Error('execute() must be implemented');
  }
}

module.exports = BaseUseCase;
";

const BASE_CONTROLLER: &str = "class BaseController {
  constructor(useCase) {
    this.useCase = useCase;
  }

  async handle(req, res, next) {
    try {
      const result = await this.useCase.execute(req.body);
      res.status(200).json({ success: true, data: result });
    } catch (error) {
      next(error);
    }
  }
}

module.exports = BaseController;
";

const ROUTES_INDEX: &str = "const express = require('express');
const router = express.Router();

router.get('/', (req, res) => {
  res.json({
    message: 'API {{PROJECT_NAME}} - Clean Architecture',
    architecture: 'Clean Architecture'
  });
});

module.exports = router;
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directories_cover_every_layer() {
        let dirs = CleanStrategy.directories();
        for layer in ["domain", "application", "infrastructure", "presentation", "shared"] {
            assert!(
                dirs.iter().any(|d| d.starts_with(&format!("src/{layer}/"))),
                "missing {layer}"
            );
        }
    }

    #[test]
    fn app_mounts_presentation_routes() {
        let config = ProjectConfig::default();
        let ctx = RenderContext::from_config(&config);
        let structure = CleanStrategy.files(&config, &ctx).unwrap();
        let app = structure
            .files()
            .find(|f| f.path.to_string() == "src/app.js")
            .unwrap();
        assert!(app.content.contains("require('./presentation/routes')"));
    }
}
