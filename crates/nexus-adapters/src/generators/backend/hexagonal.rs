use nexus_core::{
    application::ports::{ArchitectureStrategy, StrategyDescriptor},
    domain::{Manifest, ProjectConfig, ProjectStructure, RenderContext},
    error::NexusResult,
};

use super::{express_manifest, express_skeleton};
use crate::generators::render_into;

/// Ports and adapters. Registered as `hexagonal`, reachable as `hexa`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HexagonalStrategy;

const DIRECTORIES: [&str; 11] = [
    "src/domain/entities",
    "src/domain/services",
    "src/domain/ports",
    "src/application/use-cases",
    "src/application/ports",
    "src/infrastructure/adapters/primary",
    "src/infrastructure/adapters/secondary",
    "src/infrastructure/config",
    "src/infrastructure/database",
    "src/shared/utils",
    "src/shared/errors",
];

const LAYOUT: &str = "src/
├── domain/            # entities, domain services, ports
├── application/       # use cases, application ports
├── infrastructure/
│   ├── adapters/
│   │   ├── primary/   # driving adapters (HTTP)
│   │   └── secondary/ # driven adapters (database, APIs)
│   ├── config/
│   └── database/
└── shared/            # utils, errors";

impl ArchitectureStrategy for HexagonalStrategy {
    fn descriptor(&self) -> StrategyDescriptor {
        StrategyDescriptor {
            name: "hexagonal",
            display_name: "Hexagonal Architecture",
            description: "Modular ports and adapters around an isolated domain",
            features: &[
                "Ports/Adapters separation",
                "Framework independence",
                "High testability",
                "Swappable infrastructure",
            ],
        }
    }

    fn directories(&self) -> Vec<&'static str> {
        DIRECTORIES.to_vec()
    }

    fn manifest(&self, config: &ProjectConfig) -> Manifest {
        express_manifest(config, &["hexagonal-architecture", "ports-adapters", "api"])
    }

    fn files(&self, _config: &ProjectConfig, ctx: &RenderContext) -> NexusResult<ProjectStructure> {
        let mut structure = express_skeleton(
            ctx,
            "Hexagonal Architecture",
            LAYOUT,
            "./infrastructure/adapters/primary/routes",
        )?;
        render_into(
            &mut structure,
            ctx,
            "src/domain/entities/base.entity.js",
            BASE_ENTITY,
        )?;
        render_into(&mut structure, ctx, "src/domain/ports/base.port.js", BASE_PORT)?;
        render_into(
            &mut structure,
            ctx,
            "src/application/use-cases/base.use-case.js",
            BASE_USE_CASE,
        )?;
        render_into(
            &mut structure,
            ctx,
            "src/infrastructure/adapters/primary/base.adapter.js",
            PRIMARY_ADAPTER,
        )?;
        render_into(
            &mut structure,
            ctx,
            "src/infrastructure/adapters/secondary/base.adapter.js",
            SECONDARY_ADAPTER,
        )?;
        render_into(
            &mut structure,
            ctx,
            "src/infrastructure/adapters/primary/routes.js",
            ROUTES,
        )?;
        Ok(structure)
    }
}

const BASE_ENTITY: &str = "class BaseEntity {
  constructor(id) {
    this.id = id;
  }
}

module.exports = BaseEntity;
";

const BASE_PORT: &str = "/**
 * A port is a contract the domain expects the outside world to fulfil.
 */
class BasePort {
  constructor() {
    if (this.constructor === BasePort) {
      throw new Error('BasePort is abstract');
    }
  }
}

module.exports = BasePort;
";

const BASE_USE_CASE: &str = "class BaseUseCase {
  constructor(ports = {}) {
    this.ports = ports;
  }

  async execute(input) {
    throw new Error('execute() must be implemented');
  }
}

module.exports = BaseUseCase;
";

const PRIMARY_ADAPTER: &str = "/**
 * Driving adapter: translates incoming requests into use case calls.
 */
class BasePrimaryAdapter {
  constructor(useCase) {
    this.useCase = useCase;
  }

  async handle(req, res, next) {
    try {
      const output = await this.useCase.execute(req.body);
      res.json({ success: true, data: output });
    } catch (error) {
      next(error);
    }
  }
}

module.exports = BasePrimaryAdapter;
";

const SECONDARY_ADAPTER: &str = "/**
 * Driven adapter: implements a domain port against real infrastructure.
 */
class BaseSecondaryAdapter {
  async connect() {}

  async disconnect() {}
}

module.exports = BaseSecondaryAdapter;
";

const ROUTES: &str = "const express = require('express');
const router = express.Router();

router.get('/', (req, res) => {
  res.json({
    message: 'API {{PROJECT_NAME}} - Hexagonal Architecture',
    architecture: 'Hexagonal Architecture',
    concept: 'Ports & Adapters'
  });
});

module.exports = router;
";
