//! Application services - orchestrate use cases.
//!
//! Leaf-first: the registry and frontend catalog are lookups, the resolver
//! and directory validator gate the run, the dispatcher fans out to the
//! generators, and `ScaffoldService` strings them together.

pub mod architecture_registry;
pub mod directory_validator;
pub mod dispatcher;
pub mod frontend_catalog;
pub mod option_resolver;
pub mod scaffold_service;

pub use architecture_registry::{ArchitectureRegistry, RegistryEntry};
pub use directory_validator::{CONFIRM_NON_EMPTY_KEY, DirectoryPolicy, DirectoryValidator};
pub use dispatcher::{
    BASE_LAYOUT, DispatchOutcome, EMBEDDED_FRONTEND_DIR, ENV_EXAMPLE_FILE, ENV_FILE,
    GeneratorDispatcher, env_template,
};
pub use frontend_catalog::FrontendCatalog;
pub use option_resolver::{OptionResolver, RawOptions, Resolution, ResolutionMode};
pub use scaffold_service::{InstallOutcome, ScaffoldReport, ScaffoldRequest, ScaffoldService};
