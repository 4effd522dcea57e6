use std::collections::HashMap;
use std::sync::Arc;

use crate::application::ports::FrontendGenerator;
use crate::domain::FrontendFramework;

/// Frontend generators keyed by framework.
#[derive(Default)]
pub struct FrontendCatalog {
    generators: HashMap<FrontendFramework, Arc<dyn FrontendGenerator>>,
}

impl FrontendCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a generator under the framework it reports.
    pub fn register(&mut self, generator: Arc<dyn FrontendGenerator>) {
        self.generators.insert(generator.framework(), generator);
    }

    pub fn get(&self, framework: FrontendFramework) -> Option<Arc<dyn FrontendGenerator>> {
        self.generators.get(&framework).cloned()
    }

    /// Registered frameworks in declaration order.
    pub fn frameworks(&self) -> Vec<FrontendFramework> {
        FrontendFramework::ALL
            .into_iter()
            .filter(|f| self.generators.contains_key(f))
            .collect()
    }
}

impl std::fmt::Debug for FrontendCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrontendCatalog")
            .field("frameworks", &self.frameworks())
            .finish()
    }
}
