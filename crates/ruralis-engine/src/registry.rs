//! Registry of formula modules, keyed by slug.

use crate::error::{EngineError, EngineResult};
use crate::formula::FormulaModule;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One entry of the calculator catalogue (powers the index views).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub slug: String,
    pub title: String,
}

#[derive(Default)]
pub struct FormulaRegistry {
    modules: HashMap<&'static str, Box<dyn FormulaModule>>,
}

impl FormulaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module. Slugs must be unique.
    pub fn register(&mut self, module: Box<dyn FormulaModule>) -> EngineResult<()> {
        let slug = module.slug();
        if self.modules.contains_key(slug) {
            return Err(EngineError::duplicate_calculator(slug));
        }
        self.modules.insert(slug, module);
        Ok(())
    }

    pub fn get(&self, slug: &str) -> Option<&dyn FormulaModule> {
        self.modules.get(slug).map(|m| m.as_ref())
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Every registered calculator, sorted by slug for stable listings.
    pub fn catalog(&self) -> Vec<CatalogEntry> {
        let mut entries: Vec<CatalogEntry> = self
            .modules
            .values()
            .map(|m| CatalogEntry {
                slug: m.slug().to_string(),
                title: m.title().to_string(),
            })
            .collect();
        entries.sort_by(|a, b| a.slug.cmp(&b.slug));
        entries
    }
}
