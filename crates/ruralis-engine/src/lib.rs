#![deny(warnings)]
//! Ruralis calculator engine.
//!
//! The generic computation pipeline behind every Ruralis PRO calculator:
//! raw text fields are coerced to numbers, run through a pure domain
//! formula, and projected into the interactive card, the print row list,
//! and the share text — with one formatter guaranteeing consistent locale
//! rendering across the three surfaces, and an entitlement gate that
//! withholds the interactive view from unauthenticated sessions.

pub mod error;
pub mod field;
pub mod format;
pub mod formula;
pub mod formulas;
pub mod gate;
pub mod projector;
pub mod registry;

pub use error::{EngineError, EngineResult};
pub use field::{FieldSet, FormulaInput, NumericField, parse_number};
pub use format::{Formatter, Locale};
pub use formula::{FormulaModule, FormulaOutput, RowSpec, ValueFormat, ratio};
pub use gate::{EntitlementState, GatedView, PlanTier, gate};
pub use projector::{CardEntry, PrintRow, Projection, ResultProjector, ViewModel, share_url};
pub use registry::{CatalogEntry, FormulaRegistry};

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// One full run of the pipeline: the resolved input, the formula output,
/// and the three projected views built from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    pub slug: String,
    pub input: FormulaInput,
    pub output: FormulaOutput,
    pub projection: Projection,
}

/// Facade wiring the registry, the formulas, and the projector together.
pub struct CalculatorEngine {
    registry: FormulaRegistry,
    projector: ResultProjector,
}

impl CalculatorEngine {
    /// Engine with every built-in calculator and the product locale.
    pub fn new() -> EngineResult<Self> {
        Self::with_locale(Locale::PtBr)
    }

    #[instrument]
    pub fn with_locale(locale: Locale) -> EngineResult<Self> {
        let mut registry = FormulaRegistry::new();
        for module in formulas::all() {
            registry.register(module)?;
        }
        info!(calculators = registry.len(), "calculator engine ready");
        Ok(Self {
            registry,
            projector: ResultProjector::new(Formatter::new(locale)),
        })
    }

    pub fn registry(&self) -> &FormulaRegistry {
        &self.registry
    }

    pub fn projector(&self) -> &ResultProjector {
        &self.projector
    }

    pub fn catalog(&self) -> Vec<CatalogEntry> {
        self.registry.catalog()
    }

    pub fn module(&self, slug: &str) -> EngineResult<&dyn FormulaModule> {
        self.registry
            .get(slug)
            .ok_or_else(|| EngineError::unknown_calculator(slug))
    }

    /// Resolve the fields, run the formula, and project the views. Pure
    /// and synchronous; safe to call on every keystroke.
    pub fn evaluate(&self, slug: &str, fields: &FieldSet) -> EngineResult<Evaluation> {
        self.evaluate_input(slug, fields.resolve_all())
    }

    /// Same as `evaluate`, starting from already-resolved values (replaying
    /// a saved snapshot).
    pub fn evaluate_input(&self, slug: &str, input: FormulaInput) -> EngineResult<Evaluation> {
        let module = self.module(slug)?;
        let output = module.compute(&input);
        let projection = self.projector.project(module, &output);
        Ok(Evaluation { slug: slug.to_string(), input, output, projection })
    }
}
