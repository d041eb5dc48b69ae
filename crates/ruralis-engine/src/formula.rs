//! The `FormulaModule` contract.
//!
//! A formula is a pure, total function from a named set of resolved numbers
//! to a named set of derived numbers. It carries its own presentation layout
//! and share template so the projector can render any calculator generically.

use crate::field::FormulaInput;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Named numeric results plus derived classification labels (status bands).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormulaOutput {
    values: HashMap<String, f64>,
    labels: HashMap<String, String>,
}

impl FormulaOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: f64) {
        self.values.insert(name.into(), value);
    }

    pub fn set_label(&mut self, name: impl Into<String>, label: impl Into<String>) {
        self.labels.insert(name.into(), label.into());
    }

    pub fn value(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    pub fn label(&self, name: &str) -> Option<&str> {
        self.labels.get(name).map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = (&String, &f64)> {
        self.values.iter()
    }

    pub fn labels(&self) -> impl Iterator<Item = (&String, &String)> {
        self.labels.iter()
    }
}

/// How one result row is rendered by the formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueFormat {
    /// Currency, two fraction digits, locale symbol.
    Currency,
    /// Plain decimal with at most this many fraction digits.
    Decimal(usize),
    /// Percentage with at most this many fraction digits.
    Percent(usize),
    /// A classification label (status band), not a number.
    Band,
}

/// Static descriptor for one projected result row.
#[derive(Debug, Clone, Copy)]
pub struct RowSpec {
    /// Key into the `FormulaOutput` value (or label, for `Band`) map.
    pub key: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
    pub format: ValueFormat,
    /// Headline/TOTAL rows get visual emphasis in every surface.
    pub emphasis: bool,
}

/// A domain calculator: pure, total, non-panicking.
///
/// `compute` must be deterministic and defined for every real-valued input,
/// including zeros and negatives. Divisions are guarded (see `ratio`) and
/// domain floors clamped inside the formula, never by the caller.
pub trait FormulaModule: Send + Sync {
    /// Stable identifier, used as the report `tool_type`.
    fn slug(&self) -> &'static str;

    /// Human-readable calculator name.
    fn title(&self) -> &'static str;

    /// Run the domain formula.
    fn compute(&self, input: &FormulaInput) -> FormulaOutput;

    /// Ordered result rows, ending with the emphasised headline row.
    fn layout(&self) -> &'static [RowSpec];

    /// Share-text template. `{key}` placeholders are replaced with the
    /// formatted value of the matching layout row; `{title}` with the
    /// calculator title.
    fn share_template(&self) -> &'static str;
}

/// Zero-guarded division: a zero denominator yields 0, never NaN or
/// infinity.
pub fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}
