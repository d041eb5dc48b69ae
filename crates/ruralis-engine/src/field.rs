//! Numeric field coercion.
//!
//! Every calculator input starts life as raw text typed by the user. A field
//! resolves to a number through `parse_number`, falling back to its default
//! when the text is empty or not numeric. Resolution is total: a formula
//! never sees NaN, infinity, or a missing value.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single user-editable quantity: raw text plus the value it resolves to
/// when the text does not parse.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NumericField {
    /// The text as typed, unmodified.
    pub raw: String,
    /// Value used when `raw` is empty or unparseable. Conventionally 0.
    pub fallback: f64,
}

impl Default for NumericField {
    fn default() -> Self {
        Self { raw: String::new(), fallback: 0.0 }
    }
}

impl NumericField {
    /// Create an empty field with a zero fallback.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a field holding `raw` with a zero fallback.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self { raw: raw.into(), fallback: 0.0 }
    }

    /// Resolve this field to the number a formula will consume.
    pub fn resolve(&self) -> f64 {
        parse_number(&self.raw).unwrap_or(self.fallback)
    }
}

/// Parse user-typed numeric text.
///
/// Accepts both decimal separators since users type either: `"1.234,56"`
/// and `"1234.56"` both parse. Returns `None` for empty or non-numeric
/// text and for non-finite results; never panics.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized = if trimmed.contains(',') {
        // Comma is the decimal separator; any dots are thousands grouping.
        trimmed.replace('.', "").replace(',', ".")
    } else {
        trimmed.to_string()
    };
    match normalized.parse::<f64>() {
        Ok(n) if n.is_finite() => Some(n),
        _ => None,
    }
}

/// The mutable set of named fields owned by one calculator page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldSet {
    fields: HashMap<String, NumericField>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the raw text of `name`, creating the field if absent.
    pub fn set(&mut self, name: impl Into<String>, raw: impl Into<String>) {
        self.fields
            .entry(name.into())
            .or_insert_with(NumericField::new)
            .raw = raw.into();
    }

    pub fn get(&self, name: &str) -> Option<&NumericField> {
        self.fields.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &NumericField)> {
        self.fields.iter()
    }

    /// Snapshot every field into an immutable `FormulaInput`.
    pub fn resolve_all(&self) -> FormulaInput {
        FormulaInput {
            values: self
                .fields
                .iter()
                .map(|(name, field)| (name.clone(), field.resolve()))
                .collect(),
        }
    }
}

/// Immutable named map of resolved numbers, built fresh on every recompute.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormulaInput {
    values: HashMap<String, f64>,
}

impl FormulaInput {
    /// Build an input directly from resolved values (used by tests and by
    /// callers replaying a saved snapshot).
    pub fn from_values<I, K>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        Self {
            values: values.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Total accessor: a name that was never entered resolves to 0.0, so a
    /// formula is defined for every input set.
    pub fn value(&self, name: &str) -> f64 {
        self.values.get(name).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &f64)> {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_number_accepts_both_decimal_separators() {
        assert_eq!(parse_number("1234.56"), Some(1234.56));
        assert_eq!(parse_number("1234,56"), Some(1234.56));
        assert_eq!(parse_number("1.234,56"), Some(1234.56));
        assert_eq!(parse_number(" -5 "), Some(-5.0));
        assert_eq!(parse_number("1e10"), Some(1e10));
    }

    #[test]
    fn parse_number_rejects_garbage() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("   "), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("12abc"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
    }

    #[test]
    fn resolve_falls_back_on_unparseable_text() {
        let field = NumericField { raw: "abc".to_string(), fallback: 7.5 };
        assert_eq!(field.resolve(), 7.5);
        let empty = NumericField::new();
        assert_eq!(empty.resolve(), 0.0);
    }

    #[test]
    fn missing_input_name_resolves_to_zero() {
        let input = FormulaInput::default();
        assert_eq!(input.value("never_set"), 0.0);
    }
}
