//! The persisted report entity.
//!
//! A report is created only when the user explicitly saves. Snapshots are
//! flat maps of primitives; the storage layer silently drops anything else,
//! so `FieldValue` enforces the restriction at the type level.

use chrono::{DateTime, Utc};
use ruralis_engine::Evaluation;
use ruralis_types::FieldValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// The opaque `data` payload handed to the storage collaborator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportData {
    /// Numeric snapshot of the resolved inputs (not the raw text).
    pub inputs: HashMap<String, FieldValue>,
    /// Numeric results plus classification labels.
    pub results: HashMap<String, FieldValue>,
}

impl ReportData {
    /// Snapshot a pipeline evaluation. Numbers stay numbers; status bands
    /// become strings.
    pub fn from_evaluation(evaluation: &Evaluation) -> Self {
        let inputs = evaluation
            .input
            .iter()
            .map(|(name, value)| (name.clone(), FieldValue::Float(*value)))
            .collect();
        let mut results: HashMap<String, FieldValue> = evaluation
            .output
            .values()
            .map(|(name, value)| (name.clone(), FieldValue::Float(*value)))
            .collect();
        for (name, label) in evaluation.output.labels() {
            results.insert(name.clone(), FieldValue::String(label.clone()));
        }
        Self { inputs, results }
    }
}

/// One saved report, owned exclusively by `owner_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRecord {
    pub id: Uuid,
    pub owner_id: String,
    /// Calculator slug this report was produced by.
    pub tool_type: String,
    pub title: String,
    pub client_name: Option<String>,
    pub data: ReportData,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields replaceable by an update call. `None` leaves the stored value
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportPatch {
    pub title: Option<String>,
    pub client_name: Option<String>,
    pub data: Option<ReportData>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use ruralis_engine::{CalculatorEngine, FormulaInput};

    #[test]
    fn snapshot_keeps_numbers_and_labels() {
        let engine = CalculatorEngine::new().unwrap();
        let eval = engine
            .evaluate_input(
                "spray-calibration",
                FormulaInput::from_values([
                    ("flow_rate_ml_min", 800.0),
                    ("speed_kmh", 18.0),
                    ("nozzle_spacing_cm", 50.0),
                    ("target_l_ha", 50.0),
                ]),
            )
            .unwrap();
        let data = ReportData::from_evaluation(&eval);
        assert_eq!(
            data.inputs.get("speed_kmh"),
            Some(&FieldValue::Float(18.0))
        );
        assert!(matches!(
            data.results.get("l_per_ha"),
            Some(FieldValue::Float(_))
        ));
        assert_eq!(
            data.results.get("status").and_then(FieldValue::as_str),
            Some("warning")
        );
    }
}
