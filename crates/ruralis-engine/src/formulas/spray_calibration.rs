//! Sprayer calibration.
//!
//! Inputs: `flow_rate_ml_min` (collected per nozzle), `speed_kmh`,
//! `nozzle_spacing_cm`, `target_l_ha`.
//!
//! L/ha = (flow in L/min × 60000) / (speed × spacing). Deviation from the
//! target rate is classified into bands: within ±5% ok, within ±10%
//! warning, beyond that danger.

use crate::field::FormulaInput;
use crate::formula::{FormulaModule, FormulaOutput, RowSpec, ValueFormat, ratio};

#[derive(Debug, Default)]
pub struct SprayCalibration;

const LAYOUT: &[RowSpec] = &[
    RowSpec {
        key: "deviation",
        label: "Desvio do alvo",
        unit: "",
        format: ValueFormat::Percent(1),
        emphasis: false,
    },
    RowSpec {
        key: "status",
        label: "Situação",
        unit: "",
        format: ValueFormat::Band,
        emphasis: false,
    },
    RowSpec {
        key: "l_per_ha",
        label: "Volume de calda",
        unit: "L/ha",
        format: ValueFormat::Decimal(2),
        emphasis: true,
    },
];

impl FormulaModule for SprayCalibration {
    fn slug(&self) -> &'static str {
        "spray-calibration"
    }

    fn title(&self) -> &'static str {
        "Calibração de Pulverizador"
    }

    fn compute(&self, input: &FormulaInput) -> FormulaOutput {
        let flow_l_min = input.value("flow_rate_ml_min") / 1000.0;
        let l_per_ha = ratio(
            flow_l_min * 60_000.0,
            input.value("speed_kmh") * input.value("nozzle_spacing_cm"),
        );
        let target = input.value("target_l_ha");
        let deviation = ratio(l_per_ha - target, target) * 100.0;
        let status = if deviation.abs() <= 5.0 {
            "ok"
        } else if deviation.abs() <= 10.0 {
            "warning"
        } else {
            "danger"
        };

        let mut output = FormulaOutput::new();
        output.set("l_per_ha", l_per_ha);
        output.set("deviation", deviation);
        output.set_label("status", status);
        output
    }

    fn layout(&self) -> &'static [RowSpec] {
        LAYOUT
    }

    fn share_template(&self) -> &'static str {
        "*{title}*\nVolume de calda: {l_per_ha} L/ha\nDesvio do alvo: {deviation} ({status})"
    }
}
