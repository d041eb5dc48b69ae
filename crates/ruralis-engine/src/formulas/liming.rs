//! Liming and gypsum requirement.
//!
//! Inputs: `cec` (cmolc/dm³), `current_saturation` and `target_saturation`
//! (%), `prnt` (%), `clay_pct` (%), `gypsum_factor` (50 or 75, chosen by
//! crop category).
//!
//! NC = (V2 - V1) × CTC / PRNT, floored at zero: soil already at or above
//! the target needs no limestone. NG = clay% × factor / 1000 t/ha.

use crate::field::FormulaInput;
use crate::formula::{FormulaModule, FormulaOutput, RowSpec, ValueFormat, ratio};

#[derive(Debug, Default)]
pub struct LimingRequirement;

const LAYOUT: &[RowSpec] = &[
    RowSpec {
        key: "ng",
        label: "Necessidade de gesso",
        unit: "t/ha",
        format: ValueFormat::Decimal(2),
        emphasis: false,
    },
    RowSpec {
        key: "nc",
        label: "Necessidade de calcário",
        unit: "t/ha",
        format: ValueFormat::Decimal(2),
        emphasis: true,
    },
];

impl FormulaModule for LimingRequirement {
    fn slug(&self) -> &'static str {
        "liming"
    }

    fn title(&self) -> &'static str {
        "Calagem e Gessagem"
    }

    fn compute(&self, input: &FormulaInput) -> FormulaOutput {
        let delta = input.value("target_saturation") - input.value("current_saturation");
        let nc = ratio(delta * input.value("cec"), input.value("prnt")).max(0.0);
        let ng = input.value("clay_pct") * input.value("gypsum_factor") / 1000.0;

        let mut output = FormulaOutput::new();
        output.set("nc", nc);
        output.set("ng", ng);
        output
    }

    fn layout(&self) -> &'static [RowSpec] {
        LAYOUT
    }

    fn share_template(&self) -> &'static str {
        "*{title}*\nCalcário: {nc} t/ha\nGesso agrícola: {ng} t/ha"
    }
}
