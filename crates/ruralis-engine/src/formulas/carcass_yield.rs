//! Carcass yield.
//!
//! Inputs: `live_weight` (kg), `carcass_weight` (kg), `price_per_arroba`
//! (R$/@). Yield is the carcass share of live weight; one arroba is 15 kg.

use crate::field::FormulaInput;
use crate::formula::{FormulaModule, FormulaOutput, RowSpec, ValueFormat, ratio};

const KG_PER_ARROBA: f64 = 15.0;

#[derive(Debug, Default)]
pub struct CarcassYield;

const LAYOUT: &[RowSpec] = &[
    RowSpec {
        key: "arrobas",
        label: "Arrobas de carcaça",
        unit: "@",
        format: ValueFormat::Decimal(2),
        emphasis: false,
    },
    RowSpec {
        key: "total_value",
        label: "Valor da carcaça",
        unit: "",
        format: ValueFormat::Currency,
        emphasis: false,
    },
    RowSpec {
        key: "yield_pct",
        label: "Rendimento de carcaça",
        unit: "",
        format: ValueFormat::Percent(2),
        emphasis: true,
    },
];

impl FormulaModule for CarcassYield {
    fn slug(&self) -> &'static str {
        "carcass-yield"
    }

    fn title(&self) -> &'static str {
        "Rendimento de Carcaça"
    }

    fn compute(&self, input: &FormulaInput) -> FormulaOutput {
        let carcass = input.value("carcass_weight");
        let yield_pct = ratio(carcass, input.value("live_weight")) * 100.0;
        let arrobas = carcass / KG_PER_ARROBA;
        let total_value = arrobas * input.value("price_per_arroba");

        let mut output = FormulaOutput::new();
        output.set("yield_pct", yield_pct);
        output.set("arrobas", arrobas);
        output.set("total_value", total_value);
        output
    }

    fn layout(&self) -> &'static [RowSpec] {
        LAYOUT
    }

    fn share_template(&self) -> &'static str {
        "*{title}*\nRendimento: {yield_pct}\nArrobas: {arrobas} @\nValor estimado: {total_value}"
    }
}
