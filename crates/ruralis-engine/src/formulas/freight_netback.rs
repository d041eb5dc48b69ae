//! Freight cost per bag and netback.
//!
//! Inputs: `price_per_ton` (freight, R$/t) and `market_price_per_bag`
//! (R$/sc). A ton holds 1000/60 sixty-kilo bags; netback is the market
//! price minus the freight cost per bag.

use crate::field::FormulaInput;
use crate::formula::{FormulaModule, FormulaOutput, RowSpec, ValueFormat};

const BAGS_PER_TON: f64 = 1000.0 / 60.0;

#[derive(Debug, Default)]
pub struct FreightNetback;

const LAYOUT: &[RowSpec] = &[
    RowSpec {
        key: "cost_per_bag",
        label: "Frete por saca",
        unit: "/sc",
        format: ValueFormat::Currency,
        emphasis: false,
    },
    RowSpec {
        key: "netback",
        label: "Preço líquido",
        unit: "/sc",
        format: ValueFormat::Currency,
        emphasis: true,
    },
];

impl FormulaModule for FreightNetback {
    fn slug(&self) -> &'static str {
        "freight-netback"
    }

    fn title(&self) -> &'static str {
        "Frete e Netback"
    }

    fn compute(&self, input: &FormulaInput) -> FormulaOutput {
        // BAGS_PER_TON is a constant, so this division needs no guard.
        let cost_per_bag = input.value("price_per_ton") / BAGS_PER_TON;
        let netback = input.value("market_price_per_bag") - cost_per_bag;

        let mut output = FormulaOutput::new();
        output.set("cost_per_bag", cost_per_bag);
        output.set("netback", netback);
        output
    }

    fn layout(&self) -> &'static [RowSpec] {
        LAYOUT
    }

    fn share_template(&self) -> &'static str {
        "*{title}*\nFrete por saca: {cost_per_bag}\nPreço líquido: {netback} por saca"
    }
}
