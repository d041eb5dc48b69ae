//! Seed population and seeding rate.
//!
//! Inputs: `target_population` (plants/ha), `row_spacing_cm`,
//! `germination_pct` (%), `seeds_per_kg`, `price_per_kg` (R$/kg).
//!
//! Sowing rate compensates for germination losses; every divisor (row
//! spacing, germination, seeds per kilo) is zero-guarded.

use crate::field::FormulaInput;
use crate::formula::{FormulaModule, FormulaOutput, RowSpec, ValueFormat, ratio};

#[derive(Debug, Default)]
pub struct SeedPopulation;

const LAYOUT: &[RowSpec] = &[
    RowSpec {
        key: "seeds_per_ha",
        label: "Sementes por hectare",
        unit: "sementes/ha",
        format: ValueFormat::Decimal(0),
        emphasis: false,
    },
    RowSpec {
        key: "kg_per_ha",
        label: "Taxa de semeadura",
        unit: "kg/ha",
        format: ValueFormat::Decimal(1),
        emphasis: false,
    },
    RowSpec {
        key: "cost_per_ha",
        label: "Custo de sementes",
        unit: "/ha",
        format: ValueFormat::Currency,
        emphasis: false,
    },
    RowSpec {
        key: "seeds_per_metre",
        label: "Sementes por metro",
        unit: "sementes/m",
        format: ValueFormat::Decimal(1),
        emphasis: true,
    },
];

impl FormulaModule for SeedPopulation {
    fn slug(&self) -> &'static str {
        "seed-population"
    }

    fn title(&self) -> &'static str {
        "População de Sementes"
    }

    fn compute(&self, input: &FormulaInput) -> FormulaOutput {
        let seeds_per_ha = ratio(
            input.value("target_population") * 100.0,
            input.value("germination_pct"),
        );
        let row_metres_per_ha = ratio(10_000.0, input.value("row_spacing_cm") / 100.0);
        let seeds_per_metre = ratio(seeds_per_ha, row_metres_per_ha);
        let kg_per_ha = ratio(seeds_per_ha, input.value("seeds_per_kg"));
        let cost_per_ha = kg_per_ha * input.value("price_per_kg");

        let mut output = FormulaOutput::new();
        output.set("seeds_per_ha", seeds_per_ha);
        output.set("seeds_per_metre", seeds_per_metre);
        output.set("kg_per_ha", kg_per_ha);
        output.set("cost_per_ha", cost_per_ha);
        output
    }

    fn layout(&self) -> &'static [RowSpec] {
        LAYOUT
    }

    fn share_template(&self) -> &'static str {
        "*{title}*\nSementes por metro: {seeds_per_metre}\nTaxa de semeadura: {kg_per_ha} kg/ha\nCusto de sementes: {cost_per_ha}/ha"
    }
}
