//! Production cost per hectare.
//!
//! Inputs (all R$/ha): `seeds`, `fertilizer`, `pesticides`, `mechanization`.
//! Insumos is the sum of the first three; the percentage split is guarded
//! for a zero total.

use crate::field::FormulaInput;
use crate::formula::{FormulaModule, FormulaOutput, RowSpec, ValueFormat, ratio};

#[derive(Debug, Default)]
pub struct CostPerHectare;

const LAYOUT: &[RowSpec] = &[
    RowSpec {
        key: "insumos",
        label: "Custo com insumos",
        unit: "/ha",
        format: ValueFormat::Currency,
        emphasis: false,
    },
    RowSpec {
        key: "pct_insumos",
        label: "Participação dos insumos",
        unit: "",
        format: ValueFormat::Percent(1),
        emphasis: false,
    },
    RowSpec {
        key: "pct_mechanization",
        label: "Participação da mecanização",
        unit: "",
        format: ValueFormat::Percent(1),
        emphasis: false,
    },
    RowSpec {
        key: "total",
        label: "Custo total",
        unit: "/ha",
        format: ValueFormat::Currency,
        emphasis: true,
    },
];

impl FormulaModule for CostPerHectare {
    fn slug(&self) -> &'static str {
        "cost-per-hectare"
    }

    fn title(&self) -> &'static str {
        "Custo por Hectare"
    }

    fn compute(&self, input: &FormulaInput) -> FormulaOutput {
        let insumos =
            input.value("seeds") + input.value("fertilizer") + input.value("pesticides");
        let total = insumos + input.value("mechanization");
        let pct_insumos = ratio(insumos, total) * 100.0;
        let pct_mechanization = ratio(input.value("mechanization"), total) * 100.0;

        let mut output = FormulaOutput::new();
        output.set("insumos", insumos);
        output.set("total", total);
        output.set("pct_insumos", pct_insumos);
        output.set("pct_mechanization", pct_mechanization);
        output
    }

    fn layout(&self) -> &'static [RowSpec] {
        LAYOUT
    }

    fn share_template(&self) -> &'static str {
        "*{title}*\nInsumos: {insumos}/ha ({pct_insumos} do total)\nMecanização: {pct_mechanization} do total\nCusto total: {total}/ha"
    }
}
