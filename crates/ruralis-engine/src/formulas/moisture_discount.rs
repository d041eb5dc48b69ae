//! Grain moisture discount (drying).
//!
//! Inputs: `gross_weight` (kg), `actual_moisture` (%), `standard_moisture`
//! (%). The discount applies only when the grain is wetter than standard;
//! drier-than-standard grain keeps its gross weight. The rule is
//! deliberately non-symmetric: there is no bonus.

use crate::field::FormulaInput;
use crate::formula::{FormulaModule, FormulaOutput, RowSpec, ValueFormat, ratio};

#[derive(Debug, Default)]
pub struct MoistureDiscount;

const LAYOUT: &[RowSpec] = &[
    RowSpec {
        key: "discount",
        label: "Desconto de umidade",
        unit: "kg",
        format: ValueFormat::Decimal(2),
        emphasis: false,
    },
    RowSpec {
        key: "discount_pct",
        label: "Desconto relativo",
        unit: "",
        format: ValueFormat::Percent(2),
        emphasis: false,
    },
    RowSpec {
        key: "net_weight",
        label: "Peso líquido",
        unit: "kg",
        format: ValueFormat::Decimal(2),
        emphasis: true,
    },
];

impl FormulaModule for MoistureDiscount {
    fn slug(&self) -> &'static str {
        "moisture-discount"
    }

    fn title(&self) -> &'static str {
        "Desconto de Umidade"
    }

    fn compute(&self, input: &FormulaInput) -> FormulaOutput {
        let gross = input.value("gross_weight");
        let actual = input.value("actual_moisture");
        let standard = input.value("standard_moisture");

        let net_weight = if actual > standard {
            gross * ratio(100.0 - actual, 100.0 - standard)
        } else {
            gross
        };
        let discount = gross - net_weight;
        let discount_pct = ratio(discount, gross) * 100.0;

        let mut output = FormulaOutput::new();
        output.set("net_weight", net_weight);
        output.set("discount", discount);
        output.set("discount_pct", discount_pct);
        output
    }

    fn layout(&self) -> &'static [RowSpec] {
        LAYOUT
    }

    fn share_template(&self) -> &'static str {
        "*{title}*\nPeso bruto descontado em {discount} kg ({discount_pct})\nPeso líquido: {net_weight} kg"
    }
}
