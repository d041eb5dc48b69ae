//! Projection of one `FormulaOutput` into the three presentation surfaces.
//!
//! The interactive summary card, the print row list, and the share text are
//! all rendered in a single pass from the same output instance through the
//! same formatter, so the three surfaces can never drift numerically.

use crate::format::Formatter;
use crate::formula::{FormulaModule, FormulaOutput, ValueFormat};
use serde::{Deserialize, Serialize};

/// One entry of the interactive summary card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardEntry {
    pub label: String,
    pub value: String,
    pub unit: String,
    pub emphasis: bool,
}

/// The interactive view: what the summary card renders when unlocked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewModel {
    pub slug: String,
    pub title: String,
    pub entries: Vec<CardEntry>,
}

/// One row of the print/report layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintRow {
    pub label: String,
    pub value: String,
    pub unit: String,
    /// The headline/TOTAL row is flagged for visual emphasis.
    pub emphasis: bool,
}

/// The three views projected from a single `FormulaOutput`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projection {
    pub interactive: ViewModel,
    pub print_rows: Vec<PrintRow>,
    pub share_text: String,
}

/// Projects formula outputs into presentation view models.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultProjector {
    formatter: Formatter,
}

impl ResultProjector {
    pub fn new(formatter: Formatter) -> Self {
        Self { formatter }
    }

    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    /// Render every layout row once, then derive all three views from the
    /// rendered strings.
    pub fn project(&self, module: &dyn FormulaModule, output: &FormulaOutput) -> Projection {
        let rendered: Vec<(&'static str, String)> = module
            .layout()
            .iter()
            .map(|spec| (spec.key, self.render(spec.format, spec.key, output)))
            .collect();

        let entries: Vec<CardEntry> = module
            .layout()
            .iter()
            .zip(rendered.iter())
            .map(|(spec, (_, value))| CardEntry {
                label: spec.label.to_string(),
                value: value.clone(),
                unit: spec.unit.to_string(),
                emphasis: spec.emphasis,
            })
            .collect();

        let print_rows: Vec<PrintRow> = module
            .layout()
            .iter()
            .zip(rendered.iter())
            .map(|(spec, (_, value))| PrintRow {
                label: spec.label.to_string(),
                value: value.clone(),
                unit: spec.unit.to_string(),
                emphasis: spec.emphasis,
            })
            .collect();

        let mut share_text = module.share_template().replace("{title}", module.title());
        for (key, value) in &rendered {
            share_text = share_text.replace(&format!("{{{key}}}"), value);
        }

        Projection {
            interactive: ViewModel {
                slug: module.slug().to_string(),
                title: module.title().to_string(),
                entries,
            },
            print_rows,
            share_text,
        }
    }

    fn render(&self, format: ValueFormat, key: &str, output: &FormulaOutput) -> String {
        match format {
            ValueFormat::Currency => self.formatter.currency(output.value(key).unwrap_or(0.0)),
            ValueFormat::Decimal(digits) => {
                self.formatter.decimal(output.value(key).unwrap_or(0.0), digits)
            }
            ValueFormat::Percent(digits) => {
                self.formatter.percent(output.value(key).unwrap_or(0.0), digits)
            }
            ValueFormat::Band => output.label(key).unwrap_or_default().to_string(),
        }
    }
}

/// Build the WhatsApp deep link for a share text. Pure string construction;
/// opening the link is the host environment's job.
pub fn share_url(share_text: &str) -> String {
    format!("https://wa.me/?text={}", percent_encode(share_text))
}

// RFC 3986 unreserved characters stay literal, everything else is
// percent-encoded byte-wise.
fn percent_encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 3);
    for byte in text.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
