//! Locale-aware number rendering.
//!
//! Every number that reaches a presentation surface goes through one
//! `Formatter`, so the interactive card, the printed report, and the shared
//! message always agree on rounding, grouping, and decimal separators. The
//! product locale is pt-BR; en-US exists for tests and machine output.

use serde::{Deserialize, Serialize};

/// Supported display locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Locale {
    /// Brazilian Portuguese: `R$ 1.234,56`
    #[default]
    PtBr,
    /// US English: `$1,234.56`
    EnUs,
}

impl Locale {
    const fn decimal_separator(self) -> char {
        match self {
            Self::PtBr => ',',
            Self::EnUs => '.',
        }
    }

    const fn group_separator(self) -> char {
        match self {
            Self::PtBr => '.',
            Self::EnUs => ',',
        }
    }
}

/// Renders numbers, currency amounts, and percentages for one locale.
#[derive(Debug, Clone, Copy, Default)]
pub struct Formatter {
    locale: Locale,
}

impl Formatter {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Currency amount: grouped thousands, exactly two fraction digits,
    /// locale currency symbol.
    pub fn currency(&self, n: f64) -> String {
        let body = self.grouped(n, 2, false);
        match self.locale {
            Locale::PtBr => format!("R$ {body}"),
            Locale::EnUs => {
                // Symbol sits inside the sign for negative amounts.
                if let Some(rest) = body.strip_prefix('-') {
                    format!("-${rest}")
                } else {
                    format!("${body}")
                }
            }
        }
    }

    /// Plain decimal with at most `max_fraction_digits` fraction digits;
    /// trailing zeros are trimmed.
    pub fn decimal(&self, n: f64, max_fraction_digits: usize) -> String {
        self.grouped(n, max_fraction_digits, true)
    }

    /// Percentage with a trailing `%`. The input is already scaled to
    /// percent units (70.0 renders as `70%`).
    pub fn percent(&self, n: f64, max_fraction_digits: usize) -> String {
        format!("{}%", self.decimal(n, max_fraction_digits))
    }

    fn grouped(&self, n: f64, fraction_digits: usize, trim: bool) -> String {
        // Non-finite values never come out of a formula, but the formatter
        // itself must not panic on them either.
        if !n.is_finite() {
            return self.grouped(0.0, fraction_digits, trim);
        }
        let fixed = format!("{:.*}", fraction_digits, n.abs());
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((i, f)) => (i, f),
            None => (fixed.as_str(), ""),
        };

        let mut out = String::new();
        let negative =
            n < 0.0 && !(int_part.bytes().all(|b| b == b'0') && frac_part.bytes().all(|b| b == b'0'));
        if negative {
            out.push('-');
        }

        let digits = int_part.len();
        for (i, c) in int_part.chars().enumerate() {
            if i > 0 && (digits - i) % 3 == 0 {
                out.push(self.locale.group_separator());
            }
            out.push(c);
        }

        let frac = if trim { frac_part.trim_end_matches('0') } else { frac_part };
        if !frac.is_empty() {
            out.push(self.locale.decimal_separator());
            out.push_str(frac);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_pt_br() {
        let f = Formatter::new(Locale::PtBr);
        assert_eq!(f.currency(1234.5), "R$ 1.234,50");
        assert_eq!(f.currency(0.0), "R$ 0,00");
        assert_eq!(f.currency(-1500.0), "R$ -1.500,00");
        assert_eq!(f.currency(1_000_000.0), "R$ 1.000.000,00");
    }

    #[test]
    fn currency_en_us() {
        let f = Formatter::new(Locale::EnUs);
        assert_eq!(f.currency(1234.5), "$1,234.50");
        assert_eq!(f.currency(-42.0), "-$42.00");
    }

    #[test]
    fn decimal_trims_trailing_zeros() {
        let f = Formatter::new(Locale::PtBr);
        assert_eq!(f.decimal(53.333333, 2), "53,33");
        assert_eq!(f.decimal(70.0, 1), "70");
        assert_eq!(f.decimal(33372.093, 2), "33.372,09");
    }

    #[test]
    fn percent_appends_symbol() {
        let f = Formatter::new(Locale::PtBr);
        assert_eq!(f.percent(70.0, 1), "70%");
        assert_eq!(f.percent(2.5, 1), "2,5%");
    }

    #[test]
    fn negative_that_rounds_to_zero_loses_its_sign() {
        let f = Formatter::new(Locale::PtBr);
        assert_eq!(f.decimal(-0.0001, 2), "0");
        assert_eq!(f.currency(-0.0001), "R$ 0,00");
    }

    #[test]
    fn non_finite_renders_as_zero() {
        let f = Formatter::new(Locale::PtBr);
        assert_eq!(f.decimal(f64::NAN, 2), "0");
        assert_eq!(f.currency(f64::INFINITY), "R$ 0,00");
    }
}
