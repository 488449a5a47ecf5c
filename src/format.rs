//! Text rendering of numbers and the output precision selector.

use crate::error::UnitError;
use crate::unit::spelling::SpellingTable;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of significant digits used when printing values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Precision {
    #[default]
    Double,
    Single,
}

impl Precision {
    pub const ALL: [Precision; 2] = [Precision::Double, Precision::Single];

    pub const fn significant_digits(self) -> usize {
        match self {
            Precision::Double => 15,
            Precision::Single => 6,
        }
    }

    pub const fn abbreviation(self) -> &'static str {
        match self {
            Precision::Double => "Double",
            Precision::Single => "Single",
        }
    }

    /// Case-insensitive lookup, `None` when nothing matches.
    pub fn parse(input: &str) -> Option<Self> {
        static SPELLINGS: Lazy<SpellingTable<Precision>> = Lazy::new(|| {
            SpellingTable::new(
                "Precision",
                [
                    ("Double", Precision::Double),
                    ("Double Precision", Precision::Double),
                    ("f64", Precision::Double),
                    ("Single", Precision::Single),
                    ("Single Precision", Precision::Single),
                    ("Float", Precision::Single),
                    ("f32", Precision::Single),
                ],
            )
        });
        SPELLINGS.lookup(input)
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for Precision {
    type Err = UnitError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| UnitError::UnknownPrecision(value.to_owned()))
    }
}

/// Formats a number with the given number of significant digits.
///
/// Plain decimal between `1e-3` and `1e6`, scientific notation outside that
/// range. Trailing zeros past the last significant digit are not printed.
/// Non-finite values print as `inf`, `-inf` and `NaN`.
pub fn number(value: f64, precision: Precision) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let digits = precision.significant_digits();
    let rounded = format!("{:.*e}", digits - 1, value)
        .parse::<f64>()
        .unwrap_or(value);
    if rounded == 0.0 {
        return "0".to_string();
    }
    let magnitude = rounded.abs();
    if (1.0e-3..1.0e6).contains(&magnitude) {
        format!("{rounded}")
    } else {
        format!("{rounded:e}")
    }
}

/// Shape-specific text rendering shared by all value containers.
pub trait Render {
    /// `"v"`, `"(x, y, z)"`, `"(xx, xy, xz; yx, yy, yz; zx, zy, zz)"`, …
    fn print(&self, precision: Precision) -> String;

    fn json(&self, precision: Precision) -> String;

    fn xml(&self, precision: Precision) -> String;

    fn yaml(&self, precision: Precision) -> String;
}

impl Render for f64 {
    fn print(&self, precision: Precision) -> String {
        number(*self, precision)
    }

    fn json(&self, precision: Precision) -> String {
        json_number(*self, precision)
    }

    fn xml(&self, precision: Precision) -> String {
        number(*self, precision)
    }

    fn yaml(&self, precision: Precision) -> String {
        number(*self, precision)
    }
}

/// JSON has no literal for infinities or NaN, so those become `null`.
fn json_number(value: f64, precision: Precision) -> String {
    if value.is_finite() {
        number(value, precision)
    } else {
        "null".to_string()
    }
}

/// Renders labelled components, used by the vector and tensor containers.
pub(crate) fn labelled(
    labels: &[&str],
    values: &[f64],
    precision: Precision,
) -> (String, String, String) {
    let mut json = Vec::with_capacity(labels.len());
    let mut xml = String::new();
    let mut yaml = Vec::with_capacity(labels.len());
    for (label, value) in labels.iter().zip(values) {
        let text = number(*value, precision);
        json.push(format!("\"{label}\":{}", json_number(*value, precision)));
        xml.push_str(&format!("<{label}>{text}</{label}>"));
        yaml.push(format!("{label}:{text}"));
    }
    (
        format!("{{{}}}", json.join(",")),
        xml,
        format!("{{{}}}", yaml.join(",")),
    )
}

/// Joins rows of numbers as `"(a, b; c, d)"`.
pub(crate) fn rows(rows: &[&[f64]], precision: Precision) -> String {
    let body = rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|value| number(*value, precision))
                .collect::<Vec<_>>()
                .join(", ")
        })
        .collect::<Vec<_>>()
        .join("; ");
    format!("({body})")
}
