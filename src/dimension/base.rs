//! The seven independent base dimensions.
//!
//! Each one is a signed exponent of a base physical dimension. A value of `0`
//! means the dimension does not appear, `1` that it appears once, `-2` that it
//! appears squared in the denominator, and so on.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! base_dimension {
    ($(#[$meta:meta])* $name:ident: $abbreviation:literal, $label:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i8);

        impl $name {
            /// Creates the dimension with the given exponent.
            pub const fn new(value: i8) -> Self {
                Self(value)
            }

            /// The exponent.
            pub const fn value(self) -> i8 {
                self.0
            }

            pub const fn abbreviation() -> &'static str {
                $abbreviation
            }

            pub const fn label() -> &'static str {
                $label
            }

            /// Exponent notation: empty for `0`, the bare symbol for `1`, `X^n` for
            /// larger powers and `X^(-n)` for negative ones.
            pub fn print(self) -> String {
                exponent_notation($abbreviation, self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.print())
            }
        }
    };
}

base_dimension!(
    /// Time exponent, `T`.
    Time: "T", "Time"
);
base_dimension!(
    /// Length exponent, `L`.
    Length: "L", "Length"
);
base_dimension!(
    /// Mass exponent, `M`.
    Mass: "M", "Mass"
);
base_dimension!(
    /// Electric current exponent, `I`.
    ElectricCurrent: "I", "Electric Current"
);
base_dimension!(
    /// Thermodynamic temperature exponent, `Θ`.
    Temperature: "Θ", "Temperature"
);
base_dimension!(
    /// Amount of substance exponent, `N`.
    SubstanceAmount: "N", "Substance Amount"
);
base_dimension!(
    /// Luminous intensity exponent, `J`.
    LuminousIntensity: "J", "Luminous Intensity"
);

fn exponent_notation(abbreviation: &str, exponent: i8) -> String {
    match exponent {
        0 => String::new(),
        1 => abbreviation.to_string(),
        n if n > 1 => format!("{abbreviation}^{n}"),
        n => format!("{abbreviation}^({n})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exponent_notation() {
        assert_eq!(Length::new(0).print(), "");
        assert_eq!(Length::new(1).print(), "L");
        assert_eq!(Length::new(2).print(), "L^2");
        assert_eq!(Length::new(-1).print(), "L^(-1)");
        assert_eq!(Temperature::new(-2).to_string(), "Θ^(-2)");
    }

    #[test]
    fn test_ordering_follows_exponent() {
        assert!(Mass::new(-1) < Mass::new(0));
        assert!(Time::new(3) > Time::new(2));
        assert_eq!(Time::default(), Time::new(0));
    }

    #[test]
    fn test_labels() {
        assert_eq!(ElectricCurrent::abbreviation(), "I");
        assert_eq!(SubstanceAmount::label(), "Substance Amount");
        assert_eq!(LuminousIntensity::abbreviation(), "J");
    }
}
