use super::base::{
    ElectricCurrent, Length, LuminousIntensity, Mass, SubstanceAmount, Temperature, Time,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Div, Mul};

/// The physical dimension of a unit family, as exponents of the seven base
/// dimensions.
///
/// Ordering is lexicographic over time, length, mass, electric current,
/// temperature, substance amount and luminous intensity, in that order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct DimensionSet {
    time: Time,
    length: Length,
    mass: Mass,
    electric_current: ElectricCurrent,
    temperature: Temperature,
    substance_amount: SubstanceAmount,
    luminous_intensity: LuminousIntensity,
}

impl DimensionSet {
    pub const DIMENSIONLESS: Self = Self::new(0, 0, 0, 0, 0, 0, 0);

    /// Exponents are given as time, length, mass, electric current, temperature,
    /// substance amount, luminous intensity.
    pub const fn new(
        time: i8,
        length: i8,
        mass: i8,
        electric_current: i8,
        temperature: i8,
        substance_amount: i8,
        luminous_intensity: i8,
    ) -> Self {
        Self {
            time: Time::new(time),
            length: Length::new(length),
            mass: Mass::new(mass),
            electric_current: ElectricCurrent::new(electric_current),
            temperature: Temperature::new(temperature),
            substance_amount: SubstanceAmount::new(substance_amount),
            luminous_intensity: LuminousIntensity::new(luminous_intensity),
        }
    }

    pub const fn time(&self) -> Time {
        self.time
    }

    pub const fn length(&self) -> Length {
        self.length
    }

    pub const fn mass(&self) -> Mass {
        self.mass
    }

    pub const fn electric_current(&self) -> ElectricCurrent {
        self.electric_current
    }

    pub const fn temperature(&self) -> Temperature {
        self.temperature
    }

    pub const fn substance_amount(&self) -> SubstanceAmount {
        self.substance_amount
    }

    pub const fn luminous_intensity(&self) -> LuminousIntensity {
        self.luminous_intensity
    }

    pub const fn is_dimensionless(&self) -> bool {
        let [t, l, m, i, theta, n, j] = self.exponents();
        t == 0 && l == 0 && m == 0 && i == 0 && theta == 0 && n == 0 && j == 0
    }

    const fn exponents(&self) -> [i8; 7] {
        [
            self.time.value(),
            self.length.value(),
            self.mass.value(),
            self.electric_current.value(),
            self.temperature.value(),
            self.substance_amount.value(),
            self.luminous_intensity.value(),
        ]
    }

    /// Dimension of the product of two quantities (exponents add).
    pub const fn product(self, other: Self) -> Self {
        let a = self.exponents();
        let b = other.exponents();
        Self::new(
            a[0] + b[0],
            a[1] + b[1],
            a[2] + b[2],
            a[3] + b[3],
            a[4] + b[4],
            a[5] + b[5],
            a[6] + b[6],
        )
    }

    /// Dimension of the quotient of two quantities (exponents subtract).
    pub const fn quotient(self, other: Self) -> Self {
        let a = self.exponents();
        let b = other.exponents();
        Self::new(
            a[0] - b[0],
            a[1] - b[1],
            a[2] - b[2],
            a[3] - b[3],
            a[4] - b[4],
            a[5] - b[5],
            a[6] - b[6],
        )
    }

    pub const fn power(self, exponent: i8) -> Self {
        let a = self.exponents();
        Self::new(
            a[0] * exponent,
            a[1] * exponent,
            a[2] * exponent,
            a[3] * exponent,
            a[4] * exponent,
            a[5] * exponent,
            a[6] * exponent,
        )
    }

    /// Non-zero dimensions as (key, abbreviation notation, exponent).
    fn entries(&self) -> Vec<(&'static str, String, i8)> {
        [
            ("time", self.time.print(), self.time.value()),
            ("length", self.length.print(), self.length.value()),
            ("mass", self.mass.print(), self.mass.value()),
            (
                "electric_current",
                self.electric_current.print(),
                self.electric_current.value(),
            ),
            (
                "temperature",
                self.temperature.print(),
                self.temperature.value(),
            ),
            (
                "substance_amount",
                self.substance_amount.print(),
                self.substance_amount.value(),
            ),
            (
                "luminous_intensity",
                self.luminous_intensity.print(),
                self.luminous_intensity.value(),
            ),
        ]
        .into_iter()
        .filter(|(_, _, exponent)| *exponent != 0)
        .collect()
    }

    /// `"T^(-2)·L^(-1)·M"` style notation, or `"1"` when dimensionless.
    pub fn print(&self) -> String {
        let entries = self.entries();
        if entries.is_empty() {
            return "1".to_string();
        }
        entries
            .into_iter()
            .map(|(_, notation, _)| notation)
            .collect::<Vec<_>>()
            .join("·")
    }

    pub fn json(&self) -> String {
        let body = self
            .entries()
            .into_iter()
            .map(|(key, _, exponent)| format!("\"{key}\":{exponent}"))
            .collect::<Vec<_>>()
            .join(",");
        format!("{{{body}}}")
    }

    pub fn xml(&self) -> String {
        self.entries()
            .into_iter()
            .map(|(key, _, exponent)| format!("<{key}>{exponent}</{key}>"))
            .collect()
    }

    pub fn yaml(&self) -> String {
        let body = self
            .entries()
            .into_iter()
            .map(|(key, _, exponent)| format!("{key}:{exponent}"))
            .collect::<Vec<_>>()
            .join(",");
        format!("{{{body}}}")
    }
}

impl Mul for DimensionSet {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.product(rhs)
    }
}

impl Div for DimensionSet {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self.quotient(rhs)
    }
}

impl fmt::Display for DimensionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.print())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRESSURE: DimensionSet = DimensionSet::new(-2, -1, 1, 0, 0, 0, 0);

    #[test]
    fn test_print() {
        assert_eq!(DimensionSet::DIMENSIONLESS.print(), "1");
        assert_eq!(PRESSURE.print(), "T^(-2)·L^(-1)·M");
        assert_eq!(
            DimensionSet::new(0, 0, 0, 0, 1, -1, 0).to_string(),
            "Θ·N^(-1)"
        );
    }

    #[test]
    fn test_structured_text() {
        assert_eq!(PRESSURE.json(), r#"{"time":-2,"length":-1,"mass":1}"#);
        assert_eq!(
            PRESSURE.xml(),
            "<time>-2</time><length>-1</length><mass>1</mass>"
        );
        assert_eq!(PRESSURE.yaml(), "{time:-2,length:-1,mass:1}");
        assert_eq!(DimensionSet::DIMENSIONLESS.json(), "{}");
    }

    #[test]
    fn test_algebra() {
        let length = DimensionSet::new(0, 1, 0, 0, 0, 0, 0);
        let time = DimensionSet::new(1, 0, 0, 0, 0, 0, 0);
        let speed = length / time;
        assert_eq!(speed, DimensionSet::new(-1, 1, 0, 0, 0, 0, 0));
        assert_eq!(speed * time, length);
        assert_eq!(length.power(3), DimensionSet::new(0, 3, 0, 0, 0, 0, 0));
        assert!((speed / speed).is_dimensionless());
    }

    #[test]
    fn test_lexicographic_order() {
        let a = DimensionSet::new(-1, 5, 0, 0, 0, 0, 0);
        let b = DimensionSet::new(0, -5, 0, 0, 0, 0, 0);
        assert!(a < b);
        let c = DimensionSet::new(0, -5, 0, 0, 0, 0, 1);
        assert!(b < c);
    }

    #[test]
    fn test_accessors() {
        assert_eq!(PRESSURE.mass().value(), 1);
        assert_eq!(PRESSURE.time().value(), -2);
        assert_eq!(PRESSURE.luminous_intensity().value(), 0);
    }
}
