//! A `(value, unit)` pair as it appears in configuration files.

use crate::error::UnitError;
use crate::quantity::DimensionalScalar;
use crate::unit::Unit;
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

/// A scalar with its unit spelled out, e.g. `{ value = 9.81, unit = "m/s^2" }`.
///
/// The unit stays a string until [`WithUnit::resolve`] parses it against the
/// family `U`, so a config file can use any accepted spelling.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(bound = "")]
pub struct WithUnit<U: Unit> {
    pub value: f64,
    pub unit: String,
    #[serde(skip)]
    _marker: PhantomData<U>,
}

impl<U: Unit> WithUnit<U> {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
            _marker: PhantomData,
        }
    }

    /// Expresses `quantity` in `unit`, written with the unit's abbreviation.
    pub fn from_quantity(quantity: &DimensionalScalar<U>, unit: U) -> Self {
        Self::new(quantity.value_in(unit), unit.abbreviation())
    }

    pub fn resolve(&self) -> Result<DimensionalScalar<U>, UnitError> {
        let unit = self.unit.parse::<U>().inspect_err(|error| {
            tracing::debug!(value = self.value, unit = %self.unit, %error, "unresolvable quantity");
        })?;
        Ok(DimensionalScalar::new(self.value, unit))
    }
}

impl<U: Unit> From<DimensionalScalar<U>> for WithUnit<U> {
    fn from(quantity: DimensionalScalar<U>) -> Self {
        Self::from_quantity(&quantity, U::STANDARD)
    }
}

impl<U: Unit> TryFrom<&WithUnit<U>> for DimensionalScalar<U> {
    type Error = UnitError;

    fn try_from(value: &WithUnit<U>) -> Result<Self, UnitError> {
        value.resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantities::{Length, ScalarAcceleration};
    use crate::unit;
    use approx::assert_relative_eq;

    #[derive(Debug, Deserialize, Serialize)]
    struct Site {
        gravity: WithUnit<unit::Acceleration>,
        height: WithUnit<unit::Length>,
    }

    #[test]
    fn test_resolve_from_toml() -> Result<(), Box<dyn std::error::Error>> {
        let site: Site = toml::from_str(
            r#"
            gravity = { value = 32.174, unit = "ft/s^2" }
            height = { value = 12, unit = "inches" }
            "#,
        )?;
        let gravity: ScalarAcceleration = site.gravity.resolve()?.into();
        assert_relative_eq!(gravity.value(), 9.8066352, max_relative = 1e-12);
        let height: Length = site.height.resolve()?.into();
        assert_relative_eq!(height.value(), 0.3048, max_relative = 1e-15);
        Ok(())
    }

    #[test]
    fn test_unknown_unit_is_reported() {
        let bogus = WithUnit::<unit::Length>::new(1.0, "furlongs");
        assert_eq!(
            bogus.resolve(),
            Err(UnitError::UnknownUnit {
                family: "Length",
                spelling: "furlongs".to_string()
            })
        );
    }

    #[test]
    fn test_json_round_trip() -> Result<(), serde_json::Error> {
        let speed = DimensionalScalar::new(10.0, unit::Speed::MetrePerSecond);
        let carried = WithUnit::from_quantity(&speed, unit::Speed::KilometrePerHour);
        assert_eq!(carried.unit, "km/hr");
        let json = serde_json::to_string(&carried)?;
        let back: WithUnit<unit::Speed> = serde_json::from_str(&json)?;
        assert_eq!(back, carried);
        let resolved = DimensionalScalar::try_from(&back);
        assert!(resolved.is_ok_and(|q| (q.value() - 10.0).abs() < 1e-12));
        Ok(())
    }

    #[test]
    fn test_rendered_json_parses() -> Result<(), serde_json::Error> {
        let pressure = DimensionalScalar::new(14.7, unit::Pressure::PoundPerSquareInch);
        let rendered: serde_json::Value = serde_json::from_str(&pressure.json_in(unit::Pressure::PoundPerSquareInch))?;
        assert_eq!(rendered["unit"], "psi");
        assert_eq!(rendered["value"], 14.7);
        let carried: WithUnit<unit::Pressure> = serde_json::from_value(rendered)?;
        assert_eq!(carried.resolve().ok(), Some(pressure));
        Ok(())
    }

    #[test]
    fn test_from_standard_quantity() {
        let carried: WithUnit<unit::Length> = DimensionalScalar::new(2.0, unit::Length::Kilometre).into();
        assert_eq!(carried.unit, "m");
        assert_relative_eq!(carried.value, 2000.0);
    }
}
