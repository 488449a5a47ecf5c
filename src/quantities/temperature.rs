//! Absolute temperature and temperature difference.
//!
//! An absolute temperature sits on an offset scale (°C, °F), so it cannot
//! be added to another or scaled. Differences are ordinary linear
//! quantities and convert without offsets.

use std::ops::{Add, AddAssign, Sub, SubAssign};

scalar_quantity! {
    /// Absolute temperature, stored in kelvin.
    ///
    /// Subtracting two temperatures gives a [`TemperatureDifference`], which
    /// can be added back. Two temperatures cannot be added or scaled.
    ///
    /// ```
    /// use physical_quantity::{Temperature, unit};
    ///
    /// let warm = Temperature::new(20.0, unit::Temperature::Celsius);
    /// let cool = Temperature::new(10.0, unit::Temperature::Celsius);
    /// let rise = warm - cool;
    /// assert!((rise.value() - 10.0).abs() < 1e-9);
    /// assert!(((cool + rise).value() - warm.value()).abs() < 1e-9);
    /// ```
    ///
    /// ```compile_fail
    /// use physical_quantity::{Temperature, unit};
    ///
    /// let warm = Temperature::new(20.0, unit::Temperature::Celsius);
    /// let cool = Temperature::new(10.0, unit::Temperature::Celsius);
    /// let _ = *warm + *cool;
    /// ```
    ///
    /// ```compile_fail
    /// use physical_quantity::{Temperature, unit};
    ///
    /// let warm = Temperature::new(20.0, unit::Temperature::Celsius);
    /// let _ = warm * 2.0;
    /// ```
    affine Temperature: Temperature
}

scalar_quantity! {
    /// An interval between two temperatures, stored in kelvin.
    TemperatureDifference: TemperatureDifference
}

linear_ops!(TemperatureDifference);

impl Sub for Temperature {
    type Output = TemperatureDifference;

    fn sub(self, rhs: Temperature) -> TemperatureDifference {
        TemperatureDifference::from_standard(self.value() - rhs.value())
    }
}

impl Add<TemperatureDifference> for Temperature {
    type Output = Temperature;

    fn add(self, rhs: TemperatureDifference) -> Temperature {
        Temperature::from_standard(self.value() + rhs.value())
    }
}

impl Add<Temperature> for TemperatureDifference {
    type Output = Temperature;

    fn add(self, rhs: Temperature) -> Temperature {
        rhs + self
    }
}

impl Sub<TemperatureDifference> for Temperature {
    type Output = Temperature;

    fn sub(self, rhs: TemperatureDifference) -> Temperature {
        Temperature::from_standard(self.value() - rhs.value())
    }
}

impl AddAssign<TemperatureDifference> for Temperature {
    fn add_assign(&mut self, rhs: TemperatureDifference) {
        *self = *self + rhs;
    }
}

impl SubAssign<TemperatureDifference> for Temperature {
    fn sub_assign(&mut self, rhs: TemperatureDifference) {
        *self = *self - rhs;
    }
}
