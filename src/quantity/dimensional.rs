use crate::dimension::DimensionSet;
use crate::format::Precision;
use crate::unit::{LinearUnit, Unit};
use crate::value::{Components, Dyad, SymmetricDyad, Vector};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A value of shape `C` measured in unit family `U`.
///
/// The value is always held in `U::STANDARD`; the unit passed to
/// [`Dimensional::new`] is not remembered. Equality, ordering and hashing
/// therefore compare the stored standard-unit values.
#[derive(Debug, Clone, Copy)]
pub struct Dimensional<U: Unit, C: Components = f64> {
    value: C,
    unit: PhantomData<U>,
}

pub type DimensionalScalar<U> = Dimensional<U, f64>;
pub type DimensionalVector<U> = Dimensional<U, Vector>;
pub type DimensionalDyad<U> = Dimensional<U, Dyad>;
pub type DimensionalSymmetricDyad<U> = Dimensional<U, SymmetricDyad>;

impl<U: Unit, C: Components> Dimensional<U, C> {
    /// Converts `value` from `unit` to the standard unit and stores it.
    pub fn new(value: C, unit: U) -> Self {
        Self::from_standard(U::convert_copy(value, unit, U::STANDARD))
    }

    /// Wraps a value that is already expressed in the standard unit.
    pub(crate) const fn from_standard(value: C) -> Self {
        Self {
            value,
            unit: PhantomData,
        }
    }

    pub fn zero() -> Self {
        Self::from_standard(C::default())
    }

    pub const fn standard_unit() -> U {
        U::STANDARD
    }

    pub const fn dimensions() -> DimensionSet {
        U::DIMENSIONS
    }

    /// The stored value, in the standard unit.
    pub const fn value(&self) -> C {
        self.value
    }

    /// A converted copy of the value; the stored value is unchanged.
    pub fn value_in(&self, unit: U) -> C {
        U::convert_copy(self.value, U::STANDARD, unit)
    }

    pub fn mutable_value(&mut self) -> &mut C {
        &mut self.value
    }

    pub fn set_value(&mut self, value: C) {
        self.value = value;
    }

    pub fn print(&self) -> String {
        self.print_with(U::STANDARD, Precision::Double)
    }

    pub fn print_in(&self, unit: U) -> String {
        self.print_with(unit, Precision::Double)
    }

    /// `"<value> <abbreviation>"`.
    pub fn print_with(&self, unit: U, precision: Precision) -> String {
        format!("{} {}", self.value_in(unit).print(precision), unit.abbreviation())
    }

    pub fn json(&self) -> String {
        self.json_with(U::STANDARD, Precision::Double)
    }

    pub fn json_in(&self, unit: U) -> String {
        self.json_with(unit, Precision::Double)
    }

    pub fn json_with(&self, unit: U, precision: Precision) -> String {
        format!(
            "{{\"value\":{},\"unit\":\"{}\"}}",
            self.value_in(unit).json(precision),
            unit.abbreviation()
        )
    }

    pub fn xml(&self) -> String {
        self.xml_with(U::STANDARD, Precision::Double)
    }

    pub fn xml_in(&self, unit: U) -> String {
        self.xml_with(unit, Precision::Double)
    }

    pub fn xml_with(&self, unit: U, precision: Precision) -> String {
        format!(
            "<value>{}</value><unit>{}</unit>",
            self.value_in(unit).xml(precision),
            unit.abbreviation()
        )
    }

    pub fn yaml(&self) -> String {
        self.yaml_with(U::STANDARD, Precision::Double)
    }

    pub fn yaml_in(&self, unit: U) -> String {
        self.yaml_with(unit, Precision::Double)
    }

    pub fn yaml_with(&self, unit: U, precision: Precision) -> String {
        format!(
            "{{value:{},unit:\"{}\"}}",
            self.value_in(unit).yaml(precision),
            unit.abbreviation()
        )
    }
}

impl<U: Unit> Dimensional<U, Vector> {
    pub fn x(&self) -> DimensionalScalar<U> {
        Dimensional::from_standard(self.value.x())
    }

    pub fn y(&self) -> DimensionalScalar<U> {
        Dimensional::from_standard(self.value.y())
    }

    pub fn z(&self) -> DimensionalScalar<U> {
        Dimensional::from_standard(self.value.z())
    }

    pub fn magnitude(&self) -> DimensionalScalar<U> {
        Dimensional::from_standard(self.value.magnitude())
    }

    /// Scales a unit direction by a magnitude.
    pub fn from_magnitude(magnitude: DimensionalScalar<U>, direction: Vector) -> Self {
        Self::from_standard(direction * magnitude.value)
    }
}

impl<U: Unit> Dimensional<U, Dyad> {
    pub fn trace(&self) -> DimensionalScalar<U> {
        Dimensional::from_standard(self.value.trace())
    }

    pub fn transpose(&self) -> Self {
        Self::from_standard(self.value.transpose())
    }
}

impl<U: Unit> Dimensional<U, SymmetricDyad> {
    pub fn trace(&self) -> DimensionalScalar<U> {
        Dimensional::from_standard(self.value.trace())
    }

    pub fn von_mises(&self) -> DimensionalScalar<U> {
        Dimensional::from_standard(self.value.von_mises())
    }
}

impl<U: Unit, C: Components> Default for Dimensional<U, C> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<U: Unit, C: Components> PartialEq for Dimensional<U, C> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<U: Unit, C: Components> PartialOrd for Dimensional<U, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<U: Unit, C: Components> Hash for Dimensional<U, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.value.hash_value());
    }
}

impl<U: Unit, C: Components> fmt::Display for Dimensional<U, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.print())
    }
}

impl<U: LinearUnit, C: Components> Add for Dimensional<U, C> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_standard(self.value + rhs.value)
    }
}

impl<U: LinearUnit, C: Components> Sub for Dimensional<U, C> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_standard(self.value - rhs.value)
    }
}

impl<U: LinearUnit, C: Components> Neg for Dimensional<U, C> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_standard(-self.value)
    }
}

impl<U: LinearUnit, C: Components> Mul<f64> for Dimensional<U, C> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::from_standard(self.value * rhs)
    }
}

impl<U: LinearUnit, C: Components> Mul<Dimensional<U, C>> for f64 {
    type Output = Dimensional<U, C>;

    fn mul(self, rhs: Dimensional<U, C>) -> Dimensional<U, C> {
        rhs * self
    }
}

impl<U: LinearUnit, C: Components> Div<f64> for Dimensional<U, C> {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::from_standard(self.value / rhs)
    }
}

/// Ratio of two scalars of the same family.
impl<U: Unit> Div for Dimensional<U, f64> {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        self.value / rhs.value
    }
}

impl<U: LinearUnit, C: Components> AddAssign for Dimensional<U, C> {
    fn add_assign(&mut self, rhs: Self) {
        self.value = self.value + rhs.value;
    }
}

impl<U: LinearUnit, C: Components> SubAssign for Dimensional<U, C> {
    fn sub_assign(&mut self, rhs: Self) {
        self.value = self.value - rhs.value;
    }
}

impl<U: LinearUnit, C: Components> MulAssign<f64> for Dimensional<U, C> {
    fn mul_assign(&mut self, rhs: f64) {
        self.value = self.value * rhs;
    }
}

impl<U: LinearUnit, C: Components> DivAssign<f64> for Dimensional<U, C> {
    fn div_assign(&mut self, rhs: f64) {
        self.value = self.value / rhs;
    }
}
