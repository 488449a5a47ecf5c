use crate::dimension::DimensionSet;
use crate::format::Precision;
use crate::value::{Components, Dyad, SymmetricDyad, Vector};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A value of shape `C` with no physical dimension and no unit.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dimensionless<C: Components = f64> {
    value: C,
}

pub type DimensionlessScalar = Dimensionless<f64>;
pub type DimensionlessVector = Dimensionless<Vector>;
pub type DimensionlessDyad = Dimensionless<Dyad>;
pub type DimensionlessSymmetricDyad = Dimensionless<SymmetricDyad>;

impl<C: Components> Dimensionless<C> {
    pub const fn new(value: C) -> Self {
        Self { value }
    }

    pub fn zero() -> Self {
        Self::new(C::default())
    }

    pub const fn dimensions() -> DimensionSet {
        DimensionSet::DIMENSIONLESS
    }

    pub const fn value(&self) -> C {
        self.value
    }

    pub fn mutable_value(&mut self) -> &mut C {
        &mut self.value
    }

    pub fn set_value(&mut self, value: C) {
        self.value = value;
    }

    pub fn print(&self) -> String {
        self.value.print(Precision::Double)
    }

    pub fn print_with(&self, precision: Precision) -> String {
        self.value.print(precision)
    }

    pub fn json(&self) -> String {
        self.value.json(Precision::Double)
    }

    pub fn json_with(&self, precision: Precision) -> String {
        self.value.json(precision)
    }

    pub fn xml(&self) -> String {
        self.value.xml(Precision::Double)
    }

    pub fn xml_with(&self, precision: Precision) -> String {
        self.value.xml(precision)
    }

    pub fn yaml(&self) -> String {
        self.value.yaml(Precision::Double)
    }

    pub fn yaml_with(&self, precision: Precision) -> String {
        self.value.yaml(precision)
    }
}

impl<C: Components> PartialEq for Dimensionless<C> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<C: Components> PartialOrd for Dimensionless<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<C: Components> Hash for Dimensionless<C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.value.hash_value());
    }
}

impl<C: Components> fmt::Display for Dimensionless<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.print())
    }
}

impl<C: Components> Add for Dimensionless<C> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.value + rhs.value)
    }
}

impl<C: Components> Sub for Dimensionless<C> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.value - rhs.value)
    }
}

impl<C: Components> Neg for Dimensionless<C> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.value)
    }
}

impl<C: Components> Mul<f64> for Dimensionless<C> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.value * rhs)
    }
}

impl<C: Components> Div<f64> for Dimensionless<C> {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::new(self.value / rhs)
    }
}

impl<C: Components> AddAssign for Dimensionless<C> {
    fn add_assign(&mut self, rhs: Self) {
        self.value = self.value + rhs.value;
    }
}

impl<C: Components> SubAssign for Dimensionless<C> {
    fn sub_assign(&mut self, rhs: Self) {
        self.value = self.value - rhs.value;
    }
}

impl<C: Components> MulAssign<f64> for Dimensionless<C> {
    fn mul_assign(&mut self, rhs: f64) {
        self.value = self.value * rhs;
    }
}

impl<C: Components> DivAssign<f64> for Dimensionless<C> {
    fn div_assign(&mut self, rhs: f64) {
        self.value = self.value / rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats_have_no_unit() {
        let ratio = DimensionlessScalar::new(0.3);
        assert_eq!(ratio.print(), "0.3");
        assert_eq!(ratio.json(), "0.3");
        assert_eq!(ratio.to_string(), "0.3");
        let strain = DimensionlessSymmetricDyad::new(SymmetricDyad::new(1.0, 0.0, 0.0, 2.0, 0.0, 3.0));
        assert_eq!(strain.print(), "(1, 0, 0; 2, 0; 3)");
        assert_eq!(strain.yaml(), "{xx:1,xy:0,xz:0,yy:2,yz:0,zz:3}");
    }

    #[test]
    fn test_dimensions() {
        assert!(DimensionlessVector::dimensions().is_dimensionless());
    }

    #[test]
    fn test_arithmetic_and_mutation() {
        let mut a = DimensionlessVector::new(Vector::new(1.0, 2.0, 3.0));
        a += DimensionlessVector::new(Vector::new(1.0, 0.0, 0.0));
        a *= 2.0;
        assert_eq!(a.value(), Vector::new(4.0, 4.0, 6.0));
        a.mutable_value().set_z(0.0);
        assert_eq!((-a).value(), Vector::new(-4.0, -4.0, 0.0));
        assert_eq!(DimensionlessDyad::zero(), DimensionlessDyad::default());
    }
}
