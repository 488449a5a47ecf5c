use super::{Components, Dyad, Vector};
use crate::format::{self, Precision, Render};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

const LABELS: [&str; 6] = ["xx", "xy", "xz", "yy", "yz", "zz"];

/// A symmetric rank-2 tensor: only the upper triangle is stored, and
/// `yx == xy`, `zx == xz`, `zy == yz`.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct SymmetricDyad([f64; 6]);

impl SymmetricDyad {
    pub const fn new(xx: f64, xy: f64, xz: f64, yy: f64, yz: f64, zz: f64) -> Self {
        Self([xx, xy, xz, yy, yz, zz])
    }

    pub const fn zero() -> Self {
        Self([0.0; 6])
    }

    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 1.0)
    }

    pub const fn xx(&self) -> f64 {
        self.0[0]
    }

    pub const fn xy(&self) -> f64 {
        self.0[1]
    }

    pub const fn xz(&self) -> f64 {
        self.0[2]
    }

    pub const fn yx(&self) -> f64 {
        self.0[1]
    }

    pub const fn yy(&self) -> f64 {
        self.0[3]
    }

    pub const fn yz(&self) -> f64 {
        self.0[4]
    }

    pub const fn zx(&self) -> f64 {
        self.0[2]
    }

    pub const fn zy(&self) -> f64 {
        self.0[4]
    }

    pub const fn zz(&self) -> f64 {
        self.0[5]
    }

    pub const fn as_array(&self) -> [f64; 6] {
        self.0
    }

    pub fn trace(&self) -> f64 {
        self.xx() + self.yy() + self.zz()
    }

    pub fn determinant(&self) -> f64 {
        let [xx, xy, xz, yy, yz, zz] = self.0;
        xx * (yy * zz - yz * yz) - xy * (xy * zz - yz * xz) + xz * (xy * yz - yy * xz)
    }

    pub fn transpose(&self) -> SymmetricDyad {
        *self
    }

    /// `None` when the tensor is singular.
    pub fn inverse(&self) -> Option<SymmetricDyad> {
        let determinant = self.determinant();
        if determinant == 0.0 {
            return None;
        }
        let [xx, xy, xz, yy, yz, zz] = self.0;
        Some(
            SymmetricDyad::new(
                yy * zz - yz * yz,
                xz * yz - xy * zz,
                xy * yz - xz * yy,
                xx * zz - xz * xz,
                xy * xz - xx * yz,
                xx * yy - xy * xy,
            ) / determinant,
        )
    }

    /// Deviatoric part: the tensor minus its isotropic (mean) part.
    pub fn deviatoric(&self) -> SymmetricDyad {
        *self - SymmetricDyad::identity() * (self.trace() / 3.0)
    }

    /// `sqrt(3/2 s:s)` where `s` is the deviatoric part.
    pub fn von_mises(&self) -> f64 {
        let [xx, xy, xz, yy, yz, zz] = self.deviatoric().0;
        let contraction = xx * xx + yy * yy + zz * zz + 2.0 * (xy * xy + xz * xz + yz * yz);
        (1.5 * contraction).sqrt()
    }
}

impl Components for SymmetricDyad {
    fn components(&self) -> &[f64] {
        &self.0
    }

    fn components_mut(&mut self) -> &mut [f64] {
        &mut self.0
    }
}

impl Render for SymmetricDyad {
    fn print(&self, precision: Precision) -> String {
        format::rows(&[&self.0[0..3], &self.0[3..5], &self.0[5..6]], precision)
    }

    fn json(&self, precision: Precision) -> String {
        format::labelled(&LABELS, &self.0, precision).0
    }

    fn xml(&self, precision: Precision) -> String {
        format::labelled(&LABELS, &self.0, precision).1
    }

    fn yaml(&self, precision: Precision) -> String {
        format::labelled(&LABELS, &self.0, precision).2
    }
}

impl fmt::Display for SymmetricDyad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.print(Precision::Double))
    }
}

impl Add for SymmetricDyad {
    type Output = SymmetricDyad;

    fn add(mut self, rhs: SymmetricDyad) -> SymmetricDyad {
        for (a, b) in self.0.iter_mut().zip(rhs.0) {
            *a += b;
        }
        self
    }
}

impl Sub for SymmetricDyad {
    type Output = SymmetricDyad;

    fn sub(mut self, rhs: SymmetricDyad) -> SymmetricDyad {
        for (a, b) in self.0.iter_mut().zip(rhs.0) {
            *a -= b;
        }
        self
    }
}

impl Neg for SymmetricDyad {
    type Output = SymmetricDyad;

    fn neg(self) -> SymmetricDyad {
        self.map_components(|c| -c)
    }
}

impl Mul<f64> for SymmetricDyad {
    type Output = SymmetricDyad;

    fn mul(self, rhs: f64) -> SymmetricDyad {
        self.map_components(|c| c * rhs)
    }
}

impl Mul<SymmetricDyad> for f64 {
    type Output = SymmetricDyad;

    fn mul(self, rhs: SymmetricDyad) -> SymmetricDyad {
        rhs * self
    }
}

impl Div<f64> for SymmetricDyad {
    type Output = SymmetricDyad;

    fn div(self, rhs: f64) -> SymmetricDyad {
        self.map_components(|c| c / rhs)
    }
}

impl Mul<Vector> for SymmetricDyad {
    type Output = Vector;

    fn mul(self, rhs: Vector) -> Vector {
        Vector::new(
            self.xx() * rhs.x() + self.xy() * rhs.y() + self.xz() * rhs.z(),
            self.yx() * rhs.x() + self.yy() * rhs.y() + self.yz() * rhs.z(),
            self.zx() * rhs.x() + self.zy() * rhs.y() + self.zz() * rhs.z(),
        )
    }
}

impl Mul for SymmetricDyad {
    type Output = Dyad;

    fn mul(self, rhs: SymmetricDyad) -> Dyad {
        Dyad::from(self) * Dyad::from(rhs)
    }
}

impl AddAssign for SymmetricDyad {
    fn add_assign(&mut self, rhs: SymmetricDyad) {
        *self = *self + rhs;
    }
}

impl SubAssign for SymmetricDyad {
    fn sub_assign(&mut self, rhs: SymmetricDyad) {
        *self = *self - rhs;
    }
}

impl MulAssign<f64> for SymmetricDyad {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl DivAssign<f64> for SymmetricDyad {
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> SymmetricDyad {
        SymmetricDyad::new(4.0, 1.0, 0.5, 3.0, -1.0, 2.0)
    }

    #[test]
    fn test_symmetric_accessors() {
        let s = sample();
        assert_eq!(s.yx(), s.xy());
        assert_eq!(s.zx(), s.xz());
        assert_eq!(s.zy(), s.yz());
        assert_eq!(s.transpose(), s);
    }

    #[test]
    fn test_determinant_matches_general_dyad() {
        let s = sample();
        assert_relative_eq!(s.determinant(), Dyad::from(s).determinant(), epsilon = 1e-12);
    }

    #[test]
    fn test_inverse() {
        let s = sample();
        let product = s * s.inverse().expect("sample is invertible");
        for (actual, expected) in product.as_array().iter().zip(Dyad::identity().as_array()) {
            assert_relative_eq!(*actual, expected, epsilon = 1e-12);
        }
        assert!(SymmetricDyad::zero().inverse().is_none());
    }

    #[test]
    fn test_von_mises_of_uniaxial_state() {
        let uniaxial = SymmetricDyad::new(5.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        assert_relative_eq!(uniaxial.von_mises(), 5.0, epsilon = 1e-12);
        assert_relative_eq!(uniaxial.deviatoric().trace(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_vector_product() {
        let v = sample() * Vector::new(1.0, 0.0, 0.0);
        assert_eq!(v, Vector::new(4.0, 1.0, 0.5));
    }

    #[test]
    fn test_render() {
        let s = SymmetricDyad::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        assert_eq!(s.to_string(), "(1, 2, 3; 4, 5; 6)");
        assert_eq!(
            s.json(Precision::Double),
            r#"{"xx":1,"xy":2,"xz":3,"yy":4,"yz":5,"zz":6}"#
        );
    }
}
