use super::{Components, SymmetricDyad, Vector};
use crate::format::{self, Precision, Render};
use nalgebra as na;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

const LABELS: [&str; 9] = ["xx", "xy", "xz", "yx", "yy", "yz", "zx", "zy", "zz"];

/// A general rank-2 tensor in three dimensions, stored row-major.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Dyad([f64; 9]);

impl Dyad {
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        xx: f64,
        xy: f64,
        xz: f64,
        yx: f64,
        yy: f64,
        yz: f64,
        zx: f64,
        zy: f64,
        zz: f64,
    ) -> Self {
        Self([xx, xy, xz, yx, yy, yz, zx, zy, zz])
    }

    pub const fn zero() -> Self {
        Self([0.0; 9])
    }

    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0)
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
        self.0[3]
    }

    pub const fn yy(&self) -> f64 {
        self.0[4]
    }

    pub const fn yz(&self) -> f64 {
        self.0[5]
    }

    pub const fn zx(&self) -> f64 {
        self.0[6]
    }

    pub const fn zy(&self) -> f64 {
        self.0[7]
    }

    pub const fn zz(&self) -> f64 {
        self.0[8]
    }

    pub const fn as_array(&self) -> [f64; 9] {
        self.0
    }

    /// Row `index`, or `None` past the third row.
    pub fn row(&self, index: usize) -> Option<Vector> {
        let start = index.checked_mul(3).filter(|start| *start < self.0.len())?;
        Some(Vector::new(self.0[start], self.0[start + 1], self.0[start + 2]))
    }

    /// Column `index`, or `None` past the third column.
    pub fn column(&self, index: usize) -> Option<Vector> {
        (index < 3).then(|| Vector::new(self.0[index], self.0[index + 3], self.0[index + 6]))
    }

    pub fn trace(&self) -> f64 {
        self.xx() + self.yy() + self.zz()
    }

    pub fn determinant(&self) -> f64 {
        na::Matrix3::from(*self).determinant()
    }

    pub fn transpose(&self) -> Dyad {
        Dyad::new(
            self.xx(),
            self.yx(),
            self.zx(),
            self.xy(),
            self.yy(),
            self.zy(),
            self.xz(),
            self.yz(),
            self.zz(),
        )
    }

    /// `None` when the tensor is singular.
    pub fn inverse(&self) -> Option<Dyad> {
        na::Matrix3::from(*self).try_inverse().map(Dyad::from)
    }

    pub fn is_symmetric(&self) -> bool {
        self.xy() == self.yx() && self.xz() == self.zx() && self.yz() == self.zy()
    }

    /// `(D + Dᵀ) / 2`.
    pub fn symmetric_part(&self) -> SymmetricDyad {
        SymmetricDyad::new(
            self.xx(),
            0.5 * (self.xy() + self.yx()),
            0.5 * (self.xz() + self.zx()),
            self.yy(),
            0.5 * (self.yz() + self.zy()),
            self.zz(),
        )
    }

    /// `(D - Dᵀ) / 2`.
    pub fn skew_symmetric_part(&self) -> Dyad {
        (*self - self.transpose()) * 0.5
    }
}

impl Components for Dyad {
    fn components(&self) -> &[f64] {
        &self.0
    }

    fn components_mut(&mut self) -> &mut [f64] {
        &mut self.0
    }
}

impl Render for Dyad {
    fn print(&self, precision: Precision) -> String {
        format::rows(&[&self.0[0..3], &self.0[3..6], &self.0[6..9]], precision)
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

impl fmt::Display for Dyad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.print(Precision::Double))
    }
}

impl From<SymmetricDyad> for Dyad {
    fn from(s: SymmetricDyad) -> Self {
        Dyad::new(
            s.xx(),
            s.xy(),
            s.xz(),
            s.yx(),
            s.yy(),
            s.yz(),
            s.zx(),
            s.zy(),
            s.zz(),
        )
    }
}

impl From<Dyad> for na::Matrix3<f64> {
    fn from(d: Dyad) -> Self {
        na::Matrix3::from_row_slice(&d.0)
    }
}

impl From<na::Matrix3<f64>> for Dyad {
    fn from(m: na::Matrix3<f64>) -> Self {
        Dyad::new(
            m[(0, 0)],
            m[(0, 1)],
            m[(0, 2)],
            m[(1, 0)],
            m[(1, 1)],
            m[(1, 2)],
            m[(2, 0)],
            m[(2, 1)],
            m[(2, 2)],
        )
    }
}

impl Add for Dyad {
    type Output = Dyad;

    fn add(mut self, rhs: Dyad) -> Dyad {
        for (a, b) in self.0.iter_mut().zip(rhs.0) {
            *a += b;
        }
        self
    }
}

impl Sub for Dyad {
    type Output = Dyad;

    fn sub(mut self, rhs: Dyad) -> Dyad {
        for (a, b) in self.0.iter_mut().zip(rhs.0) {
            *a -= b;
        }
        self
    }
}

impl Neg for Dyad {
    type Output = Dyad;

    fn neg(self) -> Dyad {
        self.map_components(|c| -c)
    }
}

impl Mul<f64> for Dyad {
    type Output = Dyad;

    fn mul(self, rhs: f64) -> Dyad {
        self.map_components(|c| c * rhs)
    }
}

impl Mul<Dyad> for f64 {
    type Output = Dyad;

    fn mul(self, rhs: Dyad) -> Dyad {
        rhs * self
    }
}

impl Div<f64> for Dyad {
    type Output = Dyad;

    fn div(self, rhs: f64) -> Dyad {
        self.map_components(|c| c / rhs)
    }
}

impl Mul<Vector> for Dyad {
    type Output = Vector;

    fn mul(self, rhs: Vector) -> Vector {
        let c = self.0;
        Vector::new(
            c[0] * rhs.x() + c[1] * rhs.y() + c[2] * rhs.z(),
            c[3] * rhs.x() + c[4] * rhs.y() + c[5] * rhs.z(),
            c[6] * rhs.x() + c[7] * rhs.y() + c[8] * rhs.z(),
        )
    }
}

impl Mul for Dyad {
    type Output = Dyad;

    fn mul(self, rhs: Dyad) -> Dyad {
        Dyad::from(na::Matrix3::from(self) * na::Matrix3::from(rhs))
    }
}

impl AddAssign for Dyad {
    fn add_assign(&mut self, rhs: Dyad) {
        *self = *self + rhs;
    }
}

impl SubAssign for Dyad {
    fn sub_assign(&mut self, rhs: Dyad) {
        *self = *self - rhs;
    }
}

impl MulAssign<f64> for Dyad {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl DivAssign<f64> for Dyad {
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> Dyad {
        Dyad::new(2.0, 1.0, 0.0, 0.0, 3.0, -1.0, 4.0, 0.0, 1.0)
    }

    #[test]
    fn test_trace_and_determinant() {
        let d = sample();
        assert_eq!(d.trace(), 6.0);
        // 2(3·1 - (-1)·0) - 1(0·1 - (-1)·4) + 0 = 6 - 4
        assert_relative_eq!(d.determinant(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_inverse() {
        let d = sample();
        let product = d * d.inverse().expect("sample is invertible");
        for (actual, expected) in product.as_array().iter().zip(Dyad::identity().as_array()) {
            assert_relative_eq!(*actual, expected, epsilon = 1e-12);
        }
        assert!(Dyad::zero().inverse().is_none());
    }

    #[test]
    fn test_transpose_and_parts() {
        let d = sample();
        assert_eq!(d.transpose().zx(), d.xz());
        assert_eq!(d.transpose().transpose(), d);
        let recombined = Dyad::from(d.symmetric_part()) + d.skew_symmetric_part();
        for (actual, expected) in recombined.as_array().iter().zip(d.as_array()) {
            assert_relative_eq!(*actual, expected);
        }
        assert!(!d.is_symmetric());
        assert!(Dyad::from(d.symmetric_part()).is_symmetric());
    }

    #[test]
    fn test_vector_product() {
        let v = sample() * Vector::new(1.0, 1.0, 1.0);
        assert_eq!(v, Vector::new(3.0, 2.0, 5.0));
        assert_eq!(sample().row(2), Some(Vector::new(4.0, 0.0, 1.0)));
        assert_eq!(sample().column(1), Some(Vector::new(1.0, 3.0, 0.0)));
        assert_eq!(sample().row(3), None);
        assert_eq!(sample().column(3), None);
        assert_eq!(sample().row(usize::MAX), None);
        assert_eq!(sample().column(usize::MAX), None);
    }

    #[test]
    fn test_nalgebra_round_trip() {
        let m = na::Matrix3::from(sample());
        assert_eq!(m[(2, 0)], 4.0);
        assert_eq!(Dyad::from(m), sample());
    }

    #[test]
    fn test_render() {
        assert_eq!(
            Dyad::identity().to_string(),
            "(1, 0, 0; 0, 1, 0; 0, 0, 1)"
        );
        assert_eq!(
            Dyad::identity().yaml(Precision::Double),
            "{xx:1,xy:0,xz:0,yx:0,yy:1,yz:0,zx:0,zy:0,zz:1}"
        );
    }
}
