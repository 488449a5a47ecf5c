use super::{Components, Dyad};
use crate::format::{self, Precision, Render};
use nalgebra as na;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, Mul, MulAssign, Neg, Sub, SubAssign};

/// Three Cartesian components.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Vector([f64; 3]);

impl Vector {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self([x, y, z])
    }

    pub const fn zero() -> Self {
        Self([0.0; 3])
    }

    pub const fn x(&self) -> f64 {
        self.0[0]
    }

    pub const fn y(&self) -> f64 {
        self.0[1]
    }

    pub const fn z(&self) -> f64 {
        self.0[2]
    }

    pub fn set_x(&mut self, x: f64) {
        self.0[0] = x;
    }

    pub fn set_y(&mut self, y: f64) {
        self.0[1] = y;
    }

    pub fn set_z(&mut self, z: f64) {
        self.0[2] = z;
    }

    pub const fn as_array(&self) -> [f64; 3] {
        self.0
    }

    pub fn magnitude_squared(&self) -> f64 {
        self.dot(self)
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    pub fn dot(&self, other: &Vector) -> f64 {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z()
    }

    pub fn cross(&self, other: &Vector) -> Vector {
        Vector::new(
            self.y() * other.z() - self.z() * other.y(),
            self.z() * other.x() - self.x() * other.z(),
            self.x() * other.y() - self.y() * other.x(),
        )
    }

    /// Outer product `self ⊗ other`.
    pub fn dyadic(&self, other: &Vector) -> Dyad {
        let (a, b) = (self.0, other.0);
        Dyad::new(
            a[0] * b[0],
            a[0] * b[1],
            a[0] * b[2],
            a[1] * b[0],
            a[1] * b[1],
            a[1] * b[2],
            a[2] * b[0],
            a[2] * b[1],
            a[2] * b[2],
        )
    }

    /// Unit vector in the same direction, or the zero vector if this one is zero.
    pub fn normalized(&self) -> Vector {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            Vector::zero()
        } else {
            *self / magnitude
        }
    }

    /// Angle to another vector, in radians, in `[0, π]`.
    pub fn angle_to(&self, other: &Vector) -> f64 {
        let cosine = self.dot(other) / (self.magnitude() * other.magnitude());
        cosine.clamp(-1.0, 1.0).acos()
    }
}

impl Components for Vector {
    fn components(&self) -> &[f64] {
        &self.0
    }

    fn components_mut(&mut self) -> &mut [f64] {
        &mut self.0
    }
}

impl Render for Vector {
    fn print(&self, precision: Precision) -> String {
        format::rows(&[&self.0], precision)
    }

    fn json(&self, precision: Precision) -> String {
        format::labelled(&["x", "y", "z"], &self.0, precision).0
    }

    fn xml(&self, precision: Precision) -> String {
        format::labelled(&["x", "y", "z"], &self.0, precision).1
    }

    fn yaml(&self, precision: Precision) -> String {
        format::labelled(&["x", "y", "z"], &self.0, precision).2
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.print(Precision::Double))
    }
}

impl From<[f64; 3]> for Vector {
    fn from(components: [f64; 3]) -> Self {
        Self(components)
    }
}

impl From<na::Vector3<f64>> for Vector {
    fn from(v: na::Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector> for na::Vector3<f64> {
    fn from(v: Vector) -> Self {
        na::Vector3::new(v.x(), v.y(), v.z())
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x() + rhs.x(), self.y() + rhs.y(), self.z() + rhs.z())
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x() - rhs.x(), self.y() - rhs.y(), self.z() - rhs.z())
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.map_components(|c| -c)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        self.map_components(|c| c * rhs)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;

    fn mul(self, rhs: Vector) -> Vector {
        rhs * self
    }
}

impl Div<f64> for Vector {
    type Output = Vector;

    fn div(self, rhs: f64) -> Vector {
        self.map_components(|c| c / rhs)
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, rhs: Vector) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vector {
    fn sub_assign(&mut self, rhs: Vector) {
        *self = *self - rhs;
    }
}

impl MulAssign<f64> for Vector {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl DivAssign<f64> for Vector {
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_magnitude() {
        assert_eq!(Vector::new(2.0, -3.0, 6.0).magnitude(), 7.0);
        assert_eq!(Vector::zero().magnitude(), 0.0);
    }

    #[test]
    fn test_products() {
        let a = Vector::new(1.0, 0.0, 0.0);
        let b = Vector::new(0.0, 1.0, 0.0);
        assert_eq!(a.dot(&b), 0.0);
        assert_eq!(a.cross(&b), Vector::new(0.0, 0.0, 1.0));
        let outer = Vector::new(1.0, 2.0, 3.0).dyadic(&Vector::new(4.0, 5.0, 6.0));
        assert_eq!(outer.xy(), 5.0);
        assert_eq!(outer.zx(), 12.0);
        assert_eq!(outer.trace(), 4.0 + 10.0 + 18.0);
    }

    #[test]
    fn test_cross_matches_nalgebra() {
        let a = Vector::new(1.5, -2.0, 0.25);
        let b = Vector::new(-3.0, 4.5, 2.0);
        let expected: Vector = na::Vector3::from(a).cross(&na::Vector3::from(b)).into();
        assert_eq!(a.cross(&b), expected);
    }

    #[test]
    fn test_angle_and_normalization() {
        let a = Vector::new(3.0, 0.0, 0.0);
        let b = Vector::new(0.0, 0.0, -2.0);
        assert_relative_eq!(a.angle_to(&b), std::f64::consts::FRAC_PI_2);
        assert_eq!(a.normalized(), Vector::new(1.0, 0.0, 0.0));
        assert_eq!(Vector::zero().normalized(), Vector::zero());
    }

    #[test]
    fn test_arithmetic() {
        let mut v = Vector::new(1.0, 2.0, 3.0);
        v += Vector::new(1.0, 1.0, 1.0);
        v *= 2.0;
        assert_eq!(v, Vector::new(4.0, 6.0, 8.0));
        assert_eq!(-v / 2.0, Vector::new(-2.0, -3.0, -4.0));
        assert_eq!(0.5 * v, Vector::new(2.0, 3.0, 4.0));
        assert_eq!(v[2], 8.0);
    }

    #[test]
    fn test_lexicographic_order() {
        assert!(Vector::new(1.0, 9.0, 9.0) < Vector::new(2.0, 0.0, 0.0));
        assert!(Vector::new(1.0, 2.0, 3.0) < Vector::new(1.0, 2.0, 4.0));
    }

    #[test]
    fn test_render() {
        let v = Vector::new(1.0, -2.5, 0.0);
        assert_eq!(v.to_string(), "(1, -2.5, 0)");
        assert_eq!(v.json(Precision::Double), r#"{"x":1,"y":-2.5,"z":0}"#);
        assert_eq!(v.xml(Precision::Double), "<x>1</x><y>-2.5</y><z>0</z>");
        assert_eq!(v.yaml(Precision::Double), "{x:1,y:-2.5,z:0}");
    }
}
