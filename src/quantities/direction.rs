use crate::dimension::DimensionSet;
use crate::quantity::DimensionlessVector;
use crate::value::Vector;
use std::fmt;
use std::ops::{Deref, Neg};

/// A dimensionless unit vector.
///
/// Construction normalizes its input. The zero vector has no direction and
/// stays zero. There is no mutable access, so the unit length holds for the
/// lifetime of the value.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Hash)]
pub struct Direction(DimensionlessVector);

impl Direction {
    pub const DIMENSIONS: DimensionSet = DimensionSet::DIMENSIONLESS;

    pub const X: Direction = Direction(DimensionlessVector::new(Vector::new(1.0, 0.0, 0.0)));
    pub const Y: Direction = Direction(DimensionlessVector::new(Vector::new(0.0, 1.0, 0.0)));
    pub const Z: Direction = Direction(DimensionlessVector::new(Vector::new(0.0, 0.0, 1.0)));

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self::from_vector(Vector::new(x, y, z))
    }

    pub fn from_vector(vector: Vector) -> Self {
        Self(DimensionlessVector::new(vector.normalized()))
    }

    pub fn x(&self) -> f64 {
        self.0.value().x()
    }

    pub fn y(&self) -> f64 {
        self.0.value().y()
    }

    pub fn z(&self) -> f64 {
        self.0.value().z()
    }

    pub fn dot(&self, other: &Direction) -> f64 {
        self.0.value().dot(&other.0.value())
    }

    /// Normalized cross product, zero for parallel directions.
    pub fn cross(&self, other: &Direction) -> Direction {
        Self::from_vector(self.0.value().cross(&other.0.value()))
    }
}

impl Deref for Direction {
    type Target = DimensionlessVector;

    fn deref(&self) -> &DimensionlessVector {
        &self.0
    }
}

impl Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Direction {
        Direction(-self.0)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<Vector> for Direction {
    fn from(vector: Vector) -> Self {
        Self::from_vector(vector)
    }
}
