//! Plain numeric containers: no unit attached, owned by the quantity that
//! wraps them.

mod dyad;
mod symmetric_dyad;
mod vector;

pub use dyad::Dyad;
pub use symmetric_dyad::SymmetricDyad;
pub use vector::Vector;

use crate::format::Render;
use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A value whose components convert independently of each other.
///
/// Units are isotropic, so a unit conversion applies the same scalar transform
/// to every component. This is what lets one conversion engine serve scalars,
/// vectors and tensors alike.
pub trait Components:
    Copy
    + Debug
    + Default
    + PartialEq
    + PartialOrd
    + Render
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Mul<f64, Output = Self>
    + Div<f64, Output = Self>
{
    fn components(&self) -> &[f64];

    fn components_mut(&mut self) -> &mut [f64];

    fn map_components(mut self, f: impl Fn(f64) -> f64) -> Self {
        for component in self.components_mut() {
            *component = f(*component);
        }
        self
    }

    /// Hash of a scalar's value, or the 17/31 multiplicative combination of
    /// every component.
    fn hash_value(&self) -> u64 {
        match self.components() {
            [value] => hash_number(*value),
            components => components
                .iter()
                .fold(17u64, |hash, c| hash.wrapping_mul(31).wrapping_add(hash_number(*c))),
        }
    }
}

/// `0.0` and `-0.0` compare equal, so they hash equal too.
fn hash_number(value: f64) -> u64 {
    if value == 0.0 { 0 } else { value.to_bits() }
}

impl Components for f64 {
    fn components(&self) -> &[f64] {
        std::slice::from_ref(self)
    }

    fn components_mut(&mut self) -> &mut [f64] {
        std::slice::from_mut(self)
    }
}
