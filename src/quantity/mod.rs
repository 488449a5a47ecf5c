//! Generic quantity templates.
//!
//! [`Dimensional`] pairs a value container with a unit family and does all
//! unit handling; [`Dimensionless`] is its unit-free counterpart. Named
//! quantity kinds in [`crate::quantities`] wrap one of these.

mod dimensional;
mod dimensionless;

pub use dimensional::{
    Dimensional, DimensionalDyad, DimensionalScalar, DimensionalSymmetricDyad, DimensionalVector,
};
pub use dimensionless::{
    Dimensionless, DimensionlessDyad, DimensionlessScalar, DimensionlessSymmetricDyad,
    DimensionlessVector,
};
