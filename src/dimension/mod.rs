//! Physical dimensions: the seven base exponents and their aggregate.

pub mod base;
mod set;

pub use base::{
    ElectricCurrent, Length, LuminousIntensity, Mass, SubstanceAmount, Temperature, Time,
};
pub use set::DimensionSet;
