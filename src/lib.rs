//! Physical quantities with dimensional analysis and unit conversion.
//!
//! Values are stored in the standard (SI-coherent) unit of their family and
//! converted at the edges. Products and quotients between quantity kinds are
//! checked by the type system.

pub mod dimension;
pub mod error;
pub mod format;
pub mod quantities;
pub mod quantity;
pub mod unit;
pub mod value;
pub mod with_unit;

pub use dimension::DimensionSet;
pub use error::UnitError;
pub use format::Precision;
pub use quantities::*;
pub use unit::{Unit, UnitSystem};
pub use value::{Dyad, SymmetricDyad, Vector};
pub use with_unit::WithUnit;

pub use nalgebra as na;
