//! Named quantity kinds.
//!
//! Each kind is a newtype over one generic template from
//! [`crate::quantity`] and dereferences to it, so `value`, `value_in`,
//! `print`, `json` and friends are available on every kind. Kinds add typed
//! component accessors and the physical relations between them.
//!
//! Absolute kinds ([`Temperature`], [`Position`]) do not dereference. They
//! forward the read and mutation accessors instead, so the template's
//! addition and scaling stay out of reach.

macro_rules! quantity_common {
    ($name:ident, $inner:ty) => {
        impl std::ops::Deref for $name {
            type Target = $inner;

            fn deref(&self) -> &$inner {
                &self.0
            }
        }

        impl std::ops::DerefMut for $name {
            fn deref_mut(&mut self) -> &mut $inner {
                &mut self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

macro_rules! affine_access {
    ($name:ident, $family:ident, $shape:ty) => {
        impl $name {
            pub const fn standard_unit() -> $crate::unit::$family {
                <$crate::unit::$family as $crate::unit::Unit>::STANDARD
            }

            /// The value in the standard unit.
            pub const fn value(&self) -> $shape {
                self.0.value()
            }

            pub fn value_in(&self, unit: $crate::unit::$family) -> $shape {
                self.0.value_in(unit)
            }

            pub fn mutable_value(&mut self) -> &mut $shape {
                self.0.mutable_value()
            }

            pub fn set_value(&mut self, value: $shape) {
                self.0.set_value(value)
            }

            pub fn print(&self) -> String {
                self.0.print()
            }

            pub fn print_in(&self, unit: $crate::unit::$family) -> String {
                self.0.print_in(unit)
            }

            pub fn print_with(&self, unit: $crate::unit::$family, precision: $crate::format::Precision) -> String {
                self.0.print_with(unit, precision)
            }

            pub fn json(&self) -> String {
                self.0.json()
            }

            pub fn json_in(&self, unit: $crate::unit::$family) -> String {
                self.0.json_in(unit)
            }

            pub fn json_with(&self, unit: $crate::unit::$family, precision: $crate::format::Precision) -> String {
                self.0.json_with(unit, precision)
            }

            pub fn xml(&self) -> String {
                self.0.xml()
            }

            pub fn xml_in(&self, unit: $crate::unit::$family) -> String {
                self.0.xml_in(unit)
            }

            pub fn xml_with(&self, unit: $crate::unit::$family, precision: $crate::format::Precision) -> String {
                self.0.xml_with(unit, precision)
            }

            pub fn yaml(&self) -> String {
                self.0.yaml()
            }

            pub fn yaml_in(&self, unit: $crate::unit::$family) -> String {
                self.0.yaml_in(unit)
            }

            pub fn yaml_with(&self, unit: $crate::unit::$family, precision: $crate::format::Precision) -> String {
                self.0.yaml_with(unit, precision)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

/// Addition and subtraction within a kind, and scaling by plain numbers.
/// Absolute kinds such as temperature and position leave these out.
macro_rules! linear_ops {
    ($name:ident) => {
        impl std::ops::Add for $name {
            type Output = $name;

            fn add(self, rhs: $name) -> $name {
                $name(self.0 + rhs.0)
            }
        }

        impl std::ops::Sub for $name {
            type Output = $name;

            fn sub(self, rhs: $name) -> $name {
                $name(self.0 - rhs.0)
            }
        }

        impl std::ops::Neg for $name {
            type Output = $name;

            fn neg(self) -> $name {
                $name(-self.0)
            }
        }

        impl std::ops::Mul<f64> for $name {
            type Output = $name;

            fn mul(self, rhs: f64) -> $name {
                $name(self.0 * rhs)
            }
        }

        impl std::ops::Mul<$name> for f64 {
            type Output = $name;

            fn mul(self, rhs: $name) -> $name {
                $name(rhs.0 * self)
            }
        }

        impl std::ops::Div<f64> for $name {
            type Output = $name;

            fn div(self, rhs: f64) -> $name {
                $name(self.0 / rhs)
            }
        }

        impl std::ops::AddAssign for $name {
            fn add_assign(&mut self, rhs: $name) {
                self.0 += rhs.0;
            }
        }

        impl std::ops::SubAssign for $name {
            fn sub_assign(&mut self, rhs: $name) {
                self.0 -= rhs.0;
            }
        }

        impl std::ops::MulAssign<f64> for $name {
            fn mul_assign(&mut self, rhs: f64) {
                self.0 *= rhs;
            }
        }

        impl std::ops::DivAssign<f64> for $name {
            fn div_assign(&mut self, rhs: f64) {
                self.0 /= rhs;
            }
        }
    };
}

macro_rules! component_accessors {
    ($scalar:ident; $($component:ident),+) => {
        $(
            pub fn $component(&self) -> $scalar {
                $scalar::from_standard(self.0.value().$component())
            }
        )+
    };
}

macro_rules! scalar_quantity {
    (@define $(#[$meta:meta])* $name:ident: $family:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Hash)]
        pub struct $name($crate::quantity::DimensionalScalar<$crate::unit::$family>);

        impl $name {
            pub const DIMENSIONS: $crate::dimension::DimensionSet =
                <$crate::unit::$family as $crate::unit::Unit>::DIMENSIONS;

            pub fn new(value: f64, unit: $crate::unit::$family) -> Self {
                Self($crate::quantity::Dimensional::new(value, unit))
            }

            pub(crate) const fn from_standard(value: f64) -> Self {
                Self($crate::quantity::Dimensional::from_standard(value))
            }

            pub fn zero() -> Self {
                Self::from_standard(0.0)
            }

            /// The value in `unit`, usable in constant expressions.
            pub const fn static_value(&self, unit: $crate::unit::$family) -> f64 {
                $crate::unit::$family::static_convert_copy(
                    self.0.value(),
                    <$crate::unit::$family as $crate::unit::Unit>::STANDARD,
                    unit,
                )
            }
        }

        /// Ratio of two quantities of the same kind.
        impl std::ops::Div for $name {
            type Output = f64;

            fn div(self, rhs: $name) -> f64 {
                self.0 / rhs.0
            }
        }

        impl From<$crate::quantity::DimensionalScalar<$crate::unit::$family>> for $name {
            fn from(value: $crate::quantity::DimensionalScalar<$crate::unit::$family>) -> Self {
                Self(value)
            }
        }

    };
    ($(#[$meta:meta])* affine $name:ident: $family:ident) => {
        scalar_quantity!(@define $(#[$meta])* $name: $family);
        affine_access!($name, $family, f64);
    };
    ($(#[$meta:meta])* $name:ident: $family:ident) => {
        scalar_quantity!(@define $(#[$meta])* $name: $family);
        quantity_common!($name, $crate::quantity::DimensionalScalar<$crate::unit::$family>);
    };
}

macro_rules! vector_quantity {
    (@define $(#[$meta:meta])* $name:ident: $family:ident, $scalar:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Hash)]
        pub struct $name($crate::quantity::DimensionalVector<$crate::unit::$family>);

        impl $name {
            pub const DIMENSIONS: $crate::dimension::DimensionSet =
                <$crate::unit::$family as $crate::unit::Unit>::DIMENSIONS;

            pub fn new(value: $crate::value::Vector, unit: $crate::unit::$family) -> Self {
                Self($crate::quantity::Dimensional::new(value, unit))
            }

            pub(crate) const fn from_standard(value: $crate::value::Vector) -> Self {
                Self($crate::quantity::Dimensional::from_standard(value))
            }

            pub fn zero() -> Self {
                Self::from_standard($crate::value::Vector::zero())
            }

            /// Builds the quantity from its magnitude and direction.
            pub fn from_magnitude(magnitude: $scalar, direction: $crate::quantities::Direction) -> Self {
                Self::from_standard(direction.value() * magnitude.value())
            }

            component_accessors!($scalar; x, y, z);

            pub fn magnitude(&self) -> $scalar {
                $scalar::from_standard(self.0.value().magnitude())
            }

            pub fn direction(&self) -> $crate::quantities::Direction {
                $crate::quantities::Direction::from_vector(self.0.value())
            }

            pub fn angle_to(&self, other: &$name) -> $crate::quantities::Angle {
                $crate::quantities::Angle::from_standard(self.0.value().angle_to(&other.0.value()))
            }

            /// The value in `unit`, usable in constant expressions.
            pub const fn static_value(&self, unit: $crate::unit::$family) -> $crate::value::Vector {
                let standard = <$crate::unit::$family as $crate::unit::Unit>::STANDARD;
                let v = self.0.value();
                $crate::value::Vector::new(
                    $crate::unit::$family::static_convert_copy(v.x(), standard, unit),
                    $crate::unit::$family::static_convert_copy(v.y(), standard, unit),
                    $crate::unit::$family::static_convert_copy(v.z(), standard, unit),
                )
            }
        }

    };
    ($(#[$meta:meta])* affine $name:ident: $family:ident, $scalar:ident) => {
        vector_quantity!(@define $(#[$meta])* $name: $family, $scalar);
        affine_access!($name, $family, $crate::value::Vector);
    };
    ($(#[$meta:meta])* $name:ident: $family:ident, $scalar:ident) => {
        vector_quantity!(@define $(#[$meta])* $name: $family, $scalar);
        quantity_common!($name, $crate::quantity::DimensionalVector<$crate::unit::$family>);
    };
}

macro_rules! dyad_quantity {
    ($(#[$meta:meta])* $name:ident: $family:ident, $scalar:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Hash)]
        pub struct $name($crate::quantity::DimensionalDyad<$crate::unit::$family>);

        impl $name {
            pub const DIMENSIONS: $crate::dimension::DimensionSet =
                <$crate::unit::$family as $crate::unit::Unit>::DIMENSIONS;

            pub fn new(value: $crate::value::Dyad, unit: $crate::unit::$family) -> Self {
                Self($crate::quantity::Dimensional::new(value, unit))
            }

            pub(crate) const fn from_standard(value: $crate::value::Dyad) -> Self {
                Self($crate::quantity::Dimensional::from_standard(value))
            }

            pub fn zero() -> Self {
                Self::from_standard($crate::value::Dyad::zero())
            }

            component_accessors!($scalar; xx, xy, xz, yx, yy, yz, zx, zy, zz, trace);

            pub fn transpose(&self) -> $name {
                Self::from_standard(self.0.value().transpose())
            }

            /// The value in `unit`, usable in constant expressions.
            pub const fn static_value(&self, unit: $crate::unit::$family) -> $crate::value::Dyad {
                let standard = <$crate::unit::$family as $crate::unit::Unit>::STANDARD;
                let mut c = self.0.value().as_array();
                let mut i = 0;
                while i < c.len() {
                    c[i] = $crate::unit::$family::static_convert_copy(c[i], standard, unit);
                    i += 1;
                }
                $crate::value::Dyad::new(c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7], c[8])
            }
        }

        quantity_common!($name, $crate::quantity::DimensionalDyad<$crate::unit::$family>);
    };
}

macro_rules! symmetric_dyad_quantity {
    ($(#[$meta:meta])* $name:ident: $family:ident, $scalar:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Hash)]
        pub struct $name($crate::quantity::DimensionalSymmetricDyad<$crate::unit::$family>);

        impl $name {
            pub const DIMENSIONS: $crate::dimension::DimensionSet =
                <$crate::unit::$family as $crate::unit::Unit>::DIMENSIONS;

            pub fn new(value: $crate::value::SymmetricDyad, unit: $crate::unit::$family) -> Self {
                Self($crate::quantity::Dimensional::new(value, unit))
            }

            pub(crate) const fn from_standard(value: $crate::value::SymmetricDyad) -> Self {
                Self($crate::quantity::Dimensional::from_standard(value))
            }

            pub fn zero() -> Self {
                Self::from_standard($crate::value::SymmetricDyad::zero())
            }

            component_accessors!($scalar; xx, xy, xz, yx, yy, yz, zx, zy, zz, trace);

            /// The value in `unit`, usable in constant expressions.
            pub const fn static_value(
                &self,
                unit: $crate::unit::$family,
            ) -> $crate::value::SymmetricDyad {
                let standard = <$crate::unit::$family as $crate::unit::Unit>::STANDARD;
                let mut c = self.0.value().as_array();
                let mut i = 0;
                while i < c.len() {
                    c[i] = $crate::unit::$family::static_convert_copy(c[i], standard, unit);
                    i += 1;
                }
                $crate::value::SymmetricDyad::new(c[0], c[1], c[2], c[3], c[4], c[5])
            }
        }

        quantity_common!($name, $crate::quantity::DimensionalSymmetricDyad<$crate::unit::$family>);
    };
}

macro_rules! dimensionless_quantity {
    ($(#[$meta:meta])* $name:ident: $shape:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Hash)]
        pub struct $name($crate::quantity::Dimensionless<$shape>);

        impl $name {
            pub const DIMENSIONS: $crate::dimension::DimensionSet =
                $crate::dimension::DimensionSet::DIMENSIONLESS;

            pub const fn new(value: $shape) -> Self {
                Self($crate::quantity::Dimensionless::new(value))
            }

            pub fn zero() -> Self {
                Self($crate::quantity::Dimensionless::zero())
            }
        }

        quantity_common!($name, $crate::quantity::Dimensionless<$shape>);
        linear_ops!($name);
    };
}

mod dimensionless;
mod direction;
mod relations;
mod scalars;
mod temperature;
mod tensors;
mod vectors;

pub use dimensionless::{DisplacementGradient, MachNumber, PoissonRatio, ReynoldsNumber, Strain};
pub use direction::Direction;
pub use relations::{Operator, RELATIONS, Relation};
pub use scalars::{
    Angle, AngularAccelerationMagnitude, AngularSpeed, Area, DynamicViscosity, ElectricCharge,
    ElectricCurrent, Energy, Frequency, HeatCapacity, KinematicViscosity, Length,
    LuminousIntensity, Mass, MassDensity, MassRate, Memory, MemoryRate, Power, Pressure,
    ScalarAcceleration, ScalarForce, ScalarHeatFlux, ScalarStrainRate, ScalarStress,
    ScalarTemperatureGradient, ScalarTraction, ScalarVelocityGradient, SolidAngle,
    SpecificEnergy, SpecificHeatCapacity, Speed, SubstanceAmount, ThermalConductivity, Time,
    Volume, VolumeRate,
};
pub use temperature::{Temperature, TemperatureDifference};
pub use tensors::{StrainRate, Stress, VelocityGradient};
pub use vectors::{
    Acceleration, Displacement, Force, HeatFlux, Position, TemperatureGradient, Traction,
    Velocity,
};
