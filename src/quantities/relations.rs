//! Products and quotients between quantity kinds.
//!
//! Every relation is declared once in the table at the bottom of this file.
//! The table generates the operator impls in both directions and the
//! [`RELATIONS`] list, which records what each generated operator does.

use super::*;
use crate::dimension::DimensionSet;
use std::fmt;
use std::ops::{Div, Mul};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Multiply,
    Divide,
}

impl Operator {
    pub const fn symbol(self) -> &'static str {
        match self {
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }

    /// Dimensions of `lhs <op> rhs`.
    pub const fn apply(self, lhs: DimensionSet, rhs: DimensionSet) -> DimensionSet {
        match self {
            Operator::Multiply => lhs.product(rhs),
            Operator::Divide => lhs.quotient(rhs),
        }
    }
}

/// One generated operator: `result = lhs <operator> rhs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relation {
    pub result: &'static str,
    pub result_dimensions: DimensionSet,
    pub lhs: &'static str,
    pub lhs_dimensions: DimensionSet,
    pub operator: Operator,
    pub rhs: &'static str,
    pub rhs_dimensions: DimensionSet,
}

impl Relation {
    /// Whether the operand dimensions combine to the result's.
    pub fn is_coherent(&self) -> bool {
        self.operator.apply(self.lhs_dimensions, self.rhs_dimensions) == self.result_dimensions
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {} {} {}", self.result, self.lhs, self.operator.symbol(), self.rhs)
    }
}

macro_rules! product {
    ($c:ident = $a:ident * $b:ident) => {
        impl Mul<$b> for $a {
            type Output = $c;

            fn mul(self, rhs: $b) -> $c {
                $c::from_standard(self.value() * rhs.value())
            }
        }
    };
}

macro_rules! quotient {
    ($c:ident = $a:ident / $b:ident) => {
        impl Div<$b> for $a {
            type Output = $c;

            fn div(self, rhs: $b) -> $c {
                $c::from_standard(self.value() / rhs.value())
            }
        }
    };
}

macro_rules! relation {
    ($c:ident = $a:ident $op:ident $b:ident) => {
        Relation {
            result: stringify!($c),
            result_dimensions: $c::DIMENSIONS,
            lhs: stringify!($a),
            lhs_dimensions: $a::DIMENSIONS,
            operator: Operator::$op,
            rhs: stringify!($b),
            rhs_dimensions: $b::DIMENSIONS,
        }
    };
}

/// - `scalar`: `C = A * B` between scalar kinds gives `A * B`, `B * A`,
///   `C / A` and `C / B`.
/// - `square`: `C = A * A` gives `A * A` and `C / A`.
/// - `scaled`: `C = A * B` where `A` is a scalar and `B`, `C` are vectors
///   gives `A * B`, `B * A` and `C / A`.
/// - `directional`: `C = A * Direction` gives both products only, since a
///   direction cannot be divided out again.
macro_rules! relations {
    (
        scalar { $($sc:ident = $sa:ident * $sb:ident;)* }
        square { $($qc:ident = $qa:ident * $qb:ident;)* }
        scaled { $($vc:ident = $va:ident * $vb:ident;)* }
        directional { $($dc:ident = $da:ident * $db:ident;)* }
    ) => {
        $(
            product!($sc = $sa * $sb);
            product!($sc = $sb * $sa);
            quotient!($sb = $sc / $sa);
            quotient!($sa = $sc / $sb);
        )*
        $(
            product!($qc = $qa * $qb);
            quotient!($qa = $qc / $qb);
        )*
        $(
            product!($vc = $va * $vb);
            product!($vc = $vb * $va);
            quotient!($vb = $vc / $va);
        )*
        $(
            product!($dc = $da * $db);
            product!($dc = $db * $da);
        )*

        /// Every operator generated between distinct quantity kinds.
        pub const RELATIONS: &[Relation] = &[
            $(
                relation!($sc = $sa Multiply $sb),
                relation!($sc = $sb Multiply $sa),
                relation!($sb = $sc Divide $sa),
                relation!($sa = $sc Divide $sb),
            )*
            $(
                relation!($qc = $qa Multiply $qb),
                relation!($qa = $qc Divide $qb),
            )*
            $(
                relation!($vc = $va Multiply $vb),
                relation!($vc = $vb Multiply $va),
                relation!($vb = $vc Divide $va),
            )*
            $(
                relation!($dc = $da Multiply $db),
                relation!($dc = $db Multiply $da),
            )*
        ];
    };
}

relations! {
    scalar {
        Volume = Area * Length;
        Length = Speed * Time;
        Speed = Length * Frequency;
        Speed = ScalarAcceleration * Time;
        Angle = AngularSpeed * Time;
        AngularSpeed = AngularAccelerationMagnitude * Time;
        ScalarForce = Mass * ScalarAcceleration;
        ScalarForce = Pressure * Area;
        Energy = ScalarForce * Length;
        Energy = Power * Time;
        Energy = Pressure * Volume;
        Energy = SpecificEnergy * Mass;
        Energy = HeatCapacity * TemperatureDifference;
        Power = ScalarForce * Speed;
        Power = Energy * Frequency;
        Power = ScalarHeatFlux * Area;
        Mass = MassDensity * Volume;
        Mass = MassRate * Time;
        MassRate = Mass * Frequency;
        MassRate = MassDensity * VolumeRate;
        Volume = VolumeRate * Time;
        VolumeRate = Volume * Frequency;
        DynamicViscosity = MassDensity * KinematicViscosity;
        DynamicViscosity = Pressure * Time;
        KinematicViscosity = Area * Frequency;
        HeatCapacity = SpecificHeatCapacity * Mass;
        SpecificEnergy = SpecificHeatCapacity * TemperatureDifference;
        ElectricCharge = ElectricCurrent * Time;
        Memory = MemoryRate * Time;
        MemoryRate = Memory * Frequency;
        ScalarHeatFlux = ThermalConductivity * ScalarTemperatureGradient;
        TemperatureDifference = ScalarTemperatureGradient * Length;
    }
    square {
        Area = Length * Length;
    }
    scaled {
        Displacement = Time * Velocity;
        Velocity = Time * Acceleration;
        Force = Mass * Acceleration;
        Force = Area * Traction;
    }
    directional {
        Displacement = Length * Direction;
        Velocity = Speed * Direction;
        Acceleration = ScalarAcceleration * Direction;
        Force = ScalarForce * Direction;
        Traction = ScalarTraction * Direction;
        TemperatureGradient = ScalarTemperatureGradient * Direction;
        HeatFlux = ScalarHeatFlux * Direction;
    }
}
