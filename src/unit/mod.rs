//! Unit families and the conversion engine.
//!
//! Every family is a closed enum of concrete units with one designated
//! standard unit. Values are converted by pivoting through the standard unit:
//! `from -> standard -> to`. Each family is declared once with
//! [`unit_family!`], which generates both the runtime dispatch used by
//! [`Unit`] and the `const fn` path usable in constant expressions.

pub(crate) mod spelling;
mod system;

use crate::dimension::DimensionSet;
use crate::error::UnitError;
use crate::value::Components;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::str::FromStr;

pub use system::UnitSystem;

// Exact definitions.
pub(crate) const FOOT: f64 = 0.3048;
pub(crate) const INCH: f64 = 0.0254;
pub(crate) const YARD: f64 = 0.9144;
pub(crate) const MILE: f64 = 1609.344;
pub(crate) const NAUTICAL_MILE: f64 = 1852.0;
pub(crate) const POUND: f64 = 0.45359237;
pub(crate) const STANDARD_GRAVITY: f64 = 9.80665;
pub(crate) const POUND_FORCE: f64 = POUND * STANDARD_GRAVITY;
pub(crate) const SLUG: f64 = POUND_FORCE / FOOT;
pub(crate) const SLINCH: f64 = POUND_FORCE / INCH;
pub(crate) const US_GALLON: f64 = 231.0 * INCH * INCH * INCH;
pub(crate) const ELEMENTARY_CHARGE: f64 = 1.602176634e-19;
pub(crate) const AVOGADRO: f64 = 6.02214076e23;
pub(crate) const CALORIE: f64 = 4.184;
pub(crate) const BRITISH_THERMAL_UNIT: f64 = 1055.05585262;
/// Kelvin per degree rankine.
pub(crate) const RANKINE: f64 = 5.0 / 9.0;

/// A family of units measuring one physical quantity.
pub trait Unit:
    Copy + Eq + Ord + Hash + Debug + Display + FromStr<Err = UnitError> + Send + Sync + 'static
{
    /// Name of the family, e.g. `"Length"`.
    const FAMILY: &'static str;

    /// The unit in which values of this family are stored.
    const STANDARD: Self;

    /// The physical dimension shared by every unit of the family.
    const DIMENSIONS: DimensionSet;

    /// Every unit of the family, in declaration order.
    fn all() -> &'static [Self];

    fn abbreviation(self) -> &'static str;

    /// Case-insensitive, symbol-tolerant lookup. `None` when nothing matches.
    fn parse(input: &str) -> Option<Self>;

    /// Converts a value expressed in `self` to the standard unit.
    fn to_standard(self, value: f64) -> f64;

    /// Converts a value expressed in the standard unit to `self`.
    fn from_standard(self, value: f64) -> f64;

    /// The unit of this family that belongs to the given unit system.
    fn consistent_unit(system: UnitSystem) -> Result<Self, UnitError>;

    /// The unit system this unit is the consistent unit of, if exactly one.
    fn related_unit_system(self) -> Option<UnitSystem> {
        let mut systems = UnitSystem::ALL
            .into_iter()
            .filter(|system| Self::consistent_unit(*system) == Ok(self));
        match (systems.next(), systems.next()) {
            (Some(system), None) => Some(system),
            _ => None,
        }
    }

    /// Converts every component of `value` in place, pivoting through the
    /// standard unit.
    fn convert<C: Components>(value: &mut C, from: Self, to: Self) {
        let components = value.components_mut();
        if from == Self::STANDARD {
            for c in components {
                *c = to.from_standard(*c);
            }
        } else if to == Self::STANDARD {
            for c in components {
                *c = from.to_standard(*c);
            }
        } else {
            for c in components {
                *c = to.from_standard(from.to_standard(*c));
            }
        }
    }

    fn convert_copy<C: Components>(mut value: C, from: Self, to: Self) -> C {
        Self::convert(&mut value, from, to);
        value
    }
}

/// A family whose standard values can be summed and scaled.
///
/// Absolute temperature is not one: its units sit on offset scales, so the
/// sum of two temperatures or a multiple of one has no physical meaning.
/// Differences between temperatures use [`TemperatureDifference`] instead.
///
/// ```
/// use physical_quantity::quantity::DimensionalScalar;
/// use physical_quantity::unit::TemperatureDifference;
///
/// let rise = DimensionalScalar::new(5.0, TemperatureDifference::Celsius);
/// assert_eq!((rise + rise).value(), 10.0);
/// ```
///
/// ```compile_fail
/// use physical_quantity::quantity::DimensionalScalar;
/// use physical_quantity::unit::Temperature;
///
/// let warm = DimensionalScalar::new(20.0, Temperature::Celsius);
/// let _ = warm + warm;
/// ```
///
/// ```compile_fail
/// use physical_quantity::quantity::DimensionalScalar;
/// use physical_quantity::unit::Temperature;
///
/// let warm = DimensionalScalar::new(20.0, Temperature::Celsius);
/// let _ = warm * 2.0;
/// ```
pub trait LinearUnit: Unit {}

macro_rules! to_standard_expr {
    ($value:ident, scale, $factor:expr) => {
        $value * ($factor)
    };
    ($value:ident, per, $divisor:expr) => {
        $value / ($divisor)
    };
    ($value:ident, affine, |$x:ident| $to:expr, |$y:ident| $from:expr) => {{
        let $x = $value;
        $to
    }};
}

macro_rules! from_standard_expr {
    ($value:ident, scale, $factor:expr) => {
        $value / ($factor)
    };
    ($value:ident, per, $divisor:expr) => {
        $value * ($divisor)
    };
    ($value:ident, affine, |$x:ident| $to:expr, |$y:ident| $from:expr) => {{
        let $y = $value;
        $from
    }};
}

/// Declares a unit family.
///
/// Each unit is written `Variant: "abbreviation" = kind(args) [spellings]`:
/// - `scale(f)`: one unit is `f` standard units,
/// - `per(d)`: one unit is `1/d` standard units,
/// - `affine(|v| to, |v| from)`: explicit transforms, for offset scales.
macro_rules! unit_family {
    (
        $(#[$meta:meta])*
        $family:ident {
            dimensions: [$($dimension:expr),* $(,)?],
            standard: $standard:ident,
            systems: { $($system:ident => $system_unit:ident),* $(,)? },
            units: {
                $(
                    $(#[$unit_meta:meta])*
                    $unit:ident: $abbreviation:literal = $kind:ident($($conversion:tt)*)
                        [$($spelling:literal),* $(,)?]
                ),+ $(,)?
            }
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        pub enum $family {
            $(
                $(#[$unit_meta])*
                #[doc = concat!("Abbreviation: `", $abbreviation, "`.")]
                $unit,
            )+
        }

        impl $family {
            pub const ALL: &'static [$family] = &[$($family::$unit),+];

            const SPELLINGS: &'static [(&'static str, $family)] = &[
                $(
                    ($abbreviation, $family::$unit),
                    $(($spelling, $family::$unit),)*
                )+
            ];

            pub const fn abbreviation(self) -> &'static str {
                match self {
                    $($family::$unit => $abbreviation,)+
                }
            }

            pub const fn to_standard(self, value: f64) -> f64 {
                match self {
                    $($family::$unit => to_standard_expr!(value, $kind, $($conversion)*),)+
                }
            }

            pub const fn from_standard(self, value: f64) -> f64 {
                match self {
                    $($family::$unit => from_standard_expr!(value, $kind, $($conversion)*),)+
                }
            }

            /// Compile-time conversion of a scalar, bit-identical to
            /// [`Unit::convert`].
            pub const fn static_convert_copy(value: f64, from: $family, to: $family) -> f64 {
                let standard = $family::$standard as usize;
                if from as usize == standard {
                    to.from_standard(value)
                } else if to as usize == standard {
                    from.to_standard(value)
                } else {
                    to.from_standard(from.to_standard(value))
                }
            }
        }

        impl $crate::unit::Unit for $family {
            const FAMILY: &'static str = stringify!($family);
            const STANDARD: Self = $family::$standard;
            const DIMENSIONS: $crate::dimension::DimensionSet =
                $crate::dimension::DimensionSet::new($($dimension),*);

            fn all() -> &'static [Self] {
                $family::ALL
            }

            fn abbreviation(self) -> &'static str {
                $family::abbreviation(self)
            }

            fn parse(input: &str) -> Option<Self> {
                static SPELLINGS: once_cell::sync::Lazy<
                    $crate::unit::spelling::SpellingTable<$family>,
                > = once_cell::sync::Lazy::new(|| {
                    $crate::unit::spelling::SpellingTable::new(
                        stringify!($family),
                        $family::SPELLINGS.iter().copied(),
                    )
                });
                SPELLINGS.lookup(input)
            }

            fn to_standard(self, value: f64) -> f64 {
                $family::to_standard(self, value)
            }

            fn from_standard(self, value: f64) -> f64 {
                $family::from_standard(self, value)
            }

            fn consistent_unit(
                system: $crate::unit::UnitSystem,
            ) -> Result<Self, $crate::error::UnitError> {
                #[allow(unreachable_patterns)]
                match system {
                    $($crate::unit::UnitSystem::$system => Ok($family::$system_unit),)*
                    _ => Err($crate::error::UnitError::NoConsistentUnit {
                        family: stringify!($family),
                        system,
                    }),
                }
            }
        }

        impl std::fmt::Display for $family {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.abbreviation())
            }
        }

        impl std::str::FromStr for $family {
            type Err = $crate::error::UnitError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                <$family as $crate::unit::Unit>::parse(value).ok_or_else(|| {
                    $crate::error::UnitError::UnknownUnit {
                        family: stringify!($family),
                        spelling: value.to_owned(),
                    }
                })
            }
        }
    };
}

mod base;
mod electric;
mod geometry;
mod information;
mod kinematics;
mod mechanics;
mod thermal;

pub use base::{Length, LuminousIntensity, Mass, SubstanceAmount, Temperature, TemperatureDifference, Time};
pub use electric::{ElectricCharge, ElectricCurrent};
pub use geometry::{Angle, Area, SolidAngle, Volume};
pub use information::{Memory, MemoryRate};
pub use kinematics::{Acceleration, AngularAcceleration, AngularSpeed, Frequency, Speed};
pub use mechanics::{
    DynamicViscosity, Energy, Force, KinematicViscosity, MassDensity, MassRate, Power, Pressure,
    SpecificEnergy, VolumeRate,
};
pub use thermal::{
    EnergyFlux, HeatCapacity, SpecificHeatCapacity, TemperatureGradient, ThermalConductivity,
};

macro_rules! linear_units {
    ($($family:ident),+ $(,)?) => {
        $(impl LinearUnit for $family {})+
    };
}

linear_units!(
    Time, Length, Mass, TemperatureDifference, SubstanceAmount, LuminousIntensity,
    ElectricCharge, ElectricCurrent, Angle, Area, SolidAngle, Volume, Memory, MemoryRate,
    Acceleration, AngularAcceleration, AngularSpeed, Frequency, Speed, DynamicViscosity, Energy,
    Force, KinematicViscosity, MassDensity, MassRate, Power, Pressure, SpecificEnergy, VolumeRate,
    EnergyFlux, HeatCapacity, SpecificHeatCapacity, TemperatureGradient, ThermalConductivity,
);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const SAMPLES: [f64; 6] = [0.0, 1.0, 1.0e6, 1.0e-6, -3.5, 273.15];

    /// Runs the family-independent checks, then the const path check, for
    /// every family.
    macro_rules! check_families {
        ($($family:ident),+ $(,)?) => {
            $(
                check_family::<$family>();
                for from in $family::ALL.iter().copied() {
                    for to in $family::ALL.iter().copied() {
                        for x in SAMPLES {
                            let runtime = $family::convert_copy(x, from, to);
                            let compile_time = $family::static_convert_copy(x, from, to);
                            assert_eq!(
                                runtime.to_bits(),
                                compile_time.to_bits(),
                                "{} {from:?} -> {to:?}",
                                stringify!($family),
                            );
                        }
                    }
                }
            )+
        };
    }

    fn check_family<U: Unit>() {
        let family = U::FAMILY;
        let units = U::all();
        assert!(units.contains(&U::STANDARD), "{family}");

        for (index, unit) in units.iter().enumerate() {
            assert_eq!(U::parse(unit.abbreviation()), Some(*unit), "{family} {unit:?}");
            assert_eq!(unit.to_string(), unit.abbreviation());
            for other in &units[index + 1..] {
                assert_ne!(unit.abbreviation(), other.abbreviation(), "{family}");
            }
        }

        for x in SAMPLES {
            assert_eq!(
                U::convert_copy(x, U::STANDARD, U::STANDARD).to_bits(),
                x.to_bits(),
                "{family}"
            );
            for unit in units {
                let there_and_back = unit.to_standard(unit.from_standard(x));
                let back_and_there = unit.from_standard(unit.to_standard(x));
                assert_relative_eq!(there_and_back, x, max_relative = 1e-12, epsilon = 1e-9);
                assert_relative_eq!(back_and_there, x, max_relative = 1e-12, epsilon = 1e-9);
            }
            for a in units.iter().filter(|u| **u != U::STANDARD) {
                for b in units.iter().filter(|u| **u != U::STANDARD) {
                    let manual = b.from_standard(a.to_standard(x));
                    assert_eq!(U::convert_copy(x, *a, *b).to_bits(), manual.to_bits());
                }
            }
        }

        for system in UnitSystem::ALL {
            if let Ok(unit) = U::consistent_unit(system) {
                let shared = UnitSystem::ALL
                    .iter()
                    .filter(|other| U::consistent_unit(**other) == Ok(unit))
                    .count();
                let expected = (shared == 1).then_some(system);
                assert_eq!(unit.related_unit_system(), expected, "{family} {unit:?}");
            }
        }
    }

    #[test]
    fn test_every_family() {
        check_families!(
            Time,
            Length,
            Mass,
            ElectricCurrent,
            ElectricCharge,
            Temperature,
            TemperatureDifference,
            SubstanceAmount,
            LuminousIntensity,
            Angle,
            SolidAngle,
            Area,
            Volume,
            Speed,
            Acceleration,
            Frequency,
            AngularSpeed,
            AngularAcceleration,
            Force,
            Pressure,
            Energy,
            Power,
            MassDensity,
            MassRate,
            VolumeRate,
            DynamicViscosity,
            KinematicViscosity,
            SpecificEnergy,
            ThermalConductivity,
            SpecificHeatCapacity,
            HeatCapacity,
            TemperatureGradient,
            EnergyFlux,
            Memory,
            MemoryRate,
        );
    }

    #[test]
    fn test_dimensions_per_family() {
        assert_eq!(Pressure::DIMENSIONS, DimensionSet::new(-2, -1, 1, 0, 0, 0, 0));
        assert_eq!(Time::DIMENSIONS, DimensionSet::new(1, 0, 0, 0, 0, 0, 0));
        assert_eq!(Length::DIMENSIONS, DimensionSet::new(0, 1, 0, 0, 0, 0, 0));
        assert_eq!(Mass::DIMENSIONS, DimensionSet::new(0, 0, 1, 0, 0, 0, 0));
        assert_eq!(ElectricCurrent::DIMENSIONS, DimensionSet::new(0, 0, 0, 1, 0, 0, 0));
        assert_eq!(Temperature::DIMENSIONS, DimensionSet::new(0, 0, 0, 0, 1, 0, 0));
        assert_eq!(SubstanceAmount::DIMENSIONS, DimensionSet::new(0, 0, 0, 0, 0, 1, 0));
        assert_eq!(LuminousIntensity::DIMENSIONS, DimensionSet::new(0, 0, 0, 0, 0, 0, 1));
        assert!(Angle::DIMENSIONS.is_dimensionless());
        assert!(Memory::DIMENSIONS.is_dimensionless());
    }

    #[test]
    fn test_standard_units_are_coherent() {
        // Every standard unit is the SI coherent unit, so it is also the
        // consistent unit of the metre-kilogram-second-kelvin system.
        assert_eq!(Length::consistent_unit(UnitSystem::MetreKilogramSecondKelvin), Ok(Length::STANDARD));
        assert_eq!(Force::consistent_unit(UnitSystem::MetreKilogramSecondKelvin), Ok(Force::STANDARD));
        assert_eq!(Energy::consistent_unit(UnitSystem::MetreKilogramSecondKelvin), Ok(Energy::STANDARD));
        assert_eq!(
            ThermalConductivity::consistent_unit(UnitSystem::MetreKilogramSecondKelvin),
            Ok(ThermalConductivity::STANDARD)
        );
    }

    #[test]
    fn test_consistent_units() {
        assert_eq!(Length::consistent_unit(UnitSystem::FootPoundSecondRankine), Ok(Length::Foot));
        assert_eq!(Mass::consistent_unit(UnitSystem::InchPoundSecondRankine), Ok(Mass::Slinch));
        assert_eq!(Force::consistent_unit(UnitSystem::MillimetreGramSecondKelvin), Ok(Force::Micronewton));
        assert_eq!(
            Memory::consistent_unit(UnitSystem::MetreKilogramSecondKelvin),
            Err(UnitError::NoConsistentUnit {
                family: "Memory",
                system: UnitSystem::MetreKilogramSecondKelvin,
            })
        );
    }

    #[test]
    fn test_related_unit_systems() {
        assert_eq!(Length::Millimetre.related_unit_system(), Some(UnitSystem::MillimetreGramSecondKelvin));
        assert_eq!(Length::Kilometre.related_unit_system(), None);
        // Pound-force belongs to both imperial systems, so neither is implied.
        assert_eq!(Force::Pound.related_unit_system(), None);
        assert_eq!(Time::Second.related_unit_system(), None);
    }

    #[test]
    fn test_parse_spelling_variants() {
        for spelling in ["deg/s^2", "°/s2", "°/s/s", "deg/s/s", "°/s²", " DEG / S^2 "] {
            assert_eq!(
                AngularAcceleration::parse(spelling),
                Some(AngularAcceleration::DegreePerSquareSecond),
                "{spelling}"
            );
        }
        assert_eq!(Length::parse("Metres"), Some(Length::Metre));
        assert_eq!(Length::parse("µm"), Some(Length::Micrometre));
        assert_eq!(Length::parse("um"), Some(Length::Micrometre));
        assert_eq!(Temperature::parse("degC"), Some(Temperature::Celsius));
        assert_eq!(Energy::parse("N·m"), Some(Energy::Joule));
        assert_eq!(Energy::parse("N*m"), Some(Energy::Joule));
        assert_eq!(Length::parse("furlong"), None);
        assert_eq!(Length::parse(""), None);
    }

    #[test]
    fn test_case_insensitive_parse_requires_a_unique_match() {
        assert_eq!(Power::parse("MW"), Some(Power::Megawatt));
        assert_eq!(Power::parse("mW"), Some(Power::Milliwatt));
        assert_eq!(Power::parse("mw"), None);
        assert_eq!(Memory::parse("MB"), Some(Memory::Megabyte));
        assert_eq!(Memory::parse("Mb"), Some(Memory::Megabit));
        assert_eq!(Pressure::parse("KPA"), Some(Pressure::Kilopascal));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("ft".parse::<Length>(), Ok(Length::Foot));
        assert_eq!(
            "parsec".parse::<Length>(),
            Err(UnitError::UnknownUnit {
                family: "Length",
                spelling: "parsec".into(),
            })
        );
    }

    #[test]
    fn test_convert_vector_components_independently() {
        use crate::value::Vector;
        let mut v = Vector::new(1.0, -2.0, 0.5);
        Length::convert(&mut v, Length::Metre, Length::Millimetre);
        assert_eq!(v, Vector::new(1000.0, -2000.0, 500.0));
    }

    #[test]
    fn test_exact_linear_conversions() {
        assert_eq!(Length::Foot.to_standard(1.0), 0.3048);
        assert_eq!(Length::Millimetre.from_standard(1.0), 1000.0);
        assert_eq!(Mass::Pound.to_standard(1.0), 0.45359237);
        assert_eq!(Acceleration::StandardGravity.to_standard(1.0), 9.80665);
        assert_relative_eq!(Angle::Degree.to_standard(90.0), std::f64::consts::FRAC_PI_2);
    }

    #[test]
    fn test_static_conversion_in_const_context() {
        const FOOT_IN_INCHES: f64 = Length::static_convert_copy(1.0, Length::Foot, Length::Inch);
        const BOILING: f64 = Temperature::static_convert_copy(100.0, Temperature::Celsius, Temperature::Fahrenheit);
        assert_relative_eq!(FOOT_IN_INCHES, 12.0, max_relative = 1e-15);
        assert_relative_eq!(BOILING, 212.0, max_relative = 1e-12);
    }

    #[test]
    fn test_factors_agree_with_uom() {
        use uom::si::f64 as q;
        use uom::si::{
            acceleration, energy, force, length, mass, power, pressure, thermodynamic_temperature,
            volume,
        };

        let uom_metres = q::Length::new::<length::mile>(3.0).get::<length::meter>();
        assert_relative_eq!(Length::Mile.to_standard(3.0), uom_metres, max_relative = 1e-12);

        // uom carries the imperial factors to seven significant digits.
        let uom_kg = q::Mass::new::<mass::pound>(7.0).get::<mass::kilogram>();
        assert_relative_eq!(Mass::Pound.to_standard(7.0), uom_kg, max_relative = 1e-7);
        assert_eq!(Mass::Pound.to_standard(1.0), 0.453_592_37);

        let uom_newtons = q::Force::new::<force::pound_force>(2.0).get::<force::newton>();
        assert_relative_eq!(Force::Pound.to_standard(2.0), uom_newtons, max_relative = 1e-7);

        let uom_pa = q::Pressure::new::<pressure::pound_force_per_square_inch>(1.0).get::<pressure::pascal>();
        assert_relative_eq!(
            Pressure::PoundPerSquareInch.to_standard(1.0),
            uom_pa,
            max_relative = 1e-7
        );

        let uom_cubic = q::Volume::new::<volume::cubic_foot>(10.0).get::<volume::cubic_meter>();
        assert_relative_eq!(Volume::CubicFoot.to_standard(10.0), uom_cubic, max_relative = 1e-6);

        let uom_joules = q::Energy::new::<energy::kilowatt_hour>(1.5).get::<energy::joule>();
        assert_relative_eq!(Energy::KilowattHour.to_standard(1.5), uom_joules, max_relative = 1e-12);

        let uom_watts = q::Power::new::<power::horsepower>(1.0).get::<power::watt>();
        assert_relative_eq!(Power::Horsepower.to_standard(1.0), uom_watts, max_relative = 1e-7);

        let uom_accel = q::Acceleration::new::<acceleration::standard_gravity>(1.0)
            .get::<acceleration::meter_per_second_squared>();
        assert_relative_eq!(Acceleration::StandardGravity.to_standard(1.0), uom_accel);

        let uom_kelvin = q::ThermodynamicTemperature::new::<thermodynamic_temperature::degree_fahrenheit>(
            68.0,
        )
        .get::<thermodynamic_temperature::kelvin>();
        assert_relative_eq!(Temperature::Fahrenheit.to_standard(68.0), uom_kelvin, max_relative = 1e-12);
    }
}
