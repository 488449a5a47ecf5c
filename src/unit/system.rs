use super::Unit;
use super::spelling::SpellingTable;
use crate::error::UnitError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A coherent system of units: fixing the units of length, mass, time and
/// temperature fixes one consistent unit for every other family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum UnitSystem {
    /// Metre, kilogram, second, kelvin (SI).
    MetreKilogramSecondKelvin,
    /// Millimetre, gram, second, kelvin.
    MillimetreGramSecondKelvin,
    /// Foot, pound-force, second, rankine. Mass is measured in slugs.
    FootPoundSecondRankine,
    /// Inch, pound-force, second, rankine. Mass is measured in slinches.
    InchPoundSecondRankine,
}

impl UnitSystem {
    pub const ALL: [UnitSystem; 4] = [
        UnitSystem::MetreKilogramSecondKelvin,
        UnitSystem::MillimetreGramSecondKelvin,
        UnitSystem::FootPoundSecondRankine,
        UnitSystem::InchPoundSecondRankine,
    ];

    pub const fn abbreviation(self) -> &'static str {
        match self {
            UnitSystem::MetreKilogramSecondKelvin => "m·kg·s·K",
            UnitSystem::MillimetreGramSecondKelvin => "mm·g·s·K",
            UnitSystem::FootPoundSecondRankine => "ft·lbf·s·°R",
            UnitSystem::InchPoundSecondRankine => "in·lbf·s·°R",
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        static SPELLINGS: Lazy<SpellingTable<UnitSystem>> = Lazy::new(|| {
            use UnitSystem::*;
            SpellingTable::new(
                "UnitSystem",
                UnitSystem::ALL
                    .iter()
                    .map(|system| (system.abbreviation(), *system))
                    .chain([
                        ("SI", MetreKilogramSecondKelvin),
                        ("MKS", MetreKilogramSecondKelvin),
                        ("MKSK", MetreKilogramSecondKelvin),
                        ("m*kg*s*K", MetreKilogramSecondKelvin),
                        ("MetreKilogramSecondKelvin", MetreKilogramSecondKelvin),
                        ("MillimetreGramSecondKelvin", MillimetreGramSecondKelvin),
                        ("mm*g*s*K", MillimetreGramSecondKelvin),
                        ("FootPoundSecondRankine", FootPoundSecondRankine),
                        ("ft*lbf*s*degR", FootPoundSecondRankine),
                        ("ft*lb*s*degR", FootPoundSecondRankine),
                        ("InchPoundSecondRankine", InchPoundSecondRankine),
                        ("in*lbf*s*degR", InchPoundSecondRankine),
                        ("in*lb*s*degR", InchPoundSecondRankine),
                    ]),
            )
        });
        SPELLINGS.lookup(input)
    }

    /// The unit of family `U` that belongs to this system.
    pub fn consistent_unit<U: Unit>(self) -> Result<U, UnitError> {
        U::consistent_unit(self)
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for UnitSystem {
    type Err = UnitError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| UnitError::UnknownUnitSystem(value.to_owned()))
    }
}
