use crate::unit::UnitSystem;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnitError {
    #[error("Unknown {family} unit: {spelling}")]
    UnknownUnit {
        family: &'static str,
        spelling: String,
    },

    #[error("Unknown unit system: {0}")]
    UnknownUnitSystem(String),

    #[error("Unknown precision: {0}")]
    UnknownPrecision(String),

    #[error("No {family} unit is consistent with the {system} unit system")]
    NoConsistentUnit {
        family: &'static str,
        system: UnitSystem,
    },
}
