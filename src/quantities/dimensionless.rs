use super::{DynamicViscosity, KinematicViscosity, Length, MassDensity, Speed};
use crate::value::{Dyad, SymmetricDyad};

dimensionless_quantity! {
    /// Ratio of a flow speed to the local speed of sound.
    MachNumber: f64
}

dimensionless_quantity!(PoissonRatio: f64);

dimensionless_quantity! {
    /// Ratio of inertial to viscous forces in a flow.
    ReynoldsNumber: f64
}

dimensionless_quantity! {
    /// Infinitesimal strain.
    Strain: SymmetricDyad
}

dimensionless_quantity!(DisplacementGradient: Dyad);

impl MachNumber {
    pub fn from_speeds(speed: Speed, speed_of_sound: Speed) -> Self {
        Self::new(speed / speed_of_sound)
    }
}

impl ReynoldsNumber {
    /// `ρ V L / μ`.
    pub fn from_flow(
        density: MassDensity,
        speed: Speed,
        length: Length,
        viscosity: DynamicViscosity,
    ) -> Self {
        Self::new(density.value() * speed.value() * length.value() / viscosity.value())
    }

    /// `V L / ν`.
    pub fn from_kinematic(speed: Speed, length: Length, viscosity: KinematicViscosity) -> Self {
        Self::new(speed.value() * length.value() / viscosity.value())
    }
}

impl DisplacementGradient {
    /// Small-strain tensor, the symmetric part of the gradient.
    pub fn strain(&self) -> Strain {
        Strain::new(self.value().symmetric_part())
    }
}
