use super::{Direction, Pressure, ScalarStrainRate, ScalarStress, ScalarVelocityGradient, Traction};
use std::ops::Mul;

dyad_quantity! {
    /// Spatial gradient of a velocity field, `∂vᵢ/∂xⱼ`.
    VelocityGradient: Frequency, ScalarVelocityGradient
}

symmetric_dyad_quantity! {
    /// Cauchy stress. Tensile components are positive.
    Stress: Pressure, ScalarStress
}

symmetric_dyad_quantity!(StrainRate: Frequency, ScalarStrainRate);

linear_ops!(VelocityGradient);
linear_ops!(Stress);
linear_ops!(StrainRate);

impl VelocityGradient {
    /// The symmetric part of the gradient.
    pub fn strain_rate(&self) -> StrainRate {
        StrainRate::from_standard(self.value().symmetric_part())
    }
}

impl Stress {
    pub fn von_mises(&self) -> ScalarStress {
        ScalarStress::from_standard(self.value().von_mises())
    }

    /// Mean compressive stress, `-tr(σ)/3`.
    pub fn hydrostatic_pressure(&self) -> Pressure {
        Pressure::from_standard(-self.value().trace() / 3.0)
    }

    /// Traction on the plane with the given normal, `σ·n`.
    pub fn traction(&self, normal: &Direction) -> Traction {
        Traction::from_standard(self.value() * normal.value())
    }
}

impl Mul<Direction> for Stress {
    type Output = Traction;

    fn mul(self, rhs: Direction) -> Traction {
        self.traction(&rhs)
    }
}
