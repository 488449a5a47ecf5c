use super::{
    Length, ScalarAcceleration, ScalarForce, ScalarHeatFlux, ScalarTemperatureGradient,
    ScalarTraction, Speed, ThermalConductivity,
};
use std::ops::{Add, AddAssign, Sub, SubAssign};

vector_quantity! {
    /// A point in space relative to some origin. Positions are absolute:
    /// subtracting two gives a [`Displacement`].
    ///
    /// ```compile_fail
    /// use physical_quantity::{Position, Vector, unit};
    ///
    /// let here = Position::new(Vector::new(1.0, 0.0, 0.0), unit::Length::Metre);
    /// let _ = *here + *here;
    /// ```
    ///
    /// ```compile_fail
    /// use physical_quantity::{Position, Vector, unit};
    ///
    /// let here = Position::new(Vector::new(1.0, 0.0, 0.0), unit::Length::Metre);
    /// let _ = here * 2.0;
    /// ```
    affine Position: Length, Length
}

vector_quantity! {
    /// The vector from one position to another.
    Displacement: Length, Length
}

vector_quantity!(Velocity: Speed, Speed);
vector_quantity!(Acceleration: Acceleration, ScalarAcceleration);
vector_quantity!(Force: Force, ScalarForce);

vector_quantity! {
    /// Force per area acting on a surface.
    Traction: Pressure, ScalarTraction
}

vector_quantity!(TemperatureGradient: TemperatureGradient, ScalarTemperatureGradient);
vector_quantity!(HeatFlux: EnergyFlux, ScalarHeatFlux);

linear_ops!(Displacement);
linear_ops!(Velocity);
linear_ops!(Acceleration);
linear_ops!(Force);
linear_ops!(Traction);
linear_ops!(TemperatureGradient);
linear_ops!(HeatFlux);

impl Sub for Position {
    type Output = Displacement;

    fn sub(self, rhs: Position) -> Displacement {
        Displacement::from_standard(self.value() - rhs.value())
    }
}

impl Add<Displacement> for Position {
    type Output = Position;

    fn add(self, rhs: Displacement) -> Position {
        Position::from_standard(self.value() + rhs.value())
    }
}

impl Add<Position> for Displacement {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        rhs + self
    }
}

impl Sub<Displacement> for Position {
    type Output = Position;

    fn sub(self, rhs: Displacement) -> Position {
        Position::from_standard(self.value() - rhs.value())
    }
}

impl AddAssign<Displacement> for Position {
    fn add_assign(&mut self, rhs: Displacement) {
        *self = *self + rhs;
    }
}

impl SubAssign<Displacement> for Position {
    fn sub_assign(&mut self, rhs: Displacement) {
        *self = *self - rhs;
    }
}

impl HeatFlux {
    /// Fourier's law: `q = -k ∇T`.
    pub fn from_conduction(conductivity: ThermalConductivity, gradient: TemperatureGradient) -> Self {
        Self::from_standard(gradient.value() * -conductivity.value())
    }
}
