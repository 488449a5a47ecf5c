use super::Direction;
use std::ops::Div;

scalar_quantity! {
    /// Elapsed time.
    Time: Time
}

scalar_quantity! {
    /// Occurrences per unit time.
    Frequency: Frequency
}

scalar_quantity! {
    /// A scalar length, such as a distance or a thickness.
    Length: Length
}

scalar_quantity!(Mass: Mass);
scalar_quantity!(ElectricCurrent: ElectricCurrent);
scalar_quantity!(ElectricCharge: ElectricCharge);
scalar_quantity!(SubstanceAmount: SubstanceAmount);
scalar_quantity!(LuminousIntensity: LuminousIntensity);

scalar_quantity! {
    /// A plane angle. Stored in radians.
    Angle: Angle
}

scalar_quantity!(SolidAngle: SolidAngle);
scalar_quantity!(Area: Area);
scalar_quantity!(Volume: Volume);

scalar_quantity! {
    /// Magnitude of a velocity.
    Speed: Speed
}

scalar_quantity! {
    /// Magnitude or component of an acceleration.
    ScalarAcceleration: Acceleration
}

scalar_quantity!(AngularSpeed: AngularSpeed);
scalar_quantity!(AngularAccelerationMagnitude: AngularAcceleration);

scalar_quantity! {
    /// Magnitude or component of a force.
    ScalarForce: Force
}

scalar_quantity! {
    /// Isotropic pressure. Positive in compression.
    Pressure: Pressure
}

scalar_quantity!(Energy: Energy);
scalar_quantity!(Power: Power);
scalar_quantity!(MassDensity: MassDensity);
scalar_quantity!(MassRate: MassRate);
scalar_quantity!(VolumeRate: VolumeRate);
scalar_quantity!(DynamicViscosity: DynamicViscosity);
scalar_quantity!(KinematicViscosity: KinematicViscosity);
scalar_quantity!(ThermalConductivity: ThermalConductivity);
scalar_quantity!(SpecificEnergy: SpecificEnergy);
scalar_quantity!(SpecificHeatCapacity: SpecificHeatCapacity);
scalar_quantity!(HeatCapacity: HeatCapacity);

scalar_quantity! {
    /// An amount of computer memory.
    Memory: Memory
}

scalar_quantity!(MemoryRate: MemoryRate);
scalar_quantity!(ScalarTemperatureGradient: TemperatureGradient);
scalar_quantity!(ScalarHeatFlux: EnergyFlux);

scalar_quantity! {
    /// Magnitude or component of a traction vector.
    ScalarTraction: Pressure
}

scalar_quantity! {
    /// A component or invariant of a stress tensor.
    ScalarStress: Pressure
}

scalar_quantity!(ScalarStrainRate: Frequency);
scalar_quantity!(ScalarVelocityGradient: Frequency);

linear_ops!(Time);
linear_ops!(Frequency);
linear_ops!(Length);
linear_ops!(Mass);
linear_ops!(ElectricCurrent);
linear_ops!(ElectricCharge);
linear_ops!(SubstanceAmount);
linear_ops!(LuminousIntensity);
linear_ops!(Angle);
linear_ops!(SolidAngle);
linear_ops!(Area);
linear_ops!(Volume);
linear_ops!(Speed);
linear_ops!(ScalarAcceleration);
linear_ops!(AngularSpeed);
linear_ops!(AngularAccelerationMagnitude);
linear_ops!(ScalarForce);
linear_ops!(Pressure);
linear_ops!(Energy);
linear_ops!(Power);
linear_ops!(MassDensity);
linear_ops!(MassRate);
linear_ops!(VolumeRate);
linear_ops!(DynamicViscosity);
linear_ops!(KinematicViscosity);
linear_ops!(ThermalConductivity);
linear_ops!(SpecificEnergy);
linear_ops!(SpecificHeatCapacity);
linear_ops!(HeatCapacity);
linear_ops!(Memory);
linear_ops!(MemoryRate);
linear_ops!(ScalarTemperatureGradient);
linear_ops!(ScalarHeatFlux);
linear_ops!(ScalarTraction);
linear_ops!(ScalarStress);
linear_ops!(ScalarStrainRate);
linear_ops!(ScalarVelocityGradient);

impl Time {
    /// The frequency whose period is this time.
    pub fn reciprocal(&self) -> Frequency {
        Frequency::from_standard(1.0 / self.value())
    }
}

impl Frequency {
    pub fn period(&self) -> Time {
        Time::from_standard(1.0 / self.value())
    }
}

impl Div<Time> for f64 {
    type Output = Frequency;

    fn div(self, rhs: Time) -> Frequency {
        Frequency::from_standard(self / rhs.value())
    }
}

impl Div<Frequency> for f64 {
    type Output = Time;

    fn div(self, rhs: Frequency) -> Time {
        Time::from_standard(self / rhs.value())
    }
}

impl Angle {
    /// Angle between two directions, in `[0, π]`.
    pub fn between(a: &Direction, b: &Direction) -> Angle {
        Angle::from_standard(a.value().angle_to(&b.value()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_right_angle_in_radians() {
        let angle = Angle::new(90.0, unit::Angle::Degree);
        assert_relative_eq!(angle.value(), PI / 2.0);
        assert_relative_eq!(angle.value_in(unit::Angle::Radian), PI / 2.0);
        assert_eq!(angle.print_in(unit::Angle::Degree), "90 deg");
    }

    #[test]
    fn test_static_value_matches_runtime_conversion() {
        const MILE: Length = Length::from_standard(1609.344);
        const IN_FEET: f64 = MILE.static_value(unit::Length::Foot);
        assert_eq!(IN_FEET, MILE.value_in(unit::Length::Foot));
        assert_relative_eq!(IN_FEET, 5280.0, max_relative = 1e-14);
    }

    #[test]
    fn test_same_kind_arithmetic() {
        let mut total = Length::new(1.0, unit::Length::Metre) + Length::new(50.0, unit::Length::Centimetre);
        assert_relative_eq!(total.value(), 1.5);
        total -= Length::new(500.0, unit::Length::Millimetre);
        total *= 3.0;
        assert_relative_eq!(total.value(), 3.0);
        assert_relative_eq!((2.0 * total / 4.0).value(), 1.5);
        assert_relative_eq!((-total).value(), -3.0);
        assert_relative_eq!(total / Length::new(1.0, unit::Length::Metre), 3.0);
    }

    #[test]
    fn test_ordering_across_units() {
        let short = Length::new(11.0, unit::Length::Inch);
        let long = Length::new(1.0, unit::Length::Foot);
        assert!(short < long);
        assert_eq!(Length::new(1000.0, unit::Length::Millimetre), Length::new(1.0, unit::Length::Metre));
    }

    #[test]
    fn test_reciprocals() {
        let period = Time::new(0.5, unit::Time::Second);
        assert_relative_eq!(period.reciprocal().value(), 2.0);
        assert_relative_eq!((1.0 / period).value(), 2.0);
        let frequency = Frequency::new(4.0, unit::Frequency::Hertz);
        assert_relative_eq!(frequency.period().value(), 0.25);
        assert_relative_eq!((1.0 / frequency).value(), 0.25);
    }

    #[test]
    fn test_angle_between_directions() {
        let x = Direction::new(1.0, 0.0, 0.0);
        let xy = Direction::new(1.0, 1.0, 0.0);
        let angle = Angle::between(&x, &xy);
        assert_relative_eq!(angle.value_in(unit::Angle::Degree), 45.0, max_relative = 1e-12);
    }

    #[test]
    fn test_kinds_share_a_family_but_not_a_type() {
        let stress = ScalarStress::new(2.0, unit::Pressure::Megapascal);
        let pressure = Pressure::new(2.0e6, unit::Pressure::Pascal);
        assert_eq!(stress.value(), pressure.value());
        assert_eq!(ScalarStress::DIMENSIONS, Pressure::DIMENSIONS);
    }

    #[test]
    fn test_display_uses_standard_unit() {
        assert_eq!(Speed::new(36.0, unit::Speed::KilometrePerHour).to_string(), "10 m/s");
        assert_eq!(Memory::new(1.0, unit::Memory::Byte).to_string(), "8 b");
    }
}
