use super::{FOOT, INCH, MILE, NAUTICAL_MILE, STANDARD_GRAVITY};
use std::f64::consts::PI;

unit_family! {
    /// Units of speed.
    Speed {
        dimensions: [-1, 1, 0, 0, 0, 0, 0],
        standard: MetrePerSecond,
        systems: {
            MetreKilogramSecondKelvin => MetrePerSecond,
            MillimetreGramSecondKelvin => MillimetrePerSecond,
            FootPoundSecondRankine => FootPerSecond,
            InchPoundSecondRankine => InchPerSecond,
        },
        units: {
            KilometrePerSecond: "km/s" = scale(1000.0) [],
            MetrePerSecond: "m/s" = scale(1.0) ["mps"],
            CentimetrePerSecond: "cm/s" = per(100.0) [],
            MillimetrePerSecond: "mm/s" = per(1000.0) [],
            KilometrePerHour: "km/hr" = scale(1000.0 / 3600.0) ["km/h", "kph", "kmh"],
            MilePerHour: "mph" = scale(MILE / 3600.0) ["mi/hr", "mi/h"],
            Knot: "kn" = scale(NAUTICAL_MILE / 3600.0) ["kt", "knot", "knots", "nmi/hr"],
            FootPerSecond: "ft/s" = scale(FOOT) ["fps"],
            FootPerMinute: "ft/min" = scale(FOOT / 60.0) ["fpm"],
            InchPerSecond: "in/s" = scale(INCH) ["ips"],
        }
    }
}

unit_family! {
    /// Units of linear acceleration.
    Acceleration {
        dimensions: [-2, 1, 0, 0, 0, 0, 0],
        standard: MetrePerSquareSecond,
        systems: {
            MetreKilogramSecondKelvin => MetrePerSquareSecond,
            MillimetreGramSecondKelvin => MillimetrePerSquareSecond,
            FootPoundSecondRankine => FootPerSquareSecond,
            InchPoundSecondRankine => InchPerSquareSecond,
        },
        units: {
            MetrePerSquareSecond: "m/s²" = scale(1.0) ["m/s/s"],
            CentimetrePerSquareSecond: "cm/s²" = per(100.0) ["cm/s/s", "Gal"],
            MillimetrePerSquareSecond: "mm/s²" = per(1000.0) ["mm/s/s"],
            FootPerSquareSecond: "ft/s²" = scale(FOOT) ["ft/s/s"],
            InchPerSquareSecond: "in/s²" = scale(INCH) ["in/s/s"],
            /// Standard acceleration of free fall, exactly 9.80665 m/s².
            StandardGravity: "g₀" = scale(STANDARD_GRAVITY) ["g0", "gn", "gee", "standard gravity"],
        }
    }
}

unit_family! {
    Frequency {
        dimensions: [-1, 0, 0, 0, 0, 0, 0],
        standard: Hertz,
        systems: {
            MetreKilogramSecondKelvin => Hertz,
            MillimetreGramSecondKelvin => Hertz,
            FootPoundSecondRankine => Hertz,
            InchPoundSecondRankine => Hertz,
        },
        units: {
            Gigahertz: "GHz" = scale(1.0e9) ["gigahertz"],
            Megahertz: "MHz" = scale(1.0e6) ["megahertz"],
            Kilohertz: "kHz" = scale(1000.0) ["kilohertz"],
            Hertz: "Hz" = scale(1.0) ["hertz", "1/s", "/s", "per second"],
            Millihertz: "mHz" = per(1000.0) ["millihertz"],
            PerMinute: "1/min" = per(60.0) ["/min", "per minute"],
            PerHour: "1/hr" = per(3600.0) ["/hr", "1/h", "per hour"],
        }
    }
}

unit_family! {
    /// Units of angular speed.
    AngularSpeed {
        dimensions: [-1, 0, 0, 0, 0, 0, 0],
        standard: RadianPerSecond,
        systems: {
            MetreKilogramSecondKelvin => RadianPerSecond,
            MillimetreGramSecondKelvin => RadianPerSecond,
            FootPoundSecondRankine => RadianPerSecond,
            InchPoundSecondRankine => RadianPerSecond,
        },
        units: {
            RadianPerSecond: "rad/s" = scale(1.0) [],
            RadianPerMinute: "rad/min" = per(60.0) [],
            RadianPerHour: "rad/hr" = per(3600.0) ["rad/h"],
            DegreePerSecond: "deg/s" = scale(PI / 180.0) [],
            DegreePerMinute: "deg/min" = scale(PI / 10800.0) [],
            DegreePerHour: "deg/hr" = scale(PI / 648000.0) ["deg/h"],
            RevolutionPerSecond: "rev/s" = scale(2.0 * PI) ["rps"],
            RevolutionPerMinute: "rev/min" = scale(PI / 30.0) ["rpm"],
            RevolutionPerHour: "rev/hr" = scale(PI / 1800.0) ["rev/h", "rph"],
        }
    }
}

unit_family! {
    /// Units of angular acceleration.
    AngularAcceleration {
        dimensions: [-2, 0, 0, 0, 0, 0, 0],
        standard: RadianPerSquareSecond,
        systems: {
            MetreKilogramSecondKelvin => RadianPerSquareSecond,
            MillimetreGramSecondKelvin => RadianPerSquareSecond,
            FootPoundSecondRankine => RadianPerSquareSecond,
            InchPoundSecondRankine => RadianPerSquareSecond,
        },
        units: {
            RadianPerSquareSecond: "rad/s²" = scale(1.0) ["rad/s/s"],
            RadianPerSquareMinute: "rad/min²" = per(3600.0) ["rad/min/min"],
            RadianPerSquareHour: "rad/hr²" = per(12_960_000.0) ["rad/hr/hr", "rad/h2", "rad/h/h"],
            DegreePerSquareSecond: "deg/s²" = scale(PI / 180.0) ["deg/s/s"],
            DegreePerSquareMinute: "deg/min²" = scale(PI / 648_000.0) ["deg/min/min"],
            DegreePerSquareHour: "deg/hr²" = scale(PI / 2_332_800_000.0) ["deg/hr/hr", "deg/h2", "deg/h/h"],
            RevolutionPerSquareSecond: "rev/s²" = scale(2.0 * PI) ["rev/s/s"],
            RevolutionPerSquareMinute: "rev/min²" = scale(PI / 1800.0) ["rev/min/min"],
            RevolutionPerSquareHour: "rev/hr²" = scale(PI / 6_480_000.0) ["rev/hr/hr", "rev/h2", "rev/h/h"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::Unit;
    use approx::assert_relative_eq;

    #[test]
    fn test_speed_factors() {
        assert_relative_eq!(
            Speed::convert_copy(36.0, Speed::KilometrePerHour, Speed::MetrePerSecond),
            10.0,
            max_relative = 1e-15
        );
        assert_relative_eq!(
            Speed::convert_copy(1.0, Speed::Knot, Speed::KilometrePerHour),
            1.852,
            max_relative = 1e-15
        );
    }

    #[test]
    fn test_revolutions() {
        assert_relative_eq!(
            AngularSpeed::convert_copy(60.0, AngularSpeed::RevolutionPerMinute, AngularSpeed::RevolutionPerSecond),
            1.0,
            max_relative = 1e-15
        );
        assert_relative_eq!(
            AngularAcceleration::convert_copy(
                1.0,
                AngularAcceleration::DegreePerSquareSecond,
                AngularAcceleration::DegreePerSquareMinute
            ),
            3600.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_frequency_prefixes_are_case_sensitive() {
        assert_eq!(Frequency::parse("MHz"), Some(Frequency::Megahertz));
        assert_eq!(Frequency::parse("mHz"), Some(Frequency::Millihertz));
        assert_eq!(Frequency::parse("mhz"), None);
        assert_eq!(Frequency::parse("khz"), Some(Frequency::Kilohertz));
        assert_eq!(Acceleration::parse("g0"), Some(Acceleration::StandardGravity));
    }
}
