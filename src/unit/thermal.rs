//! Heat transfer families.

use super::{BRITISH_THERMAL_UNIT, CALORIE, FOOT, INCH, POUND, POUND_FORCE, RANKINE, SLINCH, SLUG};

unit_family! {
    /// Units of thermal conductivity. In both imperial systems the length
    /// cancels, leaving pound-force per second per rankine.
    ThermalConductivity {
        dimensions: [-3, 1, 1, 0, -1, 0, 0],
        standard: WattPerMetrePerKelvin,
        systems: {
            MetreKilogramSecondKelvin => WattPerMetrePerKelvin,
            MillimetreGramSecondKelvin => NanowattPerMillimetrePerKelvin,
            FootPoundSecondRankine => PoundPerSecondPerRankine,
            InchPoundSecondRankine => PoundPerSecondPerRankine,
        },
        units: {
            WattPerMetrePerKelvin: "W/m/K" = scale(1.0) ["W/(m*K)", "W/m*K"],
            KilowattPerMetrePerKelvin: "kW/m/K" = scale(1000.0) ["kW/(m*K)"],
            NanowattPerMillimetrePerKelvin: "nW/mm/K" = per(1.0e6) ["nW/(mm*K)"],
            PoundPerSecondPerRankine: "lbf/s/°R" = scale(POUND_FORCE / RANKINE) ["lbf/(s*degR)"],
            BtuPerHourPerFootPerRankine: "BTU/hr/ft/°R" = scale(BRITISH_THERMAL_UNIT / (3600.0 * FOOT * RANKINE))
                ["Btu/hr/ft/degR", "BTU/(hr*ft*degR)"],
        }
    }
}

unit_family! {
    SpecificHeatCapacity {
        dimensions: [-2, 2, 0, 0, -1, 0, 0],
        standard: JoulePerKilogramPerKelvin,
        systems: {
            MetreKilogramSecondKelvin => JoulePerKilogramPerKelvin,
            MillimetreGramSecondKelvin => NanojoulePerGramPerKelvin,
            FootPoundSecondRankine => FootPoundPerSlugPerRankine,
            InchPoundSecondRankine => InchPoundPerSlinchPerRankine,
        },
        units: {
            JoulePerKilogramPerKelvin: "J/kg/K" = scale(1.0) ["J/(kg*K)"],
            KilojoulePerKilogramPerKelvin: "kJ/kg/K" = scale(1000.0) ["kJ/(kg*K)"],
            JoulePerGramPerKelvin: "J/g/K" = scale(1000.0) ["J/(g*K)"],
            NanojoulePerGramPerKelvin: "nJ/g/K" = per(1.0e6) ["nJ/(g*K)"],
            FootPoundPerSlugPerRankine: "ft·lbf/slug/°R" = scale(FOOT * POUND_FORCE / (SLUG * RANKINE)) [],
            InchPoundPerSlinchPerRankine: "in·lbf/slinch/°R" = scale(INCH * POUND_FORCE / (SLINCH * RANKINE)) [],
            BtuPerPoundPerRankine: "BTU/lbm/°R" = scale(BRITISH_THERMAL_UNIT / (POUND * RANKINE)) ["Btu/lb/degR"],
            CaloriePerGramPerKelvin: "cal/g/K" = scale(1000.0 * CALORIE) ["cal/(g*K)"],
        }
    }
}

unit_family! {
    HeatCapacity {
        dimensions: [-2, 2, 1, 0, -1, 0, 0],
        standard: JoulePerKelvin,
        systems: {
            MetreKilogramSecondKelvin => JoulePerKelvin,
            MillimetreGramSecondKelvin => NanojoulePerKelvin,
            FootPoundSecondRankine => FootPoundPerRankine,
            InchPoundSecondRankine => InchPoundPerRankine,
        },
        units: {
            KilojoulePerKelvin: "kJ/K" = scale(1000.0) [],
            JoulePerKelvin: "J/K" = scale(1.0) [],
            NanojoulePerKelvin: "nJ/K" = per(1.0e9) [],
            FootPoundPerRankine: "ft·lbf/°R" = scale(FOOT * POUND_FORCE / RANKINE) [],
            InchPoundPerRankine: "in·lbf/°R" = scale(INCH * POUND_FORCE / RANKINE) [],
            BtuPerRankine: "BTU/°R" = scale(BRITISH_THERMAL_UNIT / RANKINE) ["Btu/degR"],
        }
    }
}

unit_family! {
    /// Units of temperature gradient. A gradient is a temperature
    /// difference per length, so Celsius and Kelvin share a factor.
    TemperatureGradient {
        dimensions: [0, -1, 0, 0, 1, 0, 0],
        standard: KelvinPerMetre,
        systems: {
            MetreKilogramSecondKelvin => KelvinPerMetre,
            MillimetreGramSecondKelvin => KelvinPerMillimetre,
            FootPoundSecondRankine => RankinePerFoot,
            InchPoundSecondRankine => RankinePerInch,
        },
        units: {
            KelvinPerMetre: "K/m" = scale(1.0) [],
            KelvinPerCentimetre: "K/cm" = scale(100.0) [],
            KelvinPerMillimetre: "K/mm" = scale(1000.0) [],
            CelsiusPerMetre: "°C/m" = scale(1.0) [],
            CelsiusPerMillimetre: "°C/mm" = scale(1000.0) [],
            RankinePerFoot: "°R/ft" = scale(RANKINE / FOOT) [],
            RankinePerInch: "°R/in" = scale(RANKINE / INCH) [],
            FahrenheitPerFoot: "°F/ft" = scale(RANKINE / FOOT) [],
            FahrenheitPerInch: "°F/in" = scale(RANKINE / INCH) [],
        }
    }
}

unit_family! {
    /// Units of energy flux, such as a heat flux.
    EnergyFlux {
        dimensions: [-3, 0, 1, 0, 0, 0, 0],
        standard: WattPerSquareMetre,
        systems: {
            MetreKilogramSecondKelvin => WattPerSquareMetre,
            MillimetreGramSecondKelvin => NanowattPerSquareMillimetre,
            FootPoundSecondRankine => FootPoundPerSecondPerSquareFoot,
            InchPoundSecondRankine => InchPoundPerSecondPerSquareInch,
        },
        units: {
            KilowattPerSquareMetre: "kW/m²" = scale(1000.0) [],
            WattPerSquareMetre: "W/m²" = scale(1.0) [],
            WattPerSquareCentimetre: "W/cm²" = scale(1.0e4) [],
            NanowattPerSquareMillimetre: "nW/mm²" = per(1000.0) [],
            FootPoundPerSecondPerSquareFoot: "ft·lbf/s/ft²" = scale(POUND_FORCE / FOOT) [],
            InchPoundPerSecondPerSquareInch: "in·lbf/s/in²" = scale(POUND_FORCE / INCH) [],
            BtuPerHourPerSquareFoot: "BTU/hr/ft²" = scale(BRITISH_THERMAL_UNIT / (3600.0 * FOOT * FOOT))
                ["Btu/hr/ft2"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::{Energy, Length, Mass, TemperatureDifference, Time};
    use approx::assert_relative_eq;

    #[test]
    fn test_imperial_specific_heat_is_coherent() {
        let expected = Energy::FootPound.to_standard(1.0)
            / (Mass::Slug.to_standard(1.0) * TemperatureDifference::Rankine.to_standard(1.0));
        assert_relative_eq!(
            SpecificHeatCapacity::FootPoundPerSlugPerRankine.to_standard(1.0),
            expected,
            max_relative = 1e-14
        );
    }

    #[test]
    fn test_conductivity_length_cancels() {
        let inch_system = Energy::InchPound.to_standard(1.0)
            / (Time::Second.to_standard(1.0)
                * Length::Inch.to_standard(1.0)
                * TemperatureDifference::Rankine.to_standard(1.0));
        assert_relative_eq!(
            ThermalConductivity::PoundPerSecondPerRankine.to_standard(1.0),
            inch_system,
            max_relative = 1e-14
        );
    }

    #[test]
    fn test_btu_per_pound_per_rankine() {
        // The IT Btu is defined so that 1 Btu/(lb·°R) is exactly 4186.8 J/(kg·K).
        assert_relative_eq!(
            SpecificHeatCapacity::BtuPerPoundPerRankine.to_standard(1.0),
            4186.8,
            max_relative = 1e-9
        );
    }
}
