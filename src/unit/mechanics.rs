//! Force, pressure, energy and the flow families built on them.

use super::{
    BRITISH_THERMAL_UNIT, CALORIE, ELEMENTARY_CHARGE, FOOT, INCH, POUND, POUND_FORCE, SLINCH,
    SLUG, US_GALLON,
};

unit_family! {
    /// Units of force.
    Force {
        dimensions: [-2, 1, 1, 0, 0, 0, 0],
        standard: Newton,
        systems: {
            MetreKilogramSecondKelvin => Newton,
            MillimetreGramSecondKelvin => Micronewton,
            FootPoundSecondRankine => Pound,
            InchPoundSecondRankine => Pound,
        },
        units: {
            Kilonewton: "kN" = scale(1000.0) ["kilonewton", "kilonewtons"],
            Newton: "N" = scale(1.0) ["newton", "newtons", "kg*m/s2"],
            Millinewton: "mN" = per(1000.0) ["millinewton", "millinewtons"],
            Micronewton: "μN" = per(1.0e6) ["micronewton", "micronewtons"],
            Dyne: "dyn" = per(1.0e5) ["dyne", "dynes"],
            /// Pound-force.
            Pound: "lbf" = scale(POUND_FORCE) ["lb", "pound-force", "pounds-force", "pound force"],
            Ounce: "ozf" = scale(POUND_FORCE / 16.0) ["ounce-force", "ounce force"],
            /// One thousand pounds-force.
            Kip: "kip" = scale(1000.0 * POUND_FORCE) ["kips", "klbf"],
        }
    }
}

unit_family! {
    /// Units of pressure and stress.
    Pressure {
        dimensions: [-2, -1, 1, 0, 0, 0, 0],
        standard: Pascal,
        systems: {
            MetreKilogramSecondKelvin => Pascal,
            MillimetreGramSecondKelvin => Pascal,
            FootPoundSecondRankine => PoundPerSquareFoot,
            InchPoundSecondRankine => PoundPerSquareInch,
        },
        units: {
            Gigapascal: "GPa" = scale(1.0e9) ["gigapascal", "gigapascals", "kN/mm2"],
            Megapascal: "MPa" = scale(1.0e6) ["megapascal", "megapascals", "N/mm2"],
            Kilopascal: "kPa" = scale(1000.0) ["kilopascal", "kilopascals"],
            Hectopascal: "hPa" = scale(100.0) ["hectopascal", "hectopascals"],
            Pascal: "Pa" = scale(1.0) ["pascal", "pascals", "N/m2"],
            Bar: "bar" = scale(1.0e5) ["bars"],
            Millibar: "mbar" = scale(100.0) ["millibar", "millibars"],
            /// Standard atmosphere, exactly 101325 Pa.
            Atmosphere: "atm" = scale(101_325.0) ["atmosphere", "atmospheres"],
            PoundPerSquareFoot: "psf" = scale(POUND_FORCE / (FOOT * FOOT)) ["lbf/ft2", "lb/ft2"],
            PoundPerSquareInch: "psi" = scale(POUND_FORCE / (INCH * INCH)) ["lbf/in2", "lb/in2"],
            KipPerSquareInch: "ksi" = scale(1000.0 * POUND_FORCE / (INCH * INCH)) ["kip/in2"],
        }
    }
}

unit_family! {
    /// Units of energy and work.
    Energy {
        dimensions: [-2, 2, 1, 0, 0, 0, 0],
        standard: Joule,
        systems: {
            MetreKilogramSecondKelvin => Joule,
            MillimetreGramSecondKelvin => Nanojoule,
            FootPoundSecondRankine => FootPound,
            InchPoundSecondRankine => InchPound,
        },
        units: {
            Gigajoule: "GJ" = scale(1.0e9) ["gigajoule", "gigajoules"],
            Megajoule: "MJ" = scale(1.0e6) ["megajoule", "megajoules"],
            Kilojoule: "kJ" = scale(1000.0) ["kilojoule", "kilojoules"],
            Joule: "J" = scale(1.0) ["joule", "joules", "N·m", "W·s"],
            Millijoule: "mJ" = per(1000.0) ["millijoule", "millijoules"],
            Microjoule: "μJ" = per(1.0e6) ["microjoule", "microjoules"],
            Nanojoule: "nJ" = per(1.0e9) ["nanojoule", "nanojoules"],
            WattHour: "W·hr" = scale(3600.0) ["Wh", "W·h"],
            KilowattHour: "kW·hr" = scale(3.6e6) ["kWh", "kW·h"],
            Calorie: "cal" = scale(CALORIE) ["calorie", "calories"],
            Kilocalorie: "kcal" = scale(1000.0 * CALORIE) ["kilocalorie", "kilocalories", "Cal"],
            ElectronVolt: "eV" = scale(ELEMENTARY_CHARGE) ["electronvolt", "electronvolts"],
            BritishThermalUnit: "BTU" = scale(BRITISH_THERMAL_UNIT) ["Btu"],
            FootPound: "ft·lbf" = scale(FOOT * POUND_FORCE) ["ft·lb", "foot-pound", "foot-pounds"],
            InchPound: "in·lbf" = scale(INCH * POUND_FORCE) ["in·lb", "inch-pound", "inch-pounds"],
        }
    }
}

unit_family! {
    /// Units of power.
    Power {
        dimensions: [-3, 2, 1, 0, 0, 0, 0],
        standard: Watt,
        systems: {
            MetreKilogramSecondKelvin => Watt,
            MillimetreGramSecondKelvin => Nanowatt,
            FootPoundSecondRankine => FootPoundPerSecond,
            InchPoundSecondRankine => InchPoundPerSecond,
        },
        units: {
            Gigawatt: "GW" = scale(1.0e9) ["gigawatt", "gigawatts"],
            Megawatt: "MW" = scale(1.0e6) ["megawatt", "megawatts"],
            Kilowatt: "kW" = scale(1000.0) ["kilowatt", "kilowatts"],
            Watt: "W" = scale(1.0) ["watt", "watts", "J/s"],
            Milliwatt: "mW" = per(1000.0) ["milliwatt", "milliwatts"],
            Microwatt: "μW" = per(1.0e6) ["microwatt", "microwatts"],
            Nanowatt: "nW" = per(1.0e9) ["nanowatt", "nanowatts"],
            FootPoundPerSecond: "ft·lbf/s" = scale(FOOT * POUND_FORCE) ["ft·lb/s"],
            InchPoundPerSecond: "in·lbf/s" = scale(INCH * POUND_FORCE) ["in·lb/s"],
            /// Mechanical horsepower, 550 ft·lbf/s.
            Horsepower: "hp" = scale(550.0 * FOOT * POUND_FORCE) ["horsepower"],
            BtuPerHour: "BTU/hr" = scale(BRITISH_THERMAL_UNIT / 3600.0) ["Btu/hr", "BTU/h"],
        }
    }
}

unit_family! {
    MassDensity {
        dimensions: [0, -3, 1, 0, 0, 0, 0],
        standard: KilogramPerCubicMetre,
        systems: {
            MetreKilogramSecondKelvin => KilogramPerCubicMetre,
            MillimetreGramSecondKelvin => GramPerCubicMillimetre,
            FootPoundSecondRankine => SlugPerCubicFoot,
            InchPoundSecondRankine => SlinchPerCubicInch,
        },
        units: {
            KilogramPerCubicMetre: "kg/m³" = scale(1.0) [],
            GramPerCubicMetre: "g/m³" = per(1000.0) [],
            GramPerCubicCentimetre: "g/cm³" = scale(1000.0) ["g/mL", "g/cc", "kg/L"],
            GramPerCubicMillimetre: "g/mm³" = scale(1.0e6) [],
            SlugPerCubicFoot: "slug/ft³" = scale(SLUG / (FOOT * FOOT * FOOT)) [],
            SlinchPerCubicInch: "slinch/in³" = scale(SLINCH / (INCH * INCH * INCH)) [],
            PoundPerCubicFoot: "lbm/ft³" = scale(POUND / (FOOT * FOOT * FOOT)) ["lb/ft3"],
            PoundPerCubicInch: "lbm/in³" = scale(POUND / (INCH * INCH * INCH)) ["lb/in3"],
        }
    }
}

unit_family! {
    /// Units of mass flow rate.
    MassRate {
        dimensions: [-1, 0, 1, 0, 0, 0, 0],
        standard: KilogramPerSecond,
        systems: {
            MetreKilogramSecondKelvin => KilogramPerSecond,
            MillimetreGramSecondKelvin => GramPerSecond,
            FootPoundSecondRankine => SlugPerSecond,
            InchPoundSecondRankine => SlinchPerSecond,
        },
        units: {
            KilogramPerSecond: "kg/s" = scale(1.0) [],
            GramPerSecond: "g/s" = per(1000.0) [],
            KilogramPerHour: "kg/hr" = per(3600.0) ["kg/h"],
            SlugPerSecond: "slug/s" = scale(SLUG) [],
            SlinchPerSecond: "slinch/s" = scale(SLINCH) [],
            PoundPerSecond: "lbm/s" = scale(POUND) ["lb/s"],
            PoundPerMinute: "lbm/min" = scale(POUND / 60.0) ["lb/min"],
            PoundPerHour: "lbm/hr" = scale(POUND / 3600.0) ["lb/hr", "lb/h"],
        }
    }
}

unit_family! {
    /// Units of volumetric flow rate.
    VolumeRate {
        dimensions: [-1, 3, 0, 0, 0, 0, 0],
        standard: CubicMetrePerSecond,
        systems: {
            MetreKilogramSecondKelvin => CubicMetrePerSecond,
            MillimetreGramSecondKelvin => CubicMillimetrePerSecond,
            FootPoundSecondRankine => CubicFootPerSecond,
            InchPoundSecondRankine => CubicInchPerSecond,
        },
        units: {
            CubicMetrePerSecond: "m³/s" = scale(1.0) [],
            LitrePerSecond: "L/s" = per(1000.0) [],
            LitrePerMinute: "L/min" = per(60_000.0) ["lpm"],
            MillilitrePerSecond: "mL/s" = per(1.0e6) ["cm3/s"],
            CubicMillimetrePerSecond: "mm³/s" = per(1.0e9) [],
            CubicFootPerSecond: "ft³/s" = scale(FOOT * FOOT * FOOT) ["cfs"],
            CubicFootPerMinute: "ft³/min" = scale(FOOT * FOOT * FOOT / 60.0) ["cfm"],
            CubicInchPerSecond: "in³/s" = scale(INCH * INCH * INCH) [],
            UsGallonPerMinute: "gal/min" = scale(US_GALLON / 60.0) ["gpm"],
        }
    }
}

unit_family! {
    /// Units of dynamic viscosity.
    DynamicViscosity {
        dimensions: [-1, -1, 1, 0, 0, 0, 0],
        standard: PascalSecond,
        systems: {
            MetreKilogramSecondKelvin => PascalSecond,
            MillimetreGramSecondKelvin => PascalSecond,
            FootPoundSecondRankine => PoundSecondPerSquareFoot,
            InchPoundSecondRankine => PoundSecondPerSquareInch,
        },
        units: {
            KilopascalSecond: "kPa·s" = scale(1000.0) [],
            PascalSecond: "Pa·s" = scale(1.0) ["N·s/m2", "kg/m/s"],
            MillipascalSecond: "mPa·s" = per(1000.0) [],
            Poise: "P" = per(10.0) ["poise"],
            Centipoise: "cP" = per(1000.0) ["centipoise"],
            PoundSecondPerSquareFoot: "lbf·s/ft²" = scale(POUND_FORCE / (FOOT * FOOT)) [],
            /// Also known as the reyn.
            PoundSecondPerSquareInch: "lbf·s/in²" = scale(POUND_FORCE / (INCH * INCH)) ["reyn"],
        }
    }
}

unit_family! {
    /// Units of kinematic viscosity.
    KinematicViscosity {
        dimensions: [-1, 2, 0, 0, 0, 0, 0],
        standard: SquareMetrePerSecond,
        systems: {
            MetreKilogramSecondKelvin => SquareMetrePerSecond,
            MillimetreGramSecondKelvin => SquareMillimetrePerSecond,
            FootPoundSecondRankine => SquareFootPerSecond,
            InchPoundSecondRankine => SquareInchPerSecond,
        },
        units: {
            SquareMetrePerSecond: "m²/s" = scale(1.0) [],
            /// The stokes.
            SquareCentimetrePerSecond: "cm²/s" = per(1.0e4) ["St", "stokes"],
            /// The centistokes.
            SquareMillimetrePerSecond: "mm²/s" = per(1.0e6) ["cSt", "centistokes"],
            SquareFootPerSecond: "ft²/s" = scale(FOOT * FOOT) [],
            SquareInchPerSecond: "in²/s" = scale(INCH * INCH) [],
        }
    }
}

unit_family! {
    /// Units of energy per unit mass.
    SpecificEnergy {
        dimensions: [-2, 2, 0, 0, 0, 0, 0],
        standard: JoulePerKilogram,
        systems: {
            MetreKilogramSecondKelvin => JoulePerKilogram,
            MillimetreGramSecondKelvin => NanojoulePerGram,
            FootPoundSecondRankine => FootPoundPerSlug,
            InchPoundSecondRankine => InchPoundPerSlinch,
        },
        units: {
            MegajoulePerKilogram: "MJ/kg" = scale(1.0e6) [],
            KilojoulePerKilogram: "kJ/kg" = scale(1000.0) [],
            JoulePerKilogram: "J/kg" = scale(1.0) ["m2/s2"],
            JoulePerGram: "J/g" = scale(1000.0) [],
            NanojoulePerGram: "nJ/g" = per(1.0e6) [],
            FootPoundPerSlug: "ft·lbf/slug" = scale(FOOT * POUND_FORCE / SLUG) [],
            InchPoundPerSlinch: "in·lbf/slinch" = scale(INCH * POUND_FORCE / SLINCH) [],
            BtuPerPound: "BTU/lbm" = scale(BRITISH_THERMAL_UNIT / POUND) ["Btu/lb"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::Unit;
    use approx::assert_relative_eq;

    #[test]
    fn test_pound_force() {
        assert_relative_eq!(Force::Pound.to_standard(1.0), 4.4482216152605, max_relative = 1e-14);
        assert_relative_eq!(
            Pressure::PoundPerSquareInch.to_standard(1.0),
            6894.757293168361,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_millimetre_gram_second_system_is_coherent() {
        // g·mm/s² is a micronewton, μN/mm² is a pascal, μN·mm is a nanojoule.
        let force = Force::Micronewton.to_standard(1.0);
        assert_relative_eq!(force, 1.0e-3 * 1.0e-3, max_relative = 1e-15);
        assert_relative_eq!(force / 1.0e-6, Pressure::Pascal.to_standard(1.0), max_relative = 1e-15);
        assert_relative_eq!(force * 1.0e-3, Energy::Nanojoule.to_standard(1.0), max_relative = 1e-15);
        assert_relative_eq!(
            MassDensity::GramPerCubicMillimetre.to_standard(1.0),
            1.0e-3 / 1.0e-9,
            max_relative = 1e-15
        );
    }

    #[test]
    fn test_foot_pound_second_system_is_coherent() {
        assert_relative_eq!(
            SpecificEnergy::FootPoundPerSlug.to_standard(1.0),
            FOOT * FOOT,
            max_relative = 1e-14
        );
        assert_relative_eq!(
            Power::Horsepower.to_standard(1.0),
            550.0 * Power::FootPoundPerSecond.to_standard(1.0),
            max_relative = 1e-15
        );
    }

    #[test]
    fn test_energy_spellings() {
        assert_eq!(Energy::parse("kWh"), Some(Energy::KilowattHour));
        assert_eq!(Energy::parse("ft*lbf"), Some(Energy::FootPound));
        assert_eq!(Energy::parse("mj"), None);
        assert_eq!(Energy::parse("btu"), Some(Energy::BritishThermalUnit));
        assert_eq!(Pressure::parse("N/mm²"), Some(Pressure::Megapascal));
    }
}
