use super::ELEMENTARY_CHARGE;

unit_family! {
    /// Units of electric current.
    ElectricCurrent {
        dimensions: [0, 0, 0, 1, 0, 0, 0],
        standard: Ampere,
        systems: {
            MetreKilogramSecondKelvin => Ampere,
            MillimetreGramSecondKelvin => Ampere,
            FootPoundSecondRankine => Ampere,
            InchPoundSecondRankine => Ampere,
        },
        units: {
            Kiloampere: "kA" = scale(1000.0) ["kiloampere", "kiloamperes", "kiloamp"],
            Ampere: "A" = scale(1.0) ["amp", "amps", "ampere", "amperes", "C/s"],
            Milliampere: "mA" = per(1000.0) ["milliamp", "milliampere", "milliamperes"],
            Microampere: "μA" = per(1.0e6) ["microamp", "microampere", "microamperes"],
            Nanoampere: "nA" = per(1.0e9) ["nanoamp", "nanoampere", "nanoamperes"],
        }
    }
}

unit_family! {
    /// Units of electric charge.
    ElectricCharge {
        dimensions: [1, 0, 0, 1, 0, 0, 0],
        standard: Coulomb,
        systems: {
            MetreKilogramSecondKelvin => Coulomb,
            MillimetreGramSecondKelvin => Coulomb,
            FootPoundSecondRankine => Coulomb,
            InchPoundSecondRankine => Coulomb,
        },
        units: {
            Kilocoulomb: "kC" = scale(1000.0) ["kilocoulomb", "kilocoulombs"],
            Coulomb: "C" = scale(1.0) ["coulomb", "coulombs", "A*s"],
            Millicoulomb: "mC" = per(1000.0) ["millicoulomb", "millicoulombs"],
            Microcoulomb: "μC" = per(1.0e6) ["microcoulomb", "microcoulombs"],
            Nanocoulomb: "nC" = per(1.0e9) ["nanocoulomb", "nanocoulombs"],
            /// Charge of one proton.
            ElementaryCharge: "e" = scale(ELEMENTARY_CHARGE) ["elementary charge", "elementary charges"],
            AmpereHour: "A·h" = scale(3600.0) ["Ah", "amp-hour", "amp-hours"],
            MilliampereHour: "mA·h" = scale(3.6) ["mAh", "milliamp-hour", "milliamp-hours"],
        }
    }
}
