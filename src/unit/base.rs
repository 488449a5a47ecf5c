//! Families of the base dimensions, plus temperature differences.

use super::{AVOGADRO, FOOT, INCH, MILE, NAUTICAL_MILE, POUND, RANKINE, SLINCH, SLUG, YARD};

unit_family! {
    /// Units of time.
    Time {
        dimensions: [1, 0, 0, 0, 0, 0, 0],
        standard: Second,
        systems: {
            MetreKilogramSecondKelvin => Second,
            MillimetreGramSecondKelvin => Second,
            FootPoundSecondRankine => Second,
            InchPoundSecondRankine => Second,
        },
        units: {
            Nanosecond: "ns" = per(1.0e9) ["nanosecond", "nanoseconds"],
            Microsecond: "μs" = per(1.0e6) ["microsecond", "microseconds"],
            Millisecond: "ms" = per(1000.0) ["millisecond", "milliseconds"],
            Second: "s" = scale(1.0) ["sec", "second", "seconds"],
            Minute: "min" = scale(60.0) ["minute", "minutes"],
            Hour: "hr" = scale(3600.0) ["h", "hour", "hours"],
            Day: "d" = scale(86400.0) ["day", "days"],
        }
    }
}

unit_family! {
    /// Units of length.
    Length {
        dimensions: [0, 1, 0, 0, 0, 0, 0],
        standard: Metre,
        systems: {
            MetreKilogramSecondKelvin => Metre,
            MillimetreGramSecondKelvin => Millimetre,
            FootPoundSecondRankine => Foot,
            InchPoundSecondRankine => Inch,
        },
        units: {
            Kilometre: "km" = scale(1000.0) ["kilometre", "kilometres", "kilometer", "kilometers"],
            Metre: "m" = scale(1.0) ["metre", "metres", "meter", "meters"],
            Decimetre: "dm" = per(10.0) ["decimetre", "decimetres", "decimeter", "decimeters"],
            Centimetre: "cm" = per(100.0) ["centimetre", "centimetres", "centimeter", "centimeters"],
            Millimetre: "mm" = per(1000.0) ["millimetre", "millimetres", "millimeter", "millimeters"],
            Micrometre: "μm" = per(1.0e6) ["micron", "microns", "micrometre", "micrometer"],
            Nanometre: "nm" = per(1.0e9) ["nanometre", "nanometer"],
            /// International nautical mile, exactly 1852 m.
            NauticalMile: "nmi" = scale(NAUTICAL_MILE) ["nautical mile", "nautical miles"],
            Mile: "mi" = scale(MILE) ["mile", "miles"],
            Yard: "yd" = scale(YARD) ["yard", "yards"],
            Foot: "ft" = scale(FOOT) ["foot", "feet", "'"],
            Inch: "in" = scale(INCH) ["inch", "inches", "\""],
            /// One thousandth of an inch.
            Mil: "mil" = scale(INCH / 1000.0) ["mils", "thou"],
        }
    }
}

unit_family! {
    /// Units of mass. The foot and inch systems measure mass in slugs and
    /// slinches so that their unit of force is the pound-force.
    Mass {
        dimensions: [0, 0, 1, 0, 0, 0, 0],
        standard: Kilogram,
        systems: {
            MetreKilogramSecondKelvin => Kilogram,
            MillimetreGramSecondKelvin => Gram,
            FootPoundSecondRankine => Slug,
            InchPoundSecondRankine => Slinch,
        },
        units: {
            MetricTon: "t" = scale(1000.0) ["tonne", "tonnes", "metric ton", "metric tons"],
            Kilogram: "kg" = scale(1.0) ["kilogram", "kilograms", "kilo", "kilos"],
            Gram: "g" = per(1000.0) ["gram", "grams"],
            Milligram: "mg" = per(1.0e6) ["milligram", "milligrams"],
            Microgram: "μg" = per(1.0e9) ["microgram", "micrograms"],
            /// One pound-force per foot per square second.
            Slug: "slug" = scale(SLUG) ["slugs"],
            /// One pound-force per inch per square second.
            Slinch: "slinch" = scale(SLINCH) ["slinches", "blob", "blobs"],
            Pound: "lbm" = scale(POUND) ["lb", "lbs", "pound", "pounds"],
            Ounce: "oz" = scale(POUND / 16.0) ["ounce", "ounces"],
            ShortTon: "ton" = scale(2000.0 * POUND) ["tons", "short ton", "short tons"],
        }
    }
}

unit_family! {
    /// Units of absolute temperature. Celsius and Fahrenheit are offset
    /// scales, so their conversions are affine.
    Temperature {
        dimensions: [0, 0, 0, 0, 1, 0, 0],
        standard: Kelvin,
        systems: {
            MetreKilogramSecondKelvin => Kelvin,
            MillimetreGramSecondKelvin => Kelvin,
            FootPoundSecondRankine => Rankine,
            InchPoundSecondRankine => Rankine,
        },
        units: {
            Kelvin: "K" = scale(1.0) ["kelvin", "kelvins", "°K"],
            Celsius: "°C" = affine(|v| v + 273.15, |v| v - 273.15)
                ["C", "celsius", "degree celsius", "degrees celsius"],
            Rankine: "°R" = scale(RANKINE) ["R", "rankine", "degree rankine", "degrees rankine"],
            Fahrenheit: "°F" = affine(|v| (v + 459.67) * RANKINE, |v| v / RANKINE - 459.67)
                ["F", "fahrenheit", "degree fahrenheit", "degrees fahrenheit"],
        }
    }
}

unit_family! {
    /// Units of temperature difference. Offsets cancel, so every
    /// conversion is a pure scale.
    TemperatureDifference {
        dimensions: [0, 0, 0, 0, 1, 0, 0],
        standard: Kelvin,
        systems: {
            MetreKilogramSecondKelvin => Kelvin,
            MillimetreGramSecondKelvin => Kelvin,
            FootPoundSecondRankine => Rankine,
            InchPoundSecondRankine => Rankine,
        },
        units: {
            Kelvin: "K" = scale(1.0) ["kelvin", "kelvins", "ΔK"],
            Celsius: "°C" = scale(1.0) ["C", "celsius", "Δ°C"],
            Rankine: "°R" = scale(RANKINE) ["R", "rankine", "Δ°R"],
            Fahrenheit: "°F" = scale(RANKINE) ["F", "fahrenheit", "Δ°F"],
        }
    }
}

unit_family! {
    SubstanceAmount {
        dimensions: [0, 0, 0, 0, 0, 1, 0],
        standard: Mole,
        systems: {
            MetreKilogramSecondKelvin => Mole,
            MillimetreGramSecondKelvin => Mole,
            FootPoundSecondRankine => Mole,
            InchPoundSecondRankine => Mole,
        },
        units: {
            Kilomole: "kmol" = scale(1000.0) ["kilomole", "kilomoles"],
            Mole: "mol" = scale(1.0) ["mole", "moles"],
            Millimole: "mmol" = per(1000.0) ["millimole", "millimoles"],
            Micromole: "μmol" = per(1.0e6) ["micromole", "micromoles"],
            /// Individual particles, counted through the Avogadro constant.
            Particles: "particles" = per(AVOGADRO) ["particle", "molecules", "atoms"],
        }
    }
}

unit_family! {
    LuminousIntensity {
        dimensions: [0, 0, 0, 0, 0, 0, 1],
        standard: Candela,
        systems: {
            MetreKilogramSecondKelvin => Candela,
            MillimetreGramSecondKelvin => Candela,
            FootPoundSecondRankine => Candela,
            InchPoundSecondRankine => Candela,
        },
        units: {
            Kilocandela: "kcd" = scale(1000.0) ["kilocandela", "kilocandelas"],
            Candela: "cd" = scale(1.0) ["candela", "candelas"],
            Millicandela: "mcd" = per(1000.0) ["millicandela", "millicandelas"],
        }
    }
}
