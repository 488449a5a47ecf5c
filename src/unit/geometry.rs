//! Plane and solid angles, areas and volumes.

use super::{FOOT, INCH, MILE, US_GALLON, YARD};
use std::f64::consts::PI;

unit_family! {
    /// Units of plane angle. Factors are derived from `π` at full precision.
    Angle {
        dimensions: [0, 0, 0, 0, 0, 0, 0],
        standard: Radian,
        systems: {
            MetreKilogramSecondKelvin => Radian,
            MillimetreGramSecondKelvin => Radian,
            FootPoundSecondRankine => Radian,
            InchPoundSecondRankine => Radian,
        },
        units: {
            Radian: "rad" = scale(1.0) ["radian", "radians"],
            Milliradian: "mrad" = per(1000.0) ["milliradian", "milliradians"],
            Degree: "deg" = scale(PI / 180.0) ["degree", "degrees"],
            ArcMinute: "arcmin" = scale(PI / 10800.0) ["arcminute", "arcminutes", "′"],
            ArcSecond: "arcsec" = scale(PI / 648000.0) ["arcsecond", "arcseconds", "″"],
            Revolution: "rev" = scale(2.0 * PI) ["revolution", "revolutions", "turn", "turns"],
        }
    }
}

unit_family! {
    SolidAngle {
        dimensions: [0, 0, 0, 0, 0, 0, 0],
        standard: Steradian,
        systems: {
            MetreKilogramSecondKelvin => Steradian,
            MillimetreGramSecondKelvin => Steradian,
            FootPoundSecondRankine => Steradian,
            InchPoundSecondRankine => Steradian,
        },
        units: {
            Steradian: "sr" = scale(1.0) ["steradian", "steradians", "rad2"],
            SquareDegree: "deg²" = scale((PI / 180.0) * (PI / 180.0)) ["square degree", "square degrees"],
            /// The whole sphere.
            Spat: "sp" = scale(4.0 * PI) ["spat", "spats"],
        }
    }
}

unit_family! {
    /// Units of area.
    Area {
        dimensions: [0, 2, 0, 0, 0, 0, 0],
        standard: SquareMetre,
        systems: {
            MetreKilogramSecondKelvin => SquareMetre,
            MillimetreGramSecondKelvin => SquareMillimetre,
            FootPoundSecondRankine => SquareFoot,
            InchPoundSecondRankine => SquareInch,
        },
        units: {
            SquareKilometre: "km²" = scale(1.0e6) ["square kilometre", "square kilometer"],
            Hectare: "ha" = scale(1.0e4) ["hectare", "hectares"],
            SquareMetre: "m²" = scale(1.0) ["square metre", "square metres", "square meter", "square meters"],
            SquareDecimetre: "dm²" = per(100.0) ["square decimetre", "square decimeter"],
            SquareCentimetre: "cm²" = per(1.0e4) ["square centimetre", "square centimeter"],
            SquareMillimetre: "mm²" = per(1.0e6) ["square millimetre", "square millimeter"],
            SquareMile: "mi²" = scale(MILE * MILE) ["square mile", "square miles"],
            Acre: "ac" = scale(43560.0 * FOOT * FOOT) ["acre", "acres"],
            SquareYard: "yd²" = scale(YARD * YARD) ["square yard", "square yards"],
            SquareFoot: "ft²" = scale(FOOT * FOOT) ["square foot", "square feet", "sq ft"],
            SquareInch: "in²" = scale(INCH * INCH) ["square inch", "square inches", "sq in"],
        }
    }
}

unit_family! {
    /// Units of volume.
    Volume {
        dimensions: [0, 3, 0, 0, 0, 0, 0],
        standard: CubicMetre,
        systems: {
            MetreKilogramSecondKelvin => CubicMetre,
            MillimetreGramSecondKelvin => CubicMillimetre,
            FootPoundSecondRankine => CubicFoot,
            InchPoundSecondRankine => CubicInch,
        },
        units: {
            CubicKilometre: "km³" = scale(1.0e9) ["cubic kilometre", "cubic kilometer"],
            CubicMetre: "m³" = scale(1.0) ["cubic metre", "cubic metres", "cubic meter", "cubic meters"],
            Litre: "L" = per(1000.0) ["litre", "litres", "liter", "liters", "dm³"],
            Millilitre: "mL" = per(1.0e6) ["millilitre", "millilitres", "milliliter", "milliliters", "cm³", "cc"],
            CubicMillimetre: "mm³" = per(1.0e9) ["cubic millimetre", "cubic millimeter"],
            CubicMile: "mi³" = scale(MILE * MILE * MILE) ["cubic mile", "cubic miles"],
            CubicYard: "yd³" = scale(YARD * YARD * YARD) ["cubic yard", "cubic yards"],
            CubicFoot: "ft³" = scale(FOOT * FOOT * FOOT) ["cubic foot", "cubic feet", "cu ft"],
            CubicInch: "in³" = scale(INCH * INCH * INCH) ["cubic inch", "cubic inches", "cu in"],
            /// US liquid gallon, 231 cubic inches.
            UsGallon: "gal" = scale(US_GALLON) ["gallon", "gallons", "US gal"],
            UsQuart: "qt" = scale(US_GALLON / 4.0) ["quart", "quarts"],
            UsFluidOunce: "fl oz" = scale(US_GALLON / 128.0) ["fluid ounce", "fluid ounces"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::Unit;
    use approx::assert_relative_eq;

    #[test]
    fn test_angle_factors_use_pi() {
        assert_relative_eq!(Angle::Revolution.to_standard(1.0), 2.0 * PI);
        assert_relative_eq!(Angle::Degree.from_standard(PI), 180.0, max_relative = 1e-15);
        assert_relative_eq!(
            Angle::convert_copy(1.0, Angle::Degree, Angle::ArcSecond),
            3600.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_cubic_foot_round_trip() {
        let cubic_feet = Volume::convert_copy(10.0, Volume::CubicMetre, Volume::CubicFoot);
        assert_relative_eq!(cubic_feet, 10.0 / (0.3048 * 0.3048 * 0.3048), max_relative = 1e-14);
        let back = Volume::convert_copy(cubic_feet, Volume::CubicFoot, Volume::CubicMetre);
        assert_relative_eq!(back, 10.0, max_relative = 1e-14);
    }

    #[test]
    fn test_area_spellings() {
        assert_eq!(Area::parse("m^2"), Some(Area::SquareMetre));
        assert_eq!(Area::parse("ft2"), Some(Area::SquareFoot));
        assert_eq!(Area::parse("sq in"), Some(Area::SquareInch));
        assert_eq!(Volume::parse("l"), Some(Volume::Litre));
        assert_eq!(Volume::parse("cm3"), Some(Volume::Millilitre));
        assert_eq!(Angle::parse("°"), Some(Angle::Degree));
    }

    #[test]
    fn test_gallon() {
        assert_relative_eq!(Volume::UsGallon.to_standard(1.0), 3.785411784e-3, max_relative = 1e-12);
    }
}
