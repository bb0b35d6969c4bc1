//! Physical units of measurement.
//!
//! Lengths are carried around as typed newtypes ([`Pt`], [`In`], [`Mm`]) so that
//! values in different units can't be mixed by accident. Converting between them
//! is always explicit via [`From`] / [`Into`]:
//!
//! ```
//! use pdf_labels::{In, Mm, Pt};
//!
//! let width: Mm = In(1.0).into();
//! assert!((*width - 25.4).abs() < 1e-4);
//!
//! let width: Pt = Mm(25.4).into();
//! assert!((*width - 72.0).abs() < 1e-4);
//! ```
//!
//! Label formats declare their unit as a string (`"mm"`, `"inches"`, ...), which is
//! resolved through [`Unit`] and converted with [`convert`].

use crate::LabelError;
use derive_more::{Add, AddAssign, Deref, DerefMut, Display, From, Into, Sub, SubAssign, Sum};
use std::ops::{Div, DivAssign, Mul, MulAssign};
use std::str::FromStr;

/// A length in PDF points (1/72 of an inch). This is the unit PDF content streams use.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Sum,
    Deref,
    DerefMut,
    From,
    Into,
    Display,
)]
pub struct Pt(pub f32);

/// A length in inches
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Sum,
    Deref,
    DerefMut,
    From,
    Into,
    Display,
)]
pub struct In(pub f32);

/// A length in millimetres. All label geometry is resolved into millimetres.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Sum,
    Deref,
    DerefMut,
    From,
    Into,
    Display,
)]
pub struct Mm(pub f32);

/// Lengths scale by plain numbers
macro_rules! impl_scaling {
    ($($t:ident),*) => {
        $(
            impl Mul<f32> for $t {
                type Output = $t;
                fn mul(self, rhs: f32) -> $t {
                    $t(self.0 * rhs)
                }
            }

            impl MulAssign<f32> for $t {
                fn mul_assign(&mut self, rhs: f32) {
                    self.0 *= rhs;
                }
            }

            impl Div<f32> for $t {
                type Output = $t;
                fn div(self, rhs: f32) -> $t {
                    $t(self.0 / rhs)
                }
            }

            impl DivAssign<f32> for $t {
                fn div_assign(&mut self, rhs: f32) {
                    self.0 /= rhs;
                }
            }
        )*
    };
}

impl_scaling!(Pt, In, Mm);

const POINTS_PER_INCH: f32 = 72.0;
const MM_PER_INCH: f32 = 25.4;

impl From<In> for Pt {
    fn from(v: In) -> Self {
        Pt(v.0 * POINTS_PER_INCH)
    }
}

impl From<Mm> for Pt {
    fn from(v: Mm) -> Self {
        Pt(v.0 * POINTS_PER_INCH / MM_PER_INCH)
    }
}

impl From<Pt> for In {
    fn from(v: Pt) -> Self {
        In(v.0 / POINTS_PER_INCH)
    }
}

impl From<Mm> for In {
    fn from(v: Mm) -> Self {
        In(v.0 / MM_PER_INCH)
    }
}

impl From<Pt> for Mm {
    fn from(v: Pt) -> Self {
        Mm(v.0 * MM_PER_INCH / POINTS_PER_INCH)
    }
}

impl From<In> for Mm {
    fn from(v: In) -> Self {
        Mm(v.0 * MM_PER_INCH)
    }
}

/// A unit of measurement that label formats may be declared in
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Unit {
    Inch,
    Millimetre,
    Centimetre,
    Point,
}

impl Unit {
    /// How many of this unit fit in one inch. All conversions go through this table.
    pub fn units_per_inch(self) -> f32 {
        match self {
            Unit::Inch => 1.0,
            Unit::Millimetre => MM_PER_INCH,
            Unit::Centimetre => MM_PER_INCH / 10.0,
            Unit::Point => POINTS_PER_INCH,
        }
    }

    /// The short, canonical spelling of the unit
    pub fn abbreviation(self) -> &'static str {
        match self {
            Unit::Inch => "in",
            Unit::Millimetre => "mm",
            Unit::Centimetre => "cm",
            Unit::Point => "pt",
        }
    }

    /// Convert `value` expressed in `self` into `to`. Converting into the same unit
    /// returns `value` untouched.
    pub fn convert(self, value: f32, to: Unit) -> f32 {
        if self == to {
            return value;
        }
        value * (to.units_per_inch() / self.units_per_inch())
    }
}

impl FromStr for Unit {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_unit(s).as_str() {
            "in" => Ok(Unit::Inch),
            "mm" => Ok(Unit::Millimetre),
            "cm" => Ok(Unit::Centimetre),
            "pt" => Ok(Unit::Point),
            _ => Err(LabelError::UnknownUnit(s.to_string())),
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// Maps the long-form and differently-cased spellings of a unit onto its short form.
/// Spellings we don't know about are only trimmed and lower-cased.
pub fn normalize_unit(unit: &str) -> String {
    let unit = unit.trim().to_lowercase();
    match unit.as_str() {
        "in" | "inch" | "inches" | "\"" => "in".to_string(),
        "mm" | "millimeter" | "millimeters" | "millimetre" | "millimetres" => "mm".to_string(),
        "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => "cm".to_string(),
        "pt" | "point" | "points" => "pt".to_string(),
        _ => unit,
    }
}

/// Convert `value` from the unit spelled `from` into the unit spelled `to`.
///
/// If both spellings normalize to the same unit, `value` is returned exactly as
/// given, even for units that have no conversion factor. Otherwise both units must
/// be known, or [`LabelError::UnsupportedUnit`] is returned.
pub fn convert(value: f32, from: &str, to: &str) -> Result<f32, LabelError> {
    let from_norm = normalize_unit(from);
    let to_norm = normalize_unit(to);

    if from_norm == to_norm {
        return Ok(value);
    }

    let unsupported = || LabelError::UnsupportedUnit {
        from: from_norm.clone(),
        to: to_norm.clone(),
    };
    let from_unit: Unit = from_norm.parse().map_err(|_| unsupported())?;
    let to_unit: Unit = to_norm.parse().map_err(|_| unsupported())?;

    Ok(from_unit.convert(value, to_unit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn one_inch_is_25_4_mm() {
        let mm = convert(1.0, "in", "mm").expect("in and mm are supported");
        assert!((mm - 25.4).abs() < EPSILON, "got {mm}");

        let inches = convert(25.4, "mm", "in").expect("in and mm are supported");
        assert!((inches - 1.0).abs() < EPSILON, "got {inches}");
    }

    #[test]
    fn long_form_spellings_are_accepted() {
        let mm = convert(2.0, "Inches", "MILLIMETRES").expect("aliases normalize");
        assert!((mm - 50.8).abs() < 1e-4);
        assert_eq!("inch".parse::<Unit>().unwrap(), Unit::Inch);
        assert_eq!(" Millimeter ".parse::<Unit>().unwrap(), Unit::Millimetre);
        assert_eq!("points".parse::<Unit>().unwrap(), Unit::Point);
    }

    #[test]
    fn same_unit_is_identity_even_when_unknown() {
        assert_eq!(convert(10.0, "mm", "mm").unwrap(), 10.0);
        assert_eq!(convert(3.5, "furlong", "Furlong").unwrap(), 3.5);
    }

    #[test]
    fn unsupported_pair_names_both_units() {
        let err = convert(1.0, "furlong", "mm").unwrap_err();
        match err {
            LabelError::UnsupportedUnit { from, to } => {
                assert_eq!(from, "furlong");
                assert_eq!(to, "mm");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn typed_lengths_convert() {
        let pt: Pt = In(0.5).into();
        assert_eq!(pt, Pt(36.0));
        let mm: Mm = Pt(72.0).into();
        assert!((*mm - 25.4).abs() < EPSILON);
        let total: Mm = [Mm(1.0), Mm(2.5), Mm(3.0)].into_iter().sum();
        assert_eq!(total, Mm(6.5));
        assert_eq!(Mm(3.0) * 2.0, Mm(6.0));
    }

    proptest! {
        #[test]
        fn identity_conversion_is_bit_exact(v in proptest::num::f32::ANY, unit in "(in|inch|mm|millimeters|cm|pt)") {
            let converted = convert(v, &unit, &unit).unwrap();
            prop_assert_eq!(converted.to_bits(), v.to_bits());
        }

        #[test]
        fn round_trip_is_close(v in -10_000.0f32..10_000.0, a in 0usize..4, b in 0usize..4) {
            let units = ["in", "mm", "cm", "pt"];
            let there = convert(v, units[a], units[b]).unwrap();
            let back = convert(there, units[b], units[a]).unwrap();
            prop_assert!((back - v).abs() <= v.abs() * 1e-5 + 1e-5);
        }
    }
}
