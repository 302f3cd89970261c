//! Fixed-unit value types ([GSS] Section 2.3).
//!
//! Each type wraps the raw integer transmitted on the wire. The physical value
//! is `raw * resolution`, with the resolution given in each type's
//! documentation.

use std::fmt::{Display, Formatter};

use gattkit_const::Unit;

use crate::codec::U24;

use super::UnitValue;

/// Defines newtypes over raw integers that are tied to one [`Unit`].
macro_rules! unit {
    ($($(#[$doc:meta])* $name:ident($raw:ty) = $unit:ident;)+) => {$(
        $(#[$doc])*
        #[derive(
            Clone,
            Copy,
            Debug,
            Default,
            Eq,
            Hash,
            Ord,
            PartialEq,
            PartialOrd,
            serde::Deserialize,
            serde::Serialize,
        )]
        #[repr(transparent)]
        #[serde(transparent)]
        pub struct $name($raw);

        impl $name {
            /// Wraps a raw value.
            #[inline(always)]
            #[must_use]
            pub const fn new(raw: $raw) -> Self {
                Self(raw)
            }

            /// Returns the raw value.
            #[inline(always)]
            #[must_use]
            pub const fn raw(self) -> $raw {
                self.0
            }
        }

        impl UnitValue for $name {
            const UNIT: Unit = Unit::$unit;
        }

        impl From<$raw> for $name {
            #[inline(always)]
            fn from(raw: $raw) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for $raw {
            #[inline(always)]
            fn from(v: $name) -> Self {
                v.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{} ({})", self.0, Unit::$unit)
            }
        }

        newtype_codec! { $name($raw) }
    )+};
}

unit! {
    /// Body fat or muscle percentage with a resolution of 0.1 %.
    BodyPercentage(u16) = Percentage;
    /// Basal metabolism with a resolution of 1 kJ.
    BodyEnergy(u16) = Joule;
    /// Body impedance with a resolution of 0.1 Ω.
    BodyResistance(u16) = Ohm;

    /// Speed with a resolution of 0.01 km/h.
    KilometrePerHour(u16) = KilometrePerHour;
    /// Long distance with a resolution of 1 m.
    Metre24(U24) = Metre;
    /// Short distance or elevation with a resolution of 1 m.
    Metre16(u16) = Metre;
    /// Step rate with a resolution of 1 step/min.
    StepPerMinute(u16) = StepPerMinute;
    /// Unsigned count with a resolution of 1 (stride count uses 0.1).
    UnitlessU16(u16) = Unitless;
    /// Signed dimensionless value with a resolution of 0.1.
    UnitlessI16(i16) = Unitless;
    /// Signed gradient with a resolution of 0.1 %.
    InclinePercentage(i16) = Percentage;
    /// Plane angle with a resolution of 0.1 degree.
    Degree(i16) = Degree;
    /// Signed power with a resolution of 1 W.
    Watt(i16) = Watt;
    /// Energy with a resolution of 1 kcal.
    Kilocalorie16(u16) = Kilocalorie;
    /// Energy with a resolution of 1 kcal in a single byte.
    Kilocalorie8(u8) = Kilocalorie;
    /// Heart rate with a resolution of 1 bpm.
    BeatsPerMinute(u8) = BeatsPerMinute;
    /// Metabolic equivalent with a resolution of 0.1 MET.
    MetabolicEquivalent(u8) = MetabolicEquivalent;
    /// Duration with a resolution of 1 s.
    Seconds(u16) = Second;

    /// Temperature with a resolution of 0.01 °C.
    Celsius(i16) = DegreeCelsius;
    /// Relative humidity with a resolution of 0.01 %.
    HumidityPercentage(u16) = Percentage;
    /// Pressure with a resolution of 0.1 Pa.
    Pascal(u32) = Pascal;

    /// Speed with a resolution of 0.01 m/s.
    MetresPerSecond(u16) = MetresPerSecond;
    /// Frequency with a resolution of 1 Hz.
    Hertz(u16) = Hertz;
    /// Voltage with a resolution of 1/64 V.
    Volt(u16) = Volt;
    /// Electric current with a resolution of 0.01 A.
    Ampere(u16) = Ampere;
    /// Illuminance with a resolution of 0.01 lx.
    Lux(U24) = Lux;
    /// Rotational speed with a resolution of 1 rpm.
    RevolutionPerMinute(u16) = RevolutionPerMinute;
    /// Energy with a resolution of 1 J.
    Joule32(u32) = Joule;
    /// Power with a resolution of 0.1 W.
    Watt32(u32) = Watt;
}
