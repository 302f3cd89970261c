//! Body Composition Measurement characteristic ([BCS] Section 3.2).
//!
//! [BCS]: https://www.bluetooth.com/specifications/specs/body-composition-service-1-0/

use std::fmt::{Display, Formatter};

use structbuf::{Packer, Unpacker};

use gattkit_const::Unit;

use crate::codec::{need, Decode, Encode, Result};

use super::{BodyEnergy, BodyPercentage, BodyResistance, DateTime};

/// Measurement system selected by bit 0 of the record flags. It determines
/// the unit and resolution of every [`BodyMass`] and [`BodyLength`] field.
#[derive(
    Clone, Copy, Debug, Default, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize,
)]
pub enum MeasurementSystem {
    /// Kilograms and metres.
    #[default]
    Si,
    /// Pounds and inches.
    Imperial,
}

impl MeasurementSystem {
    /// Returns the mass unit.
    #[inline]
    #[must_use]
    pub const fn mass_unit(self) -> Unit {
        match self {
            Self::Si => Unit::Kilogram,
            Self::Imperial => Unit::Pound,
        }
    }

    /// Returns the length unit.
    #[inline]
    #[must_use]
    pub const fn length_unit(self) -> Unit {
        match self {
            Self::Si => Unit::Metre,
            Self::Imperial => Unit::Inch,
        }
    }

    /// Returns the mass resolution.
    #[inline]
    const fn mass_resolution(self) -> f64 {
        match self {
            Self::Si => 0.005,
            Self::Imperial => 0.01,
        }
    }

    /// Returns the length resolution.
    #[inline]
    const fn length_resolution(self) -> f64 {
        match self {
            Self::Si => 0.001,
            Self::Imperial => 0.1,
        }
    }
}

/// Mass with a resolution of 0.005 kg or 0.01 lb, depending on the
/// [`MeasurementSystem`] of the record.
#[derive(
    Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
#[repr(transparent)]
#[serde(transparent)]
pub struct BodyMass(pub u16);

impl BodyMass {
    /// Returns the mass in the unit of `sys`.
    #[inline]
    #[must_use]
    pub fn value(self, sys: MeasurementSystem) -> f64 {
        f64::from(self.0) * sys.mass_resolution()
    }
}

/// Length with a resolution of 0.001 m or 0.1 in, depending on the
/// [`MeasurementSystem`] of the record.
#[derive(
    Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
#[repr(transparent)]
#[serde(transparent)]
pub struct BodyLength(pub u16);

impl BodyLength {
    /// Returns the length in the unit of `sys`.
    #[inline]
    #[must_use]
    pub fn value(self, sys: MeasurementSystem) -> f64 {
        f64::from(self.0) * sys.length_resolution()
    }
}

newtype_codec! { BodyMass(u16), BodyLength(u16) }

/// Body Composition Measurement characteristic. Every optional field is
/// present on the wire iff it is [`Some`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct BodyCompositionMeasurement {
    pub units: MeasurementSystem,
    /// More packets follow to complete the measurement.
    pub multiple_packet: bool,
    pub body_fat_percentage: BodyPercentage,
    pub timestamp: Option<DateTime>,
    pub user_id: Option<u8>,
    pub basal_metabolism: Option<BodyEnergy>,
    pub muscle_percentage: Option<BodyPercentage>,
    pub muscle_mass: Option<BodyMass>,
    pub fat_free_mass: Option<BodyMass>,
    pub soft_lean_mass: Option<BodyMass>,
    pub body_water_mass: Option<BodyMass>,
    pub impedance: Option<BodyResistance>,
    pub weight: Option<BodyMass>,
    pub height: Option<BodyLength>,
}

flag_fields! {
    /// Body Composition Measurement flags.
    pub struct BodyCompositionFlags: u16 for BodyCompositionMeasurement {
        extra {
            /// Imperial units (SI if clear).
            const IMPERIAL = 0;
            /// More packets follow.
            const MULTIPLE_PACKET = 12;
        }
        fields {
            1 => timestamp,
            2 => user_id,
            3 => basal_metabolism,
            4 => muscle_percentage,
            5 => muscle_mass,
            6 => fat_free_mass,
            7 => soft_lean_mass,
            8 => body_water_mass,
            9 => impedance,
            10 => weight,
            11 => height,
        }
    }
}

impl BodyCompositionMeasurement {
    /// Length of the flags and body fat percentage.
    pub const MIN_LEN: usize = 4;

    /// Creates a measurement with only the mandatory field set.
    #[inline]
    #[must_use]
    pub fn new(body_fat_percentage: BodyPercentage) -> Self {
        Self {
            body_fat_percentage,
            ..Self::default()
        }
    }

    /// Returns the flags that describe this record.
    #[must_use]
    pub fn flags(&self) -> BodyCompositionFlags {
        let mut f = self.field_flags();
        f.set(
            BodyCompositionFlags::IMPERIAL,
            self.units == MeasurementSystem::Imperial,
        );
        f.set(BodyCompositionFlags::MULTIPLE_PACKET, self.multiple_packet);
        f
    }
}

impl Display for BodyCompositionMeasurement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "body fat {}", self.body_fat_percentage)?;
        if let Some(w) = self.weight {
            write!(f, ", weight {:.3} {}", w.value(self.units), self.units.mass_unit())?;
        }
        if let Some(h) = self.height {
            write!(f, ", height {:.3} {}", h.value(self.units), self.units.length_unit())?;
        }
        Ok(())
    }
}

impl Encode for BodyCompositionMeasurement {
    fn encoded_len(&self) -> usize {
        Self::MIN_LEN + self.fields_len()
    }

    fn encode(&self, p: &mut Packer) {
        p.u16(self.flags().bits());
        self.body_fat_percentage.encode(p);
        self.encode_fields(p);
    }
}

impl Decode for BodyCompositionMeasurement {
    fn decode(p: &mut Unpacker) -> Result<Self> {
        need(p, Self::MIN_LEN)?;
        let f = BodyCompositionFlags::from_bits_retain(p.u16());
        let mut v = Self {
            units: if f.contains(BodyCompositionFlags::IMPERIAL) {
                MeasurementSystem::Imperial
            } else {
                MeasurementSystem::Si
            },
            multiple_packet: f.contains(BodyCompositionFlags::MULTIPLE_PACKET),
            body_fat_percentage: BodyPercentage::decode(p)?,
            ..Self::default()
        };
        v.decode_fields(f, p)?;
        Ok(v)
    }
}

assigned! { Characteristic: BodyCompositionMeasurement = BodyCompositionMeasurement }
