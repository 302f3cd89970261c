//! Cross Trainer Data characteristic ([FTMS] Section 4.6).
//!
//! Some flag bits gate a pair of fields. Each pair is a single optional
//! struct, so both halves are always present or absent together.
//!
//! [FTMS]: https://www.bluetooth.com/specifications/specs/fitness-machine-service-1-0/

use structbuf::{Packer, Unpacker};

use crate::codec::{need, struct_codec, Decode, Encode, Result, U24};

use super::{
    BeatsPerMinute, Degree, InclinePercentage, Kilocalorie16, Kilocalorie8, KilometrePerHour,
    MetabolicEquivalent, Metre16, Metre24, Seconds, StepPerMinute, UnitlessI16, UnitlessU16, Watt,
};

/// Instantaneous and average step rate.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct StepRate {
    pub instantaneous: StepPerMinute,
    pub average: StepPerMinute,
}

/// Positive and negative elevation gain since the start of the session.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct ElevationGain {
    pub positive: Metre16,
    pub negative: Metre16,
}

/// Inclination and ramp angle setting.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Incline {
    pub inclination: InclinePercentage,
    pub ramp_angle: Degree,
}

/// Total, per hour and per minute expended energy.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct ExpendedEnergy {
    pub total: Kilocalorie16,
    pub per_hour: Kilocalorie16,
    pub per_minute: Kilocalorie8,
}

struct_codec! { StepRate { instantaneous: StepPerMinute, average: StepPerMinute } }
struct_codec! { ElevationGain { positive: Metre16, negative: Metre16 } }
struct_codec! { Incline { inclination: InclinePercentage, ramp_angle: Degree } }
struct_codec! {
    ExpendedEnergy { total: Kilocalorie16, per_hour: Kilocalorie16, per_minute: Kilocalorie8 }
}

/// Direction of movement selected by flag bit 15. It has no field bytes.
#[derive(
    Clone, Copy, Debug, Default, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize,
)]
pub enum MovementDirection {
    #[default]
    Forward,
    Backward,
}

/// Cross Trainer Data characteristic. Every optional field is present on the
/// wire iff it is [`Some`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct CrossTrainerData {
    pub direction: MovementDirection,
    pub instantaneous_speed: Option<KilometrePerHour>,
    pub average_speed: Option<KilometrePerHour>,
    pub total_distance: Option<Metre24>,
    pub step_rate: Option<StepRate>,
    /// Stride count with a resolution of 0.1.
    pub stride_count: Option<UnitlessU16>,
    pub elevation_gain: Option<ElevationGain>,
    pub incline: Option<Incline>,
    pub resistance_level: Option<UnitlessI16>,
    pub instantaneous_power: Option<Watt>,
    pub average_power: Option<Watt>,
    pub expended_energy: Option<ExpendedEnergy>,
    pub heart_rate: Option<BeatsPerMinute>,
    pub metabolic_equivalent: Option<MetabolicEquivalent>,
    pub elapsed_time: Option<Seconds>,
    pub remaining_time: Option<Seconds>,
}

flag_fields! {
    /// Cross Trainer Data flags. Only the low 24 bits are transmitted.
    pub struct CrossTrainerFlags: u32 for CrossTrainerData {
        extra {
            /// Backward movement (forward if clear).
            const MOVEMENT_DIRECTION = 15;
        }
        fields {
            0 => instantaneous_speed,
            1 => average_speed,
            2 => total_distance,
            3 => step_rate,
            4 => stride_count,
            5 => elevation_gain,
            6 => incline,
            7 => resistance_level,
            8 => instantaneous_power,
            9 => average_power,
            10 => expended_energy,
            11 => heart_rate,
            12 => metabolic_equivalent,
            13 => elapsed_time,
            14 => remaining_time,
        }
    }
}

impl CrossTrainerData {
    /// Length of the flags.
    pub const MIN_LEN: usize = U24::BYTES;

    /// Returns the flags that describe this record.
    #[must_use]
    pub fn flags(&self) -> CrossTrainerFlags {
        let mut f = self.field_flags();
        f.set(
            CrossTrainerFlags::MOVEMENT_DIRECTION,
            self.direction == MovementDirection::Backward,
        );
        f
    }
}

impl Encode for CrossTrainerData {
    fn encoded_len(&self) -> usize {
        Self::MIN_LEN + self.fields_len()
    }

    fn encode(&self, p: &mut Packer) {
        p.put(&self.flags().bits().to_le_bytes()[..U24::BYTES]);
        self.encode_fields(p);
    }
}

impl Decode for CrossTrainerData {
    fn decode(p: &mut Unpacker) -> Result<Self> {
        need(p, Self::MIN_LEN)?;
        let f = CrossTrainerFlags::from_bits_retain(U24::decode(p)?.get());
        let mut v = Self {
            direction: if f.contains(CrossTrainerFlags::MOVEMENT_DIRECTION) {
                MovementDirection::Backward
            } else {
                MovementDirection::Forward
            },
            ..Self::default()
        };
        v.decode_fields(f, p)?;
        Ok(v)
    }
}

assigned! { Characteristic: CrossTrainerData = CrossTrainerData }
