//! Battery Service characteristics ([BAS]).
//!
//! [BAS]: https://www.bluetooth.com/specifications/specs/battery-service/

use std::fmt::{Display, Formatter};

use structbuf::{Packer, Unpacker};

use crate::codec::{pack_bit2, struct_codec, unpack_bit2, Decode, Encode, Error, Result};
use crate::util::{impl_display_via_debug, name_of};

/// Battery Level characteristic: remaining charge in percent
/// ([GSS] Section 3.27).
#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
#[repr(transparent)]
#[serde(try_from = "u8", into = "u8")]
pub struct BatteryLevel(u8);

impl BatteryLevel {
    /// Fully charged.
    pub const FULL: Self = Self(100);

    /// Creates a battery level. Returns [`None`] if `pct > 100`.
    #[inline]
    #[must_use]
    pub const fn new(pct: u8) -> Option<Self> {
        if pct <= Self::FULL.0 {
            Some(Self(pct))
        } else {
            None
        }
    }

    /// Returns the level in percent.
    #[inline(always)]
    #[must_use]
    pub const fn percent(self) -> u8 {
        self.0
    }
}

impl Default for BatteryLevel {
    #[inline(always)]
    fn default() -> Self {
        Self::FULL
    }
}

impl Display for BatteryLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl From<BatteryLevel> for u8 {
    #[inline(always)]
    fn from(v: BatteryLevel) -> Self {
        v.0
    }
}

impl TryFrom<u8> for BatteryLevel {
    type Error = Error;

    #[inline]
    fn try_from(pct: u8) -> Result<Self> {
        Self::new(pct).ok_or(Error::OutOfRange {
            typ: name_of!(BatteryLevel),
            raw: pct.into(),
        })
    }
}

impl Encode for BatteryLevel {
    #[inline(always)]
    fn encoded_len(&self) -> usize {
        1
    }

    #[inline]
    fn encode(&self, p: &mut Packer) {
        p.u8(self.0);
    }
}

impl Decode for BatteryLevel {
    const FIXED_LEN: Option<usize> = Some(1);

    #[inline]
    fn decode(p: &mut Unpacker) -> Result<Self> {
        u8::decode(p).and_then(Self::try_from)
    }
}

/// Defines a 2-bit battery state field.
macro_rules! bit2_state {
    ($($(#[$doc:meta])* $t:ident { $v0:ident, $v1:ident, $v2:ident, $v3:ident })+) => {$(
        $(#[$doc])*
        #[derive(
            Clone,
            Copy,
            Debug,
            Eq,
            Hash,
            PartialEq,
            num_enum::IntoPrimitive,
            num_enum::TryFromPrimitive,
            serde::Deserialize,
            serde::Serialize,
        )]
        #[repr(u8)]
        pub enum $t {
            $v0 = 0,
            $v1 = 1,
            $v2 = 2,
            $v3 = 3,
        }

        impl Default for $t {
            #[inline(always)]
            fn default() -> Self {
                Self::$v0
            }
        }

        impl $t {
            #[inline]
            fn from_bit2(v: u8) -> Result<Self> {
                Self::try_from(v).map_err(|_| Error::InvalidEnum {
                    typ: name_of!($t),
                    raw: v.into(),
                })
            }
        }

        impl_display_via_debug! { $t }
    )+};
}

bit2_state! {
    /// Whether a battery is present.
    BatteryPresence { Unknown, NotSupported, NotPresent, Present }
    /// Whether the battery is discharging.
    BatteryDischargeState { Unknown, NotSupported, NotDischarging, Discharging }
    /// Whether the battery is charging.
    BatteryChargeState { Unknown, NotChargeable, NotCharging, Charging }
    /// Battery level status.
    BatteryLevelStatus { Unknown, NotSupported, GoodLevel, CriticallyLow }
}

/// Battery Power State characteristic: four 2-bit states packed into one byte
/// ([GSS] Section 3.28).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct BatteryPowerState {
    pub presence: BatteryPresence,
    pub discharge: BatteryDischargeState,
    pub charge: BatteryChargeState,
    pub level: BatteryLevelStatus,
}

impl Encode for BatteryPowerState {
    #[inline(always)]
    fn encoded_len(&self) -> usize {
        1
    }

    fn encode(&self, p: &mut Packer) {
        p.u8(pack_bit2([
            self.presence.into(),
            self.discharge.into(),
            self.charge.into(),
            self.level.into(),
        ]));
    }
}

impl Decode for BatteryPowerState {
    const FIXED_LEN: Option<usize> = Some(1);

    fn decode(p: &mut Unpacker) -> Result<Self> {
        let [presence, discharge, charge, level] = unpack_bit2(u8::decode(p)?);
        Ok(Self {
            presence: BatteryPresence::from_bit2(presence)?,
            discharge: BatteryDischargeState::from_bit2(discharge)?,
            charge: BatteryChargeState::from_bit2(charge)?,
            level: BatteryLevelStatus::from_bit2(level)?,
        })
    }
}

/// Battery Level State characteristic ([GSS] Section 3.26).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct BatteryLevelState {
    pub level: BatteryLevel,
    pub state: BatteryPowerState,
}

struct_codec! { BatteryLevelState { level: BatteryLevel, state: BatteryPowerState } }

assigned! { Characteristic:
    BatteryLevel = BatteryLevel,
    BatteryPowerState = BatteryPowerState,
    BatteryLevelState = BatteryLevelState,
}

#[cfg(test)]
mod tests {
    use matches::assert_matches;

    use super::*;

    #[test]
    fn battery_level() {
        let v = BatteryLevel::new(73).unwrap();
        assert_eq!(&*v.to_bytes(), &[0x49]);
        assert_eq!(BatteryLevel::from_bytes(&[0x49]), Ok(v));
        assert_eq!(v.percent(), 73);
        assert_eq!(
            BatteryLevel::from_bytes(&[0x49, 0x00]),
            Err(Error::InvalidLength { want: 1, have: 2 })
        );
        assert_matches!(BatteryLevel::from_bytes(&[]), Err(Error::InvalidLength { .. }));
        assert_eq!(BatteryLevel::new(101), None);
        assert_eq!(
            BatteryLevel::from_bytes(&[101]),
            Err(Error::OutOfRange {
                typ: "BatteryLevel",
                raw: 101
            })
        );
        assert_eq!(v.to_string(), "73%");
    }

    #[test]
    fn power_state() {
        let v = BatteryPowerState {
            presence: BatteryPresence::Present,
            discharge: BatteryDischargeState::NotDischarging,
            charge: BatteryChargeState::Charging,
            level: BatteryLevelStatus::GoodLevel,
        };
        assert_eq!(&*v.to_bytes(), &[0b10_11_10_11]);
        assert_eq!(BatteryPowerState::from_bytes(&[0b10_11_10_11]), Ok(v));
        for b in 0..=u8::MAX {
            let v = BatteryPowerState::from_bytes(&[b]).unwrap();
            assert_eq!(&*v.to_bytes(), &[b]);
        }
        assert_eq!(
            BatteryChargeState::from_bit2(3),
            Ok(BatteryChargeState::Charging)
        );
        assert_eq!(
            BatteryPresence::from_bit2(4),
            Err(Error::InvalidEnum {
                typ: "BatteryPresence",
                raw: 4
            })
        );
        assert_eq!(&*BatteryPowerState::default().to_bytes(), &[0]);
    }

    #[test]
    fn level_state() {
        let v = BatteryLevelState {
            level: BatteryLevel::new(5).unwrap(),
            state: BatteryPowerState {
                level: BatteryLevelStatus::CriticallyLow,
                ..BatteryPowerState::default()
            },
        };
        assert_eq!(BatteryLevelState::FIXED_LEN, Some(2));
        assert_eq!(&*v.to_bytes(), &[5, 0b11_00_00_00]);
        assert_eq!(BatteryLevelState::from_bytes(&[5, 0xC0]), Ok(v));
        assert_matches!(
            BatteryLevelState::from_bytes(&[200, 0xC0]),
            Err(Error::OutOfRange { .. })
        );
    }
}
