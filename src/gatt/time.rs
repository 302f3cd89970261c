use std::fmt::{Display, Formatter};

use structbuf::{Packer, Unpacker};

use crate::codec::{enum_codec, need, struct_codec, Decode, Encode, Error, Result};
use crate::util::{impl_display_via_debug, name_of};

/// Date Time characteristic ([GSS] Section 3.70). Zero in any date component
/// means that component is not known.
#[derive(
    Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct DateTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl DateTime {
    /// Encoded length.
    pub const BYTES: usize = 7;

    /// Creates a date and time after validating each component.
    pub fn new(year: u16, month: u8, day: u8, hours: u8, minutes: u8, seconds: u8) -> Result<Self> {
        let v = Self {
            year,
            month,
            day,
            hours,
            minutes,
            seconds,
        };
        v.validate()?;
        Ok(v)
    }

    /// Returns an error if any component is out of range.
    fn validate(&self) -> Result<()> {
        #[inline]
        fn check(ok: bool, typ: &'static str, raw: impl Into<i64>) -> Result<()> {
            if ok {
                Ok(())
            } else {
                Err(Error::OutOfRange {
                    typ,
                    raw: raw.into(),
                })
            }
        }
        check(
            self.year == 0 || (1582..=9999).contains(&self.year),
            "DateTime year",
            self.year,
        )?;
        check(self.month <= 12, "DateTime month", self.month)?;
        check(self.day <= 31, "DateTime day", self.day)?;
        check(self.hours <= 23, "DateTime hours", self.hours)?;
        check(self.minutes <= 59, "DateTime minutes", self.minutes)?;
        check(self.seconds <= 59, "DateTime seconds", self.seconds)
    }
}

impl Display for DateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hours, self.minutes, self.seconds
        )
    }
}

impl Encode for DateTime {
    #[inline(always)]
    fn encoded_len(&self) -> usize {
        Self::BYTES
    }

    fn encode(&self, p: &mut Packer) {
        (p.u16(self.year).u8(self.month).u8(self.day))
            .u8(self.hours)
            .u8(self.minutes)
            .u8(self.seconds);
    }
}

impl Decode for DateTime {
    const FIXED_LEN: Option<usize> = Some(Self::BYTES);

    fn decode(p: &mut Unpacker) -> Result<Self> {
        need(p, Self::BYTES)?;
        let v = Self {
            year: p.u16(),
            month: p.u8(),
            day: p.u8(),
            hours: p.u8(),
            minutes: p.u8(),
            seconds: p.u8(),
        };
        v.validate()?;
        Ok(v)
    }
}

/// Day of Week characteristic ([GSS] Section 3.72).
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    num_enum::IntoPrimitive,
    num_enum::TryFromPrimitive,
    serde::Deserialize,
    serde::Serialize,
)]
#[non_exhaustive]
#[repr(u8)]
pub enum DayOfWeek {
    Unknown = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl Default for DayOfWeek {
    #[inline(always)]
    fn default() -> Self {
        Self::Unknown
    }
}

/// Day Date Time characteristic ([GSS] Section 3.71).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct DayDateTime {
    pub date_time: DateTime,
    pub day_of_week: DayOfWeek,
}

/// Time Zone characteristic ([GSS] Section 3.229): offset from UTC in
/// 15-minute increments.
#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
#[repr(transparent)]
#[serde(try_from = "i8", into = "i8")]
pub struct TimeZone(i8);

impl TimeZone {
    /// Offset is not known.
    pub const UNKNOWN: Self = Self(-128);
    /// Coordinated Universal Time.
    pub const UTC: Self = Self(0);
    /// Minimum known offset (UTC-12:00).
    pub const MIN: i8 = -48;
    /// Maximum known offset (UTC+14:00).
    pub const MAX: i8 = 56;

    /// Creates a time zone from its raw value. Returns [`None`] if `raw` is
    /// neither a known offset nor the unknown marker.
    #[inline]
    #[must_use]
    pub const fn new(raw: i8) -> Option<Self> {
        if (Self::MIN <= raw && raw <= Self::MAX) || raw == Self::UNKNOWN.0 {
            Some(Self(raw))
        } else {
            None
        }
    }

    /// Returns the raw value.
    #[inline(always)]
    #[must_use]
    pub const fn raw(self) -> i8 {
        self.0
    }

    /// Returns the offset from UTC in minutes or [`None`] if not known.
    #[inline]
    #[must_use]
    pub const fn offset_minutes(self) -> Option<i16> {
        if self.0 == Self::UNKNOWN.0 {
            None
        } else {
            Some(self.0 as i16 * 15)
        }
    }
}

impl Default for TimeZone {
    #[inline(always)]
    fn default() -> Self {
        Self::UNKNOWN
    }
}

impl From<TimeZone> for i8 {
    #[inline(always)]
    fn from(tz: TimeZone) -> Self {
        tz.0
    }
}

impl TryFrom<i8> for TimeZone {
    type Error = Error;

    #[inline]
    fn try_from(raw: i8) -> Result<Self> {
        Self::new(raw).ok_or(Error::OutOfRange {
            typ: name_of!(TimeZone),
            raw: raw.into(),
        })
    }
}

impl Encode for TimeZone {
    #[inline(always)]
    fn encoded_len(&self) -> usize {
        1
    }

    #[inline]
    fn encode(&self, p: &mut Packer) {
        p.i8(self.0);
    }
}

impl Decode for TimeZone {
    const FIXED_LEN: Option<usize> = Some(1);

    #[inline]
    fn decode(p: &mut Unpacker) -> Result<Self> {
        i8::decode(p).and_then(Self::try_from)
    }
}

/// DST Offset characteristic ([GSS] Section 3.73).
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
#[non_exhaustive]
#[repr(u8)]
pub enum DstOffset {
    Standard = 0,
    HalfHourDaylight = 2,
    Daylight = 4,
    DoubleDaylight = 8,
    Unknown = 255,
}

impl Default for DstOffset {
    #[inline(always)]
    fn default() -> Self {
        Self::Unknown
    }
}

impl DstOffset {
    /// Returns the offset in minutes or [`None`] if not known.
    #[must_use]
    pub const fn minutes(self) -> Option<u8> {
        match self {
            Self::Unknown => None,
            v => Some(v as u8 * 15),
        }
    }
}

/// Local Time Information characteristic ([GSS] Section 3.137).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct LocalTimeInformation {
    pub time_zone: TimeZone,
    pub dst_offset: DstOffset,
}

enum_codec! { DayOfWeek: u8, DstOffset: u8 }
impl_display_via_debug! { DayOfWeek, DstOffset }

struct_codec! { DayDateTime { date_time: DateTime, day_of_week: DayOfWeek } }
struct_codec! { LocalTimeInformation { time_zone: TimeZone, dst_offset: DstOffset } }

assigned! { Characteristic:
    DateTime = DateTime,
    DayOfWeek = DayOfWeek,
    DayDateTime = DayDateTime,
    TimeZone = TimeZone,
    DstOffset = DstOffset,
    LocalTimeInformation = LocalTimeInformation,
}

#[cfg(test)]
mod tests {
    use matches::assert_matches;

    use super::*;

    #[test]
    fn date_time() {
        let v = DateTime::new(2023, 4, 15, 13, 5, 59).unwrap();
        let b = [0xE7, 0x07, 4, 15, 13, 5, 59];
        assert_eq!(&*v.to_bytes(), &b);
        assert_eq!(DateTime::from_bytes(&b), Ok(v));
        assert_eq!(v.to_string(), "2023-04-15 13:05:59");
        assert_eq!(DateTime::from_bytes(&[0; 7]), Ok(DateTime::default()));

        assert_matches!(DateTime::new(1581, 1, 1, 0, 0, 0), Err(Error::OutOfRange { .. }));
        assert_matches!(DateTime::new(2000, 13, 1, 0, 0, 0), Err(Error::OutOfRange { .. }));
        assert_matches!(DateTime::new(2000, 1, 1, 24, 0, 0), Err(Error::OutOfRange { .. }));
        assert_matches!(
            DateTime::from_bytes(&[0xE7, 0x07, 4, 15, 13, 60, 0]),
            Err(Error::OutOfRange { .. })
        );
        assert_eq!(
            DateTime::from_bytes(&b[..6]),
            Err(Error::InvalidLength { want: 7, have: 6 })
        );
    }

    #[test]
    fn day_date_time() {
        let v = DayDateTime {
            date_time: DateTime::new(2023, 4, 15, 0, 0, 0).unwrap(),
            day_of_week: DayOfWeek::Saturday,
        };
        assert_eq!(DayDateTime::FIXED_LEN, Some(8));
        let b = v.to_bytes();
        assert_eq!(b.len(), 8);
        assert_eq!(b[7], 6);
        assert_eq!(DayDateTime::from_bytes(&b), Ok(v));
        assert_eq!(
            DayOfWeek::from_bytes(&[8]),
            Err(Error::InvalidEnum {
                typ: "DayOfWeek",
                raw: 8
            })
        );
        assert_matches!(DayOfWeek::from_bytes(&[0xFF]), Err(Error::InvalidEnum { .. }));
        let mut b = b.to_vec();
        b[7] = 9;
        assert_matches!(DayDateTime::from_bytes(&b), Err(Error::InvalidEnum { .. }));
        assert_eq!(DayOfWeek::default(), DayOfWeek::Unknown);
    }

    #[test]
    fn time_zone() {
        assert_eq!(TimeZone::new(-48).and_then(TimeZone::offset_minutes), Some(-720));
        assert_eq!(TimeZone::new(56).and_then(TimeZone::offset_minutes), Some(840));
        assert_eq!(TimeZone::new(-49), None);
        assert_eq!(TimeZone::new(57), None);
        assert_eq!(TimeZone::UNKNOWN.offset_minutes(), None);
        assert_eq!(TimeZone::from_bytes(&[0x80]), Ok(TimeZone::UNKNOWN));
        assert_eq!(TimeZone::from_bytes(&[0xFC]).map(TimeZone::raw), Ok(-4));
        assert_matches!(TimeZone::from_bytes(&[0x7F]), Err(Error::OutOfRange { .. }));
    }

    #[test]
    fn local_time_information() {
        let v = LocalTimeInformation {
            time_zone: TimeZone::new(4).unwrap(),
            dst_offset: DstOffset::Daylight,
        };
        assert_eq!(&*v.to_bytes(), &[4, 4]);
        assert_eq!(LocalTimeInformation::from_bytes(&[4, 4]), Ok(v));
        assert_eq!(DstOffset::Daylight.minutes(), Some(60));
        assert_matches!(
            LocalTimeInformation::from_bytes(&[4, 3]),
            Err(Error::InvalidEnum { .. })
        );
        assert_eq!(
            DstOffset::from_bytes(&[3]),
            Err(Error::InvalidEnum {
                typ: "DstOffset",
                raw: 3
            })
        );
        assert_eq!(DstOffset::from_bytes(&[255]), Ok(DstOffset::Unknown));
        assert_eq!(DstOffset::default().minutes(), None);
    }
}
