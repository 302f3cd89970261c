use bitflags::bitflags;
use structbuf::{Packer, Unpacker};

use gattkit_const::Unit;

use crate::codec::{enum_codec, need, Decode, Encode, Result};
use crate::util::impl_display_via_debug;

use super::UnitValue;

bitflags! {
    /// Client Characteristic Configuration descriptor value
    /// ([Vol 3] Part G, Section 3.3.3.3).
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
    #[repr(transparent)]
    pub struct Cccd: u16 {
        /// The Characteristic Value shall be notified. This value can only be
        /// set if the characteristic's properties have the `NOTIFY` bit set.
        const NOTIFY = 1 << 0;
        /// The Characteristic Value shall be indicated. This value can only be
        /// set if the characteristic's properties have the `INDICATE` bit set.
        const INDICATE = 1 << 1;
    }
}

impl Encode for Cccd {
    #[inline(always)]
    fn encoded_len(&self) -> usize {
        2
    }

    #[inline]
    fn encode(&self, p: &mut Packer) {
        p.u16(self.bits());
    }
}

impl Decode for Cccd {
    const FIXED_LEN: Option<usize> = Some(2);

    /// Ignores reserved bits.
    #[inline]
    fn decode(p: &mut Unpacker) -> Result<Self> {
        u16::decode(p).map(Self::from_bits_truncate)
    }
}

/// Characteristic presentation format types ([Assigned Numbers] Section 2.4).
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    num_enum::IntoPrimitive,
    num_enum::TryFromPrimitive,
)]
#[non_exhaustive]
#[repr(u8)]
pub enum FmtType {
    /// Unsigned 1-bit (0 = false; 1 = true).
    Bool = 0x01,
    /// Unsigned 2-bit integer.
    U2 = 0x02,
    /// Unsigned 4-bit integer.
    U4 = 0x03,
    /// Unsigned 8-bit integer.
    U8 = 0x04,
    /// Unsigned 12-bit integer.
    U12 = 0x05,
    /// Unsigned 16-bit integer.
    U16 = 0x06,
    /// Unsigned 24-bit integer.
    U24 = 0x07,
    /// Unsigned 32-bit integer.
    U32 = 0x08,
    /// Unsigned 48-bit integer.
    U48 = 0x09,
    /// Unsigned 64-bit integer.
    U64 = 0x0A,
    /// Unsigned 128-bit integer.
    U128 = 0x0B,
    /// Signed 8-bit integer.
    I8 = 0x0C,
    /// Signed 12-bit integer.
    I12 = 0x0D,
    /// Signed 16-bit integer.
    I16 = 0x0E,
    /// Signed 24-bit integer.
    I24 = 0x0F,
    /// Signed 32-bit integer.
    I32 = 0x10,
    /// Signed 48-bit integer.
    I48 = 0x11,
    /// Signed 64-bit integer.
    I64 = 0x12,
    /// Signed 128-bit integer.
    I128 = 0x13,
    /// IEEE-754 32-bit floating point.
    F32 = 0x14,
    /// IEEE-754 64-bit floating point.
    F64 = 0x15,
    /// IEEE 11073-20601 16-bit SFLOAT.
    MedF16 = 0x16,
    /// IEEE 11073-20601 32-bit FLOAT.
    MedF32 = 0x17,
    /// IEEE 11073-20601 nomenclature code.
    U16x2 = 0x18,
    /// UTF-8 string.
    Utf8 = 0x19,
    /// UTF-16 string.
    Utf16 = 0x1A,
    /// Opaque structure.
    Struct = 0x1B,
}

/// Characteristic Presentation Format descriptor value
/// ([Vol 3] Part G, Section 3.3.3.5).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct PresentationFormat {
    pub format: FmtType,
    /// Base 10 exponent applied to the raw value.
    pub exponent: i8,
    pub unit: Unit,
    /// Name space of `description` (1 = Bluetooth SIG).
    pub namespace: u8,
    pub description: u16,
}

impl PresentationFormat {
    /// Encoded length.
    pub const BYTES: usize = 7;

    /// Returns the format of values of type `T` with no exponent and no
    /// description.
    #[inline]
    #[must_use]
    pub const fn for_unit<T: UnitValue>(format: FmtType) -> Self {
        Self {
            format,
            exponent: 0,
            unit: T::UNIT,
            namespace: 1,
            description: 0,
        }
    }
}

impl Encode for PresentationFormat {
    #[inline(always)]
    fn encoded_len(&self) -> usize {
        Self::BYTES
    }

    fn encode(&self, p: &mut Packer) {
        self.format.encode(p);
        p.i8(self.exponent);
        self.unit.encode(p);
        p.u8(self.namespace).u16(self.description);
    }
}

impl Decode for PresentationFormat {
    const FIXED_LEN: Option<usize> = Some(Self::BYTES);

    fn decode(p: &mut Unpacker) -> Result<Self> {
        need(p, Self::BYTES)?;
        Ok(Self {
            format: FmtType::decode(p)?,
            exponent: p.i8(),
            unit: Unit::decode(p)?,
            namespace: p.u8(),
            description: p.u16(),
        })
    }
}

enum_codec! { FmtType: u8, Unit: u16 }
impl_display_via_debug! { FmtType }

assigned! { Descriptor:
    Cccd = ClientCharacteristicConfiguration,
    PresentationFormat = CharacteristicPresentationFormat,
}
