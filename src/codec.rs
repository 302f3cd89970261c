//! Primitive byte conversion shared by all PDU and characteristic codecs.
//!
//! All multi-byte integers are little-endian. Decoders read from a borrowed
//! [`Unpacker`] and encoders append to a [`Packer`], so composite values are
//! built by chaining the encoders of their fields in wire order.

use std::fmt::{Debug, Display, Formatter};

use structbuf::{Pack, Packer, StructBuf, Unpacker};
use tracing::debug;

use crate::att::Opcode;

/// Error type returned by all decoders and fallible constructors.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid length: want {want} bytes, have {have}")]
    InvalidLength { want: usize, have: usize },
    #[error("truncated value: need {need} bytes, have {have}")]
    Truncated { need: usize, have: usize },
    #[error("{0} unexpected trailing byte(s)")]
    TrailingBytes(usize),
    #[error("invalid opcode: want {want}, have {have:#04X}")]
    InvalidOpcode { want: Opcode, have: u8 },
    #[error("invalid {typ}: {raw:#X}")]
    InvalidEnum { typ: &'static str, raw: u32 },
    #[error("{typ} out of range: {raw}")]
    OutOfRange { typ: &'static str, raw: i64 },
    #[error(transparent)]
    InvalidUtf8(#[from] std::str::Utf8Error),
    #[error("attribute data list is empty")]
    EmptyList,
    #[error("non-uniform attribute data list: want {want}-byte values, have {have}")]
    NonUniformList { want: usize, have: usize },
    #[error("attribute value too long: {0} bytes")]
    ValueTooLong(usize),
}

/// Common codec result type.
pub type Result<T> = std::result::Result<T, Error>;

/// A value that can be written to a byte buffer.
pub trait Encode {
    /// Returns the number of bytes written by [`Encode::encode`].
    fn encoded_len(&self) -> usize;

    /// Writes the value at the current packer index.
    fn encode(&self, p: &mut Packer);

    /// Returns a new buffer containing the encoded value.
    #[must_use]
    fn to_bytes(&self) -> StructBuf {
        let n = self.encoded_len();
        let mut b = StructBuf::new(n);
        self.encode(&mut b.append());
        debug_assert_eq!(b.len(), n);
        b
    }
}

/// A value that can be read from a byte buffer.
pub trait Decode: Sized {
    /// Exact encoded length of fixed-layout values or [`None`] if the length
    /// is determined by the contents.
    const FIXED_LEN: Option<usize> = None;

    /// Reads the value from the current unpacker index. On error, the state
    /// of the unpacker is unspecified.
    fn decode(p: &mut Unpacker) -> Result<Self>;

    /// Decodes a value that must occupy all of `b`. Fixed-layout values
    /// require `b.len()` to equal [`Decode::FIXED_LEN`] exactly.
    fn from_bytes(b: &[u8]) -> Result<Self> {
        let r = match Self::FIXED_LEN {
            Some(want) if want != b.len() => Err(Error::InvalidLength {
                want,
                have: b.len(),
            }),
            _ => {
                let mut p = Unpacker::new(b);
                Self::decode(&mut p).and_then(|v| match p.len() {
                    0 => Ok(v),
                    n => Err(Error::TrailingBytes(n)),
                })
            }
        };
        if let Err(ref e) = r {
            debug!("Failed to decode {}: {e}", std::any::type_name::<Self>());
        }
        r
    }
}

/// Returns an error if fewer than `n` bytes remain in `p`.
#[inline]
pub(crate) fn need(p: &Unpacker, n: usize) -> Result<()> {
    if p.len() < n {
        return Err(Error::Truncated {
            need: n,
            have: p.len(),
        });
    }
    Ok(())
}

/// Decodes an optional field whose presence is indicated by a flag bit.
#[inline]
pub(crate) fn decode_opt<T: Decode>(present: bool, p: &mut Unpacker) -> Result<Option<T>> {
    present.then(|| T::decode(p)).transpose()
}

/// Returns the sum of fixed field lengths or [`None`] if any field has a
/// variable length.
#[must_use]
pub(crate) const fn sum_len(v: &[Option<usize>]) -> Option<usize> {
    let (mut i, mut n) = (0, 0);
    while i < v.len() {
        match v[i] {
            Some(m) => n += m,
            None => return None,
        }
        i += 1;
    }
    Some(n)
}

/// Packs four 2-bit fields into one byte. Field `i` occupies bits
/// `2*i..2*i+2`.
#[inline]
#[must_use]
pub const fn pack_bit2(v: [u8; 4]) -> u8 {
    debug_assert!(v[0] < 4 && v[1] < 4 && v[2] < 4 && v[3] < 4);
    (v[0] & 3) | (v[1] & 3) << 2 | (v[2] & 3) << 4 | (v[3] & 3) << 6
}

/// Unpacks one byte into four 2-bit fields. This is the inverse of
/// [`pack_bit2`].
#[inline]
#[must_use]
pub const fn unpack_bit2(b: u8) -> [u8; 4] {
    [b & 3, b >> 2 & 3, b >> 4 & 3, b >> 6]
}

/// Implements [`Encode`] and [`Decode`] for primitive integers.
macro_rules! prim_codec {
    ($($t:ident),+) => {$(
        impl Encode for $t {
            #[inline(always)]
            fn encoded_len(&self) -> usize {
                std::mem::size_of::<$t>()
            }

            #[inline(always)]
            fn encode(&self, p: &mut Packer) {
                p.$t(*self);
            }
        }

        impl Decode for $t {
            const FIXED_LEN: Option<usize> = Some(std::mem::size_of::<$t>());

            #[inline]
            fn decode(p: &mut Unpacker) -> Result<Self> {
                need(p, std::mem::size_of::<$t>())?;
                Ok(p.$t())
            }
        }
    )+};
}

prim_codec! { u8, u16, u32, i8, i16 }

/// Implements [`Encode`] and [`Decode`] for a `u8` or `u16` enum deriving
/// `IntoPrimitive` and `TryFromPrimitive`.
macro_rules! enum_codec {
    ($($t:ident: $repr:ident),+ $(,)?) => {$(
        impl $crate::codec::Encode for $t {
            #[inline(always)]
            fn encoded_len(&self) -> usize {
                ::std::mem::size_of::<$repr>()
            }

            #[inline]
            fn encode(&self, p: &mut ::structbuf::Packer) {
                p.$repr(*self);
            }
        }

        impl $crate::codec::Decode for $t {
            const FIXED_LEN: Option<usize> = Some(::std::mem::size_of::<$repr>());

            fn decode(p: &mut ::structbuf::Unpacker) -> $crate::codec::Result<Self> {
                let raw = <$repr as $crate::codec::Decode>::decode(p)?;
                Self::try_from(raw).map_err(|_| $crate::codec::Error::InvalidEnum {
                    typ: $crate::util::name_of!($t),
                    raw: raw.into(),
                })
            }
        }
    )+};
}
pub(crate) use enum_codec;

/// Implements [`Encode`] and [`Decode`] for a struct by coding its fields in
/// declaration order with no padding.
macro_rules! struct_codec {
    ($t:ident { $($f:ident: $ft:ty),+ $(,)? }) => {
        impl $crate::codec::Encode for $t {
            #[inline]
            fn encoded_len(&self) -> usize {
                0 $(+ $crate::codec::Encode::encoded_len(&self.$f))+
            }

            #[inline]
            fn encode(&self, p: &mut ::structbuf::Packer) {
                $($crate::codec::Encode::encode(&self.$f, p);)+
            }
        }

        impl $crate::codec::Decode for $t {
            const FIXED_LEN: Option<usize> = $crate::codec::sum_len(&[
                $(<$ft as $crate::codec::Decode>::FIXED_LEN),+
            ]);

            #[inline]
            fn decode(p: &mut ::structbuf::Unpacker) -> $crate::codec::Result<Self> {
                Ok(Self {
                    $($f: <$ft as $crate::codec::Decode>::decode(p)?,)+
                })
            }
        }
    };
}
pub(crate) use struct_codec;

/// Unsigned 24-bit integer.
#[derive(
    Clone,
    Copy,
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
#[serde(try_from = "u32", into = "u32")]
pub struct U24(u32);

impl U24 {
    /// Largest representable value.
    pub const MAX: Self = Self(0x00FF_FFFF);
    /// Size in bytes.
    pub const BYTES: usize = 3;

    /// Creates a 24-bit integer. Returns [`None`] if `v` does not fit in 24
    /// bits.
    #[inline]
    #[must_use]
    pub const fn new(v: u32) -> Option<Self> {
        if v <= Self::MAX.0 {
            Some(Self(v))
        } else {
            None
        }
    }

    /// Returns the value as a `u32`.
    #[inline(always)]
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Creates a 24-bit integer from its little-endian byte representation.
    #[inline]
    #[must_use]
    pub const fn from_le_bytes(b: [u8; 3]) -> Self {
        Self(u32::from_le_bytes([b[0], b[1], b[2], 0]))
    }

    /// Returns the little-endian byte representation.
    #[inline]
    #[must_use]
    pub const fn to_le_bytes(self) -> [u8; 3] {
        let b = self.0.to_le_bytes();
        [b[0], b[1], b[2]]
    }
}

impl Debug for U24 {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "U24({})", self.0)
    }
}

impl Display for U24 {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl From<U24> for u32 {
    #[inline(always)]
    fn from(v: U24) -> Self {
        v.0
    }
}

impl From<u16> for U24 {
    #[inline(always)]
    fn from(v: u16) -> Self {
        Self(u32::from(v))
    }
}

impl TryFrom<u32> for U24 {
    type Error = Error;

    #[inline]
    fn try_from(v: u32) -> Result<Self> {
        Self::new(v).ok_or(Error::OutOfRange {
            typ: crate::util::name_of!(U24),
            raw: v.into(),
        })
    }
}

impl Encode for U24 {
    #[inline(always)]
    fn encoded_len(&self) -> usize {
        Self::BYTES
    }

    #[inline]
    fn encode(&self, p: &mut Packer) {
        p.put(self.to_le_bytes());
    }
}

impl Decode for U24 {
    const FIXED_LEN: Option<usize> = Some(Self::BYTES);

    #[inline]
    fn decode(p: &mut Unpacker) -> Result<Self> {
        need(p, Self::BYTES)?;
        Ok(Self::from_le_bytes([p.u8(), p.u8(), p.u8()]))
    }
}

#[cfg(test)]
mod tests {
    use matches::assert_matches;

    use super::*;

    #[test]
    fn le_integers() {
        assert_eq!(&*0x1234_u16.to_bytes(), &[0x34, 0x12]);
        assert_eq!(&*0x1234_5678_u32.to_bytes(), &[0x78, 0x56, 0x34, 0x12]);
        assert_eq!(&*(-2_i16).to_bytes(), &[0xFE, 0xFF]);
        assert_eq!(u16::from_bytes(&[0x34, 0x12]), Ok(0x1234));
        assert_eq!(i8::from_bytes(&[0x80]), Ok(i8::MIN));
        assert_eq!(
            u32::from_bytes(&[1, 2, 3]),
            Err(Error::InvalidLength { want: 4, have: 3 })
        );
    }

    #[test]
    fn u24() {
        let v = U24::new(0x0A_0B0C).unwrap();
        assert_eq!(v.to_le_bytes(), [0x0C, 0x0B, 0x0A]);
        assert_eq!(U24::from_le_bytes([0x0C, 0x0B, 0x0A]), v);
        assert_eq!(&*v.to_bytes(), &[0x0C, 0x0B, 0x0A]);
        assert_eq!(U24::from_bytes(&[0xFF, 0xFF, 0xFF]), Ok(U24::MAX));
        assert_eq!(U24::new(0x0100_0000), None);
        assert_matches!(U24::try_from(u32::MAX), Err(Error::OutOfRange { .. }));
        assert_eq!(U24::from(0xFFFF_u16).get(), 0xFFFF);
    }

    #[test]
    fn bit2() {
        assert_eq!(pack_bit2([0, 0, 0, 0]), 0);
        assert_eq!(pack_bit2([3, 2, 1, 0]), 0b00_01_10_11);
        assert_eq!(pack_bit2([1, 1, 1, 3]), 0b11_01_01_01);
        for b in 0..=u8::MAX {
            assert_eq!(pack_bit2(unpack_bit2(b)), b);
        }
    }

    #[test]
    fn truncated() {
        let mut p = Unpacker::new(&[0x01]);
        assert_eq!(
            u16::decode(&mut p),
            Err(Error::Truncated { need: 2, have: 1 })
        );
        let mut p = Unpacker::new(&[0x01, 0x02, 0x03]);
        assert_eq!(u16::decode(&mut p), Ok(0x0201));
        assert_eq!(p.len(), 1);
        assert_eq!(decode_opt::<u8>(false, &mut p), Ok(None));
        assert_eq!(p.len(), 1);
        assert_eq!(decode_opt::<u8>(true, &mut p), Ok(Some(3)));
        assert_matches!(decode_opt::<u8>(true, &mut p), Err(Error::Truncated { .. }));
    }

    #[test]
    fn sum() {
        assert_eq!(sum_len(&[Some(1), Some(2), Some(4)]), Some(7));
        assert_eq!(sum_len(&[Some(1), None]), None);
    }
}
