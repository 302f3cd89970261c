use std::fmt::{Debug, Display, Formatter};

use structbuf::{Packer, Unpacker};

use crate::codec::{Decode, Encode, Error, Result};
use crate::util::name_of;

/// ATT maximum transmission unit ([Vol 3] Part F, Section 3.2.8 and
/// [Vol 3] Part G, Section 5.2.1).
#[derive(
    Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
#[repr(transparent)]
#[serde(try_from = "u16", into = "u16")]
pub struct Mtu(u16);

impl Mtu {
    /// Minimum LE ATT_MTU.
    pub const MIN: Self = Self(23);
    /// Maximum ATT_MTU that can carry a 512-byte attribute value in an
    /// ATT_READ_RSP or ATT_HANDLE_VALUE_NTF PDU.
    pub const MAX: Self = Self(517);
    /// ATT_MTU used until an MTU exchange completes.
    pub const DEFAULT: Self = Self::MIN;

    /// Creates an MTU. Returns [`None`] if `raw` is outside `MIN..=MAX`.
    #[inline]
    #[must_use]
    pub const fn new(raw: u16) -> Option<Self> {
        if Self::MIN.0 <= raw && raw <= Self::MAX.0 {
            Some(Self(raw))
        } else {
            None
        }
    }

    /// Returns the MTU that both devices use after an exchange of
    /// `ATT_EXCHANGE_MTU_REQ/RSP` PDUs ([Vol 3] Part F, Section 3.4.2.2).
    ///
    /// # Panics
    ///
    /// Panics if the clamped result is not a valid MTU, which would indicate a
    /// broken `MIN`/`MAX` definition.
    #[must_use]
    pub fn negotiate(server: u16, client: u16) -> Self {
        let raw = server.min(client).clamp(Self::MIN.0, Self::MAX.0);
        Self::new(raw).expect("clamped MTU is always valid")
    }

    /// Returns the raw MTU value.
    #[inline(always)]
    #[must_use]
    pub const fn get(self) -> u16 {
        self.0
    }
}

impl Default for Mtu {
    #[inline(always)]
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Debug for Mtu {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", name_of!(Mtu), self.0)
    }
}

impl Display for Mtu {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl From<Mtu> for u16 {
    #[inline(always)]
    fn from(m: Mtu) -> Self {
        m.0
    }
}

impl From<Mtu> for usize {
    #[inline(always)]
    fn from(m: Mtu) -> Self {
        Self::from(m.0)
    }
}

impl TryFrom<u16> for Mtu {
    type Error = Error;

    #[inline]
    fn try_from(raw: u16) -> Result<Self> {
        Self::new(raw).ok_or(Error::OutOfRange {
            typ: name_of!(Mtu),
            raw: raw.into(),
        })
    }
}

impl Encode for Mtu {
    #[inline(always)]
    fn encoded_len(&self) -> usize {
        std::mem::size_of::<Self>()
    }

    #[inline]
    fn encode(&self, p: &mut Packer) {
        p.u16(self.0);
    }
}

impl Decode for Mtu {
    const FIXED_LEN: Option<usize> = Some(std::mem::size_of::<Self>());

    #[inline]
    fn decode(p: &mut Unpacker) -> Result<Self> {
        u16::decode(p).and_then(Self::try_from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds() {
        assert_eq!(Mtu::new(22), None);
        assert_eq!(Mtu::new(23).map(Mtu::get), Some(23));
        assert_eq!(Mtu::new(517).map(Mtu::get), Some(517));
        assert_eq!(Mtu::new(518), None);
        assert_eq!(Mtu::new(0), None);
        assert_eq!(Mtu::default(), Mtu::MIN);
    }

    #[test]
    fn negotiate() {
        assert_eq!(Mtu::negotiate(512, 100).get(), 100);
        assert_eq!(Mtu::negotiate(100, 512).get(), 100);
        assert_eq!(Mtu::negotiate(0, 512), Mtu::MIN);
        assert_eq!(Mtu::negotiate(22, 23), Mtu::MIN);
        assert_eq!(Mtu::negotiate(u16::MAX, u16::MAX), Mtu::MAX);
        assert_eq!(Mtu::negotiate(518, 600), Mtu::MAX);
    }

    #[test]
    fn codec() {
        assert_eq!(Mtu::from_bytes(&[0x05, 0x02]), Ok(Mtu::MAX));
        assert_eq!(
            Mtu::from_bytes(&[0x06, 0x02]),
            Err(Error::OutOfRange {
                typ: "Mtu",
                raw: 518
            })
        );
        assert_eq!(&*Mtu::MIN.to_bytes(), &[23, 0]);
    }
}
