use std::fmt::{Debug, Display, Formatter};
use std::num::NonZeroU16;
use std::ops::{Bound, RangeBounds};

use structbuf::{Packer, Unpacker};

use crate::codec::{Decode, Encode, Error, Result};
use crate::util::name_of;

/// Attribute handle ([Vol 3] Part F, Section 3.2.2). Handle `0x0000` is
/// reserved and can't be represented.
#[allow(clippy::unsafe_derive_deserialize)]
#[derive(
    Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
#[repr(transparent)]
#[serde(transparent)]
pub struct Handle(NonZeroU16);

impl Handle {
    pub const MIN: Self = Self(
        // SAFETY: Non-zero
        unsafe { NonZeroU16::new_unchecked(0x0001) },
    );
    pub const MAX: Self = Self(
        // SAFETY: Non-zero
        unsafe { NonZeroU16::new_unchecked(0xFFFF) },
    );

    /// Wraps a raw handle. Returns `None` if the handle is invalid.
    #[inline]
    #[must_use]
    pub const fn new(h: u16) -> Option<Self> {
        // TODO: Use map() when it is const stable
        match NonZeroU16::new(h) {
            Some(nz) => Some(Self(nz)),
            None => None,
        }
    }

    /// Returns the next handle or `None` if the maximum handle was reached.
    #[inline]
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        Self::new(self.0.get().wrapping_add(1))
    }

    /// Decodes an optional handle where `0x0000` means "no handle".
    pub(crate) fn decode_opt(p: &mut Unpacker) -> Result<Option<Self>> {
        u16::decode(p).map(Self::new)
    }
}

impl Debug for Handle {
    #[allow(clippy::use_self)]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({:#06X})", name_of!(Handle), self.0.get())
    }
}

impl Display for Handle {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self, f)
    }
}

impl From<Handle> for u16 {
    #[inline]
    fn from(h: Handle) -> Self {
        h.0.get()
    }
}

impl From<Handle> for usize {
    #[inline]
    fn from(h: Handle) -> Self {
        Self::from(h.0.get())
    }
}

impl TryFrom<u16> for Handle {
    type Error = Error;

    #[inline]
    fn try_from(h: u16) -> Result<Self> {
        Self::new(h).ok_or(Error::OutOfRange {
            typ: name_of!(Handle),
            raw: h.into(),
        })
    }
}

impl Encode for Handle {
    #[inline(always)]
    fn encoded_len(&self) -> usize {
        std::mem::size_of::<Self>()
    }

    #[inline]
    fn encode(&self, p: &mut Packer) {
        p.u16(*self);
    }
}

impl Decode for Handle {
    const FIXED_LEN: Option<usize> = Some(std::mem::size_of::<Self>());

    #[inline]
    fn decode(p: &mut Unpacker) -> Result<Self> {
        u16::decode(p).and_then(Self::try_from)
    }
}

/// Inclusive range of attribute handles. This is a `Copy` version of
/// `RangeInclusive<Handle>`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[must_use]
pub struct HandleRange {
    start: Handle,
    end: Handle,
}

impl HandleRange {
    /// Handle range that includes all possible handles.
    pub const ALL: Self = Self {
        start: Handle::MIN,
        end: Handle::MAX,
    };

    /// Creates a new handle range `start..=end`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    #[inline]
    pub const fn new(start: Handle, end: Handle) -> Self {
        assert!(start.0.get() <= end.0.get());
        Self { start, end }
    }

    /// Creates a new handle range `start..=end` from raw handles. Returns
    /// [`None`] if either handle is invalid or `start > end`.
    #[inline]
    #[must_use]
    pub const fn try_new(start: u16, end: u16) -> Option<Self> {
        match (Handle::new(start), Handle::new(end)) {
            (Some(start), Some(end)) if start.0.get() <= end.0.get() => {
                Some(Self { start, end })
            }
            _ => None,
        }
    }

    /// Returns the starting handle.
    #[inline(always)]
    #[must_use]
    pub const fn start(self) -> Handle {
        self.start
    }

    /// Returns the ending handle.
    #[inline(always)]
    #[must_use]
    pub const fn end(self) -> Handle {
        self.end
    }
}

impl RangeBounds<Handle> for HandleRange {
    #[inline]
    fn start_bound(&self) -> Bound<&Handle> {
        Bound::Included(&self.start)
    }

    #[inline]
    fn end_bound(&self) -> Bound<&Handle> {
        Bound::Included(&self.end)
    }

    #[inline]
    fn contains<U>(&self, item: &U) -> bool
    where
        Handle: PartialOrd<U>,
        U: ?Sized + PartialOrd<Handle>,
    {
        self.start <= *item && *item <= self.end
    }
}

impl Default for HandleRange {
    /// Returns a handle range that includes all possible handles.
    #[inline(always)]
    fn default() -> Self {
        Self::ALL
    }
}

impl Encode for HandleRange {
    #[inline(always)]
    fn encoded_len(&self) -> usize {
        std::mem::size_of::<Self>()
    }

    #[inline]
    fn encode(&self, p: &mut Packer) {
        p.u16(self.start).u16(self.end);
    }
}

impl Decode for HandleRange {
    const FIXED_LEN: Option<usize> = Some(std::mem::size_of::<Self>());

    /// Unpacks start/end handle range ([Vol 3] Part F, Section 3.4.3.1).
    fn decode(p: &mut Unpacker) -> Result<Self> {
        let (start, end) = (Handle::decode(p)?, Handle::decode(p)?);
        if start > end {
            return Err(Error::OutOfRange {
                typ: name_of!(HandleRange),
                raw: i64::from(u16::from(start)),
            });
        }
        Ok(Self::new(start, end))
    }
}

#[cfg(test)]
mod tests {
    use matches::assert_matches;

    use super::*;

    #[test]
    fn handle_size() {
        assert_eq!(std::mem::size_of::<Handle>(), 2);
        assert_eq!(std::mem::size_of::<HandleRange>(), 4);
        assert_eq!(std::mem::size_of::<Option<Handle>>(), 2);
    }

    #[test]
    fn handle_codec() {
        let h = Handle::new(0x0103).unwrap();
        assert_eq!(&*h.to_bytes(), &[0x03, 0x01]);
        assert_eq!(Handle::from_bytes(&[0x03, 0x01]), Ok(h));
        assert_matches!(Handle::from_bytes(&[0, 0]), Err(Error::OutOfRange { .. }));
        assert_eq!(Handle::MAX.next(), None);
        assert_eq!(Handle::MIN.next(), Handle::new(2));
    }

    #[test]
    fn handle_try_from() {
        assert_eq!(Handle::try_from(0x0103).map(u16::from), Ok(0x0103));
        assert_eq!(Handle::try_from(u16::MAX), Ok(Handle::MAX));
        assert_eq!(
            Handle::try_from(0),
            Err(Error::OutOfRange { typ: "Handle", raw: 0 })
        );
    }

    #[test]
    fn range_codec() {
        let r = HandleRange::try_new(0x0001, 0x00FF).unwrap();
        assert_eq!(&*r.to_bytes(), &[0x01, 0x00, 0xFF, 0x00]);
        assert_eq!(HandleRange::from_bytes(&[0x01, 0x00, 0xFF, 0x00]), Ok(r));
        assert!(r.contains(&Handle::new(0x0010).unwrap()));
        assert!(!r.contains(&Handle::new(0x0100).unwrap()));
        assert_eq!(HandleRange::try_new(5, 4), None);
        assert_eq!(HandleRange::try_new(0, 4), None);
        assert_matches!(
            HandleRange::from_bytes(&[0x05, 0x00, 0x04, 0x00]),
            Err(Error::OutOfRange { .. })
        );
        assert_eq!(HandleRange::default(), HandleRange::ALL);
    }
}
