use smallvec::SmallVec;
use structbuf::{Packer, Unpacker};

use crate::codec::{Decode, Encode, Error, Result};

use super::Handle;

/// Attribute value storage. Most values fit in the default LE ATT_MTU, so
/// they are kept inline.
pub type AttrValue = SmallVec<[u8; 20]>;

/// Item of an attribute data list: one or more handles followed by an
/// attribute value whose length is shared by all items in the list.
pub trait ListItem: Sized {
    /// Number of bytes preceding the value.
    const PREFIX_LEN: usize;

    /// Returns the attribute value.
    fn value(&self) -> &[u8];

    /// Writes the handle prefix.
    fn encode_prefix(&self, p: &mut Packer);

    /// Creates an item from its handle prefix and value bytes.
    fn decode_item(prefix: &mut Unpacker, value: &[u8]) -> Result<Self>;
}

/// Handle-value pair returned by `ATT_READ_BY_TYPE_RSP`
/// ([Vol 3] Part F, Section 3.4.4.2).
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct AttributeData {
    pub handle: Handle,
    pub value: AttrValue,
}

impl AttributeData {
    /// Creates a handle-value pair.
    #[inline]
    #[must_use]
    pub fn new(handle: Handle, value: impl AsRef<[u8]>) -> Self {
        Self {
            handle,
            value: AttrValue::from_slice(value.as_ref()),
        }
    }
}

impl ListItem for AttributeData {
    const PREFIX_LEN: usize = 2;

    #[inline(always)]
    fn value(&self) -> &[u8] {
        &self.value
    }

    #[inline]
    fn encode_prefix(&self, p: &mut Packer) {
        self.handle.encode(p);
    }

    #[inline]
    fn decode_item(prefix: &mut Unpacker, value: &[u8]) -> Result<Self> {
        Ok(Self::new(Handle::decode(prefix)?, value))
    }
}

/// Handle, end group handle, and value returned by
/// `ATT_READ_BY_GROUP_TYPE_RSP` ([Vol 3] Part F, Section 3.4.4.10).
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct GroupAttributeData {
    pub handle: Handle,
    pub end_group: Handle,
    pub value: AttrValue,
}

impl GroupAttributeData {
    /// Creates a group entry.
    #[inline]
    #[must_use]
    pub fn new(handle: Handle, end_group: Handle, value: impl AsRef<[u8]>) -> Self {
        Self {
            handle,
            end_group,
            value: AttrValue::from_slice(value.as_ref()),
        }
    }
}

impl ListItem for GroupAttributeData {
    const PREFIX_LEN: usize = 4;

    #[inline(always)]
    fn value(&self) -> &[u8] {
        &self.value
    }

    #[inline]
    fn encode_prefix(&self, p: &mut Packer) {
        p.u16(self.handle).u16(self.end_group);
    }

    fn decode_item(prefix: &mut Unpacker, value: &[u8]) -> Result<Self> {
        let (handle, end_group) = (Handle::decode(prefix)?, Handle::decode(prefix)?);
        if end_group < handle {
            return Err(Error::OutOfRange {
                typ: crate::util::name_of!(GroupAttributeData),
                raw: u16::from(end_group).into(),
            });
        }
        Ok(Self::new(handle, end_group, value))
    }
}

/// Non-empty list of items with uniform value length. The encoded form is a
/// one-byte item length followed by the items with no separators.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct AttributeDataList<T> {
    items: Vec<T>,
}

impl<T: ListItem> AttributeDataList<T> {
    /// Maximum value length that fits in the one-byte item length field.
    pub const MAX_VALUE_LEN: usize = u8::MAX as usize - T::PREFIX_LEN;

    /// Creates a list after validating that it is not empty and that all
    /// values have the same length.
    pub fn new(items: impl Into<Vec<T>>) -> Result<Self> {
        let items = items.into();
        let want = items.first().ok_or(Error::EmptyList)?.value().len();
        if want > Self::MAX_VALUE_LEN {
            return Err(Error::ValueTooLong(want));
        }
        if let Some(v) = items.iter().find(|v| v.value().len() != want) {
            return Err(Error::NonUniformList {
                want,
                have: v.value().len(),
            });
        }
        Ok(Self { items })
    }

    /// Returns the encoded length of each item.
    #[inline]
    #[must_use]
    pub fn item_len(&self) -> usize {
        T::PREFIX_LEN + self.items[0].value().len()
    }

    /// Returns the list items.
    #[inline(always)]
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns the number of items, which is never zero.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always returns `false`.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the underlying items.
    #[inline(always)]
    #[must_use]
    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T: ListItem> TryFrom<Vec<T>> for AttributeDataList<T> {
    type Error = Error;

    #[inline]
    fn try_from(items: Vec<T>) -> Result<Self> {
        Self::new(items)
    }
}

impl<'a, T> IntoIterator for &'a AttributeDataList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: ListItem> Encode for AttributeDataList<T> {
    #[inline]
    fn encoded_len(&self) -> usize {
        1 + self.items.len() * self.item_len()
    }

    fn encode(&self, p: &mut Packer) {
        #[allow(clippy::cast_possible_truncation)]
        p.u8(self.item_len() as u8);
        for it in &self.items {
            it.encode_prefix(p);
            p.put(it.value());
        }
    }
}

impl<T: ListItem> Decode for AttributeDataList<T> {
    fn decode(p: &mut Unpacker) -> Result<Self> {
        let n = usize::from(u8::decode(p)?);
        if n == 0 || n < T::PREFIX_LEN {
            return Err(Error::InvalidLength {
                want: T::PREFIX_LEN,
                have: n,
            });
        }
        let rest = p.take().into_inner();
        if rest.is_empty() {
            return Err(Error::EmptyList);
        }
        if rest.len() % n != 0 {
            return Err(Error::Truncated {
                need: n,
                have: rest.len() % n,
            });
        }
        let items = (rest.chunks_exact(n))
            .map(|w| {
                let (prefix, value) = w.split_at(T::PREFIX_LEN);
                T::decode_item(&mut Unpacker::new(prefix), value)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { items })
    }
}

#[cfg(test)]
mod tests {
    use matches::assert_matches;

    use super::*;

    fn hdl(h: u16) -> Handle {
        Handle::new(h).unwrap()
    }

    #[test]
    fn uniform() {
        let ok = AttributeDataList::new(vec![
            AttributeData::new(hdl(1), [1, 2]),
            AttributeData::new(hdl(2), [3, 4]),
        ])
        .unwrap();
        assert_eq!(ok.item_len(), 4);
        assert_eq!(ok.len(), 2);
        assert_eq!(ok.encoded_len(), 9);

        assert_eq!(
            AttributeDataList::new(vec![
                AttributeData::new(hdl(1), [1, 2]),
                AttributeData::new(hdl(2), [3]),
            ]),
            Err(Error::NonUniformList { want: 2, have: 1 })
        );
        assert_eq!(
            AttributeDataList::<AttributeData>::new(vec![]),
            Err(Error::EmptyList)
        );
        assert_eq!(
            AttributeDataList::new(vec![AttributeData::new(hdl(1), [0; 254])]),
            Err(Error::ValueTooLong(254))
        );
        assert!(AttributeDataList::new(vec![AttributeData::new(hdl(1), [0; 253])]).is_ok());
        assert_eq!(
            AttributeDataList::new(vec![GroupAttributeData::new(hdl(1), hdl(2), [0; 252])]),
            Err(Error::ValueTooLong(252))
        );
    }

    #[test]
    fn decode() {
        let v = AttributeDataList::<AttributeData>::from_bytes(&[
            0x04, 0x01, 0x00, 0xAA, 0xBB, 0x02, 0x00, 0xCC, 0xDD,
        ])
        .unwrap();
        assert_eq!(v.items()[1], AttributeData::new(hdl(2), [0xCC, 0xDD]));

        let g = AttributeDataList::<GroupAttributeData>::from_bytes(&[
            0x06, 0x01, 0x00, 0x05, 0x00, 0x00, 0x18,
        ])
        .unwrap();
        assert_eq!(g.items(), &[GroupAttributeData::new(hdl(1), hdl(5), [0x00, 0x18])]);
    }

    #[test]
    fn decode_invalid() {
        type L = AttributeDataList<AttributeData>;
        assert_eq!(L::from_bytes(&[0x03]), Err(Error::EmptyList));
        assert_matches!(L::from_bytes(&[]), Err(Error::Truncated { .. }));
        assert_eq!(
            L::from_bytes(&[0x01, 0x01, 0x00]),
            Err(Error::InvalidLength { want: 2, have: 1 })
        );
        assert_eq!(
            L::from_bytes(&[0x03, 0x01, 0x00, 0xAA, 0x02, 0x00]),
            Err(Error::Truncated { need: 3, have: 2 })
        );
        assert_matches!(
            L::from_bytes(&[0x03, 0x00, 0x00, 0xAA]),
            Err(Error::OutOfRange { .. })
        );
        assert_matches!(
            AttributeDataList::<GroupAttributeData>::from_bytes(&[0x04, 0x05, 0x00, 0x01, 0x00]),
            Err(Error::OutOfRange { .. })
        );
    }
}
