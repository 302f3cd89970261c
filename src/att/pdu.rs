use gattkit_const::{Uuid, UuidPacker};
use structbuf::{Packer, Unpacker};

use crate::codec::{Decode, Encode, Error, Result};

use super::*;

/// ATT protocol data unit with a fixed opcode ([Vol 3] Part F, Section 3.3).
pub trait Pdu: Encode + Decode {
    /// Opcode that starts every encoded PDU of this type.
    const OPCODE: Opcode;
}

/// Implements [`Pdu`], [`Encode`], and [`Decode`] for a type that provides
/// `params_len()`, `encode_params()`, and `decode_params()`.
macro_rules! pdu {
    ($($t:ident = $op:ident),+ $(,)?) => {$(
        impl Pdu for $t {
            const OPCODE: Opcode = Opcode::$op;
        }

        impl Encode for $t {
            #[inline]
            fn encoded_len(&self) -> usize {
                1 + self.params_len()
            }

            #[inline]
            fn encode(&self, p: &mut Packer) {
                p.u8(Opcode::$op);
                self.encode_params(p);
            }
        }

        impl Decode for $t {
            #[inline]
            fn decode(p: &mut Unpacker) -> Result<Self> {
                Opcode::$op.check(p)?;
                Self::decode_params(p)
            }
        }
    )+};
}

pdu! {
    ErrorRsp = ErrorRsp,
    ExchangeMtuReq = ExchangeMtuReq,
    ExchangeMtuRsp = ExchangeMtuRsp,
    ReadByTypeReq = ReadByTypeReq,
    ReadByTypeRsp = ReadByTypeRsp,
    ReadByGroupTypeRsp = ReadByGroupTypeRsp,
    HandleValueNtf = HandleValueNtf,
}

/// `ATT_ERROR_RSP` PDU ([Vol 3] Part F, Section 3.4.1.1).
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
#[error("ATT {req}{} failed with {err}", .hdl.map_or(String::new(), |h| format!(" for handle {:#06X}", u16::from(h))))]
pub struct ErrorRsp {
    pub req: Opcode,
    pub hdl: Option<Handle>,
    pub err: ErrorCode,
}

impl ErrorRsp {
    /// Creates a new error response.
    #[inline]
    #[must_use]
    pub const fn new(req: Opcode, hdl: Option<Handle>, err: ErrorCode) -> Self {
        Self { req, hdl, err }
    }

    #[inline(always)]
    const fn params_len(&self) -> usize {
        4
    }

    #[inline]
    fn encode_params(&self, p: &mut Packer) {
        (p.u8(self.req))
            .u16(self.hdl.map_or(0, u16::from))
            .u8(self.err);
    }

    fn decode_params(p: &mut Unpacker) -> Result<Self> {
        Ok(Self {
            req: Opcode::decode(p)?,
            hdl: Handle::decode_opt(p)?,
            err: ErrorCode::decode(p)?,
        })
    }
}

/// `ATT_EXCHANGE_MTU_REQ` PDU carrying the client receive MTU
/// ([Vol 3] Part F, Section 3.4.2.1).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ExchangeMtuReq(pub Mtu);

/// `ATT_EXCHANGE_MTU_RSP` PDU carrying the server receive MTU
/// ([Vol 3] Part F, Section 3.4.2.2).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ExchangeMtuRsp(pub Mtu);

macro_rules! mtu_params {
    ($($t:ident),+) => {$(
        impl $t {
            #[inline(always)]
            const fn params_len(&self) -> usize {
                2
            }

            #[inline(always)]
            fn encode_params(&self, p: &mut Packer) {
                self.0.encode(p);
            }

            #[inline]
            fn decode_params(p: &mut Unpacker) -> Result<Self> {
                Mtu::decode(p).map(Self)
            }
        }
    )+};
}

mtu_params! { ExchangeMtuReq, ExchangeMtuRsp }

impl ExchangeMtuReq {
    /// Returns the MTU that both devices will use after the server responds
    /// with `rsp`.
    #[inline]
    #[must_use]
    pub fn negotiate(self, rsp: ExchangeMtuRsp) -> Mtu {
        Mtu::negotiate(rsp.0.get(), self.0.get())
    }
}

/// `ATT_READ_BY_TYPE_REQ` PDU ([Vol 3] Part F, Section 3.4.4.1).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ReadByTypeReq {
    pub range: HandleRange,
    pub typ: Uuid,
}

impl ReadByTypeReq {
    /// Creates a request for attributes of type `typ` within `range`.
    #[inline]
    #[must_use]
    pub fn new(range: HandleRange, typ: impl Into<Uuid>) -> Self {
        Self {
            range,
            typ: typ.into(),
        }
    }

    #[inline]
    fn params_len(&self) -> usize {
        self.range.encoded_len() + self.typ.as_u16().map_or(Uuid::BYTES, |_| 2)
    }

    #[inline]
    fn encode_params(&self, p: &mut Packer) {
        self.range.encode(p);
        p.uuid(self.typ);
    }

    fn decode_params(p: &mut Unpacker) -> Result<Self> {
        let range = HandleRange::decode(p)?;
        let b = p.take().into_inner();
        let typ = match b.len() {
            // Only the nil UUID is rejected at a valid length
            2 | Uuid::BYTES => Uuid::try_from(b).map_err(|()| Error::OutOfRange {
                typ: crate::util::name_of!(Uuid),
                raw: b.iter().take(8).rev().fold(0, |v, &x| v << 8 | i64::from(x)),
            })?,
            have => {
                return Err(Error::InvalidLength {
                    want: Uuid::BYTES,
                    have,
                })
            }
        };
        Ok(Self { range, typ })
    }
}

/// `ATT_READ_BY_TYPE_RSP` PDU ([Vol 3] Part F, Section 3.4.4.2).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReadByTypeRsp(pub AttributeDataList<AttributeData>);

impl ReadByTypeRsp {
    /// Creates a response from handle-value pairs with uniform value length.
    #[inline]
    pub fn new(items: impl Into<Vec<AttributeData>>) -> Result<Self> {
        AttributeDataList::new(items).map(Self)
    }

    /// Returns the handle-value pairs.
    #[inline(always)]
    #[must_use]
    pub fn items(&self) -> &[AttributeData] {
        self.0.items()
    }

    #[inline(always)]
    fn params_len(&self) -> usize {
        self.0.encoded_len()
    }

    #[inline(always)]
    fn encode_params(&self, p: &mut Packer) {
        self.0.encode(p);
    }

    #[inline]
    fn decode_params(p: &mut Unpacker) -> Result<Self> {
        AttributeDataList::decode(p).map(Self)
    }
}

/// `ATT_READ_BY_GROUP_TYPE_RSP` PDU ([Vol 3] Part F, Section 3.4.4.10).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReadByGroupTypeRsp(pub AttributeDataList<GroupAttributeData>);

impl ReadByGroupTypeRsp {
    /// Creates a response from group entries with uniform value length.
    #[inline]
    pub fn new(items: impl Into<Vec<GroupAttributeData>>) -> Result<Self> {
        AttributeDataList::new(items).map(Self)
    }

    /// Returns the group entries.
    #[inline(always)]
    #[must_use]
    pub fn items(&self) -> &[GroupAttributeData] {
        self.0.items()
    }

    #[inline(always)]
    fn params_len(&self) -> usize {
        self.0.encoded_len()
    }

    #[inline(always)]
    fn encode_params(&self, p: &mut Packer) {
        self.0.encode(p);
    }

    #[inline]
    fn decode_params(p: &mut Unpacker) -> Result<Self> {
        AttributeDataList::decode(p).map(Self)
    }
}

/// `ATT_HANDLE_VALUE_NTF` PDU ([Vol 3] Part F, Section 3.4.7.1). The value
/// occupies the rest of the PDU.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HandleValueNtf {
    pub hdl: Handle,
    pub value: AttrValue,
}

impl HandleValueNtf {
    /// Creates a notification carrying an encoded characteristic value.
    #[inline]
    #[must_use]
    pub fn new(hdl: Handle, value: impl AsRef<[u8]>) -> Self {
        Self {
            hdl,
            value: AttrValue::from_slice(value.as_ref()),
        }
    }

    #[inline(always)]
    fn params_len(&self) -> usize {
        2 + self.value.len()
    }

    #[inline]
    fn encode_params(&self, p: &mut Packer) {
        p.u16(self.hdl).put(&self.value);
    }

    fn decode_params(p: &mut Unpacker) -> Result<Self> {
        let hdl = Handle::decode(p)?;
        Ok(Self::new(hdl, p.take().into_inner()))
    }
}
