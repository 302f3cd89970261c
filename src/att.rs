//! Attribute Protocol PDUs ([Vol 3] Part F).
//!
//! Each PDU type starts with a fixed [`Opcode`] byte. Decoding checks the
//! opcode before anything else and fails without looking at the parameters if
//! it does not match.

pub use {consts::*, handle::*, list::*, mtu::*, pdu::*};

mod consts;
mod handle;
mod list;
mod mtu;
mod pdu;
