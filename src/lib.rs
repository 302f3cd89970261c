//! Bluetooth LE Attribute Protocol and GATT characteristic value codecs.
//!
//! Every type in this crate converts between a raw little-endian byte buffer
//! and a typed value. Decoding borrows the buffer and either succeeds
//! completely or returns an [`Error`]. Encoding never fails once a value has
//! been constructed.
//!
//! ```
//! use gattkit::gatt::BatteryLevel;
//! use gattkit::{Decode, Encode};
//!
//! let v = BatteryLevel::new(73).unwrap();
//! assert_eq!(&*v.to_bytes(), &[0x49]);
//! assert_eq!(BatteryLevel::from_bytes(&[0x49]), Ok(v));
//! ```

#![warn(missing_debug_implementations)]
#![warn(non_ascii_idents)]
#![warn(single_use_lifetimes)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]
#![warn(clippy::cargo)]
#![warn(clippy::nursery)]
#![warn(clippy::pedantic)]
#![allow(clippy::enum_glob_use)]
#![allow(clippy::inline_always)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
#![warn(clippy::clone_on_ref_ptr)]
#![warn(clippy::dbg_macro)]
#![warn(clippy::get_unwrap)]
#![warn(clippy::if_then_some_else_none)]
#![warn(clippy::print_stdout)]
#![warn(clippy::str_to_string)]
#![warn(clippy::todo)]
#![warn(clippy::undocumented_unsafe_blocks)]

pub use codec::{Decode, Encode, Error, Result, U24};
pub use gattkit_const::{Characteristic, Descriptor, Service, Unit, Uuid, Uuid16, UuidType};

pub mod att;
pub mod codec;
pub mod gatt;

mod util;
