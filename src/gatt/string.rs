use std::fmt::{Display, Formatter};

use structbuf::{Packer, Unpacker};

use crate::codec::{Decode, Encode, Result};

/// Defines UTF-8 string values. The whole attribute value is the string, with
/// no length prefix or terminator.
macro_rules! utf8 {
    ($($(#[$doc:meta])* $kind:ident $t:ident = $uuid:ident;)+) => {$(
        $(#[$doc])*
        #[derive(
            Clone,
            Debug,
            Default,
            Eq,
            Hash,
            Ord,
            PartialEq,
            PartialOrd,
            serde::Deserialize,
            serde::Serialize,
        )]
        #[serde(transparent)]
        pub struct $t(String);

        impl $t {
            /// Creates a new string value.
            #[inline]
            #[must_use]
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// Returns the string.
            #[inline(always)]
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns the underlying string.
            #[inline(always)]
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl AsRef<str> for $t {
            #[inline(always)]
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $t {
            #[inline]
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }

        impl From<String> for $t {
            #[inline]
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl Display for $t {
            #[inline]
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Encode for $t {
            #[inline(always)]
            fn encoded_len(&self) -> usize {
                self.0.len()
            }

            #[inline]
            fn encode(&self, p: &mut Packer) {
                p.put(self.0.as_bytes());
            }
        }

        impl Decode for $t {
            /// Consumes all remaining bytes.
            fn decode(p: &mut Unpacker) -> Result<Self> {
                let b = p.take().into_inner();
                Ok(Self(std::str::from_utf8(b)?.to_owned()))
            }
        }

        assigned! { $kind: $t = $uuid }
    )+};
}

utf8! {
    /// Model Number String characteristic ([GSS] Section 3.146).
    Characteristic ModelNumber = ModelNumberString;
    /// Serial Number String characteristic ([GSS] Section 3.193).
    Characteristic SerialNumber = SerialNumberString;
    /// Firmware Revision String characteristic ([GSS] Section 3.97).
    Characteristic FirmwareRevision = FirmwareRevisionString;
    /// Hardware Revision String characteristic ([GSS] Section 3.116).
    Characteristic HardwareRevision = HardwareRevisionString;
    /// Software Revision String characteristic ([GSS] Section 3.205).
    Characteristic SoftwareRevision = SoftwareRevisionString;
    /// Manufacturer Name String characteristic ([GSS] Section 3.140).
    Characteristic ManufacturerName = ManufacturerNameString;
    /// Characteristic User Description descriptor
    /// ([Vol 3] Part G, Section 3.3.3.2).
    Descriptor UserDescription = CharacteristicUserDescription;
}
