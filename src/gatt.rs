//! GATT characteristic and descriptor values ([Vol 3] Part G).
//!
//! Fixed-layout values require an exact buffer length. Flag-driven records
//! (body composition, cross trainer) start with a bitmask that is derived from
//! which optional fields are present, so the mask is never stored.

use gattkit_const::{Characteristic, Descriptor, Unit};

use crate::codec::{Decode, Encode};

pub use {battery::*, body::*, consts::*, cross_trainer::*, env::*, string::*, time::*, unit::*};

/// Value of a characteristic with an assigned 16-bit UUID.
pub trait CharacteristicValue: Encode + Decode {
    const UUID: Characteristic;
}

/// Value of a descriptor with an assigned 16-bit UUID.
pub trait DescriptorValue: Encode + Decode {
    const UUID: Descriptor;
}

/// Value whose raw integer is expressed in a fixed unit.
pub trait UnitValue {
    const UNIT: Unit;
}

/// Implements [`CharacteristicValue`] or [`DescriptorValue`].
macro_rules! assigned {
    (Characteristic: $($t:ident = $u:ident),+ $(,)?) => {$(
        impl $crate::gatt::CharacteristicValue for $t {
            const UUID: ::gattkit_const::Characteristic = ::gattkit_const::Characteristic::$u;
        }
    )+};
    (Descriptor: $($t:ident = $u:ident),+ $(,)?) => {$(
        impl $crate::gatt::DescriptorValue for $t {
            const UUID: ::gattkit_const::Descriptor = ::gattkit_const::Descriptor::$u;
        }
    )+};
}

/// Implements [`Encode`] and [`Decode`] for a tuple struct wrapping one
/// encodable value.
macro_rules! newtype_codec {
    ($($t:ident($inner:ty)),+ $(,)?) => {$(
        impl $crate::codec::Encode for $t {
            #[inline(always)]
            fn encoded_len(&self) -> usize {
                $crate::codec::Encode::encoded_len(&self.0)
            }

            #[inline(always)]
            fn encode(&self, p: &mut ::structbuf::Packer) {
                $crate::codec::Encode::encode(&self.0, p);
            }
        }

        impl $crate::codec::Decode for $t {
            const FIXED_LEN: Option<usize> = <$inner as $crate::codec::Decode>::FIXED_LEN;

            #[inline]
            fn decode(p: &mut ::structbuf::Unpacker) -> $crate::codec::Result<Self> {
                <$inner as $crate::codec::Decode>::decode(p).map(Self)
            }
        }
    )+};
}

/// Generates the flags type of a flag-driven record and the methods that map
/// between flag bits and optional fields. The `bit => field` table is the
/// only definition of that mapping and must list fields in wire order.
/// `extra` entries are flags that do not gate a field.
macro_rules! flag_fields {
    (
        $(#[$meta:meta])*
        $vis:vis struct $flags:ident: $repr:ident for $rec:ident {
            extra { $($(#[$($xdoc:tt)*])* const $extra:ident = $xbit:literal;)* }
            fields { $($(#[$($fdoc:tt)*])* $bit:literal => $field:ident,)+ }
        }
    ) => {
        ::paste::paste! {
            ::bitflags::bitflags! {
                $(#[$meta])*
                #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
                $vis struct $flags: $repr {
                    $($(#[$($xdoc)*])* const $extra = 1 << $xbit;)*
                    $($(#[$($fdoc)*])* const [<$field:upper>] = 1 << $bit;)+
                }
            }

            impl $rec {
                /// Returns the flags of the optional fields that are present.
                fn field_flags(&self) -> $flags {
                    let mut f = $flags::empty();
                    $(f.set($flags::[<$field:upper>], self.$field.is_some());)+
                    f
                }

                /// Returns the encoded length of the present optional fields.
                fn fields_len(&self) -> usize {
                    0 $(+ self.$field.as_ref().map_or(0, $crate::codec::Encode::encoded_len))+
                }

                /// Writes the present optional fields.
                fn encode_fields(&self, p: &mut ::structbuf::Packer) {
                    $(if let Some(ref v) = self.$field {
                        $crate::codec::Encode::encode(v, p);
                    })+
                }

                /// Reads the optional fields whose flags are set in `f`.
                fn decode_fields(
                    &mut self,
                    f: $flags,
                    p: &mut ::structbuf::Unpacker,
                ) -> $crate::codec::Result<()> {
                    $(self.$field = $crate::codec::decode_opt(f.contains($flags::[<$field:upper>]), p)?;)+
                    Ok(())
                }
            }
        }
    };
}

mod battery;
mod body;
mod consts;
mod cross_trainer;
mod env;
mod string;
mod time;
mod unit;

#[cfg(test)]
mod tests;
