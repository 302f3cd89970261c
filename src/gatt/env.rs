//! Environmental and indoor positioning characteristics.

use super::{Celsius, HumidityPercentage, Pascal};

/// Floor Number characteristic ([GSS] Section 3.98).
#[derive(
    Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
#[serde(transparent)]
pub struct FloorNumber(pub i8);

/// Temperature characteristic ([GSS] Section 3.222).
#[derive(
    Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
#[serde(transparent)]
pub struct Temperature(pub Celsius);

/// Humidity characteristic ([GSS] Section 3.124).
#[derive(
    Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
#[serde(transparent)]
pub struct Humidity(pub HumidityPercentage);

/// Pressure characteristic ([GSS] Section 3.181).
#[derive(
    Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
#[serde(transparent)]
pub struct Pressure(pub Pascal);

newtype_codec! {
    FloorNumber(i8),
    Temperature(Celsius),
    Humidity(HumidityPercentage),
    Pressure(Pascal),
}

assigned! { Characteristic:
    FloorNumber = FloorNumber,
    Temperature = Temperature,
    Humidity = Humidity,
    Pressure = Pressure,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{Decode, Encode, Error};

    #[test]
    fn floor_number() {
        let v = FloorNumber(-2);
        assert_eq!(&*v.to_bytes(), &[0xFE]);
        assert_eq!(FloorNumber::from_bytes(&[0xFE]), Ok(v));
        assert_eq!(
            FloorNumber::from_bytes(&[0xFE, 0x00]),
            Err(Error::InvalidLength { want: 1, have: 2 })
        );
    }

    #[test]
    fn environmental() {
        let t = Temperature(Celsius::new(-1050));
        assert_eq!(&*t.to_bytes(), &[0xE6, 0xFB]);
        assert_eq!(Temperature::from_bytes(&[0xE6, 0xFB]), Ok(t));

        let h = Humidity(HumidityPercentage::new(4_550));
        assert_eq!(Humidity::from_bytes(&h.to_bytes()), Ok(h));

        let p = Pressure(Pascal::new(1_013_250));
        assert_eq!(&*p.to_bytes(), &[0x02, 0x76, 0x0F, 0x00]);
        assert_eq!(Pressure::FIXED_LEN, Some(4));
        assert_eq!(Pressure::from_bytes(&[0x02, 0x76, 0x0F, 0x00]), Ok(p));
    }
}
