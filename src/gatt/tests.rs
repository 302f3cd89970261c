use matches::assert_matches;

use crate::codec::{Decode, Encode, Error, U24};

use super::*;

fn full_body() -> BodyCompositionMeasurement {
    BodyCompositionMeasurement {
        units: MeasurementSystem::Si,
        multiple_packet: false,
        body_fat_percentage: BodyPercentage::new(215),
        timestamp: Some(DateTime::new(2023, 4, 15, 7, 30, 0).unwrap()),
        user_id: Some(3),
        basal_metabolism: Some(BodyEnergy::new(7_000)),
        muscle_percentage: Some(BodyPercentage::new(401)),
        muscle_mass: Some(BodyMass(6_000)),
        fat_free_mass: Some(BodyMass(11_000)),
        soft_lean_mass: Some(BodyMass(10_000)),
        body_water_mass: Some(BodyMass(8_000)),
        impedance: Some(BodyResistance::new(5_000)),
        weight: Some(BodyMass(15_000)),
        height: Some(BodyLength(1_800)),
    }
}

fn full_cross_trainer() -> CrossTrainerData {
    CrossTrainerData {
        direction: MovementDirection::Forward,
        instantaneous_speed: Some(KilometrePerHour::new(1_250)),
        average_speed: Some(KilometrePerHour::new(1_100)),
        total_distance: Some(Metre24::new(U24::new(0x01_0000).unwrap())),
        step_rate: Some(StepRate {
            instantaneous: StepPerMinute::new(140),
            average: StepPerMinute::new(130),
        }),
        stride_count: Some(UnitlessU16::new(5_000)),
        elevation_gain: Some(ElevationGain {
            positive: Metre16::new(12),
            negative: Metre16::new(3),
        }),
        incline: Some(Incline {
            inclination: InclinePercentage::new(-25),
            ramp_angle: Degree::new(-14),
        }),
        resistance_level: Some(UnitlessI16::new(80)),
        instantaneous_power: Some(Watt::new(210)),
        average_power: Some(Watt::new(190)),
        expended_energy: Some(ExpendedEnergy {
            total: Kilocalorie16::new(320),
            per_hour: Kilocalorie16::new(600),
            per_minute: Kilocalorie8::new(10),
        }),
        heart_rate: Some(BeatsPerMinute::new(150)),
        metabolic_equivalent: Some(MetabolicEquivalent::new(85)),
        elapsed_time: Some(Seconds::new(1_800)),
        remaining_time: Some(Seconds::new(600)),
    }
}

/// Returns a copy of `v` with only the optional fields selected by `mask`
/// present, using the flag bit order as the field index.
fn body_subset(v: &BodyCompositionMeasurement, mask: u16) -> BodyCompositionMeasurement {
    let keep = |bit: u16| mask & (1 << bit) != 0;
    BodyCompositionMeasurement {
        timestamp: v.timestamp.filter(|_| keep(1)),
        user_id: v.user_id.filter(|_| keep(2)),
        basal_metabolism: v.basal_metabolism.filter(|_| keep(3)),
        muscle_percentage: v.muscle_percentage.filter(|_| keep(4)),
        muscle_mass: v.muscle_mass.filter(|_| keep(5)),
        fat_free_mass: v.fat_free_mass.filter(|_| keep(6)),
        soft_lean_mass: v.soft_lean_mass.filter(|_| keep(7)),
        body_water_mass: v.body_water_mass.filter(|_| keep(8)),
        impedance: v.impedance.filter(|_| keep(9)),
        weight: v.weight.filter(|_| keep(10)),
        height: v.height.filter(|_| keep(11)),
        ..*v
    }
}

#[test]
fn body_fat_and_weight() {
    let mut v = BodyCompositionMeasurement {
        weight: Some(BodyMass(14_000)),
        ..BodyCompositionMeasurement::new(BodyPercentage::new(250))
    };
    assert_eq!(v.flags(), BodyCompositionFlags::WEIGHT);
    assert_eq!(&*v.to_bytes(), &[0x00, 0x04, 0xFA, 0x00, 0xB0, 0x36]);
    assert_eq!(BodyCompositionMeasurement::from_bytes(&v.to_bytes()), Ok(v));
    assert!((v.weight.unwrap().value(v.units) - 70.0).abs() < 1e-9);

    v.units = MeasurementSystem::Imperial;
    assert_eq!(
        v.flags(),
        BodyCompositionFlags::WEIGHT | BodyCompositionFlags::IMPERIAL
    );
    assert_eq!(&*v.to_bytes(), &[0x01, 0x04, 0xFA, 0x00, 0xB0, 0x36]);
    assert_eq!(BodyCompositionMeasurement::from_bytes(&v.to_bytes()), Ok(v));
    assert_eq!(v.units.mass_unit(), Unit::Pound);
}

#[test]
fn body_flags_match_fields() {
    let full = full_body();
    for mask in 0..(1_u16 << 12) {
        let v = body_subset(&full, mask & !1);
        let f = v.flags();
        assert_eq!(f.bits(), mask & !1, "mask {mask:#06X}");
        let b = v.to_bytes();
        assert_eq!(u16::from_le_bytes([b[0], b[1]]), f.bits());
        assert_eq!(b.len(), v.encoded_len());
        assert_eq!(BodyCompositionMeasurement::from_bytes(&b), Ok(v));
    }
}

#[test]
fn body_full() {
    let v = full_body();
    let b = v.to_bytes();
    assert_eq!(b.len(), 4 + 7 + 1 + 2 * 9);
    assert_eq!(&b[..2], &[0xFE, 0x0F]);
    assert_eq!(&b[4..11], &[0xE7, 0x07, 4, 15, 7, 30, 0]);
    assert_eq!(b[11], 3);
    assert_eq!(&b[b.len() - 2..], &[0x08, 0x07]);
    assert_eq!(BodyCompositionMeasurement::from_bytes(&b), Ok(v));
    assert_eq!(
        v.to_string(),
        "body fat 215 (Percentage), weight 75.000 Kilogram, height 1.800 Metre"
    );
}

#[test]
fn body_multiple_packet() {
    let v = BodyCompositionMeasurement {
        multiple_packet: true,
        ..BodyCompositionMeasurement::new(BodyPercentage::new(1))
    };
    assert_eq!(&*v.to_bytes(), &[0x00, 0x10, 0x01, 0x00]);
    assert_eq!(BodyCompositionMeasurement::from_bytes(&[0x00, 0x10, 0x01, 0x00]), Ok(v));
}

#[test]
fn body_malformed() {
    assert_eq!(
        BodyCompositionMeasurement::from_bytes(&[0x00, 0x00, 0x01]),
        Err(Error::Truncated { need: 4, have: 3 })
    );
    // Weight flag set with one byte of weight
    assert_matches!(
        BodyCompositionMeasurement::from_bytes(&[0x00, 0x04, 0xFA, 0x00, 0xB0]),
        Err(Error::Truncated { .. })
    );
    // Timestamp flag set with no timestamp
    assert_matches!(
        BodyCompositionMeasurement::from_bytes(&[0x02, 0x00, 0xFA, 0x00]),
        Err(Error::Truncated { .. })
    );
    assert_eq!(
        BodyCompositionMeasurement::from_bytes(&[0x00, 0x00, 0xFA, 0x00, 0xFF]),
        Err(Error::TrailingBytes(1))
    );
}

#[test]
fn cross_trainer_flags_match_fields() {
    let full = full_cross_trainer();
    let f = full.flags();
    assert_eq!(f.bits(), 0x7FFF);
    let b = full.to_bytes();
    assert_eq!(&b[..3], &[0xFF, 0x7F, 0x00]);
    assert_eq!(b.len(), 3 + 2 + 2 + 3 + 4 + 2 + 4 + 4 + 2 + 2 + 2 + 5 + 1 + 1 + 2 + 2);
    assert_eq!(CrossTrainerData::from_bytes(&b), Ok(full));

    let none = CrossTrainerData::default();
    assert!(none.flags().is_empty());
    assert_eq!(&*none.to_bytes(), &[0, 0, 0]);
    assert_eq!(CrossTrainerData::from_bytes(&[0, 0, 0]), Ok(none));

    let v = CrossTrainerData {
        instantaneous_speed: Some(KilometrePerHour::new(0x0102)),
        heart_rate: Some(BeatsPerMinute::new(90)),
        ..CrossTrainerData::default()
    };
    assert_eq!(
        v.flags(),
        CrossTrainerFlags::INSTANTANEOUS_SPEED | CrossTrainerFlags::HEART_RATE
    );
    assert_eq!(&*v.to_bytes(), &[0x01, 0x08, 0x00, 0x02, 0x01, 90]);
    assert_eq!(CrossTrainerData::from_bytes(&v.to_bytes()), Ok(v));
}

#[test]
fn cross_trainer_pairs() {
    let v = CrossTrainerData {
        elevation_gain: Some(ElevationGain {
            positive: Metre16::new(5),
            negative: Metre16::new(0),
        }),
        ..CrossTrainerData::default()
    };
    assert_eq!(&*v.to_bytes(), &[0x20, 0x00, 0x00, 5, 0, 0, 0]);
    // Elevation gain flag with only the positive half
    assert_matches!(
        CrossTrainerData::from_bytes(&[0x20, 0x00, 0x00, 5, 0]),
        Err(Error::Truncated { .. })
    );
    let v = CrossTrainerData::from_bytes(&[0x40, 0x00, 0x00, 0x0A, 0x00, 0xF6, 0xFF]).unwrap();
    assert_eq!(
        v.incline,
        Some(Incline {
            inclination: InclinePercentage::new(10),
            ramp_angle: Degree::new(-10),
        })
    );
    assert_eq!(ExpendedEnergy::FIXED_LEN, Some(5));
}

#[test]
fn cross_trainer_direction() {
    let v = CrossTrainerData {
        direction: MovementDirection::Backward,
        ..CrossTrainerData::default()
    };
    assert_eq!(v.flags(), CrossTrainerFlags::MOVEMENT_DIRECTION);
    assert_eq!(&*v.to_bytes(), &[0x00, 0x80, 0x00]);
    assert_eq!(CrossTrainerData::from_bytes(&[0x00, 0x80, 0x00]), Ok(v));
}

#[test]
fn cross_trainer_malformed() {
    assert_eq!(
        CrossTrainerData::from_bytes(&[0x00, 0x00]),
        Err(Error::Truncated { need: 3, have: 2 })
    );
    // Total distance flag with two of three bytes
    assert_matches!(
        CrossTrainerData::from_bytes(&[0x04, 0x00, 0x00, 0x01, 0x02]),
        Err(Error::Truncated { .. })
    );
}

#[test]
fn assigned_uuids() {
    assert_eq!(
        <BodyCompositionMeasurement as CharacteristicValue>::UUID,
        Characteristic::BodyCompositionMeasurement
    );
    assert_eq!(
        <CrossTrainerData as CharacteristicValue>::UUID.uuid16().raw(),
        0x2ACE
    );
    assert_eq!(<BatteryLevel as CharacteristicValue>::UUID, Characteristic::BatteryLevel);
    assert_eq!(<FloorNumber as CharacteristicValue>::UUID, Characteristic::FloorNumber);
    assert_eq!(
        <UserDescription as DescriptorValue>::UUID,
        Descriptor::CharacteristicUserDescription
    );
}
