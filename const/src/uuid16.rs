// Assigned 16-bit UUIDs ([Assigned Numbers] Section 3).

uuid16_enum! {
    /// GATT services.
    pub enum Service {
        CurrentTime = 0x1805,
        DeviceInformation = 0x180A,
        Battery = 0x180F,
        BodyComposition = 0x181B,
        FitnessMachine = 0x1826,
    }
}

uuid16_enum! {
    /// Units of measurement used by characteristic presentation formats.
    pub enum Unit {
        Unitless = 0x2700,
        Metre = 0x2701,
        Kilogram = 0x2702,
        Second = 0x2703,
        Ampere = 0x2704,
        MetresPerSecond = 0x2712,
        Hertz = 0x2722,
        Pascal = 0x2724,
        Joule = 0x2725,
        Watt = 0x2726,
        Volt = 0x2728,
        Ohm = 0x272A,
        DegreeCelsius = 0x272F,
        Lux = 0x2731,
        Degree = 0x2763,
        Inch = 0x27A2,
        KilometrePerHour = 0x27A6,
        RevolutionPerMinute = 0x27A8,
        Kilocalorie = 0x27AA,
        Percentage = 0x27AD,
        BeatsPerMinute = 0x27AF,
        Pound = 0x27B8,
        MetabolicEquivalent = 0x27B9,
        StepPerMinute = 0x27BA,
    }
}

uuid16_enum! {
    /// Characteristic descriptors.
    pub enum Descriptor {
        CharacteristicUserDescription = 0x2901,
        ClientCharacteristicConfiguration = 0x2902,
        CharacteristicPresentationFormat = 0x2904,
    }
}

uuid16_enum! {
    /// Characteristic types.
    pub enum Characteristic {
        DateTime = 0x2A08,
        DayOfWeek = 0x2A09,
        DayDateTime = 0x2A0A,
        DstOffset = 0x2A0D,
        TimeZone = 0x2A0E,
        LocalTimeInformation = 0x2A0F,
        BatteryLevel = 0x2A19,
        BatteryPowerState = 0x2A1A,
        BatteryLevelState = 0x2A1B,
        ModelNumberString = 0x2A24,
        SerialNumberString = 0x2A25,
        FirmwareRevisionString = 0x2A26,
        HardwareRevisionString = 0x2A27,
        SoftwareRevisionString = 0x2A28,
        ManufacturerNameString = 0x2A29,
        Pressure = 0x2A6D,
        Temperature = 0x2A6E,
        Humidity = 0x2A6F,
        BodyCompositionMeasurement = 0x2A9C,
        FloorNumber = 0x2AB2,
        CrossTrainerData = 0x2ACE,
    }
}
