//! Decodes a hex-encoded ATT PDU or characteristic value and prints it.
//!
//! ```text
//! cargo run --example decode -- BatteryLevel 49
//! cargo run --example decode -- ReadByTypeRsp 0903030000ab0500cd
//! ```

#![allow(unused_crate_dependencies)]
#![allow(clippy::print_stdout)]

use anyhow::{bail, Result};
use clap::Parser;
use tracing::debug;

use gattkit::att::*;
use gattkit::gatt::*;
use gattkit::Decode;

#[derive(Clone, Debug, clap::Parser)]
struct Args {
    /// Type name, such as `CrossTrainerData` or `ExchangeMtuReq`.
    typ: String,

    /// Encoded value as a hex string.
    value: String,
}

/// Decodes `$v` as the type named by `$name`.
macro_rules! decode {
    ($name:expr, $v:expr, [$($t:ident),+ $(,)?]) => {
        match $name {
            $(stringify!($t) => println!("{:#?}", $t::from_bytes($v)?),)+
            other => bail!("unknown type: {other}"),
        }
    };
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();
    let v = hex::decode(args.value.trim_start_matches("0x"))?;
    debug!("Decoding {} byte(s) as {}", v.len(), args.typ);
    decode!(args.typ.as_str(), &v, [
        ErrorRsp,
        ExchangeMtuReq,
        ExchangeMtuRsp,
        ReadByTypeReq,
        ReadByTypeRsp,
        ReadByGroupTypeRsp,
        HandleValueNtf,
        BatteryLevel,
        BatteryPowerState,
        BatteryLevelState,
        BodyCompositionMeasurement,
        CrossTrainerData,
        DateTime,
        DayDateTime,
        TimeZone,
        LocalTimeInformation,
        FloorNumber,
        Temperature,
        Humidity,
        Pressure,
        ModelNumber,
        ManufacturerName,
        UserDescription,
        Cccd,
        PresentationFormat,
    ]);
    Ok(())
}
