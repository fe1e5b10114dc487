//! Immutable port snapshot records.
//!
//! A [`PortRecord`] is produced once by a [`PortSource`](crate::source::PortSource)
//! during enumeration and never mutated afterwards. String fields the OS does
//! not supply stay empty rather than becoming options, so callers can print
//! them without unwrapping.

use serde::{Deserialize, Serialize};

/// Transport a serial port is attached through, as reported by the OS.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    Usb,
    Pci,
    Bluetooth,
    #[default]
    Unknown,
}

/// Snapshot of one discovered serial port's attributes.
///
/// Within a single enumeration snapshot `port_name` uniquely identifies a
/// record; if the OS ever reports duplicates, lookups take the first match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortRecord {
    /// Short logical name, e.g. `COM3` or `ttyUSB0`. Non-empty for valid records.
    pub port_name: String,

    /// Full device path used to open the port, e.g. `/dev/ttyUSB0` or `COM3`.
    pub system_location: String,

    /// Human-readable description, if the OS supplies one.
    pub description: String,

    /// Manufacturer string, if the OS supplies one.
    pub manufacturer: String,

    /// USB serial number, if reported.
    pub serial_number: String,

    /// USB product string, if reported.
    pub product: String,

    /// USB vendor identifier as hexadecimal text (`0x0403`); empty for
    /// non-USB ports or when the OS does not report one.
    pub vid: String,

    /// USB product identifier as hexadecimal text (`0x6001`); empty for
    /// non-USB ports or when the OS does not report one.
    pub pid: String,

    /// Transport the port is attached through.
    pub transport: Transport,
}

impl PortRecord {
    /// Create a record with just a name and system location. The remaining
    /// fields start empty, matching a port the OS reports no details for.
    pub fn new(port_name: impl Into<String>, system_location: impl Into<String>) -> Self {
        Self {
            port_name: port_name.into(),
            system_location: system_location.into(),
            ..Default::default()
        }
    }
}
