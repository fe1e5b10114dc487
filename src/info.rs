//! The copyable port-information handle.

use crate::rates::STANDARD_BAUD_RATES;
use crate::record::{PortRecord, Transport};
use crate::source::{PortSource, ProbeOutcome};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// An already-open port that can report the name it was opened under.
///
/// This is the seam to the port-I/O layer: [`PortInfo::from_open_port`]
/// only needs the open handle's name, not its I/O surface. Implementations
/// are provided for the `serialport` crate's open handles.
pub trait OpenPort {
    /// The port name this handle was opened with, if known.
    fn open_name(&self) -> Option<String>;
}

impl OpenPort for dyn serialport::SerialPort {
    fn open_name(&self) -> Option<String> {
        self.name()
    }
}

impl OpenPort for Box<dyn serialport::SerialPort> {
    fn open_name(&self) -> Option<String> {
        self.as_ref().name()
    }
}

/// Copyable handle over zero-or-one [`PortRecord`].
///
/// A handle is either *null* (default-constructed, or a lookup that found
/// nothing) or *bound* to exactly one record, which it owns outright.
/// Cloning deep-copies the record, so no two handles ever share state.
/// Accessors on a null handle return the empty string rather than failing.
///
/// Operations that consult the platform take a [`PortSource`]; pass
/// [`SystemSource`](crate::source::SystemSource) for the real OS backend.
///
/// # Example
/// ```
/// use serial_port_info::{MockSource, PortInfo, PortRecord};
///
/// let source = MockSource::with_records(vec![
///     PortRecord::new("COM1", "COM1"),
///     PortRecord::new("COM3", "COM3"),
/// ]);
///
/// let info = PortInfo::from_name(&source, "COM3");
/// assert!(!info.is_null());
/// assert_eq!(info.port_name(), "COM3");
///
/// assert!(PortInfo::from_name(&source, "COM9").is_null());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortInfo {
    record: Option<PortRecord>,
}

impl PortInfo {
    /// A null handle, bound to no record.
    pub fn new() -> Self {
        Self::default()
    }

    /// A handle bound to `record`.
    pub fn from_record(record: PortRecord) -> Self {
        Self {
            record: Some(record),
        }
    }

    /// Resolve a port by name.
    ///
    /// Enumerates the source and scans in enumeration order for the first
    /// record whose `port_name` equals `name` (exact, case-sensitive). No
    /// match is not an error: the result is simply a null handle.
    pub fn from_name<S>(source: &S, name: &str) -> Self
    where
        S: PortSource + ?Sized,
    {
        let record = source
            .available_records()
            .into_iter()
            .find(|r| r.port_name == name);
        if record.is_none() {
            debug!("no port named {name:?} in the current snapshot");
        }
        Self { record }
    }

    /// Resolve the port an already-open handle was opened on.
    ///
    /// Reads the open port's name and performs the same scan as
    /// [`from_name`](Self::from_name). The name read and the enumeration are
    /// two separate calls, not one atomic snapshot; a port renamed or
    /// unplugged in between resolves to whatever the comparison yields.
    pub fn from_open_port<S, P>(source: &S, port: &P) -> Self
    where
        S: PortSource + ?Sized,
        P: OpenPort + ?Sized,
    {
        match port.open_name() {
            Some(name) => Self::from_name(source, &name),
            None => Self::new(),
        }
    }

    /// Every currently visible port wrapped one-to-one into handles,
    /// preserving enumeration order.
    pub fn available_ports<S>(source: &S) -> Vec<PortInfo>
    where
        S: PortSource + ?Sized,
    {
        source
            .available_records()
            .into_iter()
            .map(PortInfo::from_record)
            .collect()
    }

    /// Exchange the state of two handles in constant time. Cannot fail.
    pub fn swap(&mut self, other: &mut PortInfo) {
        std::mem::swap(&mut self.record, &mut other.record);
    }

    /// Whether this handle holds no record.
    pub fn is_null(&self) -> bool {
        self.record.is_none()
    }

    /// The bound record, if any.
    pub fn record(&self) -> Option<&PortRecord> {
        self.record.as_ref()
    }

    /// Short logical name of the port, e.g. `COM3` or `ttyUSB0`.
    pub fn port_name(&self) -> &str {
        self.record.as_ref().map_or("", |r| r.port_name.as_str())
    }

    /// Full device path used to open the port.
    pub fn system_location(&self) -> &str {
        self.record
            .as_ref()
            .map_or("", |r| r.system_location.as_str())
    }

    /// Human-readable description, if the OS supplied one.
    pub fn description(&self) -> &str {
        self.record.as_ref().map_or("", |r| r.description.as_str())
    }

    /// Manufacturer string, if the OS supplied one.
    pub fn manufacturer(&self) -> &str {
        self.record
            .as_ref()
            .map_or("", |r| r.manufacturer.as_str())
    }

    /// USB serial number, if reported.
    pub fn serial_number(&self) -> &str {
        self.record
            .as_ref()
            .map_or("", |r| r.serial_number.as_str())
    }

    /// USB product string, if reported.
    pub fn product(&self) -> &str {
        self.record.as_ref().map_or("", |r| r.product.as_str())
    }

    /// Vendor identifier as hexadecimal text; empty for non-USB ports.
    pub fn vid(&self) -> &str {
        self.record.as_ref().map_or("", |r| r.vid.as_str())
    }

    /// Product identifier as hexadecimal text; empty for non-USB ports.
    pub fn pid(&self) -> &str {
        self.record.as_ref().map_or("", |r| r.pid.as_str())
    }

    /// Transport the port is attached through, or `None` for a null handle.
    pub fn transport(&self) -> Option<Transport> {
        self.record.as_ref().map(|r| r.transport)
    }

    /// Whether a port with this handle's name is still present.
    ///
    /// Re-validates with a fresh enumeration on every call rather than
    /// caching, so the answer can change between two calls without the
    /// handle itself changing, and each call pays the full enumeration
    /// cost. A null handle is never valid.
    pub fn is_valid<S>(&self, source: &S) -> bool
    where
        S: PortSource + ?Sized,
    {
        let Some(record) = self.record.as_ref() else {
            return false;
        };
        source
            .available_records()
            .iter()
            .any(|r| r.port_name == record.port_name)
    }

    /// Whether another process currently holds the device.
    ///
    /// Probes with an exclusive open-then-close. Only a busy-semantics
    /// failure counts; open failures that leave busyness undetermined
    /// (permission denied, device vanished) report `false`, and callers
    /// cannot tell the two apart here. Ask the source's
    /// [`probe_exclusive`](PortSource::probe_exclusive) directly for the
    /// three-way outcome. A null handle is never busy.
    pub fn is_busy<S>(&self, source: &S) -> bool
    where
        S: PortSource + ?Sized,
    {
        let Some(record) = self.record.as_ref() else {
            return false;
        };
        matches!(
            source.probe_exclusive(&record.system_location),
            ProbeOutcome::Busy
        )
    }

    /// The standard baud rates this port supports.
    ///
    /// The well-known standard table intersected with the subset the
    /// platform reports as supported; the full table when the platform
    /// cannot restrict it. Empty for a null handle.
    pub fn standard_rates<S>(&self, source: &S) -> Vec<u32>
    where
        S: PortSource + ?Sized,
    {
        let Some(record) = self.record.as_ref() else {
            return Vec::new();
        };
        match source.supported_rates(record) {
            Some(supported) => STANDARD_BAUD_RATES
                .iter()
                .copied()
                .filter(|rate| supported.contains(rate))
                .collect(),
            None => STANDARD_BAUD_RATES.to_vec(),
        }
    }
}

impl From<PortRecord> for PortInfo {
    fn from(record: PortRecord) -> Self {
        Self::from_record(record)
    }
}
