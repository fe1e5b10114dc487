//! OS-backed port source.
//!
//! Wraps the `serialport` crate's device listing and open primitives behind
//! the [`PortSource`] trait.

use super::traits::{PortSource, ProbeOutcome};
use crate::error::SourceError;
use crate::record::{PortRecord, Transport};
use serialport::SerialPortType;
use std::time::Duration;
use tracing::{debug, warn};

/// Baud rate used for the exclusive-open probe. The rate is irrelevant to
/// the probe; any value the driver accepts will do.
const PROBE_BAUD: u32 = 9600;

/// Read timeout configured on the probe handle. The handle is closed before
/// any read happens, so this never actually elapses.
const PROBE_TIMEOUT: Duration = Duration::from_millis(100);

/// Port source backed by the operating system's device listing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSource;

impl SystemSource {
    pub fn new() -> Self {
        Self
    }

    /// Enumerate the host's ports, surfacing the platform error.
    ///
    /// [`available_records`](PortSource::available_records) wraps this and
    /// degrades a failure to an empty snapshot; call this directly when the
    /// distinction between "no ports" and "could not enumerate" matters.
    pub fn enumerate(&self) -> Result<Vec<PortRecord>, SourceError> {
        let ports = serialport::available_ports()?;
        Ok(ports.into_iter().map(record_from_platform).collect())
    }
}

impl PortSource for SystemSource {
    fn available_records(&self) -> Vec<PortRecord> {
        match self.enumerate() {
            Ok(records) => records,
            Err(e) => {
                warn!("port enumeration failed, treating as no ports: {e}");
                Vec::new()
            }
        }
    }

    fn probe_exclusive(&self, system_location: &str) -> ProbeOutcome {
        match serialport::new(system_location, PROBE_BAUD)
            .timeout(PROBE_TIMEOUT)
            .open()
        {
            Ok(port) => {
                drop(port);
                ProbeOutcome::Free
            }
            Err(e) => classify_open_failure(system_location, &e),
        }
    }

    fn supported_rates(&self, _record: &PortRecord) -> Option<Vec<u32>> {
        // The serialport crate has no per-port capability query, so the
        // platform cannot restrict the standard set.
        None
    }
}

/// Map one platform listing entry into a [`PortRecord`].
///
/// The `serialport` crate reports the system location as the port name
/// (`/dev/ttyUSB0` on Unix, `COM3` on Windows); the logical name is its
/// trailing path component.
fn record_from_platform(port: serialport::SerialPortInfo) -> PortRecord {
    let mut record = PortRecord::new(logical_name(&port.port_name), port.port_name.clone());

    match port.port_type {
        SerialPortType::UsbPort(usb) => {
            record.transport = Transport::Usb;
            record.vid = format!("0x{:04x}", usb.vid);
            record.pid = format!("0x{:04x}", usb.pid);
            if let Some(manufacturer) = usb.manufacturer {
                record.manufacturer = manufacturer;
            }
            if let Some(serial_number) = usb.serial_number {
                record.serial_number = serial_number;
            }
            if let Some(product) = usb.product {
                record.description = product.clone();
                record.product = product;
            }
        }
        SerialPortType::PciPort => record.transport = Transport::Pci,
        SerialPortType::BluetoothPort => record.transport = Transport::Bluetooth,
        SerialPortType::Unknown => record.transport = Transport::Unknown,
    }

    record
}

fn logical_name(system_location: &str) -> &str {
    system_location
        .rsplit('/')
        .next()
        .unwrap_or(system_location)
}

/// Classify a failed exclusive open. Only busy-semantics failures map to
/// [`ProbeOutcome::Busy`]; everything else is [`ProbeOutcome::Undetermined`].
fn classify_open_failure(system_location: &str, err: &serialport::Error) -> ProbeOutcome {
    let outcome = match err.kind() {
        serialport::ErrorKind::NoDevice => ProbeOutcome::Undetermined,
        // Windows surfaces exclusive-open contention as access denied
        // (sharing violation); Unix reports EBUSY, whose message is matched
        // below because its io::ErrorKind is not portable across toolchains.
        serialport::ErrorKind::Io(std::io::ErrorKind::PermissionDenied) if cfg!(windows) => {
            ProbeOutcome::Busy
        }
        _ if err.to_string().to_ascii_lowercase().contains("busy") => ProbeOutcome::Busy,
        _ => ProbeOutcome::Undetermined,
    };
    debug!("probe of {system_location} failed ({err}), classified {outcome:?}");
    outcome
}
