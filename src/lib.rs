//! Serial port metadata as value objects.
//!
//! This library exposes information about the serial (COM/TTY) ports present
//! on the host: name, system location, description, manufacturer, and USB
//! vendor/product identifiers. The central type is [`PortInfo`], a copyable
//! handle over an immutable snapshot record, with a factory enumerating all
//! ports, a resolve-by-name lookup, a liveness re-check, an exclusive-open
//! busy probe, and a standard baud rate query.
//!
//! There is no port I/O here: opening, reading, and writing belong to a
//! port-communication layer. All operations are synchronous pass-throughs to
//! platform enumeration, behind the [`PortSource`] seam so tests can run
//! against fixtures instead of hardware.
//!
//! # Modules
//!
//! - `record`: the immutable [`PortRecord`] snapshot type
//! - `info`: the [`PortInfo`] handle
//! - `source`: the [`PortSource`] seam, the OS backend, and a mock
//! - `rates`: the standard baud rate table
//! - `error`: source-level errors
//!
//! # Example
//!
//! ```no_run
//! use serial_port_info::{PortInfo, SystemSource};
//!
//! let source = SystemSource::new();
//! for info in PortInfo::available_ports(&source) {
//!     println!(
//!         "{} at {} ({} {})",
//!         info.port_name(),
//!         info.system_location(),
//!         info.manufacturer(),
//!         info.description(),
//!     );
//! }
//! ```

pub mod error;
pub mod info;
pub mod rates;
pub mod record;
pub mod source;

// Re-export commonly used types for convenience
pub use error::SourceError;
pub use info::{OpenPort, PortInfo};
pub use rates::{is_standard, STANDARD_BAUD_RATES};
pub use record::{PortRecord, Transport};
pub use source::{MockSource, PortSource, ProbeOutcome, SystemSource};
