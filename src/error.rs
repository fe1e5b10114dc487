//! Source-level error types.
//!
//! The [`PortInfo`](crate::PortInfo) facade never surfaces these: a failed
//! enumeration degrades to an empty snapshot, a failed lookup to the null
//! handle, and accessors on a null handle to the empty string. The type
//! exists for callers that query a backend's fallible API directly, e.g.
//! [`SystemSource::enumerate`](crate::source::SystemSource::enumerate).

use thiserror::Error;

/// Errors from the platform enumeration backend.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The platform enumeration call itself failed, e.g. insufficient
    /// privilege to walk the device registry at all.
    #[error("Port enumeration failed: {0}")]
    Enumerate(#[from] serialport::Error),
}
