//! The platform collaborator seam.
//!
//! Defines the [`PortSource`] trait that allows both the real OS backend and
//! mock implementations to be used interchangeably by the facade.

use crate::record::PortRecord;

/// Result of an exclusive-open probe against a port's system location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The port opened exclusively (and was immediately closed again).
    Free,

    /// The open failed because another process holds the device.
    Busy,

    /// The open failed for an unrelated reason (permissions, device gone);
    /// busyness could not be determined.
    Undetermined,
}

/// Platform enumeration backend behind [`PortInfo`](crate::PortInfo).
///
/// Implementations supply fresh snapshots of the ports visible at call time.
/// All methods block on the caller's thread; enumeration and the probe make
/// platform calls with O(number of system devices) latency, and no timeout
/// or cancellation is provided. Cross-thread use is only as safe as the
/// underlying platform calls.
pub trait PortSource {
    /// A fresh snapshot of every port visible right now, in the order the
    /// platform reports them. Order is deterministic within one call but not
    /// guaranteed stable across calls. A backend that cannot enumerate at
    /// all returns an empty snapshot rather than failing.
    fn available_records(&self) -> Vec<PortRecord>;

    /// Attempt an exclusive open of `system_location`, closing it again
    /// immediately.
    fn probe_exclusive(&self, system_location: &str) -> ProbeOutcome;

    /// The subset of baud rates the platform reports as supported for
    /// `record`, or `None` when the platform cannot restrict the set.
    fn supported_rates(&self, record: &PortRecord) -> Option<Vec<u32>>;
}
