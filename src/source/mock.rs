//! Mock port source for testing.
//!
//! Provides a [`MockSource`] that simulates platform enumeration without
//! requiring actual hardware. Records can be added and unplugged between
//! calls, locations marked busy, and per-port rate restrictions configured.

use super::traits::{PortSource, ProbeOutcome};
use crate::record::PortRecord;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// Inner state of the mock source, protected by a mutex for interior
/// mutability.
#[derive(Debug, Default)]
struct MockSourceState {
    /// Records returned by enumeration, in insertion order.
    records: Vec<PortRecord>,
    /// System locations whose probe reports busy.
    busy_locations: HashSet<String>,
    /// System locations whose probe fails without busy semantics.
    undetermined_locations: HashSet<String>,
    /// Per-port-name restricted rate sets.
    restricted_rates: HashMap<String, Vec<u32>>,
    /// When set, enumeration behaves like a failed platform call and
    /// returns an empty snapshot.
    enumeration_fails: bool,
    /// Number of enumeration calls served, for re-validation tests.
    enumeration_calls: usize,
}

/// Mock enumeration backend for tests.
///
/// Clones share state, so a test can hold one handle for configuration while
/// the code under test holds another.
///
/// # Example
/// ```
/// use serial_port_info::{MockSource, PortInfo, PortRecord};
///
/// let source = MockSource::new();
/// source.add_record(PortRecord::new("ttyUSB0", "/dev/ttyUSB0"));
///
/// let info = PortInfo::from_name(&source, "ttyUSB0");
/// assert_eq!(info.system_location(), "/dev/ttyUSB0");
///
/// source.unplug("ttyUSB0");
/// assert!(!info.is_valid(&source));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockSource {
    state: Arc<Mutex<MockSourceState>>,
}

impl MockSource {
    /// Create an empty mock source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock source pre-seeded with `records`.
    pub fn with_records(records: Vec<PortRecord>) -> Self {
        let source = Self::new();
        {
            let mut state = source.state.lock().unwrap();
            state.records = records;
        }
        source
    }

    /// Append a record to the enumeration snapshot.
    pub fn add_record(&self, record: PortRecord) {
        let mut state = self.state.lock().unwrap();
        state.records.push(record);
    }

    /// Remove the record named `port_name`, simulating the device being
    /// physically unplugged between two enumerations.
    pub fn unplug(&self, port_name: &str) {
        let mut state = self.state.lock().unwrap();
        state.records.retain(|r| r.port_name != port_name);
    }

    /// Mark `system_location` as held by another process.
    pub fn set_busy(&self, system_location: &str, busy: bool) {
        let mut state = self.state.lock().unwrap();
        if busy {
            state.busy_locations.insert(system_location.to_string());
        } else {
            state.busy_locations.remove(system_location);
        }
    }

    /// Make probes of `system_location` fail without busy semantics, like a
    /// permission error would.
    pub fn set_probe_undetermined(&self, system_location: &str) {
        let mut state = self.state.lock().unwrap();
        state
            .undetermined_locations
            .insert(system_location.to_string());
    }

    /// Restrict the rates reported as supported for `port_name`.
    pub fn restrict_rates(&self, port_name: &str, rates: Vec<u32>) {
        let mut state = self.state.lock().unwrap();
        state.restricted_rates.insert(port_name.to_string(), rates);
    }

    /// Simulate the platform enumeration call failing. Per the documented
    /// policy the snapshot degrades to empty rather than erroring.
    pub fn fail_enumeration(&self, fail: bool) {
        let mut state = self.state.lock().unwrap();
        state.enumeration_fails = fail;
    }

    /// Number of enumeration calls served so far.
    pub fn enumeration_calls(&self) -> usize {
        let state = self.state.lock().unwrap();
        state.enumeration_calls
    }
}

impl PortSource for MockSource {
    fn available_records(&self) -> Vec<PortRecord> {
        let mut state = self.state.lock().unwrap();
        state.enumeration_calls += 1;
        if state.enumeration_fails {
            return Vec::new();
        }
        state.records.clone()
    }

    fn probe_exclusive(&self, system_location: &str) -> ProbeOutcome {
        let state = self.state.lock().unwrap();
        if state.busy_locations.contains(system_location) {
            ProbeOutcome::Busy
        } else if state.undetermined_locations.contains(system_location) {
            ProbeOutcome::Undetermined
        } else {
            ProbeOutcome::Free
        }
    }

    fn supported_rates(&self, record: &PortRecord) -> Option<Vec<u32>> {
        let state = self.state.lock().unwrap();
        state.restricted_rates.get(&record.port_name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_returned_in_insertion_order() {
        let source = MockSource::new();
        source.add_record(PortRecord::new("COM1", "COM1"));
        source.add_record(PortRecord::new("COM3", "COM3"));

        let records = source.available_records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].port_name, "COM1");
        assert_eq!(records[1].port_name, "COM3");
    }

    #[test]
    fn test_unplug_removes_record() {
        let source = MockSource::with_records(vec![
            PortRecord::new("ttyUSB0", "/dev/ttyUSB0"),
            PortRecord::new("ttyUSB1", "/dev/ttyUSB1"),
        ]);

        source.unplug("ttyUSB0");
        let records = source.available_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].port_name, "ttyUSB1");
    }

    #[test]
    fn test_probe_states() {
        let source = MockSource::new();
        assert_eq!(source.probe_exclusive("/dev/ttyUSB0"), ProbeOutcome::Free);

        source.set_busy("/dev/ttyUSB0", true);
        assert_eq!(source.probe_exclusive("/dev/ttyUSB0"), ProbeOutcome::Busy);

        source.set_busy("/dev/ttyUSB0", false);
        source.set_probe_undetermined("/dev/ttyUSB0");
        assert_eq!(
            source.probe_exclusive("/dev/ttyUSB0"),
            ProbeOutcome::Undetermined
        );
    }

    #[test]
    fn test_failed_enumeration_is_empty_snapshot() {
        let source = MockSource::with_records(vec![PortRecord::new("COM1", "COM1")]);
        source.fail_enumeration(true);
        assert!(source.available_records().is_empty());

        source.fail_enumeration(false);
        assert_eq!(source.available_records().len(), 1);
    }

    #[test]
    fn test_restricted_rates() {
        let source = MockSource::with_records(vec![PortRecord::new("COM1", "COM1")]);
        let record = source.available_records().remove(0);
        assert_eq!(source.supported_rates(&record), None);

        source.restrict_rates("COM1", vec![9600, 115200]);
        assert_eq!(source.supported_rates(&record), Some(vec![9600, 115200]));
    }

    #[test]
    fn test_enumeration_call_count() {
        let source = MockSource::new();
        assert_eq!(source.enumeration_calls(), 0);
        source.available_records();
        source.available_records();
        assert_eq!(source.enumeration_calls(), 2);
    }
}
