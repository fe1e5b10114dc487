//! Platform enumeration backends.
//!
//! [`PortSource`] is the seam between the [`PortInfo`](crate::PortInfo)
//! facade and the platform: [`SystemSource`] queries the operating system,
//! [`MockSource`] serves configured fixtures for tests.

pub mod mock;
pub mod system;
pub mod traits;

pub use mock::MockSource;
pub use system::SystemSource;
pub use traits::{PortSource, ProbeOutcome};
