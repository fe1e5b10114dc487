//! The standard baud rate table.

/// The de-facto standard baud rates, ascending.
///
/// This is the platform-independent reference set. A specific port may only
/// support a subset of it; see
/// [`PortInfo::standard_rates`](crate::PortInfo::standard_rates).
pub const STANDARD_BAUD_RATES: &[u32] = &[
    1200,   // Historical
    2400,   // Ancient devices
    4800,   // Very slow legacy
    9600,   // Most common default
    19200,  // Legacy devices
    38400,  // Medium speed devices
    57600,  // High speed legacy
    115200, // Modern devices, microcontrollers
    230400, // Very high speed
    460800, // Ultra high speed
    921600, // Maximum typical speed
];

/// Whether `rate` is one of the well-known standard rates.
pub fn is_standard(rate: u32) -> bool {
    STANDARD_BAUD_RATES.contains(&rate)
}
