//! Wi-Fi subsystem.
//!
//! 1. **Results** - the fixed-capacity list of access points the scanner
//!    screen browses, with an explicit truncation policy.
//! 2. **Scanner** - runs a blocking station-mode scan on the ESP32-S3 radio
//!    and converts what it finds into [`results::ScanEntry`] values
//!    (firmware only).

pub mod results;
#[cfg(feature = "embedded")]
pub mod scanner;

pub use results::{ScanEntry, ScanResults, SecurityKind};
