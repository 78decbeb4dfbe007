//! Unified error type for the firmware.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.  The
//! navigation core never fails; only hardware bring-up and the radio do.

use defmt::Format;

/// Top-level error type used by the hardware glue.
#[derive(Debug, Clone, Copy, Format)]
pub enum Error {
    // I²C / Display
    /// The I²C peripheral rejected its configuration.
    I2cConfig,

    /// The SSD1306 did not acknowledge its init sequence.
    DisplayInit,

    /// Pushing the frame buffer over I²C failed.
    DisplayFlush,

    // Wi-Fi
    /// The radio stack could not be brought up.
    RadioInit,

    /// Station mode could not be configured.
    WifiConfig,

    /// The Wi-Fi driver failed to start.
    WifiStart,

    /// The driver aborted a scan.
    Scan,
}
