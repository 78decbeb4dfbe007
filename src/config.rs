//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and layout
//! constants live here so they can be tuned in one place.

use crate::ui::input_logic::MultiPressPolicy;

// Identity

/// Name shown on the start screen.
pub const FIRMWARE_NAME: &str = "WiFi Scraper";

/// First line of the boot banner.
pub const BOOT_TITLE: &str = "Wifi Scraper";

/// Version string shown on the boot banner.
pub const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

// GPIO pin assignments (ESP32-S3 handheld board)
//
// These are logical names; actual `esp_hal::peripherals::GPIOn` types are
// selected in `main.rs`.  Adjust for your own board.
//
//   Button UP      → GPIO3
//   Button DOWN    → GPIO8
//   Button SELECT  → GPIO46
//   Button BACK    → GPIO9
//   I²C SDA        → GPIO48
//   I²C SCL        → GPIO47

pub const PIN_BUTTON_UP: u8 = 3;
pub const PIN_BUTTON_DOWN: u8 = 8;
pub const PIN_BUTTON_SELECT: u8 = 46;
pub const PIN_BUTTON_BACK: u8 = 9;
pub const PIN_I2C_SDA: u8 = 48;
pub const PIN_I2C_SCL: u8 = 47;

/// I²C bus frequency for the OLED (kHz).
pub const I2C_FREQUENCY_KHZ: u32 = 400;

// Input

/// Global quiet period after any accepted button event (ms).
///
/// Holding a button therefore repeats the event at this rate.
pub const BUTTON_DEBOUNCE_MS: u64 = 150;

/// What to report when several buttons are held during one poll.
pub const MULTI_PRESS_POLICY: MultiPressPolicy = MultiPressPolicy::Priority;

// Display layout (128×64 OLED, 6×12 font)

pub const DISPLAY_WIDTH: i32 = 128;
pub const DISPLAY_HEIGHT: i32 = 64;

/// Horizontal advance of one glyph (px).
pub const CHAR_WIDTH: i32 = 6;

/// Glyphs that fit on one row.
pub const CHARS_PER_LINE: usize = (DISPLAY_WIDTH / CHAR_WIDTH) as usize;

/// Vertical distance between list rows (px).
pub const LINE_SPACING: i32 = 13;

/// Rows of the main menu visible at once.
pub const MENU_VISIBLE_LINES: usize = 5;

/// Rows of the network list visible at once (one row is used by the header).
pub const NETWORK_VISIBLE_LINES: usize = 4;

// Wi-Fi scanning

/// Maximum number of networks kept from one scan; the rest are dropped.
pub const MAX_SCAN_RESULTS: usize = 50;

/// Discard cached scan results when leaving the scanner for the menu.
pub const RESCAN_ON_ENTRY: bool = true;

// Timing

/// How long the boot banner stays up before the first tick (ms).
pub const SPLASH_HOLD_MS: u64 = 1500;

/// Delay between main loop ticks (ms).
pub const TICK_MS: u64 = 10;

/// Heap reserved for the radio stack (bytes).
pub const HEAP_SIZE: usize = 72 * 1024;
