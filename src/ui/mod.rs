//! User interface subsystem - OLED display + physical buttons.
//!
//! The pure pieces (input debouncing, list navigation, screen drawing)
//! build on the host; the hardware glue is only compiled for the
//! firmware.
//!
//! ## Components
//!
//! - **Input**: 4 tactile switches with one shared debounce window
//!   (UP, DOWN, SELECT, BACK)
//! - **Navigation**: selection + scroll-window tracking for every list
//! - **Render**: draws the active screen through the [`render::Canvas`] trait
//! - **Display**: SSD1306 128×64 OLED via I²C (firmware only)

#[cfg(feature = "embedded")]
pub mod buttons;
#[cfg(feature = "embedded")]
pub mod display;
pub mod input_logic;
pub mod nav;
pub mod render;

/// Debounced button event, at most one per tick.
///
///   - UP/DOWN: move the highlight in lists
///   - SELECT: open the highlighted entry / start
///   - BACK: leave the current screen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Nothing pressed, or still inside the debounce window.
    None,
    Up,
    Down,
    Select,
    Back,
}
