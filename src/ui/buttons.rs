//! GPIO button input.
//!
//! Four physical buttons (active-low with internal pull-up):
//!   - UP     - move the highlight up
//!   - DOWN   - move the highlight down
//!   - SELECT - start / open the highlighted entry
//!   - BACK   - leave the current screen
//!
//! The main loop polls once per tick; debouncing and the multi-press
//! rule live in [`crate::ui::input_logic`].

use defmt::debug;
use embassy_time::Instant;
use esp_hal::gpio::{Input, InputConfig, InputPin, Pull};

use crate::config::{BUTTON_DEBOUNCE_MS, MULTI_PRESS_POLICY};
use crate::ui::input_logic::{Button, ButtonPins, Debouncer};
use crate::ui::ButtonEvent;

/// The four button inputs, read as pressed when low.
pub struct ButtonPinSet<'d> {
    up: Input<'d>,
    down: Input<'d>,
    select: Input<'d>,
    back: Input<'d>,
}

impl<'d> ButtonPinSet<'d> {
    pub fn new(
        up: impl InputPin + 'd,
        down: impl InputPin + 'd,
        select: impl InputPin + 'd,
        back: impl InputPin + 'd,
    ) -> Self {
        let pull_up = || InputConfig::default().with_pull(Pull::Up);
        Self {
            up: Input::new(up, pull_up()),
            down: Input::new(down, pull_up()),
            select: Input::new(select, pull_up()),
            back: Input::new(back, pull_up()),
        }
    }
}

impl ButtonPins for ButtonPinSet<'_> {
    fn is_pressed(&mut self, button: Button) -> bool {
        match button {
            Button::Up => self.up.is_low(),
            Button::Down => self.down.is_low(),
            Button::Select => self.select.is_low(),
            Button::Back => self.back.is_low(),
        }
    }
}

/// Debounced input source for the main loop.
pub struct Buttons<'d> {
    pins: ButtonPinSet<'d>,
    debouncer: Debouncer,
}

impl<'d> Buttons<'d> {
    pub fn new(pins: ButtonPinSet<'d>) -> Self {
        Self {
            pins,
            debouncer: Debouncer::new(BUTTON_DEBOUNCE_MS, MULTI_PRESS_POLICY),
        }
    }

    /// Sample all buttons; at most one event per call.
    pub fn poll(&mut self) -> ButtonEvent {
        let event = self.debouncer.poll(&mut self.pins, Instant::now().as_millis());
        if event != ButtonEvent::None {
            debug!("Button: {}", event);
        }
        event
    }
}
