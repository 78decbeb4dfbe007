//! Button sampling and debouncing.
//!
//! The pin layer only answers "is this button held right now?"; turning
//! levels into discrete events is done here so it can be tested on the
//! host with scripted pins and timestamps.

use super::ButtonEvent;

/// Physical buttons on the device.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    Up,
    Down,
    Select,
    Back,
}

impl Button {
    /// Order in which held buttons win when several are down at once.
    pub const PRIORITY: [Button; 4] = [Button::Down, Button::Up, Button::Select, Button::Back];

    pub fn event(self) -> ButtonEvent {
        match self {
            Button::Up => ButtonEvent::Up,
            Button::Down => ButtonEvent::Down,
            Button::Select => ButtonEvent::Select,
            Button::Back => ButtonEvent::Back,
        }
    }
}

/// Raw pin access, implemented by the GPIO layer.
pub trait ButtonPins {
    /// `true` while `button` is held down.
    fn is_pressed(&mut self, button: Button) -> bool;
}

/// How to resolve several buttons held during the same poll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MultiPressPolicy {
    /// Report the first held button in [`Button::PRIORITY`] order.
    Priority,
    /// Report nothing while the press is ambiguous.
    Ignore,
}

/// Global debouncer: after any reported event all buttons are ignored
/// for `quiet_ms`.
#[derive(Clone, Debug)]
pub struct Debouncer {
    quiet_ms: u64,
    policy: MultiPressPolicy,
    last_event_ms: Option<u64>,
}

impl Debouncer {
    pub const fn new(quiet_ms: u64, policy: MultiPressPolicy) -> Self {
        Self {
            quiet_ms,
            policy,
            last_event_ms: None,
        }
    }

    /// Sample the pins once and return at most one event.
    ///
    /// `now_ms` must be monotonic; only the timestamp of the last
    /// accepted event is updated.
    pub fn poll<P: ButtonPins>(&mut self, pins: &mut P, now_ms: u64) -> ButtonEvent {
        if let Some(last) = self.last_event_ms {
            if now_ms.saturating_sub(last) < self.quiet_ms {
                return ButtonEvent::None;
            }
        }

        let event = resolve(pins, self.policy);
        if event != ButtonEvent::None {
            self.last_event_ms = Some(now_ms);
        }
        event
    }
}

/// Pick the single event to report for the current pin levels.
pub fn resolve<P: ButtonPins>(pins: &mut P, policy: MultiPressPolicy) -> ButtonEvent {
    match policy {
        MultiPressPolicy::Priority => Button::PRIORITY
            .iter()
            .copied()
            .find(|&b| pins.is_pressed(b))
            .map_or(ButtonEvent::None, Button::event),
        MultiPressPolicy::Ignore => {
            let mut held = None;
            for button in Button::PRIORITY {
                if pins.is_pressed(button) {
                    if held.is_some() {
                        return ButtonEvent::None;
                    }
                    held = Some(button);
                }
            }
            held.map_or(ButtonEvent::None, Button::event)
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests (run on host, not embedded)
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    /// Pins held according to a fixed set.
    struct Held(&'static [Button]);

    impl ButtonPins for Held {
        fn is_pressed(&mut self, button: Button) -> bool {
            self.0.contains(&button)
        }
    }

    #[test]
    fn single_press_maps_to_event() {
        assert_eq!(resolve(&mut Held(&[Button::Up]), MultiPressPolicy::Priority), ButtonEvent::Up);
        assert_eq!(resolve(&mut Held(&[Button::Back]), MultiPressPolicy::Ignore), ButtonEvent::Back);
        assert_eq!(resolve(&mut Held(&[]), MultiPressPolicy::Priority), ButtonEvent::None);
    }

    #[test]
    fn priority_policy_prefers_down_then_up_then_select() {
        let mut all = Held(&[Button::Back, Button::Select, Button::Up, Button::Down]);
        assert_eq!(resolve(&mut all, MultiPressPolicy::Priority), ButtonEvent::Down);

        let mut up_select = Held(&[Button::Select, Button::Up]);
        assert_eq!(resolve(&mut up_select, MultiPressPolicy::Priority), ButtonEvent::Up);

        let mut select_back = Held(&[Button::Back, Button::Select]);
        assert_eq!(resolve(&mut select_back, MultiPressPolicy::Priority), ButtonEvent::Select);
    }

    #[test]
    fn ignore_policy_drops_ambiguous_presses() {
        let mut two = Held(&[Button::Up, Button::Down]);
        assert_eq!(resolve(&mut two, MultiPressPolicy::Ignore), ButtonEvent::None);
    }

    #[test]
    fn first_press_is_reported_immediately() {
        let mut deb = Debouncer::new(150, MultiPressPolicy::Priority);
        assert_eq!(deb.poll(&mut Held(&[Button::Select]), 0), ButtonEvent::Select);
    }

    #[test]
    fn events_inside_quiet_period_are_suppressed() {
        let mut deb = Debouncer::new(150, MultiPressPolicy::Priority);
        let mut down = Held(&[Button::Down]);

        assert_eq!(deb.poll(&mut down, 1000), ButtonEvent::Down);
        assert_eq!(deb.poll(&mut down, 1001), ButtonEvent::None);
        assert_eq!(deb.poll(&mut down, 1149), ButtonEvent::None);
        // Held button repeats once the window has elapsed.
        assert_eq!(deb.poll(&mut down, 1150), ButtonEvent::Down);
    }

    #[test]
    fn quiet_period_is_shared_by_all_buttons() {
        let mut deb = Debouncer::new(150, MultiPressPolicy::Priority);

        assert_eq!(deb.poll(&mut Held(&[Button::Up]), 500), ButtonEvent::Up);
        assert_eq!(deb.poll(&mut Held(&[Button::Back]), 600), ButtonEvent::None);
        assert_eq!(deb.poll(&mut Held(&[Button::Back]), 650), ButtonEvent::Back);
    }

    #[test]
    fn idle_polls_do_not_restart_quiet_period() {
        let mut deb = Debouncer::new(150, MultiPressPolicy::Priority);

        assert_eq!(deb.poll(&mut Held(&[Button::Up]), 0), ButtonEvent::Up);
        assert_eq!(deb.poll(&mut Held(&[]), 200), ButtonEvent::None);
        assert_eq!(deb.poll(&mut Held(&[Button::Up]), 201), ButtonEvent::Up);
    }

    #[test]
    fn ignored_multi_press_does_not_consume_window() {
        let mut deb = Debouncer::new(150, MultiPressPolicy::Ignore);

        assert_eq!(deb.poll(&mut Held(&[Button::Up, Button::Down]), 0), ButtonEvent::None);
        assert_eq!(deb.poll(&mut Held(&[Button::Up]), 10), ButtonEvent::Up);
    }
}
