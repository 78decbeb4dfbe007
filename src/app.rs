//! Screen state machine.
//!
//! [`App`] owns everything the UI mutates between ticks: the active
//! [`Screen`], one [`ListState`] per list screen and the cached scan
//! results.  The driver loop feeds it one [`ButtonEvent`] per tick via
//! [`App::handle`], draws it, and runs a scan whenever
//! [`App::needs_scan`] says so.

use crate::config::{MENU_VISIBLE_LINES, NETWORK_VISIBLE_LINES, RESCAN_ON_ENTRY};
use crate::ui::nav::{self, ListState};
use crate::ui::ButtonEvent;
use crate::wifi::{ScanEntry, ScanResults};

/// Screens (views) the UI can be in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    /// Start screen - title and "Start" prompt.
    Splash,
    /// Main menu - paginated list of tools.
    Menu,
    /// Network list from the last scan.
    NetworkScanner,
    DeviceScanner,
    PacketSniffer,
    ChannelAnalyzer,
    RssiMeter,
    WardrivingLogger,
    FakeAp,
    DeauthTester,
    BatteryMonitor,
    /// Details of the network highlighted in the scanner list.
    NetworkInfo,
}

impl Screen {
    /// Static label for tools that have no behaviour yet.
    pub fn placeholder_label(self) -> Option<&'static str> {
        match self {
            Screen::DeviceScanner => Some("device scanner selected"),
            Screen::PacketSniffer => Some("packet sniffer selected"),
            Screen::ChannelAnalyzer => Some("channel analyzer selected"),
            Screen::RssiMeter => Some("RSSI meter selected"),
            Screen::WardrivingLogger => Some("wardriving logger selected"),
            Screen::FakeAp => Some("fake AP selected"),
            Screen::DeauthTester => Some("Deauth tester selected"),
            Screen::BatteryMonitor => Some("Battery monitor selected"),
            Screen::Splash | Screen::Menu | Screen::NetworkScanner | Screen::NetworkInfo => None,
        }
    }

    pub fn is_placeholder(self) -> bool {
        self.placeholder_label().is_some()
    }
}

/// One row of the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub screen: Screen,
}

/// Main menu, top to bottom.
pub const MENU: [MenuItem; 9] = [
    MenuItem { label: "Network Scanner", screen: Screen::NetworkScanner },
    MenuItem { label: "Device Scanner", screen: Screen::DeviceScanner },
    MenuItem { label: "Packet Sniffer", screen: Screen::PacketSniffer },
    MenuItem { label: "Channel Analyzer", screen: Screen::ChannelAnalyzer },
    MenuItem { label: "RSSI Meter", screen: Screen::RssiMeter },
    MenuItem { label: "Wardriving Logger", screen: Screen::WardrivingLogger },
    MenuItem { label: "Fake AP", screen: Screen::FakeAp },
    MenuItem { label: "Deauth Tester", screen: Screen::DeauthTester },
    MenuItem { label: "Battery Monitor", screen: Screen::BatteryMonitor },
];

/// Where `event` leads from `screen`, ignoring list movement.
///
/// `highlighted` is the screen behind the highlighted menu row and
/// `has_networks` tells whether the scanner list has anything to open.
pub fn transition(
    screen: Screen,
    event: ButtonEvent,
    highlighted: Screen,
    has_networks: bool,
) -> Option<Screen> {
    match (screen, event) {
        (_, ButtonEvent::None) => None,

        (Screen::Splash, ButtonEvent::Select) => Some(Screen::Menu),
        (Screen::Splash, _) => None,

        (Screen::Menu, ButtonEvent::Select) => Some(highlighted),
        (Screen::Menu, ButtonEvent::Back) => Some(Screen::Splash),
        (Screen::Menu, _) => None,

        (Screen::NetworkScanner, ButtonEvent::Select) if has_networks => Some(Screen::NetworkInfo),
        (Screen::NetworkScanner, ButtonEvent::Back) => Some(Screen::Menu),
        (Screen::NetworkScanner, _) => None,

        (Screen::NetworkInfo, ButtonEvent::Back) => Some(Screen::NetworkScanner),
        (Screen::NetworkInfo, _) => None,

        (
            Screen::DeviceScanner
            | Screen::PacketSniffer
            | Screen::ChannelAnalyzer
            | Screen::RssiMeter
            | Screen::WardrivingLogger
            | Screen::FakeAp
            | Screen::DeauthTester
            | Screen::BatteryMonitor,
            ButtonEvent::Back,
        ) => Some(Screen::Menu),
        (
            Screen::DeviceScanner
            | Screen::PacketSniffer
            | Screen::ChannelAnalyzer
            | Screen::RssiMeter
            | Screen::WardrivingLogger
            | Screen::FakeAp
            | Screen::DeauthTester
            | Screen::BatteryMonitor,
            _,
        ) => None,
    }
}

/// Application state, owned by the driver loop.
#[derive(Clone, Debug)]
pub struct App {
    screen: Screen,
    menu: ListState,
    networks: ListState,
    /// `None` until the scanner has results for the current visit.
    scan: Option<ScanResults>,
    rescan_on_entry: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Start on the splash screen with empty lists.
    pub fn new() -> Self {
        Self::with_rescan_on_entry(RESCAN_ON_ENTRY)
    }

    /// Like [`App::new`], choosing whether leaving the scanner for the
    /// menu discards its results.
    pub fn with_rescan_on_entry(rescan_on_entry: bool) -> Self {
        Self {
            screen: Screen::Splash,
            menu: ListState::new(),
            networks: ListState::new(),
            scan: None,
            rescan_on_entry,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn menu_state(&self) -> ListState {
        self.menu
    }

    pub fn network_state(&self) -> ListState {
        self.networks
    }

    pub fn scan_results(&self) -> Option<&ScanResults> {
        self.scan.as_ref()
    }

    fn network_count(&self) -> usize {
        self.scan.as_ref().map_or(0, ScanResults::len)
    }

    /// Network under the scanner highlight.
    pub fn selected_network(&self) -> Option<&ScanEntry> {
        self.scan.as_ref()?.get(self.networks.selected)
    }

    /// The scanner is showing and has nothing cached for this visit.
    pub fn needs_scan(&self) -> bool {
        self.screen == Screen::NetworkScanner && self.scan.is_none()
    }

    /// Install results from the Wi-Fi scan and rewind the list.
    pub fn store_scan(&mut self, results: ScanResults) {
        self.networks.reset();
        self.scan = Some(results);
    }

    /// Process one tick's button event.  Returns the screen entered, if
    /// the event caused a transition.
    pub fn handle(&mut self, event: ButtonEvent) -> Option<Screen> {
        match self.screen {
            Screen::Menu => {
                let moved = nav::advance(self.menu, MENU.len(), MENU_VISIBLE_LINES, event);
                if moved != self.menu {
                    #[cfg(feature = "defmt")]
                    defmt::debug!("menu: {} -> {}", self.menu, moved);
                    self.menu = moved;
                }
            }
            Screen::NetworkScanner => {
                let count = self.network_count();
                let moved = nav::advance(self.networks, count, NETWORK_VISIBLE_LINES, event);
                if moved != self.networks {
                    #[cfg(feature = "defmt")]
                    defmt::debug!("networks: {} -> {}", self.networks, moved);
                    self.networks = moved;
                }
            }
            _ => {}
        }

        let highlighted = MENU
            .get(self.menu.selected)
            .map_or(Screen::Menu, |item| item.screen);
        let next = transition(self.screen, event, highlighted, self.network_count() > 0)?;
        self.enter(next);
        Some(next)
    }

    fn enter(&mut self, next: Screen) {
        #[cfg(feature = "defmt")]
        defmt::info!("screen: {} -> {}", self.screen, next);

        match (self.screen, next) {
            // Coming back from the detail view keeps results and position.
            (Screen::NetworkInfo, Screen::NetworkScanner) => {}
            (Screen::Menu, Screen::NetworkScanner) => {
                if self.rescan_on_entry || self.scan.is_none() {
                    self.scan = None;
                    self.networks.reset();
                }
            }
            (Screen::NetworkScanner, Screen::Menu) => {
                if self.rescan_on_entry {
                    self.scan = None;
                    self.networks.reset();
                }
            }
            _ => {}
        }
        self.screen = next;
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests (run on host, not embedded)
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wifi::SecurityKind;

    fn networks(n: usize) -> ScanResults {
        ScanResults::from_entries(
            (0..n).map(|i| ScanEntry::new("ap", -50 - i as i8, 6, SecurityKind::Wpa2)),
        )
    }

    fn app_on(screen_index: usize) -> App {
        let mut app = App::new();
        app.handle(ButtonEvent::Select);
        for _ in 0..screen_index {
            app.handle(ButtonEvent::Down);
        }
        app.handle(ButtonEvent::Select);
        app
    }

    #[test]
    fn starts_on_splash() {
        let app = App::new();
        assert_eq!(app.screen(), Screen::Splash);
        assert_eq!(app.menu_state(), ListState::new());
        assert!(app.scan_results().is_none());
    }

    #[test]
    fn splash_only_reacts_to_select() {
        let mut app = App::new();
        for event in [ButtonEvent::Up, ButtonEvent::Down, ButtonEvent::Back, ButtonEvent::None] {
            assert_eq!(app.handle(event), None);
            assert_eq!(app.screen(), Screen::Splash);
        }
        assert_eq!(app.handle(ButtonEvent::Select), Some(Screen::Menu));
    }

    #[test]
    fn menu_back_returns_to_splash_and_keeps_position() {
        let mut app = App::new();
        app.handle(ButtonEvent::Select);
        app.handle(ButtonEvent::Up);
        assert_eq!(app.handle(ButtonEvent::Back), Some(Screen::Splash));
        app.handle(ButtonEvent::Select);
        assert_eq!(app.menu_state().selected, MENU.len() - 1);
    }

    #[test]
    fn every_menu_row_opens_its_screen() {
        for (i, item) in MENU.iter().enumerate() {
            let app = app_on(i);
            assert_eq!(app.screen(), item.screen);
        }
    }

    #[test]
    fn placeholders_only_leave_on_back() {
        for (i, item) in MENU.iter().enumerate().skip(1) {
            let mut app = app_on(i);
            assert!(item.screen.is_placeholder());
            for event in [ButtonEvent::Up, ButtonEvent::Down, ButtonEvent::Select] {
                assert_eq!(app.handle(event), None);
            }
            assert_eq!(app.menu_state().selected, i);
            assert_eq!(app.handle(ButtonEvent::Back), Some(Screen::Menu));
            assert_eq!(app.menu_state().selected, i);
        }
    }

    #[test]
    fn entering_scanner_requests_a_scan() {
        let mut app = app_on(0);
        assert_eq!(app.screen(), Screen::NetworkScanner);
        assert!(app.needs_scan());
        app.store_scan(networks(3));
        assert!(!app.needs_scan());
    }

    #[test]
    fn scanner_select_with_no_networks_is_ignored() {
        let mut app = app_on(0);
        app.store_scan(ScanResults::new());
        assert_eq!(app.handle(ButtonEvent::Select), None);
        assert_eq!(app.screen(), Screen::NetworkScanner);
        assert_eq!(app.handle(ButtonEvent::Down), None);
        assert_eq!(app.network_state(), ListState::new());
    }

    #[test]
    fn scanner_select_while_scan_pending_is_ignored() {
        let mut app = app_on(0);
        assert_eq!(app.handle(ButtonEvent::Select), None);
        assert!(app.needs_scan());
    }

    #[test]
    fn detail_view_round_trip_keeps_position() {
        let mut app = app_on(0);
        app.store_scan(networks(8));
        for _ in 0..5 {
            app.handle(ButtonEvent::Down);
        }
        let before = app.network_state();
        assert_eq!(before, ListState { selected: 5, top: 2 });

        assert_eq!(app.handle(ButtonEvent::Select), Some(Screen::NetworkInfo));
        assert_eq!(app.selected_network().map(|n| n.signal_strength), Some(-55));
        assert_eq!(app.handle(ButtonEvent::Down), None);

        assert_eq!(app.handle(ButtonEvent::Back), Some(Screen::NetworkScanner));
        assert_eq!(app.network_state(), before);
        assert!(!app.needs_scan());
    }

    #[test]
    fn leaving_scanner_discards_results() {
        let mut app = app_on(0);
        app.store_scan(networks(4));
        app.handle(ButtonEvent::Down);

        assert_eq!(app.handle(ButtonEvent::Back), Some(Screen::Menu));
        assert!(app.scan_results().is_none());
        assert_eq!(app.network_state(), ListState::new());

        app.handle(ButtonEvent::Select);
        assert!(app.needs_scan());
    }

    #[test]
    fn cached_results_survive_when_rescan_disabled() {
        let mut app = App::with_rescan_on_entry(false);
        app.handle(ButtonEvent::Select);
        app.handle(ButtonEvent::Select);
        app.store_scan(networks(4));
        app.handle(ButtonEvent::Down);

        app.handle(ButtonEvent::Back);
        app.handle(ButtonEvent::Select);
        assert_eq!(app.screen(), Screen::NetworkScanner);
        assert!(!app.needs_scan());
        assert_eq!(app.network_state().selected, 1);
    }

    #[test]
    fn transition_table_is_total() {
        let screens = [
            Screen::Splash,
            Screen::Menu,
            Screen::NetworkScanner,
            Screen::DeviceScanner,
            Screen::PacketSniffer,
            Screen::ChannelAnalyzer,
            Screen::RssiMeter,
            Screen::WardrivingLogger,
            Screen::FakeAp,
            Screen::DeauthTester,
            Screen::BatteryMonitor,
            Screen::NetworkInfo,
        ];
        for screen in screens {
            assert_eq!(transition(screen, ButtonEvent::None, Screen::FakeAp, true), None);
            if screen.is_placeholder() {
                assert_eq!(transition(screen, ButtonEvent::Back, Screen::FakeAp, true), Some(Screen::Menu));
            }
        }
        assert_eq!(
            transition(Screen::Menu, ButtonEvent::Select, Screen::FakeAp, false),
            Some(Screen::FakeAp)
        );
    }
}
