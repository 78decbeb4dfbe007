//! Screen drawing.
//!
//! Everything is drawn through [`Canvas`], a four-call text surface, so
//! layout can be checked on the host.  The firmware implements it on top
//! of the SSD1306 driver in `ui::display`.

use core::fmt::Write;

use heapless::String;

use crate::app::{App, Screen, MENU};
use crate::config::{
    BOOT_TITLE, CHARS_PER_LINE, CHAR_WIDTH, DISPLAY_WIDTH, FIRMWARE_NAME, LINE_SPACING,
    MENU_VISIBLE_LINES, NETWORK_VISIBLE_LINES, VERSION,
};
use crate::ui::nav::ListState;
use crate::wifi::{ScanEntry, ScanResults};

/// Bytes needed for a full row of four-byte characters.
pub const LINE_BYTES: usize = CHARS_PER_LINE * 4;

/// One formatted display row; layout is measured in characters.
pub type Line = String<LINE_BYTES>;

/// Text-only drawing surface.
pub trait Canvas {
    /// Blank the frame buffer and drop any inversion.
    fn clear(&mut self);
    /// Draw `text` with its baseline at `y`.
    fn draw_text(&mut self, x: i32, y: i32, text: &str);
    /// Swap foreground and background for following text.
    fn set_inverted(&mut self, inverted: bool);
    /// Push the frame buffer to the panel.
    fn present(&mut self);
}

/// Baseline of list row `row` (0-based) under an optional header.
pub fn row_baseline(row: usize, header: bool) -> i32 {
    let offset = if header { 10 } else { -3 };
    (1 + row as i32) * LINE_SPACING + offset
}

/// X position that centres `text` on the panel.
pub fn centered_x(text: &str) -> i32 {
    let width = text.chars().count() as i32 * CHAR_WIDTH;
    ((DISPLAY_WIDTH - width) / 2).max(0)
}

/// Longest prefix of `text` holding at most `max_chars` characters.
pub fn clip(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Banner shown while the hardware comes up.
pub fn draw_boot<C: Canvas>(canvas: &mut C) {
    canvas.clear();
    canvas.draw_text(0, 18, BOOT_TITLE);
    canvas.draw_text(0, 32, "Initializing...");
    canvas.draw_text(80, 60, VERSION);
    canvas.present();
}

/// Draw one full frame for the current screen.
pub fn render<C: Canvas>(app: &App, canvas: &mut C) {
    canvas.clear();
    canvas.set_inverted(false);

    match app.screen() {
        Screen::Splash => draw_splash(canvas),
        Screen::Menu => draw_menu(canvas, app.menu_state()),
        Screen::NetworkScanner => match app.scan_results() {
            None => canvas.draw_text(0, 12, "Scanning..."),
            Some(results) => draw_network_list(canvas, results, app.network_state()),
        },
        Screen::NetworkInfo => draw_network_info(canvas, app.selected_network()),
        other => {
            if let Some(label) = other.placeholder_label() {
                canvas.draw_text(0, 12, label);
            }
        }
    }

    canvas.present();
}

fn draw_splash<C: Canvas>(canvas: &mut C) {
    canvas.draw_text(centered_x(FIRMWARE_NAME), 40, FIRMWARE_NAME);

    let start = " Start ";
    canvas.set_inverted(true);
    canvas.draw_text(centered_x(start), 58, start);
    canvas.set_inverted(false);
}

fn draw_menu<C: Canvas>(canvas: &mut C, state: ListState) {
    for (row, index) in state.visible_range(MENU.len(), MENU_VISIBLE_LINES).enumerate() {
        let mut line = Line::new();
        let _ = write!(line, " {} ", MENU[index].label);
        draw_row(canvas, row_baseline(row, false), &line, state.is_highlighted(index));
    }
}

fn draw_network_list<C: Canvas>(canvas: &mut C, results: &ScanResults, state: ListState) {
    if results.is_empty() {
        canvas.draw_text(0, 12, "No Networks Found");
        return;
    }

    let mut header = Line::new();
    let more = if results.is_truncated() { "+" } else { "" };
    let _ = write!(header, "Networks: {}{}", results.len(), more);
    canvas.draw_text(0, 10, &header);

    for (row, index) in state.visible_range(results.len(), NETWORK_VISIBLE_LINES).enumerate() {
        if let Some(entry) = results.get(index) {
            let line = network_row(entry);
            draw_row(canvas, row_baseline(row, true), &line, state.is_highlighted(index));
        }
    }
}

/// "<ssid, padded to 16> <rssi>" - exactly one display row.
pub fn network_row(entry: &ScanEntry) -> Line {
    let mut line = Line::new();
    let _ = write!(
        line,
        "{:<16} {:>4}",
        clip(entry.display_name(), 16),
        entry.signal_strength
    );
    line
}

fn draw_network_info<C: Canvas>(canvas: &mut C, entry: Option<&ScanEntry>) {
    let Some(entry) = entry else {
        canvas.draw_text(0, 12, "No network selected");
        return;
    };

    canvas.draw_text(0, 12, clip(entry.display_name(), CHARS_PER_LINE));

    let mut line = Line::new();
    let _ = write!(line, "RSSI: {} dBm", entry.signal_strength);
    canvas.draw_text(0, 25, &line);

    line.clear();
    let _ = write!(line, "Channel: {}", entry.channel);
    canvas.draw_text(0, 38, &line);

    line.clear();
    let _ = write!(line, "Security: {}", entry.security.label());
    canvas.draw_text(0, 51, &line);

    canvas.draw_text(0, 63, "BACK: list");
}

fn draw_row<C: Canvas>(canvas: &mut C, y: i32, text: &str, highlighted: bool) {
    canvas.set_inverted(highlighted);
    canvas.draw_text(0, y, text);
    canvas.set_inverted(false);
}

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests (run on host, not embedded)
// ═══════════════════════════════════════════════════════════════════════════
