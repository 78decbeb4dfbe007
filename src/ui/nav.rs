//! Paginated list navigation shared by every list screen.
//!
//! A list is described by its item count and how many rows fit on the
//! display.  [`ListState`] holds the highlighted index and the first
//! visible row; [`advance`] moves both in response to a button event,
//! wrapping at either end and scrolling the window only as far as needed
//! to keep the highlight on screen.

use core::ops::Range;

use super::ButtonEvent;

/// Highlighted index and scroll-window top of one list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ListState {
    /// Highlighted item, `< item_count` whenever the list is non-empty.
    pub selected: usize,
    /// First item shown; `top <= selected < top + visible_lines`.
    pub top: usize,
}

impl ListState {
    pub const fn new() -> Self {
        Self { selected: 0, top: 0 }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Indices to draw this tick, top row first.
    pub fn visible_range(&self, item_count: usize, visible_lines: usize) -> Range<usize> {
        if item_count == 0 {
            return 0..0;
        }
        let start = self.top.min(item_count);
        let end = (start + visible_lines.min(item_count)).min(item_count);
        start..end
    }

    /// Whether the row for `index` is drawn inverted.
    pub fn is_highlighted(&self, index: usize) -> bool {
        index == self.selected
    }
}

/// Largest valid window top for a list.
pub fn max_top(item_count: usize, visible_lines: usize) -> usize {
    item_count.saturating_sub(visible_lines)
}

/// Move selection cursor one item down, wrapping past the last item.
pub fn wrap_next(selected: usize, item_count: usize) -> usize {
    if selected + 1 < item_count {
        selected + 1
    } else {
        0
    }
}

/// Move selection cursor one item up, wrapping past the first item.
pub fn wrap_prev(selected: usize, item_count: usize) -> usize {
    if selected > 0 {
        selected - 1
    } else {
        item_count.saturating_sub(1)
    }
}

/// Apply one button event to a list.
///
/// Only `Up` and `Down` move anything; the other events belong to the
/// owning screen.  An empty list never changes.  `visible_lines` of zero
/// is treated as one row.
pub fn advance(
    state: ListState,
    item_count: usize,
    visible_lines: usize,
    event: ButtonEvent,
) -> ListState {
    if item_count == 0 {
        return state;
    }
    let visible = visible_lines.max(1);

    let mut next = clamp(state, item_count, visible);
    match event {
        ButtonEvent::Down => {
            next.selected = wrap_next(next.selected, item_count);
            if next.selected == 0 {
                next.top = 0;
            }
        }
        ButtonEvent::Up => {
            let wrapped = next.selected == 0;
            next.selected = wrap_prev(next.selected, item_count);
            if wrapped {
                next.top = max_top(item_count, visible);
            }
        }
        ButtonEvent::Select | ButtonEvent::Back | ButtonEvent::None => return state,
    }

    follow_selection(next, visible)
}

/// Scroll the window the minimum amount that brings `selected` into view.
fn follow_selection(mut state: ListState, visible: usize) -> ListState {
    if state.selected < state.top {
        state.top = state.selected;
    }
    if state.selected >= state.top + visible {
        state.top = state.selected + 1 - visible;
    }
    state
}

/// Pull a state left over from a longer list back into range.
fn clamp(state: ListState, item_count: usize, visible: usize) -> ListState {
    let selected = state.selected.min(item_count - 1);
    let top = state.top.min(max_top(item_count, visible));
    follow_selection(ListState { selected, top }, visible)
}

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests (run on host, not embedded)
// ═══════════════════════════════════════════════════════════════════════════
