#![forbid(unsafe_code)]

//! Page range and ellipsis computation.
//!
//! # Layout
//!
//! ```text
//! ‹ « 1 … 23 24 [25] 26 27 … 50 » ›
//! │ │ │ │ └──── window ───┘ │  │ │ └ Next
//! │ │ │ └ gap               gap │ └ Last
//! │ │ └ first anchor   last anchor
//! │ └ First
//! └ Previous
//! ```
//!
//! The window is `max_visible_pages` wide and centered on the current page,
//! shifted inward at either end. Page 1 and the last page are always shown as
//! anchors; a gap of one or more hidden pages between an anchor and the window
//! collapses into a single ellipsis.
//!
//! # Invariants
//!
//! 1. Page numbers are strictly increasing.
//! 2. The current page is always present.
//! 3. At most `max_visible_pages` window pages plus the two anchors.
//! 4. An ellipsis always hides at least one page.
//! 5. A single-page bar is exactly `[1]`, with no navigation markers.

use crate::config::PaginationConfig;
use crate::control::{Control, ControlToken, Controls};
use crate::error::PaginationError;
use crate::state::PageState;

/// Inclusive `(start, end)` page window for `current` out of `total`.
///
/// When the window width is even the extra slot goes before `current`.
/// `max_visible_pages` below 1 is treated as 1, `total` below 1 as 1, and
/// `current` is clamped into `[1, total]`.
pub fn visible_window(current: u64, total: u64, max_visible_pages: u64) -> (u64, u64) {
    let total = total.max(1);
    let max = max_visible_pages.max(1);
    let current = current.clamp(1, total);
    if total <= max {
        return (1, total);
    }

    let before = max / 2;
    let after = max - 1 - before;
    if current <= before {
        return (1, max);
    }
    if total - current < after {
        return (total - max + 1, total);
    }
    (current - before, current + after)
}

/// Compute the controls for `state` under `config`.
///
/// Pure and deterministic: equal inputs produce equal output.
pub fn compute_controls(state: PageState, config: &PaginationConfig) -> Controls {
    let config = config.normalized();
    let current = state.current();
    let total = state.total();
    let max_visible = config.max_visible_pages;

    let _span = crate::debug_span!("pagination_compute", current, total, max_visible).entered();

    if total == 1 {
        let mut controls = Controls::with_capacity(1);
        controls.push(page_control(1, current, config.disabled));
        return controls;
    }

    let at_start = current == 1;
    let at_end = current == total;
    let disabled = config.disabled;

    // Window pages + two anchors + two gaps + four markers.
    let window_len = usize::try_from(max_visible.min(total)).unwrap_or(usize::MAX);
    let mut controls = Controls::with_capacity(window_len.saturating_add(8));

    if config.show_prev_next {
        controls.push(Control::new(ControlToken::Previous, disabled || at_start));
    }
    if config.show_first_last {
        controls.push(Control::new(ControlToken::First, disabled || at_start));
    }

    if total <= max_visible {
        for number in 1..=total {
            controls.push(page_control(number, current, disabled));
        }
    } else {
        let (start, end) = visible_window(current, total, max_visible);
        controls.push(page_control(1, current, disabled));
        if start > 2 {
            controls.push(Control::new(ControlToken::Ellipsis, true));
        }
        for number in start.max(2)..=end.min(total - 1) {
            controls.push(page_control(number, current, disabled));
        }
        if end < total - 1 {
            controls.push(Control::new(ControlToken::Ellipsis, true));
        }
        controls.push(page_control(total, current, disabled));
    }

    if config.show_first_last {
        controls.push(Control::new(ControlToken::Last, disabled || at_end));
    }
    if config.show_prev_next {
        controls.push(Control::new(ControlToken::Next, disabled || at_end));
    }

    crate::trace!(emitted = controls.len(), "pagination controls computed");
    controls
}

/// Compute controls from raw page numbers.
///
/// `current` is clamped into `[1, total]`. A zero `total` is a caller error.
pub fn compute(
    current: u64,
    total: u64,
    config: &PaginationConfig,
) -> Result<Controls, PaginationError> {
    let state = PageState::new(current, total)?;
    if state.current() != current {
        crate::trace!(
            requested = current,
            clamped = state.current(),
            total,
            "current page clamped"
        );
    }
    Ok(compute_controls(state, config))
}

fn page_control(number: u64, current: u64, disabled: bool) -> Control {
    Control {
        token: ControlToken::Page(number),
        disabled,
        current: number == current,
    }
}
