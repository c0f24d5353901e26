//! Caller-owned page state and navigation.
//!
//! [`PageState`] is the `(current, total)` pair a paginated view keeps
//! between renders. It upholds `1 <= current <= total` on every path: the
//! constructor and every navigation method clamp instead of failing. The range
//! calculator only reads it; turning an activated [`Control`] into a page
//! change happens here.

use std::ops::Range;

use crate::control::{Control, ControlToken};
use crate::error::PaginationError;

/// A page transition produced by navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageChange {
    pub from: u64,
    pub to: u64,
}

impl PageChange {
    /// Whether the transition moves toward higher page numbers.
    pub const fn is_forward(&self) -> bool {
        self.to > self.from
    }
}

/// Current page out of a known page count (both 1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageState {
    current: u64,
    total: u64,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current: 1,
            total: 1,
        }
    }
}

impl PageState {
    /// Create a page state, clamping `current` into `[1, total]`.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::ZeroTotalPages`] when `total` is zero.
    pub fn new(current: u64, total: u64) -> Result<Self, PaginationError> {
        if total == 0 {
            return Err(PaginationError::ZeroTotalPages);
        }
        Ok(Self {
            current: current.clamp(1, total),
            total,
        })
    }

    /// State on page 1 of the pages needed for `total_items` at `per_page`.
    ///
    /// An empty collection still has one (empty) page.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::ZeroPageSize`] when `per_page` is zero.
    pub fn from_item_count(total_items: u64, per_page: u64) -> Result<Self, PaginationError> {
        if per_page == 0 {
            return Err(PaginationError::ZeroPageSize);
        }
        Ok(Self {
            current: 1,
            total: total_items.div_ceil(per_page).max(1),
        })
    }

    /// Current page (1-based).
    pub const fn current(&self) -> u64 {
        self.current
    }

    /// Total number of pages.
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Whether the current page is page 1.
    pub const fn is_first(&self) -> bool {
        self.current == 1
    }

    /// Whether the current page is the last page.
    pub const fn is_last(&self) -> bool {
        self.current == self.total
    }

    /// Whether a previous page exists.
    pub const fn has_prev(&self) -> bool {
        !self.is_first()
    }

    /// Whether a next page exists.
    pub const fn has_next(&self) -> bool {
        !self.is_last()
    }

    /// Clamp an arbitrary page number into this state's range.
    pub fn clamp_page(&self, page: u64) -> u64 {
        page.clamp(1, self.total)
    }

    /// Move to `page` (clamped). Returns the change, if any.
    pub fn go_to(&mut self, page: u64) -> Option<PageChange> {
        let to = self.clamp_page(page);
        if to == self.current {
            return None;
        }
        let change = PageChange {
            from: self.current,
            to,
        };
        self.current = to;
        crate::debug!(from = change.from, to = change.to, total = self.total, "page change");
        Some(change)
    }

    /// Step forward one page.
    pub fn next(&mut self) -> Option<PageChange> {
        self.go_to(self.current.saturating_add(1))
    }

    /// Step back one page.
    pub fn prev(&mut self) -> Option<PageChange> {
        self.go_to(self.current.saturating_sub(1))
    }

    /// Jump to page 1.
    pub fn first(&mut self) -> Option<PageChange> {
        self.go_to(1)
    }

    /// Jump to the last page.
    pub fn last(&mut self) -> Option<PageChange> {
        self.go_to(self.total)
    }

    /// Page that activating `control` leads to, or `None` for ellipses and
    /// disabled controls.
    ///
    /// Targets are clamped, so a control computed for a stale state still
    /// lands on a valid page.
    pub fn target_of(&self, control: &Control) -> Option<u64> {
        if !control.is_interactive() {
            return None;
        }
        let target = match control.token {
            ControlToken::Page(number) => number,
            ControlToken::Previous => self.current.saturating_sub(1),
            ControlToken::Next => self.current.saturating_add(1),
            ControlToken::First => 1,
            ControlToken::Last => self.total,
            ControlToken::Ellipsis => return None,
        };
        Some(self.clamp_page(target))
    }

    /// Apply an activated control. Activating the current page is a no-op.
    pub fn activate(&mut self, control: &Control) -> Option<PageChange> {
        let target = self.target_of(control)?;
        self.go_to(target)
    }

    /// Replace the page count (e.g. after the data set shrank), re-clamping
    /// the current page.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::ZeroTotalPages`] when `total` is zero; the
    /// state is left unchanged.
    pub fn set_total(&mut self, total: u64) -> Result<Option<PageChange>, PaginationError> {
        if total == 0 {
            return Err(PaginationError::ZeroTotalPages);
        }
        self.total = total;
        Ok(self.go_to(self.current))
    }

    /// 0-based item indices shown on the current page.
    pub fn item_range(&self, per_page: u64) -> Range<u64> {
        let start = (self.current - 1).saturating_mul(per_page);
        start..start.saturating_add(per_page)
    }

    /// Like [`item_range`](Self::item_range), bounded by `total_items`.
    pub fn item_range_within(&self, per_page: u64, total_items: u64) -> Range<u64> {
        let range = self.item_range(per_page);
        range.start.min(total_items)..range.end.min(total_items)
    }
}
