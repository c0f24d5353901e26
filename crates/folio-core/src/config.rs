//! Pagination bar configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default width of the page window around the current page.
pub const DEFAULT_MAX_VISIBLE_PAGES: u64 = 5;

/// Caller-supplied options for a single range computation.
///
/// With the `serde` feature, missing fields deserialize to their defaults,
/// so a config file only needs to name what it overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PaginationConfig {
    /// Width of the page window. Values below 1 are treated as 1.
    pub max_visible_pages: u64,
    /// Emit `First`/`Last` markers.
    pub show_first_last: bool,
    /// Emit `Previous`/`Next` markers.
    pub show_prev_next: bool,
    /// Disable every emitted control.
    pub disabled: bool,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            max_visible_pages: DEFAULT_MAX_VISIBLE_PAGES,
            show_first_last: true,
            show_prev_next: true,
            disabled: false,
        }
    }
}

impl PaginationConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page window width.
    pub fn max_visible_pages(mut self, max_visible_pages: u64) -> Self {
        self.max_visible_pages = max_visible_pages;
        self
    }

    /// Show or hide the first/last markers.
    pub fn show_first_last(mut self, show: bool) -> Self {
        self.show_first_last = show;
        self
    }

    /// Show or hide the previous/next markers.
    pub fn show_prev_next(mut self, show: bool) -> Self {
        self.show_prev_next = show;
        self
    }

    /// Disable the whole bar.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Copy of this config with `max_visible_pages` clamped to at least 1.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            max_visible_pages: self.max_visible_pages.max(1),
            ..self
        }
    }
}
