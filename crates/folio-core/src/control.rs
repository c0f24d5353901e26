#![forbid(unsafe_code)]

//! Control tokens emitted by the range calculator.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What a single pagination control represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ControlToken {
    /// A clickable page number (1-based).
    Page(u64),
    /// A non-interactive gap between two visible ranges.
    Ellipsis,
    /// Jump to page 1.
    First,
    /// Jump to the last page.
    Last,
    /// Step back one page.
    Previous,
    /// Step forward one page.
    Next,
}

impl ControlToken {
    /// Page number carried by a `Page` token.
    pub const fn page(self) -> Option<u64> {
        match self {
            Self::Page(number) => Some(number),
            _ => None,
        }
    }

    /// Whether this is one of the first/previous/next/last markers.
    pub const fn is_navigation(self) -> bool {
        matches!(self, Self::First | Self::Last | Self::Previous | Self::Next)
    }

    fn symbol(self) -> &'static str {
        match self {
            Self::Page(_) => "",
            Self::Ellipsis => "…",
            Self::First => "«",
            Self::Last => "»",
            Self::Previous => "‹",
            Self::Next => "›",
        }
    }
}

/// One emitted control: a token plus its interaction flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Control {
    pub token: ControlToken,
    /// The control must not trigger a page change.
    pub disabled: bool,
    /// The control is the `Page` for the current page.
    pub current: bool,
}

impl Control {
    pub(crate) const fn new(token: ControlToken, disabled: bool) -> Self {
        Self {
            token,
            disabled,
            current: false,
        }
    }

    /// Whether activating this control may change the page.
    ///
    /// Ellipsis markers and disabled controls are never interactive.
    pub const fn is_interactive(&self) -> bool {
        !self.disabled && !matches!(self.token, ControlToken::Ellipsis)
    }
}

/// Compact form used in logs and tests: `[7]` marks the current page and a
/// disabled control is wrapped in parentheses.
impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let disabled = self.disabled && self.token != ControlToken::Ellipsis;
        if disabled {
            f.write_str("(")?;
        }
        match self.token {
            ControlToken::Page(number) if self.current => write!(f, "[{number}]")?,
            ControlToken::Page(number) => write!(f, "{number}")?,
            token => f.write_str(token.symbol())?,
        }
        if disabled {
            f.write_str(")")?;
        }
        Ok(())
    }
}

/// Ordered controls for one pagination bar, left to right.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Controls {
    items: Vec<Control>,
}

impl Controls {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, control: Control) {
        self.items.push(control);
    }

    /// Number of controls, ellipses and navigation markers included.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no controls were emitted.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the controls in render order.
    pub fn iter(&self) -> std::slice::Iter<'_, Control> {
        self.items.iter()
    }

    /// The controls as a slice.
    pub fn as_slice(&self) -> &[Control] {
        &self.items
    }

    /// The first control.
    pub fn first(&self) -> Option<&Control> {
        self.items.first()
    }

    /// The last control.
    pub fn last(&self) -> Option<&Control> {
        self.items.last()
    }

    /// Page numbers in render order.
    pub fn pages(&self) -> Vec<u64> {
        self.items.iter().filter_map(|c| c.token.page()).collect()
    }

    /// Number of ellipsis markers.
    pub fn ellipsis_count(&self) -> usize {
        self.items
            .iter()
            .filter(|c| c.token == ControlToken::Ellipsis)
            .count()
    }

    /// Whether any ellipsis marker was emitted.
    pub fn has_ellipsis(&self) -> bool {
        self.ellipsis_count() > 0
    }

    /// The first control carrying `token`.
    pub fn find(&self, token: ControlToken) -> Option<&Control> {
        self.items.iter().find(|c| c.token == token)
    }

    /// The control for the current page.
    pub fn current(&self) -> Option<&Control> {
        self.items.iter().find(|c| c.current)
    }

    /// Consume into the underlying vector.
    pub fn into_vec(self) -> Vec<Control> {
        self.items
    }
}

impl Index<usize> for Controls {
    type Output = Control;

    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

impl<'a> IntoIterator for &'a Controls {
    type Item = &'a Control;
    type IntoIter = std::slice::Iter<'a, Control>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for Controls {
    type Item = Control;
    type IntoIter = std::vec::IntoIter<Control>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl fmt::Display for Controls {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, control) in self.items.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{control}")?;
        }
        Ok(())
    }
}
