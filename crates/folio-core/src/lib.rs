#![forbid(unsafe_code)]

//! Core: pagination range computation, control tokens, and page state.
//!
//! The calculator turns a [`PageState`] and a [`PaginationConfig`] into the
//! ordered [`Controls`] a pagination bar renders: page numbers, ellipsis
//! markers, and first/previous/next/last markers. It is pure and total; the
//! caller owns the page state and applies activations through
//! [`PageState::activate`].
//!
//! ```
//! use folio_core::{PageState, PaginationConfig, compute_controls};
//!
//! let mut state = PageState::new(25, 50).unwrap();
//! let controls = compute_controls(state, &PaginationConfig::default());
//! assert_eq!(controls.to_string(), "‹ « 1 … 23 24 [25] 26 27 … 50 » ›");
//!
//! let next = controls.last().copied().unwrap();
//! let change = state.activate(&next).unwrap();
//! assert_eq!((change.from, change.to), (25, 26));
//! ```

pub mod config;
pub mod control;
pub mod error;
pub mod logging;
pub mod range;
pub mod state;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace};

pub use config::{DEFAULT_MAX_VISIBLE_PAGES, PaginationConfig};
pub use control::{Control, ControlToken, Controls};
pub use error::PaginationError;
pub use range::{compute, compute_controls, visible_window};
pub use state::{PageChange, PageState};
