//! Errors for caller misuse of the pagination API.
//!
//! The calculator itself is total. These errors only surface where a caller
//! hands in a shape that has no meaningful page count.

use std::fmt;

/// Invalid input rejected before any range computation happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationError {
    /// `total_pages` was zero; a pagination bar always has at least one page.
    ZeroTotalPages,
    /// `per_page` was zero when deriving a page count from an item count.
    ZeroPageSize,
}

impl fmt::Display for PaginationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroTotalPages => write!(f, "total pages must be at least 1"),
            Self::ZeroPageSize => write!(f, "page size must be at least 1"),
        }
    }
}

impl std::error::Error for PaginationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            PaginationError::ZeroTotalPages.to_string(),
            "total pages must be at least 1"
        );
        assert_eq!(
            PaginationError::ZeroPageSize.to_string(),
            "page size must be at least 1"
        );
    }

    #[test]
    fn is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(PaginationError::ZeroTotalPages);
        assert!(err.source().is_none());
    }
}
