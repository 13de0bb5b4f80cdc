//! Rejections raised while interpreting list parameters.

use axum::http::StatusCode;

use crate::pagination::MAX_PAGE_SIZE;

/// A request that could not be turned into a query.
///
/// Every variant is a client error: once one is raised the database is never
/// touched. Messages are written for API consumers and name the offending
/// parameter without echoing internal state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryRejection {
    /// `pageSize` exceeded the hard cap. Unlike a malformed `pageSize`, which
    /// quietly falls back to the default, an oversized one is refused outright.
    PageSizeTooLarge(u64),
    /// A recognised filter parameter carried a value its type cannot accept.
    InvalidFilterValue {
        field: &'static str,
        expected: &'static str,
    },
    /// `sortBy` named something outside the sortable set.
    UnknownSortField(String),
}

impl QueryRejection {
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::PageSizeTooLarge(_)
            | Self::InvalidFilterValue { .. }
            | Self::UnknownSortField(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl std::fmt::Display for QueryRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PageSizeTooLarge(_) => write!(f, "pageSize too large (max {MAX_PAGE_SIZE})"),
            Self::InvalidFilterValue { field, expected } => {
                write!(f, "{field} invalid, expected {expected}")
            }
            Self::UnknownSortField(field) => write!(f, "sortBy '{field}' is not a sortable field"),
        }
    }
}

impl std::error::Error for QueryRejection {}
