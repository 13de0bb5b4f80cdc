//! Soft pagination handling.
//!
//! Malformed paging input never fails a request. Anything that does not parse
//! as a positive integer falls back to the default and the reset is reported
//! back to the caller as a warning. The only hard limit is the page size cap,
//! which the route layer turns into a rejection before any query runs.

use std::collections::HashMap;

pub const DEFAULT_PAGE_INDEX: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Upper bound on `pageSize`. Requests above it are refused rather than
/// clamped, so callers find out instead of silently getting fewer rows.
pub const MAX_PAGE_SIZE: u64 = 200;

/// Resolved paging values plus the warnings produced while resolving them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number.
    pub index: u64,
    /// Rows per page. May still exceed [`MAX_PAGE_SIZE`]; the cap is checked
    /// separately so the rejection can echo the resolved values.
    pub size: u64,
    /// One entry per parameter that was reset to its default.
    pub warnings: Vec<String>,
}

impl PageRequest {
    /// Resolves `pageIndex` and `pageSize` from raw query parameters.
    ///
    /// Absent parameters take their defaults silently. Present parameters
    /// that fail to parse, or parse to zero, take their defaults with a
    /// warning.
    #[must_use]
    pub fn resolve(params: &HashMap<String, String>) -> Self {
        let mut warnings = Vec::new();
        let index = resolve_param(params, "pageIndex", DEFAULT_PAGE_INDEX, &mut warnings);
        let size = resolve_param(params, "pageSize", DEFAULT_PAGE_SIZE, &mut warnings);
        Self {
            index,
            size,
            warnings,
        }
    }

    /// Rows to skip before the first returned row.
    #[must_use]
    pub fn offset(&self) -> u64 {
        self.index.saturating_sub(1).saturating_mul(self.size)
    }

    #[must_use]
    pub fn exceeds_cap(&self) -> bool {
        self.size > MAX_PAGE_SIZE
    }
}

fn resolve_param(
    params: &HashMap<String, String>,
    name: &str,
    default: u64,
    warnings: &mut Vec<String>,
) -> u64 {
    match params.get(name) {
        None => default,
        Some(raw) => match raw.parse::<u64>() {
            Ok(value) if value >= 1 => value,
            _ => {
                warnings.push(format!("{name} invalid, reset to {default}"));
                default
            }
        },
    }
}
