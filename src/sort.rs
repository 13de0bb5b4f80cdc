//! Result ordering over a closed set of sortable fields.

use std::collections::HashMap;

use sea_orm::Order;

use crate::entity::Column;
use crate::errors::QueryRejection;

pub const DEFAULT_SORT_FIELD: &str = "CreatedDate";

/// Fields callers may sort by, with the column each resolves to. `sortBy`
/// values outside this list reject the request; ordering by an arbitrary
/// column name is never attempted.
pub const SORT_FIELDS: &[(&str, Column)] = &[
    ("KolID", Column::KolId),
    ("Code", Column::Code),
    ("Language", Column::Language),
    ("Education", Column::Education),
    ("CreatedDate", Column::CreatedDate),
    ("ModifiedDate", Column::ModifiedDate),
    ("ExpectedSalary", Column::ExpectedSalary),
];

/// Resolves `sortBy` and `sortDir` from raw query parameters.
///
/// `sortBy` is matched after capitalising its first letter, so `createdDate`
/// and `CreatedDate` are the same field. Absent or empty `sortBy` falls back
/// to [`DEFAULT_SORT_FIELD`]. `sortDir` is `asc` (any case) for ascending;
/// everything else, including absence, is descending.
///
/// # Errors
///
/// Returns `QueryRejection::UnknownSortField` when `sortBy` is outside
/// [`SORT_FIELDS`].
pub fn resolve_sort(params: &HashMap<String, String>) -> Result<(Column, Order), QueryRejection> {
    let requested = params
        .get("sortBy")
        .map(String::as_str)
        .filter(|raw| !raw.is_empty())
        .unwrap_or(DEFAULT_SORT_FIELD);
    let canonical = capitalize_first(requested);
    let column = SORT_FIELDS
        .iter()
        .find(|(name, _)| *name == canonical)
        .map(|&(_, column)| column)
        .ok_or_else(|| QueryRejection::UnknownSortField(requested.to_owned()))?;

    let order = match params.get("sortDir") {
        Some(dir) if dir.eq_ignore_ascii_case("asc") => Order::Asc,
        _ => Order::Desc,
    };
    Ok((column, order))
}

fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
