//! Exact-match filtering over a closed set of query parameters.
//!
//! Every filterable parameter is declared in [`FILTER_FIELDS`] together with
//! the coercion its values go through. Parameters outside the table are
//! ignored, so unknown keys can never reach SQL. Values that fail coercion
//! reject the whole request rather than silently matching nothing.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDateTime, Utc};
use sea_orm::{ColumnTrait, Condition, Value};

use crate::entity::Column;
use crate::errors::QueryRejection;
use crate::search;

/// Accepted layout for timestamp-valued parameters, e.g.
/// `2024-01-02T15:04:05.00`. The fractional part is optional. Values are
/// interpreted as UTC.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// How a parameter's raw string becomes a typed value, and which comparison
/// it feeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FilterKind {
    /// `i64` equality.
    Id,
    /// Boolean equality. Accepts `true`/`t`/`1` and `false`/`f`/`0`, any case.
    Flag,
    /// Timestamp equality.
    Timestamp,
    /// Timestamp lower bound (inclusive).
    TimestampFrom,
    /// Timestamp upper bound (inclusive).
    TimestampTo,
    /// Verbatim string equality.
    Text,
}

struct FilterField {
    name: &'static str,
    kind: FilterKind,
    column: Column,
}

/// The complete set of filterable parameters. Adding a field here is the only
/// way to make a parameter filterable.
const FILTER_FIELDS: &[FilterField] = &[
    FilterField {
        name: "KolID",
        kind: FilterKind::Id,
        column: Column::KolId,
    },
    FilterField {
        name: "UserProfileID",
        kind: FilterKind::Id,
        column: Column::UserProfileId,
    },
    FilterField {
        name: "ChannelSettingTypeID",
        kind: FilterKind::Id,
        column: Column::ChannelSettingTypeId,
    },
    FilterField {
        name: "RewardID",
        kind: FilterKind::Id,
        column: Column::RewardId,
    },
    FilterField {
        name: "PaymentMethodID",
        kind: FilterKind::Id,
        column: Column::PaymentMethodId,
    },
    FilterField {
        name: "TestimonialsID",
        kind: FilterKind::Id,
        column: Column::TestimonialsId,
    },
    FilterField {
        name: "VerificationStatus",
        kind: FilterKind::Flag,
        column: Column::VerificationStatus,
    },
    FilterField {
        name: "Enabled",
        kind: FilterKind::Flag,
        column: Column::Enabled,
    },
    FilterField {
        name: "Active",
        kind: FilterKind::Flag,
        column: Column::Active,
    },
    FilterField {
        name: "IsRemove",
        kind: FilterKind::Flag,
        column: Column::IsRemove,
    },
    FilterField {
        name: "IsOnBoarding",
        kind: FilterKind::Flag,
        column: Column::IsOnBoarding,
    },
    FilterField {
        name: "ActiveDate",
        kind: FilterKind::Timestamp,
        column: Column::ActiveDate,
    },
    FilterField {
        name: "ActiveDateFrom",
        kind: FilterKind::TimestampFrom,
        column: Column::ActiveDate,
    },
    FilterField {
        name: "ActiveDateTo",
        kind: FilterKind::TimestampTo,
        column: Column::ActiveDate,
    },
    FilterField {
        name: "CreatedDate",
        kind: FilterKind::Timestamp,
        column: Column::CreatedDate,
    },
    FilterField {
        name: "CreatedDateFrom",
        kind: FilterKind::TimestampFrom,
        column: Column::CreatedDate,
    },
    FilterField {
        name: "CreatedDateTo",
        kind: FilterKind::TimestampTo,
        column: Column::CreatedDate,
    },
    FilterField {
        name: "ModifiedDate",
        kind: FilterKind::Timestamp,
        column: Column::ModifiedDate,
    },
    FilterField {
        name: "Code",
        kind: FilterKind::Text,
        column: Column::Code,
    },
    FilterField {
        name: "Language",
        kind: FilterKind::Text,
        column: Column::Language,
    },
    FilterField {
        name: "Education",
        kind: FilterKind::Text,
        column: Column::Education,
    },
];

/// A parsed filter value. Carrying the type here means coercion failures
/// surface at parse time, before any SQL exists.
#[derive(Clone, Debug, PartialEq)]
enum FilterValue {
    Id(i64),
    Flag(bool),
    Timestamp(DateTime<Utc>),
    Text(String),
}

impl From<FilterValue> for Value {
    fn from(value: FilterValue) -> Self {
        match value {
            FilterValue::Id(v) => v.into(),
            FilterValue::Flag(v) => v.into(),
            FilterValue::Timestamp(v) => v.into(),
            FilterValue::Text(v) => v.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FilterOp {
    Eq,
    Gte,
    Lte,
}

/// One ready-to-apply predicate.
#[derive(Clone, Debug)]
pub struct ExactFilter {
    column: Column,
    op: FilterOp,
    value: FilterValue,
}

/// Walks [`FILTER_FIELDS`] and parses every parameter that is present with a
/// non-empty value. Parameters absent from the table are ignored.
///
/// # Errors
///
/// Returns `QueryRejection::InvalidFilterValue` when a recognised parameter
/// carries a value its kind cannot parse.
pub fn parse_filters(
    params: &HashMap<String, String>,
) -> Result<Vec<ExactFilter>, QueryRejection> {
    let mut filters = Vec::new();
    for field in FILTER_FIELDS {
        let Some(raw) = params.get(field.name) else {
            continue;
        };
        if raw.is_empty() {
            continue;
        }
        filters.push(parse_field(field, raw)?);
    }
    Ok(filters)
}

/// Combines the keyword predicate and the exact filters into one conjunction.
/// An empty input produces an empty condition, which Sea-ORM renders as no
/// WHERE clause at all.
#[must_use]
pub fn build_condition(folded_keyword: Option<&str>, filters: &[ExactFilter]) -> Condition {
    let mut condition = Condition::all();
    if let Some(keyword) = folded_keyword {
        condition = condition.add(search::keyword_condition(keyword));
    }
    for filter in filters {
        let value = Value::from(filter.value.clone());
        condition = condition.add(match filter.op {
            FilterOp::Eq => filter.column.eq(value),
            FilterOp::Gte => filter.column.gte(value),
            FilterOp::Lte => filter.column.lte(value),
        });
    }
    condition
}

fn parse_field(field: &FilterField, raw: &str) -> Result<ExactFilter, QueryRejection> {
    let (op, value) = match field.kind {
        FilterKind::Id => (FilterOp::Eq, FilterValue::Id(parse_id(field.name, raw)?)),
        FilterKind::Flag => (FilterOp::Eq, FilterValue::Flag(parse_flag(field.name, raw)?)),
        FilterKind::Timestamp => (
            FilterOp::Eq,
            FilterValue::Timestamp(parse_timestamp(field.name, raw)?),
        ),
        FilterKind::TimestampFrom => (
            FilterOp::Gte,
            FilterValue::Timestamp(parse_timestamp(field.name, raw)?),
        ),
        FilterKind::TimestampTo => (
            FilterOp::Lte,
            FilterValue::Timestamp(parse_timestamp(field.name, raw)?),
        ),
        FilterKind::Text => (FilterOp::Eq, FilterValue::Text(raw.to_owned())),
    };
    Ok(ExactFilter {
        column: field.column,
        op,
        value,
    })
}

fn parse_id(field: &'static str, raw: &str) -> Result<i64, QueryRejection> {
    raw.parse().map_err(|_| QueryRejection::InvalidFilterValue {
        field,
        expected: "an integer",
    })
}

fn parse_flag(field: &'static str, raw: &str) -> Result<bool, QueryRejection> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "t" | "1" => Ok(true),
        "false" | "f" | "0" => Ok(false),
        _ => Err(QueryRejection::InvalidFilterValue {
            field,
            expected: "a boolean",
        }),
    }
}

fn parse_timestamp(field: &'static str, raw: &str) -> Result<DateTime<Utc>, QueryRejection> {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| QueryRejection::InvalidFilterValue {
            field,
            expected: "a timestamp like 2024-01-02T15:04:05.00",
        })
}
