//! The listing route: parse, query, wrap.
//!
//! Every response, including refusals and failures, is the same envelope so
//! consumers always find `Guid`, `Result` and the paging echo in one place.

use std::collections::HashMap;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::get,
};
use sea_orm::DatabaseConnection;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_scalar::{Scalar, Servable};
use uuid::Uuid;

use crate::errors::QueryRejection;
use crate::models::KolListResponse;
use crate::pagination::PageRequest;
use crate::{filter, query, search, sort};

/// Lists KOL records: paginated, filterable, searchable and sortable.
#[utoipa::path(
    get,
    path = "/kols",
    tag = "kols",
    params(
        ("pageIndex" = Option<u64>, Query, description = "1-based page number. Invalid values reset to 1 with a warning"),
        ("pageSize" = Option<u64>, Query, description = "Rows per page, max 200. Invalid values reset to 10 with a warning; values above 200 are refused"),
        ("keyword" = Option<String>, Query, description = "Case- and diacritic-insensitive substring match over Code, Language, Education, CreatedBy and ModifiedBy"),
        ("KolID" = Option<i64>, Query, description = "Exact KOL id"),
        ("UserProfileID" = Option<i64>, Query, description = "Exact user profile id"),
        ("ChannelSettingTypeID" = Option<i64>, Query, description = "Exact channel setting type id"),
        ("RewardID" = Option<i64>, Query, description = "Exact reward id"),
        ("PaymentMethodID" = Option<i64>, Query, description = "Exact payment method id"),
        ("TestimonialsID" = Option<i64>, Query, description = "Exact testimonials id"),
        ("VerificationStatus" = Option<bool>, Query, description = "Verification flag"),
        ("Enabled" = Option<bool>, Query, description = "Enabled flag"),
        ("Active" = Option<bool>, Query, description = "Active flag"),
        ("IsRemove" = Option<bool>, Query, description = "Soft-delete flag"),
        ("IsOnBoarding" = Option<bool>, Query, description = "Onboarding flag"),
        ("ActiveDate" = Option<String>, Query, description = "Exact activation timestamp, e.g. 2024-01-02T15:04:05.00 (UTC)"),
        ("ActiveDateFrom" = Option<String>, Query, description = "Inclusive lower bound on ActiveDate"),
        ("ActiveDateTo" = Option<String>, Query, description = "Inclusive upper bound on ActiveDate"),
        ("CreatedDate" = Option<String>, Query, description = "Exact creation timestamp"),
        ("CreatedDateFrom" = Option<String>, Query, description = "Inclusive lower bound on CreatedDate"),
        ("CreatedDateTo" = Option<String>, Query, description = "Inclusive upper bound on CreatedDate"),
        ("ModifiedDate" = Option<String>, Query, description = "Exact modification timestamp"),
        ("Code" = Option<String>, Query, description = "Exact code"),
        ("Language" = Option<String>, Query, description = "Exact language"),
        ("Education" = Option<String>, Query, description = "Exact education"),
        ("sortBy" = Option<String>, Query, description = "One of KolID, Code, Language, Education, CreatedDate, ModifiedDate, ExpectedSalary. Defaults to CreatedDate"),
        ("sortDir" = Option<String>, Query, description = "asc for ascending, anything else descending"),
    ),
    responses(
        (status = 200, description = "Query ran; Result distinguishes Success from PartialSuccess", body = KolListResponse),
        (status = 400, description = "Request refused before any query ran", body = KolListResponse),
        (status = 500, description = "Query execution failed", body = KolListResponse),
    )
)]
pub async fn get_kols(
    State(db): State<DatabaseConnection>,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<KolListResponse>) {
    let guid = Uuid::new_v4();

    let page = PageRequest::resolve(&params);
    if page.exceeds_cap() {
        return reject(guid, &page, &QueryRejection::PageSizeTooLarge(page.size));
    }

    let keyword = params
        .get("keyword")
        .map(|raw| search::normalize_keyword(raw))
        .filter(|folded| !folded.is_empty());

    let filters = match filter::parse_filters(&params) {
        Ok(filters) => filters,
        Err(rejection) => return reject(guid, &page, &rejection),
    };

    let (sort_column, sort_order) = match sort::resolve_sort(&params) {
        Ok(resolved) => resolved,
        Err(rejection) => return reject(guid, &page, &rejection),
    };

    let condition = filter::build_condition(keyword.as_deref(), &filters);
    match query::list_kols(
        &db,
        condition,
        sort_column,
        sort_order,
        page.offset(),
        page.size,
    )
    .await
    {
        Ok((kols, total_count)) => (
            StatusCode::OK,
            Json(KolListResponse::completed(guid, &page, total_count, kols)),
        ),
        Err(err) => {
            tracing::error!(%guid, error = ?err, "KOL list query failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(KolListResponse::failure(
                    guid,
                    &page,
                    "A database error occurred".to_owned(),
                )),
            )
        }
    }
}

fn reject(
    guid: Uuid,
    page: &PageRequest,
    rejection: &QueryRejection,
) -> (StatusCode, Json<KolListResponse>) {
    tracing::debug!(%guid, %rejection, "list request rejected");
    (
        rejection.status_code(),
        Json(KolListResponse::failure(guid, page, rejection.to_string())),
    )
}

/// Plain router over the listing route, without the documentation pages.
pub fn router(db: DatabaseConnection) -> Router {
    Router::new().route("/kols", get(get_kols)).with_state(db)
}

#[derive(OpenApi)]
#[openapi(info(
    title = "KOL Event API",
    description = "Paginated, searchable, filterable KOL listing"
))]
struct ApiDoc;

/// The full router the binary serves: the listing route registered through the
/// OpenAPI router, with the Scalar UI on `/docs` rendering the generated
/// document.
pub fn documented_router(db: DatabaseConnection) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(get_kols))
        .split_for_parts();
    router.merge(Scalar::with_url("/docs", api)).with_state(db)
}
