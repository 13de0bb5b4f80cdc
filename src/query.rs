//! Query execution: one count plus one page fetch per request.

use sea_orm::{
    Condition, DatabaseConnection, DbErr, EntityTrait, Order, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::entity::{Column, Entity};
use crate::models::KolDto;

/// Runs the listing query: counts every row matching `condition`, then
/// fetches the requested window in the requested order. The count runs first
/// so `TotalCount` reflects the same condition the page was cut from.
///
/// # Errors
///
/// Returns any `DbErr` the count or the fetch produces.
pub async fn list_kols(
    db: &DatabaseConnection,
    condition: Condition,
    sort_column: Column,
    sort_order: Order,
    offset: u64,
    limit: u64,
) -> Result<(Vec<KolDto>, u64), DbErr> {
    let total_count = Entity::find().filter(condition.clone()).count(db).await?;

    let rows = Entity::find()
        .filter(condition)
        .order_by(sort_column, sort_order)
        .offset(offset)
        .limit(limit)
        .all(db)
        .await?;

    Ok((rows.into_iter().map(KolDto::from).collect(), total_count))
}
