//! Read-only bakery endpoints.

use axum::extract::{Path, State};
use axum::Json;

use bakehouse_core::BakeryId;
use bakehouse_db::{pool, queries};

use crate::context::AppContext;
use crate::dto::{goods_by_bakery, BakeryResponse};
use crate::error::AppError;

/// GET /bakeries
///
/// Every bakery with its baked goods nested, ordered by ascending id. The
/// goods are fetched in one query and grouped in memory rather than with a
/// query per bakery.
pub async fn list_bakeries(
    State(ctx): State<AppContext>,
) -> Result<Json<Vec<BakeryResponse>>, AppError> {
    let conn = pool::get_conn(&ctx.db)?;
    let bakeries = queries::bakeries::list_bakeries(&conn)?;
    let mut grouped = goods_by_bakery(queries::baked_goods::list_baked_goods(&conn)?);

    let responses = bakeries
        .iter()
        .map(|b| BakeryResponse::from_model(b, &grouped.remove(&b.id).unwrap_or_default()))
        .collect();
    Ok(Json(responses))
}

/// GET /bakeries/{id}
pub async fn get_bakery(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
) -> Result<Json<BakeryResponse>, AppError> {
    let bakery_id: BakeryId = id
        .parse()
        .map_err(|_| bakehouse_core::Error::Validation(format!("invalid bakery id: {id}")))?;

    let conn = pool::get_conn(&ctx.db)?;
    let bakery = queries::bakeries::get_bakery(&conn, bakery_id)?
        .ok_or_else(|| bakehouse_core::Error::not_found("bakery", bakery_id))?;
    let goods = queries::baked_goods::list_for_bakery(&conn, bakery_id)?;

    Ok(Json(BakeryResponse::from_model(&bakery, &goods)))
}
