//! Read-only baked good endpoints.

use axum::extract::{Path, State};
use axum::Json;

use bakehouse_core::BakedGoodId;
use bakehouse_db::{pool, queries};

use crate::context::AppContext;
use crate::dto::BakedGoodResponse;
use crate::error::AppError;

/// GET /baked_goods
///
/// Every baked good as a flat row (owning bakery as a scalar id), ordered
/// by ascending id.
pub async fn list_baked_goods(
    State(ctx): State<AppContext>,
) -> Result<Json<Vec<BakedGoodResponse>>, AppError> {
    let conn = pool::get_conn(&ctx.db)?;
    let goods = queries::baked_goods::list_baked_goods(&conn)?;
    let responses = goods.iter().map(BakedGoodResponse::from_model).collect();
    Ok(Json(responses))
}

/// GET /baked_goods/{id}
pub async fn get_baked_good(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
) -> Result<Json<BakedGoodResponse>, AppError> {
    let good_id: BakedGoodId = id
        .parse()
        .map_err(|_| bakehouse_core::Error::Validation(format!("invalid baked good id: {id}")))?;

    let conn = pool::get_conn(&ctx.db)?;
    let good = queries::baked_goods::get_baked_good(&conn, good_id)?
        .ok_or_else(|| bakehouse_core::Error::not_found("baked good", good_id))?;

    Ok(Json(BakedGoodResponse::from_model(&good)))
}
