//! JSON response shapes for the catalog endpoints.
//!
//! Serialization is asymmetric on purpose: a bakery nests its baked goods,
//! while a baked good carries only the scalar `bakery_id` of its owner.
//! Nesting in one direction only keeps the cyclic bakery/good relationship
//! out of the payload. Timestamps pass through as the RFC 3339 text stored
//! in the database.

use std::collections::HashMap;

use serde::Serialize;

use bakehouse_core::{BakedGoodId, BakeryId};
use bakehouse_db::models::{BakedGood, Bakery};

/// Baked good response. Used both standalone and nested under a bakery.
#[derive(Debug, Serialize)]
pub struct BakedGoodResponse {
    pub id: BakedGoodId,
    pub name: String,
    pub price: f64,
    pub created_at: String,
    pub updated_at: String,
    pub bakery_id: BakeryId,
}

impl BakedGoodResponse {
    pub fn from_model(good: &BakedGood) -> Self {
        Self {
            id: good.id,
            name: good.name.clone(),
            price: good.price,
            created_at: good.created_at.clone(),
            updated_at: good.updated_at.clone(),
            bakery_id: good.bakery_id,
        }
    }
}

/// Bakery response with its baked goods nested.
#[derive(Debug, Serialize)]
pub struct BakeryResponse {
    pub id: BakeryId,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
    pub baked_goods: Vec<BakedGoodResponse>,
}

impl BakeryResponse {
    pub fn from_model(bakery: &Bakery, goods: &[BakedGood]) -> Self {
        Self {
            id: bakery.id,
            name: bakery.name.clone(),
            created_at: bakery.created_at.clone(),
            updated_at: bakery.updated_at.clone(),
            baked_goods: goods.iter().map(BakedGoodResponse::from_model).collect(),
        }
    }
}

/// Group baked goods by their owning bakery, preserving input order within
/// each group. Lets the list endpoint resolve every bakery's goods from a
/// single query instead of one query per bakery.
pub fn goods_by_bakery(goods: Vec<BakedGood>) -> HashMap<BakeryId, Vec<BakedGood>> {
    let mut grouped: HashMap<BakeryId, Vec<BakedGood>> = HashMap::new();
    for good in goods {
        grouped.entry(good.bakery_id).or_default().push(good);
    }
    grouped
}
