//! Rust structs mapping to database tables.
//!
//! Each model implements `from_row` for constructing itself from a
//! `rusqlite::Row`. Timestamps stay as the RFC 3339 text stored in the
//! database; they pass through to the API unmodified.

use bakehouse_core::{BakedGoodId, BakeryId};

// ---------------------------------------------------------------------------
// Bakery
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Bakery {
    pub id: BakeryId,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

impl Bakery {
    pub fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: BakeryId::new(row.get(0)?),
            name: row.get(1)?,
            created_at: row.get(2)?,
            updated_at: row.get(3)?,
        })
    }
}

// ---------------------------------------------------------------------------
// BakedGood
// ---------------------------------------------------------------------------

/// A baked good holds the id of its owning bakery, never the bakery
/// itself; the reverse direction is resolved by query.
#[derive(Debug, Clone)]
pub struct BakedGood {
    pub id: BakedGoodId,
    pub name: String,
    pub price: f64,
    pub created_at: String,
    pub updated_at: String,
    pub bakery_id: BakeryId,
}

impl BakedGood {
    pub fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: BakedGoodId::new(row.get(0)?),
            name: row.get(1)?,
            price: row.get(2)?,
            created_at: row.get(3)?,
            updated_at: row.get(4)?,
            bakery_id: BakeryId::new(row.get(5)?),
        })
    }
}
