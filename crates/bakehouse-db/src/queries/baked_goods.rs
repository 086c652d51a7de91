//! Baked good CRUD operations.

use chrono::Utc;
use rusqlite::Connection;

use bakehouse_core::{BakedGoodId, BakeryId, Error, Result};

use crate::models::BakedGood;

const COLS: &str = "id, name, price, created_at, updated_at, bakery_id";

/// Create a new baked good owned by `bakery_id`. Both timestamps are set
/// to the insert time. Fails if the bakery does not exist (foreign key) or
/// the price is negative (CHECK constraint).
pub fn create_baked_good(
    conn: &Connection,
    name: &str,
    price: f64,
    bakery_id: BakeryId,
) -> Result<BakedGood> {
    let now = Utc::now().to_rfc3339();

    conn.execute(
        "INSERT INTO baked_goods (name, price, created_at, updated_at, bakery_id)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        rusqlite::params![name, price, now, now, bakery_id.as_i64()],
    )
    .map_err(|e| Error::database(e.to_string()))?;

    Ok(BakedGood {
        id: BakedGoodId::new(conn.last_insert_rowid()),
        name: name.to_string(),
        price,
        created_at: now.clone(),
        updated_at: now,
        bakery_id,
    })
}

/// Get a baked good by ID.
pub fn get_baked_good(conn: &Connection, id: BakedGoodId) -> Result<Option<BakedGood>> {
    let result = conn.query_row(
        &format!("SELECT {COLS} FROM baked_goods WHERE id = ?1"),
        [id.as_i64()],
        BakedGood::from_row,
    );
    match result {
        Ok(g) => Ok(Some(g)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// List all baked goods, ordered by ascending id.
pub fn list_baked_goods(conn: &Connection) -> Result<Vec<BakedGood>> {
    let mut stmt = conn
        .prepare(&format!("SELECT {COLS} FROM baked_goods ORDER BY id"))
        .map_err(|e| Error::database(e.to_string()))?;
    let rows = stmt
        .query_map([], BakedGood::from_row)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(rows)
}

/// List the baked goods owned by one bakery, ordered by ascending id.
pub fn list_for_bakery(conn: &Connection, bakery_id: BakeryId) -> Result<Vec<BakedGood>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {COLS} FROM baked_goods WHERE bakery_id = ?1 ORDER BY id"
        ))
        .map_err(|e| Error::database(e.to_string()))?;
    let rows = stmt
        .query_map([bakery_id.as_i64()], BakedGood::from_row)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(rows)
}

/// Update a baked good's name and price, refreshing its update timestamp.
pub fn update_baked_good(
    conn: &Connection,
    id: BakedGoodId,
    name: &str,
    price: f64,
) -> Result<bool> {
    let now = Utc::now().to_rfc3339();
    let n = conn
        .execute(
            "UPDATE baked_goods SET name = ?1, price = ?2, updated_at = ?3 WHERE id = ?4",
            rusqlite::params![name, price, now, id.as_i64()],
        )
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(n > 0)
}

/// Delete a baked good.
pub fn delete_baked_good(conn: &Connection, id: BakedGoodId) -> Result<bool> {
    let n = conn
        .execute("DELETE FROM baked_goods WHERE id = ?1", [id.as_i64()])
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::init_memory_pool;
    use crate::queries::bakeries::create_bakery;

    #[test]
    fn crud() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        let bakery = create_bakery(&conn, "Sweet Treats").unwrap();
        let good = create_baked_good(&conn, "Croissant", 3.5, bakery.id).unwrap();
        assert_eq!(good.name, "Croissant");
        assert_eq!(good.price, 3.5);
        assert_eq!(good.bakery_id, bakery.id);
        assert_eq!(good.created_at, good.updated_at);

        let found = get_baked_good(&conn, good.id).unwrap().unwrap();
        assert_eq!(found.id, good.id);
        assert_eq!(found.bakery_id, bakery.id);

        assert_eq!(list_baked_goods(&conn).unwrap().len(), 1);

        assert!(update_baked_good(&conn, good.id, "Butter Croissant", 4.0).unwrap());
        let updated = get_baked_good(&conn, good.id).unwrap().unwrap();
        assert_eq!(updated.name, "Butter Croissant");
        assert_eq!(updated.price, 4.0);
        assert_eq!(updated.created_at, good.created_at);

        assert!(delete_baked_good(&conn, good.id).unwrap());
        assert!(get_baked_good(&conn, good.id).unwrap().is_none());
    }

    #[test]
    fn get_missing_returns_none() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        assert!(get_baked_good(&conn, BakedGoodId::new(999))
            .unwrap()
            .is_none());
    }

    #[test]
    fn zero_price_is_valid() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        let bakery = create_bakery(&conn, "Samples").unwrap();
        let good = create_baked_good(&conn, "Free Sample", 0.0, bakery.id).unwrap();
        assert_eq!(good.price, 0.0);
    }

    #[test]
    fn negative_price_is_rejected() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        let bakery = create_bakery(&conn, "Sweet Treats").unwrap();
        let err = create_baked_good(&conn, "Croissant", -1.0, bakery.id).unwrap_err();
        assert!(matches!(err, Error::Database { .. }));
    }

    #[test]
    fn empty_name_is_rejected() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        let bakery = create_bakery(&conn, "Sweet Treats").unwrap();
        let err = create_baked_good(&conn, "", 1.0, bakery.id).unwrap_err();
        assert!(matches!(err, Error::Database { .. }));
    }

    #[test]
    fn missing_bakery_is_rejected() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        let err = create_baked_good(&conn, "Orphan Scone", 2.0, BakeryId::new(999)).unwrap_err();
        assert!(matches!(err, Error::Database { .. }));
    }

    #[test]
    fn bakery_deletion_is_restricted_while_goods_remain() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        let bakery = create_bakery(&conn, "Sweet Treats").unwrap();
        let good = create_baked_good(&conn, "Croissant", 3.5, bakery.id).unwrap();

        let err = crate::queries::bakeries::delete_bakery(&conn, bakery.id).unwrap_err();
        assert!(matches!(err, Error::Database { .. }));

        assert!(delete_baked_good(&conn, good.id).unwrap());
        assert!(crate::queries::bakeries::delete_bakery(&conn, bakery.id).unwrap());
    }

    #[test]
    fn list_for_bakery_filters_and_orders() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        let sweet = create_bakery(&conn, "Sweet Treats").unwrap();
        let daily = create_bakery(&conn, "The Daily Rise").unwrap();

        let croissant = create_baked_good(&conn, "Croissant", 3.5, sweet.id).unwrap();
        let _roll = create_baked_good(&conn, "Cinnamon Roll", 4.0, daily.id).unwrap();
        let muffin = create_baked_good(&conn, "Blueberry Muffin", 3.0, sweet.id).unwrap();

        let goods = list_for_bakery(&conn, sweet.id).unwrap();
        let ids: Vec<_> = goods.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![croissant.id, muffin.id]);
        assert!(goods.iter().all(|g| g.bakery_id == sweet.id));

        assert_eq!(list_baked_goods(&conn).unwrap().len(), 3);
    }
}
