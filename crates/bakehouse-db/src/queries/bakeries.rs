//! Bakery CRUD operations.
//!
//! The write operations back the out-of-band administration surface
//! (seeding, maintenance); the HTTP API itself only reads.

use chrono::Utc;
use rusqlite::Connection;

use bakehouse_core::{BakeryId, Error, Result};

use crate::models::Bakery;

const COLS: &str = "id, name, created_at, updated_at";

/// Create a new bakery. Both timestamps are set to the insert time.
pub fn create_bakery(conn: &Connection, name: &str) -> Result<Bakery> {
    let now = Utc::now().to_rfc3339();

    conn.execute(
        "INSERT INTO bakeries (name, created_at, updated_at) VALUES (?1, ?2, ?3)",
        rusqlite::params![name, now, now],
    )
    .map_err(|e| Error::database(e.to_string()))?;

    Ok(Bakery {
        id: BakeryId::new(conn.last_insert_rowid()),
        name: name.to_string(),
        created_at: now.clone(),
        updated_at: now,
    })
}

/// Get a bakery by ID.
pub fn get_bakery(conn: &Connection, id: BakeryId) -> Result<Option<Bakery>> {
    let result = conn.query_row(
        &format!("SELECT {COLS} FROM bakeries WHERE id = ?1"),
        [id.as_i64()],
        Bakery::from_row,
    );
    match result {
        Ok(b) => Ok(Some(b)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// List all bakeries, ordered by ascending id.
pub fn list_bakeries(conn: &Connection) -> Result<Vec<Bakery>> {
    let mut stmt = conn
        .prepare(&format!("SELECT {COLS} FROM bakeries ORDER BY id"))
        .map_err(|e| Error::database(e.to_string()))?;
    let rows = stmt
        .query_map([], Bakery::from_row)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(rows)
}

/// Rename a bakery, refreshing its update timestamp.
pub fn update_bakery_name(conn: &Connection, id: BakeryId, name: &str) -> Result<bool> {
    let now = Utc::now().to_rfc3339();
    let n = conn
        .execute(
            "UPDATE bakeries SET name = ?1, updated_at = ?2 WHERE id = ?3",
            rusqlite::params![name, now, id.as_i64()],
        )
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(n > 0)
}

/// Delete a bakery. Fails while any of its baked goods remain (the
/// foreign key is declared ON DELETE RESTRICT).
pub fn delete_bakery(conn: &Connection, id: BakeryId) -> Result<bool> {
    let n = conn
        .execute("DELETE FROM bakeries WHERE id = ?1", [id.as_i64()])
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::init_memory_pool;

    #[test]
    fn crud() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        let bakery = create_bakery(&conn, "Sweet Treats").unwrap();
        assert_eq!(bakery.name, "Sweet Treats");
        assert_eq!(bakery.created_at, bakery.updated_at);

        let found = get_bakery(&conn, bakery.id).unwrap().unwrap();
        assert_eq!(found.id, bakery.id);
        assert_eq!(found.name, "Sweet Treats");

        let all = list_bakeries(&conn).unwrap();
        assert_eq!(all.len(), 1);

        assert!(update_bakery_name(&conn, bakery.id, "Sweeter Treats").unwrap());
        let renamed = get_bakery(&conn, bakery.id).unwrap().unwrap();
        assert_eq!(renamed.name, "Sweeter Treats");
        assert_eq!(renamed.created_at, bakery.created_at);
        assert!(renamed.updated_at >= renamed.created_at);

        assert!(delete_bakery(&conn, bakery.id).unwrap());
        assert!(get_bakery(&conn, bakery.id).unwrap().is_none());
    }

    #[test]
    fn get_missing_returns_none() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        assert!(get_bakery(&conn, BakeryId::new(999)).unwrap().is_none());
        assert!(!update_bakery_name(&conn, BakeryId::new(999), "x").unwrap());
        assert!(!delete_bakery(&conn, BakeryId::new(999)).unwrap());
    }

    #[test]
    fn empty_name_is_rejected() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        let err = create_bakery(&conn, "").unwrap_err();
        assert!(matches!(err, Error::Database { .. }));
    }

    #[test]
    fn list_is_ordered_by_id() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        let a = create_bakery(&conn, "Alpha").unwrap();
        let b = create_bakery(&conn, "Beta").unwrap();
        let c = create_bakery(&conn, "Gamma").unwrap();

        let ids: Vec<_> = list_bakeries(&conn).unwrap().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![a.id, b.id, c.id]);
        assert!(a.id < b.id && b.id < c.id);
    }
}
