//! Demo dataset for the `seed` CLI command.
//!
//! Seeding resets the database: existing rows are wiped (goods first, to
//! satisfy the RESTRICT foreign key) and the demo catalog is inserted
//! fresh. On an empty table SQLite assigns row ids starting at 1 again, so
//! a seeded database is deterministic: bakery 1 is always "Sweet Treats"
//! and baked good 1 is always its "Croissant".

use rusqlite::Connection;

use bakehouse_core::{Error, Result};

use crate::queries::{baked_goods, bakeries};

/// Bakeries and their goods inserted by [`seed_demo_data`].
const DEMO_CATALOG: &[(&str, &[(&str, f64)])] = &[
    (
        "Sweet Treats",
        &[
            ("Croissant", 3.5),
            ("Chocolate Cake", 22.0),
            ("Blueberry Muffin", 3.0),
        ],
    ),
    ("Flour Power", &[("Sourdough Loaf", 6.5), ("Baguette", 3.25)]),
    (
        "The Daily Rise",
        &[
            ("Cinnamon Roll", 4.0),
            ("Banana Bread", 5.75),
            // zero is a valid price
            ("Free Sample", 0.0),
        ],
    ),
];

/// Row counts inserted by a seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub bakeries: usize,
    pub baked_goods: usize,
}

/// Wipe both tables and repopulate them with the demo catalog.
pub fn seed_demo_data(conn: &Connection) -> Result<SeedSummary> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| Error::database(e.to_string()))?;

    // Children first so the RESTRICT foreign key allows the bakery wipe.
    tx.execute("DELETE FROM baked_goods", [])
        .map_err(|e| Error::database(e.to_string()))?;
    tx.execute("DELETE FROM bakeries", [])
        .map_err(|e| Error::database(e.to_string()))?;

    let mut summary = SeedSummary {
        bakeries: 0,
        baked_goods: 0,
    };

    for &(bakery_name, goods) in DEMO_CATALOG {
        let bakery = bakeries::create_bakery(&tx, bakery_name)?;
        summary.bakeries += 1;

        for &(good_name, price) in goods {
            baked_goods::create_baked_good(&tx, good_name, price, bakery.id)?;
            summary.baked_goods += 1;
        }
    }

    tx.commit().map_err(|e| Error::database(e.to_string()))?;

    tracing::info!(
        "Seeded {} bakeries and {} baked goods",
        summary.bakeries,
        summary.baked_goods
    );

    Ok(summary)
}
