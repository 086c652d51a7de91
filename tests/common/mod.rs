//! Shared test harness for integration tests.
//!
//! Provides [`TestHarness`] which creates an in-memory DB, default config,
//! and full [`AppContext`]. The [`TestHarness::with_server`] constructor
//! starts Axum on a random port for HTTP-level testing.

use std::net::SocketAddr;

use bakehouse_core::config::Config;
use bakehouse_core::{BakedGoodId, BakeryId};
use bakehouse_db::pool::{get_conn, init_memory_pool, DbPool, PooledConnection};
use bakehouse_db::queries;
use bakehouse_server::context::AppContext;
use bakehouse_server::router::build_router;

/// Test harness wrapping a fully-constructed [`AppContext`] backed by an
/// in-memory database.
pub struct TestHarness {
    pub ctx: AppContext,
    pub db: DbPool,
}

impl TestHarness {
    /// Create a new harness with default configuration and in-memory DB.
    pub fn new() -> Self {
        let db = init_memory_pool().expect("failed to create in-memory pool");
        let ctx = AppContext::new(db.clone(), Config::default());
        Self { ctx, db }
    }

    /// Start an Axum server on a random port and return the harness together
    /// with the bound socket address.
    pub async fn with_server() -> (Self, SocketAddr) {
        let harness = Self::new();
        let app = build_router(harness.ctx.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind random port");
        let addr = listener.local_addr().expect("failed to get local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        (harness, addr)
    }

    /// Get a database connection from the pool.
    pub fn conn(&self) -> PooledConnection {
        get_conn(&self.db).expect("failed to get db connection")
    }

    /// Insert a bakery directly through the query layer.
    pub fn create_bakery(&self, name: &str) -> BakeryId {
        let conn = self.conn();
        queries::bakeries::create_bakery(&conn, name)
            .expect("failed to create bakery")
            .id
    }

    /// Insert a baked good directly through the query layer.
    pub fn create_baked_good(&self, name: &str, price: f64, bakery_id: BakeryId) -> BakedGoodId {
        let conn = self.conn();
        queries::baked_goods::create_baked_good(&conn, name, price, bakery_id)
            .expect("failed to create baked good")
            .id
    }
}
