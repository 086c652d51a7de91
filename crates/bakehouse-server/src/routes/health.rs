//! Liveness probe.

/// GET /health
pub async fn health_check() -> &'static str {
    "ok"
}
