pub mod analytics;
pub mod members;
pub mod teams;

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}
