//! Landing page.

use axum::response::Html;

pub const WELCOME_BODY: &str = "<h1>Welcome to the Bakery API!</h1>";

/// GET /
pub async fn welcome() -> Html<&'static str> {
    Html(WELCOME_BODY)
}
