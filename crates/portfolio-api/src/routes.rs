use axum::{Json, Router, response::IntoResponse, routing::get};

use portfolio_types::api::HealthResponse;

use crate::pages;
use crate::state::AppState;
use crate::timeline;

/// Site pages plus the timeline API. Static assets and HTTP layers are added
/// by the server binary.
pub fn router(state: AppState) -> Router {
    let timeline_api = get(timeline::list_posts)
        .post(timeline::create_post)
        .delete(timeline::delete_post);

    Router::new()
        .route("/", get(pages::index))
        .route("/about", get(pages::about))
        .route("/work", get(pages::work))
        .route("/education", get(pages::education))
        .route("/hobbies", get(pages::hobbies))
        .route("/where_am_i", get(pages::where_am_i))
        .route("/timeline", get(pages::timeline))
        .route("/api/timeline_post", timeline_api.clone())
        .route("/timeline_posts", timeline_api)
        .route("/health", get(health))
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}
