pub mod openapi;
pub mod pages;
pub mod types;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{
    openapi::ApiDoc,
    pages::{generate, index, reset},
    types::AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    let api_doc = ApiDoc::openapi();
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api_doc))
        .route("/", get(index))
        .route("/generate", post(generate))
        .route("/reset", post(reset))
        .with_state(state)
}
