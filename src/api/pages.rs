use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
    Form,
};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::{
    api::types::{AppState, GenerateForm, IndexQuery},
    orchestrator::{Orchestrator, ViewState},
    views::{form::SubmissionForm, page},
};

/// Render the idle generator page
#[utoipa::path(
    get,
    path = "/",
    params(IndexQuery),
    responses(
        (status = 200, description = "Generator form", content_type = "text/html", body = String)
    ),
    tag = "page"
)]
pub async fn index(Query(query): Query<IndexQuery>) -> Html<String> {
    let form = SubmissionForm::with_value(query.username.unwrap_or_default());
    Html(page::render(&ViewState::default(), &form))
}

/// Generate a website preview for a GitHub user
///
/// Each request drives its own [`Orchestrator`], so the single in-flight
/// request guarantee holds per page request, not across browser resubmissions.
#[utoipa::path(
    post,
    path = "/generate",
    request_body(content = GenerateForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Website preview, or the form with an error message", content_type = "text/html", body = String)
    ),
    tag = "page"
)]
#[instrument(skip(state))]
pub async fn generate(
    State(state): State<Arc<AppState>>,
    Form(input): Form<GenerateForm>,
) -> Html<String> {
    let form = SubmissionForm::with_value(input.username);
    let mut orchestrator = Orchestrator::new(state.generator.clone());

    match form.submission() {
        Some(username) => {
            orchestrator.submit(username).await;
        }
        None => debug!("Blank username submitted, nothing to generate"),
    }

    Html(page::render(orchestrator.state(), &form))
}

/// Discard the preview and return to the generator form
#[utoipa::path(
    post,
    path = "/reset",
    responses(
        (status = 303, description = "Redirect to the generator form")
    ),
    tag = "page"
)]
pub async fn reset() -> Redirect {
    Redirect::to("/")
}
