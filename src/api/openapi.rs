use utoipa::OpenApi;

use crate::api::types::GenerateForm;
use crate::model::{GenerateRequest, GenerateResponse, Repository, UserProfile};

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::pages::index,
        crate::api::pages::generate,
        crate::api::pages::reset
    ),
    components(
        schemas(
            GenerateForm,
            GenerateRequest,
            GenerateResponse,
            UserProfile,
            Repository
        )
    ),
    tags(
        (name = "page", description = "Server-rendered generator page"),
    ),
    info(
        title = "LandGen",
        version = "0.1.0",
        description = "Preview a personal portfolio website generated from a GitHub profile",
    )
)]
pub struct ApiDoc;
