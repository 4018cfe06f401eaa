use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::client::GeneratorClient;

pub struct AppState {
    pub generator: GeneratorClient,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IndexQuery {
    /// Pre-fills the username input
    pub username: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct GenerateForm {
    /// GitHub username as typed; surrounding whitespace is ignored
    #[serde(default)]
    pub username: String,
}
