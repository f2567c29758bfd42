// src/presentation/http/openapi.rs
use axum::Router;
use serde::{Deserialize, Serialize};
use std::{
    env,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

pub const DEFAULT_SNAPSHOT_PATH: &str = "interfaces/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::routes::health,
        crate::presentation::http::controllers::steps::match_steps
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::steps::MatchStepsRequest,
            crate::presentation::http::controllers::steps::TestStepPayload,
            crate::presentation::http::controllers::steps::MatchStepsResponse,
            crate::application::dto::ElementMatchDto,
            crate::application::dto::MatchedElementDto
        )
    ),
    tags(
        (name = "System", description = "Healthcheck endpoints"),
        (name = "Steps", description = "Endpoints for parsing HTML and identifying relevant elements for test steps")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Automated Selenium Script Generator Backend API",
        description = "Backend that accepts HTML and test steps, parses the HTML, and finds relevant elements referenced by the test steps for Selenium script generation.",
        version = "0.2.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let url = env::var("PUBLIC_API_URL")
            .ok()
            .map(|value| value.trim().trim_end_matches('/').to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| "http://localhost:8080".to_string());

        servers.push(Server::new(url));
    }
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new().merge(swagger).merge(redoc)
}

/// Resolve the snapshot destination from the environment, falling back to the
/// fixed default location.
pub fn snapshot_path_from_env() -> String {
    env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string())
}

/// Serialize the interface description to the configured snapshot location.
/// Returns the path written to.
pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let output_path = snapshot_path_from_env();
    write_openapi_snapshot_to(Path::new(&output_path))?;
    Ok(output_path)
}

/// Write the interface description as pretty-printed JSON. The parent
/// directory must already exist; filesystem errors propagate untranslated and
/// an existing file is overwritten in place.
pub fn write_openapi_snapshot_to(path: &Path) -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &spec)?;
    writer.flush()?;
    Ok(())
}
