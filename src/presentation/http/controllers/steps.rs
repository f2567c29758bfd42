// src/presentation/http/controllers/steps.rs
use crate::application::dto::ElementMatchDto;
use crate::application::steps::MatchStepsQuery;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct TestStepPayload {
    /// Description of the test step, such as "Click the button with id submitBtn".
    pub description: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct MatchStepsRequest {
    /// The HTML source to be parsed.
    pub html: String,
    /// Test step descriptions referencing HTML elements.
    pub test_steps: Vec<TestStepPayload>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MatchStepsResponse {
    /// Matched HTML elements, one entry per test step in input order.
    pub elements: Vec<ElementMatchDto>,
}

/// Parse the HTML and identify the element each test step refers to. Step
/// descriptions are matched with text heuristics that recognize ids, names,
/// classes, and visible text.
#[utoipa::path(
    post,
    path = "/api/v1/steps/match",
    request_body = MatchStepsRequest,
    responses(
        (status = 200, description = "Matched elements for each test step.", body = MatchStepsResponse)
    ),
    tag = "Steps"
)]
pub async fn match_steps(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<MatchStepsRequest>,
) -> HttpResult<Json<MatchStepsResponse>> {
    let query = MatchStepsQuery {
        html: payload.html,
        steps: payload
            .test_steps
            .into_iter()
            .map(|step| step.description)
            .collect(),
    };

    state
        .services
        .step_matches
        .match_steps(query)
        .into_http()
        .map(|elements| Json(MatchStepsResponse { elements }))
}
