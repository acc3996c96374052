use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use super::bcpnp::BcPnpInput;
use super::crs::ApplicantProfile;
use super::fsw::FswInput;
use super::language::{ClbProfile, LanguageScores, TestType};
use super::service::CalculatorService;

/// Router builder exposing each calculator as a JSON endpoint.
pub fn calculator_router(service: Arc<CalculatorService>) -> Router {
    Router::new()
        .route("/api/v1/calculators/clb", post(clb_handler))
        .route("/api/v1/calculators/crs", post(crs_handler))
        .route("/api/v1/calculators/bcpnp", post(bcpnp_handler))
        .route("/api/v1/calculators/fsw", post(fsw_handler))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub struct ClbRequest {
    pub test: TestType,
    pub scores: LanguageScores,
}

#[derive(Debug, Serialize)]
pub struct ClbResponse {
    pub clb: ClbProfile,
    pub minimum: u8,
}

pub(crate) async fn clb_handler(
    State(service): State<Arc<CalculatorService>>,
    axum::Json(request): axum::Json<ClbRequest>,
) -> Response {
    let clb = service.convert(&request.scores, request.test);
    let response = ClbResponse {
        clb,
        minimum: clb.minimum(),
    };
    (StatusCode::OK, axum::Json(response)).into_response()
}

pub(crate) async fn crs_handler(
    State(service): State<Arc<CalculatorService>>,
    axum::Json(profile): axum::Json<ApplicantProfile>,
) -> Response {
    match service.score_crs(&profile) {
        Ok(result) => {
            debug!(total = result.total_score, scheme = ?result.scheme, "crs scored");
            (StatusCode::OK, axum::Json(result)).into_response()
        }
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn bcpnp_handler(
    State(service): State<Arc<CalculatorService>>,
    axum::Json(input): axum::Json<BcPnpInput>,
) -> Response {
    let result = service.score_bcpnp(&input);
    debug!(total = result.total_score, "bcpnp scored");
    (StatusCode::OK, axum::Json(result)).into_response()
}

pub(crate) async fn fsw_handler(
    State(service): State<Arc<CalculatorService>>,
    axum::Json(input): axum::Json<FswInput>,
) -> Response {
    let result = service.score_fsw(&input);
    debug!(total = result.total_score, passes = result.passes, "fsw scored");
    (StatusCode::OK, axum::Json(result)).into_response()
}
