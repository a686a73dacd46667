use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::json;

use super::domain::{AnalysisRequest, BusinessSizeBucket, CallId, PainPoint};
use super::repository::{CallStore, ProspectStore};
use super::service::{AnalysisReport, AnalysisServiceError, CallAnalysisService, StageUpdate};

/// Router builder exposing the scoring entry point and call lookups.
pub fn qualification_router<C, P>(service: Arc<CallAnalysisService<C, P>>) -> Router
where
    C: CallStore + 'static,
    P: ProspectStore + 'static,
{
    Router::new()
        .route("/api/v1/calls/analyze", post(analyze_handler::<C, P>))
        .route("/api/v1/calls/:call_id", get(call_handler::<C, P>))
        .with_state(service)
}

/// Wire shape of the scoring entry point's response.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub score: u8,
    pub qualified: bool,
    pub pain_points: Vec<PainPoint>,
    pub business_size: BusinessSizeBucket,
    pub qualification_reasons: Vec<String>,
    pub stage_update: StageUpdate,
}

impl From<AnalysisReport> for AnalyzeResponse {
    fn from(report: AnalysisReport) -> Self {
        let analysis = report.evaluation.analysis;
        Self {
            score: analysis.score,
            qualified: report.qualified,
            pain_points: analysis.pain_points,
            business_size: analysis.business_size,
            qualification_reasons: analysis.qualification_reasons,
            stage_update: report.stage_update,
        }
    }
}

pub(crate) async fn analyze_handler<C, P>(
    State(service): State<Arc<CallAnalysisService<C, P>>>,
    axum::Json(request): axum::Json<AnalysisRequest>,
) -> Response
where
    C: CallStore + 'static,
    P: ProspectStore + 'static,
{
    match service.analyze(request) {
        Ok(report) => {
            let response = AnalyzeResponse::from(report);
            (StatusCode::OK, axum::Json(response)).into_response()
        }
        Err(error @ AnalysisServiceError::MissingCallId) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn call_handler<C, P>(
    State(service): State<Arc<CallAnalysisService<C, P>>>,
    Path(call_id): Path<String>,
) -> Response
where
    C: CallStore + 'static,
    P: ProspectStore + 'static,
{
    let id = CallId(call_id);
    match service.call(&id) {
        Ok(Some(record)) => (StatusCode::OK, axum::Json(record)).into_response(),
        Ok(None) => {
            let payload = json!({
                "error": "call not found",
                "call_id": id.0,
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
