use std::sync::Arc;

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::workflows::qualification::domain::{
    CallAnalysis, CallId, CallRecord, MeetingId, PipelineStage, ProspectId, ProspectRecord,
};
use crate::workflows::qualification::repository::{
    CallStore, MemoryCallStore, MemoryProspectStore, ProspectStore, StoreError,
};
use crate::workflows::qualification::scoring::{ScoringConfig, ScoringEngine};
use crate::workflows::qualification::service::CallAnalysisService;
use crate::workflows::qualification::{qualification_router, AnalysisRequest};

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::new(ScoringConfig::standard())
}

pub(super) fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 25, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

/// Hits exactly: million tier (12), challenge (6), interested (6),
/// commitment (6), combo bonus (5) = 35.
pub(super) fn qualified_transcript() -> String {
    "Our revenue crossed two million last year. The biggest challenge is handing off work, \
     and honestly we are interested in working together."
        .to_string()
}

/// Hits exactly: million tier (12), cash flow (8), team (8), interested (6)
/// = 34, one point short of the threshold.
pub(super) fn borderline_transcript() -> String {
    "We clear a million a year but cash flow is tight and the team is stretched thin. \
     We are interested."
        .to_string()
}

/// Hits exactly: 750k tier (10), cash flow (8), team (8), interested (6),
/// help (4) = 36.
pub(super) fn mid_tier_transcript() -> String {
    "We're doing around 750k right now. Cash flow keeps me up at night and the team is \
     hard to manage. We are interested in any help."
        .to_string()
}

pub(super) fn request(call_id: &str, transcript: Option<String>) -> AnalysisRequest {
    AnalysisRequest {
        call_id: CallId(call_id.to_string()),
        transcript,
    }
}

pub(super) fn seeded_call(call_id: &str, meeting_id: &str) -> CallRecord {
    CallRecord {
        call_id: CallId(call_id.to_string()),
        meeting_id: Some(MeetingId(meeting_id.to_string())),
        transcript: None,
        analysis: None,
        qualification_score: None,
        analyzed_at: None,
    }
}

pub(super) fn seeded_prospect(
    prospect_id: &str,
    meeting_id: &str,
    stage: PipelineStage,
) -> ProspectRecord {
    ProspectRecord {
        prospect_id: ProspectId(prospect_id.to_string()),
        email: format!("{prospect_id}@pipeline.example"),
        meeting_id: Some(MeetingId(meeting_id.to_string())),
        qualification_score: None,
        pipeline_stage: stage,
        last_activity_date: None,
    }
}

pub(super) fn build_service() -> (
    CallAnalysisService<MemoryCallStore, MemoryProspectStore>,
    Arc<MemoryCallStore>,
    Arc<MemoryProspectStore>,
) {
    let calls = Arc::new(MemoryCallStore::default());
    calls.insert(seeded_call("call-1", "meet-1"));

    let prospects = Arc::new(MemoryProspectStore::default());
    prospects.insert(seeded_prospect("prospect-1", "meet-1", PipelineStage::New));

    let service = CallAnalysisService::new(engine(), calls.clone(), prospects.clone());
    (service, calls, prospects)
}

pub(super) fn router_with_service(
    service: CallAnalysisService<MemoryCallStore, MemoryProspectStore>,
) -> axum::Router {
    qualification_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

/// Call store that always fails, for best-effort semantics tests.
pub(super) struct UnavailableCallStore;

impl CallStore for UnavailableCallStore {
    fn record_analysis(
        &self,
        _call_id: &CallId,
        _transcript: Option<&str>,
        _analysis: &CallAnalysis,
        _now: DateTime<Utc>,
    ) -> Result<CallRecord, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _call_id: &CallId) -> Result<Option<CallRecord>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }
}

/// Prospect store that always fails.
pub(super) struct UnavailableProspectStore;

impl ProspectStore for UnavailableProspectStore {
    fn fetch_by_meeting(
        &self,
        _meeting_id: &MeetingId,
    ) -> Result<Option<ProspectRecord>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn advance_by_meeting(
        &self,
        _meeting_id: &MeetingId,
        _score: u8,
        _stage: PipelineStage,
        _now: DateTime<Utc>,
    ) -> Result<ProspectRecord, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }
}
