use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};

use super::domain::{
    CallAnalysis, CallId, CallRecord, MeetingId, PipelineStage, ProspectId, ProspectRecord,
};

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Call-store abstraction (externally a `calls` table keyed by call id).
pub trait CallStore: Send + Sync {
    /// Persist the transcript and derived analysis against a call, returning
    /// the stored record so the caller can correlate the prospect through
    /// its meeting id.
    fn record_analysis(
        &self,
        call_id: &CallId,
        transcript: Option<&str>,
        analysis: &CallAnalysis,
        now: DateTime<Utc>,
    ) -> Result<CallRecord, StoreError>;

    fn fetch(&self, call_id: &CallId) -> Result<Option<CallRecord>, StoreError>;
}

/// Prospect-store abstraction (externally a `prospects` table). Updates are
/// plain last-write-wins writes by meeting id; the store offers no ordering
/// guarantee across racing analyses.
pub trait ProspectStore: Send + Sync {
    fn fetch_by_meeting(&self, meeting_id: &MeetingId)
        -> Result<Option<ProspectRecord>, StoreError>;

    /// Stamp the qualification score, pipeline stage, and last-activity
    /// timestamp on the prospect correlated to the meeting.
    fn advance_by_meeting(
        &self,
        meeting_id: &MeetingId,
        score: u8,
        stage: PipelineStage,
        now: DateTime<Utc>,
    ) -> Result<ProspectRecord, StoreError>;
}

/// In-process call store. Doubles as the fixture client: seeded with demo
/// calls it stands in for the hosted backend during development and tests.
#[derive(Default)]
pub struct MemoryCallStore {
    records: Mutex<HashMap<CallId, CallRecord>>,
}

impl MemoryCallStore {
    pub fn with_fixtures() -> Self {
        let store = Self::default();
        {
            let mut guard = store.records.lock().expect("call store mutex poisoned");
            for record in fixture_calls() {
                guard.insert(record.call_id.clone(), record);
            }
        }
        store
    }

    pub fn insert(&self, record: CallRecord) {
        let mut guard = self.records.lock().expect("call store mutex poisoned");
        guard.insert(record.call_id.clone(), record);
    }
}

impl CallStore for MemoryCallStore {
    fn record_analysis(
        &self,
        call_id: &CallId,
        transcript: Option<&str>,
        analysis: &CallAnalysis,
        now: DateTime<Utc>,
    ) -> Result<CallRecord, StoreError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|_| StoreError::Unavailable("call store mutex poisoned".to_string()))?;
        let record = guard.entry(call_id.clone()).or_insert_with(|| CallRecord {
            call_id: call_id.clone(),
            meeting_id: None,
            transcript: None,
            analysis: None,
            qualification_score: None,
            analyzed_at: None,
        });

        record.transcript = transcript.map(str::to_string);
        record.analysis = Some(analysis.clone());
        record.qualification_score = Some(analysis.score);
        record.analyzed_at = Some(now);

        Ok(record.clone())
    }

    fn fetch(&self, call_id: &CallId) -> Result<Option<CallRecord>, StoreError> {
        let guard = self
            .records
            .lock()
            .map_err(|_| StoreError::Unavailable("call store mutex poisoned".to_string()))?;
        Ok(guard.get(call_id).cloned())
    }
}

/// In-process prospect store mirroring the hosted `prospects` table.
#[derive(Default)]
pub struct MemoryProspectStore {
    records: Mutex<HashMap<ProspectId, ProspectRecord>>,
}

impl MemoryProspectStore {
    pub fn with_fixtures() -> Self {
        let store = Self::default();
        {
            let mut guard = store.records.lock().expect("prospect store mutex poisoned");
            for record in fixture_prospects() {
                guard.insert(record.prospect_id.clone(), record);
            }
        }
        store
    }

    pub fn insert(&self, record: ProspectRecord) {
        let mut guard = self.records.lock().expect("prospect store mutex poisoned");
        guard.insert(record.prospect_id.clone(), record);
    }
}

impl ProspectStore for MemoryProspectStore {
    fn fetch_by_meeting(
        &self,
        meeting_id: &MeetingId,
    ) -> Result<Option<ProspectRecord>, StoreError> {
        let guard = self
            .records
            .lock()
            .map_err(|_| StoreError::Unavailable("prospect store mutex poisoned".to_string()))?;
        Ok(guard
            .values()
            .find(|record| record.meeting_id.as_ref() == Some(meeting_id))
            .cloned())
    }

    fn advance_by_meeting(
        &self,
        meeting_id: &MeetingId,
        score: u8,
        stage: PipelineStage,
        now: DateTime<Utc>,
    ) -> Result<ProspectRecord, StoreError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|_| StoreError::Unavailable("prospect store mutex poisoned".to_string()))?;
        let record = guard
            .values_mut()
            .find(|record| record.meeting_id.as_ref() == Some(meeting_id))
            .ok_or(StoreError::NotFound)?;

        record.qualification_score = Some(score);
        record.pipeline_stage = stage;
        record.last_activity_date = Some(now);

        Ok(record.clone())
    }
}

fn fixture_calls() -> Vec<CallRecord> {
    vec![
        CallRecord {
            call_id: CallId("call-1001".to_string()),
            meeting_id: Some(MeetingId("meet-8801".to_string())),
            transcript: None,
            analysis: None,
            qualification_score: None,
            analyzed_at: None,
        },
        CallRecord {
            call_id: CallId("call-1002".to_string()),
            meeting_id: Some(MeetingId("meet-8802".to_string())),
            transcript: None,
            analysis: None,
            qualification_score: None,
            analyzed_at: None,
        },
    ]
}

fn fixture_prospects() -> Vec<ProspectRecord> {
    vec![
        ProspectRecord {
            prospect_id: ProspectId("prospect-501".to_string()),
            email: "dana@brightline.example".to_string(),
            meeting_id: Some(MeetingId("meet-8801".to_string())),
            qualification_score: None,
            pipeline_stage: PipelineStage::New,
            last_activity_date: None,
        },
        ProspectRecord {
            prospect_id: ProspectId("prospect-502".to_string()),
            email: "miguel@fairwind.example".to_string(),
            meeting_id: Some(MeetingId("meet-8802".to_string())),
            qualification_score: None,
            pipeline_stage: PipelineStage::DiscoveryLinkSent,
            last_activity_date: None,
        },
    ]
}
