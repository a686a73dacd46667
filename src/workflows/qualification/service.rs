use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::domain::{AnalysisRequest, CallId, MeetingId, PipelineStage, ProspectId};
use super::repository::{CallStore, ProspectStore, StoreError};
use super::scoring::{next_stage, ScoringEngine, StageDecision, TranscriptEvaluation};

/// Service composing the scoring engine with the call and prospect stores.
///
/// Scoring itself cannot fail; the only hard error is a malformed request.
/// Everything the stores do afterwards is best-effort and reported through
/// [`StageUpdate`] rather than the error channel.
pub struct CallAnalysisService<C, P> {
    engine: Arc<ScoringEngine>,
    calls: Arc<C>,
    prospects: Arc<P>,
}

impl<C, P> CallAnalysisService<C, P>
where
    C: CallStore + 'static,
    P: ProspectStore + 'static,
{
    pub fn new(engine: ScoringEngine, calls: Arc<C>, prospects: Arc<P>) -> Self {
        Self {
            engine: Arc::new(engine),
            calls,
            prospects,
        }
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    /// Analyze a call transcript and apply the qualification gate.
    pub fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisReport, AnalysisServiceError> {
        self.analyze_at(request, Utc::now())
    }

    /// Like [`analyze`](Self::analyze) with an explicit clock, so tests can
    /// assert the stamped timestamps.
    pub fn analyze_at(
        &self,
        request: AnalysisRequest,
        now: DateTime<Utc>,
    ) -> Result<AnalysisReport, AnalysisServiceError> {
        if request.call_id.0.trim().is_empty() {
            return Err(AnalysisServiceError::MissingCallId);
        }

        let evaluation = self.engine.evaluate(request.transcript.as_deref());
        let score = evaluation.analysis.score;
        let qualified = self.engine.is_qualified(score);

        let (call_persisted, meeting_id) = match self.calls.record_analysis(
            &request.call_id,
            request.transcript.as_deref(),
            &evaluation.analysis,
            now,
        ) {
            Ok(record) => (true, record.meeting_id),
            Err(err) => {
                warn!(call_id = %request.call_id.0, error = %err, "call store update failed");
                (false, None)
            }
        };

        let stage_update = if !qualified {
            StageUpdate::BelowThreshold
        } else if !call_persisted {
            // Without the stored call record there is no meeting id to
            // correlate the prospect through.
            StageUpdate::Failed {
                reason: "call store update failed; prospect correlation unavailable".to_string(),
            }
        } else {
            self.advance_prospect(&request.call_id, meeting_id.as_ref(), score, now)
        };

        Ok(AnalysisReport {
            call_id: request.call_id,
            evaluation,
            qualified,
            call_persisted,
            stage_update,
        })
    }

    /// Fetch a stored call for API responses.
    pub fn call(&self, call_id: &CallId) -> Result<Option<super::domain::CallRecord>, StoreError> {
        self.calls.fetch(call_id)
    }

    fn advance_prospect(
        &self,
        call_id: &CallId,
        meeting_id: Option<&MeetingId>,
        score: u8,
        now: DateTime<Utc>,
    ) -> StageUpdate {
        let Some(meeting_id) = meeting_id else {
            return StageUpdate::NoProspectMatch;
        };

        let prospect = match self.prospects.fetch_by_meeting(meeting_id) {
            Ok(Some(prospect)) => prospect,
            Ok(None) => return StageUpdate::NoProspectMatch,
            Err(err) => {
                warn!(call_id = %call_id.0, error = %err, "prospect lookup failed");
                return StageUpdate::Failed {
                    reason: err.to_string(),
                };
            }
        };

        match next_stage(
            prospect.pipeline_stage,
            score,
            self.engine.config().qualification_threshold,
        ) {
            StageDecision::Hold => StageUpdate::AlreadyAdvanced {
                stage: prospect.pipeline_stage,
            },
            StageDecision::Advance(stage) => {
                match self
                    .prospects
                    .advance_by_meeting(meeting_id, score, stage, now)
                {
                    Ok(updated) => StageUpdate::Advanced {
                        prospect_id: updated.prospect_id,
                        stage,
                        at: now,
                    },
                    Err(err) => {
                        warn!(call_id = %call_id.0, error = %err, "pipeline stage update failed");
                        StageUpdate::Failed {
                            reason: err.to_string(),
                        }
                    }
                }
            }
        }
    }
}

/// Secondary-effect outcome of an analysis, reported alongside the primary
/// scoring result instead of being swallowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StageUpdate {
    /// The prospect advanced to the given stage at the stamped time.
    Advanced {
        prospect_id: ProspectId,
        stage: PipelineStage,
        at: DateTime<Utc>,
    },
    /// Score did not clear the qualification threshold.
    BelowThreshold,
    /// The prospect is already at or past discovery qualification.
    AlreadyAdvanced { stage: PipelineStage },
    /// No prospect correlates to the call's meeting id.
    NoProspectMatch,
    /// A store failed; the analysis result above is still authoritative.
    Failed { reason: String },
}

/// Full result of one analysis invocation.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub call_id: CallId,
    pub evaluation: TranscriptEvaluation,
    pub qualified: bool,
    pub call_persisted: bool,
    pub stage_update: StageUpdate,
}

/// Error raised by the analysis service before scoring runs.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisServiceError {
    #[error("call_id must not be blank")]
    MissingCallId,
}
