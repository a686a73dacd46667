use super::super::domain::PipelineStage;
use serde::{Deserialize, Serialize};

/// Outcome of applying the qualification gate to a prospect's current stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StageDecision {
    /// Move the prospect to the given stage and refresh its last-activity
    /// timestamp.
    Advance(PipelineStage),
    /// Leave the prospect where it is.
    Hold,
}

/// The single boolean gate of the pipeline: a score at or above the
/// threshold advances any prospect still ahead of
/// [`PipelineStage::QualifiedForDiscovery`]. Stages never move backwards, so
/// a prospect already at or past discovery qualification is held regardless
/// of score.
pub fn next_stage(current: PipelineStage, score: u8, threshold: u8) -> StageDecision {
    if score >= threshold && current < PipelineStage::QualifiedForDiscovery {
        StageDecision::Advance(PipelineStage::QualifiedForDiscovery)
    } else {
        StageDecision::Hold
    }
}
