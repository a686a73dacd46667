//! Call-qualification workflow: transcript scoring, pain-point extraction,
//! business-size classification, and the pipeline-stage gate.
//!
//! The scoring core is a pure function pipeline; persistence lives behind the
//! [`repository`] traits so the engine can be exercised without any backend.

pub mod domain;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    AnalysisRequest, BusinessSizeBucket, CallAnalysis, CallId, CallRecord, MeetingId, PainPoint,
    PipelineStage, ProspectId, ProspectRecord,
};
pub use repository::{CallStore, MemoryCallStore, MemoryProspectStore, ProspectStore, StoreError};
pub use router::{qualification_router, AnalyzeResponse};
pub use scoring::{
    next_stage, ScoreComponent, ScoringConfig, ScoringEngine, SignalCategory, StageDecision,
    TranscriptEvaluation, MAX_SCORE, QUALIFICATION_THRESHOLD,
};
pub use service::{
    AnalysisReport, AnalysisServiceError, CallAnalysisService, StageUpdate,
};
