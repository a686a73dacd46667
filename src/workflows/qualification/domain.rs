use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for recorded sales calls.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CallId(pub String);

/// Identifier wrapper for prospect records in the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProspectId(pub String);

/// Scheduler meeting identifier correlating a call to the prospect who booked it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeetingId(pub String);

/// Pipeline stages a prospect moves through on the way to a discovery call.
///
/// Variant order is the pipeline order; transitions only ever move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    New,
    QualifiedForDiscovery,
    DiscoveryLinkSent,
    DiscoveryCompleted,
}

impl PipelineStage {
    pub const fn label(self) -> &'static str {
        match self {
            PipelineStage::New => "new",
            PipelineStage::QualifiedForDiscovery => "qualified_for_discovery",
            PipelineStage::DiscoveryLinkSent => "discovery_link_sent",
            PipelineStage::DiscoveryCompleted => "discovery_completed",
        }
    }
}

/// Named business problems inferred from transcript keywords.
///
/// Serialized as the human-readable label the dashboard displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PainPoint {
    #[serde(rename = "Cash flow management")]
    CashFlowManagement,
    #[serde(rename = "Team management")]
    TeamManagement,
    #[serde(rename = "Business systems")]
    BusinessSystems,
    #[serde(rename = "Scaling challenges")]
    ScalingChallenges,
}

impl PainPoint {
    pub const fn label(self) -> &'static str {
        match self {
            PainPoint::CashFlowManagement => "Cash flow management",
            PainPoint::TeamManagement => "Team management",
            PainPoint::BusinessSystems => "Business systems",
            PainPoint::ScalingChallenges => "Scaling challenges",
        }
    }
}

/// Mutually exclusive annual-revenue buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BusinessSizeBucket {
    #[serde(rename = "Under 500K")]
    UnderFiveHundredK,
    #[serde(rename = "500K-1M")]
    MidTier,
    #[serde(rename = "Multi-million")]
    MultiMillion,
}

impl BusinessSizeBucket {
    pub const fn label(self) -> &'static str {
        match self {
            BusinessSizeBucket::UnderFiveHundredK => "Under 500K",
            BusinessSizeBucket::MidTier => "500K-1M",
            BusinessSizeBucket::MultiMillion => "Multi-million",
        }
    }
}

/// Caller-supplied analysis request from the call-record ingress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub call_id: CallId,
    /// Absent transcripts are legal and score zero.
    pub transcript: Option<String>,
}

/// Derived analysis artifact persisted against the call record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallAnalysis {
    pub score: u8,
    pub pain_points: Vec<PainPoint>,
    pub business_size: BusinessSizeBucket,
    pub qualification_reasons: Vec<String>,
}

/// Call record shape owned by the external call store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallRecord {
    pub call_id: CallId,
    pub meeting_id: Option<MeetingId>,
    pub transcript: Option<String>,
    pub analysis: Option<CallAnalysis>,
    pub qualification_score: Option<u8>,
    pub analyzed_at: Option<DateTime<Utc>>,
}

/// Prospect record shape owned by the external prospect store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProspectRecord {
    pub prospect_id: ProspectId,
    pub email: String,
    pub meeting_id: Option<MeetingId>,
    pub qualification_score: Option<u8>,
    pub pipeline_stage: PipelineStage,
    pub last_activity_date: Option<DateTime<Utc>>,
}
