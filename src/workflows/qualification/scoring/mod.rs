mod config;
mod rules;
mod stage;

pub use config::{ScoringConfig, SignalWeight, MAX_SCORE, QUALIFICATION_THRESHOLD};
pub use stage::{next_stage, StageDecision};

use super::domain::{BusinessSizeBucket, CallAnalysis};
use serde::{Deserialize, Serialize};

/// Stateless evaluator applying the weight table to a transcript.
///
/// All methods are pure: the same transcript always yields the same
/// evaluation, and nothing here touches ambient state.
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Run the full analysis: score, pain points, business size, reasons.
    ///
    /// Absent or blank transcripts are not errors; they yield a zero score,
    /// no pain points, and the default size bucket.
    pub fn evaluate(&self, transcript: Option<&str>) -> TranscriptEvaluation {
        let text = transcript.unwrap_or_default();
        if text.trim().is_empty() {
            return TranscriptEvaluation {
                analysis: CallAnalysis {
                    score: 0,
                    pain_points: Vec::new(),
                    business_size: BusinessSizeBucket::UnderFiveHundredK,
                    qualification_reasons: Vec::new(),
                },
                components: Vec::new(),
            };
        }

        let lowered = text.to_lowercase();
        let (components, score) = rules::score_transcript(&lowered, &self.config);

        TranscriptEvaluation {
            analysis: CallAnalysis {
                score,
                pain_points: rules::extract_pain_points(&lowered),
                business_size: rules::classify_business_size(&lowered),
                qualification_reasons: rules::qualification_reasons(score, &self.config),
            },
            components,
        }
    }

    /// Convenience wrapper when only the score matters.
    pub fn score(&self, transcript: Option<&str>) -> u8 {
        self.evaluate(transcript).analysis.score
    }

    pub fn is_qualified(&self, score: u8) -> bool {
        score >= self.config.qualification_threshold
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(ScoringConfig::standard())
    }
}

/// Signal categories, so individual contributions stay auditable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalCategory {
    BusinessSize,
    PainPoint,
    Growth,
    Interest,
}

/// Discrete contribution to a score, allowing transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub category: SignalCategory,
    pub points: u8,
    pub notes: String,
}

/// Evaluation output pairing the persisted analysis with its score trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptEvaluation {
    pub analysis: CallAnalysis,
    pub components: Vec<ScoreComponent>,
}
