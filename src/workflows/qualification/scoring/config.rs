use serde::{Deserialize, Serialize};

/// Score a transcript must reach before the prospect advances to discovery.
pub const QUALIFICATION_THRESHOLD: u8 = 35;

/// Upper bound on any qualification score.
pub const MAX_SCORE: u8 = 50;

/// A single keyword signal and the points it contributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalWeight {
    pub phrase: String,
    pub points: u8,
}

impl SignalWeight {
    fn new(phrase: &str, points: u8) -> Self {
        Self {
            phrase: phrase.to_string(),
            points,
        }
    }
}

/// Weight table backing the transcript scorer.
///
/// The historical handlers shipped several conflicting tables; this is the
/// canonical one (see DESIGN.md). Matching is case-insensitive substring
/// search with no negation handling: "not interested" scores the same as
/// "interested". That is a documented limitation of the heuristic, kept
/// deliberately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Revenue-scale tiers, ordered most specific first. Only the first
    /// matching tier contributes; tiers never stack.
    pub size_tiers: Vec<SignalWeight>,
    /// Pain-point signals, additive.
    pub pain_signals: Vec<SignalWeight>,
    /// Growth and scaling language, additive.
    pub growth_signals: Vec<SignalWeight>,
    /// Interest language, additive.
    pub interest_signals: Vec<SignalWeight>,
    /// Commitment phrasing. Variants of the same phrase, so only the first
    /// match contributes.
    pub commitment_signals: Vec<SignalWeight>,
    /// Extra points when "interested" co-occurs with a commitment phrase.
    pub commitment_combo_bonus: u8,
    pub qualification_threshold: u8,
    pub max_score: u8,
}

impl ScoringConfig {
    /// The canonical production weight table.
    pub fn standard() -> Self {
        Self {
            size_tiers: vec![
                SignalWeight::new("million", 12),
                SignalWeight::new("750k", 10),
                SignalWeight::new("500k", 8),
                SignalWeight::new("revenue", 6),
            ],
            pain_signals: vec![
                SignalWeight::new("cash flow", 8),
                SignalWeight::new("team", 8),
                SignalWeight::new("challenge", 6),
                SignalWeight::new("problem", 6),
                SignalWeight::new("system", 5),
                SignalWeight::new("process", 5),
            ],
            growth_signals: vec![
                SignalWeight::new("growth", 7),
                SignalWeight::new("scaling", 7),
            ],
            interest_signals: vec![
                SignalWeight::new("interested", 6),
                SignalWeight::new("help", 4),
            ],
            commitment_signals: vec![
                SignalWeight::new("working together", 6),
                SignalWeight::new("work together", 6),
            ],
            commitment_combo_bonus: 5,
            qualification_threshold: QUALIFICATION_THRESHOLD,
            max_score: MAX_SCORE,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::standard()
    }
}
