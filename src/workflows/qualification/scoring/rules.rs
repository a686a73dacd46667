use super::super::domain::{BusinessSizeBucket, PainPoint};
use super::config::ScoringConfig;
use super::{ScoreComponent, SignalCategory};

/// Sum the weighted keyword hits for an already-lowercased transcript.
///
/// The business-size category is a tier: only the most specific matching
/// signal contributes. Every other category is additive. The total is
/// clamped to `config.max_score` and can never go negative since all
/// weights are non-negative.
pub(crate) fn score_transcript(text: &str, config: &ScoringConfig) -> (Vec<ScoreComponent>, u8) {
    let mut components = Vec::new();
    let mut total: u32 = 0;

    if let Some(tier) = config
        .size_tiers
        .iter()
        .find(|signal| text.contains(signal.phrase.as_str()))
    {
        components.push(ScoreComponent {
            category: SignalCategory::BusinessSize,
            points: tier.points,
            notes: format!("revenue-scale signal \"{}\"", tier.phrase),
        });
        total += u32::from(tier.points);
    }

    for signal in &config.pain_signals {
        if text.contains(signal.phrase.as_str()) {
            components.push(ScoreComponent {
                category: SignalCategory::PainPoint,
                points: signal.points,
                notes: format!("pain-point signal \"{}\"", signal.phrase),
            });
            total += u32::from(signal.points);
        }
    }

    for signal in &config.growth_signals {
        if text.contains(signal.phrase.as_str()) {
            components.push(ScoreComponent {
                category: SignalCategory::Growth,
                points: signal.points,
                notes: format!("growth signal \"{}\"", signal.phrase),
            });
            total += u32::from(signal.points);
        }
    }

    for signal in &config.interest_signals {
        if text.contains(signal.phrase.as_str()) {
            components.push(ScoreComponent {
                category: SignalCategory::Interest,
                points: signal.points,
                notes: format!("interest signal \"{}\"", signal.phrase),
            });
            total += u32::from(signal.points);
        }
    }

    // Commitment phrases are spelling variants of each other; first hit wins.
    let commitment = config
        .commitment_signals
        .iter()
        .find(|signal| text.contains(signal.phrase.as_str()));
    if let Some(signal) = commitment {
        components.push(ScoreComponent {
            category: SignalCategory::Interest,
            points: signal.points,
            notes: format!("commitment signal \"{}\"", signal.phrase),
        });
        total += u32::from(signal.points);
    }

    // The bonus is tied to the word "interested" specifically, not to the
    // interest category as a whole.
    if text.contains("interested") && commitment.is_some() {
        components.push(ScoreComponent {
            category: SignalCategory::Interest,
            points: config.commitment_combo_bonus,
            notes: "interest and commitment co-occur".to_string(),
        });
        total += u32::from(config.commitment_combo_bonus);
    }

    let clamped = total.min(u32::from(config.max_score)) as u8;
    (components, clamped)
}

/// Independent keyword predicates; each contributes at most one label.
pub(crate) fn extract_pain_points(text: &str) -> Vec<PainPoint> {
    let mut pain_points = Vec::new();

    if text.contains("cash flow") {
        pain_points.push(PainPoint::CashFlowManagement);
    }
    if text.contains("team") && text.contains("manage") {
        pain_points.push(PainPoint::TeamManagement);
    }
    if text.contains("system") {
        pain_points.push(PainPoint::BusinessSystems);
    }
    if text.contains("scale") || text.contains("grow") {
        pain_points.push(PainPoint::ScalingChallenges);
    }

    pain_points
}

/// Priority-ordered decision list: the check order is the contract, most
/// specific revenue signal first, defaulting to the smallest bucket.
pub(crate) fn classify_business_size(text: &str) -> BusinessSizeBucket {
    if text.contains("million") {
        return BusinessSizeBucket::MultiMillion;
    }
    if text.contains("750k") || text.contains("500k") {
        return BusinessSizeBucket::MidTier;
    }
    BusinessSizeBucket::UnderFiveHundredK
}

/// Summary reasons surfaced to the dashboard once a call qualifies.
pub(crate) fn qualification_reasons(score: u8, config: &ScoringConfig) -> Vec<String> {
    if score < config.qualification_threshold {
        return Vec::new();
    }

    vec![
        "Strong business challenges identified".to_string(),
        "Appropriate business size".to_string(),
        "Expressed interest in solutions".to_string(),
    ]
}
