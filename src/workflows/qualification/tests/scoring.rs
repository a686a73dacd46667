use super::common::*;
use crate::workflows::qualification::domain::BusinessSizeBucket;
use crate::workflows::qualification::scoring::{SignalCategory, MAX_SCORE};

#[test]
fn evaluation_is_deterministic() {
    let engine = engine();
    let transcript = qualified_transcript();

    let first = engine.evaluate(Some(&transcript));
    let second = engine.evaluate(Some(&transcript));

    assert_eq!(first, second);
}

#[test]
fn absent_and_blank_transcripts_score_zero() {
    let engine = engine();

    for transcript in [None, Some(""), Some("   \n\t  ")] {
        let evaluation = engine.evaluate(transcript);
        assert_eq!(evaluation.analysis.score, 0);
        assert!(evaluation.analysis.pain_points.is_empty());
        assert_eq!(
            evaluation.analysis.business_size,
            BusinessSizeBucket::UnderFiveHundredK
        );
        assert!(evaluation.analysis.qualification_reasons.is_empty());
        assert!(evaluation.components.is_empty());
        assert!(!engine.is_qualified(evaluation.analysis.score));
    }
}

#[test]
fn score_is_clamped_to_fifty() {
    let engine = engine();
    let everything = "revenue million 750k 500k cash flow team challenge problem system \
                      process growth scaling interested help working together";

    assert_eq!(engine.score(Some(everything)), MAX_SCORE);

    // Adversarial repetition: substring matching fires each signal once.
    let huge = everything.repeat(10_000);
    assert_eq!(engine.score(Some(&huge)), MAX_SCORE);
}

#[test]
fn matching_is_case_insensitive() {
    let engine = engine();
    let transcript = qualified_transcript();

    assert_eq!(
        engine.score(Some(&transcript.to_uppercase())),
        engine.score(Some(&transcript))
    );
}

#[test]
fn adding_any_signal_never_decreases_the_score() {
    let engine = engine();
    let neutral = "hello there, thanks for taking the time today";
    let baseline = engine.score(Some(neutral));

    let config = engine.config().clone();
    let all_signals = config
        .size_tiers
        .iter()
        .chain(&config.pain_signals)
        .chain(&config.growth_signals)
        .chain(&config.interest_signals)
        .chain(&config.commitment_signals);

    for signal in all_signals {
        let augmented = format!("{neutral} {}", signal.phrase);
        assert!(
            engine.score(Some(&augmented)) >= baseline,
            "adding \"{}\" lowered the score",
            signal.phrase
        );
    }
}

#[test]
fn business_size_tiers_do_not_stack() {
    let engine = engine();

    let million_only = engine.score(Some("million"));
    let million_and_revenue = engine.score(Some("million revenue"));

    assert_eq!(million_only, million_and_revenue);
}

#[test]
fn qualified_mirrors_threshold() {
    let engine = engine();

    let borderline = engine.score(Some(&borderline_transcript()));
    assert_eq!(borderline, 34);
    assert!(!engine.is_qualified(borderline));

    let qualified = engine.score(Some(&qualified_transcript()));
    assert_eq!(qualified, 35);
    assert!(engine.is_qualified(qualified));
}

#[test]
fn scores_denials_like_affirmations() {
    // Known limitation of the heuristic: no negation handling. A denial
    // containing "interested" scores the same as the affirmation.
    let engine = engine();

    let affirmation = engine.score(Some("we are interested and could use some help"));
    let denial = engine.score(Some("we are not interested and do not need help"));

    assert_eq!(affirmation, denial);
}

#[test]
fn commitment_bonus_requires_both_phrases() {
    let engine = engine();

    let interest_only = engine.score(Some("we are interested"));
    let commitment_only = engine.score(Some("we could see ourselves working together"));
    let both = engine.score(Some("we are interested in working together"));

    assert_eq!(interest_only, 6);
    assert_eq!(commitment_only, 6);
    assert_eq!(both, 6 + 6 + 5);
}

#[test]
fn multi_million_scenario_qualifies() {
    let engine = engine();
    let evaluation = engine.evaluate(Some(&qualified_transcript()));

    assert!(evaluation.analysis.score >= 35);
    assert!(engine.is_qualified(evaluation.analysis.score));
    assert_eq!(
        evaluation.analysis.business_size,
        BusinessSizeBucket::MultiMillion
    );
    assert_eq!(evaluation.analysis.qualification_reasons.len(), 3);
    assert!(evaluation
        .components
        .iter()
        .any(|component| component.category == SignalCategory::BusinessSize));
}

#[test]
fn mid_tier_scenario_lands_in_the_high_thirties() {
    let engine = engine();
    let evaluation = engine.evaluate(Some(&mid_tier_transcript()));

    assert!((35..=44).contains(&evaluation.analysis.score));
    assert!(engine.is_qualified(evaluation.analysis.score));
    assert_eq!(evaluation.analysis.business_size, BusinessSizeBucket::MidTier);
}

#[test]
fn reasons_are_empty_below_threshold() {
    let engine = engine();
    let evaluation = engine.evaluate(Some(&borderline_transcript()));

    assert!(evaluation.analysis.qualification_reasons.is_empty());
    assert!(!evaluation.components.is_empty());
}
