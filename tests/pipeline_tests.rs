//! End-to-end pipeline tests using the deterministic hashing embedder

use resume_matcher::embedding::HashingEmbedder;
use resume_matcher::{MatchEngine, MatcherConfig, MatcherError};
use std::sync::Arc;

const RESUME: &str = "Senior backend developer with 5 years of experience designing \
                      web services in python and django, backed by postgresql. Led a \
                      migration that cut query latency by 40%. Bachelor's degree in \
                      computer science.\n\nSkills: python, django, postgresql, git.";

const JOB: &str = "We are hiring a backend engineer. Requirements: python, django, \
                   postgresql, aws and kubernetes. Minimum of 3 years of experience. \
                   Bachelor's degree preferred.";

fn engine() -> MatchEngine {
    MatchEngine::new(
        MatcherConfig::default(),
        Arc::new(HashingEmbedder::default()),
    )
    .unwrap()
}

#[test]
fn scores_and_skill_lists_follow_the_job_requirements() {
    let result = engine().analyze(RESUME, JOB).unwrap();

    assert!((0.0..=100.0).contains(&result.overall_score));
    for (category, score) in &result.breakdown {
        assert!(
            (0.0..=100.0).contains(score),
            "{} out of range: {}",
            category,
            score
        );
    }

    // 3 of 5 required skills present, in taxonomy discovery order.
    assert_eq!(result.matched_skills, vec!["python", "django", "postgresql"]);
    assert_eq!(result.missing_skills, vec!["aws", "kubernetes"]);
    assert_eq!(result.breakdown["skills"], 60.0);

    // 5 years offered against a 3 year minimum.
    assert_eq!(result.breakdown["experience"], 100.0);
    // Bachelor's offered, bachelor's asked.
    assert_eq!(result.breakdown["education"], 100.0);
}

#[test]
fn matched_and_missing_partition_the_required_skills() {
    let result = engine().analyze(RESUME, JOB).unwrap();

    for skill in &result.matched_skills {
        assert!(
            !result.missing_skills.contains(skill),
            "{} appears in both lists",
            skill
        );
    }
    assert_eq!(
        result.matched_skills.len() + result.missing_skills.len(),
        5
    );
}

#[test]
fn weights_are_normalized_and_cover_the_breakdown() {
    let result = engine().analyze(RESUME, JOB).unwrap();

    let total: f32 = result.weights.values().sum();
    assert!((total - 1.0).abs() < 1e-6);

    for category in result.breakdown.keys() {
        assert!(result.weights.contains_key(category));
    }
}

#[test]
fn repeated_analysis_is_byte_identical() {
    let engine = engine();
    let first = serde_json::to_string(&engine.analyze(RESUME, JOB).unwrap()).unwrap();

    for _ in 0..3 {
        let again = serde_json::to_string(&engine.analyze(RESUME, JOB).unwrap()).unwrap();
        assert_eq!(first, again);
    }
}

#[test]
fn identical_documents_score_full_semantic_similarity() {
    let result = engine().analyze(RESUME, RESUME).unwrap();
    assert_eq!(result.breakdown["semantic"], 100.0);
}

#[test]
fn undersized_input_is_rejected_with_the_contract_message() {
    let err = engine().analyze("too short", JOB).unwrap_err();
    assert!(matches!(err, MatcherError::Validation(_)));
    assert_eq!(err.to_string(), "Text must be at least 10 characters long");

    let err = engine().analyze(RESUME, "   \n  ").unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn keyword_stuffed_resume_is_rejected() {
    let stuffed = ["python"; 30].join(" ");
    let err = engine().analyze(&stuffed, JOB).unwrap_err();
    assert!(err.is_validation());
    assert_eq!(
        err.to_string(),
        "Resume appears to be spam or artificially generated"
    );

    // A genuine resume mentioning the same skill a few times passes.
    assert!(engine().analyze(RESUME, JOB).is_ok());
}

#[test]
fn oversized_input_is_rejected() {
    let oversized = "a".repeat(50_001);
    let err = engine().analyze(&oversized, JOB).unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn imperfect_match_always_gets_recommendations() {
    let result = engine().analyze(RESUME, JOB).unwrap();

    assert!(result.overall_score < 100.0);
    assert!(!result.recommendations.is_empty());
    assert!(!result.explanation.is_empty());

    // Missing skills drive the leading recommendations.
    assert!(result.recommendations[0].contains("aws"));

    for rec in &result.recommendations {
        let first = rec.chars().next().unwrap();
        assert!(first.is_alphanumeric(), "markup in recommendation: {}", rec);
    }
}

#[test]
fn resume_insights_reflect_the_document() {
    let result = engine().analyze(RESUME, JOB).unwrap();
    let insights = &result.resume_insights;

    assert_eq!(insights.word_count, RESUME.split_whitespace().count());
    assert!((0.0..=100.0).contains(&insights.estimated_completeness));
    assert!((0.0..=1.0).contains(&insights.content_depth));

    // Experience, education and skills cues are present; no contact details.
    assert_eq!(insights.estimated_completeness, 75.0);
}

#[test]
fn result_serializes_with_the_full_wire_shape() {
    let result = engine().analyze(RESUME, JOB).unwrap();
    let value: serde_json::Value = serde_json::to_value(&result).unwrap();

    for field in [
        "overall_score",
        "breakdown",
        "weights",
        "matched_skills",
        "missing_skills",
        "explanation",
        "recommendations",
        "resume_insights",
    ] {
        assert!(value.get(field).is_some(), "missing field {}", field);
    }

    let insights = &value["resume_insights"];
    for field in ["word_count", "estimated_completeness", "content_depth"] {
        assert!(insights.get(field).is_some(), "missing insight {}", field);
    }
}
