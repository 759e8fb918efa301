//! Wire-contract result types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Complete outcome of one resume/job analysis. Field names and shapes
/// are the wire contract consumed by the boundary layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Combined score in [0, 100].
    pub overall_score: f32,

    /// Per-category scores in [0, 100]: `semantic`, `skills`,
    /// `experience`, `education`.
    pub breakdown: BTreeMap<String, f32>,

    /// Normalized weights actually used in combination; mirrors the
    /// breakdown keys and sums to 1.0.
    pub weights: BTreeMap<String, f32>,

    /// Required skills found in the resume, discovery order.
    pub matched_skills: Vec<String>,

    /// Required skills absent from the resume, discovery order.
    /// Disjoint from `matched_skills`; their union is the job's
    /// required-skill set.
    pub missing_skills: Vec<String>,

    pub explanation: String,

    /// Ordered, clean action statements. No markup or emoji.
    pub recommendations: Vec<String>,

    pub resume_insights: ResumeInsights,
}

/// Descriptive resume-only metrics; informational, not part of the
/// weighted score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeInsights {
    pub word_count: usize,

    /// Percentage in [0, 100] from detected resume sections.
    pub estimated_completeness: f32,

    /// Information-density measure in [0, 1].
    pub content_depth: f32,
}
