//! Skill extraction and matching against the shared taxonomy

use crate::analysis::round_score;
use crate::taxonomy::SkillTaxonomy;

/// Matches taxonomy patterns against normalized text and reports
/// canonical skill labels.
pub struct SkillExtractor<'a> {
    taxonomy: &'a SkillTaxonomy,
}

/// Skill comparison between a resume and a job description.
#[derive(Debug, Clone)]
pub struct SkillMatchReport {
    /// Required skills present in the resume, discovery order.
    pub matched: Vec<String>,
    /// Required skills absent from the resume, discovery order.
    pub missing: Vec<String>,
    /// Coverage score in [0, 100].
    pub score: f32,
}

impl<'a> SkillExtractor<'a> {
    pub fn new(taxonomy: &'a SkillTaxonomy) -> Self {
        Self { taxonomy }
    }

    /// Canonical labels found in the text, deduplicated, in taxonomy
    /// order. No frequency counting: a skill is either present or not.
    pub fn extract(&self, normalized_text: &str) -> Vec<String> {
        let mut found = Vec::new();

        for category in self.taxonomy.categories() {
            for pattern in &category.patterns {
                if pattern.regex.is_match(normalized_text) && !found.contains(&pattern.label) {
                    found.push(pattern.label.clone());
                }
            }
        }

        found
    }

    /// Compare candidate skills (resume) against required skills (job).
    /// An empty required set scores 100: a job that states no skill
    /// requirements cannot penalize the candidate.
    pub fn match_skills(&self, resume_normalized: &str, job_normalized: &str) -> SkillMatchReport {
        let candidate = self.extract(resume_normalized);
        let required = self.extract(job_normalized);

        let (matched, missing): (Vec<String>, Vec<String>) = required
            .iter()
            .cloned()
            .partition(|skill| candidate.contains(skill));

        let score = if required.is_empty() {
            100.0
        } else {
            round_score(100.0 * matched.len() as f32 / required.len() as f32)
        };

        SkillMatchReport {
            matched,
            missing,
            score,
        }
    }
}
