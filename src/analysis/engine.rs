//! Match orchestration: validate, normalize, extract, combine, explain

use crate::analysis::combine::WeightedScoreCombiner;
use crate::analysis::content::ContentQualityAnalyzer;
use crate::analysis::education::EducationAnalyzer;
use crate::analysis::experience::ExperienceAnalyzer;
use crate::analysis::explain::ExplanationGenerator;
use crate::analysis::result::AnalysisResult;
use crate::analysis::semantic::SemanticScorer;
use crate::analysis::skills::SkillExtractor;
use crate::config::MatcherConfig;
use crate::embedding::EmbeddingProvider;
use crate::error::Result;
use crate::error::MatcherError;
use crate::taxonomy::SkillTaxonomy;
use crate::text::{self, DocumentText, StuffingGuard};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

/// Coordinates the analysis pipeline for one resume/job pair.
///
/// The engine holds only read-only state (taxonomy, analyzers, config)
/// plus the shared embedding provider handle, so one instance can serve
/// concurrent analyses; every request builds its own intermediate
/// values and the result is discarded once returned.
pub struct MatchEngine {
    taxonomy: Arc<SkillTaxonomy>,
    embedder: Arc<dyn EmbeddingProvider>,
    stuffing: StuffingGuard,
    experience: ExperienceAnalyzer,
    education: EducationAnalyzer,
    content: ContentQualityAnalyzer,
    explainer: ExplanationGenerator,
    config: MatcherConfig,
}

impl MatchEngine {
    pub fn new(config: MatcherConfig, embedder: Arc<dyn EmbeddingProvider>) -> Result<Self> {
        let taxonomy = Arc::new(SkillTaxonomy::builtin()?);
        Self::with_taxonomy(config, embedder, taxonomy)
    }

    pub fn with_taxonomy(
        config: MatcherConfig,
        embedder: Arc<dyn EmbeddingProvider>,
        taxonomy: Arc<SkillTaxonomy>,
    ) -> Result<Self> {
        let explainer = ExplanationGenerator::new(
            config.limits.skill_recommendation_limit,
            config.limits.low_category_threshold,
        );

        Ok(Self {
            taxonomy,
            embedder,
            stuffing: StuffingGuard::new(),
            experience: ExperienceAnalyzer::new(),
            education: EducationAnalyzer::new(),
            content: ContentQualityAnalyzer::new(),
            explainer,
            config,
        })
    }

    pub fn taxonomy(&self) -> &SkillTaxonomy {
        &self.taxonomy
    }

    /// Run the full pipeline. Validation failures and embedding
    /// failures reject the request atomically; no partial result is
    /// ever returned.
    pub fn analyze(&self, resume_text: &str, job_description: &str) -> Result<AnalysisResult> {
        let start = Instant::now();

        // Validate
        let limits = &self.config.limits;
        text::validate_length(resume_text, limits.min_text_chars, limits.max_text_chars)?;
        text::validate_length(job_description, limits.min_text_chars, limits.max_text_chars)?;

        // Normalize
        let resume = DocumentText::new(resume_text);
        let job = DocumentText::new(job_description);

        // A stuffed resume would game the repetition-sensitive
        // dimensions, so it is rejected rather than scored. Only the
        // resume is guarded; a repetitive posting hurts nobody.
        if self.stuffing.is_stuffed(resume.normalized()) {
            return Err(MatcherError::Validation(
                "Resume appears to be spam or artificially generated".to_string(),
            ));
        }

        // Extract: the sub-analyses are mutually independent and share
        // only the immutable inputs.
        let semantic_score = SemanticScorer::new(self.embedder.as_ref()).score(&resume, &job)?;
        let skill_report =
            SkillExtractor::new(&self.taxonomy).match_skills(resume.normalized(), job.normalized());
        let experience_score = self.experience.score(resume.normalized(), job.normalized());
        let education_score = self.education.score(resume.normalized(), job.normalized());
        let resume_insights = self.content.analyze(&resume);

        // Combine
        let breakdown = BTreeMap::from([
            ("semantic".to_string(), semantic_score),
            ("skills".to_string(), skill_report.score),
            ("experience".to_string(), experience_score),
            ("education".to_string(), education_score),
        ]);
        let combined =
            WeightedScoreCombiner::combine(&breakdown, &self.config.scoring.as_weight_map())?;

        // Explain
        let explanation = self
            .explainer
            .explanation(combined.overall, &combined.breakdown);
        let recommendations = self.explainer.recommendations(
            combined.overall,
            &combined.breakdown,
            &combined.weights,
            &skill_report.missing,
        );

        log::info!(
            "Analyzed resume ({} chars) against job ({} chars): score {:.1} in {:?}",
            resume_text.len(),
            job_description.len(),
            combined.overall,
            start.elapsed()
        );

        Ok(AnalysisResult {
            overall_score: combined.overall,
            breakdown: combined.breakdown,
            weights: combined.weights,
            matched_skills: skill_report.matched,
            missing_skills: skill_report.missing,
            explanation,
            recommendations,
            resume_insights,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::HashingEmbedder;
    use crate::error::MatcherError;

    fn engine() -> MatchEngine {
        MatchEngine::new(
            MatcherConfig::default(),
            Arc::new(HashingEmbedder::default()),
        )
        .unwrap()
    }

    const RESUME: &str = "Backend developer with 5 years of experience building web \
                          services in python and django on postgresql. Bachelor's degree \
                          in computer science. Skills: python, django, postgresql.";
    const JOB: &str = "Looking for a backend engineer with python, django, postgresql, \
                       aws and kubernetes experience. Minimum of 3 years required. \
                       Bachelor's degree preferred.";

    #[test]
    fn short_resume_is_rejected_atomically() {
        let err = engine().analyze("too short", JOB).unwrap_err();
        assert!(matches!(err, MatcherError::Validation(_)));
        assert_eq!(err.to_string(), "Text must be at least 10 characters long");
    }

    #[test]
    fn short_job_is_rejected_atomically() {
        let err = engine().analyze(RESUME, "short").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn stuffed_resume_is_rejected_before_scoring() {
        let stuffed = ["python"; 30].join(" ");
        let err = engine().analyze(&stuffed, JOB).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Resume appears to be spam or artificially generated"
        );
    }

    #[test]
    fn repetitive_job_description_is_still_analyzed() {
        let repetitive_job = ["python"; 30].join(" ");
        let result = engine().analyze(RESUME, &repetitive_job).unwrap();
        assert!((0.0..=100.0).contains(&result.overall_score));
    }

    #[test]
    fn embedding_failure_fails_the_whole_analysis() {
        struct Offline;
        impl EmbeddingProvider for Offline {
            fn embed(&self, _text: &str) -> Result<Vec<f32>> {
                Err(MatcherError::Embedding("connection refused".to_string()))
            }
            fn name(&self) -> &str {
                "offline"
            }
        }

        let engine = MatchEngine::new(MatcherConfig::default(), Arc::new(Offline)).unwrap();
        let err = engine.analyze(RESUME, JOB).unwrap_err();
        assert!(matches!(err, MatcherError::Embedding(_)));
    }

    #[test]
    fn full_pipeline_produces_consistent_result() {
        let result = engine().analyze(RESUME, JOB).unwrap();

        assert!((0.0..=100.0).contains(&result.overall_score));
        for score in result.breakdown.values() {
            assert!((0.0..=100.0).contains(score));
        }

        assert_eq!(
            result.matched_skills,
            vec!["python", "django", "postgresql"]
        );
        assert_eq!(result.missing_skills, vec!["aws", "kubernetes"]);
        assert_eq!(result.breakdown["skills"], 60.0);
        assert_eq!(result.breakdown["experience"], 100.0);
        assert_eq!(result.breakdown["education"], 100.0);

        let weight_sum: f32 = result.weights.values().sum();
        assert!((weight_sum - 1.0).abs() < 1e-6);

        assert!(!result.explanation.is_empty());
        assert!(!result.recommendations.is_empty());
        assert!(result.resume_insights.word_count > 0);
    }

    #[test]
    fn engine_is_shareable_across_threads() {
        let engine = Arc::new(engine());
        let mut handles = Vec::new();

        for _ in 0..4 {
            let engine = Arc::clone(&engine);
            handles.push(std::thread::spawn(move || {
                engine.analyze(RESUME, JOB).unwrap().overall_score
            }));
        }

        let scores: Vec<f32> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(scores.windows(2).all(|pair| pair[0] == pair[1]));
    }
}
