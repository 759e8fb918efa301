//! Semantic similarity scoring via an embedding provider

use crate::analysis::round_score;
use crate::embedding::{cosine_similarity, EmbeddingProvider};
use crate::error::Result;
use crate::text::DocumentText;

/// Scores how semantically close the resume is to the job description.
/// Each text is embedded exactly once per request.
pub struct SemanticScorer<'a> {
    provider: &'a dyn EmbeddingProvider,
}

impl<'a> SemanticScorer<'a> {
    pub fn new(provider: &'a dyn EmbeddingProvider) -> Self {
        Self { provider }
    }

    /// Cosine similarity mapped to [0, 100] by `clamp(cos, 0, 1) * 100`.
    /// The mapping is linear and monotonic and must stay stable across
    /// releases; changing it would silently rescore historical results.
    ///
    /// A provider failure propagates: a partially-weighted overall score
    /// without semantic input would misrepresent the weighting contract.
    pub fn score(&self, resume: &DocumentText, job: &DocumentText) -> Result<f32> {
        let resume_vector = self.provider.embed(resume.normalized())?;
        let job_vector = self.provider.embed(job.normalized())?;

        let similarity = cosine_similarity(&resume_vector, &job_vector)?;
        Ok(round_score(similarity.clamp(0.0, 1.0) * 100.0))
    }
}
