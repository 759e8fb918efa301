//! Embedding providers and vector similarity

use crate::error::{MatcherError, Result};
use model2vec_rs::model::StaticModel;
use std::path::Path;
use unicode_segmentation::UnicodeSegmentation;

/// External embedding capability: turns text into a fixed-length vector.
///
/// Implementations are process-wide shared state, initialized once at
/// startup and injected into the engine. They must tolerate concurrent
/// invocation from multiple in-flight analyses.
pub trait EmbeddingProvider: Send + Sync {
    fn embed(&self, text: &str) -> Result<Vec<f32>>;

    fn name(&self) -> &str;
}

/// Model2Vec static embedding model loaded from a local directory.
pub struct Model2VecEmbedder {
    model: StaticModel,
    name: String,
}

impl Model2VecEmbedder {
    pub fn load(model_path: &Path) -> Result<Self> {
        log::info!("Loading embedding model from {}", model_path.display());

        let model = StaticModel::from_pretrained(
            model_path,
            None, // token
            None, // normalize
            None, // subfolder
        )
        .map_err(|e| MatcherError::ModelLoading(format!("Failed to load model: {}", e)))?;

        Ok(Self {
            model,
            name: model_path.display().to_string(),
        })
    }
}

impl EmbeddingProvider for Model2VecEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let vector = self.model.encode_single(text);
        if vector.is_empty() {
            return Err(MatcherError::Embedding(
                "Model returned an empty vector".to_string(),
            ));
        }
        Ok(vector)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Deterministic bag-of-words provider hashing unigrams into a fixed
/// number of signed buckets. No model files, stable across runs; used
/// for tests and model-less operation. Not a silent fallback: it is an
/// explicit provider choice at engine construction.
pub struct HashingEmbedder {
    dimensions: usize,
}

impl HashingEmbedder {
    pub const DEFAULT_DIMENSIONS: usize = 256;

    /// Dimension 0 would make bucketing divide by zero, so the count is
    /// floored at 1.
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }
}

impl Default for HashingEmbedder {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DIMENSIONS)
    }
}

// FNV-1a, fixed here so vectors stay stable across releases.
fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in bytes {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

impl EmbeddingProvider for HashingEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let mut vector = vec![0.0_f32; self.dimensions];

        for word in text.unicode_words() {
            let token = word.to_lowercase();
            let hash = fnv1a(token.as_bytes());
            let bucket = (hash % self.dimensions as u64) as usize;
            let sign = if (hash >> 32) & 1 == 0 { 1.0 } else { -1.0 };
            vector[bucket] += sign;
        }

        Ok(vector)
    }

    fn name(&self) -> &str {
        "feature-hashing"
    }
}

/// Cosine similarity between two vectors of equal dimension. Zero-norm
/// input yields 0.0 rather than NaN.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        return Err(MatcherError::Embedding(format!(
            "Embedding dimensions don't match: {} vs {}",
            a.len(),
            b.len()
        )));
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        Ok(0.0)
    } else {
        Ok(dot_product / (norm_a * norm_b))
    }
}
