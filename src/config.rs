//! Configuration management for the resume matcher

use crate::error::{MatcherError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatcherConfig {
    pub model: ModelConfig,
    pub scoring: ScoringConfig,
    pub limits: LimitsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub models_dir: PathBuf,
    pub embedding_model: String,
}

/// Relative importance of each breakdown category. The combiner
/// re-normalizes whatever subset is supplied, so the values need not
/// sum to exactly 1.0 (the defaults do).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub semantic_weight: f32,
    pub skills_weight: f32,
    pub experience_weight: f32,
    pub education_weight: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    pub min_text_chars: usize,
    pub max_text_chars: usize,
    /// Cap on per-missing-skill recommendations.
    pub skill_recommendation_limit: usize,
    /// Categories scoring below this trigger a recommendation.
    pub low_category_threshold: f32,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        let models_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".resume-matcher")
            .join("models");

        Self {
            model: ModelConfig {
                models_dir,
                embedding_model: "minishlab/M2V_base_output".to_string(),
            },
            scoring: ScoringConfig {
                semantic_weight: 0.30,
                skills_weight: 0.35,
                experience_weight: 0.20,
                education_weight: 0.15,
            },
            limits: LimitsConfig {
                min_text_chars: 10,
                max_text_chars: 50_000,
                skill_recommendation_limit: 5,
                low_category_threshold: 60.0,
            },
        }
    }
}

impl MatcherConfig {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: MatcherConfig = toml::from_str(&content).map_err(|e| {
                MatcherError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            MatcherError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-matcher")
            .join("config.toml")
    }

    pub fn embedding_model_path(&self) -> PathBuf {
        self.model.models_dir.join(&self.model.embedding_model)
    }
}

impl ScoringConfig {
    /// Weight map keyed by breakdown category name.
    pub fn as_weight_map(&self) -> BTreeMap<String, f32> {
        BTreeMap::from([
            ("semantic".to_string(), self.semantic_weight),
            ("skills".to_string(), self.skills_weight),
            ("experience".to_string(), self.experience_weight),
            ("education".to_string(), self.education_weight),
        ])
    }
}
