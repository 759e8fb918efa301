//! Education level extraction and scoring

use crate::analysis::round_score;
use regex::Regex;

/// Points deducted per level the candidate falls below the requirement.
const LEVEL_PENALTY: f32 = 25.0;

/// Score used when the job states a requirement but the resume shows no
/// education signal at all.
const NEUTRAL_SCORE: f32 = 50.0;

/// Education levels in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EducationLevel {
    HighSchool,
    Associate,
    Bachelor,
    Master,
    Doctorate,
}

impl EducationLevel {
    fn rank(self) -> i32 {
        match self {
            EducationLevel::HighSchool => 0,
            EducationLevel::Associate => 1,
            EducationLevel::Bachelor => 2,
            EducationLevel::Master => 3,
            EducationLevel::Doctorate => 4,
        }
    }
}

pub struct EducationAnalyzer {
    patterns: Vec<(EducationLevel, Regex)>,
}

impl EducationAnalyzer {
    pub fn new() -> Self {
        // Patterns run on normalized (lower-cased) text.
        let patterns = vec![
            (
                EducationLevel::Doctorate,
                Regex::new(r"\bph\.?\s?d\b|\bdoctorate\b|\bdoctoral\b").expect("doctorate regex"),
            ),
            (
                EducationLevel::Master,
                Regex::new(r"\bmaster(?:'s|s)?\b|\bmba\b|\bm\.s\.|\bmsc\b").expect("master regex"),
            ),
            (
                EducationLevel::Bachelor,
                Regex::new(r"\bbachelor(?:'s|s)?\b|\bb\.s\.|\bb\.a\.|\bbsc\b|\bundergraduate\b")
                    .expect("bachelor regex"),
            ),
            (
                EducationLevel::Associate,
                Regex::new(r"\bassociate(?:'s)?\s+degree\b").expect("associate regex"),
            ),
            (
                EducationLevel::HighSchool,
                Regex::new(r"\bhigh\s+school\b|\bged\b").expect("high-school regex"),
            ),
        ];

        Self { patterns }
    }

    fn levels_in(&self, normalized_text: &str) -> Vec<EducationLevel> {
        self.patterns
            .iter()
            .filter(|(_, regex)| regex.is_match(normalized_text))
            .map(|(level, _)| *level)
            .collect()
    }

    /// Highest level the candidate holds, if any is mentioned.
    pub fn candidate_level(&self, resume_normalized: &str) -> Option<EducationLevel> {
        self.levels_in(resume_normalized).into_iter().max()
    }

    /// Level the job requires. A posting listing alternatives
    /// ("bachelor's required, master's preferred") accepts the lowest
    /// level mentioned.
    pub fn required_level(&self, job_normalized: &str) -> Option<EducationLevel> {
        self.levels_in(job_normalized).into_iter().min()
    }

    /// 100 when no requirement is stated or the candidate meets it;
    /// otherwise a fixed per-level penalty below the requirement,
    /// floored at 0. An undetectable candidate signal falls back to the
    /// neutral default.
    pub fn score(&self, resume_normalized: &str, job_normalized: &str) -> f32 {
        let required = match self.required_level(job_normalized) {
            Some(level) => level,
            None => return 100.0,
        };

        let candidate = match self.candidate_level(resume_normalized) {
            Some(level) => level,
            None => return NEUTRAL_SCORE,
        };

        if candidate >= required {
            return 100.0;
        }

        let gap = (required.rank() - candidate.rank()) as f32;
        round_score((100.0 - LEVEL_PENALTY * gap).max(0.0))
    }
}

impl Default for EducationAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
