//! Resume-only content quality metrics

use crate::analysis::result::ResumeInsights;
use crate::analysis::round_score;
use crate::text::{self, DocumentText};
use regex::Regex;
use std::collections::HashSet;

/// Share of `estimated_completeness` each detected section contributes.
const SECTION_SHARE: f32 = 25.0;

/// Bonus added to `content_depth` when the resume quantifies
/// achievements (percentages, dollar figures, multipliers).
const QUANTIFIED_BONUS: f32 = 0.1;

/// Pure function of the resume text; the job description plays no role.
pub struct ContentQualityAnalyzer {
    email: Regex,
    phone: Regex,
    experience_section: Regex,
    education_section: Regex,
    skills_section: Regex,
    quantified: Regex,
}

impl ContentQualityAnalyzer {
    pub fn new() -> Self {
        Self {
            // Contact patterns run on raw text; emails keep their casing.
            email: Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")
                .expect("email regex"),
            phone: Regex::new(r"\+?\d[\d\s().-]{7,}\d").expect("phone regex"),
            experience_section: Regex::new(r"\bexperience\b|\bemployment\b|\bwork history\b")
                .expect("experience regex"),
            education_section: Regex::new(r"\beducation\b|\bdegree\b|\buniversity\b|\bcollege\b")
                .expect("education regex"),
            skills_section: Regex::new(r"\bskills\b|\btechnologies\b|\bcompetencies\b")
                .expect("skills regex"),
            quantified: Regex::new(r"\d+%|\$\d|\b\d+x\b").expect("quantified regex"),
        }
    }

    pub fn analyze(&self, resume: &DocumentText) -> ResumeInsights {
        ResumeInsights {
            word_count: resume.word_count(),
            estimated_completeness: self.estimated_completeness(resume),
            content_depth: self.content_depth(resume),
        }
    }

    /// Equal fixed share per expected resume section found: contact
    /// info, experience, education, skills.
    fn estimated_completeness(&self, resume: &DocumentText) -> f32 {
        let normalized = resume.normalized();
        let sections = [
            self.email.is_match(resume.raw()) || self.phone.is_match(resume.raw()),
            self.experience_section.is_match(normalized),
            self.education_section.is_match(normalized),
            self.skills_section.is_match(normalized),
        ];

        let found = sections.iter().filter(|present| **present).count();
        round_score(found as f32 * SECTION_SHARE)
    }

    /// Ratio of distinct meaningful tokens to total tokens, with a
    /// small bonus for quantified achievements, clamped to [0, 1].
    fn content_depth(&self, resume: &DocumentText) -> f32 {
        let all_tokens = text::tokens(resume.normalized());
        if all_tokens.is_empty() {
            return 0.0;
        }

        let distinct_meaningful: HashSet<&str> = all_tokens
            .iter()
            .map(String::as_str)
            .filter(|token| text::is_meaningful(token))
            .collect();

        let mut depth = distinct_meaningful.len() as f32 / all_tokens.len() as f32;
        if self.quantified.is_match(resume.normalized()) {
            depth += QUANTIFIED_BONUS;
        }

        (depth.min(1.0) * 100.0).round() / 100.0
    }
}

impl Default for ContentQualityAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
