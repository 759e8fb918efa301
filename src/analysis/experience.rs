//! Years-of-experience extraction and scoring

use crate::analysis::round_score;
use regex::Regex;

/// Score used when a requirement exists but the resume states no years
/// at all. Absence of a detectable mention is not proven lack of
/// experience, so the candidate gets the benefit of the doubt instead
/// of a zero.
const NEUTRAL_SCORE: f32 = 50.0;

/// Extracts experience signals from normalized text using
/// duration-style patterns.
pub struct ExperienceAnalyzer {
    explicit_years: Regex,
    required_patterns: Vec<Regex>,
    year_range: Regex,
}

impl ExperienceAnalyzer {
    pub fn new() -> Self {
        // Patterns run on normalized (lower-cased) text.
        let explicit_years = Regex::new(r"(\d{1,2})\+?\s*years?\s+(?:of\s+)?experience")
            .expect("invalid explicit-years regex");

        let required_patterns = vec![
            explicit_years.clone(),
            Regex::new(r"minimum\s+(?:of\s+)?(\d{1,2})\s+years?").expect("invalid minimum regex"),
            Regex::new(r"at\s+least\s+(\d{1,2})\s+years?").expect("invalid at-least regex"),
        ];

        let year_range = Regex::new(r"\b((?:19|20)\d{2})\s*(?:-|–|—|to)\s*((?:19|20)\d{2})\b")
            .expect("invalid year-range regex");

        Self {
            explicit_years,
            required_patterns,
            year_range,
        }
    }

    /// Total years the candidate demonstrates: the larger of explicit
    /// "N years of experience" statements and the summed spans of
    /// employment date ranges.
    pub fn candidate_years(&self, resume_normalized: &str) -> u32 {
        let explicit = self
            .explicit_years
            .captures_iter(resume_normalized)
            .filter_map(|cap| cap[1].parse::<u32>().ok())
            .max()
            .unwrap_or(0);

        let range_sum: u32 = self
            .year_range
            .captures_iter(resume_normalized)
            .filter_map(|cap| {
                let start = cap[1].parse::<u32>().ok()?;
                let end = cap[2].parse::<u32>().ok()?;
                end.checked_sub(start)
            })
            .sum();

        explicit.max(range_sum)
    }

    /// Years the job asks for; 0 when no requirement is stated.
    pub fn required_years(&self, job_normalized: &str) -> u32 {
        self.required_patterns
            .iter()
            .flat_map(|pattern| pattern.captures_iter(job_normalized))
            .filter_map(|cap| cap[1].parse::<u32>().ok())
            .max()
            .unwrap_or(0)
    }

    /// No stated requirement never penalizes (100). With a requirement,
    /// score scales linearly with candidate years and caps at 100; an
    /// undetectable candidate signal falls back to the neutral default.
    pub fn score(&self, resume_normalized: &str, job_normalized: &str) -> f32 {
        let required = self.required_years(job_normalized);
        if required == 0 {
            return 100.0;
        }

        let candidate = self.candidate_years(resume_normalized);
        if candidate == 0 {
            return NEUTRAL_SCORE;
        }

        round_score((100.0 * candidate as f32 / required as f32).min(100.0))
    }
}

impl Default for ExperienceAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
