//! Explanation and recommendation generation

use std::collections::{BTreeMap, HashSet};

/// Produces the prose explanation and the ordered recommendation list.
/// Output is plain text: no markup, no emoji, no decorative markers for
/// the caller to strip.
pub struct ExplanationGenerator {
    /// Cap on per-missing-skill recommendations.
    skill_limit: usize,
    /// Categories scoring below this get a recommendation.
    low_threshold: f32,
}

impl ExplanationGenerator {
    pub fn new(skill_limit: usize, low_threshold: f32) -> Self {
        Self {
            skill_limit,
            low_threshold,
        }
    }

    /// Weakest category; ties resolve alphabetically since the map
    /// iterates in key order.
    fn lowest_category<'a>(breakdown: &'a BTreeMap<String, f32>) -> Option<(&'a str, f32)> {
        breakdown
            .iter()
            .min_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(name, score)| (name.as_str(), *score))
    }

    /// Short templated paragraph chosen by score band, naming the
    /// lowest-scoring category.
    pub fn explanation(&self, overall: f32, breakdown: &BTreeMap<String, f32>) -> String {
        let (weakest, weakest_score) =
            Self::lowest_category(breakdown).unwrap_or(("overall", overall));

        if overall >= 70.0 {
            format!(
                "Strong match: the resume aligns well with this job description \
                 with an overall score of {:.1}. The weakest area is {} at {:.1}, \
                 which still leaves room to stand out further.",
                overall, weakest, weakest_score
            )
        } else if overall >= 50.0 {
            format!(
                "Moderate match: the resume covers part of what this role asks for, \
                 scoring {:.1} overall. Improving the {} area, currently at {:.1}, \
                 would have the most impact.",
                overall, weakest, weakest_score
            )
        } else {
            format!(
                "Needs improvement: the resume shows significant gaps against this \
                 job description, scoring {:.1} overall. The {} area is the furthest \
                 behind at {:.1}.",
                overall, weakest, weakest_score
            )
        }
    }

    /// One recommendation per missing skill (discovery order, capped),
    /// then one per weighted category under the threshold, ordered by
    /// descending weight so the most heavily weighted deficiency comes
    /// first. Duplicates and blanks are suppressed; the list is never
    /// empty while the overall score is below 100.
    pub fn recommendations(
        &self,
        overall: f32,
        breakdown: &BTreeMap<String, f32>,
        weights: &BTreeMap<String, f32>,
        missing_skills: &[String],
    ) -> Vec<String> {
        let mut recommendations = Vec::new();
        let mut seen = HashSet::new();

        for skill in missing_skills.iter().take(self.skill_limit) {
            let rec = format!("Add evidence of {} experience to your resume", skill);
            if seen.insert(rec.clone()) {
                recommendations.push(rec);
            }
        }

        let mut low_categories: Vec<(&String, f32)> = breakdown
            .iter()
            .filter(|(category, score)| {
                **score < self.low_threshold && weights.contains_key(*category)
            })
            .map(|(category, score)| (category, *score))
            .collect();
        low_categories.sort_by(|a, b| {
            weights[b.0]
                .partial_cmp(&weights[a.0])
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        });

        for (category, _) in low_categories {
            let rec = Self::category_advice(category);
            if !rec.is_empty() && seen.insert(rec.to_string()) {
                recommendations.push(rec.to_string());
            }
        }

        if recommendations.is_empty() && overall < 100.0 {
            if let Some((weakest, _)) = Self::lowest_category(breakdown) {
                recommendations.push(format!(
                    "Tailor the resume wording toward this job description; \
                     the {} score has the most room to grow",
                    weakest
                ));
            }
        }

        recommendations
    }

    fn category_advice(category: &str) -> &'static str {
        match category {
            "semantic" => {
                "Mirror the job description's terminology when describing your work"
            }
            "skills" => {
                "Expand your skills section to cover the technologies this role asks for"
            }
            "experience" => {
                "State your years of experience explicitly and highlight the most relevant roles"
            }
            "education" => {
                "List your highest completed degree and any relevant certifications"
            }
            _ => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, f32)]) -> BTreeMap<String, f32> {
        entries
            .iter()
            .map(|(name, value)| (name.to_string(), *value))
            .collect()
    }

    fn default_weights() -> BTreeMap<String, f32> {
        map(&[
            ("semantic", 0.30),
            ("skills", 0.35),
            ("experience", 0.20),
            ("education", 0.15),
        ])
    }

    fn generator() -> ExplanationGenerator {
        ExplanationGenerator::new(5, 60.0)
    }

    #[test]
    fn explanation_bands() {
        let breakdown = map(&[("semantic", 90.0), ("skills", 75.0)]);
        let strong = generator().explanation(82.0, &breakdown);
        assert!(strong.starts_with("Strong match"));
        assert!(strong.contains("skills"));

        let moderate = generator().explanation(55.0, &breakdown);
        assert!(moderate.starts_with("Moderate match"));

        let weak = generator().explanation(30.0, &breakdown);
        assert!(weak.starts_with("Needs improvement"));
    }

    #[test]
    fn missing_skills_come_first_in_discovery_order() {
        let breakdown = map(&[("semantic", 80.0), ("skills", 40.0)]);
        let missing = vec!["aws".to_string(), "kubernetes".to_string()];

        let recs = generator().recommendations(60.0, &breakdown, &default_weights(), &missing);
        assert!(recs[0].contains("aws"));
        assert!(recs[1].contains("kubernetes"));
    }

    #[test]
    fn missing_skill_recommendations_are_capped() {
        let breakdown = map(&[("semantic", 90.0)]);
        let missing: Vec<String> = ["a", "b", "c", "d", "e", "f", "g"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let generator = ExplanationGenerator::new(3, 60.0);
        let recs = generator.recommendations(80.0, &breakdown, &default_weights(), &missing);
        assert_eq!(recs.len(), 3);
    }

    #[test]
    fn low_categories_are_ordered_by_descending_weight() {
        // skills (0.35) outweighs education (0.15): its advice comes first
        // even though education scored lower.
        let breakdown = map(&[("skills", 50.0), ("education", 20.0), ("semantic", 90.0)]);
        let recs = generator().recommendations(55.0, &breakdown, &default_weights(), &[]);

        let skills_pos = recs.iter().position(|r| r.contains("skills section"));
        let education_pos = recs.iter().position(|r| r.contains("degree"));
        assert!(skills_pos.unwrap() < education_pos.unwrap());
    }

    #[test]
    fn never_empty_below_perfect_score() {
        let breakdown = map(&[("semantic", 85.0), ("skills", 85.0)]);
        let recs = generator().recommendations(85.0, &breakdown, &default_weights(), &[]);
        assert!(!recs.is_empty());
    }

    #[test]
    fn no_duplicates_or_markup() {
        let breakdown = map(&[("skills", 20.0), ("semantic", 30.0)]);
        let missing = vec!["docker".to_string(), "docker".to_string()];
        let recs = generator().recommendations(25.0, &breakdown, &default_weights(), &missing);

        let unique: HashSet<&String> = recs.iter().collect();
        assert_eq!(unique.len(), recs.len());
        for rec in &recs {
            assert!(!rec.is_empty());
            let first = rec.chars().next().unwrap();
            assert!(first.is_alphanumeric(), "unexpected marker in '{}'", rec);
        }
    }
}
