//! Weighted combination of category scores

use crate::analysis::round_score;
use crate::error::{MatcherError, Result};
use std::collections::BTreeMap;

/// Outcome of combining a breakdown under a weight configuration. Both
/// the raw breakdown and the normalized weights actually used are
/// returned for caller-side display.
#[derive(Debug, Clone)]
pub struct CombinedScore {
    pub overall: f32,
    pub breakdown: BTreeMap<String, f32>,
    pub weights: BTreeMap<String, f32>,
}

pub struct WeightedScoreCombiner;

impl WeightedScoreCombiner {
    /// Normalize the weights of the categories present in the breakdown
    /// so partial configurations still combine validly, then take the
    /// weighted sum clamped to [0, 100]. Categories without a supplied
    /// weight are excluded from the combination.
    pub fn combine(
        breakdown: &BTreeMap<String, f32>,
        weights: &BTreeMap<String, f32>,
    ) -> Result<CombinedScore> {
        let usable: Vec<(&String, f32)> = breakdown
            .keys()
            .filter_map(|category| weights.get(category).map(|w| (category, *w)))
            .collect();

        let total_weight: f32 = usable.iter().map(|(_, w)| w).sum();
        if total_weight <= 0.0 {
            return Err(MatcherError::Configuration(
                "No positive weights supplied for the breakdown categories".to_string(),
            ));
        }

        let mut normalized = BTreeMap::new();
        let mut overall = 0.0;
        for (category, weight) in usable {
            let share = weight / total_weight;
            normalized.insert(category.clone(), share);
            overall += breakdown[category] * share;
        }

        Ok(CombinedScore {
            overall: round_score(overall.clamp(0.0, 100.0)),
            breakdown: breakdown.clone(),
            weights: normalized,
        })
    }
}
