//! Analysis pipeline: extraction sub-analyses, score combination, and
//! explanation generation, coordinated by [`engine::MatchEngine`].

pub mod combine;
pub mod content;
pub mod education;
pub mod engine;
pub mod experience;
pub mod explain;
pub mod result;
pub mod semantic;
pub mod skills;

/// Round a score to one decimal place. All reported scores go through
/// this so repeated analyses serialize byte-identically.
pub(crate) fn round_score(score: f32) -> f32 {
    (score * 10.0).round() / 10.0
}
