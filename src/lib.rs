//! Resume/job description matching engine
//!
//! Turns two free-text documents into a multi-dimensional compatibility
//! score with matched/missing skills and generated explanation text.
//! The engine consumes already-decoded plain text; file decoding, HTTP
//! routing and UI belong to the boundary layer.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod embedding;
pub mod error;
pub mod taxonomy;
pub mod text;

pub use analysis::engine::MatchEngine;
pub use analysis::result::{AnalysisResult, ResumeInsights};
pub use config::MatcherConfig;
pub use error::{MatcherError, Result};
