//! Resume matcher: score a resume against a job description

use clap::Parser;
use colored::Colorize;
use log::{error, info};
use resume_matcher::cli::{Cli, Commands, ConfigAction};
use resume_matcher::embedding::{EmbeddingProvider, HashingEmbedder, Model2VecEmbedder};
use resume_matcher::{AnalysisResult, MatchEngine, MatcherConfig, Result};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match MatcherConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config) {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn run_command(command: Commands, config: MatcherConfig) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            model,
            no_model,
            json,
        } => {
            info!("Starting resume/job analysis");

            let resume_text = std::fs::read_to_string(&resume)?;
            let job_text = std::fs::read_to_string(&job)?;

            let embedder = build_embedder(&config, model, no_model)?;
            let engine = MatchEngine::new(config, embedder)?;

            let result = engine.analyze(&resume_text, &job_text)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_report(&resume, &job, &result);
            }
        }

        Commands::Skills => {
            let engine = MatchEngine::new(config, Arc::new(HashingEmbedder::default()))?;
            let taxonomy = engine.taxonomy();

            println!("Detectable skills ({} patterns):\n", taxonomy.pattern_count());
            for category in taxonomy.categories() {
                let mut labels: Vec<&str> = Vec::new();
                for pattern in &category.patterns {
                    if !labels.contains(&pattern.label.as_str()) {
                        labels.push(&pattern.label);
                    }
                }
                println!("  {}: {}", category.name.bold(), labels.join(", "));
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("Models directory: {}", config.model.models_dir.display());
                println!("Embedding model:  {}", config.model.embedding_model);
                println!("\nScoring weights:");
                println!("  semantic:   {:.2}", config.scoring.semantic_weight);
                println!("  skills:     {:.2}", config.scoring.skills_weight);
                println!("  experience: {:.2}", config.scoring.experience_weight);
                println!("  education:  {:.2}", config.scoring.education_weight);
                println!("\nLimits:");
                println!("  text length: {}..{} chars", config.limits.min_text_chars, config.limits.max_text_chars);
            }

            Some(ConfigAction::Reset) => {
                MatcherConfig::default().save()?;
                println!("Configuration reset to defaults");
            }
        },
    }

    Ok(())
}

fn build_embedder(
    config: &MatcherConfig,
    model_override: Option<PathBuf>,
    no_model: bool,
) -> Result<Arc<dyn EmbeddingProvider>> {
    if no_model {
        info!("Using deterministic hashing embedder");
        return Ok(Arc::new(HashingEmbedder::default()));
    }

    let model_path = model_override.unwrap_or_else(|| config.embedding_model_path());
    Ok(Arc::new(Model2VecEmbedder::load(&model_path)?))
}

fn print_report(resume: &Path, job: &Path, result: &AnalysisResult) {
    println!("Resume: {}", resume.display());
    println!("Job:    {}\n", job.display());

    println!("Overall score: {}", colorize_score(result.overall_score));

    println!("\nBreakdown:");
    for (category, score) in &result.breakdown {
        let weight = result.weights.get(category).copied().unwrap_or(0.0);
        println!(
            "  {:<12} {}  (weight {:.2})",
            category,
            colorize_score(*score),
            weight
        );
    }

    if !result.matched_skills.is_empty() {
        println!("\nMatched skills: {}", result.matched_skills.join(", ").green());
    }
    if !result.missing_skills.is_empty() {
        println!("Missing skills: {}", result.missing_skills.join(", ").red());
    }

    println!("\n{}", result.explanation);

    if !result.recommendations.is_empty() {
        println!("\nRecommendations:");
        for (i, recommendation) in result.recommendations.iter().enumerate() {
            println!("  {}. {}", i + 1, recommendation);
        }
    }

    let insights = &result.resume_insights;
    println!(
        "\nResume insights: {} words, {:.0}% complete, content depth {:.2}",
        insights.word_count, insights.estimated_completeness, insights.content_depth
    );
}

fn colorize_score(score: f32) -> colored::ColoredString {
    let text = format!("{:.1}", score);
    if score >= 70.0 {
        text.green()
    } else if score >= 50.0 {
        text.yellow()
    } else {
        text.red()
    }
}
