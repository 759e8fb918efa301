//! Static skill taxonomy: categories of text patterns bound to canonical labels

use crate::error::{MatcherError, Result};
use regex::Regex;

/// A single pattern matcher bound to the canonical name the skill is
/// reported under, regardless of which surface form matched.
#[derive(Debug)]
pub struct SkillPattern {
    pub regex: Regex,
    pub label: String,
}

#[derive(Debug)]
pub struct SkillCategory {
    pub name: String,
    pub patterns: Vec<SkillPattern>,
}

/// Immutable mapping of category name to an ordered sequence of
/// pattern/label pairs. Built once at startup and shared read-only
/// across all analyses; category and pattern order is fixed, which makes
/// skill discovery order deterministic.
#[derive(Debug)]
pub struct SkillTaxonomy {
    categories: Vec<SkillCategory>,
}

/// Default pattern table, matched against normalized (lower-cased) text.
/// Word boundaries keep short names from matching inside longer ones
/// ("java" never matches inside "javascript"); abbreviations fold into
/// the same canonical label as their long form.
const DEFAULT_PATTERNS: &[(&str, &[(&str, &str)])] = &[
    (
        "programming_languages",
        &[
            (r"\bpython\b", "python"),
            (r"\bjava\b", "java"),
            (r"\bjavascript\b", "javascript"),
            (r"\bjs\b", "javascript"),
            (r"\btypescript\b", "typescript"),
            (r"\bgolang\b", "go"),
            (r"\bgo\b", "go"),
            (r"\brust\b", "rust"),
            (r"\bkotlin\b", "kotlin"),
            (r"\bscala\b", "scala"),
            (r"\bc\+\+", "c++"),
            (r"\bc#", "c#"),
            (r"\bruby\b", "ruby"),
            (r"\bphp\b", "php"),
            (r"\bswift\b", "swift"),
            (r"\bperl\b", "perl"),
        ],
    ),
    (
        "web_frameworks",
        &[
            (r"\bdjango\b", "django"),
            (r"\bflask\b", "flask"),
            (r"\bfastapi\b", "fastapi"),
            (r"\breact\b", "react"),
            (r"\bangular\b", "angular"),
            (r"\bvue\b", "vue"),
            (r"\bnode(\.js)?\b", "node.js"),
            (r"\bexpress\b", "express"),
            (r"\bspring\b", "spring"),
            (r"\brails\b", "rails"),
        ],
    ),
    (
        "ml_frameworks",
        &[
            (r"\bmachine learning\b", "machine learning"),
            (r"\bml\b", "machine learning"),
            (r"\bpytorch\b", "pytorch"),
            (r"\btorch\b", "pytorch"),
            (r"\btensorflow\b", "tensorflow"),
            (r"\bkeras\b", "keras"),
            (r"\bscikit-learn\b", "scikit-learn"),
            (r"\bsklearn\b", "scikit-learn"),
            (r"\btransformers\b", "transformers"),
            (r"\bhugging ?face\b", "huggingface"),
        ],
    ),
    (
        "data_tools",
        &[
            (r"\bpandas\b", "pandas"),
            (r"\bnumpy\b", "numpy"),
            (r"\bmatplotlib\b", "matplotlib"),
            (r"\b(apache )?spark\b", "spark"),
            (r"\bdask\b", "dask"),
            (r"\bpolars\b", "polars"),
            (r"\bairflow\b", "airflow"),
            (r"\bkafka\b", "kafka"),
        ],
    ),
    (
        "databases",
        &[
            (r"\bpostgres(ql)?\b", "postgresql"),
            (r"\bmysql\b", "mysql"),
            (r"\bsqlite\b", "sqlite"),
            (r"\bmongodb\b", "mongodb"),
            (r"\bcassandra\b", "cassandra"),
            (r"\bredis\b", "redis"),
            (r"\belasticsearch\b", "elasticsearch"),
            (r"\bdynamodb\b", "dynamodb"),
            (r"\bneo4j\b", "neo4j"),
        ],
    ),
    (
        "cloud",
        &[
            (r"\baws\b", "aws"),
            (r"\bamazon web services\b", "aws"),
            (r"\bazure\b", "azure"),
            (r"\bgcp\b", "gcp"),
            (r"\bgoogle cloud\b", "gcp"),
            (r"\bdocker\b", "docker"),
            (r"\bkubernetes\b", "kubernetes"),
            (r"\bk8s\b", "kubernetes"),
            (r"\bterraform\b", "terraform"),
            (r"\bheroku\b", "heroku"),
        ],
    ),
    (
        "ai_nlp",
        &[
            (r"\bllms?\b", "llm"),
            (r"\blarge language models?\b", "llm"),
            (r"\brag\b", "rag"),
            (r"\bretrieval augmented\b", "rag"),
            (r"\blangchain\b", "langchain"),
            (r"\bnlp\b", "nlp"),
            (r"\bnatural language processing\b", "nlp"),
            (r"\bdeep learning\b", "deep learning"),
            (r"\bneural networks?\b", "deep learning"),
            (r"\bcomputer vision\b", "computer vision"),
            (r"\bprompt engineering\b", "prompt engineering"),
        ],
    ),
    (
        "tooling",
        &[
            (r"\bgit\b", "git"),
            (r"\blinux\b", "linux"),
            (r"\bci/cd\b", "ci/cd"),
            (r"\bgraphql\b", "graphql"),
            (r"\bgrpc\b", "grpc"),
        ],
    ),
];

impl SkillTaxonomy {
    /// Build a taxonomy from (category, [(pattern, label)]) pairs.
    pub fn from_patterns(table: &[(&str, &[(&str, &str)])]) -> Result<Self> {
        let mut categories = Vec::with_capacity(table.len());

        for (name, patterns) in table {
            let mut compiled = Vec::with_capacity(patterns.len());
            for (pattern, label) in *patterns {
                let regex = Regex::new(pattern).map_err(|e| {
                    MatcherError::Taxonomy(format!("Invalid pattern '{}': {}", pattern, e))
                })?;
                compiled.push(SkillPattern {
                    regex,
                    label: label.to_string(),
                });
            }
            categories.push(SkillCategory {
                name: name.to_string(),
                patterns: compiled,
            });
        }

        Ok(Self { categories })
    }

    /// The built-in taxonomy covering common technical skills.
    pub fn builtin() -> Result<Self> {
        Self::from_patterns(DEFAULT_PATTERNS)
    }

    pub fn categories(&self) -> &[SkillCategory] {
        &self.categories
    }

    pub fn pattern_count(&self) -> usize {
        self.categories.iter().map(|c| c.patterns.len()).sum()
    }

    /// Distinct canonical labels, in taxonomy order.
    pub fn labels(&self) -> Vec<&str> {
        let mut labels = Vec::new();
        for category in &self.categories {
            for pattern in &category.patterns {
                if !labels.contains(&pattern.label.as_str()) {
                    labels.push(pattern.label.as_str());
                }
            }
        }
        labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_taxonomy_compiles() {
        let taxonomy = SkillTaxonomy::builtin().unwrap();
        assert!(taxonomy.pattern_count() > 50);
        assert!(taxonomy.categories().len() >= 8);
    }

    #[test]
    fn labels_are_deduplicated() {
        let taxonomy = SkillTaxonomy::builtin().unwrap();
        let labels = taxonomy.labels();
        let mut sorted = labels.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(labels.len(), sorted.len());
    }

    #[test]
    fn java_pattern_does_not_match_javascript() {
        let taxonomy = SkillTaxonomy::builtin().unwrap();
        let java = taxonomy.categories()[0]
            .patterns
            .iter()
            .find(|p| p.label == "java")
            .unwrap();
        assert!(java.regex.is_match("worked with java services"));
        assert!(!java.regex.is_match("worked with javascript"));
    }

    #[test]
    fn abbreviations_share_canonical_labels() {
        let taxonomy = SkillTaxonomy::builtin().unwrap();
        let cloud = taxonomy
            .categories()
            .iter()
            .find(|c| c.name == "cloud")
            .unwrap();
        let k8s_labels: Vec<_> = cloud
            .patterns
            .iter()
            .filter(|p| p.regex.is_match("managed k8s and kubernetes clusters"))
            .map(|p| p.label.as_str())
            .collect();
        assert_eq!(k8s_labels, vec!["kubernetes", "kubernetes"]);
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let table: &[(&str, &[(&str, &str)])] = &[("broken", &[("[unclosed", "x")])];
        assert!(SkillTaxonomy::from_patterns(table).is_err());
    }
}
