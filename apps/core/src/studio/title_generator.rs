//! Title Generator - template filling plus heuristic title scoring.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::patterns::TitleStyle;
use super::ranker::{rank, Scored};
use super::scoring::score_title;
use super::template::{fill_template, sample_cycling, RandomSource, StdRandom};

/// Style label used when titles come from every template family
pub const MIXED_STYLE: &str = "mixed";

pub const DEFAULT_TITLE_COUNT: usize = 5;

/// Titles generated per `generate_with_metrics` call unless configured otherwise
pub const DEFAULT_METRICS_BATCH: usize = 10;

/// A generated title with its heuristic score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleCandidate {
    pub title: String,
    /// Length in characters
    pub length: usize,
    pub score: u32,
    /// Style key, or "mixed"
    pub style: String,
}

impl Scored for TitleCandidate {
    fn rank_score(&self) -> u32 {
        self.score
    }
}

/// Templates for one style, or every style in declaration order
pub fn template_pool(style: Option<TitleStyle>) -> Vec<&'static str> {
    match style {
        Some(style) => style.templates().to_vec(),
        None => TitleStyle::ALL
            .iter()
            .flat_map(|style| style.templates().iter().copied())
            .collect(),
    }
}

pub struct TitleGenerator<R: RandomSource> {
    rng: R,
    metrics_batch: usize,
}

impl TitleGenerator<StdRandom> {
    /// Reproducible generator
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRandom::seeded(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRandom::from_entropy())
    }
}

impl<R: RandomSource> TitleGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            metrics_batch: DEFAULT_METRICS_BATCH,
        }
    }

    pub fn with_metrics_batch(mut self, metrics_batch: usize) -> Self {
        self.metrics_batch = metrics_batch;
        self
    }

    /// Generate `count` titles for `topic`.
    ///
    /// Templates are drawn without replacement until the pool runs out, then
    /// the pool resets. `None` draws from every style.
    pub fn generate_titles(
        &mut self,
        topic: &str,
        style: Option<TitleStyle>,
        count: usize,
    ) -> Vec<String> {
        let pool = template_pool(style);
        let templates = sample_cycling(&pool, count, &mut self.rng);

        templates
            .into_iter()
            .map(|template| fill_template(template, topic, &mut self.rng))
            .collect()
    }

    /// [`Self::generate_titles`] with a style key; unknown keys use the mixed pool
    pub fn generate_titles_for_key(
        &mut self,
        topic: &str,
        style_key: Option<&str>,
        count: usize,
    ) -> Vec<String> {
        let style = style_key.and_then(TitleStyle::from_key);
        self.generate_titles(topic, style, count)
    }

    /// Generate a batch of titles, score each and order best first.
    pub fn generate_with_metrics(
        &mut self,
        topic: &str,
        style: Option<TitleStyle>,
    ) -> Vec<TitleCandidate> {
        let style_label = style.map(|s| s.key()).unwrap_or(MIXED_STYLE);
        let candidates: Vec<TitleCandidate> = self
            .generate_titles(topic, style, self.metrics_batch)
            .into_iter()
            .map(|title| TitleCandidate {
                length: title.chars().count(),
                score: score_title(&title),
                style: style_label.to_string(),
                title,
            })
            .collect();

        debug!(
            topic,
            style = style_label,
            candidates = candidates.len(),
            "titles generated"
        );

        rank(candidates, None)
    }
}
