//! Hook Analyzer - classification plus scoring over a single opening line.

use tracing::debug;

use super::patterns::POWER_WORDS;
use super::ranker::rank;
use super::scoring::{HookScorer, ScoredText, DEFAULT_TARGET_SECONDS};

const PROMISE_TAIL: &str = " ...and by the end, you'll know exactly how to use it.";
const STAKES_CLAUSE: &str = ", and if you don't know this, it could cost you everything.";

/// Scores hooks and proposes rewrites
pub struct HookAnalyzer {
    scorer: HookScorer,
    target_duration_seconds: u32,
}

impl Default for HookAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl HookAnalyzer {
    pub fn new() -> Self {
        Self::with_target(DEFAULT_TARGET_SECONDS)
    }

    /// Analyzer whose length signal targets `target_duration_seconds` of speech
    pub fn with_target(target_duration_seconds: u32) -> Self {
        Self {
            scorer: HookScorer::new(),
            target_duration_seconds,
        }
    }

    pub fn target_duration_seconds(&self) -> u32 {
        self.target_duration_seconds
    }

    /// Analyze a hook at the configured target length
    pub fn analyze_hook(&self, hook: &str) -> ScoredText {
        self.analyze_hook_for(hook, self.target_duration_seconds)
    }

    /// Analyze a hook at an explicit target length
    pub fn analyze_hook_for(&self, hook: &str, target_duration_seconds: u32) -> ScoredText {
        let analysis = self.scorer.score(hook, target_duration_seconds);
        debug!(
            score = analysis.score,
            category = %analysis.category,
            strengths = analysis.strengths.len(),
            weaknesses = analysis.weaknesses.len(),
            "hook analyzed"
        );
        analysis
    }

    /// Analyze every hook independently and order best first.
    /// Hooks with equal scores keep their input order.
    pub fn compare_hooks<S: AsRef<str>>(&self, hooks: &[S]) -> Vec<ScoredText> {
        let analyses = hooks
            .iter()
            .map(|hook| self.analyze_hook(hook.as_ref()))
            .collect();
        rank(analyses, None)
    }

    /// Rewrite a hook by adding the boilerplate its suggestions ask for.
    ///
    /// Only the suggestion texts are inspected: a "power word" suggestion adds
    /// an opener, a "promise" suggestion appends a promise, and a "stakes"
    /// suggestion turns every period into a stakes clause.
    pub fn suggest_improvements(&self, hook: &str) -> String {
        let analysis = self.analyze_hook(hook);
        let suggestions = analysis.suggestions.join(" ").to_lowercase();
        let mut improved = hook.to_string();

        if suggestions.contains("power word") {
            improved = format!("This {} discovery... {}", POWER_WORDS.entries[0], improved);
        }

        if suggestions.contains("promise") {
            improved.push_str(PROMISE_TAIL);
        }

        if suggestions.contains("stakes") {
            improved = improved.replace('.', STAKES_CLAUSE);
        }

        improved
    }
}
