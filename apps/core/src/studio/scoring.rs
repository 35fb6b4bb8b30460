//! Rule-based effectiveness scoring.
//!
//! Hooks are scored from ten additive signals evaluated in a fixed order;
//! titles from a smaller, independent signal set. Raw totals may go below
//! zero or above 100 and are clamped to `[0, 100]` at the end.

use serde::{Deserialize, Serialize};

use super::classifier::PatternClassifier;
use super::patterns::{
    HookCategory, CURIOSITY_PHRASES, DIGIT_PATTERN, POWER_WORDS, PROMISE_PATTERN,
    PRONOUN_PATTERN, STAKES_PHRASES, TITLE_POWER_WORDS, WEAK_WORDS,
};
use super::ranker::Scored;

/// Speaking rate used to turn a duration into an expected word count
pub const WORDS_PER_SECOND: f64 = 2.5;

/// Hook length target when the caller does not give one
pub const DEFAULT_TARGET_SECONDS: u32 = 30;

pub const MAX_SCORE: i32 = 100;

// Suggestion texts. `suggest_improvements` searches these for keywords
// ("power word", "promise", "stakes"), so the wording matters.
pub const SUGGEST_EXPAND: &str = "Expand with more specific details or examples";
pub const SUGGEST_TRIM: &str = "Trim unnecessary words and get to the point faster";
pub const SUGGEST_POWER_WORDS: &str = "Add power words for emotional impact";
pub const SUGGEST_REMOVE_WEAK: &str = "Remove weak qualifiers for stronger statements";
pub const SUGGEST_PROMISE: &str = "Add a clear promise of what viewer will gain";
pub const SUGGEST_STAKES: &str = "Consider adding stakes or consequences";

/// Clamp a raw signal total into `[0, 100]`
pub fn clamp_score(raw: i32) -> u32 {
    raw.clamp(0, MAX_SCORE) as u32
}

/// Estimated audience retention derived from a hook score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetentionBand {
    High,
    Good,
    Average,
    Low,
}

impl RetentionBand {
    pub fn from_score(score: u32) -> Self {
        match score {
            70.. => RetentionBand::High,
            50..=69 => RetentionBand::Good,
            30..=49 => RetentionBand::Average,
            _ => RetentionBand::Low,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RetentionBand::High => "High (70-90%)",
            RetentionBand::Good => "Good (60-70%)",
            RetentionBand::Average => "Average (50-60%)",
            RetentionBand::Low => "Low (Below 50%)",
        }
    }
}

/// Scored hook with the reasoning behind the score.
///
/// List order follows signal evaluation order, not importance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredText {
    pub text: String,
    pub score: u32,
    pub category: HookCategory,
    pub retention: RetentionBand,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggestions: Vec<String>,
}

impl Scored for ScoredText {
    fn rank_score(&self) -> u32 {
        self.score
    }
}

/// Running total plus the notes produced by each signal
#[derive(Default)]
struct Tally {
    total: i32,
    strengths: Vec<String>,
    weaknesses: Vec<String>,
    suggestions: Vec<String>,
}

impl Tally {
    fn strength(&mut self, note: impl Into<String>, points: i32) {
        self.strengths.push(note.into());
        self.total += points;
    }

    fn weakness(&mut self, note: impl Into<String>, points: i32) {
        self.weaknesses.push(note.into());
        self.total += points;
    }

    fn suggest(&mut self, note: impl Into<String>) {
        self.suggestions.push(note.into());
    }
}

/// Hook scoring engine
pub struct HookScorer {
    classifier: PatternClassifier<HookCategory>,
}

impl Default for HookScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl HookScorer {
    pub fn new() -> Self {
        Self {
            classifier: PatternClassifier::hooks(),
        }
    }

    /// Score a hook against a spoken length of `target_duration_seconds`.
    pub fn score(&self, text: &str, target_duration_seconds: u32) -> ScoredText {
        let text = text.trim();
        let lower = text.to_lowercase();
        let mut tally = Tally::default();

        // 1. Length fit
        let word_count = text.split_whitespace().count();
        let expected_words = target_duration_seconds as f64 * WORDS_PER_SECOND;
        if (word_count as f64) < expected_words * 0.7 {
            tally.weakness(
                format!(
                    "Hook is too short ({} words for {}s)",
                    word_count, target_duration_seconds
                ),
                0,
            );
            tally.suggest(SUGGEST_EXPAND);
        } else if (word_count as f64) > expected_words * 1.3 {
            tally.weakness(
                format!(
                    "Hook is too long ({} words for {}s)",
                    word_count, target_duration_seconds
                ),
                0,
            );
            tally.suggest(SUGGEST_TRIM);
        } else {
            tally.strength(format!("Good length ({} words)", word_count), 10);
        }

        // 2. Power words
        let power_count = POWER_WORDS.count(text);
        if power_count > 0 {
            tally.strength(
                format!("Uses {} power word(s)", power_count),
                power_count as i32 * POWER_WORDS.weight,
            );
        } else {
            tally.suggest(SUGGEST_POWER_WORDS);
        }

        // 3. Weak qualifiers
        let weak_count = WEAK_WORDS.count(text);
        if weak_count > 0 {
            tally.weakness(
                format!("Contains {} weak qualifier(s)", weak_count),
                weak_count as i32 * WEAK_WORDS.weight,
            );
            tally.suggest(SUGGEST_REMOVE_WEAK);
        }

        // 4. Pattern interrupt
        let starts_lowercase = text.chars().next().is_some_and(char::is_lowercase);
        if starts_lowercase || text.starts_with("...") {
            tally.strength("Uses pattern interrupt opening", 10);
        }

        // 5. Promise
        if PROMISE_PATTERN.is_match(&lower) {
            tally.strength("Makes clear promise to viewer", 15);
        } else {
            tally.suggest(SUGGEST_PROMISE);
        }

        // 6. Question
        if text.contains('?') {
            tally.strength("Uses questions to engage viewer", 10);
        }

        // 7. Specific numbers
        if DIGIT_PATTERN.is_match(text) {
            tally.strength("Includes specific numbers", 10);
        }

        // 8. Stakes
        if STAKES_PHRASES.contains_any(text) {
            tally.strength("Establishes clear stakes", STAKES_PHRASES.weight);
        } else {
            tally.suggest(SUGGEST_STAKES);
        }

        // 9. Curiosity gap
        if CURIOSITY_PHRASES.contains_any(text) {
            tally.strength("Creates curiosity gap", CURIOSITY_PHRASES.weight);
        }

        // 10. Personal language
        if PRONOUN_PATTERN.is_match(text) {
            tally.strength("Uses personal/direct language", 10);
        }

        let score = clamp_score(tally.total);

        ScoredText {
            text: text.to_string(),
            score,
            category: self.classifier.classify(text),
            retention: RetentionBand::from_score(score),
            strengths: tally.strengths,
            weaknesses: tally.weaknesses,
            suggestions: tally.suggestions,
        }
    }
}

/// Heuristic title score.
///
/// 40-60 characters earn 20 points (30-70 earn 10), each title power word 10,
/// a digit 15, a question mark 10 and a dollar sign 15. Capped at 100.
pub fn score_title(title: &str) -> u32 {
    let length = title.chars().count();
    let mut total = 0;

    if (40..=60).contains(&length) {
        total += 20;
    } else if (30..=70).contains(&length) {
        total += 10;
    }

    total += TITLE_POWER_WORDS.weighted(title);

    if DIGIT_PATTERN.is_match(title) {
        total += 15;
    }
    if title.contains('?') {
        total += 10;
    }
    if title.contains('$') {
        total += 15;
    }

    clamp_score(total)
}
