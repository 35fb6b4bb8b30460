//! Shorts Extractor - finds clip-worthy moments in a long-form outline.
//!
//! Each outline section is scanned for the trigger phrases of every short
//! type (at most one concept per type from phrases), then for money amounts,
//! percentages and questions, which add reveal, myth and hook concepts on
//! top. The pool is ranked by viral potential and cut to the top entries.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::outline::{parse_outline, OutlineSection};
use super::patterns::{ShortType, MONEY_PATTERN, PERCENT_PATTERN};
use super::ranker::{rank, Scored};

/// Concepts kept after ranking unless configured otherwise
pub const DEFAULT_MAX_CONCEPTS: usize = 5;

/// Longest content excerpt, in characters, before an ellipsis is added
pub const EXCERPT_LIMIT: usize = 200;

pub const TRIGGER_MONEY: &str = "money";
pub const TRIGGER_STATISTIC: &str = "statistic";
pub const TRIGGER_QUESTION: &str = "question";

/// Kinds of material worth adding when an outline yields no concepts
pub const SHORTS_IDEAS: &[&str] = &[
    "Strong hooks or surprising reveals",
    "Quick tips or hacks",
    "Compelling mini-stories",
    "Before/after comparisons",
];

/// A candidate short-form clip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipConcept {
    pub category: ShortType,
    pub title: String,
    pub description: String,
    pub duration_range: String,
    pub hook_line: String,
    pub content_excerpt: String,
    pub source_section: String,
    /// Phrase or special check that produced the concept
    pub trigger: String,
    pub viral_score: u32,
}

impl Scored for ClipConcept {
    fn rank_score(&self) -> u32 {
        self.viral_score
    }
}

/// Cut `content` to [`EXCERPT_LIMIT`] characters, appending "..." when cut
pub fn excerpt(content: &str) -> String {
    if content.chars().count() > EXCERPT_LIMIT {
        let cut: String = content.chars().take(EXCERPT_LIMIT).collect();
        format!("{}...", cut)
    } else {
        content.to_string()
    }
}

/// Type title with a content-dependent emoji suffix
fn concept_title(short_type: ShortType, content: &str) -> String {
    let base = short_type.profile().title;
    if content.contains('$') {
        format!("{} 💰", base)
    } else if content.contains('?') {
        format!("{} 🤔", base)
    } else if content.to_lowercase().contains("fail") {
        format!("{} 😅", base)
    } else {
        base.to_string()
    }
}

/// Build the concept for one (section, type) pair
pub fn build_concept(
    short_type: ShortType,
    section: &OutlineSection,
    trigger: &str,
) -> ClipConcept {
    let profile = short_type.profile();
    ClipConcept {
        category: short_type,
        title: concept_title(short_type, &section.body),
        description: profile.description.to_string(),
        duration_range: profile.duration.to_string(),
        hook_line: profile.hook_line.to_string(),
        content_excerpt: excerpt(&section.body),
        source_section: section.title.clone(),
        trigger: trigger.to_string(),
        viral_score: profile.viral_potential,
    }
}

pub struct ShortsExtractor {
    max_concepts: usize,
}

impl Default for ShortsExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ShortsExtractor {
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_MAX_CONCEPTS)
    }

    pub fn with_limit(max_concepts: usize) -> Self {
        Self { max_concepts }
    }

    /// Top concepts across the whole outline, best first.
    pub fn extract_concepts(&self, outline: &str) -> Vec<ClipConcept> {
        let sections = parse_outline(outline);
        let pool: Vec<ClipConcept> = sections
            .iter()
            .flat_map(|section| self.analyze_section(section))
            .collect();

        debug!(
            sections = sections.len(),
            candidates = pool.len(),
            "outline scanned for shorts"
        );

        rank(pool, Some(self.max_concepts))
    }

    /// Every concept one section yields, in evaluation order.
    ///
    /// Types can repeat: a phrase-triggered concept is not deduplicated
    /// against the money, percentage and question checks.
    pub fn analyze_section(&self, section: &OutlineSection) -> Vec<ClipConcept> {
        let mut concepts = Vec::new();
        let lower = section.body.to_lowercase();

        for short_type in ShortType::ALL {
            let first_hit = short_type
                .profile()
                .triggers
                .iter()
                .find(|phrase| lower.contains(**phrase));
            if let Some(phrase) = first_hit {
                concepts.push(build_concept(short_type, section, phrase));
            }
        }

        if MONEY_PATTERN.is_match(&section.body) {
            concepts.push(build_concept(ShortType::Reveal, section, TRIGGER_MONEY));
        }
        if PERCENT_PATTERN.is_match(&section.body) {
            concepts.push(build_concept(ShortType::Myth, section, TRIGGER_STATISTIC));
        }
        if section.body.contains('?') {
            concepts.push(build_concept(ShortType::Hook, section, TRIGGER_QUESTION));
        }

        concepts
    }

    /// Storyboard for a concept with time-bucketed beats
    pub fn generate_short_script(&self, concept: &ClipConcept) -> String {
        let mut script = vec![
            format!("TITLE: {}", concept.title),
            format!("DURATION: {}", concept.duration_range),
            String::new(),
            "SCRIPT:".to_string(),
            format!("[0-3 seconds] HOOK: {}", concept.hook_line),
        ];

        let beats: &[&str] = match concept.category {
            ShortType::Hook => &[
                "[3-15 seconds] BUILD: Create tension with the question/problem",
                "[15-25 seconds] REVEAL: Show the surprising answer/result",
                "[25-30 seconds] CTA: 'Full video explains everything - link in bio'",
            ],
            ShortType::Tip => &[
                "[3-10 seconds] PROBLEM: Show what people usually do wrong",
                "[10-30 seconds] SOLUTION: Demonstrate the better way",
                "[30-40 seconds] RESULT: Show the improvement",
                "[40-45 seconds] CTA: 'Follow for more tips like this'",
            ],
            ShortType::Reveal => &[
                "[3-10 seconds] SETUP: Context for the reveal",
                "[10-20 seconds] BUILD: Increase anticipation",
                "[20-28 seconds] REVEAL: The big moment",
                "[28-30 seconds] REACTION: Your genuine response",
            ],
            ShortType::Process => &[
                "[3-10 seconds] INTRO: What we're making/doing",
                "[10-40 seconds] STEPS: Quick, clear demonstration",
                "[40-55 seconds] RESULT: Show the finished product",
                "[55-60 seconds] CTA: 'Save this for later!'",
            ],
            ShortType::Story => &[
                "[3-10 seconds] SETUP: Quick context",
                "[10-40 seconds] STORY: The main narrative",
                "[40-55 seconds] TWIST/LESSON: The payoff",
                "[55-60 seconds] CTA: 'What would you have done?'",
            ],
            ShortType::Comparison | ShortType::Myth | ShortType::BehindScenes => &[
                "[3-45 seconds] CONTENT: Main content",
                "[45-60 seconds] CTA: Engagement prompt",
            ],
        };
        script.extend(beats.iter().map(|beat| beat.to_string()));

        script.push(String::new());
        script.push("CAPTION:".to_string());
        script.push(format!("{} {}", concept.hook_line, concept.title));
        script.push("#shorts #viral #fyp".to_string());

        script.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(title: &str, body: &str) -> OutlineSection {
        OutlineSection {
            title: title.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_one_concept_per_type_from_phrases() {
        let extractor = ShortsExtractor::new();
        let concepts =
            extractor.analyze_section(&section("Tips", "Pro tip: quick tip after quick tip"));

        assert_eq!(concepts.len(), 1);
        assert_eq!(concepts[0].category, ShortType::Tip);
        assert_eq!(concepts[0].trigger, "pro tip");
    }

    #[test]
    fn test_special_checks_duplicate_types() {
        let extractor = ShortsExtractor::new();
        let concepts = extractor.analyze_section(&section(
            "Numbers",
            "The result: $200 saved, 40% faster. What if I told you more?",
        ));

        let kinds: Vec<(ShortType, &str)> = concepts
            .iter()
            .map(|c| (c.category, c.trigger.as_str()))
            .collect();
        assert_eq!(
            kinds,
            vec![
                (ShortType::Hook, "what if i told you"),
                (ShortType::Reveal, "the result"),
                (ShortType::Reveal, TRIGGER_MONEY),
                (ShortType::Myth, TRIGGER_STATISTIC),
                (ShortType::Hook, TRIGGER_QUESTION),
            ]
        );
    }

    #[test]
    fn test_concept_fields() {
        let concept = build_concept(
            ShortType::Reveal,
            &section("Intro", "I made $500 last week."),
            TRIGGER_MONEY,
        );
        assert_eq!(concept.title, "The Answer Will Shock You 💰");
        assert_eq!(concept.duration_range, "15-30 seconds");
        assert_eq!(concept.viral_score, 90);
        assert_eq!(concept.source_section, "Intro");
        assert_eq!(concept.content_excerpt, "I made $500 last week.");
    }

    #[test]
    fn test_title_suffixes() {
        assert_eq!(concept_title(ShortType::Tip, "Why?"), "60-Second Hack 🤔");
        assert_eq!(concept_title(ShortType::Tip, "I FAILED"), "60-Second Hack 😅");
        assert_eq!(concept_title(ShortType::Tip, "plain"), "60-Second Hack");
    }

    #[test]
    fn test_excerpt_limit() {
        let long = "a".repeat(250);
        let cut = excerpt(&long);
        assert_eq!(cut.chars().count(), EXCERPT_LIMIT + 3);
        assert!(cut.ends_with("..."));

        let exact = "é".repeat(EXCERPT_LIMIT);
        assert_eq!(excerpt(&exact), exact);
    }

    #[test]
    fn test_extract_ranks_and_limits() {
        let outline = "\
# One
The result was wild. Pro tip: step by step. Story time! This is a myth.
# Two
Blooper reel: behind the scenes, what if i told you it cost $40, 10% off?";
        let concepts = ShortsExtractor::new().extract_concepts(outline);

        assert_eq!(concepts.len(), DEFAULT_MAX_CONCEPTS);
        assert!(concepts
            .windows(2)
            .all(|pair| pair[0].viral_score >= pair[1].viral_score));
        assert_eq!(concepts[0].viral_score, 90);
    }

    #[test]
    fn test_empty_outline() {
        assert!(ShortsExtractor::new().extract_concepts("").is_empty());
    }

    #[test]
    fn test_generic_script() {
        let extractor = ShortsExtractor::new();
        let concept = build_concept(ShortType::Myth, &section("S", "myth"), "myth");
        let script = extractor.generate_short_script(&concept);

        assert!(script.starts_with("TITLE: MYTH BUSTED\nDURATION: 15-30 seconds"));
        assert!(script.contains("[0-3 seconds] HOOK: Everyone believes this"));
        assert!(script.contains("[3-45 seconds] CONTENT: Main content"));
        assert!(script.ends_with("#shorts #viral #fyp"));
    }

    #[test]
    fn test_bespoke_script() {
        let extractor = ShortsExtractor::new();
        let concept = build_concept(ShortType::Tip, &section("S", "pro tip"), "pro tip");
        let script = extractor.generate_short_script(&concept);

        assert!(script.contains("[40-45 seconds] CTA: 'Follow for more tips like this'"));
        assert!(!script.contains("CONTENT: Main content"));
    }
}
