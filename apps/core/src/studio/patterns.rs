//! Pattern tables shared by the analyzers.
//!
//! Classification regexes, trigger phrases, weighted vocabulary lists and the
//! per-category data tables. Everything here is immutable and built once.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// A category bound to one or more matchers.
///
/// Tables of entries are ordered: classification returns the first entry
/// whose matchers hit, so declaration order is part of the contract.
#[derive(Debug, Clone)]
pub struct PatternEntry<C> {
    pub category: C,
    pub patterns: Vec<Regex>,
}

impl<C: Copy> PatternEntry<C> {
    pub fn new(category: C, patterns: Vec<Regex>) -> Self {
        Self { category, patterns }
    }
}

/// A weighted phrase list. Matching is case-insensitive substring containment
/// and every entry counts at most once.
#[derive(Debug, Clone, Copy)]
pub struct Vocabulary {
    pub entries: &'static [&'static str],
    pub weight: i32,
}

impl Vocabulary {
    /// Entries that occur in `text`, in list order
    pub fn hits(&self, text: &str) -> Vec<&'static str> {
        let lower = text.to_lowercase();
        self.entries
            .iter()
            .copied()
            .filter(|entry| lower.contains(entry))
            .collect()
    }

    pub fn count(&self, text: &str) -> usize {
        self.hits(text).len()
    }

    pub fn contains_any(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        self.entries.iter().any(|entry| lower.contains(entry))
    }

    /// Total contribution of this list to a score
    pub fn weighted(&self, text: &str) -> i32 {
        self.count(text) as i32 * self.weight
    }
}

// ---------------------------------------------------------------------------
// Hook vocabulary
// ---------------------------------------------------------------------------

pub const POWER_WORDS: Vocabulary = Vocabulary {
    entries: &[
        "secret",
        "shocking",
        "insane",
        "crazy",
        "unbelievable",
        "mind-blowing",
        "revolutionary",
        "game-changing",
        "destroy",
        "exposed",
        "truth",
        "actually",
        "real",
        "hidden",
        "nobody",
    ],
    weight: 5,
};

pub const WEAK_WORDS: Vocabulary = Vocabulary {
    entries: &[
        "basically",
        "sort of",
        "kind of",
        "maybe",
        "possibly",
        "might",
        "could",
        "somewhat",
        "fairly",
        "quite",
    ],
    weight: -3,
};

pub const STAKES_PHRASES: Vocabulary = Vocabulary {
    entries: &[
        "destroy",
        "ruin",
        "change everything",
        "never be the same",
        "biggest mistake",
        "costs you",
        "loses",
    ],
    weight: 15,
};

pub const CURIOSITY_PHRASES: Vocabulary = Vocabulary {
    entries: &["but", "however", "except", "until", "then something"],
    weight: 15,
};

/// Power words used by the title metric, worth 10 points each
pub const TITLE_POWER_WORDS: Vocabulary = Vocabulary {
    entries: &[
        "secret",
        "shocking",
        "truth",
        "actually",
        "nobody",
        "impossible",
        "changed",
        "mistake",
        "quit",
        "master",
    ],
    weight: 10,
};

// ---------------------------------------------------------------------------
// Hook categories
// ---------------------------------------------------------------------------

/// Hook category, in classification priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HookCategory {
    Question,
    Statement,
    Challenge,
    Story,
    Shocking,
    Promise,
    /// Fallback when nothing matches
    General,
}

impl HookCategory {
    pub fn label(&self) -> &'static str {
        match self {
            HookCategory::Question => "Question",
            HookCategory::Statement => "Statement",
            HookCategory::Challenge => "Challenge",
            HookCategory::Story => "Story",
            HookCategory::Shocking => "Shocking",
            HookCategory::Promise => "Promise",
            HookCategory::General => "General",
        }
    }
}

impl fmt::Display for HookCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// Compile patterns once at startup. The literals are fixed, so a failure here
// is a programming error.
static QUESTION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(what if|have you ever|did you know|can you|why do|is it)")
        .expect("Invalid regex: question hook")
});

static STATEMENT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(this is|i just|most people|everyone thinks|nobody talks)")
        .expect("Invalid regex: statement hook")
});

static CHALLENGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(bet you|99%|impossible|try not to|challenge)")
        .expect("Invalid regex: challenge hook")
});

static STORY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(years ago|this is the day|i wasn't supposed|last week)")
        .expect("Invalid regex: story hook")
});

static SHOCKING_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(changes everything|completely wrong|biggest mistake|destroyed)")
        .expect("Invalid regex: shocking hook")
});

/// Also drives the promise signal of the hook scorer
pub static PROMISE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(i'll show you|you'll learn|by the end|in the next)")
        .expect("Invalid regex: promise hook")
});

/// Whole-word personal pronouns
pub static PRONOUN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(i|my|me|you|your)\b").expect("Invalid regex: personal pronouns")
});

/// Hook table in priority order. Patterns expect lowercased text.
pub static HOOK_PATTERNS: LazyLock<Vec<PatternEntry<HookCategory>>> = LazyLock::new(|| {
    vec![
        PatternEntry::new(HookCategory::Question, vec![QUESTION_PATTERN.clone()]),
        PatternEntry::new(HookCategory::Statement, vec![STATEMENT_PATTERN.clone()]),
        PatternEntry::new(HookCategory::Challenge, vec![CHALLENGE_PATTERN.clone()]),
        PatternEntry::new(HookCategory::Story, vec![STORY_PATTERN.clone()]),
        PatternEntry::new(HookCategory::Shocking, vec![SHOCKING_PATTERN.clone()]),
        PatternEntry::new(HookCategory::Promise, vec![PROMISE_PATTERN.clone()]),
    ]
});

// ---------------------------------------------------------------------------
// Outline / shorts
// ---------------------------------------------------------------------------

/// Section boundary: markdown heading, `Act N`, `Part N` or `N.`
pub static HEADING_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(#{1,3}|Act \d|Part \d|\d+\.)").expect("Invalid regex: outline heading")
});

pub static MONEY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\d+").expect("Invalid regex: currency amount"));

/// Any decimal digit, Unicode-aware like the other numeric patterns
pub static DIGIT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d").expect("Invalid regex: digit"));

pub static PERCENT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+%").expect("Invalid regex: percentage"));

/// Kind of short-form clip, in trigger-evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShortType {
    Hook,
    Tip,
    Reveal,
    Process,
    Story,
    Comparison,
    Myth,
    BehindScenes,
}

/// Fixed data attached to each short type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortProfile {
    pub duration: &'static str,
    pub description: &'static str,
    pub viral_potential: u32,
    pub triggers: &'static [&'static str],
    pub title: &'static str,
    pub hook_line: &'static str,
}

impl ShortType {
    pub const ALL: [ShortType; 8] = [
        ShortType::Hook,
        ShortType::Tip,
        ShortType::Reveal,
        ShortType::Process,
        ShortType::Story,
        ShortType::Comparison,
        ShortType::Myth,
        ShortType::BehindScenes,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ShortType::Hook => "hook",
            ShortType::Tip => "tip",
            ShortType::Reveal => "reveal",
            ShortType::Process => "process",
            ShortType::Story => "story",
            ShortType::Comparison => "comparison",
            ShortType::Myth => "myth",
            ShortType::BehindScenes => "behind_scenes",
        }
    }

    pub fn profile(&self) -> ShortProfile {
        match self {
            ShortType::Hook => ShortProfile {
                duration: "15-30 seconds",
                description: "Most impactful moment as standalone teaser",
                viral_potential: 85,
                triggers: &[
                    "most people think",
                    "what if i told you",
                    "nobody talks about",
                    "the truth is",
                    "biggest mistake",
                ],
                title: "Wait, WHAT?! 🤯",
                hook_line: "POV: You just learned something that changes everything...",
            },
            ShortType::Tip => ShortProfile {
                duration: "30-45 seconds",
                description: "Single actionable tip or trick",
                viral_potential: 70,
                triggers: &[
                    "pro tip",
                    "quick tip",
                    "here's how",
                    "secret trick",
                    "simple hack",
                ],
                title: "60-Second Hack",
                hook_line: "Stop scrolling! This tip will save you hours...",
            },
            ShortType::Reveal => ShortProfile {
                duration: "15-30 seconds",
                description: "Big reveal or surprising result",
                viral_potential: 90,
                triggers: &[
                    "the result",
                    "it turns out",
                    "the answer",
                    "shocking discovery",
                    "plot twist",
                ],
                title: "The Answer Will Shock You",
                hook_line: "The result? I couldn't believe it either...",
            },
            ShortType::Process => ShortProfile {
                duration: "45-60 seconds",
                description: "Quick how-to or demonstration",
                viral_potential: 65,
                triggers: &[
                    "step by step",
                    "how to",
                    "tutorial",
                    "first you",
                    "the process",
                ],
                title: "How To in 60 Seconds",
                hook_line: "Learn this in 60 seconds or less...",
            },
            ShortType::Story => ShortProfile {
                duration: "30-60 seconds",
                description: "Complete micro-story with payoff",
                viral_potential: 75,
                triggers: &[
                    "one time",
                    "story time",
                    "this happened",
                    "let me tell you",
                    "real quick story",
                ],
                title: "Storytime!",
                hook_line: "Let me tell you what happened...",
            },
            ShortType::Comparison => ShortProfile {
                duration: "30-45 seconds",
                description: "Quick A vs B comparison",
                viral_potential: 70,
                triggers: &[
                    "versus",
                    "vs",
                    "compared to",
                    "difference between",
                    "better than",
                ],
                title: "Which Is Better?",
                hook_line: "I tested both so you don't have to...",
            },
            ShortType::Myth => ShortProfile {
                duration: "15-30 seconds",
                description: "Myth-busting or misconception correction",
                viral_potential: 80,
                triggers: &[
                    "myth",
                    "misconception",
                    "people believe",
                    "actually false",
                    "common mistake",
                ],
                title: "MYTH BUSTED",
                hook_line: "Everyone believes this, but here's the truth...",
            },
            ShortType::BehindScenes => ShortProfile {
                duration: "30-45 seconds",
                description: "Making-of or blooper moment",
                viral_potential: 60,
                triggers: &[
                    "blooper",
                    "behind the scenes",
                    "what went wrong",
                    "failed attempt",
                ],
                title: "What Really Happened",
                hook_line: "Here's what you didn't see...",
            },
        }
    }
}

impl fmt::Display for ShortType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

// ---------------------------------------------------------------------------
// Titles
// ---------------------------------------------------------------------------

/// Title template family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleStyle {
    Curiosity,
    Challenge,
    Educational,
    Transformation,
    Comparison,
    Story,
}

impl TitleStyle {
    pub const ALL: [TitleStyle; 6] = [
        TitleStyle::Curiosity,
        TitleStyle::Challenge,
        TitleStyle::Educational,
        TitleStyle::Transformation,
        TitleStyle::Comparison,
        TitleStyle::Story,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            TitleStyle::Curiosity => "curiosity",
            TitleStyle::Challenge => "challenge",
            TitleStyle::Educational => "educational",
            TitleStyle::Transformation => "transformation",
            TitleStyle::Comparison => "comparison",
            TitleStyle::Story => "story",
        }
    }

    /// Looks a style up by key; unknown keys yield `None` (the mixed pool)
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim().to_lowercase();
        Self::ALL.into_iter().find(|style| style.key() == key)
    }

    pub fn templates(&self) -> &'static [&'static str] {
        match self {
            TitleStyle::Curiosity => &[
                "Why {topic} Is Actually {unexpected_result}",
                "The Real Reason {phenomenon}",
                "What Nobody Tells You About {topic}",
                "The Hidden {secret} of {subject}",
                "The Truth About {controversial_topic}",
                "{authority} Doesn't Want You to Know This About {topic}",
            ],
            TitleStyle::Challenge => &[
                "Can You {task}? (99% Fail)",
                "I {action} for {time_period} and {result}",
                "{number} Levels of {topic} (Level {max_level} Is Impossible)",
                "Try Not to {action} Challenge (Impossible)",
                "${amount} If You Can {challenge}",
            ],
            TitleStyle::Educational => &[
                "How to {desired_outcome} (Step-by-Step)",
                "{number} Ways to {achieve_goal}",
                "{topic} Explained in {number} Minutes",
                "Master {skill} in {time_period}",
                "The Only {topic} Guide You'll Ever Need",
                "Stop {mistake} - Do This Instead",
            ],
            TitleStyle::Transformation => &[
                "From {bad_state} to {good_state} in {time_period}",
                "This {method} Changed My {aspect}",
                "I Went From {start} to {end} in {time}",
                "How I {achievement} in Just {time_period}",
                "My ${amount} {type} Transformation",
            ],
            TitleStyle::Comparison => &[
                "${price1} vs ${price2} {item}",
                "{option1} vs {option2}: The Winner Shocked Me",
                "I Tested {number} {items} - Here's the Best",
                "Is {expensive_option} Worth It?",
                "{old_way} vs {new_way}: Mind-Blowing Results",
            ],
            TitleStyle::Story => &[
                "The Day That Changed Everything",
                "I {extreme_action} So You Don't Have To",
                "They Said {limitation}, So I {proved_wrong}",
                "My ${amount} Mistake",
                "Why I Quit {thing} After {achievement}",
            ],
        }
    }
}

impl fmt::Display for TitleStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
