//! Template filling.
//!
//! Templates carry named `{slot}` placeholders. Each known slot maps to a
//! value generator that either derives text from the topic or picks from a
//! fixed literal set. All randomness goes through [`RandomSource`] so callers
//! can seed it or replace it with a fixed sequence.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Source of random choices
pub trait RandomSource {
    /// Pick an index in `0..len`. `len` is never zero.
    fn choose_index(&mut self, len: usize) -> usize;
}

/// [`RandomSource`] backed by `rand`'s standard generator
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl RandomSource for StdRandom {
    fn choose_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }
}

/// Replays a fixed sequence of indices, wrapping around at the end.
/// Each value is reduced modulo the requested length.
pub struct SequenceRandom {
    values: Vec<usize>,
    position: usize,
}

impl SequenceRandom {
    pub fn new(values: Vec<usize>) -> Self {
        Self {
            values,
            position: 0,
        }
    }

    /// Always picks the first option
    pub fn first() -> Self {
        Self::new(vec![0])
    }
}

impl RandomSource for SequenceRandom {
    fn choose_index(&mut self, len: usize) -> usize {
        if len == 0 || self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value % len
    }
}

/// Pick one element of a non-empty slice
pub fn choose<'a, T>(rng: &mut dyn RandomSource, items: &'a [T]) -> &'a T {
    &items[rng.choose_index(items.len()) % items.len()]
}

/// Draw `count` items from `pool` without replacement, starting a new cycle
/// (all items available again) once the pool is exhausted.
pub fn sample_cycling<T: Copy + PartialEq>(
    pool: &[T],
    count: usize,
    rng: &mut dyn RandomSource,
) -> Vec<T> {
    let mut picked = Vec::with_capacity(count);
    if pool.is_empty() {
        return picked;
    }

    let mut used: Vec<T> = Vec::new();
    for _ in 0..count {
        let mut available: Vec<T> = pool.iter().copied().filter(|t| !used.contains(t)).collect();
        if available.is_empty() {
            used.clear();
            available = pool.to_vec();
        }
        let choice = *choose(rng, &available);
        used.push(choice);
        picked.push(choice);
    }
    picked
}

const NUMBERS: &[&str] = &["3", "5", "7", "10", "15", "21", "30"];
const TIME_PERIODS: &[&str] = &["24 Hours", "7 Days", "30 Days", "1 Year"];
const AMOUNTS: &[&str] = &["100", "500", "1000", "5000", "10000", "50000", "100000"];
const LOW_PRICES: &[&str] = &["1", "10", "100"];
const HIGH_PRICES: &[&str] = &["1000", "10000", "100000", "1000000"];
const MAX_LEVELS: &[&str] = &["5", "10", "100"];
const AUTHORITIES: &[&str] = &["Experts", "Big Tech", "The Industry"];

/// Named template placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Topic,
    Number,
    TimePeriod,
    Time,
    Amount,
    Price1,
    Price2,
    MaxLevel,
    UnexpectedResult,
    Phenomenon,
    Secret,
    Subject,
    ControversialTopic,
    Authority,
    Task,
    Action,
    Result,
    DesiredOutcome,
    AchieveGoal,
    Skill,
    Mistake,
    BadState,
    GoodState,
    Method,
    Aspect,
    Start,
    End,
    Achievement,
    Type,
    Item,
    Items,
    Option1,
    Option2,
    ExpensiveOption,
    OldWay,
    NewWay,
    ExtremeAction,
    Limitation,
    ProvedWrong,
    Thing,
    Challenge,
}

impl Slot {
    pub fn from_name(name: &str) -> Option<Self> {
        let slot = match name {
            "topic" => Slot::Topic,
            "number" => Slot::Number,
            "time_period" => Slot::TimePeriod,
            "time" => Slot::Time,
            "amount" => Slot::Amount,
            "price1" => Slot::Price1,
            "price2" => Slot::Price2,
            "max_level" => Slot::MaxLevel,
            "unexpected_result" => Slot::UnexpectedResult,
            "phenomenon" => Slot::Phenomenon,
            "secret" => Slot::Secret,
            "subject" => Slot::Subject,
            "controversial_topic" => Slot::ControversialTopic,
            "authority" => Slot::Authority,
            "task" => Slot::Task,
            "action" => Slot::Action,
            "result" => Slot::Result,
            "desired_outcome" => Slot::DesiredOutcome,
            "achieve_goal" => Slot::AchieveGoal,
            "skill" => Slot::Skill,
            "mistake" => Slot::Mistake,
            "bad_state" => Slot::BadState,
            "good_state" => Slot::GoodState,
            "method" => Slot::Method,
            "aspect" => Slot::Aspect,
            "start" => Slot::Start,
            "end" => Slot::End,
            "achievement" => Slot::Achievement,
            "type" => Slot::Type,
            "item" => Slot::Item,
            "items" => Slot::Items,
            "option1" => Slot::Option1,
            "option2" => Slot::Option2,
            "expensive_option" => Slot::ExpensiveOption,
            "old_way" => Slot::OldWay,
            "new_way" => Slot::NewWay,
            "extreme_action" => Slot::ExtremeAction,
            "limitation" => Slot::Limitation,
            "proved_wrong" => Slot::ProvedWrong,
            "thing" => Slot::Thing,
            "challenge" => Slot::Challenge,
            _ => return None,
        };
        Some(slot)
    }

    /// Generate the value for this slot
    pub fn value(&self, topic: &str, rng: &mut dyn RandomSource) -> String {
        match self {
            Slot::Topic
            | Slot::Subject
            | Slot::ControversialTopic
            | Slot::Skill
            | Slot::Type
            | Slot::Item
            | Slot::Thing => topic.to_string(),
            Slot::Number => choose(rng, NUMBERS).to_string(),
            Slot::TimePeriod | Slot::Time => choose(rng, TIME_PERIODS).to_string(),
            Slot::Amount => choose(rng, AMOUNTS).to_string(),
            Slot::Price1 => choose(rng, LOW_PRICES).to_string(),
            Slot::Price2 => choose(rng, HIGH_PRICES).to_string(),
            Slot::MaxLevel => choose(rng, MAX_LEVELS).to_string(),
            Slot::Authority => choose(rng, AUTHORITIES).to_string(),
            Slot::UnexpectedResult => format!("the Best {} Strategy", topic),
            Slot::Phenomenon => format!("Everyone's Obsessed with {}", topic),
            Slot::Secret => "Secret".to_string(),
            Slot::Task => format!("Master {} in 1 Day", topic),
            Slot::Action => format!("Studied {}", topic),
            Slot::Result => "These Were the Results".to_string(),
            Slot::DesiredOutcome => format!("Master {}", topic),
            Slot::AchieveGoal => format!("Improve Your {} Skills", topic),
            Slot::Mistake => format!("Making These {} Mistakes", topic),
            Slot::BadState => "Complete Beginner".to_string(),
            Slot::GoodState => "Expert Level".to_string(),
            Slot::Method => format!("{} Technique", topic),
            Slot::Aspect => "Life".to_string(),
            Slot::Start => "Zero".to_string(),
            Slot::End => "Hero".to_string(),
            Slot::Achievement => "10,000 Hours".to_string(),
            Slot::Items => format!("{} Tools", topic),
            Slot::Option1 => format!("Traditional {}", topic),
            Slot::Option2 => format!("Modern {}", topic),
            Slot::ExpensiveOption => format!("Premium {}", topic),
            Slot::OldWay => "The Old Method".to_string(),
            Slot::NewWay => "This New Technique".to_string(),
            Slot::ExtremeAction => format!("Lived Like a {} Expert", topic),
            Slot::Limitation => format!("You Can't Learn {} Fast", topic),
            Slot::ProvedWrong => "Proved Them Wrong".to_string(),
            Slot::Challenge => format!("Beat My {} Score", topic),
        }
    }
}

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([a-z0-9_]+)\}").expect("Invalid regex: template placeholder"));

/// Expand every known placeholder in `template`.
///
/// Only slots present in the template draw from `rng`; a slot that appears
/// twice gets the same value both times. Unknown placeholders are kept as-is.
pub fn fill_template(template: &str, topic: &str, rng: &mut dyn RandomSource) -> String {
    let topic = topic.trim();
    let mut resolved: HashMap<Slot, String> = HashMap::new();

    PLACEHOLDER
        .replace_all(template, |caps: &Captures| match Slot::from_name(&caps[1]) {
            Some(slot) => resolved
                .entry(slot)
                .or_insert_with(|| slot.value(topic, rng))
                .clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Placeholder names present in `template`, in order of appearance
pub fn placeholders(template: &str) -> Vec<String> {
    PLACEHOLDER
        .captures_iter(template)
        .map(|caps| caps[1].to_string())
        .collect()
}
