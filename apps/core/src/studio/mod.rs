//! # Studio Module
//!
//! Rule-based analysis and generation for video creators.
//! Pure and synchronous: no I/O, no shared mutable state, every operation is
//! total over its input.
//!
//! ## Components
//! - `patterns`: Pattern tables, vocabularies and per-category data
//! - `classifier`: First-match classification over an ordered table
//! - `scoring`: Hook and title scoring engines
//! - `outline`: Outline segmentation into sections
//! - `template`: Template filling with an injectable random source
//! - `ranker`: Stable descending ranking
//! - `hook_analyzer`, `shorts_extractor`, `title_generator`: Analyzer façades
//! - `report`: Plain-text reports

pub mod classifier;
pub mod hook_analyzer;
pub mod outline;
pub mod patterns;
pub mod ranker;
pub mod report;
pub mod scoring;
pub mod shorts_extractor;
pub mod template;
pub mod title_generator;

// Re-export main types for convenience
pub use classifier::{classify, Classification, PatternClassifier};
pub use hook_analyzer::HookAnalyzer;
pub use outline::{parse_outline, OutlineSection};
pub use patterns::{HookCategory, PatternEntry, ShortType, TitleStyle};
pub use ranker::{rank, Scored};
pub use scoring::{score_title, HookScorer, RetentionBand, ScoredText};
pub use shorts_extractor::{ClipConcept, ShortsExtractor};
pub use template::{fill_template, RandomSource, SequenceRandom, StdRandom};
pub use title_generator::{TitleCandidate, TitleGenerator, MIXED_STYLE};
