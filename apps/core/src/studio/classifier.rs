//! First-match classification over an ordered pattern table.
//!
//! The text is trimmed and lowercased, then tested against each entry in
//! declaration order. The first entry that matches wins; if none do, the
//! table's default category is returned. Earlier entries always take
//! precedence, even when a later one would also match.

use serde::{Deserialize, Serialize};

use super::patterns::{HookCategory, PatternEntry, HOOK_PATTERNS};

/// Result of a classification, with the fragment that decided it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification<C> {
    pub category: C,
    /// Text matched by the winning pattern, `None` for the default
    pub matched: Option<String>,
}

/// Classify `text` against `table`, falling back to `default`.
pub fn classify<C: Copy>(text: &str, table: &[PatternEntry<C>], default: C) -> C {
    classify_detailed(text, table, default).category
}

/// Like [`classify`] but also reports the matching fragment.
pub fn classify_detailed<C: Copy>(
    text: &str,
    table: &[PatternEntry<C>],
    default: C,
) -> Classification<C> {
    let normalized = text.trim().to_lowercase();

    for entry in table {
        for pattern in &entry.patterns {
            if let Some(m) = pattern.find(&normalized) {
                return Classification {
                    category: entry.category,
                    matched: Some(m.as_str().to_string()),
                };
            }
        }
    }

    Classification {
        category: default,
        matched: None,
    }
}

/// Classifier bound to a static table and its default category
pub struct PatternClassifier<C: 'static> {
    table: &'static [PatternEntry<C>],
    default: C,
}

impl<C: Copy> PatternClassifier<C> {
    pub fn new(table: &'static [PatternEntry<C>], default: C) -> Self {
        Self { table, default }
    }

    pub fn classify(&self, text: &str) -> C {
        classify(text, self.table, self.default)
    }

    pub fn classify_detailed(&self, text: &str) -> Classification<C> {
        classify_detailed(text, self.table, self.default)
    }
}

impl PatternClassifier<HookCategory> {
    /// Hook classifier: question, statement, challenge, story, shocking, promise
    pub fn hooks() -> Self {
        Self::new(&HOOK_PATTERNS, HookCategory::General)
    }
}

impl Default for PatternClassifier<HookCategory> {
    fn default() -> Self {
        Self::hooks()
    }
}
