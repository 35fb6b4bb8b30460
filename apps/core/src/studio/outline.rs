//! Outline segmentation.
//!
//! Splits outline text into named sections on heading lines (`#`, `##`,
//! `###`, `Act N`, `Part N`, `N.`). Lines before the first heading go to an
//! implicit "Introduction" section.

use serde::{Deserialize, Serialize};

use super::patterns::HEADING_PATTERN;

/// Title of the section that collects lines before the first heading
pub const DEFAULT_SECTION: &str = "Introduction";

/// A titled block of outline text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineSection {
    pub title: String,
    /// Non-blank lines of the section, each trimmed, joined with `\n`
    pub body: String,
}

impl OutlineSection {
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.body.lines()
    }
}

fn is_heading(line: &str) -> bool {
    HEADING_PATTERN.is_match(line)
}

fn heading_title(line: &str) -> String {
    line.trim().trim_matches('#').trim().to_string()
}

/// Parse an outline into ordered sections.
///
/// Sections that end up without any body lines are dropped. Repeated
/// headings produce separate sections.
pub fn parse_outline(text: &str) -> Vec<OutlineSection> {
    let mut sections = Vec::new();
    let mut current_title = DEFAULT_SECTION.to_string();
    let mut current_lines: Vec<&str> = Vec::new();

    for line in text.lines() {
        if is_heading(line) {
            if !current_lines.is_empty() {
                sections.push(OutlineSection {
                    title: std::mem::take(&mut current_title),
                    body: current_lines.join("\n"),
                });
                current_lines.clear();
            }
            current_title = heading_title(line);
        } else {
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                current_lines.push(trimmed);
            }
        }
    }

    if !current_lines.is_empty() {
        sections.push(OutlineSection {
            title: current_title,
            body: current_lines.join("\n"),
        });
    }

    sections
}
