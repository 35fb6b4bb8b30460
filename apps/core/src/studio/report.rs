//! Plain-text reports for analysis results.

use super::scoring::ScoredText;
use super::shorts_extractor::{ClipConcept, SHORTS_IDEAS};
use super::title_generator::TitleCandidate;

const RULE_WIDTH: usize = 60;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn preview(text: &str, limit: usize) -> String {
    let cut: String = text.chars().take(limit).collect();
    format!("{}...", cut)
}

fn push_list(output: &mut Vec<String>, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    output.push(String::new());
    output.push(heading.to_string());
    for item in items {
        output.push(format!("   • {}", item));
    }
}

/// Hook analysis report
pub fn format_analysis(analysis: &ScoredText) -> String {
    let mut output = vec![
        String::new(),
        rule(),
        format!("HOOK: {}", preview(&analysis.text, 50)),
        rule(),
        String::new(),
        format!("📊 Overall Score: {}/100", analysis.score),
        format!("🎯 Hook Type: {}", analysis.category),
        format!("📈 Estimated Retention: {}", analysis.retention.label()),
    ];

    push_list(&mut output, "✅ Strengths:", &analysis.strengths);
    push_list(&mut output, "❌ Weaknesses:", &analysis.weaknesses);
    push_list(&mut output, "💡 Suggestions:", &analysis.suggestions);

    output.join("\n")
}

/// Clip concept report
pub fn format_short_concept(concept: &ClipConcept) -> String {
    [
        String::new(),
        rule(),
        format!("🎬 {}", concept.title),
        rule(),
        format!("Type: {}", concept.category.key().to_uppercase()),
        format!("Duration: {}", concept.duration_range),
        format!("Viral Potential: {}/100 🔥", concept.viral_score),
        format!("Source Section: {}", concept.source_section),
        String::new(),
        format!("Description: {}", concept.description),
        String::new(),
        format!("Hook: {}", concept.hook_line),
        String::new(),
        format!("Content Preview: {}", concept.content_excerpt),
    ]
    .join("\n")
}

/// One ranked title entry, `rank` counted from 1
pub fn format_title_candidate(rank: usize, candidate: &TitleCandidate) -> String {
    [
        format!("{}. {}", rank, candidate.title),
        format!("   📊 Score: {}/100", candidate.score),
        format!("   📏 Length: {} chars", candidate.length),
        format!("   🎯 Style: {}", candidate.style),
    ]
    .join("\n")
}

/// Guidance printed when an outline yields no clip concepts
pub fn format_no_concepts() -> String {
    let mut output = vec!["No clear short opportunities found. Consider adding:".to_string()];
    output.extend(SHORTS_IDEAS.iter().map(|idea| format!("- {}", idea)));
    output.join("\n")
}
