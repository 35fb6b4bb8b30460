//! Integration Tests
//!
//! Flows a user drives from the command line: score and rewrite a hook,
//! turn an outline into clip scripts, rank titles and hand the winner to a
//! dispatcher.

use crate::config::StudioConfig;
use crate::dispatch::{DispatchRequest, Dispatcher, DryRunDispatcher, Schedule};
use crate::studio::report::{format_analysis, format_short_concept, format_title_candidate};
use crate::studio::{
    HookAnalyzer, HookCategory, ScoredText, ShortType, ShortsExtractor, TitleGenerator,
    TitleStyle,
};

const EPISODE_OUTLINE: &str = "\
# Cold open
What if I told you your phone is lying about its battery?

# The test
I compared 3 chargers, $15 versus $80, step by step.

# Results
It turns out the cheap one charged 20% faster.

# Outtakes
Behind the scenes my cat unplugged everything.
";

#[cfg(test)]
mod hook_flow_tests {
    use super::*;

    #[test]
    fn test_score_rewrite_and_report() {
        let config = StudioConfig::default();
        let analyzer = HookAnalyzer::with_target(config.target_duration_seconds);

        let hook = "This video is about batteries.";
        let original = analyzer.analyze_hook(hook);
        assert!(original.score < 70);

        let improved = analyzer.suggest_improvements(hook);
        assert!(improved.starts_with("This secret discovery"));
        let rescored = analyzer.analyze_hook(&improved);
        assert!(rescored.score > original.score);

        let report = format_analysis(&rescored);
        assert!(report.contains(&format!("Overall Score: {}/100", rescored.score)));
        assert!(report.contains(rescored.retention.label()));
    }

    #[test]
    fn test_compare_puts_strongest_first() {
        let analyzer = HookAnalyzer::new();
        let hooks = vec![
            "Bananas are yellow".to_string(),
            "What if I told you the secret 99% of people miss could cost you your savings, \
             but nobody talks about it?"
                .to_string(),
        ];
        let ranked = analyzer.compare_hooks(&hooks);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].text, hooks[1]);
        assert_eq!(ranked[0].category, HookCategory::Question);
        assert!(ranked[0].score > ranked[1].score);
    }

    #[test]
    fn test_analysis_json() {
        let analysis = HookAnalyzer::new().analyze_hook("Did you know this?");
        let json = serde_json::to_string(&analysis).unwrap();
        let back: ScoredText = serde_json::from_str(&json).unwrap();
        assert_eq!(back, analysis);
    }
}

#[cfg(test)]
mod shorts_flow_tests {
    use super::*;

    #[test]
    fn test_outline_to_scripts() {
        let extractor = ShortsExtractor::new();
        let concepts = extractor.extract_concepts(EPISODE_OUTLINE);

        assert_eq!(concepts.len(), 5);
        assert_eq!(concepts[0].category, ShortType::Reveal);
        assert_eq!(concepts[0].viral_score, 90);

        for concept in &concepts {
            let report = format_short_concept(concept);
            assert!(report.contains(&concept.title));
            assert!(report.contains(&format!("Source Section: {}", concept.source_section)));

            let script = extractor.generate_short_script(concept);
            assert!(script.starts_with(&format!("TITLE: {}", concept.title)));
        }
    }

    #[test]
    fn test_sections_feed_concepts() {
        let concepts = ShortsExtractor::with_limit(50).extract_concepts(EPISODE_OUTLINE);
        let from = |section: &str| {
            concepts
                .iter()
                .filter(|c| c.source_section == section)
                .map(|c| c.category)
                .collect::<Vec<_>>()
        };

        assert_eq!(from("Cold open"), vec![ShortType::Hook, ShortType::Hook]);
        assert_eq!(
            from("The test"),
            vec![ShortType::Process, ShortType::Comparison, ShortType::Reveal]
        );
        assert_eq!(from("Results"), vec![ShortType::Reveal, ShortType::Myth]);
        assert_eq!(from("Outtakes"), vec![ShortType::BehindScenes]);
    }
}

#[cfg(test)]
mod title_flow_tests {
    use super::*;

    #[tokio::test]
    async fn test_best_title_dispatched() {
        let mut generator = TitleGenerator::seeded(2024).with_metrics_batch(6);
        let candidates =
            generator.generate_with_metrics("battery life", Some(TitleStyle::Curiosity));
        assert_eq!(candidates.len(), 6);

        let listing: Vec<String> = candidates
            .iter()
            .enumerate()
            .map(|(i, c)| format_title_candidate(i + 1, c))
            .collect();
        assert!(listing[0].starts_with(&format!("1. {}", candidates[0].title)));

        let best = candidates[0].title.clone();
        let receipt = DryRunDispatcher
            .dispatch(DispatchRequest::new(best, "draft".parse::<Schedule>().unwrap()))
            .await
            .unwrap();
        assert!(receipt.success);
        assert_eq!(receipt.status.as_deref(), Some("draft"));
    }

    #[test]
    fn test_curiosity_batch_covers_pool() {
        // Batch equals pool size, so every template is used exactly once
        let mut generator = TitleGenerator::seeded(8);
        let titles = generator.generate_titles("sleep", Some(TitleStyle::Curiosity), 6);
        assert!(titles.iter().any(|t| t == "What Nobody Tells You About sleep"));
        assert!(titles.iter().any(|t| t == "The Truth About sleep"));
        assert!(titles.iter().any(|t| t == "The Hidden Secret of sleep"));
    }
}
