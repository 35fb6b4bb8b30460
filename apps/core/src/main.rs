// Creator Studio CLI Entry Point
// Hooks, shorts and titles from the terminal

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use std::io::Read;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use creator_studio_core::config::{LogFormat, StudioConfig};
use creator_studio_core::dispatch::{DispatchRequest, Dispatcher, DryRunDispatcher, Schedule};
use creator_studio_core::studio::report::{
    format_analysis, format_no_concepts, format_short_concept, format_title_candidate,
};
use creator_studio_core::studio::title_generator::DEFAULT_TITLE_COUNT;
use creator_studio_core::studio::{
    HookAnalyzer, ShortsExtractor, StdRandom, TitleGenerator, TitleStyle,
};

#[derive(Parser)]
#[command(name = "creator-studio")]
#[command(about = "Hook, shorts and title tools for video creators", long_about = None)]
struct Cli {
    /// Seed for reproducible title generation
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a single hook
    Hook {
        /// Hook text
        text: String,

        /// Target spoken length in seconds
        #[arg(short, long)]
        seconds: Option<u32>,

        /// Also print a rewritten hook when the score is below 70
        #[arg(long)]
        improve: bool,
    },

    /// Score several hooks and rank them
    Compare {
        /// Hooks to compare
        #[arg(required = true)]
        hooks: Vec<String>,
    },

    /// Find short-form clip ideas in an outline
    Shorts {
        /// Outline file (reads stdin when omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Print a script for the top concept
        #[arg(long)]
        scripts: bool,
    },

    /// Generate video titles
    Titles {
        /// Video topic
        topic: String,

        /// Template style (curiosity, challenge, educational, transformation, comparison, story)
        #[arg(short, long)]
        style: Option<String>,

        /// Number of plain titles to print
        #[arg(short, long, default_value_t = DEFAULT_TITLE_COUNT)]
        count: usize,

        /// Score and rank a batch of titles
        #[arg(long)]
        metrics: bool,

        /// Hand the best title to the dry-run dispatcher (now, next-free-slot, draft or RFC 3339)
        #[arg(long)]
        dispatch: Option<String>,
    },
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

fn read_outline(file: Option<PathBuf>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read outline: {:?}", path)),
        None => {
            let mut outline = String::new();
            std::io::stdin()
                .read_to_string(&mut outline)
                .context("Failed to read outline from stdin")?;
            Ok(outline)
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let cli = Cli::parse();
    let mut config = StudioConfig::from_env()?;
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    init_tracing(config.log_format);
    info!("Creator Studio v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Hook {
            text,
            seconds,
            improve,
        } => {
            let analyzer =
                HookAnalyzer::with_target(seconds.unwrap_or(config.target_duration_seconds));
            let analysis = analyzer.analyze_hook(&text);

            if cli.json {
                print_json(&analysis)?;
            } else {
                println!("{}", format_analysis(&analysis));
            }

            if improve && analysis.score < 70 {
                let improved = analyzer.suggest_improvements(&text);
                let rescored = analyzer.analyze_hook(&improved);
                println!("\n🔧 Suggested Improvement:\n   {}", improved);
                println!(
                    "\n   New Score: {}/100 ({:+} points)",
                    rescored.score,
                    rescored.score as i64 - analysis.score as i64
                );
            }
        }

        Commands::Compare { hooks } => {
            let analyzer = HookAnalyzer::with_target(config.target_duration_seconds);
            let ranked = analyzer.compare_hooks(&hooks);

            if cli.json {
                print_json(&ranked)?;
            } else {
                for (i, analysis) in ranked.iter().enumerate() {
                    println!("\nRank {}:", i + 1);
                    println!("{}", format_analysis(analysis));
                }
            }
        }

        Commands::Shorts { file, scripts } => {
            let outline = read_outline(file)?;
            let extractor = ShortsExtractor::with_limit(config.max_concepts);
            let concepts = extractor.extract_concepts(&outline);

            if concepts.is_empty() {
                warn!("No clear short opportunities found");
                println!("\n{}", format_no_concepts());
            }

            if cli.json {
                print_json(&concepts)?;
            } else {
                for (i, concept) in concepts.iter().enumerate() {
                    println!("\n{}.{}", i + 1, format_short_concept(concept));
                }
            }

            if scripts {
                if let Some(top) = concepts.first() {
                    println!("\n📝 SUGGESTED SCRIPT:\n{}", "-".repeat(40));
                    println!("{}", extractor.generate_short_script(top));
                }
            }
        }

        Commands::Titles {
            topic,
            style,
            count,
            metrics,
            dispatch,
        } => {
            let style_key = style.as_deref();
            let style = style_key.and_then(TitleStyle::from_key);
            if let (Some(key), None) = (style_key, style) {
                warn!("Unknown style '{}', using all templates", key);
            }

            let rng = match config.seed {
                Some(seed) => StdRandom::seeded(seed),
                None => StdRandom::from_entropy(),
            };
            let mut generator = TitleGenerator::new(rng).with_metrics_batch(config.title_batch);

            let best = if metrics {
                let candidates = generator.generate_with_metrics(&topic, style);
                if cli.json {
                    print_json(&candidates)?;
                } else {
                    for (i, candidate) in candidates.iter().take(count).enumerate() {
                        println!("\n{}", format_title_candidate(i + 1, candidate));
                    }
                }
                candidates.into_iter().next().map(|c| c.title)
            } else {
                let titles = generator.generate_titles(&topic, style, count);
                if cli.json {
                    print_json(&titles)?;
                } else {
                    for (i, title) in titles.iter().enumerate() {
                        println!("{}. {}", i + 1, title);
                    }
                }
                titles.into_iter().next()
            };

            if let Some(schedule) = dispatch {
                let schedule: Schedule = schedule.parse()?;
                let title = best.context("No title to dispatch")?;
                let receipt = DryRunDispatcher
                    .dispatch(DispatchRequest::new(title, schedule))
                    .await?;
                println!("\n{}", receipt.summary());
                receipt.into_result()?;
            }
        }
    }

    Ok(())
}
