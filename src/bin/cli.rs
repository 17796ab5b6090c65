use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use deadlock_item_bot::{
    extract_references, ranking, render_item, CommentOutcome, EngineConfig, ReplyEngine,
};

#[derive(Parser)]
#[command(name = "item-bot-cli")]
#[command(about = "Deadlock item bot CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Catalog JSON path (overrides CATALOG_PATH)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Minimum match confidence (overrides MIN_CONFIDENCE)
    #[arg(long)]
    min_confidence: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose the reply the bot would post for a comment
    Reply {
        /// Comment text (read from stdin when omitted)
        text: Option<String>,
    },

    /// Show how each [[reference]] resolves
    Match {
        /// Comment text (read from stdin when omitted)
        text: Option<String>,

        /// Runner-up names to show per reference
        #[arg(short, long, default_value = "0")]
        alternatives: usize,
    },

    /// Render a single item by exact name
    Render {
        /// Item name
        name: String,
    },

    /// List catalog names in declaration order
    Names,
}

fn read_text(text: Option<String>) -> anyhow::Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "deadlock_item_bot=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = EngineConfig::from_env()?;
    if let Some(path) = cli.catalog {
        config.catalog_path = path;
    }
    if let Some(min_confidence) = cli.min_confidence {
        config = config.with_min_confidence(min_confidence);
    }

    let engine = ReplyEngine::load(&config)?;

    match cli.command {
        Commands::Reply { text } => {
            let text = read_text(text)?;

            match engine.process_comment(&text) {
                CommentOutcome::Reply { body, .. } => println!("{}", body),
                CommentOutcome::NoReferences => eprintln!("No [[item]] references found"),
                CommentOutcome::NoMatches { referenced } => {
                    eprintln!("None of {} references matched with confidence >= {}", referenced, config.min_confidence)
                }
            }
        }

        Commands::Match { text, alternatives } => {
            let text = read_text(text)?;
            let references = extract_references(&text);
            let ranker = config.metric.ranker();

            for reference in &references {
                let ranked = ranking::rank(ranker.as_ref(), reference, engine.catalog().all_names());
                let Some(best) = ranked.first() else {
                    println!("[[{}]] → (empty catalog)", reference);
                    continue;
                };

                let verdict = if best.score >= config.min_confidence { "✅" } else { "❌" };
                println!("{} [[{}]] → {} ({:.3})", verdict, reference, best.name, best.score);

                for alt in ranked.iter().skip(1).take(alternatives) {
                    println!("      {} ({:.3})", alt.name, alt.score);
                }
            }

            let matched = engine.matcher().match_references(&references, config.min_confidence);
            println!("\nMatched {} out of {} references", matched.len(), references.len());
        }

        Commands::Render { name } => {
            let item = engine.catalog().get(&name)?;
            print!("{}", render_item(item));
        }

        Commands::Names => {
            for name in engine.catalog().all_names() {
                println!("{}", name);
            }
        }
    }

    Ok(())
}
