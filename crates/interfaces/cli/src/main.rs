mod assess;
mod interactive;

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mindspace_assessment::QUESTION_BANK;
use mindspace_config::AppConfig;
use mindspace_mood::{MoodLabel, classify, match_counts};

#[derive(Debug, Parser)]
#[command(
    name = "mindspace",
    version,
    about = "Wellness chat companion with mood tracking and a personality check-in"
)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, global = true, default_value = "config/default.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Classify the mood of a piece of text.
    Mood {
        /// Show the keyword hit count for every mood.
        #[arg(long)]
        verbose: bool,
        #[arg(required = true, trailing_var_arg = true)]
        text: Vec<String>,
    },
    /// List the personality questionnaire.
    Questions,
    /// Take the personality assessment.
    Assess {
        /// Comma-separated answers (1-5) instead of interactive prompts,
        /// e.g. `--answers 4,2,5,3,4,2,1,5,4,4,3,4`.
        #[arg(long, value_name = "LIST")]
        answers: Option<String>,
        /// Print the results as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Chat with the configured backend (default).
    Chat,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = AppConfig::load_from(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.telemetry.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Mood { verbose, text } => run_mood(&text.join(" "), verbose),
        Commands::Questions => {
            run_questions();
            Ok(())
        }
        Commands::Assess { answers, json } => match answers {
            Some(list) => assess::run_scripted(&list, json),
            None => assess::run_interactive(json),
        },
        Commands::Chat => interactive::run_chat_session(&config).await,
    }
}

fn run_mood(text: &str, verbose: bool) -> Result<()> {
    if text.trim().is_empty() {
        bail!("nothing to classify");
    }
    let mood = classify(text);
    println!("{}", describe_mood(mood));
    if verbose {
        for (label, hits) in match_counts(text) {
            println!("  {:<10} {hits}", label.slug());
        }
    }
    Ok(())
}

pub(crate) fn describe_mood(mood: MoodLabel) -> String {
    format!("Mood: {} ({}, {})", mood.display_text(), mood.slug(), mood.color())
}

fn run_questions() {
    println!("── personality questionnaire ────────────────────────");
    for question in &QUESTION_BANK {
        let reversed = if question.reverse_scored { " (reversed)" } else { "" };
        println!(
            "  {:>2}. [{}{}] {}",
            question.id, question.r#trait, reversed, question.text
        );
    }
    println!("  ({} questions total)", QUESTION_BANK.len());
}
