use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use plurality::{int_to_words, PluralityConfig, Pluralizer};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "plurality")]
#[command(about = "Heuristic English pluralizer for nouns, noun phrases, verbs and pronouns")]
#[command(version)]
struct Args {
    /// TOML config naming irregular dictionaries
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Irregular noun dictionary, layered over the built-in table
    #[arg(long, global = true)]
    noun_lexicon: Option<PathBuf>,

    /// Irregular verb dictionary, layered over the built-in table
    #[arg(long, global = true)]
    verb_lexicon: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Pluralize a single noun
    Noun {
        word: String,
        #[arg(long, default_value_t = 2, allow_negative_numbers = true)]
        count: i64,
    },
    /// Pluralize a noun phrase, spelling out the count ("a bag of holding" -> "three bags of holding")
    Phrase {
        phrase: String,
        /// Negative counts omit the number
        #[arg(long, allow_negative_numbers = true)]
        count: i64,
    },
    /// Convert a third-person singular verb to its plural-subject form
    Verb { word: String },
    /// Pluralize a pronoun
    Pronoun {
        word: String,
        #[arg(long, default_value_t = 2, allow_negative_numbers = true)]
        count: i64,
    },
    /// Spell out a number between -99 and 99
    Number {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
    /// Pluralize every non-empty line of a file as a noun phrase
    Batch {
        input: PathBuf,
        #[arg(long, allow_negative_numbers = true)]
        count: i64,
        /// Emit one JSON object per line instead of plain text
        #[arg(long)]
        json: bool,
    },
}

/// One converted line of batch output
#[derive(Serialize, Debug)]
struct BatchRecord<'a> {
    line: usize,
    singular: &'a str,
    plural: String,
}

async fn build_pluralizer(args: &Args) -> Result<Pluralizer> {
    let mut config = match &args.config {
        Some(path) => PluralityConfig::load(path).await?,
        None => PluralityConfig::default(),
    };

    // WHY: command-line dictionaries take precedence over the config file
    if args.noun_lexicon.is_some() {
        config.noun_lexicon = args.noun_lexicon.clone();
    }
    if args.verb_lexicon.is_some() {
        config.verb_lexicon = args.verb_lexicon.clone();
    }

    if config.noun_lexicon.is_none() && config.verb_lexicon.is_none() {
        return Ok(Pluralizer::global().clone());
    }
    config.build_pluralizer().await
}

async fn run_batch(pluralizer: &Pluralizer, input: &Path, count: i64, json: bool) -> Result<()> {
    let file = tokio::fs::File::open(input)
        .await
        .with_context(|| format!("Failed to open {}", input.display()))?;
    let mut lines = BufReader::new(file).lines();
    let mut line_no = 0usize;
    let mut converted = 0usize;

    while let Some(line) = lines
        .next_line()
        .await
        .with_context(|| format!("Failed to read {} at line {}", input.display(), line_no + 1))?
    {
        line_no += 1;
        if line.trim().is_empty() {
            continue;
        }

        let plural = pluralizer.noun_phrase(&line, count);
        if json {
            let record = BatchRecord {
                line: line_no,
                singular: &line,
                plural,
            };
            println!("{}", serde_json::to_string(&record)?);
        } else {
            println!("{plural}");
        }
        converted += 1;
    }

    info!("Batch complete: {} phrases from {} lines", converted, line_no);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // WHY: diagnostics go to stderr as JSON so stdout carries only results
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .json()
        .init();

    let args = Args::parse();
    info!(?args, "Parsed CLI arguments");

    let pluralizer = build_pluralizer(&args).await?;

    match &args.command {
        Command::Noun { word, count } => println!("{}", pluralizer.noun(word, *count)),
        Command::Phrase { phrase, count } => println!("{}", pluralizer.noun_phrase(phrase, *count)),
        Command::Verb { word } => println!("{}", pluralizer.verb(word)),
        Command::Pronoun { word, count } => println!("{}", pluralizer.pronoun(word, *count)),
        Command::Number { n } => println!("{}", int_to_words(*n)),
        Command::Batch { input, count, json } => run_batch(&pluralizer, input, *count, *json).await?,
    }

    Ok(())
}
