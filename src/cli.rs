//! CLI definitions: argument parsing, subcommands, and help text.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  quizgen battle -n 8                               Questions for a two-player battle
  quizgen practice --subject Physics --topic Optics Practice exam on one topic
  quizgen practice --subject History --preference \"dates only\"
  quizgen normalize reply.txt --format json         Clean a saved model reply offline
  quizgen subjects                                  List practice subjects
  quizgen config                                    Show config path and key status
  quizgen completions bash                          Generate bash completions
";

/// Largest question count a single request may ask for.
pub const MAX_COUNT: usize = 50;

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Generate multiple-choice quiz questions with a language model",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format for generated questions
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Override the model
    #[arg(short = 'm', long, global = true, help = "Model ID (e.g. google/gemini-2.5-flash)")]
    pub model: Option<String>,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a general-physics question set for a two-player battle
    Battle {
        /// Number of questions
        #[arg(short = 'n', long, default_value_t = 10, value_parser = parse_count)]
        count: usize,
    },
    /// Generate a practice exam for a subject
    Practice {
        /// Subject, e.g. Physics (see `quizgen subjects`)
        #[arg(short, long)]
        subject: String,
        /// Topic to cover (repeatable)
        #[arg(short, long = "topic")]
        topics: Vec<String>,
        /// Number of questions
        #[arg(short = 'n', long, default_value_t = 5, value_parser = parse_count)]
        count: usize,
        /// Free-text preference passed to the model
        #[arg(short, long)]
        preference: Option<String>,
    },
    /// Extract and normalize questions from a saved model reply (no network)
    Normalize {
        /// File with the raw reply ('-' or omitted reads stdin)
        input: Option<String>,
    },
    /// List practice subjects and topics
    Subjects,
    /// Show config path, model, and API key status
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Store the OpenRouter API key (reads stdin if KEY is omitted)
    SetApiKey {
        key: Option<String>,
    },
}

fn parse_count(s: &str) -> Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    if (1..=MAX_COUNT).contains(&n) {
        Ok(n)
    } else {
        Err(format!("count must be between 1 and {}", MAX_COUNT))
    }
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }
}
