//! Run modes: logger init, question generation, offline normalization, output.

use std::io;

use crate::cli::{Args, OutputFormat};
use crate::core::config::Config;
use crate::core::llm::OpenRouterModel;
use crate::core::quiz::{self, Batch, PracticeParams, Question};

/// Batch prefix for questions read from a saved reply.
const IMPORT_PREFIX: &str = "import";

/// Initialize env_logger on stderr. RUST_LOG overrides the -v/-q level.
pub fn init_logger(args: &Args) {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_level()),
    )
    .try_init();
}

fn model_for(args: &Args, config: &Config) -> OpenRouterModel {
    let model = args.model.as_deref().unwrap_or(&config.model_id);
    let client = OpenRouterModel::new(config, model);
    log::info!("Using model {}", client.model());
    client
}

/// Generate a battle set and print it.
pub async fn run_battle(
    args: &Args,
    config: &Config,
    count: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let model = model_for(args, config);
    let questions = quiz::generate_battle(&model, count).await;
    print_questions(&questions, args.format)
}

/// Generate a practice exam and print it.
pub async fn run_practice(
    args: &Args,
    config: &Config,
    params: PracticeParams,
) -> Result<(), Box<dyn std::error::Error>> {
    let model = model_for(args, config);
    let questions = quiz::generate_practice(&model, &params).await;
    print_questions(&questions, args.format)
}

/// Normalize a saved model reply from a file or stdin.
pub fn run_normalize(args: &Args, input: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let text = match input {
        None | Some("-") => io::read_to_string(io::stdin())?,
        Some(path) => std::fs::read_to_string(path)?,
    };
    let candidates = quiz::extract(&text);
    let questions = quiz::normalize_all(&candidates, &Batch::new(IMPORT_PREFIX), usize::MAX);
    print_questions(&questions, args.format)
}

/// Print questions; an empty list is reported on stderr with exit status 1.
fn print_questions(
    questions: &[Question],
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    if questions.is_empty() {
        eprintln!("No questions could be generated. Please try again.");
        std::process::exit(1);
    }
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(questions)?),
        OutputFormat::Text => {
            let blocks: Vec<String> = questions
                .iter()
                .enumerate()
                .map(|(i, q)| q.to_plain_text(i + 1))
                .collect();
            print!("{}", blocks.join("\n"));
        }
    }
    Ok(())
}
