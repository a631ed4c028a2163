//! # quizgen
//!
//! Generates multiple-choice questions with a language model and normalizes the
//! model's free-text reply into clean, validated questions.
//!
//! ## Features
//! - Battle mode: a fixed general-physics set for two players
//! - Practice mode: subject, topics, and free-text preference
//! - Offline normalization of a saved model reply

mod cli;
mod core;
mod run;

use clap::{CommandFactory, Parser};
use dotenv::dotenv;

use cli::{Args, Commands, ConfigSubcommand};
use crate::core::quiz::PracticeParams;

fn load_config() -> core::config::Config {
    core::config::load().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    let args = Args::parse();
    run::init_logger(&args);

    match &args.command {
        Commands::Battle { count } => {
            let config = load_config();
            run::run_battle(&args, &config, *count).await?;
        }
        Commands::Practice {
            subject,
            topics,
            count,
            preference,
        } => {
            let config = load_config();
            let params = PracticeParams {
                subject: subject.clone(),
                topics: topics.clone(),
                count: *count,
                preference: preference.clone(),
            };
            run::run_practice(&args, &config, params).await?;
        }
        Commands::Normalize { input } => run::run_normalize(&args, input.as_deref())?,
        Commands::Subjects => core::cli::run_subjects(),
        Commands::Config { subcommand } => match subcommand {
            Some(ConfigSubcommand::SetApiKey { key }) => {
                core::cli::run_config_set_api_key(key.clone())
            }
            None => core::cli::run_config(),
        },
        Commands::Completions { shell } => {
            let mut cmd = Args::command();
            cli::generate(*shell, &mut cmd, core::app::NAME, &mut std::io::stdout());
        }
    }

    Ok(())
}
