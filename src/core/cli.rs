//! Offline commands: config info, API key storage, subject listing.
//!
//! These never call the model and produce plain text output.

use std::env;
use std::io::{self, Read};

use crate::core::api_key;
use crate::core::app;
use crate::core::config;
use crate::core::paths;
use crate::core::subjects;

/// Run the `config` command: display paths, model, and API key status.
pub fn run_config() {
    let config_dir = paths::config_dir()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "-".to_string());

    let model_source = if env::var("OPENROUTER_MODEL")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .is_some()
    {
        "from OPENROUTER_MODEL"
    } else {
        "default"
    };

    let api_key_status = match env::var("OPENROUTER_API_KEY")
        .ok()
        .filter(|s| !s.trim().is_empty())
    {
        Some(key) => format!("{} (from OPENROUTER_API_KEY)", api_key::mask(&key)),
        None => match api_key::load_api_key() {
            Some(key) => format!("{} (stored)", api_key::mask(&key)),
            None => "not set".to_string(),
        },
    };

    println!("{} {}", app::NAME, app::VERSION);
    println!("Config:   {}", config_dir);
    println!("Model:    {} ({})", config::model_id(), model_source);
    println!("API key:  {}", api_key_status);
}

/// Run the `config set-api-key` command: store API key in config directory.
/// Reads the key from stdin when not given as an argument.
pub fn run_config_set_api_key(api_key: Option<String>) {
    let key = match api_key {
        Some(k) if !k.trim().is_empty() => k,
        _ => {
            let mut buf = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buf) {
                eprintln!("Error reading from stdin: {}", e);
                std::process::exit(1);
            }
            buf
        }
    };

    match api_key::store_api_key(&key) {
        Ok(path) => println!("API key saved to {}", path.display()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Run the `subjects` command: list practice subjects and their topics.
pub fn run_subjects() {
    for subject in subjects::subjects() {
        let marker = if subject.notation_heavy { " (math notation)" } else { "" };
        println!("{}{}", subject.name, marker);
        for topic in &subject.topics {
            println!("  - {}", topic);
        }
    }
}
