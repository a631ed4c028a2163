//! Repair of markup commands that lost their leading backslash.
//!
//! Models write `\text{N}` inside JSON strings; when the escaping goes wrong the
//! `\t` turns into a tab and `ext{N}` is left behind. Only whole tokens (runs of
//! non-whitespace bounded by whitespace or the string edges) are repaired.

use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Damaged token prefixes of commands that take a braced argument, with their
/// restored form. `\t` and `\f` are lost whole when JSON decodes them as escapes.
const PREFIX_COMMANDS: &[(&str, &str)] = &[
    ("ext{", "\\text{"),
    ("rac{", "\\frac{"),
    ("sqrt{", "\\sqrt{"),
];

/// Commands that appear as bare words.
const WORD_COMMANDS: &[&str] = &[
    "times", "alpha", "beta", "theta", "lambda", "mu", "pi", "Delta", "Omega",
];

static TOKEN: OnceLock<Regex> = OnceLock::new();

fn token_regex() -> &'static Regex {
    TOKEN.get_or_init(|| Regex::new(r"\S+").expect("token pattern is valid"))
}

/// Re-insert the missing backslash in front of known command tokens.
/// Whitespace is preserved and tokens that already start with `\` are left alone.
pub fn repair(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    token_regex()
        .replace_all(text, |caps: &Captures| repair_token(&caps[0]))
        .into_owned()
}

fn repair_token(token: &str) -> String {
    if WORD_COMMANDS.contains(&token) {
        return format!("\\{}", token);
    }
    for (broken, restored) in PREFIX_COMMANDS {
        if let Some(rest) = token.strip_prefix(*broken) {
            return format!("{}{}", restored, rest);
        }
    }
    token.to_string()
}
