//! Practice subjects and their topics.
//!
//! Loaded from `config/subjects.json` (embedded at compile time).

use std::sync::OnceLock;

use serde::Deserialize;

/// A practice subject. Notation-heavy subjects get extra prompt guidance for math.
#[derive(Clone, Debug, Deserialize)]
pub struct Subject {
    pub name: String,
    pub notation_heavy: bool,
    pub topics: Vec<String>,
}

fn load_subjects() -> Vec<Subject> {
    let json = include_str!("../../config/subjects.json");
    serde_json::from_str(json).expect("subjects.json must be valid")
}

static SUBJECTS: OnceLock<Vec<Subject>> = OnceLock::new();

/// All subjects, loading from config on first access.
pub fn subjects() -> &'static [Subject] {
    SUBJECTS.get_or_init(load_subjects)
}

/// Look up a subject by name (case-insensitive).
pub fn find(name: &str) -> Option<&'static Subject> {
    let name = name.trim();
    subjects().iter().find(|s| s.name.eq_ignore_ascii_case(name))
}

/// Whether prompts for this subject need math notation guidance. Unknown subjects do not.
pub fn is_notation_heavy(name: &str) -> bool {
    find(name).is_some_and(|s| s.notation_heavy)
}
