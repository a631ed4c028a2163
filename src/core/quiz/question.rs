//! Canonical question record and the batch it belongs to.

use serde::{Deserialize, Serialize};

/// Explanation shown when the model did not provide one.
pub const DEFAULT_EXPLANATION: &str = "No explanation provided.";

/// A validated multiple-choice question, safe to display.
///
/// Invariants: `options.len() >= 2` and `correct_index < options.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub text: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    pub explanation: String,
}

impl Question {
    /// Letter label for an option position (A, B, C, ...).
    pub fn option_label(index: usize) -> char {
        u8::try_from(index)
            .ok()
            .filter(|i| *i < 26)
            .map(|i| (b'A' + i) as char)
            .unwrap_or('?')
    }

    /// Multi-line plain-text rendering with the answer key at the end.
    pub fn to_plain_text(&self, number: usize) -> String {
        let mut out = format!("{}. {}\n", number, self.text);
        for (i, option) in self.options.iter().enumerate() {
            out.push_str(&format!("   {}) {}\n", Self::option_label(i), option));
        }
        out.push_str(&format!(
            "   Answer: {}. {}\n",
            Self::option_label(self.correct_index),
            self.explanation
        ));
        out
    }
}

/// Identity shared by every question of one generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    prefix: String,
    created_at: i64,
}

impl Batch {
    /// New batch stamped with the current time (milliseconds since the Unix epoch).
    pub fn new(prefix: &str) -> Self {
        Self::with_timestamp(prefix, chrono::Utc::now().timestamp_millis())
    }

    pub fn with_timestamp(prefix: &str, created_at: i64) -> Self {
        Self {
            prefix: prefix.to_string(),
            created_at,
        }
    }

    /// Id for the item at `position`; unique within the batch.
    pub fn question_id(&self, position: usize) -> String {
        format!("{}-{}-{}", self.prefix, self.created_at, position)
    }
}
