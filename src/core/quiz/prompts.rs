//! Prompt and schema construction for the two game modes.

use serde_json::{Value, json};

use crate::core::llm::GenerationRequest;
use crate::core::subjects;

const INSTRUCTION: &str = "You are a quiz author. Reply with a JSON array only, no prose. \
Each element has \"question\" (string), \"options\" (array of strings), \
\"correctIndex\" (0-based integer into options) and \"explanation\" (string).";

const NOTATION_GUIDANCE: &str = "Write math inline between single dollar signs, e.g. $F = ma$. \
Because the reply is JSON, every LaTeX backslash must be escaped: write \"\\\\frac{1}{2}\", \
\"\\\\text{ N}\" and \"\\\\times\", never a single backslash. \
Prefer short expressions and put units in \\\\text{...}.";

/// Parameters of a practice exam.
#[derive(Debug, Clone, Default)]
pub struct PracticeParams {
    pub subject: String,
    pub topics: Vec<String>,
    pub count: usize,
    pub preference: Option<String>,
}

/// Structured-output schema: an array of question objects.
pub fn question_schema() -> Value {
    json!({
        "type": "array",
        "items": {
            "type": "object",
            "properties": {
                "question": {"type": "string"},
                "options": {"type": "array", "items": {"type": "string"}},
                "correctIndex": {"type": "integer"},
                "explanation": {"type": "string"},
            },
            "required": ["question", "options", "correctIndex"],
        },
    })
}

/// Battle mode: a fixed general-physics set sized for a fast two-player round.
pub fn battle_request(count: usize) -> GenerationRequest {
    let prompt = format!(
        "Generate {} multiple-choice questions on general physics for a fast two-player quiz battle. \
Each question must be answerable in under 15 seconds, have exactly 4 short options and one correct answer. \
Mix mechanics, electricity, waves and thermodynamics.\n\n{}",
        count, NOTATION_GUIDANCE
    );
    GenerationRequest {
        instruction: INSTRUCTION.to_string(),
        prompt,
        schema: question_schema(),
    }
}

/// Practice mode: subject and topics chosen by the player, with optional free-text preference.
pub fn practice_request(params: &PracticeParams) -> GenerationRequest {
    let mut prompt = format!(
        "Generate {} multiple-choice exam questions on {}",
        params.count,
        params.subject.trim()
    );
    let topics: Vec<&str> = params
        .topics
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .collect();
    if !topics.is_empty() {
        prompt.push_str(&format!(" covering these topics: {}", topics.join(", ")));
    }
    prompt.push_str(
        ". Each question has exactly 4 options, one correct answer, and a one or two sentence explanation.",
    );
    if let Some(pref) = params
        .preference
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
    {
        prompt.push_str(&format!("\n\nPlayer preference: {}", pref));
    }
    if subjects::is_notation_heavy(&params.subject) {
        prompt.push_str("\n\n");
        prompt.push_str(NOTATION_GUIDANCE);
    }
    GenerationRequest {
        instruction: INSTRUCTION.to_string(),
        prompt,
        schema: question_schema(),
    }
}
