// src/services/chatbot.rs
use tracing::{error, info, warn};

use crate::message::{Message, Persona};
use crate::services::inference::InferenceClient;
use crate::services::prompt_builder::build_prompt;

pub const MAX_ATTEMPTS: usize = 3;

/// Answers shorter than this (in characters) are treated as junk. One
/// syllable such as "네" is a complete patient answer.
pub const MIN_ANSWER_CHARS: usize = 1;

/// Placeholder text that marks a failed generation.
pub const FAILURE_PREFIX: &str = "AI 응답 생성에 실패했습니다";

/// Returned once every attempt has been used up.
pub const FALLBACK_ANSWER: &str =
    "죄송합니다. 지금은 답변을 생성할 수 없습니다. 잠시 후 다시 시도해 주세요.";

#[derive(Debug, PartialEq, Eq)]
pub enum Verdict {
    Accept,
    TooShort,
    ErrorPlaceholder,
}

pub fn judge_answer(answer: &str) -> Verdict {
    let answer = answer.trim();
    if answer.starts_with(FAILURE_PREFIX) {
        Verdict::ErrorPlaceholder
    } else if answer.chars().count() < MIN_ANSWER_CHARS {
        Verdict::TooShort
    } else {
        Verdict::Accept
    }
}

/// Ask the model to answer as `persona`, retrying up to [`MAX_ATTEMPTS`]
/// times. Never fails: exhaustion yields [`FALLBACK_ANSWER`].
pub async fn generate_reply(client: &InferenceClient, persona: &Persona, history: &[Message]) -> String {
    let prompt = build_prompt(persona, history);

    for attempt in 1..=MAX_ATTEMPTS {
        match client.complete(&prompt).await {
            Ok(answer) => match judge_answer(&answer) {
                Verdict::Accept => {
                    info!(attempt, chars = answer.chars().count(), "accepted answer");
                    return answer;
                }
                verdict => {
                    warn!(attempt, ?verdict, "rejected answer from inference endpoint");
                }
            },
            Err(e) => {
                warn!(attempt, timeout = e.is_timeout(), error = %e, "inference attempt failed");
            }
        }
    }

    error!(attempts = MAX_ATTEMPTS, "inference endpoint gave no usable answer");
    FALLBACK_ANSWER.to_string()
}
