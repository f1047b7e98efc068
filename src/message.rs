// src/message.rs
use serde::{Deserialize, Serialize};

/// Who authored a chat turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self { role, content: content.into() }
    }
}

/// The simulated patient. `diagnosis` is handed to the model but the
/// patient is instructed not to know it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    #[serde(rename = "personaName")]
    pub name: String,
    #[serde(rename = "personaAge")]
    pub age: u32,
    #[serde(rename = "personaGender")]
    pub gender: String,
    #[serde(rename = "personaSymptom")]
    pub symptom: String,
    #[serde(rename = "personaHistory")]
    pub history: String,
    #[serde(rename = "personaPersonality")]
    pub personality: String,
    #[serde(rename = "personaDisease")]
    pub diagnosis: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(flatten)]
    pub persona: Persona,
    pub messages: Vec<Message>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
}
