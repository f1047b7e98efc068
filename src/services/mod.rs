// src/services/mod.rs
pub mod chatbot;
pub mod inference;
pub mod prompt_builder;
