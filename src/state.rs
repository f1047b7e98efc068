// src/state.rs
use std::sync::Arc;

use crate::services::inference::InferenceClient;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub inference: InferenceClient,
}

impl AppState {
    pub fn new(inference: InferenceClient) -> Self {
        Self { inference }
    }
}
