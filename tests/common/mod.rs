#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::{Router, extract::State, http::StatusCode, routing::post};
use persona_chat_backend::config::InferenceConfig;
use persona_chat_backend::message::Persona;
use persona_chat_backend::services::inference::InferenceClient;
use serde_json::{Value, json};

pub const COMPLETIONS_PATH: &str = "/v1/chat/completions";

pub fn persona() -> Persona {
    Persona {
        name: "박철수".to_string(),
        age: 58,
        gender: "남성".to_string(),
        symptom: "계단을 오르면 가슴이 조인다".to_string(),
        history: "흡연 30년, 아버지 심근경색".to_string(),
        personality: "말수가 적고 참을성이 많다".to_string(),
        diagnosis: "안정형 협심증".to_string(),
    }
}

pub fn completion(content: &str) -> Value {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
}

pub fn client_for(url: impl Into<String>) -> InferenceClient {
    client_with_timeout(url, Duration::from_secs(5))
}

pub fn client_with_timeout(url: impl Into<String>, timeout: Duration) -> InferenceClient {
    let mut config = InferenceConfig::new(url, "test-model");
    config.timeout = timeout;
    InferenceClient::new(config).unwrap()
}

/// One scripted reply from the stub endpoint.
#[derive(Clone)]
pub struct Reply {
    status: StatusCode,
    body: String,
    delay: Duration,
}

pub fn ok(content: &str) -> Reply {
    Reply { status: StatusCode::OK, body: completion(content).to_string(), delay: Duration::ZERO }
}

pub fn status(status: StatusCode, body: &str) -> Reply {
    Reply { status, body: body.to_string(), delay: Duration::ZERO }
}

/// A valid answer that only arrives after `delay`.
pub fn slow(delay: Duration, content: &str) -> Reply {
    Reply { delay, ..ok(content) }
}

#[derive(Clone)]
struct Script {
    replies: Arc<Vec<Reply>>,
    hits: Arc<AtomicUsize>,
}

async fn scripted(State(script): State<Script>) -> (StatusCode, String) {
    let n = script.hits.fetch_add(1, Ordering::SeqCst);
    let reply = script.replies[n.min(script.replies.len() - 1)].clone();
    if !reply.delay.is_zero() {
        tokio::time::sleep(reply.delay).await;
    }
    (reply.status, reply.body)
}

/// A completion endpoint that plays back `replies` in order, repeating the
/// last one once the script runs out.
pub struct ScriptedEndpoint {
    pub url: String,
    hits: Arc<AtomicUsize>,
}

impl ScriptedEndpoint {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

pub async fn scripted_endpoint(replies: Vec<Reply>) -> ScriptedEndpoint {
    assert!(!replies.is_empty());
    let hits = Arc::new(AtomicUsize::new(0));
    let script = Script { replies: Arc::new(replies), hits: hits.clone() };

    let app = Router::new().route(COMPLETIONS_PATH, post(scripted)).with_state(script);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    ScriptedEndpoint { url: format!("http://{}{}", addr, COMPLETIONS_PATH), hits }
}
