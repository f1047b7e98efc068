// src/config.rs
use std::net::{Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_TOP_P: f32 = 0.9;
pub const DEFAULT_MAX_TOKENS: u32 = 512;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

/// Sampling knobs forwarded verbatim in every completion request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplingParams {
    pub temperature: f32,
    pub top_p: f32,
    pub max_tokens: u32,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            top_p: DEFAULT_TOP_P,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

#[derive(Clone, Debug)]
pub struct InferenceConfig {
    pub api_url: String,
    pub model: String,
    pub timeout: Duration,
    pub sampling: SamplingParams,
}

impl InferenceConfig {
    pub fn new(api_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            model: model.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            sampling: SamplingParams::default(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub inference: InferenceConfig,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_url = get("OLLAMA_API_URL").ok_or(ConfigError::Missing("OLLAMA_API_URL"))?;
        let model = get("OLLAMA_MODEL_NAME").ok_or(ConfigError::Missing("OLLAMA_MODEL_NAME"))?;

        let bind_addr = parse_or("BIND_ADDR", get("BIND_ADDR"), || {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT))
        })?;
        let timeout_secs = parse_or("INFERENCE_TIMEOUT_SECS", get("INFERENCE_TIMEOUT_SECS"), || {
            DEFAULT_TIMEOUT_SECS
        })?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "INFERENCE_TIMEOUT_SECS",
                value: "0".to_string(),
            });
        }

        let sampling = SamplingParams {
            temperature: parse_or("INFERENCE_TEMPERATURE", get("INFERENCE_TEMPERATURE"), || {
                DEFAULT_TEMPERATURE
            })?,
            top_p: parse_or("INFERENCE_TOP_P", get("INFERENCE_TOP_P"), || DEFAULT_TOP_P)?,
            max_tokens: parse_or("INFERENCE_MAX_TOKENS", get("INFERENCE_MAX_TOKENS"), || {
                DEFAULT_MAX_TOKENS
            })?,
        };

        Ok(Self {
            bind_addr,
            inference: InferenceConfig {
                api_url: api_url.trim().to_string(),
                model: model.trim().to_string(),
                timeout: Duration::from_secs(timeout_secs),
                sampling,
            },
        })
    }
}

fn parse_or<T, D>(key: &'static str, raw: Option<String>, default: D) -> Result<T, ConfigError>
where
    T: FromStr,
    D: FnOnce() -> T,
{
    match raw {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default()),
    }
}
