// ABOUTME: Completion service configuration injected into providers at construction
// ABOUTME: Replaces ambient credentials with an explicit, testable config struct
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitForge Labs

//! # Completion Service Configuration
//!
//! All credentials and model parameters for the external completion service
//! live in [`CompletionConfig`] and are handed to a provider at construction
//! time. Nothing in this crate reads the environment at call time.
//!
//! ## Environment variables (read once by [`CompletionConfig::from_env`])
//!
//! - `FITFORGE_LLM_BASE_URL`: API endpoint (default: `OpenAI` cloud)
//! - `FITFORGE_LLM_API_KEY`: API key (required for the cloud endpoint,
//!   optional for self-hosted `OpenAI`-compatible servers)
//! - `FITFORGE_LLM_MODEL`: model identifier (default: `gpt-3.5-turbo`)

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;

use crate::errors::{AppError, ErrorCode};

/// Environment variable for the completion API base URL
const BASE_URL_ENV: &str = "FITFORGE_LLM_BASE_URL";

/// Environment variable for the completion API key
const API_KEY_ENV: &str = "FITFORGE_LLM_API_KEY";

/// Environment variable for the completion model
const MODEL_ENV: &str = "FITFORGE_LLM_MODEL";

/// Default base URL (OpenAI cloud, chat completions family)
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default model for all requesters
const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Connection timeout
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Request timeout (generation can take a while on loaded backends)
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Configuration for the external completion service
///
/// Constructed once by the application layer and injected into
/// [`crate::llm::OpenAiProvider`]. Cloning is cheap enough to hand a copy
/// to each worker.
#[derive(Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// Base URL of the OpenAI-compatible endpoint
    pub base_url: String,
    /// API key; `None` is accepted for self-hosted endpoints
    pub api_key: Option<String>,
    /// Model identifier sent with every request
    pub model: String,
    /// TCP connect timeout in seconds
    pub connect_timeout_secs: u64,
    /// End-to-end request timeout in seconds
    pub request_timeout_secs: u64,
}

impl CompletionConfig {
    /// Create a configuration for the given endpoint and key
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key,
            model: DEFAULT_MODEL.to_owned(),
            connect_timeout_secs: CONNECT_TIMEOUT_SECS,
            request_timeout_secs: REQUEST_TIMEOUT_SECS,
        }
    }

    /// Read the configuration from environment variables
    ///
    /// The API key is mandatory when targeting the default cloud endpoint;
    /// self-hosted endpoints (set via `FITFORGE_LLM_BASE_URL`) may omit it.
    ///
    /// # Errors
    ///
    /// Returns an error if `FITFORGE_LLM_API_KEY` is unset while the base
    /// URL is the default cloud endpoint.
    pub fn from_env() -> Result<Self, AppError> {
        let base_url = env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());
        let api_key = env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty());

        if api_key.is_none() && base_url == DEFAULT_BASE_URL {
            return Err(AppError::new(
                ErrorCode::ConfigMissing,
                format!("Missing {API_KEY_ENV} environment variable for the cloud endpoint"),
            ));
        }

        let model = env::var(MODEL_ENV).unwrap_or_else(|_| DEFAULT_MODEL.to_owned());

        Ok(Self {
            base_url,
            api_key,
            model,
            connect_timeout_secs: CONNECT_TIMEOUT_SECS,
            request_timeout_secs: REQUEST_TIMEOUT_SECS,
        })
    }

    /// Override the model identifier
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the request timeout
    #[must_use]
    pub const fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, None)
    }
}

// Manual Debug so logs and panics never leak the API key.
impl fmt::Debug for CompletionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionConfig")
            .field("base_url", &self.base_url)
            .field(
                "api_key",
                &self.api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field("model", &self.model)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}
