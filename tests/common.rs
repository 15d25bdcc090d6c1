// ABOUTME: Shared test utilities for integration tests
// ABOUTME: Provides a scriptable mock completion provider and log-record builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitForge Labs
#![allow(dead_code, clippy::missing_panics_doc, clippy::must_use_candidate)]
//! Shared test utilities for `fitforge_core`

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use fitforge_core::errors::AppError;
use fitforge_core::llm::{ChatRequest, ChatResponse, LlmProvider};
use fitforge_core::models::{LoggedExercise, WorkoutLogRecord};

/// What the mock provider should do when called
pub enum MockOutcome {
    /// Return this text as the completion content
    Respond(String),
    /// Fail the call with a transport-style error
    TransportError(String),
}

/// Scriptable completion provider for exercising the requesters offline
pub struct MockProvider {
    outcome: MockOutcome,
    calls: AtomicUsize,
    last_request: Mutex<Option<ChatRequest>>,
}

impl MockProvider {
    pub fn responding(content: impl Into<String>) -> Self {
        Self {
            outcome: MockOutcome::Respond(content.into()),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: MockOutcome::TransportError(message.into()),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Number of completion calls made through this provider
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The most recent request, if any call was made
    pub fn last_request(&self) -> Option<ChatRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn display_name(&self) -> &'static str {
        "Mock Provider"
    }

    fn default_model(&self) -> &str {
        "mock-model"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());

        match &self.outcome {
            MockOutcome::Respond(content) => Ok(ChatResponse {
                content: content.clone(),
                model: "mock-model".to_owned(),
                usage: None,
                finish_reason: Some("stop".to_owned()),
            }),
            MockOutcome::TransportError(message) => {
                Err(AppError::external_service("mock", message.clone()))
            }
        }
    }

    async fn health_check(&self) -> Result<bool, AppError> {
        Ok(true)
    }
}

/// A plausible logged workout on the given June 2025 day
pub fn workout_log(day: u32) -> WorkoutLogRecord {
    WorkoutLogRecord {
        date: NaiveDate::from_ymd_opt(2025, 6, day).unwrap(),
        exercises: vec![
            LoggedExercise {
                name: "Squats".to_owned(),
                sets: 3,
                reps: 12,
            },
            LoggedExercise {
                name: "Bench Press".to_owned(),
                sets: 3,
                reps: 10,
            },
        ],
        duration: 45,
        mood: Some("energized".to_owned()),
        notes: Some("Felt strong today".to_owned()),
    }
}
