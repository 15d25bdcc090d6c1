// ABOUTME: Workout-analysis requester summarizing logged workouts into insights
// ABOUTME: Degrades unparseable analysis to a raw-text envelope instead of synthesizing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitForge Labs

//! # Workout Analysis Requester
//!
//! Summarizes a user's logged workouts into structured insights. Unlike the
//! meal and workout requesters there is no post-processing and no templated
//! fallback: free-form analysis has no fixed schema to reconstruct, so a
//! failed parse degrades to a raw-text envelope. Fewer than three logged
//! workouts yields the insufficient-data outcome without any service call -
//! two data points cannot support a trend.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::generation::prompts::{build_analysis_prompt, ANALYSIS_SYSTEM_PROMPT};
use crate::generation::sanitize::sanitize;
use crate::llm::{ChatMessage, ChatRequest, LlmProvider};
use crate::models::{WorkoutAnalysis, WorkoutLogRecord};

/// Upper bound on generated tokens
const ANALYSIS_MAX_TOKENS: u32 = 800;

/// Low temperature: analysis should be consistent, not creative
const ANALYSIS_TEMPERATURE: f32 = 0.5;

/// Minimum logged workouts for a meaningful analysis
pub const MIN_LOGS_FOR_ANALYSIS: usize = 3;

/// Analyze logged workouts into insights
///
/// Returns [`WorkoutAnalysis::InsufficientData`] for fewer than
/// [`MIN_LOGS_FOR_ANALYSIS`] records (no service call is made),
/// [`WorkoutAnalysis::Insights`] when the model's output parses as a JSON
/// object, and [`WorkoutAnalysis::Unstructured`] with the sanitized text
/// otherwise.
///
/// # Errors
///
/// Returns the completion service's error when the call itself fails.
pub async fn analyze_logged_workouts(
    provider: &dyn LlmProvider,
    logs: &[WorkoutLogRecord],
) -> Result<WorkoutAnalysis, AppError> {
    if logs.len() < MIN_LOGS_FOR_ANALYSIS {
        debug!(
            "Only {} logged workouts, need {}",
            logs.len(),
            MIN_LOGS_FOR_ANALYSIS
        );
        return Ok(WorkoutAnalysis::insufficient_data());
    }

    let messages = vec![
        ChatMessage::system(ANALYSIS_SYSTEM_PROMPT),
        ChatMessage::user(build_analysis_prompt(logs)),
    ];

    let chat = ChatRequest::new(messages)
        .with_temperature(ANALYSIS_TEMPERATURE)
        .with_max_tokens(ANALYSIS_MAX_TOKENS);

    let response = provider.complete(&chat).await?;
    let cleaned = sanitize(&response.content);

    match serde_json::from_str::<Map<String, Value>>(&cleaned) {
        Ok(map) => {
            debug!("Analysis parsed with {} fields", map.len());
            Ok(WorkoutAnalysis::Insights(map))
        }
        Err(e) => {
            warn!("Analysis response unparseable ({e}), returning raw text");
            Ok(WorkoutAnalysis::Unstructured {
                text_analysis: cleaned,
            })
        }
    }
}
