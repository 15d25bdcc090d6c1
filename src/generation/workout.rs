// ABOUTME: Workout generation requester returning a structured exercise plan
// ABOUTME: One bounded completion call with local fallback when output fails the schema
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitForge Labs

//! # Workout Requester
//!
//! Same round trip as the meal requester: prompt, one bounded completion
//! call, sanitize, parse, fallback. A parsed plan with no usable exercises
//! is a schema failure - the invariant is that `exercises` is never empty.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::generation::fallback;
use crate::generation::prompts::{build_workout_prompt, WORKOUT_SYSTEM_PROMPT};
use crate::generation::sanitize::sanitize;
use crate::llm::{ChatMessage, ChatRequest, LlmProvider};
use crate::models::{ExerciseSet, WorkoutPlan, WorkoutRequest};

/// Upper bound on generated tokens
const WORKOUT_MAX_TOKENS: u32 = 500;

/// Mid temperature: some variety, but plans should stay sensible
const WORKOUT_TEMPERATURE: f32 = 0.7;

/// Sets prescribed when the model omits a count
const DEFAULT_SETS: u32 = 3;

/// Reps prescribed when the model omits a count
const DEFAULT_REPS: u32 = 10;

// Lenient mirror of the wire schema
#[derive(Debug, Deserialize)]
struct RawWorkoutPlan {
    #[serde(default)]
    exercises: Vec<RawExercise>,
}

#[derive(Debug, Deserialize)]
struct RawExercise {
    #[serde(default)]
    name: String,
    #[serde(default)]
    sets: Option<f64>,
    #[serde(default)]
    reps: Option<f64>,
}

/// Generate a workout plan for the given request
///
/// Transport failures surface as errors; unparseable output and plans with
/// no usable exercises are replaced by the deterministic fallback, so the
/// returned plan always has a non-empty exercise list.
///
/// # Errors
///
/// Returns `MissingRequiredField` when `goal` is empty, `InvalidInput`
/// when `time_available` is zero, or the completion service's error when
/// the call itself fails.
pub async fn generate_workout(
    provider: &dyn LlmProvider,
    request: &WorkoutRequest,
) -> Result<WorkoutPlan, AppError> {
    if request.goal.trim().is_empty() {
        return Err(AppError::missing_field("goal"));
    }
    if request.time_available == 0 {
        return Err(AppError::invalid_input("time_available must be positive"));
    }

    let messages = vec![
        ChatMessage::system(WORKOUT_SYSTEM_PROMPT),
        ChatMessage::user(build_workout_prompt(request)),
    ];

    let chat = ChatRequest::new(messages)
        .with_temperature(WORKOUT_TEMPERATURE)
        .with_max_tokens(WORKOUT_MAX_TOKENS);

    let response = provider.complete(&chat).await?;
    let cleaned = sanitize(&response.content);

    match serde_json::from_str::<RawWorkoutPlan>(&cleaned) {
        Ok(raw) => {
            let exercises = normalize_exercises(raw);
            if exercises.is_empty() {
                warn!("Workout response parsed but had no usable exercises, synthesizing fallback");
                return Ok(fallback::workout_plan(request));
            }
            debug!("Workout response parsed, {} exercises", exercises.len());
            Ok(WorkoutPlan {
                goal: request.goal.clone(),
                experience_level: request.experience_level.clone(),
                time_available: request.time_available,
                exercises,
            })
        }
        Err(e) => {
            warn!("Workout response unparseable ({e}), synthesizing fallback");
            Ok(fallback::workout_plan(request))
        }
    }
}

/// Drop nameless entries and fill missing set/rep counts
fn normalize_exercises(raw: RawWorkoutPlan) -> Vec<ExerciseSet> {
    raw.exercises
        .into_iter()
        .filter(|e| !e.name.trim().is_empty())
        .map(|e| ExerciseSet {
            name: e.name,
            sets: to_count(e.sets, DEFAULT_SETS),
            reps: to_count(e.reps, DEFAULT_REPS),
        })
        .collect()
}

/// Round a model-supplied count, falling back when absent or non-positive
fn to_count(value: Option<f64>, default: u32) -> u32 {
    match value {
        Some(v) if v >= 1.0 => v.round() as u32,
        _ => default,
    }
}
