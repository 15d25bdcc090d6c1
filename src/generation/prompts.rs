// ABOUTME: System prompts and user-prompt builders for the generation requesters
// ABOUTME: Interpolates caller parameters into fixed schema-bearing instruction templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitForge Labs

//! # Prompt Construction
//!
//! Each requester owns a fixed instruction template that names the required
//! JSON schema verbatim and forbids explanatory prose. Caller parameters
//! are interpolated into the template; the meal template additionally takes
//! a per-call variation nonce so the upstream service cannot serve cached
//! output for repeated requests.

use serde_json::json;

use crate::models::{MealRequest, WorkoutLogRecord, WorkoutRequest};

/// At most this many log records are embedded in an analysis prompt
pub const ANALYSIS_LOG_CAP: usize = 20;

/// Notes longer than this are truncated before embedding
const NOTE_TRUNCATE_CHARS: usize = 50;

/// System prompt for the meal requester
pub const MEAL_SYSTEM_PROMPT: &str =
    "You are a nutrition AI assistant that creates structured JSON meal plans.";

/// System prompt for the workout requester
pub const WORKOUT_SYSTEM_PROMPT: &str = "You are a personal fitness trainer.";

/// System prompt for the workout-analysis requester
pub const ANALYSIS_SYSTEM_PROMPT: &str =
    "You are a fitness analytics AI that provides data-driven insights from workout logs.";

/// Build the user prompt for meal generation
#[must_use]
pub fn build_meal_prompt(request: &MealRequest, seed: u32) -> String {
    let calorie_text = request.calories.map_or_else(
        || "a reasonable calorie count".to_owned(),
        |calories| format!("around {calories} calories"),
    );

    let request_text = request.meal_request.as_ref().map_or_else(String::new, |r| {
        format!(" The user has specifically requested: {r}.")
    });

    let preference_text = if request.dietary_preferences.is_empty() {
        String::new()
    } else {
        format!(
            " The meal must respect these dietary preferences: {}.",
            request.dietary_preferences.join(", ")
        )
    };

    format!(
        "Generate a {meal_type} meal with {calorie_text}.{request_text}{preference_text}\n\
         \n\
         Return the meal plan **strictly** in JSON format with this structure:\n\
         {{\n\
             \"meal_type\": \"{meal_type}\",\n\
             \"calories\": <estimated calories>,\n\
             \"dietary_preferences\": [\"...\"],\n\
             \"dishes\": [\n\
                 {{\n\
                     \"name\": \"Dish Name\",\n\
                     \"ingredients\": [\"Ingredient 1\", \"Ingredient 2\", \"...\"],\n\
                     \"instructions\": \"Brief preparation instructions\",\n\
                     \"protein\": <grams>,\n\
                     \"carbs\": <grams>,\n\
                     \"fat\": <grams>\n\
                 }}\n\
             ]\n\
         }}\n\
         Do **not** include explanations, just return JSON.\n\
         Variation token: {seed}. Do not mention it in the output.",
        meal_type = request.meal_type,
    )
}

/// Build the user prompt for workout generation
#[must_use]
pub fn build_workout_prompt(request: &WorkoutRequest) -> String {
    format!(
        "Please create a {time}-minute workout plan for someone with a fitness goal \
         of '{goal}' and an experience level of '{experience}'. \
         Include exercises, reps, and sets.\n\
         \n\
         Return the plan **strictly** in JSON format with this structure:\n\
         {{\n\
             \"goal\": \"{goal}\",\n\
             \"experience_level\": \"{experience}\",\n\
             \"time_available\": {time},\n\
             \"exercises\": [\n\
                 {{\"name\": \"Exercise Name\", \"sets\": <count>, \"reps\": <count>}}\n\
             ]\n\
         }}\n\
         Do **not** include explanations, just return JSON.",
        time = request.time_available,
        goal = request.goal,
        experience = request.experience_level,
    )
}

/// Build the user prompt for workout analysis
///
/// Records are pruned to the fields the model needs (date, compact
/// exercise strings, duration, mood, truncated notes) and capped to the
/// [`ANALYSIS_LOG_CAP`] most recent entries before embedding.
#[must_use]
pub fn build_analysis_prompt(logs: &[WorkoutLogRecord]) -> String {
    let recent = &logs[logs.len().saturating_sub(ANALYSIS_LOG_CAP)..];
    let pruned: Vec<serde_json::Value> = recent.iter().map(prune_record).collect();
    let data = serde_json::to_string_pretty(&pruned).unwrap_or_else(|_| "[]".to_owned());

    format!(
        "Analyze these workout logs and provide insights in JSON format:\n\
         \n\
         {data}\n\
         \n\
         Provide analysis in this JSON structure:\n\
         {{\n\
             \"consistency\": \"Analysis of workout frequency and regularity\",\n\
             \"progress\": \"Patterns in exercise progression\",\n\
             \"focus_areas\": [\"Primary muscle groups being targeted\"],\n\
             \"strength_areas\": [\"Areas showing good progress\"],\n\
             \"improvement_areas\": [\"Suggested areas to focus on\"],\n\
             \"mood_patterns\": \"How mood correlates with workout performance\",\n\
             \"recommendations\": [\"3-5 actionable suggestions\"]\n\
         }}"
    )
}

/// Reduce a log record to the compact shape embedded in the prompt
fn prune_record(log: &WorkoutLogRecord) -> serde_json::Value {
    let exercises: Vec<String> = log
        .exercises
        .iter()
        .map(|e| format!("{} - {}x{}", e.name, e.sets, e.reps))
        .collect();

    let notes: String = log
        .notes
        .as_deref()
        .unwrap_or_default()
        .chars()
        .take(NOTE_TRUNCATE_CHARS)
        .collect();

    json!({
        "date": log.date,
        "exercises": exercises,
        "duration": log.duration,
        "mood": log.mood.clone(),
        "notes": notes,
    })
}
