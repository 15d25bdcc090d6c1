// ABOUTME: Meal generation requester with post-processing repair and local fallback
// ABOUTME: Prompt build, one bounded completion call, sanitize, parse, normalize or synthesize
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitForge Labs

//! # Meal Requester
//!
//! Drives one meal generation round trip: build the prompt, make a single
//! bounded completion call, sanitize and parse the output, then either
//! normalize the parsed document or synthesize a fallback locally. The
//! caller always receives a schema-valid [`MealPlan`] unless the transport
//! itself failed.

use rand::random;
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::generation::fallback::{self, DEFAULT_CALORIES};
use crate::generation::prompts::{build_meal_prompt, MEAL_SYSTEM_PROMPT};
use crate::generation::sanitize::sanitize;
use crate::llm::{ChatMessage, ChatRequest, LlmProvider};
use crate::models::{Dish, MealPlan, MealRequest};

/// Upper bound on generated tokens
const MEAL_MAX_TOKENS: u32 = 800;

/// High temperature: variety matters more than consistency for meals
const MEAL_TEMPERATURE: f32 = 0.9;

static PLACEHOLDER_NAME: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Templated placeholder followed only by digits, e.g. "Creative 400"
    Regex::new(r"(?i)^\s*(?:dish|meal|recipe|creative|option)\s*#?\d+\s*$").ok()
});

/// Placeholder instruction strings the model echoes back from the template
const PLACEHOLDER_INSTRUCTIONS: &[&str] = &[
    "brief preparation instructions",
    "preparation instructions",
    "instructions",
    "n/a",
];

// Lenient mirror of the wire schema: every field optional, numbers as
// floats. Unknown keys (e.g. an echoed "meal_request") are dropped here.
#[derive(Debug, Deserialize)]
struct RawMealPlan {
    #[serde(default)]
    calories: Option<f64>,
    #[serde(default)]
    dishes: Vec<RawDish>,
}

#[derive(Debug, Deserialize)]
struct RawDish {
    #[serde(default)]
    name: String,
    #[serde(default)]
    ingredients: Vec<String>,
    #[serde(default)]
    instructions: String,
    #[serde(default)]
    protein: Option<f64>,
    #[serde(default)]
    carbs: Option<f64>,
    #[serde(default)]
    fat: Option<f64>,
}

/// Generate a meal plan for the given request
///
/// Transport failures from the completion service surface as errors;
/// unparseable or schema-violating output is absorbed and replaced by the
/// deterministic fallback. The returned plan always satisfies the shape
/// invariants: at least one dish, every dish with at least two ingredients
/// and real instructions, and `calories` equal to the caller's target when
/// one was supplied.
///
/// # Errors
///
/// Returns `MissingRequiredField` when `meal_type` is empty, or the
/// completion service's error when the call itself fails.
pub async fn generate_meal(
    provider: &dyn LlmProvider,
    request: &MealRequest,
) -> Result<MealPlan, AppError> {
    if request.meal_type.trim().is_empty() {
        return Err(AppError::missing_field("meal_type"));
    }

    // Fresh seed per call so the upstream service cannot serve a cached
    // completion for a repeated request.
    let seed: u32 = random();

    let messages = vec![
        ChatMessage::system(MEAL_SYSTEM_PROMPT),
        ChatMessage::user(build_meal_prompt(request, seed)),
    ];

    let chat = ChatRequest::new(messages)
        .with_temperature(MEAL_TEMPERATURE)
        .with_max_tokens(MEAL_MAX_TOKENS)
        .with_seed(u64::from(seed));

    let response = provider.complete(&chat).await?;
    let cleaned = sanitize(&response.content);

    match serde_json::from_str::<RawMealPlan>(&cleaned) {
        Ok(raw) => {
            debug!("Meal response parsed, {} dishes", raw.dishes.len());
            Ok(postprocess(raw, request))
        }
        Err(e) => {
            warn!("Meal response unparseable ({e}), synthesizing fallback");
            Ok(fallback::meal_plan(request))
        }
    }
}

/// Normalize a parsed meal document against the request
///
/// The caller's calorie target always overrides the model's estimate, and
/// dishes that fail the shape checks are repaired in place. A plan with no
/// dishes at all is treated like a parse failure.
fn postprocess(raw: RawMealPlan, request: &MealRequest) -> MealPlan {
    if raw.dishes.is_empty() {
        warn!("Meal response parsed but contained no dishes, synthesizing fallback");
        return fallback::meal_plan(request);
    }

    let calories = request.calories.unwrap_or_else(|| {
        raw.calories
            .map_or(DEFAULT_CALORIES, |c| c.max(0.0).round() as u32)
    });

    let dishes = raw
        .dishes
        .into_iter()
        .map(|dish| repair_dish(dish, request))
        .collect();

    MealPlan {
        meal_type: request.meal_type.clone(),
        calories,
        dietary_preferences: request.dietary_preferences.clone(),
        dishes,
    }
}

/// Repair a single dish against the shape invariants
fn repair_dish(dish: RawDish, request: &MealRequest) -> Dish {
    let template = fallback::meal_template(&request.dietary_preferences);

    let name = if dish.name.trim().is_empty() || is_placeholder_name(&dish.name) {
        fallback::dish_name(request)
    } else {
        dish.name
    };

    let ingredients = if dish.ingredients.len() <= 1 {
        template.ingredients.iter().map(|&i| i.to_owned()).collect()
    } else {
        dish.ingredients
    };

    let instructions = if is_placeholder_instructions(&dish.instructions) {
        template.instructions.to_owned()
    } else {
        dish.instructions
    };

    Dish {
        name,
        ingredients,
        instructions,
        protein: dish.protein.map_or(template.protein, |g| g.max(0.0).round() as u32),
        carbs: dish.carbs.map_or(template.carbs, |g| g.max(0.0).round() as u32),
        fat: dish.fat.map_or(template.fat, |g| g.max(0.0).round() as u32),
    }
}

/// Degenerate templated name, e.g. "Creative 400"
fn is_placeholder_name(name: &str) -> bool {
    PLACEHOLDER_NAME
        .as_ref()
        .is_some_and(|re| re.is_match(name))
}

/// Empty or template-echo instructions
fn is_placeholder_instructions(instructions: &str) -> bool {
    let trimmed = instructions.trim().to_lowercase();
    trimmed.is_empty() || PLACEHOLDER_INSTRUCTIONS.contains(&trimmed.as_str())
}
