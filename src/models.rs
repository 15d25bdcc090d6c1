// ABOUTME: Document shapes produced by the generation core and requester parameter structs
// ABOUTME: Meal plans, workout plans, workout analysis, and logged-workout records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitForge Labs

//! # Generation Documents
//!
//! The three document families that flow out of the generation core, plus
//! the parameter structs callers hand in. Documents are constructed fresh
//! per request and never mutated after they are returned; persistence,
//! identity, and timestamps belong to the caller.
//!
//! Shape invariants (enforced by the requesters, relied on by consumers):
//!
//! - [`MealPlan`]: every dish has at least two ingredients and real
//!   preparation instructions; `calories` equals the caller's target when
//!   one was supplied.
//! - [`WorkoutPlan`]: `exercises` is never empty.
//! - [`WorkoutAnalysis`]: a tagged union - callers branch on the variant,
//!   never probe for magic keys.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Literal message returned when too few workouts are logged for analysis
pub const INSUFFICIENT_DATA_MESSAGE: &str =
    "Need at least 3 logged workouts for meaningful analysis.";

// ============================================================================
// Requester Parameters
// ============================================================================

/// Parameters for meal generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealRequest {
    /// Meal slot, e.g. "breakfast", "lunch", "dinner"
    pub meal_type: String,
    /// Dietary preference strings, order preserved (e.g. "vegan", "halal")
    #[serde(default)]
    pub dietary_preferences: Vec<String>,
    /// Free-text request from the user, e.g. "spicy tofu bowl"
    #[serde(default)]
    pub meal_request: Option<String>,
    /// Calorie target; when set, the returned plan carries exactly this value
    #[serde(default)]
    pub calories: Option<u32>,
}

impl MealRequest {
    /// Create a request for the given meal slot
    #[must_use]
    pub fn new(meal_type: impl Into<String>) -> Self {
        Self {
            meal_type: meal_type.into(),
            dietary_preferences: Vec::new(),
            meal_request: None,
            calories: None,
        }
    }

    /// Set dietary preferences
    #[must_use]
    pub fn with_preferences(mut self, preferences: Vec<String>) -> Self {
        self.dietary_preferences = preferences;
        self
    }

    /// Set the free-text meal request
    #[must_use]
    pub fn with_request(mut self, request: impl Into<String>) -> Self {
        self.meal_request = Some(request.into());
        self
    }

    /// Set the calorie target
    #[must_use]
    pub const fn with_calories(mut self, calories: u32) -> Self {
        self.calories = Some(calories);
        self
    }
}

/// Parameters for workout generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutRequest {
    /// Free-text fitness goal, e.g. "weight loss", "build strength"
    pub goal: String,
    /// Free-text experience level, e.g. "beginner"
    pub experience_level: String,
    /// Time available in minutes
    pub time_available: u32,
}

impl WorkoutRequest {
    /// Create a workout request
    #[must_use]
    pub fn new(
        goal: impl Into<String>,
        experience_level: impl Into<String>,
        time_available: u32,
    ) -> Self {
        Self {
            goal: goal.into(),
            experience_level: experience_level.into(),
            time_available,
        }
    }
}

// ============================================================================
// Meal Documents
// ============================================================================

/// A single dish within a meal plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    /// Dish name
    pub name: String,
    /// Ingredient list; at least two entries after post-processing
    pub ingredients: Vec<String>,
    /// Preparation instructions
    pub instructions: String,
    /// Protein in grams
    pub protein: u32,
    /// Carbohydrates in grams
    pub carbs: u32,
    /// Fat in grams
    pub fat: u32,
}

/// A generated meal plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealPlan {
    /// Meal slot this plan is for
    pub meal_type: String,
    /// Total calories; equals the caller's target when one was supplied
    pub calories: u32,
    /// Dietary preferences echoed from the request, order preserved
    pub dietary_preferences: Vec<String>,
    /// Dishes making up the meal
    pub dishes: Vec<Dish>,
}

// ============================================================================
// Workout Documents
// ============================================================================

/// One exercise prescription within a workout plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseSet {
    /// Exercise name
    pub name: String,
    /// Number of sets
    pub sets: u32,
    /// Repetitions per set
    pub reps: u32,
}

/// A generated workout plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    /// Fitness goal the plan targets
    pub goal: String,
    /// Experience level the plan assumes
    pub experience_level: String,
    /// Planned duration in minutes
    pub time_available: u32,
    /// Ordered exercise prescriptions; never empty
    pub exercises: Vec<ExerciseSet>,
}

// ============================================================================
// Workout Logs & Analysis
// ============================================================================

/// One exercise as recorded in a logged workout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggedExercise {
    /// Exercise name
    pub name: String,
    /// Sets performed
    pub sets: u32,
    /// Reps per set
    pub reps: u32,
}

/// A historical workout record supplied by the caller for analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutLogRecord {
    /// Day the workout was logged
    pub date: NaiveDate,
    /// Exercises performed
    #[serde(default)]
    pub exercises: Vec<LoggedExercise>,
    /// Duration in minutes
    pub duration: u32,
    /// Self-reported mood, free text
    #[serde(default)]
    pub mood: Option<String>,
    /// Free-text notes
    #[serde(default)]
    pub notes: Option<String>,
}

/// Outcome of analyzing logged workouts
///
/// A tagged union instead of a probed dictionary: the caller matches on the
/// variant. Serialization preserves the wire shapes the FitForge frontend
/// already consumes (`{"message": ...}`, a bare analysis object, or
/// `{"text_analysis": ...}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WorkoutAnalysis {
    /// Fewer than the minimum number of logged workouts were supplied
    InsufficientData {
        /// Human-readable explanation
        message: String,
    },
    /// The model's structured analysis, passed through as parsed
    Insights(Map<String, Value>),
    /// The model responded with prose that did not parse as JSON
    Unstructured {
        /// Sanitized raw analysis text
        text_analysis: String,
    },
}

impl WorkoutAnalysis {
    /// The insufficient-data outcome with its canonical message
    #[must_use]
    pub fn insufficient_data() -> Self {
        Self::InsufficientData {
            message: INSUFFICIENT_DATA_MESSAGE.to_owned(),
        }
    }

    /// Whether this outcome carries a structured analysis
    #[must_use]
    pub const fn is_structured(&self) -> bool {
        matches!(self, Self::Insights(_))
    }
}
