// ABOUTME: Deterministic fallback synthesizer for unparseable completion output
// ABOUTME: Keyword-matched templates build schema-valid meal and workout documents locally
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitForge Labs

//! # Fallback Synthesizer
//!
//! When the completion service responds with text that cannot be repaired
//! into the expected schema, the requesters fall back to documents built
//! entirely from the caller's own parameters. Keyword matching is
//! case-insensitive substring containment against a fixed table; the first
//! match wins and anything unmatched falls through to a generic template.
//!
//! Fallback documents satisfy the same shape invariants as a successful
//! model response, so consumers never need a separate code path for
//! "fallback" vs "generated". This path is pure local computation: it never
//! fails and never calls the service again.

use crate::generation::title_case;
use crate::models::{Dish, ExerciseSet, MealPlan, MealRequest, WorkoutPlan, WorkoutRequest};

/// Calorie value used when the caller supplied no target
pub const DEFAULT_CALORIES: u32 = 500;

// ============================================================================
// Meal Templates
// ============================================================================

/// Ingredient template selected by dietary-preference keyword
pub(crate) struct MealTemplate {
    /// Preference substring that selects this template; `None` matches last
    keyword: Option<&'static str>,
    /// Ingredient list, always at least two entries
    pub ingredients: &'static [&'static str],
    /// Preparation instructions
    pub instructions: &'static str,
    /// Macros in grams
    pub protein: u32,
    /// Carbohydrates in grams
    pub carbs: u32,
    /// Fat in grams
    pub fat: u32,
}

/// Fixed lookup table; order is the match order
const MEAL_TEMPLATES: &[MealTemplate] = &[
    MealTemplate {
        keyword: Some("vegan"),
        ingredients: &[
            "Chickpeas",
            "Quinoa",
            "Roasted sweet potato",
            "Baby spinach",
            "Tahini dressing",
        ],
        instructions: "Roast the sweet potato, cook the quinoa, then toss everything with the tahini dressing.",
        protein: 22,
        carbs: 68,
        fat: 14,
    },
    MealTemplate {
        keyword: Some("vegetarian"),
        ingredients: &[
            "Eggs",
            "Brown rice",
            "Black beans",
            "Avocado",
            "Cheddar cheese",
        ],
        instructions: "Cook the rice, warm the beans, fry the eggs, and assemble with sliced avocado and cheese.",
        protein: 28,
        carbs: 62,
        fat: 20,
    },
    MealTemplate {
        keyword: Some("halal"),
        ingredients: &[
            "Halal chicken breast",
            "Basmati rice",
            "Cucumber",
            "Tomato",
            "Yogurt sauce",
        ],
        instructions: "Grill the chicken, cook the rice, and serve with the chopped salad and yogurt sauce.",
        protein: 38,
        carbs: 58,
        fat: 12,
    },
    MealTemplate {
        keyword: None,
        ingredients: &[
            "Grilled chicken breast",
            "Mixed greens",
            "Cherry tomatoes",
            "Olive oil",
        ],
        instructions: "Grill the chicken and toss it with the vegetables and a drizzle of olive oil.",
        protein: 35,
        carbs: 18,
        fat: 16,
    },
];

/// Select the ingredient template for a preference list
///
/// First match in table order wins; no preferences (or no match) selects
/// the generic template.
pub(crate) fn meal_template(preferences: &[String]) -> &'static MealTemplate {
    for template in MEAL_TEMPLATES {
        match template.keyword {
            Some(keyword) => {
                if preferences
                    .iter()
                    .any(|p| p.to_lowercase().contains(keyword))
                {
                    return template;
                }
            }
            None => return template,
        }
    }
    // The table ends with the keyword-less generic entry
    &MEAL_TEMPLATES[MEAL_TEMPLATES.len() - 1]
}

/// Synthesize a complete meal plan from the caller's parameters
#[must_use]
pub fn meal_plan(request: &MealRequest) -> MealPlan {
    let template = meal_template(&request.dietary_preferences);

    MealPlan {
        meal_type: request.meal_type.clone(),
        calories: request.calories.unwrap_or(DEFAULT_CALORIES),
        dietary_preferences: request.dietary_preferences.clone(),
        dishes: vec![Dish {
            name: dish_name(request),
            ingredients: template.ingredients.iter().map(|&i| i.to_owned()).collect(),
            instructions: template.instructions.to_owned(),
            protein: template.protein,
            carbs: template.carbs,
            fat: template.fat,
        }],
    }
}

/// Dish name derived from the free-text request, or the meal slot
pub(crate) fn dish_name(request: &MealRequest) -> String {
    request.meal_request.as_deref().map_or_else(
        || format!("{} Special", title_case(&request.meal_type)),
        |r| format!("{} Special", title_case(r)),
    )
}

// ============================================================================
// Workout Templates
// ============================================================================

/// Exercise template selected by goal keyword
struct WorkoutTemplate {
    /// Goal substrings that select this template; empty matches anything
    keywords: &'static [&'static str],
    /// (name, sets, reps) prescriptions
    exercises: &'static [(&'static str, u32, u32)],
}

/// Fixed lookup table; order is the match order
const WORKOUT_TEMPLATES: &[WorkoutTemplate] = &[
    WorkoutTemplate {
        keywords: &["strength", "muscle"],
        exercises: &[
            ("Barbell Squats", 4, 8),
            ("Bench Press", 4, 8),
            ("Deadlift", 3, 6),
            ("Overhead Press", 3, 8),
            ("Barbell Rows", 3, 10),
            ("Plank", 3, 45),
        ],
    },
    WorkoutTemplate {
        keywords: &["cardio", "weight loss", "endurance"],
        exercises: &[
            ("Jumping Jacks", 3, 30),
            ("Burpees", 3, 12),
            ("Mountain Climbers", 3, 20),
            ("High Knees", 3, 30),
            ("Jump Rope", 3, 60),
            ("Squat Jumps", 3, 15),
        ],
    },
    WorkoutTemplate {
        keywords: &["flexibility", "mobility", "stretch"],
        exercises: &[
            ("Cat-Cow Stretch", 2, 10),
            ("Downward Dog", 3, 30),
            ("Hip Flexor Stretch", 2, 30),
            ("Hamstring Stretch", 2, 30),
            ("Shoulder Rolls", 2, 15),
            ("Child's Pose", 2, 45),
        ],
    },
    WorkoutTemplate {
        keywords: &[],
        exercises: &[
            ("Squats", 3, 12),
            ("Push-ups", 3, 10),
            ("Lunges", 3, 10),
            ("Plank", 3, 30),
            ("Glute Bridges", 3, 12),
            ("Bicycle Crunches", 3, 15),
        ],
    },
];

/// Select the exercise template for a goal string
fn workout_template(goal: &str) -> &'static WorkoutTemplate {
    let goal = goal.to_lowercase();
    for template in WORKOUT_TEMPLATES {
        if template.keywords.is_empty() || template.keywords.iter().any(|k| goal.contains(k)) {
            return template;
        }
    }
    &WORKOUT_TEMPLATES[WORKOUT_TEMPLATES.len() - 1]
}

/// Synthesize a complete workout plan from the caller's parameters
///
/// The exercise count scales with available time (one exercise per ten
/// minutes, never fewer than three) so a 20-minute fallback does not
/// prescribe an hour of work.
#[must_use]
pub fn workout_plan(request: &WorkoutRequest) -> WorkoutPlan {
    let template = workout_template(&request.goal);

    let count = ((request.time_available / 10) as usize)
        .clamp(3, template.exercises.len());

    WorkoutPlan {
        goal: request.goal.clone(),
        experience_level: request.experience_level.clone(),
        time_available: request.time_available,
        exercises: template.exercises[..count]
            .iter()
            .map(|&(name, sets, reps)| ExerciseSet {
                name: name.to_owned(),
                sets,
                reps,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_template_first_match_wins() {
        let prefs = vec!["halal".to_owned(), "vegan".to_owned()];
        // Table order, not preference order: vegan is checked first
        let template = meal_template(&prefs);
        assert!(template.ingredients.contains(&"Chickpeas"));
    }

    #[test]
    fn test_meal_template_substring_containment() {
        let prefs = vec!["Strictly VEGAN please".to_owned()];
        let template = meal_template(&prefs);
        assert!(template.ingredients.contains(&"Chickpeas"));
    }

    #[test]
    fn test_meal_template_unmatched_falls_through() {
        let template = meal_template(&["keto".to_owned()]);
        assert!(template.ingredients.contains(&"Grilled chicken breast"));
    }

    #[test]
    fn test_meal_plan_is_deterministic() {
        let request = MealRequest::new("lunch")
            .with_preferences(vec!["vegan".to_owned()])
            .with_calories(600);
        assert_eq!(meal_plan(&request), meal_plan(&request));
    }

    #[test]
    fn test_meal_plan_shape_invariants() {
        let plan = meal_plan(&MealRequest::new("dinner"));
        assert_eq!(plan.calories, DEFAULT_CALORIES);
        assert_eq!(plan.dishes.len(), 1);
        assert!(plan.dishes[0].ingredients.len() >= 2);
        assert!(!plan.dishes[0].instructions.is_empty());
        assert_eq!(plan.dishes[0].name, "Dinner Special");
    }

    #[test]
    fn test_workout_template_keyword_selection() {
        let request = WorkoutRequest::new("general weight loss", "beginner", 30);
        let plan = workout_plan(&request);
        assert!(plan.exercises.iter().any(|e| e.name == "Burpees"));
    }

    #[test]
    fn test_workout_plan_exercise_count_scales_with_time() {
        let short = workout_plan(&WorkoutRequest::new("strength", "beginner", 20));
        let long = workout_plan(&WorkoutRequest::new("strength", "beginner", 90));
        assert_eq!(short.exercises.len(), 3);
        assert_eq!(long.exercises.len(), 6);
        assert!(!short.exercises.is_empty());
    }
}
