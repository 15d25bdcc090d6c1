// ABOUTME: Integration tests for the meal generation requester
// ABOUTME: Covers fallback synthesis, calorie forcing, placeholder repair, and error surfacing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitForge Labs

#![allow(missing_docs)]

mod common;

use common::MockProvider;
use fitforge_core::errors::ErrorCode;
use fitforge_core::generation::generate_meal;
use fitforge_core::models::MealRequest;

fn vegan_lunch_600() -> MealRequest {
    MealRequest::new("lunch")
        .with_preferences(vec!["vegan".to_owned()])
        .with_calories(600)
}

// ============================================================================
// Fallback Path
// ============================================================================

#[tokio::test]
async fn test_garbage_response_yields_vegan_fallback() {
    let provider = MockProvider::responding("I'm sorry, as an AI I cannot %$#@!");
    let plan = generate_meal(&provider, &vegan_lunch_600())
        .await
        .expect("fallback must not fail");

    assert_eq!(plan.calories, 600);
    assert_eq!(plan.meal_type, "lunch");
    assert_eq!(plan.dietary_preferences, vec!["vegan".to_owned()]);
    assert!(plan.dishes[0].ingredients.len() >= 2);
    // Vegan template selected by keyword match
    assert!(plan.dishes[0]
        .ingredients
        .iter()
        .any(|i| i == "Chickpeas"));
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn test_truncated_json_yields_fallback() {
    let provider = MockProvider::responding("{\"meal_type\": \"lunch\", \"dishes\": [");
    let plan = generate_meal(&provider, &vegan_lunch_600()).await.unwrap();
    assert_eq!(plan.calories, 600);
    assert!(!plan.dishes.is_empty());
}

#[tokio::test]
async fn test_parsed_but_dishless_response_yields_fallback() {
    let provider = MockProvider::responding("{\"meal_type\": \"lunch\", \"dishes\": []}");
    let plan = generate_meal(&provider, &vegan_lunch_600()).await.unwrap();
    assert!(!plan.dishes.is_empty());
    assert!(plan.dishes[0].ingredients.len() >= 2);
}

// ============================================================================
// Post-Processing of Valid Responses
// ============================================================================

#[tokio::test]
async fn test_requested_calories_override_model_estimate() {
    let provider = MockProvider::responding(
        r#"{"meal_type": "lunch", "calories": 850,
            "dishes": [{"name": "Lentil Curry",
                        "ingredients": ["Lentils", "Coconut milk", "Curry paste"],
                        "instructions": "Simmer everything for 20 minutes.",
                        "protein": 22, "carbs": 60, "fat": 15}]}"#,
    );
    let plan = generate_meal(&provider, &vegan_lunch_600()).await.unwrap();
    assert_eq!(plan.calories, 600);
    assert_eq!(plan.dishes[0].name, "Lentil Curry");
}

#[tokio::test]
async fn test_placeholder_dish_name_rewritten_from_meal_request() {
    let provider = MockProvider::responding(
        r#"{"meal_type": "lunch", "calories": 500,
            "dishes": [{"name": "Creative 400",
                        "ingredients": ["Tofu", "Chili oil", "Rice"],
                        "instructions": "Sear the tofu and serve over rice.",
                        "protein": 25, "carbs": 55, "fat": 18}]}"#,
    );
    let request = MealRequest::new("lunch").with_request("spicy tofu bowl");
    let plan = generate_meal(&provider, &request).await.unwrap();
    assert_eq!(plan.dishes[0].name, "Spicy Tofu Bowl Special");
}

#[tokio::test]
async fn test_placeholder_dish_name_without_request_uses_meal_type() {
    let provider = MockProvider::responding(
        r#"{"dishes": [{"name": "dish 1",
                        "ingredients": ["Eggs", "Toast"],
                        "instructions": "Scramble and serve.",
                        "protein": 15, "carbs": 30, "fat": 12}]}"#,
    );
    let plan = generate_meal(&provider, &MealRequest::new("breakfast"))
        .await
        .unwrap();
    assert_eq!(plan.dishes[0].name, "Breakfast Special");
}

#[tokio::test]
async fn test_thin_ingredient_list_replaced_with_template() {
    let provider = MockProvider::responding(
        r#"{"dishes": [{"name": "Halal Bowl",
                        "ingredients": ["Chicken"],
                        "instructions": "Brief preparation instructions",
                        "protein": 30, "carbs": 40, "fat": 10}]}"#,
    );
    let request = MealRequest::new("dinner").with_preferences(vec!["halal".to_owned()]);
    let plan = generate_meal(&provider, &request).await.unwrap();
    assert!(plan.dishes[0].ingredients.len() >= 2);
    assert!(plan.dishes[0]
        .ingredients
        .iter()
        .any(|i| i.contains("Halal")));
    // Template-echo instructions were replaced too
    assert_ne!(plan.dishes[0].instructions, "Brief preparation instructions");
}

#[tokio::test]
async fn test_echoed_request_fields_are_dropped() {
    let provider = MockProvider::responding(
        r#"{"meal_type": "lunch", "meal_request": "something spicy", "calories": 500,
            "dishes": [{"name": "Chili Noodles",
                        "ingredients": ["Noodles", "Chili", "Garlic"],
                        "instructions": "Boil noodles, toss with chili and garlic.",
                        "protein": 18, "carbs": 70, "fat": 12}]}"#,
    );
    let plan = generate_meal(&provider, &MealRequest::new("lunch"))
        .await
        .unwrap();
    let json = serde_json::to_value(&plan).unwrap();
    assert!(json.get("meal_request").is_none());
}

// ============================================================================
// Request Construction
// ============================================================================

#[tokio::test]
async fn test_meal_call_carries_seed_and_bounds() {
    let provider = MockProvider::responding("garbage");
    generate_meal(&provider, &vegan_lunch_600()).await.unwrap();

    let request = provider.last_request().expect("one call was made");
    assert!(request.seed.is_some());
    assert_eq!(request.max_tokens, Some(800));
    assert!(request.temperature.unwrap() > 0.5);
    // Prompt names the schema and forbids prose
    assert!(request.messages[1].content.contains("\"dishes\""));
    assert!(request.messages[1].content.contains("just return JSON"));
}

// ============================================================================
// Error Surfacing
// ============================================================================

#[tokio::test]
async fn test_missing_meal_type_rejected_before_service_call() {
    let provider = MockProvider::responding("{}");
    let err = generate_meal(&provider, &MealRequest::new("  "))
        .await
        .expect_err("empty meal_type must be rejected");
    assert_eq!(err.code, ErrorCode::MissingRequiredField);
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_transport_error_surfaces_without_fallback() {
    let provider = MockProvider::failing("connection refused");
    let err = generate_meal(&provider, &vegan_lunch_600())
        .await
        .expect_err("transport failure must surface");
    assert_eq!(err.code, ErrorCode::ExternalServiceError);
    assert!(err.message.contains("connection refused"));
}
