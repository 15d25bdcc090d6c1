// ABOUTME: Integration tests for the workout generation requester
// ABOUTME: Covers structured parsing, fallback on schema failure, and input validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitForge Labs

#![allow(missing_docs)]

mod common;

use common::MockProvider;
use fitforge_core::errors::ErrorCode;
use fitforge_core::generation::generate_workout;
use fitforge_core::models::WorkoutRequest;

// ============================================================================
// Successful Parse
// ============================================================================

#[tokio::test]
async fn test_valid_response_passes_through_normalized() {
    let provider = MockProvider::responding(
        r#"{"goal": "strength", "experience_level": "beginner", "time_available": 45,
            "exercises": [
                {"name": "Goblet Squats", "sets": 3, "reps": 12},
                {"name": "Push-ups", "sets": 3, "reps": 10}
            ]}"#,
    );
    let request = WorkoutRequest::new("strength", "beginner", 45);
    let plan = generate_workout(&provider, &request).await.unwrap();

    assert_eq!(plan.goal, "strength");
    assert_eq!(plan.time_available, 45);
    assert_eq!(plan.exercises.len(), 2);
    assert_eq!(plan.exercises[0].name, "Goblet Squats");
}

#[tokio::test]
async fn test_response_with_prose_wrapper_still_parses() {
    let provider = MockProvider::responding(
        "Here's your plan!\n{\"exercises\": [{\"name\": \"Lunges\", \"sets\": 3, \"reps\": 10}]}\nHave fun!",
    );
    let request = WorkoutRequest::new("general fitness", "beginner", 30);
    let plan = generate_workout(&provider, &request).await.unwrap();
    assert_eq!(plan.exercises[0].name, "Lunges");
}

// ============================================================================
// Fallback Path
// ============================================================================

#[tokio::test]
async fn test_garbage_response_yields_nonempty_fallback() {
    let provider = MockProvider::responding("no json at all");
    let request = WorkoutRequest::new("weight loss", "beginner", 30);
    let plan = generate_workout(&provider, &request).await.unwrap();

    assert!(!plan.exercises.is_empty());
    assert_eq!(plan.goal, "weight loss");
    assert_eq!(plan.experience_level, "beginner");
}

#[tokio::test]
async fn test_empty_exercise_list_treated_as_schema_failure() {
    let provider = MockProvider::responding(r#"{"exercises": []}"#);
    let request = WorkoutRequest::new("strength training", "intermediate", 60);
    let plan = generate_workout(&provider, &request).await.unwrap();
    assert!(!plan.exercises.is_empty());
    // Strength template selected by goal keyword
    assert!(plan.exercises.iter().any(|e| e.name == "Barbell Squats"));
}

#[tokio::test]
async fn test_fallback_is_deterministic() {
    let request = WorkoutRequest::new("mobility work", "beginner", 20);
    let first = generate_workout(&MockProvider::responding("?"), &request)
        .await
        .unwrap();
    let second = generate_workout(&MockProvider::responding("?"), &request)
        .await
        .unwrap();
    assert_eq!(first, second);
}

// ============================================================================
// Error Surfacing
// ============================================================================

#[tokio::test]
async fn test_empty_goal_rejected_before_service_call() {
    let provider = MockProvider::responding("{}");
    let err = generate_workout(&provider, &WorkoutRequest::new("", "beginner", 30))
        .await
        .expect_err("empty goal must be rejected");
    assert_eq!(err.code, ErrorCode::MissingRequiredField);
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_zero_minutes_rejected() {
    let provider = MockProvider::responding("{}");
    let err = generate_workout(&provider, &WorkoutRequest::new("strength", "beginner", 0))
        .await
        .expect_err("zero time must be rejected");
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_transport_error_surfaces_without_fallback() {
    let provider = MockProvider::failing("quota exceeded");
    let err = generate_workout(&provider, &WorkoutRequest::new("strength", "beginner", 30))
        .await
        .expect_err("transport failure must surface");
    assert_eq!(err.code, ErrorCode::ExternalServiceError);
}
