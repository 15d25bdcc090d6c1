// ABOUTME: Main library entry point for the FitForge AI generation core
// ABOUTME: Structured meal/workout generation and workout insights over an LLM completion service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitForge Labs

#![deny(unsafe_code)]

//! # FitForge Core
//!
//! The AI generation core of the FitForge fitness backend. The surrounding
//! web layer handles routing, persistence, and accounts; this crate owns the
//! three generation operations and the defensive parsing that makes an LLM
//! usable as a structured-data source:
//!
//! - **Meal generation**: a typed [`models::MealPlan`] built from the model's
//!   JSON output, repaired or synthesized locally when that output is broken.
//! - **Workout generation**: a typed [`models::WorkoutPlan`] with the same
//!   repair guarantees.
//! - **Workout insights**: free-form analysis of logged workouts, degrading
//!   to a raw-text envelope instead of failing on unparseable output.
//!
//! ## Guarantees
//!
//! Callers always receive either a schema-valid document or a structured
//! [`errors::AppError`]. Malformed model output is never surfaced: it is
//! sanitized, re-parsed, and if necessary replaced by a deterministic
//! fallback document built purely from the caller's own parameters.
//! Transport failures, by contrast, are never swallowed.
//!
//! ## Example
//!
//! ```rust,no_run
//! use fitforge_core::config::CompletionConfig;
//! use fitforge_core::generation::generate_meal;
//! use fitforge_core::llm::OpenAiProvider;
//! use fitforge_core::models::MealRequest;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), fitforge_core::errors::AppError> {
//!     let provider = OpenAiProvider::new(CompletionConfig::from_env()?)?;
//!     let request = MealRequest::new("lunch")
//!         .with_preferences(vec!["vegan".to_owned()])
//!         .with_calories(600);
//!     let plan = generate_meal(&provider, &request).await?;
//!     println!("{}", serde_json::to_string_pretty(&plan)?);
//!     Ok(())
//! }
//! ```

/// Completion service configuration, injected rather than read ambiently
pub mod config;

/// Unified error handling system with standard error codes and HTTP mapping
pub mod errors;

/// Generation requesters, response sanitizer, and fallback synthesizer
pub mod generation;

/// LLM provider abstraction and the OpenAI-compatible client
pub mod llm;

/// Structured logging setup
pub mod logging;

/// Document shapes and requester parameters
pub mod models;

/// Motivational tips served alongside generated content
pub mod tips;
