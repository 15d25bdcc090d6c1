// ABOUTME: Generation requesters wrapping the completion service with defensive parsing
// ABOUTME: Sanitize, parse, normalize-or-fallback so callers never see malformed documents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitForge Labs

//! # Generation Requesters
//!
//! The three operations this crate exists for, each one round trip through
//! the same pipeline:
//!
//! ```text
//! build prompt -> call service -> sanitize -> parse
//!                                   parse ok  -> normalize -> return
//!                                   parse bad -> fallback  -> return
//! ```
//!
//! Failure policy (the part consumers rely on): anything wrong with the
//! *text* the service returned is absorbed here - sanitized, repaired, or
//! replaced by a deterministic local document. Anything wrong with the
//! *call* itself (network, auth, quota) surfaces as an error, untouched
//! and unretried. Input validation happens before the service is ever
//! contacted.

pub mod fallback;
mod insights;
mod meal;
pub mod prompts;
pub mod sanitize;
mod workout;

pub use insights::{analyze_logged_workouts, MIN_LOGS_FOR_ANALYSIS};
pub use meal::generate_meal;
pub use sanitize::sanitize;
pub use workout::generate_workout;

/// Title-case a free-text phrase for display ("spicy tofu bowl" -> "Spicy Tofu Bowl")
pub(crate) fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
