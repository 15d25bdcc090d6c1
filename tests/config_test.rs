// ABOUTME: Integration tests for completion service configuration
// ABOUTME: Covers env-var loading, cloud key requirement, and key redaction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitForge Labs

#![allow(missing_docs)]

use fitforge_core::config::CompletionConfig;
use fitforge_core::errors::ErrorCode;
use serial_test::serial;
use std::env;

fn clear_env() {
    env::remove_var("FITFORGE_LLM_BASE_URL");
    env::remove_var("FITFORGE_LLM_API_KEY");
    env::remove_var("FITFORGE_LLM_MODEL");
}

#[test]
#[serial]
fn test_cloud_endpoint_requires_api_key() {
    clear_env();
    let err = CompletionConfig::from_env().expect_err("cloud endpoint without key must fail");
    assert_eq!(err.code, ErrorCode::ConfigMissing);
}

#[test]
#[serial]
fn test_self_hosted_endpoint_allows_missing_key() {
    clear_env();
    env::set_var("FITFORGE_LLM_BASE_URL", "http://localhost:11434/v1");
    let config = CompletionConfig::from_env().expect("self-hosted endpoint needs no key");
    assert_eq!(config.base_url, "http://localhost:11434/v1");
    assert!(config.api_key.is_none());
    clear_env();
}

#[test]
#[serial]
fn test_env_overrides_are_read() {
    clear_env();
    env::set_var("FITFORGE_LLM_API_KEY", "sk-test");
    env::set_var("FITFORGE_LLM_MODEL", "gpt-4o-mini");
    let config = CompletionConfig::from_env().expect("key provided");
    assert_eq!(config.api_key.as_deref(), Some("sk-test"));
    assert_eq!(config.model, "gpt-4o-mini");
    clear_env();
}

#[test]
#[serial]
fn test_empty_key_treated_as_missing() {
    clear_env();
    env::set_var("FITFORGE_LLM_API_KEY", "");
    let err = CompletionConfig::from_env().expect_err("empty key is no key");
    assert_eq!(err.code, ErrorCode::ConfigMissing);
    clear_env();
}

#[test]
fn test_debug_redacts_api_key() {
    let config = CompletionConfig::new("http://localhost:8000/v1", Some("super-secret".to_owned()));
    let debug_output = format!("{config:?}");
    assert!(!debug_output.contains("super-secret"));
    assert!(debug_output.contains("[REDACTED]"));
}

#[test]
fn test_builder_overrides() {
    let config = CompletionConfig::new("http://localhost:8000/v1", None)
        .with_model("llama-3.1-8b-instant")
        .with_request_timeout_secs(120);
    assert_eq!(config.model, "llama-3.1-8b-instant");
    assert_eq!(config.request_timeout_secs, 120);
}
