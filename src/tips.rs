// ABOUTME: Motivational fitness tips surfaced alongside generated content
// ABOUTME: Fixed quote table with a uniform random picker
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitForge Labs

//! Fitness tips and motivational quotes

use rand::seq::SliceRandom;

/// Fitness tips and motivational quotes shown on the dashboard
pub const TIPS_AND_QUOTES: &[&str] = &[
    "Level Up Your Fitness: Consistency is the only stat that truly matters.",
    "Become the Hunter: Hunt down your fitness goals with relentless determination.",
    "Embrace Imperfection: Even the lowest of efforts is a step in the right direction.",
    "Every Rep is a Quest: Even a short workout strengthens your resolve.",
    "Fuel Your Ascension: Nourishment is the foundation of your power.",
    "Ignore the Rankings: Focus on your own journey, not others.",
    "Rest and Recover: Recharge your mana for the next challenge.",
    "Breakthrough Your Limits: Every workout is an opportunity to surpass your previous self.",
    "Master Your Domain: Conquer your body and mind, just as you would a dungeon.",
    "Evolve or Perish: Continuously adapt and improve to reach your peak performance.",
];

/// Pick a random tip or motivational quote
#[must_use]
pub fn random_tip() -> &'static str {
    let mut rng = rand::thread_rng();
    TIPS_AND_QUOTES
        .choose(&mut rng)
        .copied()
        .unwrap_or(TIPS_AND_QUOTES[0])
}
