//! Journal Mentor - Emotional journaling backend.
//!
//! Scores a 32-item MBTI-style questionnaire, stores journal entries with
//! optional replies from two mentor personas, and derives wellness metrics
//! (mood, streaks, consistency, trends, emotional-intelligence scores) from
//! a user's journal history.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
