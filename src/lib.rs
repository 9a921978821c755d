//! Style Compass - Communication-style questionnaire service
//!
//! Thirty slider questions split points between paired axes. The totals
//! classify the respondent into one of four color profiles and feed an AI
//! coach that answers questions about the result.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
