//! Web test support utilities
//!
//! This crate provides utilities for testing the web layer: unified
//! logging initialization and problem-details response assertions.

pub mod logging;
pub mod problem_details;
