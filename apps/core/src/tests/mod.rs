//! Test Module
//!
//! Cross-module test suite for Creator Studio.
//!
//! ## Test Categories
//! - `hook_tests`: Hook classification, scoring signals and rewrites
//! - `shorts_tests`: Outline parsing and clip concept extraction
//! - `title_tests`: Template selection, slot filling and title metrics
//! - `config_tests`: Environment-driven configuration
//! - `dispatch_tests`: Dispatcher seam and schedules
//! - `integration_tests`: End-to-end flows across the analyzers

pub mod config_tests;
pub mod dispatch_tests;
pub mod integration_tests;
