//! Creator Studio Core
//!
//! Hook scoring, shorts extraction and title generation for video creators,
//! plus the configuration, error and dispatcher plumbing around them.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod studio;

pub use config::StudioConfig;
pub use error::AppError;

#[cfg(test)]
mod tests;
