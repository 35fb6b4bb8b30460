//! Config Tests
//!
//! `StudioConfig::from_env` against controlled environment variables.

use crate::config::{
    LogFormat, StudioConfig, ENV_LOG_FORMAT, ENV_MAX_CONCEPTS, ENV_SEED, ENV_TARGET_SECONDS,
    ENV_TITLE_BATCH,
};
use crate::error::AppError;

/// Run `f` with every studio variable unset except the given overrides
fn with_studio_env<R>(overrides: &[(&str, &str)], f: impl FnOnce() -> R) -> R {
    let vars: Vec<(&str, Option<&str>)> = [
        ENV_TARGET_SECONDS,
        ENV_MAX_CONCEPTS,
        ENV_TITLE_BATCH,
        ENV_SEED,
        ENV_LOG_FORMAT,
    ]
    .iter()
    .map(|name| {
        let value = overrides
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| *value);
        (*name, value)
    })
    .collect();
    temp_env::with_vars(vars, f)
}

#[cfg(test)]
mod from_env_tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        let config = with_studio_env(&[], StudioConfig::from_env).unwrap();
        assert_eq!(config, StudioConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = with_studio_env(
            &[
                (ENV_TARGET_SECONDS, "45"),
                (ENV_MAX_CONCEPTS, "8"),
                (ENV_TITLE_BATCH, "20"),
                (ENV_SEED, "1234"),
                (ENV_LOG_FORMAT, "json"),
            ],
            StudioConfig::from_env,
        )
        .unwrap();

        assert_eq!(config.target_duration_seconds, 45);
        assert_eq!(config.max_concepts, 8);
        assert_eq!(config.title_batch, 20);
        assert_eq!(config.seed, Some(1234));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_blank_value_ignored() {
        let config =
            with_studio_env(&[(ENV_TARGET_SECONDS, "  ")], StudioConfig::from_env).unwrap();
        assert_eq!(config.target_duration_seconds, 30);
    }

    #[test]
    fn test_unparseable_value() {
        let err = with_studio_env(&[(ENV_MAX_CONCEPTS, "lots")], StudioConfig::from_env)
            .unwrap_err();
        match err {
            AppError::Config(msg) => assert!(msg.contains(ENV_MAX_CONCEPTS), "{}", msg),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_value() {
        let err = with_studio_env(&[(ENV_TITLE_BATCH, "0")], StudioConfig::from_env)
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_unknown_log_format() {
        let result = with_studio_env(&[(ENV_LOG_FORMAT, "xml")], StudioConfig::from_env);
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
