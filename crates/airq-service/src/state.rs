//! Application state shared across handlers.
//!
//! The index engine is stateless, so the shared state is read-only: the
//! loaded configuration and the validator built from it. Handlers receive it
//! as `State<Arc<AppState>>` and never need a lock.

use std::sync::Arc;

use airq_core::ReadingValidator;
use time::OffsetDateTime;

use crate::config::Config;

/// Shared application state.
#[derive(Debug)]
pub struct AppState {
    /// Configuration the service was started with.
    pub config: Config,
    /// Validator applied to every incoming reading.
    pub validator: ReadingValidator,
    /// When the service started.
    pub started_at: OffsetDateTime,
}

impl AppState {
    /// Create new application state.
    pub fn new(config: Config) -> Arc<Self> {
        let validator = ReadingValidator::new(config.validation.clone());
        Arc::new(Self {
            config,
            validator,
            started_at: OffsetDateTime::now_utc(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use airq_core::ValidatorConfig;

    #[test]
    fn test_validator_follows_config() {
        let mut config = Config::default();
        config.validation = ValidatorConfig::new().max_plausible(123.0);

        let state = AppState::new(config);
        assert_eq!(state.validator.config().max_plausible, 123.0);
        assert!(state.started_at <= OffsetDateTime::now_utc());
    }
}
