//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (limits > 0, addresses parseable)
//! - Catch a request timeout shorter than the handler delay
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServiceConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;
use thiserror::Error;

use crate::config::schema::ServiceConfig;

/// A single semantic configuration error.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Bind address is not a valid socket address.
    #[error("invalid bind address '{0}'")]
    InvalidBindAddress(String),

    /// Metrics address is not a valid socket address.
    #[error("invalid metrics address '{0}'")]
    InvalidMetricsAddress(String),

    /// Body limit of zero would reject every submission.
    #[error("max_body_bytes must be greater than zero")]
    ZeroBodyLimit,

    /// The request timeout would fire before the handler delay elapses.
    #[error("request timeout ({request_secs}s) does not cover handler delay ({delay_ms}ms)")]
    TimeoutBelowDelay { request_secs: u64, delay_ms: u64 },
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if config.limits.max_body_bytes == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    if config.timeouts.request_secs * 1000 <= config.handler.delay_ms {
        errors.push(ValidationError::TimeoutBelowDelay {
            request_secs: config.timeouts.request_secs,
            delay_ms: config.handler.delay_ms,
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ServiceConfig::default()).is_ok());
    }

    #[test]
    fn test_invalid_bind_address() {
        let mut config = ServiceConfig::default();
        config.listener.bind_address = "not-an-address".into();
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::InvalidBindAddress(_)));
    }

    #[test]
    fn test_timeout_must_cover_delay() {
        let mut config = ServiceConfig::default();
        config.timeouts.request_secs = 1;
        config.handler.delay_ms = 2000;
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(
            errors[0],
            ValidationError::TimeoutBelowDelay { .. }
        ));
    }

    #[test]
    fn test_all_errors_collected() {
        let mut config = ServiceConfig::default();
        config.listener.bind_address = "nope".into();
        config.limits.max_body_bytes = 0;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_metrics_address_checked_only_when_enabled() {
        let mut config = ServiceConfig::default();
        config.observability.metrics_address = "nope".into();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        assert!(validate_config(&config).is_err());
    }
}
