//! Error extension utilities
//!
//! Converts third-party errors raised while reading configuration or
//! setting up infrastructure into domain errors.

use std::fmt;

use edgebinder_domain::error::{ConfigurationError, Error, Result};

/// Extension trait for adding context to errors
///
/// # Example
///
/// ```ignore
/// use edgebinder_infrastructure::error_ext::ErrorContext;
///
/// let tree: serde_json::Value = figment
///     .extract()
///     .config_context("Failed to extract configuration")?;
/// ```
pub trait ErrorContext<T> {
    /// Report the error as invalid configuration
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display;

    /// Report the error as an internal failure
    fn internal_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: fmt::Display,
{
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display,
    {
        self.map_err(|err| {
            ConfigurationError::invalid_configuration(format!("{context}: {err}")).into()
        })
    }

    fn internal_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display,
    {
        self.map_err(|err| Error::internal(format!("{context}: {err}")))
    }
}
