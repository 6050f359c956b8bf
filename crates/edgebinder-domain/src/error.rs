//! Error handling types
//!
//! Resolution failures are reported through [`ConfigurationError`], a closed
//! set of kinds that all abort adapter resolution. Operations performed by a
//! resolved adapter report through [`Error`], which wraps configuration
//! failures transparently.

use thiserror::Error;

/// Result type alias for adapter and binder operations
pub type Result<T> = std::result::Result<T, Error>;

/// Result type alias for adapter resolution
pub type ConfigResult<T> = std::result::Result<T, ConfigurationError>;

/// Failure raised while turning configuration into an adapter instance
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The container exposes no `config` service
    #[error("Missing configuration: {message}")]
    MissingConfiguration {
        /// Description of what is missing
        message: String,
    },

    /// Configuration exists but has the wrong shape
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration {
        /// Description of the problem
        message: String,
    },

    /// The requested instance is not present in the configuration
    #[error("EdgeBinder instance '{name}' is not configured")]
    InstanceNotConfigured {
        /// Requested instance name
        name: String,
    },

    /// No resolution strategy knows the adapter type
    #[error("Unsupported adapter type '{adapter}'")]
    UnsupportedAdapter {
        /// Adapter type identifier
        adapter: String,
    },

    /// A service required by a built-in adapter is not registered
    #[error("Required service '{service}' not found in container")]
    MissingService {
        /// Service name
        service: String,
    },

    /// A service required by a built-in adapter has the wrong shape
    #[error("Invalid service '{service}': {reason}")]
    InvalidService {
        /// Service name
        service: String,
        /// Why the service was rejected
        reason: String,
    },
}

impl ConfigurationError {
    /// Create a missing configuration error
    pub fn missing_configuration<S: Into<String>>(message: S) -> Self {
        Self::MissingConfiguration {
            message: message.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_configuration<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Create an instance-not-configured error
    pub fn instance_not_configured<S: Into<String>>(name: S) -> Self {
        Self::InstanceNotConfigured { name: name.into() }
    }

    /// Create an unsupported adapter error
    pub fn unsupported_adapter<S: Into<String>>(adapter: S) -> Self {
        Self::UnsupportedAdapter {
            adapter: adapter.into(),
        }
    }

    /// Create a missing service error
    pub fn missing_service<S: Into<String>>(service: S) -> Self {
        Self::MissingService {
            service: service.into(),
        }
    }

    /// Create an invalid service error
    pub fn invalid_service<S: Into<String>, R: Into<String>>(service: S, reason: R) -> Self {
        Self::InvalidService {
            service: service.into(),
            reason: reason.into(),
        }
    }
}

/// Main error type for adapter and binder operations
#[derive(Error, Debug)]
pub enum Error {
    /// Adapter resolution failed
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Persistence backend failure
    #[error("Persistence error: {message}")]
    Persistence {
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Requested binding does not exist
    #[error("Binding not found: {id}")]
    NotFound {
        /// Identifier of the missing binding
        id: String,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

impl Error {
    /// Create a persistence error
    pub fn persistence<S: Into<String>>(message: S) -> Self {
        Self::Persistence {
            message: message.into(),
            source: None,
        }
    }

    /// Create a persistence error with source
    pub fn persistence_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Persistence {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a not found error
    pub fn not_found<S: Into<String>>(id: S) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns the configuration error if this is one
    pub fn as_configuration(&self) -> Option<&ConfigurationError> {
        match self {
            Self::Configuration(err) => Some(err),
            _ => None,
        }
    }
}
