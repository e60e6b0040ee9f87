//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error used as the optional cause of an [`Error`]
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for the extension registry
///
/// The variants follow the three failure classes of the registry:
/// caller misuse ([`Error::InvalidArgument`]), bad discovery data or unknown
/// keys ([`Error::Configuration`]) and provider construction failures
/// ([`Error::State`]).
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid argument provided by the caller
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// A provider could not be brought into a usable state
    #[error("Illegal state: {message}")]
    State {
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },
}

// Usage error creation methods
impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// State error creation methods
impl Error {
    /// Create a state error
    pub fn state<S: Into<String>>(message: S) -> Self {
        Self::State {
            message: message.into(),
            source: None,
        }
    }

    /// Create a state error wrapping the underlying cause
    pub fn state_with_source<S: Into<String>>(message: S, source: BoxError) -> Self {
        Self::State {
            message: message.into(),
            source: Some(source),
        }
    }
}

// I/O error creation methods
impl Error {
    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl Error {
    /// Whether this error comes from caller misuse
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Whether this error comes from bad discovery data or an unknown key
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }

    /// Whether this error comes from a failed provider construction
    pub fn is_state(&self) -> bool {
        matches!(self, Self::State { .. })
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::Io {
            message: source.to_string(),
            source: Some(Box::new(source)),
        }
    }
}
