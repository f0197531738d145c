//! Error types for the handler pipeline

pub type Result<T> = std::result::Result<T, HandlerError>;

#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    /// The delegate encoder could not encode the record or its attributes
    #[error("error when calling inner handler's handle: {message}")]
    Encode {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The delegate's output could not be parsed back into a map
    #[error("error when decoding inner handler's output: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    /// The decoded attributes could not be rendered as indented text
    #[error("error when rendering attributes: {source}")]
    Reencode {
        #[source]
        source: serde_json::Error,
    },

    /// IO error with context
    #[error("IO error while {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    Config { component: String, message: String },
}

impl HandlerError {
    /// Create an encode error without an underlying cause
    pub fn encode(message: impl Into<String>) -> Self {
        HandlerError::Encode {
            message: message.into(),
            source: None,
        }
    }

    /// Create an encode error wrapping the failure that caused it
    pub fn encode_with<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        HandlerError::Encode {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn decode(source: serde_json::Error) -> Self {
        HandlerError::Decode { source }
    }

    pub fn reencode(source: serde_json::Error) -> Self {
        HandlerError::Reencode { source }
    }

    /// Create an IO error with context
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        HandlerError::Io {
            operation: operation.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        HandlerError::Config {
            component: component.into(),
            message: message.into(),
        }
    }
}
