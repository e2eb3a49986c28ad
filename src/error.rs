//! Error types for INI encoding and the serde bridge.
//!
//! Decoding INI text never fails: malformed lines are dropped. Errors only come
//! from three places:
//!
//! - **Encoding** a [`Value`](crate::Value) that has no INI representation
//!   (an array nested in an array, a section inside an array) or that nests
//!   sections deeper than [`EncodeOptions::max_depth`](crate::EncodeOptions)
//! - **Serializing** a Rust type whose top level is not a map or struct
//! - **Deserializing** decoded text into a Rust type that does not fit it
//!
//! ## Examples
//!
//! ```rust
//! use serde_ini::{from_str, Error};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, Debug)]
//! struct Server { port: u16 }
//!
//! let result: Result<Server, Error> = from_str("port=not-a-number");
//! assert!(result.is_err());
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors produced by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// A value with no INI representation was handed to the encoder
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// Nested sections exceeded the configured encode depth
    #[error("Section nesting exceeds the maximum depth of {depth}")]
    DepthLimitExceeded { depth: usize },

    /// A decoded value could not be coerced into the requested Rust type
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// Unsupported type for serialization
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an invalid value error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ini::Error;
    ///
    /// let err = Error::invalid_value("arrays cannot contain sections");
    /// assert!(err.to_string().contains("arrays cannot contain sections"));
    /// ```
    pub fn invalid_value(msg: &str) -> Self {
        Error::InvalidValue(msg.to_string())
    }

    /// Creates a type mismatch error when a decoded value does not fit the target type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ini::Error;
    ///
    /// let err = Error::type_mismatch("integer", "string \"abc\"");
    /// assert!(err.to_string().contains("expected integer"));
    /// ```
    pub fn type_mismatch(expected: &str, found: &str) -> Self {
        Error::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    pub fn depth_limit(depth: usize) -> Self {
        Error::DepthLimitExceeded { depth }
    }

    /// Creates an unsupported type error for shapes that have no INI form.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reader/writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
