//! Error types for the mediatype crate.

use thiserror::Error;

/// The main error type for the mediatype crate.
///
/// Splitting the type part of a media type never fails; only the parameter
/// section can be rejected, either while decoding a header value or while
/// encoding a parameter mapping back into text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The parameter section of a header value is malformed.
    #[error("Media type decode error: {0}")]
    Decode(String),

    /// A parameter cannot be represented in a header value.
    #[error("Media type encode error: {0}")]
    Encode(String),
}

/// Specialized Result type for media type operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error indicating invalid media parameter (used in media type parsing).
#[derive(Error, Debug)]
#[error("Invalid media parameter")]
pub struct InvalidMediaParameter;

impl From<InvalidMediaParameter> for Error {
    fn from(_: InvalidMediaParameter) -> Self {
        Error::Decode("invalid media parameter".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Decode("unterminated quoted string".to_string());
        assert_eq!(
            err.to_string(),
            "Media type decode error: unterminated quoted string"
        );

        let err = Error::Encode("invalid parameter name".to_string());
        assert_eq!(err.to_string(), "Media type encode error: invalid parameter name");
    }

    #[test]
    fn test_invalid_media_parameter_conversion() {
        let err: Error = InvalidMediaParameter.into();
        assert!(matches!(err, Error::Decode(_)));
        assert_eq!(err.to_string(), "Media type decode error: invalid media parameter");
    }

    #[test]
    fn test_error_debug() {
        let err = Error::Encode("test".to_string());
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("Encode"));
    }
}
