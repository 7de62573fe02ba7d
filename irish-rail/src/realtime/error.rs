//! Realtime service error types.

use crate::domain::InvalidCoordinate;

/// Errors from mapping a service response into records.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The body is not well-formed XML
    #[error("malformed XML: {0}")]
    Xml(#[from] roxmltree::Error),

    /// A record element lacks one of its required children
    #[error("{record} element {index} has no <{tag}> child (field `{field}`)")]
    MissingElement {
        record: &'static str,
        /// Zero-based position of the record element in the document.
        index: usize,
        field: &'static str,
        tag: &'static str,
    },

    /// A station's coordinates are not in-range decimal degrees
    #[error(transparent)]
    Coordinate(#[from] InvalidCoordinate),

    /// The body is not valid UTF-8
    #[error("body is not UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),
}

/// Errors that can occur when talking to the realtime service.
#[derive(Debug, thiserror::Error)]
pub enum RealtimeError {
    /// HTTP request failed (connection, timeout, unreadable body)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// The response could not be mapped into records
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// No station has the requested description
    #[error("no station named {name:?}")]
    StationNotFound { name: String },

    /// The directory has no stations to choose from
    #[error("station directory is empty")]
    EmptyDirectory,

    /// A caller-supplied point is outside the valid coordinate ranges
    #[error("invalid point: {0}")]
    InvalidPoint(InvalidCoordinate),

    /// Invalid client configuration
    #[error("configuration error: {message}")]
    Config { message: String },
}

impl RealtimeError {
    /// True for transport failures and error statuses from the service.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Api { .. })
    }

    /// True if the response could not be mapped.
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    /// True if a lookup found no station.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::StationNotFound { .. } | Self::EmptyDirectory)
    }
}

impl From<InvalidCoordinate> for RealtimeError {
    fn from(err: InvalidCoordinate) -> Self {
        match err {
            InvalidCoordinate::Query { .. } => Self::InvalidPoint(err),
            InvalidCoordinate::Station { .. } => Self::Parse(err.into()),
        }
    }
}
