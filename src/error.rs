//! Error types for rs-play-listing.
//!
//! Only two conditions escape the extraction engine. Every other field
//! lookup that fails is reported as an absent value on the `Listing`.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A field the listing cannot be constructed without was not found.
    #[error("Required field missing: {0}")]
    MissingRequiredField(&'static str),

    /// The structured-data block is present but is not valid JSON.
    #[error("Malformed document: {0}")]
    MalformedDocument(String),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
