//! Error types for the catalog API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers routinely distinguish
//! "no such row" from "the server returned an unexpected status." All other
//! non-2xx responses, 422 validation failures included, land in `HttpError`
//! with the raw status code and body.

use thiserror::Error;

/// Errors returned by `CatalogClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}
