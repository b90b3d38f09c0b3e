use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The service answered with `status: ERROR`.
    #[error("{message}")]
    Remote { message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid API URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Response from {operation} has no `{field}` field")]
    MissingField {
        operation: &'static str,
        field: &'static str,
    },
}
