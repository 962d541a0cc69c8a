//! Error types for the navigation helpers.

/// Errors surfaced by input validation and the refresh client.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed (network error, timeout, or malformed URL).
    #[error("Request failed")]
    RequestFailed,
    /// The backend answered the refresh ping with a non-success status.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// A pagination position outside `1..=total` was rejected up front.
    #[error("page {current} out of range 1..={total}")]
    PageOutOfRange { current: u32, total: u32 },
}
