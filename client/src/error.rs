//! Submission error taxonomy
//!
//! Every failure mode of the submission pipeline is normalized into one of
//! these variants at the gateway boundary; the controller stores the
//! rendered message in the `Failed` state. Nothing is retried automatically.

use thiserror::Error;

/// Errors produced by the submission gateway
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Required input missing, caught before any network call
    #[error("Missing required input: {0}")]
    Validation(String),

    /// Backend reachable but rejected or failed the request
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// No response received; names the endpoint so a misconfigured or
    /// unreachable backend is diagnosable
    #[error("Network error: unable to reach the analysis service at {endpoint} ({message})")]
    Network { endpoint: String, message: String },

    /// Local failure before the request was dispatched
    #[error("Request setup error: {0}")]
    RequestSetup(String),

    /// Success status but the body did not match the expected shape
    #[error("Malformed analysis response: {0}")]
    Decode(String),
}

/// Result type alias for gateway operations
pub type GatewayResult<T> = Result<T, AnalysisError>;
