//! Error types shared by the providers and the formatter.

use thiserror::Error;

/// Everything that can go wrong between "Waybar ran us" and "a status line
/// was produced". The binary collapses any of these into the fallback
/// `{text, tooltip}` pair, so `Display` text ends up in the tooltip.
#[derive(Error, Debug)]
pub enum WeatherError {
    /// Transport-level failure, including request timeouts.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The collaborator answered, but not with a success status.
    #[error("{service} request failed with status {status}: {body}")]
    Api {
        service: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },

    /// The body came back but could not be parsed, or a required field
    /// was absent from an otherwise well-formed document.
    #[error("invalid response from {service}: {reason}")]
    InvalidResponse {
        service: &'static str,
        reason: String,
    },

    /// The formatter was handed data that violates its input invariants.
    #[error("invalid forecast input: {0}")]
    InvalidInput(String),
}
