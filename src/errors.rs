use std::fmt;

use reqwest::StatusCode;

#[derive(Debug)]
pub enum FetchError {
    // Could not reach GitLab at all
    Network(reqwest::Error),

    // GitLab answered with a non-success status
    Api { status: StatusCode, body: String },

    // The body was not valid JSON
    Json(serde_json::Error),

    // A list endpoint came back empty
    EmptyList,

    // The fixture file could not be written
    Io(std::io::Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(err) => {
                write!(f, "Failed to reach GitLab: {}", err)
            }
            FetchError::Api { status, body } => {
                write!(f, "GitLab API error ({}): {}", status, body)
            }
            FetchError::Json(err) => {
                write!(f, "JSON error: {}", err)
            }
            FetchError::EmptyList => {
                write!(f, "Endpoint returned an empty list; nothing to snapshot")
            }
            FetchError::Io(err) => {
                write!(f, "Failed to write fixture file: {}", err)
            }
        }
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Network(err)
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Json(err)
    }
}

impl From<std::io::Error> for FetchError {
    fn from(err: std::io::Error) -> Self {
        FetchError::Io(err)
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
