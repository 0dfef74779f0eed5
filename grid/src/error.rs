//! Editor error type.
//!
//! Every failure the editor can report to the user. Transport and decode
//! failures originate in the host's HTTP layer but are expressed here so the
//! notification text lives in one place.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors surfaced by the editor and the pathfinding round-trip.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditorError {
    /// A search was requested before both endpoints were placed.
    #[error("Please set start and end points.")]
    MissingEndpoints,
    /// The service returned a coordinate that is not on the grid.
    #[error("pathfinding service returned an off-grid cell ({x}, {y})")]
    InvalidPathCell { x: i64, y: i64 },
    /// The request body could not be serialized.
    #[error("failed to encode request: {0}")]
    Encode(String),
    /// The request failed, or an error status came back with an unreadable body.
    #[error("request failed: {0}")]
    Transport(String),
    /// The response body was not a valid path response.
    #[error("invalid response: {0}")]
    Decode(String),
}

impl EditorError {
    /// Text shown to the user in a blocking notification.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingEndpoints => self.to_string(),
            Self::InvalidPathCell { .. } | Self::Encode(_) | Self::Transport(_) | Self::Decode(_) => {
                format!("Failed to reach the pathfinding service: {self}")
            }
        }
    }

    /// Whether the failure is a user-input validation problem rather than a service fault.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MissingEndpoints)
    }
}
