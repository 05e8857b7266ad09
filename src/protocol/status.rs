//! Outcome and outgoing request bodies

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of a processed request, reported on the next `/finish`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    #[default]
    Accept,
    Reject,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Accept => "accept",
            Outcome::Reject => "reject",
        }
    }

    pub fn is_accept(&self) -> bool {
        matches!(self, Outcome::Accept)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /finish`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinishRequest {
    pub status: Outcome,
}

/// Body of `POST /notice` and `POST /report`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayloadRequest {
    /// Hex-encoded payload
    pub payload: String,
}
