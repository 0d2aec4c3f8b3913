//! Submission results in a front-end friendly shape

use serde::{Deserialize, Serialize};

use super::session::{Accepted, Rejection};

/// Flat result of a submission: the accepted word, or the alert to show
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitOutcome {
    pub accepted: bool,
    pub word: Option<String>,
    /// Alert title when rejected
    pub title: Option<String>,
    /// Alert message when rejected
    pub message: Option<String>,
}

impl SubmitOutcome {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl From<Result<Accepted, Rejection>> for SubmitOutcome {
    fn from(result: Result<Accepted, Rejection>) -> Self {
        match result {
            Ok(accepted) => Self {
                accepted: true,
                word: Some(accepted.word),
                title: None,
                message: None,
            },
            Err(rejection) => Self {
                accepted: false,
                word: None,
                title: Some(rejection.title()),
                message: Some(rejection.message()),
            },
        }
    }
}
