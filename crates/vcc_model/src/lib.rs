use std::borrow::Borrow;
use std::fmt::Display;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod response_table;

pub use response_table::ResponseTable;

pub const TRANSLATION_FAILED: &str = "Translation failed. Mood not in database!";
pub const NO_MOOD_SELECTED: &str = "No mood selected or mood invalid!";
pub const EMPTY_PHRASE: &str = "Enter your phrase first!";

#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq, PartialOrd, Ord, Hash, Default)]
pub struct Mood(String);

impl Mood {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<String> for Mood {
    fn from(value: String) -> Self {
        Mood(value)
    }
}

impl From<&str> for Mood {
    fn from(value: &str) -> Self {
        Mood(String::from(value))
    }
}

impl From<Mood> for String {
    fn from(value: Mood) -> Self {
        value.0
    }
}

impl Borrow<str> for Mood {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Result of a translate or reroll action.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A response picked from the mood's list.
    Response(String),
    /// The mood is unknown. Carries the fixed message that replaces the output.
    Failed(&'static str),
    /// Blank phrase. The output is left untouched.
    EmptyPhrase,
}

impl Outcome {
    /// Text that replaces the displayed output, if any.
    pub fn output(&self) -> Option<&str> {
        match self {
            Outcome::Response(response) => Some(response),
            Outcome::Failed(message) => Some(message),
            Outcome::EmptyPhrase => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("{} not found!", .path.display())]
    Missing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is malformed: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ResourceError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            ResourceError::Missing { path, .. } | ResourceError::Malformed { path, .. } => path,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, ResourceError::Missing { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_output() {
        assert_eq!(Outcome::Response("no stress".into()).output(), Some("no stress"));
        assert_eq!(
            Outcome::Failed(TRANSLATION_FAILED).output(),
            Some("Translation failed. Mood not in database!")
        );
        assert_eq!(Outcome::EmptyPhrase.output(), None);
    }

    #[test]
    fn missing_resource_message_names_the_file() {
        let err = ResourceError::Missing {
            path: PathBuf::from("responses.json"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(err.to_string(), "responses.json not found!");
        assert!(err.is_missing());
    }
}
