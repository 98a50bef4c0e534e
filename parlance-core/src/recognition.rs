//! Recognition Values
//!
//! The comparable outcome of simulating recognition of a word sequence
//! against a grammar element.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome of one simulated recognition.
///
/// A matching element decodes to an arbitrary semantic value; a word sequence
/// the element does not cover yields [`Recognition::Failure`]. The failure
/// sentinel is an ordinary comparable value: expectation tables may name it
/// on either side of a comparison, and the harness never treats it specially.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Recognition {
    /// The element matched and decoded to this value.
    Match(Value),
    /// The element did not match the word sequence.
    Failure,
}

impl Recognition {
    /// Creates a matched recognition from any JSON-representable value.
    pub fn matched(value: impl Into<Value>) -> Self {
        Recognition::Match(value.into())
    }

    /// Returns true for the no-match sentinel.
    pub fn is_failure(&self) -> bool {
        matches!(self, Recognition::Failure)
    }

    /// Returns the decoded value, if the element matched.
    pub fn value(&self) -> Option<&Value> {
        match self {
            Recognition::Match(value) => Some(value),
            Recognition::Failure => None,
        }
    }
}

impl fmt::Display for Recognition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recognition::Match(value) => write!(f, "{}", value),
            Recognition::Failure => write!(f, "recognition failure"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_matched_value_displays_as_json() {
        assert_eq!(Recognition::matched(1).to_string(), "1");
        assert_eq!(Recognition::matched("open").to_string(), "\"open\"");
        assert_eq!(
            Recognition::matched(json!({"action": "open"})).to_string(),
            "{\"action\":\"open\"}"
        );
    }

    #[test]
    fn test_failure_sentinel_displays() {
        assert_eq!(Recognition::Failure.to_string(), "recognition failure");
    }

    #[test]
    fn test_sentinel_compares_like_any_value() {
        assert_eq!(Recognition::Failure, Recognition::Failure);
        assert_ne!(Recognition::Failure, Recognition::matched(1));
        assert_ne!(Recognition::matched(1), Recognition::matched(2));
    }

    #[test]
    fn test_value_accessor() {
        assert_eq!(Recognition::matched(7).value(), Some(&json!(7)));
        assert_eq!(Recognition::Failure.value(), None);
        assert!(Recognition::Failure.is_failure());
    }

    #[test]
    fn test_recognition_survives_serde() {
        let original = Recognition::matched(json!(["open", 2]));
        let encoded = serde_json::to_string(&original).unwrap();
        let decoded: Recognition = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, original);
    }
}
