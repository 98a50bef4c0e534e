//! Engine Trait
//!
//! Abstraction over speech recognition backends.

use super::error::EngineResult;
use crate::recognition::Recognition;

/// Connection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    /// Not connected to any recognition backend.
    #[default]
    Disconnected,
    /// Connection in progress.
    Connecting,
    /// Connected and ready to recognize.
    Connected,
}

/// Configuration for engine connections.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// BCP 47 language tag the recognizer should load.
    pub language: String,
    /// Connection timeout in milliseconds.
    pub connect_timeout_ms: u64,
    /// Timeout for a single simulated recognition in milliseconds.
    pub mimic_timeout_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            language: "en".to_string(),
            connect_timeout_ms: 10_000,
            mimic_timeout_ms: 5_000,
        }
    }
}

impl EngineConfig {
    /// Creates a config for a specific recognizer language.
    pub fn with_language(language: &str) -> Self {
        EngineConfig {
            language: language.to_string(),
            ..Default::default()
        }
    }
}

/// Engine trait for speech recognition backends.
///
/// This trait abstracts the underlying recognition engine, allowing
/// platform-specific implementations and easy testing with mocks. Grammar
/// elements are opaque to the harness: each engine declares its own
/// [`Engine::Element`] type, and the element-matching logic lives entirely
/// behind [`Engine::mimic`].
///
/// # Synchronous Interface
///
/// This trait uses synchronous methods for simplicity in the core library.
/// Engine implementations may internally use async runtimes but expose a
/// blocking interface here.
pub trait Engine: Send {
    /// Grammar fragment type understood by this engine.
    type Element;

    /// Short engine identifier used in diagnostics.
    fn name(&self) -> &str;

    /// Connects to the recognition backend.
    ///
    /// Returns `Ok(())` on successful connection. Connecting an already
    /// connected engine is an error.
    fn connect(&mut self, config: &EngineConfig) -> EngineResult<()>;

    /// Disconnects from the recognition backend.
    ///
    /// Safe to call even if not connected.
    fn disconnect(&mut self) -> EngineResult<()>;

    /// Returns the current connection state.
    fn state(&self) -> ConnectionState;

    /// Simulates recognition of `words` against `element`.
    ///
    /// Returns the decoded semantic value, or the failure sentinel when the
    /// element does not match the word sequence. Returns an error if not
    /// connected.
    fn mimic(&mut self, element: &Self::Element, words: &[String]) -> EngineResult<Recognition>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_config_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.language, "en");
        assert_eq!(config.connect_timeout_ms, 10_000);
        assert_eq!(config.mimic_timeout_ms, 5_000);
    }

    #[test]
    fn test_engine_config_with_language() {
        let config = EngineConfig::with_language("de-CH");
        assert_eq!(config.language, "de-CH");
        assert_eq!(config.connect_timeout_ms, 10_000);
    }
}
