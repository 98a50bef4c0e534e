// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mock Engine
//!
//! In-memory engine for exercising the harness without a real recognizer.
//! Recognition outcomes are scripted on the element itself; the engine adds
//! lifecycle bookkeeping and error injection.

use crate::recognition::Recognition;

use super::error::{EngineError, EngineResult};
use super::traits::{ConnectionState, Engine, EngineConfig};

/// Grammar fragment with scripted recognition outcomes.
///
/// Each entry maps one exact word sequence to the recognition it decodes to.
/// Word sequences without an entry produce the failure sentinel, the way a
/// real element rejects utterances it does not cover.
#[derive(Debug, Clone, Default)]
pub struct ScriptedElement {
    responses: Vec<(Vec<String>, Recognition)>,
}

impl ScriptedElement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a scripted outcome for a whitespace-separated phrase.
    pub fn on(mut self, phrase: &str, outcome: Recognition) -> Self {
        let words = phrase.split_whitespace().map(str::to_string).collect();
        self.responses.push((words, outcome));
        self
    }

    /// Returns the scripted outcome for `words`.
    pub fn outcome(&self, words: &[String]) -> Recognition {
        self.responses
            .iter()
            .find(|(scripted, _)| scripted.as_slice() == words)
            .map(|(_, outcome)| outcome.clone())
            .unwrap_or(Recognition::Failure)
    }

    /// Number of scripted word sequences.
    pub fn len(&self) -> usize {
        self.responses.len()
    }

    /// True when no outcomes are scripted.
    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }
}

/// Mock recognition engine.
///
/// Tracks connect/disconnect calls and mimicked word sequences so tests can
/// assert on the connection lifecycle, and supports one-shot error injection
/// for the connect and mimic paths plus a sticky disconnect-failure switch
/// for exercising cleanup behavior.
#[derive(Debug, Default)]
pub struct MockEngine {
    state: ConnectionState,
    connect_count: u32,
    disconnect_count: u32,
    mimicked: Vec<Vec<String>>,
    connect_error: Option<EngineError>,
    mimic_error: Option<EngineError>,
    disconnect_fails: bool,
}

impl MockEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of connect calls that succeeded.
    pub fn connect_count(&self) -> u32 {
        self.connect_count
    }

    /// Number of disconnect calls, successful or not.
    pub fn disconnect_count(&self) -> u32 {
        self.disconnect_count
    }

    /// Word sequences mimicked so far, in order.
    pub fn mimicked(&self) -> &[Vec<String>] {
        &self.mimicked
    }

    /// Clears the mimic log.
    pub fn clear_mimicked(&mut self) {
        self.mimicked.clear();
    }

    /// Forces the connection state, bypassing connect/disconnect.
    pub fn set_state(&mut self, state: ConnectionState) {
        self.state = state;
    }

    /// Injects an error returned by the next connect call.
    pub fn inject_connect_error(&mut self, error: EngineError) {
        self.connect_error = Some(error);
    }

    /// Injects an error returned by the next mimic call.
    pub fn inject_mimic_error(&mut self, error: EngineError) {
        self.mimic_error = Some(error);
    }

    /// Makes disconnect calls fail until switched off.
    pub fn fail_disconnect(&mut self, fail: bool) {
        self.disconnect_fails = fail;
    }
}

impl Engine for MockEngine {
    type Element = ScriptedElement;

    fn name(&self) -> &str {
        "mock"
    }

    fn connect(&mut self, _config: &EngineConfig) -> EngineResult<()> {
        if let Some(error) = self.connect_error.take() {
            return Err(error);
        }
        if self.state == ConnectionState::Connected {
            return Err(EngineError::AlreadyConnected);
        }
        self.state = ConnectionState::Connected;
        self.connect_count += 1;
        Ok(())
    }

    fn disconnect(&mut self) -> EngineResult<()> {
        self.disconnect_count += 1;
        if self.disconnect_fails {
            return Err(EngineError::DisconnectFailed(
                "injected disconnect failure".into(),
            ));
        }
        self.state = ConnectionState::Disconnected;
        Ok(())
    }

    fn state(&self) -> ConnectionState {
        self.state
    }

    fn mimic(&mut self, element: &ScriptedElement, words: &[String]) -> EngineResult<Recognition> {
        if let Some(error) = self.mimic_error.take() {
            return Err(error);
        }
        if self.state != ConnectionState::Connected {
            return Err(EngineError::NotConnected);
        }
        self.mimicked.push(words.to_vec());
        Ok(element.outcome(words))
    }
}
