// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Scoped Engine Connection
//!
//! Guard that holds an engine connection for the duration of one case
//! execution and releases it on every exit path.

use tracing::{debug, warn};

use super::error::EngineResult;
use super::traits::{Engine, EngineConfig};

/// Scoped engine connection.
///
/// Connects on [`EngineConnection::open`] and guarantees a disconnect
/// attempt when the guard goes out of scope. The success path should call
/// [`EngineConnection::close`] instead of relying on drop, so that a failed
/// disconnect surfaces as an error; the drop path only logs.
///
/// # Example
///
/// ```ignore
/// use parlance_core::engine::{EngineConfig, EngineConnection, MockEngine};
///
/// let mut engine = MockEngine::new();
/// let mut conn = EngineConnection::open(&mut engine, &EngineConfig::default())?;
/// // ... drive recognitions through conn.engine_mut() ...
/// conn.close()?;
/// ```
pub struct EngineConnection<'a, E: Engine> {
    engine: &'a mut E,
    closed: bool,
}

impl<'a, E: Engine> EngineConnection<'a, E> {
    /// Connects the engine and returns the guard.
    ///
    /// If the connect itself fails, no guard is created and no disconnect
    /// will be attempted.
    pub fn open(engine: &'a mut E, config: &EngineConfig) -> EngineResult<Self> {
        engine.connect(config)?;
        debug!(engine = engine.name(), "engine connected");
        Ok(EngineConnection {
            engine,
            closed: false,
        })
    }

    /// Returns a reference to the connected engine.
    pub fn engine(&self) -> &E {
        self.engine
    }

    /// Returns a mutable reference to the connected engine.
    pub fn engine_mut(&mut self) -> &mut E {
        self.engine
    }

    /// Disconnects explicitly, propagating any disconnect error.
    pub fn close(mut self) -> EngineResult<()> {
        self.closed = true;
        let result = self.engine.disconnect();
        if result.is_ok() {
            debug!(engine = self.engine.name(), "engine disconnected");
        }
        result
    }
}

impl<E: Engine> Drop for EngineConnection<'_, E> {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        if let Err(error) = self.engine.disconnect() {
            warn!(
                engine = self.engine.name(),
                error = %error,
                "disconnect failed during cleanup"
            );
        }
    }
}

// INLINE_TEST_REQUIRED: Tests the private closed flag across close and drop
#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::error::EngineError;
    use crate::engine::mock::MockEngine;
    use crate::engine::traits::ConnectionState;

    #[test]
    fn test_open_connects_and_drop_disconnects() {
        let mut engine = MockEngine::new();

        {
            let conn = EngineConnection::open(&mut engine, &EngineConfig::default()).unwrap();
            assert_eq!(conn.engine().state(), ConnectionState::Connected);
        }

        assert_eq!(engine.state(), ConnectionState::Disconnected);
        assert_eq!(engine.connect_count(), 1);
        assert_eq!(engine.disconnect_count(), 1);
    }

    #[test]
    fn test_close_disconnects_exactly_once() {
        let mut engine = MockEngine::new();

        let conn = EngineConnection::open(&mut engine, &EngineConfig::default()).unwrap();
        conn.close().unwrap();

        // Drop ran after close; the disconnect must not repeat.
        assert_eq!(engine.disconnect_count(), 1);
    }

    #[test]
    fn test_close_propagates_disconnect_error() {
        let mut engine = MockEngine::new();
        engine.fail_disconnect(true);

        let conn = EngineConnection::open(&mut engine, &EngineConfig::default()).unwrap();
        let result = conn.close();

        assert!(matches!(
            result.unwrap_err(),
            EngineError::DisconnectFailed(_)
        ));
    }

    #[test]
    fn test_failed_open_attempts_no_disconnect() {
        let mut engine = MockEngine::new();
        engine.inject_connect_error(EngineError::ConnectionFailed("backend down".into()));

        let result = EngineConnection::open(&mut engine, &EngineConfig::default());

        assert!(result.is_err());
        drop(result);
        assert_eq!(engine.disconnect_count(), 0);
    }

    #[test]
    fn test_drop_path_tolerates_disconnect_failure() {
        let mut engine = MockEngine::new();
        engine.fail_disconnect(true);

        {
            let _conn = EngineConnection::open(&mut engine, &EngineConfig::default()).unwrap();
        }

        // The failed attempt was made, and dropping did not panic.
        assert_eq!(engine.disconnect_count(), 1);
        assert_eq!(engine.state(), ConnectionState::Connected);
    }
}
