// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Engine Abstraction
//!
//! Platform-agnostic interface to speech recognition engines.
//!
//! The harness only needs three things from an engine: a
//! connect/disconnect lifecycle, a connection state, and a way to simulate
//! recognition of a word sequence against a grammar element. Everything else
//! (grammar compilation, acoustic models, the element-matching logic itself)
//! stays behind the [`Engine`] trait.
//!
//! # Example
//!
//! ```ignore
//! use parlance_core::engine::{Engine, EngineConfig, MockEngine, ScriptedElement};
//! use parlance_core::Recognition;
//!
//! let mut engine = MockEngine::new();
//! engine.connect(&EngineConfig::default())?;
//!
//! let element = ScriptedElement::new().on("hello world", Recognition::matched(1));
//! let outcome = engine.mimic(&element, &["hello".into(), "world".into()])?;
//!
//! engine.disconnect()?;
//! ```

pub mod connection;
pub mod error;
pub mod mock;
pub mod traits;

// Error types
pub use error::{EngineError, EngineResult};

// Engine abstraction
pub use traits::{ConnectionState, Engine, EngineConfig};

// Scoped connection guard
pub use connection::EngineConnection;

// Mock engine for testing
pub use mock::{MockEngine, ScriptedElement};
