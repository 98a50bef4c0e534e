//! Parlance Core Library
//!
//! Element testing harness for voice-command grammars. Wraps a grammar
//! fragment in a tester, drives word sequences through a recognition engine,
//! and compares the decoded values against an expectation table. The engine
//! itself lives behind the [`engine::Engine`] trait; a scripted
//! [`engine::MockEngine`] ships with the crate.

pub mod engine;
pub mod harness;
pub mod recognition;

pub use engine::{
    ConnectionState, Engine, EngineConfig, EngineConnection, EngineError, EngineResult,
    MockEngine, ScriptedElement,
};
pub use harness::{
    CaseReport, CaseRunner, ElementCase, ElementTester, Expectation, HarnessError, HarnessResult,
    TableCase,
};
pub use recognition::Recognition;
