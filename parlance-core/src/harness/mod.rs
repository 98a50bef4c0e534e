// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Element Test Harness
//!
//! Drives expectation tables through a recognition engine and reports the
//! first divergence.
//!
//! A case supplies a grammar element (stored up front in a [`TableCase`], or
//! built per run by a custom [`ElementCase`] impl) and an ordered table of
//! (words, expected recognition) pairs. The [`CaseRunner`] brackets each run
//! in an engine connection, feeds every word sequence to an
//! [`ElementTester`], and compares the decoded values in order: the first
//! mismatch fails the run with both values in the message, and the engine is
//! disconnected on every exit path.
//!
//! # Example
//!
//! ```ignore
//! use parlance_core::{CaseRunner, MockEngine, Recognition, ScriptedElement, TableCase};
//!
//! let element = ScriptedElement::new().on("hello world", Recognition::matched(1));
//! let case = TableCase::new()
//!     .with_element(element)
//!     .expect_phrase("hello world", Recognition::matched(1))
//!     .expect_phrase("foo", Recognition::Failure);
//!
//! let mut runner = CaseRunner::new(MockEngine::new());
//! let report = runner.run(&case)?;
//! assert_eq!(report.checked, 2);
//! ```

pub mod case;
pub mod error;
pub mod runner;
pub mod tester;

// Error types
pub use error::{HarnessError, HarnessResult};

// Case contract
pub use case::{ElementCase, Expectation, TableCase};

// Element tester
pub use tester::ElementTester;

// Case runner
pub use runner::{CaseReport, CaseRunner};
