// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Harness Error Types

use thiserror::Error;

use crate::engine::EngineError;
use crate::recognition::Recognition;

/// Errors surfaced while running an element case.
#[derive(Error, Debug)]
pub enum HarnessError {
    /// A recognized value differed from the expected value.
    ///
    /// Carries the first divergence only; expectations after it are never
    /// evaluated.
    #[error("recognition mismatch at \"{words}\": expected {expected}, recognized {actual}")]
    Mismatch {
        /// Zero-based position of the failing expectation.
        index: usize,
        /// The mimicked word sequence, space-joined.
        words: String,
        /// Value the table expected.
        expected: Recognition,
        /// Value the engine produced.
        actual: Recognition,
    },

    /// An engine operation failed.
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),
}

/// Result type for harness operations.
pub type HarnessResult<T> = Result<T, HarnessError>;
