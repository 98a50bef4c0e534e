// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Engine Error Types

use thiserror::Error;

/// Errors that can occur during engine operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    #[error("engine already connected")]
    AlreadyConnected,

    #[error("engine not connected")]
    NotConnected,

    #[error("disconnect failed: {0}")]
    DisconnectFailed(String),

    #[error("grammar rejected: {0}")]
    GrammarRejected(String),

    #[error("recognition timed out")]
    RecognitionTimeout,
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
