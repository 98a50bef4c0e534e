// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Common Test Utilities
//!
//! Shared fixtures used across harness test modules.

use parlance_core::{Recognition, ScriptedElement, TableCase};
use serde_json::json;

/// Element that decodes two phrases and rejects everything else.
pub fn greeting_element() -> ScriptedElement {
    ScriptedElement::new()
        .on("hello world", Recognition::matched(1))
        .on("good morning", Recognition::matched("greeting"))
}

/// Case whose table matches [`greeting_element`] exactly, including a
/// rejected phrase expected to fail.
pub fn passing_case() -> TableCase<ScriptedElement> {
    TableCase::new()
        .with_element(greeting_element())
        .expect_phrase("hello world", Recognition::matched(1))
        .expect_phrase("good morning", Recognition::matched("greeting"))
        .expect_phrase("foo", Recognition::Failure)
}

/// Case expecting a value the element never produces at the second entry.
pub fn mismatching_case() -> TableCase<ScriptedElement> {
    TableCase::new()
        .with_element(greeting_element())
        .expect_phrase("hello world", Recognition::matched(1))
        .expect_phrase("good morning", Recognition::matched(json!({"wrong": true})))
        .expect_phrase("foo", Recognition::Failure)
}
