// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Element Cases
//!
//! The contract a concrete test case supplies to the runner: an element
//! source and an ordered expectation table.

use serde::{Deserialize, Serialize};

use crate::recognition::Recognition;

/// One (word sequence, expected recognition) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expectation {
    /// Words as the recognizer would hear them, in order.
    pub words: Vec<String>,
    /// Recognition the element is expected to produce for those words.
    pub expected: Recognition,
}

impl Expectation {
    /// Builds an expectation from a whitespace-separated phrase.
    pub fn phrase(phrase: &str, expected: Recognition) -> Self {
        Expectation {
            words: phrase.split_whitespace().map(str::to_string).collect(),
            expected,
        }
    }

    /// Builds an expectation from explicit words.
    pub fn words<I, S>(words: I, expected: Recognition) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Expectation {
            words: words.into_iter().map(Into::into).collect(),
            expected,
        }
    }
}

/// Contract a concrete element case supplies to the runner.
///
/// Used in one of two ways:
/// 1. Store the element and table up front in a [`TableCase`].
/// 2. Implement this trait directly and build the element in
///    [`ElementCase::build_element`], for elements that must be constructed
///    per run.
pub trait ElementCase {
    /// Grammar fragment type this case produces.
    type Element;

    /// Builds the element under test.
    ///
    /// Returning `None` means there is nothing to test: the runner records a
    /// skipped pass without constructing a tester.
    fn build_element(&self) -> Option<Self::Element>;

    /// Ordered expectation table to drive through the tester.
    fn expectations(&self) -> Vec<Expectation>;
}

/// Element case with a stored element and a fixed expectation table.
#[derive(Debug, Clone)]
pub struct TableCase<El> {
    element: Option<El>,
    expectations: Vec<Expectation>,
}

impl<El> Default for TableCase<El> {
    fn default() -> Self {
        TableCase {
            element: None,
            expectations: Vec::new(),
        }
    }
}

impl<El> TableCase<El> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the element under test.
    pub fn with_element(mut self, element: El) -> Self {
        self.element = Some(element);
        self
    }

    /// Appends one expectation.
    pub fn expect(mut self, expectation: Expectation) -> Self {
        self.expectations.push(expectation);
        self
    }

    /// Appends an expectation built from a whitespace-separated phrase.
    pub fn expect_phrase(mut self, phrase: &str, expected: Recognition) -> Self {
        self.expectations.push(Expectation::phrase(phrase, expected));
        self
    }
}

impl<El: Clone> ElementCase for TableCase<El> {
    type Element = El;

    fn build_element(&self) -> Option<El> {
        self.element.clone()
    }

    fn expectations(&self) -> Vec<Expectation> {
        self.expectations.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phrase_splits_on_whitespace() {
        let expectation = Expectation::phrase("hello  world", Recognition::matched(1));
        assert_eq!(expectation.words, vec!["hello", "world"]);
    }

    #[test]
    fn test_words_accepts_explicit_sequences() {
        let expectation = Expectation::words(["good", "morning"], Recognition::Failure);
        assert_eq!(expectation.words, vec!["good", "morning"]);
        assert!(expectation.expected.is_failure());
    }

    #[test]
    fn test_table_case_keeps_expectation_order() {
        let case: TableCase<()> = TableCase::new()
            .expect_phrase("one", Recognition::matched(1))
            .expect(Expectation::phrase("two", Recognition::matched(2)))
            .expect_phrase("three", Recognition::Failure);

        let table = case.expectations();
        assert_eq!(table.len(), 3);
        assert_eq!(table[0].words, vec!["one"]);
        assert_eq!(table[1].words, vec!["two"]);
        assert_eq!(table[2].words, vec!["three"]);
    }

    #[test]
    fn test_table_case_without_element_builds_none() {
        let case: TableCase<()> = TableCase::new();
        assert!(case.build_element().is_none());
    }
}
