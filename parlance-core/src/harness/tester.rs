//! Element Tester
//!
//! Wraps one grammar element and simulates recognitions against it.

use crate::engine::{Engine, EngineResult};
use crate::recognition::Recognition;

/// Drives simulated recognitions of word sequences against one element.
///
/// The tester never inspects the element or the decoded values; matching is
/// entirely the engine's concern. A word sequence the element does not cover
/// comes back as the failure sentinel, which is returned as-is.
pub struct ElementTester<'a, E: Engine> {
    engine: &'a mut E,
    element: E::Element,
}

impl<'a, E: Engine> ElementTester<'a, E> {
    /// Wraps `element` for testing against `engine`.
    pub fn new(engine: &'a mut E, element: E::Element) -> Self {
        ElementTester { engine, element }
    }

    /// Simulates recognition of `words` and returns the decoded value.
    pub fn recognize<W>(&mut self, words: &[W]) -> EngineResult<Recognition>
    where
        W: AsRef<str>,
    {
        let words: Vec<String> = words.iter().map(|w| w.as_ref().to_string()).collect();
        self.engine.mimic(&self.element, &words)
    }

    /// Returns the element under test.
    pub fn element(&self) -> &E::Element {
        &self.element
    }
}
