//! Case Runner
//!
//! Runs element cases against an engine, holding the connection for exactly
//! the duration of each run.

use tracing::{debug, trace};

use crate::engine::{Engine, EngineConfig, EngineConnection};

use super::case::ElementCase;
use super::error::{HarnessError, HarnessResult};
use super::tester::ElementTester;

/// Outcome of one passing case execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseReport {
    /// Number of expectations checked.
    pub checked: usize,
    /// True when the case produced no element and passed vacuously.
    pub skipped: bool,
}

impl CaseReport {
    fn skipped() -> Self {
        CaseReport {
            checked: 0,
            skipped: true,
        }
    }

    fn checked(count: usize) -> Self {
        CaseReport {
            checked: count,
            skipped: false,
        }
    }
}

/// Runs element cases against an owned engine.
///
/// Each [`CaseRunner::run`] call connects the engine, drives the case's
/// expectation table in order, and disconnects on every exit path, mismatch
/// failures and engine errors included.
pub struct CaseRunner<E: Engine> {
    engine: E,
    config: EngineConfig,
}

impl<E: Engine> CaseRunner<E> {
    /// Creates a runner with the default engine configuration.
    pub fn new(engine: E) -> Self {
        CaseRunner {
            engine,
            config: EngineConfig::default(),
        }
    }

    /// Creates a runner with a specific engine configuration.
    pub fn with_config(engine: E, config: EngineConfig) -> Self {
        CaseRunner { engine, config }
    }

    /// Returns a reference to the engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Returns a mutable reference to the engine.
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Consumes the runner and returns the engine.
    pub fn into_engine(self) -> E {
        self.engine
    }

    /// Runs one case.
    ///
    /// A case without an element passes as skipped. Otherwise every
    /// expectation is checked in table order against the recognized value;
    /// the first mismatch fails the run with both values in the error, and
    /// later expectations are not evaluated. Engine errors propagate; the
    /// disconnect is still attempted.
    pub fn run<C>(&mut self, case: &C) -> HarnessResult<CaseReport>
    where
        C: ElementCase<Element = E::Element>,
    {
        let mut connection = EngineConnection::open(&mut self.engine, &self.config)?;

        let element = match case.build_element() {
            Some(element) => element,
            None => {
                debug!("no element to test, passing vacuously");
                connection.close()?;
                return Ok(CaseReport::skipped());
            }
        };

        let expectations = case.expectations();
        let mut tester = ElementTester::new(connection.engine_mut(), element);

        for (index, expectation) in expectations.iter().enumerate() {
            let actual = tester.recognize(&expectation.words)?;
            trace!(index, words = %expectation.words.join(" "), "expectation checked");
            if actual != expectation.expected {
                return Err(HarnessError::Mismatch {
                    index,
                    words: expectation.words.join(" "),
                    expected: expectation.expected.clone(),
                    actual,
                });
            }
        }

        drop(tester);
        connection.close()?;

        debug!(checked = expectations.len(), "case passed");
        Ok(CaseReport::checked(expectations.len()))
    }
}
