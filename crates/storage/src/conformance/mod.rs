//! Conformance test suite for `KeyValueStore` implementations.
//!
//! Any backend can run this suite to check that it behaves like browser
//! storage:
//!
//! - **Basic**: missing keys read as `None`, writes overwrite, removal is
//!   idempotent
//! - **Isolation**: keys do not bleed into each other, values are stored
//!   byte-for-byte
//!
//! # Usage
//!
//! Call [`run_conformance_suite`] with a factory returning a fresh, empty
//! store for each test:
//!
//! ```ignore
//! use mockup_storage::{conformance::run_conformance_suite, MemoryStore};
//!
//! let report = run_conformance_suite(MemoryStore::new);
//! assert!(report.failed == 0, "{report}");
//! ```

mod basic;
mod isolation;

use std::fmt;

use crate::KeyValueStore;

/// Result of a single conformance test.
#[derive(Debug, Clone)]
pub struct TestResult {
    /// Test category (e.g. "basic", "isolation").
    pub category: String,
    /// Test name (e.g. "missing_key_reads_none").
    pub name: String,
    pub passed: bool,
    /// Error message if the test failed.
    pub message: Option<String>,
}

impl TestResult {
    fn from_result(category: &str, name: &str, result: Result<(), String>) -> Self {
        let (passed, message) = match result {
            Ok(()) => (true, None),
            Err(msg) => (false, Some(msg)),
        };
        Self {
            category: category.to_string(),
            name: name.to_string(),
            passed,
            message,
        }
    }
}

/// Aggregated report from a full conformance suite run.
#[derive(Debug, Clone)]
pub struct ConformanceReport {
    pub results: Vec<TestResult>,
    pub passed: usize,
    pub failed: usize,
    pub total: usize,
}

impl fmt::Display for ConformanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Conformance: {}/{} passed ({} failed)",
            self.passed, self.total, self.failed
        )?;
        for r in &self.results {
            if !r.passed {
                writeln!(
                    f,
                    "  FAIL [{}/{}]: {}",
                    r.category,
                    r.name,
                    r.message.as_deref().unwrap_or("(no message)")
                )?;
            }
        }
        Ok(())
    }
}

/// Run the full conformance suite against a store backend.
///
/// `factory` is called once per test and must return an empty store.
pub fn run_conformance_suite<S, F>(factory: F) -> ConformanceReport
where
    S: KeyValueStore,
    F: Fn() -> S,
{
    let mut results = Vec::new();

    results.extend(basic::run_basic_tests(&factory));
    results.extend(isolation::run_isolation_tests(&factory));

    let passed = results.iter().filter(|r| r.passed).count();
    let total = results.len();

    ConformanceReport {
        results,
        passed,
        failed: total - passed,
        total,
    }
}

/// Turn a store error into a test failure message.
fn step<T>(what: &str, result: Result<T, crate::StorageError>) -> Result<T, String> {
    result.map_err(|e| format!("{} failed: {}", what, e))
}

fn expect_eq<T: PartialEq + fmt::Debug>(what: &str, got: T, want: T) -> Result<(), String> {
    if got == want {
        Ok(())
    } else {
        Err(format!("{}: expected {:?}, got {:?}", what, want, got))
    }
}
