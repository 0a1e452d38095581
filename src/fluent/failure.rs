//! Failure reporting shared by all assertion wrappers.
//!
//! Every predicate funnels mismatches through a [`FailureSink`]. The default
//! sink panics immediately; soft assertions swap in a collecting sink so a
//! scope can report all failures at once.

use std::cell::RefCell;
use std::rc::Rc;

/// A single recorded assertion failure.
///
/// Internal to the collector; soft scopes surface failures to callers as the
/// message strings carried by [`SoftFailures`](super::soft::SoftFailures).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Failure {
    /// The formatted failure message, carrying expected and actual values.
    pub(crate) message: String,
}

/// Where a failed predicate goes: an immediate panic, or a shared collector.
#[derive(Debug, Clone, Default)]
pub(crate) enum FailureSink {
    /// Panic at the call site (the default, immediate mode).
    #[default]
    Panic,
    /// Record into a shared collector (soft-assertion mode).
    Collect(Rc<RefCell<Vec<Failure>>>),
}

impl FailureSink {
    /// Report one failure. Panics in immediate mode, records otherwise.
    pub(crate) fn report(&self, message: String) {
        match self {
            FailureSink::Panic => panic!("assertion failed: {message}"),
            FailureSink::Collect(failures) => failures.borrow_mut().push(Failure { message }),
        }
    }
}
