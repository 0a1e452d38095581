//! Fluent assertions on a single build task.
//!
//! - `expect_task()` - Entry point for creating a task assertion
//! - `TaskAssert` - Chainable predicates over a task's path and outcome

use super::failure::FailureSink;
use super::matchers::whole_string_regex;
use crate::model::{BuildTask, TaskOutcome};

/// Create an assertion wrapper around a build task.
///
/// Accepts a task reference or `None` for an absent subject: only
/// [`TaskAssert::is_null`] passes on `None`, every other predicate fails.
///
/// # Example
///
/// ```rust
/// use buildcheck::{expect_task, BuildTask, TaskOutcome};
///
/// let task = BuildTask::new(":compile", TaskOutcome::Success);
///
/// expect_task(&task)
///     .has_path(":compile")
///     .is_success();
/// ```
pub fn expect_task<'a>(task: impl Into<Option<&'a BuildTask>>) -> TaskAssert<'a> {
    TaskAssert {
        subject: task.into(),
        sink: FailureSink::default(),
    }
}

/// Chainable assertions on one [`BuildTask`].
///
/// Predicates evaluate immediately and panic on mismatch; under
/// [`SoftAssertions`](super::SoftAssertions) mismatches are collected
/// instead.
#[derive(Debug, Clone)]
pub struct TaskAssert<'a> {
    subject: Option<&'a BuildTask>,
    sink: FailureSink,
}

impl<'a> TaskAssert<'a> {
    pub(crate) fn with_sink(subject: Option<&'a BuildTask>, sink: FailureSink) -> Self {
        Self { subject, sink }
    }

    /// Assert the subject is absent. The only predicate that passes on `None`.
    pub fn is_null(self) -> Self {
        if let Some(task) = self.subject {
            self.sink.report(format!(
                "expected task to be null but was task at path '{}'",
                task.path
            ));
        }
        self
    }

    /// Assert the subject is present.
    pub fn is_not_null(self) -> Self {
        if self.subject.is_none() {
            self.sink
                .report("expected task to be non-null but was null".to_string());
        }
        self
    }

    // Fails (once per call) when the subject is absent.
    fn subject(&self) -> Option<&'a BuildTask> {
        if self.subject.is_none() {
            self.sink
                .report("expected task to be non-null but was null".to_string());
        }
        self.subject
    }

    // =========================================================================
    // Path predicates
    // =========================================================================

    /// Assert the task path equals `path`.
    pub fn has_path(self, path: &str) -> Self {
        if let Some(task) = self.subject() {
            if task.path != path {
                self.sink.report(format!(
                    "expected task path to equal '{}' but was '{}'",
                    path, task.path
                ));
            }
        }
        self
    }

    /// Assert the task path starts with `prefix`.
    pub fn path_starts_with(self, prefix: &str) -> Self {
        if let Some(task) = self.subject() {
            if !task.path.starts_with(prefix) {
                self.sink.report(format!(
                    "expected task path to start with '{}' but was '{}'",
                    prefix, task.path
                ));
            }
        }
        self
    }

    /// Assert the task path ends with `suffix`.
    pub fn path_ends_with(self, suffix: &str) -> Self {
        if let Some(task) = self.subject() {
            if !task.path.ends_with(suffix) {
                self.sink.report(format!(
                    "expected task path to end with '{}' but was '{}'",
                    suffix, task.path
                ));
            }
        }
        self
    }

    /// Assert the task path contains `sequence`.
    pub fn path_contains(self, sequence: &str) -> Self {
        if let Some(task) = self.subject() {
            if !task.path.contains(sequence) {
                self.sink.report(format!(
                    "expected task path to contain '{}' but was '{}'",
                    sequence, task.path
                ));
            }
        }
        self
    }

    /// Assert the regex `pattern` matches the entire task path.
    ///
    /// `:compile` does not match `:compileJava`; use `path_contains` for
    /// substring checks. An invalid pattern is an assertion failure, not a
    /// panic from the regex engine.
    pub fn path_matches(self, pattern: &str) -> Self {
        if let Some(task) = self.subject() {
            match whole_string_regex(pattern) {
                Ok(re) => {
                    if !re.is_match(&task.path) {
                        self.sink.report(format!(
                            "expected task path to match '{}' but was '{}'",
                            pattern, task.path
                        ));
                    }
                }
                Err(e) => self.sink.report(format!("invalid pattern '{pattern}': {e}")),
            }
        }
        self
    }

    /// Assert the regex `pattern` does not match the entire task path.
    pub fn path_does_not_match(self, pattern: &str) -> Self {
        if let Some(task) = self.subject() {
            match whole_string_regex(pattern) {
                Ok(re) => {
                    if re.is_match(&task.path) {
                        self.sink.report(format!(
                            "expected task path to not match '{}' but was '{}'",
                            pattern, task.path
                        ));
                    }
                }
                Err(e) => self.sink.report(format!("invalid pattern '{pattern}': {e}")),
            }
        }
        self
    }

    /// Hand the raw path to caller-supplied verification logic.
    ///
    /// The consumer is invoked exactly once, synchronously; no further
    /// assertion is made here.
    pub fn path_satisfies(self, requirements: impl FnOnce(&str)) -> Self {
        if let Some(task) = self.subject() {
            requirements(&task.path);
        }
        self
    }

    // =========================================================================
    // Outcome predicates
    // =========================================================================

    /// Assert the task outcome equals `outcome`.
    pub fn has_outcome(self, outcome: TaskOutcome) -> Self {
        if let Some(task) = self.subject() {
            if task.outcome != outcome {
                self.sink.report(format!(
                    "expected task at path '{}' to have outcome {} but was {}",
                    task.path, outcome, task.outcome
                ));
            }
        }
        self
    }

    /// Assert the outcome is [`TaskOutcome::Success`].
    pub fn is_success(self) -> Self {
        self.has_outcome(TaskOutcome::Success)
    }

    /// Assert the outcome is [`TaskOutcome::Failed`].
    pub fn is_failed(self) -> Self {
        self.has_outcome(TaskOutcome::Failed)
    }

    /// Assert the outcome is [`TaskOutcome::UpToDate`].
    pub fn is_up_to_date(self) -> Self {
        self.has_outcome(TaskOutcome::UpToDate)
    }

    /// Assert the outcome is [`TaskOutcome::Skipped`].
    pub fn is_skipped(self) -> Self {
        self.has_outcome(TaskOutcome::Skipped)
    }

    /// Assert the outcome is [`TaskOutcome::FromCache`].
    pub fn is_from_cache(self) -> Self {
        self.has_outcome(TaskOutcome::FromCache)
    }

    /// Assert the outcome is [`TaskOutcome::NoSource`].
    pub fn is_no_source(self) -> Self {
        self.has_outcome(TaskOutcome::NoSource)
    }
}
