//! Fluent assertions on a whole build result.
//!
//! - `expect_build()` - Entry point for creating a build result assertion
//! - `BuildAssert` - Predicates over console output and executed tasks

use super::failure::FailureSink;
use super::matchers::whole_string_regex;
use super::task::TaskAssert;
use crate::model::{BuildResult, BuildTask, TaskOutcome};

/// Create an assertion wrapper around a build result.
///
/// # Example
///
/// ```rust
/// use buildcheck::{expect_build, BuildResult, TaskOutcome};
///
/// let result = BuildResult::builder()
///     .output("BUILD SUCCESSFUL in 2s")
///     .task(":compile", TaskOutcome::Success)
///     .build();
///
/// expect_build(&result)
///     .output_contains("BUILD SUCCESSFUL")
///     .has_task_success_at_path(":compile");
/// ```
pub fn expect_build<'a>(result: impl Into<Option<&'a BuildResult>>) -> BuildAssert<'a> {
    BuildAssert {
        subject: result.into(),
        sink: FailureSink::default(),
    }
}

/// Chainable assertions on one [`BuildResult`].
#[derive(Debug, Clone)]
pub struct BuildAssert<'a> {
    subject: Option<&'a BuildResult>,
    sink: FailureSink,
}

impl<'a> BuildAssert<'a> {
    pub(crate) fn with_sink(subject: Option<&'a BuildResult>, sink: FailureSink) -> Self {
        Self { subject, sink }
    }

    /// Assert the subject is absent.
    pub fn is_null(self) -> Self {
        if let Some(result) = self.subject {
            self.sink.report(format!(
                "expected build result to be null but was result with {} task(s)",
                result.tasks.len()
            ));
        }
        self
    }

    /// Assert the subject is present.
    pub fn is_not_null(self) -> Self {
        if self.subject.is_none() {
            self.sink
                .report("expected build result to be non-null but was null".to_string());
        }
        self
    }

    fn subject(&self) -> Option<&'a BuildResult> {
        if self.subject.is_none() {
            self.sink
                .report("expected build result to be non-null but was null".to_string());
        }
        self.subject
    }

    // =========================================================================
    // Output predicates
    // =========================================================================

    /// Assert the build output contains `sequence`.
    pub fn output_contains(self, sequence: &str) -> Self {
        if let Some(result) = self.subject() {
            if !result.output.contains(sequence) {
                self.sink.report(format!(
                    "expected build output to contain '{}' but was '{}'",
                    sequence, result.output
                ));
            }
        }
        self
    }

    /// Assert the build output does not contain `sequence`.
    pub fn output_does_not_contain(self, sequence: &str) -> Self {
        if let Some(result) = self.subject() {
            if result.output.contains(sequence) {
                self.sink.report(format!(
                    "expected build output to not contain '{}' but was '{}'",
                    sequence, result.output
                ));
            }
        }
        self
    }

    /// Assert the regex `pattern` matches the entire build output.
    ///
    /// Use `output_contains` for substring checks.
    pub fn output_matches(self, pattern: &str) -> Self {
        if let Some(result) = self.subject() {
            match whole_string_regex(pattern) {
                Ok(re) => {
                    if !re.is_match(&result.output) {
                        self.sink.report(format!(
                            "expected build output to match '{}' but was '{}'",
                            pattern, result.output
                        ));
                    }
                }
                Err(e) => self.sink.report(format!("invalid pattern '{pattern}': {e}")),
            }
        }
        self
    }

    /// Assert the regex `pattern` does not match the entire build output.
    pub fn output_does_not_match(self, pattern: &str) -> Self {
        if let Some(result) = self.subject() {
            match whole_string_regex(pattern) {
                Ok(re) => {
                    if re.is_match(&result.output) {
                        self.sink.report(format!(
                            "expected build output to not match '{}' but was '{}'",
                            pattern, result.output
                        ));
                    }
                }
                Err(e) => self.sink.report(format!("invalid pattern '{pattern}': {e}")),
            }
        }
        self
    }

    /// Hand the raw output to caller-supplied verification logic.
    pub fn output_satisfies(self, requirements: impl FnOnce(&str)) -> Self {
        if let Some(result) = self.subject() {
            requirements(&result.output);
        }
        self
    }

    // =========================================================================
    // Task lookup
    // =========================================================================

    /// Assert a task exists at `path`.
    pub fn has_task_at_path(self, path: &str) -> Self {
        if let Some(result) = self.subject() {
            if result.task(path).is_none() {
                self.sink.report(format!(
                    "expected build to have task at path '{path}' but did not"
                ));
            }
        }
        self
    }

    /// Assert no task exists at `path`.
    pub fn does_not_have_task_at_path(self, path: &str) -> Self {
        if let Some(result) = self.subject() {
            if result.task(path).is_some() {
                self.sink.report(format!(
                    "expected build to not have task at path '{path}' but did"
                ));
            }
        }
        self
    }

    /// Narrow to the task at `path` for further assertions.
    ///
    /// An absent task behaves like a null subject on the returned wrapper:
    /// only `is_null()` passes on it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use buildcheck::{expect_build, BuildResult, TaskOutcome};
    ///
    /// let result = BuildResult::builder()
    ///     .task(":test", TaskOutcome::UpToDate)
    ///     .build();
    ///
    /// expect_build(&result).task(":test").is_up_to_date();
    /// ```
    pub fn task(&self, path: &str) -> TaskAssert<'a> {
        let found = self.subject().and_then(|result| result.task(path));
        TaskAssert::with_sink(found, self.sink.clone())
    }

    /// Assert a task exists at `path` and hand it to caller-supplied logic.
    pub fn has_task_at_path_satisfying(
        self,
        path: &str,
        requirements: impl FnOnce(&BuildTask),
    ) -> Self {
        if let Some(result) = self.subject() {
            match result.task(path) {
                Some(task) => requirements(task),
                None => self.sink.report(format!(
                    "expected build to have task at path '{path}' to check requirements against but did not"
                )),
            }
        }
        self
    }

    // =========================================================================
    // Task outcome conveniences
    // =========================================================================

    /// Assert a task exists at `path` with the given outcome.
    pub fn has_task_with_outcome_at_path(self, path: &str, outcome: TaskOutcome) -> Self {
        if let Some(result) = self.subject() {
            match result.task(path) {
                Some(task) => {
                    if task.outcome != outcome {
                        self.sink.report(format!(
                            "expected task at path '{}' to have outcome {} but was {}",
                            path, outcome, task.outcome
                        ));
                    }
                }
                None => self.sink.report(format!(
                    "expected build to have task at path '{path}' but did not"
                )),
            }
        }
        self
    }

    /// Assert a task at `path` finished with [`TaskOutcome::Success`].
    pub fn has_task_success_at_path(self, path: &str) -> Self {
        self.has_task_with_outcome_at_path(path, TaskOutcome::Success)
    }

    /// Assert a task at `path` finished with [`TaskOutcome::Failed`].
    pub fn has_task_failed_at_path(self, path: &str) -> Self {
        self.has_task_with_outcome_at_path(path, TaskOutcome::Failed)
    }

    /// Assert a task at `path` finished with [`TaskOutcome::UpToDate`].
    pub fn has_task_up_to_date_at_path(self, path: &str) -> Self {
        self.has_task_with_outcome_at_path(path, TaskOutcome::UpToDate)
    }

    /// Assert a task at `path` finished with [`TaskOutcome::Skipped`].
    pub fn has_task_skipped_at_path(self, path: &str) -> Self {
        self.has_task_with_outcome_at_path(path, TaskOutcome::Skipped)
    }

    /// Assert a task at `path` finished with [`TaskOutcome::FromCache`].
    pub fn has_task_from_cache_at_path(self, path: &str) -> Self {
        self.has_task_with_outcome_at_path(path, TaskOutcome::FromCache)
    }

    /// Assert a task at `path` finished with [`TaskOutcome::NoSource`].
    pub fn has_task_no_source_at_path(self, path: &str) -> Self {
        self.has_task_with_outcome_at_path(path, TaskOutcome::NoSource)
    }

    // =========================================================================
    // Consumer delegation over task lists
    // =========================================================================

    /// Hand all executed tasks to caller-supplied verification logic.
    pub fn tasks_satisfy(self, requirements: impl FnOnce(&[BuildTask])) -> Self {
        if let Some(result) = self.subject() {
            requirements(&result.tasks);
        }
        self
    }

    /// Hand the tasks with the given outcome to caller-supplied logic.
    pub fn tasks_with_outcome_satisfy(
        self,
        outcome: TaskOutcome,
        requirements: impl FnOnce(&[&BuildTask]),
    ) -> Self {
        if let Some(result) = self.subject() {
            requirements(&result.tasks_with_outcome(outcome));
        }
        self
    }

    /// Hand the task paths with the given outcome to caller-supplied logic.
    pub fn task_paths_with_outcome_satisfy(
        self,
        outcome: TaskOutcome,
        requirements: impl FnOnce(&[&str]),
    ) -> Self {
        if let Some(result) = self.subject() {
            requirements(&result.task_paths(outcome));
        }
        self
    }
}
