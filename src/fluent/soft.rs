//! Soft assertions: collect failures across a scope and report them once.
//!
//! Wrappers handed out by [`SoftAssertions`] record mismatches into a shared
//! collector instead of panicking. Finalize the scope with
//! [`SoftAssertions::assert_all`], which raises a single aggregate failure,
//! or [`SoftAssertions::into_result`] for a non-panicking check.
//!
//! # Example
//!
//! ```rust
//! use buildcheck::{SoftAssertions, BuildTask, TaskOutcome};
//!
//! let task = BuildTask::new(":compile", TaskOutcome::Success);
//!
//! let soft = SoftAssertions::new();
//! soft.expect_task(&task).has_path(":compile").is_success();
//! soft.assert_all();
//! ```

use super::build::BuildAssert;
use super::configuration::ConfigurationAssert;
use super::failure::{Failure, FailureSink};
use super::project::ProjectAssert;
use super::task::TaskAssert;
use crate::model::{BuildResult, BuildTask, Configuration, Project};
use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;

/// The failures collected by a soft-assertion scope.
#[derive(Debug, Error)]
#[error("{} assertion failure(s):\n  - {}", .failures.len(), .failures.join("\n  - "))]
pub struct SoftFailures {
    /// The recorded failure messages, in assertion order.
    pub failures: Vec<String>,
}

/// Accumulates assertion failures and reports them together.
///
/// Each `expect_*` method hands out the same wrapper type as the immediate
/// entry points, bound to this collector.
#[derive(Debug, Default)]
pub struct SoftAssertions {
    failures: Rc<RefCell<Vec<Failure>>>,
}

impl SoftAssertions {
    /// Create an empty soft-assertion scope.
    pub fn new() -> Self {
        Self::default()
    }

    fn sink(&self) -> FailureSink {
        FailureSink::Collect(Rc::clone(&self.failures))
    }

    /// Create a collecting assertion wrapper around a build task.
    pub fn expect_task<'a>(&self, task: impl Into<Option<&'a BuildTask>>) -> TaskAssert<'a> {
        TaskAssert::with_sink(task.into(), self.sink())
    }

    /// Create a collecting assertion wrapper around a build result.
    pub fn expect_build<'a>(&self, result: impl Into<Option<&'a BuildResult>>) -> BuildAssert<'a> {
        BuildAssert::with_sink(result.into(), self.sink())
    }

    /// Create a collecting assertion wrapper around a configuration.
    pub fn expect_configuration<'a>(
        &self,
        configuration: impl Into<Option<&'a Configuration>>,
    ) -> ConfigurationAssert<'a> {
        ConfigurationAssert::with_sink(configuration.into(), self.sink())
    }

    /// Create a collecting assertion wrapper around a project.
    pub fn expect_project<'a>(&self, project: impl Into<Option<&'a Project>>) -> ProjectAssert<'a> {
        ProjectAssert::with_sink(project.into(), self.sink())
    }

    /// Number of failures recorded so far.
    pub fn failure_count(&self) -> usize {
        self.failures.borrow().len()
    }

    /// Whether no failures have been recorded.
    pub fn is_empty(&self) -> bool {
        self.failures.borrow().is_empty()
    }

    /// Finalize the scope.
    ///
    /// No-op when every assertion passed.
    ///
    /// # Panics
    ///
    /// Panics with one aggregate message listing every recorded failure.
    pub fn assert_all(self) {
        if let Err(failures) = self.into_result() {
            panic!("assertion failed: {failures}");
        }
    }

    /// Finalize the scope without panicking.
    ///
    /// Returns `Ok(())` when every assertion passed, otherwise the collected
    /// failures.
    pub fn into_result(self) -> Result<(), SoftFailures> {
        let failures: Vec<String> = self
            .failures
            .borrow()
            .iter()
            .map(|f| f.message.clone())
            .collect();

        if failures.is_empty() {
            Ok(())
        } else {
            Err(SoftFailures { failures })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TaskOutcome;

    #[test]
    fn test_empty_scope_passes() {
        SoftAssertions::new().assert_all();
    }

    #[test]
    fn test_passing_assertions_pass() {
        let task = BuildTask::new(":compile", TaskOutcome::Success);

        let soft = SoftAssertions::new();
        soft.expect_task(&task).is_not_null().is_success();
        assert!(soft.is_empty());
        soft.assert_all();
    }

    #[test]
    fn test_one_failing_check_yields_one_failure() {
        let task = BuildTask::new(":compile", TaskOutcome::Success);

        let soft = SoftAssertions::new();
        soft.expect_task(&task).is_not_null();
        soft.expect_task(&task).is_null();

        let failures = soft.into_result().unwrap_err();
        assert_eq!(failures.failures.len(), 1);
        assert!(failures.failures[0].contains(":compile"));
    }

    #[test]
    #[should_panic(expected = "assertion failed")]
    fn test_assert_all_panics_on_failure() {
        let task = BuildTask::new(":compile", TaskOutcome::Success);

        let soft = SoftAssertions::new();
        soft.expect_task(&task).is_failed();
        soft.assert_all();
    }

    #[test]
    fn test_collects_across_subjects() {
        let task = BuildTask::new(":compile", TaskOutcome::Failed);
        let result = BuildResult::builder().output("BUILD FAILED").build();

        let soft = SoftAssertions::new();
        soft.expect_task(&task).is_success();
        soft.expect_build(&result).output_contains("BUILD SUCCESSFUL");

        let failures = soft.into_result().unwrap_err();
        assert_eq!(failures.failures.len(), 2);
    }

    #[test]
    fn test_soft_failures_display_lists_messages() {
        let soft = SoftAssertions::new();
        soft.expect_task(None).is_not_null();

        let failures = soft.into_result().unwrap_err();
        let rendered = failures.to_string();
        assert!(rendered.contains("1 assertion failure(s)"));
        assert!(rendered.contains("non-null"));
    }
}
