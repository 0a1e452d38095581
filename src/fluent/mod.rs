//! Fluent assertion API over build-tool subjects.
//!
//! Entry points wrap a subject (or `None`) in a chainable assertion type.
//! Predicates evaluate immediately and panic on failure; the
//! [`SoftAssertions`] scope collects failures and reports them together
//! instead.
//!
//! # Example
//!
//! ```rust
//! use buildcheck::{expect_build, BuildResult, TaskOutcome};
//!
//! let result = BuildResult::builder()
//!     .output("BUILD SUCCESSFUL in 1s")
//!     .task(":compile", TaskOutcome::Success)
//!     .task(":test", TaskOutcome::FromCache)
//!     .build();
//!
//! expect_build(&result)
//!     .output_contains("BUILD SUCCESSFUL")
//!     .has_task_success_at_path(":compile")
//!     .task(":test")
//!     .is_from_cache();
//! ```

mod build;
mod configuration;
mod failure;
mod matchers;
mod project;
mod soft;
mod task;

pub use build::{expect_build, BuildAssert};
pub use configuration::{expect_configuration, ConfigurationAssert};
pub use matchers::{props_match, value_matches};
pub use project::{expect_project, ProjectAssert};
pub use soft::{SoftAssertions, SoftFailures};
pub use task::{expect_task, TaskAssert};
