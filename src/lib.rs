//! # buildcheck
//!
//! Fluent assertion helpers for build-tool test doubles.
//!
//! This library wraps snapshot values of build-tool domain objects (task
//! results, build results, dependency configurations, projects) in chainable
//! assertion types with descriptive failure messages. It is test-support
//! tooling for Rust's native `#[test]` framework.
//!
//! ## Quick Start
//!
//! ```rust
//! use buildcheck::{expect_build, BuildResult, TaskOutcome};
//!
//! let result = BuildResult::builder()
//!     .output("BUILD SUCCESSFUL in 4s")
//!     .task(":compile", TaskOutcome::Success)
//!     .task(":jar", TaskOutcome::FromCache)
//!     .build();
//!
//! expect_build(&result)
//!     .output_contains("BUILD SUCCESSFUL")
//!     .has_task_success_at_path(":compile")
//!     .task(":jar")
//!     .is_from_cache();
//! ```
//!
//! ## Soft Assertions
//!
//! ```rust
//! use buildcheck::{SoftAssertions, Configuration, ConfigurationState};
//!
//! let configuration = Configuration::builder("implementation")
//!     .state(ConfigurationState::Resolved)
//!     .build();
//!
//! let soft = SoftAssertions::new();
//! soft.expect_configuration(&configuration)
//!     .has_name("implementation")
//!     .has_resolved_state();
//! soft.assert_all();
//! ```
//!
//! ## Null Subjects
//!
//! Every entry point accepts `None` for an absent subject. `is_null()` is the
//! only predicate that passes on it; everything else fails with a descriptive
//! message instead of dereferencing nothing.
//!
//! ```rust
//! use buildcheck::expect_task;
//!
//! expect_task(None).is_null();
//! ```

pub mod fluent;
pub mod model;

#[cfg(feature = "report")]
pub mod report;

// Assertion entry points and wrappers
pub use fluent::{
    expect_build, expect_configuration, expect_project, expect_task, BuildAssert,
    ConfigurationAssert, ProjectAssert, SoftAssertions, SoftFailures, TaskAssert,
};

// Pattern matching helpers
pub use fluent::{props_match, value_matches};

// Subject snapshot types
pub use model::{
    BuildResult, BuildResultBuilder, BuildTask, Configuration, ConfigurationBuilder,
    ConfigurationState, Dependency, ExcludeRule, Project, ProjectBuilder, PublishArtifact,
    TaskOutcome,
};

// Report loading (feature-gated)
#[cfg(feature = "report")]
pub use report::{parse_report_file, parse_report_str, BuildReport};
