//! Fluent assertions on a project snapshot.
//!
//! - `expect_project()` - Entry point for creating a project assertion
//! - `ProjectAssert` - Predicates over identity, directories, and properties

use super::failure::FailureSink;
use super::matchers::value_matches;
use crate::model::Project;
use std::path::Path;

/// Create an assertion wrapper around a project.
///
/// # Example
///
/// ```rust
/// use buildcheck::{expect_project, Project};
///
/// let project = Project::builder("widget")
///     .group("org.example")
///     .version("2.1.0")
///     .build();
///
/// expect_project(&project)
///     .has_name("widget")
///     .has_group("org.example")
///     .has_version("2.1.0");
/// ```
pub fn expect_project<'a>(project: impl Into<Option<&'a Project>>) -> ProjectAssert<'a> {
    ProjectAssert {
        subject: project.into(),
        sink: FailureSink::default(),
    }
}

/// Chainable assertions on one [`Project`].
#[derive(Debug, Clone)]
pub struct ProjectAssert<'a> {
    subject: Option<&'a Project>,
    sink: FailureSink,
}

impl<'a> ProjectAssert<'a> {
    pub(crate) fn with_sink(subject: Option<&'a Project>, sink: FailureSink) -> Self {
        Self { subject, sink }
    }

    /// Assert the subject is absent.
    pub fn is_null(self) -> Self {
        if let Some(project) = self.subject {
            self.sink.report(format!(
                "expected project to be null but was project '{}'",
                project.name
            ));
        }
        self
    }

    /// Assert the subject is present.
    pub fn is_not_null(self) -> Self {
        if self.subject.is_none() {
            self.sink
                .report("expected project to be non-null but was null".to_string());
        }
        self
    }

    fn subject(&self) -> Option<&'a Project> {
        if self.subject.is_none() {
            self.sink
                .report("expected project to be non-null but was null".to_string());
        }
        self.subject
    }

    /// Assert the project name equals `name`.
    pub fn has_name(self, name: &str) -> Self {
        if let Some(project) = self.subject() {
            if project.name != name {
                self.sink.report(format!(
                    "expected project name to equal '{}' but was '{}'",
                    name, project.name
                ));
            }
        }
        self
    }

    /// Assert the project path equals `path`.
    pub fn has_path(self, path: &str) -> Self {
        if let Some(project) = self.subject() {
            if project.path != path {
                self.sink.report(format!(
                    "expected project path to equal '{}' but was '{}'",
                    path, project.path
                ));
            }
        }
        self
    }

    /// Assert the description equals `description` (`None` for unset).
    pub fn has_description<'d>(self, description: impl Into<Option<&'d str>>) -> Self {
        if let Some(project) = self.subject() {
            let expected = description.into();
            if project.description.as_deref() != expected {
                self.sink.report(format!(
                    "expected project '{}' to have description {:?} but was {:?}",
                    project.name, expected, project.description
                ));
            }
        }
        self
    }

    /// Assert the group coordinate equals `group`.
    pub fn has_group(self, group: &str) -> Self {
        if let Some(project) = self.subject() {
            if project.group != group {
                self.sink.report(format!(
                    "expected project '{}' to have group '{}' but was '{}'",
                    project.name, group, project.group
                ));
            }
        }
        self
    }

    /// Assert the version string equals `version`.
    pub fn has_version(self, version: &str) -> Self {
        if let Some(project) = self.subject() {
            if project.version != version {
                self.sink.report(format!(
                    "expected project '{}' to have version '{}' but was '{}'",
                    project.name, version, project.version
                ));
            }
        }
        self
    }

    /// Assert the project directory equals `dir`.
    pub fn has_project_dir(self, dir: impl AsRef<Path>) -> Self {
        if let Some(project) = self.subject() {
            let dir = dir.as_ref();
            if project.project_dir != dir {
                self.sink.report(format!(
                    "expected project '{}' to have project directory '{}' but was '{}'",
                    project.name,
                    dir.display(),
                    project.project_dir.display()
                ));
            }
        }
        self
    }

    /// Assert the build output directory equals `dir`.
    pub fn has_build_dir(self, dir: impl AsRef<Path>) -> Self {
        if let Some(project) = self.subject() {
            let dir = dir.as_ref();
            if project.build_dir != dir {
                self.sink.report(format!(
                    "expected project '{}' to have build directory '{}' but was '{}'",
                    project.name,
                    dir.display(),
                    project.build_dir.display()
                ));
            }
        }
        self
    }

    /// Assert the default task list contains `task`.
    pub fn has_default_task(self, task: &str) -> Self {
        if let Some(project) = self.subject() {
            if !project.default_tasks.iter().any(|t| t == task) {
                self.sink.report(format!(
                    "expected project '{}' default tasks to contain '{}' but were {:?}",
                    project.name, task, project.default_tasks
                ));
            }
        }
        self
    }

    // =========================================================================
    // Property predicates
    // =========================================================================

    /// Assert a property named `name` exists.
    pub fn has_property(self, name: &str) -> Self {
        if let Some(project) = self.subject() {
            if !project.has_property(name) {
                self.sink.report(format!(
                    "expected project '{}' to have property '{}' but it does not exist",
                    project.name, name
                ));
            }
        }
        self
    }

    /// Assert the property named `name` matches `pattern`.
    ///
    /// Patterns are tried as glob, then regex, then literal comparison, the
    /// same order as [`value_matches`].
    pub fn property_matches(self, name: &str, pattern: &str) -> Self {
        if let Some(project) = self.subject() {
            match project.property(name) {
                Some(value) => {
                    let actual = match value {
                        serde_json::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    };
                    if !value_matches(pattern, &actual) {
                        self.sink.report(format!(
                            "expected project '{}' property '{}' to match '{}' but was '{}'",
                            project.name, name, pattern, actual
                        ));
                    }
                }
                None => self.sink.report(format!(
                    "expected project '{}' to have property '{}' but it does not exist",
                    project.name, name
                )),
            }
        }
        self
    }

    /// Hand the raw property map to caller-supplied verification logic.
    pub fn properties_satisfy(
        self,
        requirements: impl FnOnce(&serde_json::Map<String, serde_json::Value>),
    ) -> Self {
        if let Some(project) = self.subject() {
            requirements(&project.properties);
        }
        self
    }
}
