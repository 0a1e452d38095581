//! Snapshot types for the build-tool objects assertions run against.
//!
//! Subjects are plain immutable values, typically test doubles built with the
//! builder types in this module or loaded from a JSON report. The assertion
//! wrappers in [`crate::fluent`] only ever read them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Outcome of executing a single build task.
///
/// Wire names match the build tool's own enumeration (`SUCCESS`,
/// `UP_TO_DATE`, ...). Exactly one outcome holds per executed task.
///
/// # Example
///
/// ```rust
/// use buildcheck::TaskOutcome;
///
/// assert_eq!(TaskOutcome::UpToDate.as_str(), "UP_TO_DATE");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskOutcome {
    /// The task executed and succeeded.
    Success,
    /// The task executed and failed.
    Failed,
    /// The task was not executed because its outputs were current.
    UpToDate,
    /// The task was skipped (disabled or filtered out).
    Skipped,
    /// The task outputs were restored from the build cache.
    FromCache,
    /// The task had no source to operate on.
    NoSource,
}

impl TaskOutcome {
    /// Get the canonical wire name for this outcome.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskOutcome::Success => "SUCCESS",
            TaskOutcome::Failed => "FAILED",
            TaskOutcome::UpToDate => "UP_TO_DATE",
            TaskOutcome::Skipped => "SKIPPED",
            TaskOutcome::FromCache => "FROM_CACHE",
            TaskOutcome::NoSource => "NO_SOURCE",
        }
    }

    /// Get all outcome variants.
    pub fn all() -> &'static [TaskOutcome] {
        &[
            TaskOutcome::Success,
            TaskOutcome::Failed,
            TaskOutcome::UpToDate,
            TaskOutcome::Skipped,
            TaskOutcome::FromCache,
            TaskOutcome::NoSource,
        ]
    }
}

impl std::fmt::Display for TaskOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolution state of a dependency configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigurationState {
    /// The configuration has not been resolved yet.
    Unresolved,
    /// The configuration resolved cleanly.
    Resolved,
    /// The configuration resolved, but some dependencies failed.
    ResolvedWithFailures,
}

impl ConfigurationState {
    /// Get the canonical wire name for this state.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigurationState::Unresolved => "UNRESOLVED",
            ConfigurationState::Resolved => "RESOLVED",
            ConfigurationState::ResolvedWithFailures => "RESOLVED_WITH_FAILURES",
        }
    }

    /// Get all state variants.
    pub fn all() -> &'static [ConfigurationState] {
        &[
            ConfigurationState::Unresolved,
            ConfigurationState::Resolved,
            ConfigurationState::ResolvedWithFailures,
        ]
    }
}

impl std::fmt::Display for ConfigurationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single executed task within a build result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildTask {
    /// Fully qualified task path, e.g. `:compile` or `:sub:test`.
    pub path: String,
    /// Outcome of the execution.
    pub outcome: TaskOutcome,
}

impl BuildTask {
    /// Create a task with the given path and outcome.
    pub fn new(path: impl Into<String>, outcome: TaskOutcome) -> Self {
        Self {
            path: path.into(),
            outcome,
        }
    }
}

/// The result of a build: console output plus the executed tasks, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildResult {
    /// Combined console output of the build.
    pub output: String,
    /// Executed tasks in execution order.
    pub tasks: Vec<BuildTask>,
}

impl BuildResult {
    /// Look up the task at the given path, if it was part of the build.
    pub fn task(&self, path: &str) -> Option<&BuildTask> {
        self.tasks.iter().find(|t| t.path == path)
    }

    /// All tasks that finished with the given outcome, in execution order.
    pub fn tasks_with_outcome(&self, outcome: TaskOutcome) -> Vec<&BuildTask> {
        self.tasks.iter().filter(|t| t.outcome == outcome).collect()
    }

    /// Paths of all tasks that finished with the given outcome.
    pub fn task_paths(&self, outcome: TaskOutcome) -> Vec<&str> {
        self.tasks
            .iter()
            .filter(|t| t.outcome == outcome)
            .map(|t| t.path.as_str())
            .collect()
    }

    /// Create a builder for assembling a build result test double.
    pub fn builder() -> BuildResultBuilder {
        BuildResultBuilder::default()
    }
}

/// Builder for [`BuildResult`] test doubles.
///
/// # Example
///
/// ```rust
/// use buildcheck::{BuildResult, TaskOutcome};
///
/// let result = BuildResult::builder()
///     .output("BUILD SUCCESSFUL")
///     .task(":compile", TaskOutcome::Success)
///     .task(":test", TaskOutcome::UpToDate)
///     .build();
///
/// assert_eq!(result.tasks.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BuildResultBuilder {
    output: String,
    tasks: Vec<BuildTask>,
}

impl BuildResultBuilder {
    /// Set the console output.
    pub fn output(mut self, output: impl Into<String>) -> Self {
        self.output = output.into();
        self
    }

    /// Append an executed task.
    pub fn task(mut self, path: impl Into<String>, outcome: TaskOutcome) -> Self {
        self.tasks.push(BuildTask::new(path, outcome));
        self
    }

    /// Finish building.
    pub fn build(self) -> BuildResult {
        BuildResult {
            output: self.output,
            tasks: self.tasks,
        }
    }
}

/// A declared dependency within a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    /// Group / organisation coordinate, when present.
    pub group: Option<String>,
    /// Module name.
    pub name: String,
    /// Requested version, when present.
    pub version: Option<String>,
}

impl Dependency {
    /// Create a fully coordinated dependency.
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: Some(group.into()),
            name: name.into(),
            version: Some(version.into()),
        }
    }
}

/// An artifact published by a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishArtifact {
    /// Artifact name.
    pub name: String,
    /// File extension, e.g. `jar`.
    pub extension: String,
    /// Optional classifier, e.g. `sources`.
    pub classifier: Option<String>,
}

/// A dependency exclusion rule attached to a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcludeRule {
    /// Excluded group, when restricted by group.
    pub group: Option<String>,
    /// Excluded module, when restricted by module.
    pub module: Option<String>,
}

/// A dependency configuration snapshot.
///
/// `extends_from` holds the directly extended configurations by name;
/// `hierarchy` holds the full transitive closure including this
/// configuration itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Configuration name, e.g. `implementation`.
    pub name: String,
    /// Human-readable description, when set.
    pub description: Option<String>,
    /// Resolution state.
    pub state: ConfigurationState,
    /// Whether the configuration is visible outside its project.
    pub visible: bool,
    /// Whether dependencies are resolved transitively.
    pub transitive: bool,
    /// Whether the configuration can be consumed by other projects.
    pub can_be_consumed: bool,
    /// Whether the configuration can be resolved.
    pub can_be_resolved: bool,
    /// Names of directly extended configurations.
    pub extends_from: BTreeSet<String>,
    /// Names of all configurations in the hierarchy.
    pub hierarchy: BTreeSet<String>,
    /// Dependencies declared directly on this configuration.
    pub dependencies: Vec<Dependency>,
    /// Declared dependencies plus those inherited through extends-from.
    pub all_dependencies: Vec<Dependency>,
    /// Artifacts published directly by this configuration.
    pub artifacts: Vec<PublishArtifact>,
    /// Published artifacts plus those inherited through extends-from.
    pub all_artifacts: Vec<PublishArtifact>,
    /// Exclusion rules.
    pub exclude_rules: Vec<ExcludeRule>,
}

impl Configuration {
    /// Create a builder for a configuration test double with the given name.
    ///
    /// Defaults: `UNRESOLVED`, visible, transitive, consumable, resolvable,
    /// empty collections; the hierarchy always contains the configuration
    /// itself.
    pub fn builder(name: impl Into<String>) -> ConfigurationBuilder {
        ConfigurationBuilder::new(name)
    }
}

/// Builder for [`Configuration`] test doubles.
///
/// # Example
///
/// ```rust
/// use buildcheck::{Configuration, ConfigurationState, Dependency};
///
/// let configuration = Configuration::builder("runtimeClasspath")
///     .state(ConfigurationState::Resolved)
///     .extends_from("implementation")
///     .dependency(Dependency::new("org.example", "widget", "1.2.3"))
///     .build();
///
/// assert!(configuration.hierarchy.contains("implementation"));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigurationBuilder {
    configuration: Configuration,
}

impl ConfigurationBuilder {
    fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let mut hierarchy = BTreeSet::new();
        hierarchy.insert(name.clone());
        Self {
            configuration: Configuration {
                name,
                description: None,
                state: ConfigurationState::Unresolved,
                visible: true,
                transitive: true,
                can_be_consumed: true,
                can_be_resolved: true,
                extends_from: BTreeSet::new(),
                hierarchy,
                dependencies: Vec::new(),
                all_dependencies: Vec::new(),
                artifacts: Vec::new(),
                all_artifacts: Vec::new(),
                exclude_rules: Vec::new(),
            },
        }
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.configuration.description = Some(description.into());
        self
    }

    /// Set the resolution state.
    pub fn state(mut self, state: ConfigurationState) -> Self {
        self.configuration.state = state;
        self
    }

    /// Set visibility.
    pub fn visible(mut self, visible: bool) -> Self {
        self.configuration.visible = visible;
        self
    }

    /// Set transitivity.
    pub fn transitive(mut self, transitive: bool) -> Self {
        self.configuration.transitive = transitive;
        self
    }

    /// Set whether the configuration can be consumed.
    pub fn can_be_consumed(mut self, can_be_consumed: bool) -> Self {
        self.configuration.can_be_consumed = can_be_consumed;
        self
    }

    /// Set whether the configuration can be resolved.
    pub fn can_be_resolved(mut self, can_be_resolved: bool) -> Self {
        self.configuration.can_be_resolved = can_be_resolved;
        self
    }

    /// Add a directly extended configuration. Also enters the hierarchy.
    pub fn extends_from(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.configuration.extends_from.insert(name.clone());
        self.configuration.hierarchy.insert(name);
        self
    }

    /// Add a configuration name to the hierarchy only (a transitive parent).
    pub fn in_hierarchy(mut self, name: impl Into<String>) -> Self {
        self.configuration.hierarchy.insert(name.into());
        self
    }

    /// Add a dependency declared directly on this configuration.
    ///
    /// Also enters `all_dependencies`.
    pub fn dependency(mut self, dependency: Dependency) -> Self {
        self.configuration.dependencies.push(dependency.clone());
        self.configuration.all_dependencies.push(dependency);
        self
    }

    /// Add a dependency inherited from an extended configuration.
    ///
    /// Enters `all_dependencies` only.
    pub fn inherited_dependency(mut self, dependency: Dependency) -> Self {
        self.configuration.all_dependencies.push(dependency);
        self
    }

    /// Add an artifact published directly by this configuration.
    ///
    /// Also enters `all_artifacts`.
    pub fn artifact(mut self, artifact: PublishArtifact) -> Self {
        self.configuration.artifacts.push(artifact.clone());
        self.configuration.all_artifacts.push(artifact);
        self
    }

    /// Add an artifact inherited from an extended configuration.
    ///
    /// Enters `all_artifacts` only.
    pub fn inherited_artifact(mut self, artifact: PublishArtifact) -> Self {
        self.configuration.all_artifacts.push(artifact);
        self
    }

    /// Add an exclusion rule.
    pub fn exclude_rule(mut self, rule: ExcludeRule) -> Self {
        self.configuration.exclude_rules.push(rule);
        self
    }

    /// Finish building.
    pub fn build(self) -> Configuration {
        self.configuration
    }
}

/// A project snapshot.
///
/// Ad-hoc project properties keep their dynamic typing as JSON values, the
/// same way the wrapped framework exposes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Project name.
    pub name: String,
    /// Project path, e.g. `:` for the root project.
    pub path: String,
    /// Description, when set.
    pub description: Option<String>,
    /// Group coordinate.
    pub group: String,
    /// Version string.
    pub version: String,
    /// Project directory.
    pub project_dir: PathBuf,
    /// Build output directory.
    pub build_dir: PathBuf,
    /// Default task names.
    pub default_tasks: Vec<String>,
    /// Ad-hoc project properties.
    pub properties: serde_json::Map<String, serde_json::Value>,
}

impl Project {
    /// Create a builder for a project test double with the given name.
    pub fn builder(name: impl Into<String>) -> ProjectBuilder {
        ProjectBuilder::new(name)
    }

    /// Whether a property with the given name exists.
    pub fn has_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Look up a property value by name.
    pub fn property(&self, name: &str) -> Option<&serde_json::Value> {
        self.properties.get(name)
    }
}

/// Builder for [`Project`] test doubles.
///
/// # Example
///
/// ```rust
/// use buildcheck::Project;
///
/// let project = Project::builder("widget")
///     .group("org.example")
///     .version("1.0.0")
///     .property("release", serde_json::json!(true))
///     .build();
///
/// assert!(project.has_property("release"));
/// ```
#[derive(Debug, Clone)]
pub struct ProjectBuilder {
    project: Project,
}

impl ProjectBuilder {
    fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            project: Project {
                path: format!(":{name}"),
                name,
                description: None,
                group: String::new(),
                version: "unspecified".to_string(),
                project_dir: PathBuf::new(),
                build_dir: PathBuf::new(),
                default_tasks: Vec::new(),
                properties: serde_json::Map::new(),
            },
        }
    }

    /// Set the project path.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.project.path = path.into();
        self
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.project.description = Some(description.into());
        self
    }

    /// Set the group coordinate.
    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.project.group = group.into();
        self
    }

    /// Set the version string.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.project.version = version.into();
        self
    }

    /// Set the project directory. The build directory defaults to
    /// `<project_dir>/build` unless set explicitly.
    pub fn project_dir(mut self, dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref().to_path_buf();
        if self.project.build_dir.as_os_str().is_empty() {
            self.project.build_dir = dir.join("build");
        }
        self.project.project_dir = dir;
        self
    }

    /// Set the build output directory.
    pub fn build_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.project.build_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Append a default task name.
    pub fn default_task(mut self, task: impl Into<String>) -> Self {
        self.project.default_tasks.push(task.into());
        self
    }

    /// Set an ad-hoc property.
    pub fn property(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.project.properties.insert(name.into(), value);
        self
    }

    /// Finish building.
    pub fn build(self) -> Project {
        self.project
    }
}
