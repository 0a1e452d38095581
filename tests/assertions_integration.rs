//! End-to-end scenarios exercising the public API the way a consuming test
//! suite would: report fixtures on disk, nested assertions, and soft scopes.

use buildcheck::{
    expect_build, expect_configuration, expect_project, expect_task, props, props_match,
    BuildResult, BuildTask, Configuration, ConfigurationState, Dependency, ExcludeRule, Project,
    PublishArtifact, SoftAssertions, TaskOutcome,
};
#[cfg(feature = "report")]
use buildcheck::parse_report_file;
#[cfg(feature = "report")]
use std::io::Write;

#[cfg(feature = "report")]
const REPORT_JSON: &str = r#"{
    "executed_at": "2024-05-01T12:30:00Z",
    "output": "BUILD SUCCESSFUL in 12s\n7 actionable tasks: 5 executed, 2 from cache",
    "tasks": [
        { "path": ":compileJava", "outcome": "SUCCESS" },
        { "path": ":processResources", "outcome": "NO_SOURCE" },
        { "path": ":jar", "outcome": "FROM_CACHE" },
        { "path": ":test", "outcome": "SUCCESS" },
        { "path": ":integrationTest", "outcome": "SKIPPED" }
    ]
}"#;

#[cfg(feature = "report")]
#[test]
fn report_fixture_round_trip() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(REPORT_JSON.as_bytes()).unwrap();

    let report = parse_report_file(file.path()).unwrap();

    expect_build(&report.result)
        .output_contains("BUILD SUCCESSFUL")
        .output_matches(r"(?s)BUILD SUCCESSFUL.*\d+ actionable tasks.*")
        .has_task_success_at_path(":compileJava")
        .has_task_no_source_at_path(":processResources")
        .has_task_from_cache_at_path(":jar")
        .has_task_skipped_at_path(":integrationTest")
        .does_not_have_task_at_path(":publish");

    assert!(report.executed_at.is_some());
}

#[cfg(feature = "report")]
#[test]
fn report_parse_error_carries_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"not json").unwrap();

    let err = parse_report_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("build report"));
}

#[test]
fn nested_task_assertions_share_failure_handling() {
    let result = BuildResult::builder()
        .output("BUILD FAILED in 3s")
        .task(":compileJava", TaskOutcome::Success)
        .task(":test", TaskOutcome::Failed)
        .build();

    expect_build(&result)
        .output_contains("BUILD FAILED")
        .task(":test")
        .is_failed()
        .path_ends_with("test");

    // The same lookup through a soft scope records instead of panicking.
    let soft = SoftAssertions::new();
    soft.expect_build(&result).task(":test").is_success();
    soft.expect_build(&result).task(":missing").is_not_null();

    let failures = soft.into_result().unwrap_err();
    assert_eq!(failures.failures.len(), 2);
    assert!(failures.failures[0].contains(":test"));
}

#[test]
fn configuration_wiring_end_to_end() {
    let api = Configuration::builder("api")
        .description("API dependencies")
        .build();
    let implementation = Configuration::builder("implementation")
        .extends_from("api")
        .build();
    let runtime_classpath = Configuration::builder("runtimeClasspath")
        .state(ConfigurationState::Resolved)
        .visible(false)
        .can_be_consumed(false)
        .extends_from("implementation")
        .in_hierarchy("api")
        .dependency(Dependency::new("org.example", "widget", "1.2.3"))
        .dependency(Dependency::new("org.example", "gadget", "2.0.0"))
        .artifact(PublishArtifact {
            name: "widget".to_string(),
            extension: "jar".to_string(),
            classifier: None,
        })
        .exclude_rule(ExcludeRule {
            group: Some("commons-logging".to_string()),
            module: None,
        })
        .build();

    expect_configuration(&api).has_description("API dependencies");
    expect_configuration(&implementation)
        .extends_from_contains("api")
        .hierarchy_contains("api");

    expect_configuration(&runtime_classpath)
        .has_resolved_state()
        .is_not_visible()
        .cannot_be_consumed()
        .hierarchy_contains("implementation")
        .hierarchy_contains("api")
        .dependencies_satisfy(|dependencies| {
            assert_eq!(dependencies.len(), 2);
            assert!(dependencies.iter().any(|d| d.name == "widget"));
        })
        .artifacts_satisfy(|artifacts| {
            assert_eq!(artifacts.len(), 1);
            assert_eq!(artifacts[0].extension, "jar");
        })
        .exclude_rules_satisfy(|rules| {
            assert_eq!(rules[0].group.as_deref(), Some("commons-logging"));
        });
}

#[test]
fn project_property_scenarios() {
    let project = Project::builder("widget")
        .group("org.example")
        .version("1.4.2")
        .project_dir("/workspace/widget")
        .default_task("assemble")
        .property("channel", serde_json::json!("stable"))
        .property("build_number", serde_json::json!(731))
        .build();

    expect_project(&project)
        .has_name("widget")
        .has_path(":widget")
        .has_group("org.example")
        .has_default_task("assemble")
        .property_matches("channel", "sta*")
        .property_matches("build_number", r"^\d+$");

    assert!(props_match(
        &props! {"channel" => "stable", "build_number" => "7*"},
        &project.properties
    ));
}

#[test]
fn soft_scope_mixing_all_subject_kinds() {
    let task = BuildTask::new(":compile", TaskOutcome::UpToDate);
    let result = BuildResult::builder().output("ok").build();
    let configuration = Configuration::builder("api").build();
    let project = Project::builder("widget").build();

    let soft = SoftAssertions::new();
    soft.expect_task(&task).is_up_to_date();
    soft.expect_build(&result).output_contains("ok");
    soft.expect_configuration(&configuration).has_name("api");
    soft.expect_project(&project).has_name("widget");
    soft.assert_all();
}

#[test]
#[should_panic(expected = "assertion failed")]
fn immediate_mode_panics_at_first_mismatch() {
    let task = BuildTask::new(":compile", TaskOutcome::Success);
    expect_task(&task).is_up_to_date();
}

#[test]
fn null_subject_policies() {
    expect_task(None).is_null();
    expect_build(None).is_null();
    expect_configuration(None).is_null();
    expect_project(None).is_null();

    let soft = SoftAssertions::new();
    soft.expect_task(None).is_not_null();
    soft.expect_configuration(None).has_name("api");
    assert_eq!(soft.failure_count(), 2);
}
