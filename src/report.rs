//! Loading build reports from JSON fixtures.
//!
//! A report is a single JSON document carrying the build output, the executed
//! tasks with their wire-format outcomes, and an optional execution
//! timestamp:
//!
//! ```json
//! {
//!   "executed_at": "2024-05-01T12:30:00Z",
//!   "output": "BUILD SUCCESSFUL in 2s",
//!   "tasks": [
//!     { "path": ":compile", "outcome": "SUCCESS" },
//!     { "path": ":test", "outcome": "UP_TO_DATE" }
//!   ]
//! }
//! ```

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::model::BuildResult;

/// A build result plus fixture metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildReport {
    /// When the build ran, if the report recorded it.
    #[serde(default)]
    pub executed_at: Option<DateTime<Utc>>,
    /// The build result the report describes.
    #[serde(flatten)]
    pub result: BuildResult,
}

/// Parse a build report from a JSON file.
///
/// # Example
///
/// ```rust,ignore
/// use buildcheck::{expect_build, parse_report_file};
///
/// let report = parse_report_file("fixtures/build-report.json".as_ref())?;
/// expect_build(&report.result).has_task_success_at_path(":compile");
/// ```
pub fn parse_report_file(path: &Path) -> Result<BuildReport> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read build report {}", path.display()))?;
    parse_report_str(&content)
}

/// Parse a build report from a JSON string.
pub fn parse_report_str(content: &str) -> Result<BuildReport> {
    serde_json::from_str(content).context("failed to parse build report JSON")
}
