//! Test data factories for issue payloads

use crate::types::{CreateIssueFields, CreateIssuePayload, IssueType, ProjectRef};
use chrono::Utc;
use serde_json::{Map, Value};

pub const TASK_SUMMARY_PREFIX: &str = "[Auto] Test Task";
pub const BUG_SUMMARY_PREFIX: &str = "[Auto] Test Bug";

/// Top-level field replacements applied after defaults
///
/// Nested objects are replaced whole, never merged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IssueOverrides {
    pub project: Option<ProjectRef>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub issuetype: Option<IssueType>,
    pub extra: Map<String, Value>,
}

impl IssueOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn issuetype(mut self, name: impl Into<String>) -> Self {
        self.issuetype = Some(IssueType::new(name));
        self
    }

    pub fn project(mut self, key: impl Into<String>) -> Self {
        self.project = Some(ProjectRef::new(key));
        self
    }

    /// Any other top-level field, e.g. `labels` or `priority`
    pub fn field(mut self, name: impl Into<String>, value: Value) -> Self {
        self.extra.insert(name.into(), value);
        self
    }

    fn apply(self, fields: &mut CreateIssueFields) {
        if let Some(project) = self.project {
            fields.project = project;
        }
        if let Some(summary) = self.summary {
            fields.summary = summary;
        }
        if let Some(description) = self.description {
            fields.description = Some(description);
        }
        if let Some(issuetype) = self.issuetype {
            fields.issuetype = issuetype;
        }
        fields.extra.extend(self.extra);
    }
}

pub struct IssueFactory;

impl IssueFactory {
    pub fn create_task(project_key: &str, overrides: Option<IssueOverrides>) -> CreateIssuePayload {
        Self::build(
            project_key,
            TASK_SUMMARY_PREFIX,
            "Automated test task created by the gamdom-qa suite",
            "Task",
            overrides,
        )
    }

    pub fn create_bug(project_key: &str, overrides: Option<IssueOverrides>) -> CreateIssuePayload {
        Self::build(
            project_key,
            BUG_SUMMARY_PREFIX,
            "Automated test bug created by the gamdom-qa suite",
            "Bug",
            overrides,
        )
    }

    fn build(
        project_key: &str,
        summary_prefix: &str,
        description: &str,
        issuetype: &str,
        overrides: Option<IssueOverrides>,
    ) -> CreateIssuePayload {
        let mut fields = CreateIssueFields {
            project: ProjectRef::new(project_key),
            summary: format!("{} {}", summary_prefix, timestamp()),
            description: Some(description.to_string()),
            issuetype: IssueType::new(issuetype),
            extra: Map::new(),
        };

        if let Some(overrides) = overrides {
            overrides.apply(&mut fields);
        }

        CreateIssuePayload { fields }
    }
}

/// Unix time in milliseconds
pub fn timestamp() -> i64 {
    Utc::now().timestamp_millis()
}
