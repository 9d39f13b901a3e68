//! JIRA API types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JiraIssue {
    pub id: String,
    pub key: String,
    #[serde(rename = "self", default)]
    pub self_url: String,
    pub fields: JiraFields,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JiraFields {
    pub summary: String,
    #[serde(default)]
    pub description: Option<String>,
    pub issuetype: IssueType,
    pub status: JiraStatus,
    pub project: ProjectRef,
    /// Every other field the server returns
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueType {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JiraStatus {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRef {
    pub key: String,
}

/// Response of `POST /rest/api/2/issue`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedIssue {
    pub id: String,
    pub key: String,
    #[serde(rename = "self", default)]
    pub self_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateIssuePayload {
    pub fields: CreateIssueFields,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateIssueFields {
    pub project: ProjectRef,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub issuetype: IssueType,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub issues: Vec<JiraIssue>,
    pub total: u64,
}

impl IssueType {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl ProjectRef {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_issue_deserializes_with_extra_fields() {
        let body = json!({
            "id": "10001",
            "key": "DEV-42",
            "self": "https://example.atlassian.net/rest/api/2/issue/10001",
            "fields": {
                "summary": "[Auto] Test Task 1700000000000",
                "description": null,
                "issuetype": { "name": "Task", "subtask": false },
                "status": { "name": "To Do" },
                "project": { "key": "DEV", "name": "Development" },
                "priority": { "name": "Medium" }
            }
        });

        let issue: JiraIssue = serde_json::from_value(body).unwrap();
        assert_eq!(issue.key, "DEV-42");
        assert_eq!(issue.fields.issuetype.name, "Task");
        assert_eq!(issue.fields.status.name, "To Do");
        assert_eq!(issue.fields.project.key, "DEV");
        assert!(issue.fields.description.is_none());
        assert_eq!(issue.fields.extra["priority"]["name"], "Medium");
    }

    #[test]
    fn test_payload_omits_missing_description() {
        let payload = CreateIssuePayload {
            fields: CreateIssueFields {
                project: ProjectRef::new("DEV"),
                summary: "No description".to_string(),
                description: None,
                issuetype: IssueType::new("Task"),
                extra: Map::new(),
            },
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert!(value["fields"].get("description").is_none());
        assert_eq!(value["fields"]["issuetype"]["name"], "Task");
    }
}
