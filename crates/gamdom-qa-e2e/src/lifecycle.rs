//! Issue CRUD lifecycle context
//!
//! The create step produces a key every later step needs. Instead of sharing
//! it through mutable state between test cases, the steps are methods on one
//! context object that owns the key.

use anyhow::{ensure, Context, Result};
use gamdom_qa_jira::{
    factory::{timestamp, TASK_SUMMARY_PREFIX},
    CreatedIssue, IssueFactory, JiraClient, JiraIssue, SearchResult,
};
use regex::Regex;
use serde_json::{json, Map};

pub struct IssueLifecycle<'a> {
    client: &'a JiraClient,
    project_key: String,
    issue_key: Option<String>,
}

impl<'a> IssueLifecycle<'a> {
    pub fn new(client: &'a JiraClient, project_key: impl Into<String>) -> Self {
        Self {
            client,
            project_key: project_key.into(),
            issue_key: None,
        }
    }

    pub fn project_key(&self) -> &str {
        &self.project_key
    }

    /// Key produced by [`create`](Self::create)
    pub fn issue_key(&self) -> Result<&str> {
        self.issue_key
            .as_deref()
            .context("No issue in this lifecycle; run the create step first")
    }

    /// Create a task from the factory defaults and remember its key
    pub async fn create(&mut self) -> Result<CreatedIssue> {
        let payload = IssueFactory::create_task(&self.project_key, None);
        let created = self.client.create_issue(&payload).await?;
        self.issue_key = Some(created.key.clone());
        Ok(created)
    }

    pub async fn read(&self) -> Result<JiraIssue> {
        Ok(self.client.get_issue(self.issue_key()?).await?)
    }

    /// Set a fresh timestamped summary and return it
    pub async fn update_summary(&self) -> Result<String> {
        let summary = format!("[Auto] Updated Task {}", timestamp());
        let mut fields = Map::new();
        fields.insert("summary".to_string(), json!(summary));
        self.client.update_issue(self.issue_key()?, fields).await?;
        Ok(summary)
    }

    pub async fn search(&self) -> Result<SearchResult> {
        let jql = format!("key = {}", self.issue_key()?);
        Ok(self.client.search_issues(&jql).await?)
    }

    pub async fn delete(&mut self) -> Result<()> {
        let key = self.issue_key()?.to_string();
        self.client.delete_issue(&key).await?;
        self.issue_key = None;
        Ok(())
    }

    /// Read a key that should no longer exist; true when the server says 404
    pub async fn is_gone(&self, issue_key: &str) -> Result<bool> {
        match self.client.get_issue(issue_key).await {
            Ok(_) => Ok(false),
            Err(e) if e.is_not_found() => Ok(true),
            Err(e) => Err(e.into()),
        }
    }

    /// Run create, read, update, search and delete in order, checking each
    /// response. A failed step or check deletes the created issue before the
    /// error is returned.
    pub async fn run_all(&mut self) -> Result<()> {
        let result = self.run_checked_steps().await;
        if result.is_err() {
            self.cleanup().await;
        }
        result
    }

    async fn run_checked_steps(&mut self) -> Result<()> {
        tracing::info!("Create: POST new issue returns valid key");
        let created = self.create().await?;
        ensure!(
            issue_key_pattern(&self.project_key).is_match(&created.key),
            "Unexpected issue key format: {}",
            created.key
        );
        ensure!(!created.id.is_empty(), "Created issue {} has no id", created.key);
        let issue_key = created.key;

        tracing::info!("Read: GET issue returns matching fields");
        let issue = self.read().await?;
        ensure!(issue.key == issue_key, "Read {} but expected {}", issue.key, issue_key);
        ensure!(
            issue.fields.summary.contains(TASK_SUMMARY_PREFIX),
            "Unexpected summary '{}'",
            issue.fields.summary
        );
        ensure!(
            issue.fields.issuetype.name == "Task",
            "Expected issue type Task, got {}",
            issue.fields.issuetype.name
        );

        tracing::info!("Update: PUT issue summary and verify change");
        let summary = self.update_summary().await?;
        let issue = self.read().await?;
        ensure!(
            issue.fields.summary == summary,
            "Summary not updated: expected '{}', got '{}'",
            summary,
            issue.fields.summary
        );

        tracing::info!("Search: GET search with JQL finds the issue");
        let result = self.search().await?;
        ensure!(result.total == 1, "Expected 1 search result, got {}", result.total);
        ensure!(
            result.issues.first().is_some_and(|found| found.key == issue_key),
            "Search did not return {}",
            issue_key
        );

        tracing::info!("Delete: DELETE issue and verify 404 on GET");
        self.delete().await?;
        ensure!(
            self.is_gone(&issue_key).await?,
            "{} still readable after delete",
            issue_key
        );

        Ok(())
    }

    /// Best-effort delete when a step failed midway
    pub async fn cleanup(&mut self) {
        if let Some(key) = self.issue_key.take() {
            if let Err(e) = self.client.delete_issue(&key).await {
                tracing::warn!("Cleanup of {} failed: {}", key, e);
            }
        }
    }
}

/// `^{PROJECT}-\d+$`
pub fn issue_key_pattern(project_key: &str) -> Regex {
    Regex::new(&format!(r"^{}-\d+$", regex::escape(project_key)))
        .expect("escaped project key is a valid pattern")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_key_pattern() {
        let pattern = issue_key_pattern("DEV");
        assert!(pattern.is_match("DEV-1"));
        assert!(pattern.is_match("DEV-12345"));
        assert!(!pattern.is_match("DEV-"));
        assert!(!pattern.is_match("XDEV-1"));
        assert!(!pattern.is_match("DEV-1a"));
    }
}
