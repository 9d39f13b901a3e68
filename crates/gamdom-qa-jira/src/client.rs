//! JIRA REST API v2 client
//!
//! Thin wrapper over `reqwest`: one method per endpoint, non-2xx responses
//! become [`Error::Api`] carrying the status and response body. No retries.

use crate::auth::JiraAuth;
use crate::error::{Error, Result};
use crate::types::{CreateIssuePayload, CreatedIssue, JiraIssue, SearchResult};
use gamdom_qa_core::JiraConfig;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, Response};
use serde_json::{Map, Value};

const API_PREFIX: &str = "/rest/api/2";

pub struct JiraClient {
    http: reqwest::Client,
    base_url: String,
}

impl JiraClient {
    pub fn new(base_url: impl Into<String>, auth: &JiraAuth) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut auth_value = HeaderValue::from_str(&auth.to_basic_auth())?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &JiraConfig) -> Result<Self> {
        Self::new(config.base_url.clone(), &JiraAuth::from_config(config))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create an issue
    pub async fn create_issue(&self, payload: &CreateIssuePayload) -> Result<CreatedIssue> {
        let response = self
            .request(Method::POST, "/issue")
            .json(payload)
            .send()
            .await?;
        let response = check(response, "create issue").await?;
        let created: CreatedIssue = response.json().await?;
        tracing::info!("Created issue {}", created.key);
        Ok(created)
    }

    /// Read an issue by key
    pub async fn get_issue(&self, issue_key: &str) -> Result<JiraIssue> {
        let response = self
            .request(Method::GET, &format!("/issue/{}", issue_key))
            .send()
            .await?;
        let response = check(response, &format!("get issue {}", issue_key)).await?;
        Ok(response.json().await?)
    }

    /// Update top-level fields of an issue
    pub async fn update_issue(&self, issue_key: &str, fields: Map<String, Value>) -> Result<()> {
        let body = serde_json::json!({ "fields": fields });
        let response = self
            .request(Method::PUT, &format!("/issue/{}", issue_key))
            .json(&body)
            .send()
            .await?;
        check(response, &format!("update issue {}", issue_key)).await?;
        tracing::info!("Updated issue {}", issue_key);
        Ok(())
    }

    /// Search issues with a JQL expression
    pub async fn search_issues(&self, jql: &str) -> Result<SearchResult> {
        let response = self
            .request(Method::GET, "/search")
            .query(&[("jql", jql)])
            .send()
            .await?;
        let response = check(response, "search issues").await?;
        Ok(response.json().await?)
    }

    /// Delete an issue by key
    pub async fn delete_issue(&self, issue_key: &str) -> Result<()> {
        let response = self
            .request(Method::DELETE, &format!("/issue/{}", issue_key))
            .send()
            .await?;
        check(response, &format!("delete issue {}", issue_key)).await?;
        tracing::info!("Deleted issue {}", issue_key);
        Ok(())
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}{}", self.base_url, API_PREFIX, path);
        tracing::debug!("{} {}", method, url);
        self.http.request(method, url)
    }
}

async fn check(response: Response, operation: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    // Body is best effort, the status alone is enough to report
    let body = response.text().await.unwrap_or_default();
    tracing::debug!("{} failed with {}: {}", operation, status, body);

    Err(Error::Api {
        operation: operation.to_string(),
        status,
        body,
    })
}
