//! JIRA authentication

use base64::Engine;
use gamdom_qa_core::{JiraAuthMode, JiraConfig};

/// Source of the Basic `Authorization` header
pub enum JiraAuth {
    /// Already-encoded Basic credential, sent verbatim
    Credential(String),
    /// Email and API token pair, encoded on the way out
    EmailToken { email: String, api_token: String },
}

impl JiraAuth {
    pub fn new(email: impl Into<String>, api_token: impl Into<String>) -> Self {
        JiraAuth::EmailToken {
            email: email.into(),
            api_token: api_token.into(),
        }
    }

    pub fn credential(credential: impl Into<String>) -> Self {
        JiraAuth::Credential(credential.into())
    }

    pub fn from_config(config: &JiraConfig) -> Self {
        match config.auth_mode {
            JiraAuthMode::Credential => Self::credential(config.api_token.clone()),
            JiraAuthMode::EmailToken => Self::new(config.email.clone(), config.api_token.clone()),
        }
    }

    pub fn to_basic_auth(&self) -> String {
        match self {
            JiraAuth::Credential(credential) => format!("Basic {}", credential),
            JiraAuth::EmailToken { email, api_token } => {
                let credentials = format!("{}:{}", email, api_token);
                format!(
                    "Basic {}",
                    base64::engine::general_purpose::STANDARD.encode(credentials)
                )
            }
        }
    }
}
