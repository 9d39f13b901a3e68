//! Environment-driven configuration
//!
//! Values come from the process environment, optionally seeded from a `.env`
//! file. The website half and the Jira half load independently so UI tests
//! can run without Jira credentials.

use crate::{Error, Result};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://gamdom.eu";
pub const DEFAULT_PROJECT_KEY: &str = "DEV";

/// Full configuration for both suites
#[derive(Debug, Clone)]
pub struct Config {
    pub web: WebConfig,
    pub jira: JiraConfig,
}

/// Website under test and browser settings
#[derive(Debug, Clone, PartialEq)]
pub struct WebConfig {
    pub base_url: String,
    pub headless: bool,
    /// Connect to an already running Chrome instead of launching one
    pub remote_debugging_url: Option<String>,
    pub timeouts: Timeouts,
}

/// Issue tracker connection settings
#[derive(Clone, PartialEq)]
pub struct JiraConfig {
    pub base_url: String,
    pub email: String,
    pub api_token: String,
    pub project_key: String,
    pub auth_mode: JiraAuthMode,
}

/// How `JIRA_API_TOKEN` turns into the Basic `Authorization` header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JiraAuthMode {
    /// The token already holds the encoded Basic credential and is sent as is
    #[default]
    Credential,
    /// `JIRA_EMAIL:JIRA_API_TOKEN` is base64-encoded into the header
    EmailToken,
}

impl JiraAuthMode {
    fn parse(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "credential" => Ok(Self::Credential),
            "email_token" | "email-token" => Ok(Self::EmailToken),
            other => Err(Error::InvalidEnv {
                name: "JIRA_AUTH_MODE".to_string(),
                reason: format!("expected 'credential' or 'email_token', got '{}'", other),
            }),
        }
    }
}

/// Per-category timeouts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    /// Click, fill and other element interactions
    pub action: Duration,
    pub navigation: Duration,
    /// Default wait for visibility assertions
    pub expect: Duration,
    /// Upper bound for a whole test case
    pub test: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            action: Duration::from_secs(15),
            navigation: Duration::from_secs(30),
            expect: Duration::from_secs(5),
            test: Duration::from_secs(60),
        }
    }
}

impl Timeouts {
    fn from_lookup<F>(lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            action: millis(lookup, "ACTION_TIMEOUT_MS", defaults.action)?,
            navigation: millis(lookup, "NAVIGATION_TIMEOUT_MS", defaults.navigation)?,
            expect: millis(lookup, "EXPECT_TIMEOUT_MS", defaults.expect)?,
            test: millis(lookup, "TEST_TIMEOUT_MS", defaults.test)?,
        })
    }
}

impl Config {
    /// Load both halves from the process environment (and `.env`, if present)
    pub fn from_env() -> Result<Self> {
        load_dotenv();
        Self::from_lookup(env_lookup)
    }

    /// Load from a specific env file, falling back to the process environment
    pub fn from_env_file(path: &Path) -> Result<Self> {
        let vars = read_env_file(path)?;
        Self::from_lookup(|key| vars.get(key).cloned().or_else(|| env_lookup(key)))
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            web: WebConfig::from_lookup(&lookup)?,
            jira: JiraConfig::from_lookup(&lookup)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.web.validate()?;
        self.jira.validate()?;
        Ok(())
    }
}

impl WebConfig {
    pub fn from_env() -> Result<Self> {
        load_dotenv();
        let config = Self::from_lookup(&env_lookup)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_lookup<F>(lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let headless = match non_blank(lookup, "HEADLESS") {
            Some(value) => parse_bool("HEADLESS", &value)?,
            None => true,
        };

        Ok(Self {
            base_url: non_blank(lookup, "BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            headless,
            remote_debugging_url: non_blank(lookup, "CHROMIUM_REMOTE_DEBUGGING_URL"),
            timeouts: Timeouts::from_lookup(lookup)?,
        })
    }

    pub fn validate(&self) -> Result<()> {
        validate_http_url("BASE_URL", &self.base_url)?;

        if self.timeouts.action.is_zero() || self.timeouts.navigation.is_zero() {
            return Err(Error::Validation(
                "Action and navigation timeouts must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl JiraConfig {
    pub fn from_env() -> Result<Self> {
        load_dotenv();
        let config = Self::from_lookup(&env_lookup)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_lookup<F>(lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let auth_mode = match non_blank(lookup, "JIRA_AUTH_MODE") {
            Some(value) => JiraAuthMode::parse(&value)?,
            None => JiraAuthMode::default(),
        };

        Ok(Self {
            base_url: require(lookup, "JIRA_BASE_URL")?,
            email: require(lookup, "JIRA_EMAIL")?,
            api_token: require(lookup, "JIRA_API_TOKEN")?,
            project_key: non_blank(lookup, "JIRA_PROJECT_KEY")
                .unwrap_or_else(|| DEFAULT_PROJECT_KEY.to_string()),
            auth_mode,
        })
    }

    pub fn validate(&self) -> Result<()> {
        validate_http_url("JIRA_BASE_URL", &self.base_url)?;

        let key_ok = !self.project_key.is_empty()
            && self
                .project_key
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
            && self
                .project_key
                .starts_with(|c: char| c.is_ascii_uppercase());
        if !key_ok {
            return Err(Error::Validation(format!(
                "Invalid project key '{}'. Must start with an uppercase letter followed by uppercase letters, digits or '_'",
                self.project_key
            )));
        }

        Ok(())
    }
}

impl fmt::Debug for JiraConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JiraConfig")
            .field("base_url", &self.base_url)
            .field("email", &self.email)
            .field("api_token", &"<redacted>")
            .field("project_key", &self.project_key)
            .field("auth_mode", &self.auth_mode)
            .finish()
    }
}

fn load_dotenv() {
    // A missing .env is normal in CI where variables come from the runner
    let _ = dotenvy::dotenv();
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn read_env_file(path: &Path) -> Result<HashMap<String, String>> {
    let mut vars = HashMap::new();
    for item in dotenvy::from_path_iter(path)? {
        let (key, value) = item?;
        vars.insert(key, value);
    }
    Ok(vars)
}

fn non_blank<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn require<F>(lookup: &F, key: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    non_blank(lookup, key).ok_or_else(|| Error::MissingEnv(key.to_string()))
}

fn millis<F>(lookup: &F, key: &str, default: Duration) -> Result<Duration>
where
    F: Fn(&str) -> Option<String>,
{
    match non_blank(lookup, key) {
        Some(value) => value
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|e| Error::InvalidEnv {
                name: key.to_string(),
                reason: e.to_string(),
            }),
        None => Ok(default),
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(Error::InvalidEnv {
            name: key.to_string(),
            reason: format!("expected a boolean, got '{}'", other),
        }),
    }
}

fn validate_http_url(key: &str, value: &str) -> Result<()> {
    let url = Url::parse(value).map_err(|e| Error::InvalidEnv {
        name: key.to_string(),
        reason: e.to_string(),
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(Error::InvalidEnv {
            name: key.to_string(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    Ok(())
}
