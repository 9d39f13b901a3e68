//! gamdom-qa runner
//!
//! Runs the Jira CRUD lifecycle or the homepage smoke checks outside
//! `cargo test`, printing each step as it goes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gamdom_qa_core::{Config, JiraConfig, WebConfig};
use gamdom_qa_e2e::{issue_key_pattern, ApiFixture, UiFixture};
use gamdom_qa_web::BasePage;
use regex::Regex;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gamdom-qa")]
#[command(about = "End-to-end checks for the website and the Jira project", long_about = None)]
struct Args {
    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Read settings from this env file instead of ./.env
    #[arg(long)]
    env_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create, read, update, search and delete one issue
    Jira,
    /// Load the homepage, check the header and the casino link
    Smoke,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(&args.log_level)
        .init();

    match args.command {
        Command::Jira => {
            let config = match &args.env_file {
                Some(path) => Config::from_env_file(path)?.jira,
                None => JiraConfig::from_env()?,
            };
            run_jira(&config).await
        }
        Command::Smoke => {
            let config = match &args.env_file {
                Some(path) => Config::from_env_file(path)?.web,
                None => WebConfig::from_env()?,
            };
            run_smoke(&config).await
        }
    }
}

async fn run_jira(config: &JiraConfig) -> Result<()> {
    println!("=== Jira Issue CRUD Lifecycle ({}) ===\n", config.project_key);

    let fixture = ApiFixture::with_config(config)?;
    let mut lifecycle = fixture.lifecycle();

    println!("1. Creating issue...");
    let created = match lifecycle.create().await {
        Ok(created) => {
            println!("   ✓ Created: {}", created.key);
            created
        }
        Err(e) => {
            println!("   ✗ Failed: {}", e);
            return Err(e);
        }
    };
    if !issue_key_pattern(&config.project_key).is_match(&created.key) {
        lifecycle.cleanup().await;
        anyhow::bail!("Unexpected issue key format: {}", created.key);
    }
    println!();

    let steps = async {
        println!("2. Reading issue...");
        let issue = lifecycle.read().await?;
        println!("   ✓ {} [{}] {}", issue.key, issue.fields.status.name, issue.fields.summary);
        println!();

        println!("3. Updating summary...");
        let summary = lifecycle.update_summary().await?;
        let issue = lifecycle.read().await?;
        anyhow::ensure!(
            issue.fields.summary == summary,
            "Summary not updated: expected '{}', got '{}'",
            summary,
            issue.fields.summary
        );
        println!("   ✓ Summary is now: {}", summary);
        println!();

        println!("4. Searching by key...");
        let result = lifecycle.search().await?;
        anyhow::ensure!(result.total == 1, "Expected 1 result, got {}", result.total);
        println!("   ✓ Found {} issue(s)", result.total);
        println!();

        println!("5. Deleting issue...");
        lifecycle.delete().await?;
        anyhow::ensure!(
            lifecycle.is_gone(&created.key).await?,
            "{} still readable after delete",
            created.key
        );
        println!("   ✓ Deleted, GET now returns 404");
        println!();

        Ok::<_, anyhow::Error>(())
    }
    .await;

    if let Err(e) = steps {
        println!("   ✗ Failed: {}", e);
        lifecycle.cleanup().await;
        return Err(e);
    }

    println!("=== All Jira Checks Passed ===");
    Ok(())
}

async fn run_smoke(config: &WebConfig) -> Result<()> {
    println!("=== Homepage Smoke Checks ({}) ===\n", config.base_url);

    let ui = UiFixture::launch_with(config).await?;
    let outcome = smoke_steps(&ui).await;
    ui.teardown().await.context("Closing browser")?;

    if let Err(e) = &outcome {
        println!("   ✗ Failed: {}", e);
    } else {
        println!("=== All Smoke Checks Passed ===");
    }
    outcome
}

async fn smoke_steps(ui: &UiFixture) -> Result<()> {
    let header = &ui.home_page.header;

    println!("1. Loading homepage...");
    ui.home_page.navigate().await?;
    println!("   ✓ Loaded");
    println!();

    println!("2. Checking header elements...");
    header.logo.expect_visible().await.context("logo")?;
    header.login_button.expect_visible().await.context("login button")?;
    header.casino_nav_link.expect_visible().await.context("casino link")?;
    println!("   ✓ Logo, login button and casino link visible");
    if ui.home_page.is_hero_banner_visible().await? {
        println!("   ✓ Hero banner visible");
    } else {
        println!("   ⚠ Hero banner not found");
    }
    println!();

    println!("3. Navigating to casino...");
    header.click_casino().await?;
    let url = ui
        .page()
        .wait_for_url(&Regex::new(r"/casino")?, ui.page().timeouts().navigation)
        .await?;
    println!("   ✓ Now at {}", url);
    println!();

    Ok(())
}
