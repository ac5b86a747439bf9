//! Scenario runner
//!
//! Gives every scenario a fresh page under its own browser context, runs it
//! against a [`Fixtures`] bundle, and collects the results.

use chrono::{DateTime, Utc};
use futures::future::BoxFuture;
use futures::stream::{self, StreamExt};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, error, info, warn};

use shopwright_common::{BrowserContextConfig, DEFAULT_LOCALE};

use crate::driver::{PageDriver, PageLauncher};
use crate::error::E2eResult;
use crate::fixtures::{build_browser_context_config, Fixtures, TestUser};
use crate::pages::DEFAULT_BASE_URL;

/// How a scenario that did not fail ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Skipped(String),
}

pub type ScenarioFn = for<'a> fn(&'a Fixtures<'a>) -> BoxFuture<'a, E2eResult<Outcome>>;

/// One named test body, optionally pinned to a locale
#[derive(Clone)]
pub struct Scenario {
    pub name: String,
    pub tags: Vec<String>,

    /// Overrides the session locale when set
    pub locale: Option<String>,

    run: ScenarioFn,
}

impl Scenario {
    pub fn new(name: impl Into<String>, run: ScenarioFn) -> Self {
        Self {
            name: name.into(),
            tags: Vec::new(),
            locale: None,
            run,
        }
    }

    /// One scenario per locale, named `name[locale]`
    pub fn per_locale(name: &str, locales: &[&str], run: ScenarioFn) -> Vec<Self> {
        locales
            .iter()
            .map(|l| Self::new(name, run).with_locale(l))
            .collect()
    }

    pub fn tagged(mut self, tags: &[&str]) -> Self {
        self.tags.extend(tags.iter().map(|t| t.to_string()));
        self
    }

    pub fn with_locale(mut self, locale: &str) -> Self {
        self.locale = Some(locale.to_string());
        self
    }

    pub fn display_name(&self) -> String {
        match &self.locale {
            Some(locale) => format!("{}[{}]", self.name, locale),
            None => self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestStatus {
    Passed,
    Failed,
    Skipped,
}

/// Result of running a single test
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestResult {
    pub name: String,
    pub locale: String,
    pub status: TestStatus,
    pub duration_ms: u64,
    pub error: Option<String>,
    pub skip_reason: Option<String>,
    pub screenshot: Option<PathBuf>,
}

/// Result of running all tests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestSuiteResult {
    pub started_at: DateTime<Utc>,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub duration_ms: u64,
    pub results: Vec<TestResult>,
}

impl TestSuiteResult {
    pub fn success(&self) -> bool {
        self.failed == 0
    }
}

/// Configuration for the test runner
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    pub base_url: String,

    /// Session locale, used by scenarios without their own
    pub locale: String,

    /// Options every context starts from before locale fields are applied
    pub base_context: BrowserContextConfig,

    pub user: TestUser,
    pub filter: Option<String>,
    pub tag: Option<String>,
    pub workers: usize,
    pub screenshot_on_failure: bool,
    pub output_dir: PathBuf,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            base_context: BrowserContextConfig::default(),
            user: TestUser::default(),
            filter: None,
            tag: None,
            workers: 1,
            screenshot_on_failure: false,
            output_dir: PathBuf::from("test-results"),
        }
    }
}

/// Main E2E test runner
pub struct TestRunner<L> {
    launcher: L,
    config: RunnerConfig,
}

impl<L: PageLauncher> TestRunner<L> {
    pub fn new(launcher: L, config: RunnerConfig) -> Self {
        Self { launcher, config }
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Scenarios matching the name filter and tag
    pub fn select<'s>(&self, scenarios: &'s [Scenario]) -> Vec<&'s Scenario> {
        scenarios
            .iter()
            .filter(|s| {
                self.config
                    .filter
                    .as_deref()
                    .map_or(true, |f| s.display_name().contains(f))
            })
            .filter(|s| self.config.tag.as_ref().map_or(true, |t| s.tags.contains(t)))
            .collect()
    }

    /// Run the selected scenarios; results keep declaration order
    pub async fn run_all(&self, scenarios: &[Scenario]) -> TestSuiteResult {
        let started_at = Utc::now();
        let start = Instant::now();
        let selected = self.select(scenarios);

        info!("Running {} test(s)...", selected.len());

        let results: Vec<TestResult> = stream::iter(selected)
            .map(|s| self.run_scenario(s))
            .buffered(self.config.workers.max(1))
            .collect()
            .await;

        let count = |status: TestStatus| results.iter().filter(|r| r.status == status).count();
        let passed = count(TestStatus::Passed);
        let failed = count(TestStatus::Failed);
        let skipped = count(TestStatus::Skipped);
        let duration_ms = start.elapsed().as_millis() as u64;

        info!("");
        info!(
            "Test Results: {} passed, {} failed, {} skipped ({} ms)",
            passed, failed, skipped, duration_ms
        );

        TestSuiteResult {
            started_at,
            total: results.len(),
            passed,
            failed,
            skipped,
            duration_ms,
            results,
        }
    }

    /// Run a single scenario on its own page
    pub async fn run_scenario(&self, scenario: &Scenario) -> TestResult {
        let start = Instant::now();
        let name = scenario.display_name();
        let locale = scenario.locale.as_deref().unwrap_or(&self.config.locale);
        let context = build_browser_context_config(&self.config.base_context, locale);

        debug!("Running test: {}", name);

        let mut result = TestResult {
            name: name.clone(),
            locale: context.locale().to_string(),
            status: TestStatus::Failed,
            duration_ms: 0,
            error: None,
            skip_reason: None,
            screenshot: None,
        };

        let page = match self.launcher.launch(&context).await {
            Ok(page) => page,
            Err(e) => {
                error!("✗ {} - {}", name, e);
                result.error = Some(e.to_string());
                result.duration_ms = start.elapsed().as_millis() as u64;
                return result;
            }
        };

        let fixtures = Fixtures::new(&page, &self.config.base_url, &context, self.config.user.clone());
        match (scenario.run)(&fixtures).await {
            Ok(Outcome::Passed) => result.status = TestStatus::Passed,
            Ok(Outcome::Skipped(reason)) => {
                result.status = TestStatus::Skipped;
                result.skip_reason = Some(reason);
            }
            Err(e) => {
                result.error = Some(e.to_string());
                if self.config.screenshot_on_failure {
                    result.screenshot = self.capture_failure(&page, &name).await;
                }
            }
        }

        if let Err(e) = page.close().await {
            warn!("Failed to close page for {}: {}", name, e);
        }
        debug!("Teardown: {} complete", name);

        result.duration_ms = start.elapsed().as_millis() as u64;
        match result.status {
            TestStatus::Passed => info!("✓ {} ({} ms)", name, result.duration_ms),
            TestStatus::Skipped => info!(
                "- {} skipped: {}",
                name,
                result.skip_reason.as_deref().unwrap_or("")
            ),
            TestStatus::Failed => error!(
                "✗ {} - {}",
                name,
                result.error.as_deref().unwrap_or("unknown error")
            ),
        }
        result
    }

    async fn capture_failure(&self, page: &L::Page, name: &str) -> Option<PathBuf> {
        let path = self.config.output_dir.join("screenshots").join(screenshot_file_name(name));
        match page.screenshot(&path).await {
            Ok(()) => Some(path),
            Err(e) => {
                warn!("Screenshot for {} failed: {}", name, e);
                None
            }
        }
    }

    /// Write test results to JSON file
    pub fn write_results(&self, results: &TestSuiteResult) -> E2eResult<PathBuf> {
        std::fs::create_dir_all(&self.config.output_dir)?;

        let path = self.config.output_dir.join("test-results.json");
        let json = serde_json::to_string_pretty(results)?;
        std::fs::write(&path, json)?;

        info!("Results written to: {}", path.display());
        Ok(path)
    }
}

/// Readable file name for a failure screenshot. The hash suffix keeps names
/// that differ only in punctuation apart.
fn screenshot_file_name(scenario: &str) -> String {
    let readable: String = scenario
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect();
    let digest = Sha256::digest(scenario.as_bytes());
    format!("{}-{}.png", readable, &hex::encode(digest)[..8])
}
