//! Command-line configuration for the live suite

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use shopwright_common::{BrowserContextConfig, Viewport, DEFAULT_LOCALE};

use crate::error::E2eResult;
use crate::fixtures::TestUser;
use crate::pages::DEFAULT_BASE_URL;
use crate::playwright::{Browser, PlaywrightConfig};
use crate::runner::RunnerConfig;

#[derive(Parser, Debug, Clone)]
#[command(name = "shopwright-e2e")]
#[command(about = "Storefront UI suite driven through Playwright")]
#[command(ignore_errors = true)]
pub struct SuiteArgs {
    /// Run only scenarios whose name contains this text
    pub filter: Option<String>,

    /// Locale the browser context is created with
    #[arg(long, env = "SHOPWRIGHT_LOCALE", default_value = DEFAULT_LOCALE)]
    pub locale: String,

    /// Browser to use (chromium, firefox, webkit)
    #[arg(long, env = "SHOPWRIGHT_BROWSER", default_value = "chromium")]
    pub browser: String,

    /// Site under test
    #[arg(long, env = "SHOPWRIGHT_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Actually drive a browser; without it the suite is skipped
    #[arg(long, env = "SHOPWRIGHT_E2E")]
    pub live: bool,

    /// Show the browser window
    #[arg(long)]
    pub headed: bool,

    /// Viewport as WIDTHxHEIGHT
    #[arg(long, default_value = "1920x1080")]
    pub viewport: String,

    /// Scenarios run concurrently, each with its own browser
    #[arg(long, default_value = "1")]
    pub workers: usize,

    /// Run only scenarios with this tag
    #[arg(short, long)]
    pub tag: Option<String>,

    /// Capture a full-page screenshot when a scenario fails
    #[arg(long)]
    pub screenshot_on_failure: bool,

    /// Seconds to wait for the browser to start
    #[arg(long, default_value = "30")]
    pub launch_timeout: u64,

    /// Output directory for results
    #[arg(short, long, default_value = "test-results")]
    pub output: PathBuf,
}

impl SuiteArgs {
    pub fn playwright_config(&self) -> E2eResult<PlaywrightConfig> {
        Ok(PlaywrightConfig {
            browser: self.browser.parse::<Browser>()?,
            headless: !self.headed,
            launch_timeout: Duration::from_secs(self.launch_timeout),
            ..Default::default()
        })
    }

    pub fn runner_config(&self) -> E2eResult<RunnerConfig> {
        let viewport: Viewport = self.viewport.parse()?;
        Ok(RunnerConfig {
            base_url: self.base_url.trim_end_matches('/').to_string(),
            locale: self.locale.clone(),
            base_context: BrowserContextConfig::new(viewport),
            user: TestUser::from_env(),
            filter: self.filter.clone(),
            tag: self.tag.clone(),
            workers: self.workers.max(1),
            screenshot_on_failure: self.screenshot_on_failure,
            output_dir: self.output.clone(),
        })
    }
}
