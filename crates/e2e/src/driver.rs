//! Browser driver seam
//!
//! Page objects talk to the browser only through [`PageDriver`]. Each call
//! completes (navigation settled, action applied) or fails before it returns;
//! nothing here retries.

use async_trait::async_trait;
use std::path::Path;

use shopwright_common::BrowserContextConfig;

use crate::error::E2eResult;
use crate::locator::Locator;

/// A single open browser page
#[async_trait]
pub trait PageDriver: Send + Sync {
    async fn goto(&self, url: &str) -> E2eResult<()>;

    async fn title(&self) -> E2eResult<String>;

    async fn url(&self) -> E2eResult<String>;

    async fn click(&self, locator: &Locator) -> E2eResult<()>;

    async fn fill(&self, locator: &Locator, value: &str) -> E2eResult<()>;

    async fn is_visible(&self, locator: &Locator) -> E2eResult<bool>;

    async fn count(&self, locator: &Locator) -> E2eResult<usize>;

    async fn inner_text(&self, locator: &Locator) -> E2eResult<String>;

    async fn get_attribute(&self, locator: &Locator, name: &str) -> E2eResult<Option<String>>;

    /// Evaluate a JavaScript expression (or function source) in the page
    async fn evaluate(&self, expression: &str) -> E2eResult<serde_json::Value>;

    async fn wait_for_timeout(&self, ms: u64) -> E2eResult<()>;

    /// Fails with `AssertionFailed` unless the page reaches `url`
    async fn expect_url(&self, url: &str) -> E2eResult<()>;

    /// Fails with `AssertionFailed` unless `locator` becomes visible
    async fn expect_visible(&self, locator: &Locator) -> E2eResult<()>;

    async fn screenshot(&self, path: &Path) -> E2eResult<()>;

    async fn close(&self) -> E2eResult<()> {
        Ok(())
    }
}

/// Opens pages under a browser context configuration
#[async_trait]
pub trait PageLauncher: Send + Sync {
    type Page: PageDriver + 'static;

    async fn launch(&self, context: &BrowserContextConfig) -> E2eResult<Self::Page>;
}
