//! Shopwright E2E Test Framework
//!
//! Drives a storefront through Playwright from Rust:
//! - Launches one browser page per scenario under a locale-specific context
//! - Talks to Playwright over a JSON-line bridge process
//! - Wraps each storefront page in a page object
//! - Runs scenarios and writes a JSON results report
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Scenario Runner (Rust)                     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  TestRunner<L: PageLauncher>                                │
//! │    ├── select(scenarios) -> filter / tag                    │
//! │    ├── run_scenario(scenario) -> TestResult                 │
//! │    │     ├── build_browser_context_config(locale)           │
//! │    │     ├── launcher.launch(context) -> PageDriver         │
//! │    │     └── (scenario.run)(&Fixtures)                      │
//! │    └── write_results() -> test-results.json                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Fixtures<'a>                                               │
//! │    ├── page, base_url, locale_config, test_user             │
//! │    └── home_page / login_page / products_page / cart_page   │
//! │          └── Navigator -> &dyn PageDriver                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  PlaywrightPage (PageDriver)                                │
//! │    └── node bridge.js  <── {"id","op",...} / {"id","ok"} ──>│
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod fixtures;
pub mod locator;
pub mod pages;
pub mod playwright;
pub mod runner;


pub use config::SuiteArgs;
pub use driver::{PageDriver, PageLauncher};
pub use error::{E2eError, E2eResult};
pub use fixtures::{Fixtures, TestUser};
pub use locator::{AriaRole, Locator};
pub use pages::{CartPage, HomePage, LoginPage, PageKind, ProductsPage};
pub use playwright::{Browser, PlaywrightConfig, PlaywrightLauncher, PlaywrightPage};
pub use runner::{Outcome, Scenario, TestRunner, TestStatus, TestSuiteResult};
