//! Playwright browser automation
//!
//! A [`PlaywrightPage`] owns a Node process running a generated bridge script.
//! The bridge launches one browser, one context and one page, then answers
//! JSON-line commands on stdin with one JSON-line reply each on stdout.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines};
use tokio::process::{Child, ChildStdin, ChildStdout, Command as TokioCommand};
use tokio::sync::Mutex;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use shopwright_common::BrowserContextConfig;

use crate::driver::{PageDriver, PageLauncher};
use crate::error::{E2eError, E2eResult};
use crate::locator::Locator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Browser {
    #[default]
    Chromium,
    Firefox,
    Webkit,
}

impl Browser {
    pub fn as_str(&self) -> &'static str {
        match self {
            Browser::Chromium => "chromium",
            Browser::Firefox => "firefox",
            Browser::Webkit => "webkit",
        }
    }
}

impl FromStr for Browser {
    type Err = E2eError;

    fn from_str(s: &str) -> E2eResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chromium" | "chrome" => Ok(Browser::Chromium),
            "firefox" => Ok(Browser::Firefox),
            "webkit" => Ok(Browser::Webkit),
            _ => Err(E2eError::UnknownBrowser(s.to_string())),
        }
    }
}

/// Configuration for Playwright
#[derive(Debug, Clone)]
pub struct PlaywrightConfig {
    pub browser: Browser,
    pub headless: bool,

    /// Node executable
    pub node_binary: PathBuf,

    /// Directory holding the `playwright` package
    pub node_modules: PathBuf,

    /// Upper bound on browser startup
    pub launch_timeout: Duration,

    /// Playwright's per-action timeout
    pub action_timeout_ms: u64,

    /// Timeout for `expect_*` checks
    pub assertion_timeout_ms: u64,
}

impl Default for PlaywrightConfig {
    fn default() -> Self {
        Self {
            browser: Browser::Chromium,
            headless: true,
            node_binary: PathBuf::from("node"),
            node_modules: PathBuf::from("node_modules"),
            launch_timeout: Duration::from_secs(30),
            action_timeout_ms: 30_000,
            assertion_timeout_ms: 5_000,
        }
    }
}

/// Commands understood by the bridge script
#[derive(Debug, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum BridgeCommand<'a> {
    Goto { url: &'a str },
    Title,
    Url,
    Click { locator: &'a Locator },
    Fill { locator: &'a Locator, value: &'a str },
    IsVisible { locator: &'a Locator },
    Count { locator: &'a Locator },
    InnerText { locator: &'a Locator },
    GetAttribute { locator: &'a Locator, name: &'a str },
    Evaluate { expression: &'a str },
    WaitForTimeout { ms: u64 },
    ExpectUrl { url: &'a str, timeout_ms: u64 },
    ExpectVisible { locator: &'a Locator, timeout_ms: u64 },
    Screenshot { path: String },
    Close,
}

impl BridgeCommand<'_> {
    fn name(&self) -> String {
        match self {
            BridgeCommand::Goto { url } => format!("goto:{}", url),
            BridgeCommand::Title => "title".to_string(),
            BridgeCommand::Url => "url".to_string(),
            BridgeCommand::Click { locator } => format!("click:{}", locator),
            BridgeCommand::Fill { locator, .. } => format!("fill:{}", locator),
            BridgeCommand::IsVisible { locator } => format!("is_visible:{}", locator),
            BridgeCommand::Count { locator } => format!("count:{}", locator),
            BridgeCommand::InnerText { locator } => format!("inner_text:{}", locator),
            BridgeCommand::GetAttribute { locator, name } => {
                format!("get_attribute:{}@{}", locator, name)
            }
            BridgeCommand::Evaluate { .. } => "evaluate".to_string(),
            BridgeCommand::WaitForTimeout { ms } => format!("wait:{}ms", ms),
            BridgeCommand::ExpectUrl { url, .. } => format!("expect_url:{}", url),
            BridgeCommand::ExpectVisible { locator, .. } => format!("expect_visible:{}", locator),
            BridgeCommand::Screenshot { path } => format!("screenshot:{}", path),
            BridgeCommand::Close => "close".to_string(),
        }
    }
}

#[derive(Serialize)]
struct BridgeRequest<'a> {
    id: u64,
    #[serde(flatten)]
    command: BridgeCommand<'a>,
}

#[derive(Debug, Deserialize)]
struct BridgeReply {
    id: u64,
    ok: bool,
    #[serde(default)]
    value: serde_json::Value,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    assertion: bool,
}

struct BridgeIo {
    stdin: ChildStdin,
    stdout: Lines<BufReader<ChildStdout>>,
    next_id: u64,
}

/// Playwright page handle
pub struct PlaywrightPage {
    io: Mutex<BridgeIo>,
    child: Mutex<Child>,
    closed: AtomicBool,
    assertion_timeout_ms: u64,

    // Keeps the bridge script on disk for the life of the process
    _script_dir: tempfile::TempDir,
}

impl PlaywrightPage {
    /// Launch a browser and open one page under `context`
    pub async fn launch(config: &PlaywrightConfig, context: &BrowserContextConfig) -> E2eResult<Self> {
        let script = build_bridge_script(config, context)?;
        let script_dir = tempfile::tempdir()?;
        let script_path = script_dir.path().join("bridge.js");
        tokio::fs::write(&script_path, script).await?;

        let node_modules = if config.node_modules.is_absolute() {
            config.node_modules.clone()
        } else {
            std::env::current_dir()?.join(&config.node_modules)
        };

        debug!(
            "Launching {} bridge (locale {}, timezone {})",
            config.browser.as_str(),
            context.locale(),
            context.timezone_id()
        );

        let mut child = TokioCommand::new(&config.node_binary)
            .arg(&script_path)
            .env("NODE_PATH", &node_modules)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                E2eError::Launch(format!("failed to spawn {}: {}", config.node_binary.display(), e))
            })?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| E2eError::Launch("bridge stdin unavailable".to_string()))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| E2eError::Launch("bridge stdout unavailable".to_string()))?;
        let mut stdout = BufReader::new(stdout).lines();

        let ready = timeout(config.launch_timeout, stdout.next_line())
            .await
            .map_err(|_| E2eError::Timeout(format!("{} launch", config.browser.as_str())))??
            .ok_or_else(|| E2eError::Launch("bridge exited before the browser was ready".to_string()))?;
        let reply: BridgeReply = serde_json::from_str(&ready)?;
        if !reply.ok {
            return Err(E2eError::Launch(reply.error.unwrap_or_else(|| "unknown error".to_string())));
        }

        info!("{} ready ({})", config.browser.as_str(), context.locale());

        Ok(Self {
            io: Mutex::new(BridgeIo { stdin, stdout, next_id: 0 }),
            child: Mutex::new(child),
            closed: AtomicBool::new(false),
            assertion_timeout_ms: config.assertion_timeout_ms,
            _script_dir: script_dir,
        })
    }

    /// Send one command and wait for its reply
    async fn call(&self, command: BridgeCommand<'_>) -> E2eResult<serde_json::Value> {
        let name = command.name();
        debug!("bridge <- {}", name);

        let mut io = self.io.lock().await;
        io.next_id += 1;
        let id = io.next_id;

        let mut line = serde_json::to_string(&BridgeRequest { id, command })?;
        line.push('\n');
        io.stdin.write_all(line.as_bytes()).await?;
        io.stdin.flush().await?;

        let raw = io
            .stdout
            .next_line()
            .await?
            .ok_or_else(|| E2eError::Protocol(format!("bridge closed while running {}", name)))?;
        let reply: BridgeReply = serde_json::from_str(&raw)?;

        if reply.id != id {
            return Err(E2eError::Protocol(format!(
                "reply id {} does not match request id {}",
                reply.id, id
            )));
        }

        if reply.ok {
            return Ok(reply.value);
        }

        let reason = reply.error.unwrap_or_else(|| "unknown error".to_string());
        if reply.assertion {
            Err(E2eError::AssertionFailed(format!("{} - {}", name, reason)))
        } else {
            Err(E2eError::Driver { command: name, reason })
        }
    }

    async fn call_string(&self, command: BridgeCommand<'_>) -> E2eResult<String> {
        let name = command.name();
        match self.call(command).await? {
            serde_json::Value::String(s) => Ok(s),
            other => Err(E2eError::Protocol(format!("{} returned {} instead of a string", name, other))),
        }
    }

    /// Check if Playwright is installed
    fn check_playwright_installed() -> E2eResult<()> {
        let output = Command::new("npx")
            .args(["playwright", "--version"])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match output {
            Ok(status) if status.success() => Ok(()),
            _ => Err(E2eError::PlaywrightNotFound),
        }
    }
}

#[async_trait]
impl PageDriver for PlaywrightPage {
    async fn goto(&self, url: &str) -> E2eResult<()> {
        self.call(BridgeCommand::Goto { url }).await.map(drop)
    }

    async fn title(&self) -> E2eResult<String> {
        self.call_string(BridgeCommand::Title).await
    }

    async fn url(&self) -> E2eResult<String> {
        self.call_string(BridgeCommand::Url).await
    }

    async fn click(&self, locator: &Locator) -> E2eResult<()> {
        self.call(BridgeCommand::Click { locator }).await.map(drop)
    }

    async fn fill(&self, locator: &Locator, value: &str) -> E2eResult<()> {
        self.call(BridgeCommand::Fill { locator, value }).await.map(drop)
    }

    async fn is_visible(&self, locator: &Locator) -> E2eResult<bool> {
        let value = self.call(BridgeCommand::IsVisible { locator }).await?;
        value
            .as_bool()
            .ok_or_else(|| E2eError::Protocol(format!("is_visible returned {}", value)))
    }

    async fn count(&self, locator: &Locator) -> E2eResult<usize> {
        let value = self.call(BridgeCommand::Count { locator }).await?;
        value
            .as_u64()
            .map(|n| n as usize)
            .ok_or_else(|| E2eError::Protocol(format!("count returned {}", value)))
    }

    async fn inner_text(&self, locator: &Locator) -> E2eResult<String> {
        self.call_string(BridgeCommand::InnerText { locator }).await
    }

    async fn get_attribute(&self, locator: &Locator, name: &str) -> E2eResult<Option<String>> {
        match self.call(BridgeCommand::GetAttribute { locator, name }).await? {
            serde_json::Value::Null => Ok(None),
            serde_json::Value::String(s) => Ok(Some(s)),
            other => Err(E2eError::Protocol(format!("get_attribute returned {}", other))),
        }
    }

    async fn evaluate(&self, expression: &str) -> E2eResult<serde_json::Value> {
        self.call(BridgeCommand::Evaluate { expression }).await
    }

    async fn wait_for_timeout(&self, ms: u64) -> E2eResult<()> {
        self.call(BridgeCommand::WaitForTimeout { ms }).await.map(drop)
    }

    async fn expect_url(&self, url: &str) -> E2eResult<()> {
        let timeout_ms = self.assertion_timeout_ms;
        self.call(BridgeCommand::ExpectUrl { url, timeout_ms }).await.map(drop)
    }

    async fn expect_visible(&self, locator: &Locator) -> E2eResult<()> {
        let timeout_ms = self.assertion_timeout_ms;
        self.call(BridgeCommand::ExpectVisible { locator, timeout_ms }).await.map(drop)
    }

    async fn screenshot(&self, path: &Path) -> E2eResult<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let path = path.to_string_lossy().into_owned();
        self.call(BridgeCommand::Screenshot { path }).await.map(drop)
    }

    async fn close(&self) -> E2eResult<()> {
        if self.closed.swap(true, Ordering::SeqCst) {
            return Ok(());
        }

        if let Err(e) = self.call(BridgeCommand::Close).await {
            warn!("Bridge did not acknowledge close: {}", e);
        }

        let mut child = self.child.lock().await;
        match timeout(Duration::from_secs(10), child.wait()).await {
            Ok(status) => {
                debug!("Bridge exited with {}", status?);
            }
            Err(_) => {
                warn!("Bridge did not exit; killing it");
                child.kill().await?;
            }
        }
        Ok(())
    }
}

/// Launches a fresh Playwright page per browser context
pub struct PlaywrightLauncher {
    config: PlaywrightConfig,
}

impl PlaywrightLauncher {
    /// Create a launcher, verifying Playwright is installed
    pub fn new(config: PlaywrightConfig) -> E2eResult<Self> {
        PlaywrightPage::check_playwright_installed()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PlaywrightConfig {
        &self.config
    }
}

#[async_trait]
impl PageLauncher for PlaywrightLauncher {
    type Page = PlaywrightPage;

    async fn launch(&self, context: &BrowserContextConfig) -> E2eResult<PlaywrightPage> {
        PlaywrightPage::launch(&self.config, context).await
    }
}

/// Build the Node bridge script for a browser and context
pub fn build_bridge_script(config: &PlaywrightConfig, context: &BrowserContextConfig) -> E2eResult<String> {
    let context_options = serde_json::to_string(&context.to_json()?)?;

    let mut script = format!(
        r#"
const {{ {browser} }} = require('playwright');
const readline = require('readline');

const engine = {browser};
const headless = {headless};
const contextOptions = {context_options};
const actionTimeout = {action_timeout};
"#,
        browser = config.browser.as_str(),
        headless = config.headless,
        context_options = context_options,
        action_timeout = config.action_timeout_ms,
    );
    script.push_str(BRIDGE_BODY);
    Ok(script)
}

const BRIDGE_BODY: &str = r#"
function locate(page, l) {
  let loc;
  switch (l.strategy) {
    case 'role':
      loc = page.getByRole(l.role, l.name === undefined ? {} : { name: l.name });
      break;
    case 'text':
      loc = page.getByText(l.value);
      break;
    case 'placeholder':
      loc = page.getByPlaceholder(l.value);
      break;
    case 'css':
      loc = page.locator(l.value);
      break;
    case 'attribute':
      loc = page.locator(`${l.tag || ''}[${l.name}=${JSON.stringify(l.value)}]`);
      break;
    case 'xpath':
      loc = page.locator('xpath=' + l.value);
      break;
    default:
      throw new Error('unknown locator strategy: ' + l.strategy);
  }
  if (l.position === 'first') return loc.first();
  if (l.position && typeof l.position.nth === 'number') return loc.nth(l.position.nth);
  return loc;
}

const write = (msg) => process.stdout.write(JSON.stringify(msg) + '\n');

(async () => {
  let browser;
  try {
    browser = await engine.launch({ headless });
    const context = await browser.newContext(contextOptions);
    context.setDefaultTimeout(actionTimeout);
    const page = await context.newPage();

    const ops = {
      goto: async (c) => { await page.goto(c.url); return null; },
      title: () => page.title(),
      url: async () => page.url(),
      click: async (c) => { await locate(page, c.locator).click(); return null; },
      fill: async (c) => { await locate(page, c.locator).fill(c.value); return null; },
      is_visible: (c) => locate(page, c.locator).isVisible(),
      count: (c) => locate(page, c.locator).count(),
      inner_text: (c) => locate(page, c.locator).innerText(),
      get_attribute: (c) => locate(page, c.locator).getAttribute(c.name),
      evaluate: (c) => page.evaluate(c.expression),
      wait_for_timeout: async (c) => { await page.waitForTimeout(c.ms); return null; },
      expect_url: async (c) => { await page.waitForURL(c.url, { timeout: c.timeout_ms }); return null; },
      expect_visible: async (c) => {
        await locate(page, c.locator).waitFor({ state: 'visible', timeout: c.timeout_ms });
        return null;
      },
      screenshot: async (c) => { await page.screenshot({ path: c.path, fullPage: true }); return null; },
      close: async () => null,
    };

    write({ id: 0, ok: true, value: 'ready' });

    const rl = readline.createInterface({ input: process.stdin, crlfDelay: Infinity });
    for await (const line of rl) {
      if (!line.trim()) continue;
      const cmd = JSON.parse(line);
      try {
        const op = ops[cmd.op];
        if (!op) throw new Error('unknown op: ' + cmd.op);
        const value = await op(cmd);
        write({ id: cmd.id, ok: true, value: value === undefined ? null : value });
      } catch (error) {
        write({ id: cmd.id, ok: false, error: error.message, assertion: cmd.op.startsWith('expect_') });
      }
      if (cmd.op === 'close') break;
    }
  } catch (error) {
    write({ id: 0, ok: false, error: error.message });
    process.exitCode = 1;
  } finally {
    if (browser) await browser.close();
  }
})();
"#;
