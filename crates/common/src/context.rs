//! Browser context configuration
//!
//! The options a browsing context is created with. The locale tag and timezone
//! are only ever set together from one [`LocaleDescriptor`], so a context can
//! not end up with, say, a French locale and a Tokyo clock.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::locale::{self, LocaleDescriptor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: 1920, height: 1080 }
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Viewport {
    type Err = Error;

    /// Parses `WIDTHxHEIGHT`, e.g. `1280x720`
    fn from_str(s: &str) -> Result<Self> {
        let (w, h) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(|| Error::InvalidConfig(format!("viewport '{}' is not WIDTHxHEIGHT", s)))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| Error::InvalidConfig(format!("invalid viewport dimension '{}'", v)))
        };
        Ok(Self::new(parse(w)?, parse(h)?))
    }
}

/// Options for creating a browsing context
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowserContextConfig {
    pub viewport: Viewport,

    locale: String,

    timezone_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,

    #[serde(rename = "ignoreHTTPSErrors")]
    pub ignore_https_errors: bool,
}

impl BrowserContextConfig {
    /// Configuration with the given viewport and the default locale
    pub fn new(viewport: Viewport) -> Self {
        let descriptor = locale::resolve(locale::DEFAULT_LOCALE);
        Self {
            viewport,
            locale: descriptor.identifier.to_string(),
            timezone_id: descriptor.timezone.to_string(),
            user_agent: None,
            ignore_https_errors: false,
        }
    }

    /// Copy of this configuration with locale and timezone taken from
    /// `descriptor`; every other option is left as is
    pub fn with_locale(&self, descriptor: &LocaleDescriptor) -> Self {
        Self {
            locale: descriptor.identifier.to_string(),
            timezone_id: descriptor.timezone.to_string(),
            ..self.clone()
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn timezone_id(&self) -> &str {
        &self.timezone_id
    }

    /// Option object in the shape the browser driver's `newContext` accepts
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl Default for BrowserContextConfig {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}
