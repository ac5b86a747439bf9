//! Shopwright Common Library
//!
//! Locale registry, locale-aware formatting and browser-context types shared
//! by the Shopwright storefront UI suite.

pub mod context;
pub mod error;
pub mod format;
pub mod locale;

// Re-export commonly used types
pub use context::{BrowserContextConfig, Viewport};
pub use error::{Error, Result};
pub use locale::{LocaleDescriptor, TextDirection, DEFAULT_LOCALE};

/// Shopwright version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
