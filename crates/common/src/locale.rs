//! Locale registry
//!
//! Static table of the regional conventions the suite runs the storefront
//! under. The table is compiled in and read-only; lookups for identifiers that
//! are not registered resolve to the en-US entry instead of failing, so a typo
//! in a parametrised locale never aborts a run.

use serde::Serialize;

/// Identifier of the descriptor unknown locales fall back to
pub const DEFAULT_LOCALE: &str = "en-US";

/// Text direction of a locale
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

impl TextDirection {
    /// Value of the HTML `dir` attribute for this direction
    pub fn as_html_dir(&self) -> &'static str {
        match self {
            TextDirection::LeftToRight => "ltr",
            TextDirection::RightToLeft => "rtl",
        }
    }
}

/// Regional formatting conventions for one locale
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleDescriptor {
    /// BCP 47 tag, e.g. `en-US`
    pub identifier: &'static str,

    /// Human-readable name
    pub name: &'static str,

    /// IANA timezone name
    pub timezone: &'static str,

    /// ISO 4217 currency code
    pub currency: &'static str,

    pub currency_symbol: &'static str,

    /// Date pattern using `YYYY`, `MM` and `DD` tokens
    pub date_format: &'static str,

    pub decimal_separator: char,

    pub thousands_separator: char,

    pub direction: TextDirection,
}

impl LocaleDescriptor {
    pub fn is_right_to_left(&self) -> bool {
        self.direction == TextDirection::RightToLeft
    }
}

static SUPPORTED_LOCALES: [LocaleDescriptor; 8] = [
    LocaleDescriptor {
        identifier: "en-US",
        name: "English (US)",
        timezone: "America/New_York",
        currency: "USD",
        currency_symbol: "$",
        date_format: "MM/DD/YYYY",
        decimal_separator: '.',
        thousands_separator: ',',
        direction: TextDirection::LeftToRight,
    },
    LocaleDescriptor {
        identifier: "en-GB",
        name: "English (UK)",
        timezone: "Europe/London",
        currency: "GBP",
        currency_symbol: "£",
        date_format: "DD/MM/YYYY",
        decimal_separator: '.',
        thousands_separator: ',',
        direction: TextDirection::LeftToRight,
    },
    LocaleDescriptor {
        identifier: "fr-FR",
        name: "French (France)",
        timezone: "Europe/Paris",
        currency: "EUR",
        currency_symbol: "€",
        date_format: "DD/MM/YYYY",
        decimal_separator: ',',
        thousands_separator: ' ',
        direction: TextDirection::LeftToRight,
    },
    LocaleDescriptor {
        identifier: "de-DE",
        name: "German (Germany)",
        timezone: "Europe/Berlin",
        currency: "EUR",
        currency_symbol: "€",
        date_format: "DD.MM.YYYY",
        decimal_separator: ',',
        thousands_separator: '.',
        direction: TextDirection::LeftToRight,
    },
    LocaleDescriptor {
        identifier: "ja-JP",
        name: "Japanese (Japan)",
        timezone: "Asia/Tokyo",
        currency: "JPY",
        currency_symbol: "¥",
        date_format: "YYYY/MM/DD",
        decimal_separator: '.',
        thousands_separator: ',',
        direction: TextDirection::LeftToRight,
    },
    LocaleDescriptor {
        identifier: "es-ES",
        name: "Spanish (Spain)",
        timezone: "Europe/Madrid",
        currency: "EUR",
        currency_symbol: "€",
        date_format: "DD/MM/YYYY",
        decimal_separator: ',',
        thousands_separator: '.',
        direction: TextDirection::LeftToRight,
    },
    LocaleDescriptor {
        identifier: "zh-CN",
        name: "Chinese (Simplified)",
        timezone: "Asia/Shanghai",
        currency: "CNY",
        currency_symbol: "¥",
        date_format: "YYYY-MM-DD",
        decimal_separator: '.',
        thousands_separator: ',',
        direction: TextDirection::LeftToRight,
    },
    LocaleDescriptor {
        identifier: "ar-SA",
        name: "Arabic (Saudi Arabia)",
        timezone: "Asia/Riyadh",
        currency: "SAR",
        currency_symbol: "﷼",
        date_format: "DD/MM/YYYY",
        decimal_separator: '.',
        thousands_separator: ',',
        direction: TextDirection::RightToLeft,
    },
];

/// Strict lookup; `None` when the identifier is not registered
pub fn lookup(identifier: &str) -> Option<&'static LocaleDescriptor> {
    SUPPORTED_LOCALES.iter().find(|l| l.identifier == identifier)
}

/// Descriptor for `identifier`, or the en-US descriptor when it is unknown
pub fn resolve(identifier: &str) -> &'static LocaleDescriptor {
    lookup(identifier).unwrap_or(&SUPPORTED_LOCALES[0])
}

/// All registered identifiers in registry order
pub fn list_identifiers() -> Vec<&'static str> {
    SUPPORTED_LOCALES.iter().map(|l| l.identifier).collect()
}

/// All registered descriptors in registry order
pub fn all() -> &'static [LocaleDescriptor] {
    &SUPPORTED_LOCALES
}
