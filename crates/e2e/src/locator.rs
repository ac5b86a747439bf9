//! Element locators
//!
//! A [`Locator`] describes how to find elements on a page; it holds no
//! reference to a page and is resolved by the driver on every call.

use serde::Serialize;
use std::fmt;

/// ARIA roles used by the page objects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AriaRole {
    Link,
    Button,
    Textbox,
    Heading,
    Checkbox,
}

impl AriaRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AriaRole::Link => "link",
            AriaRole::Button => "button",
            AriaRole::Textbox => "textbox",
            AriaRole::Heading => "heading",
            AriaRole::Checkbox => "checkbox",
        }
    }
}

/// How an element is found
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum Strategy {
    /// Accessible role with an optional accessible name
    Role {
        role: AriaRole,
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },

    /// Visible text
    Text { value: String },

    /// Input placeholder
    Placeholder { value: String },

    Css { value: String },

    /// Exact attribute match, optionally restricted to one tag
    Attribute {
        #[serde(skip_serializing_if = "Option::is_none")]
        tag: Option<String>,
        name: String,
        value: String,
    },

    #[serde(rename = "xpath")]
    XPath { value: String },
}

/// Which of the matched elements to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    First,
    Nth(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Locator {
    #[serde(flatten)]
    pub strategy: Strategy,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl Locator {
    fn from_strategy(strategy: Strategy) -> Self {
        Self { strategy, position: None }
    }

    pub fn role(role: AriaRole, name: impl Into<String>) -> Self {
        Self::from_strategy(Strategy::Role { role, name: Some(name.into()) })
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::from_strategy(Strategy::Text { value: value.into() })
    }

    pub fn placeholder(value: impl Into<String>) -> Self {
        Self::from_strategy(Strategy::Placeholder { value: value.into() })
    }

    pub fn css(value: impl Into<String>) -> Self {
        Self::from_strategy(Strategy::Css { value: value.into() })
    }

    /// `tag[name='value']`
    pub fn attribute(tag: &str, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::from_strategy(Strategy::Attribute {
            tag: (!tag.is_empty()).then(|| tag.to_string()),
            name: name.into(),
            value: value.into(),
        })
    }

    pub fn xpath(value: impl Into<String>) -> Self {
        Self::from_strategy(Strategy::XPath { value: value.into() })
    }

    pub fn first(mut self) -> Self {
        self.position = Some(Position::First);
        self
    }

    pub fn nth(mut self, index: usize) -> Self {
        self.position = Some(Position::Nth(index));
        self
    }
}

/// Renders the Playwright selector form, for logs and error messages
impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.strategy {
            Strategy::Role { role, name: Some(name) } => {
                write!(f, "role={}[name=\"{}\"]", role.as_str(), name)?
            }
            Strategy::Role { role, name: None } => write!(f, "role={}", role.as_str())?,
            Strategy::Text { value } => write!(f, "text={}", value)?,
            Strategy::Placeholder { value } => write!(f, "[placeholder=\"{}\"]", value)?,
            Strategy::Css { value } => write!(f, "{}", value)?,
            Strategy::Attribute { tag, name, value } => {
                write!(f, "{}[{}='{}']", tag.as_deref().unwrap_or(""), name, value)?
            }
            Strategy::XPath { value } => write!(f, "xpath={}", value)?,
        }
        match self.position {
            Some(Position::First) => write!(f, " >> nth=0"),
            Some(Position::Nth(n)) => write!(f, " >> nth={}", n),
            None => Ok(()),
        }
    }
}
