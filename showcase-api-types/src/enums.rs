//! Enums shared across the API surface

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Project categories recognised by the showcase site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Frontend,
    Backend,
    #[serde(rename = "Full-Stack")]
    FullStack,
    Mobile,
    #[serde(rename = "UI/UX")]
    UiUx,
    #[serde(rename = "Game Dev")]
    GameDev,
    DevOps,
    #[serde(rename = "E-Commerce")]
    ECommerce,
    #[serde(rename = "AI/ML")]
    AiMl,
    Other,
}

impl Category {
    /// Get the wire representation of the category
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Frontend => "Frontend",
            Category::Backend => "Backend",
            Category::FullStack => "Full-Stack",
            Category::Mobile => "Mobile",
            Category::UiUx => "UI/UX",
            Category::GameDev => "Game Dev",
            Category::DevOps => "DevOps",
            Category::ECommerce => "E-Commerce",
            Category::AiMl => "AI/ML",
            Category::Other => "Other",
        }
    }

    /// Get all recognised categories
    pub fn all() -> &'static [Category] {
        &[
            Category::Frontend,
            Category::Backend,
            Category::FullStack,
            Category::Mobile,
            Category::UiUx,
            Category::GameDev,
            Category::DevOps,
            Category::ECommerce,
            Category::AiMl,
            Category::Other,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::all()
            .iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| CategoryParseError::UnknownCategory(s.to_string()))
    }
}

/// Errors that can occur when parsing categories
#[derive(Error, Debug, Clone)]
pub enum CategoryParseError {
    #[error("Unknown category: '{0}'. Recognised categories are: Frontend, Backend, Full-Stack, Mobile, UI/UX, Game Dev, DevOps, E-Commerce, AI/ML, Other")]
    UnknownCategory(String),
}
