//! Spending category model
//!
//! A category is a user-defined label that expenses are grouped under. It
//! carries an icon and a color token used by charts and legends.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::icon::CategoryIcon;
use super::ids::CategoryId;

/// Color used when a category is created without one
pub const DEFAULT_CATEGORY_COLOR: &str = "#cccccc";

/// Longest accepted category name, in characters
pub const MAX_CATEGORY_NAME_LEN: usize = 50;

/// A spending category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Display name
    pub name: String,

    /// Symbolic icon
    #[serde(default)]
    pub icon: CategoryIcon,

    /// Color token for charts and legends (e.g. "hsl(var(--chart-1))")
    pub color: String,
}

impl Category {
    /// Create a category with a fresh ID
    pub fn new(name: impl Into<String>, icon: CategoryIcon, color: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            icon,
            color: color.into(),
        }
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        validate_fields(&self.name, &self.color)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The data needed to create a category (a category without its ID)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
    #[serde(default)]
    pub icon: CategoryIcon,
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    DEFAULT_CATEGORY_COLOR.to_string()
}

impl NewCategory {
    /// New category data with the default icon and color
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: CategoryIcon::default(),
            color: default_color(),
        }
    }

    pub fn with_icon(mut self, icon: CategoryIcon) -> Self {
        self.icon = icon;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Assign an ID, trimming the name and color
    pub fn into_category(self, id: CategoryId) -> Category {
        Category {
            id,
            name: self.name.trim().to_string(),
            icon: self.icon,
            color: self.color.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        validate_fields(&self.name, &self.color)
    }
}

fn validate_fields(name: &str, color: &str) -> Result<(), CategoryValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CategoryValidationError::EmptyName);
    }

    let len = name.chars().count();
    if len > MAX_CATEGORY_NAME_LEN {
        return Err(CategoryValidationError::NameTooLong(len));
    }

    if color.trim().is_empty() {
        return Err(CategoryValidationError::EmptyColor);
    }

    Ok(())
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
    EmptyColor,
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => write!(
                f,
                "Category name too long ({} chars, max {})",
                len, MAX_CATEGORY_NAME_LEN
            ),
            Self::EmptyColor => write!(f, "Category color cannot be empty"),
        }
    }
}

impl std::error::Error for CategoryValidationError {}
