//! Symbolic category icons
//!
//! Categories only carry an icon name. Turning it into something renderable
//! is the display layer's job.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Icon attached to a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryIcon {
    Home,
    Utensils,
    Car,
    ShoppingCart,
    Film,
    Shirt,
    HeartPulse,
    Plane,
    BookOpen,
    Gift,
    #[default]
    PlusCircle,
    Tag,
}

impl CategoryIcon {
    pub fn all() -> &'static [Self] {
        &[
            Self::Home,
            Self::Utensils,
            Self::Car,
            Self::ShoppingCart,
            Self::Film,
            Self::Shirt,
            Self::HeartPulse,
            Self::Plane,
            Self::BookOpen,
            Self::Gift,
            Self::PlusCircle,
            Self::Tag,
        ]
    }

    /// The kebab-case name used in files and on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Utensils => "utensils",
            Self::Car => "car",
            Self::ShoppingCart => "shopping-cart",
            Self::Film => "film",
            Self::Shirt => "shirt",
            Self::HeartPulse => "heart-pulse",
            Self::Plane => "plane",
            Self::BookOpen => "book-open",
            Self::Gift => "gift",
            Self::PlusCircle => "plus-circle",
            Self::Tag => "tag",
        }
    }
}

impl fmt::Display for CategoryIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CategoryIcon {
    type Err = UnknownIcon;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['_', ' '], "-");
        Self::all()
            .iter()
            .copied()
            .find(|icon| icon.name() == wanted)
            .ok_or_else(|| UnknownIcon(s.to_string()))
    }
}

/// Returned when an icon name is not recognized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownIcon(pub String);

impl fmt::Display for UnknownIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<_> = CategoryIcon::all().iter().map(|i| i.name()).collect();
        write!(f, "Unknown icon '{}' (expected one of: {})", self.0, names.join(", "))
    }
}

impl std::error::Error for UnknownIcon {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("home".parse::<CategoryIcon>().unwrap(), CategoryIcon::Home);
        assert_eq!(
            "Shopping_Cart".parse::<CategoryIcon>().unwrap(),
            CategoryIcon::ShoppingCart
        );
        assert_eq!(
            "heart pulse".parse::<CategoryIcon>().unwrap(),
            CategoryIcon::HeartPulse
        );
        assert!("rocket".parse::<CategoryIcon>().is_err());
    }

    #[test]
    fn test_names_round_trip() {
        for icon in CategoryIcon::all() {
            assert_eq!(icon.name().parse::<CategoryIcon>().unwrap(), *icon);
        }
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        let json = serde_json::to_string(&CategoryIcon::BookOpen).unwrap();
        assert_eq!(json, "\"book-open\"");
        assert_eq!(CategoryIcon::default(), CategoryIcon::PlusCircle);
    }
}
