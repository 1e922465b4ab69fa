//! Catalog record types
//!
//! This module defines the tagged record structure stored in catalogs,
//! together with the closed color and size tag sets.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when parsing a tag value from text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tag value: '{0}'")]
pub struct ParseTagError(pub String);

/// Color tag of a record
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red = 0,
    Green = 1,
    Blue = 2,
}

impl Color {
    /// Wire tag of this color
    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Decode a wire tag, `None` if the byte is not a valid color
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(Self::Red),
            1 => Some(Self::Green),
            2 => Some(Self::Blue),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Color {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("red") {
            Ok(Self::Red)
        } else if s.eq_ignore_ascii_case("green") {
            Ok(Self::Green)
        } else if s.eq_ignore_ascii_case("blue") {
            Ok(Self::Blue)
        } else {
            Err(ParseTagError(s.to_string()))
        }
    }
}

/// Size tag of a record
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Size {
    Small = 0,
    Medium = 1,
    Large = 2,
}

impl Size {
    /// Wire tag of this size
    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Decode a wire tag, `None` if the byte is not a valid size
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(Self::Small),
            1 => Some(Self::Medium),
            2 => Some(Self::Large),
            _ => None,
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Size {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("small") {
            Ok(Self::Small)
        } else if s.eq_ignore_ascii_case("medium") {
            Ok(Self::Medium)
        } else if s.eq_ignore_ascii_case("large") {
            Ok(Self::Large)
        } else {
            Err(ParseTagError(s.to_string()))
        }
    }
}

/// A tagged catalog record
///
/// Immutable once constructed. Catalogs own records in a flat `Vec` with
/// no ordering guarantee of their own; sortedness is tracked per file via
/// header flags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    /// Display name of the record
    pub name: String,
    /// Color tag
    pub color: Color,
    /// Size tag
    pub size: Size,
}

impl Record {
    /// Create a new record
    pub fn new(name: impl Into<String>, color: Color, size: Size) -> Self {
        Self {
            name: name.into(),
            color,
            size,
        }
    }

    /// Sort key used by catalog sorting: (name, color tag, size tag)
    pub fn sort_key(&self) -> (&str, u8, u8) {
        (self.name.as_str(), self.color.tag(), self.size.tag())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.color, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_tag_roundtrip() {
        for color in [Color::Red, Color::Green, Color::Blue] {
            assert_eq!(Color::from_tag(color.tag()), Some(color));
        }
    }

    #[test]
    fn test_color_invalid_tag() {
        assert_eq!(Color::from_tag(3), None);
        assert_eq!(Color::from_tag(255), None);
    }

    #[test]
    fn test_size_tag_roundtrip() {
        for size in [Size::Small, Size::Medium, Size::Large] {
            assert_eq!(Size::from_tag(size.tag()), Some(size));
        }
    }

    #[test]
    fn test_size_invalid_tag() {
        assert_eq!(Size::from_tag(3), None);
    }

    #[test]
    fn test_color_from_str() {
        assert_eq!("red".parse::<Color>(), Ok(Color::Red));
        assert_eq!("GREEN".parse::<Color>(), Ok(Color::Green));
        assert_eq!("Blue".parse::<Color>(), Ok(Color::Blue));
        assert!("purple".parse::<Color>().is_err());
    }

    #[test]
    fn test_size_from_str() {
        assert_eq!("small".parse::<Size>(), Ok(Size::Small));
        assert_eq!("MEDIUM".parse::<Size>(), Ok(Size::Medium));
        assert_eq!("Large".parse::<Size>(), Ok(Size::Large));
        assert!("tiny".parse::<Size>().is_err());
    }

    #[test]
    fn test_display_roundtrip_via_from_str() {
        for color in [Color::Red, Color::Green, Color::Blue] {
            assert_eq!(color.to_string().parse::<Color>(), Ok(color));
        }
        for size in [Size::Small, Size::Medium, Size::Large] {
            assert_eq!(size.to_string().parse::<Size>(), Ok(size));
        }
    }

    #[test]
    fn test_record_new() {
        let record = Record::new("apple", Color::Green, Size::Small);
        assert_eq!(record.name, "apple");
        assert_eq!(record.color, Color::Green);
        assert_eq!(record.size, Size::Small);
    }

    #[test]
    fn test_record_display() {
        let record = Record::new("house", Color::Blue, Size::Large);
        assert_eq!(record.to_string(), "house (blue, large)");
    }

    #[test]
    fn test_sort_key_orders_by_name_first() {
        let a = Record::new("apple", Color::Red, Size::Large);
        let b = Record::new("banana", Color::Blue, Size::Small);
        assert!(a.sort_key() < b.sort_key());
    }
}
