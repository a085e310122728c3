//! Form field value objects

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fields of the order form, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    FullName,
    Size,
    Toppings,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::FullName, Field::Size, Field::Toppings];

    /// Wire/schema name of the field
    pub fn name(&self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Size => "size",
            Self::Toppings => "toppings",
        }
    }

    /// Label shown above the field
    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Size => "Size",
            Self::Toppings => "Toppings",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pizza size as sent to the order service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PizzaSize {
    #[serde(rename = "S")]
    Small,
    #[serde(rename = "M")]
    Medium,
    #[serde(rename = "L")]
    Large,
}

impl PizzaSize {
    pub const ALL: [PizzaSize; 3] = [PizzaSize::Small, PizzaSize::Medium, PizzaSize::Large];

    pub fn code(&self) -> &'static str {
        match self {
            Self::Small => "S",
            Self::Medium => "M",
            Self::Large => "L",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        }
    }

    /// Parse a size code; only the exact codes `S`, `M` and `L` are accepted
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }
}

/// Selectable size values in cycling order; the empty string is the placeholder
pub const SIZE_CHOICES: [&str; 4] = ["", "S", "M", "L"];

/// Placeholder shown while no size is chosen
pub const SIZE_PLACEHOLDER: &str = "----Choose Size----";

/// Display text for a raw size value
pub fn size_display(value: &str) -> &'static str {
    PizzaSize::from_code(value)
        .map(|s| s.label())
        .unwrap_or(SIZE_PLACEHOLDER)
}

/// A topping from the fixed catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topping {
    pub id: &'static str,
    pub label: &'static str,
}

/// Fixed topping catalog
pub const TOPPINGS: [Topping; 5] = [
    Topping {
        id: "1",
        label: "Pepperoni",
    },
    Topping {
        id: "2",
        label: "Green Peppers",
    },
    Topping {
        id: "3",
        label: "Pineapple",
    },
    Topping {
        id: "4",
        label: "Mushrooms",
    },
    Topping {
        id: "5",
        label: "Ham",
    },
];

/// Look up a topping by id
pub fn topping(id: &str) -> Option<&'static Topping> {
    TOPPINGS.iter().find(|t| t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_match_wire_names() {
        assert_eq!(Field::FullName.name(), "fullName");
        assert_eq!(Field::Size.name(), "size");
        assert_eq!(Field::Toppings.name(), "toppings");
        assert_eq!(Field::FullName.to_string(), "fullName");
    }

    #[test]
    fn test_size_from_code_is_exact() {
        assert_eq!(PizzaSize::from_code("S"), Some(PizzaSize::Small));
        assert_eq!(PizzaSize::from_code("M"), Some(PizzaSize::Medium));
        assert_eq!(PizzaSize::from_code("L"), Some(PizzaSize::Large));
        assert_eq!(PizzaSize::from_code("s"), None);
        assert_eq!(PizzaSize::from_code("XL"), None);
        assert_eq!(PizzaSize::from_code(""), None);
    }

    #[test]
    fn test_size_display_falls_back_to_placeholder() {
        assert_eq!(size_display("M"), "Medium");
        assert_eq!(size_display(""), SIZE_PLACEHOLDER);
    }

    #[test]
    fn test_size_serializes_as_code() {
        let json = serde_json::to_string(&PizzaSize::Large).unwrap();
        assert_eq!(json, "\"L\"");
    }

    #[test]
    fn test_topping_catalog() {
        assert_eq!(TOPPINGS.len(), 5);
        assert_eq!(topping("3").map(|t| t.label), Some("Pineapple"));
        assert!(topping("6").is_none());
    }
}
