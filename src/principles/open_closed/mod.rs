//! Open/Closed: filtering a product catalog.
//!
//! [`before::ProductFilter`] grows a new method for every criterion.
//! [`after`] closes the filter against modification: a new criterion is a new
//! [`after::Specification`] implementation and nothing else changes.

pub mod after;
pub mod before;

use crate::domain::ports::Console;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Orange,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => f.write_str("red"),
            Color::Green => f.write_str("green"),
            Color::Orange => f.write_str("orange"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Size::Small => f.write_str("small"),
            Size::Medium => f.write_str("medium"),
            Size::Large => f.write_str("large"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub color: Color,
    pub size: Size,
}

impl Product {
    pub fn new(name: impl Into<String>, color: Color, size: Size) -> Self {
        Self {
            name: name.into(),
            color,
            size,
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is {} and {}", self.name, self.color, self.size)
    }
}

pub fn sample_catalog() -> Vec<Product> {
    vec![
        Product::new("Chilly", Color::Green, Size::Small),
        Product::new("Apple", Color::Red, Size::Small),
        Product::new("Jackfruit", Color::Green, Size::Medium),
        Product::new("Pumkin", Color::Orange, Size::Large),
        Product::new("Coriander", Color::Green, Size::Small),
    ]
}

pub(crate) fn print_products<'a>(
    console: &dyn Console,
    heading: &str,
    products: impl IntoIterator<Item = &'a Product>,
) {
    console.print(heading);
    for product in products {
        console.print(&format!("- {}", product));
    }
}
