use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClothingCategory {
    Tops,
    Pants,
    Jeans,
    Dresses,
    Shoes,
    Accessories,
    Misc,
}

impl ClothingCategory {
    pub const ALL: [ClothingCategory; 7] = [
        ClothingCategory::Tops,
        ClothingCategory::Pants,
        ClothingCategory::Jeans,
        ClothingCategory::Dresses,
        ClothingCategory::Shoes,
        ClothingCategory::Accessories,
        ClothingCategory::Misc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClothingCategory::Tops => "Tops",
            ClothingCategory::Pants => "Pants",
            ClothingCategory::Jeans => "Jeans",
            ClothingCategory::Dresses => "Dresses",
            ClothingCategory::Shoes => "Shoes",
            ClothingCategory::Accessories => "Accessories",
            ClothingCategory::Misc => "Misc",
        }
    }

    pub fn label(&self) -> &'static str {
        self.as_str()
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ClothingCategory::Tops => "tshirt.fill",
            ClothingCategory::Pants => "rectangle.split.1x2.fill",
            ClothingCategory::Jeans => "rectangle.fill",
            ClothingCategory::Dresses => "person.fill",
            ClothingCategory::Shoes => "shoeprints.fill",
            ClothingCategory::Accessories => "bag.fill",
            ClothingCategory::Misc => "square.grid.2x2.fill",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            ClothingCategory::Tops => Color::rgb(0xE8, 0xC4, 0xC4),
            ClothingCategory::Pants => Color::rgb(0xC4, 0xD4, 0xE8),
            ClothingCategory::Jeans => Color::rgb(0xA8, 0xBD, 0xD4),
            ClothingCategory::Dresses => Color::rgb(0xE8, 0xC4, 0xD8),
            ClothingCategory::Shoes => Color::rgb(0xD4, 0xC4, 0xE8),
            ClothingCategory::Accessories => Color::rgb(0xC4, 0xE8, 0xD8),
            ClothingCategory::Misc => Color::rgb(0xE8, 0xE4, 0xC4),
        }
    }
}

impl fmt::Display for ClothingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClothingCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tops" => Ok(ClothingCategory::Tops),
            "pants" => Ok(ClothingCategory::Pants),
            "jeans" => Ok(ClothingCategory::Jeans),
            "dresses" => Ok(ClothingCategory::Dresses),
            "shoes" => Ok(ClothingCategory::Shoes),
            "accessories" => Ok(ClothingCategory::Accessories),
            "misc" | "miscellaneous" => Ok(ClothingCategory::Misc),
            _ => Err(format!("Unknown clothing category: {s}")),
        }
    }
}
