use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occasion {
    Casual,
    Formal,
    Party,
    Work,
    Outdoor,
}

impl Occasion {
    pub const ALL: [Occasion; 5] = [
        Occasion::Casual,
        Occasion::Formal,
        Occasion::Party,
        Occasion::Work,
        Occasion::Outdoor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Occasion::Casual => "Casual",
            Occasion::Formal => "Formal",
            Occasion::Party => "Party",
            Occasion::Work => "Work",
            Occasion::Outdoor => "Outdoor",
        }
    }

    pub fn label(&self) -> &'static str {
        self.as_str()
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Occasion::Casual => "sun.max.fill",
            Occasion::Formal => "briefcase.fill",
            Occasion::Party => "star.fill",
            Occasion::Work => "laptopcomputer",
            Occasion::Outdoor => "leaf.fill",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Occasion::Casual => Color::rgb(0xFF, 0xD8, 0x9B),
            Occasion::Formal => Color::rgb(0xC4, 0xC4, 0xE8),
            Occasion::Party => Color::rgb(0xFF, 0xB3, 0xC6),
            Occasion::Work => Color::rgb(0xB3, 0xD9, 0xC4),
            Occasion::Outdoor => Color::rgb(0xA8, 0xD5, 0xA2),
        }
    }
}

impl fmt::Display for Occasion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Occasion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "casual" => Ok(Occasion::Casual),
            "formal" => Ok(Occasion::Formal),
            "party" => Ok(Occasion::Party),
            "work" => Ok(Occasion::Work),
            "outdoor" => Ok(Occasion::Outdoor),
            _ => Err(format!("Unknown occasion: {s}")),
        }
    }
}
