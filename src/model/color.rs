use std::fmt;

/// An sRGB display color with straight alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parses `RGB`, `RRGGBB` or `AARRGGBB`. Non-alphanumeric characters such
    /// as a leading `#` are ignored; anything unparseable is opaque black.
    pub fn from_hex(hex: &str) -> Self {
        let digits: String = hex.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
        let Ok(value) = u64::from_str_radix(&digits, 16) else {
            return Self::BLACK;
        };
        let byte = |shift: u32| ((value >> shift) & 0xFF) as u8;
        match digits.len() {
            3 => {
                let nibble = |shift: u32| (((value >> shift) & 0xF) * 17) as u8;
                Self::rgb(nibble(8), nibble(4), nibble(0))
            }
            6 => Self::rgb(byte(16), byte(8), byte(0)),
            8 => Self {
                a: byte(24),
                r: byte(16),
                g: byte(8),
                b: byte(0),
            },
            _ => Self::BLACK,
        }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
