/// An RGBA color as stored in a decoded image.
///
/// Alpha only decides whether a motif pixel is cared about. Comparisons between
/// motif and place go through [`Color::same_rgb`], which ignores it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const SIZE: usize = 4;

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Unpack a `0xAARRGGBB` value.
    pub const fn from_argb(v: u32) -> Self {
        Self {
            a: (v >> 24) as u8,
            r: (v >> 16) as u8,
            g: (v >> 8) as u8,
            b: v as u8,
        }
    }

    pub const fn from_bytes(b: [u8; 4]) -> Self {
        Self {
            r: b[0],
            g: b[1],
            b: b[2],
            a: b[3],
        }
    }

    /// `0xRRGGBB`, alpha stripped.
    pub const fn to_rgb(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    pub const fn is_transparent(&self) -> bool {
        self.a == 0
    }

    pub const fn same_rgb(&self, other: &Color) -> bool {
        self.r == other.r && self.g == other.g && self.b == other.b
    }

    /// `#RRGGBB`, uppercase, no alpha.
    pub fn to_hex(&self) -> String {
        format!("#{:06X}", self.to_rgb())
    }
}
