use serde::{Deserialize, Serialize};

/// One palette entry. Alpha is applied at render time via `rgba`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Fixed chart palette, indexed by a series' `color_index`.
///
/// Indices wrap modulo the palette length, so the same sorted series
/// position always renders the same color across rebuilds.
pub const PALETTE: [Color; 10] = [
    Color { r: 54, g: 162, b: 235 },  // blue
    Color { r: 255, g: 99, b: 132 },  // red
    Color { r: 255, g: 206, b: 86 },  // yellow
    Color { r: 75, g: 192, b: 192 },  // teal
    Color { r: 153, g: 102, b: 255 }, // purple
    Color { r: 255, g: 159, b: 64 },  // orange
    Color { r: 201, g: 203, b: 207 }, // grey
    Color { r: 111, g: 214, b: 155 }, // green
    Color { r: 204, g: 102, b: 153 }, // pink
    Color { r: 95, g: 162, b: 206 },  // light blue
];

impl Color {
    /// Palette color for a series index (wraps past the palette length).
    #[must_use]
    pub fn for_index(index: usize) -> Color {
        PALETTE[index % PALETTE.len()]
    }

    /// CSS `rgba(...)` string with the given opacity.
    #[must_use]
    pub fn rgba(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }

    /// Fill color for bar segments and area fills (70% opacity).
    #[must_use]
    pub fn fill(&self) -> String {
        self.rgba(0.7)
    }

    /// Border / line stroke color (fully opaque).
    #[must_use]
    pub fn border(&self) -> String {
        self.rgba(1.0)
    }
}
