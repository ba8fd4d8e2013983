use std::ops::{Add, Mul};

/// Brightness ramp, darkest first.
pub const GLYPHS: [char; 11] = [' ', '.', ',', '-', ':', '+', '=', '*', '%', '@', '#'];

/// Scalar light intensity.
///
/// The value is unbounded while shading terms are summed up and only gets
/// clamped into `[0, 1]` when it is quantized to a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Shade {
    pub value: f32,
}

impl Shade {
    pub fn new(value: f32) -> Self {
        Self { value }
    }

    pub fn add(self, other: Shade) -> Shade {
        Shade::new(self.value + other.value)
    }

    pub fn scale(self, scalar: f32) -> Shade {
        Shade::new(self.value * scalar)
    }

    // Clamp into [0, 1]; NaN collapses to 0
    pub fn normalize(self) -> Shade {
        Shade::new(self.value.max(0.0).min(1.0))
    }

    pub fn glyph_index(self) -> usize {
        let steps = (GLYPHS.len() - 1) as f32;
        (self.normalize().value * steps) as usize
    }

    pub fn to_glyph(self) -> char {
        GLYPHS[self.glyph_index()]
    }

    /// Representative shade of a glyph, the lower edge of its bucket.
    pub fn from_glyph(glyph: char) -> Option<Shade> {
        let steps = (GLYPHS.len() - 1) as f32;
        GLYPHS
            .iter()
            .position(|&g| g == glyph)
            .map(|index| Shade::new(index as f32 / steps))
    }
}

impl Add for Shade {
    type Output = Shade;

    fn add(self, other: Shade) -> Self::Output {
        Shade::add(self, other)
    }
}

impl Mul<f32> for Shade {
    type Output = Shade;

    fn mul(self, scalar: f32) -> Self::Output {
        self.scale(scalar)
    }
}
