//! Polygon fill colors and where they come from.

use bevy::prelude::Color;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Opaque RGB fill color, every channel in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolygonColor {
    r: f32,
    g: f32,
    b: f32,
}

impl PolygonColor {
    /// Channels outside `[0, 1]` (and NaN) are clamped into range
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
        }
    }

    pub fn r(&self) -> f32 {
        self.r
    }

    pub fn g(&self) -> f32 {
        self.g
    }

    pub fn b(&self) -> f32 {
        self.b
    }
}

fn clamp_channel(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

impl From<PolygonColor> for Color {
    fn from(color: PolygonColor) -> Self {
        Color::srgb(color.r(), color.g(), color.b())
    }
}

/// Supplies the fill color for each newly completed polygon
pub trait ColorSource {
    fn next_color(&mut self) -> PolygonColor;
}

/// Uniformly random channels from the thread-local generator
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomColors;

impl ColorSource for RandomColors {
    fn next_color(&mut self) -> PolygonColor {
        let mut rng = rand::rng();
        PolygonColor::new(rng.random(), rng.random(), rng.random())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_in_range_channels() {
        let color = PolygonColor::new(0.25, 0.5, 1.0);
        assert_eq!(color.r(), 0.25);
        assert_eq!(color.g(), 0.5);
        assert_eq!(color.b(), 1.0);
    }

    #[test]
    fn test_new_clamps_out_of_range_channels() {
        let color = PolygonColor::new(-0.5, 1.5, f32::NAN);
        assert_eq!(color, PolygonColor::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_random_colors_stay_in_range() {
        let mut colors = RandomColors;
        for _ in 0..100 {
            let c = colors.next_color();
            for channel in [c.r(), c.g(), c.b()] {
                assert!((0.0..=1.0).contains(&channel));
            }
        }
    }

    #[test]
    fn test_conversion_to_bevy_color() {
        let color: Color = PolygonColor::new(1.0, 0.0, 0.5).into();
        let srgba = color.to_srgba();
        assert_eq!(srgba.red, 1.0);
        assert_eq!(srgba.green, 0.0);
        assert_eq!(srgba.blue, 0.5);
        assert_eq!(srgba.alpha, 1.0);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let color = PolygonColor::new(0.1, 0.2, 0.3);
        let json = serde_json::to_string(&color).unwrap();
        let parsed: PolygonColor = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, color);
    }
}
