//! Colors for game elements

/// RGBA, each channel 0.0..=1.0
pub type Color = [f32; 4];

pub const BACKGROUND: Color = [0.0, 0.0, 0.0, 1.0];
pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
pub const RED: Color = [1.0, 0.0, 0.0, 1.0];
pub const SHIP: Color = [0.2, 0.8, 0.4, 1.0];
pub const BULLET: Color = [1.0, 1.0, 0.6, 1.0];
