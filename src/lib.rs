//! Space Rocks - a field of drifting, rotating, fracturing rocks
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, rocks, bullets, collisions, tick)
//! - `renderer`: Drawable primitives and the renderer contract
//! - `platform`: Input and frame-pacing collaborators
//! - `settings`: Validated configuration
//! - `game`: The fixed-rate loop tying it all together

pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Visible field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;
    /// Distance past the visible field where entities are born and die
    pub const BORDER: f32 = 100.0;

    /// Default ticks per second
    pub const DEFAULT_TICK_RATE: f32 = 30.0;
    /// Slowest accepted tick rate (ticks per second)
    pub const MIN_TICK_RATE: f32 = 1.0;
    /// Default number of ambient Large rocks
    pub const DEFAULT_ROCK_COUNT: usize = 20;

    /// Every rock outline has this many vertices
    pub const ROCK_VERTEX_COUNT: usize = 12;
    /// Angle between consecutive rock vertices (degrees)
    pub const ROCK_SLICE_DEGREES: f32 = 360.0 / ROCK_VERTEX_COUNT as f32;

    /// Live bullet cap
    pub const MAX_BULLETS: usize = 10;
    /// Bullet speed (units per second)
    pub const BULLET_SPEED: f32 = 300.0;
    /// Ship turn rate while a direction key is held (degrees per second)
    pub const TURN_RATE: f32 = 180.0;
    /// Ship heading at start; points up the screen
    pub const INITIAL_HEADING: f32 = 180.0;

    /// Point-in-triangle area tolerance
    pub const AREA_TOLERANCE: f32 = 1.0;
}
