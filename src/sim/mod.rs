//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Seeded RNG only, passed explicitly
//! - Stable iteration order (creation order)
//! - No rendering or platform dependencies

pub mod bullet;
pub mod collision;
pub mod geometry;
pub mod rock;
pub mod state;
pub mod tick;

pub use bullet::Bullet;
pub use collision::{Hit, resolve_bullet_hits, resolve_hazard_hits};
pub use rock::{ExplosionStep, Rock, SizeClass};
pub use state::{EntityId, Field, SimState};
pub use tick::{TickInput, TickSummary, tick};
