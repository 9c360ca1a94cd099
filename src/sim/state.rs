//! Simulation state and the play field
//!
//! All state the tick mutates lives here, owned by a single `SimState`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bullet::Bullet;
use super::rock::{Rock, SizeClass};
use crate::consts::INITIAL_HEADING;
use crate::error::ConfigError;
use crate::settings::Settings;

/// Stable entity identifier, unique within one `SimState`
pub type EntityId = u32;

/// Visible field plus the dead zone around it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
    pub border: f32,
}

impl Field {
    pub fn new(settings: &Settings) -> Self {
        Self {
            width: settings.field_width,
            height: settings.field_height,
            border: settings.border,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        -self.border
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.width + self.border
    }

    #[inline]
    pub fn top(&self) -> f32 {
        -self.border
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.height + self.border
    }

    pub fn centre(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Is `p` inside the dead zone (edges included)?
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.top() && p.y <= self.bottom()
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct SimState {
    pub settings: Settings,
    pub field: Field,
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Ship heading in degrees
    pub heading: f32,
    /// Active rocks (creation order)
    pub rocks: Vec<Rock>,
    /// Active bullets (creation order)
    pub bullets: Vec<Bullet>,
    /// Next entity ID
    next_id: EntityId,
}

impl SimState {
    /// Validate `settings` and populate the field with Large rocks
    pub fn new(settings: Settings, seed: u64) -> Result<Self, ConfigError> {
        settings.validate()?;

        let mut state = Self {
            field: Field::new(&settings),
            settings,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            heading: INITIAL_HEADING,
            rocks: Vec::new(),
            bullets: Vec::new(),
            next_id: 1,
        };

        for _ in 0..state.settings.rock_count {
            state.spawn_rock_on_side(SizeClass::Large);
        }
        log::info!(
            "Field {}x{} populated with {} rocks (seed {})",
            state.field.width,
            state.field.height,
            state.rocks.len(),
            seed
        );

        Ok(state)
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Create a rock and place it on a random side of the field
    pub fn spawn_rock_on_side(&mut self, size: SizeClass) -> EntityId {
        let id = self.next_entity_id();
        let mut rock = Rock::new(id, size, &self.settings, &mut self.rng);
        rock.place_on_side(&self.field, &self.settings, &mut self.rng);
        self.rocks.push(rock);
        id
    }

    /// Rocks that are not exploding
    pub fn ambient_rock_count(&self) -> usize {
        self.rocks.iter().filter(|r| !r.exploding).count()
    }

    pub fn live_bullet_count(&self) -> usize {
        self.bullets.iter().filter(|b| !b.kill).count()
    }
}
