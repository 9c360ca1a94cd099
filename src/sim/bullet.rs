//! Bullets: straight-line projectiles fired from the ship

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{rotate_about_origin, translate};
use super::state::{EntityId, Field};
use crate::consts::BULLET_SPEED;
use crate::settings::Settings;

/// A bullet entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub id: EntityId,
    pub pos: Vec2,
    /// Heading in degrees, fixed at creation
    pub angle: f32,
    /// Displacement per tick
    pub drift: Vec2,
    pub kill: bool,
}

impl Bullet {
    pub fn new(id: EntityId, origin: Vec2, angle: f32, settings: &Settings) -> Self {
        let speed = settings.per_tick(BULLET_SPEED);
        Self {
            id,
            pos: origin,
            angle,
            drift: rotate_about_origin(Vec2::new(0.0, speed), angle),
            kill: false,
        }
    }

    pub fn move_step(&mut self) {
        self.pos = translate(self.pos, self.drift);
    }

    pub fn check_onscreen(&mut self, field: &Field) {
        if !field.contains(self.pos) {
            self.kill = true;
        }
    }
}
