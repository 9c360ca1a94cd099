//! Bullet vs. rock hit resolution
//!
//! Point-in-rock testing itself lives on `Rock`; this module decides which
//! rocks get tested against which points each tick and applies the results.

use glam::Vec2;

use super::bullet::Bullet;
use super::rock::Rock;
use super::state::EntityId;

/// A rock that started exploding this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub rock: EntityId,
    /// The bullet that hit it, or `None` for the centre hazard
    pub bullet: Option<EntityId>,
}

/// Test every non-exploding rock against every live bullet.
///
/// The first bullet to hit a rock starts its explosion and is spent; the
/// rock is not tested again this tick and a spent bullet hits nothing else.
pub fn resolve_bullet_hits(rocks: &mut [Rock], bullets: &mut [Bullet]) -> Vec<Hit> {
    let mut hits = Vec::new();

    for rock in rocks.iter_mut().filter(|r| !r.exploding) {
        for bullet in bullets.iter_mut().filter(|b| !b.kill) {
            if rock.check_collision(bullet.pos) {
                rock.start_explosion();
                bullet.kill = true;
                hits.push(Hit {
                    rock: rock.id,
                    bullet: Some(bullet.id),
                });
                break;
            }
        }
    }

    hits
}

/// Explode any non-exploding rock that covers `point`
pub fn resolve_hazard_hits(rocks: &mut [Rock], point: Vec2) -> Vec<Hit> {
    let mut hits = Vec::new();

    for rock in rocks.iter_mut().filter(|r| !r.exploding) {
        if rock.check_collision(point) {
            rock.start_explosion();
            hits.push(Hit {
                rock: rock.id,
                bullet: None,
            });
        }
    }

    hits
}
