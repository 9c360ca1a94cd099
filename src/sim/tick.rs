//! Fixed timestep simulation tick
//!
//! Advances the simulation one step. Order matters: every phase sees the
//! results of the phases before it and nothing is removed until the sweep.

use super::bullet::Bullet;
use super::collision::{Hit, resolve_bullet_hits, resolve_hazard_hits};
use super::rock::ExplosionStep;
use super::state::{EntityId, SimState};
use crate::consts::MAX_BULLETS;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Change to the ship heading (degrees)
    pub heading_delta: f32,
    /// Fire a bullet if under the cap
    pub fire: bool,
}

/// What a tick did, for logging and diagnostics
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickSummary {
    pub fired: Option<EntityId>,
    pub hits: Vec<Hit>,
    /// Fragments spawned by fracturing rocks
    pub fragments: usize,
    /// Rocks replaced after drifting out of the field
    pub replaced: usize,
    pub rocks_removed: usize,
    pub bullets_removed: usize,
}

/// Wrap an angle into [0, 360)
fn normalize_heading(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Advance the simulation by one tick
pub fn tick(state: &mut SimState, input: &TickInput) -> TickSummary {
    let mut summary = TickSummary::default();
    state.time_ticks += 1;

    // Steer and shoot
    state.heading = normalize_heading(state.heading + input.heading_delta);
    if input.fire {
        summary.fired = fire(state);
    }

    // Bullets fly
    for bullet in &mut state.bullets {
        bullet.move_step();
        bullet.check_onscreen(&state.field);
    }

    // Rocks drift and spin
    for rock in &mut state.rocks {
        rock.move_step();
        rock.collision = false;
    }

    // Hits
    summary.hits = resolve_bullet_hits(&mut state.rocks, &mut state.bullets);
    if state.settings.centre_hazard {
        let centre = state.field.centre();
        summary
            .hits
            .extend(resolve_hazard_hits(&mut state.rocks, centre));
    }
    for hit in &summary.hits {
        log::debug!("Rock {} hit by {:?}", hit.rock, hit.bullet);
    }

    // Exploding rocks stay until their animation ends, wherever they are
    for rock in state.rocks.iter_mut().filter(|r| !r.exploding) {
        rock.check_onscreen(&state.field);
    }

    summary.fragments = advance_explosions(state);

    sweep(state, &mut summary);

    summary
}

/// Spawn a bullet from the field centre along the ship heading
fn fire(state: &mut SimState) -> Option<EntityId> {
    if state.live_bullet_count() >= MAX_BULLETS {
        return None;
    }

    let id = state.next_entity_id();
    let bullet = Bullet::new(id, state.field.centre(), state.heading, &state.settings);
    state.bullets.push(bullet);
    log::debug!("Bullet {} fired at {:.1} degrees", id, state.heading);
    Some(id)
}

/// Step every exploding rock; fracturing rocks add two fragments each.
///
/// Fragments join after the pass so they are not stepped this tick.
fn advance_explosions(state: &mut SimState) -> usize {
    let mut fragments = Vec::new();

    for idx in 0..state.rocks.len() {
        if !state.rocks[idx].exploding {
            continue;
        }

        if let ExplosionStep::Fracture(size) = state.rocks[idx].advance_explosion(&state.settings)
        {
            for _ in 0..2 {
                let id = state.next_entity_id();
                let child =
                    state.rocks[idx].spawn_child(id, size, &state.settings, &mut state.rng);
                fragments.push(child);
            }
        }
    }

    let count = fragments.len();
    state.rocks.extend(fragments);
    count
}

/// Drop everything marked for removal; replace rocks that drifted away
fn sweep(state: &mut SimState, summary: &mut TickSummary) {
    let lost: Vec<_> = state
        .rocks
        .iter()
        .filter(|r| r.kill && !r.exploding)
        .map(|r| r.size)
        .collect();

    let before = state.rocks.len();
    state.rocks.retain(|r| !r.kill);
    summary.rocks_removed = before - state.rocks.len();

    let before = state.bullets.len();
    state.bullets.retain(|b| !b.kill);
    summary.bullets_removed = before - state.bullets.len();

    for size in lost {
        state.spawn_rock_on_side(size);
        summary.replaced += 1;
    }

    if summary.rocks_removed > 0 {
        log::debug!(
            "{} rocks removed, {} replaced, rocks left={}",
            summary.rocks_removed,
            summary.replaced,
            state.rocks.len()
        );
    }
}
