//! Input sources

use glam::Vec2;

use crate::consts::TURN_RATE;
use crate::settings::Settings;
use crate::sim::{SimState, TickInput};

/// Keys and buttons held this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub turn_left: bool,
    pub turn_right: bool,
    pub fire: bool,
    pub quit: bool,
}

impl InputState {
    /// Held keys as simulation commands
    pub fn to_tick_input(&self, settings: &Settings) -> TickInput {
        let step = settings.per_tick(TURN_RATE);
        let mut heading_delta = 0.0;
        if self.turn_left {
            heading_delta += step;
        }
        if self.turn_right {
            heading_delta -= step;
        }
        TickInput {
            heading_delta,
            fire: self.fire,
        }
    }
}

/// Anything that can report held keys once per tick
pub trait InputSource {
    /// Sample input; `state` is the simulation as of the end of the last tick
    fn poll(&mut self, state: &SimState) -> InputState;
}

/// Demo player: turns toward the nearest intact rock and fires when lined up.
/// Quits after `max_ticks` polls when set.
#[derive(Debug, Clone, Default)]
pub struct AutopilotInput {
    pub max_ticks: Option<u64>,
    polls: u64,
}

/// How far off target the autopilot still fires (degrees)
const FIRE_CONE: f32 = 10.0;

impl AutopilotInput {
    pub fn new(max_ticks: Option<u64>) -> Self {
        Self { max_ticks, polls: 0 }
    }
}

impl InputSource for AutopilotInput {
    fn poll(&mut self, state: &SimState) -> InputState {
        self.polls += 1;
        let quit = self.max_ticks.is_some_and(|max| self.polls > max);

        let centre = state.field.centre();
        let visible = |p: Vec2| {
            p.x >= 0.0 && p.x <= state.field.width && p.y >= 0.0 && p.y <= state.field.height
        };
        let target = state
            .rocks
            .iter()
            .filter(|r| !r.exploding && visible(r.pos))
            .min_by(|a, b| {
                a.pos
                    .distance_squared(centre)
                    .partial_cmp(&b.pos.distance_squared(centre))
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

        let Some(rock) = target else {
            return InputState {
                quit,
                ..Default::default()
            };
        };

        let off = angle_between(state.heading, heading_towards(centre, rock.pos));
        let step = state.settings.per_tick(TURN_RATE);
        InputState {
            turn_left: off > step / 2.0,
            turn_right: off < -step / 2.0,
            fire: off.abs() < FIRE_CONE,
            quit,
        }
    }
}

/// Heading (degrees) whose bullets travel from `from` toward `to`
pub fn heading_towards(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    d.x.atan2(d.y).to_degrees().rem_euclid(360.0)
}

/// Signed turn from heading `from` to heading `to`, in (-180, 180]
fn angle_between(from: f32, to: f32) -> f32 {
    let diff = (to - from).rem_euclid(360.0);
    if diff > 180.0 { diff - 360.0 } else { diff }
}
