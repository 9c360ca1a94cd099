//! Shape generation: simulation state to draw commands

use glam::{IVec2, Vec2};

use super::DrawCommand;
use super::colors::{self, Color};
use crate::sim::geometry::{rotate_about_point, round_to_int, scale, scale_about, translate};
use crate::sim::{Bullet, Rock, SimState};

/// Ship outline at unit size, nose along heading 0
const SHIP_OUTLINE: [Vec2; 3] = [
    Vec2::new(0.0, 1.5),
    Vec2::new(-0.9, -1.0),
    Vec2::new(0.9, -1.0),
];
const SHIP_SCALE: f32 = 8.0;

const DEBRIS_RADIUS: u32 = 4;
const BULLET_RADIUS: u32 = 2;

/// Everything visible this tick, back to front
pub fn build_frame(state: &SimState, fps: f32) -> Vec<DrawCommand> {
    let mono = state.settings.monochrome;
    let mut frame = Vec::new();

    for rock in &state.rocks {
        if rock.exploding {
            debris(rock, state.settings.target_tick_rate, mono, &mut frame);
        } else {
            rock_fan(rock, mono, &mut frame);
        }
    }

    for bullet in &state.bullets {
        frame.push(bullet_dot(bullet, mono));
    }

    frame.push(ship(state.field.centre(), state.heading, mono));

    if state.settings.debug {
        frame.push(DrawCommand::Circle {
            center: round_to_int(state.field.centre()),
            radius: 2,
            color: colors::RED,
        });
        frame.push(DrawCommand::Text {
            text: format!("FPS = {}", fps.round() as i64),
            pos: IVec2::new(10, 10),
            color: colors::WHITE,
        });
        if state.rocks.iter().any(|r| r.collision) {
            frame.push(DrawCommand::Text {
                text: "Collision".to_string(),
                pos: IVec2::new(10, 35),
                color: colors::RED,
            });
        }
    }

    frame
}

fn pick(color: Color, mono: bool) -> Color {
    if mono { colors::WHITE } else { color }
}

/// A live rock as twelve triangles sharing its centre
fn rock_fan(rock: &Rock, mono: bool, out: &mut Vec<DrawCommand>) {
    let color = pick(rock.color, mono);
    for triangle in rock.fan() {
        out.push(DrawCommand::Polygon {
            points: triangle.iter().map(|&p| round_to_int(p)).collect(),
            color,
        });
    }
}

/// An exploding rock as its vertices flying outward
fn debris(rock: &Rock, tick_rate: f32, mono: bool, out: &mut Vec<DrawCommand>) {
    // Higher tick rates mean more steps, so less spread per step
    let spread = 5.0 * rock.explosion_step as f32 / tick_rate;
    let radius = if mono { 1 } else { DEBRIS_RADIUS };
    let color = pick(rock.color, mono);

    for &v in &rock.vertices {
        out.push(DrawCommand::Circle {
            center: round_to_int(rock.position_of(scale(v, spread))),
            radius,
            color,
        });
    }
}

fn bullet_dot(bullet: &Bullet, mono: bool) -> DrawCommand {
    DrawCommand::Circle {
        center: round_to_int(bullet.pos),
        radius: BULLET_RADIUS,
        color: pick(colors::BULLET, mono),
    }
}

/// Ship marker at `centre`, pointing along `heading`
fn ship(centre: Vec2, heading: f32, mono: bool) -> DrawCommand {
    let points = SHIP_OUTLINE
        .iter()
        .map(|&p| {
            let p = scale_about(translate(p, centre), centre, SHIP_SCALE);
            round_to_int(rotate_about_point(p, centre, heading))
        })
        .collect();

    DrawCommand::Polygon {
        points,
        color: pick(colors::SHIP, mono),
    }
}
