//! Rocks: jittered 12-gons that drift, spin, and fracture
//!
//! A rock's outline is fixed at creation in its own local space. Its pose
//! (position + rotation) changes every tick and is applied on the fly for
//! both drawing and collision.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometry::{point_in_triangle, rotate_about_origin, translate};
use super::state::{EntityId, Field};
use crate::consts::{ROCK_SLICE_DEGREES, ROCK_VERTEX_COUNT};
use crate::settings::Settings;

/// Rock size class; fixed for a rock's lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeClass {
    Large,
    Medium,
    Small,
}

impl SizeClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            SizeClass::Large => "Large",
            SizeClass::Medium => "Medium",
            SizeClass::Small => "Small",
        }
    }

    /// Inclusive radius range
    pub fn radius_range(&self) -> (i32, i32) {
        match self {
            SizeClass::Large => (30, 50),
            SizeClass::Medium => (15, 25),
            SizeClass::Small => (10, 15),
        }
    }

    /// Largest radial jitter applied to any vertex
    pub fn max_jitter(&self) -> i32 {
        match self {
            SizeClass::Large => 15,
            SizeClass::Medium => 7,
            SizeClass::Small => 5,
        }
    }

    /// Size of the two rocks this one breaks into, if any
    pub fn child(&self) -> Option<SizeClass> {
        match self {
            SizeClass::Large => Some(SizeClass::Medium),
            SizeClass::Medium => Some(SizeClass::Small),
            SizeClass::Small => None,
        }
    }
}

/// What happened when an exploding rock advanced one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplosionStep {
    /// Debris still flying
    Animating,
    /// Time to fracture into two rocks of this size
    Fracture(SizeClass),
    /// Animation over; the rock is marked for removal
    Finished,
}

/// A rock entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rock {
    pub id: EntityId,
    pub size: SizeClass,
    pub radius: i32,
    /// Outline in local space, unrotated
    pub vertices: [Vec2; ROCK_VERTEX_COUNT],
    pub pos: Vec2,
    /// Heading in degrees
    pub rotation: f32,
    /// Degrees per tick; never zero
    pub rotation_speed: i32,
    /// Displacement per tick
    pub drift: Vec2,
    pub color: [f32; 4],
    /// Set when the last collision check hit
    pub collision: bool,
    pub exploding: bool,
    pub explosion_step: u32,
    pub kill: bool,
}

impl Rock {
    /// Build a rock of the given size at the origin, not yet placed
    pub fn new(id: EntityId, size: SizeClass, settings: &Settings, rng: &mut impl Rng) -> Self {
        let (min_r, max_r) = size.radius_range();
        let radius = rng.random_range(min_r..=max_r);

        let max_spin = (100.0 / settings.target_tick_rate).ceil() as i32;
        let mut rotation_speed = rng.random_range(-max_spin..=max_spin);
        if rotation_speed == 0 {
            // A motionless rock looks dead
            rotation_speed = 1;
        }

        let jitter = size.max_jitter();
        let vertices: [Vec2; ROCK_VERTEX_COUNT] = std::array::from_fn(|k| {
            let r = radius + rng.random_range(-jitter..=jitter);
            rotate_about_origin(Vec2::new(0.0, r as f32), ROCK_SLICE_DEGREES * k as f32)
        });

        let color = [
            rng.random_range(60..=200u8) as f32 / 255.0,
            rng.random_range(60..=200u8) as f32 / 255.0,
            rng.random_range(60..=200u8) as f32 / 255.0,
            1.0,
        ];

        log::debug!("{} rock {} created", size.as_str(), id);

        Self {
            id,
            size,
            radius,
            vertices,
            pos: Vec2::ZERO,
            rotation: 0.0,
            rotation_speed,
            drift: Vec2::ZERO,
            color,
            collision: false,
            exploding: false,
            explosion_step: 0,
            kill: false,
        }
    }

    /// Put the rock on a random edge of the dead zone, drifting into the field.
    ///
    /// Top/bottom rocks drift toward the far half horizontally; left/right
    /// rocks start in the middle third of the height.
    pub fn place_on_side(&mut self, field: &Field, settings: &Settings, rng: &mut impl Rng) {
        match rng.random_range(0..4) {
            // Top
            0 => {
                let x = edge_offset(field, rng);
                let dx = toward_middle(x, field, settings, rng);
                self.pos = Vec2::new(x, field.top());
                self.drift = Vec2::new(dx, drift_speed(settings, 2, 4, rng));
            }
            // Bottom
            1 => {
                let x = edge_offset(field, rng);
                let dx = toward_middle(x, field, settings, rng);
                self.pos = Vec2::new(x, field.bottom());
                self.drift = Vec2::new(dx, drift_speed(settings, -4, -2, rng));
            }
            // Left
            2 => {
                let y = rng.random_range(field.height / 3.0..=field.height * 2.0 / 3.0);
                self.pos = Vec2::new(field.left(), y);
                self.drift = Vec2::new(
                    drift_speed(settings, 2, 4, rng),
                    drift_speed(settings, -3, 3, rng),
                );
            }
            // Right
            _ => {
                let y = rng.random_range(field.height / 3.0..=field.height * 2.0 / 3.0);
                self.pos = Vec2::new(field.right(), y);
                self.drift = Vec2::new(
                    drift_speed(settings, -4, -2, rng),
                    drift_speed(settings, -3, 3, rng),
                );
            }
        }
    }

    /// Local vertex to screen space under the current pose
    #[inline]
    pub fn position_of(&self, local: Vec2) -> Vec2 {
        translate(rotate_about_origin(local, self.rotation), self.pos)
    }

    /// All outline vertices in screen space
    pub fn world_vertices(&self) -> [Vec2; ROCK_VERTEX_COUNT] {
        self.vertices.map(|v| self.position_of(v))
    }

    /// Fan triangles `(previous vertex, vertex, centre)`, wrapping last to first
    pub fn fan(&self) -> impl Iterator<Item = [Vec2; 3]> + '_ {
        let world = self.world_vertices();
        let centre = self.pos;
        (0..ROCK_VERTEX_COUNT).map(move |i| {
            let prev = world[(i + ROCK_VERTEX_COUNT - 1) % ROCK_VERTEX_COUNT];
            [prev, world[i], centre]
        })
    }

    pub fn move_step(&mut self) {
        self.rotation += self.rotation_speed as f32;
        self.pos = translate(self.pos, self.drift);
    }

    pub fn check_onscreen(&mut self, field: &Field) {
        if !field.contains(self.pos) {
            self.kill = true;
        }
    }

    /// Half-width of a square guaranteed to contain the outline
    pub fn bounding_half_extent(&self) -> f32 {
        (self.radius + self.size.max_jitter()) as f32
    }

    /// Is `point` inside the rock's current outline?
    pub fn contains_point(&self, point: Vec2) -> bool {
        let half = self.bounding_half_extent();
        let d = (point - self.pos).abs();
        if d.x > half || d.y > half {
            return false;
        }

        self.fan().any(|[a, b, c]| point_in_triangle(point, a, b, c))
    }

    /// Run a collision check against `point`, recording the result
    pub fn check_collision(&mut self, point: Vec2) -> bool {
        self.collision = self.contains_point(point);
        self.collision
    }

    /// Begin exploding; returns false if it already was
    pub fn start_explosion(&mut self) -> bool {
        if self.exploding {
            return false;
        }
        self.exploding = true;
        true
    }

    /// Advance the explosion animation by one tick
    pub fn advance_explosion(&mut self, settings: &Settings) -> ExplosionStep {
        if self.explosion_step < settings.explosion_ticks() {
            self.explosion_step += 1;
        } else {
            self.kill = true;
            return ExplosionStep::Finished;
        }

        if self.explosion_step == settings.child_spawn_step() {
            if let Some(child) = self.size.child() {
                return ExplosionStep::Fracture(child);
            }
        }
        ExplosionStep::Animating
    }

    /// A fragment thrown off near this rock, moving roughly with it
    pub fn spawn_child(
        &self,
        id: EntityId,
        size: SizeClass,
        settings: &Settings,
        rng: &mut impl Rng,
    ) -> Rock {
        let mut child = Rock::new(id, size, settings, rng);
        let offset = Vec2::new(
            rng.random_range(-CHILD_OFFSET..=CHILD_OFFSET) as f32,
            rng.random_range(-CHILD_OFFSET..=CHILD_OFFSET) as f32,
        );
        child.pos = translate(self.pos, offset);
        child.drift = Vec2::new(
            self.drift.x + settings.per_tick(10.0 * rng.random_range(-1..=1) as f32),
            self.drift.y + settings.per_tick(10.0 * rng.random_range(-1..=1) as f32),
        );
        child
    }
}

/// Largest per-axis distance between a fragment and its parent
pub const CHILD_OFFSET: i32 = 25;

/// `10 * randint(lo, hi)` units per second, as units per tick
fn drift_speed(settings: &Settings, lo: i32, hi: i32, rng: &mut impl Rng) -> f32 {
    settings.per_tick(10.0 * rng.random_range(lo..=hi) as f32)
}

/// Horizontal spot along the top or bottom edge, kept clear of the corners
fn edge_offset(field: &Field, rng: &mut impl Rng) -> f32 {
    let lo = field.border.min(field.width - field.border);
    let hi = field.border.max(field.width - field.border);
    if hi > lo { rng.random_range(lo..=hi) } else { lo }
}

/// Horizontal drift for a top/bottom rock, pointing at the other half
fn toward_middle(x: f32, field: &Field, settings: &Settings, rng: &mut impl Rng) -> f32 {
    if x <= field.width / 2.0 {
        drift_speed(settings, 1, 3, rng)
    } else {
        drift_speed(settings, -3, -1, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(7)
    }

    fn field() -> Field {
        Field::new(&Settings::default())
    }

    #[test]
    fn test_new_rock_shape() {
        let settings = Settings::default();
        let mut rng = rng();

        for size in [SizeClass::Large, SizeClass::Medium, SizeClass::Small] {
            for id in 0..50 {
                let rock = Rock::new(id, size, &settings, &mut rng);
                let (lo, hi) = size.radius_range();
                assert!((lo..=hi).contains(&rock.radius));
                assert_eq!(rock.vertices.len(), ROCK_VERTEX_COUNT);
                assert_ne!(rock.rotation_speed, 0);
                assert!(rock.rotation_speed.abs() <= 4);

                let max = rock.bounding_half_extent() + 1e-3;
                for v in rock.vertices {
                    assert!(v.length() <= max, "{v:?} outside {max}");
                }
                assert!(!rock.exploding && !rock.kill && !rock.collision);
                assert_eq!(rock.explosion_step, 0);
            }
        }
    }

    #[test]
    fn test_first_vertex_points_down() {
        let rock = Rock::new(1, SizeClass::Medium, &Settings::default(), &mut rng());
        let v = rock.vertices[0];
        assert!(v.x.abs() < 1e-4);
        assert!(v.y > 0.0);
    }

    #[test]
    fn test_placement_drifts_into_field() {
        let settings = Settings::default();
        let field = field();
        let mut rng = rng();
        let centre = Vec2::new(field.width / 2.0, field.height / 2.0);

        for id in 0..200 {
            let mut rock = Rock::new(id, SizeClass::Large, &settings, &mut rng);
            rock.place_on_side(&field, &settings, &mut rng);

            assert!(field.contains(rock.pos), "{:?} placed outside", rock.pos);
            // Moving toward the centre
            let before = (rock.pos - centre).length();
            let after = (rock.pos + rock.drift - centre).length();
            assert!(after < before, "{:?} drifts {:?}", rock.pos, rock.drift);

            // Survives its first move
            rock.move_step();
            rock.check_onscreen(&field);
            assert!(!rock.kill);
        }
    }

    #[test]
    fn test_move_step() {
        let mut rock = Rock::new(1, SizeClass::Small, &Settings::default(), &mut rng());
        rock.pos = Vec2::new(100.0, 100.0);
        rock.drift = Vec2::new(1.5, -2.0);
        rock.rotation_speed = 3;

        rock.move_step();
        rock.move_step();
        assert_eq!(rock.pos, Vec2::new(103.0, 96.0));
        assert_eq!(rock.rotation, 6.0);
    }

    #[test]
    fn test_offscreen_kill() {
        let field = field();
        let mut rock = Rock::new(1, SizeClass::Large, &Settings::default(), &mut rng());

        rock.pos = Vec2::new(field.right(), 300.0);
        rock.check_onscreen(&field);
        assert!(!rock.kill, "dead-zone edge is still in play");

        rock.pos = Vec2::new(field.right() + 0.5, 300.0);
        rock.check_onscreen(&field);
        assert!(rock.kill);

        let mut rock = Rock::new(2, SizeClass::Large, &Settings::default(), &mut rng());
        rock.pos = Vec2::new(400.0, field.top() - 1.0);
        rock.check_onscreen(&field);
        assert!(rock.kill);
    }

    #[test]
    fn test_collision_at_centre_and_far_away() {
        let mut rock = Rock::new(1, SizeClass::Large, &Settings::default(), &mut rng());
        rock.pos = Vec2::new(400.0, 300.0);
        rock.rotation = 37.0;

        assert!(rock.check_collision(rock.pos));
        assert!(rock.collision);

        // Just outside the broad-phase square
        let far = rock.pos + Vec2::new(rock.bounding_half_extent() + 1.0, 0.0);
        assert!(!rock.check_collision(far));
        assert!(!rock.collision);
    }

    #[test]
    fn test_collision_follows_rotation() {
        let mut rock = Rock::new(1, SizeClass::Large, &Settings::default(), &mut rng());
        rock.pos = Vec2::new(200.0, 200.0);

        // Halfway to the first vertex is inside in every orientation
        for step in 0..12 {
            rock.rotation = step as f32 * 17.0;
            let tip = rock.position_of(rock.vertices[0]);
            let halfway = rock.pos + (tip - rock.pos) * 0.5;
            assert!(rock.contains_point(halfway), "rotation {}", rock.rotation);
        }
    }

    #[test]
    fn test_explosion_lifecycle_large() {
        let settings = Settings::default();
        let mut rock = Rock::new(1, SizeClass::Large, &settings, &mut rng());
        assert!(rock.start_explosion());
        assert!(!rock.start_explosion());

        let mut fractures = Vec::new();
        let mut ticks = 0;
        loop {
            ticks += 1;
            match rock.advance_explosion(&settings) {
                ExplosionStep::Animating => {}
                ExplosionStep::Fracture(size) => fractures.push((rock.explosion_step, size)),
                ExplosionStep::Finished => break,
            }
        }

        assert_eq!(fractures, vec![(settings.child_spawn_step(), SizeClass::Medium)]);
        assert_eq!(ticks, settings.explosion_ticks() + 1);
        assert!(rock.kill);
        assert!(rock.exploding);
    }

    #[test]
    fn test_small_rock_never_fractures() {
        let settings = Settings::default();
        let mut rock = Rock::new(1, SizeClass::Small, &settings, &mut rng());
        rock.start_explosion();
        while !rock.kill {
            assert!(!matches!(
                rock.advance_explosion(&settings),
                ExplosionStep::Fracture(_)
            ));
        }
    }

    #[test]
    fn test_spawn_child_near_parent() {
        let settings = Settings::default();
        let mut rng = rng();
        let mut parent = Rock::new(1, SizeClass::Large, &settings, &mut rng);
        parent.pos = Vec2::new(300.0, 250.0);
        parent.drift = Vec2::new(1.0, 1.0);

        let nudge = settings.per_tick(10.0) + 1e-4;
        for id in 2..40 {
            let child = parent.spawn_child(id, SizeClass::Medium, &settings, &mut rng);
            assert_eq!(child.size, SizeClass::Medium);
            let d = (child.pos - parent.pos).abs();
            assert!(d.x <= CHILD_OFFSET as f32 && d.y <= CHILD_OFFSET as f32);
            let dd = (child.drift - parent.drift).abs();
            assert!(dd.x <= nudge && dd.y <= nudge);
            assert!(!child.exploding);
        }
    }
}
