//! World state, the per-frame step, and the asteroid spawner
//!
//! One `act` call runs the whole frame in a fixed order: spawner top-up,
//! input, object move + pairwise collision, lifecycle rebuild, ship move,
//! ship contact pass. Dead objects keep their final position for the rest of
//! the frame they die in; they are dropped only in the rebuild.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use std::f32::consts::PI;

use super::entity::{Asteroid, Bullet, Ship, SpaceObject, Tint};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::tuning::Tuning;

/// Per-frame key-state snapshot supplied by the host
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub thrust: bool,
    /// No fire cooldown exists: holding fire spawns one bullet per frame,
    /// bounded only by the host's poll rate. Known balance gap, kept as is.
    pub fire: bool,
    pub quit: bool,
}

/// The whole simulation: the persistent ship plus the owned object collection
pub struct World {
    ship: Ship,
    objects: Vec<SpaceObject>,
    rng: Pcg32,
    tuning: Tuning,
    quit_requested: bool,
    time_ticks: u64,
}

impl World {
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            ship: Ship::new(&tuning),
            objects: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            quit_requested: false,
            time_ticks: 0,
        }
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    pub fn objects(&self) -> &[SpaceObject] {
        &self.objects
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn ticks(&self) -> u64 {
        self.time_ticks
    }

    /// True once `act` has seen the quit input; the host polls this after
    /// each step
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Add an object to the live collection
    pub fn spawn(&mut self, object: SpaceObject) {
        self.objects.push(object);
    }

    /// Populate the initial asteroid field. Same top-up the spawner runs
    /// every frame, so calling this again is harmless.
    pub fn initialize(&mut self) {
        self.top_up_asteroids();
        log::info!("field initialized with {} asteroids", self.objects.len());
    }

    /// Run one simulation step
    pub fn act(&mut self, input: &TickInput, dt: f32) {
        // The spawner runs every frame, not just at startup
        self.top_up_asteroids();

        if input.left {
            self.ship.turn(dt, true);
        }
        if input.right {
            self.ship.turn(dt, false);
        }
        self.ship.accelerate(dt, input.thrust);
        if input.fire {
            let bullet = Bullet::new(self.ship.pos(), self.ship.angle(), &self.tuning);
            self.objects.push(SpaceObject::Bullet(bullet));
        }

        self.move_and_collide(dt);
        self.resolve_lifecycle();

        // The ship moves only after the collection has been rebuilt
        self.ship.advance(dt);
        self.ship_contact_pass(dt);

        self.time_ticks += 1;
        if input.quit {
            self.quit_requested = true;
            log::info!("quit requested at tick {}", self.time_ticks);
        }
    }

    /// Release all owned objects
    pub fn finalize(&mut self) {
        log::info!("releasing {} objects", self.objects.len());
        self.objects.clear();
    }

    /// Move pass interleaved with the O(n^2) collision pass, in index order.
    /// Each object moves before being tested against the not-yet-moved tail;
    /// overlap within the sum of sizes damages both sides.
    fn move_and_collide(&mut self, dt: f32) {
        let damage_rate = self.tuning.contact_damage_rate;
        for i in 0..self.objects.len() {
            let (head, tail) = self.objects.split_at_mut(i + 1);
            let current = &mut head[i];
            current.advance(dt);
            for other in tail.iter_mut() {
                let gap = (current.size() + other.size()) as f32;
                if current.pos().distance(other.pos()) < gap {
                    current.hit(dt, damage_rate);
                    other.hit(dt, damage_rate);
                }
            }
        }
    }

    /// Rebuild the collection: keep the living, split dead rocks that are
    /// still big enough, drop the rest. Children do not act this frame.
    fn resolve_lifecycle(&mut self) {
        let objects = std::mem::take(&mut self.objects);
        let mut survivors = Vec::with_capacity(objects.len());
        for object in objects {
            if object.alive() {
                survivors.push(object);
                continue;
            }
            let child_size = object.size() - self.tuning.split.size_step;
            if child_size <= 0 {
                continue;
            }
            let pos = object.pos();
            let speed = object.speed() * self.tuning.split.speed_scale;
            let health = self.tuning.split.child_health;
            let offset = Vec2::splat(self.tuning.split.child_offset);
            let psi = self.random_heading();
            log::debug!(
                "asteroid died at ({:.1}, {:.1}), splitting into two of size {}",
                pos.x,
                pos.y,
                child_size
            );
            let tint_a = self.random_tint();
            let tint_b = self.random_tint();
            survivors.push(SpaceObject::Asteroid(Asteroid::new(
                pos + offset,
                psi,
                speed,
                health,
                child_size,
                tint_a,
            )));
            survivors.push(SpaceObject::Asteroid(Asteroid::new(
                pos - offset,
                psi + PI,
                speed,
                health,
                child_size,
                tint_b,
            )));
        }
        self.objects = survivors;
    }

    /// Every sized object overlapping the ship damages it and takes damage
    /// back. The size > 0 guard keeps freshly fired bullets off the ship.
    fn ship_contact_pass(&mut self, dt: f32) {
        let damage_rate = self.tuning.contact_damage_rate;
        for object in &mut self.objects {
            if object.size() <= 0 {
                continue;
            }
            let gap = (object.size() + self.ship.size()) as f32;
            if object.pos().distance(self.ship.pos()) < gap {
                self.ship.hit(dt, damage_rate);
                object.hit(dt, damage_rate);
            }
        }
    }

    /// Top the field up to the target asteroid count, one sample per
    /// shortfall slot. Rejected slots are skipped, not retried; the next
    /// frame tops up again.
    fn top_up_asteroids(&mut self) {
        let live = self.objects.iter().filter(|o| o.is_asteroid()).count();
        for _ in live..self.tuning.spawn.target_count {
            if let Some((pos, angle)) = self.sample_spawn_point() {
                let tint = self.random_tint();
                let rock = Asteroid::new(
                    pos,
                    angle,
                    self.tuning.asteroid.speed,
                    self.tuning.asteroid.health,
                    self.tuning.asteroid.size,
                    tint,
                );
                log::debug!("spawned asteroid at ({:.0}, {:.0})", pos.x, pos.y);
                self.objects.push(SpaceObject::Asteroid(rock));
            }
        }
    }

    /// One rejection-sampling attempt: a uniform integer point inside the
    /// inset margin, accepted only with full clearance from every object and
    /// the ship
    fn sample_spawn_point(&mut self) -> Option<(Vec2, f32)> {
        let reserve = self.tuning.spawn.reserve;
        let x = self.rng.random_range(reserve..SCREEN_WIDTH - reserve);
        let y = self.rng.random_range(reserve..SCREEN_HEIGHT - reserve);
        let candidate = Vec2::new(x as f32, y as f32);
        let clearance = reserve as f32;
        let blocked = self
            .objects
            .iter()
            .any(|o| o.pos().distance(candidate) < clearance)
            || self.ship.pos().distance(candidate) < clearance;
        if blocked {
            None
        } else {
            Some((candidate, self.random_heading()))
        }
    }

    /// Discrete heading: one of `heading_buckets` whole radians
    fn random_heading(&mut self) -> f32 {
        self.rng.random_range(0..self.tuning.spawn.heading_buckets) as f32
    }

    fn random_tint(&mut self) -> Tint {
        Tint::from_index(self.rng.random_range(0..3))
    }
}
