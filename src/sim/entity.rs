//! Entity model: ship, bullets, asteroids
//!
//! A closed set of three variants. Shared kinematics live in [`Body`];
//! [`SpaceObject`] is the sum type the world collection stores. The ship is a
//! separate persistent instance and never enters the collection.

use glam::Vec2;

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::tuning::Tuning;
use crate::wrap_coord;

/// Shared kinematic state for every space object
#[derive(Debug, Clone, Copy)]
pub struct Body {
    pub pos: Vec2,
    /// Heading in radians
    pub angle: f32,
    /// Scalar speed along the heading, pixels/sec
    pub speed: f32,
    /// Death at <= 0
    pub health: f32,
    /// Collision radius in pixels; also drives split sizing
    pub size: i32,
}

impl Body {
    pub fn new(pos: Vec2, angle: f32, speed: f32, health: f32, size: i32) -> Self {
        Self {
            pos,
            angle,
            speed,
            health,
            size,
        }
    }

    /// Advance along the heading, wrapping both axes into the field
    pub fn advance_wrapped(&mut self, dt: f32) {
        self.pos.x = wrap_coord(
            self.pos.x + self.speed * self.angle.cos() * dt,
            SCREEN_WIDTH as f32,
        );
        self.pos.y = wrap_coord(
            self.pos.y + self.speed * self.angle.sin() * dt,
            SCREEN_HEIGHT as f32,
        );
    }

    /// Advance without wrapping (bullets leave the field instead)
    pub fn advance_free(&mut self, dt: f32) {
        self.pos.x += self.speed * self.angle.cos() * dt;
        self.pos.y += self.speed * self.angle.sin() * dt;
    }

    /// Continuous-contact damage, scaled by frame time
    pub fn contact_hit(&mut self, dt: f32, damage_rate: f32) {
        self.health -= damage_rate * dt;
    }
}

/// Asteroid tint palette, picked once at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Umber,
    Slate,
    Charcoal,
}

impl Tint {
    pub fn from_index(index: u32) -> Self {
        match index % 3 {
            0 => Tint::Umber,
            1 => Tint::Slate,
            _ => Tint::Charcoal,
        }
    }
}

/// The player ship. Singleton, lives outside the object collection; when
/// health runs out it stops being drawn but is never removed.
#[derive(Debug, Clone)]
pub struct Ship {
    pub body: Body,
    max_speed: f32,
    max_health: f32,
    turn_rate: f32,
}

impl Ship {
    /// Ship at field center, at rest, full health
    pub fn new(tuning: &Tuning) -> Self {
        let center = Vec2::new(SCREEN_WIDTH as f32 / 2.0, SCREEN_HEIGHT as f32 / 2.0);
        Self {
            body: Body::new(center, 0.0, 0.0, tuning.ship.max_health, tuning.ship.size),
            max_speed: tuning.ship.max_speed,
            max_health: tuning.ship.max_health,
            turn_rate: tuning.ship.turn_rate,
        }
    }

    /// Rotate the heading by the fixed turn rate
    pub fn turn(&mut self, dt: f32, left: bool) {
        if left {
            self.body.angle -= self.turn_rate * dt;
        } else {
            self.body.angle += self.turn_rate * dt;
        }
    }

    /// Thrust toward the speed cap at half rate; coast down at full rate.
    /// The slow-accel / fast-coast asymmetry is a deliberate tuning choice.
    pub fn accelerate(&mut self, dt: f32, forward: bool) {
        if forward {
            self.body.speed = (self.body.speed + self.max_speed * dt / 2.0).min(self.max_speed);
        } else {
            self.body.speed = (self.body.speed - self.max_speed * dt).max(0.0);
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.body.advance_wrapped(dt);
    }

    pub fn hit(&mut self, dt: f32, damage_rate: f32) {
        self.body.contact_hit(dt, damage_rate);
    }

    /// Gates drawing only; a dead ship still moves, fires, and takes hits
    pub fn alive(&self) -> bool {
        self.body.health > 0.0
    }

    pub fn pos(&self) -> Vec2 {
        self.body.pos
    }

    pub fn angle(&self) -> f32 {
        self.body.angle
    }

    pub fn speed(&self) -> f32 {
        self.body.speed
    }

    pub fn size(&self) -> i32 {
        self.body.size
    }

    pub fn health(&self) -> f32 {
        self.body.health
    }

    pub fn max_health(&self) -> f32 {
        self.max_health
    }
}

/// One-shot projectile fired from the ship's nose
#[derive(Debug, Clone)]
pub struct Bullet {
    pub body: Body,
}

impl Bullet {
    pub fn new(pos: Vec2, angle: f32, tuning: &Tuning) -> Self {
        Self {
            body: Body::new(
                pos,
                angle,
                tuning.bullet.speed,
                tuning.bullet.health,
                tuning.bullet.size,
            ),
        }
    }

    /// True while the 3x3 plus-mark still fits inside the field. Bullets do
    /// not wrap; leaving the field kills them regardless of health.
    pub fn in_field(&self) -> bool {
        let x = self.body.pos.x as i32;
        let y = self.body.pos.y as i32;
        x - 1 >= 0 && x + 1 < SCREEN_WIDTH && y - 1 >= 0 && y + 1 < SCREEN_HEIGHT
    }

    pub fn alive(&self) -> bool {
        self.body.health > 0.0 && self.in_field()
    }
}

/// A drifting rock; splits into two smaller rocks on death while size allows
#[derive(Debug, Clone)]
pub struct Asteroid {
    pub body: Body,
    pub tint: Tint,
}

impl Asteroid {
    pub fn new(pos: Vec2, angle: f32, speed: f32, health: f32, size: i32, tint: Tint) -> Self {
        Self {
            body: Body::new(pos, angle, speed, health, size),
            tint,
        }
    }
}

/// Everything the world collection owns. The set is closed, so a sum type
/// with match dispatch replaces virtual calls.
#[derive(Debug, Clone)]
pub enum SpaceObject {
    Bullet(Bullet),
    Asteroid(Asteroid),
}

impl SpaceObject {
    fn body(&self) -> &Body {
        match self {
            SpaceObject::Bullet(b) => &b.body,
            SpaceObject::Asteroid(a) => &a.body,
        }
    }

    pub fn pos(&self) -> Vec2 {
        self.body().pos
    }

    pub fn angle(&self) -> f32 {
        self.body().angle
    }

    pub fn speed(&self) -> f32 {
        self.body().speed
    }

    pub fn health(&self) -> f32 {
        self.body().health
    }

    pub fn size(&self) -> i32 {
        self.body().size
    }

    pub fn is_asteroid(&self) -> bool {
        matches!(self, SpaceObject::Asteroid(_))
    }

    pub fn is_bullet(&self) -> bool {
        matches!(self, SpaceObject::Bullet(_))
    }

    /// Move one step: asteroids wrap around the field, bullets fly straight out
    pub fn advance(&mut self, dt: f32) {
        match self {
            SpaceObject::Bullet(b) => b.body.advance_free(dt),
            SpaceObject::Asteroid(a) => a.body.advance_wrapped(dt),
        }
    }

    /// Register one collision contact this tick
    pub fn hit(&mut self, dt: f32, damage_rate: f32) {
        match self {
            // One-shot: any contact spends the bullet
            SpaceObject::Bullet(b) => b.body.health -= 1.0,
            SpaceObject::Asteroid(a) => a.body.contact_hit(dt, damage_rate),
        }
    }

    pub fn alive(&self) -> bool {
        match self {
            SpaceObject::Bullet(b) => b.alive(),
            SpaceObject::Asteroid(a) => a.body.health > 0.0,
        }
    }
}
