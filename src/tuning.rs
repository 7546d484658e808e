//! Data-driven game balance
//!
//! Every gameplay constant lives in [`Tuning`] so tests and the demo harness
//! can override balance without recompiling. Defaults match the classic
//! arcade values; each table deserializes from partial JSON.

use serde::{Deserialize, Serialize};

/// Player ship balance
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipTuning {
    /// Speed cap in pixels/sec; also sets the brake rate (see `Ship::accelerate`)
    pub max_speed: f32,
    pub max_health: f32,
    /// Turn rate in radians/sec
    pub turn_rate: f32,
    /// Collision radius in pixels
    pub size: i32,
}

impl Default for ShipTuning {
    fn default() -> Self {
        Self {
            max_speed: 300.0,
            max_health: 50.0,
            turn_rate: 2.0,
            size: 10,
        }
    }
}

/// Bullet balance
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletTuning {
    pub speed: f32,
    pub health: f32,
    /// Size 0 keeps freshly fired bullets from colliding with the ship
    pub size: i32,
}

impl Default for BulletTuning {
    fn default() -> Self {
        Self {
            speed: 400.0,
            health: 1.0,
            size: 0,
        }
    }
}

/// Freshly spawned asteroid parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AsteroidTuning {
    pub speed: f32,
    pub health: f32,
    pub size: i32,
}

impl Default for AsteroidTuning {
    fn default() -> Self {
        Self {
            speed: 100.0,
            health: 10.0,
            size: 15,
        }
    }
}

/// Asteroid split behavior on death
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitTuning {
    /// Child size = parent size - size_step; no children once that hits zero
    pub size_step: i32,
    /// Diagonal offset of each child from the parent's death position
    pub child_offset: f32,
    /// Child speed = parent speed * speed_scale
    pub speed_scale: f32,
    pub child_health: f32,
}

impl Default for SplitTuning {
    fn default() -> Self {
        Self {
            size_step: 5,
            child_offset: 10.0,
            speed_scale: 1.5,
            child_health: 5.0,
        }
    }
}

/// Asteroid field top-up behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnTuning {
    /// The spawner tops the field up to this many live asteroids
    pub target_count: usize,
    /// Inset margin of the sample box, and the required clearance radius
    pub reserve: i32,
    /// Discrete headings are drawn from `0..heading_buckets` radians
    pub heading_buckets: u32,
}

impl Default for SpawnTuning {
    fn default() -> Self {
        Self {
            target_count: 10,
            reserve: 250,
            heading_buckets: 6,
        }
    }
}

/// Complete balance table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub ship: ShipTuning,
    pub bullet: BulletTuning,
    pub asteroid: AsteroidTuning,
    pub split: SplitTuning,
    pub spawn: SpawnTuning,
    /// Continuous-contact damage in health/sec; damage per tick is rate * dt,
    /// deliberately frame-rate dependent
    pub contact_damage_rate: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            ship: ShipTuning::default(),
            bullet: BulletTuning::default(),
            asteroid: AsteroidTuning::default(),
            split: SplitTuning::default(),
            spawn: SpawnTuning::default(),
            contact_damage_rate: 100.0,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override; absent fields keep defaults
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
