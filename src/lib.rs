//! Toroids - an Asteroids clone on a toroidal field
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, world state)
//! - `render`: Software rasterizer writing into a host-owned pixel buffer
//! - `tuning`: Data-driven game balance
//!
//! The host runtime (window, key polling, pixel buffer memory) lives outside
//! this crate. It drives the fixed lifecycle: `World::initialize` once, then
//! `World::act` / `World::draw` every frame, `World::finalize` once.

pub mod render;
pub mod sim;
pub mod tuning;

pub use sim::{TickInput, World};
pub use tuning::Tuning;

/// Field configuration constants
pub mod consts {
    /// Field width in pixels (also the pixel buffer width)
    pub const SCREEN_WIDTH: i32 = 1024;
    /// Field height in pixels (also the pixel buffer height)
    pub const SCREEN_HEIGHT: i32 = 768;
}

/// Remap a coordinate into `[0, limit)` on the toroidal field
#[inline]
pub fn wrap_coord(value: f32, limit: f32) -> f32 {
    let wrapped = value.rem_euclid(limit);
    // rem_euclid can round up to `limit` for tiny negative inputs
    if wrapped >= limit { wrapped - limit } else { wrapped }
}

/// Wrap an integer pixel coordinate into `[0, limit)`
#[inline]
pub fn wrap_pixel(value: i32, limit: i32) -> i32 {
    value.rem_euclid(limit)
}
