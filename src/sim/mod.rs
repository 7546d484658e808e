//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Single-threaded, one `act` per frame
//! - No rendering or platform dependencies

pub mod entity;
pub mod world;

pub use entity::{Asteroid, Body, Bullet, Ship, SpaceObject, Tint};
pub use world::{TickInput, World};
