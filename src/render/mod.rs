//! Software rasterizer
//!
//! Draws each entity variant directly into the host-owned pixel buffer: one
//! packed 0x00RRGGBB value per cell, row-major. Disc sprites wrap around the
//! field edges; bullets do not (they are dead before they could leave).
//! The buffer is write-only here, the simulation never reads it back.

use glam::Vec2;

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::{Asteroid, Bullet, Ship, SpaceObject, Tint, World};
use crate::{wrap_coord, wrap_pixel};

/// 8-bit-per-channel RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack into the buffer's 0x00RRGGBB cell layout
    pub const fn pack(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Split a packed cell value back into channels
    pub const fn from_packed(value: u32) -> Self {
        Self {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        }
    }
}

const SHIP_CORE: Rgb = Rgb::new(255, 255, 255);
const SHIP_RING: Rgb = Rgb::new(100, 100, 100);
const HEADING_TICK: Rgb = Rgb::new(255, 0, 0);
const BULLET_COLOR: Rgb = Rgb::new(255, 0, 0);
const BAR_FILLED: Rgb = Rgb::new(255, 0, 0);
const BAR_EMPTY: Rgb = Rgb::new(0, 0, 255);

/// Tint palette lookup (the sim stays free of color knowledge)
pub const fn tint_rgb(tint: Tint) -> Rgb {
    match tint {
        Tint::Umber => Rgb::new(150, 75, 0),
        Tint::Slate => Rgb::new(128, 128, 128),
        Tint::Charcoal => Rgb::new(64, 58, 58),
    }
}

/// Borrowed view over the host-owned pixel buffer
pub struct Frame<'a> {
    pixels: &'a mut [u32],
}

impl<'a> Frame<'a> {
    /// Wrap the host buffer; it must hold exactly width * height cells
    pub fn new(pixels: &'a mut [u32]) -> Self {
        assert_eq!(pixels.len(), (SCREEN_WIDTH * SCREEN_HEIGHT) as usize);
        Self { pixels }
    }

    /// Black out the whole buffer
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Bounds-checked write; out-of-range coordinates are dropped
    pub fn put(&mut self, x: i32, y: i32, color: Rgb) {
        if (0..SCREEN_WIDTH).contains(&x) && (0..SCREEN_HEIGHT).contains(&y) {
            self.pixels[(y * SCREEN_WIDTH + x) as usize] = color.pack();
        }
    }

    /// Write with toroidal wrapping on both axes
    pub fn put_wrapped(&mut self, x: i32, y: i32, color: Rgb) {
        let x = wrap_pixel(x, SCREEN_WIDTH);
        let y = wrap_pixel(y, SCREEN_HEIGHT);
        self.pixels[(y * SCREEN_WIDTH + x) as usize] = color.pack();
    }

    /// Read one cell (test and harness support; the sim never reads back)
    pub fn get(&self, x: i32, y: i32) -> u32 {
        self.pixels[(y * SCREEN_WIDTH + x) as usize]
    }
}

/// Euclidean distance between two pixel centers
fn pixel_distance(x0: i32, y0: i32, x1: i32, y1: i32) -> f32 {
    let dx = (x1 - x0) as f32;
    let dy = (y1 - y0) as f32;
    (dx * dx + dy * dy).sqrt()
}

/// Brute-force bounding-box scan of a filled disc, wrapped at the edges
fn fill_disc(frame: &mut Frame, center: Vec2, radius: i32, color: Rgb) {
    let cx = center.x as i32;
    let cy = center.y as i32;
    for i in (cx - radius)..=(cx + radius) {
        for j in (cy - radius)..=(cy + radius) {
            if pixel_distance(cx, cy, i, j) < radius as f32 {
                frame.put_wrapped(i, j, color);
            }
        }
    }
}

/// Two-tone disc (white core inside 5/6 of the radius, gray ring outside)
/// plus a red heading tick, one pixel per step with a plus-shaped footprint
/// so it stays visible at any angle
pub fn draw_ship(frame: &mut Frame, ship: &Ship) {
    let cx = ship.pos().x as i32;
    let cy = ship.pos().y as i32;
    let radius = ship.size();
    let core = 5 * radius / 6;
    for i in (cx - radius)..=(cx + radius) {
        for j in (cy - radius)..=(cy + radius) {
            let dist = pixel_distance(cx, cy, i, j);
            if dist < radius as f32 {
                let color = if dist < core as f32 { SHIP_CORE } else { SHIP_RING };
                frame.put_wrapped(i, j, color);
            }
        }
    }

    let (sin, cos) = ship.angle().sin_cos();
    for step in 0..radius {
        let along_x = step as f32 * cos;
        let along_y = step as f32 * sin;
        for (ox, oy) in [(0, 0), (1, 0), (-1, 0), (0, 1), (0, -1)] {
            let px = wrap_coord((cx + ox) as f32 + along_x, SCREEN_WIDTH as f32) as i32;
            let py = wrap_coord((cy + oy) as f32 + along_y, SCREEN_HEIGHT as f32) as i32;
            frame.put(px, py, HEADING_TICK);
        }
    }
}

/// Filled disc in the tint picked at construction
pub fn draw_asteroid(frame: &mut Frame, asteroid: &Asteroid) {
    fill_disc(
        frame,
        asteroid.body.pos,
        asteroid.body.size,
        tint_rgb(asteroid.tint),
    );
}

/// Five-pixel plus-mark; unwrapped, and skipped entirely unless it fits
/// inside the field
pub fn draw_bullet(frame: &mut Frame, bullet: &Bullet) {
    if !bullet.in_field() {
        return;
    }
    let x = bullet.body.pos.x as i32;
    let y = bullet.body.pos.y as i32;
    frame.put(x, y, BULLET_COLOR);
    frame.put(x + 1, y, BULLET_COLOR);
    frame.put(x - 1, y, BULLET_COLOR);
    frame.put(x, y + 1, BULLET_COLOR);
    frame.put(x, y - 1, BULLET_COLOR);
}

/// Two-row bar at a fixed screen offset: current health percentage in red,
/// the remainder in blue
pub fn draw_health_bar(frame: &mut Frame, ship: &Ship) {
    let percent = (ship.health() / ship.max_health() * 100.0) as i32;
    for i in 0..100 {
        let color = if i < percent { BAR_FILLED } else { BAR_EMPTY };
        frame.put(20 + i, 20, color);
        frame.put(20 + i, 21, color);
    }
}

/// Clear the buffer, draw every live object, the ship while it lives, and
/// the health bar last
pub fn draw_world(world: &World, frame: &mut Frame) {
    frame.clear();
    for object in world.objects() {
        match object {
            SpaceObject::Bullet(bullet) => draw_bullet(frame, bullet),
            SpaceObject::Asteroid(asteroid) => draw_asteroid(frame, asteroid),
        }
    }
    if world.ship().alive() {
        draw_ship(frame, world.ship());
    }
    draw_health_bar(frame, world.ship());
}

impl World {
    /// Render the current state into the host buffer
    pub fn draw(&self, frame: &mut Frame) {
        draw_world(self, frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    fn buffer() -> Vec<u32> {
        vec![0; (SCREEN_WIDTH * SCREEN_HEIGHT) as usize]
    }

    #[test]
    fn rgb_pack_roundtrip() {
        let color = Rgb::new(150, 75, 1);
        assert_eq!(color.pack(), 0x0096_4B01);
        assert_eq!(Rgb::from_packed(color.pack()), color);
    }

    #[test]
    fn put_is_bounds_checked() {
        let mut pixels = buffer();
        let mut frame = Frame::new(&mut pixels);
        frame.put(-1, 10, Rgb::new(1, 2, 3));
        frame.put(SCREEN_WIDTH, 10, Rgb::new(1, 2, 3));
        frame.put(10, SCREEN_HEIGHT, Rgb::new(1, 2, 3));
        assert!(pixels.iter().all(|&p| p == 0));
    }

    #[test]
    fn put_wrapped_wraps_both_axes() {
        let mut pixels = buffer();
        let mut frame = Frame::new(&mut pixels);
        frame.put_wrapped(-1, -1, Rgb::new(9, 9, 9));
        assert_eq!(frame.get(SCREEN_WIDTH - 1, SCREEN_HEIGHT - 1), Rgb::new(9, 9, 9).pack());
    }

    #[test]
    fn bullet_plus_mark_pixels() {
        let mut pixels = buffer();
        let mut frame = Frame::new(&mut pixels);
        let bullet = Bullet::new(Vec2::new(50.5, 60.5), 0.0, &Tuning::default());
        draw_bullet(&mut frame, &bullet);
        let red = BULLET_COLOR.pack();
        assert_eq!(frame.get(50, 60), red);
        assert_eq!(frame.get(51, 60), red);
        assert_eq!(frame.get(49, 60), red);
        assert_eq!(frame.get(50, 61), red);
        assert_eq!(frame.get(50, 59), red);
        assert_eq!(frame.get(52, 60), 0);
    }

    #[test]
    fn out_of_field_bullet_is_not_drawn() {
        let mut pixels = buffer();
        let mut frame = Frame::new(&mut pixels);
        let mut bullet = Bullet::new(Vec2::new(0.5, 100.0), 0.0, &Tuning::default());
        draw_bullet(&mut frame, &bullet);
        assert!(pixels.iter().all(|&p| p == 0));

        bullet.body.pos.x = -20.0;
        let mut frame = Frame::new(&mut pixels);
        draw_bullet(&mut frame, &bullet);
        assert!(pixels.iter().all(|&p| p == 0));
    }

    #[test]
    fn asteroid_disc_wraps_around_the_corner() {
        let mut pixels = buffer();
        let mut frame = Frame::new(&mut pixels);
        let rock = Asteroid::new(Vec2::new(2.0, 2.0), 0.0, 0.0, 10.0, 5, Tint::Umber);
        draw_asteroid(&mut frame, &rock);
        let tint = tint_rgb(Tint::Umber).pack();
        assert_eq!(frame.get(2, 2), tint);
        // (-1, -1) is inside the disc and lands on the far corner
        assert_eq!(frame.get(SCREEN_WIDTH - 1, SCREEN_HEIGHT - 1), tint);
        // Outside the radius stays dark
        assert_eq!(frame.get(8, 2), 0);
    }

    #[test]
    fn ship_disc_is_two_tone() {
        let mut pixels = buffer();
        let mut frame = Frame::new(&mut pixels);
        let mut ship = Ship::new(&Tuning::default());
        ship.body.pos = Vec2::new(200.0, 200.0);
        draw_ship(&mut frame, &ship);
        // Core is white; ring band (between 5/6 radius and radius) is gray.
        // Sample straight down to stay clear of the heading tick along +x.
        assert_eq!(frame.get(200, 202), SHIP_CORE.pack());
        assert_eq!(frame.get(200, 209), SHIP_RING.pack());
        // Heading tick paints red along +x from the center
        assert_eq!(frame.get(205, 200), HEADING_TICK.pack());
    }

    #[test]
    fn health_bar_tracks_percentage() {
        let mut pixels = buffer();
        let mut frame = Frame::new(&mut pixels);
        let mut ship = Ship::new(&Tuning::default());
        draw_health_bar(&mut frame, &ship);
        assert_eq!(frame.get(20, 20), BAR_FILLED.pack());
        assert_eq!(frame.get(119, 21), BAR_FILLED.pack());

        ship.body.health = 25.0; // 50%
        let mut frame = Frame::new(&mut pixels);
        draw_health_bar(&mut frame, &ship);
        assert_eq!(frame.get(69, 20), BAR_FILLED.pack());
        assert_eq!(frame.get(70, 20), BAR_EMPTY.pack());

        ship.body.health = -3.0;
        let mut frame = Frame::new(&mut pixels);
        draw_health_bar(&mut frame, &ship);
        assert_eq!(frame.get(20, 20), BAR_EMPTY.pack());
        assert_eq!(frame.get(119, 20), BAR_EMPTY.pack());
    }

    #[test]
    fn dead_ship_is_not_drawn_but_bar_is() {
        let mut quiet = Tuning::default();
        quiet.spawn.target_count = 0;

        let world = World::with_tuning(1, quiet.clone());
        let mut pixels = buffer();
        let mut frame = Frame::new(&mut pixels);
        world.draw(&mut frame);
        // Just below center: inside the core, clear of the heading tick
        assert_eq!(frame.get(512, 386), SHIP_CORE.pack());

        // Kill the ship: the disc disappears, the (empty) bar remains
        let mut spent = quiet;
        spent.ship.max_health = 0.0;
        let dead = World::with_tuning(1, spent);
        let mut pixels = buffer();
        let mut frame = Frame::new(&mut pixels);
        dead.draw(&mut frame);
        assert_eq!(frame.get(512, 386), 0);
        assert_eq!(frame.get(20, 20), BAR_EMPTY.pack());
    }
}
