//! Kinematic entity shared by the ship, asteroids, shots and the explosion
//!
//! One physics body: position integrated on a torus (leave the right edge,
//! reappear on the left), per-axis velocity clamping, and an accumulated
//! rotation angle that the sprite mapper snaps to a sheet frame.

use glam::Vec2;

use crate::wrap_coord;

use super::sprite;

/// A simulated object. Fields are public; the tick orchestrates all mutation.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Center position, kept in [0, w) x [0, h) by `integrate`
    pub pos: Vec2,
    pub vel: Vec2,
    /// Accumulated rotation in radians; unbounded, frame lookup wraps it
    pub angle: f32,
    /// Angular velocity in radians per tick (0 for non-spinners)
    pub spin: f32,
    /// Pixel footprint of the sprite tile; also the hitbox basis
    pub width: f32,
    /// Rotation frames available in this entity's sprite sheet
    pub num_frames: u32,
    /// Hidden entities are skipped by rendering and collision
    pub visible: bool,
    /// Tick the entity was (re)armed, for time-to-live aging
    pub born_tick: u64,
    /// Per-axis velocity cap, from the board config
    pub vmax: f32,
}

impl Entity {
    pub fn new(pos: Vec2, width: f32, num_frames: u32, vmax: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            angle: 0.0,
            spin: 0.0,
            width,
            num_frames,
            visible: true,
            born_tick: 0,
            vmax,
        }
    }

    /// Kick velocity along `angle`, clamping each component to ±vmax.
    ///
    /// Heading 0 points up the screen; screen y grows downward, hence the
    /// negated cosine.
    pub fn accelerate(&mut self, angle: f32, amount: f32) {
        self.vel.x = (self.vel.x + angle.sin() * amount).clamp(-self.vmax, self.vmax);
        self.vel.y = (self.vel.y - angle.cos() * amount).clamp(-self.vmax, self.vmax);
    }

    /// Advance one tick: position by velocity with toroidal wraparound,
    /// angle by spin.
    ///
    /// Runs once per tick for every entity, hidden ones included - a hidden
    /// pooled entity keeps its bookkeeping consistent for the next reveal,
    /// and its position is never rendered or collision-tested meanwhile.
    pub fn integrate(&mut self, bounds: Vec2) {
        self.pos.x = wrap_coord(self.pos.x + self.vel.x, bounds.x);
        self.pos.y = wrap_coord(self.pos.y + self.vel.y, bounds.y);
        self.angle += self.spin;
    }

    /// Sprite frame for the current rotation, shifted into the `alt` sheet
    /// sub-range.
    #[inline]
    pub fn frame(&self, alt: u32) -> u32 {
        sprite::frame_index(self.angle, self.num_frames, alt)
    }

    /// The heading implied by the rendered frame, not the continuous angle.
    ///
    /// Computed fresh on every call; caching it against a mutable angle is a
    /// staleness bug waiting to happen.
    #[inline]
    pub fn heading_quantized(&self) -> f32 {
        sprite::quantized_angle(self.angle, self.num_frames)
    }

    /// Take over another entity's motion state (position, velocity, spin).
    /// The explosion uses this to ride along with the wreck it replaces.
    pub fn inherit_motion(&mut self, other: &Entity) {
        self.pos = other.pos;
        self.vel = other.vel;
        self.spin = other.spin;
    }
}
