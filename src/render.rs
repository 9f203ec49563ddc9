//! Render collaborator contract
//!
//! The core hands over `(sheet, center, frame)` for each *visible* entity
//! plus the current score; the renderer owns translating centers to
//! top-left sprite placement and owns the framebuffer. `flush` runs exactly
//! once per tick, after all updates, so partial states are never visible.

use glam::Vec2;

/// Which sprite sheet an instance indexes into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteSheet {
    Ship,
    /// Asteroid sheet variant; boards ship a couple to vary the rocks
    Asteroid(u8),
    Shot,
    Explosion,
}

/// One visible entity in the current frame
#[derive(Debug, Clone, Copy)]
pub struct SpriteInstance {
    pub sheet: SpriteSheet,
    /// Center position; the renderer does its own top-left math
    pub center: Vec2,
    pub frame: u32,
}

/// Per-board display adapter
pub trait Renderer {
    fn draw(&mut self, sprite: &SpriteInstance);
    /// Present the finished frame with the score overlay
    fn flush(&mut self, score: u32);
}

/// Draws nothing; headless runs
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw(&mut self, _sprite: &SpriteInstance) {}
    fn flush(&mut self, _score: u32) {}
}

/// Records every call, for tests and frame debugging
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub sprites: Vec<SpriteInstance>,
    pub flushes: u32,
    pub last_score: u32,
}

impl Renderer for RecordingRenderer {
    fn draw(&mut self, sprite: &SpriteInstance) {
        self.sprites.push(*sprite);
    }

    fn flush(&mut self, score: u32) {
        self.flushes += 1;
        self.last_score = score;
    }
}
