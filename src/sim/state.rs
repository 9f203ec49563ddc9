//! Game state and entity wiring
//!
//! Everything a run owns lives in `GameState`, held by the caller and
//! passed into the tick - no module-level statics. Deterministic: seeded
//! RNG only, so the same seed and input sequence replay identically.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::board::BoardConfig;
use crate::consts::*;
use crate::feedback::GameEvent;
use crate::render::{Renderer, SpriteInstance, SpriteSheet};

use super::entity::Entity;
use super::pool::{Pool, SlotState};

/// Complete game state for one run
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: BoardConfig,
    /// Run seed, for reproducing a session
    pub seed: u64,
    /// Score, floored at zero; never persisted
    pub score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub ship: Entity,
    pub roids: Pool,
    pub shots: Pool,
    /// The single shared explosion: repositioned onto whichever rock dies,
    /// retired by the respawn timer
    pub explosion: Entity,
    /// Ship thrust intent this tick; selects the flame sheet sub-range at
    /// render time
    pub thrusting: bool,
    /// Tick of the last fire attempt that passed the cooldown gate
    pub(crate) last_fire_tick: u64,
    /// Tick the shared respawn timer last elapsed
    pub(crate) last_respawn_tick: u64,
    /// Events since the last drain
    pub events: Vec<GameEvent>,
    rng: Pcg32,
}

impl GameState {
    pub fn new(config: BoardConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let center = config.bounds() / 2.0;
        let tile = config.tile_size as f32;

        let mut ship = Entity::new(center, tile, SHIP_FRAMES, config.vmax);
        ship.vel = Vec2::new(SHIP_SPAWN_VEL.0, SHIP_SPAWN_VEL.1);

        let roid_entities = (0..config.num_roids)
            .map(|_| {
                let mut roid = Entity::new(center, tile, ROID_FRAMES, config.vmax);
                roid.vel = Vec2::new(
                    rng.random_range(-ROID_SPAWN_VX..=ROID_SPAWN_VX),
                    rng.random_range(-ROID_SPAWN_VY..=ROID_SPAWN_VY),
                );
                roid.spin = if rng.random_bool(0.5) {
                    ROID_SPIN
                } else {
                    -ROID_SPIN
                };
                roid
            })
            .collect();
        let roids = Pool::new(roid_entities, SlotState::Alive);

        let shot_entities = (0..config.num_shots)
            .map(|_| {
                Entity::new(
                    center,
                    config.shot_tile_size as f32,
                    SHOT_FRAMES,
                    config.vmax,
                )
            })
            .collect();
        let shots = Pool::new(shot_entities, SlotState::Free);

        let mut explosion = Entity::new(center, tile, EXPLOSION_FRAMES, config.vmax);
        explosion.spin = EXPLOSION_IDLE_SPIN;
        explosion.visible = false;

        log::info!(
            "new game on {}: {}x{}, {} roids, {} shots, seed {}",
            config.name,
            config.screen_w,
            config.screen_h,
            config.num_roids,
            config.num_shots,
            seed
        );

        Self {
            config,
            seed,
            score: 0,
            time_ticks: 0,
            ship,
            roids,
            shots,
            explosion,
            thrusting: false,
            last_fire_tick: 0,
            last_respawn_tick: 0,
            events: Vec::new(),
            rng,
        }
    }

    /// Wrap bounds for every integration this run
    #[inline]
    pub fn bounds(&self) -> Vec2 {
        self.config.bounds()
    }

    /// Shared collision half-width: one constant derived from the ship tile
    /// footprint, applied to every entity pair
    #[inline]
    pub fn hitbox(&self) -> i32 {
        (self.ship.width as i32) / 2
    }

    /// Seconds elapsed since `tick_stamp`
    #[inline]
    pub(crate) fn secs_since(&self, tick_stamp: u64) -> f32 {
        (self.time_ticks - tick_stamp) as f32 * TICK_DT
    }

    /// Attempt to spawn a shot from the ship's nose.
    ///
    /// Gated on the fire cooldown; the stamp resets on every attempt that
    /// passes the gate, spawned or dropped - that is what time-gating a
    /// held button means. A saturated pool drops the request silently.
    pub(crate) fn try_fire(&mut self) {
        if self.secs_since(self.last_fire_tick) <= self.config.fire_cooldown {
            return;
        }
        self.last_fire_tick = self.time_ticks;

        let origin = self.ship.pos;
        // Fire along the rendered heading: the continuous angle can point up
        // to half a sprite frame away from where the ship appears to aim
        let heading = self.ship.heading_quantized();
        let kick = self.config.accel_shot;
        let now = self.time_ticks;

        match self.shots.claim_next() {
            Some(shot) => {
                shot.pos = origin;
                shot.vel = Vec2::ZERO;
                shot.born_tick = now;
                shot.accelerate(heading, kick);
                log::debug!("fire");
                self.events.push(GameEvent::ShotFired);
            }
            None => log::debug!("shot pool saturated, fire request dropped"),
        }
    }

    /// Resolve a hit on asteroid `idx`: score, explosion hand-off, and
    /// hide+relocate. Runs to completion within the tick, so rendering only
    /// ever sees the settled result.
    pub fn asteroid_hit(&mut self, idx: usize, by_ship: bool) {
        if by_ship {
            self.score = self.score.saturating_sub(SHIP_PENALTY);
            self.events.push(GameEvent::ShipHit {
                color: SHIP_HIT_COLOR,
            });
        } else {
            self.score = self.score.saturating_add(ROID_REWARD);
            self.events.push(GameEvent::AsteroidDestroyed {
                color: ROID_HIT_COLOR,
            });
        }
        log::info!(
            "roid {} hit by {}, score {:03}",
            idx,
            if by_ship { "ship" } else { "shot" },
            self.score
        );

        // The explosion rides the wreck: same position and drift
        self.explosion.inherit_motion(&self.roids.get(idx).entity);
        self.explosion.spin = EXPLOSION_ACTIVE_SPIN;
        self.explosion.born_tick = self.time_ticks;
        self.explosion.visible = true;

        // Hide the rock and park it somewhere new; the shared respawn timer
        // reveals it later
        self.roids.kill(idx);
        let x = self.rng.random_range(0..self.config.screen_w) as f32;
        let y = self.rng.random_range(0..self.config.screen_h) as f32;
        self.roids.get_mut(idx).entity.pos = Vec2::new(x, y);
    }

    /// Push every visible entity to the renderer, back to front, and flush
    /// exactly once
    pub fn draw(&self, renderer: &mut dyn Renderer) {
        for (idx, roid) in self.roids.iter_alive() {
            renderer.draw(&SpriteInstance {
                sheet: SpriteSheet::Asteroid((idx % ROID_SHEET_VARIANTS as usize) as u8),
                center: roid.pos,
                frame: roid.frame(0),
            });
        }
        for (_, shot) in self.shots.iter_alive() {
            renderer.draw(&SpriteInstance {
                sheet: SpriteSheet::Shot,
                center: shot.pos,
                frame: shot.frame(0),
            });
        }
        renderer.draw(&SpriteInstance {
            sheet: SpriteSheet::Ship,
            center: self.ship.pos,
            frame: self.ship.frame(self.thrusting as u32),
        });
        if self.explosion.visible {
            renderer.draw(&SpriteInstance {
                sheet: SpriteSheet::Explosion,
                center: self.explosion.pos,
                frame: self.explosion.frame(0),
            });
        }
        renderer.flush(self.score);
    }

    /// Hand the tick's events to the caller for its feedback sink
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }
}
