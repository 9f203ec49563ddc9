//! Fixed-step simulation tick
//!
//! One call advances the world one display frame. The update order is
//! load-bearing: steer, thrust, fire, integrate ship, asteroid pass with
//! hit resolution, shot aging, explosion, batch respawn. Rendering happens
//! after the whole tick, so no partial state is ever displayed.

use crate::input::TickInput;

use super::collision::is_hit;
use super::pool::SlotState;
use super::state::GameState;

/// Advance the game by one fixed ~30 Hz step
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.time_ticks += 1;

    // Steer and thrust
    state.ship.angle += input.turn.delta(state.config.turn_rate);
    state.thrusting = input.thrusting;
    if input.thrusting {
        let (angle, kick) = (state.ship.angle, state.config.accel_ship);
        state.ship.accelerate(angle, kick);
    }

    // Fire, cooldown-gated; a saturated pool drops the request
    if input.firing {
        state.try_fire();
    }

    let bounds = state.bounds();
    state.ship.integrate(bounds);

    // Asteroid pass: integrate each rock, then resolve its collisions.
    // Hidden entities still integrate but never enter a collision test -
    // their positions are pending-relocation garbage.
    let hitbox = state.hitbox();
    for i in 0..state.roids.len() {
        state.roids.get_mut(i).entity.integrate(bounds);

        // Shots first; a rock that dies to a shot is gone before the ship
        // test can see it
        for s in 0..state.shots.len() {
            if state.roids.get(i).state != SlotState::Alive {
                break;
            }
            if state.shots.get(s).state != SlotState::Alive {
                continue;
            }
            if is_hit(
                state.roids.get(i).entity.pos,
                state.shots.get(s).entity.pos,
                hitbox,
            ) {
                state.asteroid_hit(i, false);
                state.shots.kill(s); // the shot is consumed by the hit
            }
        }

        if state.roids.get(i).state == SlotState::Alive
            && is_hit(state.roids.get(i).entity.pos, state.ship.pos, hitbox)
        {
            state.asteroid_hit(i, true);
        }
    }

    // Shots: integrate, then age out the expired
    let shot_life = state.config.shot_life;
    for s in 0..state.shots.len() {
        state.shots.get_mut(s).entity.integrate(bounds);
        let expired = state.shots.get(s).state == SlotState::Alive
            && state.secs_since(state.shots.get(s).entity.born_tick) > shot_life;
        if expired {
            state.shots.kill(s);
        }
    }

    // The lone explosion drifts with whatever wreck it inherited
    state.explosion.integrate(bounds);

    // Shared respawn timer: one timer reveals every hidden rock at once and
    // retires the explosion
    if state.secs_since(state.last_respawn_tick) > state.config.respawn_interval {
        state.last_respawn_tick = state.time_ticks;
        state.roids.revive_all();
        state.explosion.visible = false;
    }
}
