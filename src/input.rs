//! Input collaborator contract
//!
//! Boards quantize whatever their hardware is - keys, buttons, an analog
//! stick - down to a three-state turn plus thrust/fire holds. The
//! simulation never sees raw hardware state.

use crate::normalize_angle;
use crate::sim::GameState;

/// Three-state turn intent; there is no analog steering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Turn {
    Left,
    #[default]
    None,
    Right,
}

impl Turn {
    /// Signed per-tick angle delta at the board's turn rate
    #[inline]
    pub fn delta(self, rate: f32) -> f32 {
        match self {
            Turn::Left => -rate,
            Turn::None => 0.0,
            Turn::Right => rate,
        }
    }
}

/// Intents for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub turn: Turn,
    pub thrusting: bool,
    pub firing: bool,
}

/// Per-board input adapter, polled exactly once per tick.
///
/// `state` is a read-only view of the world: hardware adapters ignore it,
/// synthetic pilots may peek.
pub trait InputSource {
    fn poll(&mut self, state: &GameState) -> TickInput;
}

/// Demo pilot for running without board hardware: chases the nearest
/// visible asteroid, thrusts in bursts, and holds fire (the cooldown does
/// the rate limiting).
#[derive(Debug, Default)]
pub struct Autopilot;

impl InputSource for Autopilot {
    fn poll(&mut self, state: &GameState) -> TickInput {
        let ship = &state.ship;

        let Some((_, target)) = state.roids.iter_alive().min_by(|(_, a), (_, b)| {
            let da = (a.pos - ship.pos).length();
            let db = (b.pos - ship.pos).length();
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        }) else {
            return TickInput::default();
        };

        // Heading 0 is up the screen with y growing downward
        let to = target.pos - ship.pos;
        let desired = to.x.atan2(-to.y);
        let err = normalize_angle(desired - ship.angle);

        // Dead zone of half a turn step so the nose doesn't chatter
        let turn = if err > state.config.turn_rate / 2.0 {
            Turn::Right
        } else if err < -state.config.turn_rate / 2.0 {
            Turn::Left
        } else {
            Turn::None
        };

        TickInput {
            turn,
            // Thrust in short bursts to keep speed manageable
            thrusting: state.time_ticks % 30 < 8,
            firing: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardConfig;

    #[test]
    fn test_turn_delta() {
        assert_eq!(Turn::Left.delta(0.15), -0.15);
        assert_eq!(Turn::None.delta(0.15), 0.0);
        assert_eq!(Turn::Right.delta(0.15), 0.15);
    }

    #[test]
    fn test_autopilot_steers_toward_target() {
        let mut state = GameState::new(BoardConfig::macropad(), 7);
        // Ship pointing up at screen center; park the only rock due right
        for idx in 1..state.roids.len() {
            state.roids.kill(idx);
        }
        state.ship.angle = 0.0;
        state.roids.get_mut(0).entity.pos = state.ship.pos + glam::Vec2::new(30.0, 0.0);

        let input = Autopilot.poll(&state);
        assert_eq!(input.turn, Turn::Right);
        assert!(input.firing);
    }

    #[test]
    fn test_autopilot_idles_without_targets() {
        let mut state = GameState::new(BoardConfig::macropad(), 7);
        for idx in 0..state.roids.len() {
            state.roids.kill(idx);
        }
        let input = Autopilot.poll(&state);
        assert_eq!(input.turn, Turn::None);
        assert!(!input.firing);
    }
}
