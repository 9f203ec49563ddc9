//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod pool;
pub mod sprite;
pub mod state;
pub mod tick;

pub use collision::is_hit;
pub use entity::Entity;
pub use pool::{Pool, Slot, SlotState};
pub use sprite::{frame_index, quantized_angle};
pub use state::GameState;
pub use tick::tick;
