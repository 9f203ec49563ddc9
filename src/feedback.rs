//! Feedback collaborator contract
//!
//! The simulation emits discrete events; the board layer turns them into
//! LED fills and sound. Fire-and-forget: the core never waits on feedback
//! hardware, and a sink that does nothing is perfectly valid.

/// Events emitted by the simulation, drained once per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A shot actually spawned (dropped fire requests are silent)
    ShotFired,
    /// A shot destroyed an asteroid; `color` is the suggested LED fill
    AsteroidDestroyed { color: u32 },
    /// An asteroid rammed the ship
    ShipHit { color: u32 },
}

/// Per-board feedback adapter (LEDs, piezo, ...)
pub trait FeedbackSink {
    fn handle(&mut self, event: GameEvent);
}

/// Discards every event; headless runs and tests
#[derive(Debug, Default)]
pub struct NullFeedback;

impl FeedbackSink for NullFeedback {
    fn handle(&mut self, _event: GameEvent) {}
}

/// Logs events in place of LED/speaker hardware
#[derive(Debug, Default)]
pub struct LogFeedback;

impl FeedbackSink for LogFeedback {
    fn handle(&mut self, event: GameEvent) {
        match event {
            GameEvent::ShotFired => log::debug!("shot fired"),
            GameEvent::AsteroidDestroyed { color } => {
                log::info!("asteroid destroyed, leds #{color:06x}");
            }
            GameEvent::ShipHit { color } => {
                log::info!("ship hit, leds #{color:06x}");
            }
        }
    }
}
