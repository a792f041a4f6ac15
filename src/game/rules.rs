//! Tunable game constants.

use std::time::Duration;

/// Timing and geometry of a session.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRules {
    /// Session length
    pub duration: Duration,
    /// A target scores when the crosshair is at most this far away (px)
    pub hit_radius: f64,
    /// Drawn radius of a target (px)
    pub target_radius: u32,
    /// Time between target spawns
    pub spawn_interval: Duration,
    /// Full length of each crosshair arm (px)
    pub crosshair_size: u32,
    /// Crosshair stroke width (px)
    pub crosshair_thickness: u32,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            duration: Duration::from_secs(30),
            hit_radius: 20.0,
            target_radius: 10,
            spawn_interval: Duration::from_secs(3),
            crosshair_size: 20,
            crosshair_thickness: 2,
        }
    }
}

impl GameRules {
    /// Whole seconds left at `elapsed` into the session: `duration − ⌊elapsed⌋`.
    ///
    /// Goes negative once the session has overrun.
    pub fn remaining_secs(&self, elapsed: Duration) -> i64 {
        let total = i64::try_from(self.duration.as_secs()).unwrap_or(i64::MAX);
        let spent = i64::try_from(elapsed.as_secs()).unwrap_or(i64::MAX);
        total.saturating_sub(spent)
    }
}
