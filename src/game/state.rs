//! Per-session game state: score, crosshair and live targets.

use rand::Rng;
use std::time::Duration;

use super::geometry::Point;
use super::rules::GameRules;

/// A target waiting to be shot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    pub position: Point,
    /// Session clock reading when the target appeared
    pub spawned_at: Duration,
}

/// What happened to the game state during one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    /// Targets removed (and scored) this frame
    pub hits: Vec<Target>,
    /// Target added this frame, if the spawn timer fired
    pub spawned: Option<Target>,
    /// Whole seconds left, as shown on the HUD (may be ≤ 0 on the last frame)
    pub remaining_secs: i64,
    /// Whether the crosshair moved to a fresh detection
    pub aimed: bool,
}

/// Mutable state of one game session.
///
/// All times are readings of the session's [`Clock`](super::Clock); the
/// struct never looks at the wall clock itself.
#[derive(Debug, Clone)]
pub struct GameState {
    rules: GameRules,
    started_at: Duration,
    last_spawn: Duration,
    score: u32,
    crosshair: Point,
    targets: Vec<Target>,
}

impl GameState {
    /// Fresh session at clock reading `now` with the crosshair at `crosshair`.
    pub fn new(rules: GameRules, crosshair: Point, now: Duration) -> Self {
        Self {
            rules,
            started_at: now,
            last_spawn: now,
            score: 0,
            crosshair,
            targets: Vec::new(),
        }
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn crosshair(&self) -> Point {
        self.crosshair
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn elapsed(&self, now: Duration) -> Duration {
        now.saturating_sub(self.started_at)
    }

    pub fn remaining_secs(&self, now: Duration) -> i64 {
        self.rules.remaining_secs(self.elapsed(now))
    }

    /// Move the crosshair to a detection. `None` leaves it where it is.
    pub fn aim(&mut self, detection: Option<Point>) -> bool {
        match detection {
            Some(point) => {
                self.crosshair = point;
                true
            }
            None => false,
        }
    }

    /// Remove every target within the hit radius of the crosshair, scoring
    /// one point each.
    pub fn resolve_hits(&mut self) -> Vec<Target> {
        let crosshair = self.crosshair;
        let radius = self.rules.hit_radius;
        let (hits, remaining): (Vec<Target>, Vec<Target>) = self
            .targets
            .drain(..)
            .partition(|t| t.position.distance_to(&crosshair) <= radius);
        self.targets = remaining;
        self.score += hits.len() as u32;
        hits
    }

    /// True once a full spawn interval has passed since the last spawn.
    pub fn spawn_due(&self, now: Duration) -> bool {
        now.saturating_sub(self.last_spawn) >= self.rules.spawn_interval
    }

    /// Place a target and restart the spawn timer.
    pub fn add_target(&mut self, position: Point, now: Duration) -> Target {
        let target = Target {
            position,
            spawned_at: now,
        };
        self.targets.push(target);
        self.last_spawn = now;
        target
    }

    /// Spawn one target at a uniformly random pixel of a `width` x `height`
    /// frame if the spawn timer has fired.
    pub fn spawn_if_due<R: Rng + ?Sized>(
        &mut self,
        now: Duration,
        width: u32,
        height: u32,
        rng: &mut R,
    ) -> Option<Target> {
        if !self.spawn_due(now) || width == 0 || height == 0 {
            return None;
        }
        let position = Point::new(
            rng.gen_range(0..width) as i32,
            rng.gen_range(0..height) as i32,
        );
        Some(self.add_target(position, now))
    }

    /// Run one frame of game logic: aim, resolve hits, then spawn.
    ///
    /// Hits are resolved before spawning, so a target is never scored in
    /// the frame it appears.
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        now: Duration,
        detection: Option<Point>,
        frame_size: (u32, u32),
        rng: &mut R,
    ) -> FrameReport {
        let aimed = self.aim(detection);
        let hits = self.resolve_hits();
        let spawned = self.spawn_if_due(now, frame_size.0, frame_size.1, rng);

        FrameReport {
            hits,
            spawned,
            remaining_secs: self.remaining_secs(now),
            aimed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn secs(s: f64) -> Duration {
        Duration::from_secs_f64(s)
    }

    fn state_at(crosshair: Point) -> GameState {
        GameState::new(GameRules::default(), crosshair, Duration::ZERO)
    }

    #[test]
    fn test_new_state() {
        let state = state_at(Point::new(320, 240));
        assert_eq!(state.score(), 0);
        assert_eq!(state.crosshair(), Point::new(320, 240));
        assert!(state.targets().is_empty());
        assert_eq!(state.remaining_secs(Duration::ZERO), 30);
    }

    #[test]
    fn test_aim_ignores_missing_detection() {
        let mut state = state_at(Point::new(10, 10));
        assert!(!state.aim(None));
        assert_eq!(state.crosshair(), Point::new(10, 10));
        assert!(state.aim(Some(Point::new(50, 60))));
        assert_eq!(state.crosshair(), Point::new(50, 60));
    }

    #[test]
    fn test_close_target_is_hit() {
        let mut state = state_at(Point::new(100, 100));
        state.add_target(Point::new(105, 105), Duration::ZERO);
        let hits = state.resolve_hits();
        assert_eq!(hits.len(), 1);
        assert_eq!(state.score(), 1);
        assert!(state.targets().is_empty());
    }

    #[test]
    fn test_far_target_persists() {
        let mut state = state_at(Point::new(0, 0));
        state.add_target(Point::new(50, 50), Duration::ZERO);
        assert!(state.resolve_hits().is_empty());
        assert_eq!(state.score(), 0);
        assert_eq!(state.targets().len(), 1);
    }

    #[test]
    fn test_hit_radius_is_inclusive() {
        let mut state = state_at(Point::new(0, 0));
        state.add_target(Point::new(20, 0), Duration::ZERO);
        state.add_target(Point::new(12, 16), Duration::ZERO); // exactly 20
        state.add_target(Point::new(15, 14), Duration::ZERO); // ~20.5
        assert_eq!(state.resolve_hits().len(), 2);
        assert_eq!(state.targets().len(), 1);
        assert_eq!(state.targets()[0].position, Point::new(15, 14));
    }

    #[test]
    fn test_all_targets_in_range_score_together() {
        let mut state = state_at(Point::new(200, 200));
        for offset in [0, 3, 6] {
            state.add_target(Point::new(200 + offset, 200), Duration::ZERO);
        }
        state.add_target(Point::new(200, 200), Duration::ZERO); // duplicate allowed
        assert_eq!(state.resolve_hits().len(), 4);
        assert_eq!(state.score(), 4);
    }

    #[test]
    fn test_spawn_cadence() {
        let mut state = state_at(Point::new(0, 0));
        let mut rng = StdRng::seed_from_u64(7);

        assert!(state.spawn_if_due(secs(2.99), 640, 480, &mut rng).is_none());
        assert!(state.spawn_if_due(secs(3.0), 640, 480, &mut rng).is_some());
        assert!(state.spawn_if_due(secs(5.9), 640, 480, &mut rng).is_none());
        assert!(state.spawn_if_due(secs(6.1), 640, 480, &mut rng).is_some());
        assert_eq!(state.targets().len(), 2);
    }

    #[test]
    fn test_spawn_stays_in_bounds() {
        let mut state = state_at(Point::new(0, 0));
        let mut rng = StdRng::seed_from_u64(42);
        for i in 1..=200u64 {
            let t = state
                .spawn_if_due(Duration::from_secs(3 * i), 64, 48, &mut rng)
                .expect("spawn due");
            assert!((0..64).contains(&t.position.x));
            assert!((0..48).contains(&t.position.y));
        }
    }

    #[test]
    fn test_spawn_skipped_for_empty_frame() {
        let mut state = state_at(Point::new(0, 0));
        let mut rng = StdRng::seed_from_u64(1);
        assert!(state.spawn_if_due(secs(4.0), 0, 480, &mut rng).is_none());
        assert!(state.spawn_due(secs(4.0)));
    }

    #[test]
    fn test_advance_resolves_before_spawning() {
        let mut state = state_at(Point::new(0, 0));
        // A frame of 1x1 forces the spawn onto (0, 0), right under the crosshair
        let mut rng = StdRng::seed_from_u64(3);
        let report = state.advance(secs(3.0), None, (1, 1), &mut rng);
        assert!(report.hits.is_empty());
        assert_eq!(report.spawned.map(|t| t.position), Some(Point::new(0, 0)));
        assert_eq!(state.score(), 0);

        let report = state.advance(secs(3.1), None, (1, 1), &mut rng);
        assert_eq!(report.hits.len(), 1);
        assert_eq!(state.score(), 1);
    }
}
