//! Game overlays: crosshair and targets.

use super::draw::{fill_circle, line};
use crate::camera::Frame;
use crate::game::{GameRules, Point, Target};

pub const CROSSHAIR_COLOR: [u8; 3] = [255, 0, 0];
pub const TARGET_COLOR: [u8; 3] = [255, 0, 0];
/// Score and countdown labels.
pub const HUD_COLOR: [u8; 3] = [0, 0, 255];

/// Draw a `+` of two `crosshair_size`-long arms centered on `center`.
pub fn draw_crosshair(frame: &mut Frame, center: Point, rules: &GameRules) {
    let half = (rules.crosshair_size / 2) as i32;
    let thickness = rules.crosshair_thickness;
    line(
        frame,
        Point::new(center.x - half, center.y),
        Point::new(center.x + half, center.y),
        CROSSHAIR_COLOR,
        thickness,
    );
    line(
        frame,
        Point::new(center.x, center.y - half),
        Point::new(center.x, center.y + half),
        CROSSHAIR_COLOR,
        thickness,
    );
}

/// Draw every target as a filled disc.
pub fn draw_targets(frame: &mut Frame, targets: &[Target], rules: &GameRules) {
    for target in targets {
        fill_circle(frame, target.position, rules.target_radius, TARGET_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_crosshair_arms() {
        let mut frame = Frame::filled(100, 100, [0, 0, 0]);
        let rules = GameRules::default();
        draw_crosshair(&mut frame, Point::new(50, 50), &rules);

        assert_eq!(frame.pixel(40, 50), Some(CROSSHAIR_COLOR));
        assert_eq!(frame.pixel(60, 50), Some(CROSSHAIR_COLOR));
        assert_eq!(frame.pixel(50, 40), Some(CROSSHAIR_COLOR));
        assert_eq!(frame.pixel(50, 60), Some(CROSSHAIR_COLOR));
        assert_eq!(frame.pixel(61, 50), Some([0, 0, 0]));
        assert_eq!(frame.pixel(55, 55), Some([0, 0, 0]));
    }

    #[test]
    fn test_crosshair_near_edge_does_not_panic() {
        let mut frame = Frame::filled(8, 8, [0, 0, 0]);
        draw_crosshair(&mut frame, Point::new(0, 7), &GameRules::default());
        assert_eq!(frame.pixel(0, 7), Some(CROSSHAIR_COLOR));
    }

    #[test]
    fn test_targets_drawn() {
        let mut frame = Frame::filled(100, 100, [0, 0, 0]);
        let targets = [
            Target {
                position: Point::new(20, 20),
                spawned_at: Duration::ZERO,
            },
            Target {
                position: Point::new(80, 70),
                spawned_at: Duration::ZERO,
            },
        ];
        draw_targets(&mut frame, &targets, &GameRules::default());
        assert_eq!(frame.pixel(20, 20), Some(TARGET_COLOR));
        assert_eq!(frame.pixel(30, 20), Some(TARGET_COLOR));
        assert_eq!(frame.pixel(80, 61), Some(TARGET_COLOR));
        assert_eq!(frame.pixel(50, 50), Some([0, 0, 0]));
    }
}
