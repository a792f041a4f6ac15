//! Unit tests for the ASCII game view.
//!
//! - Luminance and glyph mapping
//! - Cell averaging and grid sizing
//! - Scene rendering with target and crosshair markers

use blue_sniper::ascii::*;
use blue_sniper::camera::Frame;
use blue_sniper::game::{GameRules, Point, Scene, Target};
use blue_sniper::render::{draw_crosshair, draw_targets, CROSSHAIR_COLOR};
use blue_sniper::terminal::{AsciiFrame, GameView, Hud, CROSSHAIR_GLYPH, TARGET_GLYPH};
use std::time::Duration;

fn scene<'a>(frame: &'a Frame, crosshair: Point, targets: &'a [Target], rules: &'a GameRules) -> Scene<'a> {
    Scene {
        frame,
        crosshair,
        targets,
        score: 0,
        remaining_secs: 30,
        rules,
    }
}

// ==================== Luminance / Mapping Tests ====================

#[test]
fn test_luminance_weights() {
    assert_eq!(luminance(255, 0, 0), 76);
    assert_eq!(luminance(0, 255, 0), 149);
    assert_eq!(luminance(0, 0, 255), 29);
    assert_eq!(luminance(255, 255, 255), 255);
}

#[test]
fn test_each_charset_spans_dark_to_bright() {
    for charset in [CharSet::Standard, CharSet::Blocks, CharSet::Minimal] {
        let chars = charset.chars();
        assert_eq!(glyph_for(0, chars, false), ' ');
        assert_eq!(glyph_for(255, chars, false), *chars.last().unwrap());
    }
}

#[test]
fn test_invert_swaps_ends() {
    let chars = BLOCKS_CHARSET;
    assert_eq!(glyph_for(0, chars, true), '█');
    assert_eq!(glyph_for(255, chars, true), ' ');
}

#[test]
fn test_charset_cycle_returns_to_start() {
    let start = CharSet::default();
    assert_eq!(start, CharSet::Blocks);
    assert_eq!(start.next().next().next(), start);
    assert_eq!(CharSet::from_name("MINIMAL"), Some(CharSet::Minimal));
    assert_eq!(CharSet::from_name("braille"), None);
}

// ==================== Downsampling Tests ====================

#[test]
fn test_downsample_averages_each_cell() {
    // Left half white, right half black, 2x1 grid
    let mut frame = Frame::filled(4, 2, [0, 0, 0]);
    for y in 0..2 {
        for x in 0..2 {
            frame.put_pixel(x, y, [255, 255, 255]);
        }
    }
    let (mut colors, mut brightness) = (Vec::new(), Vec::new());
    assert_eq!(downsample_cells_into(&frame, 2, 1, &mut colors, &mut brightness), 2);
    assert_eq!(brightness, vec![255, 0]);
    assert_eq!(colors[0], CellColor { r: 255, g: 255, b: 255 });
    assert_eq!(colors[1], CellColor::default());
}

#[test]
fn test_downsample_more_cells_than_pixels() {
    let frame = Frame::filled(2, 2, [100, 100, 100]);
    let (mut colors, mut brightness) = (Vec::new(), Vec::new());
    assert_eq!(downsample_cells_into(&frame, 4, 4, &mut colors, &mut brightness), 16);
    assert!(brightness.iter().all(|&b| b == 100));
}

#[test]
fn test_cell_of_maps_pixels_to_grid() {
    assert_eq!(CellRect::cell_of(0, 0, 80, 30, 640, 480), Some((0, 0)));
    assert_eq!(CellRect::cell_of(639, 479, 80, 30, 640, 480), Some((79, 29)));
    assert_eq!(CellRect::cell_of(320, 240, 80, 30, 640, 480), Some((40, 15)));
    assert_eq!(CellRect::cell_of(-1, 0, 80, 30, 640, 480), None);
    assert_eq!(CellRect::cell_of(640, 0, 80, 30, 640, 480), None);
}

#[test]
fn test_dimensions_keep_aspect() {
    assert_eq!(calculate_dimensions(640, 480, 80, 40), (80, 30));
    assert_eq!(calculate_dimensions(640, 480, 200, 24), (64, 24));
}

// ==================== Scene Rendering Tests ====================

#[test]
fn test_view_fits_terminal() {
    let frame = Frame::filled(640, 480, [0, 0, 0]);
    let rules = GameRules::default();
    let mut view = GameView::new(CharSet::Standard, false);
    let grid = view.render(&scene(&frame, Point::new(-50, -50), &[], &rules), 80, 40);

    assert_eq!((grid.width, grid.height), (80, 30));
    assert_eq!(grid.chars.len(), 80 * 30);
    assert!(grid.chars.iter().all(|&c| c == ' '));
}

#[test]
fn test_view_stamps_markers() {
    let frame = Frame::filled(640, 480, [0, 0, 0]);
    let rules = GameRules::default();
    let targets = [Target {
        position: Point::new(8, 16),
        spawned_at: Duration::ZERO,
    }];
    let mut view = GameView::new(CharSet::Blocks, false);
    let grid = view.render(&scene(&frame, Point::new(320, 240), &targets, &rules), 80, 30);

    let (ch, color) = grid.get(1, 1).unwrap();
    assert_eq!(ch, TARGET_GLYPH);
    assert_eq!(color.r, 255);

    let (ch, _) = grid.get(40, 15).unwrap();
    assert_eq!(ch, CROSSHAIR_GLYPH);
}

#[test]
fn test_view_crosshair_wins_shared_cell() {
    let frame = Frame::filled(64, 48, [0, 0, 0]);
    let rules = GameRules::default();
    let here = Point::new(10, 10);
    let targets = [Target {
        position: here,
        spawned_at: Duration::ZERO,
    }];
    let mut view = GameView::new(CharSet::Minimal, false);
    let grid = view.render(&scene(&frame, here, &targets, &rules), 32, 12);
    assert_eq!(grid.chars.iter().filter(|&&c| c == CROSSHAIR_GLYPH).count(), 1);
    assert_eq!(grid.chars.iter().filter(|&&c| c == TARGET_GLYPH).count(), 0);
}

#[test]
fn test_overlays_drawn_in_red() {
    let mut frame = Frame::filled(100, 100, [0, 0, 0]);
    let rules = GameRules::default();
    let targets = [Target {
        position: Point::new(80, 80),
        spawned_at: Duration::ZERO,
    }];
    draw_crosshair(&mut frame, Point::new(50, 50), &rules);
    draw_targets(&mut frame, &targets, &rules);

    assert_eq!(frame.pixel(50, 50), Some(CROSSHAIR_COLOR));
    assert_eq!(frame.pixel(80, 80), Some([255, 0, 0]));
    assert_eq!(frame.pixel(5, 5), Some([0, 0, 0]));
}

#[test]
fn test_ascii_frame_text() {
    let mut grid = AsciiFrame::new(3, 2);
    grid.stamp(1, 0, '+', CellColor::default());
    grid.stamp(9, 9, '!', CellColor::default());
    assert_eq!(grid.to_string_display(), " + \n   ");
}

#[test]
fn test_hud_labels() {
    let hud = Hud::default();
    assert_eq!(hud.score_label(3), "Score: 3");
    assert_eq!(hud.time_label(0), "Time: 0");
    assert_eq!(hud.status_text(CharSet::Blocks), " blocks | c: charset | q: quit ");
}
