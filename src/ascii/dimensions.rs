//! Grid sizing that keeps the camera picture's aspect ratio in a terminal.

/// Terminal cells are roughly twice as tall as they are wide.
pub const DEFAULT_CHAR_ASPECT_RATIO: f32 = 2.0;

/// Largest `(cols, rows)` grid inside `max_cols` x `max_rows` that shows a
/// `img_width` x `img_height` image undistorted.
pub fn calculate_dimensions(img_width: u32, img_height: u32, max_cols: u16, max_rows: u16) -> (u16, u16) {
    calculate_dimensions_with_aspect(img_width, img_height, max_cols, max_rows, DEFAULT_CHAR_ASPECT_RATIO)
}

/// [`calculate_dimensions`] for fonts with a different cell height/width ratio.
pub fn calculate_dimensions_with_aspect(
    img_width: u32,
    img_height: u32,
    max_cols: u16,
    max_rows: u16,
    char_aspect: f32,
) -> (u16, u16) {
    if img_width == 0 || img_height == 0 || max_cols == 0 || max_rows == 0 {
        return (0, 0);
    }

    // cols / rows that displays as img_width / img_height
    let grid_aspect = img_width as f32 / img_height as f32 * char_aspect;

    let rows_for_full_width = (max_cols as f32 / grid_aspect).round() as u16;
    if rows_for_full_width > 0 && rows_for_full_width <= max_rows {
        return (max_cols, rows_for_full_width);
    }

    let cols = ((max_rows as f32 * grid_aspect).round() as u16).min(max_cols);
    (cols.max(1), max_rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_bound() {
        // 4:3 at 2:1 cells -> cols/rows = 8/3; 80 cols -> 30 rows
        assert_eq!(calculate_dimensions(640, 480, 80, 40), (80, 30));
    }

    #[test]
    fn test_height_bound() {
        // 24 rows * 8/3 = 64 cols
        assert_eq!(calculate_dimensions(640, 480, 200, 24), (64, 24));
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(calculate_dimensions(0, 480, 80, 24), (0, 0));
        assert_eq!(calculate_dimensions(640, 480, 0, 24), (0, 0));
    }

    #[test]
    fn test_custom_aspect() {
        // square cells: 4:3 image in 40x40 -> 40x30
        assert_eq!(calculate_dimensions_with_aspect(640, 480, 40, 40, 1.0), (40, 30));
    }
}
