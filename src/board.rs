//! Hideout board layout.
//!
//! The layout is a pure function of the window dimensions and grid shape:
//! the grid is inset by a margin of one eighth of the width and one sixth of
//! the height, and hideout centers sit in the middle of each cell.

use bevy_ecs::resource::Resource;
use glam::Vec2;

/// Fixed hideout positions and the shared target radius for one session.
///
/// Positions are in row-major order. Immutable once computed.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct BoardLayout {
    pub positions: Vec<Vec2>,
    pub radius: f32,
}

/// Computes the hideout layout for a window of the given size.
///
/// Produces exactly `rows * cols` positions. Degenerate window sizes are out
/// of scope; the fixed 800x600 window is well clear of them.
pub fn compute_layout(window_width: u32, window_height: u32, rows: u32, cols: u32) -> BoardLayout {
    let margin_x = window_width / 8;
    let margin_y = window_height / 6;

    let available_width = window_width - 2 * margin_x;
    let available_height = window_height - 2 * margin_y;

    let cell_w = available_width / cols;
    let cell_h = available_height / rows;

    let mut positions = Vec::with_capacity((rows * cols) as usize);
    for row in 0..rows {
        for col in 0..cols {
            let x = margin_x + cell_w * col + cell_w / 2;
            let y = margin_y + cell_h * row + cell_h / 2;
            positions.push(Vec2::new(x as f32, y as f32));
        }
    }

    let radius = (cell_w.min(cell_h) / 3) as f32;
    BoardLayout { positions, radius }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_row_major() {
        let layout = compute_layout(800, 600, 3, 3);
        // Within a row, x increases; between rows, y increases.
        for row in 0..3 {
            for col in 0..2 {
                let a = layout.positions[row * 3 + col];
                let b = layout.positions[row * 3 + col + 1];
                assert!(b.x > a.x);
                assert_eq!(a.y, b.y);
            }
        }
        assert!(layout.positions[3].y > layout.positions[0].y);
    }
}
