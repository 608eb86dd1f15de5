// crates/bubblefield-layout/src/grid.rs
use bubblefield_core::LayoutConfig;
use glam::Vec2;

/// sqrt(3)/2, the vertical compression between interlocking hex rows.
const HEX_ROW_FACTOR: f32 = 0.866;

/// Initial honeycomb grid for `count` bubbles, centered on the origin.
///
/// Even rows hold `num_cols` bubbles, odd rows one less and are inset by
/// half the horizontal pitch, which makes adjacent rows interlock. Rows fill
/// left to right, top to bottom, in item-index order. Deterministic: the same
/// inputs always produce the same positions.
pub fn honeycomb_positions(count: usize, config: &LayoutConfig) -> Vec<Vec2> {
    let mut positions = Vec::with_capacity(count);

    let cols = config.num_cols.max(1);
    let horizontal_pitch = (config.bubble_size + config.col_gap) * config.initial_spread;
    let vertical_pitch =
        (config.bubble_size + config.row_gap) * HEX_ROW_FACTOR * config.initial_spread;

    let mut row = 0usize;
    let mut col = 0usize;
    for _ in 0..count {
        let odd_row = row % 2 == 1;
        // A single-column grid would leave odd rows empty; keep at least one
        // slot per row so generation always terminates.
        let cols_in_row = if odd_row { (cols - 1).max(1) } else { cols };
        let x_inset = if odd_row { horizontal_pitch / 2.0 } else { 0.0 };

        positions.push(Vec2::new(
            col as f32 * horizontal_pitch + x_inset,
            row as f32 * vertical_pitch,
        ));

        col += 1;
        if col >= cols_in_row {
            row += 1;
            col = 0;
        }
    }

    center_on_origin(&mut positions);
    positions
}

/// Translates the set so its bounding-box center sits at the origin.
fn center_on_origin(positions: &mut [Vec2]) {
    let Some(&first) = positions.first() else {
        return;
    };
    let mut min = first;
    let mut max = first;
    for position in positions.iter() {
        min = min.min(*position);
        max = max.max(*position);
    }
    let center = (min + max) * 0.5;
    for position in positions.iter_mut() {
        *position -= center;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn test_config() -> LayoutConfig {
        LayoutConfig {
            bubble_size: 100.0,
            col_gap: 10.0,
            row_gap: 10.0,
            num_cols: 3,
            initial_spread: 1.0,
            ..LayoutConfig::default()
        }
    }

    fn bounding_center(positions: &[Vec2]) -> Vec2 {
        let mut min = positions[0];
        let mut max = positions[0];
        for p in positions {
            min = min.min(*p);
            max = max.max(*p);
        }
        (min + max) * 0.5
    }

    #[test]
    fn test_seven_items_three_cols() {
        // Rows fill 3 / 2 / 3; seven items stop two short of the last row.
        let positions = honeycomb_positions(7, &test_config());
        assert_eq!(positions.len(), 7);

        let pitch = 110.0;
        let row_pitch = 110.0 * HEX_ROW_FACTOR;

        // Row membership shows in the y coordinate.
        assert!((positions[0].y - positions[2].y).abs() < EPS);
        assert!((positions[3].y - positions[4].y).abs() < EPS);
        assert!((positions[5].y - positions[6].y).abs() < EPS);
        assert!((positions[3].y - positions[0].y - row_pitch).abs() < EPS);
        assert!((positions[5].y - positions[3].y - row_pitch).abs() < EPS);

        // The odd row is inset by half the pitch.
        assert!((positions[3].x - positions[0].x - pitch / 2.0).abs() < EPS);
        assert!((positions[1].x - positions[0].x - pitch).abs() < EPS);

        let center = bounding_center(&positions);
        assert!(center.x.abs() < EPS && center.y.abs() < EPS);
    }

    #[test]
    fn test_empty_and_single() {
        assert!(honeycomb_positions(0, &test_config()).is_empty());

        let positions = honeycomb_positions(1, &test_config());
        assert_eq!(positions, vec![Vec2::ZERO]);
    }

    #[test]
    fn test_bounding_box_centered_for_any_count() {
        for count in 1..40 {
            let positions = honeycomb_positions(count, &test_config());
            assert_eq!(positions.len(), count);
            let center = bounding_center(&positions);
            assert!(
                center.x.abs() < EPS && center.y.abs() < EPS,
                "count {} left center at {:?}",
                count,
                center
            );
        }
    }

    #[test]
    fn test_deterministic() {
        let a = honeycomb_positions(23, &test_config());
        let b = honeycomb_positions(23, &test_config());
        assert_eq!(a, b);
    }

    #[test]
    fn test_spread_multiplier_scales_pitch() {
        let config = test_config();
        let spread = LayoutConfig {
            initial_spread: 1.5,
            ..test_config()
        };
        let base = honeycomb_positions(7, &config);
        let wide = honeycomb_positions(7, &spread);
        for (a, b) in base.iter().zip(&wide) {
            assert!((b.x - a.x * 1.5).abs() < EPS);
            assert!((b.y - a.y * 1.5).abs() < EPS);
        }
    }

    #[test]
    fn test_single_column_terminates() {
        let config = LayoutConfig {
            num_cols: 1,
            ..test_config()
        };
        let positions = honeycomb_positions(5, &config);
        assert_eq!(positions.len(), 5);
        // One slot per row: strictly descending in y after centering.
        for pair in positions.windows(2) {
            assert!(pair[1].y > pair[0].y);
        }
    }
}
