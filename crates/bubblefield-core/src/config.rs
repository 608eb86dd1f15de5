// crates/bubblefield-core/src/config.rs
use glam::Vec2;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Parameters controlling a bubble field layout.
///
/// All positions handled by the engine are relative to the viewport center;
/// the zone radii below are measured from that origin. A config is built once
/// per viewport size class and treated as read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Maximum bubble diameter, used throughout the center zone.
    pub bubble_size: f32,
    /// Minimum bubble diameter, used beyond the fringe.
    pub min_bubble_size: f32,
    /// Horizontal half-extent of the center zone.
    pub x_radius: f32,
    /// Vertical half-extent of the center zone.
    pub y_radius: f32,
    /// Rounding radius of the center zone corners.
    pub corner_radius: f32,
    /// Width of the transition band surrounding the center zone.
    pub fringe_width: f32,
    /// Bubbles per even grid row; odd rows hold one less.
    pub num_cols: usize,
    /// Vertical spacing added to `bubble_size` for the grid pitch.
    pub row_gap: f32,
    /// Horizontal spacing added to `bubble_size` for the grid pitch.
    pub col_gap: f32,
    /// Pull shrunk bubbles toward the center zone.
    pub compact: bool,
    /// Extra inward pull (0-1) applied to bubbles beyond the fringe.
    pub gravitation: f32,
    /// Pan clamp bounds per axis.
    pub max_offset: Vec2,
    /// Scales the initial grid pitch.
    pub initial_spread: f32,
    /// Describe zone outlines for debug rendering.
    pub show_guides: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            bubble_size: 200.0,
            min_bubble_size: 20.0,
            x_radius: 200.0,
            y_radius: 200.0,
            corner_radius: 100.0,
            fringe_width: 100.0,
            num_cols: 6,
            row_gap: 16.0,
            col_gap: 16.0,
            compact: false,
            gravitation: 0.0,
            max_offset: Vec2::new(500.0, 500.0),
            initial_spread: 1.0,
            show_guides: false,
        }
    }
}

impl LayoutConfig {
    /// Returns a copy with every invariant-violating value clamped into range.
    ///
    /// Layout math stays total over the result: negatives floor at zero,
    /// `min_bubble_size` caps at `bubble_size`, `corner_radius` caps at the
    /// smaller zone radius and `gravitation` stays within 0-1.
    pub fn sanitized(&self) -> Self {
        let mut config = self.clone();
        config.bubble_size = config.bubble_size.max(0.0);
        config.min_bubble_size = config.min_bubble_size.clamp(0.0, config.bubble_size);
        config.x_radius = config.x_radius.max(0.0);
        config.y_radius = config.y_radius.max(0.0);
        config.corner_radius = config
            .corner_radius
            .clamp(0.0, config.x_radius.min(config.y_radius));
        config.fringe_width = config.fringe_width.max(0.0);
        config.num_cols = config.num_cols.max(1);
        config.row_gap = config.row_gap.max(0.0);
        config.col_gap = config.col_gap.max(0.0);
        config.gravitation = config.gravitation.clamp(0.0, 1.0);
        config.max_offset = config.max_offset.max(Vec2::ZERO);
        config.initial_spread = config.initial_spread.max(0.0);
        if config != *self {
            warn!("layout config had out-of-range values, clamped");
        }
        config
    }

    /// Tuned preset for narrow portrait phones (about 390x844 points):
    /// three rows of 2-3 bubbles fit the center zone.
    pub fn portrait_phone() -> Self {
        Self {
            bubble_size: 120.0,
            min_bubble_size: 60.0,
            x_radius: 180.0,
            y_radius: 180.0,
            corner_radius: 90.0,
            fringe_width: 120.0,
            num_cols: 3,
            row_gap: 16.0,
            col_gap: 16.0,
            compact: true,
            gravitation: 0.4,
            max_offset: Vec2::new(400.0, 600.0),
            initial_spread: 1.0,
            show_guides: false,
        }
    }

    /// Picks a config for the given viewport size.
    pub fn for_viewport(size: Vec2) -> Self {
        if (385.0..=395.0).contains(&size.x) && (840.0..=850.0).contains(&size.y) {
            return Self::portrait_phone();
        }

        let smaller = size.x.min(size.y);
        let multiplier = smaller / 400.0;

        if smaller < 360.0 {
            Self {
                bubble_size: 110.0 * multiplier,
                min_bubble_size: 50.0 * multiplier,
                x_radius: 130.0 * multiplier,
                y_radius: 130.0 * multiplier,
                corner_radius: 60.0 * multiplier,
                fringe_width: 100.0 * multiplier,
                num_cols: 4,
                row_gap: 12.0 * multiplier,
                col_gap: 12.0 * multiplier,
                compact: true,
                gravitation: 0.3,
                max_offset: Vec2::new(400.0, 600.0) * multiplier,
                initial_spread: 1.0,
                show_guides: false,
            }
        } else {
            Self {
                bubble_size: 180.0 * multiplier,
                min_bubble_size: 80.0 * multiplier,
                x_radius: 150.0 * multiplier,
                y_radius: 250.0 * multiplier,
                corner_radius: 70.0 * multiplier,
                fringe_width: 180.0 * multiplier,
                num_cols: 3,
                row_gap: 14.0 * multiplier,
                col_gap: 14.0 * multiplier,
                compact: true,
                gravitation: 0.0,
                max_offset: Vec2::new(500.0, 800.0) * multiplier,
                initial_spread: 1.0,
                show_guides: false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitized_clamps_negatives() {
        let config = LayoutConfig {
            bubble_size: -10.0,
            min_bubble_size: -20.0,
            x_radius: -5.0,
            fringe_width: -1.0,
            gravitation: 2.0,
            ..LayoutConfig::default()
        };
        let clean = config.sanitized();
        assert_eq!(clean.bubble_size, 0.0);
        assert_eq!(clean.min_bubble_size, 0.0);
        assert_eq!(clean.x_radius, 0.0);
        assert_eq!(clean.fringe_width, 0.0);
        assert_eq!(clean.gravitation, 1.0);
        assert_eq!(clean.corner_radius, 0.0);
    }

    #[test]
    fn test_sanitized_orders_sizes() {
        let config = LayoutConfig {
            bubble_size: 80.0,
            min_bubble_size: 120.0,
            ..LayoutConfig::default()
        };
        let clean = config.sanitized();
        assert_eq!(clean.min_bubble_size, 80.0);
        assert!(clean.min_bubble_size <= clean.bubble_size);
    }

    #[test]
    fn test_sanitized_caps_corner_radius() {
        let config = LayoutConfig {
            x_radius: 100.0,
            y_radius: 60.0,
            corner_radius: 90.0,
            ..LayoutConfig::default()
        };
        assert_eq!(config.sanitized().corner_radius, 60.0);
    }

    #[test]
    fn test_sanitized_is_identity_for_valid_config() {
        let config = LayoutConfig::portrait_phone();
        assert_eq!(config.sanitized(), config);
    }

    #[test]
    fn test_for_viewport_picks_portrait_phone() {
        let config = LayoutConfig::for_viewport(Vec2::new(390.0, 844.0));
        assert_eq!(config, LayoutConfig::portrait_phone());
    }

    #[test]
    fn test_for_viewport_scales_small_screens() {
        let config = LayoutConfig::for_viewport(Vec2::new(320.0, 568.0));
        assert_eq!(config.num_cols, 4);
        assert!(config.bubble_size < 110.0);
        assert_eq!(config.sanitized(), config);
    }

    #[test]
    fn test_for_viewport_scales_large_screens() {
        let config = LayoutConfig::for_viewport(Vec2::new(800.0, 1200.0));
        assert_eq!(config.num_cols, 3);
        assert!(config.bubble_size > 180.0);
        assert_eq!(config.sanitized(), config);
    }
}
