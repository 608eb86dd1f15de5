// crates/bubblefield-core/src/state.rs
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{LayoutConfig, Rect};

/// Zone classification of a position relative to the viewport center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    /// Inside the rounded center rectangle, bubbles render at full size.
    Center,
    /// Transition band, bubble size interpolates toward the minimum.
    Fringe,
    /// Beyond the fringe, bubbles render at minimum size.
    Outer,
}

/// Computed visual state of a single bubble.
///
/// A full map of these is rebuilt from scratch on every recompute pass;
/// consumers must treat each snapshot as immutable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BubbleState {
    /// Rendered diameter.
    pub size: f32,
    /// Render position relative to the viewport center, after compaction.
    pub position: Vec2,
    /// Grid position after pan offset, before compaction.
    pub original_position: Vec2,
    /// `size / bubble_size`.
    pub scale: f32,
    /// Euclidean distance of `original_position` from the origin.
    pub distance_to_center: f32,
    pub region: Region,
}

impl Default for BubbleState {
    fn default() -> Self {
        Self {
            size: 0.0,
            position: Vec2::ZERO,
            original_position: Vec2::ZERO,
            scale: 1.0,
            distance_to_center: 0.0,
            region: Region::Center,
        }
    }
}

/// Zone outlines a renderer can draw when `show_guides` is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GuideSpec {
    /// Bounds of the center zone, centered on the origin.
    pub center: Rect,
    pub center_corner_radius: f32,
    /// Outer edge of the fringe band.
    pub fringe: Rect,
    pub fringe_corner_radius: f32,
}

impl GuideSpec {
    pub fn from_config(config: &LayoutConfig) -> Self {
        let config = config.sanitized();
        let center_size = Vec2::new(config.x_radius, config.y_radius) * 2.0;
        Self {
            center: Rect::centered_at(Vec2::ZERO, center_size),
            center_corner_radius: config.corner_radius,
            fringe: Rect::centered_at(Vec2::ZERO, center_size + Vec2::splat(config.fringe_width * 2.0)),
            fringe_corner_radius: config.corner_radius + config.fringe_width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guide_spec_tracks_config() {
        let config = LayoutConfig {
            x_radius: 120.0,
            y_radius: 180.0,
            corner_radius: 70.0,
            fringe_width: 100.0,
            ..LayoutConfig::default()
        };
        let guides = GuideSpec::from_config(&config);
        assert_eq!(guides.center.size, Vec2::new(240.0, 360.0));
        assert_eq!(guides.center.center(), Vec2::ZERO);
        assert_eq!(guides.fringe.size, Vec2::new(440.0, 560.0));
        assert_eq!(guides.fringe_corner_radius, 170.0);
    }
}
