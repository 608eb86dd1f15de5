// crates/bubblefield-layout/src/zones.rs
use bubblefield_core::{LayoutConfig, Region};
use glam::Vec2;
use tracing::trace;

/// Euclidean distance between two points. Zone thresholds are compared
/// against this exact metric, so no approximation is allowed here.
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// A position is in the corner quadrant of the center zone when it clears
/// both radii at once; there the rounded corner governs classification.
fn in_corner_zone(position: Vec2, config: &LayoutConfig) -> bool {
    position.x.abs() > config.x_radius && position.y.abs() > config.y_radius
}

/// Center of the rounding circle for the quadrant `position` lies in.
fn internal_corner(position: Vec2, config: &LayoutConfig) -> Vec2 {
    Vec2::new(
        (config.x_radius - config.corner_radius).copysign(position.x),
        (config.y_radius - config.corner_radius).copysign(position.y),
    )
}

/// Classifies a position (relative to the viewport center) against the
/// configured zones. Exact boundary distances resolve outward: a point at
/// precisely `fringe_width` beyond the center zone is `Outer`.
pub fn region_of(position: Vec2, config: &LayoutConfig) -> Region {
    if in_corner_zone(position, config) {
        let d = distance(position, internal_corner(position, config));
        if d < config.corner_radius {
            Region::Center
        } else if d < config.corner_radius + config.fringe_width {
            Region::Fringe
        } else {
            Region::Outer
        }
    } else {
        let d = edge_distance(position, config);
        if d == 0.0 {
            Region::Center
        } else if d < config.fringe_width {
            Region::Fringe
        } else {
            Region::Outer
        }
    }
}

/// Distance beyond the center-zone boundary, always >= 0. Sizing and
/// compaction both read this, measured the same way in both the corner and
/// the edge cases, which is what keeps them continuous across the zones.
pub fn edge_distance(position: Vec2, config: &LayoutConfig) -> f32 {
    if in_corner_zone(position, config) {
        let d = distance(position, internal_corner(position, config));
        (d - config.corner_radius).max(0.0)
    } else {
        let dx = (position.x.abs() - config.x_radius).max(0.0);
        let dy = (position.y.abs() - config.y_radius).max(0.0);
        dx.max(dy)
    }
}

/// Interpolation progress through the fringe band, clamped to [0, 1].
fn fringe_progress(position: Vec2, config: &LayoutConfig) -> f32 {
    if config.fringe_width > 0.0 {
        (edge_distance(position, config) / config.fringe_width).clamp(0.0, 1.0)
    } else {
        1.0
    }
}

/// Rendered diameter for a bubble at `position`. Full size in the center
/// zone, minimum size outside the fringe, linear in between: equal to
/// `bubble_size` at the inner fringe boundary and `min_bubble_size` at the
/// outer one.
pub fn bubble_size(position: Vec2, region: Region, config: &LayoutConfig) -> f32 {
    match region {
        Region::Center => config.bubble_size,
        Region::Outer => config.min_bubble_size,
        Region::Fringe => {
            let progress = fringe_progress(position, config);
            let size = config.bubble_size + progress * (config.min_bubble_size - config.bubble_size);
            trace!(?position, progress, size, "fringe size");
            size
        }
    }
}

/// Nearest point on the center-zone boundary reference used for compaction:
/// the quadrant's internal corner in the corner zone, otherwise the edge
/// point matching the purely horizontal or vertical displacement.
fn boundary_reference(position: Vec2, config: &LayoutConfig) -> Vec2 {
    if in_corner_zone(position, config) {
        internal_corner(position, config)
    } else if position.x.abs() > config.x_radius {
        Vec2::new(config.x_radius.copysign(position.x), position.y)
    } else if position.y.abs() > config.y_radius {
        Vec2::new(position.x, config.y_radius.copysign(position.y))
    } else {
        position
    }
}

/// Pulls a shrunk bubble toward the center zone when compact mode is on.
///
/// Fringe bubbles move by the sizing progress times the full size range, so
/// the shrinking edge stays visually anchored at the zone boundary. Outer
/// bubbles move by the full range plus a gravitation share of their distance
/// beyond the fringe, clamped so the pull never overshoots that distance.
pub fn compacted_position(position: Vec2, region: Region, config: &LayoutConfig) -> Vec2 {
    if !config.compact || region == Region::Center {
        return position;
    }

    let to_boundary = boundary_reference(position, config) - position;
    let length = to_boundary.length();
    if length == 0.0 {
        return position;
    }
    let direction = to_boundary / length;

    let base = config.bubble_size - config.min_bubble_size;
    let displacement = match region {
        Region::Center => 0.0,
        Region::Fringe => fringe_progress(position, config) * base,
        Region::Outer => {
            let beyond = (edge_distance(position, config) - config.fringe_width).max(0.0);
            (base + beyond * config.gravitation).min(base + beyond)
        }
    };

    trace!(?position, ?region, displacement, "compaction");
    position + direction * displacement
}
