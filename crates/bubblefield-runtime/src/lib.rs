// crates/bubblefield-runtime/src/lib.rs

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::time::Duration;

use bubblefield_core::{
    BubbleState, FieldError, FieldEvent, Gesture, GuideSpec, LayoutConfig, Rect, Result,
};
use bubblefield_layout::{bubble_size, compacted_position, honeycomb_positions, region_of};
use glam::Vec2;
use tracing::{debug, trace};

/// Dampening applied to pointer deltas once panning would leave the field
/// empty; the drag keeps responding but with heavy resistance.
const ELASTIC_FACTOR: f32 = 0.2;

/// Exponential approach rate of the rebound animation, per second.
const REBOUND_RATE: f32 = 12.0;

/// Offset distance at which a rebound snaps to its target and settles.
const REBOUND_EPSILON: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
enum PanPhase {
    Idle,
    Dragging { last: Vec2 },
    Rebounding { target: Vec2 },
}

/// Stateful bubble layout controller.
///
/// Owns the pan offset and republishes the complete per-item visual state map
/// after every mutation: gesture input, animation ticks, item changes,
/// viewport resizes. The host renders from [`states`](Self::states), feeds
/// gestures in and drains [`FieldEvent`]s back out. Single-threaded by
/// design; drive it from the event loop that owns the surface.
pub struct BubbleField<I> {
    items: Vec<I>,
    config: LayoutConfig,
    viewport: Vec2,
    initial_positions: Vec<Vec2>,
    offset: Vec2,
    phase: PanPhase,
    states: HashMap<I, BubbleState>,
    events: Vec<FieldEvent<I>>,
}

impl<I> BubbleField<I>
where
    I: Eq + Hash + Clone + fmt::Debug,
{
    pub fn new(items: Vec<I>, config: LayoutConfig, viewport: Vec2) -> Self {
        let config = config.sanitized();
        let initial_positions = honeycomb_positions(items.len(), &config);
        let mut field = Self {
            items,
            config,
            viewport,
            initial_positions,
            offset: Vec2::ZERO,
            phase: PanPhase::Idle,
            states: HashMap::new(),
            events: Vec::new(),
        };
        field.recompute();
        field
    }

    /// Replaces the laid-out item set and rebuilds the grid.
    pub fn set_items(&mut self, items: Vec<I>) {
        self.items = items;
        self.initial_positions = honeycomb_positions(self.items.len(), &self.config);
        self.recompute();
    }

    /// Swaps in a new configuration (e.g. after a size-class change).
    pub fn set_config(&mut self, config: LayoutConfig) {
        self.config = config.sanitized();
        self.initial_positions = honeycomb_positions(self.items.len(), &self.config);
        self.offset = self.clamp_offset(self.offset);
        self.recompute();
    }

    /// Viewport resize. Keeps the pan offset but re-derives all states, since
    /// visibility is resolution-dependent.
    pub fn resize(&mut self, viewport: Vec2) {
        self.viewport = viewport;
        self.recompute();
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Restores a previously saved pan offset (clamped to bounds).
    pub fn set_offset(&mut self, offset: Vec2) {
        self.offset = self.clamp_offset(offset);
        self.recompute();
    }

    /// Complete visual state map, rebuilt on every recompute. Replace, never
    /// patch: ids absent from the current item set are gone from the map.
    pub fn states(&self) -> &HashMap<I, BubbleState> {
        &self.states
    }

    pub fn state_of(&self, id: &I) -> Option<&BubbleState> {
        self.states.get(id)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, PanPhase::Dragging { .. })
    }

    pub fn is_rebounding(&self) -> bool {
        matches!(self.phase, PanPhase::Rebounding { .. })
    }

    /// Zone outlines for debug rendering, when enabled in the config.
    pub fn guides(&self) -> Option<GuideSpec> {
        self.config
            .show_guides
            .then(|| GuideSpec::from_config(&self.config))
    }

    /// Id of the item currently closest to the viewport center.
    pub fn nearest_to_center(&self) -> Option<&I> {
        self.items
            .iter()
            .filter_map(|id| self.states.get(id).map(|state| (id, state)))
            .min_by(|a, b| {
                a.1.distance_to_center
                    .partial_cmp(&b.1.distance_to_center)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|(id, _)| id)
    }

    /// Pan gesture input. Content moves opposite the pointer; offsets are
    /// clamped per axis, and dragging toward empty space meets elastic
    /// resistance instead of a hard stop.
    pub fn handle_gesture(&mut self, gesture: Gesture) {
        match gesture {
            Gesture::Start { position } => {
                // A fresh drag takes over any in-flight rebound.
                self.phase = PanPhase::Dragging { last: position };
            }
            Gesture::Move { position } => {
                let PanPhase::Dragging { last } = self.phase else {
                    trace!("pointer move without an active drag, ignored");
                    return;
                };
                let delta = position - last;
                let mut candidate = self.clamp_offset(self.offset - delta);
                if !self.any_visible_at(candidate) {
                    candidate = self.clamp_offset(self.offset - delta * ELASTIC_FACTOR);
                }
                self.offset = candidate;
                self.phase = PanPhase::Dragging { last: position };
                self.recompute();
            }
            Gesture::End | Gesture::Cancel => {
                if !self.is_dragging() {
                    return;
                }
                self.offset = self.clamp_offset(self.offset);
                if self.any_visible_at(self.offset) {
                    self.phase = PanPhase::Idle;
                } else {
                    let target = self.rebound_target();
                    debug!(?target, "nothing visible after release, rebounding");
                    self.phase = PanPhase::Rebounding { target };
                }
                self.recompute();
            }
        }
    }

    /// Animation tick from the host timer. Advances an in-flight rebound
    /// toward its target and settles once within a fixed epsilon. Idle and
    /// dragging phases ignore ticks, so it is safe to call every frame.
    pub fn update(&mut self, delta: Duration) {
        let PanPhase::Rebounding { target } = self.phase else {
            return;
        };
        let blend = 1.0 - (-REBOUND_RATE * delta.as_secs_f32()).exp();
        self.offset += (target - self.offset) * blend;
        if self.offset.distance(target) <= REBOUND_EPSILON {
            self.offset = target;
            self.phase = PanPhase::Idle;
        }
        self.recompute();
    }

    /// Tap report from the renderer; `frame` is the screen-space rectangle it
    /// resolved for the bubble. Queued as a [`FieldEvent`] for the host to
    /// start whatever transition follows.
    pub fn item_tapped(&mut self, id: &I, frame: Rect) -> Result<()> {
        if !self.items.contains(id) {
            return Err(FieldError::UnknownItem(format!("{:?}", id)));
        }
        self.events.push(FieldEvent::ItemTapped {
            id: id.clone(),
            frame,
        });
        Ok(())
    }

    /// Drains the outbound event queue.
    pub fn drain_events(&mut self) -> Vec<FieldEvent<I>> {
        self.events.drain(..).collect()
    }

    fn clamp_offset(&self, offset: Vec2) -> Vec2 {
        offset.clamp(-self.config.max_offset, self.config.max_offset)
    }

    /// True when at least one bubble would remain visible at `offset`. The
    /// viewport is outset by half the maximum bubble size so partially
    /// off-screen bubbles still count.
    fn any_visible_at(&self, offset: Vec2) -> bool {
        let visible = Rect::centered_at(Vec2::ZERO, self.viewport)
            .outset(Vec2::splat(self.config.bubble_size / 2.0));
        self.initial_positions
            .iter()
            .any(|position| visible.contains(*position - offset))
    }

    /// Offset that centers the initial position nearest the origin, or zero
    /// when the field is empty. Centering item `i` means offsetting by its
    /// own initial position.
    fn rebound_target(&self) -> Vec2 {
        self.initial_positions
            .iter()
            .copied()
            .min_by(|a, b| {
                a.length()
                    .partial_cmp(&b.length())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .unwrap_or(Vec2::ZERO)
    }

    /// Full recompute pass: region, size and compacted position per item,
    /// assembled into a fresh state map that replaces the previous one.
    fn recompute(&mut self) {
        let mut states = HashMap::with_capacity(self.items.len());
        for (index, id) in self.items.iter().enumerate() {
            let Some(initial) = self.initial_positions.get(index) else {
                continue;
            };
            let original_position = *initial - self.offset;
            let region = region_of(original_position, &self.config);
            let size = bubble_size(original_position, region, &self.config);
            let position = compacted_position(original_position, region, &self.config);
            let scale = if self.config.bubble_size > 0.0 {
                size / self.config.bubble_size
            } else {
                1.0
            };
            states.insert(
                id.clone(),
                BubbleState {
                    size,
                    position,
                    original_position,
                    scale,
                    distance_to_center: original_position.length(),
                    region,
                },
            );
        }
        trace!(count = states.len(), offset = ?self.offset, "recomputed bubble states");
        self.states = states;
    }
}
