//! Pointer hover feedback for spread items and page tabs.

use raylib::prelude::*;

use crate::constants::HOVER_ZOOM_DURATION;
use crate::layout::{ImageSlot, Point};

/// Progress of one slot's hover animation, 0 = resting, 1 = fully hovered.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HoverState {
    pub hovered: bool,
    pub transform: f32,
    pub zoom: f32,
}

impl HoverState {
    pub fn eased_transform(&self) -> f32 {
        eased(self.transform)
    }

    pub fn eased_zoom(&self) -> f32 {
        eased(self.zoom)
    }
}

pub fn eased(progress: f32) -> f32 {
    ease::cubic_in_out(progress.clamp(0.0, 1.0), 0.0, 1.0, 1.0)
}

/// Move `current` towards `target` at a rate that covers 0..1 in `duration` seconds.
pub fn approach(current: f32, target: f32, dt: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        return target;
    }
    let step = dt / duration;
    if current < target {
        (current + step).min(target)
    } else {
        (current - step).max(target)
    }
}

/// Slots that react to a pointer at `pointer`.
///
/// The topmost reactive slot under the pointer wins, together with every
/// slot sharing its hover area (a frame and the photo inside it).
pub fn hovered_slots(slots: &[ImageSlot], pointer: Point) -> Vec<usize> {
    let top = slots
        .iter()
        .enumerate()
        .filter(|(_, s)| !s.hover.is_none() && s.hit_area().contains(pointer))
        .max_by_key(|(i, s)| (s.z, *i));

    let Some((_, top)) = top else {
        return Vec::new();
    };
    let area = top.hit_area();
    slots
        .iter()
        .enumerate()
        .filter(|(_, s)| !s.hover.is_none() && s.hit_area() == area)
        .map(|(i, _)| i)
        .collect()
}

#[derive(Debug, Default)]
pub struct HoverTracker {
    states: Vec<HoverState>,
}

impl HoverTracker {
    pub fn reset(&mut self, slot_count: usize) {
        self.states = vec![HoverState::default(); slot_count];
    }

    pub fn state(&self, index: usize) -> HoverState {
        self.states.get(index).copied().unwrap_or_default()
    }

    /// `pointer` is in spread-local coordinates.
    pub fn update(&mut self, slots: &[ImageSlot], pointer: Option<Point>, dt: f32) {
        if self.states.len() != slots.len() {
            self.reset(slots.len());
        }
        let hovered = pointer.map(|p| hovered_slots(slots, p)).unwrap_or_default();

        for (i, (state, slot)) in self.states.iter_mut().zip(slots).enumerate() {
            state.hovered = hovered.contains(&i);
            let target = if state.hovered { 1.0 } else { 0.0 };
            state.transform = approach(state.transform, target, dt, slot.hover.duration);
            state.zoom = approach(state.zoom, target, dt, HOVER_ZOOM_DURATION);
        }
    }
}
