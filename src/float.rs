use std::f32::consts::PI;

use crate::constants::*;
use crate::ticker::{Tick, TickListener};

const FRAMES_PER_SECOND: f32 = FPS as f32;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingElement {
    pub base_top: f32,
    pub base_left: f32,
    pub amplitude: f32,
    pub speed: f32,
    pub phase: f32,
}

impl FloatingElement {
    pub const fn new(base_top: f32, base_left: f32) -> Self {
        Self {
            base_top,
            base_left,
            amplitude: 30.0,
            speed: 1.0,
            phase: 0.0,
        }
    }

    pub const fn with_motion(mut self, amplitude: f32, speed: f32, phase: f32) -> Self {
        self.amplitude = amplitude;
        self.speed = speed;
        self.phase = phase;
        self
    }

    /// `base_top + amplitude * sin(elapsed * speed + phase)`
    pub fn displayed_top(&self, elapsed: f32) -> f32 {
        self.base_top + self.amplitude * (elapsed * self.speed + self.phase).sin()
    }

    #[cfg(test)]
    pub fn period(&self) -> f32 {
        2.0 * PI / self.speed
    }
}

/// The three background clouds, out of step with each other.
pub const CLOUDS: [FloatingElement; 3] = [
    FloatingElement::new(100.0, -50.0).with_motion(25.0, 0.8, 0.0),
    FloatingElement::new(300.0, 1200.0).with_motion(30.0, 1.1, 1.0),
    FloatingElement::new(600.0, 100.0).with_motion(35.0, 0.9, 2.0),
];

/// Extra 0 -> `CLOUD_BOB_HEIGHT` -> 0 bob, eased in and out on both legs.
pub fn bob_offset(elapsed: f32) -> f32 {
    let cycle = (elapsed / CLOUD_BOB_PERIOD).rem_euclid(1.0);
    let leg = if cycle < 0.5 { cycle * 2.0 } else { (1.0 - cycle) * 2.0 };
    CLOUD_BOB_HEIGHT * (1.0 - (PI * leg).cos()) * 0.5
}

// --- Elapsed time is frames / 60, so drift follows the refresh count ---
#[derive(Debug, Clone, PartialEq)]
pub struct DriftingOrnament {
    pub element: FloatingElement,
    frame: u64,
    top: f32,
}

impl DriftingOrnament {
    pub fn new(element: FloatingElement) -> Self {
        Self {
            element,
            frame: 0,
            top: element.displayed_top(0.0),
        }
    }

    #[cfg(test)]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn elapsed(&self) -> f32 {
        self.frame as f32 / FRAMES_PER_SECOND
    }

    pub fn top(&self) -> f32 {
        self.top
    }

    pub fn left(&self) -> f32 {
        self.element.base_left
    }

    pub fn bob(&self) -> f32 {
        bob_offset(self.elapsed())
    }
}

impl TickListener for DriftingOrnament {
    fn on_tick(&mut self, _tick: &Tick) {
        self.frame += 1;
        self.top = self.element.displayed_top(self.elapsed());
    }
}
