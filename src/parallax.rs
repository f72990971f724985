//! Pointer-driven parallax for the hero background.
//!
//! The animator is plain state; the hero component owns the pointer listener
//! and the animation-frame loop and forwards both into it. While [`Phase::Idle`]
//! every input is ignored, so a frame that fires after unmount cannot move
//! the background.

use crate::constants::{PARALLAX_DAMPING, PARALLAX_RANGE_PX, PARALLAX_SCALE};
use crate::pointer::viewport_fraction;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// CSS transform for the background layer.
    pub fn transform(&self) -> String {
        format!(
            "scale({}) translate({}px, {}px)",
            PARALLAX_SCALE, self.x, self.y
        )
    }
}

#[inline]
pub fn damp(current: f64, target: f64, factor: f64) -> f64 {
    current + (target - current) * factor
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Tracking,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParallaxAnimator {
    phase: Phase,
    position: Offset,
    target: Offset,
    damping: f64,
    range_px: f64,
}

impl Default for ParallaxAnimator {
    fn default() -> Self {
        Self::new(PARALLAX_DAMPING, PARALLAX_RANGE_PX)
    }
}

impl ParallaxAnimator {
    pub fn new(damping: f64, range_px: f64) -> Self {
        Self {
            phase: Phase::Idle,
            position: Offset::ZERO,
            target: Offset::ZERO,
            damping,
            range_px,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_tracking(&self) -> bool {
        self.phase == Phase::Tracking
    }

    pub fn position(&self) -> Offset {
        self.position
    }

    pub fn target(&self) -> Offset {
        self.target
    }

    pub fn mount(&mut self) {
        self.phase = Phase::Tracking;
    }

    /// Stops tracking and drops the smoothed position.
    pub fn unmount(&mut self) {
        self.phase = Phase::Idle;
        self.position = Offset::ZERO;
        self.target = Offset::ZERO;
    }

    /// Records the latest pointer sample in client px.
    pub fn on_pointer(&mut self, client_x: f64, client_y: f64, width: f64, height: f64) {
        if !self.is_tracking() {
            return;
        }
        let (Some(fx), Some(fy)) = (
            viewport_fraction(client_x, width),
            viewport_fraction(client_y, height),
        ) else {
            return;
        };
        self.target = Offset::new(fx * self.range_px, fy * self.range_px);
    }

    /// Advances one frame. Returns the new position, or `None` when idle.
    pub fn tick(&mut self) -> Option<Offset> {
        if !self.is_tracking() {
            return None;
        }
        self.position = Offset::new(
            damp(self.position.x, self.target.x, self.damping),
            damp(self.position.y, self.target.y, self.damping),
        );
        Some(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_at_origin() {
        let animator = ParallaxAnimator::default();
        assert_eq!(animator.phase(), Phase::Idle);
        assert_eq!(animator.position(), Offset::ZERO);
    }

    #[test]
    fn pointer_maps_viewport_fraction_to_range() {
        let mut animator = ParallaxAnimator::default();
        animator.mount();
        animator.on_pointer(400.0, 150.0, 800.0, 600.0);
        assert_eq!(animator.target(), Offset::new(7.5, 3.75));
    }

    #[test]
    fn zero_sized_viewport_keeps_previous_target() {
        let mut animator = ParallaxAnimator::default();
        animator.mount();
        animator.on_pointer(800.0, 600.0, 800.0, 600.0);
        animator.on_pointer(10.0, 10.0, 0.0, 600.0);
        assert_eq!(animator.target(), Offset::new(15.0, 15.0));
    }

    #[test]
    fn transform_string() {
        assert_eq!(
            Offset::new(1.5, -2.0).transform(),
            "scale(1.1) translate(1.5px, -2px)"
        );
    }

    #[test]
    fn damp_with_zero_delta_is_identity() {
        assert_eq!(damp(3.25, 3.25, PARALLAX_DAMPING), 3.25);
    }
}
