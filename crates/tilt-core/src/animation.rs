//! Single-flight eased animation toward the card centre.
//!
//! The driver never schedules anything itself. A host starts an animation,
//! receives an [`AnimationToken`], and calls [`AnimationDriver::tick`] with that
//! token whenever its frame primitive fires. Tokens from canceled or
//! superseded animations are rejected, which makes late callbacks harmless.

use crate::math::{adjust, clamp, ease_in_out_cubic};
use crate::tilt::{CardGeometry, PointerSample};
use instant::Instant;
use std::time::Duration;

/// Identifies one started animation. Never reused within a driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AnimationToken(u64);

impl AnimationToken {
    pub fn id(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActiveAnimation {
    pub token: AnimationToken,
    pub started_at: Instant,
    pub duration: Duration,
    pub from: PointerSample,
    pub to: PointerSample,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum AnimationState {
    #[default]
    Idle,
    Animating(ActiveAnimation),
}

/// One interpolated step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationFrame {
    pub position: PointerSample,
    pub progress: f32,
    pub finished: bool,
}

#[derive(Debug, Default)]
pub struct AnimationDriver {
    state: AnimationState,
    issued: u64,
}

impl AnimationDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.state, AnimationState::Animating(_))
    }

    pub fn is_current(&self, token: AnimationToken) -> bool {
        matches!(self.state, AnimationState::Animating(a) if a.token == token)
    }

    /// Begin animating from `from` to the centre of `geometry`, superseding any
    /// animation already in flight.
    pub fn start(
        &mut self,
        now: Instant,
        duration: Duration,
        from: PointerSample,
        geometry: CardGeometry,
    ) -> AnimationToken {
        if self.cancel() {
            log::debug!("[anim] superseded in-flight animation");
        }
        self.issued += 1;
        let token = AnimationToken(self.issued);
        let to = geometry.center();
        self.state = AnimationState::Animating(ActiveAnimation {
            token,
            started_at: now,
            duration,
            from,
            to,
        });
        log::debug!(
            "[anim] start #{} {:?} ({:.1},{:.1}) -> ({:.1},{:.1})",
            token.0,
            duration,
            from.x,
            from.y,
            to.x,
            to.y
        );
        token
    }

    /// Stop the current animation without a final step. Safe to call when idle.
    pub fn cancel(&mut self) -> bool {
        match std::mem::take(&mut self.state) {
            AnimationState::Idle => false,
            AnimationState::Animating(a) => {
                log::debug!("[anim] cancel #{}", a.token.0);
                true
            }
        }
    }

    /// Advance the animation identified by `token` to `now`.
    ///
    /// Returns `None` for a stale token. The frame that reaches full progress
    /// is marked `finished` and returns the driver to idle.
    pub fn tick(&mut self, token: AnimationToken, now: Instant) -> Option<AnimationFrame> {
        let active = match self.state {
            AnimationState::Animating(a) if a.token == token => a,
            _ => return None,
        };
        let elapsed = if now > active.started_at {
            now - active.started_at
        } else {
            Duration::ZERO
        };
        let progress = if active.duration.is_zero() {
            1.0
        } else {
            clamp(
                (elapsed.as_secs_f64() / active.duration.as_secs_f64()) as f32,
                0.0,
                1.0,
            )
        };
        let eased = ease_in_out_cubic(progress);
        let position = PointerSample::new(
            adjust(eased, 0.0, 1.0, active.from.x, active.to.x),
            adjust(eased, 0.0, 1.0, active.from.y, active.to.y),
        );
        let finished = progress >= 1.0;
        if finished {
            self.state = AnimationState::Idle;
            log::debug!("[anim] finish #{}", token.0);
        }
        Some(AnimationFrame {
            position,
            progress,
            finished,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_by_default() {
        let d = AnimationDriver::new();
        assert!(!d.is_animating());
        assert_eq!(*d.state(), AnimationState::Idle);
    }

    #[test]
    fn tokens_are_never_reused() {
        let mut d = AnimationDriver::new();
        let now = Instant::now();
        let g = CardGeometry::new(100.0, 100.0);
        let a = d.start(now, Duration::from_millis(10), PointerSample::default(), g);
        d.cancel();
        let b = d.start(now, Duration::from_millis(10), PointerSample::default(), g);
        assert_ne!(a, b);
        assert!(d.is_current(b));
        assert!(!d.is_current(a));
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let mut d = AnimationDriver::new();
        let now = Instant::now();
        let g = CardGeometry::new(200.0, 100.0);
        let t = d.start(now, Duration::ZERO, PointerSample::new(0.0, 0.0), g);
        let f = d.tick(t, now).expect("current token");
        assert!(f.finished);
        assert_eq!(f.position, PointerSample::new(100.0, 50.0));
        assert!(!d.is_animating());
    }
}
