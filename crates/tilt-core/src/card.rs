//! Interaction state machine for one tilt card.
//!
//! `TiltCard` turns enter/move/leave input into tilt updates and eased return
//! animations. It owns the presentation surface and the host's frame
//! scheduler so that cancellation can reach both in one place.

use crate::animation::{AnimationDriver, AnimationToken};
use crate::constants::{INITIAL_DURATION, INITIAL_X_OFFSET, INITIAL_Y_OFFSET, SMOOTH_DURATION};
use crate::error::CardError;
use crate::surface::{FrameScheduler, TiltSurface};
use crate::tilt::{compute_tilt, PointerSample, TiltState, TiltTuning};
use glam::Vec2;
use instant::Instant;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct CardOptions {
    /// When false the card ignores all pointer input and skips the intro.
    pub enable_tilt: bool,
    pub play_intro: bool,
    pub smooth_duration: Duration,
    pub intro_duration: Duration,
    /// Intro start point, measured from the top-right corner.
    pub intro_offset: Vec2,
    pub tuning: TiltTuning,
}

impl Default for CardOptions {
    fn default() -> Self {
        Self {
            enable_tilt: true,
            play_intro: true,
            smooth_duration: SMOOTH_DURATION,
            intro_duration: INITIAL_DURATION,
            intro_offset: Vec2::new(INITIAL_X_OFFSET, INITIAL_Y_OFFSET),
            tuning: TiltTuning::default(),
        }
    }
}

impl CardOptions {
    pub fn validate(&self) -> Result<(), CardError> {
        self.tuning.validate()?;
        if !self.intro_offset.is_finite() {
            return Err(CardError::option(
                "intro_offset",
                format!("non-finite offset {:?}", self.intro_offset),
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// More frames follow; the next one has been requested.
    Continue,
    /// Final frame applied; the card is at rest.
    Finished,
    /// The token no longer names the live animation. Nothing was applied.
    Stale,
}

pub struct TiltCard<S, F> {
    options: CardOptions,
    surface: S,
    scheduler: F,
    driver: AnimationDriver,
    active: bool,
    destroyed: bool,
    last_pointer: Option<PointerSample>,
    last_state: Option<TiltState>,
}

impl<S: TiltSurface, F: FrameScheduler> TiltCard<S, F> {
    pub fn new(options: CardOptions, surface: S, scheduler: F) -> Result<Self, CardError> {
        options.validate()?;
        Ok(Self {
            options,
            surface,
            scheduler,
            driver: AnimationDriver::new(),
            active: false,
            destroyed: false,
            last_pointer: None,
            last_state: None,
        })
    }

    pub fn options(&self) -> &CardOptions {
        &self.options
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn scheduler_mut(&mut self) -> &mut F {
        &mut self.scheduler
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn is_animating(&self) -> bool {
        self.driver.is_animating()
    }

    pub fn is_current(&self, token: AnimationToken) -> bool {
        !self.destroyed && self.driver.is_current(token)
    }

    pub fn last_pointer(&self) -> Option<PointerSample> {
        self.last_pointer
    }

    pub fn last_state(&self) -> Option<&TiltState> {
        self.last_state.as_ref()
    }

    fn accepts_input(&self) -> bool {
        !self.destroyed && self.options.enable_tilt
    }

    fn render(&mut self, sample: PointerSample) {
        let geometry = self.surface.geometry();
        let state = compute_tilt(sample, geometry, &self.options.tuning);
        self.surface.apply(&state);
        self.last_state = Some(state);
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
        self.surface.set_active(active);
    }

    fn start_animation(
        &mut self,
        now: Instant,
        duration: Duration,
        from: PointerSample,
    ) -> Option<AnimationToken> {
        if self.destroyed {
            return None;
        }
        self.scheduler.cancel_frame();
        let token = self.driver.start(now, duration, from, self.surface.geometry());
        self.scheduler.request_frame(token);
        Some(token)
    }

    /// Run the one-shot intro: snap to the preset off-centre point and ease
    /// back to the centre.
    pub fn mount(&mut self, now: Instant) -> Option<AnimationToken> {
        if !self.accepts_input() || !self.options.play_intro {
            return None;
        }
        let geometry = self.surface.geometry();
        let start = PointerSample::new(
            geometry.width - self.options.intro_offset.x,
            self.options.intro_offset.y,
        );
        self.render(start);
        self.start_animation(now, self.options.intro_duration, start)
    }

    pub fn on_pointer_enter(&mut self) {
        if !self.accepts_input() {
            return;
        }
        self.cancel_animation();
        self.set_active(true);
    }

    /// Direct 1:1 tracking, no animation.
    pub fn on_pointer_move(&mut self, sample: PointerSample) {
        if !self.accepts_input() {
            return;
        }
        self.last_pointer = Some(sample);
        self.render(sample);
    }

    pub fn on_pointer_leave(
        &mut self,
        sample: PointerSample,
        now: Instant,
    ) -> Option<AnimationToken> {
        if !self.accepts_input() {
            return None;
        }
        self.last_pointer = Some(sample);
        let token = self.start_animation(now, self.options.smooth_duration, sample);
        self.set_active(false);
        token
    }

    /// Host frame callback. Stale tokens are ignored.
    pub fn tick(&mut self, token: AnimationToken, now: Instant) -> TickOutcome {
        if self.destroyed {
            return TickOutcome::Stale;
        }
        let Some(frame) = self.driver.tick(token, now) else {
            return TickOutcome::Stale;
        };
        self.render(frame.position);
        if frame.finished {
            TickOutcome::Finished
        } else {
            self.scheduler.request_frame(token);
            TickOutcome::Continue
        }
    }

    /// Stop any in-flight animation and its pending frame. Idempotent.
    pub fn cancel_animation(&mut self) -> bool {
        self.scheduler.cancel_frame();
        self.driver.cancel()
    }

    /// Tear down: nothing this card does afterwards touches the surface.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.cancel_animation();
        self.destroyed = true;
        log::debug!("[card] destroyed");
    }
}

impl<S, F> std::fmt::Debug for TiltCard<S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TiltCard")
            .field("options", &self.options)
            .field("driver", &self.driver)
            .field("active", &self.active)
            .field("destroyed", &self.destroyed)
            .finish_non_exhaustive()
    }
}
