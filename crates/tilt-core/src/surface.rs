//! Host-facing seams: where tilt values go and how frames get scheduled.

use crate::animation::AnimationToken;
use crate::tilt::{CardGeometry, TiltState, TiltUniforms};

/// Presentation binding for one card.
///
/// `apply` receives the whole value set at once; implementations must write
/// it in one go so a renderer never observes a half-updated state.
pub trait TiltSurface {
    /// Current rendered box. Queried on every computation, never cached.
    fn geometry(&self) -> CardGeometry;
    fn apply(&mut self, state: &TiltState);
    fn set_active(&mut self, active: bool);
}

/// Host per-frame primitive (`requestAnimationFrame`, a render loop, a timer).
pub trait FrameScheduler {
    /// Arrange for the card's `tick(token, ..)` to run on the next frame.
    fn request_frame(&mut self, token: AnimationToken);
    /// Drop a pending frame request, if any. Idempotent.
    fn cancel_frame(&mut self);
}

/// Scheduler for hosts that already run their own loop: the pending token is
/// parked here and the loop drains it once per frame.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    pending: Option<AnimationToken>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<AnimationToken> {
        self.pending
    }

    pub fn take_pending(&mut self) -> Option<AnimationToken> {
        self.pending.take()
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self, token: AnimationToken) {
        self.pending = Some(token);
    }

    fn cancel_frame(&mut self) {
        self.pending = None;
    }
}

/// Surface that keeps the latest state packed for a GPU uniform buffer.
#[derive(Debug, Clone)]
pub struct UniformSurface {
    geometry: CardGeometry,
    state: TiltState,
    active: bool,
}

impl UniformSurface {
    pub fn new(geometry: CardGeometry) -> Self {
        Self {
            geometry,
            state: TiltState::neutral(),
            active: false,
        }
    }

    pub fn resize(&mut self, geometry: CardGeometry) {
        self.geometry = geometry;
    }

    pub fn state(&self) -> &TiltState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn uniforms(&self) -> TiltUniforms {
        self.state.uniforms(self.active)
    }
}

impl TiltSurface for UniformSurface {
    fn geometry(&self) -> CardGeometry {
        self.geometry
    }

    fn apply(&mut self, state: &TiltState) {
        self.state = *state;
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}
