use instant::Instant;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tilt_core::{AnimationToken, FrameScheduler, TickOutcome, TiltCard};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom::CssVarSurface;

pub type WebCard = TiltCard<CssVarSurface, RafScheduler>;
pub type SharedCard = Rc<RefCell<WebCard>>;

/// `requestAnimationFrame` behind the engine's scheduler seam.
///
/// At most one browser frame is outstanding per card. The frame callback is
/// installed once per card and holds only a weak reference to it.
#[derive(Default)]
pub struct RafScheduler {
    raf_id: Option<i32>,
    pending: Option<AnimationToken>,
    callback: Option<Closure<dyn FnMut(f64)>>,
}

impl RafScheduler {
    /// Called first thing inside the frame callback: the browser frame is
    /// spent, hand back the token it was requested for.
    fn frame_fired(&mut self) -> Option<AnimationToken> {
        self.raf_id = None;
        self.pending.take()
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self, token: AnimationToken) {
        self.pending = Some(token);
        if self.raf_id.is_some() {
            return;
        }
        let (Some(window), Some(cb)) = (web::window(), self.callback.as_ref()) else {
            log::warn!("[frame] no window or callback; frame dropped");
            return;
        };
        match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => self.raf_id = Some(id),
            Err(e) => log::warn!("[frame] requestAnimationFrame failed: {:?}", e),
        }
    }

    fn cancel_frame(&mut self) {
        self.pending = None;
        if let Some(id) = self.raf_id.take() {
            if let Some(window) = web::window() {
                _ = window.cancel_animation_frame(id);
            }
        }
    }
}

/// Wire the per-card frame callback. Must run before the first animation.
pub fn install_frame_callback(card: &SharedCard) {
    let weak: Weak<RefCell<WebCard>> = Rc::downgrade(card);
    let closure = Closure::wrap(Box::new(move |_timestamp: f64| {
        let Some(card) = weak.upgrade() else {
            return;
        };
        let mut card = card.borrow_mut();
        let Some(token) = card.scheduler_mut().frame_fired() else {
            return;
        };
        if card.tick(token, Instant::now()) == TickOutcome::Stale {
            log::debug!("[frame] stale tick #{} ignored", token.id());
        }
    }) as Box<dyn FnMut(f64)>);
    card.borrow_mut().scheduler_mut().callback = Some(closure);
}

/// Drop the frame callback once the card is torn down.
pub fn release_frame_callback(card: &SharedCard) {
    let mut card = card.borrow_mut();
    card.scheduler_mut().cancel_frame();
    card.scheduler_mut().callback = None;
}
