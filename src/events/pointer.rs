use crate::config::ContactRoute;
use crate::frame::{SharedCard, WebCard};
use crate::input;
use instant::Instant;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// A DOM subscription that can be removed again.
pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn attach(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        match target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref()) {
            Ok(()) => Some(Self {
                target: target.clone(),
                kind,
                closure,
            }),
            Err(e) => {
                log::warn!("[events] add {} listener failed: {:?}", kind, e);
                None
            }
        }
    }

    pub fn detach(self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// Run `f` on the card if it is still alive and `ev` is a pointer event.
fn with_card(
    weak: &Weak<RefCell<WebCard>>,
    ev: web::Event,
    f: impl FnOnce(&mut WebCard, web::PointerEvent),
) {
    let Some(card) = weak.upgrade() else {
        return;
    };
    let Ok(ev) = ev.dyn_into::<web::PointerEvent>() else {
        return;
    };
    f(&mut card.borrow_mut(), ev);
}

pub struct PointerWiring {
    pub card: SharedCard,
    pub card_element: web::HtmlElement,
}

/// Subscribe enter/move/leave on the card element. Nothing is subscribed when
/// tilt is disabled.
pub fn wire_pointer_handlers(w: &PointerWiring) -> Vec<Listener> {
    if !w.card.borrow().options().enable_tilt {
        return Vec::new();
    }
    let target: &web::EventTarget = w.card_element.as_ref();
    let mut listeners = Vec::with_capacity(3);

    let weak = Rc::downgrade(&w.card);
    listeners.extend(Listener::attach(target, "pointerenter", move |ev| {
        with_card(&weak, ev, |card, _| card.on_pointer_enter());
    }));

    let weak = Rc::downgrade(&w.card);
    let el: web::Element = w.card_element.clone().into();
    listeners.extend(Listener::attach(target, "pointermove", move |ev| {
        with_card(&weak, ev, |card, ev| {
            card.on_pointer_move(input::pointer_offset(&ev, &el));
        });
    }));

    let weak = Rc::downgrade(&w.card);
    let el: web::Element = w.card_element.clone().into();
    listeners.extend(Listener::attach(target, "pointerleave", move |ev| {
        with_card(&weak, ev, |card, ev| {
            let sample = input::pointer_offset(&ev, &el);
            log::debug!("[events] leave at {}", input::fmt_sample(sample));
            card.on_pointer_leave(sample, Instant::now());
        });
    }));

    listeners
}

/// Subscribe the contact button. Nothing is subscribed when the click has no
/// effect.
pub fn wire_contact_button(
    button: &web::Element,
    route: ContactRoute<js_sys::Function>,
) -> Option<Listener> {
    if matches!(route, ContactRoute::Nothing) {
        return None;
    }
    Listener::attach(button.as_ref(), "click", move |_ev| match &route {
        ContactRoute::Callback(cb) => {
            if let Err(e) = cb.call0(&JsValue::NULL) {
                log::warn!("[events] contact callback threw: {:?}", e);
            }
        }
        ContactRoute::OpenInNewTab(url) => {
            if let Some(window) = web::window() {
                if let Err(e) = window.open_with_url_and_target(url, "_blank") {
                    log::warn!("[events] open {} failed: {:?}", url, e);
                }
            }
        }
        ContactRoute::Nothing => {}
    })
}
