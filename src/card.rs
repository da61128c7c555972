use crate::config::{self, CardConfig};
use crate::dom::{self, CssVarSurface};
use crate::events::{self, Listener, PointerWiring};
use crate::frame::{self, RafScheduler, SharedCard};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use tilt_core::TiltCard;
use wasm_bindgen::prelude::*;
use web_sys as web;

/// A mounted profile card. `destroy()` (or freeing the handle) cancels the
/// animation and releases every subscription.
#[wasm_bindgen]
pub struct ProfileCardHandle {
    card: SharedCard,
    wrapper: web::HtmlElement,
    listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl ProfileCardHandle {
    /// Root element, for callers that want to place it themselves.
    pub fn element(&self) -> web::HtmlElement {
        self.wrapper.clone()
    }

    #[wasm_bindgen(js_name = isActive)]
    pub fn is_active(&self) -> bool {
        self.card.borrow().is_active()
    }

    #[wasm_bindgen(js_name = isDestroyed)]
    pub fn is_destroyed(&self) -> bool {
        self.card.borrow().is_destroyed()
    }

    pub fn destroy(&mut self) {
        if self.card.borrow().is_destroyed() {
            return;
        }
        self.card.borrow_mut().destroy();
        frame::release_frame_callback(&self.card);
        for l in self.listeners.drain(..) {
            l.detach();
        }
        log::info!("[card] destroyed and unsubscribed");
    }
}

impl Drop for ProfileCardHandle {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl ProfileCardHandle {
    /// Build the card DOM and bind it. The wrapper is not attached yet;
    /// insert it before `start()` so the intro reads real geometry.
    pub fn create(
        document: &web::Document,
        config: CardConfig,
        on_contact: Option<js_sys::Function>,
    ) -> anyhow::Result<Self> {
        let CardConfig {
            options,
            content,
            style,
            contact,
        } = config;
        let els = dom::build_card(document, &content, &style)?;
        let surface = CssVarSurface::new(els.wrapper.clone(), els.card.clone());
        let card = TiltCard::new(options, surface, RafScheduler::default())?;
        let card: SharedCard = Rc::new(RefCell::new(card));
        frame::install_frame_callback(&card);

        let mut listeners = events::wire_pointer_handlers(&PointerWiring {
            card: card.clone(),
            card_element: els.card.clone(),
        });
        if let Some(button) = &els.contact_button {
            let route = config::contact_route(on_contact, contact);
            listeners.extend(events::wire_contact_button(button, route));
        }

        Ok(Self {
            card,
            wrapper: els.wrapper,
            listeners,
        })
    }

    pub fn start(&self) {
        if self.card.borrow_mut().mount(Instant::now()).is_some() {
            log::debug!("[card] intro started");
        }
    }

    pub fn wrapper(&self) -> &web::HtmlElement {
        &self.wrapper
    }
}
