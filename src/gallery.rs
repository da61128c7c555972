use crate::card::ProfileCardHandle;
use crate::config::CardConfig;
use crate::constants::*;
use crate::dom::{self, js_err};
use std::cell::RefCell;
use std::rc::Rc;
use tilt_core::{
    stagger_delays, ContactAction, ProfileContent, RevealGate, REVEAL_THRESHOLD,
    REVEAL_TRANSITION,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

/// A container of profile cards that slide in, staggered, the first time the
/// container scrolls into view.
#[wasm_bindgen]
pub struct ProfileCardGallery {
    container: web::HtmlElement,
    cards: Vec<ProfileCardHandle>,
    wrappers: Rc<RefCell<Vec<web::HtmlElement>>>,
    gate: Rc<RefCell<RevealGate>>,
    observer: Option<web::IntersectionObserver>,
    observer_cb: Option<ObserverCallback>,
}

#[wasm_bindgen]
impl ProfileCardGallery {
    #[wasm_bindgen(constructor)]
    pub fn new(container_id: &str) -> Result<ProfileCardGallery, JsValue> {
        Self::create(container_id).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Append a card. `on_contact` handles contact clicks when given;
    /// otherwise `contact_url` opens in a new tab unless it is empty or `"#"`.
    #[wasm_bindgen(js_name = addCard)]
    pub fn add_card(
        &mut self,
        name: String,
        title: String,
        handle: String,
        status: String,
        avatar_url: String,
        contact_url: Option<String>,
        on_contact: Option<js_sys::Function>,
    ) -> Result<(), JsValue> {
        let config = CardConfig {
            content: ProfileContent {
                name,
                title,
                handle,
                status,
                avatar_url,
                ..ProfileContent::default()
            },
            contact: ContactAction::from_url(contact_url.as_deref()),
            ..CardConfig::default()
        };
        self.push(config, on_contact).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = cardCount)]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    #[wasm_bindgen(js_name = isRevealed)]
    pub fn is_revealed(&self) -> bool {
        self.gate.borrow().is_revealed()
    }

    pub fn destroy(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
        self.observer_cb = None;
        for mut card in self.cards.drain(..) {
            card.destroy();
        }
        self.wrappers.borrow_mut().clear();
    }
}

impl Drop for ProfileCardGallery {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl ProfileCardGallery {
    fn create(container_id: &str) -> anyhow::Result<Self> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let container: web::HtmlElement = document
            .get_element_by_id(container_id)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", container_id))?
            .dyn_into()
            .map_err(|e| js_err(e.into()))?;
        container.set_class_name(CLASS_GALLERY);
        container.set_inner_html("");

        let mut gallery = Self {
            container,
            cards: Vec::new(),
            wrappers: Rc::new(RefCell::new(Vec::new())),
            gate: Rc::new(RefCell::new(RevealGate::new())),
            observer: None,
            observer_cb: None,
        };
        gallery.observe()?;
        Ok(gallery)
    }

    pub fn push(
        &mut self,
        config: CardConfig,
        on_contact: Option<js_sys::Function>,
    ) -> anyhow::Result<()> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let card = ProfileCardHandle::create(&document, config, on_contact)?;
        self.container
            .append_child(card.wrapper())
            .map_err(js_err)?;
        card.start();
        self.wrappers.borrow_mut().push(card.wrapper().clone());
        self.cards.push(card);
        Ok(())
    }

    fn observe(&mut self) -> anyhow::Result<()> {
        let gate = self.gate.clone();
        let wrappers = self.wrappers.clone();
        let callback: ObserverCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                        continue;
                    };
                    let fire = gate
                        .borrow_mut()
                        .observe(entry.is_intersecting(), entry.intersection_ratio());
                    if fire {
                        reveal(&wrappers.borrow());
                        observer.unobserve(&entry.target());
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

        let init = web::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        let observer =
            web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(js_err)?;
        observer.observe(&self.container);
        self.observer = Some(observer);
        self.observer_cb = Some(callback);
        Ok(())
    }
}

fn reveal(wrappers: &[web::HtmlElement]) {
    let Some(window) = web::window() else {
        return;
    };
    let transition = format!(
        "opacity {0}s ease, transform {0}s ease",
        REVEAL_TRANSITION.as_secs_f32()
    );
    for (el, delay) in wrappers.iter().zip(stagger_delays(wrappers.len())) {
        let style = el.style();
        _ = style.set_property("opacity", "0");
        _ = style.set_property("transform", REVEAL_HIDDEN_TRANSFORM);
        _ = style.set_property("transition", &transition);

        let el = el.clone();
        let show = Closure::once_into_js(move || {
            let style = el.style();
            _ = style.set_property("opacity", "1");
            _ = style.set_property("transform", REVEAL_SHOWN_TRANSFORM);
        });
        if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            show.unchecked_ref(),
            delay.as_millis() as i32,
        ) {
            log::warn!("[gallery] setTimeout failed: {:?}", e);
        }
    }
    log::info!("[gallery] revealed {} cards", wrappers.len());
}
