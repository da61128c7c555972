#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod card;
mod config;
mod constants;
mod dom;
mod events;
mod frame;
mod gallery;
mod input;

pub use card::ProfileCardHandle;
pub use gallery::ProfileCardGallery;

thread_local! {
    // Cards mounted from markup live as long as the page does.
    static AUTO_MOUNTED: RefCell<Vec<ProfileCardHandle>> = const { RefCell::new(Vec::new()) };
}

fn read_config(el: &web::Element) -> anyhow::Result<config::CardConfig> {
    Ok(config::parse_card_config(|name| el.get_attribute(name))?)
}

fn mount_into(
    document: &web::Document,
    host: &web::Element,
    on_contact: Option<js_sys::Function>,
) -> anyhow::Result<ProfileCardHandle> {
    let cfg = read_config(host)?;
    let handle = ProfileCardHandle::create(document, cfg, on_contact)?;
    host.append_child(handle.wrapper()).map_err(dom::js_err)?;
    handle.start();
    Ok(handle)
}

/// Mount a card inside the element with `element_id`, configured from its
/// `data-*` attributes. `on_contact`, when given, handles contact clicks
/// instead of `data-contact-url`.
#[wasm_bindgen(js_name = mountProfileCard)]
pub fn mount_profile_card(
    element_id: &str,
    on_contact: Option<js_sys::Function>,
) -> Result<ProfileCardHandle, JsValue> {
    let mount = || -> anyhow::Result<ProfileCardHandle> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let host = document
            .get_element_by_id(element_id)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", element_id))?;
        mount_into(&document, &host, on_contact)
    };
    mount().map_err(|e| JsValue::from_str(&e.to_string()))
}

fn auto_mount(document: &web::Document) -> anyhow::Result<usize> {
    let nodes = document
        .query_selector_all(constants::AUTO_MOUNT_SELECTOR)
        .map_err(dom::js_err)?;
    let mut mounted = 0;
    for i in 0..nodes.length() {
        let Some(host) = nodes.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        match mount_into(document, &host, None) {
            Ok(handle) => {
                AUTO_MOUNTED.with(|cards| cards.borrow_mut().push(handle));
                mounted += 1;
            }
            Err(e) => log::error!("[mount] card {} skipped: {:?}", i, e),
        }
    }
    Ok(mounted)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("tilt-card-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let mounted = auto_mount(&document)?;
    log::info!("[mount] {} cards from markup", mounted);
    Ok(())
}
