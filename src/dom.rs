use crate::config::CardStyle;
use crate::constants::*;
use tilt_core::{ProfileContent, TiltState, TiltSurface};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::input;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

fn element(document: &web::Document, tag: &str, class: &str) -> anyhow::Result<web::Element> {
    let el = document.create_element(tag).map_err(js_err)?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    Ok(el)
}

fn append(parent: &web::Element, child: &web::Element) -> anyhow::Result<()> {
    parent.append_child(child).map(|_| ()).map_err(js_err)
}

fn text_element(
    document: &web::Document,
    tag: &str,
    class: &str,
    text: &str,
) -> anyhow::Result<web::Element> {
    let el = element(document, tag, class)?;
    el.set_text_content(Some(text));
    Ok(el)
}

fn image(document: &web::Document, src: &str, alt: &str) -> anyhow::Result<web::Element> {
    let img = element(document, "img", "")?;
    img.set_attribute("src", src).map_err(js_err)?;
    img.set_attribute("alt", alt).map_err(js_err)?;
    img.set_attribute("loading", "lazy").map_err(js_err)?;
    Ok(img)
}

/// Handles to the parts of a built card that the bindings touch.
pub struct CardElements {
    pub wrapper: web::HtmlElement,
    pub card: web::HtmlElement,
    pub contact_button: Option<web::Element>,
}

/// Build the card subtree. Text goes through `textContent`, never markup.
pub fn build_card(
    document: &web::Document,
    content: &ProfileContent,
    card_style: &CardStyle,
) -> anyhow::Result<CardElements> {
    let wrapper = element(document, "div", CLASS_WRAPPER)?;
    let card = element(document, "section", CLASS_CARD)?;
    let inside = element(document, "div", CLASS_INSIDE)?;
    append(&inside, &element(document, "div", CLASS_SHINE)?)?;
    append(&inside, &element(document, "div", CLASS_GLARE)?)?;

    let avatar_content = element(
        document,
        "div",
        &format!("{CLASS_CONTENT} {CLASS_AVATAR_CONTENT}"),
    )?;
    let avatar = image(document, &content.avatar_url, &content.avatar_alt())?;
    avatar.set_class_name("avatar");
    append(&avatar_content, &avatar)?;

    let mut contact_button = None;
    if content.show_user_info {
        let info = element(document, "div", CLASS_USER_INFO)?;
        let details = element(document, "div", CLASS_USER_DETAILS)?;
        let mini = element(document, "div", CLASS_MINI_AVATAR)?;
        append(
            &mini,
            &image(
                document,
                content.mini_avatar(),
                &format!("{} mini avatar", content.name),
            )?,
        )?;
        append(&details, &mini)?;
        let user_text = element(document, "div", CLASS_USER_TEXT)?;
        append(
            &user_text,
            &text_element(document, "div", CLASS_HANDLE, &content.display_handle())?,
        )?;
        append(
            &user_text,
            &text_element(document, "div", CLASS_STATUS, &content.status)?,
        )?;
        append(&details, &user_text)?;
        append(&info, &details)?;

        let button = text_element(document, "button", CLASS_CONTACT_BTN, &content.contact_text)?;
        button.set_attribute("type", "button").map_err(js_err)?;
        append(&info, &button)?;
        append(&avatar_content, &info)?;
        contact_button = Some(button);
    }
    append(&inside, &avatar_content)?;

    let text_content = element(document, "div", CLASS_CONTENT)?;
    let details = element(document, "div", CLASS_DETAILS)?;
    append(&details, &text_element(document, "h3", "", &content.name)?)?;
    append(&details, &text_element(document, "p", "", &content.title)?)?;
    append(&text_content, &details)?;
    append(&inside, &text_content)?;

    append(&card, &inside)?;
    append(&wrapper, &card)?;

    let wrapper: web::HtmlElement = wrapper.dyn_into().map_err(|e| js_err(e.into()))?;
    let card: web::HtmlElement = card.dyn_into().map_err(|e| js_err(e.into()))?;

    let style = wrapper.style();
    for (prop, value) in [
        ("--icon", "none"),
        ("--grain", "none"),
        ("--behind-gradient", card_style.behind_layer()),
        ("--inner-gradient", card_style.inner_gradient.as_str()),
    ] {
        style.set_property(prop, value).map_err(js_err)?;
    }

    Ok(CardElements {
        wrapper,
        card,
        contact_button,
    })
}

/// Presentation binding: CSS custom properties on the wrapper plus the
/// `active` class on wrapper and card.
pub struct CssVarSurface {
    wrapper: web::HtmlElement,
    card: web::HtmlElement,
}

impl CssVarSurface {
    pub fn new(wrapper: web::HtmlElement, card: web::HtmlElement) -> Self {
        Self { wrapper, card }
    }
}

impl TiltSurface for CssVarSurface {
    fn geometry(&self) -> tilt_core::CardGeometry {
        input::element_geometry(&self.card)
    }

    fn apply(&mut self, state: &TiltState) {
        // all writes happen inside one task, so no paint sees a partial set
        let style = self.wrapper.style();
        for var in state.style_vars() {
            if let Err(e) = style.set_property(var.name, &var.value) {
                log::warn!("[card] set {} failed: {:?}", var.name, e);
            }
        }
    }

    fn set_active(&mut self, active: bool) {
        for el in [&self.wrapper, &self.card] {
            let classes = el.class_list();
            _ = if active {
                classes.add_1(CLASS_ACTIVE)
            } else {
                classes.remove_1(CLASS_ACTIVE)
            };
        }
    }
}
