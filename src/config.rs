// Card configuration read from `data-*` attributes.
//
// Kept free of DOM types so host-side tests can include it directly.

use crate::constants::{DEFAULT_BEHIND_GRADIENT, DEFAULT_INNER_GRADIENT};
use std::time::Duration;
use tilt_core::{CardError, CardOptions, ContactAction, ProfileContent};

pub const ATTR_ENABLE_TILT: &str = "data-enable-tilt";
pub const ATTR_INTRO: &str = "data-intro";
pub const ATTR_SMOOTH_MS: &str = "data-smooth-ms";
pub const ATTR_INTRO_MS: &str = "data-intro-ms";
pub const ATTR_NAME: &str = "data-name";
pub const ATTR_TITLE: &str = "data-title";
pub const ATTR_HANDLE: &str = "data-handle";
pub const ATTR_STATUS: &str = "data-status";
pub const ATTR_CONTACT_TEXT: &str = "data-contact-text";
pub const ATTR_AVATAR: &str = "data-avatar";
pub const ATTR_MINI_AVATAR: &str = "data-mini-avatar";
pub const ATTR_SHOW_USER_INFO: &str = "data-show-user-info";
pub const ATTR_CONTACT_URL: &str = "data-contact-url";
pub const ATTR_BEHIND_GRADIENT: &str = "data-behind-gradient";
pub const ATTR_INNER_GRADIENT: &str = "data-inner-gradient";
pub const ATTR_SHOW_BEHIND_GRADIENT: &str = "data-show-behind-gradient";

/// Background layers painted behind and inside the card.
#[derive(Clone, Debug, PartialEq)]
pub struct CardStyle {
    pub behind_gradient: String,
    pub inner_gradient: String,
    pub show_behind_gradient: bool,
}

impl Default for CardStyle {
    fn default() -> Self {
        Self {
            behind_gradient: DEFAULT_BEHIND_GRADIENT.into(),
            inner_gradient: DEFAULT_INNER_GRADIENT.into(),
            show_behind_gradient: true,
        }
    }
}

impl CardStyle {
    /// Value for `--behind-gradient`; a hidden layer is `none`.
    pub fn behind_layer(&self) -> &str {
        if self.show_behind_gradient {
            &self.behind_gradient
        } else {
            "none"
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CardConfig {
    pub options: CardOptions,
    pub content: ProfileContent,
    pub style: CardStyle,
    pub contact: ContactAction,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            options: CardOptions::default(),
            content: ProfileContent::default(),
            style: CardStyle::default(),
            contact: ContactAction::None,
        }
    }
}

/// What a contact click does once a host callback (if any) is known.
#[derive(Clone, Debug, PartialEq)]
pub enum ContactRoute<F> {
    Callback(F),
    OpenInNewTab(String),
    Nothing,
}

/// A host callback wins over the contact URL.
pub fn contact_route<F>(callback: Option<F>, action: ContactAction) -> ContactRoute<F> {
    match (callback, action) {
        (Some(cb), _) => ContactRoute::Callback(cb),
        (None, ContactAction::OpenInNewTab(url)) => ContactRoute::OpenInNewTab(url),
        (None, ContactAction::None) => ContactRoute::Nothing,
    }
}

pub fn parse_bool(name: &str, raw: &str) -> Result<bool, CardError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        // a bare attribute (`data-intro`) reads as an empty string
        "" | "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(CardError::option(name, format!("expected a boolean, got `{other}`"))),
    }
}

pub fn parse_millis(name: &'static str, raw: &str) -> Result<Duration, CardError> {
    let millis: f64 = raw
        .trim()
        .parse()
        .map_err(|_| CardError::option(name, format!("expected milliseconds, got `{raw}`")))?;
    if !millis.is_finite() || millis < 0.0 {
        return Err(CardError::InvalidDuration { name, millis });
    }
    Duration::try_from_secs_f64(millis / 1000.0)
        .map_err(|_| CardError::InvalidDuration { name, millis })
}

/// Build a card configuration from an attribute lookup. Missing attributes
/// keep their defaults; malformed ones are errors.
pub fn parse_card_config(lookup: impl Fn(&str) -> Option<String>) -> Result<CardConfig, CardError> {
    let mut cfg = CardConfig::default();

    if let Some(v) = lookup(ATTR_ENABLE_TILT) {
        cfg.options.enable_tilt = parse_bool(ATTR_ENABLE_TILT, &v)?;
    }
    if let Some(v) = lookup(ATTR_INTRO) {
        cfg.options.play_intro = parse_bool(ATTR_INTRO, &v)?;
    }
    if let Some(v) = lookup(ATTR_SMOOTH_MS) {
        cfg.options.smooth_duration = parse_millis(ATTR_SMOOTH_MS, &v)?;
    }
    if let Some(v) = lookup(ATTR_INTRO_MS) {
        cfg.options.intro_duration = parse_millis(ATTR_INTRO_MS, &v)?;
    }

    let content = &mut cfg.content;
    for (attr, field) in [
        (ATTR_NAME, &mut content.name),
        (ATTR_TITLE, &mut content.title),
        (ATTR_HANDLE, &mut content.handle),
        (ATTR_STATUS, &mut content.status),
        (ATTR_CONTACT_TEXT, &mut content.contact_text),
        (ATTR_AVATAR, &mut content.avatar_url),
    ] {
        if let Some(v) = lookup(attr) {
            *field = v;
        }
    }
    content.mini_avatar_url = lookup(ATTR_MINI_AVATAR);
    if let Some(v) = lookup(ATTR_SHOW_USER_INFO) {
        content.show_user_info = parse_bool(ATTR_SHOW_USER_INFO, &v)?;
    }

    let style = &mut cfg.style;
    if let Some(v) = lookup(ATTR_BEHIND_GRADIENT) {
        style.behind_gradient = v;
    }
    if let Some(v) = lookup(ATTR_INNER_GRADIENT) {
        style.inner_gradient = v;
    }
    if let Some(v) = lookup(ATTR_SHOW_BEHIND_GRADIENT) {
        style.show_behind_gradient = parse_bool(ATTR_SHOW_BEHIND_GRADIENT, &v)?;
    }

    cfg.contact = ContactAction::from_url(lookup(ATTR_CONTACT_URL).as_deref());
    cfg.options.validate()?;
    Ok(cfg)
}
