// Host-side tests for attribute-driven card configuration.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod config {
    include!("../src/config.rs");
}

use config::*;
use std::collections::HashMap;
use std::time::Duration;
use tilt_core::{CardError, ContactAction};

fn attrs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn parse(pairs: &[(&str, &str)]) -> Result<CardConfig, CardError> {
    let map = attrs(pairs);
    parse_card_config(|name| map.get(name).cloned())
}

#[test]
fn no_attributes_yields_defaults() {
    let cfg = parse(&[]).expect("defaults are valid");
    assert_eq!(cfg, CardConfig::default());
    assert!(cfg.options.enable_tilt);
    assert!(cfg.options.play_intro);
    assert_eq!(cfg.options.smooth_duration, Duration::from_millis(600));
    assert_eq!(cfg.options.intro_duration, Duration::from_millis(1500));
    assert_eq!(cfg.content.name, "Artist Name");
    assert_eq!(cfg.contact, ContactAction::None);
}

#[test]
fn booleans_accept_common_spellings() {
    for raw in ["", "true", "1", "yes", "on", " TRUE "] {
        assert_eq!(parse_bool("x", raw), Ok(true), "raw = {raw:?}");
    }
    for raw in ["false", "0", "no", "off", "Off"] {
        assert_eq!(parse_bool("x", raw), Ok(false), "raw = {raw:?}");
    }
    assert!(matches!(
        parse_bool("x", "maybe"),
        Err(CardError::InvalidOption { .. })
    ));
}

#[test]
fn millis_parse_to_durations() {
    assert_eq!(parse_millis("m", "250"), Ok(Duration::from_millis(250)));
    assert_eq!(parse_millis("m", " 0 "), Ok(Duration::ZERO));
}

#[test]
fn negative_or_garbage_millis_are_rejected() {
    assert!(matches!(
        parse_millis("m", "-5"),
        Err(CardError::InvalidDuration { name: "m", .. })
    ));
    assert!(matches!(
        parse_millis("m", "inf"),
        Err(CardError::InvalidDuration { .. })
    ));
    // finite but past what a Duration can hold
    assert!(matches!(
        parse_millis("m", "1e300"),
        Err(CardError::InvalidDuration { name: "m", .. })
    ));
    assert!(matches!(
        parse_millis("m", "soon"),
        Err(CardError::InvalidOption { .. })
    ));
}

#[test]
fn attributes_override_options_and_content() {
    let cfg = parse(&[
        (ATTR_ENABLE_TILT, "false"),
        (ATTR_INTRO, "off"),
        (ATTR_SMOOTH_MS, "300"),
        (ATTR_NAME, "Ada"),
        (ATTR_HANDLE, "ada"),
        (ATTR_SHOW_USER_INFO, "no"),
    ])
    .expect("valid attributes");
    assert!(!cfg.options.enable_tilt);
    assert!(!cfg.options.play_intro);
    assert_eq!(cfg.options.smooth_duration, Duration::from_millis(300));
    assert_eq!(cfg.content.name, "Ada");
    assert_eq!(cfg.content.display_handle(), "@ada");
    assert!(!cfg.content.show_user_info);
    // untouched fields keep their defaults
    assert_eq!(cfg.content.title, "Electronic Artist");
}

#[test]
fn malformed_attribute_fails_the_whole_card() {
    let err = parse(&[(ATTR_INTRO_MS, "-1")]).unwrap_err();
    assert_eq!(
        err,
        CardError::InvalidDuration {
            name: ATTR_INTRO_MS,
            millis: -1.0
        }
    );
}

#[test]
fn oversized_duration_attribute_is_an_error_not_a_panic() {
    let err = parse(&[(ATTR_SMOOTH_MS, "1e300")]).unwrap_err();
    assert!(matches!(
        err,
        CardError::InvalidDuration {
            name: ATTR_SMOOTH_MS,
            ..
        }
    ));
}

#[test]
fn contact_url_placeholders_do_nothing() {
    assert_eq!(parse(&[(ATTR_CONTACT_URL, "#")]).unwrap().contact, ContactAction::None);
    assert_eq!(parse(&[(ATTR_CONTACT_URL, "")]).unwrap().contact, ContactAction::None);
    assert_eq!(
        parse(&[(ATTR_CONTACT_URL, "https://example.com")]).unwrap().contact,
        ContactAction::OpenInNewTab("https://example.com".into())
    );
}

#[test]
fn mini_avatar_falls_back_to_avatar() {
    let cfg = parse(&[(ATTR_AVATAR, "a.png")]).unwrap();
    assert_eq!(cfg.content.mini_avatar(), "a.png");

    let cfg = parse(&[(ATTR_AVATAR, "a.png"), (ATTR_MINI_AVATAR, "m.png")]).unwrap();
    assert_eq!(cfg.content.mini_avatar(), "m.png");
}

#[test]
fn gradients_default_to_the_stock_layers() {
    let cfg = parse(&[]).unwrap();
    assert_eq!(cfg.style.behind_gradient, constants::DEFAULT_BEHIND_GRADIENT);
    assert_eq!(cfg.style.inner_gradient, constants::DEFAULT_INNER_GRADIENT);
    assert!(cfg.style.show_behind_gradient);
    assert_eq!(cfg.style.behind_layer(), constants::DEFAULT_BEHIND_GRADIENT);
}

#[test]
fn gradient_attributes_override_the_layers() {
    let cfg = parse(&[
        (ATTR_BEHIND_GRADIENT, "linear-gradient(red,blue)"),
        (ATTR_INNER_GRADIENT, "#111"),
    ])
    .unwrap();
    assert_eq!(cfg.style.behind_layer(), "linear-gradient(red,blue)");
    assert_eq!(cfg.style.inner_gradient, "#111");
}

#[test]
fn hidden_behind_gradient_writes_none() {
    let cfg = parse(&[
        (ATTR_BEHIND_GRADIENT, "linear-gradient(red,blue)"),
        (ATTR_SHOW_BEHIND_GRADIENT, "false"),
    ])
    .unwrap();
    assert!(!cfg.style.show_behind_gradient);
    assert_eq!(cfg.style.behind_layer(), "none");
    // the configured gradient is kept for when the layer is shown again
    assert_eq!(cfg.style.behind_gradient, "linear-gradient(red,blue)");

    assert!(matches!(
        parse(&[(ATTR_SHOW_BEHIND_GRADIENT, "sometimes")]),
        Err(CardError::InvalidOption { .. })
    ));
}

#[test]
fn contact_callback_takes_precedence_over_url() {
    let url = ContactAction::OpenInNewTab("https://example.com".into());
    assert_eq!(
        contact_route(Some("cb"), url.clone()),
        ContactRoute::Callback("cb")
    );
    assert_eq!(
        contact_route(Some("cb"), ContactAction::None),
        ContactRoute::Callback("cb")
    );
    assert_eq!(
        contact_route(None::<&str>, url),
        ContactRoute::OpenInNewTab("https://example.com".into())
    );
    assert_eq!(
        contact_route(None::<&str>, ContactAction::None),
        ContactRoute::Nothing
    );
}
