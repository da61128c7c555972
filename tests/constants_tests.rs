// Host-side tests for DOM constants and their relationship to the engine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use tilt_core::{CardGeometry, PointerSample, TiltState};

#[test]
fn class_names_are_distinct() {
    let mut names = vec![
        CLASS_WRAPPER,
        CLASS_CARD,
        CLASS_INSIDE,
        CLASS_SHINE,
        CLASS_GLARE,
        CLASS_CONTENT,
        CLASS_AVATAR_CONTENT,
        CLASS_USER_INFO,
        CLASS_USER_DETAILS,
        CLASS_MINI_AVATAR,
        CLASS_USER_TEXT,
        CLASS_HANDLE,
        CLASS_STATUS,
        CLASS_CONTACT_BTN,
        CLASS_DETAILS,
        CLASS_ACTIVE,
        CLASS_GALLERY,
    ];
    let total = names.len();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), total);
}

#[test]
fn behind_gradient_reads_the_pointer_vars() {
    let state = TiltState::at(PointerSample::new(10.0, 10.0), CardGeometry::new(100.0, 100.0));
    let written: Vec<&str> = state.style_vars().iter().map(|v| v.name).collect();
    for var in ["--pointer-x", "--pointer-y"] {
        assert!(written.contains(&var));
        assert!(DEFAULT_BEHIND_GRADIENT.contains(var));
    }
}

#[test]
fn reveal_transforms_differ() {
    assert_ne!(REVEAL_HIDDEN_TRANSFORM, REVEAL_SHOWN_TRANSFORM);
    assert!(REVEAL_HIDDEN_TRANSFORM.contains("translateY(50px)"));
}
