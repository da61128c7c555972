//! Card content and gallery reveal timing.

use crate::constants::{REVEAL_STAGGER, REVEAL_THRESHOLD};
use std::time::Duration;

/// Text and imagery shown on a profile card.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileContent {
    pub name: String,
    pub title: String,
    pub handle: String,
    pub status: String,
    pub contact_text: String,
    pub avatar_url: String,
    pub mini_avatar_url: Option<String>,
    pub show_user_info: bool,
}

impl Default for ProfileContent {
    fn default() -> Self {
        Self {
            name: "Artist Name".into(),
            title: "Electronic Artist".into(),
            handle: "artist".into(),
            status: "Live".into(),
            contact_text: "Listen".into(),
            avatar_url: String::new(),
            mini_avatar_url: None,
            show_user_info: true,
        }
    }
}

impl ProfileContent {
    pub fn mini_avatar(&self) -> &str {
        match self.mini_avatar_url.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => &self.avatar_url,
        }
    }

    pub fn display_handle(&self) -> String {
        format!("@{}", self.handle)
    }

    pub fn avatar_alt(&self) -> String {
        format!("{} avatar", self.name)
    }
}

/// What the contact button does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactAction {
    None,
    OpenInNewTab(String),
}

impl ContactAction {
    /// Empty and `#` placeholder links do nothing.
    pub fn from_url(url: Option<&str>) -> Self {
        match url.map(str::trim) {
            Some(u) if !u.is_empty() && u != "#" => Self::OpenInNewTab(u.to_string()),
            _ => Self::None,
        }
    }
}

/// One-shot trigger for the gallery entrance animation.
#[derive(Debug, Default)]
pub struct RevealGate {
    revealed: bool,
}

impl RevealGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feed an intersection observation. Returns true exactly once: the first
    /// time the container is visible enough.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64) -> bool {
        if self.revealed || !is_intersecting || ratio < REVEAL_THRESHOLD {
            return false;
        }
        self.revealed = true;
        true
    }
}

/// Entrance delay per card, in insertion order.
pub fn stagger_delays(count: usize) -> impl Iterator<Item = Duration> {
    (0..count).map(|i| REVEAL_STAGGER * i as u32)
}
