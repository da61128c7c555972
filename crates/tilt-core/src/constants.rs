use std::time::Duration;

// Shared tuning constants used by both web and native hosts.

// Animation timing
pub const SMOOTH_DURATION: Duration = Duration::from_millis(600); // pointer-leave return
pub const INITIAL_DURATION: Duration = Duration::from_millis(1500); // one-shot intro on mount
pub const INITIAL_X_OFFSET: f32 = 70.0; // intro starts this far left of the right edge
pub const INITIAL_Y_OFFSET: f32 = 60.0; // and this far below the top edge

// Transform tuning (reference values)
pub const ROTATE_X_DIVISOR: f32 = 3.0; // horizontal offset -> rotate-x
pub const ROTATE_Y_DIVISOR: f32 = 2.5; // vertical offset -> rotate-y, stronger than x
pub const BACKGROUND_MIN_PERCENT: f32 = 35.0;
pub const BACKGROUND_MAX_PERCENT: f32 = 65.0;
pub const CENTER_RADIUS_PERCENT: f32 = 50.0; // normalizes pointer-from-center

// Gallery reveal
pub const REVEAL_STAGGER: Duration = Duration::from_millis(100); // per-card delay
pub const REVEAL_TRANSITION: Duration = Duration::from_millis(800);
pub const REVEAL_THRESHOLD: f64 = 0.1; // intersection ratio that triggers reveal

// CSS custom properties written by style sinks
pub const VAR_POINTER_X: &str = "--pointer-x";
pub const VAR_POINTER_Y: &str = "--pointer-y";
pub const VAR_BACKGROUND_X: &str = "--background-x";
pub const VAR_BACKGROUND_Y: &str = "--background-y";
pub const VAR_POINTER_FROM_CENTER: &str = "--pointer-from-center";
pub const VAR_POINTER_FROM_TOP: &str = "--pointer-from-top";
pub const VAR_POINTER_FROM_LEFT: &str = "--pointer-from-left";
pub const VAR_ROTATE_X: &str = "--rotate-x";
pub const VAR_ROTATE_Y: &str = "--rotate-y";

pub const STYLE_VAR_COUNT: usize = 9;
