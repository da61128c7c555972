// DOM-side constants for the web front-end.

// Class names used by the card stylesheet
pub const CLASS_WRAPPER: &str = "pc-card-wrapper";
pub const CLASS_CARD: &str = "pc-card";
pub const CLASS_INSIDE: &str = "pc-inside";
pub const CLASS_SHINE: &str = "pc-shine";
pub const CLASS_GLARE: &str = "pc-glare";
pub const CLASS_CONTENT: &str = "pc-content";
pub const CLASS_AVATAR_CONTENT: &str = "pc-avatar-content";
pub const CLASS_USER_INFO: &str = "pc-user-info";
pub const CLASS_USER_DETAILS: &str = "pc-user-details";
pub const CLASS_MINI_AVATAR: &str = "pc-mini-avatar";
pub const CLASS_USER_TEXT: &str = "pc-user-text";
pub const CLASS_HANDLE: &str = "pc-handle";
pub const CLASS_STATUS: &str = "pc-status";
pub const CLASS_CONTACT_BTN: &str = "pc-contact-btn";
pub const CLASS_DETAILS: &str = "pc-details";
pub const CLASS_ACTIVE: &str = "active"; // toggled on wrapper + card while hovered
pub const CLASS_GALLERY: &str = "profile-cards-container";

// Auto-mount hooks
pub const AUTO_MOUNT_SELECTOR: &str = "[data-profile-card]";

// Static wrapper styling
pub const DEFAULT_BEHIND_GRADIENT: &str = "radial-gradient(farthest-side circle at var(--pointer-x) var(--pointer-y),hsla(39,100%,50%,var(--card-opacity)) 4%,hsla(42,80%,60%,calc(var(--card-opacity)*0.75)) 10%,hsla(45,60%,70%,calc(var(--card-opacity)*0.5)) 50%,hsla(48,30%,40%,0) 100%),radial-gradient(35% 52% at 55% 20%,#c0822980 0%,#cebf9f00 100%),radial-gradient(100% 100% at 50% 50%,#c08229ff 1%,#1a1a1a00 76%),conic-gradient(from 124deg at 50% 50%,#c08229ff 0%,#cebf9fff 40%,#cebf9fff 60%,#c08229ff 100%)";
pub const DEFAULT_INNER_GRADIENT: &str = "linear-gradient(145deg,#1a1a1a 0%,#2d2d2d 100%)";

// Gallery entrance
pub const REVEAL_HIDDEN_TRANSFORM: &str = "translateY(50px) scale(0.9)";
pub const REVEAL_SHOWN_TRANSFORM: &str = "translateY(0) scale(1)";
