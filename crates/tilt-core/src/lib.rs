pub mod animation;
pub mod card;
pub mod constants;
pub mod error;
pub mod math;
pub mod profile;
pub mod surface;
pub mod tilt;

pub use animation::*;
pub use card::*;
pub use constants::*;
pub use error::*;
pub use math::*;
pub use profile::*;
pub use surface::*;
pub use tilt::*;

// Shaders bundled as string constants
pub static CARD_WGSL: &str = include_str!("../shaders/card.wgsl");
