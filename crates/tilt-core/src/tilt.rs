//! Pointer offset to tilt transform.
//!
//! `compute_tilt` is the only entry point that turns raw pointer input into
//! the named value set consumed by presentation sinks. It re-reads nothing
//! itself: callers pass the geometry they just measured.

use crate::constants::*;
use crate::error::CardError;
use crate::math::{adjust, clamp, clamp_percent, round3};
use glam::{Mat4, Vec2};
use smallvec::SmallVec;

/// Pixel offset relative to the card's top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
}

impl PointerSample {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl From<Vec2> for PointerSample {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

/// Rendered box size of the card in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CardGeometry {
    pub width: f32,
    pub height: f32,
}

impl CardGeometry {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when the box has no usable area (hidden, collapsed or garbage).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }

    #[inline]
    pub fn center(&self) -> PointerSample {
        PointerSample::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Constants of the pointer-to-rotation mapping.
///
/// The two axes use different default divisors (3.0 for x, 2.5 for y);
/// hosts can override both.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltTuning {
    pub rotate_x_divisor: f32,
    pub rotate_y_divisor: f32,
    pub background_min: f32,
    pub background_max: f32,
    pub center_radius: f32,
}

impl Default for TiltTuning {
    fn default() -> Self {
        Self {
            rotate_x_divisor: ROTATE_X_DIVISOR,
            rotate_y_divisor: ROTATE_Y_DIVISOR,
            background_min: BACKGROUND_MIN_PERCENT,
            background_max: BACKGROUND_MAX_PERCENT,
            center_radius: CENTER_RADIUS_PERCENT,
        }
    }
}

impl TiltTuning {
    pub fn validate(&self) -> Result<(), CardError> {
        let nonzero = |field: &'static str, value: f32| {
            if value.is_finite() && value != 0.0 {
                Ok(())
            } else {
                Err(CardError::InvalidTuning { field, value })
            }
        };
        nonzero("rotate_x_divisor", self.rotate_x_divisor)?;
        nonzero("rotate_y_divisor", self.rotate_y_divisor)?;
        if !(self.center_radius.is_finite() && self.center_radius > 0.0) {
            return Err(CardError::InvalidTuning {
                field: "center_radius",
                value: self.center_radius,
            });
        }
        if !(self.background_min.is_finite()
            && self.background_max.is_finite()
            && self.background_min <= self.background_max)
        {
            return Err(CardError::InvalidTuning {
                field: "background_max",
                value: self.background_max,
            });
        }
        Ok(())
    }
}

/// One named CSS custom property and its rendered value.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleVar {
    pub name: &'static str,
    pub value: String,
}

/// GPU-side packing of a [`TiltState`].
///
/// Layout matches the `TiltUniforms` block in `shaders/card.wgsl`:
/// `pointer_background = (pointer_x, pointer_y, background_x, background_y)` as
/// 0..1 fractions, `rotate_center = (rotate_x_rad, rotate_y_rad, from_center, active)`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TiltUniforms {
    pub pointer_background: [f32; 4],
    pub rotate_center: [f32; 4],
}

/// Derived tilt values for one pointer position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltState {
    pub pointer_x_percent: f32,
    pub pointer_y_percent: f32,
    pub background_x_percent: f32,
    pub background_y_percent: f32,
    pub pointer_from_center: f32,
    pub pointer_from_top: f32,
    pub pointer_from_left: f32,
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
    /// Signed offset from the centre, `-50..=50`.
    pub center_x: f32,
    pub center_y: f32,
}

impl Default for TiltState {
    fn default() -> Self {
        Self::neutral()
    }
}

impl TiltState {
    /// Pointer resting at the box centre.
    pub fn neutral() -> Self {
        Self::from_percent(50.0, 50.0, &TiltTuning::default())
    }

    /// `compute_tilt` with the reference tuning.
    pub fn at(sample: PointerSample, geometry: CardGeometry) -> Self {
        compute_tilt(sample, geometry, &TiltTuning::default())
    }

    fn from_percent(percent_x: f32, percent_y: f32, tuning: &TiltTuning) -> Self {
        let center_x = percent_x - 50.0;
        let center_y = percent_y - 50.0;
        Self {
            pointer_x_percent: percent_x,
            pointer_y_percent: percent_y,
            background_x_percent: adjust(
                percent_x,
                0.0,
                100.0,
                tuning.background_min,
                tuning.background_max,
            ),
            background_y_percent: adjust(
                percent_y,
                0.0,
                100.0,
                tuning.background_min,
                tuning.background_max,
            ),
            pointer_from_center: clamp(center_y.hypot(center_x) / tuning.center_radius, 0.0, 1.0),
            pointer_from_top: percent_y / 100.0,
            pointer_from_left: percent_x / 100.0,
            rotate_x_deg: round3(-(center_x / tuning.rotate_x_divisor)),
            rotate_y_deg: round3(center_y / tuning.rotate_y_divisor),
            center_x,
            center_y,
        }
    }

    /// The nine custom properties, in a stable order, with their CSS units.
    pub fn style_vars(&self) -> SmallVec<[StyleVar; STYLE_VAR_COUNT]> {
        let var = |name: &'static str, value: String| StyleVar { name, value };
        let mut out = SmallVec::new();
        out.push(var(VAR_POINTER_X, format!("{}%", self.pointer_x_percent)));
        out.push(var(VAR_POINTER_Y, format!("{}%", self.pointer_y_percent)));
        out.push(var(VAR_BACKGROUND_X, format!("{}%", self.background_x_percent)));
        out.push(var(VAR_BACKGROUND_Y, format!("{}%", self.background_y_percent)));
        out.push(var(VAR_POINTER_FROM_CENTER, format!("{}", self.pointer_from_center)));
        out.push(var(VAR_POINTER_FROM_TOP, format!("{}", self.pointer_from_top)));
        out.push(var(VAR_POINTER_FROM_LEFT, format!("{}", self.pointer_from_left)));
        out.push(var(VAR_ROTATE_X, format!("{}deg", self.rotate_x_deg)));
        out.push(var(VAR_ROTATE_Y, format!("{}deg", self.rotate_y_deg)));
        out
    }

    pub fn uniforms(&self, active: bool) -> TiltUniforms {
        TiltUniforms {
            pointer_background: [
                self.pointer_x_percent / 100.0,
                self.pointer_y_percent / 100.0,
                self.background_x_percent / 100.0,
                self.background_y_percent / 100.0,
            ],
            rotate_center: [
                self.rotate_x_deg.to_radians(),
                self.rotate_y_deg.to_radians(),
                self.pointer_from_center,
                if active { 1.0 } else { 0.0 },
            ],
        }
    }

    /// Rotation for 3D sinks. `rotate_x_deg` comes from the horizontal offset,
    /// so it turns the card around the vertical axis (and vice versa), the same
    /// pairing the card stylesheet uses.
    pub fn card_transform(&self) -> Mat4 {
        Mat4::from_rotation_x(self.rotate_y_deg.to_radians())
            * Mat4::from_rotation_y(self.rotate_x_deg.to_radians())
    }
}

#[inline]
fn axis_percent(offset: f32, size: f32) -> f32 {
    if offset.is_finite() {
        clamp_percent(100.0 * offset / size)
    } else {
        50.0
    }
}

/// Map a pointer offset inside `geometry` to the tilt value set.
///
/// Offsets outside the box are clamped to its edges. A zero-area box yields
/// [`TiltState::neutral`].
pub fn compute_tilt(
    sample: PointerSample,
    geometry: CardGeometry,
    tuning: &TiltTuning,
) -> TiltState {
    if geometry.is_degenerate() {
        return TiltState::from_percent(50.0, 50.0, tuning);
    }
    let percent_x = axis_percent(sample.x, geometry.width);
    let percent_y = axis_percent(sample.y, geometry.height);
    TiltState::from_percent(percent_x, percent_y, tuning)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_is_centered() {
        let s = TiltState::neutral();
        assert_eq!(s.pointer_x_percent, 50.0);
        assert_eq!(s.pointer_from_center, 0.0);
        assert_eq!(s.rotate_x_deg, 0.0);
        assert_eq!(s.rotate_y_deg, 0.0);
        assert_eq!(s.background_x_percent, 50.0);
    }

    #[test]
    fn style_vars_carry_units() {
        let s = TiltState::at(PointerSample::new(180.0, 90.0), CardGeometry::new(200.0, 100.0));
        let vars = s.style_vars();
        assert_eq!(vars.len(), STYLE_VAR_COUNT);
        let get = |name: &str| {
            vars.iter()
                .find(|v| v.name == name)
                .map(|v| v.value.clone())
                .unwrap_or_default()
        };
        assert_eq!(get(VAR_POINTER_X), "90%");
        assert_eq!(get(VAR_ROTATE_X), "-13.333deg");
        assert_eq!(get(VAR_ROTATE_Y), "16deg");
        assert_eq!(get(VAR_POINTER_FROM_LEFT), "0.9");
    }

    #[test]
    fn centered_pointer_writes_unsigned_zero_rotation() {
        let s = TiltState::at(PointerSample::new(100.0, 50.0), CardGeometry::new(200.0, 100.0));
        let vars = s.style_vars();
        let rotate_x = vars.iter().find(|v| v.name == VAR_ROTATE_X).map(|v| v.value.as_str());
        let rotate_y = vars.iter().find(|v| v.name == VAR_ROTATE_Y).map(|v| v.value.as_str());
        assert_eq!(rotate_x, Some("0deg"));
        assert_eq!(rotate_y, Some("0deg"));
    }

    #[test]
    fn uniforms_are_normalized() {
        let s = TiltState::at(PointerSample::new(0.0, 100.0), CardGeometry::new(200.0, 100.0));
        let u = s.uniforms(true);
        assert_eq!(u.pointer_background[0], 0.0);
        assert_eq!(u.pointer_background[1], 1.0);
        assert_eq!(u.rotate_center[3], 1.0);
        assert_eq!(std::mem::size_of::<TiltUniforms>(), 32);
    }

    #[test]
    fn neutral_transform_is_identity() {
        let m = TiltState::neutral().card_transform();
        assert!(m.abs_diff_eq(Mat4::IDENTITY, 1e-6));
    }

    #[test]
    fn tuning_rejects_zero_divisor() {
        let t = TiltTuning {
            rotate_y_divisor: 0.0,
            ..TiltTuning::default()
        };
        assert!(matches!(
            t.validate(),
            Err(CardError::InvalidTuning {
                field: "rotate_y_divisor",
                ..
            })
        ));
        assert!(TiltTuning::default().validate().is_ok());
    }
}
