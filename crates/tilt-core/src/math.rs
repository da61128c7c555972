//! Scalar helpers shared by the transform calculator and the animation driver.
//!
//! Everything here is pure and total for finite input.

/// Clip `value` into `[min, max]`.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Clip into the `[0, 100]` percentage band.
#[inline]
pub fn clamp_percent(value: f32) -> f32 {
    clamp(value, 0.0, 100.0)
}

/// Round to `precision` decimal digits, returning a number (not a string).
///
/// Negative zero comes back as `0.0` so it never prints as `-0`.
#[inline]
pub fn round(value: f32, precision: i32) -> f32 {
    let scale = 10f64.powi(precision);
    ((value as f64 * scale).round() / scale + 0.0) as f32
}

/// Three-digit rounding used for every emitted style value.
#[inline]
pub fn round3(value: f32) -> f32 {
    round(value, 3)
}

/// Affine remap of `value` from `[from_min, from_max]` onto `[to_min, to_max]`,
/// rounded to three digits.
///
/// A degenerate source range (`from_min == from_max`) divides by zero; callers
/// must pass a non-empty range.
#[inline]
pub fn adjust(value: f32, from_min: f32, from_max: f32, to_min: f32, to_max: f32) -> f32 {
    round3(to_min + ((to_max - to_min) * (value - from_min)) / (from_max - from_min))
}

/// Symmetric cubic ease-in-out on `[0, 1]`.
#[inline]
pub fn ease_in_out_cubic(x: f32) -> f32 {
    if x < 0.5 {
        4.0 * x * x * x
    } else {
        1.0 - (-2.0 * x + 2.0).powi(3) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_uses_both_bounds() {
        assert_eq!(clamp_percent(-5.0), 0.0);
        assert_eq!(clamp_percent(150.0), 100.0);
        assert_eq!(clamp_percent(42.5), 42.5);
        assert_eq!(clamp(2.0, 0.0, 1.0), 1.0);
    }

    #[test]
    fn round_keeps_three_digits() {
        assert_eq!(round3(-13.333_333), -13.333);
        assert_eq!(round3(16.0), 16.0);
        assert_eq!(round(1.23456, 2), 1.23);
    }

    #[test]
    fn round_drops_negative_zero() {
        assert!(round3(-0.0).is_sign_positive());
        assert!(round3(-0.000_1).is_sign_positive());
        assert_eq!(format!("{}", round3(-(0.0 / 3.0))), "0");
    }

    #[test]
    fn adjust_maps_endpoints_and_midpoint() {
        assert_eq!(adjust(0.0, 0.0, 100.0, 35.0, 65.0), 35.0);
        assert_eq!(adjust(100.0, 0.0, 100.0, 35.0, 65.0), 65.0);
        assert_eq!(adjust(50.0, 0.0, 100.0, 35.0, 65.0), 50.0);
        // reversed target range interpolates downward
        assert_eq!(adjust(0.5, 0.0, 1.0, 180.0, 100.0), 140.0);
    }

    #[test]
    fn ease_boundaries_and_midpoint() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert_eq!(ease_in_out_cubic(0.5), 0.5);
    }

    #[test]
    fn ease_is_monotonic_and_symmetric() {
        let mut prev = ease_in_out_cubic(0.0);
        for i in 1..=100 {
            let x = i as f32 / 100.0;
            let y = ease_in_out_cubic(x);
            assert!(y >= prev, "ease decreased at {x}");
            prev = y;
            let mirrored = 1.0 - ease_in_out_cubic(1.0 - x);
            assert!((y - mirrored).abs() < 1e-5, "asymmetric at {x}");
        }
    }
}
