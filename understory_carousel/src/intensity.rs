// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Distance-to-intensity easing shared by the scale and opacity channels.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Maps a signed `distance` onto a normalized intensity in `[0, 1]`.
///
/// The window `[origin, target]` is normalized to `[0, 1]`, values before
/// `origin` clamp to `0`, and the fraction is eased with a square root so the
/// falloff is slow near `target` and steep near `origin`. Values past `target`
/// saturate at `1`.
///
/// A degenerate window (`target <= origin`) always yields `1`.
///
/// ```rust
/// use understory_carousel::intensity;
///
/// assert_eq!(intensity(-10.0, 0.0, 100.0), 0.0);
/// assert_eq!(intensity(25.0, 0.0, 100.0), 0.5);
/// assert_eq!(intensity(500.0, 0.0, 100.0), 1.0);
/// assert_eq!(intensity(3.0, 10.0, 10.0), 1.0);
/// ```
#[must_use]
pub fn intensity(distance: f64, origin: f64, target: f64) -> f64 {
    if origin.is_nan() || target.is_nan() || target <= origin {
        return 1.0;
    }
    let d = (distance - origin) / (target - origin);
    if d.is_nan() || d <= 0.0 {
        return 0.0;
    }
    d.sqrt().min(1.0)
}

#[cfg(test)]
mod tests {
    use super::intensity;

    #[test]
    fn degenerate_window_is_full_intensity() {
        assert_eq!(intensity(0.0, 5.0, 5.0), 1.0);
        assert_eq!(intensity(-100.0, 5.0, -5.0), 1.0);
        assert_eq!(intensity(f64::NAN, 5.0, 1.0), 1.0);
    }

    #[test]
    fn before_origin_is_zero() {
        assert_eq!(intensity(-500.0, -500.0, 50.0), 0.0);
        assert_eq!(intensity(-10_000.0, -500.0, 50.0), 0.0);
    }

    #[test]
    fn past_target_saturates() {
        assert_eq!(intensity(50.0, -500.0, 50.0), 1.0);
        assert_eq!(intensity(1e9, -500.0, 50.0), 1.0);
    }

    #[test]
    fn square_root_easing() {
        let expected = (540.0_f64 / 550.0).sqrt();
        assert!((intensity(40.0, -500.0, 50.0) - expected).abs() < 1e-12);
        // Halfway through the window eases to sqrt(0.5), not 0.5.
        assert_eq!(intensity(-225.0, -500.0, 50.0), 0.5_f64.sqrt());
    }

    #[test]
    fn stays_in_unit_interval_and_is_monotone() {
        let (origin, target) = (-500.0, 50.0);
        let mut previous = 0.0;
        let mut distance = -700.0;
        while distance <= 200.0 {
            let value = intensity(distance, origin, target);
            assert!((0.0..=1.0).contains(&value), "{value} out of range at {distance}");
            assert!(value >= previous, "not monotone at {distance}");
            previous = value;
            distance += 7.5;
        }
    }

    #[test]
    fn nan_distance_is_zero() {
        assert_eq!(intensity(f64::NAN, 0.0, 1.0), 0.0);
    }
}
