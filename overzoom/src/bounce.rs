// Copyright 2026 the Overzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Elastic resistance for pinch scales outside the allowed range.
//!
//! Both curves meet the identity region without a jump, so a pinch slides
//! from free zoom into resisted zoom. The lower curve also matches its slope.
//! Under-scaling eases toward `minimum / √3` as the scale approaches zero;
//! over-scaling approaches `maximum · √3` asymptotically.
//!
//! ```
//! use overzoom::bounce::resist;
//!
//! assert_eq!(resist(1.5, 1.0, 3.0), 1.5);
//! assert!(resist(0.5, 1.0, 3.0) > 0.5);
//! assert!(resist(100.0, 1.0, 3.0) < 3.0 * 1.75);
//! ```

/// Resisted scale for `scale` given the allowed `[minimum, maximum]` range.
///
/// Scales inside the range are returned unchanged. Degenerate ranges
/// (non-positive or non-finite bounds, `minimum > maximum`) disable resistance.
#[must_use]
pub fn resist(scale: f64, minimum: f64, maximum: f64) -> f64 {
    if !valid_range(minimum, maximum) || (minimum..=maximum).contains(&scale) {
        return scale;
    }

    if scale < minimum {
        let x = scale / minimum;
        let k = 1.0 / 3.0_f64.sqrt();
        minimum * ((2.0 * k - 1.0) * x.powi(3) + (2.0 - 3.0 * k) * x.powi(2) + k)
    } else {
        let x = scale / maximum;
        let k = 3.0_f64.sqrt();
        maximum * ((2.0 * k - 2.0) / (1.0 + (4.0 / k * (1.0 - x)).exp()) - k + 2.0)
    }
}

/// Backdrop alpha for a pinch `scale`.
///
/// Linear from `0` at `minimum` to `1` at `threshold`, clamped to `[0, 1]`.
#[must_use]
pub fn background_alpha(scale: f64, minimum: f64, threshold: f64) -> f64 {
    let delta = threshold - minimum;
    if delta <= 0.0 || delta.is_nan() {
        return if scale >= threshold { 1.0 } else { 0.0 };
    }
    ((scale - minimum) / delta).clamp(0.0, 1.0)
}

fn valid_range(minimum: f64, maximum: f64) -> bool {
    minimum.is_finite() && maximum.is_finite() && minimum > 0.0 && minimum <= maximum
}
