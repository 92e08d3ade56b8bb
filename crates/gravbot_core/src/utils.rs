use bevy_math::Vec3;

/// Split a vector into its unit direction and its length.
///
/// A zero vector gives a zero direction instead of NaN. The vector is scaled down by its largest
/// component first, so finite vectors past `sqrt(f32::MAX)` still get a real direction. The
/// length is only infinite when it truly does not fit in an `f32`, or when `vec` is not finite, in
/// which case the direction is zero.
#[must_use]
#[inline]
pub fn direction_and_magnitude(vec: Vec3) -> (Vec3, f32) {
    if !vec.is_finite() {
        return (Vec3::ZERO, f32::INFINITY);
    }

    let largest = vec.abs().max_element();
    if largest == 0. {
        return (Vec3::ZERO, 0.);
    }

    let scaled = vec / largest;
    (scaled.normalize_or_zero(), largest * scaled.length())
}

/// Clamp a tuning scalar to be non-negative. NaN becomes zero.
#[must_use]
#[inline]
pub fn non_negative(value: f32) -> f32 {
    value.max(0.)
}
