#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}

/// Floored modulo: the result has the sign of `y`, unlike `fmod` which
/// keeps the sign of `x`.
#[inline]
pub fn floor_mod(x: f64, y: f64) -> f64 {
    let r = fmod(x, y);
    if r != 0.0 && (r < 0.0) != (y < 0.0) {
        r + y
    } else {
        r
    }
}
