use crate::projection::Projection;

/// Angular step for the finite-difference probe.
const STEP: f64 = 1e-8;

/// Log-scale magnitude beyond which a distortion estimate is reported as
/// undefined instead of a numerically meaningless huge value, as happens
/// at interruption boundaries and poles.
pub const MAX_DISTORTION: f64 = 25.0;

/// Estimates the local distortion of `proj` at a point on the sphere.
///
/// Returns `(area, angular)`: the log of the ratio between the projected
/// patch area and the true infinitesimal area, and a log-based measure of
/// shape shear. A perfectly equal-area projection scores `area` 0
/// everywhere; a conformal one scores `angular` 0 everywhere.
///
/// The probe projects three points spaced `1e-8` radians apart: the
/// center (latitude nudged north so seams sitting exactly on the query
/// latitude are not sampled), a point due east at constant true distance
/// (longitude step scaled by 1/cos(lat)), and a point due north. The two
/// displacement vectors approximate the local Jacobian. Estimates with
/// magnitude above [`MAX_DISTORTION`] come back as NaN.
pub fn distortion_at(proj: &impl Projection, lat: f64, lon: f64) -> (f64, f64) {
    let nudged_lat = lat + STEP;

    let (x0, y0) = proj.project(nudged_lat, lon);
    let (xe, ye) = proj.project(nudged_lat, lon + STEP / nudged_lat.cos());
    let (xn, yn) = proj.project(nudged_lat + STEP, lon);

    let dx_east = xe - x0;
    let dy_east = ye - y0;
    let dx_north = xn - x0;
    let dy_north = yn - y0;

    let mut area = ((dx_east * dy_north - dx_north * dy_east) / (STEP * STEP))
        .abs()
        .ln();

    // semiaxis sum and difference of the local distortion ellipse
    let s_sum = (dx_east + dy_north).hypot(dy_east - dx_north);
    let s_diff = (dx_east - dy_north).hypot(dy_east + dx_north);
    let mut angular = ((s_sum - s_diff) / (s_sum + s_diff)).abs().ln().abs();

    if area.abs() > MAX_DISTORTION {
        area = f64::NAN;
    }
    if angular.abs() > MAX_DISTORTION {
        angular = f64::NAN;
    }

    (area, angular)
}

/// Area component of [`distortion_at`].
pub fn area_distortion_at(proj: &impl Projection, lat: f64, lon: f64) -> f64 {
    distortion_at(proj, lat, lon).0
}

/// Angular component of [`distortion_at`].
pub fn angular_distortion_at(proj: &impl Projection, lat: f64, lon: f64) -> f64 {
    distortion_at(proj, lat, lon).1
}
