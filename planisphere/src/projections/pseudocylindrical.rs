use planisphere_core::constants::{HALF_PI, PI, SQRT2, TWOPI};

use crate::bounds::Bounds;
use crate::newton::{newton_raphson, NewtonConfig};
use crate::projection::Projection;

#[inline]
fn asin_clamped(v: f64) -> f64 {
    v.clamp(-1.0, 1.0).asin()
}

/// An equal-area projection representing the poles as points.
/// <https://en.wikipedia.org/wiki/Sinusoidal_projection>
#[derive(Debug, Clone, Copy, Default)]
pub struct Sinusoidal;

impl Sinusoidal {
    pub fn new() -> Self {
        Self
    }
}

impl Projection for Sinusoidal {
    fn project(&self, lat: f64, lon: f64) -> (f64, f64) {
        (lat.cos() * lon, lat)
    }

    fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        (y, x / y.cos())
    }

    fn planar_bounds(&self) -> Bounds {
        Bounds::rectangle(TWOPI, PI)
    }
}

/// Solves `2t + sin 2t = pi sin(lat)` for the Mollweide auxiliary angle.
///
/// The derivative vanishes exactly at the poles, so latitudes within
/// 1e-10 of a pole skip the iteration, and a convergence failure close
/// to a pole falls back to the pole itself.
pub(crate) fn mollweide_theta(lat: f64) -> f64 {
    if lat.abs() >= HALF_PI - 1e-10 {
        return HALF_PI.copysign(lat);
    }

    let target = PI * lat.sin();
    const CONFIG: NewtonConfig = NewtonConfig::new("Mollweide auxiliary angle");
    newton_raphson(
        lat,
        |t| 2.0 * t + (2.0 * t).sin() - target,
        |t| 2.0 + 2.0 * (2.0 * t).cos(),
        &CONFIG,
    )
    .unwrap_or_else(|_| HALF_PI.copysign(lat))
}

const MOLLWEIDE_X: f64 = 2.0 * SQRT2 / PI;

/// Equal-area projection of the sphere onto a 2:1 ellipse.
/// <https://en.wikipedia.org/wiki/Mollweide_projection>
#[derive(Debug, Clone, Copy, Default)]
pub struct Mollweide;

impl Mollweide {
    pub fn new() -> Self {
        Self
    }
}

impl Projection for Mollweide {
    fn project(&self, lat: f64, lon: f64) -> (f64, f64) {
        let theta = mollweide_theta(lat);
        let (sin_theta, cos_theta) = theta.sin_cos();
        (MOLLWEIDE_X * lon * cos_theta, SQRT2 * sin_theta)
    }

    fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        let theta = (y / SQRT2).asin();
        let lat = asin_clamped((2.0 * theta + (2.0 * theta).sin()) / PI);
        let lon = x / (MOLLWEIDE_X * theta.cos());
        (lat, lon)
    }

    fn planar_bounds(&self) -> Bounds {
        Bounds::ellipse(2.0 * SQRT2, SQRT2)
    }
}

/// Latitude at which the sinusoidal and Mollweide parallels have equal
/// length (40 degrees 44 minutes), where the homolosine switches form.
const HOMOLOSINE_LAT_LIMIT: f64 = 0.71093078197902358;
/// Vertical shift aligning the Mollweide half onto the sinusoidal belt.
const HOMOLOSINE_Y_OFFSET: f64 = 0.05280;

/// Goode's interrupted-style equal-area composite: sinusoidal belt,
/// Mollweide caps.
/// <https://en.wikipedia.org/wiki/Goode_homolosine_projection>
#[derive(Debug, Clone, Copy, Default)]
pub struct Homolosine;

impl Homolosine {
    pub fn new() -> Self {
        Self
    }
}

impl Projection for Homolosine {
    fn project(&self, lat: f64, lon: f64) -> (f64, f64) {
        if lat.abs() <= HOMOLOSINE_LAT_LIMIT {
            Sinusoidal::new().project(lat, lon)
        } else {
            let (x, y) = Mollweide::new().project(lat, lon);
            (x, y - HOMOLOSINE_Y_OFFSET.copysign(lat))
        }
    }

    fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        if y.abs() <= HOMOLOSINE_LAT_LIMIT {
            Sinusoidal::new().inverse(x, y)
        } else {
            Mollweide::new().inverse(x, y + HOMOLOSINE_Y_OFFSET.copysign(y))
        }
    }

    fn planar_bounds(&self) -> Bounds {
        Bounds::rectangle(TWOPI, 2.0 * (SQRT2 - HOMOLOSINE_Y_OFFSET))
    }
}

const ECKERT_TARGET_SCALE: f64 = 2.0 + HALF_PI;

fn eckert_theta(lat: f64) -> f64 {
    if lat.abs() >= HALF_PI - 1e-10 {
        return HALF_PI.copysign(lat);
    }

    let target = ECKERT_TARGET_SCALE * lat.sin();
    const CONFIG: NewtonConfig = NewtonConfig::new("Eckert IV auxiliary angle");
    newton_raphson(
        lat / 2.0,
        |t| t + t.sin() * t.cos() + 2.0 * t.sin() - target,
        |t| 2.0 * t.cos() * (1.0 + t.cos()),
        &CONFIG,
    )
    .unwrap_or_else(|_| HALF_PI.copysign(lat))
}

/// Equal-area projection with elliptical meridians and a pole line half
/// the equator's length.
/// <https://en.wikipedia.org/wiki/Eckert_IV_projection>
#[derive(Debug, Clone, Copy, Default)]
pub struct EckertIv;

impl EckertIv {
    // x scale 2/sqrt(pi (4 + pi)); the y scale works out to pi times it
    const C_X: f64 = 0.42223820031577125;
    const C_Y: f64 = 1.3265004281770023;

    pub fn new() -> Self {
        Self
    }
}

impl Projection for EckertIv {
    fn project(&self, lat: f64, lon: f64) -> (f64, f64) {
        let theta = eckert_theta(lat);
        let (sin_theta, cos_theta) = theta.sin_cos();
        (
            Self::C_X * lon * (1.0 + cos_theta),
            Self::C_Y * sin_theta,
        )
    }

    fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        let theta = (y / Self::C_Y).asin();
        let (sin_theta, cos_theta) = theta.sin_cos();
        let lat = asin_clamped((theta + sin_theta * cos_theta + 2.0 * sin_theta) / ECKERT_TARGET_SCALE);
        let lon = x / (Self::C_X * (1.0 + cos_theta));
        (lat, lon)
    }

    fn planar_bounds(&self) -> Bounds {
        Bounds::rectangle(4.0 * PI * Self::C_X, 2.0 * Self::C_Y)
    }
}

/// Equal-area pseudocylindrical defined by a ninth-degree polynomial in
/// an auxiliary latitude.
/// <https://en.wikipedia.org/wiki/Equal_Earth_projection>
#[derive(Debug, Clone, Copy, Default)]
pub struct EqualEarth;

impl EqualEarth {
    const A1: f64 = 1.340264;
    const A2: f64 = -0.081106;
    const A3: f64 = 0.000893;
    const A4: f64 = 0.003796;
    /// sin of the pole's auxiliary latitude: sqrt(3)/2.
    const M: f64 = 0.8660254037844386;

    pub fn new() -> Self {
        Self
    }

    fn poly(t: f64) -> f64 {
        let t2 = t * t;
        let t6 = t2 * t2 * t2;
        t * (Self::A1 + Self::A2 * t2 + t6 * (Self::A3 + Self::A4 * t2))
    }

    fn poly_deriv(t: f64) -> f64 {
        let t2 = t * t;
        let t6 = t2 * t2 * t2;
        Self::A1 + 3.0 * Self::A2 * t2 + t6 * (7.0 * Self::A3 + 9.0 * Self::A4 * t2)
    }
}

impl Projection for EqualEarth {
    fn project(&self, lat: f64, lon: f64) -> (f64, f64) {
        let theta = (Self::M * lat.sin()).asin();
        let x = lon * theta.cos() / (Self::M * Self::poly_deriv(theta));
        (x, Self::poly(theta))
    }

    fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        const CONFIG: NewtonConfig = NewtonConfig::new("Equal Earth auxiliary angle");
        let theta = match newton_raphson(y, |t| Self::poly(t) - y, Self::poly_deriv, &CONFIG) {
            Ok(t) => t,
            Err(_) => return (f64::NAN, f64::NAN),
        };
        let lat = asin_clamped(theta.sin() / Self::M);
        let lon = x * Self::M * Self::poly_deriv(theta) / theta.cos();
        (lat, lon)
    }

    fn planar_bounds(&self) -> Bounds {
        let pole_theta = Self::M.asin();
        Bounds::rectangle(
            TWOPI / (Self::M * Self::A1),
            2.0 * Self::poly(pole_theta),
        )
    }
}
