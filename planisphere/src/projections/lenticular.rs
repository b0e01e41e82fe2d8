use num_complex::Complex64;

use planisphere_core::constants::{HALF_PI, PI, SQRT2};

use crate::bounds::Bounds;
use crate::newton::{newton_raphson, NewtonConfig};
use crate::oblique::ObliqueAspect;
use crate::projection::Projection;
use crate::projections::azimuthal::Polar;

/// Compromise projection averaging the azimuthal equidistant with the
/// plate carree, stretched into a 2:1 ellipse.
/// <https://en.wikipedia.org/wiki/Aitoff_projection>
#[derive(Debug, Clone, Copy, Default)]
pub struct Aitoff;

impl Aitoff {
    pub fn new() -> Self {
        Self
    }
}

impl Projection for Aitoff {
    fn project(&self, lat: f64, lon: f64) -> (f64, f64) {
        let a = (lat.cos() * (lon / 2.0).cos()).acos();
        if a == 0.0 {
            return (0.0, 0.0);
        }
        let scale = a / a.sin();
        (
            2.0 * lat.cos() * (lon / 2.0).sin() * scale,
            lat.sin() * scale,
        )
    }

    fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        // halve the x stretch, read the point off the azimuthal
        // equidistant, and swing the frame back through an equatorial pole
        let (inter_lat, inter_lon) = Polar::new().inverse(x / 2.0, y);
        let (lat, lon) = ObliqueAspect::new(0.0, 0.0, 0.0).to_oblique(inter_lat, inter_lon);
        (lat, lon * 2.0)
    }

    fn planar_bounds(&self) -> Bounds {
        Bounds::ellipse(PI, HALF_PI)
    }
}

/// Equal-area projection of the sphere into a 2:1 ellipse.
/// <https://en.wikipedia.org/wiki/Hammer_projection>
#[derive(Debug, Clone, Copy, Default)]
pub struct Hammer;

impl Hammer {
    pub fn new() -> Self {
        Self
    }
}

impl Projection for Hammer {
    fn project(&self, lat: f64, lon: f64) -> (f64, f64) {
        let denom = (1.0 + lat.cos() * (lon / 2.0).cos()).sqrt();
        (
            2.0 * SQRT2 * lat.cos() * (lon / 2.0).sin() / denom,
            SQRT2 * lat.sin() / denom,
        )
    }

    fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        let z_sq = 1.0 - (x / 4.0) * (x / 4.0) - (y / 2.0) * (y / 2.0);
        if z_sq < 0.0 {
            return (f64::NAN, f64::NAN);
        }
        let z = z_sq.sqrt();
        let lat = (z * y).clamp(-1.0, 1.0).asin();
        let lon = 2.0 * (z * x).atan2(2.0 * (2.0 * z * z - 1.0));
        (lat, lon)
    }

    fn planar_bounds(&self) -> Bounds {
        Bounds::ellipse(2.0 * SQRT2, SQRT2)
    }
}

/// Conformal whole-sphere projection with the least possible scale
/// variation, at the price of closed-form invertibility.
/// <https://en.wikipedia.org/wiki/Eisenlohr_projection>
#[derive(Debug, Clone, Copy, Default)]
pub struct Eisenlohr;

impl Eisenlohr {
    /// Forward scale at the center of the map: (3 - 2 sqrt 2) / 2.
    const CENTER_SCALE: f64 = 0.08578643762690495;
    /// Largest |y| on the boundary meridian, reached at 60 degrees.
    const HALF_HEIGHT: f64 = 0.34242662819;
    /// Longitude step for the finite-difference derivative of the
    /// complex forward map.
    const DERIV_STEP: f64 = 1e-6;

    pub fn new() -> Self {
        Self
    }

    /// Half the equator's planar length: sqrt 2 - ln(1 + sqrt 2).
    fn half_width() -> f64 {
        SQRT2 + (SQRT2 - 1.0).ln()
    }

    /// The forward map on the isometric plane: longitude plus i times the
    /// inverse Gudermannian of latitude in, x plus iy out. Conformality
    /// makes this map holomorphic, which is what lets the inverse run
    /// Newton's method over complex values.
    fn project_isometric(zeta: Complex64) -> Complex64 {
        let lat = zeta.im.sinh().atan();
        let (x, y) = Eisenlohr.project(lat, zeta.re);
        Complex64::new(x, y)
    }
}

impl Projection for Eisenlohr {
    fn project(&self, lat: f64, lon: f64) -> (f64, f64) {
        let (s1, c1) = (lon / 2.0).sin_cos();
        let (j, k) = (lat / 2.0).sin_cos();
        let q = lat.cos().sqrt();

        let t = j / (k + SQRT2 * q * c1);
        let c = (2.0 / (1.0 + t * t)).sqrt();
        let v = ((k + q * (c1 + s1) / SQRT2) / (k + q * (c1 - s1) / SQRT2)).sqrt();

        (
            0.5 * (-2.0 * v.ln() + c * (v - 1.0 / v)),
            0.5 * (-2.0 * t.atan() + c * t * (v + 1.0 / v)),
        )
    }

    fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        const CONFIG: NewtonConfig = NewtonConfig::with_max_step("Eisenlohr inverse", 0.5);

        let w = Complex64::new(x, y);
        let base = w / Self::CENTER_SCALE;
        let seeds = [
            Complex64::new(base.re.clamp(-3.0, 3.0), base.im.clamp(-2.5, 2.5)),
            base / 2.0,
            base / 4.0,
            Complex64::new(0.0, 0.0),
        ];

        let h = Complex64::new(Self::DERIV_STEP, 0.0);
        let f = |z: Complex64| Self::project_isometric(z) - w;
        let f_prime = |z: Complex64| {
            (Self::project_isometric(z + h) - Self::project_isometric(z - h))
                / (2.0 * Self::DERIV_STEP)
        };

        for seed in seeds {
            let zeta = match newton_raphson(seed, f, f_prime, &CONFIG) {
                Ok(z) => z,
                Err(_) => continue,
            };
            // reject convergence onto another sheet of the periodic map
            if zeta.re.abs() > PI + 1e-9 {
                continue;
            }
            if (Self::project_isometric(zeta) - w).norm() > 1e-9 {
                continue;
            }
            return (zeta.im.sinh().atan(), zeta.re);
        }

        (f64::NAN, f64::NAN)
    }

    fn planar_bounds(&self) -> Bounds {
        Bounds::rectangle(2.0 * Self::half_width(), 2.0 * Self::HALF_HEIGHT)
    }
}
