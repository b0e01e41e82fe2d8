use planisphere_core::constants::{HALF_PI, PI, QUARTER_PI};

use crate::bounds::Bounds;
use crate::projection::Projection;

/// Hybrid equal-area projection: cylindrical equal-area between the
/// transition latitudes, interrupted Collignon facets toward the poles.
/// <https://en.wikipedia.org/wiki/HEALPix>
///
/// See "Mapping on the HEALPix Grid" (<https://arxiv.org/abs/astro-ph/0412607>)
/// for the facet arithmetic.
#[derive(Debug, Clone, Copy, Default)]
pub struct HealpixStandard;

impl HealpixStandard {
    pub fn new() -> Self {
        Self
    }
}

/// Center meridian of the polar facet containing the given longitude.
#[inline]
fn facet_center(lon: f64) -> f64 {
    QUARTER_PI * (2.0 * (2.0 + 2.0 * lon / PI).floor() - 3.0)
}

impl Projection for HealpixStandard {
    fn project(&self, lat: f64, lon: f64) -> (f64, f64) {
        let z = lat.sin();
        if z.abs() <= 2.0 / 3.0 {
            (lon, 3.0 * (PI / 8.0) * z)
        } else {
            let sigma = (3.0 * (1.0 - z.abs())).sqrt();
            let y = (QUARTER_PI * (2.0 - sigma)).copysign(lat);
            let facet_x = facet_center(lon);
            (facet_x + sigma * (lon - facet_x), y)
        }
    }

    fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        let abs_y = y.abs();
        if abs_y <= QUARTER_PI {
            ((y * 8.0 / (3.0 * PI)).asin(), x)
        } else if abs_y < HALF_PI {
            let sigma = 2.0 - (4.0 * abs_y) / PI;
            let z = 1.0 - sigma * sigma / 3.0;
            let lat = z.asin().copysign(y);
            let facet_x = facet_center(x);
            (lat, facet_x + (x - facet_x) / sigma)
        } else {
            (HALF_PI.copysign(y), x)
        }
    }

    fn planar_bounds(&self) -> Bounds {
        Bounds::from_extents(-PI, -HALF_PI, PI, HALF_PI)
    }
}
