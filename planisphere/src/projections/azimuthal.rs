use planisphere_core::constants::{HALF_PI, PI, QUARTER_PI};

use crate::bounds::Bounds;
use crate::projection::Projection;

#[inline]
fn radial_to_plane(r: f64, lon: f64) -> (f64, f64) {
    (r * lon.sin(), -r * lon.cos())
}

/// Conformal azimuthal projection from the north pole; diverges toward
/// the south pole.
/// <https://en.wikipedia.org/wiki/Stereographic_map_projection>
#[derive(Debug, Clone, Copy, Default)]
pub struct Stereographic;

impl Stereographic {
    pub fn new() -> Self {
        Self
    }
}

impl Projection for Stereographic {
    fn project(&self, lat: f64, lon: f64) -> (f64, f64) {
        radial_to_plane(1.0 / (lat / 2.0 + QUARTER_PI).tan(), lon)
    }

    fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        (HALF_PI - 2.0 * x.hypot(y).atan(), x.atan2(-y))
    }

    fn planar_bounds(&self) -> Bounds {
        Bounds::rectangle(4.0, 4.0)
    }
}

/// Azimuthal equidistant projection from the north pole.
/// <https://en.wikipedia.org/wiki/Azimuthal_equidistant_projection>
#[derive(Debug, Clone, Copy, Default)]
pub struct Polar;

impl Polar {
    pub fn new() -> Self {
        Self
    }
}

impl Projection for Polar {
    fn project(&self, lat: f64, lon: f64) -> (f64, f64) {
        radial_to_plane(HALF_PI - lat, lon)
    }

    fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        (HALF_PI - x.hypot(y), x.atan2(-y))
    }

    fn planar_bounds(&self) -> Bounds {
        Bounds::circle(PI)
    }
}

/// Equal-area azimuthal projection from the north pole.
/// <https://en.wikipedia.org/wiki/Lambert_azimuthal_equal-area_projection>
#[derive(Debug, Clone, Copy, Default)]
pub struct LambertAzimuthal;

impl LambertAzimuthal {
    pub fn new() -> Self {
        Self
    }
}

impl Projection for LambertAzimuthal {
    fn project(&self, lat: f64, lon: f64) -> (f64, f64) {
        radial_to_plane(((HALF_PI + lat) / 2.0).cos(), lon)
    }

    fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        let r2 = x * x + y * y;
        ((1.0 - 2.0 * r2).clamp(-1.0, 1.0).asin(), x.atan2(-y))
    }

    fn planar_bounds(&self) -> Bounds {
        Bounds::circle(1.0)
    }
}

/// Perspective view of the hemisphere from infinity, centered on the
/// north pole.
/// <https://en.wikipedia.org/wiki/Orthographic_map_projection>
#[derive(Debug, Clone, Copy, Default)]
pub struct Orthographic;

impl Orthographic {
    pub fn new() -> Self {
        Self
    }
}

impl Projection for Orthographic {
    fn project(&self, lat: f64, lon: f64) -> (f64, f64) {
        radial_to_plane(lat.cos(), lon)
    }

    fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        (x.hypot(y).clamp(-1.0, 1.0).acos(), x.atan2(-y))
    }

    fn planar_bounds(&self) -> Bounds {
        Bounds::circle(1.0)
    }
}

/// Great circles map to straight lines; usable only well away from the
/// equator in this polar aspect.
/// <https://en.wikipedia.org/wiki/Gnomonic_projection>
#[derive(Debug, Clone, Copy, Default)]
pub struct Gnomonic;

impl Gnomonic {
    pub fn new() -> Self {
        Self
    }
}

impl Projection for Gnomonic {
    fn project(&self, lat: f64, lon: f64) -> (f64, f64) {
        radial_to_plane((HALF_PI - lat).tan(), lon)
    }

    fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        (HALF_PI - x.hypot(y).atan(), x.atan2(-y))
    }

    fn planar_bounds(&self) -> Bounds {
        Bounds::rectangle(4.0, 4.0)
    }
}
