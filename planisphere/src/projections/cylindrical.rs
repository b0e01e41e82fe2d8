use planisphere_core::constants::{PI, QUARTER_PI, SQRT2, TWOPI};

use crate::bounds::Bounds;
use crate::projection::Projection;

/// The classic conformal navigation projection.
/// <https://en.wikipedia.org/wiki/Mercator_projection>
#[derive(Debug, Clone, Copy, Default)]
pub struct Mercator;

impl Mercator {
    pub fn new() -> Self {
        Self
    }
}

impl Projection for Mercator {
    fn project(&self, lat: f64, lon: f64) -> (f64, f64) {
        (lon, (QUARTER_PI + lat / 2.0).tan().ln())
    }

    fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        (y.sinh().atan(), x)
    }

    fn planar_bounds(&self) -> Bounds {
        Bounds::rectangle(TWOPI, TWOPI)
    }
}

/// Equidistant cylindrical projection with squared graticule.
/// <https://en.wikipedia.org/wiki/Equirectangular_projection>
#[derive(Debug, Clone, Copy, Default)]
pub struct PlateCarree;

impl PlateCarree {
    pub fn new() -> Self {
        Self
    }
}

impl Projection for PlateCarree {
    fn project(&self, lat: f64, lon: f64) -> (f64, f64) {
        (lon, lat)
    }

    fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        (y, x)
    }

    fn planar_bounds(&self) -> Bounds {
        Bounds::rectangle(TWOPI, PI)
    }
}

/// Equidistant cylindrical projection with true scale along a chosen
/// pair of standard parallels.
/// <https://en.wikipedia.org/wiki/Equirectangular_projection>
#[derive(Debug, Clone, Copy)]
pub struct Equirectangular {
    cos_parallel: f64,
}

impl Equirectangular {
    pub fn new(parallel: f64) -> Self {
        Self {
            cos_parallel: parallel.cos(),
        }
    }
}

impl Projection for Equirectangular {
    fn project(&self, lat: f64, lon: f64) -> (f64, f64) {
        (lon * self.cos_parallel, lat)
    }

    fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        (y, x / self.cos_parallel)
    }

    fn planar_bounds(&self) -> Bounds {
        Bounds::rectangle(TWOPI * self.cos_parallel, PI)
    }
}

/// Cylindrical equal-area family; the standard parallel picks the member
/// (Lambert at the equator, Behrmann at 30 degrees, and so on).
/// <https://en.wikipedia.org/wiki/Cylindrical_equal-area_projection>
#[derive(Debug, Clone, Copy)]
pub struct CylindricalEqualArea {
    cos_parallel: f64,
}

impl CylindricalEqualArea {
    pub fn new(parallel: f64) -> Self {
        Self {
            cos_parallel: parallel.cos(),
        }
    }

    /// Standard parallel at the equator.
    pub fn lambert() -> Self {
        Self::new(0.0)
    }

    /// Standard parallels at 30 degrees.
    pub fn behrmann() -> Self {
        Self::new(30.0_f64.to_radians())
    }

    /// Standard parallels at 45 degrees.
    pub fn gall_orthographic() -> Self {
        Self::new(45.0_f64.to_radians())
    }

    /// Standard parallels at 37.5 degrees.
    pub fn hobo_dyer() -> Self {
        Self::new(37.5_f64.to_radians())
    }
}

impl Projection for CylindricalEqualArea {
    fn project(&self, lat: f64, lon: f64) -> (f64, f64) {
        (lon * self.cos_parallel, lat.sin() / self.cos_parallel)
    }

    fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        ((y * self.cos_parallel).asin(), x / self.cos_parallel)
    }

    fn planar_bounds(&self) -> Bounds {
        Bounds::rectangle(TWOPI * self.cos_parallel, 2.0 / self.cos_parallel)
    }
}

/// Gall's compromise stereographic cylindrical.
/// <https://en.wikipedia.org/wiki/Gall_stereographic_projection>
#[derive(Debug, Clone, Copy, Default)]
pub struct GallStereographic;

impl GallStereographic {
    pub fn new() -> Self {
        Self
    }
}

impl Projection for GallStereographic {
    fn project(&self, lat: f64, lon: f64) -> (f64, f64) {
        (lon / SQRT2, (1.0 + SQRT2 / 2.0) * (lat / 2.0).tan())
    }

    fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        (2.0 * (y / (1.0 + SQRT2 / 2.0)).atan(), x * SQRT2)
    }

    fn planar_bounds(&self) -> Bounds {
        Bounds::rectangle(TWOPI / SQRT2, 2.0 + SQRT2)
    }
}

/// Miller's modified Mercator, with the poles pulled in to finite range.
/// <https://en.wikipedia.org/wiki/Miller_cylindrical_projection>
#[derive(Debug, Clone, Copy, Default)]
pub struct Miller;

impl Miller {
    pub fn new() -> Self {
        Self
    }
}

impl Projection for Miller {
    fn project(&self, lat: f64, lon: f64) -> (f64, f64) {
        (lon, 1.25 * (QUARTER_PI + 0.4 * lat).tan().ln())
    }

    fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        (2.5 * ((0.8 * y).exp().atan() - QUARTER_PI), x)
    }

    fn planar_bounds(&self) -> Bounds {
        Bounds::rectangle(TWOPI, 2.5 * (0.45 * PI).tan().ln())
    }
}

/// Central (gnomonic) cylindrical projection.
/// <https://en.wikipedia.org/wiki/Central_cylindrical_projection>
#[derive(Debug, Clone, Copy, Default)]
pub struct Central;

impl Central {
    pub fn new() -> Self {
        Self
    }
}

impl Projection for Central {
    fn project(&self, lat: f64, lon: f64) -> (f64, f64) {
        (lon, lat.tan())
    }

    fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        (y.atan(), x)
    }

    fn planar_bounds(&self) -> Bounds {
        Bounds::rectangle(TWOPI, TWOPI)
    }
}

/// The transverse aspect of the plate carree, in its conventional direct
/// form.
/// <https://en.wikipedia.org/wiki/Cassini_projection>
#[derive(Debug, Clone, Copy, Default)]
pub struct Cassini;

impl Cassini {
    pub fn new() -> Self {
        Self
    }
}

impl Projection for Cassini {
    fn project(&self, lat: f64, lon: f64) -> (f64, f64) {
        let (sin_lat, cos_lat) = lat.sin_cos();
        (
            (cos_lat * lon.sin()).asin(),
            sin_lat.atan2(cos_lat * lon.cos()),
        )
    }

    fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        let (sin_x, cos_x) = x.sin_cos();
        ((y.sin() * cos_x).asin(), sin_x.atan2(cos_x * y.cos()))
    }

    fn planar_bounds(&self) -> Bounds {
        Bounds::rectangle(PI, TWOPI)
    }
}
