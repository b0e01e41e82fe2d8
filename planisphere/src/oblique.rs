use planisphere_core::angle::wrap_pm_pi;
use planisphere_core::constants::{HALF_PI, PI};

use crate::bounds::Bounds;
use crate::projection::Projection;

/// Tolerance window for asin/acos arguments pushed past unit magnitude by
/// rounding. Violations beyond this window propagate NaN.
const UNIT_CLAMP_EPS: f64 = 1e-9;

/// Window below +pi inside which an output longitude snaps to -pi, so a
/// point computed fractionally short of the antimeridian does not render
/// on the wrong side of the seam.
const SEAM_EPS: f64 = 1e-7;

#[inline]
fn snap_to_unit(v: f64) -> f64 {
    if v > 1.0 && v < 1.0 + UNIT_CLAMP_EPS {
        1.0
    } else if v < -1.0 && v > -1.0 - UNIT_CLAMP_EPS {
        -1.0
    } else {
        v
    }
}

#[inline]
fn constrain_lon(mut lon: f64) -> f64 {
    if lon.abs() > PI {
        lon = wrap_pm_pi(lon);
    }
    if lon >= PI - SEAM_EPS {
        lon = -PI;
    }
    lon
}

/// A fixed rotation of the sphere, defined by where the rotated frame's
/// north pole sits (latitude, longitude) and a twist angle about it.
///
/// Lets any projection be rendered in oblique or transverse aspect
/// without touching its native formulas: rotate coordinates into the
/// projection's native frame, project, and rotate inverse results back.
/// The sin/cos of the pole latitude are computed once here and reused by
/// both directions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObliqueAspect {
    pole_lat: f64,
    pole_lon: f64,
    pole_theta: f64,

    sin_pole_lat: f64,
    cos_pole_lat: f64,
}

impl ObliqueAspect {
    pub fn new(pole_lat: f64, pole_lon: f64, pole_theta: f64) -> Self {
        let (sin_pole_lat, cos_pole_lat) = pole_lat.sin_cos();
        Self {
            pole_lat,
            pole_lon,
            pole_theta,
            sin_pole_lat,
            cos_pole_lat,
        }
    }

    pub fn pole_lat(&self) -> f64 {
        self.pole_lat
    }

    pub fn pole_lon(&self) -> f64 {
        self.pole_lon
    }

    pub fn pole_theta(&self) -> f64 {
        self.pole_theta
    }

    /// Maps oblique-frame coordinates to the native frame of the wrapped
    /// projection: the point whose oblique coordinates are given is
    /// located, and its latitude/longitude relative to the rotated pole
    /// are returned.
    pub fn from_oblique(&self, lat: f64, lon: f64) -> (f64, f64) {
        let pole_rel_cos = (self.pole_lon - lon).cos();

        let new_lat = if self.pole_lat >= HALF_PI {
            lat
        } else {
            let pre_asin = snap_to_unit(
                self.sin_pole_lat * lat.sin() + self.cos_pole_lat * lat.cos() * pole_rel_cos,
            );
            pre_asin.asin()
        };

        let mut new_lon = if self.pole_lat >= HALF_PI {
            lon - self.pole_lon
        } else if self.pole_lat <= -HALF_PI {
            self.pole_lon - lon - PI
        } else {
            let numer =
                self.cos_pole_lat * lat.sin() - self.sin_pole_lat * lat.cos() * pole_rel_cos;
            let denom = new_lat.cos();
            let mut resolved = (numer / denom).acos() - PI;

            if resolved.is_nan() {
                // the acos argument left [-1, 1]: the point sits on the
                // meridian through the pole, in front of it or behind it
                if (pole_rel_cos >= 0.0 && lat < self.pole_lat)
                    || (pole_rel_cos < 0.0 && lat < -self.pole_lat)
                {
                    resolved = 0.0;
                } else {
                    resolved = -PI;
                }
            } else if (lon - self.pole_lon).sin() > 0.0 {
                resolved = -resolved;
            }
            resolved
        };

        new_lon -= self.pole_theta;

        (new_lat, constrain_lon(new_lon))
    }

    /// Maps native-frame coordinates of the wrapped projection back to the
    /// oblique frame; the algebraic inverse of [`ObliqueAspect::from_oblique`].
    pub fn to_oblique(&self, lat: f64, lon: f64) -> (f64, f64) {
        let rotate_lon = lon + self.pole_theta;

        let pre_asin = snap_to_unit(
            self.sin_pole_lat * lat.sin()
                - self.cos_pole_lat * lat.cos() * rotate_lon.cos(),
        );
        let new_lat = pre_asin.asin();

        let inner = lat.sin() / self.cos_pole_lat / new_lat.cos()
            - self.pole_lat.tan() * new_lat.tan();
        let new_lon = if self.pole_lat >= HALF_PI {
            rotate_lon + self.pole_lon
        } else if self.pole_lat <= -HALF_PI {
            -rotate_lon + self.pole_lon + PI
        } else if inner.abs() > 1.0 {
            if (rotate_lon == 0.0 && lat < -self.pole_lat)
                || (rotate_lon != 0.0 && lat < self.pole_lat)
            {
                self.pole_lon + PI
            } else {
                self.pole_lon
            }
        } else if rotate_lon.sin() > 0.0 {
            self.pole_lon + inner.acos()
        } else {
            self.pole_lon - inner.acos()
        };

        (new_lat, constrain_lon(new_lon))
    }
}

/// A projection re-centered to an arbitrary pole and twist.
///
/// Satisfies the same contract as the projection it wraps: the planar
/// bounds pass through untouched, since the rotation acts on the sphere
/// and not on the plane.
#[derive(Debug, Clone, Copy)]
pub struct ObliqueProjection<P> {
    original: P,
    aspect: ObliqueAspect,
}

impl<P: Projection> ObliqueProjection<P> {
    pub fn new(original: P, pole_lat: f64, pole_lon: f64, pole_theta: f64) -> Self {
        Self {
            original,
            aspect: ObliqueAspect::new(pole_lat, pole_lon, pole_theta),
        }
    }

    pub fn aspect(&self) -> &ObliqueAspect {
        &self.aspect
    }
}

impl<P: Projection> Projection for ObliqueProjection<P> {
    fn project(&self, lat: f64, lon: f64) -> (f64, f64) {
        let (native_lat, native_lon) = self.aspect.from_oblique(lat, lon);
        self.original.project(native_lat, native_lon)
    }

    fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        let (native_lat, native_lon) = self.original.inverse(x, y);
        self.aspect.to_oblique(native_lat, native_lon)
    }

    fn planar_bounds(&self) -> Bounds {
        self.original.planar_bounds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planisphere_core::assert_within;
    use planisphere_core::constants::QUARTER_PI;

    #[test]
    fn test_north_pole_zero_twist_is_identity() {
        let aspect = ObliqueAspect::new(HALF_PI, 0.0, 0.0);
        for (lat, lon) in [
            (0.0, 0.0),
            (QUARTER_PI, QUARTER_PI),
            (-0.3, 2.0),
            (1.2, -2.9),
            (HALF_PI, 0.0),
        ] {
            let (to_lat, to_lon) = aspect.to_oblique(lat, lon);
            assert_within!(to_lat, lat, 1e-12);
            assert_within!(to_lon, lon, 1e-12);

            let (from_lat, from_lon) = aspect.from_oblique(lat, lon);
            assert_within!(from_lat, lat, 1e-12);
            assert_within!(from_lon, lon, 1e-12);
        }
    }

    #[test]
    fn test_roundtrip_generic_pole() {
        let aspect = ObliqueAspect::new(0.6, -1.1, 0.8);
        for (lat, lon) in [
            (0.0, 0.0),
            (0.5, 0.5),
            (-0.9, 2.2),
            (1.1, -2.0),
            (-1.4, -0.1),
        ] {
            let (mid_lat, mid_lon) = aspect.from_oblique(lat, lon);
            let (back_lat, back_lon) = aspect.to_oblique(mid_lat, mid_lon);
            assert_within!(back_lat, lat, 1e-9);
            assert_within!(back_lon, lon, 1e-9);
        }
    }

    #[test]
    fn test_roundtrip_south_pole_aspect() {
        let aspect = ObliqueAspect::new(-HALF_PI, 0.4, 0.0);
        for (lat, lon) in [(0.0, 0.0), (0.7, 1.3), (-0.2, -2.5)] {
            let (mid_lat, mid_lon) = aspect.from_oblique(lat, lon);
            let (back_lat, back_lon) = aspect.to_oblique(mid_lat, mid_lon);
            assert_within!(back_lat, lat, 1e-9);
            assert_within!(back_lon, lon, 1e-9);
        }
    }

    #[test]
    fn test_twist_only_shifts_longitude() {
        let aspect = ObliqueAspect::new(HALF_PI, 0.0, 0.5);
        let (lat, lon) = aspect.from_oblique(0.3, 1.0);
        assert_within!(lat, 0.3, 1e-12);
        assert_within!(lon, 0.5, 1e-12);
    }

    #[test]
    fn test_output_longitude_wrapped() {
        let aspect = ObliqueAspect::new(HALF_PI, -2.0, 1.5);
        // lon - pole_lon - pole_theta wanders past pi and must come back
        let (_, lon) = aspect.from_oblique(0.1, 3.0);
        assert!((-PI..PI).contains(&lon));
    }

    #[test]
    fn test_seam_snap() {
        let aspect = ObliqueAspect::new(HALF_PI, 0.0, 0.0);
        let (_, lon) = aspect.from_oblique(0.0, PI - 1e-9);
        assert_eq!(lon, -PI);
    }

    #[test]
    fn test_point_at_rotated_pole() {
        // the rotated pole itself maps to latitude pi/2 in the new frame
        let aspect = ObliqueAspect::new(0.7, 1.2, 0.0);
        let (lat, _) = aspect.from_oblique(0.7, 1.2);
        assert_within!(lat, HALF_PI, 1e-9);
    }
}
