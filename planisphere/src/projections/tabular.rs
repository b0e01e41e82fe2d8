use serde::{Deserialize, Serialize};

use planisphere_core::constants::{DEG_TO_RAD, PI, RAD_TO_DEG};

use crate::bounds::Bounds;
use crate::error::{ProjError, ProjResult};
use crate::interp::aitken_interpolate;
use crate::projection::Projection;

/// A pseudocylindrical projection defined by a table of per-latitude
/// ratios rather than formulas.
///
/// Each table row gives, for a latitude, the length of its parallel
/// relative to the equator and its distance from the equator relative to
/// the pole. Values between rows come from local polynomial
/// interpolation of the given order. The y scale maps the normalized
/// distance ratios onto the plane, so tables can be entered in the
/// (-1, 1) range they are published in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabularProjection {
    half_order: usize,
    y_scale: f64,
    latitudes: Vec<f64>,
    length_ratios: Vec<f64>,
    dist_ratios: Vec<f64>,
}

const ROBINSON_NATURAL_EARTH_LATITUDES: [f64; 37] = [
    -90.0, -85.0, -80.0, -75.0, -70.0, -65.0, -60.0, -55.0, -50.0, -45.0, -40.0, -35.0, -30.0,
    -25.0, -20.0, -15.0, -10.0, -5.0, 0.0, 5.0, 10.0, 15.0, 20.0, 25.0, 30.0, 35.0, 40.0, 45.0,
    50.0, 55.0, 60.0, 65.0, 70.0, 75.0, 80.0, 85.0, 90.0,
];

const ROBINSON_LENGTH_RATIOS: [f64; 37] = [
    0.5322, 0.5722, 0.6213, 0.6732, 0.7186, 0.7597, 0.7986, 0.8350, 0.8679, 0.8962, 0.9216,
    0.9427, 0.9600, 0.9730, 0.9822, 0.9900, 0.9954, 0.9986, 1.0000, 0.9986, 0.9954, 0.9900,
    0.9822, 0.9730, 0.9600, 0.9427, 0.9216, 0.8962, 0.8679, 0.8350, 0.7986, 0.7597, 0.7186,
    0.6732, 0.6213, 0.5722, 0.5322,
];

const ROBINSON_DIST_RATIOS: [f64; 37] = [
    -1.0000, -0.9761, -0.9394, -0.8936, -0.8435, -0.7903, -0.7346, -0.6769, -0.6176, -0.5571,
    -0.4958, -0.4340, -0.3720, -0.3100, -0.2480, -0.1860, -0.1240, -0.0620, 0.0000, 0.0620,
    0.1240, 0.1860, 0.2480, 0.3100, 0.3720, 0.4340, 0.4958, 0.5571, 0.6176, 0.6769, 0.7346,
    0.7903, 0.8435, 0.8936, 0.9394, 0.9761, 1.0000,
];

const NATURAL_EARTH_LENGTH_RATIOS: [f64; 37] = [
    0.5630, 0.6270, 0.6754, 0.7160, 0.7525, 0.7874, 0.8196, 0.8492, 0.8763, 0.9006, 0.9222,
    0.9409, 0.9570, 0.9703, 0.9811, 0.9894, 0.9953, 0.9988, 1.0000, 0.9988, 0.9953, 0.9894,
    0.9811, 0.9703, 0.9570, 0.9409, 0.9222, 0.9006, 0.8763, 0.8492, 0.8196, 0.7874, 0.7525,
    0.7160, 0.6754, 0.6270, 0.5630,
];

impl TabularProjection {
    /// Builds a projection from a table.
    ///
    /// The latitude column is in degrees and, like the distance-ratio
    /// column, must be strictly ascending; all three columns must have
    /// the same length with at least two rows. The polynomial order must
    /// be a positive even number, and the y scale in (0, 1].
    pub fn new(
        latitudes: Vec<f64>,
        length_ratios: Vec<f64>,
        dist_ratios: Vec<f64>,
        polynomial_order: usize,
        y_scale: f64,
    ) -> ProjResult<Self> {
        if latitudes.len() < 2 {
            return Err(ProjError::invalid_parameter(
                "tabular projection needs at least two rows",
            ));
        }
        if latitudes.len() != length_ratios.len() || latitudes.len() != dist_ratios.len() {
            return Err(ProjError::invalid_parameter(
                "tabular projection columns differ in length",
            ));
        }
        if !strictly_ascending(&latitudes) || !strictly_ascending(&dist_ratios) {
            return Err(ProjError::invalid_parameter(
                "tabular projection columns must be strictly ascending",
            ));
        }
        if polynomial_order == 0 || polynomial_order % 2 != 0 {
            return Err(ProjError::invalid_parameter(
                "polynomial order must be positive and even",
            ));
        }
        if !(y_scale > 0.0 && y_scale <= 1.0) {
            return Err(ProjError::invalid_parameter("y scale must be in (0, 1]"));
        }

        Ok(Self {
            half_order: polynomial_order / 2,
            y_scale,
            latitudes,
            length_ratios,
            dist_ratios,
        })
    }

    /// The Robinson compromise projection.
    /// <https://en.wikipedia.org/wiki/Robinson_projection>
    pub fn robinson() -> Self {
        Self {
            half_order: 2,
            y_scale: 0.5072,
            latitudes: ROBINSON_NATURAL_EARTH_LATITUDES.to_vec(),
            length_ratios: ROBINSON_LENGTH_RATIOS.to_vec(),
            dist_ratios: ROBINSON_DIST_RATIOS.to_vec(),
        }
    }

    /// The Natural Earth compromise projection.
    /// <https://en.wikipedia.org/wiki/Natural_Earth_projection>
    pub fn natural_earth() -> Self {
        Self {
            half_order: 2,
            y_scale: 0.520,
            latitudes: ROBINSON_NATURAL_EARTH_LATITUDES.to_vec(),
            length_ratios: NATURAL_EARTH_LENGTH_RATIOS.to_vec(),
            dist_ratios: ROBINSON_DIST_RATIOS.to_vec(),
        }
    }

    /// Interpolates `ys` at `at`, with the window centered on `at`'s
    /// position in the sorted `xs` column and clamped to the table.
    fn interpolate(&self, at: f64, xs: &[f64], ys: &[f64]) -> f64 {
        let ind = xs.partition_point(|&v| v < at);
        let start = ind.saturating_sub(self.half_order);
        let end = (ind + self.half_order).min(xs.len());
        aitken_interpolate(xs, ys, start..end, at)
    }
}

fn strictly_ascending(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] < w[1])
}

impl Projection for TabularProjection {
    fn project(&self, lat: f64, lon: f64) -> (f64, f64) {
        let lat_deg = lat * RAD_TO_DEG;
        let length = self.interpolate(lat_deg, &self.latitudes, &self.length_ratios);
        let dist = self.interpolate(lat_deg, &self.latitudes, &self.dist_ratios);
        (lon / PI * length, self.y_scale * dist)
    }

    fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        let y_norm = y / self.y_scale;
        let lat_deg = self.interpolate(y_norm, &self.dist_ratios, &self.latitudes);
        let length = self.interpolate(y_norm, &self.dist_ratios, &self.length_ratios);
        (lat_deg * DEG_TO_RAD, PI * x / length)
    }

    fn planar_bounds(&self) -> Bounds {
        Bounds::rectangle(2.0, 2.0 * self.y_scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planisphere_core::assert_within;
    use planisphere_core::constants::HALF_PI;

    #[test]
    fn test_robinson_reference_points() {
        let proj = TabularProjection::robinson();

        let (x, y) = proj.project(0.0, 0.0);
        assert_within!(x, 0.0, 1e-12);
        assert_within!(y, 0.0, 1e-12);

        // the equator's edge reaches the unit parallel length
        let (x, y) = proj.project(0.0, PI);
        assert_within!(x, 1.0, 1e-12);
        assert_within!(y, 0.0, 1e-12);

        // the pole line is 0.5322 of the equator, at the full y scale
        let (x, y) = proj.project(HALF_PI, PI);
        assert_within!(x, 0.5322, 1e-12);
        assert_within!(y, 0.5072, 1e-12);
    }

    #[test]
    fn test_robinson_table_row_is_exact() {
        let proj = TabularProjection::robinson();
        let (_, y) = proj.project(85.0 * DEG_TO_RAD, 0.0);
        assert_within!(y, 0.5072 * 0.9761, 1e-12);
    }

    #[test]
    fn test_robinson_roundtrip_at_table_rows() {
        let proj = TabularProjection::robinson();
        for lat_deg in [-90.0, -45.0, 0.0, 35.0, 90.0] {
            let lat = lat_deg * DEG_TO_RAD;
            let (x, y) = proj.project(lat, 1.3);
            let (rlat, rlon) = proj.inverse(x, y);
            assert_within!(rlat, lat, 1e-9);
            assert_within!(rlon, 1.3, 1e-9);
        }
    }

    #[test]
    fn test_robinson_roundtrip_between_rows() {
        let proj = TabularProjection::robinson();
        for (lat, lon) in [(0.4, 2.0), (-0.9, -3.0), (1.1, 0.5)] {
            let (x, y) = proj.project(lat, lon);
            let (rlat, rlon) = proj.inverse(x, y);
            // forward and inverse interpolate different columns, so the
            // round trip is only as exact as the table is dense
            assert_within!(rlat, lat, 5e-3);
            assert_within!(rlon, lon, 5e-3);
        }
    }

    #[test]
    fn test_natural_earth_differs_from_robinson_in_x_only() {
        let robinson = TabularProjection::robinson();
        let natural = TabularProjection::natural_earth();
        let (rx, ry) = robinson.project(0.7, 2.0);
        let (nx, ny) = natural.project(0.7, 2.0);
        assert!((rx - nx).abs() > 1e-4);
        assert_within!(ny / 0.520, ry / 0.5072, 1e-12);
    }

    #[test]
    fn test_projection_stays_bounded() {
        let proj = TabularProjection::natural_earth();
        let bounds = proj.planar_bounds();
        let mut lat = -HALF_PI;
        while lat <= HALF_PI {
            let (x, y) = proj.project(lat, PI);
            assert!(bounds.within(x, y));
            lat += 0.05;
        }
    }

    #[test]
    fn test_new_validates_table() {
        let bad_lengths = TabularProjection::new(
            vec![0.0, 1.0],
            vec![1.0],
            vec![0.0, 0.1],
            4,
            0.5,
        );
        assert!(bad_lengths.is_err());

        let unsorted = TabularProjection::new(
            vec![0.0, 2.0, 1.0],
            vec![1.0, 0.9, 0.8],
            vec![0.0, 0.1, 0.2],
            4,
            0.5,
        );
        assert!(unsorted.is_err());

        let odd_order = TabularProjection::new(
            vec![0.0, 1.0, 2.0],
            vec![1.0, 0.9, 0.8],
            vec![0.0, 0.1, 0.2],
            3,
            0.5,
        );
        assert!(odd_order.is_err());

        let bad_scale = TabularProjection::new(
            vec![0.0, 1.0, 2.0],
            vec![1.0, 0.9, 0.8],
            vec![0.0, 0.1, 0.2],
            4,
            0.0,
        );
        assert!(bad_scale.is_err());

        let good = TabularProjection::new(
            vec![0.0, 1.0, 2.0],
            vec![1.0, 0.9, 0.8],
            vec![0.0, 0.1, 0.2],
            2,
            0.5,
        );
        assert!(good.is_ok());
    }
}
