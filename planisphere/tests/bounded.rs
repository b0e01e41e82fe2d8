//! Every projected point must fall within the projection's own planar
//! bounds, over the latitude range the published bounds cover.

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

use planisphere::{
    Aitoff, Cassini, Central, CylindricalEqualArea, EckertIv, Eisenlohr, EqualEarth,
    Equirectangular, GallStereographic, Gnomonic, Hammer, HealpixStandard, Homolosine,
    LambertAzimuthal, Mercator, Miller, Mollweide, ObliqueProjection, Orthographic, PlateCarree,
    Polar, Projection, Sinusoidal, Stereographic, TabularProjection,
};

fn check_bounded(proj: &impl Projection, lat: f64, lon: f64) -> Result<(), TestCaseError> {
    let (x, y) = proj.project(lat, lon);
    prop_assert!(
        proj.planar_bounds().within(x, y),
        "({}, {}) projected from ({}, {}) left the bounds",
        x,
        y,
        lat,
        lon
    );
    Ok(())
}

macro_rules! bounded_props {
    ($($name:ident: $proj:expr, $lat_range:expr;)*) => {
        proptest! {
            $(
                #[test]
                fn $name(lat in $lat_range, lon in -3.1f64..3.1) {
                    check_bounded(&$proj, lat, lon)?;
                }
            )*
        }
    };
}

bounded_props! {
    prop_mercator: Mercator::new(), -1.48f64..1.48;
    prop_plate_carree: PlateCarree::new(), -1.57f64..1.57;
    prop_equirectangular_positive: Equirectangular::new(45.0_f64.to_radians()), -1.57f64..1.57;
    prop_equirectangular_negative: Equirectangular::new(-45.0_f64.to_radians()), -1.57f64..1.57;
    prop_lambert_cylindrical: CylindricalEqualArea::lambert(), -1.57f64..1.57;
    prop_behrmann: CylindricalEqualArea::behrmann(), -1.57f64..1.57;
    prop_gall_orthographic: CylindricalEqualArea::gall_orthographic(), -1.57f64..1.57;
    prop_hobo_dyer: CylindricalEqualArea::hobo_dyer(), -1.57f64..1.57;
    prop_gall_stereographic: GallStereographic::new(), -1.57f64..1.57;
    prop_miller: Miller::new(), -1.57f64..1.57;
    prop_central: Central::new(), -1.26f64..1.26;
    prop_cassini: Cassini::new(), -1.57f64..1.57;
    prop_sinusoidal: Sinusoidal::new(), -1.57f64..1.57;
    prop_mollweide: Mollweide::new(), -1.57f64..1.57;
    prop_homolosine: Homolosine::new(), -1.57f64..1.57;
    prop_eckert_iv: EckertIv::new(), -1.57f64..1.57;
    prop_equal_earth: EqualEarth::new(), -1.57f64..1.57;
    prop_stereographic_north: Stereographic::new(), -0.6f64..1.57;
    prop_polar: Polar::new(), -1.57f64..1.57;
    prop_lambert_azimuthal: LambertAzimuthal::new(), -1.57f64..1.57;
    prop_orthographic: Orthographic::new(), -1.57f64..1.57;
    prop_gnomonic_north: Gnomonic::new(), 0.5f64..1.57;
    prop_aitoff: Aitoff::new(), -1.57f64..1.57;
    prop_hammer: Hammer::new(), -1.57f64..1.57;
    prop_eisenlohr: Eisenlohr::new(), -1.57f64..1.57;
    prop_healpix: HealpixStandard::new(), -1.57f64..1.57;
    prop_robinson: TabularProjection::robinson(), -1.57f64..1.57;
    prop_natural_earth: TabularProjection::natural_earth(), -1.57f64..1.57;
    prop_transverse_plate_carree:
        ObliqueProjection::new(PlateCarree::new(), 0.0, std::f64::consts::FRAC_PI_2, -std::f64::consts::FRAC_PI_2),
        -1.57f64..1.57;
}
