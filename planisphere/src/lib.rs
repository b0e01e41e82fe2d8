//! Sphere-to-plane map projections and the numerical machinery behind them.
//!
//! The central abstraction is the [`Projection`] trait: a pair of mutually
//! inverse mappings between spherical coordinates (latitude/longitude in
//! radians) and planar coordinates, plus the planar [`Bounds`] the forward
//! mapping stays within. Around it sit the pieces shared by many
//! projections:
//!
//! - [`newton::newton_raphson`], a root finder over `f64` or complex
//!   values, for inverses with no closed form;
//! - [`interp::aitken_interpolate`], polynomial interpolation over sparse
//!   tables, for table-driven projections;
//! - [`ObliqueAspect`] and [`ObliqueProjection`], which re-center any
//!   projection to an arbitrary pole and twist;
//! - [`distortion::distortion_at`], a finite-difference estimate of local
//!   area and angular distortion.
//!
//! Undefined results are signaled with NaN, never a panic: projecting a
//! point a projection cannot represent yields NaN coordinates that callers
//! should treat as "undefined here".

pub mod bounds;
pub mod distortion;
pub mod error;
pub mod interp;
pub mod newton;
pub mod oblique;
pub mod projection;
pub mod projections;

pub use bounds::Bounds;
pub use distortion::{angular_distortion_at, area_distortion_at, distortion_at, MAX_DISTORTION};
pub use error::{ProjError, ProjResult};
pub use interp::aitken_interpolate;
pub use newton::{newton_raphson, NewtonConfig, NewtonScalar};
pub use oblique::{ObliqueAspect, ObliqueProjection};
pub use projection::Projection;
pub use projections::azimuthal::{Gnomonic, LambertAzimuthal, Orthographic, Polar, Stereographic};
pub use projections::cylindrical::{
    Cassini, Central, CylindricalEqualArea, Equirectangular, GallStereographic, Mercator, Miller,
    PlateCarree,
};
pub use projections::healpix::HealpixStandard;
pub use projections::lenticular::{Aitoff, Eisenlohr, Hammer};
pub use projections::pseudocylindrical::{EckertIv, EqualEarth, Homolosine, Mollweide, Sinusoidal};
pub use projections::tabular::TabularProjection;
