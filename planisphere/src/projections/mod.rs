pub mod azimuthal;
pub mod cylindrical;
pub mod healpix;
pub mod lenticular;
pub mod pseudocylindrical;
pub mod tabular;
