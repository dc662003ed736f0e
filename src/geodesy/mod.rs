//! Geodetic coordinate conversions (WGS84)

pub mod transforms;

pub use transforms::{
    ecef_to_enu, ecef_to_geodetic, enu_to_ecef, enu_to_geodetic, geodetic_to_ecef,
    geodetic_to_enu,
};
