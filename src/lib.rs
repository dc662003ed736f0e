//! GeoPose protocol core
//!
//! Data model, JSON wire codec and geodetic coordinate math for the GeoPose
//! visual-positioning exchange protocol: a client uploads sensor readings
//! (camera image, GPS, inertial/radio) and a localization service returns a
//! precise geographic pose with accuracy estimates. Transport, image I/O and
//! the positioning algorithm itself are external collaborators; the
//! algorithm is injected through [`service::PoseEstimator`].

pub mod core;
pub mod geodesy;
pub mod protocol;
pub mod service;
pub mod utils;
pub mod validation;

// Re-export commonly used types
pub use crate::core::{GeoPose, GeoPoseAccuracy, Position, Quaternion, Vector3};
pub use geodesy::{
    ecef_to_enu, ecef_to_geodetic, enu_to_ecef, enu_to_geodetic, geodetic_to_ecef,
    geodetic_to_enu,
};
pub use protocol::{
    decode_request, decode_response, encode_request, encode_response, verify_accept_header,
    CodecError, GeoPoseRequest, GeoPoseResponse, NegotiationError, ProtocolVersion, Sensor,
    SensorReadings, SensorType,
};
pub use service::{localize, FixedPoseEstimator, PoseEstimator, ServiceError};
pub use utils::{ConfigError, ServiceConfig};
pub use validation::{validate_for_localization, validate_request, ValidationError};
