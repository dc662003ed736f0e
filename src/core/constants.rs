//! Protocol and ellipsoid constants

/// WGS84 semi-major axis (equatorial radius) in meters
pub const WGS84_A: f64 = 6378137.0;

/// WGS84 semi-minor axis (polar radius) in meters
pub const WGS84_B: f64 = 6356752.3142;

/// WGS84 flattening factor
pub const WGS84_F: f64 = (WGS84_A - WGS84_B) / WGS84_A;

/// WGS84 first eccentricity squared, e² = f(2 - f)
pub const WGS84_E_SQ: f64 = WGS84_F * (2.0 - WGS84_F);

/// Message type literal carried by every request and response
pub const MESSAGE_TYPE_GEOPOSE: &str = "geopose";

/// Vendor media type required in the Accept header of localization requests
pub const GPP_MEDIA_TYPE: &str = "application/vnd.oscp+json";

/// Protocol major version this implementation speaks
pub const SUPPORTED_VERSION_MAJOR: u32 = 2;

/// Protocol minor version this implementation speaks
pub const SUPPORTED_VERSION_MINOR: u32 = 0;
