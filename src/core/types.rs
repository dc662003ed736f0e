//! Core value types shared across the protocol and the geodesy math

/// Geodetic position: latitude and longitude in degrees, height in meters
/// above the WGS84 ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub lat: f64,
    pub lon: f64,
    pub h: f64,
}

impl Position {
    pub fn new(lat: f64, lon: f64, h: f64) -> Self {
        Self { lat, lon, h }
    }
}

/// Frame-agnostic 3D vector, used for translations and sensor axis readings.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Rotation quaternion. The protocol assumes unit norm but does not verify it
/// on decode; consumers must treat the norm as an invariant they inherit.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Quaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Quaternion {
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }
}

/// A geographic pose: geodetic position plus the rotation orienting the
/// device frame relative to a locally north-aligned frame at that position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeoPose {
    pub position: Position,
    pub quaternion: Quaternion,
}

/// Accuracy estimate attached to a localization response.
///
/// `position` is the mean error over the three position components in
/// meters; `orientation` the mean error over the three angles in degrees.
/// The default is `f64::MAX`, a sentinel for unknown/unbounded accuracy.
/// Zero would falsely claim a perfect fix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoseAccuracy {
    pub position: f64,
    pub orientation: f64,
}

impl Default for GeoPoseAccuracy {
    fn default() -> Self {
        Self {
            position: f64::MAX,
            orientation: f64::MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accuracy_default_is_unknown_sentinel() {
        let acc = GeoPoseAccuracy::default();
        assert_eq!(acc.position, f64::MAX);
        assert_eq!(acc.orientation, f64::MAX);
    }

    #[test]
    fn test_geopose_default_is_zeroed() {
        let pose = GeoPose::default();
        assert_eq!(pose.position, Position::new(0.0, 0.0, 0.0));
        assert_eq!(pose.quaternion, Quaternion::new(0.0, 0.0, 0.0, 0.0));
    }
}
