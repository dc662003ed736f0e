//! GeoPose protocol entity graph
//!
//! Value types making up a localization request/response. Every entity is
//! constructible with full defaults so partially specified messages never
//! need null handling downstream; default sequences are freshly allocated
//! per instance. Timestamps are milliseconds since the Unix epoch as `f64`
//! throughout.

use crate::core::{GeoPose, GeoPoseAccuracy, Quaternion, Vector3};
use crate::core::constants::MESSAGE_TYPE_GEOPOSE;
use crate::utils::time::epoch_ms;

use uuid::Uuid;

/// Kind of sensor a [`Sensor`] entry describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SensorType {
    Camera,
    Geolocation,
    Wifi,
    Bluetooth,
    Accelerometer,
    Gyroscope,
    Magnetometer,
    #[default]
    Unknown,
}

impl SensorType {
    /// Canonical wire spelling.
    pub fn as_wire(&self) -> &'static str {
        match self {
            SensorType::Camera => "camera",
            SensorType::Geolocation => "geolocation",
            SensorType::Wifi => "wifi",
            SensorType::Bluetooth => "bluetooth",
            SensorType::Accelerometer => "accelerometer",
            SensorType::Gyroscope => "gyroscope",
            SensorType::Magnetometer => "magnetometer",
            SensorType::Unknown => "unknown",
        }
    }

    /// Case-insensitive variant lookup. `None` for unrecognized spellings.
    pub fn from_wire(s: &str) -> Option<Self> {
        const TABLE: [SensorType; 8] = [
            SensorType::Camera,
            SensorType::Geolocation,
            SensorType::Wifi,
            SensorType::Bluetooth,
            SensorType::Accelerometer,
            SensorType::Gyroscope,
            SensorType::Magnetometer,
            SensorType::Unknown,
        ];
        TABLE
            .into_iter()
            .find(|v| v.as_wire().eq_ignore_ascii_case(s))
    }
}

/// Pixel format of a camera image payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFormat {
    Rgba32,
    Gray8,
    Depth,
    Jpg,
    #[default]
    Unknown,
}

impl ImageFormat {
    pub fn as_wire(&self) -> &'static str {
        match self {
            ImageFormat::Rgba32 => "RGBA32",
            ImageFormat::Gray8 => "GRAY8",
            ImageFormat::Depth => "DEPTH",
            ImageFormat::Jpg => "JPG",
            ImageFormat::Unknown => "unknown",
        }
    }

    pub fn from_wire(s: &str) -> Option<Self> {
        const TABLE: [ImageFormat; 5] = [
            ImageFormat::Rgba32,
            ImageFormat::Gray8,
            ImageFormat::Depth,
            ImageFormat::Jpg,
            ImageFormat::Unknown,
        ];
        TABLE
            .into_iter()
            .find(|v| v.as_wire().eq_ignore_ascii_case(s))
    }
}

/// Camera intrinsics model. The variants follow the standard Colmap camera
/// models; `model_params` ordering in [`CameraParameters`] depends on the
/// variant (e.g. `SIMPLE_PINHOLE` is `f, cx, cy`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraModel {
    SimplePinhole,
    Pinhole,
    SimpleRadial,
    Radial,
    OpenCv,
    OpenCvFisheye,
    FullOpenCv,
    Fov,
    SimpleRadialFisheye,
    RadialFisheye,
    ThinPrismFisheye,
    #[default]
    Unknown,
}

impl CameraModel {
    pub fn as_wire(&self) -> &'static str {
        match self {
            CameraModel::SimplePinhole => "SIMPLE_PINHOLE",
            CameraModel::Pinhole => "PINHOLE",
            CameraModel::SimpleRadial => "SIMPLE_RADIAL",
            CameraModel::Radial => "RADIAL",
            CameraModel::OpenCv => "OPENCV",
            CameraModel::OpenCvFisheye => "OPENCV_FISHEYE",
            CameraModel::FullOpenCv => "FULL_OPENCV",
            CameraModel::Fov => "FOV",
            CameraModel::SimpleRadialFisheye => "SIMPLE_RADIAL_FISHEYE",
            CameraModel::RadialFisheye => "RADIAL_FISHEYE",
            CameraModel::ThinPrismFisheye => "THIN_PRISM_FISHEYE",
            CameraModel::Unknown => "UNKNOWN",
        }
    }

    pub fn from_wire(s: &str) -> Option<Self> {
        const TABLE: [CameraModel; 12] = [
            CameraModel::SimplePinhole,
            CameraModel::Pinhole,
            CameraModel::SimpleRadial,
            CameraModel::Radial,
            CameraModel::OpenCv,
            CameraModel::OpenCvFisheye,
            CameraModel::FullOpenCv,
            CameraModel::Fov,
            CameraModel::SimpleRadialFisheye,
            CameraModel::RadialFisheye,
            CameraModel::ThinPrismFisheye,
            CameraModel::Unknown,
        ];
        TABLE
            .into_iter()
            .find(|v| v.as_wire().eq_ignore_ascii_case(s))
    }
}

/// Orientation metadata for a captured image.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ImageOrientation {
    pub mirrored: bool,
    /// Clockwise rotation in degrees.
    pub rotation: f64,
}

/// Camera intrinsics attached to a [`CameraReading`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CameraParameters {
    pub model: CameraModel,
    /// Intrinsic parameters; count and order depend on `model`.
    pub model_params: Vec<f64>,
    /// Depth range for depth images.
    pub min_max_depth: Vec<f64>,
    /// Disparity range for disparity images.
    pub min_max_disparity: Vec<f64>,
}

/// Advisory data-handling policy identifiers. Not enforced by the protocol
/// layer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Privacy {
    /// Acceptable policies for server-side data retention.
    pub data_retention: Vec<String>,
    /// Acceptable policies for server-side data use.
    pub data_acceptable_use: Vec<String>,
    /// Client-side sanitization already applied.
    pub data_sanitization_applied: Vec<String>,
    /// Server-side sanitization the client requests.
    pub data_sanitization_requested: Vec<String>,
}

/// One captured camera frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CameraReading {
    pub timestamp: f64,
    /// References a [`Sensor::id`] declared in the same request.
    pub sensor_id: String,
    pub privacy: Privacy,
    /// Monotonic per camera sensor.
    pub sequence_number: u32,
    pub image_format: ImageFormat,
    /// Width, height in pixels.
    pub size: [u32; 2],
    /// Base64-encoded image payload.
    pub image_bytes: String,
    pub image_orientation: ImageOrientation,
    pub params: CameraParameters,
}

/// GNSS/geolocation fix, aligned with the W3C geolocation sensor fields.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeolocationReading {
    pub timestamp: f64,
    pub sensor_id: String,
    pub privacy: Privacy,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
    pub accuracy: f64,
    pub altitude_accuracy: f64,
    pub heading: f64,
    pub speed: f64,
}

/// One observed WiFi access point.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WiFiReading {
    pub timestamp: f64,
    pub sensor_id: String,
    pub privacy: Privacy,
    pub bssid: String,
    pub frequency: f64,
    pub rssi: f64,
    pub ssid: String,
    pub scan_time_start: f64,
    pub scan_time_end: f64,
}

/// One observed Bluetooth device.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BluetoothReading {
    pub timestamp: f64,
    pub sensor_id: String,
    pub privacy: Privacy,
    pub address: String,
    pub rssi: f64,
    pub name: String,
}

/// Accelerometer sample, device frame, m/s².
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AccelerometerReading {
    pub timestamp: f64,
    pub sensor_id: String,
    pub privacy: Privacy,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Gyroscope sample, device frame, rad/s.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GyroscopeReading {
    pub timestamp: f64,
    pub sensor_id: String,
    pub privacy: Privacy,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Magnetometer sample, device frame, µT.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MagnetometerReading {
    pub timestamp: f64,
    pub sensor_id: String,
    pub privacy: Privacy,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Identity and mounting of one sensor contributing readings to a request.
///
/// `rig_rotation`/`rig_translation` give the sensor's pose relative to the
/// reference frame of a rigid multi-sensor rig named by `rig_identifier`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sensor {
    pub sensor_type: SensorType,
    /// Unique within the enclosing request.
    pub id: String,
    pub name: String,
    pub model: String,
    pub rig_identifier: String,
    pub rig_rotation: Option<Quaternion>,
    pub rig_translation: Option<Vector3>,
}

/// The seven per-variant reading sequences of a request, each
/// insertion-ordered and independently empty by default.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SensorReadings {
    pub camera_readings: Vec<CameraReading>,
    pub geolocation_readings: Vec<GeolocationReading>,
    pub wifi_readings: Vec<WiFiReading>,
    pub bluetooth_readings: Vec<BluetoothReading>,
    pub accelerometer_readings: Vec<AccelerometerReading>,
    pub gyroscope_readings: Vec<GyroscopeReading>,
    pub magnetometer_readings: Vec<MagnetometerReading>,
}

impl SensorReadings {
    /// True when no reading of any variant is present.
    pub fn is_empty(&self) -> bool {
        self.camera_readings.is_empty()
            && self.geolocation_readings.is_empty()
            && self.wifi_readings.is_empty()
            && self.bluetooth_readings.is_empty()
            && self.accelerometer_readings.is_empty()
            && self.gyroscope_readings.is_empty()
            && self.magnetometer_readings.is_empty()
    }
}

/// A localization request: declared sensors plus their readings, optionally
/// accompanied by prior responses for temporal localization.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoPoseRequest {
    /// Always the literal `"geopose"`.
    pub message_type: String,
    pub id: String,
    pub timestamp: f64,
    pub sensors: Vec<Sensor>,
    pub sensor_readings: SensorReadings,
    pub prior_poses: Vec<GeoPoseResponse>,
}

impl GeoPoseRequest {
    /// Fresh request with a random UUID id and the current time.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp: epoch_ms(),
            ..Self::default()
        }
    }
}

impl Default for GeoPoseRequest {
    fn default() -> Self {
        Self {
            message_type: MESSAGE_TYPE_GEOPOSE.to_string(),
            id: String::new(),
            timestamp: 0.0,
            sensors: Vec::new(),
            sensor_readings: SensorReadings::default(),
            prior_poses: Vec::new(),
        }
    }
}

/// A localization response. `id` must echo the request's id.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoPoseResponse {
    /// Always the literal `"geopose"`.
    pub message_type: String,
    pub id: String,
    pub timestamp: f64,
    pub accuracy: GeoPoseAccuracy,
    pub geopose: GeoPose,
}

impl GeoPoseResponse {
    /// Fresh response echoing the given request id, stamped with the
    /// current time.
    pub fn for_request(request_id: &str) -> Self {
        Self {
            id: request_id.to_string(),
            timestamp: epoch_ms(),
            ..Self::default()
        }
    }
}

impl Default for GeoPoseResponse {
    fn default() -> Self {
        Self {
            message_type: MESSAGE_TYPE_GEOPOSE.to_string(),
            id: String::new(),
            timestamp: 0.0,
            accuracy: GeoPoseAccuracy::default(),
            geopose: GeoPose::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensor_type_wire_round_trip() {
        for t in [
            SensorType::Camera,
            SensorType::Geolocation,
            SensorType::Wifi,
            SensorType::Bluetooth,
            SensorType::Accelerometer,
            SensorType::Gyroscope,
            SensorType::Magnetometer,
            SensorType::Unknown,
        ] {
            assert_eq!(SensorType::from_wire(t.as_wire()), Some(t));
        }
    }

    #[test]
    fn test_enum_lookup_is_case_insensitive() {
        assert_eq!(SensorType::from_wire("CAMERA"), Some(SensorType::Camera));
        assert_eq!(SensorType::from_wire("camera"), Some(SensorType::Camera));
        assert_eq!(ImageFormat::from_wire("jpg"), Some(ImageFormat::Jpg));
        assert_eq!(ImageFormat::from_wire("rgba32"), Some(ImageFormat::Rgba32));
        assert_eq!(
            CameraModel::from_wire("simple_pinhole"),
            Some(CameraModel::SimplePinhole)
        );
    }

    #[test]
    fn test_enum_lookup_rejects_unknown_spellings() {
        assert_eq!(SensorType::from_wire("drone"), None);
        assert_eq!(ImageFormat::from_wire("PNG"), None);
        assert_eq!(CameraModel::from_wire("BROWN_CONRADY"), None);
    }

    #[test]
    fn test_new_request_populates_id_and_timestamp() {
        let a = GeoPoseRequest::new();
        let b = GeoPoseRequest::new();
        assert_eq!(a.message_type, "geopose");
        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
        assert!(a.timestamp > 0.0);
    }

    #[test]
    fn test_default_sequences_do_not_alias() {
        let mut a = GeoPoseRequest::default();
        let b = GeoPoseRequest::default();
        a.sensors.push(Sensor::default());
        assert!(b.sensors.is_empty());
    }

    #[test]
    fn test_response_echoes_request_id() {
        let request = GeoPoseRequest::new();
        let response = GeoPoseResponse::for_request(&request.id);
        assert_eq!(response.id, request.id);
        assert_eq!(response.message_type, "geopose");
    }

    #[test]
    fn test_sensor_readings_is_empty() {
        let mut readings = SensorReadings::default();
        assert!(readings.is_empty());
        readings.gyroscope_readings.push(GyroscopeReading::default());
        assert!(!readings.is_empty());
    }
}
