//! Consumer-side request validation
//!
//! The wire codec deliberately decodes anything structurally well-formed;
//! the integrity rules below are the consumer's job. A server calls
//! [`validate_for_localization`] before handing the request to a pose
//! estimator.

use std::collections::HashSet;
use std::fmt;

use crate::protocol::types::GeoPoseRequest;

/// Violations of the request integrity rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Two sensors declare the same id.
    DuplicateSensorId { id: String },
    /// A reading references a sensor id no declared sensor carries.
    DanglingSensorReference { sensor_id: String },
    /// Image-based localization needs at least one camera reading.
    NoCameraReading,
    /// The first camera reading carries no image payload.
    EmptyImage { sensor_id: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateSensorId { id } => {
                write!(f, "duplicate sensor id '{}'", id)
            }
            ValidationError::DanglingSensorReference { sensor_id } => {
                write!(f, "reading references undeclared sensor '{}'", sensor_id)
            }
            ValidationError::NoCameraReading => {
                write!(f, "request has no camera readings")
            }
            ValidationError::EmptyImage { sensor_id } => {
                write!(f, "camera reading from '{}' has no image", sensor_id)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check structural integrity: sensor ids unique, every reading's
/// `sensorId` declared in the same request.
pub fn validate_request(request: &GeoPoseRequest) -> Result<(), ValidationError> {
    let mut declared = HashSet::new();
    for sensor in &request.sensors {
        if !declared.insert(sensor.id.as_str()) {
            return Err(ValidationError::DuplicateSensorId { id: sensor.id.clone() });
        }
    }

    let readings = &request.sensor_readings;
    let referenced = readings
        .camera_readings
        .iter()
        .map(|r| &r.sensor_id)
        .chain(readings.geolocation_readings.iter().map(|r| &r.sensor_id))
        .chain(readings.wifi_readings.iter().map(|r| &r.sensor_id))
        .chain(readings.bluetooth_readings.iter().map(|r| &r.sensor_id))
        .chain(readings.accelerometer_readings.iter().map(|r| &r.sensor_id))
        .chain(readings.gyroscope_readings.iter().map(|r| &r.sensor_id))
        .chain(readings.magnetometer_readings.iter().map(|r| &r.sensor_id));
    for sensor_id in referenced {
        if !declared.contains(sensor_id.as_str()) {
            return Err(ValidationError::DanglingSensorReference {
                sensor_id: sensor_id.clone(),
            });
        }
    }
    Ok(())
}

/// [`validate_request`] plus the image-based localization precondition:
/// at least one camera reading with a non-empty image payload.
pub fn validate_for_localization(request: &GeoPoseRequest) -> Result<(), ValidationError> {
    validate_request(request)?;
    let first = request
        .sensor_readings
        .camera_readings
        .first()
        .ok_or(ValidationError::NoCameraReading)?;
    if first.image_bytes.is_empty() {
        return Err(ValidationError::EmptyImage { sensor_id: first.sensor_id.clone() });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::types::{CameraReading, Sensor, SensorType, WiFiReading};

    fn camera_request() -> GeoPoseRequest {
        let mut request = GeoPoseRequest::new();
        request.sensors.push(Sensor {
            sensor_type: SensorType::Camera,
            id: "cam0".to_string(),
            ..Sensor::default()
        });
        request.sensor_readings.camera_readings.push(CameraReading {
            sensor_id: "cam0".to_string(),
            image_bytes: "aGk=".to_string(),
            ..CameraReading::default()
        });
        request
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(validate_for_localization(&camera_request()).is_ok());
    }

    #[test]
    fn test_duplicate_sensor_id_is_rejected() {
        let mut request = camera_request();
        request.sensors.push(Sensor {
            sensor_type: SensorType::Wifi,
            id: "cam0".to_string(),
            ..Sensor::default()
        });
        assert_eq!(
            validate_request(&request),
            Err(ValidationError::DuplicateSensorId { id: "cam0".to_string() })
        );
    }

    #[test]
    fn test_dangling_reference_is_rejected() {
        let mut request = camera_request();
        request.sensor_readings.wifi_readings.push(WiFiReading {
            sensor_id: "wifi9".to_string(),
            ..WiFiReading::default()
        });
        assert_eq!(
            validate_request(&request),
            Err(ValidationError::DanglingSensorReference { sensor_id: "wifi9".to_string() })
        );
    }

    #[test]
    fn test_missing_camera_reading_is_rejected() {
        let mut request = camera_request();
        request.sensor_readings.camera_readings.clear();
        assert_eq!(
            validate_for_localization(&request),
            Err(ValidationError::NoCameraReading)
        );
    }

    #[test]
    fn test_empty_image_is_rejected() {
        let mut request = camera_request();
        request.sensor_readings.camera_readings[0].image_bytes.clear();
        assert_eq!(
            validate_for_localization(&request),
            Err(ValidationError::EmptyImage { sensor_id: "cam0".to_string() })
        );
    }

    #[test]
    fn test_structural_check_does_not_require_camera() {
        let mut request = camera_request();
        request.sensor_readings.camera_readings.clear();
        assert!(validate_request(&request).is_ok());
    }
}
