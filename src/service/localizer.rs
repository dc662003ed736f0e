//! Response assembly around an injected localization capability
//!
//! The actual visual-positioning algorithm lives outside this crate. It is
//! modeled as the [`PoseEstimator`] trait: a function from a camera reading
//! plus an optional geolocation hint to a pose and accuracy. The response
//! assembly here validates the request, invokes the estimator and wraps its
//! output in a [`GeoPoseResponse`] echoing the request id.

use std::fmt;

use crate::core::{GeoPose, GeoPoseAccuracy};
use crate::protocol::types::{CameraReading, GeoPoseRequest, GeoPoseResponse, GeolocationReading};
use crate::utils::config::ServiceConfig;
use crate::validation::data::{validate_for_localization, ValidationError};

/// Pose and accuracy produced by a localization backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseEstimate {
    pub geopose: GeoPose,
    pub accuracy: GeoPoseAccuracy,
}

/// Backend failure to produce a pose.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimationError {
    pub details: String,
}

impl fmt::Display for EstimationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pose estimation failed: {}", self.details)
    }
}

impl std::error::Error for EstimationError {}

/// The injected localization capability.
pub trait PoseEstimator {
    /// Produce a pose from a camera frame, optionally steered by a
    /// geolocation hint.
    fn estimate(
        &self,
        camera: &CameraReading,
        hint: Option<&GeolocationReading>,
    ) -> Result<PoseEstimate, EstimationError>;
}

/// Stub estimator answering every request with a fixed, preconfigured pose.
/// Stands in where no real visual-positioning backend is deployed.
#[derive(Debug, Clone)]
pub struct FixedPoseEstimator {
    estimate: PoseEstimate,
}

impl FixedPoseEstimator {
    pub fn new(geopose: GeoPose, accuracy: GeoPoseAccuracy) -> Self {
        Self { estimate: PoseEstimate { geopose, accuracy } }
    }

    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::new(config.geopose(), config.accuracy())
    }
}

impl PoseEstimator for FixedPoseEstimator {
    fn estimate(
        &self,
        _camera: &CameraReading,
        _hint: Option<&GeolocationReading>,
    ) -> Result<PoseEstimate, EstimationError> {
        Ok(self.estimate)
    }
}

/// Failures while answering a localization request.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceError {
    /// The request violates an integrity rule.
    InvalidRequest { error: ValidationError },
    /// The backend could not produce a pose.
    EstimationFailed { error: EstimationError },
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::InvalidRequest { error } => write!(f, "invalid request: {}", error),
            ServiceError::EstimationFailed { error } => write!(f, "{}", error),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<ValidationError> for ServiceError {
    fn from(error: ValidationError) -> Self {
        ServiceError::InvalidRequest { error }
    }
}

impl From<EstimationError> for ServiceError {
    fn from(error: EstimationError) -> Self {
        ServiceError::EstimationFailed { error }
    }
}

/// Wrap an estimate in a response echoing the request's id, stamped with
/// the current time.
pub fn build_response(request: &GeoPoseRequest, estimate: PoseEstimate) -> GeoPoseResponse {
    let mut response = GeoPoseResponse::for_request(&request.id);
    response.accuracy = estimate.accuracy;
    response.geopose = estimate.geopose;
    response
}

/// Validate a request, run the estimator on its first camera reading (with
/// the first geolocation reading as hint, when present) and assemble the
/// response.
pub fn localize(
    request: &GeoPoseRequest,
    estimator: &dyn PoseEstimator,
) -> Result<GeoPoseResponse, ServiceError> {
    validate_for_localization(request)?;
    // validate_for_localization guarantees a first camera reading.
    let camera = &request.sensor_readings.camera_readings[0];
    let hint = request.sensor_readings.geolocation_readings.first();
    let estimate = estimator.estimate(camera, hint)?;
    Ok(build_response(request, estimate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Position, Quaternion};
    use crate::protocol::types::{Sensor, SensorType};

    fn fixed_estimator() -> FixedPoseEstimator {
        FixedPoseEstimator::new(
            GeoPose {
                position: Position::new(47.609906, -122.337810, 12.0),
                quaternion: Quaternion::new(0.0, 0.0, 0.0, 1.0),
            },
            GeoPoseAccuracy { position: 1.5, orientation: 5.0 },
        )
    }

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
    fn test_localize_echoes_request_id_and_pose() {
        let request = camera_request();
        let response = localize(&request, &fixed_estimator()).unwrap();
        assert_eq!(response.id, request.id);
        assert_eq!(response.message_type, "geopose");
        assert_eq!(response.geopose.position.lat, 47.609906);
        assert_eq!(response.accuracy.position, 1.5);
        assert!(response.timestamp >= request.timestamp);
    }

    #[test]
    fn test_localize_rejects_imageless_request() {
        let mut request = camera_request();
        request.sensor_readings.camera_readings.clear();
        let err = localize(&request, &fixed_estimator()).unwrap_err();
        assert_eq!(
            err,
            ServiceError::InvalidRequest { error: ValidationError::NoCameraReading }
        );
    }

    #[test]
    fn test_estimator_failure_propagates() {
        struct FailingEstimator;
        impl PoseEstimator for FailingEstimator {
            fn estimate(
                &self,
                _camera: &CameraReading,
                _hint: Option<&GeolocationReading>,
            ) -> Result<PoseEstimate, EstimationError> {
                Err(EstimationError { details: "no features matched".to_string() })
            }
        }
        let err = localize(&camera_request(), &FailingEstimator).unwrap_err();
        assert!(matches!(err, ServiceError::EstimationFailed { .. }));
    }

    #[test]
    fn test_estimator_from_config() {
        let config = ServiceConfig::from_json(
            r#"{
                "geopose": {
                    "position": { "lat": 1.0, "lon": 2.0, "h": 3.0 },
                    "quaternion": { "x": 0.0, "y": 0.0, "z": 0.0, "w": 1.0 }
                }
            }"#,
        )
        .unwrap();
        let estimator = FixedPoseEstimator::from_config(&config);
        let response = localize(&camera_request(), &estimator).unwrap();
        assert_eq!(response.geopose.position.lon, 2.0);
        assert_eq!(response.accuracy, GeoPoseAccuracy::default());
    }
}
