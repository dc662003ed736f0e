//! Service configuration
//!
//! A localization server without a real visual-positioning backend answers
//! with a fixed pose read from a JSON config file. The file shape matches
//! the demo deployments:
//!
//! ```json
//! {
//!     "geopose": {
//!         "position": { "lat": 47.609906, "lon": -122.337810, "h": 12.0 },
//!         "quaternion": { "x": 0.0, "y": 0.0, "z": 0.0, "w": 1.0 }
//!     },
//!     "accuracy": { "position": 1.5, "orientation": 5.0 }
//! }
//! ```

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{GeoPose, GeoPoseAccuracy, Position, Quaternion};

/// Configuration file errors.
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// Configuration file I/O error
    IoError { message: String },
    /// JSON deserialization error
    SerializationError { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError { message } => write!(f, "config I/O error: {}", message),
            ConfigError::SerializationError { message } => {
                write!(f, "config parse error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionConfig {
    pub lat: f64,
    pub lon: f64,
    pub h: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuaternionConfig {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoPoseConfig {
    pub position: PositionConfig,
    pub quaternion: QuaternionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccuracyConfig {
    pub position: f64,
    pub orientation: f64,
}

/// Stub-localizer service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub geopose: GeoPoseConfig,
    /// Absent means unknown accuracy (the protocol's sentinel default).
    #[serde(default)]
    pub accuracy: Option<AccuracyConfig>,
}

impl ServiceConfig {
    /// Load from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError { message: e.to_string() })?;
        Self::from_json(&text)
    }

    /// Parse from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text)
            .map_err(|e| ConfigError::SerializationError { message: e.to_string() })
    }

    /// The configured pose as a protocol value.
    pub fn geopose(&self) -> GeoPose {
        GeoPose {
            position: Position::new(
                self.geopose.position.lat,
                self.geopose.position.lon,
                self.geopose.position.h,
            ),
            quaternion: Quaternion::new(
                self.geopose.quaternion.x,
                self.geopose.quaternion.y,
                self.geopose.quaternion.z,
                self.geopose.quaternion.w,
            ),
        }
    }

    /// The configured accuracy, or the unknown sentinel when absent.
    pub fn accuracy(&self) -> GeoPoseAccuracy {
        match &self.accuracy {
            Some(acc) => GeoPoseAccuracy { position: acc.position, orientation: acc.orientation },
            None => GeoPoseAccuracy::default(),
        }
    }
}
