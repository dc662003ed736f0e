//! JSON wire codec for the GeoPose protocol
//!
//! Bidirectional mapping between the entity graph in [`crate::protocol::types`]
//! and the canonical JSON wire form. Field names on the wire exactly mirror
//! the protocol attribute names, mixed case included (`sensorId`, `BSSID`);
//! this is a compatibility contract with the other language implementations
//! and must not change.
//!
//! Decoding tolerates absent optional fields (they take the entity default),
//! rejects absent required fields with [`CodecError::MissingField`], and
//! matches enum strings case-insensitively, rejecting unknown spellings with
//! [`CodecError::UnknownEnumValue`]. For every valid entity graph `x`,
//! `decode(encode(x)) == x` field for field.

use std::fmt;

use serde_json::{json, Map, Value};

use crate::core::{GeoPose, GeoPoseAccuracy, Position, Quaternion, Vector3};
use crate::protocol::types::{
    AccelerometerReading, BluetoothReading, CameraModel, CameraParameters, CameraReading,
    GeoPoseRequest, GeoPoseResponse, GeolocationReading, GyroscopeReading, ImageFormat,
    ImageOrientation, MagnetometerReading, Privacy, Sensor, SensorReadings, SensorType,
    WiFiReading,
};

/// Errors surfaced while decoding wire JSON into protocol entities.
#[derive(Debug, Clone, PartialEq)]
pub enum CodecError {
    /// A required field is absent.
    MissingField { entity: &'static str, field: &'static str },
    /// An enum-valued field holds a string matching no known variant.
    UnknownEnumValue { field: &'static str, value: String },
    /// A field is present but holds the wrong JSON type or shape.
    InvalidField {
        entity: &'static str,
        field: &'static str,
        expected: &'static str,
    },
    /// The payload is not well-formed JSON.
    Json { message: String },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::MissingField { entity, field } => {
                write!(f, "{}: missing required field '{}'", entity, field)
            }
            CodecError::UnknownEnumValue { field, value } => {
                write!(f, "unknown value '{}' for field '{}'", value, field)
            }
            CodecError::InvalidField { entity, field, expected } => {
                write!(f, "{}: field '{}' is not a valid {}", entity, field, expected)
            }
            CodecError::Json { message } => write!(f, "malformed JSON: {}", message),
        }
    }
}

impl std::error::Error for CodecError {}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        CodecError::Json { message: err.to_string() }
    }
}

// ---------------------------------------------------------------------------
// Decode helpers

fn as_object<'a>(value: &'a Value, entity: &'static str) -> Result<&'a Map<String, Value>, CodecError> {
    value.as_object().ok_or(CodecError::InvalidField {
        entity,
        field: ".",
        expected: "object",
    })
}

fn require<'a>(
    obj: &'a Map<String, Value>,
    entity: &'static str,
    field: &'static str,
) -> Result<&'a Value, CodecError> {
    obj.get(field).ok_or(CodecError::MissingField { entity, field })
}

fn get_f64(obj: &Map<String, Value>, entity: &'static str, field: &'static str) -> Result<f64, CodecError> {
    require(obj, entity, field)?
        .as_f64()
        .ok_or(CodecError::InvalidField { entity, field, expected: "number" })
}

fn opt_f64(
    obj: &Map<String, Value>,
    entity: &'static str,
    field: &'static str,
) -> Result<f64, CodecError> {
    match obj.get(field) {
        None => Ok(0.0),
        Some(v) => v
            .as_f64()
            .ok_or(CodecError::InvalidField { entity, field, expected: "number" }),
    }
}

fn get_u32(obj: &Map<String, Value>, entity: &'static str, field: &'static str) -> Result<u32, CodecError> {
    require(obj, entity, field)?
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or(CodecError::InvalidField { entity, field, expected: "unsigned integer" })
}

fn get_bool(obj: &Map<String, Value>, entity: &'static str, field: &'static str) -> Result<bool, CodecError> {
    require(obj, entity, field)?
        .as_bool()
        .ok_or(CodecError::InvalidField { entity, field, expected: "boolean" })
}

fn get_string(
    obj: &Map<String, Value>,
    entity: &'static str,
    field: &'static str,
) -> Result<String, CodecError> {
    require(obj, entity, field)?
        .as_str()
        .map(str::to_string)
        .ok_or(CodecError::InvalidField { entity, field, expected: "string" })
}

fn opt_string(
    obj: &Map<String, Value>,
    entity: &'static str,
    field: &'static str,
) -> Result<String, CodecError> {
    match obj.get(field) {
        None => Ok(String::new()),
        Some(v) => v
            .as_str()
            .map(str::to_string)
            .ok_or(CodecError::InvalidField { entity, field, expected: "string" }),
    }
}

fn string_array(
    value: &Value,
    entity: &'static str,
    field: &'static str,
) -> Result<Vec<String>, CodecError> {
    let items = value
        .as_array()
        .ok_or(CodecError::InvalidField { entity, field, expected: "string array" })?;
    items
        .iter()
        .map(|v| {
            v.as_str()
                .map(str::to_string)
                .ok_or(CodecError::InvalidField { entity, field, expected: "string array" })
        })
        .collect()
}

fn opt_f64_array(
    obj: &Map<String, Value>,
    entity: &'static str,
    field: &'static str,
) -> Result<Vec<f64>, CodecError> {
    match obj.get(field) {
        None => Ok(Vec::new()),
        Some(v) => {
            let items = v
                .as_array()
                .ok_or(CodecError::InvalidField { entity, field, expected: "number array" })?;
            items
                .iter()
                .map(|n| {
                    n.as_f64()
                        .ok_or(CodecError::InvalidField { entity, field, expected: "number array" })
                })
                .collect()
        }
    }
}

fn decode_list<T>(
    obj: &Map<String, Value>,
    entity: &'static str,
    field: &'static str,
    required: bool,
    decode: impl Fn(&Value) -> Result<T, CodecError>,
) -> Result<Vec<T>, CodecError> {
    let value = match obj.get(field) {
        Some(v) => v,
        None if required => return Err(CodecError::MissingField { entity, field }),
        None => return Ok(Vec::new()),
    };
    let items = value
        .as_array()
        .ok_or(CodecError::InvalidField { entity, field, expected: "array" })?;
    items.iter().map(&decode).collect()
}

// ---------------------------------------------------------------------------
// Geometry primitives

pub fn vector3_to_value(v: &Vector3) -> Value {
    json!({ "x": v.x, "y": v.y, "z": v.z })
}

pub fn vector3_from_value(value: &Value) -> Result<Vector3, CodecError> {
    let obj = as_object(value, "Vector3")?;
    Ok(Vector3 {
        x: get_f64(obj, "Vector3", "x")?,
        y: get_f64(obj, "Vector3", "y")?,
        z: get_f64(obj, "Vector3", "z")?,
    })
}

pub fn quaternion_to_value(q: &Quaternion) -> Value {
    json!({ "x": q.x, "y": q.y, "z": q.z, "w": q.w })
}

pub fn quaternion_from_value(value: &Value) -> Result<Quaternion, CodecError> {
    let obj = as_object(value, "Quaternion")?;
    Ok(Quaternion {
        x: get_f64(obj, "Quaternion", "x")?,
        y: get_f64(obj, "Quaternion", "y")?,
        z: get_f64(obj, "Quaternion", "z")?,
        w: get_f64(obj, "Quaternion", "w")?,
    })
}

pub fn position_to_value(p: &Position) -> Value {
    json!({ "lat": p.lat, "lon": p.lon, "h": p.h })
}

pub fn position_from_value(value: &Value) -> Result<Position, CodecError> {
    let obj = as_object(value, "Position")?;
    Ok(Position {
        lat: get_f64(obj, "Position", "lat")?,
        lon: get_f64(obj, "Position", "lon")?,
        h: get_f64(obj, "Position", "h")?,
    })
}

pub fn geopose_to_value(pose: &GeoPose) -> Value {
    json!({
        "position": position_to_value(&pose.position),
        "quaternion": quaternion_to_value(&pose.quaternion),
    })
}

pub fn geopose_from_value(value: &Value) -> Result<GeoPose, CodecError> {
    let obj = as_object(value, "GeoPose")?;
    Ok(GeoPose {
        position: position_from_value(require(obj, "GeoPose", "position")?)?,
        quaternion: quaternion_from_value(require(obj, "GeoPose", "quaternion")?)?,
    })
}

pub fn accuracy_to_value(acc: &GeoPoseAccuracy) -> Value {
    json!({ "position": acc.position, "orientation": acc.orientation })
}

pub fn accuracy_from_value(value: &Value) -> Result<GeoPoseAccuracy, CodecError> {
    let obj = as_object(value, "GeoPoseAccuracy")?;
    Ok(GeoPoseAccuracy {
        position: get_f64(obj, "GeoPoseAccuracy", "position")?,
        orientation: get_f64(obj, "GeoPoseAccuracy", "orientation")?,
    })
}

// ---------------------------------------------------------------------------
// Camera metadata

pub fn image_orientation_to_value(o: &ImageOrientation) -> Value {
    json!({ "mirrored": o.mirrored, "rotation": o.rotation })
}

pub fn image_orientation_from_value(value: &Value) -> Result<ImageOrientation, CodecError> {
    let obj = as_object(value, "ImageOrientation")?;
    Ok(ImageOrientation {
        mirrored: get_bool(obj, "ImageOrientation", "mirrored")?,
        rotation: get_f64(obj, "ImageOrientation", "rotation")?,
    })
}

pub fn camera_parameters_to_value(p: &CameraParameters) -> Value {
    let mut obj = Map::new();
    if p.model != CameraModel::Unknown {
        obj.insert("model".into(), Value::String(p.model.as_wire().to_string()));
    }
    if !p.model_params.is_empty() {
        obj.insert("modelParams".into(), json!(p.model_params));
    }
    if !p.min_max_depth.is_empty() {
        obj.insert("minMaxDepth".into(), json!(p.min_max_depth));
    }
    if !p.min_max_disparity.is_empty() {
        obj.insert("minMaxDisparity".into(), json!(p.min_max_disparity));
    }
    Value::Object(obj)
}

pub fn camera_parameters_from_value(value: &Value) -> Result<CameraParameters, CodecError> {
    let obj = as_object(value, "CameraParameters")?;
    let model = match obj.get("model") {
        None => CameraModel::default(),
        Some(v) => {
            let s = v.as_str().ok_or(CodecError::InvalidField {
                entity: "CameraParameters",
                field: "model",
                expected: "string",
            })?;
            CameraModel::from_wire(s).ok_or_else(|| CodecError::UnknownEnumValue {
                field: "model",
                value: s.to_string(),
            })?
        }
    };
    Ok(CameraParameters {
        model,
        model_params: opt_f64_array(obj, "CameraParameters", "modelParams")?,
        min_max_depth: opt_f64_array(obj, "CameraParameters", "minMaxDepth")?,
        min_max_disparity: opt_f64_array(obj, "CameraParameters", "minMaxDisparity")?,
    })
}

// ---------------------------------------------------------------------------
// Privacy

pub fn privacy_to_value(p: &Privacy) -> Value {
    json!({
        "dataRetention": p.data_retention,
        "dataAcceptableUse": p.data_acceptable_use,
        "dataSanitizationApplied": p.data_sanitization_applied,
        "dataSanitizationRequested": p.data_sanitization_requested,
    })
}

pub fn privacy_from_value(value: &Value) -> Result<Privacy, CodecError> {
    let obj = as_object(value, "Privacy")?;
    Ok(Privacy {
        data_retention: string_array(
            require(obj, "Privacy", "dataRetention")?,
            "Privacy",
            "dataRetention",
        )?,
        data_acceptable_use: string_array(
            require(obj, "Privacy", "dataAcceptableUse")?,
            "Privacy",
            "dataAcceptableUse",
        )?,
        data_sanitization_applied: string_array(
            require(obj, "Privacy", "dataSanitizationApplied")?,
            "Privacy",
            "dataSanitizationApplied",
        )?,
        data_sanitization_requested: string_array(
            require(obj, "Privacy", "dataSanitizationRequested")?,
            "Privacy",
            "dataSanitizationRequested",
        )?,
    })
}

// ---------------------------------------------------------------------------
// Sensor readings

pub fn camera_reading_to_value(r: &CameraReading) -> Value {
    json!({
        "timestamp": r.timestamp,
        "sensorId": r.sensor_id,
        "privacy": privacy_to_value(&r.privacy),
        "sequenceNumber": r.sequence_number,
        "imageFormat": r.image_format.as_wire(),
        "size": r.size,
        "imageBytes": r.image_bytes,
        "imageOrientation": image_orientation_to_value(&r.image_orientation),
        "params": camera_parameters_to_value(&r.params),
    })
}

pub fn camera_reading_from_value(value: &Value) -> Result<CameraReading, CodecError> {
    const ENTITY: &str = "CameraReading";
    let obj = as_object(value, ENTITY)?;

    let format_str = get_string(obj, ENTITY, "imageFormat")?;
    let image_format = ImageFormat::from_wire(&format_str).ok_or(CodecError::UnknownEnumValue {
        field: "imageFormat",
        value: format_str,
    })?;

    let size_values = require(obj, ENTITY, "size")?
        .as_array()
        .ok_or(CodecError::InvalidField { entity: ENTITY, field: "size", expected: "array" })?;
    if size_values.len() != 2 {
        return Err(CodecError::InvalidField {
            entity: ENTITY,
            field: "size",
            expected: "[width, height] pair",
        });
    }
    let mut size = [0u32; 2];
    for (slot, v) in size.iter_mut().zip(size_values) {
        *slot = v.as_u64().and_then(|n| u32::try_from(n).ok()).ok_or(
            CodecError::InvalidField {
                entity: ENTITY,
                field: "size",
                expected: "[width, height] pair",
            },
        )?;
    }

    Ok(CameraReading {
        timestamp: get_f64(obj, ENTITY, "timestamp")?,
        sensor_id: get_string(obj, ENTITY, "sensorId")?,
        privacy: privacy_from_value(require(obj, ENTITY, "privacy")?)?,
        sequence_number: get_u32(obj, ENTITY, "sequenceNumber")?,
        image_format,
        size,
        image_bytes: get_string(obj, ENTITY, "imageBytes")?,
        image_orientation: match obj.get("imageOrientation") {
            Some(v) => image_orientation_from_value(v)?,
            None => ImageOrientation::default(),
        },
        params: match obj.get("params") {
            Some(v) => camera_parameters_from_value(v)?,
            None => CameraParameters::default(),
        },
    })
}

pub fn geolocation_reading_to_value(r: &GeolocationReading) -> Value {
    json!({
        "timestamp": r.timestamp,
        "sensorId": r.sensor_id,
        "privacy": privacy_to_value(&r.privacy),
        "latitude": r.latitude,
        "longitude": r.longitude,
        "altitude": r.altitude,
        "accuracy": r.accuracy,
        "altitudeAccuracy": r.altitude_accuracy,
        "heading": r.heading,
        "speed": r.speed,
    })
}

pub fn geolocation_reading_from_value(value: &Value) -> Result<GeolocationReading, CodecError> {
    const ENTITY: &str = "GeolocationReading";
    let obj = as_object(value, ENTITY)?;
    Ok(GeolocationReading {
        timestamp: get_f64(obj, ENTITY, "timestamp")?,
        sensor_id: get_string(obj, ENTITY, "sensorId")?,
        privacy: privacy_from_value(require(obj, ENTITY, "privacy")?)?,
        latitude: get_f64(obj, ENTITY, "latitude")?,
        longitude: get_f64(obj, ENTITY, "longitude")?,
        altitude: opt_f64(obj, ENTITY, "altitude")?,
        accuracy: opt_f64(obj, ENTITY, "accuracy")?,
        altitude_accuracy: opt_f64(obj, ENTITY, "altitudeAccuracy")?,
        heading: opt_f64(obj, ENTITY, "heading")?,
        speed: opt_f64(obj, ENTITY, "speed")?,
    })
}

pub fn wifi_reading_to_value(r: &WiFiReading) -> Value {
    json!({
        "timestamp": r.timestamp,
        "sensorId": r.sensor_id,
        "privacy": privacy_to_value(&r.privacy),
        "BSSID": r.bssid,
        "frequency": r.frequency,
        "RSSI": r.rssi,
        "SSID": r.ssid,
        "scanTimeStart": r.scan_time_start,
        "scanTimeEnd": r.scan_time_end,
    })
}

pub fn wifi_reading_from_value(value: &Value) -> Result<WiFiReading, CodecError> {
    const ENTITY: &str = "WiFiReading";
    let obj = as_object(value, ENTITY)?;
    Ok(WiFiReading {
        timestamp: get_f64(obj, ENTITY, "timestamp")?,
        sensor_id: get_string(obj, ENTITY, "sensorId")?,
        privacy: privacy_from_value(require(obj, ENTITY, "privacy")?)?,
        bssid: get_string(obj, ENTITY, "BSSID")?,
        frequency: get_f64(obj, ENTITY, "frequency")?,
        rssi: get_f64(obj, ENTITY, "RSSI")?,
        ssid: get_string(obj, ENTITY, "SSID")?,
        scan_time_start: get_f64(obj, ENTITY, "scanTimeStart")?,
        scan_time_end: get_f64(obj, ENTITY, "scanTimeEnd")?,
    })
}

pub fn bluetooth_reading_to_value(r: &BluetoothReading) -> Value {
    json!({
        "timestamp": r.timestamp,
        "sensorId": r.sensor_id,
        "privacy": privacy_to_value(&r.privacy),
        "address": r.address,
        "RSSI": r.rssi,
        "name": r.name,
    })
}

pub fn bluetooth_reading_from_value(value: &Value) -> Result<BluetoothReading, CodecError> {
    const ENTITY: &str = "BluetoothReading";
    let obj = as_object(value, ENTITY)?;
    Ok(BluetoothReading {
        timestamp: get_f64(obj, ENTITY, "timestamp")?,
        sensor_id: get_string(obj, ENTITY, "sensorId")?,
        privacy: privacy_from_value(require(obj, ENTITY, "privacy")?)?,
        address: get_string(obj, ENTITY, "address")?,
        rssi: get_f64(obj, ENTITY, "RSSI")?,
        name: get_string(obj, ENTITY, "name")?,
    })
}

macro_rules! axis_reading_codec {
    ($to_fn:ident, $from_fn:ident, $ty:ident, $entity:literal) => {
        pub fn $to_fn(r: &$ty) -> Value {
            json!({
                "timestamp": r.timestamp,
                "sensorId": r.sensor_id,
                "privacy": privacy_to_value(&r.privacy),
                "x": r.x,
                "y": r.y,
                "z": r.z,
            })
        }

        pub fn $from_fn(value: &Value) -> Result<$ty, CodecError> {
            let obj = as_object(value, $entity)?;
            Ok($ty {
                timestamp: get_f64(obj, $entity, "timestamp")?,
                sensor_id: get_string(obj, $entity, "sensorId")?,
                privacy: privacy_from_value(require(obj, $entity, "privacy")?)?,
                x: get_f64(obj, $entity, "x")?,
                y: get_f64(obj, $entity, "y")?,
                z: get_f64(obj, $entity, "z")?,
            })
        }
    };
}

axis_reading_codec!(
    accelerometer_reading_to_value,
    accelerometer_reading_from_value,
    AccelerometerReading,
    "AccelerometerReading"
);
axis_reading_codec!(
    gyroscope_reading_to_value,
    gyroscope_reading_from_value,
    GyroscopeReading,
    "GyroscopeReading"
);
axis_reading_codec!(
    magnetometer_reading_to_value,
    magnetometer_reading_from_value,
    MagnetometerReading,
    "MagnetometerReading"
);

// ---------------------------------------------------------------------------
// Sensor

pub fn sensor_to_value(s: &Sensor) -> Value {
    let mut obj = Map::new();
    obj.insert("type".into(), Value::String(s.sensor_type.as_wire().to_string()));
    obj.insert("id".into(), Value::String(s.id.clone()));
    if !s.name.is_empty() {
        obj.insert("name".into(), Value::String(s.name.clone()));
    }
    if !s.model.is_empty() {
        obj.insert("model".into(), Value::String(s.model.clone()));
    }
    if !s.rig_identifier.is_empty() {
        obj.insert("rigIdentifier".into(), Value::String(s.rig_identifier.clone()));
    }
    if let Some(rotation) = &s.rig_rotation {
        obj.insert("rigRotation".into(), quaternion_to_value(rotation));
    }
    if let Some(translation) = &s.rig_translation {
        obj.insert("rigTranslation".into(), vector3_to_value(translation));
    }
    Value::Object(obj)
}

pub fn sensor_from_value(value: &Value) -> Result<Sensor, CodecError> {
    const ENTITY: &str = "Sensor";
    let obj = as_object(value, ENTITY)?;

    let type_str = get_string(obj, ENTITY, "type")?;
    let sensor_type = SensorType::from_wire(&type_str).ok_or(CodecError::UnknownEnumValue {
        field: "type",
        value: type_str,
    })?;

    Ok(Sensor {
        sensor_type,
        id: get_string(obj, ENTITY, "id")?,
        name: opt_string(obj, ENTITY, "name")?,
        model: opt_string(obj, ENTITY, "model")?,
        rig_identifier: opt_string(obj, ENTITY, "rigIdentifier")?,
        rig_rotation: obj
            .get("rigRotation")
            .map(quaternion_from_value)
            .transpose()?,
        rig_translation: obj
            .get("rigTranslation")
            .map(vector3_from_value)
            .transpose()?,
    })
}

// ---------------------------------------------------------------------------
// Reading container

pub fn sensor_readings_to_value(readings: &SensorReadings) -> Value {
    let mut obj = Map::new();
    if !readings.camera_readings.is_empty() {
        obj.insert(
            "cameraReadings".into(),
            readings.camera_readings.iter().map(camera_reading_to_value).collect(),
        );
    }
    if !readings.geolocation_readings.is_empty() {
        obj.insert(
            "geolocationReadings".into(),
            readings
                .geolocation_readings
                .iter()
                .map(geolocation_reading_to_value)
                .collect(),
        );
    }
    if !readings.wifi_readings.is_empty() {
        obj.insert(
            "wifiReadings".into(),
            readings.wifi_readings.iter().map(wifi_reading_to_value).collect(),
        );
    }
    if !readings.bluetooth_readings.is_empty() {
        obj.insert(
            "bluetoothReadings".into(),
            readings
                .bluetooth_readings
                .iter()
                .map(bluetooth_reading_to_value)
                .collect(),
        );
    }
    if !readings.accelerometer_readings.is_empty() {
        obj.insert(
            "accelerometerReadings".into(),
            readings
                .accelerometer_readings
                .iter()
                .map(accelerometer_reading_to_value)
                .collect(),
        );
    }
    if !readings.gyroscope_readings.is_empty() {
        obj.insert(
            "gyroscopeReadings".into(),
            readings
                .gyroscope_readings
                .iter()
                .map(gyroscope_reading_to_value)
                .collect(),
        );
    }
    if !readings.magnetometer_readings.is_empty() {
        obj.insert(
            "magnetometerReadings".into(),
            readings
                .magnetometer_readings
                .iter()
                .map(magnetometer_reading_to_value)
                .collect(),
        );
    }
    Value::Object(obj)
}

pub fn sensor_readings_from_value(value: &Value) -> Result<SensorReadings, CodecError> {
    const ENTITY: &str = "SensorReadings";
    let obj = as_object(value, ENTITY)?;
    Ok(SensorReadings {
        camera_readings: decode_list(obj, ENTITY, "cameraReadings", false, camera_reading_from_value)?,
        geolocation_readings: decode_list(
            obj,
            ENTITY,
            "geolocationReadings",
            false,
            geolocation_reading_from_value,
        )?,
        wifi_readings: decode_list(obj, ENTITY, "wifiReadings", false, wifi_reading_from_value)?,
        bluetooth_readings: decode_list(
            obj,
            ENTITY,
            "bluetoothReadings",
            false,
            bluetooth_reading_from_value,
        )?,
        accelerometer_readings: decode_list(
            obj,
            ENTITY,
            "accelerometerReadings",
            false,
            accelerometer_reading_from_value,
        )?,
        gyroscope_readings: decode_list(
            obj,
            ENTITY,
            "gyroscopeReadings",
            false,
            gyroscope_reading_from_value,
        )?,
        magnetometer_readings: decode_list(
            obj,
            ENTITY,
            "magnetometerReadings",
            false,
            magnetometer_reading_from_value,
        )?,
    })
}

// ---------------------------------------------------------------------------
// Top-level messages

pub fn response_to_value(response: &GeoPoseResponse) -> Value {
    json!({
        "type": response.message_type,
        "id": response.id,
        "timestamp": response.timestamp,
        "accuracy": accuracy_to_value(&response.accuracy),
        "geopose": geopose_to_value(&response.geopose),
    })
}

pub fn response_from_value(value: &Value) -> Result<GeoPoseResponse, CodecError> {
    const ENTITY: &str = "GeoPoseResponse";
    let obj = as_object(value, ENTITY)?;
    Ok(GeoPoseResponse {
        message_type: get_string(obj, ENTITY, "type")?,
        id: get_string(obj, ENTITY, "id")?,
        timestamp: get_f64(obj, ENTITY, "timestamp")?,
        accuracy: accuracy_from_value(require(obj, ENTITY, "accuracy")?)?,
        geopose: geopose_from_value(require(obj, ENTITY, "geopose")?)?,
    })
}

pub fn request_to_value(request: &GeoPoseRequest) -> Value {
    let mut obj = Map::new();
    obj.insert("type".into(), Value::String(request.message_type.clone()));
    obj.insert("id".into(), Value::String(request.id.clone()));
    obj.insert("timestamp".into(), json!(request.timestamp));
    obj.insert(
        "sensors".into(),
        request.sensors.iter().map(sensor_to_value).collect(),
    );
    obj.insert(
        "sensorReadings".into(),
        sensor_readings_to_value(&request.sensor_readings),
    );
    if !request.prior_poses.is_empty() {
        obj.insert(
            "priorPoses".into(),
            request.prior_poses.iter().map(response_to_value).collect(),
        );
    }
    Value::Object(obj)
}

pub fn request_from_value(value: &Value) -> Result<GeoPoseRequest, CodecError> {
    const ENTITY: &str = "GeoPoseRequest";
    let obj = as_object(value, ENTITY)?;
    Ok(GeoPoseRequest {
        message_type: get_string(obj, ENTITY, "type")?,
        id: get_string(obj, ENTITY, "id")?,
        timestamp: get_f64(obj, ENTITY, "timestamp")?,
        sensors: decode_list(obj, ENTITY, "sensors", true, sensor_from_value)?,
        sensor_readings: sensor_readings_from_value(require(obj, ENTITY, "sensorReadings")?)?,
        prior_poses: decode_list(obj, ENTITY, "priorPoses", false, response_from_value)?,
    })
}

/// Serialize a request to its JSON wire text.
pub fn encode_request(request: &GeoPoseRequest) -> String {
    request_to_value(request).to_string()
}

/// Parse JSON wire text into a request.
pub fn decode_request(text: &str) -> Result<GeoPoseRequest, CodecError> {
    let value: Value = serde_json::from_str(text)?;
    request_from_value(&value)
}

/// Serialize a response to its JSON wire text.
pub fn encode_response(response: &GeoPoseResponse) -> String {
    response_to_value(response).to_string()
}

/// Parse JSON wire text into a response.
pub fn decode_response(text: &str) -> Result<GeoPoseResponse, CodecError> {
    let value: Value = serde_json::from_str(text)?;
    response_from_value(&value)
}
