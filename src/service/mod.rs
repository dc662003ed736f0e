//! Localization response assembly

pub mod localizer;

pub use localizer::{
    build_response, localize, EstimationError, FixedPoseEstimator, PoseEstimate, PoseEstimator,
    ServiceError,
};
