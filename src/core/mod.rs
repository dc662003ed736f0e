//! Core types and constants for the GeoPose protocol

pub mod constants;
pub mod types;

pub use constants::*;
pub use types::*;
