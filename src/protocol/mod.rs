//! GeoPose protocol data model, wire codec and content negotiation

pub mod codec;
pub mod negotiation;
pub mod types;

pub use codec::{
    decode_request, decode_response, encode_request, encode_response, CodecError,
};
pub use negotiation::{verify_accept_header, NegotiationError, ProtocolVersion};
pub use types::*;
