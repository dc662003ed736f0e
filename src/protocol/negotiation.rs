//! Accept-header version gate
//!
//! A POST to the localization resource must carry an Accept header naming
//! the vendor media type and a protocol version this server speaks, e.g.
//! `application/vnd.oscp+json;version=2.0`. Verification is a linear gate:
//! media-type check, version extraction, version comparison, terminal on
//! the first failure. There is no fallback negotiation.

use std::fmt;

use crate::core::constants::{GPP_MEDIA_TYPE, SUPPORTED_VERSION_MAJOR, SUPPORTED_VERSION_MINOR};

/// A parsed `version=<major>[.<minor>]` header parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtocolVersion {
    pub major: u32,
    pub minor: u32,
}

impl ProtocolVersion {
    /// The single version this implementation accepts.
    pub fn supported() -> Self {
        Self {
            major: SUPPORTED_VERSION_MAJOR,
            minor: SUPPORTED_VERSION_MINOR,
        }
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Rejections produced by [`verify_accept_header`].
///
/// `MalformedHeader` and `UnsupportedVersion` are distinct so a client can
/// tell a hopeless request from one it could retry with an older protocol
/// version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NegotiationError {
    /// Header absent, wrong media type, or unparsable version parameter.
    MalformedHeader { details: String },
    /// Header parsed but names a version this server does not speak.
    UnsupportedVersion { requested: ProtocolVersion },
}

impl fmt::Display for NegotiationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NegotiationError::MalformedHeader { details } => {
                write!(f, "malformed Accept header: {}", details)
            }
            NegotiationError::UnsupportedVersion { requested } => {
                write!(
                    f,
                    "unsupported protocol version {} (this server supports {})",
                    requested,
                    ProtocolVersion::supported()
                )
            }
        }
    }
}

impl std::error::Error for NegotiationError {}

/// Verify the Accept header value of an incoming localization request.
///
/// Returns the negotiated version on success. A missing minor component
/// (`version=2`) is treated as minor 0.
pub fn verify_accept_header(header: &str) -> Result<ProtocolVersion, NegotiationError> {
    if !header.contains(GPP_MEDIA_TYPE) {
        return Err(NegotiationError::MalformedHeader {
            details: format!("expected media type {}", GPP_MEDIA_TYPE),
        });
    }

    let version = extract_version(header)?;

    if version != ProtocolVersion::supported() {
        return Err(NegotiationError::UnsupportedVersion { requested: version });
    }
    Ok(version)
}

fn extract_version(header: &str) -> Result<ProtocolVersion, NegotiationError> {
    let start = header.find("version=").ok_or_else(|| NegotiationError::MalformedHeader {
        details: "expected a version= parameter".to_string(),
    })?;
    let value = &header[start + "version=".len()..];
    // The version parameter runs to the next parameter separator or the end.
    let value = value
        .split(|c: char| c == ';' || c == ',' || c.is_whitespace())
        .next()
        .unwrap_or("");

    let (major_str, minor_str) = match value.split_once('.') {
        Some((major, minor)) => (major, Some(minor)),
        None => (value, None),
    };

    let major = parse_component(major_str)?;
    let minor = match minor_str {
        Some(s) => parse_component(s)?,
        None => 0,
    };
    Ok(ProtocolVersion { major, minor })
}

fn parse_component(s: &str) -> Result<u32, NegotiationError> {
    s.parse().map_err(|_| NegotiationError::MalformedHeader {
        details: format!("non-integer version component '{}'", s),
    })
}
