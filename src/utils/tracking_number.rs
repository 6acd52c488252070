//! Tracking number parsing and validation.

use regex::Regex;
use std::sync::LazyLock;

/// Compiled pattern for MAX Logistics tracking numbers: `MAX` + 9 digits.
static TRACKING_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^MAX\d{9}$").unwrap());

/// Raw input did not match the tracking number format.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid tracking number format. Please use format: MAX followed by 9 digits")]
pub struct InvalidTrackingNumber;

/// A validated, normalized tracking number.
///
/// Construction goes through [`TrackingNumber::parse`], so holding a value of
/// this type guarantees the `MAX` + 9 digits format. Handlers validate raw
/// input once and pass the typed identifier down to the service layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrackingNumber(String);

impl TrackingNumber {
    /// Parses raw user input into a tracking number.
    ///
    /// Input is trimmed and upper-cased before matching, so `" max123456789 "`
    /// normalizes to `MAX123456789`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTrackingNumber`] for empty, malformed, or
    /// wrong-length input.
    pub fn parse(raw: &str) -> Result<Self, InvalidTrackingNumber> {
        let normalized = raw.trim().to_ascii_uppercase();

        if TRACKING_NUMBER_REGEX.is_match(&normalized) {
            Ok(Self(normalized))
        } else {
            Err(InvalidTrackingNumber)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for TrackingNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
