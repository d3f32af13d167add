use core::fmt;

use crate::uuid::Uuid;

/// Errors surfaced by [`crate::dispatcher::Dispatcher::ingest`] and the
/// decode pipeline it drives.
///
/// An unrecognized frame fingerprint is deliberately not represented as
/// an `Err` variant here — `UnknownLayout` is swallowed by the
/// accumulator as a no-op, not surfaced to the caller, since a receiver
/// feeding this crate unmodeled message types is routine, not
/// exceptional.
#[derive(Debug, PartialEq, Eq)]
pub enum NavMsgError {
    /// The constellation, or a specific satellite/message combination
    /// within it, is out of scope for this crate (e.g. BeiDou D2 GEO
    /// satellites).
    Unsupported { reason: &'static str },
    /// The raw data-words for a frame failed a structural check before
    /// decoding was even attempted (wrong word count, even/odd or alert
    /// flags rejecting the page, missing required metadata).
    MalformedFrame { reason: &'static str },
    /// A layout names a field pairing (`_msb`/`_lsb`, or a substructure
    /// rename) that the frame itself cannot satisfy.
    MalformedLayout { reason: &'static str },
    /// A record builder found every field it needed, but the values
    /// contradict one another (e.g. mismatched `t_oe` copies).
    DecodingFailed { uuid: Uuid, reason: &'static str },
}

impl fmt::Display for NavMsgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavMsgError::Unsupported { reason } => write!(f, "unsupported: {reason}"),
            NavMsgError::MalformedFrame { reason } => write!(f, "malformed frame: {reason}"),
            NavMsgError::MalformedLayout { reason } => write!(f, "malformed layout: {reason}"),
            NavMsgError::DecodingFailed { uuid, reason } => write!(
                f,
                "decoding failed for frame {}: {reason}",
                uuid.display_tag()
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for NavMsgError {}
