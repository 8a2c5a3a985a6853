//! Error types for name analysis.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Longest accepted name segment, in characters.
pub const MAX_SEGMENT_CHARS: usize = 16;

/// Errors from the analysis entry points.
///
/// Data gaps and computation anomalies are *not* errors: they resolve to
/// documented fallbacks and surface as flags on the result. Only inputs the
/// engine refuses to interpret land here.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MeikanError {
    /// A name segment exceeds [`MAX_SEGMENT_CHARS`].
    SegmentTooLong { which: &'static str, len: usize },
}

impl Display for MeikanError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SegmentTooLong { which, len } => {
                write!(
                    f,
                    "{which} segment has {len} characters (limit {MAX_SEGMENT_CHARS})"
                )
            }
        }
    }
}

impl Error for MeikanError {}
