use crate::FingerprintErrorKind;

/// Why a fingerprinting pass failed, and where.
///
/// The position is a byte offset into the input that was handed to the
/// entry point: [`UnexpectedToken`](FingerprintErrorKind::UnexpectedToken)
/// errors point at the offending byte, and
/// [`UnexpectedEndOfInput`](FingerprintErrorKind::UnexpectedEndOfInput)
/// errors point at the end of the input, where more bytes were needed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{kind} at byte {position}")]
pub struct FingerprintError {
    kind: FingerprintErrorKind,
    position: usize,
}

impl FingerprintError {
    pub(crate) fn unexpected_end(position: usize) -> Self {
        Self {
            kind: FingerprintErrorKind::UnexpectedEndOfInput,
            position,
        }
    }

    pub(crate) fn unexpected_token(position: usize) -> Self {
        Self {
            kind: FingerprintErrorKind::UnexpectedToken,
            position,
        }
    }

    /// Shifts the position by `base` bytes. Used when a production was
    /// scanned from a sub-slice of the full input.
    pub(crate) fn offset_by(mut self, base: usize) -> Self {
        self.position += base;
        self
    }

    pub fn kind(&self) -> FingerprintErrorKind {
        self.kind
    }

    /// Byte offset of the failure within the scanned input.
    pub fn position(&self) -> usize {
        self.position
    }
}
