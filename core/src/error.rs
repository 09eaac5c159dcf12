//! Errors raised by view construction and indexed access.
//!
//! Contract violations that are visible from types alone (unequal record
//! arities, a forward-only source passed to `reversed`, a non-integral range)
//! never reach this type: they fail to compile. What remains are the
//! violations that depend on runtime values.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `range_step` was called with a step of zero.
    #[error("invalid argument: step is zero")]
    ZeroStep,

    /// Indexed access past the logical end of a bounded view.
    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: usize, len: usize },
}

impl Error {
    /// True for the invalid-argument class of errors.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::ZeroStep)
    }

    /// True for the out-of-range class of errors.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Error::OutOfRange { .. })
    }
}

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Error::ZeroStep.to_string(), "invalid argument: step is zero");
        assert_eq!(
            Error::OutOfRange { index: 12, len: 1 }.to_string(),
            "index 12 out of range for length 1"
        );
    }

    #[test]
    fn test_classes() {
        assert!(Error::ZeroStep.is_invalid_argument());
        assert!(!Error::ZeroStep.is_out_of_range());
        assert!(Error::OutOfRange { index: 0, len: 0 }.is_out_of_range());
    }
}
