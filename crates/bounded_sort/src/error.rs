use thiserror::Error;

/// Reasons a bounded-range sort refuses its input.
///
/// Both variants are raised by the precondition checks, before the slice is
/// touched, so a failed call always leaves the input unchanged.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum SortError<T> {
    #[error("value {value} at index {index} is outside the valid range [0, {len})")]
    OutOfRange { index: usize, value: T, len: usize },

    /// The in-place encoding stores `value + len * count` in the element type,
    /// which needs room for `len * len + len`.
    #[error(
        "length {len} cannot be encoded in place by this element type (largest encodable length is {max_len})"
    )]
    EncodingOverflow { len: usize, max_len: usize },
}

#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("unknown algorithm `{0}` (expected `reconstruct` or `counting_buffer`)")]
pub struct ParseAlgorithmError(pub String);
