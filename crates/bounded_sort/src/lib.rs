//! Counting sorts for slices whose values all lie in `[0, len)`.
//!
//! [`reconstruct_sort`] keeps the frequency table inside the input by adding
//! multiples of `len` to each slot, then rebuilds the sorted run through an
//! auxiliary buffer. [`counting_sort_bounded`] is the same contract with a
//! separate counts buffer, for lengths the element type cannot encode.

mod algorithms;
mod error;

use std::str::FromStr;

use tracing::{debug, trace};

pub use algorithms::common::{
    BoundedKey, check_bounds, is_sorted_non_decreasing, max_encodable_len,
};
pub use error::{ParseAlgorithmError, SortError};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum BoundedAlgorithm {
    Reconstruct,
    CountingBuffer,
}

pub const ALL_ALGORITHMS: [BoundedAlgorithm; 2] =
    [BoundedAlgorithm::Reconstruct, BoundedAlgorithm::CountingBuffer];

pub fn all_algorithms() -> &'static [BoundedAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: BoundedAlgorithm) -> &'static str {
    match algo {
        BoundedAlgorithm::Reconstruct => "reconstruct",
        BoundedAlgorithm::CountingBuffer => "counting_buffer",
    }
}

impl FromStr for BoundedAlgorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        all_algorithms()
            .iter()
            .copied()
            .find(|&algo| algorithm_name(algo) == s)
            .ok_or_else(|| ParseAlgorithmError(s.to_owned()))
    }
}

/// Scratch space reused across calls. A fresh context per call gives the
/// allocate-then-drop behaviour of the plain entry points.
#[derive(Clone, Debug)]
pub struct SortContext<T> {
    pub aux: Vec<T>,
    pub counts: Vec<usize>,
}

impl<T> Default for SortContext<T> {
    fn default() -> Self {
        Self {
            aux: Vec::new(),
            counts: Vec::new(),
        }
    }
}

impl<T: BoundedKey> SortContext<T> {
    /// Zeroed auxiliary buffer of exactly `len` elements.
    #[inline]
    pub(crate) fn ensure_aux(&mut self, len: usize) -> &mut [T] {
        if self.aux.len() < len {
            self.aux.resize(len, T::zero());
        }
        let aux = &mut self.aux[..len];
        aux.fill(T::zero());
        aux
    }

    #[inline]
    pub(crate) fn ensure_counts(&mut self, len: usize) -> &mut [usize] {
        if self.counts.len() < len {
            self.counts.resize(len, 0);
        }
        &mut self.counts[..len]
    }
}

/// Sorts `data` in place, using `data` itself as the frequency table.
///
/// Every element must lie in `[0, data.len())`, and `data.len()` must not
/// exceed [`max_encodable_len::<T>()`](max_encodable_len). Either violation is
/// reported before any element is modified. Returns `data` for chaining.
///
/// ```
/// let mut v = vec![2_u32, 1, 0];
/// assert_eq!(bounded_sort::reconstruct_sort(&mut v).unwrap(), &[0, 1, 2]);
/// ```
pub fn reconstruct_sort<T: BoundedKey>(data: &mut [T]) -> Result<&mut [T], SortError<T>> {
    sort_bounded(BoundedAlgorithm::Reconstruct, data)
}

pub fn reconstruct_sort_with_ctx<'a, T: BoundedKey>(
    data: &'a mut [T],
    ctx: &mut SortContext<T>,
) -> Result<&'a mut [T], SortError<T>> {
    sort_bounded_with_ctx(BoundedAlgorithm::Reconstruct, data, ctx)
}

/// Same contract as [`reconstruct_sort`] without the encoding length limit.
pub fn counting_sort_bounded<T: BoundedKey>(data: &mut [T]) -> Result<&mut [T], SortError<T>> {
    sort_bounded(BoundedAlgorithm::CountingBuffer, data)
}

pub fn counting_sort_bounded_with_ctx<'a, T: BoundedKey>(
    data: &'a mut [T],
    ctx: &mut SortContext<T>,
) -> Result<&'a mut [T], SortError<T>> {
    sort_bounded_with_ctx(BoundedAlgorithm::CountingBuffer, data, ctx)
}

pub fn sort_bounded<T: BoundedKey>(
    algo: BoundedAlgorithm,
    data: &mut [T],
) -> Result<&mut [T], SortError<T>> {
    let mut ctx = SortContext::default();
    sort_bounded_with_ctx(algo, data, &mut ctx)
}

pub fn sort_bounded_with_ctx<'a, T: BoundedKey>(
    algo: BoundedAlgorithm,
    data: &'a mut [T],
    ctx: &mut SortContext<T>,
) -> Result<&'a mut [T], SortError<T>> {
    let result = match algo {
        BoundedAlgorithm::Reconstruct => algorithms::reconstruct::sort(data, ctx),
        BoundedAlgorithm::CountingBuffer => algorithms::counting_buffer::sort(data, ctx),
    };

    match result {
        Ok(()) => {
            trace!(algorithm = algorithm_name(algo), len = data.len(), "sorted");
            Ok(data)
        }
        Err(err) => {
            debug!(algorithm = algorithm_name(algo), %err, "rejected input");
            Err(err)
        }
    }
}
