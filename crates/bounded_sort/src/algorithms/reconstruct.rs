//! Counting sort that keeps its frequency table inside the input itself.
//!
//! Slot `k` accumulates `len` once per element equal to `k`, so after the
//! counting pass it holds `original_k + len * count_k`. `% len` recovers the
//! original value and `/ len` the count. The sorted run is rebuilt in the
//! context's auxiliary buffer and copied back.

use num_traits::AsPrimitive;

use crate::{SortContext, SortError};

use super::common::{self, BoundedKey};

pub fn sort<T: BoundedKey>(data: &mut [T], ctx: &mut SortContext<T>) -> Result<(), SortError<T>> {
    let len = data.len();
    if len == 0 {
        return Ok(());
    }

    common::check_bounds(data)?;
    let Some(width) = common::encoding_width::<T>(len) else {
        return Err(SortError::EncodingOverflow {
            len,
            max_len: common::max_encodable_len::<T>(),
        });
    };

    for i in 0..len {
        // Slot i may already have been bumped; the remainder is still its own value.
        let slot: usize = (data[i] % width).as_();
        data[slot] = data[slot] + width;
    }

    let aux = ctx.ensure_aux(len);
    let mut out = 0usize;
    let mut value = T::zero();
    for &encoded in data.iter() {
        let freq: usize = (encoded / width).as_();
        aux[out..(out + freq)].fill(value);
        out += freq;
        value = value + T::one();
    }
    debug_assert_eq!(out, len);

    data.copy_from_slice(aux);
    Ok(())
}
