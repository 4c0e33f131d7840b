use num_traits::{AsPrimitive, Saturating};

use crate::{SortContext, SortError};

use super::common::{self, BoundedKey};

/// Plain counting sort over `[0, len)` with the counts kept outside the input.
/// No encoding, so no length limit beyond the range check.
pub fn sort<T: BoundedKey>(data: &mut [T], ctx: &mut SortContext<T>) -> Result<(), SortError<T>> {
    let len = data.len();
    if len == 0 {
        return Ok(());
    }

    common::check_bounds(data)?;

    let counts = ctx.ensure_counts(len);
    counts.fill(0);
    for &x in data.iter() {
        let slot: usize = x.as_();
        counts[slot] += 1;
    }

    let mut out = 0usize;
    let mut value = T::zero();
    for &count in counts.iter() {
        if count > 0 {
            data[out..(out + count)].fill(value);
            out += count;
        }
        // `len` itself may not fit in T; the final increment is never written.
        value = value.saturating_add(T::one());
    }
    debug_assert_eq!(out, len);

    Ok(())
}
