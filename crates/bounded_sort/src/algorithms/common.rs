use std::fmt;

use num_traits::{AsPrimitive, NumCast, PrimInt, ToPrimitive};

use crate::SortError;

/// Element types accepted by the bounded-range sorts: every primitive integer.
pub trait BoundedKey: PrimInt + AsPrimitive<usize> + fmt::Debug + fmt::Display {}

impl<T> BoundedKey for T where T: PrimInt + AsPrimitive<usize> + fmt::Debug + fmt::Display {}

/// Scans `data` and reports the first element outside `[0, data.len())`.
pub fn check_bounds<T: BoundedKey>(data: &[T]) -> Result<(), SortError<T>> {
    let len = data.len();
    for (index, &value) in data.iter().enumerate() {
        match value.to_usize() {
            Some(slot) if slot < len => {}
            _ => return Err(SortError::OutOfRange { index, value, len }),
        }
    }
    Ok(())
}

/// `len` as a `T`, provided the largest encoded value `len * len + len`
/// still fits in `T`.
#[inline]
pub(crate) fn encoding_width<T: BoundedKey>(len: usize) -> Option<T> {
    let width = <T as NumCast>::from(len)?;
    width.checked_mul(&width)?.checked_add(&width)?;
    Some(width)
}

/// Largest slice length `T` can sort with the in-place encoding.
pub fn max_encodable_len<T: BoundedKey>() -> usize {
    let max = T::max_value().to_u128().unwrap_or(u128::MAX);
    let mut n = max.isqrt();
    while n.checked_mul(n + 1).is_none_or(|encoded| encoded > max) {
        n -= 1;
    }
    usize::try_from(n).unwrap_or(usize::MAX)
}

#[inline]
pub fn is_sorted_non_decreasing<T: Ord>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_bounds_accepts_full_range() {
        assert_eq!(check_bounds::<u32>(&[]), Ok(()));
        assert_eq!(check_bounds(&[0_u32]), Ok(()));
        assert_eq!(check_bounds(&[4_u64, 3, 2, 1, 0]), Ok(()));
        assert_eq!(check_bounds(&[2_i32, 2, 2]), Ok(()));
    }

    #[test]
    fn check_bounds_reports_first_offender() {
        assert_eq!(
            check_bounds(&[3_u32, 1, 0]),
            Err(SortError::OutOfRange {
                index: 0,
                value: 3,
                len: 3
            })
        );
        assert_eq!(
            check_bounds(&[0_i64, -1, 9]),
            Err(SortError::OutOfRange {
                index: 1,
                value: -1,
                len: 3
            })
        );
        assert_eq!(
            check_bounds(&[1_u8]),
            Err(SortError::OutOfRange {
                index: 0,
                value: 1,
                len: 1
            })
        );
    }

    #[test]
    fn encoding_width_limits() {
        assert_eq!(encoding_width::<u8>(15), Some(15));
        assert_eq!(encoding_width::<u8>(16), None);
        assert_eq!(encoding_width::<u8>(300), None);
        assert_eq!(encoding_width::<i8>(10), Some(10));
        assert_eq!(encoding_width::<i8>(11), None);
        assert_eq!(encoding_width::<u32>(65_535), Some(65_535));
        assert_eq!(encoding_width::<u32>(65_536), None);
        assert_eq!(encoding_width::<u64>(1 << 20), Some(1 << 20));
    }

    #[test]
    fn max_encodable_len_per_type() {
        assert_eq!(max_encodable_len::<u8>(), 15);
        assert_eq!(max_encodable_len::<i8>(), 10);
        assert_eq!(max_encodable_len::<u16>(), 255);
        assert_eq!(max_encodable_len::<i16>(), 180);
        assert_eq!(max_encodable_len::<u32>(), 65_535);
        assert_eq!(max_encodable_len::<i32>(), 46_340);
        assert_eq!(max_encodable_len::<u64>(), 4_294_967_295);
    }

    #[test]
    fn max_encodable_len_agrees_with_encoding_width() {
        fn agrees<T: BoundedKey>() {
            let max = max_encodable_len::<T>();
            assert!(encoding_width::<T>(max).is_some());
            assert!(encoding_width::<T>(max + 1).is_none());
        }
        agrees::<u8>();
        agrees::<i8>();
        agrees::<u16>();
        agrees::<i16>();
        agrees::<u32>();
        agrees::<i32>();
    }

    #[test]
    fn sortedness_check() {
        assert!(is_sorted_non_decreasing::<u64>(&[]));
        assert!(is_sorted_non_decreasing(&[1]));
        assert!(is_sorted_non_decreasing(&[0, 0, 1, 1, 2]));
        assert!(!is_sorted_non_decreasing(&[1, 0]));
        assert!(!is_sorted_non_decreasing(&[0, 2, 1]));
    }
}
