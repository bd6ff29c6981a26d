use std::{cmp::Ordering, ops};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum RangeError {
    #[error("attempted to search from after maximum usize")]
    StartOverflow,
    #[error("attempted to search up to maximum usize")]
    EndOverflow,
    #[error("search range starts at {start} but ends at {end}")]
    StartAfterEnd { start: usize, end: usize },
    #[error("search range end {end} out of range for slice of length {len}")]
    EndOutOfBounds { end: usize, len: usize },
}

/// Resolves `range` against a slice of length `len`.
pub fn resolve_range<R>(range: R, len: usize) -> Result<ops::Range<usize>, RangeError>
where
    R: ops::RangeBounds<usize>,
{
    let start = match range.start_bound() {
        ops::Bound::Included(&start) => start,
        ops::Bound::Excluded(start) => start.checked_add(1).ok_or(RangeError::StartOverflow)?,
        ops::Bound::Unbounded => 0,
    };

    let end = match range.end_bound() {
        ops::Bound::Included(end) => end.checked_add(1).ok_or(RangeError::EndOverflow)?,
        ops::Bound::Excluded(&end) => end,
        ops::Bound::Unbounded => len,
    };

    if start > end {
        return Err(RangeError::StartAfterEnd { start, end });
    }
    if end > len {
        return Err(RangeError::EndOutOfBounds { end, len });
    }

    Ok(ops::Range { start, end })
}

/// Finds `value` in `items`, which must be sorted ascending.
///
/// With duplicates, any one of the matching positions may be returned.
#[inline]
pub fn binary_search<T: Ord>(items: &[T], value: &T) -> Option<usize> {
    binary_search_by(items, |probe| probe.cmp(value))
}

/// `compare` reports how a probed element orders relative to the target.
pub fn binary_search_by<T, F>(items: &[T], mut compare: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    search_range(items, 0..items.len(), &mut compare)
}

/// Searches only `items[range]`; the returned index is still relative to the whole slice.
pub fn binary_search_in<T, R>(items: &[T], value: &T, range: R) -> Result<Option<usize>, RangeError>
where
    T: Ord,
    R: ops::RangeBounds<usize>,
{
    let range = resolve_range(range, items.len())?;
    Ok(search_range(items, range, &mut |probe: &T| probe.cmp(value)))
}

fn search_range<T, F>(items: &[T], range: ops::Range<usize>, compare: &mut F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    if range.is_empty() {
        return None;
    }
    let middle = range.start + (range.end - range.start) / 2;
    match compare(&items[middle]) {
        Ordering::Equal => Some(middle),
        Ordering::Greater => search_range(items, range.start..middle, compare),
        Ordering::Less => search_range(items, middle + 1..range.end, compare),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn t_found() {
        let items = [0, 1, 2, 3, 4, 5];
        assert_eq!(binary_search(&items, &3), Some(3));
        for (index, value) in items.iter().enumerate() {
            assert_eq!(binary_search(&items, value), Some(index));
        }
    }

    #[test]
    fn t_not_found() {
        let items = [0, 1, 2, 3, 4, 5];
        assert_eq!(binary_search(&items, &10), None);
        assert_eq!(binary_search(&items, &-1), None);
        assert_eq!(binary_search(&[1, 3, 5], &4), None);
        assert_eq!(binary_search::<i32>(&[], &0), None);
    }

    #[test]
    fn t_by_key() {
        let people = [("ann", 21), ("bob", 35), ("cy", 40)];
        assert_eq!(binary_search_by(&people, |probe| probe.1.cmp(&35)), Some(1));
        assert_eq!(binary_search_by(&people, |probe| probe.1.cmp(&36)), None);
    }

    #[test]
    fn t_in_range() {
        let items = [0, 1, 2, 3, 4, 5];
        assert_eq!(binary_search_in(&items, &4, 2..), Ok(Some(4)));
        assert_eq!(binary_search_in(&items, &1, 2..), Ok(None));
        assert_eq!(binary_search_in(&items, &5, ..=5), Ok(Some(5)));
        assert_eq!(binary_search_in(&items, &3, 3..3), Ok(None));
        assert_eq!(
            binary_search_in(&items, &3, (ops::Bound::Included(4), ops::Bound::Excluded(2))),
            Err(RangeError::StartAfterEnd { start: 4, end: 2 })
        );
        assert_eq!(
            binary_search_in(&items, &3, ..7),
            Err(RangeError::EndOutOfBounds { end: 7, len: 6 })
        );
        assert_eq!(
            binary_search_in(&items, &3, ..=usize::MAX),
            Err(RangeError::EndOverflow)
        );
    }

    #[test]
    fn t_range_error_message() {
        let err = resolve_range(1..9, 4).unwrap_err();
        assert_eq!(
            err.to_string(),
            "search range end 9 out of range for slice of length 4"
        );
    }

    proptest! {
        #[test]
        fn p_agrees_with_contains(mut items in prop::collection::vec(-100i32..100, 0..50), value in -100i32..100) {
            items.sort();
            items.dedup();
            match binary_search(&items, &value) {
                Some(index) => {
                    prop_assert_eq!(items[index], value);
                }
                None => {
                    prop_assert!(!items.contains(&value));
                }
            }
        }
    }
}
