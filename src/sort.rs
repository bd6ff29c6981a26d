//! Textbook comparison sorts.
//!
//! Every function has a `_by` form taking a comparator, mirroring `slice::sort_by`.

use std::cmp::Ordering;

#[inline]
pub fn selection_sort<T: Ord>(items: &mut [T]) {
    selection_sort_by(items, T::cmp);
}

/// In-place selection sort. Not stable.
///
/// The minimum of each suffix is the first one found scanning left to right; a later
/// element only replaces it when it compares strictly less.
pub fn selection_sort_by<T, F>(items: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = items.len();
    if len < 2 {
        return;
    }
    for current in 0..len - 1 {
        let mut lowest = current;
        for other in current + 1..len {
            if compare(&items[other], &items[lowest]) == Ordering::Less {
                lowest = other;
            }
        }
        if lowest != current {
            items.swap(lowest, current);
        }
    }
}

#[inline]
pub fn insertion_sort<T: Ord>(items: &mut [T]) {
    insertion_sort_by(items, T::cmp);
}

/// In-place, stable insertion sort.
///
/// Each element is swapped leftwards while it is strictly less than its left neighbour.
pub fn insertion_sort_by<T, F>(items: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for current in 1..items.len() {
        let mut shifting = current;
        while shifting > 0 && compare(&items[shifting], &items[shifting - 1]) == Ordering::Less {
            items.swap(shifting, shifting - 1);
            shifting -= 1;
        }
    }
}

#[inline]
pub fn merge_sort<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    merge_sort_by(items, T::cmp)
}

/// Stable top-down merge sort returning a new `Vec`; `items` is left untouched.
pub fn merge_sort_by<T, F>(items: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort_inner(items, &mut compare)
}

fn merge_sort_inner<T, F>(items: &[T], compare: &mut F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items.to_vec();
    }
    let (left, right) = items.split_at(items.len() / 2);
    let left = merge_sort_inner(left, compare);
    let right = merge_sort_inner(right, compare);
    merge(left, right, compare)
}

fn merge<T, F>(left: Vec<T>, right: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    // Ties go to `left` so equal elements keep their input order.
    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(r, l) == Ordering::Less,
            _ => break,
        };
        let next = if take_right { right.next() } else { left.next() };
        merged.extend(next);
    }
    merged.extend(left);
    merged.extend(right);
    merged
}
