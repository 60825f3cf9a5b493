//! Circular index arithmetic.
//!
//! [`circular_index`] is the only place wrap-around is computed. Slot
//! population, prefetch ranges, explicit jumps and scroll transitions all go
//! through it.

/// Advances `current` by `delta` positions in a cyclic sequence of `count`
/// items.
///
/// Uses true modulo, so negative deltas wrap to the end of the sequence
/// (`circular_index(0, -1, 5) == Some(4)`) and deltas larger than the
/// sequence wrap as many times as needed.
///
/// Returns `None` when `count` is zero or `current` is not in
/// `0..count`. Callers keep their index in range, so `None` means the
/// content changed underneath them.
///
/// # Example
///
/// ```
/// use ringpager_core::circular_index;
///
/// assert_eq!(circular_index(2, 1, 3), Some(0));
/// assert_eq!(circular_index(0, -1, 3), Some(2));
/// assert_eq!(circular_index(3, 1, 3), None);
/// ```
pub fn circular_index(current: usize, delta: isize, count: usize) -> Option<usize> {
    if count == 0 || current >= count {
        return None;
    }
    // i128 holds any usize plus any isize without overflow.
    let wrapped = (current as i128 + delta as i128).rem_euclid(count as i128);
    Some(wrapped as usize)
}

/// Returns the signed distance that takes `from` to `to` without wrapping.
///
/// Feeding the result back into [`circular_index`] lands exactly on `to`.
pub fn index_delta(from: usize, to: usize) -> isize {
    if to >= from {
        (to - from) as isize
    } else {
        -((from - to) as isize)
    }
}
