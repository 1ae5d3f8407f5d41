use derive_more::{Display, Error};

use crate::util::result::ResultExtension;

/// The widest range of values (largest minus smallest, plus one) that
/// [`counting_sort`] will allocate counters for.
pub const MAX_COUNTING_RANGE: usize = 1 << 20;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("Values span a range of {range}, more than the maximum of {}!", MAX_COUNTING_RANGE)]
pub struct RangeTooWideError {
    pub range: u64,
}

/// Sorts `values` in ascending order by counting how often each value occurs, then writing
/// them back in order.
///
/// # Panics
/// Panics if the values span a range wider than [`MAX_COUNTING_RANGE`].
///
/// # Examples
/// ```
/// # use ganylib::sort::counting_sort;
/// let mut values = [3, -1, 2, 3, 0, -1];
/// counting_sort(&mut values);
/// assert_eq!(values, [-1, -1, 0, 2, 3, 3]);
/// ```
pub fn counting_sort(values: &mut [i32]) {
    try_counting_sort(values).throw()
}

/// Sorts `values` like [`counting_sort`], checking the range of values first.
///
/// # Errors
/// Returns [`RangeTooWideError`] if the values span a range wider than
/// [`MAX_COUNTING_RANGE`], leaving `values` unchanged.
pub fn try_counting_sort(values: &mut [i32]) -> Result<(), RangeTooWideError> {
    let (Some(&min), Some(&max)) = (values.iter().min(), values.iter().max()) else {
        return Ok(());
    };

    let range = (i64::from(max) - i64::from(min)) as u64 + 1;
    if range > MAX_COUNTING_RANGE as u64 {
        Err(RangeTooWideError { range })?
    }

    let mut counts = vec![0_usize; range as usize];
    for &value in values.iter() {
        counts[(i64::from(value) - i64::from(min)) as usize] += 1;
    }

    let mut slots = values.iter_mut();
    for (offset, &count) in counts.iter().enumerate() {
        let value = (i64::from(min) + offset as i64) as i32;
        for slot in slots.by_ref().take(count) {
            *slot = value;
        }
    }
    Ok(())
}
