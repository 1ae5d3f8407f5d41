use std::cmp::Ordering;

/// Searches a slice sorted in ascending order for `target`, returning the index of a matching
/// item. If there are several matches, any one of them may be returned.
///
/// # Examples
/// ```
/// # use ganylib::sort::binary_search;
/// let values = [1, 3, 5, 7, 9];
/// assert_eq!(binary_search(&values, &7), Some(3));
/// assert_eq!(binary_search(&values, &4), None);
/// ```
pub fn binary_search<T: Ord>(sorted: &[T], target: &T) -> Option<usize> {
    let (mut low, mut high) = (0, sorted.len());
    while low < high {
        let mid = low + (high - low) / 2;
        match sorted[mid].cmp(target) {
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
            Ordering::Equal => return Some(mid),
        }
    }
    None
}
