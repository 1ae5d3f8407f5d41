/// Sorts `values` in ascending order by repeatedly swapping neighbours that are out of order.
/// Stops early once a pass makes no swaps.
///
/// # Examples
/// ```
/// # use ganylib::sort::bubble_sort;
/// let mut values = [5, 1, 4, 2, 8];
/// bubble_sort(&mut values);
/// assert_eq!(values, [1, 2, 4, 5, 8]);
/// ```
pub fn bubble_sort<T: Ord>(values: &mut [T]) {
    let mut unsorted = values.len();
    while unsorted > 1 {
        let mut last_swap = 0;
        for i in 1..unsorted {
            if values[i - 1] > values[i] {
                values.swap(i - 1, i);
                last_swap = i;
            }
        }
        // Everything from the last swap onwards is in its final place.
        unsorted = last_swap;
    }
}

/// Sorts `values` in ascending order by growing a sorted prefix one item at a time. Stable.
pub fn insertion_sort<T: Ord>(values: &mut [T]) {
    for i in 1..values.len() {
        let mut j = i;
        while j > 0 && values[j - 1] > values[j] {
            values.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Sorts `values` in ascending order by moving the smallest remaining item to the front of the
/// unsorted part on each pass. Not stable.
pub fn selection_sort<T: Ord>(values: &mut [T]) {
    for i in 0..values.len() {
        let mut min = i;
        for j in i + 1..values.len() {
            if values[j] < values[min] {
                min = j;
            }
        }
        values.swap(i, min);
    }
}
