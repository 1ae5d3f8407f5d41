/// Sorts `values` in ascending order with Shell's method: insertion sorts over items `gap`
/// apart, halving the gap each round until a final plain insertion sort.
///
/// # Examples
/// ```
/// # use ganylib::sort::shell_sort;
/// let mut values = ["delta", "alpha", "charlie", "bravo"];
/// shell_sort(&mut values);
/// assert_eq!(values, ["alpha", "bravo", "charlie", "delta"]);
/// ```
pub fn shell_sort<T: Ord>(values: &mut [T]) {
    let mut gap = values.len() / 2;
    while gap > 0 {
        for i in gap..values.len() {
            let mut j = i;
            while j >= gap && values[j - gap] > values[j] {
                values.swap(j - gap, j);
                j -= gap;
            }
        }
        gap /= 2;
    }
}
