use std::cmp::Ordering;

/// Returns the index of an element equal to `target` in the ascending slice
/// `arr`, or `None` when there is none.
pub fn binary_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    // half-open window [low, high)
    let mut low = 0;
    let mut high = arr.len();

    while low < high {
        let mid = low + (high - low) / 2;
        match arr[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }

    None
}
