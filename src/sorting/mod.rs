pub mod bead_sort;
pub mod bubble_sort;
pub mod recursive_bubble_sort;

pub use self::bead_sort::{bead_sort, fits_grid, Bead, BeadGrid, MAX_GRID_CELLS};
pub use self::bubble_sort::bubble_sort;
pub use self::recursive_bubble_sort::recursive_bubble_sort;

use std::cmp;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    #[error("negative input not supported: element {index} is {value}")]
    InvalidInput { index: usize, value: i128 },
}

pub fn is_sorted<T>(arr: &[T]) -> bool
where
    T: cmp::PartialOrd,
{
    arr.windows(2).all(|w| w[0] <= w[1])
}

/// Multiset equality: same length and same number of occurrences of every value.
#[cfg(test)]
pub fn have_same_elements<T>(a: &[T], b: &[T]) -> bool
where
    T: cmp::Ord + Clone,
{
    if a.len() != b.len() {
        return false;
    }
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort();
    b.sort();
    a == b
}
