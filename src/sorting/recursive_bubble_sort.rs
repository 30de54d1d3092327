/// One bubbling pass moves the largest element to the end, then the rest of
/// the slice is sorted the same way.
pub fn recursive_bubble_sort<T: Ord>(arr: &mut [T]) {
    let n = arr.len();
    if n <= 1 {
        return;
    }

    for i in 0..n - 1 {
        if arr[i] > arr[i + 1] {
            arr.swap(i, i + 1);
        }
    }

    recursive_bubble_sort(&mut arr[..n - 1]);
}
