//! Set-like helpers over small slices. All are O(n·m) linear scans.

/// Whether `slice` contains `item`.
pub fn contains<T: PartialEq>(slice: &[T], item: &T) -> bool {
    slice.iter().any(|x| x == item)
}

/// Whether `a` and `b` hold the same elements in the same order.
pub fn matches<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    a == b
}

/// Elements of `a` that are also in `b`, in `a`'s order.
pub fn intersect<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    a.iter().filter(|x| contains(b, x)).cloned().collect()
}

/// Elements of `a` that are not in `b`, in `a`'s order.
pub fn subtract<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    a.iter().filter(|x| !contains(b, x)).cloned().collect()
}
