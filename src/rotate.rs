/// Moves `a[k]` into position `j`, shifting `a[j..k]` one slot to the right.
/// Returns a reference to the value now at `j`.
///
/// Precondition: `j <= k < a.len()`.
pub(crate) fn rotate_right<T>(a: &mut [T], j: usize, k: usize) -> &T {
    debug_assert!(j <= k && k < a.len());
    let mut i = k;
    while i > j {
        a.swap(i - 1, i);
        i -= 1;
    }
    &a[j]
}

/// Inverse of [`rotate_right`]: moves `a[j]` into position `k`, shifting
/// `a[j+1..=k]` one slot to the left. Returns a reference to the value now
/// at `k`.
pub(crate) fn rotate_left<T>(a: &mut [T], j: usize, k: usize) -> &T {
    debug_assert!(j <= k && k < a.len());
    for i in j..k {
        a.swap(i, i + 1);
    }
    &a[k]
}
