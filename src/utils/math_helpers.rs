/// Number of unordered pairs among `n` bodies.
///
/// # Example
/// ```
/// use rs_nbody::utils::pair_count;
/// assert_eq!(pair_count(5), 10);
/// assert_eq!(pair_count(1), 0);
/// ```
#[inline]
pub const fn pair_count(n: usize) -> usize {
    if n < 2 { 0 } else { n * (n - 1) / 2 }
}

/// Linear index of the pair `(i, j)`, `i < j < n`, in row-major upper-triangle order.
///
/// Pair indices grow with `i` first and then with `j` inside a row, so
/// `(0, 1), (0, 2), .., (0, n-1), (1, 2), ..` map to `0, 1, 2, ..`.
///
/// # Example
/// ```
/// use rs_nbody::utils::pair_index;
/// assert_eq!(pair_index(0, 1, 5), 0);
/// assert_eq!(pair_index(1, 2, 5), 4);
/// assert_eq!(pair_index(3, 4, 5), 9);
/// ```
#[inline]
pub fn pair_index(i: usize, j: usize, n: usize) -> usize {
    debug_assert!(i < j && j < n, "pair ({}, {}) is not canonical for {} bodies", i, j, n);
    // Rows before i hold (n-1) + (n-2) + .. + (n-i) pairs.
    i * (2 * n - i - 1) / 2 + (j - i - 1)
}

/// Inverse of [`pair_index`]. Returns `None` when `p` is out of range.
///
/// # Example
/// ```
/// use rs_nbody::utils::pair_from_index;
/// assert_eq!(pair_from_index(4, 5), Some((1, 2)));
/// assert_eq!(pair_from_index(10, 5), None);
/// ```
pub fn pair_from_index(p: usize, n: usize) -> Option<(usize, usize)> {
    if p >= pair_count(n) {
        return None;
    }
    let mut row_start = 0;
    for i in 0..n - 1 {
        let row_len = n - i - 1;
        if p < row_start + row_len {
            return Some((i, i + 1 + (p - row_start)));
        }
        row_start += row_len;
    }
    None
}

/// The canonical `(i, j)` list for `n` bodies, position `p` holding pair `p`.
pub fn pair_table(n: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::with_capacity(pair_count(n));
    for i in 0..n {
        for j in i + 1..n {
            pairs.push((i, j));
        }
    }
    pairs
}
