//! Reference counts for rooted and unrooted trees.
//!
//! - [A000081]: rooted trees with `n` unlabeled nodes.
//! - [A000055]: unrooted (free) trees with `n` unlabeled nodes.
//!
//! The tables cover `n = 0..=11`. For larger `n` the counts are computed
//! exactly with big integers:
//!
//! ```text
//! r(n+1) = 1/n * sum_{k=1..n} s(k) * r(n-k+1),   s(k) = sum_{d | k} d * r(d)
//! u(n)   = r(n) - 1/2 * sum_{i=1..n-1} r(i) * r(n-i) + [n even] 1/2 * r(n/2)
//! ```
//!
//! The second line is Otter's formula relating unrooted to rooted trees.

use num_bigint::BigUint;

/// OEIS A000081, number of rooted trees with `n` nodes (index = `n`).
pub const A000081: [u64; 12] = [0, 1, 1, 2, 4, 9, 20, 48, 115, 286, 719, 1842];

/// OEIS A000055, number of unrooted trees with `n` nodes (index = `n`).
pub const A000055: [u64; 12] = [1, 1, 1, 1, 2, 3, 6, 11, 23, 47, 106, 235];

/// Tabulated A000081(n), or `None` beyond the table.
pub fn a000081(n: usize) -> Option<u64> {
    A000081.get(n).copied()
}

/// Tabulated A000055(n), or `None` beyond the table.
pub fn a000055(n: usize) -> Option<u64> {
    A000055.get(n).copied()
}

/// A000081(0..=max).
pub fn rooted_counts(max: usize) -> Vec<BigUint> {
    let mut r = vec![BigUint::ZERO; max + 1];
    if max == 0 {
        return r;
    }
    r[1] = BigUint::from(1u8);

    let mut s = vec![BigUint::ZERO; max + 1];
    for m in 1..max {
        s[m] = (1..=m)
            .filter(|d| m % d == 0)
            .map(|d| &r[d] * BigUint::from(d))
            .sum();
        let total: BigUint = (1..=m).map(|k| &s[k] * &r[m - k + 1]).sum();
        r[m + 1] = total / BigUint::from(m);
    }
    r
}

/// A000081(n), exact for any `n`.
pub fn count_rooted(n: usize) -> BigUint {
    rooted_counts(n).swap_remove(n)
}

/// A000055(n), exact for any `n`.
pub fn count_unrooted(n: usize) -> BigUint {
    if n == 0 {
        return BigUint::from(1u8);
    }

    let r = rooted_counts(n);
    let pairs: BigUint = (1..n).map(|i| &r[i] * &r[n - i]).sum();
    let mut twice = &r[n] * BigUint::from(2u8);
    if n % 2 == 0 {
        twice += &r[n / 2];
    }
    (twice - pairs) / BigUint::from(2u8)
}
