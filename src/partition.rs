//! Integer partitions in non-increasing form.
//!
//! A partition of `n` is written as `p_1 >= p_2 >= ... >= p_m >= 1` with
//! `p_1 + ... + p_m = n`. Writing parts in non-increasing order means every
//! multiset of part sizes appears exactly once, and equal parts are always
//! adjacent. The [generator][crate::generator] relies on both facts.
//!
//! Partitions are produced in reverse lexicographic order, largest first:
//!
//! ```
//! use rooted_rs::partition::Partitions;
//!
//! let all: Vec<Vec<usize>> = Partitions::new(4).collect();
//! assert_eq!(all, vec![
//!     vec![4],
//!     vec![3, 1],
//!     vec![2, 2],
//!     vec![2, 1, 1],
//!     vec![1, 1, 1, 1],
//! ]);
//! ```

/// Iterator over all partitions of `n`.
///
/// `n = 0` has exactly one partition, the empty one.
#[derive(Debug, Clone)]
pub struct Partitions {
    current: Vec<usize>,
    done: bool,
}

impl Partitions {
    pub fn new(n: usize) -> Self {
        let current = if n == 0 { Vec::new() } else { vec![n] };
        Self {
            current,
            done: false,
        }
    }

    /// Advances `current` to the next partition, or marks the iterator as done.
    fn advance(&mut self) {
        // Rightmost part that can still be split.
        let Some(k) = self.current.iter().rposition(|&p| p > 1) else {
            self.done = true;
            return;
        };

        let ones = self.current.len() - k - 1;
        let part = self.current[k] - 1;
        self.current.truncate(k);
        self.current.push(part);

        let mut remaining = ones + 1;
        while remaining > 0 {
            let next = part.min(remaining);
            self.current.push(next);
            remaining -= next;
        }
    }
}

impl Iterator for Partitions {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.current.clone();
        self.advance();
        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// OEIS A000041.
    const PARTITION_COUNTS: [usize; 13] = [1, 1, 2, 3, 5, 7, 11, 15, 22, 30, 42, 56, 77];

    #[test]
    fn test_zero() {
        let all: Vec<Vec<usize>> = Partitions::new(0).collect();
        assert_eq!(all, vec![Vec::<usize>::new()]);
    }

    #[test]
    fn test_counts() {
        for (n, &expected) in PARTITION_COUNTS.iter().enumerate() {
            assert_eq!(Partitions::new(n).count(), expected, "p({})", n);
        }
    }

    #[test]
    fn test_shape() {
        for n in 1..=12 {
            let mut seen = std::collections::HashSet::new();
            for p in Partitions::new(n) {
                assert_eq!(p.iter().sum::<usize>(), n);
                assert!(p.windows(2).all(|w| w[0] >= w[1]), "{:?} is not non-increasing", p);
                assert!(p.iter().all(|&x| x >= 1));
                assert!(seen.insert(p));
            }
        }
    }

    #[test]
    fn test_order() {
        let all: Vec<Vec<usize>> = Partitions::new(5).collect();
        assert_eq!(all.first(), Some(&vec![5]));
        assert_eq!(all.last(), Some(&vec![1, 1, 1, 1, 1]));
        let mut sorted = all.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(all, sorted);
    }
}
