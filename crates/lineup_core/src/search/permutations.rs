//! Lexicographic permutation enumeration over roster slots

/// Iterator over every ordering of `0..n`, in lexicographic order.
///
/// `n = 0` yields a single empty ordering.
#[derive(Debug, Clone)]
pub struct Permutations {
    current: Vec<usize>,
    done: bool,
}

impl Permutations {
    pub fn new(n: usize) -> Self {
        Self { current: (0..n).collect(), done: false }
    }
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.current.clone();
        self.done = !next_permutation(&mut self.current);
        Some(item)
    }
}

/// Rearrange `items` into the next lexicographic ordering. Returns `false`
/// (leaving `items` untouched) when it is already the last one.
fn next_permutation(items: &mut [usize]) -> bool {
    let Some(pivot) = items.windows(2).rposition(|w| w[0] < w[1]) else {
        return false;
    };
    let Some(successor) = items.iter().rposition(|&x| x > items[pivot]) else {
        return false;
    };
    items.swap(pivot, successor);
    items[pivot + 1..].reverse();
    true
}

/// `n!`, saturating at `u64::MAX`.
pub fn permutation_count(n: usize) -> u64 {
    (1..=n as u64).try_fold(1u64, |acc, k| acc.checked_mul(k)).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_three_items_in_order() {
        let all: Vec<Vec<usize>> = Permutations::new(3).collect();
        assert_eq!(
            all,
            vec![
                vec![0, 1, 2],
                vec![0, 2, 1],
                vec![1, 0, 2],
                vec![1, 2, 0],
                vec![2, 0, 1],
                vec![2, 1, 0],
            ]
        );
    }

    #[test]
    fn test_degenerate_sizes() {
        assert_eq!(Permutations::new(0).collect::<Vec<_>>(), vec![Vec::<usize>::new()]);
        assert_eq!(Permutations::new(1).collect::<Vec<_>>(), vec![vec![0]]);
    }

    #[test]
    fn test_count_matches_factorial() {
        for n in 0..=7 {
            let all: HashSet<Vec<usize>> = Permutations::new(n).collect();
            assert_eq!(all.len() as u64, permutation_count(n), "n = {n}");
        }
    }

    #[test]
    fn test_permutation_count() {
        assert_eq!(permutation_count(0), 1);
        assert_eq!(permutation_count(9), 362_880);
        assert_eq!(permutation_count(20), 2_432_902_008_176_640_000);
        assert_eq!(permutation_count(21), u64::MAX);
    }
}
