//! Shared helpers for the solver acceptance tests.

#![forbid(unsafe_code)]

/// Every permutation of `1..=n`, in lexicographic order of generation.
///
/// Intended for exhaustive small-size sweeps; the caller is responsible for
/// keeping `n` small enough that `n!` instances are reasonable.
#[must_use]
pub fn permutations(n: usize) -> Vec<Vec<u32>> {
    fn recurse(remaining: &mut Vec<u32>, current: &mut Vec<u32>, out: &mut Vec<Vec<u32>>) {
        if remaining.is_empty() {
            out.push(current.clone());
            return;
        }
        for i in 0..remaining.len() {
            let value = remaining.remove(i);
            current.push(value);
            recurse(remaining, current, out);
            current.pop();
            remaining.insert(i, value);
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    let mut remaining: Vec<u32> = (1..=n as u32).collect();
    let mut out = Vec::new();
    recurse(&mut remaining, &mut Vec::new(), &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_are_factorials() {
        assert_eq!(permutations(1).len(), 1);
        assert_eq!(permutations(3).len(), 6);
        assert_eq!(permutations(5).len(), 120);
    }

    #[test]
    fn every_entry_is_a_distinct_permutation() {
        let all = permutations(4);
        for p in &all {
            let mut sorted = p.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, vec![1, 2, 3, 4]);
        }
        let unique: std::collections::HashSet<_> = all.iter().collect();
        assert_eq!(unique.len(), all.len());
    }
}
