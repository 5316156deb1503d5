//! Sequence and set helpers.

use std::collections::HashSet;
use std::hash::Hash;

/// True when `a` and `b` hold different elements, ignoring order.
///
/// Both slices are sorted in place as a side effect.
pub fn is_diff<T: Ord>(a: &mut [T], b: &mut [T]) -> bool {
    if a.len() != b.len() {
        return true;
    }
    a.sort();
    b.sort();
    a.iter().zip(b.iter()).any(|(x, y)| x != y)
}

/// One argument to [`sum`]: a number or a flat list of numbers.
#[derive(Debug, Clone, PartialEq)]
pub enum Summand {
    Number(f64),
    List(Vec<f64>),
}

impl From<f64> for Summand {
    fn from(n: f64) -> Self {
        Summand::Number(n)
    }
}

impl From<i64> for Summand {
    fn from(n: i64) -> Self {
        Summand::Number(n as f64)
    }
}

impl From<Vec<f64>> for Summand {
    fn from(list: Vec<f64>) -> Self {
        Summand::List(list)
    }
}

impl From<&[f64]> for Summand {
    fn from(list: &[f64]) -> Self {
        Summand::List(list.to_vec())
    }
}

/// Total of all numbers, flattening list arguments one level.
pub fn sum(args: &[Summand]) -> f64 {
    args.iter()
        .map(|arg| match arg {
            Summand::Number(n) => *n,
            Summand::List(list) => list.iter().sum(),
        })
        .sum()
}

/// True when every element of `subset` is in `set`.
pub fn is_superset<T: Eq + Hash>(set: &HashSet<T>, subset: &HashSet<T>) -> bool {
    subset.iter().all(|elem| set.contains(elem))
}

pub fn union<T: Eq + Hash + Clone>(a: &HashSet<T>, b: &HashSet<T>) -> HashSet<T> {
    a.iter().chain(b.iter()).cloned().collect()
}

pub fn intersection<T: Eq + Hash + Clone>(a: &HashSet<T>, b: &HashSet<T>) -> HashSet<T> {
    b.iter().filter(|elem| a.contains(*elem)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_diff() {
        let (mut a, mut b) = (vec![1, 2], vec![2, 1]);
        assert!(!is_diff(&mut a, &mut b));
        assert_eq!(b, vec![1, 2], "inputs are sorted in place");

        assert!(is_diff(&mut [1, 2], &mut [1, 3]));
        assert!(is_diff(&mut [1], &mut [1, 1]));
        assert!(!is_diff::<i32>(&mut [], &mut []));
    }

    #[test]
    fn test_sum_flattens_one_level() {
        let args = [Summand::from(1.5), Summand::from(vec![2.0, 3.0]), Summand::from(4_i64)];
        assert_eq!(sum(&args), 10.5);
        assert_eq!(sum(&[]), 0.0);
    }

    #[test]
    fn test_sets() {
        let a: HashSet<_> = [1, 2].into_iter().collect();
        let b: HashSet<_> = [2, 3].into_iter().collect();
        assert_eq!(union(&a, &b), [1, 2, 3].into_iter().collect());
        assert_eq!(intersection(&a, &b), [2].into_iter().collect());
        assert!(is_superset(&union(&a, &b), &a));
        assert!(!is_superset(&a, &b));
        assert!(is_superset(&a, &HashSet::new()));
    }
}
