use std::collections::HashSet;
use std::hash::Hash;

/// Iterator over the orbit of a value under a transform:
/// `start, f(start), f(f(start)), ...`
///
/// The iterator is infinite; combine it with `take` or `take_while`.
///
/// # Example
///
/// ```
/// use math::sequence::Trajectory;
///
/// let halving: Vec<u64> = Trajectory::new(40u64, |n| n / 2).take(4).collect();
/// assert_eq!(halving, vec![40, 20, 10, 5]);
/// ```
pub struct Trajectory<T, F> {
    next: Option<T>,
    transform: F,
}

impl<T, F> Trajectory<T, F>
where
    T: Clone,
    F: Fn(T) -> T,
{
    pub fn new(start: T, transform: F) -> Self {
        Trajectory {
            next: Some(start),
            transform,
        }
    }
}

impl<T, F> Iterator for Trajectory<T, F>
where
    T: Clone,
    F: Fn(T) -> T,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = Some((self.transform)(current.clone()));
        Some(current)
    }
}

/// Walk the chain from `start` and report whether it produces `target`
/// before any value repeats.
///
/// The seen set lives only for this call. `start == target` is `true`
/// without applying the transform.
///
/// # Example
///
/// ```
/// use math::sequence::reaches;
///
/// // 5 → 4 → 3 → 2 → 1
/// assert!(reaches(5, 1, |n| if n > 1 { n - 1 } else { 1 }));
/// // 0 → 1 → 2 → 0 never hits 7
/// assert!(!reaches(0, 7, |n| (n + 1) % 3));
/// ```
pub fn reaches<T, F>(start: T, target: T, transform: F) -> bool
where
    T: Eq + Hash + Clone,
    F: Fn(T) -> T,
{
    let mut seen = HashSet::new();
    let mut current = start;
    while current != target {
        if !seen.insert(current.clone()) {
            return false;
        }
        current = transform(current);
    }
    true
}
