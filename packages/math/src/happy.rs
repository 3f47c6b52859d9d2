//! Happy numbers: values whose digit-square-sum chain reaches 1.

use rayon::prelude::*;
use std::collections::HashSet;
use thiserror::Error;

use crate::digits::digit_square_sum;
use crate::sequence::{Trajectory, reaches};

/// The only cycle an unhappy chain can fall into.
pub const UNHAPPY_CYCLE: [u64; 8] = [4, 16, 37, 58, 89, 145, 42, 20];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HappyError {
    #[error("happy numbers are positive integers, got {0}")]
    NotPositive(i64),
}

/// How a digit-square-sum chain ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The chain reached 1.
    Happy,
    /// `repeated` was produced a second time before 1 appeared.
    Cyclic { repeated: u64 },
}

/// A complete walk from a starting value to its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HappyChain {
    /// Every distinct value visited, in order. Ends with 1 for a happy chain.
    pub values: Vec<u64>,
    pub outcome: Outcome,
}

impl HappyChain {
    pub fn is_happy(&self) -> bool {
        self.outcome == Outcome::Happy
    }

    /// Number of digit-square-sum applications performed.
    pub fn steps(&self) -> usize {
        match self.outcome {
            Outcome::Happy => self.values.len() - 1,
            Outcome::Cyclic { .. } => self.values.len(),
        }
    }
}

/// Returns true if repeatedly replacing `n` by the sum of the squares of its
/// digits eventually produces 1.
///
/// Zero is never happy: its chain is 0 → 0.
///
/// # Example
///
/// ```
/// use math::happy::is_happy;
///
/// assert!(is_happy(19)); // 19 → 82 → 68 → 100 → 1
/// assert!(!is_happy(2));
/// ```
pub fn is_happy(n: u64) -> bool {
    reaches(n, 1, digit_square_sum)
}

/// Signed entry point for values coming from outside the library.
///
/// Rejects `n <= 0` instead of guessing an answer for it.
pub fn checked_is_happy(n: i64) -> Result<bool, HappyError> {
    if n <= 0 {
        return Err(HappyError::NotPositive(n));
    }
    Ok(is_happy(n as u64))
}

/// Record the full chain for `n` along with how it ended.
///
/// # Example
///
/// ```
/// use math::happy::{happy_chain, Outcome};
///
/// let chain = happy_chain(7);
/// assert_eq!(chain.values, vec![7, 49, 97, 130, 10, 1]);
/// assert_eq!(chain.outcome, Outcome::Happy);
/// ```
pub fn happy_chain(n: u64) -> HappyChain {
    let mut seen = HashSet::new();
    let mut values: Vec<u64> = Trajectory::new(n, digit_square_sum)
        .take_while(|&v| v != 1 && seen.insert(v))
        .collect();

    // The value that stopped the walk: either 1 or the first repeat
    let last = values.last().map_or(n, |&v| digit_square_sum(v));
    let outcome = if last == 1 {
        values.push(1);
        Outcome::Happy
    } else {
        Outcome::Cyclic { repeated: last }
    };
    HappyChain { values, outcome }
}

/// Returns an iterator over happy numbers: 1, 7, 10, 13, 19, ...
///
/// # Example
///
/// ```
/// use math::happy::happy_numbers;
///
/// let first_five: Vec<u64> = happy_numbers().take(5).collect();
/// assert_eq!(first_five, vec![1, 7, 10, 13, 19]);
/// ```
pub fn happy_numbers() -> impl Iterator<Item = u64> {
    (1..).filter(|&n| is_happy(n))
}

/// Finds all happy numbers less than `limit`, in ascending order.
pub fn happy_numbers_below(limit: u64) -> Vec<u64> {
    (1..limit).filter(|&n| is_happy(n)).collect()
}

/// Same result as [`happy_numbers_below`], checking candidates on the rayon pool.
pub fn happy_numbers_below_parallel(limit: u64) -> Vec<u64> {
    (1..limit)
        .into_par_iter()
        .filter(|&n| is_happy(n))
        .collect()
}
