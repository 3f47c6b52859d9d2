pub mod digits;
pub mod happy;
pub mod sequence;

pub use digits::digit_square_sum;
pub use happy::{
    HappyChain, HappyError, Outcome, checked_is_happy, happy_chain, happy_numbers,
    happy_numbers_below, happy_numbers_below_parallel, is_happy,
};
pub use sequence::{Trajectory, reaches};
