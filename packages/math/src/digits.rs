/// Compute the sum of the squares of each decimal digit in n.
///
/// Example: digit_square_sum(123) = 1² + 2² + 3² = 1 + 4 + 9 = 14
pub fn digit_square_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        let digit = n % 10;
        sum += digit * digit;
        n /= 10;
    }
    sum
}

/// Decimal digits of n, most significant first. Zero has the single digit 0.
///
/// # Example
///
/// ```
/// use math::digits::digits;
///
/// assert_eq!(digits(1970), vec![1, 9, 7, 0]);
/// assert_eq!(digits(0), vec![0]);
/// ```
pub fn digits(mut n: u64) -> Vec<u64> {
    if n == 0 {
        return vec![0];
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(n % 10);
        n /= 10;
    }
    out.reverse();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_square_sum() {
        assert_eq!(digit_square_sum(0), 0);
        assert_eq!(digit_square_sum(123), 14); // 1 + 4 + 9
        assert_eq!(digit_square_sum(19), 82); // 1 + 81
        assert_eq!(digit_square_sum(100), 1);
    }

    #[test]
    fn test_digit_square_sum_shrinks_large_values() {
        // Four or more digits always map to at most 81 * d, which is smaller
        assert_eq!(digit_square_sum(9999), 324);
        assert_eq!(digit_square_sum(u64::MAX), 515); // 20 digits
        assert!(digit_square_sum(1000) < 1000);
    }

    #[test]
    fn test_digits() {
        assert_eq!(digits(7), vec![7]);
        assert_eq!(digits(100), vec![1, 0, 0]);
        assert_eq!(
            digits(123).iter().map(|d| d * d).sum::<u64>(),
            digit_square_sum(123)
        );
    }
}
