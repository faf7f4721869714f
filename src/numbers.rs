//! Transforms over sequences of numbers.
//!
//! Numbers are `f64`, so sequences may mix integers and fractional
//! values. Each function borrows a slice and returns a new value;
//! inputs are never mutated.

/// Return just the first and last element of a sequence.
///
/// An empty sequence yields an empty sequence; a single element is
/// repeated twice.
pub fn book_end_list(numbers: &[f64]) -> Vec<f64> {
    match numbers {
        [] => Vec::new(),
        [only] => vec![*only, *only],
        [first, .., last] => vec![*first, *last],
    }
}

/// Multiply every element by 3, preserving order and length.
pub fn triple_numbers(numbers: &[f64]) -> Vec<f64> {
    numbers.iter().map(|n| n * 3.0).collect()
}

/// Render a sequence as its sum followed by the addends, e.g.
/// `[1, 2, 3]` becomes `"6=1+2+3"`. An empty sequence becomes `"0=0"`.
///
/// Integral values render without a fractional part, so
/// `[1.5, 2.5]` becomes `"4=1.5+2.5"`.
pub fn make_math(addends: &[f64]) -> String {
    if addends.is_empty() {
        return "0=0".to_string();
    }
    let sum: f64 = addends.iter().sum();
    let terms = addends
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join("+");
    format!("{sum}={terms}")
}

/// Insert the sum of all elements before the first negative value
/// immediately after it. If there is no negative value, append the sum
/// of the whole sequence instead.
///
/// `[1, 9, -5, 7]` becomes `[1, 9, -5, 10, 7]`;
/// `[1, 9, 7]` becomes `[1, 9, 7, 17]`.
pub fn inject_positive(values: &[f64]) -> Vec<f64> {
    let mut out = values.to_vec();
    match values.iter().position(|v| *v < 0.0) {
        Some(idx) => {
            let sum_before: f64 = values[..idx].iter().sum();
            out.insert(idx + 1, sum_before);
        }
        None => out.push(values.iter().sum()),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_end_empty() {
        assert_eq!(book_end_list(&[]), Vec::<f64>::new());
    }

    #[test]
    fn test_book_end_single_repeats() {
        assert_eq!(book_end_list(&[5.0]), vec![5.0, 5.0]);
    }

    #[test]
    fn test_book_end_keeps_first_and_last() {
        assert_eq!(book_end_list(&[1.0, 2.0, 3.0, 4.0]), vec![1.0, 4.0]);
        assert_eq!(book_end_list(&[7.5, 8.5]), vec![7.5, 8.5]);
    }

    #[test]
    fn test_triple_numbers() {
        assert_eq!(triple_numbers(&[1.0, 2.0, 3.0]), vec![3.0, 6.0, 9.0]);
        assert_eq!(triple_numbers(&[-2.0, 0.0]), vec![-6.0, 0.0]);
        assert!(triple_numbers(&[]).is_empty());
    }

    #[test]
    fn test_triple_numbers_fractional() {
        assert_eq!(triple_numbers(&[1.5, 2.5]), vec![4.5, 7.5]);
    }

    #[test]
    fn test_make_math_empty() {
        assert_eq!(make_math(&[]), "0=0");
    }

    #[test]
    fn test_make_math_joins_addends() {
        assert_eq!(make_math(&[1.0, 2.0, 3.0]), "6=1+2+3");
        assert_eq!(make_math(&[10.0]), "10=10");
    }

    #[test]
    fn test_make_math_fractional_addends() {
        assert_eq!(make_math(&[1.5, 2.5]), "4=1.5+2.5");
        assert_eq!(make_math(&[0.5]), "0.5=0.5");
    }

    #[test]
    fn test_make_math_negative_addends() {
        assert_eq!(make_math(&[5.0, -2.0]), "3=5+-2");
    }

    #[test]
    fn test_inject_positive_after_first_negative() {
        assert_eq!(
            inject_positive(&[1.0, 9.0, -5.0, 7.0]),
            vec![1.0, 9.0, -5.0, 10.0, 7.0]
        );
    }

    #[test]
    fn test_inject_positive_appends_when_no_negative() {
        assert_eq!(inject_positive(&[1.0, 9.0, 7.0]), vec![1.0, 9.0, 7.0, 17.0]);
    }

    #[test]
    fn test_inject_positive_negative_first() {
        // nothing before the negative, so the injected sum is 0
        assert_eq!(inject_positive(&[-3.0, 4.0]), vec![-3.0, 0.0, 4.0]);
    }

    #[test]
    fn test_inject_positive_only_counts_first_negative() {
        assert_eq!(
            inject_positive(&[2.0, -1.0, -1.0]),
            vec![2.0, -1.0, 2.0, -1.0]
        );
    }

    #[test]
    fn test_inject_positive_fractional() {
        assert_eq!(
            inject_positive(&[1.5, -2.0, 3.0]),
            vec![1.5, -2.0, 1.5, 3.0]
        );
    }

    #[test]
    fn test_inject_positive_empty_appends_zero() {
        assert_eq!(inject_positive(&[]), vec![0.0]);
    }

    #[test]
    fn test_inputs_not_consumed() {
        let values = vec![1.0, 2.0, 3.0];
        let _ = triple_numbers(&values);
        let _ = inject_positive(&values);
        assert_eq!(values, vec![1.0, 2.0, 3.0]);
    }
}
