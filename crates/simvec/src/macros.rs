//! Literal-list construction.

/// Build a [`SimpleVector`](crate::SimpleVector) from a list of values.
///
/// - `simple_vector![]` is an empty container.
/// - `simple_vector![a, b, c]` moves the values in order; size and
///   capacity both equal the number of values.
/// - `simple_vector![value; n]` holds `n` clones of `value`.
///
/// ```
/// use simvec::simple_vector;
///
/// let v = simple_vector![1, 2, 3];
/// assert_eq!(v.capacity(), 3);
///
/// let zeros = simple_vector![0u8; 4];
/// assert_eq!(zeros, [0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! simple_vector {
    () => {
        $crate::SimpleVector::new()
    };
    ($value:expr; $n:expr) => {
        $crate::SimpleVector::with_value($n, &$value)
    };
    ($($value:expr),+ $(,)?) => {
        $crate::SimpleVector::from([$($value),+])
    };
}

#[cfg(test)]
mod tests {
    use crate::SimpleVector;

    #[test]
    fn empty_list() {
        let v: SimpleVector<i32> = simple_vector![];
        assert_eq!(v.capacity(), 0);
    }

    #[test]
    fn values_move_in_order() {
        let v = simple_vector!["x".to_string(), "y".to_string(),];
        assert_eq!(v, ["x".to_string(), "y".to_string()]);
        assert_eq!(v.capacity(), 2);
    }

    #[test]
    fn repeated_value() {
        let v = simple_vector![7; 3];
        assert_eq!(v, [7, 7, 7]);
        assert_eq!(v.capacity(), 3);
    }
}
