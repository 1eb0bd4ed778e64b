//! Float assertion macros.

/// Assert that two floating-point values are approximately equal.
///
/// ```rust
/// use arcade_test_helpers::assert_approx_eq;
///
/// assert_approx_eq!(1200.0_f32, 1200.0001, 0.001);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $tolerance:expr $(,)?) => {
        let left = $left;
        let right = $right;
        let tolerance = $tolerance;
        let diff = (left - right).abs();
        if !(diff <= tolerance) {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}`,\n  tolerance: `{:?}`",
                left, right, diff, tolerance
            );
        }
    };
    ($left:expr, $right:expr, $tolerance:expr, $($arg:tt)+) => {
        let left = $left;
        let right = $right;
        let tolerance = $tolerance;
        let diff = (left - right).abs();
        if !(diff <= tolerance) {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}`,\n  tolerance: `{:?}`: {}",
                left, right, diff, tolerance, format_args!($($arg)+)
            );
        }
    };
}

/// Assert that a value lies within an inclusive range.
///
/// ```rust
/// use arcade_test_helpers::assert_in_range;
///
/// assert_in_range!(0.5_f32, 0.0, 1.0);
/// ```
#[macro_export]
macro_rules! assert_in_range {
    ($value:expr, $min:expr, $max:expr $(,)?) => {
        let value = $value;
        let min = $min;
        let max = $max;
        if !(value >= min && value <= max) {
            panic!(
                "assertion failed: `{:?}` is not within [{:?}, {:?}]",
                value, min, max
            );
        }
    };
}
