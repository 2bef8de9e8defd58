/// Clamps `value` into `[low, high]`.
#[must_use]
pub fn constrain<T>(value: T, low: T, high: T) -> T
where
    T: PartialOrd,
{
    if value < low {
        low
    } else if value > high {
        high
    } else {
        value
    }
}

/// Affine rescale of `x` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// Integer arithmetic, truncating toward zero. `x` is not clamped, so values
/// outside the input range extrapolate. `in_min` and `in_max` must differ.
#[must_use]
pub fn map<T>(x: T, in_min: T, in_max: T, out_min: T, out_max: T) -> T
where
    T: Copy
        + core::ops::Add<Output = T>
        + core::ops::Sub<Output = T>
        + core::ops::Mul<Output = T>
        + core::ops::Div<Output = T>,
{
    out_min + (x - in_min) * (out_max - out_min) / (in_max - in_min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    #[case::below(0, -5, 0, 100)]
    #[case::low(0, 0, 0, 100)]
    #[case::inside(42, 42, 0, 100)]
    #[case::high(100, 100, 0, 100)]
    #[case::above(100, 150, 0, 100)]
    fn test_constrain(#[case] expect: i32, #[case] value: i32, #[case] low: i32, #[case] high: i32) {
        assert_eq!(expect, constrain(value, low, high));
    }

    #[rstest::rstest]
    #[case::bottom(0, 0, 0, 100, 0, 31)]
    #[case::top(31, 100, 0, 100, 0, 31)]
    #[case::truncate(15, 50, 0, 100, 0, 31)]
    #[case::inverse(48, 15, 0, 31, 0, 100)]
    #[case::offset(20, 50, 0, 100, 10, 30)]
    #[case::descending(25, 50, 0, 100, 30, 20)]
    #[case::extrapolate(62, 200, 0, 100, 0, 31)]
    #[case::toward_zero(-2, -7, 0, 100, 0, 31)]
    fn test_map(
        #[case] expect: i32,
        #[case] x: i32,
        #[case] in_min: i32,
        #[case] in_max: i32,
        #[case] out_min: i32,
        #[case] out_max: i32,
    ) {
        assert_eq!(expect, map(x, in_min, in_max, out_min, out_max));
    }
}
