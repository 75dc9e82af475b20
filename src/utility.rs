//! Small helpers shared by the numeric and plotting modules.

/// Find the minimum and maximum of the finite values in an iterator, skipping NaN and infinities.
///
/// Returns `None` if there are no finite values.
pub(crate) fn finite_range<'a, I>(vals: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = &'a f64>,
{
    vals.into_iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Linear interpolation of `val` from the range `[lo, hi]` onto `[0, 1]`, clamped at the ends.
///
/// A degenerate range maps everything to the middle.
pub(crate) fn normalize(val: f64, lo: f64, hi: f64) -> f64 {
    let span = hi - lo;
    if span.abs() < std::f64::EPSILON {
        0.5
    } else {
        ((val - lo) / span).max(0.0).min(1.0)
    }
}
