//! # Table Interpolation
//!
//! Piecewise-linear lookup against monotone tables, clamped at the edges.
//! Values outside the table range take the first or last table value.

/// Linearly interpolate `x` against ascending `xs` and matching `ys`.
///
/// ```text
///  y
///  │          ●────── ys[n-1] held beyond xs[n-1]
///  │        ╱
///  │   ●──●
///  │ ╱
///  ● ys[0] held below xs[0]
///  └──────────────── x
/// ```
///
/// Returns 0.0 for empty tables. Uses the shorter length if the tables
/// differ in length.
///
/// # Example
/// ```rust
/// use soil_core::equations::interpolation::interp;
///
/// let xs = [3.0, 6.0, 10.0];
/// let ys = [33.0, 45.0, 60.0];
/// assert_eq!(interp(8.0, &xs, &ys), 52.5);
/// assert_eq!(interp(1.0, &xs, &ys), 33.0);
/// assert_eq!(interp(99.0, &xs, &ys), 60.0);
/// ```
pub fn interp(x: f64, xs: &[f64], ys: &[f64]) -> f64 {
    let len = xs.len().min(ys.len());
    if len == 0 {
        return 0.0;
    }
    if x <= xs[0] {
        return ys[0];
    }
    for i in 1..len {
        if x <= xs[i] {
            let (x0, x1) = (xs[i - 1], xs[i]);
            let (y0, y1) = (ys[i - 1], ys[i]);
            if x == x1 || (x1 - x0).abs() < f64::EPSILON {
                return y1;
            }
            return y0 + (y1 - y0) * (x - x0) / (x1 - x0);
        }
    }
    ys[len - 1]
}

#[cfg(test)]
mod tests {
    use super::*;

    const XS: [f64; 4] = [0.0, 1.0, 2.0, 4.0];
    const YS: [f64; 4] = [10.0, 20.0, 20.0, 0.0];

    #[test]
    fn test_knots_are_exact() {
        for (x, y) in XS.iter().zip(YS.iter()) {
            assert_eq!(interp(*x, &XS, &YS), *y);
        }
    }

    #[test]
    fn test_between_knots() {
        assert_eq!(interp(0.5, &XS, &YS), 15.0);
        assert_eq!(interp(3.0, &XS, &YS), 10.0);
    }

    #[test]
    fn test_clamped_edges() {
        assert_eq!(interp(-5.0, &XS, &YS), 10.0);
        assert_eq!(interp(50.0, &XS, &YS), 0.0);
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(interp(1.0, &[], &[]), 0.0);
    }
}
