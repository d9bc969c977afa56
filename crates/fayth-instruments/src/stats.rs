//! Statistics primitives shared by every game scorer.
//!
//! All of these degrade to 0 on empty or too-short input instead of
//! producing NaN, so nothing non-finite can reach a composite.

/// Arithmetic mean; 0 for an empty slice.
pub fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.iter().sum::<f64>() / xs.len() as f64
}

/// Population standard deviation (divides by n); 0 for fewer than 2 values.
pub fn stddev(xs: &[f64]) -> f64 {
    if xs.len() < 2 {
        return 0.0;
    }
    let m = mean(xs);
    let variance = xs.iter().map(|x| (x - m) * (x - m)).sum::<f64>() / xs.len() as f64;
    variance.sqrt()
}

/// Ordinary-least-squares slope of `ys` against the index `0..n`.
/// 0 for fewer than 2 values.
///
/// A positive slope over reaction times means responses slowed across the
/// block, which is read as a vigilance decrement.
pub fn linear_slope(ys: &[f64]) -> f64 {
    let n = ys.len();
    if n < 2 {
        return 0.0;
    }
    let mx = (n - 1) as f64 / 2.0;
    let my = mean(ys);

    let (num, den) = ys
        .iter()
        .enumerate()
        .fold((0.0, 0.0), |(num, den), (i, y)| {
            let dx = i as f64 - mx;
            (num + dx * (y - my), den + dx * dx)
        });

    if den == 0.0 { 0.0 } else { num / den }
}

/// Lower and upper clamp applied to a rate before [`logit`].
pub const LOGIT_CLAMP: (f64, f64) = (0.01, 0.99);

/// `ln(p / (1 - p))` with `p` clamped to [0.01, 0.99] so that rates of
/// exactly 0 or 1 stay finite.
pub fn logit(p: f64) -> f64 {
    let p = p.clamp(LOGIT_CLAMP.0, LOGIT_CLAMP.1);
    (p / (1.0 - p)).ln()
}

/// `numerator / denominator`, or 0 when the denominator is 0.
pub fn ratio(numerator: u32, denominator: u32) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        f64::from(numerator) / f64::from(denominator)
    }
}

/// [`ratio`] as a percentage.
pub fn percent(numerator: u32, denominator: u32) -> f64 {
    ratio(numerator, denominator) * 100.0
}

/// Round to a fixed number of decimal places.
pub fn round_to(x: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (x * factor).round() / factor
}

/// Round a composite formula result and clamp it into [0, 100].
pub fn clamp_composite(x: f64) -> u8 {
    if x.is_nan() {
        return 0;
    }
    x.round().clamp(0.0, 100.0) as u8
}
