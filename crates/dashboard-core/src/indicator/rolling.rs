// File: crates/dashboard-core/src/indicator/rolling.rs
// Summary: Trailing-window statistics and exponential smoothing over aligned value vectors.
// Notes:
// - Inputs and outputs keep the source length; `None` marks positions without a value.
// - A window containing any `None` produces `None`.

/// Values of the trailing window ending at `i`, or `None` if the window is short or has gaps.
fn window_at(values: &[Option<f64>], i: usize, window: usize) -> Option<Vec<f64>> {
    if window == 0 || i + 1 < window {
        return None;
    }
    values[i + 1 - window..=i].iter().copied().collect()
}

/// Trailing simple moving average. The first `window - 1` entries are `None`.
pub fn rolling_mean(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    (0..values.len())
        .map(|i| {
            let w = window_at(values, i, window)?;
            Some(mean(&w))
        })
        .collect()
}

/// Trailing population standard deviation (divides by `window`, not `window - 1`).
pub fn rolling_std(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    (0..values.len())
        .map(|i| {
            let w = window_at(values, i, window)?;
            let m = mean(&w);
            let variance = w.iter().map(|v| (v - m).powi(2)).sum::<f64>() / w.len() as f64;
            Some(variance.sqrt())
        })
        .collect()
}

/// Mean taken as offsets from the first value, so a flat window returns that value exactly.
fn mean(w: &[f64]) -> f64 {
    let Some(&first) = w.first() else { return f64::NAN };
    first + w.iter().map(|v| v - first).sum::<f64>() / w.len() as f64
}

/// Exponential moving average with alpha = 2 / (span + 1), seeded with the first value.
/// Every output position is defined.
pub fn ema(values: &[f64], span: usize) -> Vec<f64> {
    let alpha = if span == 0 { 1.0 } else { 2.0 / (span as f64 + 1.0) };
    let mut out = Vec::with_capacity(values.len());
    let mut prev: Option<f64> = None;
    for &v in values {
        let next = match prev {
            Some(p) => alpha * v + (1.0 - alpha) * p,
            None => v,
        };
        out.push(next);
        prev = Some(next);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(v: &[f64]) -> Vec<Option<f64>> {
        v.iter().copied().map(Some).collect()
    }

    #[test]
    fn test_rolling_mean_leading_gap() {
        let out = rolling_mean(&some(&[1.0, 2.0, 3.0, 4.0]), 3);
        assert_eq!(out, vec![None, None, Some(2.0), Some(3.0)]);
    }

    #[test]
    fn test_rolling_mean_propagates_missing_inputs() {
        let input = vec![None, Some(2.0), Some(4.0), Some(6.0)];
        let out = rolling_mean(&input, 2);
        assert_eq!(out, vec![None, None, Some(3.0), Some(5.0)]);
    }

    #[test]
    fn test_rolling_zero_window_is_undefined() {
        assert!(rolling_mean(&some(&[1.0, 2.0]), 0).iter().all(Option::is_none));
        assert!(rolling_std(&some(&[1.0, 2.0]), 0).iter().all(Option::is_none));
    }

    #[test]
    fn test_rolling_std_is_population() {
        // window {2, 4, 4, 4, 5, 5, 7, 9}: population std is exactly 2
        let out = rolling_std(&some(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]), 8);
        assert_eq!(out[7], Some(2.0));
    }

    #[test]
    fn test_flat_window_is_exact() {
        // 101.7 and 0.1 have no exact binary form; a plain sum drifts off them
        for price in [101.7, 0.1] {
            let input = some(&[price; 30]);
            let means = rolling_mean(&input, 20);
            let stds = rolling_std(&input, 20);
            for i in 19..30 {
                assert_eq!(means[i], Some(price));
                assert_eq!(stds[i], Some(0.0));
            }
        }
    }

    #[test]
    fn test_ema_seeded_with_first_value() {
        let out = ema(&[10.0, 20.0, 20.0], 3);
        // alpha = 0.5
        assert_eq!(out, vec![10.0, 15.0, 17.5]);
    }

    #[test]
    fn test_ema_empty() {
        assert!(ema(&[], 12).is_empty());
    }
}
