//! Nice-number tick generation (Heckbert's algorithm).

use crate::error::{PlotError, PlotResult};

/// Number of decimal digits kept on generated tick values.
pub const TICK_PRECISION: i32 = 8;

/// Compute "nice" numbers for axis ticks.
///
/// Returns `f × 10^e` with `e = floor(log10(x))` and `f` taken from the
/// 1/2/5/10 ladder. With `round = false` the smallest ladder value not below
/// the normalized fraction is picked (used for the overall span); with
/// `round = true` the nearest one is picked (used for the step size).
///
/// `x` must be finite and non-zero; a zero input yields a non-finite result.
pub fn nice_number(x: f64, round: bool) -> f64 {
    let exponent = x.log10().floor();
    let fraction = x / 10_f64.powf(exponent);

    let nice_fraction = if round {
        if fraction < 1.5 {
            1.0
        } else if fraction < 3.0 {
            2.0
        } else if fraction < 7.0 {
            5.0
        } else {
            10.0
        }
    } else if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };

    nice_fraction * 10_f64.powf(exponent)
}

/// Round `value` to `digits` decimal digits.
///
/// Negative zero is normalized to zero.
pub fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10_f64.powi(digits);
    (value * factor).round() / factor + 0.0
}

/// Generate approximately `count` nice tick positions covering `[start, end]`.
///
/// The result is always ascending. In `tight` mode the sequence starts at
/// `start` and ends at `end` exactly, with generated ticks only strictly
/// between them.
pub fn ticks(start: f64, end: f64, count: usize, tight: bool) -> PlotResult<Vec<f64>> {
    if !start.is_finite() || !end.is_finite() {
        return Err(PlotError::InvalidData(format!(
            "tick interval [{}, {}] is not finite",
            start, end
        )));
    }
    if count < 2 {
        return Err(PlotError::InvalidConfig(format!(
            "tick count must be at least 2, got {}",
            count
        )));
    }
    if start == end {
        return Ok(vec![start]);
    }
    if end < start {
        return ticks(end, start, count, tight);
    }

    let range = nice_number(end - start, false);
    let step = nice_number(range / (count - 1) as f64, true);
    let ticks_start = (start / step).floor() * step;
    let ticks_end = (end / step).ceil() * step;
    let steps = ((ticks_end - ticks_start) / step).round() as usize;

    let generated = (0..=steps).map(|k| round_to(ticks_start + k as f64 * step, TICK_PRECISION));

    if !tight {
        return Ok(generated.collect());
    }

    let mut values = vec![start];
    values.extend(generated.filter(|&v| v > start && v < end));
    values.push(end);
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_number_ceiling_mode() {
        assert_eq!(nice_number(1.0, false), 1.0);
        assert_eq!(nice_number(2.5, false), 5.0);
        assert_eq!(nice_number(7.0, false), 10.0);
        assert_eq!(nice_number(230.0, false), 500.0);
    }

    #[test]
    fn test_nice_number_rounding_mode() {
        assert_eq!(nice_number(1.2, true), 1.0);
        assert_eq!(nice_number(4.0, true), 5.0);
        assert_eq!(nice_number(25.0, true), 20.0);
        assert_eq!(nice_number(8.0, true), 10.0);
    }

    #[test]
    fn test_ticks_zero_to_hundred() {
        let values = ticks(0.0, 100.0, 5, false).unwrap();
        assert_eq!(values, vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    }

    #[test]
    fn test_ticks_tight_keeps_exact_endpoints() {
        let values = ticks(3.0, 97.0, 5, true).unwrap();
        assert_eq!(values.first(), Some(&3.0));
        assert_eq!(values.last(), Some(&97.0));
        assert_eq!(&values[1..values.len() - 1], &[20.0, 40.0, 60.0, 80.0]);

        let exact = ticks(0.0, 100.0, 5, true).unwrap();
        assert_eq!(exact, vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    }

    #[test]
    fn test_ticks_reversed_interval_is_ascending() {
        let forward = ticks(0.0, 100.0, 5, false).unwrap();
        let reversed = ticks(100.0, 0.0, 5, false).unwrap();
        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_ticks_degenerate_interval() {
        assert_eq!(ticks(4.2, 4.2, 5, false).unwrap(), vec![4.2]);
    }

    #[test]
    fn test_ticks_suppress_float_noise() {
        let values = ticks(0.0, 1.0, 11, false).unwrap();
        assert_eq!(values[3], 0.3);
        assert_eq!(values[7], 0.7);
        assert_eq!(values.len(), 11);
    }

    #[test]
    fn test_ticks_negative_span_covers_interval() {
        let values = ticks(-7.0, 13.0, 5, false).unwrap();
        assert!(values[0] <= -7.0);
        assert!(*values.last().unwrap() >= 13.0);
        assert!(values.contains(&0.0));
        assert!(values.iter().all(|v| !(v.is_sign_negative() && *v == 0.0)));
    }

    #[test]
    fn test_ticks_rejects_single_tick() {
        assert!(matches!(
            ticks(0.0, 1.0, 1, false),
            Err(PlotError::InvalidConfig(_))
        ));
        assert!(matches!(
            ticks(f64::NAN, 1.0, 5, false),
            Err(PlotError::InvalidData(_))
        ));
    }
}
