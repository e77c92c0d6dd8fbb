//! Evenly spaced floating-point sequences
//!
//! Every densified geometry in the crate is driven by these two ranges. Both
//! always append `end` after the main walk, so the final value is exactly
//! `end` even when step accumulation drifts. When the walk itself lands on
//! `end` the value appears twice; callers that need unique values must
//! deduplicate themselves. A step too small to change the running value
//! ends the walk early, so every range is finite.

use crate::error::{Error, Result};

/// Iterator over an inclusive floating-point range
///
/// Clone it before consuming to walk the same sequence again.
#[derive(Debug, Clone)]
pub struct FloatRange {
    current: f64,
    end: f64,
    step: f64,
    ascending: bool,
    repeats: Option<usize>,
    finished: bool,
}

impl FloatRange {
    fn walking(start: f64, end: f64, step: f64) -> Self {
        Self {
            current: start,
            end,
            step,
            ascending: end > start,
            repeats: None,
            finished: false,
        }
    }

    fn in_range(&self) -> bool {
        if self.ascending {
            self.current <= self.end
        } else {
            self.current >= self.end
        }
    }
}

impl Iterator for FloatRange {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.finished {
            return None;
        }

        if let Some(remaining) = self.repeats {
            if remaining > 0 {
                self.repeats = Some(remaining - 1);
                return Some(self.current);
            }
        } else if self.in_range() {
            let value = self.current;
            self.current += self.step;
            if self.current == value {
                // step is below the float spacing at `value`; end comes next
                self.repeats = Some(0);
            }
            return Some(value);
        }

        self.finished = true;
        Some(self.end)
    }
}

impl std::iter::FusedIterator for FloatRange {}

/// Values from `start` to `end` inclusive, divided into `steps` intervals
///
/// Yields `steps + 1` values in the usual case. With `start == end` the result
/// is `steps + 1` copies of `start`. `steps == 0` yields `start` then `end`.
pub fn float_range(start: f64, end: f64, steps: usize) -> FloatRange {
    if start == end {
        return FloatRange {
            current: start,
            end,
            step: 0.0,
            ascending: false,
            repeats: Some(steps),
            finished: false,
        };
    }

    let step = (end - start) / steps as f64;
    FloatRange::walking(start, end, step)
}

/// Values from `start` toward `end` in increments of `|step_size|`, then `end`
///
/// The sign of `step_size` is ignored; the walk always heads toward `end`.
/// Fails when `start == end` because no direction exists, and when the step
/// is zero or not finite because the walk would never terminate.
pub fn float_range_by(start: f64, end: f64, step_size: f64) -> Result<FloatRange> {
    if start == end {
        return Err(Error::Precondition(format!(
            "float_range_by needs distinct bounds, got {} and {}",
            start, end
        )));
    }
    if step_size == 0.0 || !step_size.is_finite() {
        return Err(Error::Precondition(format!(
            "float_range_by needs a finite non-zero step, got {}",
            step_size
        )));
    }

    let step = if end > start {
        step_size.abs()
    } else {
        -step_size.abs()
    };
    Ok(FloatRange::walking(start, end, step))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_range_ascending() {
        let vals: Vec<f64> = float_range(0.0, 1.0, 100).collect();
        assert_eq!(vals.len(), 101);
        assert_eq!(vals[0], 0.0);
        assert_eq!(*vals.last().unwrap(), 1.0);
    }

    #[test]
    fn test_float_range_descending() {
        let vals: Vec<f64> = float_range(1.0, 0.0, 100).collect();
        assert_eq!(vals.len(), 101);
        assert_eq!(vals[0], 1.0);
        assert_eq!(*vals.last().unwrap(), 0.0);
        assert!(vals.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_float_range_unchanging() {
        let vals: Vec<f64> = float_range(0.0, 0.0, 100).collect();
        assert_eq!(vals.len(), 101);
        assert!(vals.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_float_range_wide_span() {
        // a step of 36 is exact, so the walk lands on 180 before it is appended
        let vals: Vec<f64> = float_range(-180.0, 180.0, 10).collect();
        assert_eq!(vals.len(), 12);
        assert_eq!(vals[0], -180.0);
        assert!((vals[5] - 0.0).abs() < 1e-9);
        assert_eq!(vals[10], 180.0);
        assert_eq!(vals[11], 180.0);
    }

    #[test]
    fn test_float_range_is_restartable() {
        let range = float_range(2.0, 3.0, 4);
        let first: Vec<f64> = range.clone().collect();
        let second: Vec<f64> = range.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_float_range_zero_steps() {
        let vals: Vec<f64> = float_range(1.0, 2.0, 0).collect();
        assert_eq!(vals, vec![1.0, 2.0]);
    }

    #[test]
    fn test_float_range_step_below_precision() {
        let vals: Vec<f64> = float_range(1e16, 1e16 + 2.0, 4).collect();
        assert_eq!(vals, vec![1e16, 1e16 + 2.0]);
    }

    #[test]
    fn test_float_range_by_step_below_precision() {
        let vals: Vec<f64> = float_range_by(1e16 + 4.0, 1e16, 0.5).unwrap().collect();
        assert_eq!(vals, vec![1e16 + 4.0, 1e16]);
    }

    #[test]
    fn test_float_range_by_ascending() {
        let vals: Vec<f64> = float_range_by(0.0, 1.0, 0.1).unwrap().collect();
        assert_eq!(vals.len(), 12);
        assert_eq!(vals[0], 0.0);
        for (i, v) in vals.iter().take(11).enumerate() {
            assert!((v - 0.1 * i as f64).abs() < 1e-9, "value {} was {}", i, v);
        }
        assert_eq!(vals[11], 1.0);
    }

    #[test]
    fn test_float_range_by_descending() {
        let vals: Vec<f64> = float_range_by(1.0, 0.0, 0.1).unwrap().collect();
        assert_eq!(vals.len(), 12);
        assert_eq!(vals[0], 1.0);
        assert!((vals[1] - 0.9).abs() < 1e-9);
        assert_eq!(vals[11], 0.0);
    }

    #[test]
    fn test_float_range_by_ignores_step_sign() {
        let down: Vec<f64> = float_range_by(1.0, 0.0, -0.25).unwrap().collect();
        let up: Vec<f64> = float_range_by(0.0, 1.0, -0.25).unwrap().collect();
        assert_eq!(down, vec![1.0, 0.75, 0.5, 0.25, 0.0, 0.0]);
        assert_eq!(up, vec![0.0, 0.25, 0.5, 0.75, 1.0, 1.0]);
    }

    #[test]
    fn test_float_range_by_unchanging() {
        let result = float_range_by(0.0, 0.0, 0.1);
        assert!(matches!(result, Err(Error::Precondition(_))));
    }

    #[test]
    fn test_float_range_by_zero_step() {
        assert!(float_range_by(0.0, 1.0, 0.0).is_err());
        assert!(float_range_by(0.0, 1.0, f64::NAN).is_err());
    }
}
