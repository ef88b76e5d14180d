//! Golden reference for the moving integrator
//!
//! Straightforward O(N)-per-sample implementations used to check the
//! incremental engine. Nothing here shares code with the engine's quantizer.

use crate::{cfg::IntegratorCfg, error::CfgResult, rounder::Rounding, widths::Widths};

/// moving window mean, `np.convolve(samples, ones(n) / n)`.
/// With `trim_output` the result has the same length as `samples`.
pub fn moving_mean(samples: &[f64], n: usize, trim_output: bool) -> Vec<f64> {
    assert!(n >= 1);
    let full_len = samples.len() + n - 1;
    let out_len = if trim_output { samples.len() } else { full_len };
    (0..out_len)
        .map(|i| {
            let lo = (i + 1).saturating_sub(n);
            let hi = i.min(samples.len().saturating_sub(1));
            if lo > hi || samples.is_empty() {
                0.0
            } else {
                samples[lo..=hi].iter().sum::<f64>() / n as f64
            }
        })
        .collect()
}

/// sum of the last `n` samples at every position, zeros before the first sample
pub fn window_sums(samples: &[i64], n: usize) -> Vec<i128> {
    (0..samples.len())
        .map(|i| {
            let lo = (i + 1).saturating_sub(n);
            samples[lo..=i].iter().map(|&x| x as i128).sum()
        })
        .collect()
}

/// `x` modulo 2^width, as a signed or unsigned `width`-bit word
fn to_word(x: i128, width: u32, signed: bool) -> i128 {
    let m = 1i128 << width;
    let y = x.rem_euclid(m);
    if signed && y >= m / 2 {
        y - m
    } else {
        y
    }
}

/// quantize a window sum to the output word
pub fn quantize(sum: i128, widths: &Widths, rounding: Rounding) -> i64 {
    let k = widths.shift();
    let d = 1i128 << k;
    let q = sum.div_euclid(d);
    let r = sum.rem_euclid(d);
    let q = match rounding {
        Rounding::Truncate => q,
        Rounding::RoundEven => {
            let half = d / 2;
            let top = if widths.signed {
                (1i128 << (widths.output - 1)) - 1
            } else {
                (1i128 << widths.output) - 1
            };
            if r > half || (r == half && q.rem_euclid(2) == 1) {
                // saturate on a carry out of the output word
                (q + 1).min(top)
            } else {
                q
            }
        }
    };
    to_word(q, widths.output, widths.signed) as i64
}

/// expected output for every input sample, aligned with the input (no latency)
pub fn golden(samples: &[i64], cfg: &IntegratorCfg) -> CfgResult<Vec<i64>> {
    let widths = Widths::validate::<i64>(cfg)?;
    let rounding = cfg.rounding();
    Ok(window_sums(samples, cfg.samples)
        .into_iter()
        .map(|s| quantize(s, &widths, rounding))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cfg::Storage;

    #[test]
    fn mean_of_ramp() {
        let x: Vec<f64> = (1..=8).map(|i| i as f64).collect();
        assert_eq!(
            moving_mean(&x, 4, true),
            vec![0.25, 0.75, 1.5, 2.5, 3.5, 4.5, 5.5, 6.5]
        );
        let full = moving_mean(&x, 4, false);
        assert_eq!(full.len(), 11);
        assert_eq!(full[10], 2.0);
    }

    #[test]
    fn sums() {
        assert_eq!(window_sums(&[1, 2, 3, 4, 5], 2), vec![1, 3, 5, 7, 9]);
        assert_eq!(window_sums(&[1, -2, 3], 1), vec![1, -2, 3]);
    }

    #[test]
    fn quantize_matches_mean() {
        let w = Widths {
            input: 8,
            output: 8,
            accumulator: 10,
            signed: true,
        };
        assert_eq!(quantize(16, &w, Rounding::Truncate), 4);
        assert_eq!(quantize(-1, &w, Rounding::Truncate), -1);
        assert_eq!(quantize(-1, &w, Rounding::RoundEven), 0);
        assert_eq!(quantize(10, &w, Rounding::RoundEven), 2);
        assert_eq!(quantize(14, &w, Rounding::RoundEven), 4);
        assert_eq!(quantize(-10, &w, Rounding::RoundEven), -2);
        assert_eq!(quantize(511, &w, Rounding::RoundEven), 127);

        let w = Widths { signed: false, ..w };
        assert_eq!(quantize(1023, &w, Rounding::RoundEven), 255);
        assert_eq!(quantize(1021, &w, Rounding::RoundEven), 255);
    }

    #[test]
    fn golden_ramp() {
        let cfg = IntegratorCfg {
            in_width: 8,
            out_width: 8,
            samples: 4,
            signed: false,
            round_even: false,
            protection_bits: 0,
            storage: Storage::ShiftRegister,
        };
        let g = golden(&[1, 2, 3, 4, 5, 6, 7, 8], &cfg).unwrap();
        assert_eq!(g, vec![0, 0, 1, 2, 3, 4, 5, 6]);

        let cfg = IntegratorCfg {
            round_even: true,
            ..cfg
        };
        let g = golden(&[1, 2, 3, 4, 5, 6, 7, 8], &cfg).unwrap();
        assert_eq!(g, vec![0, 1, 2, 2, 4, 4, 6, 6]);
    }
}
