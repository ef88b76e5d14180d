//! Construction-time width bookkeeping
//!
//! The accumulator of an N-sample window of `W_in`-bit samples needs
//! `W_in + ceil(log2(N))` bits to never overflow; `protection_bits` widens it further.
//! The output is the top `W_out` bits of the accumulator.

use log::debug;

use crate::{
    cfg::IntegratorCfg,
    error::{CfgResult, ConfigError},
    traits::FixedInt,
    utils::{bounds, capacity, clog2},
};

/// Validated widths of one integrator instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Widths {
    pub input: u32,
    pub output: u32,
    pub accumulator: u32,
    pub signed: bool,
}

impl Widths {
    /// check `cfg` against itself and against the carrier type `A`
    pub fn validate<A>(cfg: &IntegratorCfg) -> CfgResult<Widths>
    where
        A: FixedInt,
    {
        if cfg.samples < 1 {
            return Err(ConfigError::EmptyWindow);
        }
        if cfg.in_width < 1 {
            return Err(ConfigError::ZeroWidth("input"));
        }
        if cfg.out_width < 1 {
            return Err(ConfigError::ZeroWidth("output"));
        }

        let accumulator = cfg.in_width + clog2(cfg.samples) + cfg.protection_bits;
        if cfg.out_width > accumulator {
            return Err(ConfigError::OutputTooWide {
                output: cfg.out_width,
                accumulator,
            });
        }
        if cfg.round_even && accumulator == cfg.out_width {
            return Err(ConfigError::NothingToRound {
                accumulator,
                output: cfg.out_width,
            });
        }

        // one bit for the rounding carry, one for the sign of the carrier
        let required = accumulator + 2;
        let capacity = capacity::<A>();
        if required > capacity {
            return Err(ConfigError::AccumulatorTooWide {
                accumulator,
                required,
                capacity,
            });
        }

        let widths = Widths {
            input: cfg.in_width,
            output: cfg.out_width,
            accumulator,
            signed: cfg.signed,
        };
        debug!(
            "widths: in={} out={} acc={} shift={} signed={}",
            widths.input,
            widths.output,
            widths.accumulator,
            widths.shift(),
            widths.signed
        );
        Ok(widths)
    }

    /// number of discarded accumulator bits
    pub fn shift(&self) -> u32 {
        self.accumulator - self.output
    }

    /// legal input sample range
    pub fn sample_bounds<A>(&self) -> (A, A)
    where
        A: FixedInt,
    {
        bounds(self.input, self.signed)
    }

    /// true when `sample` fits the input word
    pub fn contains<A>(&self, sample: A) -> bool
    where
        A: FixedInt,
    {
        let (lo, hi) = self.sample_bounds();
        sample >= lo && sample <= hi
    }
}
