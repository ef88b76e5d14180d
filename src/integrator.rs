//! Moving integrator: box-car sum of the last N samples
//!
//! Each call to [`MovingIntegrator::step`] is one clock tick. All registers
//! update together and only see values from before the tick:
//!
//! ```text
//! sample -> sample_reg -> history / accumulator -> [rounder] -> output
//! ```
//!
//! The registered sample is the only copy of the incoming sample, it feeds both
//! the history write and the accumulator. Output lags the input by
//! [`MovingIntegrator::latency`] ticks.
//!
//! Reset clears the history one slot per tick, so it has to be held for
//! [`MovingIntegrator::reset_ticks`] consecutive ticks before the sum is valid.

use log::debug;

use crate::{
    accumulator::Accumulator,
    cfg::IntegratorCfg,
    error::{CfgResult, ConfigError},
    history::History,
    rounder::Rounder,
    traits::{FixedInt, HistoryStore},
    widths::Widths,
};

/// ticks from sample register to output register with truncation only
pub const BASE_LATENCY: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct MovingIntegrator<A, S = History<A>> {
    widths: Widths,
    sample_reg: A,
    history: S,
    acc: Accumulator<A>,
    rounder: Rounder<A>,
    output: A,
}

impl<A> MovingIntegrator<A, History<A>>
where
    A: FixedInt,
{
    /// construct with the storage named in `cfg`
    pub fn new(cfg: &IntegratorCfg) -> CfgResult<Self> {
        Self::with_history(cfg, History::new(cfg.storage, cfg.samples)?)
    }
}

impl<A, S> MovingIntegrator<A, S>
where
    A: FixedInt,
    S: HistoryStore<A>,
{
    /// construct around an explicit history store
    pub fn with_history(cfg: &IntegratorCfg, history: S) -> CfgResult<Self> {
        let widths = Widths::validate::<A>(cfg)?;
        if history.len() != cfg.samples {
            return Err(ConfigError::HistoryLenMismatch {
                expected: cfg.samples,
                actual: history.len(),
            });
        }
        let rounder = Rounder::new(&widths, cfg.rounding());
        debug!(
            "moving integrator: N={} {:?} latency={} reset_ticks={}",
            cfg.samples,
            cfg.rounding(),
            BASE_LATENCY + rounder.latency(),
            history.len() + history.read_latency()
        );
        Ok(MovingIntegrator {
            widths,
            sample_reg: A::zero(),
            history,
            acc: Accumulator::new(&widths),
            rounder,
            output: A::zero(),
        })
    }

    /// one clock tick, returns the output register after the tick.
    /// `reset` wins over `enable`; with both low nothing changes.
    pub fn step(&mut self, sample: A, reset: bool, enable: bool) -> A {
        if reset {
            self.sample_reg = A::zero();
            self.history.reset_step();
            self.acc.reset();
            self.rounder.reset();
            self.output = A::zero();
        } else if enable {
            debug_assert!(
                self.widths.contains(sample),
                "sample {:?} outside {}-bit range",
                sample,
                self.widths.input
            );
            let acc = self.acc.value();
            let new = self.sample_reg;
            let evicted = self.history.push(new);
            self.acc.update(new, evicted);
            self.output = self.rounder.clock(acc);
            self.sample_reg = sample;
        }
        self.output
    }

    /// feed every sample on an enabled tick
    pub fn process(&mut self, samples: &[A]) -> Vec<A> {
        samples.iter().map(|&x| self.step(x, false, true)).collect()
    }

    /// hold reset for exactly [`Self::reset_ticks`] ticks
    pub fn hold_reset(&mut self) {
        for _ in 0..self.reset_ticks() {
            self.step(A::zero(), true, false);
        }
    }

    /// input to output delay in ticks
    pub fn latency(&self) -> usize {
        BASE_LATENCY + self.rounder.latency()
    }

    /// consecutive reset ticks needed to clear the whole history
    pub fn reset_ticks(&self) -> usize {
        self.history.len() + self.history.read_latency()
    }

    pub fn widths(&self) -> &Widths {
        &self.widths
    }

    pub fn accumulator(&self) -> A {
        self.acc.value()
    }

    pub fn output(&self) -> A {
        self.output
    }

    /// history contents, oldest first
    pub fn window(&self) -> Vec<A> {
        self.history.window()
    }
}
