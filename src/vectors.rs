//! Test vector files
//!
//! One tick per line, `"<sample>  <expected>"`, where `expected` is the golden
//! output for that sample without pipeline delay.

use std::io::{BufRead, Write};

use rand::Rng;

use crate::{
    cfg::IntegratorCfg,
    error::{CfgResult, VectorError},
    integrator::MovingIntegrator,
    model::golden,
    widths::Widths,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestVector {
    pub sample: i64,
    pub expected: i64,
}

/// random samples over the full input range and their golden outputs
pub fn generate<R>(cfg: &IntegratorCfg, len: usize, rng: &mut R) -> CfgResult<Vec<TestVector>>
where
    R: Rng,
{
    let (lo, hi) = Widths::validate::<i64>(cfg)?.sample_bounds::<i64>();
    let samples: Vec<i64> = (0..len).map(|_| rng.gen_range(lo..=hi)).collect();
    let expected = golden(&samples, cfg)?;
    Ok(samples
        .into_iter()
        .zip(expected)
        .map(|(sample, expected)| TestVector { sample, expected })
        .collect())
}

pub fn write_vectors<W>(mut output: W, vectors: &[TestVector]) -> std::io::Result<()>
where
    W: Write,
{
    for v in vectors {
        writeln!(output, "{}  {}", v.sample, v.expected)?;
    }
    Ok(())
}

/// parse vectors, blank lines are skipped
pub fn read_vectors<R>(input: R) -> Result<Vec<TestVector>, VectorError>
where
    R: BufRead,
{
    let mut result = Vec::new();
    for (i, line) in input.lines().enumerate() {
        let line = line?;
        let fields: Vec<_> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        let parsed = match fields[..] {
            [s, e] => s.parse::<i64>().ok().zip(e.parse::<i64>().ok()),
            _ => None,
        };
        match parsed {
            Some((sample, expected)) => result.push(TestVector { sample, expected }),
            None => {
                return Err(VectorError::Parse {
                    line: i + 1,
                    content: line,
                })
            }
        }
    }
    Ok(result)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    /// vector index
    pub index: usize,
    pub expected: i64,
    pub actual: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub checked: usize,
    pub mismatches: Vec<Mismatch>,
}

impl CheckReport {
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// drive a freshly reset integrator with the vectors and compare every output,
/// compensating the pipeline latency
pub fn check(cfg: &IntegratorCfg, vectors: &[TestVector]) -> CfgResult<CheckReport> {
    let mut mi = MovingIntegrator::<i64>::new(cfg)?;
    mi.hold_reset();
    let latency = mi.latency();

    let mut report = CheckReport::default();
    let flush = std::iter::repeat(0).take(latency);
    let samples = vectors.iter().map(|v| v.sample).chain(flush);
    for (tick, x) in samples.enumerate() {
        let actual = mi.step(x, false, true);
        if tick < latency {
            continue;
        }
        let index = tick - latency;
        let expected = vectors[index].expected;
        report.checked += 1;
        if actual != expected {
            report.mismatches.push(Mismatch {
                index,
                expected,
                actual,
            });
        }
    }
    Ok(report)
}
