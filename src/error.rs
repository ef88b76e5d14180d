//! error types

use std::io;
use thiserror::Error;

/// Result type for constructing integrators
pub type CfgResult<T> = Result<T, ConfigError>;

/// Errors detected while validating a configuration.
/// An integrator is never constructed when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// window of zero samples
    #[error("window length must be at least 1")]
    EmptyWindow,

    /// a zero input or output width
    #[error("{0} width must be at least 1 bit")]
    ZeroWidth(&'static str),

    /// output asks for more bits than the accumulator carries
    #[error("output width {output} exceeds accumulator width {accumulator}")]
    OutputTooWide { output: u32, accumulator: u32 },

    /// rounding with no discarded bits
    #[error("rounding needs at least one discarded bit (accumulator {accumulator}, output {output})")]
    NothingToRound { accumulator: u32, output: u32 },

    /// carrier integer type too narrow for accumulator plus rounding headroom
    #[error("accumulator of {accumulator} bits needs {required} bits, carrier type has {capacity}")]
    AccumulatorTooWide {
        accumulator: u32,
        required: u32,
        capacity: u32,
    },

    /// history store built for a different window length
    #[error("history store holds {actual} samples, configuration asks for {expected}")]
    HistoryLenMismatch { expected: usize, actual: usize },
}

/// Errors reading test vector files
#[derive(Error, Debug)]
pub enum VectorError {
    #[error("failed to read vectors: {0}")]
    Io(#[from] io::Error),

    /// line is not two integers
    #[error("line {line}: cannot parse {content:?}")]
    Parse { line: usize, content: String },
}
