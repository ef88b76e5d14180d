//! fixed point moving integrator (box-car filter)

pub mod accumulator;
pub mod cfg;
pub mod error;
pub mod history;
pub mod integrator;
pub mod model;
pub mod rounder;
pub mod traits;
pub mod utils;
pub mod vectors;
pub mod widths;
