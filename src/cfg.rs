//! This module contains a set of cfg structs, from which actual working structs are constructed
//! It is convient to generate working structs from cfg files on disks

use serde::{Deserialize, Serialize};

use crate::rounder::Rounding;

/// backing storage of the sample history
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy, Default)]
#[serde(rename_all = "snake_case")]
pub enum Storage {
    /// every slot moves one position per tick
    #[default]
    ShiftRegister,
    /// circular buffer addressed by a wrapping write index
    IndexedRing,
}

/// cfg to generate a moving integrator
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy)]
pub struct IntegratorCfg {
    /// input sample width in bits
    pub in_width: u32,
    /// output width in bits
    pub out_width: u32,
    /// window length
    pub samples: usize,
    /// two's complement input
    #[serde(default)]
    pub signed: bool,
    /// round half to even instead of truncating
    #[serde(default)]
    pub round_even: bool,
    /// extra accumulator bits
    #[serde(default)]
    pub protection_bits: u32,
    #[serde(default)]
    pub storage: Storage,
}

impl IntegratorCfg {
    pub fn rounding(&self) -> Rounding {
        if self.round_even {
            Rounding::RoundEven
        } else {
            Rounding::Truncate
        }
    }
}

fn default_vector_len() -> usize {
    8192
}

fn default_nvectors() -> usize {
    1
}

/// cfg to generate test vector files
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct VectorCfg {
    pub integrator: IntegratorCfg,
    /// samples per file
    #[serde(default = "default_vector_len")]
    pub vector_len: usize,
    /// number of files
    #[serde(default = "default_nvectors")]
    pub nvectors: usize,
    /// fixed rng seed, entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
}
