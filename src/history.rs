//! Sample history of the moving window
//!
//! Two storage layouts with identical behaviour:
//! [`ShiftRegister`] moves every slot each tick, [`IndexedRing`] writes one slot
//! of a circular buffer and reads the outgoing sample through a registered port.

use num_traits::Zero;

use crate::{
    cfg::Storage,
    error::{CfgResult, ConfigError},
    traits::HistoryStore,
};

/// Shift register of N slots, slot 0 holds the newest sample
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftRegister<T> {
    slots: Vec<T>,
}

impl<T> ShiftRegister<T>
where
    T: Copy + Zero,
{
    pub fn new(len: usize) -> CfgResult<ShiftRegister<T>> {
        if len < 1 {
            return Err(ConfigError::EmptyWindow);
        }
        Ok(ShiftRegister {
            slots: vec![T::zero(); len],
        })
    }
}

impl<T> HistoryStore<T> for ShiftRegister<T>
where
    T: Copy + Zero,
{
    fn len(&self) -> usize {
        self.slots.len()
    }

    fn push(&mut self, sample: T) -> T {
        let n = self.slots.len();
        let evicted = self.slots[n - 1];
        self.slots.copy_within(0..n - 1, 1);
        self.slots[0] = sample;
        evicted
    }

    fn window(&self) -> Vec<T> {
        self.slots.iter().rev().cloned().collect()
    }
}

/// Circular buffer over a power-of-two sized memory.
/// Only the first `len` slots are addressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedRing<T> {
    mem: Vec<T>,
    len: usize,
    /// slot written on the next tick, also the oldest sample
    wr_addr: usize,
    /// registered read port, always holds `mem[wr_addr]`.
    /// It is loaded in the same tick as the write, so it never lags the
    /// memory and N reset ticks clear it together with the last slot.
    rd_data: T,
}

impl<T> IndexedRing<T>
where
    T: Copy + Zero,
{
    pub fn new(len: usize) -> CfgResult<IndexedRing<T>> {
        if len < 1 {
            return Err(ConfigError::EmptyWindow);
        }
        Ok(IndexedRing {
            mem: vec![T::zero(); len.next_power_of_two()],
            len,
            wr_addr: 0,
            rd_data: T::zero(),
        })
    }

    /// size of the backing memory
    pub fn depth(&self) -> usize {
        self.mem.len()
    }
}

impl<T> HistoryStore<T> for IndexedRing<T>
where
    T: Copy + Zero,
{
    fn len(&self) -> usize {
        self.len
    }

    fn push(&mut self, sample: T) -> T {
        let evicted = self.rd_data;
        self.mem[self.wr_addr] = sample;
        let next = (self.wr_addr + 1) % self.len;
        // write-first: with a single slot the read sees this tick's write
        self.rd_data = self.mem[next];
        self.wr_addr = next;
        evicted
    }

    fn window(&self) -> Vec<T> {
        (0..self.len)
            .map(|i| self.mem[(self.wr_addr + i) % self.len])
            .collect()
    }

    /// one extra reset tick for the read register, a margin over the N
    /// ticks that clear the memory and the register in this model
    fn read_latency(&self) -> usize {
        1
    }
}

/// History store selected at run time from [`Storage`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum History<T> {
    Shift(ShiftRegister<T>),
    Ring(IndexedRing<T>),
}

impl<T> History<T>
where
    T: Copy + Zero,
{
    pub fn new(storage: Storage, len: usize) -> CfgResult<History<T>> {
        Ok(match storage {
            Storage::ShiftRegister => History::Shift(ShiftRegister::new(len)?),
            Storage::IndexedRing => History::Ring(IndexedRing::new(len)?),
        })
    }

    pub fn storage(&self) -> Storage {
        match self {
            History::Shift(_) => Storage::ShiftRegister,
            History::Ring(_) => Storage::IndexedRing,
        }
    }
}

impl<T> HistoryStore<T> for History<T>
where
    T: Copy + Zero,
{
    fn len(&self) -> usize {
        match self {
            History::Shift(h) => h.len(),
            History::Ring(h) => h.len(),
        }
    }

    fn push(&mut self, sample: T) -> T {
        match self {
            History::Shift(h) => h.push(sample),
            History::Ring(h) => h.push(sample),
        }
    }

    fn window(&self) -> Vec<T> {
        match self {
            History::Shift(h) => h.window(),
            History::Ring(h) => h.window(),
        }
    }

    fn read_latency(&self) -> usize {
        match self {
            History::Shift(h) => h.read_latency(),
            History::Ring(h) => h.read_latency(),
        }
    }
}
