use num_traits::{PrimInt, Signed, WrappingAdd, WrappingSub, Zero};

/// Integer type used to carry samples, accumulator and output words.
/// The represented fixed-width values are always narrower than the type itself.
pub trait FixedInt:
    PrimInt + Signed + WrappingAdd + WrappingSub + std::fmt::Debug + Send + Sync
{
}

impl<T> FixedInt for T where
    T: PrimInt + Signed + WrappingAdd + WrappingSub + std::fmt::Debug + Send + Sync
{
}

/// Storage for the last N samples of a moving window
pub trait HistoryStore<T>
where
    T: Copy + Zero,
{
    /// window length N
    fn len(&self) -> usize;

    /// store `sample` as the newest slot and return the slot it pushes out
    fn push(&mut self, sample: T) -> T;

    /// one tick of synchronous reset: a zero enters the window
    fn reset_step(&mut self) -> T {
        self.push(T::zero())
    }

    /// window contents, oldest first
    fn window(&self) -> Vec<T>;

    /// register stages between storage and the evicted-sample output
    fn read_latency(&self) -> usize {
        0
    }
}
