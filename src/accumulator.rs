//! running sum register

use crate::{traits::FixedInt, utils::wrap, widths::Widths};

/// `W_acc`-bit register holding the sum of the window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accumulator<A> {
    value: A,
    width: u32,
    signed: bool,
}

impl<A> Accumulator<A>
where
    A: FixedInt,
{
    pub fn new(widths: &Widths) -> Accumulator<A> {
        Accumulator {
            value: A::zero(),
            width: widths.accumulator,
            signed: widths.signed,
        }
    }

    pub fn value(&self) -> A {
        self.value
    }

    /// `acc - evicted + new`, kept to the register width
    pub fn update(&mut self, new: A, evicted: A) -> A {
        let x = self.value.wrapping_sub(&evicted).wrapping_add(&new);
        self.value = wrap(x, self.width, self.signed);
        self.value
    }

    pub fn reset(&mut self) {
        self.value = A::zero();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widths(signed: bool) -> Widths {
        Widths {
            input: 8,
            output: 8,
            accumulator: 10,
            signed,
        }
    }

    #[test]
    fn incremental_sum() {
        let mut acc = Accumulator::<i64>::new(&widths(true));
        assert_eq!(acc.update(5, 0), 5);
        assert_eq!(acc.update(-7, 0), -2);
        assert_eq!(acc.update(3, 5), -4);
        acc.reset();
        assert_eq!(acc.value(), 0);
    }

    #[test]
    fn wraps_like_a_register() {
        let mut acc = Accumulator::<i64>::new(&widths(false));
        assert_eq!(acc.update(0, 1), 1023);
        assert_eq!(acc.update(1, 0), 0);

        let mut acc = Accumulator::<i64>::new(&widths(true));
        assert_eq!(acc.update(0, 513), 511);
    }
}
