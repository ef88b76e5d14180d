//! Output quantization
//!
//! The output word is the top `W_out` bits of the accumulator. Plain truncation
//! rounds toward minus infinity and biases the mean by half an output LSB;
//! round-half-to-even removes the bias at the cost of one pipeline register.
//!
//! Rounding adds a `k`-bit correction before dropping `k` bits:
//! `100..0` when the lowest kept bit is set, `011..1` otherwise.
//! Exact halves then carry into the kept part only when that makes it even.
//! A carry out of the largest output word saturates instead of wrapping.

use crate::{
    traits::FixedInt,
    utils::{bounds, wrap},
    widths::Widths,
};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Rounding {
    Truncate,
    RoundEven,
}

/// round-to-even correction for dropping `shift` bits of `acc`
pub fn correction<A>(acc: A, shift: u32) -> A
where
    A: FixedInt,
{
    debug_assert!(shift >= 1);
    let half = A::one() << (shift - 1) as usize;
    if acc.signed_shr(shift) & A::one() == A::one() {
        half
    } else {
        half - A::one()
    }
}

/// top `output` bits of `acc`
pub fn truncate<A>(acc: A, widths: &Widths) -> A
where
    A: FixedInt,
{
    wrap(acc.signed_shr(widths.shift()), widths.output, widths.signed)
}

/// drop the discarded bits of a corrected accumulator, clamped to the output range
fn saturate<A>(corrected: A, widths: &Widths) -> A
where
    A: FixedInt,
{
    // the correction is positive, only the top can be exceeded
    let (_, hi) = bounds::<A>(widths.output, widths.signed);
    corrected.signed_shr(widths.shift()).min(hi)
}

/// `acc` rounded half to even to the output width
pub fn round<A>(acc: A, widths: &Widths) -> A
where
    A: FixedInt,
{
    saturate(acc + correction(acc, widths.shift()), widths)
}

/// Output stage, registered correction and accumulator copy when rounding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rounder<A> {
    widths: Widths,
    rounding: Rounding,
    correction: A,
    delayed: A,
}

impl<A> Rounder<A>
where
    A: FixedInt,
{
    pub fn new(widths: &Widths, rounding: Rounding) -> Rounder<A> {
        if rounding == Rounding::RoundEven {
            assert!(widths.shift() >= 1);
        }
        Rounder {
            widths: *widths,
            rounding,
            correction: A::zero(),
            delayed: A::zero(),
        }
    }

    pub fn rounding(&self) -> Rounding {
        self.rounding
    }

    /// extra ticks added on top of the accumulator path
    pub fn latency(&self) -> usize {
        match self.rounding {
            Rounding::Truncate => 0,
            Rounding::RoundEven => 1,
        }
    }

    /// one active tick: returns the next output word given the accumulator's current value
    pub fn clock(&mut self, acc: A) -> A {
        match self.rounding {
            Rounding::Truncate => truncate(acc, &self.widths),
            Rounding::RoundEven => {
                // W_acc + 2 <= capacity, the sum cannot overflow
                let out = saturate(self.delayed + self.correction, &self.widths);
                self.correction = correction(acc, self.widths.shift());
                self.delayed = acc;
                out
            }
        }
    }

    pub fn reset(&mut self) {
        self.correction = A::zero();
        self.delayed = A::zero();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widths(signed: bool) -> Widths {
        // two discarded bits: outputs are acc / 4
        Widths {
            input: 8,
            output: 8,
            accumulator: 10,
            signed,
        }
    }

    #[test]
    fn correction_words() {
        assert_eq!(correction(0b0100i64, 2), 0b10);
        assert_eq!(correction(0b1000i64, 2), 0b01);
        assert_eq!(correction(0b1000i64, 3), 0b100);
        assert_eq!(correction(0b0000i64, 3), 0b011);
        assert_eq!(correction(0i64, 1), 0);
        assert_eq!(correction(2i64, 1), 1);
    }

    #[test]
    fn ties_go_to_even() {
        let w = widths(true);
        // 1.5 -> 2, 2.5 -> 2, 3.5 -> 4
        assert_eq!(round(6i64, &w), 2);
        assert_eq!(round(10i64, &w), 2);
        assert_eq!(round(14i64, &w), 4);
        // -1.5 -> -2, -2.5 -> -2, -0.5 -> 0
        assert_eq!(round(-6i64, &w), -2);
        assert_eq!(round(-10i64, &w), -2);
        assert_eq!(round(-2i64, &w), 0);

        let w = widths(false);
        assert_eq!(round(2i64, &w), 0);
        assert_eq!(round(6i64, &w), 2);
    }

    #[test]
    fn non_ties_go_to_nearest() {
        let w = widths(true);
        assert_eq!(round(5i64, &w), 1);
        assert_eq!(round(7i64, &w), 2);
        assert_eq!(round(9i64, &w), 2);
        assert_eq!(round(11i64, &w), 3);
        assert_eq!(round(-5i64, &w), -1);
        assert_eq!(round(-7i64, &w), -2);
    }

    #[test]
    fn full_scale_saturates() {
        // no window growth, two dropped bits
        let w = |signed| Widths {
            input: 8,
            output: 6,
            accumulator: 8,
            signed,
        };
        assert_eq!(round(127i64, &w(true)), 31);
        assert_eq!(round(125i64, &w(true)), 31);
        assert_eq!(round(-128i64, &w(true)), -32);
        assert_eq!(round(255i64, &w(false)), 63);
        assert_eq!(round(0i64, &w(false)), 0);

        let mut r = Rounder::<i64>::new(&w(true), Rounding::RoundEven);
        r.clock(127);
        assert_eq!(r.clock(127), 31);
    }

    #[test]
    fn truncation_floors() {
        let w = widths(true);
        assert_eq!(truncate(7i64, &w), 1);
        assert_eq!(truncate(-1i64, &w), -1);
        assert_eq!(truncate(-4i64, &w), -1);
        assert_eq!(truncate(-5i64, &w), -2);
    }

    #[test]
    fn rounding_adds_a_tick() {
        let w = widths(false);
        let mut trunc = Rounder::<i64>::new(&w, Rounding::Truncate);
        let mut even = Rounder::<i64>::new(&w, Rounding::RoundEven);
        assert_eq!(trunc.latency(), 0);
        assert_eq!(even.latency(), 1);

        assert_eq!(trunc.clock(40), 10);
        assert_eq!(even.clock(40), 0);
        assert_eq!(even.clock(0), 10);

        even.clock(40);
        even.reset();
        assert_eq!(even.clock(0), 0);
    }
}
