use crate::traits::FixedInt;

/// ceil(log2(n)), with `clog2(0) == clog2(1) == 0`
pub fn clog2(n: usize) -> u32 {
    if n <= 1 {
        0
    } else {
        usize::BITS - (n - 1).leading_zeros()
    }
}

/// number of bits in the carrier type
pub fn capacity<A>() -> u32
where
    A: FixedInt,
{
    A::zero().count_zeros()
}

/// reinterpret the low `width` bits of `x` as a `width`-bit register value,
/// sign extended when `signed`
pub fn wrap<A>(x: A, width: u32, signed: bool) -> A
where
    A: FixedInt,
{
    let bits = capacity::<A>();
    debug_assert!(width >= 1 && width <= bits);
    if signed {
        let s = bits - width;
        x.signed_shl(s).signed_shr(s)
    } else if width >= bits - 1 {
        x & A::max_value()
    } else {
        x & ((A::one() << width as usize) - A::one())
    }
}

/// smallest and largest value of a `width`-bit word
pub fn bounds<A>(width: u32, signed: bool) -> (A, A)
where
    A: FixedInt,
{
    if signed {
        let half = A::one() << (width - 1) as usize;
        (-half, half - A::one())
    } else {
        (A::zero(), (A::one() << width as usize) - A::one())
    }
}
