use crate::ff::*;

pub const fn bit_width_to_bitmask(width: usize) -> u64 {
    (1u64 << width) - 1
}

pub fn u64_to_fe<F: PrimeField>(value: u64) -> F {
    let mut repr = F::Repr::default();
    repr.as_mut()[0] = value;

    F::from_repr(repr).unwrap()
}

pub fn u128_to_fe<F: PrimeField>(value: u128) -> F {
    let mut repr = F::Repr::default();
    repr.as_mut()[0] = value as u64;
    repr.as_mut()[1] = (value >> 64) as u64;

    F::from_repr(repr).unwrap()
}

pub fn fe_to_u64<F: PrimeField>(value: F) -> u64 {
    let repr = value.into_repr();

    repr.as_ref()[0]
}

pub fn compute_shifts<F: PrimeField>() -> Vec<F> {
    let mut result = Vec::with_capacity(F::CAPACITY as usize);
    let mut el = F::one();
    result.push(el);
    for _ in 1..F::CAPACITY {
        el.double();
        result.push(el);
    }

    result
}
