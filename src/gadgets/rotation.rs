use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotationDirection {
    Left,
    Right,
}

fn u64_witness<E: Engine>(num: &Num<E>) -> Option<u64> {
    num.get_value().map(|value| {
        fe_to_biguint(&value)
            .to_u64()
            .expect("value must fit into 64 bits")
    })
}

/// Splits an already range-checked `x` into its bottom `split` bits and its
/// top `64 - split` bits. Both parts are range-checked to their declared
/// widths and the reconstruction `low + high * 2^split = x` is enforced.
#[track_caller]
pub(crate) fn split_at_bit<E: Engine, CS: ConstraintSystem<E>>(
    cs: &mut CS,
    x: &Num<E>,
    split: usize,
) -> Result<(Num<E>, Num<E>), SynthesisError> {
    assert!(split > 0 && split < RANGE_CHECK_BIT_WIDTH);

    let witness = u64_witness(x);
    let low_witness = witness.map(|el| el & bit_width_to_bitmask(split));
    let high_witness = witness.map(|el| el >> split);

    if let (Some(full), Some(low), Some(high)) = (witness, low_witness, high_witness) {
        assert_eq!(
            full,
            (high << split) | low,
            "decomposition does not reconstruct the input"
        );
    }

    let low = Num::alloc(cs, low_witness.map(|el| u64_to_fe(el)))?;
    let high = Num::alloc(cs, high_witness.map(|el| u64_to_fe(el)))?;

    let _ = constraint_bit_length(cs, &low, split)?;
    let _ = constraint_bit_length(cs, &high, RANGE_CHECK_BIT_WIDTH - split)?;

    let shifts = compute_shifts::<E::Fr>();
    let mut minus_one = E::Fr::one();
    minus_one.negate();

    let mut lc = LinearCombination::zero();
    lc.add_assign_number_with_coeff(&low, shifts[0]);
    lc.add_assign_number_with_coeff(&high, shifts[split]);
    lc.add_assign_number_with_coeff(x, minus_one);
    lc.enforce_zero(cs)?;

    Ok((low, high))
}

fn constant_fits_64_bits<E: Engine>(value: &E::Fr) -> Result<u64, SynthesisError> {
    let bits = value.into_repr().num_bits() as usize;
    if bits > RANGE_CHECK_BIT_WIDTH {
        return Err(SynthesisError::Unsatisfiable);
    }

    Ok(fe_to_u64(*value))
}

/// Cyclically rotates the low 64 bits of `x` by `bits` positions.
///
/// The input is range-checked to 64 bits first; rotating an element that does
/// not fit surfaces as that check's failure. The output is a permutation of
/// the checked bits, so it needs no further range check.
#[track_caller]
pub fn rot<E: Engine, CS: ConstraintSystem<E>>(
    cs: &mut CS,
    x: &Num<E>,
    bits: usize,
    direction: RotationDirection,
) -> Result<Num<E>, SynthesisError> {
    assert!(
        bits < RANGE_CHECK_BIT_WIDTH,
        "rotation amount is {}, must be in [0, 64)",
        bits
    );

    // everything below is phrased as a left rotation
    let left_by = match direction {
        RotationDirection::Left => bits,
        RotationDirection::Right => (RANGE_CHECK_BIT_WIDTH - bits) % RANGE_CHECK_BIT_WIDTH,
    };

    match x {
        Num::Constant(value) => {
            let value = constant_fits_64_bits::<E>(value)?;

            Ok(Num::Constant(u64_to_fe(value.rotate_left(left_by as u32))))
        }
        Num::Variable(..) => {
            range_check_64(cs, x)?;
            if left_by == 0 {
                return Ok(x.clone());
            }

            let (low, high) = split_at_bit(cs, x, RANGE_CHECK_BIT_WIDTH - left_by)?;

            let shifts = compute_shifts::<E::Fr>();
            let mut lc = LinearCombination::zero();
            lc.add_assign_number_with_coeff(&low, shifts[left_by]);
            lc.add_assign_number_with_coeff(&high, shifts[0]);
            let result = lc.into_num(cs)?;

            Ok(result)
        }
    }
}

/// Shifts the low 64 bits of `x` left by `bits`, discarding the bits that a
/// rotation would wrap around.
#[track_caller]
pub fn shift_left<E: Engine, CS: ConstraintSystem<E>>(
    cs: &mut CS,
    x: &Num<E>,
    bits: usize,
) -> Result<Num<E>, SynthesisError> {
    assert!(
        bits < RANGE_CHECK_BIT_WIDTH,
        "shift amount is {}, must be in [0, 64)",
        bits
    );

    match x {
        Num::Constant(value) => {
            let value = constant_fits_64_bits::<E>(value)?;

            Ok(Num::Constant(u64_to_fe(value << bits)))
        }
        Num::Variable(..) => {
            range_check_64(cs, x)?;
            if bits == 0 {
                return Ok(x.clone());
            }

            // the high part is bound by the decomposition but not re-added
            let (low, _high) = split_at_bit(cs, x, RANGE_CHECK_BIT_WIDTH - bits)?;

            let shifts = compute_shifts::<E::Fr>();
            let mut lc = LinearCombination::zero();
            lc.add_assign_number_with_coeff(&low, shifts[bits]);
            let result = lc.into_num(cs)?;

            Ok(result)
        }
    }
}

/// Shifts the low 64 bits of `x` right by `bits`; zeroes come in from the top.
#[track_caller]
pub fn shift_right<E: Engine, CS: ConstraintSystem<E>>(
    cs: &mut CS,
    x: &Num<E>,
    bits: usize,
) -> Result<Num<E>, SynthesisError> {
    assert!(
        bits < RANGE_CHECK_BIT_WIDTH,
        "shift amount is {}, must be in [0, 64)",
        bits
    );

    match x {
        Num::Constant(value) => {
            let value = constant_fits_64_bits::<E>(value)?;

            Ok(Num::Constant(u64_to_fe(value >> bits)))
        }
        Num::Variable(..) => {
            range_check_64(cs, x)?;
            if bits == 0 {
                return Ok(x.clone());
            }

            let (_low, high) = split_at_bit(cs, x, bits)?;

            Ok(high)
        }
    }
}
