use super::*;
use franklin_crypto::plonk::circuit::bigint::single_table_range_constraint::*;

/// Width of the range this gadget family operates on.
pub const RANGE_CHECK_BIT_WIDTH: usize = 64;

/// Constrains the integer representative of `num` to `num_bits` bits.
///
/// A variable with a known witness that is too wide fails at witness
/// generation. A too-wide constant is rejected eagerly, before any gate is
/// emitted. Returns the table-width chunks of the decomposition.
#[track_caller]
pub fn constraint_bit_length<E: Engine, CS: ConstraintSystem<E>>(
    cs: &mut CS,
    num: &Num<E>,
    num_bits: usize,
) -> Result<Vec<Num<E>>, SynthesisError> {
    assert!(num_bits > 0);
    assert!(num_bits <= E::Fr::CAPACITY as usize);

    let chunks = match num {
        Num::Variable(var) => {
            if let Some(value) = var.get_value() {
                let bits = value.into_repr().num_bits() as usize;
                assert!(
                    bits <= num_bits,
                    "Variable value is {} ({} bits) for {} bits constraint",
                    value,
                    bits,
                    num_bits
                );
            }
            enforce_using_single_column_table(cs, &var, num_bits)?
        }
        Num::Constant(value) => {
            let bits = value.into_repr().num_bits() as usize;
            if bits > num_bits {
                return Err(SynthesisError::Unsatisfiable);
            }
            let mut num_chunks = num_bits / RANGE_CHECK_TABLE_WIDTH;
            if num_bits % RANGE_CHECK_TABLE_WIDTH != 0 {
                num_chunks += 1;
            }
            let chunks = split_into_slices(value, RANGE_CHECK_TABLE_WIDTH, num_chunks);

            chunks.into_iter().map(|el| Num::Constant(el)).collect()
        }
    };

    Ok(chunks)
}

/// Proves that the integer representative of `num` lies in [0, 2^64).
///
/// Elements close to the field modulus (e.g. p - 1) have representatives far
/// wider than 64 bits and fail the check.
#[track_caller]
pub fn range_check_64<E: Engine, CS: ConstraintSystem<E>>(
    cs: &mut CS,
    num: &Num<E>,
) -> Result<(), SynthesisError> {
    let _ = constraint_bit_length(cs, num, RANGE_CHECK_BIT_WIDTH)?;

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::testing::*;

    #[test]
    fn test_range_check_64_on_valid_witnesses() -> Result<(), SynthesisError> {
        let mut rng = deterministic_rng();
        let mut dummy_cs = create_test_assembly();
        let cs = &mut dummy_cs;
        inscribe_range_table(cs)?;

        let mut values = vec![0u64, 1u64, u64::MAX];
        for _ in 0..10 {
            values.push(rng.gen());
        }

        for value in values.into_iter() {
            let num = Num::alloc(cs, Some(u64_to_fe(value)))?;
            range_check_64(cs, &num)?;
        }

        assert!(cs.is_satisfied());

        Ok(())
    }

    #[test]
    fn test_range_check_64_accepts_valid_constant() -> Result<(), SynthesisError> {
        let mut dummy_cs = create_test_assembly();
        let cs = &mut dummy_cs;
        inscribe_range_table(cs)?;

        range_check_64(cs, &Num::Constant(u64_to_fe(u64::MAX)))?;

        assert!(cs.is_satisfied());

        Ok(())
    }

    #[test]
    fn test_range_check_64_rejects_wide_constant() -> Result<(), SynthesisError> {
        let mut dummy_cs = create_test_assembly();
        let cs = &mut dummy_cs;
        inscribe_range_table(cs)?;

        // p - 1
        let mut minus_one = Fr::zero();
        minus_one.sub_assign(&Fr::one());
        assert!(range_check_64(cs, &Num::Constant(minus_one)).is_err());

        // 2^64 is the first value out of range
        let boundary = u128_to_fe(1u128 << 64);
        assert!(range_check_64(cs, &Num::Constant(boundary)).is_err());

        Ok(())
    }

    #[test]
    #[should_panic(expected = "bits constraint")]
    fn test_range_check_64_rejects_wide_witness() {
        let mut dummy_cs = create_test_assembly();
        let cs = &mut dummy_cs;
        inscribe_range_table(cs).unwrap();

        let mut minus_one = Fr::zero();
        minus_one.sub_assign(&Fr::one());
        let num = Num::alloc(cs, Some(minus_one)).unwrap();
        let _ = range_check_64(cs, &num);
    }

    #[test]
    #[should_panic(expected = "bits constraint")]
    fn test_range_check_64_rejects_boundary_witness() {
        let mut dummy_cs = create_test_assembly();
        let cs = &mut dummy_cs;
        inscribe_range_table(cs).unwrap();

        let num = Num::alloc(cs, Some(u128_to_fe(1u128 << 64))).unwrap();
        let _ = range_check_64(cs, &num);
    }

    #[test]
    fn test_constraint_bit_length_of_narrow_values() -> Result<(), SynthesisError> {
        let mut rng = deterministic_rng();
        let mut dummy_cs = create_test_assembly();
        let cs = &mut dummy_cs;
        inscribe_range_table(cs)?;

        for width in [3usize, 16, 21, 33, 48].into_iter() {
            let value: u64 = rng.gen::<u64>() & bit_width_to_bitmask(width);
            let num = Num::alloc(cs, Some(u64_to_fe(value)))?;
            let _ = constraint_bit_length(cs, &num, width)?;
        }

        assert!(cs.is_satisfied());

        Ok(())
    }
}
