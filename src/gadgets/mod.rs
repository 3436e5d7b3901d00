use crate::bellman::SynthesisError;
use crate::ff::*;
use crate::pairing::*;
use crate::utils::*;
use crate::ConstraintSystem;
use franklin_crypto::plonk::circuit::allocated_num::*;
use franklin_crypto::plonk::circuit::bigint::*;
use franklin_crypto::plonk::circuit::linear_combination::*;
use num_bigint::BigUint;
use num_traits::ToPrimitive;

pub mod range;
pub mod rotation;

pub use self::range::{constraint_bit_length, range_check_64, RANGE_CHECK_BIT_WIDTH};
pub use self::rotation::{rot, shift_left, shift_right, RotationDirection};

pub(crate) const RANGE_CHECK_TABLE_WIDTH: usize = 16;

/// Inscribes the default range table all gadgets in this crate decompose
/// against. Must be called once per constraint system before synthesis.
pub fn inscribe_range_table<E: Engine, CS: ConstraintSystem<E>>(
    cs: &mut CS,
) -> Result<(), SynthesisError> {
    crate::inscribe_default_range_table_for_bit_width_over_first_three_columns(
        cs,
        RANGE_CHECK_TABLE_WIDTH,
    )?;

    Ok(())
}
