#![allow(dead_code, unused_imports)]

pub use franklin_crypto;

use franklin_crypto::bellman;
use franklin_crypto::bellman::pairing;
use franklin_crypto::bellman::pairing::ff;

pub(crate) use self::bellman::plonk::better_better_cs::cs::ConstraintSystem;
pub(crate) use franklin_crypto::plonk::circuit::tables::inscribe_default_range_table_for_bit_width_over_first_three_columns;

pub mod gadgets;
pub mod utils;

#[cfg(any(test, feature = "external_testing"))]
pub mod testing;
