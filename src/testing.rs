use crate::bellman::plonk::better_better_cs::cs::*;
pub use crate::pairing::bn256::{Bn256, Fr};
pub(crate) use rand::{Rng, SeedableRng, XorShiftRng};

pub fn deterministic_rng() -> XorShiftRng {
    XorShiftRng::from_seed([0x5dbe6259, 0x8d313d76, 0x3237db17, 0xe5bc0654])
}

pub fn create_test_assembly(
) -> TrivialAssembly<Bn256, PlonkCsWidth4WithNextStepAndCustomGatesParams, Width4MainGateWithDNext>
{
    TrivialAssembly::<
        Bn256,
        PlonkCsWidth4WithNextStepAndCustomGatesParams,
        Width4MainGateWithDNext,
    >::new()
}
