use crate::macros::parameter_object;

parameter_object! {
    /// Discontinuous reception cycle length coefficients.
    pub struct Drx("FAPService.{i}.CellConfig.UMTS.RAN.DRX.") {
        /// 6..9.
        drx_cycle_length_coefficient_cs: value u32 => "DRXCycleLengthCoefficientCS",
        /// 6..9.
        drx_cycle_length_coefficient_ps: value u32 => "DRXCycleLengthCoefficientPS",
        /// 3..9.
        drx_cycle_length_coefficient_utran: value u32 => "DRXCycleLengthCoefficientUTRAN",
    }
}
