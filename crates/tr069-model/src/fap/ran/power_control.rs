use crate::macros::parameter_object;

parameter_object! {
    /// Random access power control.
    pub struct PowerControl("FAPService.{i}.CellConfig.UMTS.RAN.PowerControl.") {
        /// dB, -35..-10.
        constant_value: value i32 => "ConstantValue",
        power_ramp_setup: value u32 => "PowerRampSetup",
        preamble_retrans_max: value u32 => "PreambleRetransMax",
        /// Tenths, 2..9.
        persistence_scale_factor: value u32 => "PersistenceScaleFactor",
        m_max: value u32 => "MMax",
        nb01_min: value u32 => "NB01Min",
        nb01_max: value u32 => "NB01Max",
    }
}
