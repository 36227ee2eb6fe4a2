use crate::macros::parameter_object;

parameter_object! {
    /// RRC timers (milliseconds unless noted) and constants (3GPP TS 25.331).
    pub struct RrcTimers("FAPService.{i}.CellConfig.UMTS.RAN.RRCTimers.") {
        t300: value u32 => "T300",
        t301: value u32 => "T301",
        t302: value u32 => "T302",
        t304: value u32 => "T304",
        /// Minutes; 0 means infinity.
        t305: value u32 => "T305",
        /// Seconds.
        t307: value u32 => "T307",
        t308: value u32 => "T308",
        /// Seconds.
        t309: value u32 => "T309",
        t310: value u32 => "T310",
        t311: value u32 => "T311",
        /// Seconds.
        t312: value u32 => "T312",
        /// Seconds.
        t313: value u32 => "T313",
        /// Seconds.
        t314: value u32 => "T314",
        /// Seconds.
        t315: value u32 => "T315",
        /// Seconds; 0 means infinity.
        t316: value u32 => "T316",
        /// Seconds.
        t317: value u32 => "T317",
        n300: value u32 => "N300",
        n301: value u32 => "N301",
        n302: value u32 => "N302",
        n304: value u32 => "N304",
        n310: value u32 => "N310",
        n312: value u32 => "N312",
        n313: value u32 => "N313",
        n315: value u32 => "N315",
    }
}
