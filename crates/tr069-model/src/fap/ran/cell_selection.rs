use crate::macros::{parameter_enum, parameter_object};

parameter_enum! {
    /// Measure used for cell selection and reselection.
    pub enum QualityMeasure {
        EcN0 => "Ec/N0",
        Rscp => "RSCP",
    }
}

parameter_object! {
    /// Cell selection and reselection parameters (3GPP TS 25.304).
    pub struct CellSelection("FAPService.{i}.CellConfig.UMTS.RAN.CellSelection.") {
        quality_measure_cpich: value QualityMeasure => "QualityMeasureCPICH",
        /// dB, -24..0.
        q_qual_min: value i32 => "QqualMin",
        q_qual_min_offset: value u32 => "QqualMinOffset",
        /// dBm, -115..-25 in steps of 2.
        q_rx_lev_min: value i32 => "QRxLevMin",
        delta_q_rx_lev_min: value i32 => "DeltaQRxLevMin",
        q_rx_lev_min_offset: value u32 => "QRxLevMinOffset",
        /// dB, 0..40.
        q_hyst_1s: value u32 => "QHyst1s",
        q_hyst_2s: value u32 => "QHyst2s",
        /// Seconds, 0..31.
        t_reselections: value u32 => "TReselections",
        s_intrasearch: value i32 => "SIntrasearch",
        s_intersearch: value i32 => "SIntersearch",
        s_search_hcs: value i32 => "SSearchHCS",
        s_search_rat: value i32 => "SSearchRAT",
        s_hcs_rat: value i32 => "SHCSRAT",
        s_limit_search_rat: value i32 => "SLimitSearchRAT",
        /// Maximum UE transmit power on RACH, dBm.
        ue_tx_pwr_max_rach: value i32 => "UETxPwrMaxRACH",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn quality_measure_keeps_slash() {
        assert_eq!(QualityMeasure::EcN0.to_string(), "Ec/N0");
        assert_eq!("RSCP".parse::<QualityMeasure>().unwrap(), QualityMeasure::Rscp);
    }

    #[test]
    fn negative_thresholds() {
        let sel = CellSelection::new()
            .with_q_rx_lev_min(-115)
            .with_q_qual_min(-24)
            .with_ue_tx_pwr_max_rach(21);
        assert_eq!(sel.q_rx_lev_min(), Some(&-115));
        assert_eq!(sel.q_qual_min(), Some(&-24));
        assert_eq!(sel.ue_tx_pwr_max_rach(), Some(&21));
    }
}
