// ── FAPService.{i}.CellConfig.UMTS.RAN. ──
//
// Radio parameter groups. Value ranges quoted in field docs come from the
// standard; an ACS may send anything and the model stores it unchanged.

mod cell_restriction;
mod cell_selection;
mod drx;
mod power_control;
mod rrc_timers;

pub use cell_restriction::CellRestriction;
pub use cell_selection::{CellSelection, QualityMeasure};
pub use drx::Drx;
pub use power_control::PowerControl;
pub use rrc_timers::RrcTimers;

use crate::macros::parameter_object;
use crate::types::ParameterList;

parameter_object! {
    /// Radio access network configuration of a UMTS FAP.
    pub struct Ran("FAPService.{i}.CellConfig.UMTS.RAN.") {
        /// URA identities the cell belongs to.
        ura_list: value ParameterList<u32> => "URAList",
        ura_in_use: value u32 => "URAInUse",
        /// Radio Network Controller id, 0..65535.
        rnc_id: value u32 => "RNCID",
        /// Cell identity, 0..268435455.
        cell_id: value u32 => "CellID",
        /// Seconds.
        t_rat_c: value u32 => "TRatC",
        t_rafo: value u32 => "TRafo",
        n_rafo: value u32 => "NRafo",
        rf: object Rf => "RF",
        cell_selection: object CellSelection => "CellSelection",
        cell_restriction: object CellRestriction => "CellRestriction",
        drx: object Drx => "DRX",
        power_control: object PowerControl => "PowerControl",
        rrc_timers: object RrcTimers => "RRCTimers",
    }
}

parameter_object! {
    /// Carrier and transmit power configuration.
    pub struct Rf("FAPService.{i}.CellConfig.UMTS.RAN.RF.") {
        /// Candidate downlink UARFCNs.
        uarfcn_dl: value ParameterList<u32> => "UARFCNDL",
        uarfcn_dl_in_use: value u32 => "UARFCNDLInUse",
        uarfcn_ul: value ParameterList<u32> => "UARFCNUL",
        uarfcn_ul_in_use: value u32 => "UARFCNULInUse",
        /// Candidate primary scrambling codes or `low..high` ranges.
        primary_scrambling_code: value ParameterList<String> => "PrimaryScramblingCode",
        primary_scrambling_code_in_use: value u32 => "PrimaryScramblingCodeInUse",
        /// `min:max` in dBm.
        max_fap_tx_power: text String => "MaxFAPTxPower",
        /// dBm x10.
        max_fap_tx_power_in_use: value i32 => "MaxFAPTxPowerInUse",
        pcpich_power: text String => "PCPICHPower",
        pcpich_power_in_use: value i32 => "PCPICHPowerInUse",
    }
}
