// ── FAPService.{i}.CellConfig.UMTS.CN. ──

use crate::macros::{parameter_enum, parameter_object};
use crate::types::ParameterList;

parameter_enum! {
    pub enum PlmnType {
        GsmMap => "GSM-MAP",
        Ansi41 => "ANSI-41",
    }
}

parameter_object! {
    /// Core network identity and domain parameters broadcast by the cell.
    pub struct Cn("FAPService.{i}.CellConfig.UMTS.CN.") {
        plmn_type: value PlmnType => "PLMNType",
        /// MCC followed by MNC, 5 or 6 digits.
        plmn_id: text String => "PLMNID",
        equiv_plmn_id: text String => "EquivPLMNID",
        /// Service Area Code, 0..65535.
        sac: value u32 => "SAC",
        broadcast_sac: value bool => "BroadcastSAC",
        /// Candidate `LAC:RAC` pairs the FAP may pick from.
        lac_rac: value ParameterList<String> => "LACRAC",
        lac_in_use: value u32 => "LACInUse",
        rac_in_use: value u32 => "RACInUse",
        cs_domain: object CsDomain => "CSDomain",
        ps_domain: object PsDomain => "PSDomain",
    }
}

parameter_object! {
    pub struct CsDomain("FAPService.{i}.CellConfig.UMTS.CN.CSDomain.") {
        /// Periodic location update timer in seconds, 0 disables.
        t3212: value u32 => "T3212",
        imsi_attach_detach_enable: value bool => "IMSIAttachDetachEnable",
    }
}

parameter_object! {
    pub struct PsDomain("FAPService.{i}.CellConfig.UMTS.CN.PSDomain.") {
        network_mode_operation_combined: value bool => "NetworkModeOperationCombined",
    }
}
