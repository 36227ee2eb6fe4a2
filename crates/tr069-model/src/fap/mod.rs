// ── TR-196 FAPService:2 ──
//
// Femto access point (FAP) service objects. Only the UMTS cell
// configuration is modeled: core network identity under `CN` and the
// radio access network parameter groups under `RAN`.

mod cn;
pub mod ran;

pub use cn::{Cn, CsDomain, PlmnType, PsDomain};
pub use ran::{
    CellRestriction, CellSelection, Drx, PowerControl, QualityMeasure, Ran, Rf, RrcTimers,
};

use crate::macros::parameter_object;

parameter_object! {
    /// `FAPService.{i}.` -- one femtocell service instance.
    pub struct FapService("FAPService.{i}.") {
        instance: value u32 => "@instance",
        alias: text String => "Alias",
        cell_config: object CellConfig => "CellConfig",
    }
}

impl FapService {
    /// Element name of the document root.
    pub const ROOT_ELEMENT: &'static str = "FAPService";
}

parameter_object! {
    /// Per-technology cell configuration.
    pub struct CellConfig("FAPService.{i}.CellConfig.") {
        umts: object Umts => "UMTS",
    }
}

parameter_object! {
    /// UMTS cell configuration.
    pub struct Umts("FAPService.{i}.CellConfig.UMTS.") {
        cn: object Cn => "CN",
        ran: object Ran => "RAN",
    }
}
