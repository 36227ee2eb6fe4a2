// ── TR-135 STBService:1 ──

pub mod dvbt;

pub use dvbt::{
    Bandwidth, CodeRate, Constellation, Dvbt, DvbtService, GuardInterval, Install, InstallStatus,
    LogicalChannel, LogicalChannelConnect, Modulation, ServiceListDatabase, TransmissionMode,
    TunedService,
};

use crate::macros::{parameter_enum, parameter_object};

parameter_enum! {
    pub enum FrontEndStatus {
        Disabled => "Disabled",
        Enabled => "Enabled",
        Error => "Error",
    }
}

parameter_object! {
    /// `STBService.{i}.` -- one set-top box service instance.
    pub struct StbService("STBService.{i}.") {
        instance: value u32 => "@instance",
        enable: value bool => "Enable",
        alias: text String => "Alias",
        components: object Components => "Components",
    }
}

impl StbService {
    /// Element name of the document root.
    pub const ROOT_ELEMENT: &'static str = "STBService";
}

parameter_object! {
    /// Functional components of the STB.
    pub struct Components("STBService.{i}.Components.") {
        front_end_number_of_entries: value u32 => "FrontEndNumberOfEntries",
        front_ends: table FrontEnd => "FrontEnd",
    }
}

parameter_object! {
    /// A tuner/demodulator front end.
    pub struct FrontEnd("STBService.{i}.Components.FrontEnd.{i}.") {
        instance: value u32 => "@instance",
        enable: value bool => "Enable",
        status: value FrontEndStatus => "Status",
        alias: text String => "Alias",
        /// Human readable name, unique within the STB.
        name: text String => "Name",
        dvbt: object Dvbt => "DVBT",
    }
}
