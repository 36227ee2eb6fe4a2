// ── STBService.{i}.Components.FrontEnd.{i}.DVBT. ──
//
// DVB-T tuner state: current modulation, the tuned service, channel scan
// control and the service list built by the last scan.

use crate::macros::{parameter_enum, parameter_object};

parameter_enum! {
    pub enum Bandwidth {
        Mhz8 => "8MHz",
        Mhz7 => "7MHz",
        Mhz6 => "6MHz",
        Mhz5 => "5MHz",
        Auto => "Auto",
    }
}

parameter_enum! {
    pub enum Constellation {
        Qpsk => "QPSK",
        Qam16 => "16-QAM",
        Qam64 => "64-QAM",
        Auto => "Auto",
    }
}

parameter_enum! {
    /// Convolutional code rate of the HP or LP stream.
    pub enum CodeRate {
        Rate1_2 => "1/2",
        Rate2_3 => "2/3",
        Rate3_4 => "3/4",
        Rate5_6 => "5/6",
        Rate7_8 => "7/8",
        Auto => "Auto",
    }
}

parameter_enum! {
    pub enum GuardInterval {
        Gi1_32 => "1/32",
        Gi1_16 => "1/16",
        Gi1_8 => "1/8",
        Gi1_4 => "1/4",
        Auto => "Auto",
    }
}

parameter_enum! {
    pub enum TransmissionMode {
        Mode2k => "2k",
        Mode4k => "4k",
        Mode8k => "8k",
        Auto => "Auto",
    }
}

parameter_enum! {
    pub enum InstallStatus {
        Disabled => "Disabled",
        Enabled => "Enabled",
        Error => "Error",
    }
}

parameter_object! {
    /// DVB-T front end.
    pub struct Dvbt("STBService.{i}.Components.FrontEnd.{i}.DVBT.") {
        modulation: object Modulation => "Modulation",
        service: object TunedService => "Service",
        install: object Install => "Install",
        service_list_database: object ServiceListDatabase => "ServiceListDatabase",
        logical_channel_connect: object LogicalChannelConnect => "LogicalChannelConnect",
    }
}

parameter_object! {
    /// Modulation of the currently tuned multiplex.
    pub struct Modulation("STBService.{i}.Components.FrontEnd.{i}.DVBT.Modulation.") {
        /// Centre frequency in kHz.
        frequency: value u32 => "Frequency",
        channel_bandwidth: value Bandwidth => "ChannelBandwidth",
        constellation: value Constellation => "Constellation",
        /// `Non-hierarchical` or the alpha value, e.g. `a=2`.
        hierarchical_information: text String => "HierarchicalInformation",
        code_rate_hp: value CodeRate => "CodeRateHP",
        code_rate_lp: value CodeRate => "CodeRateLP",
        guard_interval: value GuardInterval => "GuardInterval",
        transmission_mode: value TransmissionMode => "TransmissionMode",
        /// Signal to noise ratio in dB.
        snr: value u32 => "SNR",
        /// Bit error rate after Viterbi, x10^-9.
        ber: value u32 => "BER",
        /// Channel bit error rate before Viterbi, x10^-9.
        cber: value u32 => "CBER",
        locked: value bool => "Locked",
    }
}

parameter_object! {
    /// The service currently received.
    pub struct TunedService("STBService.{i}.Components.FrontEnd.{i}.DVBT.Service.") {
        /// Path of a `ServiceListDatabase.LogicalChannel.{i}.` row.
        current_logical_channel: text String => "CurrentLogicalChannel",
        current_service: text String => "CurrentService",
    }
}

parameter_object! {
    /// Channel scan control.
    pub struct Install("STBService.{i}.Components.FrontEnd.{i}.DVBT.Install.") {
        /// Setting to true starts a scan.
        start: value bool => "Start",
        status: value InstallStatus => "Status",
        /// Percent complete.
        progress: value u32 => "Progress",
        /// kHz.
        start_frequency: value u32 => "StartFrequency",
        /// kHz.
        stop_frequency: value u32 => "StopFrequency",
    }
}

parameter_object! {
    /// Services found by the last scan, grouped by logical channel number.
    pub struct ServiceListDatabase("STBService.{i}.Components.FrontEnd.{i}.DVBT.ServiceListDatabase.") {
        reset: value bool => "Reset",
        total_services: value u32 => "TotalServices",
        logical_channel_number_of_entries: value u32 => "LogicalChannelNumberOfEntries",
        logical_channels: table LogicalChannel => "LogicalChannel",
    }
}

parameter_object! {
    pub struct LogicalChannel("STBService.{i}.Components.FrontEnd.{i}.DVBT.ServiceListDatabase.LogicalChannel.{i}.") {
        instance: value u32 => "@instance",
        /// Unique within the database.
        logical_channel_number: value u32 => "LogicalChannelNumber",
        service_number_of_entries: value u32 => "ServiceNumberOfEntries",
        services: table DvbtService => "Service",
    }
}

parameter_object! {
    /// One service carrying a logical channel; several may compete.
    pub struct DvbtService("STBService.{i}.Components.FrontEnd.{i}.DVBT.ServiceListDatabase.LogicalChannel.{i}.Service.{i}.") {
        instance: value u32 => "@instance",
        /// `original_network_id.transport_stream_id.service_id`, hex.
        dvb_id: text String => "DvbId",
        frequency: value u32 => "Frequency",
        ber: value u32 => "BER",
        cber: value u32 => "CBER",
        /// Whether this service is used when the channel is selected.
        preferred: value bool => "Preferred",
    }
}

parameter_object! {
    /// Writing a logical channel number tunes to it.
    pub struct LogicalChannelConnect("STBService.{i}.Components.FrontEnd.{i}.DVBT.LogicalChannelConnect.") {
        logical_channel_number: value u32 => "LogicalChannelNumber",
        /// Service actually tuned for the channel, same form as `DvbId` rows.
        dvb_id: text String => "DvbId",
    }
}
