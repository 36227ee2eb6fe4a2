// ── Device.IPsec.Tunnel.{i}. ──

use crate::macros::parameter_object;
use crate::types::ParameterList;

parameter_object! {
    /// Binds a tunnel interface and the filters whose traffic it carries.
    ///
    /// Rows are created by the CPE, one per `Protect` filter profile.
    pub struct Tunnel("Device.IPsec.Tunnel.{i}.") {
        instance: value u32 => "@instance",
        alias: text String => "Alias",
        /// Path of the `Device.IP.Interface.{i}.` carrying encrypted traffic.
        tunnel_interface: text String => "TunnelInterface",
        tunneled_interface: text String => "TunneledInterface",
        /// Paths of the `Device.IPsec.Filter.{i}.` rows using this tunnel.
        filters: value ParameterList<String> => "Filters",
        stats: object TunnelStats => "Stats",
    }
}

parameter_object! {
    pub struct TunnelStats("Device.IPsec.Tunnel.{i}.Stats.") {
        decryption_errors_received: value u32 => "DecryptionErrorsReceived",
        integrity_errors_received: value u32 => "IntegrityErrorsReceived",
        replay_errors_received: value u32 => "ReplayErrorsReceived",
        policy_errors_received: value u32 => "PolicyErrorsReceived",
        other_errors_received: value u32 => "OtherErrorsReceived",
    }
}
