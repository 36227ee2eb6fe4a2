// ── Device.IPsec. ──
//
// IPsec SPD (Security Policy Database) configuration and the state of
// negotiated IKEv2 security associations. Filters select traffic, profiles
// describe its treatment, tunnels bind the two to interfaces, and IKEv2SA
// rows are read-only snapshots reported by the CPE.

mod filter;
mod ikev2_sa;
mod profile;
mod tunnel;

pub use filter::{Filter, FilterStatus, ProcessingChoice};
pub use ikev2_sa::{ChildSa, ChildSaStats, Ikev2Sa, Ikev2SaStats, NatDetected, ReceivedCpAttr, SaStatus};
pub use profile::{DoNotFragment, ExpiryAction, IpsecProtocol, Profile, SentCpAttr};
pub use tunnel::{Tunnel, TunnelStats};

use crate::macros::{parameter_enum, parameter_object};
use crate::types::ParameterList;

parameter_enum! {
    /// `Device.IPsec.Status`.
    pub enum IpsecStatus {
        Disabled => "Disabled",
        Enabled => "Enabled",
        Error => "Error",
    }
}

parameter_object! {
    /// `Device.IPsec.` -- IPsec capabilities, SPD and SA state.
    pub struct Ipsec("Device.IPsec.") {
        /// Enables or disables IPsec on the device.
        enable: value bool => "Enable",
        status: value IpsecStatus => "Status",
        /// Whether Authentication Header (AH) is supported in addition to ESP.
        ah_supported: value bool => "AHSupported",
        ikev2_supported_encryption_algorithms: value ParameterList<String> => "IKEv2SupportedEncryptionAlgorithms",
        esp_supported_encryption_algorithms: value ParameterList<String> => "ESPSupportedEncryptionAlgorithms",
        ikev2_supported_pseudo_random_functions: value ParameterList<String> => "IKEv2SupportedPseudoRandomFunctions",
        supported_integrity_algorithms: value ParameterList<String> => "SupportedIntegrityAlgorithms",
        supported_diffie_hellman_group_transforms: value ParameterList<String> => "SupportedDiffieHellmanGroupTransforms",
        max_filter_entries: value u32 => "MaxFilterEntries",
        max_profile_entries: value u32 => "MaxProfileEntries",
        filter_number_of_entries: value u32 => "FilterNumberOfEntries",
        profile_number_of_entries: value u32 => "ProfileNumberOfEntries",
        tunnel_number_of_entries: value u32 => "TunnelNumberOfEntries",
        ikev2_sa_number_of_entries: value u32 => "IKEv2SANumberOfEntries",
        stats: object IpsecStats => "Stats",
        /// SPD selection criteria, ordered by `Order`.
        filters: table Filter => "Filter",
        profiles: table Profile => "Profile",
        tunnels: table Tunnel => "Tunnel",
        ikev2_sas: table Ikev2Sa => "IKEv2SA",
    }
}

parameter_object! {
    /// `Device.IPsec.Stats.` -- global counters.
    pub struct IpsecStats("Device.IPsec.Stats.") {
        /// Failed IKEv2 negotiations.
        negotiation_failures: value u32 => "NegotiationFailures",
        bytes_sent: value u64 => "BytesSent",
        bytes_received: value u64 => "BytesReceived",
        packets_sent: value u64 => "PacketsSent",
        packets_received: value u64 => "PacketsReceived",
        errors_sent: value u32 => "ErrorsSent",
        unknown_spi_errors_received: value u32 => "UnknownSPIErrorsReceived",
        decryption_errors_received: value u32 => "DecryptionErrorsReceived",
        integrity_errors_received: value u32 => "IntegrityErrorsReceived",
        replay_errors_received: value u32 => "ReplayErrorsReceived",
        policy_errors_received: value u32 => "PolicyErrorsReceived",
        other_errors_received: value u32 => "OtherErrorsReceived",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn supported_algorithms_are_lists() {
        let ipsec = Ipsec::new().with_ikev2_supported_encryption_algorithms(
            "AES-CBC,AES-CTR".parse().unwrap(),
        );
        let algs = ipsec.ikev2_supported_encryption_algorithms().unwrap();
        assert!(algs.contains(&"AES-CTR".to_owned()));
        assert_eq!(algs.len(), 2);
    }

    #[test]
    fn stats_mut_creates_counters() {
        let mut ipsec = Ipsec::new();
        ipsec.stats_mut().set_bytes_sent(1_500).set_negotiation_failures(2);
        let stats = ipsec.stats().unwrap();
        assert_eq!(stats.bytes_sent(), Some(&1_500));
        assert_eq!(stats.negotiation_failures(), Some(&2));
        assert_eq!(stats.bytes_received(), None);
    }
}
