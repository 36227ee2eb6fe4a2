// ── Device.IPsec.Profile.{i}. ──

use crate::macros::{parameter_enum, parameter_object};
use crate::types::ParameterList;

parameter_enum! {
    /// IPsec header used to protect child SA traffic.
    pub enum IpsecProtocol {
        Ah => "AH",
        Esp => "ESP",
    }
}

parameter_enum! {
    /// Handling of the DF bit in the outer header of tunneled packets.
    pub enum DoNotFragment {
        Set => "Set",
        Clear => "Clear",
        Copy => "Copy",
    }
}

parameter_enum! {
    /// What to do when an SA reaches its traffic or time limit.
    pub enum ExpiryAction {
        Renew => "Renew",
        Delete => "Delete",
    }
}

parameter_object! {
    /// IPsec treatment policy applied to protected traffic.
    pub struct Profile("Device.IPsec.Profile.{i}.") {
        instance: value u32 => "@instance",
        alias: text String => "Alias",
        /// Upper bound on child SAs negotiated under this profile; 0 means no limit.
        max_child_sas: value u32 => "MaxChildSAs",
        /// Remote IPsec tunnel endpoints, tried in order.
        remote_endpoints: value ParameterList<String> => "RemoteEndpoints",
        forwarding_policy: value u32 => "ForwardingPolicy",
        protocol: value IpsecProtocol => "Protocol",
        /// Path of the credential used for IKEv2 authentication.
        ikev2_authentication_method: text String => "IKEv2AuthenticationMethod",
        ikev2_allowed_encryption_algorithms: value ParameterList<String> => "IKEv2AllowedEncryptionAlgorithms",
        esp_allowed_encryption_algorithms: value ParameterList<String> => "ESPAllowedEncryptionAlgorithms",
        ikev2_allowed_pseudo_random_functions: value ParameterList<String> => "IKEv2AllowedPseudoRandomFunctions",
        ikev2_allowed_integrity_algorithms: value ParameterList<String> => "IKEv2AllowedIntegrityAlgorithms",
        ah_allowed_integrity_algorithms: value ParameterList<String> => "AHAllowedIntegrityAlgorithms",
        esp_allowed_integrity_algorithms: value ParameterList<String> => "ESPAllowedIntegrityAlgorithms",
        ikev2_allowed_diffie_hellman_group_transforms: value ParameterList<String> => "IKEv2AllowedDiffieHellmanGroupTransforms",
        /// Seconds.
        ikev2_dead_peer_detection_timeout: value u32 => "IKEv2DeadPeerDetectionTimeout",
        /// Seconds.
        ikev2_natt_keepalive_timeout: value u32 => "IKEv2NATTKeepaliveTimeout",
        /// Packets; 0 disables replay protection.
        anti_replay_window_size: value u32 => "AntiReplayWindowSize",
        do_not_fragment: value DoNotFragment => "DoNotFragment",
        /// DSCP to mark outer headers with, -1 to copy, -2 to leave unmarked.
        dscp_mark_policy: value i32 => "DSCPMarkPolicy",
        /// Bytes; 0 means no limit.
        ikev2_sa_traffic_limit: value u64 => "IKEv2SATrafficLimit",
        /// Seconds; 0 means no limit.
        ikev2_sa_time_limit: value u32 => "IKEv2SATimeLimit",
        ikev2_sa_expiry_action: value ExpiryAction => "IKEv2SAExpiryAction",
        child_sa_traffic_limit: value u64 => "ChildSATrafficLimit",
        child_sa_time_limit: value u32 => "ChildSATimeLimit",
        child_sa_expiry_action: value ExpiryAction => "ChildSAExpiryAction",
        sent_cp_attr_number_of_entries: value u32 => "SentCPAttrNumberOfEntries",
        /// Configuration payload attributes sent in IKEv2 CFG_REQUEST messages.
        sent_cp_attrs: table SentCpAttr => "SentCPAttr",
    }
}

parameter_object! {
    /// A configuration payload attribute requested from the peer.
    pub struct SentCpAttr("Device.IPsec.Profile.{i}.SentCPAttr.{i}.") {
        instance: value u32 => "@instance",
        enable: value bool => "Enable",
        alias: text String => "Alias",
        /// CP attribute type, 0..32767.
        attr_type: value u32 => "Type",
        /// Attribute value, hex encoded.
        value: text String => "Value",
    }
}
