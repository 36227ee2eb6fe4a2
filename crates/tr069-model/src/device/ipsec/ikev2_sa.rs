// ── Device.IPsec.IKEv2SA.{i}. ──
//
// Read-only snapshots of negotiated IKEv2 SAs and their child SAs. The CPE
// creates and deletes these rows as negotiations come and go.

use crate::macros::{parameter_enum, parameter_object};
use crate::types::DateTime;

parameter_enum! {
    /// Operational status shared by IKEv2 SAs and child SAs
    /// (the interface status enumeration of TR-181).
    pub enum SaStatus {
        Up => "Up",
        Down => "Down",
        Unknown => "Unknown",
        Dormant => "Dormant",
        NotPresent => "NotPresent",
        LowerLayerDown => "LowerLayerDown",
        Error => "Error",
    }
}

parameter_enum! {
    /// Where NAT was detected during IKEv2 negotiation.
    pub enum NatDetected {
        None => "None",
        Local => "Local",
        Remote => "Remote",
        Unsupported => "Unsupported",
    }
}

parameter_object! {
    /// A negotiated IKEv2 security association.
    pub struct Ikev2Sa("Device.IPsec.IKEv2SA.{i}.") {
        instance: value u32 => "@instance",
        status: value SaStatus => "Status",
        alias: text String => "Alias",
        /// Path of the `Device.IPsec.Tunnel.{i}.` this SA serves.
        tunnel: text String => "Tunnel",
        local_address: text String => "LocalAddress",
        remote_address: text String => "RemoteAddress",
        /// One of `IKEv2SupportedEncryptionAlgorithms`.
        encryption_algorithm: text String => "EncryptionAlgorithm",
        /// Bits; 0 when the algorithm has a fixed key length.
        encryption_key_length: value u32 => "EncryptionKeyLength",
        pseudo_random_function: text String => "PseudoRandomFunction",
        integrity_algorithm: text String => "IntegrityAlgorithm",
        diffie_hellman_group_transform: text String => "DiffieHellmanGroupTransform",
        creation_time: value DateTime => "CreationTime",
        nat_detected: value NatDetected => "NATDetected",
        received_cp_attr_number_of_entries: value u32 => "ReceivedCPAttrNumberOfEntries",
        child_sa_number_of_entries: value u32 => "ChildSANumberOfEntries",
        stats: object Ikev2SaStats => "Stats",
        received_cp_attrs: table ReceivedCpAttr => "ReceivedCPAttr",
        child_sas: table ChildSa => "ChildSA",
    }
}

parameter_object! {
    pub struct Ikev2SaStats("Device.IPsec.IKEv2SA.{i}.Stats.") {
        bytes_sent: value u64 => "BytesSent",
        bytes_received: value u64 => "BytesReceived",
        packets_sent: value u64 => "PacketsSent",
        packets_received: value u64 => "PacketsReceived",
        errors_sent: value u32 => "ErrorsSent",
        decryption_errors_received: value u32 => "DecryptionErrorsReceived",
        integrity_errors_received: value u32 => "IntegrityErrorsReceived",
        other_errors_received: value u32 => "OtherErrorsReceived",
    }
}

parameter_object! {
    /// A configuration payload attribute received in a CFG_REPLY.
    pub struct ReceivedCpAttr("Device.IPsec.IKEv2SA.{i}.ReceivedCPAttr.{i}.") {
        instance: value u32 => "@instance",
        attr_type: value u32 => "Type",
        value: text String => "Value",
    }
}

parameter_object! {
    /// A child SA pair (inbound and outbound SPI) negotiated under an IKEv2 SA.
    pub struct ChildSa("Device.IPsec.IKEv2SA.{i}.ChildSA.{i}.") {
        instance: value u32 => "@instance",
        status: value SaStatus => "Status",
        alias: text String => "Alias",
        inbound_spi: value u32 => "InboundSPI",
        outbound_spi: value u32 => "OutboundSPI",
        creation_time: value DateTime => "CreationTime",
        stats: object ChildSaStats => "Stats",
    }
}

parameter_object! {
    pub struct ChildSaStats("Device.IPsec.IKEv2SA.{i}.ChildSA.{i}.Stats.") {
        bytes_sent: value u64 => "BytesSent",
        bytes_received: value u64 => "BytesReceived",
        packets_sent: value u64 => "PacketsSent",
        packets_received: value u64 => "PacketsReceived",
        errors_sent: value u32 => "ErrorsSent",
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
    use crate::types::is_unknown_time;

    #[test]
    fn snapshot_with_child_sas() {
        let created: DateTime = "2024-03-10T08:15:00Z".parse().unwrap();
        let sa = Ikev2Sa::new()
            .with_instance(3)
            .with_status(SaStatus::Up)
            .with_nat_detected(NatDetected::Remote)
            .with_creation_time(created)
            .with_child_sas([
                ChildSa::new().with_instance(1).with_inbound_spi(0xC0FF_EE01),
                ChildSa::new().with_instance(2).with_outbound_spi(0xC0FF_EE02),
            ]);

        assert_eq!(sa.status(), Some(&SaStatus::Up));
        assert_eq!(sa.creation_time(), Some(&created));
        assert_eq!(sa.child_sas().len(), 2);
        assert_eq!(sa.child_sas()[0].inbound_spi(), Some(&0xC0FF_EE01));
    }

    #[test]
    fn unknown_creation_time_is_accepted() {
        let sa = Ikev2Sa::new().with_creation_time("0001-01-01T00:00:00Z".parse().unwrap());
        assert!(sa.creation_time().is_some_and(is_unknown_time));
    }
}
