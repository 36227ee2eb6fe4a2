// ── TR-181 Device:2 root ──
//
// Only the subtrees modeled by this crate hang off the root; everything
// else a CPE reports under `Device.` is ignored on read.

pub mod ipsec;

use crate::macros::parameter_object;

pub use ipsec::{
    ChildSa, ChildSaStats, DoNotFragment, ExpiryAction, Filter, FilterStatus, Ikev2Sa,
    Ikev2SaStats, Ipsec, IpsecProtocol, IpsecStats, IpsecStatus, NatDetected, ProcessingChoice,
    Profile, ReceivedCpAttr, SaStatus, SentCpAttr, Tunnel, TunnelStats,
};

parameter_object! {
    /// `Device.` -- the TR-181 root object.
    pub struct Device("Device.") {
        /// Data model version implemented by the CPE, e.g. `2.11`.
        root_data_model_version: text String => "RootDataModelVersion",
        ipsec: object Ipsec => "IPsec",
    }
}

impl Device {
    /// Element name of the document root.
    pub const ROOT_ELEMENT: &'static str = "Device";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ipsec_is_created_on_demand() {
        let mut device = Device::new().with_root_data_model_version("2.11");
        device.ipsec_mut().set_enable(true);
        assert_eq!(device.root_data_model_version(), Some("2.11"));
        assert_eq!(device.ipsec().and_then(Ipsec::enable), Some(&true));
    }
}
