// ── Device.IPsec.Filter.{i}. ──

use crate::macros::{parameter_enum, parameter_object};

parameter_enum! {
    /// `Device.IPsec.Filter.{i}.Status`.
    pub enum FilterStatus {
        Disabled => "Disabled",
        Enabled => "Enabled",
        /// The filter is enabled but its criteria or profile are invalid.
        ErrorMisconfigured => "Error_Misconfigured",
        Error => "Error",
    }
}

parameter_enum! {
    /// What happens to traffic matched by a filter.
    pub enum ProcessingChoice {
        /// Forward without IPsec processing.
        Bypass => "Bypass",
        /// Discard.
        Drop => "Drop",
        /// Apply the referenced `Profile`.
        Protect => "Protect",
    }
}

parameter_object! {
    /// IPsec SPD selection criteria.
    ///
    /// Rows are unique on `Alias` and on the combination of every
    /// selection parameter; `Order` must be unique and contiguous from 1.
    /// Port and protocol values of -1 match anything.
    pub struct Filter("Device.IPsec.Filter.{i}.") {
        instance: value u32 => "@instance",
        enable: value bool => "Enable",
        status: value FilterStatus => "Status",
        /// Position of this filter in the SPD, 1-based.
        order: value u32 => "Order",
        alias: text String => "Alias",
        all_interfaces: value bool => "AllInterfaces",
        /// Path of an IP-layer interface; ignored when `AllInterfaces` is set.
        interface: text String => "Interface",
        dest_ip: text String => "DestIP",
        dest_mask: text String => "DestMask",
        dest_ip_exclude: value bool => "DestIPExclude",
        source_ip: text String => "SourceIP",
        source_mask: text String => "SourceMask",
        source_ip_exclude: value bool => "SourceIPExclude",
        /// IP protocol number, -1..255.
        protocol: value i32 => "Protocol",
        protocol_exclude: value bool => "ProtocolExclude",
        /// Destination port, -1..65535.
        dest_port: value i32 => "DestPort",
        /// Upper bound of a destination port range, -1 for a single port.
        dest_port_range_max: value i32 => "DestPortRangeMax",
        dest_port_exclude: value bool => "DestPortExclude",
        source_port: value i32 => "SourcePort",
        source_port_range_max: value i32 => "SourcePortRangeMax",
        source_port_exclude: value bool => "SourcePortExclude",
        processing_choice: value ProcessingChoice => "ProcessingChoice",
        /// Path of the `Device.IPsec.Profile.{i}.` applied when protecting.
        profile: text String => "Profile",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protect_filter_builder() {
        let filter = Filter::new()
            .with_instance(1)
            .with_enable(true)
            .with_order(1)
            .with_alias("cpe-to-hq")
            .with_all_interfaces(true)
            .with_dest_ip("10.0.0.0")
            .with_dest_mask("255.0.0.0")
            .with_protocol(17)
            .with_dest_port(500)
            .with_processing_choice(ProcessingChoice::Protect)
            .with_profile("Device.IPsec.Profile.1");

        assert_eq!(filter.instance(), Some(&1));
        assert_eq!(filter.dest_ip(), Some("10.0.0.0"));
        assert_eq!(filter.processing_choice(), Some(&ProcessingChoice::Protect));
        assert_eq!(filter.profile(), Some("Device.IPsec.Profile.1"));
        assert_eq!(filter.source_ip(), None);
    }

    #[test]
    fn status_spelling() {
        assert_eq!(FilterStatus::ErrorMisconfigured.as_str(), "Error_Misconfigured");
    }
}
