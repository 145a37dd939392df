//! Elemental Link input devices.

use crate::shape::shape;
use crate::wire_enum::wire_enum;

wire_enum! {
    /// How the device gets its IP address.
    pub enum InputDeviceIpScheme {
        Static = "STATIC",
        Dhcp = "DHCP",
    }
}

wire_enum! {
    pub enum InputDeviceConnectionState {
        Disconnected = "DISCONNECTED",
        Connected = "CONNECTED",
    }
}

wire_enum! {
    pub enum DeviceSettingsSyncState {
        Synced = "SYNCED",
        Syncing = "SYNCING",
    }
}

wire_enum! {
    pub enum DeviceUpdateStatus {
        UpToDate = "UP_TO_DATE",
        NotUpToDate = "NOT_UP_TO_DATE",
    }
}

wire_enum! {
    pub enum InputDeviceType {
        Hd = "HD",
    }
}

wire_enum! {
    pub enum InputDeviceActiveInput {
        Hdmi = "HDMI",
        Sdi = "SDI",
    }
}

wire_enum! {
    pub enum InputDeviceConfiguredInput {
        Auto = "AUTO",
        Hdmi = "HDMI",
        Sdi = "SDI",
    }
}

wire_enum! {
    pub enum InputDeviceState {
        Idle = "IDLE",
        Streaming = "STREAMING",
    }
}

wire_enum! {
    pub enum InputDeviceScanType {
        Interlaced = "INTERLACED",
        Progressive = "PROGRESSIVE",
    }
}

shape! {
    pub struct InputDeviceNetworkSettings {
        pub dns_addresses: Vec<String> => with_dns_addresses + push_dns_address(String),
        pub gateway: String => with_gateway,
        pub ip_address: String => with_ip_address,
        pub ip_scheme: InputDeviceIpScheme => with_ip_scheme,
        pub subnet_mask: String => with_subnet_mask,
    }
}

shape! {
    /// Settings a user may change on a device.
    pub struct InputDeviceConfigurableSettings {
        pub configured_input: InputDeviceConfiguredInput => with_configured_input,
        /// Maximum bitrate in bits/second.
        pub max_bitrate: i32 => with_max_bitrate,
    }
}

shape! {
    /// Settings reported by an HD device.
    pub struct InputDeviceHdSettings {
        pub active_input: InputDeviceActiveInput => with_active_input,
        pub configured_input: InputDeviceConfiguredInput => with_configured_input,
        pub device_state: InputDeviceState => with_device_state,
        /// Detected frame rate of the source.
        pub framerate: f64 => with_framerate,
        pub height: i32 => with_height,
        /// Ceiling for the device encoder, in bits/second.
        pub max_bitrate: i32 => with_max_bitrate,
        pub scan_type: InputDeviceScanType => with_scan_type,
        pub width: i32 => with_width,
    }
}

shape! {
    pub struct InputDeviceSummary {
        pub arn: String => with_arn,
        pub connection_state: InputDeviceConnectionState => with_connection_state,
        pub device_settings_sync_state: DeviceSettingsSyncState => with_device_settings_sync_state,
        pub device_update_status: DeviceUpdateStatus => with_device_update_status,
        pub hd_device_settings: InputDeviceHdSettings => with_hd_device_settings,
        pub id: String => with_id,
        pub mac_address: String => with_mac_address,
        pub name: String => with_name,
        pub network_settings: InputDeviceNetworkSettings => with_network_settings,
        pub serial_number: String => with_serial_number,
        pub r#type: InputDeviceType => with_type,
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::shape::Shape;

    #[test]
    fn test_ip_scheme_wire_values() {
        let settings = InputDeviceNetworkSettings::new()
            .with_ip_scheme(InputDeviceIpScheme::Dhcp)
            .push_dns_address("10.0.0.2");
        assert_eq!(
            settings.to_json().unwrap(),
            r#"{"dnsAddresses":["10.0.0.2"],"ipScheme":"DHCP"}"#
        );
        assert_eq!(InputDeviceIpScheme::from_str("STATIC").unwrap(), InputDeviceIpScheme::Static);
        assert!(InputDeviceIpScheme::from_str("dhcp").is_err());
    }

    #[test]
    fn test_summary_from_json() {
        let json = r#"{
            "id": "hd-123456789abcdef",
            "connectionState": "CONNECTED",
            "type": "HD",
            "hdDeviceSettings": {"framerate": 29.97, "height": 1080, "width": 1920, "scanType": "PROGRESSIVE"}
        }"#;
        let summary = InputDeviceSummary::from_json(json).unwrap();
        assert_eq!(summary.connection_state, Some(InputDeviceConnectionState::Connected));
        let hd = summary.hd_device_settings.unwrap();
        assert_eq!(hd.framerate, Some(29.97));
        assert_eq!(hd.scan_type, Some(InputDeviceScanType::Progressive));
    }
}
