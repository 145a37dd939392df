//! Input device operations.

use crate::input_device::{
    DeviceSettingsSyncState, DeviceUpdateStatus, InputDeviceConfigurableSettings,
    InputDeviceConnectionState, InputDeviceHdSettings, InputDeviceNetworkSettings,
    InputDeviceSummary, InputDeviceType,
};
use crate::shape::shape;

macro_rules! input_device_result {
    ($( $(#[$meta:meta])* $name:ident ),* $(,)?) => {
        $(
            shape! {
                $(#[$meta])*
                pub struct $name {
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
        )*
    };
}

shape! {
    pub struct DescribeInputDeviceRequest {
        pub input_device_id: String => with_input_device_id,
    }
}

shape! {
    pub struct ListInputDevicesRequest {
        pub max_results: i32 where min = 1, max = 1000 => with_max_results,
        pub next_token: String => with_next_token,
    }
}

shape! {
    pub struct ListInputDevicesResult {
        pub input_devices: Vec<InputDeviceSummary> => with_input_devices + push_input_device(InputDeviceSummary),
        pub next_token: String => with_next_token,
    }
}

shape! {
    pub struct UpdateInputDeviceRequest {
        pub hd_device_settings: InputDeviceConfigurableSettings => with_hd_device_settings,
        pub input_device_id: String => with_input_device_id,
        pub name: String => with_name,
    }
}

input_device_result! {
    DescribeInputDeviceResult,
    /// Device state after the update was accepted; settings may still be
    /// syncing.
    UpdateInputDeviceResult,
}

impl DescribeInputDeviceResult {
    pub fn is_connected(&self) -> bool {
        self.connection_state == Some(InputDeviceConnectionState::Connected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input_device::InputDeviceConfiguredInput;
    use crate::shape::Shape;

    #[test]
    fn test_update_request_json() {
        let request = UpdateInputDeviceRequest::new()
            .with_input_device_id("hd-123456789abcdef")
            .with_hd_device_settings(
                InputDeviceConfigurableSettings::new()
                    .with_configured_input(InputDeviceConfiguredInput::Sdi)
                    .with_max_bitrate(10_000_000),
            );
        assert_eq!(
            request.to_json().unwrap(),
            r#"{"hdDeviceSettings":{"configuredInput":"SDI","maxBitrate":10000000},"inputDeviceId":"hd-123456789abcdef"}"#
        );
    }

    #[test]
    fn test_describe_result_connection() {
        let result = DescribeInputDeviceResult::from_json(
            r#"{"id":"hd-123456789abcdef","connectionState":"CONNECTED","deviceUpdateStatus":"NOT_UP_TO_DATE"}"#,
        )
        .unwrap();
        assert!(result.is_connected());
        assert_eq!(result.device_update_status, Some(DeviceUpdateStatus::NotUpToDate));
        assert!(!DescribeInputDeviceResult::new().is_connected());
    }
}
