//! Inputs and input security groups.

use crate::common::Tags;
use crate::shape::shape;
use crate::wire_enum::wire_enum;

wire_enum! {
    pub enum InputType {
        UdpPush = "UDP_PUSH",
        RtpPush = "RTP_PUSH",
        RtmpPush = "RTMP_PUSH",
        RtmpPull = "RTMP_PULL",
        UrlPull = "URL_PULL",
        Mp4File = "MP4_FILE",
        Mediaconnect = "MEDIACONNECT",
        InputDevice = "INPUT_DEVICE",
    }
}

wire_enum! {
    pub enum InputState {
        Creating = "CREATING",
        Detached = "DETACHED",
        Attached = "ATTACHED",
        Deleting = "DELETING",
        Deleted = "DELETED",
    }
}

wire_enum! {
    pub enum InputClass {
        Standard = "STANDARD",
        SinglePipeline = "SINGLE_PIPELINE",
    }
}

wire_enum! {
    /// `DYNAMIC` inputs take their source URL from the schedule.
    pub enum InputSourceType {
        Static = "STATIC",
        Dynamic = "DYNAMIC",
    }
}

wire_enum! {
    pub enum InputSecurityGroupState {
        Idle = "IDLE",
        InUse = "IN_USE",
        Updating = "UPDATING",
        Deleted = "DELETED",
    }
}

shape! {
    pub struct InputDestinationVpc {
        pub availability_zone: String => with_availability_zone,
        pub network_interface_id: String => with_network_interface_id,
    }
}

shape! {
    /// Push endpoint of an input.
    pub struct InputDestination {
        pub ip: String => with_ip,
        pub port: String => with_port,
        /// Push endpoint the encoder listens on.
        pub url: String => with_url,
        pub vpc: InputDestinationVpc => with_vpc,
    }
}

shape! {
    pub struct InputDestinationRequest {
        /// Application and instance for RTMP push inputs, e.g. `live/stream1`.
        pub stream_name: String => with_stream_name,
    }
}

shape! {
    /// Pull source of an input.
    pub struct InputSource {
        pub password_param: String => with_password_param,
        /// Pull URL, e.g. an HLS playlist.
        pub url: String => with_url,
        pub username: String => with_username,
    }
}

shape! {
    pub struct InputSourceRequest {
        pub password_param: String => with_password_param,
        /// Pull URL, e.g. an HLS playlist.
        pub url: String => with_url,
        pub username: String => with_username,
    }
}

shape! {
    pub struct MediaConnectFlow {
        /// ARN of the MediaConnect flow feeding the input.
        pub flow_arn: String => with_flow_arn,
    }
}

shape! {
    pub struct MediaConnectFlowRequest {
        pub flow_arn: String => with_flow_arn,
    }
}

shape! {
    /// Places a push input inside a VPC.
    pub struct InputVpcRequest {
        pub security_group_ids: Vec<String> => with_security_group_ids + push_security_group_id(String),
        /// Two subnets in different availability zones.
        pub subnet_ids: Vec<String> => with_subnet_ids + push_subnet_id(String),
    }
}

shape! {
    pub struct InputDeviceSettings {
        pub id: String => with_id,
    }
}

shape! {
    pub struct InputDeviceRequest {
        pub id: String => with_id,
    }
}

shape! {
    /// A MediaLive input.
    pub struct Input {
        pub arn: String => with_arn,
        pub attached_channels: Vec<String> => with_attached_channels + push_attached_channel(String),
        pub destinations: Vec<InputDestination> => with_destinations + push_destination(InputDestination),
        pub id: String => with_id,
        pub input_class: InputClass => with_input_class,
        pub input_devices: Vec<InputDeviceSettings> => with_input_devices + push_input_device(InputDeviceSettings),
        pub input_source_type: InputSourceType => with_input_source_type,
        pub media_connect_flows: Vec<MediaConnectFlow> => with_media_connect_flows + push_media_connect_flow(MediaConnectFlow),
        pub name: String => with_name,
        /// IAM role used to pull from MediaConnect or VPC sources.
        pub role_arn: String => with_role_arn,
        /// Ids of the `InputSecurityGroup`s guarding push inputs.
        pub security_groups: Vec<String> => with_security_groups + push_security_group(String),
        pub sources: Vec<InputSource> => with_sources + push_source(InputSource),
        pub state: InputState => with_state,
        pub tags: Tags => with_tags,
        pub r#type: InputType => with_type,
    }
}

shape! {
    pub struct InputWhitelistRule {
        pub cidr: String => with_cidr,
    }
}

shape! {
    pub struct InputWhitelistRuleCidr {
        /// IPv4 CIDR, e.g. `10.0.0.0/16`.
        pub cidr: String => with_cidr,
    }
}

shape! {
    /// Allow-list of CIDRs that may push to an input.
    pub struct InputSecurityGroup {
        pub arn: String => with_arn,
        pub id: String => with_id,
        pub inputs: Vec<String> => with_inputs + push_input(String),
        pub state: InputSecurityGroupState => with_state,
        pub tags: Tags => with_tags,
        pub whitelist_rules: Vec<InputWhitelistRule> => with_whitelist_rules + push_whitelist_rule(InputWhitelistRule),
    }
}

impl Input {
    /// True when at least one channel uses this input.
    pub fn is_attached(&self) -> bool {
        self.attached_channels
            .as_ref()
            .is_some_and(|channels| !channels.is_empty())
    }
}

impl InputWhitelistRuleCidr {
    pub fn from_cidr(cidr: impl Into<String>) -> Self {
        Self::new().with_cidr(cidr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Shape;

    #[test]
    fn test_type_member_uses_type_wire_name() {
        let input = Input::new().with_name("studio").with_type(InputType::RtmpPush);
        assert_eq!(input.to_json().unwrap(), r#"{"name":"studio","type":"RTMP_PUSH"}"#);
        assert_eq!(input.to_string(), "{Name: studio,Type: RTMP_PUSH}");
    }

    #[test]
    fn test_sequence_copy_in() {
        let mut groups = vec!["sg-1".to_string()];
        let input = Input::new().with_security_groups(groups.clone());
        groups.push("sg-2".to_string());

        assert_eq!(input.security_groups, Some(vec!["sg-1".to_string()]));
    }

    #[test]
    fn test_is_attached() {
        assert!(!Input::new().is_attached());
        assert!(!Input::new().with_attached_channels(Vec::<String>::new()).is_attached());
        assert!(Input::new().push_attached_channel("1234567").is_attached());
    }

    #[test]
    fn test_tags_render_sorted() {
        let group = InputSecurityGroup::new()
            .with_id("123456")
            .with_tags([
                ("team".to_string(), "live".to_string()),
                ("env".to_string(), "prod".to_string()),
            ]);
        assert_eq!(group.to_string(), "{Id: 123456,Tags: {env=prod, team=live}}");
        assert_eq!(
            group.to_json().unwrap(),
            r#"{"id":"123456","tags":{"env":"prod","team":"live"}}"#
        );
    }

    #[test]
    fn test_unknown_input_type_round_trips() {
        let input = Input::from_json(r#"{"type":"SRT_CALLER","state":"ATTACHED"}"#).unwrap();
        assert!(input.r#type.as_ref().unwrap().is_unknown());
        assert_eq!(input.state, Some(InputState::Attached));
        assert_eq!(input.to_json().unwrap(), r#"{"state":"ATTACHED","type":"SRT_CALLER"}"#);
    }
}
