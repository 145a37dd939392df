//! Input operations.

use crate::common::Tags;
use crate::input::{
    Input, InputClass, InputDestination, InputDestinationRequest, InputDeviceRequest,
    InputDeviceSettings, InputSource, InputSourceRequest, InputSourceType, InputState, InputType,
    InputVpcRequest, MediaConnectFlow, MediaConnectFlowRequest,
};
use crate::shape::shape;

shape! {
    pub struct CreateInputRequest {
        pub destinations: Vec<InputDestinationRequest> => with_destinations + push_destination(InputDestinationRequest),
        pub input_devices: Vec<InputDeviceSettings> => with_input_devices + push_input_device(InputDeviceSettings),
        /// Security group ids for push inputs.
        pub input_security_groups: Vec<String> => with_input_security_groups + push_input_security_group(String),
        pub media_connect_flows: Vec<MediaConnectFlowRequest> => with_media_connect_flows + push_media_connect_flow(MediaConnectFlowRequest),
        pub name: String => with_name,
        pub request_id: String => with_request_id,
        pub role_arn: String => with_role_arn,
        pub sources: Vec<InputSourceRequest> => with_sources + push_source(InputSourceRequest),
        pub tags: Tags => with_tags,
        pub r#type: InputType => with_type,
        pub vpc: InputVpcRequest => with_vpc,
    }
}

shape! {
    pub struct CreateInputResult {
        pub input: Input => with_input,
    }
}

shape! {
    pub struct DescribeInputRequest {
        pub input_id: String => with_input_id,
    }
}

shape! {
    pub struct DescribeInputResult {
        pub arn: String => with_arn,
        pub attached_channels: Vec<String> => with_attached_channels + push_attached_channel(String),
        pub destinations: Vec<InputDestination> => with_destinations + push_destination(InputDestination),
        pub id: String => with_id,
        pub input_class: InputClass => with_input_class,
        pub input_devices: Vec<InputDeviceSettings> => with_input_devices + push_input_device(InputDeviceSettings),
        pub input_source_type: InputSourceType => with_input_source_type,
        pub media_connect_flows: Vec<MediaConnectFlow> => with_media_connect_flows + push_media_connect_flow(MediaConnectFlow),
        pub name: String => with_name,
        pub role_arn: String => with_role_arn,
        pub security_groups: Vec<String> => with_security_groups + push_security_group(String),
        pub sources: Vec<InputSource> => with_sources + push_source(InputSource),
        pub state: InputState => with_state,
        pub tags: Tags => with_tags,
        pub r#type: InputType => with_type,
    }
}

shape! {
    pub struct DeleteInputRequest {
        pub input_id: String => with_input_id,
    }
}

shape! {
    pub struct DeleteInputResult {}
}

shape! {
    pub struct ListInputsRequest {
        pub max_results: i32 where min = 1, max = 1000 => with_max_results,
        pub next_token: String => with_next_token,
    }
}

shape! {
    pub struct ListInputsResult {
        pub inputs: Vec<Input> => with_inputs + push_input(Input),
        pub next_token: String => with_next_token,
    }
}

shape! {
    pub struct UpdateInputRequest {
        pub destinations: Vec<InputDestinationRequest> => with_destinations + push_destination(InputDestinationRequest),
        pub input_devices: Vec<InputDeviceRequest> => with_input_devices + push_input_device(InputDeviceRequest),
        pub input_id: String => with_input_id,
        pub input_security_groups: Vec<String> => with_input_security_groups + push_input_security_group(String),
        pub media_connect_flows: Vec<MediaConnectFlowRequest> => with_media_connect_flows + push_media_connect_flow(MediaConnectFlowRequest),
        pub name: String => with_name,
        pub role_arn: String => with_role_arn,
        pub sources: Vec<InputSourceRequest> => with_sources + push_source(InputSourceRequest),
    }
}

shape! {
    pub struct UpdateInputResult {
        pub input: Input => with_input,
    }
}

impl From<DescribeInputResult> for Input {
    fn from(result: DescribeInputResult) -> Self {
        Input {
            arn: result.arn,
            attached_channels: result.attached_channels,
            destinations: result.destinations,
            id: result.id,
            input_class: result.input_class,
            input_devices: result.input_devices,
            input_source_type: result.input_source_type,
            media_connect_flows: result.media_connect_flows,
            name: result.name,
            role_arn: result.role_arn,
            security_groups: result.security_groups,
            sources: result.sources,
            state: result.state,
            tags: result.tags,
            r#type: result.r#type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Shape;

    #[test]
    fn test_create_push_input() {
        let request = CreateInputRequest::new()
            .with_name("studio-feed")
            .with_type(InputType::RtmpPush)
            .push_input_security_group("123456")
            .push_destination(InputDestinationRequest::new().with_stream_name("live/primary"));
        let json = request.to_json().unwrap();
        assert!(json.contains(r#""type":"RTMP_PUSH""#));
        assert!(json.contains(r#""inputSecurityGroups":["123456"]"#));
    }

    #[test]
    fn test_delete_result_is_empty() {
        let result = DeleteInputResult::from_json("{}").unwrap();
        assert!(result.is_empty());
        assert_eq!(result.to_string(), "{}");
    }

    #[test]
    fn test_describe_result_into_input() {
        let result = DescribeInputResult::new()
            .with_id("1234567")
            .push_attached_channel("8675309");
        let input = Input::from(result);
        assert!(input.is_attached());
    }
}
