//! Channel operations.

use crate::channel::{
    Channel, ChannelEgressEndpoint, ChannelState, ChannelSummary, InputAttachment,
    InputSpecification, PipelineDetail,
};
use crate::common::{ChannelClass, LogLevel, Tags};
use crate::encoder::EncoderSettings;
use crate::output_groups::OutputDestination;
use crate::shape::shape;

/// Declares results that carry a channel's fields at the top level.
macro_rules! channel_result {
    ($( $(#[$meta:meta])* $name:ident ),* $(,)?) => {
        $(
            shape! {
                $(#[$meta])*
                pub struct $name {
                    pub arn: String => with_arn,
                    pub channel_class: ChannelClass => with_channel_class,
                    pub destinations: Vec<OutputDestination> => with_destinations + push_destination(OutputDestination),
                    pub egress_endpoints: Vec<ChannelEgressEndpoint> => with_egress_endpoints + push_egress_endpoint(ChannelEgressEndpoint),
                    pub encoder_settings: EncoderSettings => with_encoder_settings,
                    pub id: String => with_id,
                    pub input_attachments: Vec<InputAttachment> => with_input_attachments + push_input_attachment(InputAttachment),
                    pub input_specification: InputSpecification => with_input_specification,
                    pub log_level: LogLevel => with_log_level,
                    pub name: String => with_name,
                    pub pipeline_details: Vec<PipelineDetail> => with_pipeline_details + push_pipeline_detail(PipelineDetail),
                    pub pipelines_running_count: i32 => with_pipelines_running_count,
                    pub role_arn: String => with_role_arn,
                    pub state: ChannelState => with_state,
                    pub tags: Tags => with_tags,
                }
            }

            impl From<$name> for Channel {
                fn from(result: $name) -> Self {
                    Channel {
                        arn: result.arn,
                        channel_class: result.channel_class,
                        destinations: result.destinations,
                        egress_endpoints: result.egress_endpoints,
                        encoder_settings: result.encoder_settings,
                        id: result.id,
                        input_attachments: result.input_attachments,
                        input_specification: result.input_specification,
                        log_level: result.log_level,
                        name: result.name,
                        pipeline_details: result.pipeline_details,
                        pipelines_running_count: result.pipelines_running_count,
                        role_arn: result.role_arn,
                        state: result.state,
                        tags: result.tags,
                    }
                }
            }
        )*
    };
}

shape! {
    pub struct CreateChannelRequest {
        pub channel_class: ChannelClass => with_channel_class,
        pub destinations: Vec<OutputDestination> => with_destinations + push_destination(OutputDestination),
        pub encoder_settings: EncoderSettings => with_encoder_settings,
        pub input_attachments: Vec<InputAttachment> => with_input_attachments + push_input_attachment(InputAttachment),
        pub input_specification: InputSpecification => with_input_specification,
        pub log_level: LogLevel => with_log_level,
        pub name: String => with_name,
        /// Idempotency token; the client fills it when absent.
        pub request_id: String => with_request_id,
        pub role_arn: String => with_role_arn,
        pub tags: Tags => with_tags,
    }
}

shape! {
    pub struct CreateChannelResult {
        pub channel: Channel => with_channel,
    }
}

shape! {
    pub struct DescribeChannelRequest {
        pub channel_id: String => with_channel_id,
    }
}

shape! {
    pub struct DeleteChannelRequest {
        pub channel_id: String => with_channel_id,
    }
}

shape! {
    pub struct StartChannelRequest {
        pub channel_id: String => with_channel_id,
    }
}

shape! {
    pub struct StopChannelRequest {
        pub channel_id: String => with_channel_id,
    }
}

channel_result! {
    DescribeChannelResult,
    /// Channel as it was when deletion began.
    DeleteChannelResult,
    StartChannelResult,
    StopChannelResult,
}

shape! {
    pub struct ListChannelsRequest {
        pub max_results: i32 where min = 1, max = 1000 => with_max_results,
        pub next_token: String => with_next_token,
    }
}

shape! {
    pub struct ListChannelsResult {
        pub channels: Vec<ChannelSummary> => with_channels + push_channel(ChannelSummary),
        /// Present when more pages remain.
        pub next_token: String => with_next_token,
    }
}

shape! {
    pub struct UpdateChannelRequest {
        pub channel_id: String => with_channel_id,
        pub destinations: Vec<OutputDestination> => with_destinations + push_destination(OutputDestination),
        pub encoder_settings: EncoderSettings => with_encoder_settings,
        pub input_attachments: Vec<InputAttachment> => with_input_attachments + push_input_attachment(InputAttachment),
        pub input_specification: InputSpecification => with_input_specification,
        pub log_level: LogLevel => with_log_level,
        pub name: String => with_name,
        pub role_arn: String => with_role_arn,
    }
}

shape! {
    pub struct UpdateChannelResult {
        pub channel: Channel => with_channel,
    }
}

shape! {
    /// Moves a channel between single and standard pipeline classes.
    pub struct UpdateChannelClassRequest {
        pub channel_class: ChannelClass => with_channel_class,
        pub channel_id: String => with_channel_id,
        /// Replacement destinations; a standard channel needs two URLs per
        /// destination.
        pub destinations: Vec<OutputDestination> => with_destinations + push_destination(OutputDestination),
    }
}

shape! {
    pub struct UpdateChannelClassResult {
        pub channel: Channel => with_channel,
    }
}

impl DescribeChannelRequest {
    pub fn for_channel(channel_id: impl Into<String>) -> Self {
        Self::new().with_channel_id(channel_id)
    }
}
