//! Channels and the input attachments they encode from.

use crate::audio::AudioSelector;
use crate::captions::CaptionSelector;
use crate::common::{ChannelClass, LogLevel, Tags};
use crate::encoder::EncoderSettings;
use crate::output_groups::OutputDestination;
use crate::shape::shape;
use crate::video::VideoSelector;
use crate::wire_enum::wire_enum;

wire_enum! {
    pub enum ChannelState {
        Creating = "CREATING",
        CreateFailed = "CREATE_FAILED",
        Idle = "IDLE",
        Starting = "STARTING",
        Running = "RUNNING",
        Recovering = "RECOVERING",
        Stopping = "STOPPING",
        Deleting = "DELETING",
        Deleted = "DELETED",
        Updating = "UPDATING",
        UpdateFailed = "UPDATE_FAILED",
    }
}

wire_enum! {
    pub enum InputCodec {
        Mpeg2 = "MPEG2",
        Avc = "AVC",
        Hevc = "HEVC",
    }
}

wire_enum! {
    pub enum InputMaximumBitrate {
        Max10Mbps = "MAX_10_MBPS",
        Max20Mbps = "MAX_20_MBPS",
        Max50Mbps = "MAX_50_MBPS",
    }
}

wire_enum! {
    pub enum InputResolution {
        Sd = "SD",
        Hd = "HD",
        Uhd = "UHD",
    }
}

wire_enum! {
    pub enum InputDeblockFilter {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }
}

wire_enum! {
    pub enum InputDenoiseFilter {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }
}

wire_enum! {
    pub enum InputFilter {
        Auto = "AUTO",
        Disabled = "DISABLED",
        Forced = "FORCED",
    }
}

wire_enum! {
    pub enum InputSourceEndBehavior {
        Continue = "CONTINUE",
        Loop = "LOOP",
    }
}

wire_enum! {
    pub enum NetworkInputServerValidation {
        CheckCryptographyAndValidateName = "CHECK_CRYPTOGRAPHY_AND_VALIDATE_NAME",
        CheckCryptographyOnly = "CHECK_CRYPTOGRAPHY_ONLY",
    }
}

wire_enum! {
    pub enum Smpte2038DataPreference {
        Ignore = "IGNORE",
        Prefer = "PREFER",
    }
}

wire_enum! {
    pub enum InputPreference {
        EqualInputPreference = "EQUAL_INPUT_PREFERENCE",
        PrimaryInputPreferred = "PRIMARY_INPUT_PREFERRED",
    }
}

shape! {
    pub struct ChannelEgressEndpoint {
        /// Public IP the pipeline sends from.
        pub source_ip: String => with_source_ip,
    }
}

shape! {
    /// Runtime state of one pipeline.
    pub struct PipelineDetail {
        /// Input attachment the pipeline is currently encoding.
        pub active_input_attachment_name: String => with_active_input_attachment_name,
        /// Schedule action that selected the active input.
        pub active_input_switch_action_name: String => with_active_input_switch_action_name,
        pub pipeline_id: String => with_pipeline_id,
    }
}

shape! {
    pub struct HlsInputSettings {
        /// Bandwidth in bits/second used to pick the variant stream.
        pub bandwidth: i32 where min = 0 => with_bandwidth,
        /// Segments to buffer before starting playback.
        pub buffer_segments: i32 where min = 0 => with_buffer_segments,
        /// Fetch retries before the input is declared lost.
        pub retries: i32 where min = 0 => with_retries,
        /// Seconds between retries.
        pub retry_interval: i32 where min = 0 => with_retry_interval,
    }
}

shape! {
    pub struct NetworkInputSettings {
        pub hls_input_settings: HlsInputSettings => with_hls_input_settings,
        pub server_validation: NetworkInputServerValidation => with_server_validation,
    }
}

shape! {
    /// Per-attachment decode settings and selectors.
    pub struct InputSettings {
        pub audio_selectors: Vec<AudioSelector> => with_audio_selectors + push_audio_selector(AudioSelector),
        pub caption_selectors: Vec<CaptionSelector> => with_caption_selectors + push_caption_selector(CaptionSelector),
        pub deblock_filter: InputDeblockFilter => with_deblock_filter,
        pub denoise_filter: InputDenoiseFilter => with_denoise_filter,
        pub filter_strength: i32 where min = 1, max = 5 => with_filter_strength,
        pub input_filter: InputFilter => with_input_filter,
        pub network_input_settings: NetworkInputSettings => with_network_input_settings,
        pub smpte2038_data_preference: Smpte2038DataPreference => with_smpte2038_data_preference,
        pub source_end_behavior: InputSourceEndBehavior => with_source_end_behavior,
        pub video_selector: VideoSelector => with_video_selector,
    }
}

shape! {
    pub struct AutomaticInputFailoverSettings {
        pub input_preference: InputPreference => with_input_preference,
        /// Attachment name of the failover input.
        pub secondary_input_id: String => with_secondary_input_id,
    }
}

shape! {
    /// An input attached to a channel under a unique attachment name.
    pub struct InputAttachment {
        pub automatic_input_failover_settings: AutomaticInputFailoverSettings => with_automatic_input_failover_settings,
        /// Name schedule actions use to switch to this input.
        pub input_attachment_name: String => with_input_attachment_name,
        /// Id of the attached `Input`.
        pub input_id: String => with_input_id,
        pub input_settings: InputSettings => with_input_settings,
    }
}

shape! {
    /// Input characteristics used for billing and encoder sizing.
    pub struct InputSpecification {
        pub codec: InputCodec => with_codec,
        pub maximum_bitrate: InputMaximumBitrate => with_maximum_bitrate,
        pub resolution: InputResolution => with_resolution,
    }
}

shape! {
    /// A MediaLive channel.
    pub struct Channel {
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
        /// Pipelines currently running; two for a standard channel.
        pub pipelines_running_count: i32 => with_pipelines_running_count,
        /// IAM role the channel assumes to reach inputs and destinations.
        pub role_arn: String => with_role_arn,
        pub state: ChannelState => with_state,
        pub tags: Tags => with_tags,
    }
}

shape! {
    /// Channel as listed by `ListChannels`; omits encoder settings.
    pub struct ChannelSummary {
        pub arn: String => with_arn,
        pub channel_class: ChannelClass => with_channel_class,
        pub destinations: Vec<OutputDestination> => with_destinations + push_destination(OutputDestination),
        pub egress_endpoints: Vec<ChannelEgressEndpoint> => with_egress_endpoints + push_egress_endpoint(ChannelEgressEndpoint),
        pub id: String => with_id,
        pub input_attachments: Vec<InputAttachment> => with_input_attachments + push_input_attachment(InputAttachment),
        pub input_specification: InputSpecification => with_input_specification,
        pub log_level: LogLevel => with_log_level,
        pub name: String => with_name,
        /// Pipelines currently running.
        pub pipelines_running_count: i32 => with_pipelines_running_count,
        pub role_arn: String => with_role_arn,
        pub state: ChannelState => with_state,
        pub tags: Tags => with_tags,
    }
}

impl ChannelState {
    /// States from which the channel will move on without user action.
    pub fn is_transitional(&self) -> bool {
        matches!(
            self,
            Self::Creating
                | Self::Starting
                | Self::Recovering
                | Self::Stopping
                | Self::Deleting
                | Self::Updating
        )
    }
}

impl Channel {
    /// Finds an input attachment by its attachment name.
    pub fn input_attachment(&self, name: &str) -> Option<&InputAttachment> {
        self.input_attachments
            .as_deref()?
            .iter()
            .find(|attachment| attachment.input_attachment_name.as_deref() == Some(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{AudioLanguageSelection, AudioLanguageSelectionPolicy};
    use crate::shape::Shape;

    fn attachment() -> InputAttachment {
        InputAttachment::new()
            .with_input_attachment_name("primary")
            .with_input_id("1234567")
            .with_input_settings(
                InputSettings::new()
                    .with_source_end_behavior(InputSourceEndBehavior::Continue)
                    .push_audio_selector(
                        AudioSelector::new().with_name("english").with_selector_settings(
                            AudioLanguageSelection::new()
                                .with_language_code("eng")
                                .with_language_selection_policy(AudioLanguageSelectionPolicy::Loose),
                        ),
                    ),
            )
    }

    #[test]
    fn test_input_attachment_lookup() {
        let channel = Channel::new().push_input_attachment(attachment());
        assert!(channel.input_attachment("primary").is_some());
        assert!(channel.input_attachment("backup").is_none());
    }

    #[test]
    fn test_state_transitional() {
        assert!(ChannelState::Starting.is_transitional());
        assert!(!ChannelState::Running.is_transitional());
        assert!(!ChannelState::from("MIGRATING").is_transitional());
    }

    #[test]
    fn test_channel_round_trip() {
        let channel = Channel::new()
            .with_id("8675309")
            .with_channel_class(ChannelClass::SinglePipeline)
            .with_state(ChannelState::Idle)
            .with_input_specification(
                InputSpecification::new()
                    .with_codec(InputCodec::Avc)
                    .with_resolution(InputResolution::Hd)
                    .with_maximum_bitrate(InputMaximumBitrate::Max20Mbps),
            )
            .push_input_attachment(attachment());

        let json = channel.to_json().unwrap();
        assert!(json.contains(r#""channelClass":"SINGLE_PIPELINE""#));
        assert!(json.contains(r#""maximumBitrate":"MAX_20_MBPS""#));

        let parsed = Channel::from_json(&json).unwrap();
        assert_eq!(parsed, channel);
        assert_eq!(parsed.hash_code(), channel.hash_code());
    }

    #[test]
    fn test_filter_strength_range() {
        let settings = InputSettings::new().with_filter_strength(9);
        let attachment = attachment().with_input_settings(settings);
        let err = attachment.validate().unwrap_err();
        assert_eq!(err.violations()[0].path, "inputSettings.filterStrength");
    }
}
