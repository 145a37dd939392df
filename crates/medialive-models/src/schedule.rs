//! Schedule actions: input switches, SCTE-35 messages, image overlays and
//! other timed changes to a running channel.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::offering::parse_timestamp;
use crate::shape::{settings_union, shape};
use crate::wire_enum::wire_enum;
use crate::InputLocation;

wire_enum! {
    pub enum FollowPoint {
        End = "END",
        Start = "START",
    }
}

wire_enum! {
    pub enum InputTimecodeSource {
        Zerobased = "ZEROBASED",
        Embedded = "EMBEDDED",
    }
}

wire_enum! {
    pub enum LastFrameClippingBehavior {
        ExcludeLastFrame = "EXCLUDE_LAST_FRAME",
        IncludeLastFrame = "INCLUDE_LAST_FRAME",
    }
}

wire_enum! {
    pub enum Scte35SegmentationCancelIndicator {
        SegmentationEventNotCanceled = "SEGMENTATION_EVENT_NOT_CANCELED",
        SegmentationEventCanceled = "SEGMENTATION_EVENT_CANCELED",
    }
}

wire_enum! {
    pub enum Scte35ArchiveAllowedFlag {
        ArchiveNotAllowed = "ARCHIVE_NOT_ALLOWED",
        ArchiveAllowed = "ARCHIVE_ALLOWED",
    }
}

wire_enum! {
    pub enum Scte35DeviceRestrictions {
        None = "NONE",
        RestrictGroup0 = "RESTRICT_GROUP0",
        RestrictGroup1 = "RESTRICT_GROUP1",
        RestrictGroup2 = "RESTRICT_GROUP2",
    }
}

wire_enum! {
    pub enum Scte35NoRegionalBlackoutFlag {
        RegionalBlackout = "REGIONAL_BLACKOUT",
        NoRegionalBlackout = "NO_REGIONAL_BLACKOUT",
    }
}

wire_enum! {
    pub enum Scte35WebDeliveryAllowedFlag {
        WebDeliveryNotAllowed = "WEB_DELIVERY_NOT_ALLOWED",
        WebDeliveryAllowed = "WEB_DELIVERY_ALLOWED",
    }
}

shape! {
    /// Starts the action at a fixed UTC time.
    pub struct FixedModeScheduleActionStartSettings {
        /// UTC time as `yyyy-mm-ddThh:mm:ss.nnnZ`.
        pub time: String => with_time,
    }
}

shape! {
    /// Starts the action relative to another action.
    pub struct FollowModeScheduleActionStartSettings {
        pub follow_point: FollowPoint => with_follow_point,
        /// Action this one follows.
        pub reference_action_name: String => with_reference_action_name,
    }
}

shape! {
    pub struct ImmediateModeScheduleActionStartSettings {}
}

settings_union! {
    /// When a schedule action starts.
    pub enum ScheduleActionStartSettings {
        FixedModeScheduleActionStartSettings(FixedModeScheduleActionStartSettings) = "fixedModeScheduleActionStartSettings",
        FollowModeScheduleActionStartSettings(FollowModeScheduleActionStartSettings) = "followModeScheduleActionStartSettings",
        ImmediateModeScheduleActionStartSettings(ImmediateModeScheduleActionStartSettings) = "immediateModeScheduleActionStartSettings",
    }
}

shape! {
    pub struct HlsId3SegmentTaggingScheduleActionSettings {
        pub tag: String => with_tag,
    }
}

shape! {
    pub struct HlsTimedMetadataScheduleActionSettings {
        /// Base64-encoded ID3 payload.
        pub id3: String => with_id3,
    }
}

shape! {
    pub struct StartTimecode {
        /// `hh:mm:ss:ff`.
        pub timecode: String => with_timecode,
    }
}

shape! {
    pub struct StopTimecode {
        pub last_frame_clipping_behavior: LastFrameClippingBehavior => with_last_frame_clipping_behavior,
        /// `hh:mm:ss:ff` timecode to stop at.
        pub timecode: String => with_timecode,
    }
}

shape! {
    /// Clips a file input to a timecode range.
    pub struct InputClippingSettings {
        pub input_timecode_source: InputTimecodeSource => with_input_timecode_source,
        pub start_timecode: StartTimecode => with_start_timecode,
        pub stop_timecode: StopTimecode => with_stop_timecode,
    }
}

shape! {
    pub struct InputPrepareScheduleActionSettings {
        /// Attachment to prepare; none stops preparing.
        pub input_attachment_name_reference: String => with_input_attachment_name_reference,
        pub input_clipping_settings: InputClippingSettings => with_input_clipping_settings,
        /// Path segments substituted into a dynamic input URL.
        pub url_path: Vec<String> => with_url_path + push_url_path(String),
    }
}

shape! {
    pub struct InputSwitchScheduleActionSettings {
        /// Attachment to switch to.
        pub input_attachment_name_reference: String => with_input_attachment_name_reference,
        pub input_clipping_settings: InputClippingSettings => with_input_clipping_settings,
        /// Path segments appended to a dynamic input's URL.
        pub url_path: Vec<String> => with_url_path + push_url_path(String),
    }
}

shape! {
    pub struct PipelinePauseStateSettings {
        pub pipeline_id: crate::PipelineId => with_pipeline_id,
    }
}

shape! {
    /// Pauses the listed pipelines; an empty list unpauses both.
    pub struct PauseStateScheduleActionSettings {
        pub pipelines: Vec<PipelinePauseStateSettings> => with_pipelines + push_pipeline(PipelinePauseStateSettings),
    }
}

shape! {
    pub struct Scte35ReturnToNetworkScheduleActionSettings {
        pub splice_event_id: i64 where min = 0, max = 4294967295.0 => with_splice_event_id,
    }
}

shape! {
    pub struct Scte35SpliceInsertScheduleActionSettings {
        /// Break duration in 90 kHz ticks; absent means an open-ended break.
        pub duration: i64 where min = 0, max = 8589934591.0 => with_duration,
        pub splice_event_id: i64 where min = 0, max = 4294967295.0 => with_splice_event_id,
    }
}

shape! {
    pub struct Scte35DeliveryRestrictions {
        pub archive_allowed_flag: Scte35ArchiveAllowedFlag => with_archive_allowed_flag,
        pub device_restrictions: Scte35DeviceRestrictions => with_device_restrictions,
        pub no_regional_blackout_flag: Scte35NoRegionalBlackoutFlag => with_no_regional_blackout_flag,
        pub web_delivery_allowed_flag: Scte35WebDeliveryAllowedFlag => with_web_delivery_allowed_flag,
    }
}

shape! {
    /// SCTE-35 segmentation_descriptor.
    pub struct Scte35SegmentationDescriptor {
        pub delivery_restrictions: Scte35DeliveryRestrictions => with_delivery_restrictions,
        pub segment_num: i32 where min = 0, max = 255 => with_segment_num,
        pub segmentation_cancel_indicator: Scte35SegmentationCancelIndicator => with_segmentation_cancel_indicator,
        /// Segment length in 90 kHz ticks.
        pub segmentation_duration: i64 where min = 0, max = 1099511627775.0 => with_segmentation_duration,
        pub segmentation_event_id: i64 where min = 0, max = 4294967295.0 => with_segmentation_event_id,
        /// SCTE-35 segmentation type, e.g. 0x34 for a provider placement opportunity start.
        pub segmentation_type_id: i32 where min = 0, max = 255 => with_segmentation_type_id,
        /// Hex-encoded UPID.
        pub segmentation_upid: String => with_segmentation_upid,
        pub segmentation_upid_type: i32 where min = 0, max = 255 => with_segmentation_upid_type,
        pub segments_expected: i32 where min = 0, max = 255 => with_segments_expected,
        pub sub_segment_num: i32 where min = 0, max = 255 => with_sub_segment_num,
        pub sub_segments_expected: i32 where min = 0, max = 255 => with_sub_segments_expected,
    }
}

shape! {
    pub struct Scte35DescriptorSettings {
        pub segmentation_descriptor_scte35_descriptor_settings: Scte35SegmentationDescriptor => with_segmentation_descriptor_scte35_descriptor_settings,
    }
}

shape! {
    pub struct Scte35Descriptor {
        pub scte35_descriptor_settings: Scte35DescriptorSettings => with_scte35_descriptor_settings,
    }
}

shape! {
    pub struct Scte35TimeSignalScheduleActionSettings {
        pub scte35_descriptors: Vec<Scte35Descriptor> => with_scte35_descriptors + push_scte35_descriptor(Scte35Descriptor),
    }
}

shape! {
    /// Overlays a still image on the video.
    pub struct StaticImageActivateScheduleActionSettings {
        /// Display time in milliseconds; 0 or absent shows it until deactivated.
        pub duration: i32 where min = 0 => with_duration,
        pub fade_in: i32 where min = 0 => with_fade_in,
        pub fade_out: i32 where min = 0 => with_fade_out,
        pub height: i32 where min = 1 => with_height,
        pub image: InputLocation => with_image,
        pub image_x: i32 where min = 0 => with_image_x,
        pub image_y: i32 where min = 0 => with_image_y,
        /// Overlay layer; 0 is the bottom.
        pub layer: i32 where min = 0, max = 7 => with_layer,
        /// Percent, 100 is opaque.
        pub opacity: i32 where min = 0, max = 100 => with_opacity,
        pub width: i32 where min = 1 => with_width,
    }
}

shape! {
    pub struct StaticImageDeactivateScheduleActionSettings {
        pub fade_out: i32 where min = 0 => with_fade_out,
        /// Overlay layer to clear.
        pub layer: i32 where min = 0, max = 7 => with_layer,
    }
}

settings_union! {
    /// What a schedule action does.
    pub enum ScheduleActionSettings {
        HlsId3SegmentTaggingSettings(HlsId3SegmentTaggingScheduleActionSettings) = "hlsId3SegmentTaggingSettings",
        HlsTimedMetadataSettings(HlsTimedMetadataScheduleActionSettings) = "hlsTimedMetadataSettings",
        InputPrepareSettings(InputPrepareScheduleActionSettings) = "inputPrepareSettings",
        InputSwitchSettings(InputSwitchScheduleActionSettings) = "inputSwitchSettings",
        PauseStateSettings(PauseStateScheduleActionSettings) = "pauseStateSettings",
        Scte35ReturnToNetworkSettings(Scte35ReturnToNetworkScheduleActionSettings) = "scte35ReturnToNetworkSettings",
        Scte35SpliceInsertSettings(Scte35SpliceInsertScheduleActionSettings) = "scte35SpliceInsertSettings",
        Scte35TimeSignalSettings(Scte35TimeSignalScheduleActionSettings) = "scte35TimeSignalSettings",
        StaticImageActivateSettings(StaticImageActivateScheduleActionSettings) = "staticImageActivateSettings",
        StaticImageDeactivateSettings(StaticImageDeactivateScheduleActionSettings) = "staticImageDeactivateSettings",
    }
}

shape! {
    /// A named action on a channel's schedule.
    pub struct ScheduleAction {
        /// Unique within the channel's schedule.
        pub action_name: String => with_action_name,
        pub schedule_action_settings: ScheduleActionSettings => with_schedule_action_settings,
        pub schedule_action_start_settings: ScheduleActionStartSettings => with_schedule_action_start_settings,
    }
}

impl FixedModeScheduleActionStartSettings {
    /// Start settings for the given instant, at millisecond precision.
    pub fn at(time: DateTime<Utc>) -> Self {
        Self::new().with_time(time.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    /// Parsed start time; `None` when absent or malformed.
    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.time.as_deref().and_then(parse_timestamp)
    }
}

impl ScheduleActionStartSettings {
    pub fn immediate() -> Self {
        ImmediateModeScheduleActionStartSettings::new().into()
    }

    pub fn fixed(time: DateTime<Utc>) -> Self {
        FixedModeScheduleActionStartSettings::at(time).into()
    }

    pub fn follow(reference_action_name: impl Into<String>, follow_point: FollowPoint) -> Self {
        FollowModeScheduleActionStartSettings::new()
            .with_reference_action_name(reference_action_name)
            .with_follow_point(follow_point)
            .into()
    }
}

impl ScheduleAction {
    /// Fixed start time of the action, if it has one.
    pub fn fixed_start_time(&self) -> Option<DateTime<Utc>> {
        match self.schedule_action_start_settings.as_ref()? {
            ScheduleActionStartSettings::FixedModeScheduleActionStartSettings(fixed) => {
                fixed.start_time()
            }
            _ => None,
        }
    }
}
