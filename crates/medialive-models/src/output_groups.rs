//! Output groups, outputs and output destinations.
//!
//! An `OutputGroup` picks one packaging type through `OutputGroupSettings` and
//! lists its `Output`s; every output carries the matching `OutputSettings`
//! member and references audio, video and caption descriptions by name.

use crate::captions::CaptionLanguageMapping;
use crate::containers::{M2tsSettings, M3u8Settings, RawSettings};
use crate::shape::{settings_union, shape};
use crate::wire_enum::wire_enum;
use crate::{InputLocation, OutputLocationRef};

wire_enum! {
    pub enum HlsAdMarkers {
        Adobe = "ADOBE",
        Elemental = "ELEMENTAL",
        ElementalScte35 = "ELEMENTAL_SCTE35",
    }
}

wire_enum! {
    pub enum HlsCaptionLanguageSetting {
        Insert = "INSERT",
        None = "NONE",
        Omit = "OMIT",
    }
}

wire_enum! {
    pub enum HlsClientCache {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }
}

wire_enum! {
    pub enum HlsCodecSpecification {
        Rfc4281 = "RFC_4281",
        Rfc6381 = "RFC_6381",
    }
}

wire_enum! {
    pub enum HlsDirectoryStructure {
        SingleDirectory = "SINGLE_DIRECTORY",
        SubdirectoryPerStream = "SUBDIRECTORY_PER_STREAM",
    }
}

wire_enum! {
    pub enum HlsEncryptionType {
        Aes128 = "AES128",
        SampleAes = "SAMPLE_AES",
    }
}

wire_enum! {
    pub enum HlsId3SegmentTaggingState {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }
}

wire_enum! {
    pub enum IFrameOnlyPlaylistType {
        Disabled = "DISABLED",
        Standard = "STANDARD",
    }
}

wire_enum! {
    pub enum InputLossActionForHlsOut {
        EmitOutput = "EMIT_OUTPUT",
        PauseOutput = "PAUSE_OUTPUT",
    }
}

wire_enum! {
    pub enum HlsIvInManifest {
        Exclude = "EXCLUDE",
        Include = "INCLUDE",
    }
}

wire_enum! {
    pub enum HlsIvSource {
        Explicit = "EXPLICIT",
        FollowsSegmentNumber = "FOLLOWS_SEGMENT_NUMBER",
    }
}

wire_enum! {
    pub enum HlsManifestCompression {
        Gzip = "GZIP",
        None = "NONE",
    }
}

wire_enum! {
    pub enum HlsManifestDurationFormat {
        FloatingPoint = "FLOATING_POINT",
        Integer = "INTEGER",
    }
}

wire_enum! {
    pub enum HlsMode {
        Live = "LIVE",
        Vod = "VOD",
    }
}

wire_enum! {
    pub enum HlsOutputSelection {
        ManifestsAndSegments = "MANIFESTS_AND_SEGMENTS",
        SegmentsOnly = "SEGMENTS_ONLY",
        VariantManifestsAndSegments = "VARIANT_MANIFESTS_AND_SEGMENTS",
    }
}

wire_enum! {
    pub enum HlsProgramDateTime {
        Exclude = "EXCLUDE",
        Include = "INCLUDE",
    }
}

wire_enum! {
    pub enum HlsRedundantManifest {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }
}

wire_enum! {
    pub enum HlsSegmentationMode {
        UseInputSegmentation = "USE_INPUT_SEGMENTATION",
        UseSegmentDuration = "USE_SEGMENT_DURATION",
    }
}

wire_enum! {
    pub enum HlsStreamInfResolution {
        Exclude = "EXCLUDE",
        Include = "INCLUDE",
    }
}

wire_enum! {
    pub enum HlsTimedMetadataId3Frame {
        None = "NONE",
        Priv = "PRIV",
        Tdrm = "TDRM",
    }
}

wire_enum! {
    pub enum HlsTsFileMode {
        SegmentedFiles = "SEGMENTED_FILES",
        SingleFile = "SINGLE_FILE",
    }
}

wire_enum! {
    pub enum HlsAkamaiHttpTransferMode {
        Chunked = "CHUNKED",
        NonChunked = "NON_CHUNKED",
    }
}

wire_enum! {
    pub enum HlsMediaStoreStorageClass {
        Temporal = "TEMPORAL",
    }
}

wire_enum! {
    pub enum HlsWebdavHttpTransferMode {
        Chunked = "CHUNKED",
        NonChunked = "NON_CHUNKED",
    }
}

wire_enum! {
    pub enum HlsH265PackagingType {
        Hev1 = "HEV1",
        Hvc1 = "HVC1",
    }
}

wire_enum! {
    pub enum AudioOnlyHlsTrackType {
        AlternateAudioAutoSelect = "ALTERNATE_AUDIO_AUTO_SELECT",
        AlternateAudioAutoSelectDefault = "ALTERNATE_AUDIO_AUTO_SELECT_DEFAULT",
        AlternateAudioNotAutoSelect = "ALTERNATE_AUDIO_NOT_AUTO_SELECT",
        AudioOnlyVariantStream = "AUDIO_ONLY_VARIANT_STREAM",
    }
}

wire_enum! {
    pub enum SmoothGroupAudioOnlyTimecodeControl {
        Passthrough = "PASSTHROUGH",
        UseConfiguredClock = "USE_CONFIGURED_CLOCK",
    }
}

wire_enum! {
    pub enum SmoothGroupCertificateMode {
        SelfSigned = "SELF_SIGNED",
        VerifyAuthenticity = "VERIFY_AUTHENTICITY",
    }
}

wire_enum! {
    pub enum SmoothGroupEventIdMode {
        NoEventId = "NO_EVENT_ID",
        UseConfigured = "USE_CONFIGURED",
        UseTimestamp = "USE_TIMESTAMP",
    }
}

wire_enum! {
    pub enum SmoothGroupEventStopBehavior {
        None = "NONE",
        SendEos = "SEND_EOS",
    }
}

wire_enum! {
    pub enum InputLossActionForMsSmoothOut {
        EmitOutput = "EMIT_OUTPUT",
        PauseOutput = "PAUSE_OUTPUT",
    }
}

wire_enum! {
    pub enum SmoothGroupSegmentationMode {
        UseInputSegmentation = "USE_INPUT_SEGMENTATION",
        UseSegmentDuration = "USE_SEGMENT_DURATION",
    }
}

wire_enum! {
    pub enum SmoothGroupSparseTrackType {
        None = "NONE",
        Scte35 = "SCTE_35",
    }
}

wire_enum! {
    pub enum SmoothGroupStreamManifestBehavior {
        DoNotSend = "DO_NOT_SEND",
        Send = "SEND",
    }
}

wire_enum! {
    pub enum SmoothGroupTimestampOffsetMode {
        UseConfiguredOffset = "USE_CONFIGURED_OFFSET",
        UseEventStartDate = "USE_EVENT_START_DATE",
    }
}

wire_enum! {
    pub enum MsSmoothH265PackagingType {
        Hev1 = "HEV1",
        Hvc1 = "HVC1",
    }
}

wire_enum! {
    pub enum RtmpAdMarkers {
        OnCuePointScte35 = "ON_CUE_POINT_SCTE35",
    }
}

wire_enum! {
    pub enum AuthenticationScheme {
        Akamai = "AKAMAI",
        Common = "COMMON",
    }
}

wire_enum! {
    pub enum RtmpCacheFullBehavior {
        DisconnectImmediately = "DISCONNECT_IMMEDIATELY",
        WaitForServer = "WAIT_FOR_SERVER",
    }
}

wire_enum! {
    pub enum RtmpCaptionData {
        All = "ALL",
        Field1608 = "FIELD1_608",
        Field1AndField2608 = "FIELD1_AND_FIELD2_608",
    }
}

wire_enum! {
    pub enum InputLossActionForRtmpOut {
        EmitOutput = "EMIT_OUTPUT",
        PauseOutput = "PAUSE_OUTPUT",
    }
}

wire_enum! {
    pub enum RtmpOutputCertificateMode {
        SelfSigned = "SELF_SIGNED",
        VerifyAuthenticity = "VERIFY_AUTHENTICITY",
    }
}

wire_enum! {
    pub enum UdpTimedMetadataId3Frame {
        None = "NONE",
        Priv = "PRIV",
        Tdrm = "TDRM",
    }
}

wire_enum! {
    pub enum InputLossActionForUdpOut {
        DropProgram = "DROP_PROGRAM",
        DropTs = "DROP_TS",
        EmitProgram = "EMIT_PROGRAM",
    }
}

wire_enum! {
    pub enum FecOutputIncludeFec {
        Column = "COLUMN",
        ColumnAndRow = "COLUMN_AND_ROW",
    }
}

shape! {
    pub struct HlsAkamaiSettings {
        /// Seconds to wait before reconnecting.
        pub connection_retry_interval: i32 where min = 0 => with_connection_retry_interval,
        /// Seconds of segments kept for resend after an outage.
        pub filecache_duration: i32 where min = 0, max = 600 => with_filecache_duration,
        pub http_transfer_mode: HlsAkamaiHttpTransferMode => with_http_transfer_mode,
        pub num_retries: i32 where min = 0 => with_num_retries,
        /// Seconds before restarting after an outage.
        pub restart_delay: i32 where min = 0, max = 15 => with_restart_delay,
        pub salt: String => with_salt,
        pub token: String => with_token,
    }
}

shape! {
    pub struct HlsBasicPutSettings {
        /// Seconds to wait before reconnecting.
        pub connection_retry_interval: i32 where min = 0 => with_connection_retry_interval,
        /// Seconds of segments kept for resend after an outage.
        pub filecache_duration: i32 where min = 0, max = 600 => with_filecache_duration,
        pub num_retries: i32 where min = 0 => with_num_retries,
        /// Seconds before restarting after an outage.
        pub restart_delay: i32 where min = 0, max = 15 => with_restart_delay,
    }
}

shape! {
    pub struct HlsMediaStoreSettings {
        pub connection_retry_interval: i32 where min = 0 => with_connection_retry_interval,
        pub filecache_duration: i32 where min = 0, max = 600 => with_filecache_duration,
        pub media_store_storage_class: HlsMediaStoreStorageClass => with_media_store_storage_class,
        pub num_retries: i32 where min = 0 => with_num_retries,
        pub restart_delay: i32 where min = 0, max = 15 => with_restart_delay,
    }
}

shape! {
    pub struct HlsWebdavSettings {
        pub connection_retry_interval: i32 where min = 0 => with_connection_retry_interval,
        pub filecache_duration: i32 where min = 0, max = 600 => with_filecache_duration,
        pub http_transfer_mode: HlsWebdavHttpTransferMode => with_http_transfer_mode,
        pub num_retries: i32 where min = 0 => with_num_retries,
        pub restart_delay: i32 where min = 0, max = 15 => with_restart_delay,
    }
}

settings_union! {
    /// How HLS segments and manifests reach the CDN.
    pub enum HlsCdnSettings {
        HlsAkamaiSettings(HlsAkamaiSettings) = "hlsAkamaiSettings",
        HlsBasicPutSettings(HlsBasicPutSettings) = "hlsBasicPutSettings",
        HlsMediaStoreSettings(HlsMediaStoreSettings) = "hlsMediaStoreSettings",
        HlsWebdavSettings(HlsWebdavSettings) = "hlsWebdavSettings",
    }
}

shape! {
    pub struct StaticKeySettings {
        pub key_provider_server: InputLocation => with_key_provider_server,
        /// 32-character hex string.
        pub static_key_value: String => with_static_key_value,
    }
}

settings_union! {
    pub enum KeyProviderSettings {
        StaticKeySettings(StaticKeySettings) = "staticKeySettings",
    }
}

shape! {
    /// Apple HLS output group.
    pub struct HlsGroupSettings {
        pub ad_markers: Vec<HlsAdMarkers> => with_ad_markers + push_ad_marker(HlsAdMarkers),
        /// Prepended to segment URLs in the main manifest.
        pub base_url_content: String => with_base_url_content,
        /// Prefix for segment URLs in the second pipeline's manifests.
        pub base_url_content1: String => with_base_url_content1,
        /// Prefix for child manifest URLs in the main manifest.
        pub base_url_manifest: String => with_base_url_manifest,
        pub base_url_manifest1: String => with_base_url_manifest1,
        pub caption_language_mappings: Vec<CaptionLanguageMapping> => with_caption_language_mappings + push_caption_language_mapping(CaptionLanguageMapping),
        pub caption_language_setting: HlsCaptionLanguageSetting => with_caption_language_setting,
        pub client_cache: HlsClientCache => with_client_cache,
        pub codec_specification: HlsCodecSpecification => with_codec_specification,
        /// 32-character hex IV, used when `iv_source` is `EXPLICIT`.
        pub constant_iv: String => with_constant_iv,
        pub destination: OutputLocationRef => with_destination,
        pub directory_structure: HlsDirectoryStructure => with_directory_structure,
        pub encryption_type: HlsEncryptionType => with_encryption_type,
        pub hls_cdn_settings: HlsCdnSettings => with_hls_cdn_settings,
        pub hls_id3_segment_tagging: HlsId3SegmentTaggingState => with_hls_id3_segment_tagging,
        pub i_frame_only_playlists: IFrameOnlyPlaylistType => with_i_frame_only_playlists,
        /// Segments listed in the manifest in `LIVE` mode.
        pub index_n_segments: i32 where min = 3 => with_index_n_segments,
        pub input_loss_action: InputLossActionForHlsOut => with_input_loss_action,
        pub iv_in_manifest: HlsIvInManifest => with_iv_in_manifest,
        pub iv_source: HlsIvSource => with_iv_source,
        /// Segments kept on the destination in `LIVE` mode.
        pub keep_segments: i32 where min = 1 => with_keep_segments,
        pub key_format: String => with_key_format,
        pub key_format_versions: String => with_key_format_versions,
        pub key_provider_settings: KeyProviderSettings => with_key_provider_settings,
        pub manifest_compression: HlsManifestCompression => with_manifest_compression,
        pub manifest_duration_format: HlsManifestDurationFormat => with_manifest_duration_format,
        /// Shortest segment allowed, in seconds.
        pub min_segment_length: i32 where min = 0 => with_min_segment_length,
        pub mode: HlsMode => with_mode,
        pub output_selection: HlsOutputSelection => with_output_selection,
        pub program_date_time: HlsProgramDateTime => with_program_date_time,
        /// Seconds between `EXT-X-PROGRAM-DATE-TIME` tags.
        pub program_date_time_period: i32 where min = 0, max = 3600 => with_program_date_time_period,
        pub redundant_manifest: HlsRedundantManifest => with_redundant_manifest,
        /// Target segment length in seconds.
        pub segment_length: i32 where min = 1 => with_segment_length,
        pub segmentation_mode: HlsSegmentationMode => with_segmentation_mode,
        pub segments_per_subdirectory: i32 where min = 1 => with_segments_per_subdirectory,
        pub stream_inf_resolution: HlsStreamInfResolution => with_stream_inf_resolution,
        pub timed_metadata_id3_frame: HlsTimedMetadataId3Frame => with_timed_metadata_id3_frame,
        /// Seconds between ID3 timed metadata frames.
        pub timed_metadata_id3_period: i32 where min = 0 => with_timed_metadata_id3_period,
        /// Offset added to segment timestamps.
        pub timestamp_delta_milliseconds: i32 where min = 0 => with_timestamp_delta_milliseconds,
        pub ts_file_mode: HlsTsFileMode => with_ts_file_mode,
    }
}

shape! {
    /// Microsoft Smooth Streaming output group.
    pub struct MsSmoothGroupSettings {
        /// Id sent in sparse track SCTE-35 messages.
        pub acquisition_point_id: String => with_acquisition_point_id,
        pub audio_only_timecode_control: SmoothGroupAudioOnlyTimecodeControl => with_audio_only_timecode_control,
        pub certificate_mode: SmoothGroupCertificateMode => with_certificate_mode,
        /// Seconds to wait before retrying a failed connection.
        pub connection_retry_interval: i32 where min = 0 => with_connection_retry_interval,
        pub destination: OutputLocationRef => with_destination,
        pub event_id: String => with_event_id,
        pub event_id_mode: SmoothGroupEventIdMode => with_event_id_mode,
        pub event_stop_behavior: SmoothGroupEventStopBehavior => with_event_stop_behavior,
        /// Seconds of fragments kept for resend after an outage.
        pub filecache_duration: i32 where min = 0 => with_filecache_duration,
        /// Fragment length in seconds.
        pub fragment_length: i32 where min = 1 => with_fragment_length,
        pub input_loss_action: InputLossActionForMsSmoothOut => with_input_loss_action,
        pub num_retries: i32 where min = 0 => with_num_retries,
        pub restart_delay: i32 where min = 0 => with_restart_delay,
        pub segmentation_mode: SmoothGroupSegmentationMode => with_segmentation_mode,
        /// Delay before sending each fragment.
        pub send_delay_ms: i32 where min = 0, max = 10000 => with_send_delay_ms,
        pub sparse_track_type: SmoothGroupSparseTrackType => with_sparse_track_type,
        pub stream_manifest_behavior: SmoothGroupStreamManifestBehavior => with_stream_manifest_behavior,
        /// Offset as an ISO 8601 timestamp, used with `USE_CONFIGURED_OFFSET`.
        pub timestamp_offset: String => with_timestamp_offset,
        pub timestamp_offset_mode: SmoothGroupTimestampOffsetMode => with_timestamp_offset_mode,
    }
}

shape! {
    pub struct ArchiveGroupSettings {
        pub destination: OutputLocationRef => with_destination,
        /// Seconds per archive file.
        pub rollover_interval: i32 where min = 1 => with_rollover_interval,
    }
}

shape! {
    pub struct FrameCaptureGroupSettings {
        pub destination: OutputLocationRef => with_destination,
    }
}

shape! {
    pub struct MediaPackageGroupSettings {
        pub destination: OutputLocationRef => with_destination,
    }
}

shape! {
    pub struct MultiplexGroupSettings {}
}

shape! {
    pub struct RtmpGroupSettings {
        pub ad_markers: Vec<RtmpAdMarkers> => with_ad_markers + push_ad_marker(RtmpAdMarkers),
        pub authentication_scheme: AuthenticationScheme => with_authentication_scheme,
        pub cache_full_behavior: RtmpCacheFullBehavior => with_cache_full_behavior,
        /// Cache length in milliseconds.
        pub cache_length: i32 where min = 30 => with_cache_length,
        pub caption_data: RtmpCaptionData => with_caption_data,
        pub input_loss_action: InputLossActionForRtmpOut => with_input_loss_action,
        /// Seconds before reconnecting after a dropped connection.
        pub restart_delay: i32 where min = 0 => with_restart_delay,
    }
}

shape! {
    pub struct UdpGroupSettings {
        pub input_loss_action: InputLossActionForUdpOut => with_input_loss_action,
        pub timed_metadata_id3_frame: UdpTimedMetadataId3Frame => with_timed_metadata_id3_frame,
        pub timed_metadata_id3_period: i32 where min = 0 => with_timed_metadata_id3_period,
    }
}

settings_union! {
    /// Packaging type of an output group.
    pub enum OutputGroupSettings {
        ArchiveGroupSettings(ArchiveGroupSettings) = "archiveGroupSettings",
        FrameCaptureGroupSettings(FrameCaptureGroupSettings) = "frameCaptureGroupSettings",
        HlsGroupSettings(HlsGroupSettings) = "hlsGroupSettings",
        MediaPackageGroupSettings(MediaPackageGroupSettings) = "mediaPackageGroupSettings",
        MsSmoothGroupSettings(MsSmoothGroupSettings) = "msSmoothGroupSettings",
        MultiplexGroupSettings(MultiplexGroupSettings) = "multiplexGroupSettings",
        RtmpGroupSettings(RtmpGroupSettings) = "rtmpGroupSettings",
        UdpGroupSettings(UdpGroupSettings) = "udpGroupSettings",
    }
}

settings_union! {
    pub enum ArchiveContainerSettings {
        M2tsSettings(M2tsSettings) = "m2tsSettings",
        RawSettings(RawSettings) = "rawSettings",
    }
}

shape! {
    pub struct ArchiveOutputSettings {
        pub container_settings: ArchiveContainerSettings => with_container_settings,
        /// File extension, e.g. `m2ts`.
        pub extension: String => with_extension,
        pub name_modifier: String => with_name_modifier,
    }
}

shape! {
    pub struct FrameCaptureOutputSettings {
        pub name_modifier: String => with_name_modifier,
    }
}

shape! {
    pub struct AudioOnlyHlsSettings {
        /// `GROUP-ID` of the rendition group this track joins.
        pub audio_group_id: String => with_audio_group_id,
        pub audio_only_image: InputLocation => with_audio_only_image,
        pub audio_track_type: AudioOnlyHlsTrackType => with_audio_track_type,
    }
}

shape! {
    pub struct StandardHlsSettings {
        /// Comma-separated audio group ids this rendition references.
        pub audio_rendition_sets: String => with_audio_rendition_sets,
        pub m3u8_settings: M3u8Settings => with_m3u8_settings,
    }
}

settings_union! {
    pub enum HlsSettings {
        AudioOnlyHlsSettings(AudioOnlyHlsSettings) = "audioOnlyHlsSettings",
        StandardHlsSettings(StandardHlsSettings) = "standardHlsSettings",
    }
}

shape! {
    pub struct HlsOutputSettings {
        pub h265_packaging_type: HlsH265PackagingType => with_h265_packaging_type,
        pub hls_settings: HlsSettings => with_hls_settings,
        /// Appended to the base file name; must be unique within the group.
        pub name_modifier: String => with_name_modifier,
        pub segment_modifier: String => with_segment_modifier,
    }
}

shape! {
    pub struct MediaPackageOutputSettings {}
}

shape! {
    pub struct MsSmoothOutputSettings {
        pub h265_packaging_type: MsSmoothH265PackagingType => with_h265_packaging_type,
        pub name_modifier: String => with_name_modifier,
    }
}

shape! {
    pub struct MultiplexOutputSettings {
        pub destination: OutputLocationRef => with_destination,
    }
}

shape! {
    pub struct RtmpOutputSettings {
        pub certificate_mode: RtmpOutputCertificateMode => with_certificate_mode,
        /// Seconds between connection attempts.
        pub connection_retry_interval: i32 where min = 1 => with_connection_retry_interval,
        pub destination: OutputLocationRef => with_destination,
        pub num_retries: i32 where min = 0 => with_num_retries,
    }
}

shape! {
    /// SMPTE 2022-1 forward error correction.
    pub struct FecOutputSettings {
        pub column_depth: i32 where min = 4, max = 20 => with_column_depth,
        pub include_fec: FecOutputIncludeFec => with_include_fec,
        /// Packets per FEC row.
        pub row_length: i32 where min = 1, max = 20 => with_row_length,
    }
}

settings_union! {
    pub enum UdpContainerSettings {
        M2tsSettings(M2tsSettings) = "m2tsSettings",
    }
}

shape! {
    pub struct UdpOutputSettings {
        /// UDP output buffering in milliseconds.
        pub buffer_msec: i32 where min = 0, max = 10000 => with_buffer_msec,
        pub container_settings: UdpContainerSettings => with_container_settings,
        pub destination: OutputLocationRef => with_destination,
        pub fec_output_settings: FecOutputSettings => with_fec_output_settings,
    }
}

settings_union! {
    /// Per-output settings; the member must match the group's packaging type.
    pub enum OutputSettings {
        ArchiveOutputSettings(ArchiveOutputSettings) = "archiveOutputSettings",
        FrameCaptureOutputSettings(FrameCaptureOutputSettings) = "frameCaptureOutputSettings",
        HlsOutputSettings(HlsOutputSettings) = "hlsOutputSettings",
        MediaPackageOutputSettings(MediaPackageOutputSettings) = "mediaPackageOutputSettings",
        MsSmoothOutputSettings(MsSmoothOutputSettings) = "msSmoothOutputSettings",
        MultiplexOutputSettings(MultiplexOutputSettings) = "multiplexOutputSettings",
        RtmpOutputSettings(RtmpOutputSettings) = "rtmpOutputSettings",
        UdpOutputSettings(UdpOutputSettings) = "udpOutputSettings",
    }
}

shape! {
    pub struct Output {
        /// Names of `AudioDescription`s in this output.
        pub audio_description_names: Vec<String> => with_audio_description_names + push_audio_description_name(String),
        /// Names of `CaptionDescription`s in this output.
        pub caption_description_names: Vec<String> => with_caption_description_names + push_caption_description_name(String),
        pub output_name: String => with_output_name,
        pub output_settings: OutputSettings => with_output_settings,
        /// Name of the `VideoDescription` this output carries.
        pub video_description_name: String => with_video_description_name,
    }
}

shape! {
    pub struct OutputGroup {
        /// Display name; ignored by the encoder.
        pub name: String => with_name,
        pub output_group_settings: OutputGroupSettings => with_output_group_settings,
        pub outputs: Vec<Output> => with_outputs + push_output(Output),
    }
}

shape! {
    pub struct OutputDestinationSettings {
        pub password_param: String => with_password_param,
        /// RTMP stream key.
        pub stream_name: String => with_stream_name,
        pub url: String => with_url,
        pub username: String => with_username,
    }
}

shape! {
    pub struct MediaPackageOutputDestinationSettings {
        /// MediaPackage channel receiving the output.
        pub channel_id: String => with_channel_id,
    }
}

shape! {
    pub struct MultiplexProgramChannelDestinationSettings {
        pub multiplex_id: String => with_multiplex_id,
        pub program_name: String => with_program_name,
    }
}

shape! {
    /// A channel destination; standard channels carry two `settings`
    /// entries, one per pipeline.
    pub struct OutputDestination {
        pub id: String => with_id,
        pub media_package_settings: Vec<MediaPackageOutputDestinationSettings> => with_media_package_settings + push_media_package_setting(MediaPackageOutputDestinationSettings),
        pub multiplex_settings: MultiplexProgramChannelDestinationSettings => with_multiplex_settings,
        pub settings: Vec<OutputDestinationSettings> => with_settings + push_setting(OutputDestinationSettings),
    }
}

impl OutputGroupSettings {
    /// Destination reference of the group, for groups that write to one.
    pub fn destination(&self) -> Option<&OutputLocationRef> {
        match self {
            Self::ArchiveGroupSettings(settings) => settings.destination.as_ref(),
            Self::FrameCaptureGroupSettings(settings) => settings.destination.as_ref(),
            Self::HlsGroupSettings(settings) => settings.destination.as_ref(),
            Self::MediaPackageGroupSettings(settings) => settings.destination.as_ref(),
            Self::MsSmoothGroupSettings(settings) => settings.destination.as_ref(),
            Self::MultiplexGroupSettings(_)
            | Self::RtmpGroupSettings(_)
            | Self::UdpGroupSettings(_)
            | Self::Unknown(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Shape;

    fn hls_group() -> HlsGroupSettings {
        HlsGroupSettings::new()
            .with_destination(OutputLocationRef::to("hls-dest"))
            .push_ad_marker(HlsAdMarkers::ElementalScte35)
            .with_segment_length(6)
            .with_mode(HlsMode::Live)
            .with_hls_cdn_settings(HlsBasicPutSettings::new().with_num_retries(10))
    }

    #[test]
    fn test_hls_group_json() {
        let json = hls_group().to_json().unwrap();
        assert_eq!(
            json,
            concat!(
                r#"{"adMarkers":["ELEMENTAL_SCTE35"],"destination":{"destinationRefId":"hls-dest"},"#,
                r#""hlsCdnSettings":{"hlsBasicPutSettings":{"numRetries":10}},"mode":"LIVE","segmentLength":6}"#
            )
        );
    }

    #[test]
    fn test_i_frame_only_wire_name() {
        let json = HlsGroupSettings::new()
            .with_i_frame_only_playlists(IFrameOnlyPlaylistType::Standard)
            .to_json()
            .unwrap();
        assert_eq!(json, r#"{"iFrameOnlyPlaylists":"STANDARD"}"#);
    }

    #[test]
    fn test_output_settings_union_round_trip() {
        let output = Output::new()
            .with_output_name("720p")
            .with_video_description_name("video_720p")
            .push_audio_description_name("audio_1")
            .with_output_settings(
                HlsOutputSettings::new()
                    .with_name_modifier("_720p")
                    .with_hls_settings(StandardHlsSettings::new().with_m3u8_settings(M3u8Settings::new())),
            );

        let parsed = Output::from_json(&output.to_json().unwrap()).unwrap();
        assert_eq!(parsed, output);
        assert!(matches!(
            parsed.output_settings,
            Some(OutputSettings::HlsOutputSettings(_))
        ));
    }

    #[test]
    fn test_group_destination() {
        let settings = OutputGroupSettings::from(hls_group());
        assert_eq!(
            settings.destination().and_then(|d| d.destination_ref_id.as_deref()),
            Some("hls-dest")
        );
        assert!(OutputGroupSettings::from(UdpGroupSettings::new()).destination().is_none());
        assert_eq!(settings.member_name(), "hlsGroupSettings");
    }

    #[test]
    fn test_ms_smooth_rendering() {
        let settings = MsSmoothGroupSettings::new()
            .with_destination(OutputLocationRef::to("mss"))
            .with_fragment_length(2)
            .with_send_delay_ms(20000);
        assert_eq!(
            settings.to_string(),
            "{Destination: {DestinationRefId: mss},FragmentLength: 2,SendDelayMs: 20000}"
        );
        assert_eq!(settings.validate().unwrap_err().violations()[0].path, "sendDelayMs");
    }

    #[test]
    fn test_udp_output_fec_range() {
        let output = UdpOutputSettings::new()
            .with_container_settings(M2tsSettings::new())
            .with_fec_output_settings(FecOutputSettings::new().with_column_depth(2).with_row_length(5));
        let err = output.validate().unwrap_err();
        assert_eq!(err.violations()[0].path, "fecOutputSettings.columnDepth");
    }

    #[test]
    fn test_unknown_output_settings_round_trip() {
        let json = r#"{"outputName":"srt","outputSettings":{"srtOutputSettings":{"latency":2000}}}"#;
        let output = Output::from_json(json).unwrap();
        let settings = output.output_settings.as_ref().unwrap();
        assert!(settings.is_unknown());
        assert_eq!(
            output.to_string(),
            r#"{OutputName: srt,OutputSettings: {srtOutputSettings: {"latency":2000}}}"#
        );
        assert_eq!(output.to_json().unwrap(), json);

        let empty = Output::from_json(r#"{"outputSettings":{}}"#).unwrap();
        assert!(empty.is_empty());
    }
}
