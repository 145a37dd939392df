//! Transport stream container settings.

use crate::shape::shape;
use crate::wire_enum::wire_enum;

wire_enum! {
    pub enum M2tsAbsentInputAudioBehavior {
        Drop = "DROP",
        EncodeSilence = "ENCODE_SILENCE",
    }
}

wire_enum! {
    pub enum M2tsArib {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }
}

wire_enum! {
    pub enum M2tsAribCaptionsPidControl {
        Auto = "AUTO",
        UseConfigured = "USE_CONFIGURED",
    }
}

wire_enum! {
    pub enum M2tsAudioBufferModel {
        Atsc = "ATSC",
        Dvb = "DVB",
    }
}

wire_enum! {
    pub enum M2tsAudioInterval {
        VideoAndFixedIntervals = "VIDEO_AND_FIXED_INTERVALS",
        VideoInterval = "VIDEO_INTERVAL",
    }
}

wire_enum! {
    pub enum M2tsAudioStreamType {
        Atsc = "ATSC",
        Dvb = "DVB",
    }
}

wire_enum! {
    pub enum M2tsBufferModel {
        Multiplex = "MULTIPLEX",
        None = "NONE",
    }
}

wire_enum! {
    pub enum M2tsCcDescriptor {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }
}

wire_enum! {
    pub enum M2tsEbifControl {
        None = "NONE",
        Passthrough = "PASSTHROUGH",
    }
}

wire_enum! {
    pub enum M2tsEbpPlacement {
        VideoAndAudioPids = "VIDEO_AND_AUDIO_PIDS",
        VideoPid = "VIDEO_PID",
    }
}

wire_enum! {
    pub enum M2tsEsRateInPes {
        Exclude = "EXCLUDE",
        Include = "INCLUDE",
    }
}

wire_enum! {
    pub enum M2tsKlv {
        None = "NONE",
        Passthrough = "PASSTHROUGH",
    }
}

wire_enum! {
    pub enum M2tsNielsenId3Behavior {
        NoPassthrough = "NO_PASSTHROUGH",
        Passthrough = "PASSTHROUGH",
    }
}

wire_enum! {
    pub enum M2tsPcrControl {
        ConfiguredPcrPeriod = "CONFIGURED_PCR_PERIOD",
        PcrEveryPesPacket = "PCR_EVERY_PES_PACKET",
    }
}

wire_enum! {
    pub enum M2tsRateMode {
        Cbr = "CBR",
        Vbr = "VBR",
    }
}

wire_enum! {
    pub enum M2tsScte35Control {
        None = "NONE",
        Passthrough = "PASSTHROUGH",
    }
}

wire_enum! {
    pub enum M2tsSegmentationMarkers {
        Ebp = "EBP",
        EbpLegacy = "EBP_LEGACY",
        None = "NONE",
        PsiSegstart = "PSI_SEGSTART",
        RaiAdapt = "RAI_ADAPT",
        RaiSegstart = "RAI_SEGSTART",
    }
}

wire_enum! {
    pub enum M2tsSegmentationStyle {
        MaintainCadence = "MAINTAIN_CADENCE",
        ResetCadence = "RESET_CADENCE",
    }
}

wire_enum! {
    pub enum M2tsTimedMetadataBehavior {
        NoPassthrough = "NO_PASSTHROUGH",
        Passthrough = "PASSTHROUGH",
    }
}

wire_enum! {
    pub enum DvbSdtOutputSdt {
        SdtFollow = "SDT_FOLLOW",
        SdtFollowIfPresent = "SDT_FOLLOW_IF_PRESENT",
        SdtManual = "SDT_MANUAL",
        SdtNone = "SDT_NONE",
    }
}

wire_enum! {
    pub enum M3u8NielsenId3Behavior {
        NoPassthrough = "NO_PASSTHROUGH",
        Passthrough = "PASSTHROUGH",
    }
}

wire_enum! {
    pub enum M3u8PcrControl {
        ConfiguredPcrPeriod = "CONFIGURED_PCR_PERIOD",
        PcrEveryPesPacket = "PCR_EVERY_PES_PACKET",
    }
}

wire_enum! {
    pub enum M3u8Scte35Behavior {
        NoPassthrough = "NO_PASSTHROUGH",
        Passthrough = "PASSTHROUGH",
    }
}

wire_enum! {
    pub enum M3u8TimedMetadataBehavior {
        NoPassthrough = "NO_PASSTHROUGH",
        Passthrough = "PASSTHROUGH",
    }
}

shape! {
    /// DVB Network Information Table.
    pub struct DvbNitSettings {
        pub network_id: i32 where min = 0, max = 65536 => with_network_id,
        pub network_name: String => with_network_name,
        /// Repetition interval in milliseconds.
        pub rep_interval: i32 where min = 25, max = 10000 => with_rep_interval,
    }
}

shape! {
    /// DVB Service Description Table.
    pub struct DvbSdtSettings {
        pub output_sdt: DvbSdtOutputSdt => with_output_sdt,
        /// Milliseconds between SDT repetitions.
        pub rep_interval: i32 where min = 25, max = 2000 => with_rep_interval,
        pub service_name: String => with_service_name,
        pub service_provider_name: String => with_service_provider_name,
    }
}

shape! {
    /// DVB Time and Date Table.
    pub struct DvbTdtSettings {
        /// Milliseconds between TDT repetitions.
        pub rep_interval: i32 where min = 1000, max = 30000 => with_rep_interval,
    }
}

shape! {
    /// MPEG-2 transport stream settings for archive and UDP outputs.
    ///
    /// PID fields are strings because they accept decimal (`481`) or
    /// hexadecimal (`0x1E1`) values, and the `*_pids` fields take
    /// comma-separated lists.
    pub struct M2tsSettings {
        pub absent_input_audio_behavior: M2tsAbsentInputAudioBehavior => with_absent_input_audio_behavior,
        pub arib: M2tsArib => with_arib,
        pub arib_captions_pid: String => with_arib_captions_pid,
        pub arib_captions_pid_control: M2tsAribCaptionsPidControl => with_arib_captions_pid_control,
        pub audio_buffer_model: M2tsAudioBufferModel => with_audio_buffer_model,
        pub audio_frames_per_pes: i32 where min = 0 => with_audio_frames_per_pes,
        /// Comma-separated PIDs or ranges, e.g. `482-498`.
        pub audio_pids: String => with_audio_pids,
        pub audio_stream_type: M2tsAudioStreamType => with_audio_stream_type,
        /// Output bitrate in bits/second; 0 lets the encoder choose.
        pub bitrate: i32 where min = 0 => with_bitrate,
        pub buffer_model: M2tsBufferModel => with_buffer_model,
        pub cc_descriptor: M2tsCcDescriptor => with_cc_descriptor,
        pub dvb_nit_settings: DvbNitSettings => with_dvb_nit_settings,
        pub dvb_sdt_settings: DvbSdtSettings => with_dvb_sdt_settings,
        pub dvb_sub_pids: String => with_dvb_sub_pids,
        pub dvb_tdt_settings: DvbTdtSettings => with_dvb_tdt_settings,
        pub dvb_teletext_pid: String => with_dvb_teletext_pid,
        pub ebif: M2tsEbifControl => with_ebif,
        pub ebp_audio_interval: M2tsAudioInterval => with_ebp_audio_interval,
        /// Lookahead for EBP markers, in milliseconds.
        pub ebp_lookahead_ms: i32 where min = 0, max = 10000 => with_ebp_lookahead_ms,
        pub ebp_placement: M2tsEbpPlacement => with_ebp_placement,
        pub ecm_pid: String => with_ecm_pid,
        pub es_rate_in_pes: M2tsEsRateInPes => with_es_rate_in_pes,
        pub etv_platform_pid: String => with_etv_platform_pid,
        pub etv_signal_pid: String => with_etv_signal_pid,
        /// Fragment length in seconds for EBP segmentation.
        pub fragment_time: f64 where min = 0 => with_fragment_time,
        pub klv: M2tsKlv => with_klv,
        pub klv_data_pids: String => with_klv_data_pids,
        pub nielsen_id3_behavior: M2tsNielsenId3Behavior => with_nielsen_id3_behavior,
        /// Null packet padding, in bits/second.
        pub null_packet_bitrate: f64 where min = 0 => with_null_packet_bitrate,
        /// PAT repetition interval in milliseconds.
        pub pat_interval: i32 where min = 0, max = 1000 => with_pat_interval,
        pub pcr_control: M2tsPcrControl => with_pcr_control,
        /// PCR insertion period in milliseconds.
        pub pcr_period: i32 where min = 0, max = 500 => with_pcr_period,
        pub pcr_pid: String => with_pcr_pid,
        /// Milliseconds between PMT repetitions.
        pub pmt_interval: i32 where min = 0, max = 1000 => with_pmt_interval,
        pub pmt_pid: String => with_pmt_pid,
        pub program_num: i32 where min = 0, max = 65535 => with_program_num,
        pub rate_mode: M2tsRateMode => with_rate_mode,
        pub scte27_pids: String => with_scte27_pids,
        pub scte35_control: M2tsScte35Control => with_scte35_control,
        pub scte35_pid: String => with_scte35_pid,
        pub segmentation_markers: M2tsSegmentationMarkers => with_segmentation_markers,
        pub segmentation_style: M2tsSegmentationStyle => with_segmentation_style,
        /// Segment length in seconds for EBP segmentation.
        pub segmentation_time: f64 where min = 1 => with_segmentation_time,
        pub timed_metadata_behavior: M2tsTimedMetadataBehavior => with_timed_metadata_behavior,
        pub timed_metadata_pid: String => with_timed_metadata_pid,
        pub transport_stream_id: i32 where min = 0, max = 65535 => with_transport_stream_id,
        /// PID as a decimal or `0x` hex string.
        pub video_pid: String => with_video_pid,
    }
}

shape! {
    /// Transport stream settings for standard HLS renditions.
    pub struct M3u8Settings {
        pub audio_frames_per_pes: i32 where min = 0 => with_audio_frames_per_pes,
        pub audio_pids: String => with_audio_pids,
        pub ecm_pid: String => with_ecm_pid,
        pub nielsen_id3_behavior: M3u8NielsenId3Behavior => with_nielsen_id3_behavior,
        /// Milliseconds between PAT repetitions.
        pub pat_interval: i32 where min = 0, max = 1000 => with_pat_interval,
        pub pcr_control: M3u8PcrControl => with_pcr_control,
        pub pcr_period: i32 where min = 0, max = 500 => with_pcr_period,
        pub pcr_pid: String => with_pcr_pid,
        /// Milliseconds between PMT repetitions.
        pub pmt_interval: i32 where min = 0, max = 1000 => with_pmt_interval,
        pub pmt_pid: String => with_pmt_pid,
        pub program_num: i32 where min = 0, max = 65535 => with_program_num,
        pub scte35_behavior: M3u8Scte35Behavior => with_scte35_behavior,
        pub scte35_pid: String => with_scte35_pid,
        pub timed_metadata_behavior: M3u8TimedMetadataBehavior => with_timed_metadata_behavior,
        pub timed_metadata_pid: String => with_timed_metadata_pid,
        pub transport_stream_id: i32 where min = 0, max = 65535 => with_transport_stream_id,
        /// PID as a decimal or `0x` hex string.
        pub video_pid: String => with_video_pid,
    }
}

shape! {
    /// Raw container: the archive keeps elementary streams as-is.
    pub struct RawSettings {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Shape;

    #[test]
    fn test_sdt_follow_if_present_wire_value() {
        let sdt = DvbSdtSettings::new()
            .with_output_sdt(DvbSdtOutputSdt::SdtFollowIfPresent)
            .with_service_name("Live One");
        assert_eq!(
            sdt.to_json().unwrap(),
            r#"{"outputSdt":"SDT_FOLLOW_IF_PRESENT","serviceName":"Live One"}"#
        );
    }

    #[test]
    fn test_m2ts_nested_tables_validate() {
        let settings = M2tsSettings::new()
            .with_pat_interval(100)
            .with_pcr_period(600)
            .with_dvb_tdt_settings(DvbTdtSettings::new().with_rep_interval(500));

        let err = settings.validate().unwrap_err();
        let paths: Vec<&str> = err.violations().iter().map(|v| v.path.as_str()).collect();
        assert_eq!(paths, vec!["dvbTdtSettings.repInterval", "pcrPeriod"]);
    }

    #[test]
    fn test_m2ts_pid_strings() {
        let settings = M2tsSettings::new()
            .with_audio_pids("482-498")
            .with_video_pid("0x1E1")
            .with_program_num(1);
        assert_eq!(settings.to_string(), "{AudioPids: 482-498,ProgramNum: 1,VideoPid: 0x1E1}");
    }

    #[test]
    fn test_raw_settings_is_empty_record() {
        let raw = RawSettings::new();
        assert!(raw.is_empty());
        assert_eq!(raw.to_json().unwrap(), "{}");
        assert_eq!(raw, RawSettings::from_json(r#"{"ignored":true}"#).unwrap());
    }
}
