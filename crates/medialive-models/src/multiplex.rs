//! Multiplexes and multiplex programs.

use crate::common::Tags;
use crate::shape::shape;
use crate::wire_enum::wire_enum;

wire_enum! {
    pub enum MultiplexState {
        Creating = "CREATING",
        CreateFailed = "CREATE_FAILED",
        Idle = "IDLE",
        Starting = "STARTING",
        Running = "RUNNING",
        Recovering = "RECOVERING",
        Stopping = "STOPPING",
        Deleting = "DELETING",
        Deleted = "DELETED",
    }
}

wire_enum! {
    pub enum PreferredChannelPipeline {
        CurrentlyActive = "CURRENTLY_ACTIVE",
        Pipeline0 = "PIPELINE_0",
        Pipeline1 = "PIPELINE_1",
    }
}

shape! {
    pub struct MultiplexMediaConnectOutputDestinationSettings {
        pub entitlement_arn: String => with_entitlement_arn,
    }
}

shape! {
    pub struct MultiplexOutputDestination {
        pub media_connect_settings: MultiplexMediaConnectOutputDestinationSettings => with_media_connect_settings,
    }
}

shape! {
    /// Transport stream parameters of a multiplex.
    pub struct MultiplexSettings {
        /// Upper bound on decoder buffer delay.
        pub maximum_video_buffer_delay_milliseconds: i32 where min = 800, max = 3000 => with_maximum_video_buffer_delay_milliseconds,
        /// Total bitrate of the transport stream, in bits/second.
        pub transport_stream_bitrate: i32 where min = 1000000, max = 100000000 => with_transport_stream_bitrate,
        pub transport_stream_id: i32 where min = 0, max = 65535 => with_transport_stream_id,
        /// Share of the total held back for non-program data.
        pub transport_stream_reserved_bitrate: i32 where min = 0, max = 100000000 => with_transport_stream_reserved_bitrate,
    }
}

shape! {
    pub struct MultiplexSettingsSummary {
        pub transport_stream_bitrate: i32 where min = 1000000, max = 100000000 => with_transport_stream_bitrate,
    }
}

shape! {
    /// A MediaLive multiplex.
    pub struct Multiplex {
        pub arn: String => with_arn,
        pub availability_zones: Vec<String> => with_availability_zones + push_availability_zone(String),
        pub destinations: Vec<MultiplexOutputDestination> => with_destinations + push_destination(MultiplexOutputDestination),
        pub id: String => with_id,
        pub multiplex_settings: MultiplexSettings => with_multiplex_settings,
        pub name: String => with_name,
        pub pipelines_running_count: i32 => with_pipelines_running_count,
        /// Number of programs in the multiplex.
        pub program_count: i32 => with_program_count,
        pub state: MultiplexState => with_state,
        pub tags: Tags => with_tags,
    }
}

shape! {
    pub struct MultiplexSummary {
        pub arn: String => with_arn,
        pub availability_zones: Vec<String> => with_availability_zones + push_availability_zone(String),
        pub id: String => with_id,
        pub multiplex_settings: MultiplexSettingsSummary => with_multiplex_settings,
        pub name: String => with_name,
        pub pipelines_running_count: i32 => with_pipelines_running_count,
        pub program_count: i32 => with_program_count,
        pub state: MultiplexState => with_state,
        pub tags: Tags => with_tags,
    }
}

shape! {
    pub struct MultiplexProgramServiceDescriptor {
        pub provider_name: String => with_provider_name,
        pub service_name: String => with_service_name,
    }
}

shape! {
    /// Statistical multiplexing bounds for a program.
    pub struct MultiplexStatmuxVideoSettings {
        /// Statmux ceiling, in bits/second.
        pub maximum_bitrate: i32 where min = 100000, max = 100000000 => with_maximum_bitrate,
        /// Statmux floor, in bits/second.
        pub minimum_bitrate: i32 where min = 100000, max = 100000000 => with_minimum_bitrate,
    }
}

shape! {
    /// Either a constant bitrate or statmux settings, not both.
    pub struct MultiplexVideoSettings {
        /// Fixed program bitrate; excludes statmux.
        pub constant_bitrate: i32 where min = 100000, max = 100000000 => with_constant_bitrate,
        pub statmux_settings: MultiplexStatmuxVideoSettings => with_statmux_settings,
    }
}

shape! {
    pub struct MultiplexProgramSettings {
        pub preferred_channel_pipeline: PreferredChannelPipeline => with_preferred_channel_pipeline,
        pub program_number: i32 where min = 0, max = 65535 => with_program_number,
        pub service_descriptor: MultiplexProgramServiceDescriptor => with_service_descriptor,
        pub video_settings: MultiplexVideoSettings => with_video_settings,
    }
}

shape! {
    /// PIDs assigned to a program inside the multiplex.
    pub struct MultiplexProgramPacketIdentifiersMap {
        pub audio_pids: Vec<i32> => with_audio_pids + push_audio_pid(i32),
        pub dvb_sub_pids: Vec<i32> => with_dvb_sub_pids + push_dvb_sub_pid(i32),
        pub dvb_teletext_pid: i32 => with_dvb_teletext_pid,
        pub etv_platform_pid: i32 => with_etv_platform_pid,
        pub etv_signal_pid: i32 => with_etv_signal_pid,
        pub klv_data_pids: Vec<i32> => with_klv_data_pids + push_klv_data_pid(i32),
        pub pcr_pid: i32 => with_pcr_pid,
        pub pmt_pid: i32 => with_pmt_pid,
        pub private_metadata_pid: i32 => with_private_metadata_pid,
        pub scte27_pids: Vec<i32> => with_scte27_pids + push_scte27_pid(i32),
        pub scte35_pid: i32 => with_scte35_pid,
        pub timed_metadata_pid: i32 => with_timed_metadata_pid,
        pub video_pid: i32 => with_video_pid,
    }
}

shape! {
    pub struct MultiplexProgram {
        /// Channel that encodes this program.
        pub channel_id: String => with_channel_id,
        pub multiplex_program_settings: MultiplexProgramSettings => with_multiplex_program_settings,
        pub packet_identifiers_map: MultiplexProgramPacketIdentifiersMap => with_packet_identifiers_map,
        pub program_name: String => with_program_name,
    }
}

shape! {
    pub struct MultiplexProgramSummary {
        pub channel_id: String => with_channel_id,
        pub program_name: String => with_program_name,
    }
}

impl MultiplexSettings {
    /// Bitrate left for programs after the reserved share, never below zero.
    pub fn available_bitrate(&self) -> Option<i32> {
        let total = self.transport_stream_bitrate?;
        let reserved = self.transport_stream_reserved_bitrate.unwrap_or(0);
        Some(total.saturating_sub(reserved).max(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Shape;

    #[test]
    fn test_available_bitrate() {
        let settings = MultiplexSettings::new()
            .with_transport_stream_bitrate(20_000_000)
            .with_transport_stream_reserved_bitrate(2_000_000);
        assert_eq!(settings.available_bitrate(), Some(18_000_000));
        assert_eq!(MultiplexSettings::new().available_bitrate(), None);
    }

    #[test]
    fn test_available_bitrate_over_allocated() {
        let settings = MultiplexSettings::new()
            .with_transport_stream_bitrate(1_000_000)
            .with_transport_stream_reserved_bitrate(2_000_000);
        assert_eq!(settings.available_bitrate(), Some(0));

        let settings = MultiplexSettings::new()
            .with_transport_stream_bitrate(1_000_000)
            .with_transport_stream_reserved_bitrate(i32::MIN);
        assert_eq!(settings.available_bitrate(), Some(i32::MAX));
    }

    #[test]
    fn test_statmux_bounds() {
        let program = MultiplexProgramSettings::new()
            .with_program_number(1)
            .with_video_settings(
                MultiplexVideoSettings::new().with_statmux_settings(
                    MultiplexStatmuxVideoSettings::new()
                        .with_minimum_bitrate(50_000)
                        .with_maximum_bitrate(8_000_000),
                ),
            );
        let err = program.validate().unwrap_err();
        assert_eq!(
            err.violations()[0].path,
            "videoSettings.statmuxSettings.minimumBitrate"
        );
    }

    #[test]
    fn test_pid_lists_preserve_order_and_duplicates() {
        let map = MultiplexProgramPacketIdentifiersMap::new()
            .push_audio_pid(482)
            .push_audio_pid(481)
            .push_audio_pid(482);
        assert_eq!(map.audio_pids, Some(vec![482, 481, 482]));
        assert_eq!(map.to_string(), "{AudioPids: [482, 481, 482]}");
    }
}
