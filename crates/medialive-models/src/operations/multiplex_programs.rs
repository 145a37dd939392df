//! Multiplex program operations.

use crate::multiplex::{
    MultiplexProgram, MultiplexProgramPacketIdentifiersMap, MultiplexProgramSettings,
    MultiplexProgramSummary,
};
use crate::shape::shape;

macro_rules! program_result {
    ($( $(#[$meta:meta])* $name:ident ),* $(,)?) => {
        $(
            shape! {
                $(#[$meta])*
                pub struct $name {
                    pub channel_id: String => with_channel_id,
                    pub multiplex_program_settings: MultiplexProgramSettings => with_multiplex_program_settings,
                    pub packet_identifiers_map: MultiplexProgramPacketIdentifiersMap => with_packet_identifiers_map,
                    pub program_name: String => with_program_name,
                }
            }
        )*
    };
}

shape! {
    pub struct CreateMultiplexProgramRequest {
        pub multiplex_id: String => with_multiplex_id,
        pub multiplex_program_settings: MultiplexProgramSettings => with_multiplex_program_settings,
        pub program_name: String => with_program_name,
        pub request_id: String => with_request_id,
    }
}

shape! {
    pub struct CreateMultiplexProgramResult {
        pub multiplex_program: MultiplexProgram => with_multiplex_program,
    }
}

shape! {
    pub struct DescribeMultiplexProgramRequest {
        pub multiplex_id: String => with_multiplex_id,
        pub program_name: String => with_program_name,
    }
}

shape! {
    pub struct DeleteMultiplexProgramRequest {
        pub multiplex_id: String => with_multiplex_id,
        pub program_name: String => with_program_name,
    }
}

program_result! {
    DescribeMultiplexProgramResult,
    DeleteMultiplexProgramResult,
}

shape! {
    pub struct ListMultiplexProgramsRequest {
        pub max_results: i32 where min = 1, max = 1000 => with_max_results,
        pub multiplex_id: String => with_multiplex_id,
        pub next_token: String => with_next_token,
    }
}

shape! {
    pub struct ListMultiplexProgramsResult {
        pub multiplex_programs: Vec<MultiplexProgramSummary> => with_multiplex_programs + push_multiplex_program(MultiplexProgramSummary),
        pub next_token: String => with_next_token,
    }
}

shape! {
    pub struct UpdateMultiplexProgramRequest {
        pub multiplex_id: String => with_multiplex_id,
        pub multiplex_program_settings: MultiplexProgramSettings => with_multiplex_program_settings,
        pub program_name: String => with_program_name,
    }
}

shape! {
    pub struct UpdateMultiplexProgramResult {
        pub multiplex_program: MultiplexProgram => with_multiplex_program,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::multiplex::{MultiplexVideoSettings, PreferredChannelPipeline};
    use crate::shape::Shape;

    #[test]
    fn test_create_program_request() {
        let request = CreateMultiplexProgramRequest::new()
            .with_multiplex_id("1234567")
            .with_program_name("sports")
            .with_multiplex_program_settings(
                MultiplexProgramSettings::new()
                    .with_program_number(3)
                    .with_preferred_channel_pipeline(PreferredChannelPipeline::CurrentlyActive)
                    .with_video_settings(MultiplexVideoSettings::new().with_constant_bitrate(4_000_000)),
            );
        assert!(request.validate().is_ok());
        let json = request.to_json().unwrap();
        assert!(json.contains(r#""preferredChannelPipeline":"CURRENTLY_ACTIVE""#));
        assert!(json.contains(r#""videoSettings":{"constantBitrate":4000000}"#));
    }

    #[test]
    fn test_describe_result_pids() {
        let result = DescribeMultiplexProgramResult::from_json(
            r#"{"programName":"sports","packetIdentifiersMap":{"videoPid":481,"audioPids":[482,483]}}"#,
        )
        .unwrap();
        let pids = result.packet_identifiers_map.unwrap();
        assert_eq!(pids.video_pid, Some(481));
        assert_eq!(pids.audio_pids, Some(vec![482, 483]));
    }
}
