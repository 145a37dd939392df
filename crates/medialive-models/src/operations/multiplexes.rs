//! Multiplex operations.

use crate::common::Tags;
use crate::multiplex::{
    Multiplex, MultiplexOutputDestination, MultiplexSettings, MultiplexState, MultiplexSummary,
};
use crate::shape::shape;

macro_rules! multiplex_result {
    ($( $(#[$meta:meta])* $name:ident ),* $(,)?) => {
        $(
            shape! {
                $(#[$meta])*
                pub struct $name {
                    pub arn: String => with_arn,
                    pub availability_zones: Vec<String> => with_availability_zones + push_availability_zone(String),
                    pub destinations: Vec<MultiplexOutputDestination> => with_destinations + push_destination(MultiplexOutputDestination),
                    pub id: String => with_id,
                    pub multiplex_settings: MultiplexSettings => with_multiplex_settings,
                    pub name: String => with_name,
                    pub pipelines_running_count: i32 => with_pipelines_running_count,
                    pub program_count: i32 => with_program_count,
                    pub state: MultiplexState => with_state,
                    pub tags: Tags => with_tags,
                }
            }
        )*
    };
}

shape! {
    pub struct CreateMultiplexRequest {
        /// Exactly two availability zones in the channel's region.
        pub availability_zones: Vec<String> => with_availability_zones + push_availability_zone(String),
        pub multiplex_settings: MultiplexSettings => with_multiplex_settings,
        pub name: String => with_name,
        pub request_id: String => with_request_id,
        pub tags: Tags => with_tags,
    }
}

shape! {
    pub struct CreateMultiplexResult {
        pub multiplex: Multiplex => with_multiplex,
    }
}

shape! {
    pub struct DescribeMultiplexRequest {
        pub multiplex_id: String => with_multiplex_id,
    }
}

shape! {
    pub struct DeleteMultiplexRequest {
        pub multiplex_id: String => with_multiplex_id,
    }
}

shape! {
    pub struct StartMultiplexRequest {
        pub multiplex_id: String => with_multiplex_id,
    }
}

shape! {
    pub struct StopMultiplexRequest {
        pub multiplex_id: String => with_multiplex_id,
    }
}

multiplex_result! {
    DescribeMultiplexResult,
    DeleteMultiplexResult,
    StartMultiplexResult,
    StopMultiplexResult,
}

shape! {
    pub struct ListMultiplexesRequest {
        pub max_results: i32 where min = 1, max = 1000 => with_max_results,
        pub next_token: String => with_next_token,
    }
}

shape! {
    pub struct ListMultiplexesResult {
        pub multiplexes: Vec<MultiplexSummary> => with_multiplexes + push_multiplex(MultiplexSummary),
        pub next_token: String => with_next_token,
    }
}

shape! {
    pub struct UpdateMultiplexRequest {
        pub multiplex_id: String => with_multiplex_id,
        pub multiplex_settings: MultiplexSettings => with_multiplex_settings,
        pub name: String => with_name,
    }
}

shape! {
    pub struct UpdateMultiplexResult {
        pub multiplex: Multiplex => with_multiplex,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Shape;

    #[test]
    fn test_create_request_validation() {
        let request = CreateMultiplexRequest::new()
            .with_name("mux")
            .push_availability_zone("us-west-2a")
            .push_availability_zone("us-west-2b")
            .with_multiplex_settings(
                MultiplexSettings::new()
                    .with_transport_stream_bitrate(500_000)
                    .with_transport_stream_id(1),
            );
        let err = request.validate().unwrap_err();
        assert_eq!(
            err.violations()[0].path,
            "multiplexSettings.transportStreamBitrate"
        );
    }

    #[test]
    fn test_start_result_state() {
        let result =
            StartMultiplexResult::from_json(r#"{"id":"1234567","state":"STARTING","programCount":2}"#)
                .unwrap();
        assert_eq!(result.state, Some(MultiplexState::Starting));
        assert_eq!(result.program_count, Some(2));
    }
}
