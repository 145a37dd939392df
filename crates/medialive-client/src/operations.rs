//! The MediaLive operation table.

use medialive_models::operations::*;

use crate::http::Method;
use crate::operation::Operation;

macro_rules! operation {
    (
        $name:ident: $method:ident $uri:literal,
        $input:ty => $output:ty
        $(, query [$($query:literal),* $(,)?])?
        $(, token $token:literal)?
    ) => {
        #[doc = concat!("`", stringify!($name), "`: `", stringify!($method), " ", $uri, "`.")]
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl Operation for $name {
            const NAME: &'static str = stringify!($name);
            const METHOD: Method = Method::$method;
            const URI: &'static str = $uri;
            $(const QUERY: &'static [&'static str] = &[$($query),*];)?
            $(const IDEMPOTENCY_TOKEN: Option<&'static str> = Some($token);)?
            type Input = $input;
            type Output = $output;
        }
    };
}

// Channels
operation!(CreateChannel: Post "/prod/channels", CreateChannelRequest => CreateChannelResult, token "requestId");
operation!(DescribeChannel: Get "/prod/channels/{channelId}", DescribeChannelRequest => DescribeChannelResult);
operation!(DeleteChannel: Delete "/prod/channels/{channelId}", DeleteChannelRequest => DeleteChannelResult);
operation!(ListChannels: Get "/prod/channels", ListChannelsRequest => ListChannelsResult, query ["maxResults", "nextToken"]);
operation!(StartChannel: Post "/prod/channels/{channelId}/start", StartChannelRequest => StartChannelResult);
operation!(StopChannel: Post "/prod/channels/{channelId}/stop", StopChannelRequest => StopChannelResult);
operation!(UpdateChannel: Put "/prod/channels/{channelId}", UpdateChannelRequest => UpdateChannelResult);
operation!(UpdateChannelClass: Put "/prod/channels/{channelId}/channelClass", UpdateChannelClassRequest => UpdateChannelClassResult);

// Inputs
operation!(CreateInput: Post "/prod/inputs", CreateInputRequest => CreateInputResult, token "requestId");
operation!(DescribeInput: Get "/prod/inputs/{inputId}", DescribeInputRequest => DescribeInputResult);
operation!(DeleteInput: Delete "/prod/inputs/{inputId}", DeleteInputRequest => DeleteInputResult);
operation!(ListInputs: Get "/prod/inputs", ListInputsRequest => ListInputsResult, query ["maxResults", "nextToken"]);
operation!(UpdateInput: Put "/prod/inputs/{inputId}", UpdateInputRequest => UpdateInputResult);

// Input security groups
operation!(CreateInputSecurityGroup: Post "/prod/inputSecurityGroups", CreateInputSecurityGroupRequest => CreateInputSecurityGroupResult);
operation!(DescribeInputSecurityGroup: Get "/prod/inputSecurityGroups/{inputSecurityGroupId}", DescribeInputSecurityGroupRequest => DescribeInputSecurityGroupResult);
operation!(DeleteInputSecurityGroup: Delete "/prod/inputSecurityGroups/{inputSecurityGroupId}", DeleteInputSecurityGroupRequest => DeleteInputSecurityGroupResult);
operation!(ListInputSecurityGroups: Get "/prod/inputSecurityGroups", ListInputSecurityGroupsRequest => ListInputSecurityGroupsResult, query ["maxResults", "nextToken"]);
operation!(UpdateInputSecurityGroup: Put "/prod/inputSecurityGroups/{inputSecurityGroupId}", UpdateInputSecurityGroupRequest => UpdateInputSecurityGroupResult);

// Input devices
operation!(DescribeInputDevice: Get "/prod/inputDevices/{inputDeviceId}", DescribeInputDeviceRequest => DescribeInputDeviceResult);
operation!(ListInputDevices: Get "/prod/inputDevices", ListInputDevicesRequest => ListInputDevicesResult, query ["maxResults", "nextToken"]);
operation!(UpdateInputDevice: Put "/prod/inputDevices/{inputDeviceId}", UpdateInputDeviceRequest => UpdateInputDeviceResult);

// Multiplexes
operation!(CreateMultiplex: Post "/prod/multiplexes", CreateMultiplexRequest => CreateMultiplexResult, token "requestId");
operation!(DescribeMultiplex: Get "/prod/multiplexes/{multiplexId}", DescribeMultiplexRequest => DescribeMultiplexResult);
operation!(DeleteMultiplex: Delete "/prod/multiplexes/{multiplexId}", DeleteMultiplexRequest => DeleteMultiplexResult);
operation!(ListMultiplexes: Get "/prod/multiplexes", ListMultiplexesRequest => ListMultiplexesResult, query ["maxResults", "nextToken"]);
operation!(StartMultiplex: Post "/prod/multiplexes/{multiplexId}/start", StartMultiplexRequest => StartMultiplexResult);
operation!(StopMultiplex: Post "/prod/multiplexes/{multiplexId}/stop", StopMultiplexRequest => StopMultiplexResult);
operation!(UpdateMultiplex: Put "/prod/multiplexes/{multiplexId}", UpdateMultiplexRequest => UpdateMultiplexResult);

// Multiplex programs
operation!(CreateMultiplexProgram: Post "/prod/multiplexes/{multiplexId}/programs", CreateMultiplexProgramRequest => CreateMultiplexProgramResult, token "requestId");
operation!(DescribeMultiplexProgram: Get "/prod/multiplexes/{multiplexId}/programs/{programName}", DescribeMultiplexProgramRequest => DescribeMultiplexProgramResult);
operation!(DeleteMultiplexProgram: Delete "/prod/multiplexes/{multiplexId}/programs/{programName}", DeleteMultiplexProgramRequest => DeleteMultiplexProgramResult);
operation!(ListMultiplexPrograms: Get "/prod/multiplexes/{multiplexId}/programs", ListMultiplexProgramsRequest => ListMultiplexProgramsResult, query ["maxResults", "nextToken"]);
operation!(UpdateMultiplexProgram: Put "/prod/multiplexes/{multiplexId}/programs/{programName}", UpdateMultiplexProgramRequest => UpdateMultiplexProgramResult);

// Offerings
operation!(DescribeOffering: Get "/prod/offerings/{offeringId}", DescribeOfferingRequest => DescribeOfferingResult);
operation!(
    ListOfferings: Get "/prod/offerings",
    ListOfferingsRequest => ListOfferingsResult,
    query [
        "channelClass", "channelConfiguration", "codec", "duration", "maxResults",
        "maximumBitrate", "maximumFramerate", "nextToken", "resolution", "resourceType",
        "specialFeature", "videoQuality",
    ]
);
operation!(PurchaseOffering: Post "/prod/offerings/{offeringId}/purchase", PurchaseOfferingRequest => PurchaseOfferingResult, token "requestId");

// Reservations
operation!(DescribeReservation: Get "/prod/reservations/{reservationId}", DescribeReservationRequest => DescribeReservationResult);
operation!(DeleteReservation: Delete "/prod/reservations/{reservationId}", DeleteReservationRequest => DeleteReservationResult);
operation!(
    ListReservations: Get "/prod/reservations",
    ListReservationsRequest => ListReservationsResult,
    query [
        "channelClass", "codec", "maxResults", "maximumBitrate", "maximumFramerate",
        "nextToken", "resolution", "resourceType", "specialFeature", "videoQuality",
    ]
);
operation!(UpdateReservation: Put "/prod/reservations/{reservationId}", UpdateReservationRequest => UpdateReservationResult);

// Schedule
operation!(BatchUpdateSchedule: Put "/prod/channels/{channelId}/schedule", BatchUpdateScheduleRequest => BatchUpdateScheduleResult);
operation!(DescribeSchedule: Get "/prod/channels/{channelId}/schedule", DescribeScheduleRequest => DescribeScheduleResult, query ["maxResults", "nextToken"]);
operation!(DeleteSchedule: Delete "/prod/channels/{channelId}/schedule", DeleteScheduleRequest => DeleteScheduleResult);

// Tags
operation!(CreateTags: Post "/prod/tags/{resourceArn}", CreateTagsRequest => CreateTagsResult);
operation!(DeleteTags: Delete "/prod/tags/{resourceArn}", DeleteTagsRequest => DeleteTagsResult, query ["tagKeys"]);
operation!(ListTagsForResource: Get "/prod/tags/{resourceArn}", ListTagsForResourceRequest => ListTagsForResourceResult);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idempotent_operations() {
        assert_eq!(CreateChannel::IDEMPOTENCY_TOKEN, Some("requestId"));
        assert_eq!(PurchaseOffering::IDEMPOTENCY_TOKEN, Some("requestId"));
        assert_eq!(CreateInputSecurityGroup::IDEMPOTENCY_TOKEN, None);
        assert_eq!(DescribeChannel::IDEMPOTENCY_TOKEN, None);
    }

    #[test]
    fn test_list_operations_page() {
        assert_eq!(ListChannels::QUERY, &["maxResults", "nextToken"]);
        assert!(ListOfferings::QUERY.contains(&"channelConfiguration"));
        assert!(DescribeChannel::QUERY.is_empty());
    }

    #[test]
    fn test_bodiless_methods() {
        assert!(!DescribeSchedule::METHOD.has_body());
        assert!(BatchUpdateSchedule::METHOD.has_body());
        assert_eq!(DeleteTags::METHOD, Method::Delete);
    }
}
