//! MediaLive client.

use medialive_models::operations::*;
use medialive_models::Shape;
use tracing::{debug, info, instrument, warn};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::operation::{marshal, unmarshal, Operation};
use crate::operations;
use crate::transport::Transport;

/// MediaLive client over a pluggable transport.
#[derive(Debug, Clone)]
pub struct MediaLiveClient<T> {
    transport: T,
    config: ClientConfig,
}

impl<T: Transport> MediaLiveClient<T> {
    pub fn new(config: ClientConfig, transport: T) -> Self {
        Self { transport, config }
    }

    /// Create a client configured from environment variables.
    pub fn from_env(transport: T) -> ClientResult<Self> {
        Ok(Self::new(ClientConfig::from_env()?, transport))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Marshals `input`, sends it and unmarshals the response.
    #[instrument(skip(self, input), fields(operation = O::NAME))]
    pub async fn execute<O: Operation>(&self, input: O::Input) -> ClientResult<O::Output> {
        if self.config.validate_requests {
            input.validate()?;
        }

        let request = marshal::<O>(&self.config, &input)?;
        debug!(method = %request.method, url = %request.url, "Sending MediaLive request");

        let response = self.transport.send(request).await?;
        let status = response.status;

        match unmarshal::<O>(&response) {
            Ok(output) => {
                info!(status, "MediaLive {} completed", O::NAME);
                Ok(output)
            }
            Err(ClientError::Service(err)) => {
                warn!(
                    status,
                    kind = %err.kind,
                    request_id = err.request_id.as_deref().unwrap_or("-"),
                    "MediaLive {} failed: {}",
                    O::NAME,
                    err.message.as_deref().unwrap_or("no message")
                );
                Err(err.into())
            }
            Err(err) => Err(err),
        }
    }
}

macro_rules! operation_methods {
    ($( $method:ident => $operation:ident($input:ty) -> $output:ty; )*) => {
        impl<T: Transport> MediaLiveClient<T> {
            $(
                #[doc = concat!("Calls `", stringify!($operation), "`.")]
                pub async fn $method(&self, input: $input) -> ClientResult<$output> {
                    self.execute::<operations::$operation>(input).await
                }
            )*
        }
    };
}

operation_methods! {
    create_channel => CreateChannel(CreateChannelRequest) -> CreateChannelResult;
    describe_channel => DescribeChannel(DescribeChannelRequest) -> DescribeChannelResult;
    delete_channel => DeleteChannel(DeleteChannelRequest) -> DeleteChannelResult;
    list_channels => ListChannels(ListChannelsRequest) -> ListChannelsResult;
    start_channel => StartChannel(StartChannelRequest) -> StartChannelResult;
    stop_channel => StopChannel(StopChannelRequest) -> StopChannelResult;
    update_channel => UpdateChannel(UpdateChannelRequest) -> UpdateChannelResult;
    update_channel_class => UpdateChannelClass(UpdateChannelClassRequest) -> UpdateChannelClassResult;

    create_input => CreateInput(CreateInputRequest) -> CreateInputResult;
    describe_input => DescribeInput(DescribeInputRequest) -> DescribeInputResult;
    delete_input => DeleteInput(DeleteInputRequest) -> DeleteInputResult;
    list_inputs => ListInputs(ListInputsRequest) -> ListInputsResult;
    update_input => UpdateInput(UpdateInputRequest) -> UpdateInputResult;

    create_input_security_group => CreateInputSecurityGroup(CreateInputSecurityGroupRequest) -> CreateInputSecurityGroupResult;
    describe_input_security_group => DescribeInputSecurityGroup(DescribeInputSecurityGroupRequest) -> DescribeInputSecurityGroupResult;
    delete_input_security_group => DeleteInputSecurityGroup(DeleteInputSecurityGroupRequest) -> DeleteInputSecurityGroupResult;
    list_input_security_groups => ListInputSecurityGroups(ListInputSecurityGroupsRequest) -> ListInputSecurityGroupsResult;
    update_input_security_group => UpdateInputSecurityGroup(UpdateInputSecurityGroupRequest) -> UpdateInputSecurityGroupResult;

    describe_input_device => DescribeInputDevice(DescribeInputDeviceRequest) -> DescribeInputDeviceResult;
    list_input_devices => ListInputDevices(ListInputDevicesRequest) -> ListInputDevicesResult;
    update_input_device => UpdateInputDevice(UpdateInputDeviceRequest) -> UpdateInputDeviceResult;

    create_multiplex => CreateMultiplex(CreateMultiplexRequest) -> CreateMultiplexResult;
    describe_multiplex => DescribeMultiplex(DescribeMultiplexRequest) -> DescribeMultiplexResult;
    delete_multiplex => DeleteMultiplex(DeleteMultiplexRequest) -> DeleteMultiplexResult;
    list_multiplexes => ListMultiplexes(ListMultiplexesRequest) -> ListMultiplexesResult;
    start_multiplex => StartMultiplex(StartMultiplexRequest) -> StartMultiplexResult;
    stop_multiplex => StopMultiplex(StopMultiplexRequest) -> StopMultiplexResult;
    update_multiplex => UpdateMultiplex(UpdateMultiplexRequest) -> UpdateMultiplexResult;

    create_multiplex_program => CreateMultiplexProgram(CreateMultiplexProgramRequest) -> CreateMultiplexProgramResult;
    describe_multiplex_program => DescribeMultiplexProgram(DescribeMultiplexProgramRequest) -> DescribeMultiplexProgramResult;
    delete_multiplex_program => DeleteMultiplexProgram(DeleteMultiplexProgramRequest) -> DeleteMultiplexProgramResult;
    list_multiplex_programs => ListMultiplexPrograms(ListMultiplexProgramsRequest) -> ListMultiplexProgramsResult;
    update_multiplex_program => UpdateMultiplexProgram(UpdateMultiplexProgramRequest) -> UpdateMultiplexProgramResult;

    describe_offering => DescribeOffering(DescribeOfferingRequest) -> DescribeOfferingResult;
    list_offerings => ListOfferings(ListOfferingsRequest) -> ListOfferingsResult;
    purchase_offering => PurchaseOffering(PurchaseOfferingRequest) -> PurchaseOfferingResult;

    describe_reservation => DescribeReservation(DescribeReservationRequest) -> DescribeReservationResult;
    delete_reservation => DeleteReservation(DeleteReservationRequest) -> DeleteReservationResult;
    list_reservations => ListReservations(ListReservationsRequest) -> ListReservationsResult;
    update_reservation => UpdateReservation(UpdateReservationRequest) -> UpdateReservationResult;

    batch_update_schedule => BatchUpdateSchedule(BatchUpdateScheduleRequest) -> BatchUpdateScheduleResult;
    describe_schedule => DescribeSchedule(DescribeScheduleRequest) -> DescribeScheduleResult;
    delete_schedule => DeleteSchedule(DeleteScheduleRequest) -> DeleteScheduleResult;

    create_tags => CreateTags(CreateTagsRequest) -> CreateTagsResult;
    delete_tags => DeleteTags(DeleteTagsRequest) -> DeleteTagsResult;
    list_tags_for_resource => ListTagsForResource(ListTagsForResourceRequest) -> ListTagsForResourceResult;
}
