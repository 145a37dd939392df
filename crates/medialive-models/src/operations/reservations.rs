//! Reservation operations.

use crate::common::Tags;
use crate::offering::{
    OfferingDurationUnits, OfferingType, Reservation, ReservationResourceSpecification,
    ReservationState,
};
use crate::shape::shape;

macro_rules! reservation_result {
    ($( $(#[$meta:meta])* $name:ident ),* $(,)?) => {
        $(
            shape! {
                $(#[$meta])*
                pub struct $name {
                    pub arn: String => with_arn,
                    pub count: i32 => with_count,
                    pub currency_code: String => with_currency_code,
                    pub duration: i32 => with_duration,
                    pub duration_units: OfferingDurationUnits => with_duration_units,
                    pub end: String => with_end,
                    pub fixed_price: f64 => with_fixed_price,
                    pub name: String => with_name,
                    pub offering_description: String => with_offering_description,
                    pub offering_id: String => with_offering_id,
                    pub offering_type: OfferingType => with_offering_type,
                    pub region: String => with_region,
                    pub reservation_id: String => with_reservation_id,
                    pub resource_specification: ReservationResourceSpecification => with_resource_specification,
                    pub start: String => with_start,
                    pub state: ReservationState => with_state,
                    pub tags: Tags => with_tags,
                    pub usage_price: f64 => with_usage_price,
                }
            }

            impl From<$name> for Reservation {
                fn from(result: $name) -> Self {
                    Reservation {
                        arn: result.arn,
                        count: result.count,
                        currency_code: result.currency_code,
                        duration: result.duration,
                        duration_units: result.duration_units,
                        end: result.end,
                        fixed_price: result.fixed_price,
                        name: result.name,
                        offering_description: result.offering_description,
                        offering_id: result.offering_id,
                        offering_type: result.offering_type,
                        region: result.region,
                        reservation_id: result.reservation_id,
                        resource_specification: result.resource_specification,
                        start: result.start,
                        state: result.state,
                        tags: result.tags,
                        usage_price: result.usage_price,
                    }
                }
            }
        )*
    };
}

shape! {
    pub struct DescribeReservationRequest {
        pub reservation_id: String => with_reservation_id,
    }
}

shape! {
    /// Deletes an expired reservation.
    pub struct DeleteReservationRequest {
        pub reservation_id: String => with_reservation_id,
    }
}

reservation_result! {
    DescribeReservationResult,
    DeleteReservationResult,
}

shape! {
    pub struct ListReservationsRequest {
        pub channel_class: String => with_channel_class,
        pub codec: String => with_codec,
        pub max_results: i32 where min = 1, max = 1000 => with_max_results,
        pub maximum_bitrate: String => with_maximum_bitrate,
        pub maximum_framerate: String => with_maximum_framerate,
        pub next_token: String => with_next_token,
        pub resolution: String => with_resolution,
        pub resource_type: String => with_resource_type,
        pub special_feature: String => with_special_feature,
        pub video_quality: String => with_video_quality,
    }
}

shape! {
    pub struct ListReservationsResult {
        pub next_token: String => with_next_token,
        pub reservations: Vec<Reservation> => with_reservations + push_reservation(Reservation),
    }
}

shape! {
    /// Renames a reservation.
    pub struct UpdateReservationRequest {
        pub name: String => with_name,
        pub reservation_id: String => with_reservation_id,
    }
}

shape! {
    pub struct UpdateReservationResult {
        pub reservation: Reservation => with_reservation,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::shape::Shape;

    #[test]
    fn test_describe_result_into_reservation() {
        let result = DescribeReservationResult::from_json(
            r#"{"reservationId":"1234567","state":"ACTIVE","start":"2026-01-01T00:00:00Z","end":"2027-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        let reservation = Reservation::from(result);
        assert_eq!(reservation.state, Some(ReservationState::Active));
        assert!(reservation.covers(Utc.with_ymd_and_hms(2026, 10, 16, 0, 0, 0).unwrap()));
    }

    #[test]
    fn test_list_result_unknown_state_kept() {
        let result = ListReservationsResult::from_json(
            r#"{"reservations":[{"reservationId":"1","state":"PENDING"}]}"#,
        )
        .unwrap();
        let state = result.reservations.unwrap()[0].state.clone().unwrap();
        assert!(state.is_unknown());
        assert_eq!(state.as_str(), "PENDING");
    }
}
