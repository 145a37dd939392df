//! Offering operations.

use crate::common::Tags;
use crate::offering::{
    Offering, OfferingDurationUnits, OfferingType, Reservation, ReservationResourceSpecification,
};
use crate::shape::shape;

shape! {
    pub struct DescribeOfferingRequest {
        pub offering_id: String => with_offering_id,
    }
}

shape! {
    pub struct DescribeOfferingResult {
        pub arn: String => with_arn,
        pub currency_code: String => with_currency_code,
        pub duration: i32 => with_duration,
        pub duration_units: OfferingDurationUnits => with_duration_units,
        pub fixed_price: f64 => with_fixed_price,
        pub offering_description: String => with_offering_description,
        pub offering_id: String => with_offering_id,
        pub offering_type: OfferingType => with_offering_type,
        pub region: String => with_region,
        pub resource_specification: ReservationResourceSpecification => with_resource_specification,
        pub usage_price: f64 => with_usage_price,
    }
}

shape! {
    /// Lists offerings, optionally filtered. Every filter is a query parameter.
    pub struct ListOfferingsRequest {
        pub channel_class: String => with_channel_class,
        /// Id of a channel whose configuration the offerings must match.
        pub channel_configuration: String => with_channel_configuration,
        pub codec: String => with_codec,
        /// Term length in months.
        pub duration: String => with_duration,
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
    pub struct ListOfferingsResult {
        pub next_token: String => with_next_token,
        pub offerings: Vec<Offering> => with_offerings + push_offering(Offering),
    }
}

shape! {
    pub struct PurchaseOfferingRequest {
        /// Number of resources to reserve.
        pub count: i32 where min = 1 => with_count,
        pub name: String => with_name,
        pub offering_id: String => with_offering_id,
        pub request_id: String => with_request_id,
        /// Requested start, ISO 8601 in UTC; defaults to now.
        pub start: String => with_start,
        pub tags: Tags => with_tags,
    }
}

shape! {
    pub struct PurchaseOfferingResult {
        pub reservation: Reservation => with_reservation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offering::ReservationResolution;
    use crate::shape::Shape;

    #[test]
    fn test_purchase_count_minimum() {
        let request = PurchaseOfferingRequest::new().with_offering_id("87654321").with_count(0);
        assert_eq!(request.validate().unwrap_err().violations()[0].path, "count");
        assert!(request.with_count(2).validate().is_ok());
    }

    #[test]
    fn test_filters_accept_enum_wire_values() {
        let request = ListOfferingsRequest::new()
            .with_resolution(ReservationResolution::Hd.as_str())
            .with_duration("12");
        assert_eq!(request.to_string(), "{Duration: 12,Resolution: HD}");
    }

    #[test]
    fn test_describe_result_prices() {
        let result = DescribeOfferingResult::from_json(
            r#"{"offeringId":"87654321","fixedPrice":0.0,"usagePrice":0.635,"durationUnits":"MONTHS","duration":12}"#,
        )
        .unwrap();
        assert_eq!(result.usage_price, Some(0.635));
        assert_eq!(result.duration_units, Some(OfferingDurationUnits::Months));
    }
}
