//! Offerings and the reservations purchased from them.

use chrono::{DateTime, Utc};

use crate::common::{ChannelClass, Tags};
use crate::shape::shape;
use crate::wire_enum::wire_enum;

wire_enum! {
    pub enum OfferingDurationUnits {
        Months = "MONTHS",
    }
}

wire_enum! {
    pub enum OfferingType {
        NoUpfront = "NO_UPFRONT",
    }
}

wire_enum! {
    pub enum ReservationState {
        Active = "ACTIVE",
        Expired = "EXPIRED",
        Canceled = "CANCELED",
        Deleted = "DELETED",
    }
}

wire_enum! {
    pub enum ReservationCodec {
        Mpeg2 = "MPEG2",
        Avc = "AVC",
        Hevc = "HEVC",
        Audio = "AUDIO",
        Link = "LINK",
    }
}

wire_enum! {
    pub enum ReservationMaximumBitrate {
        Max10Mbps = "MAX_10_MBPS",
        Max20Mbps = "MAX_20_MBPS",
        Max50Mbps = "MAX_50_MBPS",
    }
}

wire_enum! {
    pub enum ReservationMaximumFramerate {
        Max30Fps = "MAX_30_FPS",
        Max60Fps = "MAX_60_FPS",
    }
}

wire_enum! {
    pub enum ReservationResolution {
        Sd = "SD",
        Hd = "HD",
        Fhd = "FHD",
        Uhd = "UHD",
    }
}

wire_enum! {
    pub enum ReservationResourceType {
        Input = "INPUT",
        Output = "OUTPUT",
        Multiplex = "MULTIPLEX",
        Channel = "CHANNEL",
    }
}

wire_enum! {
    pub enum ReservationSpecialFeature {
        AdvancedAudio = "ADVANCED_AUDIO",
        AudioNormalization = "AUDIO_NORMALIZATION",
    }
}

wire_enum! {
    pub enum ReservationVideoQuality {
        Standard = "STANDARD",
        Enhanced = "ENHANCED",
        Premium = "PREMIUM",
    }
}

shape! {
    /// Resource a reservation or offering covers.
    pub struct ReservationResourceSpecification {
        pub channel_class: ChannelClass => with_channel_class,
        pub codec: ReservationCodec => with_codec,
        /// Bitrate ceiling the reservation prices for.
        pub maximum_bitrate: ReservationMaximumBitrate => with_maximum_bitrate,
        pub maximum_framerate: ReservationMaximumFramerate => with_maximum_framerate,
        pub resolution: ReservationResolution => with_resolution,
        pub resource_type: ReservationResourceType => with_resource_type,
        pub special_feature: ReservationSpecialFeature => with_special_feature,
        pub video_quality: ReservationVideoQuality => with_video_quality,
    }
}

shape! {
    /// A reservation offering.
    pub struct Offering {
        pub arn: String => with_arn,
        /// ISO 4217 currency code, e.g. `USD`.
        pub currency_code: String => with_currency_code,
        /// Term length, in `duration_units`.
        pub duration: i32 => with_duration,
        pub duration_units: OfferingDurationUnits => with_duration_units,
        /// Upfront price in `currency_code`.
        pub fixed_price: f64 => with_fixed_price,
        pub offering_description: String => with_offering_description,
        pub offering_id: String => with_offering_id,
        pub offering_type: OfferingType => with_offering_type,
        pub region: String => with_region,
        pub resource_specification: ReservationResourceSpecification => with_resource_specification,
        /// Hourly rate charged for the reserved resource.
        pub usage_price: f64 => with_usage_price,
    }
}

shape! {
    /// A purchased reservation.
    pub struct Reservation {
        pub arn: String => with_arn,
        /// Number of reserved resources.
        pub count: i32 => with_count,
        pub currency_code: String => with_currency_code,
        /// Term length, in `duration_units`.
        pub duration: i32 => with_duration,
        pub duration_units: OfferingDurationUnits => with_duration_units,
        /// Expiration, as an ISO 8601 timestamp.
        pub end: String => with_end,
        /// Upfront price in `currency_code`.
        pub fixed_price: f64 => with_fixed_price,
        /// User-chosen label.
        pub name: String => with_name,
        pub offering_description: String => with_offering_description,
        /// Offering the reservation was purchased from.
        pub offering_id: String => with_offering_id,
        pub offering_type: OfferingType => with_offering_type,
        pub region: String => with_region,
        pub reservation_id: String => with_reservation_id,
        pub resource_specification: ReservationResourceSpecification => with_resource_specification,
        /// Start, as an ISO 8601 timestamp.
        pub start: String => with_start,
        pub state: ReservationState => with_state,
        pub tags: Tags => with_tags,
        /// Hourly rate charged for each reserved resource.
        pub usage_price: f64 => with_usage_price,
    }
}

/// Parses an ISO 8601 timestamp as returned by MediaLive.
pub(crate) fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|time| time.with_timezone(&Utc))
}

impl Reservation {
    /// Start time; `None` when absent or not a valid timestamp.
    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.start.as_deref().and_then(parse_timestamp)
    }

    /// End time; `None` when absent or not a valid timestamp.
    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end.as_deref().and_then(parse_timestamp)
    }

    /// True when `at` falls inside the reservation term.
    pub fn covers(&self, at: DateTime<Utc>) -> bool {
        match (self.start_time(), self.end_time()) {
            (Some(start), Some(end)) => start <= at && at < end,
            _ => false,
        }
    }

    /// Total fixed price for all reserved units.
    pub fn total_fixed_price(&self) -> Option<f64> {
        Some(self.fixed_price? * f64::from(self.count.unwrap_or(1)))
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn reservation() -> Reservation {
        Reservation::new()
            .with_reservation_id("1234567")
            .with_start("2026-01-01T00:00:00Z")
            .with_end("2027-01-01T00:00:00Z")
            .with_count(2)
            .with_fixed_price(100.0)
    }

    #[test]
    fn test_term_parsing() {
        let reservation = reservation();
        assert_eq!(
            reservation.start_time(),
            Some(Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap())
        );
        assert!(reservation.covers(Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap()));
        assert!(!reservation.covers(Utc.with_ymd_and_hms(2027, 1, 1, 0, 0, 0).unwrap()));
    }

    #[test]
    fn test_invalid_timestamps() {
        let reservation = Reservation::new().with_start("next tuesday");
        assert!(reservation.start_time().is_none());
        assert!(!reservation.covers(Utc::now()));
    }

    #[test]
    fn test_total_fixed_price() {
        assert_eq!(reservation().total_fixed_price(), Some(200.0));
        assert_eq!(Reservation::new().total_fixed_price(), None);
    }

    #[test]
    fn test_resource_specification_values() {
        let spec = ReservationResourceSpecification::new()
            .with_resource_type(ReservationResourceType::Channel)
            .with_resolution(ReservationResolution::Fhd)
            .with_channel_class(ChannelClass::Standard);
        assert_eq!(
            spec.to_string(),
            "{ChannelClass: STANDARD,Resolution: FHD,ResourceType: CHANNEL}"
        );
    }
}
