//! Small records shared across the model.

use std::collections::BTreeMap;

use crate::shape::shape;
use crate::wire_enum::wire_enum;

/// Resource tags keyed by tag name.
pub type Tags = BTreeMap<String, String>;

shape! {
    /// A file or URL the encoder reads from, with optional credentials.
    pub struct InputLocation {
        /// Parameter Store key holding the password.
        pub password_param: String => with_password_param,
        /// Location of the file, e.g. `s3ssl://bucket/key.png`.
        pub uri: String => with_uri,
        pub username: String => with_username,
    }
}

shape! {
    /// Reference to an `OutputDestination` by its id.
    pub struct OutputLocationRef {
        /// Id of an `OutputDestination` on the channel.
        pub destination_ref_id: String => with_destination_ref_id,
    }
}

wire_enum! {
    /// Whether a channel or input runs one pipeline or two.
    pub enum ChannelClass {
        Standard = "STANDARD",
        SinglePipeline = "SINGLE_PIPELINE",
    }
}

wire_enum! {
    /// Verbosity of channel logs.
    pub enum LogLevel {
        Error = "ERROR",
        Warning = "WARNING",
        Info = "INFO",
        Debug = "DEBUG",
        Disabled = "DISABLED",
    }
}

wire_enum! {
    pub enum PipelineId {
        Pipeline0 = "PIPELINE_0",
        Pipeline1 = "PIPELINE_1",
    }
}

impl OutputLocationRef {
    /// Shorthand for a reference to `destination_ref_id`.
    pub fn to(destination_ref_id: impl Into<String>) -> Self {
        Self::new().with_destination_ref_id(destination_ref_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Shape;

    #[test]
    fn test_output_location_ref() {
        let reference = OutputLocationRef::to("dest-a");
        assert_eq!(reference.destination_ref_id.as_deref(), Some("dest-a"));
        assert_eq!(reference.to_string(), "{DestinationRefId: dest-a}");
        assert_eq!(reference.to_json().unwrap(), r#"{"destinationRefId":"dest-a"}"#);
    }

    #[test]
    fn test_input_location_omits_missing_credentials() {
        let location = InputLocation::new().with_uri("s3://bucket/slate.png");
        assert_eq!(location.to_string(), "{Uri: s3://bucket/slate.png}");
    }

    #[test]
    fn test_channel_class_values() {
        assert_eq!(ChannelClass::values(), &["STANDARD", "SINGLE_PIPELINE"]);
        assert_eq!(ChannelClass::from("SINGLE_PIPELINE"), ChannelClass::SinglePipeline);
    }
}
