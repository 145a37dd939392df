//! Data models for the AWS Elemental MediaLive API.
//!
//! This crate provides Serde-serializable records for:
//! - Channels, inputs, input security groups and input devices
//! - Encoder settings: video, audio and caption descriptions, output groups
//! - Multiplexes and multiplex programs
//! - Offerings, reservations and schedule actions
//! - Request and result shapes of every control-plane operation
//!
//! Every record field is optional. Records are built with chained `with_*`
//! calls or struct literals, compare structurally and render compactly:
//!
//! ```
//! use medialive_models::{AudioLanguageSelection, AudioLanguageSelectionPolicy};
//!
//! let selection = AudioLanguageSelection::new()
//!     .with_language_code("eng")
//!     .with_language_selection_policy(AudioLanguageSelectionPolicy::Strict);
//!
//! assert_eq!(
//!     selection,
//!     AudioLanguageSelection::new()
//!         .with_language_code("eng")
//!         .with_language_selection_policy("STRICT"),
//! );
//! assert_eq!(
//!     selection.to_string(),
//!     "{LanguageCode: eng,LanguageSelectionPolicy: STRICT}"
//! );
//! ```

pub mod shape;
pub mod wire_enum;

pub mod audio;
pub mod captions;
pub mod channel;
pub mod common;
pub mod containers;
pub mod encoder;
pub mod error;
pub mod input;
pub mod input_device;
pub mod multiplex;
pub mod offering;
pub mod operations;
pub mod output_groups;
pub mod schedule;
pub mod video;

// Re-export common types
pub use audio::{
    AudioCodecSettings, AudioDescription, AudioLanguageSelection, AudioLanguageSelectionPolicy,
    AudioSelector, AudioSelectorSettings,
};
pub use captions::{CaptionDescription, CaptionDestinationSettings, CaptionSelector};
pub use channel::{Channel, ChannelState, ChannelSummary, InputAttachment, InputSpecification};
pub use common::{ChannelClass, InputLocation, LogLevel, OutputLocationRef, PipelineId, Tags};
pub use encoder::EncoderSettings;
pub use error::{ConstraintViolation, ModelError, ModelResult};
pub use input::{Input, InputSecurityGroup, InputType};
pub use input_device::{InputDeviceIpScheme, InputDeviceSummary};
pub use multiplex::{Multiplex, MultiplexProgram, MultiplexSettings};
pub use offering::{Offering, Reservation};
pub use output_groups::{Output, OutputDestination, OutputGroup, OutputGroupSettings, OutputSettings};
pub use schedule::{ScheduleAction, ScheduleActionSettings, ScheduleActionStartSettings};
pub use shape::{FieldValue, Shape};
pub use video::{VideoCodecSettings, VideoDescription};
pub use wire_enum::{EnumParseError, UnknownVariant};
