//! Encoder settings: the full encode and package configuration of a channel.

use crate::audio::AudioDescription;
use crate::captions::CaptionDescription;
use crate::output_groups::OutputGroup;
use crate::shape::shape;
use crate::video::VideoDescription;
use crate::wire_enum::wire_enum;
use crate::InputLocation;

wire_enum! {
    pub enum GlobalConfigurationInputEndAction {
        None = "NONE",
        SwitchAndLoopInputs = "SWITCH_AND_LOOP_INPUTS",
    }
}

wire_enum! {
    pub enum GlobalConfigurationOutputLockingMode {
        EpochLocking = "EPOCH_LOCKING",
        PipelineLocking = "PIPELINE_LOCKING",
    }
}

wire_enum! {
    pub enum GlobalConfigurationOutputTimingSource {
        InputClock = "INPUT_CLOCK",
        SystemClock = "SYSTEM_CLOCK",
    }
}

wire_enum! {
    pub enum GlobalConfigurationLowFramerateInputs {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }
}

wire_enum! {
    pub enum InputLossImageType {
        Color = "COLOR",
        Slate = "SLATE",
    }
}

wire_enum! {
    pub enum TimecodeConfigSource {
        Embedded = "EMBEDDED",
        Systemclock = "SYSTEMCLOCK",
        Zerobased = "ZEROBASED",
    }
}

wire_enum! {
    pub enum AvailBlankingState {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }
}

shape! {
    /// What the encoder emits while the input is lost.
    pub struct InputLossBehavior {
        /// Milliseconds of black before switching to the loss image; 1000000
        /// means never.
        pub black_frame_msec: i32 where min = 0, max = 1000000 => with_black_frame_msec,
        /// Six-digit hex RGB color, e.g. `000000`.
        pub input_loss_image_color: String => with_input_loss_image_color,
        pub input_loss_image_slate: InputLocation => with_input_loss_image_slate,
        pub input_loss_image_type: InputLossImageType => with_input_loss_image_type,
        /// How long to repeat the last frame before showing the loss slate.
        pub repeat_frame_msec: i32 where min = 0, max = 1000000 => with_repeat_frame_msec,
    }
}

shape! {
    pub struct GlobalConfiguration {
        /// Gain applied to every audio input, in dB.
        pub initial_audio_gain: i32 where min = -60, max = 60 => with_initial_audio_gain,
        pub input_end_action: GlobalConfigurationInputEndAction => with_input_end_action,
        pub input_loss_behavior: InputLossBehavior => with_input_loss_behavior,
        pub output_locking_mode: GlobalConfigurationOutputLockingMode => with_output_locking_mode,
        pub output_timing_source: GlobalConfigurationOutputTimingSource => with_output_timing_source,
        /// Accept inputs below 1 fps.
        pub support_low_framerate_inputs: GlobalConfigurationLowFramerateInputs => with_support_low_framerate_inputs,
    }
}

shape! {
    pub struct TimecodeConfig {
        pub source: TimecodeConfigSource => with_source,
        /// Frames of drift tolerated before resyncing to the source timecode.
        pub sync_threshold: i32 where min = 1, max = 1000000 => with_sync_threshold,
    }
}

shape! {
    /// Image shown over SCTE-35 avails.
    pub struct AvailBlanking {
        pub avail_blanking_image: InputLocation => with_avail_blanking_image,
        pub state: AvailBlankingState => with_state,
    }
}

shape! {
    /// Encode and package configuration of a channel.
    pub struct EncoderSettings {
        pub audio_descriptions: Vec<AudioDescription> => with_audio_descriptions + push_audio_description(AudioDescription),
        pub avail_blanking: AvailBlanking => with_avail_blanking,
        pub caption_descriptions: Vec<CaptionDescription> => with_caption_descriptions + push_caption_description(CaptionDescription),
        pub global_configuration: GlobalConfiguration => with_global_configuration,
        pub output_groups: Vec<OutputGroup> => with_output_groups + push_output_group(OutputGroup),
        pub timecode_config: TimecodeConfig => with_timecode_config,
        pub video_descriptions: Vec<VideoDescription> => with_video_descriptions + push_video_description(VideoDescription),
    }
}

impl EncoderSettings {
    /// Looks up a video description by name.
    pub fn video_description(&self, name: &str) -> Option<&VideoDescription> {
        self.video_descriptions
            .as_deref()?
            .iter()
            .find(|description| description.name.as_deref() == Some(name))
    }

    /// Looks up an audio description by name.
    pub fn audio_description(&self, name: &str) -> Option<&AudioDescription> {
        self.audio_descriptions
            .as_deref()?
            .iter()
            .find(|description| description.name.as_deref() == Some(name))
    }

    /// Description names referenced by outputs but not declared here.
    pub fn dangling_description_names(&self) -> Vec<String> {
        fn names<'a, T: 'a>(
            items: &'a Option<Vec<T>>,
            name: impl Fn(&'a T) -> Option<&'a String>,
        ) -> Vec<&'a str> {
            items.iter().flatten().filter_map(name).map(String::as_str).collect()
        }

        let video = names(&self.video_descriptions, |d| d.name.as_ref());
        let audio = names(&self.audio_descriptions, |d| d.name.as_ref());
        let captions = names(&self.caption_descriptions, |d| d.name.as_ref());

        let mut missing = Vec::new();
        for output in self
            .output_groups
            .iter()
            .flatten()
            .flat_map(|group| group.outputs.iter().flatten())
        {
            let referenced = output
                .video_description_name
                .iter()
                .map(|name| (name, &video))
                .chain(output.audio_description_names.iter().flatten().map(|name| (name, &audio)))
                .chain(
                    output
                        .caption_description_names
                        .iter()
                        .flatten()
                        .map(|name| (name, &captions)),
                );
            for (name, declared) in referenced {
                if !declared.contains(&name.as_str()) {
                    missing.push(name.clone());
                }
            }
        }
        missing.sort();
        missing.dedup();
        missing
    }
}
