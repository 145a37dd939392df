//! Demo: builds a single-pipeline HLS channel request and prints it.
//!
//! Run with: cargo run -p medialive-models --example channel_config_demo

use medialive_models::audio::{AacSettings, AudioLanguageSelection};
use medialive_models::channel::InputSettings;
use medialive_models::containers::M3u8Settings;
use medialive_models::operations::CreateChannelRequest;
use medialive_models::output_groups::{HlsGroupSettings, HlsOutputSettings, StandardHlsSettings};
use medialive_models::video::{H264RateControlMode, H264Settings};
use medialive_models::{
    AudioDescription, AudioLanguageSelectionPolicy, AudioSelector, ChannelClass, EncoderSettings,
    InputAttachment, Output, OutputDestination, OutputGroup, OutputLocationRef, Shape,
    VideoDescription,
};

fn main() -> anyhow::Result<()> {
    let video = VideoDescription::new()
        .with_name("video_720p")
        .with_width(1280)
        .with_height(720)
        .with_codec_settings(
            H264Settings::new()
                .with_rate_control_mode(H264RateControlMode::Cbr)
                .with_bitrate(3_000_000)
                .with_framerate_numerator(30)
                .with_framerate_denominator(1),
        );

    let audio = AudioDescription::new()
        .with_name("audio_aac")
        .with_audio_selector_name("english")
        .with_codec_settings(AacSettings::new().with_bitrate(128_000.0).with_sample_rate(48_000.0));

    let hls = OutputGroup::new()
        .with_name("hls")
        .with_output_group_settings(
            HlsGroupSettings::new()
                .with_destination(OutputLocationRef::to("hls-destination"))
                .with_segment_length(6),
        )
        .push_output(
            Output::new()
                .with_video_description_name("video_720p")
                .push_audio_description_name("audio_aac")
                .with_output_settings(
                    HlsOutputSettings::new()
                        .with_name_modifier("_720p")
                        .with_hls_settings(
                            StandardHlsSettings::new().with_m3u8_settings(M3u8Settings::new()),
                        ),
                ),
        );

    let encoder = EncoderSettings::new()
        .push_video_description(video)
        .push_audio_description(audio)
        .push_output_group(hls);

    let dangling = encoder.dangling_description_names();
    anyhow::ensure!(dangling.is_empty(), "unresolved descriptions: {:?}", dangling);

    let request = CreateChannelRequest::new()
        .with_name("demo-channel")
        .with_channel_class(ChannelClass::SinglePipeline)
        .push_destination(OutputDestination::new().with_id("hls-destination"))
        .push_input_attachment(
            InputAttachment::new()
                .with_input_attachment_name("primary")
                .with_input_id("1234567")
                .with_input_settings(
                    InputSettings::new().push_audio_selector(
                        AudioSelector::new().with_name("english").with_selector_settings(
                            AudioLanguageSelection::new()
                                .with_language_code("eng")
                                .with_language_selection_policy(AudioLanguageSelectionPolicy::Loose),
                        ),
                    ),
                ),
        )
        .with_encoder_settings(encoder);

    request.validate()?;

    println!("{}", "=".repeat(60));
    println!("{}", request);
    println!("{}", "=".repeat(60));
    println!("{}", request.to_json_pretty()?);

    Ok(())
}
