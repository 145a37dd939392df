//! Audio selectors, audio descriptions and audio codec settings.

use crate::shape::{settings_union, shape};
use crate::wire_enum::wire_enum;

wire_enum! {
    /// How strictly an audio selector matches the requested language.
    pub enum AudioLanguageSelectionPolicy {
        Loose = "LOOSE",
        Strict = "STRICT",
    }
}

wire_enum! {
    pub enum AudioType {
        CleanEffects = "CLEAN_EFFECTS",
        HearingImpaired = "HEARING_IMPAIRED",
        Undefined = "UNDEFINED",
        VisualImpairedCommentary = "VISUAL_IMPAIRED_COMMENTARY",
    }
}

wire_enum! {
    pub enum AudioDescriptionAudioTypeControl {
        FollowInput = "FOLLOW_INPUT",
        UseConfigured = "USE_CONFIGURED",
    }
}

wire_enum! {
    pub enum AudioDescriptionLanguageCodeControl {
        FollowInput = "FOLLOW_INPUT",
        UseConfigured = "USE_CONFIGURED",
    }
}

wire_enum! {
    pub enum AudioNormalizationAlgorithm {
        Itu17701 = "ITU_1770_1",
        Itu17702 = "ITU_1770_2",
    }
}

wire_enum! {
    pub enum AudioNormalizationAlgorithmControl {
        CorrectAudio = "CORRECT_AUDIO",
    }
}

wire_enum! {
    pub enum AacCodingMode {
        AdReceiverMix = "AD_RECEIVER_MIX",
        CodingMode10 = "CODING_MODE_1_0",
        CodingMode11 = "CODING_MODE_1_1",
        CodingMode20 = "CODING_MODE_2_0",
        CodingMode51 = "CODING_MODE_5_1",
    }
}

wire_enum! {
    pub enum AacInputType {
        BroadcasterMixedAd = "BROADCASTER_MIXED_AD",
        Normal = "NORMAL",
    }
}

wire_enum! {
    pub enum AacProfile {
        Hev1 = "HEV1",
        Hev2 = "HEV2",
        Lc = "LC",
    }
}

wire_enum! {
    pub enum AacRateControlMode {
        Cbr = "CBR",
        Vbr = "VBR",
    }
}

wire_enum! {
    pub enum AacRawFormat {
        LatmLoas = "LATM_LOAS",
        None = "NONE",
    }
}

wire_enum! {
    pub enum AacSpec {
        Mpeg2 = "MPEG2",
        Mpeg4 = "MPEG4",
    }
}

wire_enum! {
    pub enum AacVbrQuality {
        High = "HIGH",
        Low = "LOW",
        MediumHigh = "MEDIUM_HIGH",
        MediumLow = "MEDIUM_LOW",
    }
}

wire_enum! {
    pub enum Ac3BitstreamMode {
        Commentary = "COMMENTARY",
        CompleteMain = "COMPLETE_MAIN",
        Dialogue = "DIALOGUE",
        Emergency = "EMERGENCY",
        HearingImpaired = "HEARING_IMPAIRED",
        MusicAndEffects = "MUSIC_AND_EFFECTS",
        VisuallyImpaired = "VISUALLY_IMPAIRED",
        VoiceOver = "VOICE_OVER",
    }
}

wire_enum! {
    pub enum Ac3CodingMode {
        CodingMode10 = "CODING_MODE_1_0",
        CodingMode11 = "CODING_MODE_1_1",
        CodingMode20 = "CODING_MODE_2_0",
        CodingMode32Lfe = "CODING_MODE_3_2_LFE",
    }
}

wire_enum! {
    pub enum Ac3DrcProfile {
        FilmStandard = "FILM_STANDARD",
        None = "NONE",
    }
}

wire_enum! {
    pub enum Ac3LfeFilter {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }
}

wire_enum! {
    pub enum Ac3MetadataControl {
        FollowInput = "FOLLOW_INPUT",
        UseConfigured = "USE_CONFIGURED",
    }
}

wire_enum! {
    pub enum Eac3AttenuationControl {
        Attenuate3Db = "ATTENUATE_3_DB",
        None = "NONE",
    }
}

wire_enum! {
    pub enum Eac3BitstreamMode {
        Commentary = "COMMENTARY",
        CompleteMain = "COMPLETE_MAIN",
        Emergency = "EMERGENCY",
        HearingImpaired = "HEARING_IMPAIRED",
        VisuallyImpaired = "VISUALLY_IMPAIRED",
    }
}

wire_enum! {
    pub enum Eac3CodingMode {
        CodingMode10 = "CODING_MODE_1_0",
        CodingMode20 = "CODING_MODE_2_0",
        CodingMode32 = "CODING_MODE_3_2",
    }
}

wire_enum! {
    pub enum Eac3DcFilter {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }
}

wire_enum! {
    pub enum Eac3DrcLine {
        FilmLight = "FILM_LIGHT",
        FilmStandard = "FILM_STANDARD",
        MusicLight = "MUSIC_LIGHT",
        MusicStandard = "MUSIC_STANDARD",
        None = "NONE",
        Speech = "SPEECH",
    }
}

wire_enum! {
    pub enum Eac3DrcRf {
        FilmLight = "FILM_LIGHT",
        FilmStandard = "FILM_STANDARD",
        MusicLight = "MUSIC_LIGHT",
        MusicStandard = "MUSIC_STANDARD",
        None = "NONE",
        Speech = "SPEECH",
    }
}

wire_enum! {
    pub enum Eac3LfeControl {
        Lfe = "LFE",
        NoLfe = "NO_LFE",
    }
}

wire_enum! {
    pub enum Eac3LfeFilter {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }
}

wire_enum! {
    pub enum Eac3MetadataControl {
        FollowInput = "FOLLOW_INPUT",
        UseConfigured = "USE_CONFIGURED",
    }
}

wire_enum! {
    pub enum Eac3PassthroughControl {
        NoPassthrough = "NO_PASSTHROUGH",
        WhenPossible = "WHEN_POSSIBLE",
    }
}

wire_enum! {
    pub enum Eac3PhaseControl {
        NoShift = "NO_SHIFT",
        Shift90Degrees = "SHIFT_90_DEGREES",
    }
}

wire_enum! {
    pub enum Eac3StereoDownmix {
        Dpl2 = "DPL2",
        LoRo = "LO_RO",
        LtRt = "LT_RT",
        NotIndicated = "NOT_INDICATED",
    }
}

wire_enum! {
    pub enum Eac3SurroundExMode {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
        NotIndicated = "NOT_INDICATED",
    }
}

wire_enum! {
    pub enum Eac3SurroundMode {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
        NotIndicated = "NOT_INDICATED",
    }
}

wire_enum! {
    pub enum Mp2CodingMode {
        CodingMode10 = "CODING_MODE_1_0",
        CodingMode20 = "CODING_MODE_2_0",
    }
}

shape! {
    /// Selects an audio track by language.
    pub struct AudioLanguageSelection {
        /// ISO 639-2 three-letter code, e.g. `eng`.
        pub language_code: String => with_language_code,
        /// `LOOSE` falls back to the lowest PID when no track matches; `STRICT`
        /// emits silence instead.
        pub language_selection_policy: AudioLanguageSelectionPolicy => with_language_selection_policy,
    }
}

shape! {
    /// Selects an audio track by PID.
    pub struct AudioPidSelection {
        /// Transport stream PID carrying the audio.
        pub pid: i32 where min = 0, max = 8191 => with_pid,
    }
}

settings_union! {
    /// How an audio selector picks its track.
    pub enum AudioSelectorSettings {
        AudioLanguageSelection(AudioLanguageSelection) = "audioLanguageSelection",
        AudioPidSelection(AudioPidSelection) = "audioPidSelection",
    }
}

shape! {
    /// Named audio selector referenced by audio descriptions.
    pub struct AudioSelector {
        pub name: String => with_name,
        pub selector_settings: AudioSelectorSettings => with_selector_settings,
    }
}

shape! {
    pub struct AudioNormalizationSettings {
        pub algorithm: AudioNormalizationAlgorithm => with_algorithm,
        pub algorithm_control: AudioNormalizationAlgorithmControl => with_algorithm_control,
        /// Target loudness in LKFS.
        pub target_lkfs: f64 where min = -59.0, max = 0.0 => with_target_lkfs,
    }
}

shape! {
    pub struct InputChannelLevel {
        /// Gain in dB.
        pub gain: i32 where min = -60, max = 6 => with_gain,
        pub input_channel: i32 where min = 0, max = 15 => with_input_channel,
    }
}

shape! {
    pub struct AudioChannelMapping {
        /// Gain per input channel feeding this output channel.
        pub input_channel_levels: Vec<InputChannelLevel> => with_input_channel_levels + push_input_channel_level(InputChannelLevel),
        pub output_channel: i32 where min = 0, max = 7 => with_output_channel,
    }
}

shape! {
    /// Channel remix applied before encoding.
    pub struct RemixSettings {
        pub channel_mappings: Vec<AudioChannelMapping> => with_channel_mappings + push_channel_mapping(AudioChannelMapping),
        pub channels_in: i32 where min = 1, max = 16 => with_channels_in,
        pub channels_out: i32 where min = 1, max = 8 => with_channels_out,
    }
}

shape! {
    pub struct AacSettings {
        /// Average bitrate in bits/second.
        pub bitrate: f64 => with_bitrate,
        pub coding_mode: AacCodingMode => with_coding_mode,
        pub input_type: AacInputType => with_input_type,
        pub profile: AacProfile => with_profile,
        pub rate_control_mode: AacRateControlMode => with_rate_control_mode,
        pub raw_format: AacRawFormat => with_raw_format,
        /// Sample rate in Hz.
        pub sample_rate: f64 => with_sample_rate,
        pub spec: AacSpec => with_spec,
        pub vbr_quality: AacVbrQuality => with_vbr_quality,
    }
}

shape! {
    pub struct Ac3Settings {
        /// Average bitrate in bits/second.
        pub bitrate: f64 => with_bitrate,
        /// Dolby bitstream mode signalled to decoders (`bsmod`).
        pub bitstream_mode: Ac3BitstreamMode => with_bitstream_mode,
        pub coding_mode: Ac3CodingMode => with_coding_mode,
        pub dialnorm: i32 where min = 1, max = 31 => with_dialnorm,
        pub drc_profile: Ac3DrcProfile => with_drc_profile,
        pub lfe_filter: Ac3LfeFilter => with_lfe_filter,
        pub metadata_control: Ac3MetadataControl => with_metadata_control,
    }
}

shape! {
    /// Dolby Digital Plus encoding.
    pub struct Eac3Settings {
        /// Applies a 3 dB attenuation to the surround channels. Only used for
        /// 3/2 coding mode.
        pub attenuation_control: Eac3AttenuationControl => with_attenuation_control,
        /// Average bitrate in bits/second.
        pub bitrate: f64 => with_bitrate,
        pub bitstream_mode: Eac3BitstreamMode => with_bitstream_mode,
        pub coding_mode: Eac3CodingMode => with_coding_mode,
        pub dc_filter: Eac3DcFilter => with_dc_filter,
        /// Dialnorm metadata; absent passes through the input value.
        pub dialnorm: i32 where min = 1, max = 31 => with_dialnorm,
        pub drc_line: Eac3DrcLine => with_drc_line,
        pub drc_rf: Eac3DrcRf => with_drc_rf,
        pub lfe_control: Eac3LfeControl => with_lfe_control,
        pub lfe_filter: Eac3LfeFilter => with_lfe_filter,
        /// Left-only/right-only center mix level, in dB.
        pub lo_ro_center_mix_level: f64 => with_lo_ro_center_mix_level,
        /// Left-only/right-only surround mix level, in dB.
        pub lo_ro_surround_mix_level: f64 => with_lo_ro_surround_mix_level,
        /// Left-total/right-total center mix level, in dB.
        pub lt_rt_center_mix_level: f64 => with_lt_rt_center_mix_level,
        /// Left-total/right-total surround mix level, in dB.
        pub lt_rt_surround_mix_level: f64 => with_lt_rt_surround_mix_level,
        pub metadata_control: Eac3MetadataControl => with_metadata_control,
        /// `WHEN_POSSIBLE` passes E-AC-3 input through unchanged.
        pub passthrough_control: Eac3PassthroughControl => with_passthrough_control,
        pub phase_control: Eac3PhaseControl => with_phase_control,
        pub stereo_downmix: Eac3StereoDownmix => with_stereo_downmix,
        pub surround_ex_mode: Eac3SurroundExMode => with_surround_ex_mode,
        pub surround_mode: Eac3SurroundMode => with_surround_mode,
    }
}

shape! {
    pub struct Mp2Settings {
        /// Average bitrate in bits/second.
        pub bitrate: f64 => with_bitrate,
        pub coding_mode: Mp2CodingMode => with_coding_mode,
        /// Sample rate in Hz.
        pub sample_rate: f64 => with_sample_rate,
    }
}

shape! {
    /// Passes the source audio through without re-encoding.
    pub struct PassThroughSettings {}
}

settings_union! {
    /// Codec used by an audio description.
    pub enum AudioCodecSettings {
        AacSettings(AacSettings) = "aacSettings",
        Ac3Settings(Ac3Settings) = "ac3Settings",
        Eac3Settings(Eac3Settings) = "eac3Settings",
        Mp2Settings(Mp2Settings) = "mp2Settings",
        PassThroughSettings(PassThroughSettings) = "passThroughSettings",
    }
}

shape! {
    /// One encoded audio rendition.
    pub struct AudioDescription {
        pub audio_normalization_settings: AudioNormalizationSettings => with_audio_normalization_settings,
        /// Name of the `AudioSelector` feeding this description.
        pub audio_selector_name: String => with_audio_selector_name,
        pub audio_type: AudioType => with_audio_type,
        pub audio_type_control: AudioDescriptionAudioTypeControl => with_audio_type_control,
        pub codec_settings: AudioCodecSettings => with_codec_settings,
        pub language_code: String => with_language_code,
        pub language_code_control: AudioDescriptionLanguageCodeControl => with_language_code_control,
        pub name: String => with_name,
        pub remix_settings: RemixSettings => with_remix_settings,
        /// Label for the rendition in HLS and Smooth manifests.
        pub stream_name: String => with_stream_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Shape;

    #[test]
    fn test_language_selection_scenario() {
        let by_enum = AudioLanguageSelection::new()
            .with_language_code("eng")
            .with_language_selection_policy(AudioLanguageSelectionPolicy::Strict);
        let by_string = AudioLanguageSelection::new()
            .with_language_code("eng")
            .with_language_selection_policy("STRICT");

        assert_eq!(
            by_enum.language_selection_policy.as_ref().map(|p| p.as_str()),
            Some("STRICT")
        );
        assert_eq!(by_enum, by_string);
        assert_eq!(by_enum.hash_code(), by_string.hash_code());
        assert!(by_enum
            .to_string()
            .contains("LanguageCode: eng,LanguageSelectionPolicy: STRICT"));
    }

    #[test]
    fn test_selector_union_wire_shape() {
        let selector = AudioSelector::new()
            .with_name("english")
            .with_selector_settings(AudioPidSelection::new().with_pid(257));

        assert_eq!(
            selector.to_json().unwrap(),
            r#"{"name":"english","selectorSettings":{"audioPidSelection":{"pid":257}}}"#
        );
        assert_eq!(
            selector.to_string(),
            "{Name: english,SelectorSettings: {AudioPidSelection: {Pid: 257}}}"
        );
    }

    #[test]
    fn test_codec_union_from_json() {
        let json = r#"{
            "audioSelectorName": "english",
            "name": "audio_1",
            "codecSettings": {"aacSettings": {"bitrate": 192000, "codingMode": "CODING_MODE_2_0"}}
        }"#;
        let description = AudioDescription::from_json(json).unwrap();

        match description.codec_settings.as_ref().unwrap() {
            AudioCodecSettings::AacSettings(aac) => {
                assert_eq!(aac.bitrate, Some(192000.0));
                assert_eq!(aac.coding_mode, Some(AacCodingMode::CodingMode20));
            }
            other => panic!("unexpected codec {}", other.member_name()),
        }
    }

    #[test]
    fn test_eac3_ranges() {
        let settings = Eac3Settings::new()
            .with_dialnorm(0)
            .with_bitrate(384000.0)
            .with_coding_mode(Eac3CodingMode::CodingMode32);
        let err = settings.validate().unwrap_err();
        assert_eq!(err.violations().len(), 1);
        assert_eq!(err.violations()[0].path, "dialnorm");

        assert!(settings.with_dialnorm(24).validate().is_ok());
    }

    #[test]
    fn test_remix_channels_in_wire_name() {
        let remix = RemixSettings::new().with_channels_in(2).with_channels_out(2);
        assert_eq!(remix.to_json().unwrap(), r#"{"channelsIn":2,"channelsOut":2}"#);
    }

    #[test]
    fn test_normalization_negative_range() {
        assert!(AudioNormalizationSettings::new()
            .with_target_lkfs(-24.0)
            .validate()
            .is_ok());
        assert!(AudioNormalizationSettings::new()
            .with_target_lkfs(-60.0)
            .validate()
            .is_err());
    }
}
