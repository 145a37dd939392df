//! Video selectors, video descriptions and video codec settings.

use crate::shape::{settings_union, shape};
use crate::wire_enum::wire_enum;

wire_enum! {
    pub enum AfdSignaling {
        Auto = "AUTO",
        Fixed = "FIXED",
        None = "NONE",
    }
}

wire_enum! {
    /// Active Format Description code written when `AfdSignaling` is `FIXED`.
    pub enum FixedAfd {
        Afd0000 = "AFD_0000",
        Afd0010 = "AFD_0010",
        Afd0011 = "AFD_0011",
        Afd0100 = "AFD_0100",
        Afd1000 = "AFD_1000",
        Afd1001 = "AFD_1001",
        Afd1010 = "AFD_1010",
        Afd1011 = "AFD_1011",
        Afd1101 = "AFD_1101",
        Afd1110 = "AFD_1110",
        Afd1111 = "AFD_1111",
    }
}

wire_enum! {
    pub enum H264AdaptiveQuantization {
        High = "HIGH",
        Higher = "HIGHER",
        Low = "LOW",
        Max = "MAX",
        Medium = "MEDIUM",
        Off = "OFF",
    }
}

wire_enum! {
    pub enum H264ColorMetadata {
        Ignore = "IGNORE",
        Insert = "INSERT",
    }
}

wire_enum! {
    pub enum H264EntropyEncoding {
        Cabac = "CABAC",
        Cavlc = "CAVLC",
    }
}

wire_enum! {
    pub enum H264FlickerAq {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }
}

wire_enum! {
    pub enum H264ForceFieldPictures {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }
}

wire_enum! {
    pub enum H264FramerateControl {
        InitializeFromSource = "INITIALIZE_FROM_SOURCE",
        Specified = "SPECIFIED",
    }
}

wire_enum! {
    pub enum H264GopBReference {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }
}

wire_enum! {
    pub enum H264GopSizeUnits {
        Frames = "FRAMES",
        Seconds = "SECONDS",
    }
}

wire_enum! {
    pub enum H264Level {
        H264Level1 = "H264_LEVEL_1",
        H264Level11 = "H264_LEVEL_1_1",
        H264Level12 = "H264_LEVEL_1_2",
        H264Level13 = "H264_LEVEL_1_3",
        H264Level2 = "H264_LEVEL_2",
        H264Level21 = "H264_LEVEL_2_1",
        H264Level22 = "H264_LEVEL_2_2",
        H264Level3 = "H264_LEVEL_3",
        H264Level31 = "H264_LEVEL_3_1",
        H264Level32 = "H264_LEVEL_3_2",
        H264Level4 = "H264_LEVEL_4",
        H264Level41 = "H264_LEVEL_4_1",
        H264Level42 = "H264_LEVEL_4_2",
        H264Level5 = "H264_LEVEL_5",
        H264Level51 = "H264_LEVEL_5_1",
        H264Level52 = "H264_LEVEL_5_2",
        H264LevelAuto = "H264_LEVEL_AUTO",
    }
}

wire_enum! {
    pub enum H264LookAheadRateControl {
        High = "HIGH",
        Low = "LOW",
        Medium = "MEDIUM",
    }
}

wire_enum! {
    pub enum H264ParControl {
        InitializeFromSource = "INITIALIZE_FROM_SOURCE",
        Specified = "SPECIFIED",
    }
}

wire_enum! {
    pub enum H264Profile {
        Baseline = "BASELINE",
        High = "HIGH",
        High10Bit = "HIGH_10BIT",
        High422 = "HIGH_422",
        High42210Bit = "HIGH_422_10BIT",
        Main = "MAIN",
    }
}

wire_enum! {
    pub enum H264QualityLevel {
        EnhancedQuality = "ENHANCED_QUALITY",
        StandardQuality = "STANDARD_QUALITY",
    }
}

wire_enum! {
    pub enum H264RateControlMode {
        Cbr = "CBR",
        Multiplex = "MULTIPLEX",
        Qvbr = "QVBR",
        Vbr = "VBR",
    }
}

wire_enum! {
    pub enum H264ScanType {
        Interlaced = "INTERLACED",
        Progressive = "PROGRESSIVE",
    }
}

wire_enum! {
    pub enum H264SceneChangeDetect {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }
}

wire_enum! {
    pub enum H264SpatialAq {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }
}

wire_enum! {
    pub enum H264SubGopLength {
        Dynamic = "DYNAMIC",
        Fixed = "FIXED",
    }
}

wire_enum! {
    pub enum H264Syntax {
        Default = "DEFAULT",
        Rp2027 = "RP2027",
    }
}

wire_enum! {
    pub enum H264TemporalAq {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }
}

wire_enum! {
    pub enum H264TimecodeInsertionBehavior {
        Disabled = "DISABLED",
        PicTimingSei = "PIC_TIMING_SEI",
    }
}

wire_enum! {
    pub enum H265AdaptiveQuantization {
        High = "HIGH",
        Higher = "HIGHER",
        Low = "LOW",
        Max = "MAX",
        Medium = "MEDIUM",
        Off = "OFF",
    }
}

wire_enum! {
    pub enum H265AlternativeTransferFunction {
        Insert = "INSERT",
        Omit = "OMIT",
    }
}

wire_enum! {
    pub enum H265ColorMetadata {
        Ignore = "IGNORE",
        Insert = "INSERT",
    }
}

wire_enum! {
    pub enum H265FlickerAq {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }
}

wire_enum! {
    pub enum H265GopSizeUnits {
        Frames = "FRAMES",
        Seconds = "SECONDS",
    }
}

wire_enum! {
    pub enum H265Level {
        H265Level1 = "H265_LEVEL_1",
        H265Level2 = "H265_LEVEL_2",
        H265Level21 = "H265_LEVEL_2_1",
        H265Level3 = "H265_LEVEL_3",
        H265Level31 = "H265_LEVEL_3_1",
        H265Level4 = "H265_LEVEL_4",
        H265Level41 = "H265_LEVEL_4_1",
        H265Level5 = "H265_LEVEL_5",
        H265Level51 = "H265_LEVEL_5_1",
        H265Level52 = "H265_LEVEL_5_2",
        H265Level6 = "H265_LEVEL_6",
        H265Level61 = "H265_LEVEL_6_1",
        H265Level62 = "H265_LEVEL_6_2",
        H265LevelAuto = "H265_LEVEL_AUTO",
    }
}

wire_enum! {
    pub enum H265LookAheadRateControl {
        High = "HIGH",
        Low = "LOW",
        Medium = "MEDIUM",
    }
}

wire_enum! {
    pub enum H265Profile {
        Main = "MAIN",
        Main10Bit = "MAIN_10BIT",
    }
}

wire_enum! {
    pub enum H265RateControlMode {
        Cbr = "CBR",
        Multiplex = "MULTIPLEX",
        Qvbr = "QVBR",
    }
}

wire_enum! {
    pub enum H265ScanType {
        Interlaced = "INTERLACED",
        Progressive = "PROGRESSIVE",
    }
}

wire_enum! {
    pub enum H265SceneChangeDetect {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }
}

wire_enum! {
    pub enum H265Tier {
        High = "HIGH",
        Main = "MAIN",
    }
}

wire_enum! {
    pub enum H265TimecodeInsertionBehavior {
        Disabled = "DISABLED",
        PicTimingSei = "PIC_TIMING_SEI",
    }
}

wire_enum! {
    pub enum TemporalFilterPostFilterSharpening {
        Auto = "AUTO",
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }
}

wire_enum! {
    pub enum TemporalFilterStrength {
        Auto = "AUTO",
        Strength1 = "STRENGTH_1",
        Strength2 = "STRENGTH_2",
        Strength3 = "STRENGTH_3",
        Strength4 = "STRENGTH_4",
        Strength5 = "STRENGTH_5",
        Strength6 = "STRENGTH_6",
        Strength7 = "STRENGTH_7",
        Strength8 = "STRENGTH_8",
        Strength9 = "STRENGTH_9",
        Strength10 = "STRENGTH_10",
        Strength11 = "STRENGTH_11",
        Strength12 = "STRENGTH_12",
        Strength13 = "STRENGTH_13",
        Strength14 = "STRENGTH_14",
        Strength15 = "STRENGTH_15",
        Strength16 = "STRENGTH_16",
    }
}

wire_enum! {
    pub enum FrameCaptureIntervalUnit {
        Milliseconds = "MILLISECONDS",
        Seconds = "SECONDS",
    }
}

wire_enum! {
    pub enum VideoDescriptionRespondToAfd {
        None = "NONE",
        Passthrough = "PASSTHROUGH",
        Respond = "RESPOND",
    }
}

wire_enum! {
    pub enum VideoDescriptionScalingBehavior {
        Default = "DEFAULT",
        StretchToOutput = "STRETCH_TO_OUTPUT",
    }
}

wire_enum! {
    pub enum VideoSelectorColorSpace {
        Follow = "FOLLOW",
        Rec601 = "REC_601",
        Rec709 = "REC_709",
    }
}

wire_enum! {
    pub enum VideoSelectorColorSpaceUsage {
        Fallback = "FALLBACK",
        Force = "FORCE",
    }
}

shape! {
    pub struct ColorSpacePassthroughSettings {}
}

shape! {
    pub struct Rec601Settings {}
}

shape! {
    pub struct Rec709Settings {}
}

shape! {
    /// HDR10 static metadata.
    pub struct Hdr10Settings {
        /// Maximum content light level in nits.
        pub max_cll: i32 where min = 0, max = 32768 => with_max_cll,
        /// Maximum frame-average light level in nits.
        pub max_fall: i32 where min = 0, max = 32768 => with_max_fall,
    }
}

settings_union! {
    pub enum H264ColorSpaceSettings {
        ColorSpacePassthroughSettings(ColorSpacePassthroughSettings) = "colorSpacePassthroughSettings",
        Rec601Settings(Rec601Settings) = "rec601Settings",
        Rec709Settings(Rec709Settings) = "rec709Settings",
    }
}

settings_union! {
    pub enum H265ColorSpaceSettings {
        ColorSpacePassthroughSettings(ColorSpacePassthroughSettings) = "colorSpacePassthroughSettings",
        Hdr10Settings(Hdr10Settings) = "hdr10Settings",
        Rec601Settings(Rec601Settings) = "rec601Settings",
        Rec709Settings(Rec709Settings) = "rec709Settings",
    }
}

shape! {
    pub struct TemporalFilterSettings {
        pub post_filter_sharpening: TemporalFilterPostFilterSharpening => with_post_filter_sharpening,
        pub strength: TemporalFilterStrength => with_strength,
    }
}

shape! {
    pub struct H264FilterSettings {
        pub temporal_filter_settings: TemporalFilterSettings => with_temporal_filter_settings,
    }
}

shape! {
    pub struct H265FilterSettings {
        pub temporal_filter_settings: TemporalFilterSettings => with_temporal_filter_settings,
    }
}

shape! {
    /// AVC encoding parameters.
    pub struct H264Settings {
        pub adaptive_quantization: H264AdaptiveQuantization => with_adaptive_quantization,
        pub afd_signaling: AfdSignaling => with_afd_signaling,
        /// Average bitrate in bits/second. Required for CBR and VBR.
        pub bitrate: i32 where min = 1000 => with_bitrate,
        /// Percentage of the buffer filled before playback starts.
        pub buf_fill_pct: i32 where min = 0, max = 100 => with_buf_fill_pct,
        /// Decoder buffer size in bits.
        pub buf_size: i32 where min = 0 => with_buf_size,
        pub color_metadata: H264ColorMetadata => with_color_metadata,
        pub color_space_settings: H264ColorSpaceSettings => with_color_space_settings,
        pub entropy_encoding: H264EntropyEncoding => with_entropy_encoding,
        pub filter_settings: H264FilterSettings => with_filter_settings,
        pub fixed_afd: FixedAfd => with_fixed_afd,
        pub flicker_aq: H264FlickerAq => with_flicker_aq,
        pub force_field_pictures: H264ForceFieldPictures => with_force_field_pictures,
        pub framerate_control: H264FramerateControl => with_framerate_control,
        /// Frame rate is `framerate_numerator / framerate_denominator`.
        pub framerate_denominator: i32 where min = 1 => with_framerate_denominator,
        pub framerate_numerator: i32 where min = 1 => with_framerate_numerator,
        pub gop_b_reference: H264GopBReference => with_gop_b_reference,
        pub gop_closed_cadence: i32 where min = 0 => with_gop_closed_cadence,
        /// B-frames between reference frames.
        pub gop_num_b_frames: i32 where min = 0, max = 7 => with_gop_num_b_frames,
        /// GOP length, in frames or seconds per `gop_size_units`.
        pub gop_size: f64 => with_gop_size,
        pub gop_size_units: H264GopSizeUnits => with_gop_size_units,
        pub level: H264Level => with_level,
        pub look_ahead_rate_control: H264LookAheadRateControl => with_look_ahead_rate_control,
        /// Peak bitrate for QVBR, in bits/second.
        pub max_bitrate: i32 where min = 1000 => with_max_bitrate,
        /// Minimum frames between I-frames, to avoid back-to-back scene-change I-frames.
        pub min_i_interval: i32 where min = 0, max = 30 => with_min_i_interval,
        pub num_ref_frames: i32 where min = 1, max = 6 => with_num_ref_frames,
        pub par_control: H264ParControl => with_par_control,
        /// Pixel aspect ratio is `par_numerator / par_denominator`.
        pub par_denominator: i32 where min = 1 => with_par_denominator,
        pub par_numerator: i32 where min = 1 => with_par_numerator,
        pub profile: H264Profile => with_profile,
        /// `ENHANCED_QUALITY` needs a standard channel class.
        pub quality_level: H264QualityLevel => with_quality_level,
        /// Target quality for QVBR, 1 (lowest) to 10 (highest).
        pub qvbr_quality_level: i32 where min = 1, max = 10 => with_qvbr_quality_level,
        pub rate_control_mode: H264RateControlMode => with_rate_control_mode,
        pub scan_type: H264ScanType => with_scan_type,
        pub scene_change_detect: H264SceneChangeDetect => with_scene_change_detect,
        pub slices: i32 where min = 1, max = 32 => with_slices,
        pub softness: i32 where min = 0, max = 128 => with_softness,
        pub spatial_aq: H264SpatialAq => with_spatial_aq,
        pub subgop_length: H264SubGopLength => with_subgop_length,
        pub syntax: H264Syntax => with_syntax,
        pub temporal_aq: H264TemporalAq => with_temporal_aq,
        pub timecode_insertion: H264TimecodeInsertionBehavior => with_timecode_insertion,
    }
}

shape! {
    /// HEVC encoding parameters.
    pub struct H265Settings {
        pub adaptive_quantization: H265AdaptiveQuantization => with_adaptive_quantization,
        pub afd_signaling: AfdSignaling => with_afd_signaling,
        pub alternative_transfer_function: H265AlternativeTransferFunction => with_alternative_transfer_function,
        /// Average bitrate for CBR and VBR, in bits/second.
        pub bitrate: i32 where min = 100000, max = 40000000 => with_bitrate,
        /// Decoder buffer size in bits.
        pub buf_size: i32 where min = 100000, max = 80000000 => with_buf_size,
        pub color_metadata: H265ColorMetadata => with_color_metadata,
        pub color_space_settings: H265ColorSpaceSettings => with_color_space_settings,
        pub filter_settings: H265FilterSettings => with_filter_settings,
        pub fixed_afd: FixedAfd => with_fixed_afd,
        pub flicker_aq: H265FlickerAq => with_flicker_aq,
        /// Frame rate is `framerate_numerator / framerate_denominator`.
        pub framerate_denominator: i32 where min = 1, max = 3003 => with_framerate_denominator,
        pub framerate_numerator: i32 where min = 1 => with_framerate_numerator,
        pub gop_closed_cadence: i32 where min = 0 => with_gop_closed_cadence,
        pub gop_size: f64 => with_gop_size,
        pub gop_size_units: H265GopSizeUnits => with_gop_size_units,
        pub level: H265Level => with_level,
        pub look_ahead_rate_control: H265LookAheadRateControl => with_look_ahead_rate_control,
        /// Peak bitrate for QVBR, in bits/second.
        pub max_bitrate: i32 where min = 100000, max = 40000000 => with_max_bitrate,
        pub min_i_interval: i32 where min = 0, max = 30 => with_min_i_interval,
        pub par_denominator: i32 where min = 1 => with_par_denominator,
        pub par_numerator: i32 where min = 1 => with_par_numerator,
        pub profile: H265Profile => with_profile,
        /// 1 to 10; higher is better.
        pub qvbr_quality_level: i32 where min = 1, max = 10 => with_qvbr_quality_level,
        pub rate_control_mode: H265RateControlMode => with_rate_control_mode,
        pub scan_type: H265ScanType => with_scan_type,
        pub scene_change_detect: H265SceneChangeDetect => with_scene_change_detect,
        pub slices: i32 where min = 1, max = 16 => with_slices,
        /// `MAIN` or `HIGH`; `HIGH` allows higher bitrates at a given level.
        pub tier: H265Tier => with_tier,
        pub timecode_insertion: H265TimecodeInsertionBehavior => with_timecode_insertion,
    }
}

shape! {
    /// JPEG frame capture parameters.
    pub struct FrameCaptureSettings {
        /// Time between captures, in `capture_interval_units`.
        pub capture_interval: i32 where min = 1, max = 3600000 => with_capture_interval,
        pub capture_interval_units: FrameCaptureIntervalUnit => with_capture_interval_units,
    }
}

settings_union! {
    /// Codec used by a video description.
    pub enum VideoCodecSettings {
        FrameCaptureSettings(FrameCaptureSettings) = "frameCaptureSettings",
        H264Settings(H264Settings) = "h264Settings",
        H265Settings(H265Settings) = "h265Settings",
    }
}

shape! {
    /// One encoded video rendition.
    pub struct VideoDescription {
        pub codec_settings: VideoCodecSettings => with_codec_settings,
        /// Output height in pixels; absent follows the source.
        pub height: i32 => with_height,
        pub name: String => with_name,
        pub respond_to_afd: VideoDescriptionRespondToAfd => with_respond_to_afd,
        pub scaling_behavior: VideoDescriptionScalingBehavior => with_scaling_behavior,
        pub sharpness: i32 where min = 0, max = 100 => with_sharpness,
        pub width: i32 => with_width,
    }
}

shape! {
    pub struct VideoSelectorPid {
        /// PID of the video stream to use.
        pub pid: i32 where min = 0, max = 8191 => with_pid,
    }
}

shape! {
    pub struct VideoSelectorProgramId {
        /// Program number whose video stream to use.
        pub program_id: i32 where min = 0, max = 65536 => with_program_id,
    }
}

settings_union! {
    pub enum VideoSelectorSettings {
        VideoSelectorPid(VideoSelectorPid) = "videoSelectorPid",
        VideoSelectorProgramId(VideoSelectorProgramId) = "videoSelectorProgramId",
    }
}

shape! {
    pub struct VideoSelector {
        pub color_space: VideoSelectorColorSpace => with_color_space,
        pub color_space_usage: VideoSelectorColorSpaceUsage => with_color_space_usage,
        pub selector_settings: VideoSelectorSettings => with_selector_settings,
    }
}

impl VideoDescription {
    /// Returns the H.264 settings when this description encodes AVC.
    pub fn h264_settings(&self) -> Option<&H264Settings> {
        match self.codec_settings.as_ref()? {
            VideoCodecSettings::H264Settings(settings) => Some(settings),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Shape;

    fn hd_avc() -> H264Settings {
        H264Settings::new()
            .with_bitrate(5_000_000)
            .with_framerate_control(H264FramerateControl::Specified)
            .with_framerate_numerator(30000)
            .with_framerate_denominator(1001)
            .with_gop_size(2.0)
            .with_gop_size_units(H264GopSizeUnits::Seconds)
            .with_profile(H264Profile::High)
            .with_level(H264Level::H264Level41)
            .with_rate_control_mode(H264RateControlMode::Cbr)
    }

    #[test]
    fn test_h264_wire_names() {
        let json = hd_avc().with_gop_num_b_frames(3).to_json().unwrap();
        assert!(json.contains(r#""gopNumBFrames":3"#));
        assert!(json.contains(r#""level":"H264_LEVEL_4_1""#));
        assert!(json.contains(r#""gopSizeUnits":"SECONDS""#));
    }

    #[test]
    fn test_h265_color_space_union() {
        let settings = H265Settings::new()
            .with_bitrate(8_000_000)
            .with_color_space_settings(Hdr10Settings::new().with_max_cll(1000).with_max_fall(400));

        assert_eq!(
            settings.to_string(),
            "{Bitrate: 8000000,ColorSpaceSettings: {Hdr10Settings: {MaxCll: 1000,MaxFall: 400}}}"
        );

        let parsed = H265Settings::from_json(&settings.to_json().unwrap()).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_h265_bitrate_range() {
        let err = H265Settings::new()
            .with_bitrate(50_000)
            .with_slices(17)
            .validate()
            .unwrap_err();
        assert_eq!(err.violations().len(), 2);
        assert_eq!(err.violations()[0].path, "bitrate");
        assert_eq!(err.violations()[1].path, "slices");
    }

    #[test]
    fn test_video_description_accessor() {
        let description = VideoDescription::new()
            .with_name("video_720p")
            .with_width(1280)
            .with_height(720)
            .with_codec_settings(hd_avc());
        assert_eq!(description.h264_settings().and_then(|s| s.bitrate), Some(5_000_000));

        let capture = VideoDescription::new().with_codec_settings(FrameCaptureSettings::new());
        assert!(capture.h264_settings().is_none());
    }

    #[test]
    fn test_unknown_level_is_preserved() {
        let parsed = H264Settings::from_json(r#"{"level":"H264_LEVEL_6"}"#).unwrap();
        let level = parsed.level.as_ref().unwrap();
        assert!(level.is_unknown());
        assert_eq!(parsed.to_json().unwrap(), r#"{"level":"H264_LEVEL_6"}"#);
    }
}
