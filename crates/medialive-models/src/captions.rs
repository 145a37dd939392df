//! Caption selectors, caption descriptions and caption destinations.

use crate::shape::{settings_union, shape};
use crate::wire_enum::wire_enum;
use crate::InputLocation;

wire_enum! {
    pub enum BurnInAlignment {
        Centered = "CENTERED",
        Left = "LEFT",
        Smart = "SMART",
    }
}

wire_enum! {
    pub enum BurnInBackgroundColor {
        Black = "BLACK",
        None = "NONE",
        White = "WHITE",
    }
}

wire_enum! {
    pub enum BurnInFontColor {
        Black = "BLACK",
        Blue = "BLUE",
        Green = "GREEN",
        Red = "RED",
        White = "WHITE",
        Yellow = "YELLOW",
    }
}

wire_enum! {
    pub enum BurnInOutlineColor {
        Black = "BLACK",
        Blue = "BLUE",
        Green = "GREEN",
        Red = "RED",
        White = "WHITE",
        Yellow = "YELLOW",
    }
}

wire_enum! {
    pub enum BurnInShadowColor {
        Black = "BLACK",
        None = "NONE",
        White = "WHITE",
    }
}

wire_enum! {
    pub enum BurnInTeletextGridControl {
        Fixed = "FIXED",
        Scaled = "SCALED",
    }
}

wire_enum! {
    pub enum DvbSubDestinationAlignment {
        Centered = "CENTERED",
        Left = "LEFT",
        Smart = "SMART",
    }
}

wire_enum! {
    pub enum DvbSubDestinationBackgroundColor {
        Black = "BLACK",
        None = "NONE",
        White = "WHITE",
    }
}

wire_enum! {
    pub enum DvbSubDestinationFontColor {
        Black = "BLACK",
        Blue = "BLUE",
        Green = "GREEN",
        Red = "RED",
        White = "WHITE",
        Yellow = "YELLOW",
    }
}

wire_enum! {
    pub enum DvbSubDestinationOutlineColor {
        Black = "BLACK",
        Blue = "BLUE",
        Green = "GREEN",
        Red = "RED",
        White = "WHITE",
        Yellow = "YELLOW",
    }
}

wire_enum! {
    pub enum DvbSubDestinationShadowColor {
        Black = "BLACK",
        None = "NONE",
        White = "WHITE",
    }
}

wire_enum! {
    pub enum DvbSubDestinationTeletextGridControl {
        Fixed = "FIXED",
        Scaled = "SCALED",
    }
}

wire_enum! {
    pub enum EbuTtDFillLineGapControl {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }
}

wire_enum! {
    pub enum EbuTtDDestinationStyleControl {
        Exclude = "EXCLUDE",
        Include = "INCLUDE",
    }
}

wire_enum! {
    pub enum TtmlDestinationStyleControl {
        Passthrough = "PASSTHROUGH",
        UseConfigured = "USE_CONFIGURED",
    }
}

wire_enum! {
    pub enum EmbeddedConvert608To708 {
        Disabled = "DISABLED",
        Upconvert = "UPCONVERT",
    }
}

wire_enum! {
    pub enum EmbeddedScte20Detection {
        Auto = "AUTO",
        Off = "OFF",
    }
}

wire_enum! {
    pub enum Scte20Convert608To708 {
        Disabled = "DISABLED",
        Upconvert = "UPCONVERT",
    }
}

shape! {
    /// Captions rendered into the video raster.
    pub struct BurnInDestinationSettings {
        /// `CENTERED` and `LEFT` position captions with `x_position`/`y_position`;
        /// `SMART` keeps the source positioning.
        pub alignment: BurnInAlignment => with_alignment,
        pub background_color: BurnInBackgroundColor => with_background_color,
        /// 0 is transparent, 255 opaque.
        pub background_opacity: i32 where min = 0, max = 255 => with_background_opacity,
        /// External font file; required when the source is SCC/608-embedded
        /// and the font must support the target language.
        pub font: InputLocation => with_font,
        pub font_color: BurnInFontColor => with_font_color,
        pub font_opacity: i32 where min = 0, max = 255 => with_font_opacity,
        /// Font resolution in DPI.
        pub font_resolution: i32 where min = 96, max = 600 => with_font_resolution,
        /// `auto` or a point size.
        pub font_size: String => with_font_size,
        pub outline_color: BurnInOutlineColor => with_outline_color,
        /// Font outline width, in pixels.
        pub outline_size: i32 where min = 0, max = 10 => with_outline_size,
        pub shadow_color: BurnInShadowColor => with_shadow_color,
        pub shadow_opacity: i32 where min = 0, max = 255 => with_shadow_opacity,
        /// Horizontal shadow offset in pixels; negative values shift left.
        pub shadow_x_offset: i32 => with_shadow_x_offset,
        /// Vertical shadow offset in pixels; negative moves the shadow up.
        pub shadow_y_offset: i32 => with_shadow_y_offset,
        pub teletext_grid_control: BurnInTeletextGridControl => with_teletext_grid_control,
        pub x_position: i32 where min = 0 => with_x_position,
        pub y_position: i32 where min = 0 => with_y_position,
    }
}

shape! {
    /// DVB subtitles carried as bitmaps in the transport stream.
    pub struct DvbSubDestinationSettings {
        pub alignment: DvbSubDestinationAlignment => with_alignment,
        pub background_color: DvbSubDestinationBackgroundColor => with_background_color,
        pub background_opacity: i32 where min = 0, max = 255 => with_background_opacity,
        pub font: InputLocation => with_font,
        pub font_color: DvbSubDestinationFontColor => with_font_color,
        pub font_opacity: i32 where min = 0, max = 255 => with_font_opacity,
        pub font_resolution: i32 where min = 96, max = 600 => with_font_resolution,
        /// `auto`, or a point size.
        pub font_size: String => with_font_size,
        pub outline_color: DvbSubDestinationOutlineColor => with_outline_color,
        /// Font outline width, in pixels.
        pub outline_size: i32 where min = 0, max = 10 => with_outline_size,
        pub shadow_color: DvbSubDestinationShadowColor => with_shadow_color,
        pub shadow_opacity: i32 where min = 0, max = 255 => with_shadow_opacity,
        pub shadow_x_offset: i32 => with_shadow_x_offset,
        pub shadow_y_offset: i32 => with_shadow_y_offset,
        pub teletext_grid_control: DvbSubDestinationTeletextGridControl => with_teletext_grid_control,
        pub x_position: i32 where min = 0 => with_x_position,
        pub y_position: i32 where min = 0 => with_y_position,
    }
}

shape! {
    pub struct AribDestinationSettings {}
}

shape! {
    pub struct EbuTtDDestinationSettings {
        pub fill_line_gap: EbuTtDFillLineGapControl => with_fill_line_gap,
        /// Comma-separated font family list, e.g. `monospaced, sansSerif`.
        pub font_family: String => with_font_family,
        pub style_control: EbuTtDDestinationStyleControl => with_style_control,
    }
}

shape! {
    pub struct EmbeddedDestinationSettings {}
}

shape! {
    pub struct EmbeddedPlusScte20DestinationSettings {}
}

shape! {
    pub struct RtmpCaptionInfoDestinationSettings {}
}

shape! {
    pub struct Scte20PlusEmbeddedDestinationSettings {}
}

shape! {
    pub struct Scte27DestinationSettings {}
}

shape! {
    pub struct SmpteTtDestinationSettings {}
}

shape! {
    pub struct TeletextDestinationSettings {}
}

shape! {
    pub struct TtmlDestinationSettings {
        pub style_control: TtmlDestinationStyleControl => with_style_control,
    }
}

shape! {
    pub struct WebvttDestinationSettings {}
}

settings_union! {
    /// Caption format written to an output.
    pub enum CaptionDestinationSettings {
        AribDestinationSettings(AribDestinationSettings) = "aribDestinationSettings",
        BurnInDestinationSettings(BurnInDestinationSettings) = "burnInDestinationSettings",
        DvbSubDestinationSettings(DvbSubDestinationSettings) = "dvbSubDestinationSettings",
        EbuTtDDestinationSettings(EbuTtDDestinationSettings) = "ebuTtDDestinationSettings",
        EmbeddedDestinationSettings(EmbeddedDestinationSettings) = "embeddedDestinationSettings",
        EmbeddedPlusScte20DestinationSettings(EmbeddedPlusScte20DestinationSettings) = "embeddedPlusScte20DestinationSettings",
        RtmpCaptionInfoDestinationSettings(RtmpCaptionInfoDestinationSettings) = "rtmpCaptionInfoDestinationSettings",
        Scte20PlusEmbeddedDestinationSettings(Scte20PlusEmbeddedDestinationSettings) = "scte20PlusEmbeddedDestinationSettings",
        Scte27DestinationSettings(Scte27DestinationSettings) = "scte27DestinationSettings",
        SmpteTtDestinationSettings(SmpteTtDestinationSettings) = "smpteTtDestinationSettings",
        TeletextDestinationSettings(TeletextDestinationSettings) = "teletextDestinationSettings",
        TtmlDestinationSettings(TtmlDestinationSettings) = "ttmlDestinationSettings",
        WebvttDestinationSettings(WebvttDestinationSettings) = "webvttDestinationSettings",
    }
}

shape! {
    /// One encoded caption track.
    pub struct CaptionDescription {
        /// Name of the `CaptionSelector` feeding this description.
        pub caption_selector_name: String => with_caption_selector_name,
        pub destination_settings: CaptionDestinationSettings => with_destination_settings,
        pub language_code: String => with_language_code,
        pub language_description: String => with_language_description,
        pub name: String => with_name,
    }
}

shape! {
    /// Maps a 608 caption channel to a language in HLS manifests.
    pub struct CaptionLanguageMapping {
        pub caption_channel: i32 where min = 1, max = 4 => with_caption_channel,
        pub language_code: String => with_language_code,
        pub language_description: String => with_language_description,
    }
}

shape! {
    pub struct AribSourceSettings {}
}

shape! {
    pub struct DvbSubSourceSettings {
        /// PID of the DVB-Sub stream; the first one found when absent.
        pub pid: i32 where min = 1 => with_pid,
    }
}

shape! {
    pub struct EmbeddedSourceSettings {
        pub convert608_to708: EmbeddedConvert608To708 => with_convert608_to708,
        pub scte20_detection: EmbeddedScte20Detection => with_scte20_detection,
        pub source608_channel_number: i32 where min = 1, max = 4 => with_source608_channel_number,
        pub source608_track_number: i32 where min = 1 => with_source608_track_number,
    }
}

shape! {
    pub struct Scte20SourceSettings {
        pub convert608_to708: Scte20Convert608To708 => with_convert608_to708,
        pub source608_channel_number: i32 where min = 1, max = 4 => with_source608_channel_number,
    }
}

shape! {
    pub struct Scte27SourceSettings {
        /// PID of the SCTE-27 stream; the first one found when absent.
        pub pid: i32 where min = 1 => with_pid,
    }
}

shape! {
    pub struct TeletextSourceSettings {
        /// Hexadecimal page number, e.g. `0x888`.
        pub page_number: String => with_page_number,
    }
}

settings_union! {
    /// Where a caption selector finds captions in the input.
    pub enum CaptionSelectorSettings {
        AribSourceSettings(AribSourceSettings) = "aribSourceSettings",
        DvbSubSourceSettings(DvbSubSourceSettings) = "dvbSubSourceSettings",
        EmbeddedSourceSettings(EmbeddedSourceSettings) = "embeddedSourceSettings",
        Scte20SourceSettings(Scte20SourceSettings) = "scte20SourceSettings",
        Scte27SourceSettings(Scte27SourceSettings) = "scte27SourceSettings",
        TeletextSourceSettings(TeletextSourceSettings) = "teletextSourceSettings",
    }
}

shape! {
    pub struct CaptionSelector {
        pub language_code: String => with_language_code,
        pub name: String => with_name,
        pub selector_settings: CaptionSelectorSettings => with_selector_settings,
    }
}
