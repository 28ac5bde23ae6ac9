use serde::Deserialize;

/// Settings exactly as they come out of the layered config sources.
#[derive(Debug, Deserialize, Clone)]
pub struct RawSettings {
    pub clips: RawClipSettings,
    pub transform: TransformSettings,
    pub mux: MuxSettings,
    pub logging: LoggingSettings,
}

/// File naming used to find inputs and name outputs.
#[derive(Debug, Deserialize, Clone)]
pub struct RawClipSettings {
    pub image_extension: String,
    pub audio_extension: String,
    pub video_extension: String,
    pub remove_unpaired_intermediates: bool,
}

/// Image transform tool (`ImageMagick` `convert`) configuration.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct TransformSettings {
    /// Program name or path, looked up on `PATH` when bare.
    pub program: String,
    /// Target box in pixels; the image is resized to fit inside it.
    pub width: u32,
    pub height: u32,
    /// Colour transparent pixels are flattened against, e.g. `#e8e8e8`.
    pub background: String,
}

/// Video mux tool (`FFmpeg`) configuration.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct MuxSettings {
    pub program: String,
    pub video_codec: String,
    pub pixel_format: String,
    pub audio_codec: String,
    /// Pass `-y` so existing outputs are replaced instead of prompting.
    pub overwrite: bool,
}

/// Logging configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
}
