use crate::{
    LoggingSettings, MuxSettings, RawSettings, TransformSettings, is_hex_color,
    normalize_extension,
};
use color_eyre::eyre::{Result, bail, ensure};

#[derive(Debug, Clone)]
pub struct AppSettings {
    pub clips: ClipSettings,
    pub transform: TransformSettings,
    pub mux: MuxSettings,
    pub logging: LoggingSettings,
}

/// Clip naming, with extensions normalized to lowercase without a leading dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipSettings {
    pub image_extension: String,
    pub audio_extension: String,
    pub video_extension: String,
    pub remove_unpaired_intermediates: bool,
}

impl TryFrom<RawSettings> for AppSettings {
    type Error = color_eyre::Report;

    fn try_from(raw: RawSettings) -> Result<Self> {
        let clips = ClipSettings {
            image_extension: normalize_extension(&raw.clips.image_extension),
            audio_extension: normalize_extension(&raw.clips.audio_extension),
            video_extension: normalize_extension(&raw.clips.video_extension),
            remove_unpaired_intermediates: raw.clips.remove_unpaired_intermediates,
        };
        let settings = Self {
            clips,
            transform: raw.transform,
            mux: raw.mux,
            logging: raw.logging,
        };
        settings.validate()?;
        Ok(settings)
    }
}

impl AppSettings {
    /// Rejects settings that would only fail later, halfway through a batch.
    pub fn validate(&self) -> Result<()> {
        for (name, ext) in [
            ("clips.image_extension", &self.clips.image_extension),
            ("clips.audio_extension", &self.clips.audio_extension),
            ("clips.video_extension", &self.clips.video_extension),
        ] {
            ensure!(!ext.is_empty(), "{name} must not be empty");
        }
        // The intermediate image shares its name with the source image, the
        // output video must not overwrite it.
        ensure!(
            self.clips.image_extension != self.clips.video_extension,
            "clips.image_extension and clips.video_extension must differ"
        );

        ensure!(
            !self.transform.program.trim().is_empty(),
            "transform.program must not be empty"
        );
        ensure!(
            self.transform.width > 0 && self.transform.height > 0,
            "transform size must be non-zero, got {}x{}",
            self.transform.width,
            self.transform.height
        );
        if !is_hex_color(&self.transform.background) {
            bail!(
                "transform.background must be a hex colour like #e8e8e8, got {:?}",
                self.transform.background
            );
        }

        for (name, value) in [
            ("mux.program", &self.mux.program),
            ("mux.video_codec", &self.mux.video_codec),
            ("mux.pixel_format", &self.mux.pixel_format),
            ("mux.audio_codec", &self.mux.audio_codec),
        ] {
            ensure!(!value.trim().is_empty(), "{name} must not be empty");
        }

        Ok(())
    }
}
