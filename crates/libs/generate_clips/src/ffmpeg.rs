use crate::error::ToolError;
use crate::tools::run_tool;
use crate::utils;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// A builder for `FFmpeg` commands that encode a set of inputs into one output file.
pub struct FfmpegCommand {
    inputs: Vec<PathBuf>,
    overwrite: bool,
    maps: Vec<OsString>,
}

impl FfmpegCommand {
    /// Creates a new `FFmpeg` command with a primary input file.
    pub fn new(input: &Path) -> Self {
        Self {
            inputs: vec![input.to_path_buf()],
            overwrite: false,
            maps: Vec::new(),
        }
    }

    /// Adds another input, e.g. the audio track for a still image.
    pub fn add_input(&mut self, input: &Path) {
        self.inputs.push(input.to_path_buf());
    }

    /// Replace existing output files instead of asking on stdin.
    pub fn set_overwrite(&mut self, overwrite: bool) {
        self.overwrite = overwrite;
    }

    /// Encodes all inputs into a single video file, the first video stream
    /// with `video_codec` and the first audio stream with `audio_codec`.
    pub fn map_video_output(
        &mut self,
        video_codec: &str,
        pixel_format: &str,
        audio_codec: &str,
        out_path: &Path,
    ) {
        self.maps.extend([
            "-c:v".into(),
            video_codec.into(),
            "-pix_fmt".into(),
            pixel_format.into(),
            "-c:a".into(),
            audio_codec.into(),
            utils::path_to_os_string(out_path),
        ]);
    }

    /// The full argument list, without the program name.
    pub fn args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::new();
        if self.overwrite {
            args.push("-y".into());
        }
        for path in &self.inputs {
            args.extend(["-i".into(), utils::path_to_os_string(path)]);
        }
        args.extend(self.maps.iter().cloned());
        args
    }

    /// Builds and runs the command with `program` (normally `ffmpeg`).
    pub async fn run(self, program: &str) -> Result<(), ToolError> {
        run_tool(program, &self.args()).await
    }
}
