use crate::error::ToolError;
use crate::ffmpeg::FfmpegCommand;
use crate::magick::MagickCommand;
use crate::utils::display_command;
use app_state::{AppSettings, MuxSettings, TransformSettings};
use async_trait::async_trait;
use std::ffi::OsStr;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// The two media operations a clip needs. Both are opaque: success or failure is all
/// that comes back.
#[async_trait]
pub trait MediaTools: Send + Sync {
    /// Resizes and flattens `input`, writing the result to `output`.
    async fn transform_image(&self, input: &Path, output: &Path) -> Result<(), ToolError>;

    /// Encodes a still `image` and an `audio` track into the video `output`.
    async fn mux_video(&self, image: &Path, audio: &Path, output: &Path)
    -> Result<(), ToolError>;
}

/// [`MediaTools`] backed by `convert` and `ffmpeg` subprocesses.
#[derive(Debug, Clone)]
pub struct ExternalTools {
    transform: TransformSettings,
    mux: MuxSettings,
}

impl ExternalTools {
    #[must_use]
    pub fn new(transform: TransformSettings, mux: MuxSettings) -> Self {
        Self { transform, mux }
    }

    #[must_use]
    pub fn from_settings(settings: &AppSettings) -> Self {
        Self::new(settings.transform.clone(), settings.mux.clone())
    }
}

#[async_trait]
impl MediaTools for ExternalTools {
    async fn transform_image(&self, input: &Path, output: &Path) -> Result<(), ToolError> {
        let mut cmd = MagickCommand::new(input);
        cmd.add_resize(self.transform.width, self.transform.height);
        cmd.add_flatten(&self.transform.background);
        cmd.run(&self.transform.program, output).await
    }

    async fn mux_video(
        &self,
        image: &Path,
        audio: &Path,
        output: &Path,
    ) -> Result<(), ToolError> {
        let mut cmd = FfmpegCommand::new(image);
        cmd.add_input(audio);
        cmd.set_overwrite(self.mux.overwrite);
        cmd.map_video_output(
            &self.mux.video_codec,
            &self.mux.pixel_format,
            &self.mux.audio_codec,
            output,
        );
        cmd.run(&self.mux.program).await
    }
}

/// Runs `program` with `args` directly, no shell involved. Blocks the task until the
/// process exits; stderr is kept for the error.
pub async fn run_tool<S: AsRef<OsStr>>(program: &str, args: &[S]) -> Result<(), ToolError> {
    debug!("Running {}", display_command(program, args));
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|source| ToolError::Spawn {
            program: program.to_owned(),
            source,
        })?;

    if output.status.success() {
        Ok(())
    } else {
        Err(ToolError::Failed {
            program: program.to_owned(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;

    fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    fn tools(convert: &Path, ffmpeg: &Path) -> ExternalTools {
        ExternalTools::new(
            TransformSettings {
                program: convert.to_string_lossy().into_owned(),
                width: 150,
                height: 150,
                background: "#e8e8e8".to_owned(),
            },
            MuxSettings {
                program: ffmpeg.to_string_lossy().into_owned(),
                video_codec: "libx264".to_owned(),
                pixel_format: "yuv420p".to_owned(),
                audio_codec: "aac".to_owned(),
                overwrite: true,
            },
        )
    }

    // Every subprocess test lives in this one function: all scripts are written
    // before the first spawn, so no child can inherit a script still open for writing.
    #[tokio::test]
    async fn runs_tools_as_argument_lists() {
        let tmp = tempfile::tempdir().unwrap();
        let bin = tmp.path().join("bin");
        fs::create_dir(&bin).unwrap();
        let args_log = tmp.path().join("args.log");

        let convert = write_script(
            &bin,
            "convert",
            &format!(
                "printf '%s\\n' \"$@\" > '{}'\nfor last; do :; done\ncat \"$1\" > \"$last\"",
                args_log.display()
            ),
        );
        let ffmpeg = write_script(&bin, "ffmpeg", "for last; do :; done\necho video > \"$last\"");
        let failing = write_script(&bin, "failing", "echo 'no such codec' >&2\nexit 3");

        let input = tmp.path().join("it's a $(test).png");
        fs::write(&input, b"png").unwrap();
        let resized = tmp.path().join("resized.png");
        let audio = tmp.path().join("a.mp3");
        fs::write(&audio, b"mp3").unwrap();
        let video = tmp.path().join("out.mp4");

        let ok = tools(&convert, &ffmpeg);
        ok.transform_image(&input, &resized).await.unwrap();
        assert_eq!(fs::read(&resized).unwrap(), b"png");
        let logged = fs::read_to_string(&args_log).unwrap();
        let logged: Vec<&str> = logged.lines().collect();
        assert_eq!(logged[0], input.to_string_lossy());
        assert_eq!(&logged[1..6], ["-resize", "150x150", "-background", "#e8e8e8", "-flatten"]);

        ok.mux_video(&resized, &audio, &video).await.unwrap();
        assert_eq!(fs::read_to_string(&video).unwrap(), "video\n");

        let bad = tools(&failing, &failing);
        match bad.mux_video(&resized, &audio, &video).await {
            Err(ToolError::Failed { status, stderr, .. }) => {
                assert_eq!(status.code(), Some(3));
                assert_eq!(stderr, "no such codec");
            }
            other => panic!("expected a tool failure, got {other:?}"),
        }

        let missing = tools(&bin.join("missing"), &bin.join("missing"));
        assert!(matches!(
            missing.transform_image(&input, &resized).await,
            Err(ToolError::Spawn { .. })
        ));
    }
}
