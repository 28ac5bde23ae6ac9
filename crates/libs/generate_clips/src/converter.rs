use crate::error::ClipError;
use crate::sources::{ClipSource, discover_images};
use crate::tools::MediaTools;
use app_state::{ClipDirectories, ClipSettings};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

/// What a finished (not aborted) batch run did.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Videos written, in processing order.
    pub created: Vec<PathBuf>,
    /// Stems of images without a matching audio clip.
    pub skipped: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipOutcome {
    Created(PathBuf),
    /// No audio clip for this image, nothing was muxed.
    Skipped,
}

/// Turns every image in a folder into a video with its matching audio clip.
///
/// Images are handled one at a time. The first tool failure aborts the run; a
/// missing audio clip only skips that image.
pub struct ClipConverter<T> {
    tools: T,
    clips: ClipSettings,
}

impl<T: MediaTools> ClipConverter<T> {
    pub fn new(tools: T, clips: ClipSettings) -> Self {
        Self { tools, clips }
    }

    /// Runs the whole batch.
    ///
    /// # Errors
    ///
    /// Returns the first [`ClipError`]. Clips finished before it stay on disk, as does
    /// whatever the failing tool left behind.
    pub async fn run(&self, dirs: &ClipDirectories) -> Result<RunReport, ClipError> {
        fs::create_dir_all(&dirs.output_dir)
            .await
            .map_err(ClipError::io(format!(
                "Cannot create output directory {}",
                dirs.output_dir.display()
            )))?;

        let sources = discover_images(&dirs.image_dir, &self.clips.image_extension)?;
        info!(
            "Found {} {} files in {}",
            sources.len(),
            self.clips.image_extension,
            dirs.image_dir.display()
        );

        let mut report = RunReport::default();
        for source in &sources {
            match self.convert(source, dirs).await? {
                ClipOutcome::Created(video) => report.created.push(video),
                ClipOutcome::Skipped => report.skipped.push(source.stem().into_owned()),
            }
        }

        info!(
            "Created {} clips, skipped {} without {}",
            report.created.len(),
            report.skipped.len(),
            self.clips.audio_extension
        );
        Ok(report)
    }

    /// Transform, pair, mux and clean up a single image.
    pub async fn convert(
        &self,
        source: &ClipSource,
        dirs: &ClipDirectories,
    ) -> Result<ClipOutcome, ClipError> {
        let intermediate = source.intermediate_path(&dirs.output_dir);
        self.tools
            .transform_image(source.image(), &intermediate)
            .await
            .map_err(|e| ClipError::Transform {
                stem: source.stem().into_owned(),
                image: source.file_name().into_owned(),
                source: e,
            })?;

        let audio = source.audio_path(&dirs.audio_dir, &self.clips.audio_extension);
        if !is_file(&audio).await {
            warn!(
                "Couldn't find {} for {}",
                self.clips.audio_extension,
                source.stem()
            );
            if self.clips.remove_unpaired_intermediates {
                remove_intermediate(&intermediate).await?;
            }
            return Ok(ClipOutcome::Skipped);
        }

        let video = source.video_path(&dirs.output_dir, &self.clips.video_extension);
        self.tools
            .mux_video(&intermediate, &audio, &video)
            .await
            .map_err(|e| ClipError::Mux {
                stem: source.stem().into_owned(),
                source: e,
            })?;

        remove_intermediate(&intermediate).await?;
        info!("Created {}", video.display());
        Ok(ClipOutcome::Created(video))
    }
}

async fn is_file(path: &Path) -> bool {
    fs::metadata(path).await.is_ok_and(|m| m.is_file())
}

async fn remove_intermediate(path: &Path) -> Result<(), ClipError> {
    debug!("Removing {}", path.display());
    fs::remove_file(path)
        .await
        .map_err(ClipError::io(format!("Cannot remove {}", path.display())))
}
