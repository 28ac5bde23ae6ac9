use crate::error::ClipError;
use app_state::has_extension;
use std::borrow::Cow;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// An input image and the stem that pairs it with its audio clip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipSource {
    image: PathBuf,
    file_name: OsString,
    stem: OsString,
}

impl ClipSource {
    /// Returns `None` for paths without a file name (e.g. `..`).
    #[must_use]
    pub fn from_path(image: PathBuf) -> Option<Self> {
        let file_name = image.file_name()?.to_owned();
        let stem = image.file_stem()?.to_owned();
        Some(Self {
            image,
            file_name,
            stem,
        })
    }

    #[must_use]
    pub fn image(&self) -> &Path {
        &self.image
    }

    #[must_use]
    pub fn stem(&self) -> Cow<'_, str> {
        self.stem.to_string_lossy()
    }

    #[must_use]
    pub fn file_name(&self) -> Cow<'_, str> {
        self.file_name.to_string_lossy()
    }

    /// Where the resized image is written: same file name, in the output folder.
    #[must_use]
    pub fn intermediate_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(&self.file_name)
    }

    /// `<audio_dir>/<stem>.<audio_ext>`
    #[must_use]
    pub fn audio_path(&self, audio_dir: &Path, audio_ext: &str) -> PathBuf {
        self.stem_path(audio_dir, audio_ext)
    }

    /// `<output_dir>/<stem>.<video_ext>`
    #[must_use]
    pub fn video_path(&self, output_dir: &Path, video_ext: &str) -> PathBuf {
        self.stem_path(output_dir, video_ext)
    }

    // Path::with_extension would cut stems that contain dots, like `a.b`.
    fn stem_path(&self, dir: &Path, ext: &str) -> PathBuf {
        let mut name = self.stem.clone();
        name.push(".");
        name.push(ext);
        dir.join(name)
    }
}

/// Lists the files directly inside `dir` with the given extension, sorted by file name.
pub fn discover_images(dir: &Path, extension: &str) -> Result<Vec<ClipSource>, ClipError> {
    let mut sources = Vec::new();
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            // Unreadable entries that could never be picked up, like a dangling
            // `notes.txt` symlink, don't concern this run.
            Err(e)
                if e.depth() > 0
                    && !e.path().is_some_and(|p| has_extension(p, extension)) =>
            {
                debug!("Ignoring unreadable entry: {e}");
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        if !entry.file_type().is_file() || !has_extension(entry.path(), extension) {
            continue;
        }
        if let Some(source) = ClipSource::from_path(entry.into_path()) {
            sources.push(source);
        }
    }

    Ok(sources)
}
