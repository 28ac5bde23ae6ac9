use color_eyre::eyre::{Context, Result, bail};
use std::path::{Path, PathBuf, absolute};

/// The three folders a batch run works with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipDirectories {
    /// Folder with the source images.
    pub image_dir: PathBuf,
    /// Folder with audio clips, named after the image stems.
    pub audio_dir: PathBuf,
    /// Receives the videos, created on demand.
    pub output_dir: PathBuf,
}

impl ClipDirectories {
    pub fn new(
        image_dir: impl AsRef<Path>,
        audio_dir: impl AsRef<Path>,
        output_dir: impl AsRef<Path>,
    ) -> Result<Self> {
        let make_absolute = |p: &Path| {
            absolute(p).with_context(|| format!("Invalid path: {}", p.display()))
        };
        Ok(Self {
            image_dir: make_absolute(image_dir.as_ref())?,
            audio_dir: make_absolute(audio_dir.as_ref())?,
            output_dir: make_absolute(output_dir.as_ref())?,
        })
    }

    /// Both input folders must exist. The output folder is created by the run.
    pub fn validate(&self) -> Result<()> {
        for (name, dir) in [("image", &self.image_dir), ("audio", &self.audio_dir)] {
            if !dir.exists() {
                bail!("The {name} directory {} does not exist", dir.display());
            }
            if !dir.is_dir() {
                bail!("The {name} directory {} is not a directory", dir.display());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn paths_are_made_absolute() -> Result<()> {
        let dirs = ClipDirectories::new("pngs", "mp3s", "out")?;
        assert!(dirs.image_dir.is_absolute());
        assert!(dirs.audio_dir.ends_with("mp3s"));
        assert!(dirs.output_dir.ends_with("out"));
        Ok(())
    }

    #[test]
    fn validate_accepts_missing_output_dir() -> Result<()> {
        let tmp = tempfile::tempdir()?;
        fs::create_dir(tmp.path().join("pngs"))?;
        fs::create_dir(tmp.path().join("mp3s"))?;
        let dirs = ClipDirectories::new(
            tmp.path().join("pngs"),
            tmp.path().join("mp3s"),
            tmp.path().join("not/yet/there"),
        )?;
        dirs.validate()?;
        Ok(())
    }

    #[test]
    fn validate_rejects_missing_or_file_inputs() -> Result<()> {
        let tmp = tempfile::tempdir()?;
        fs::create_dir(tmp.path().join("pngs"))?;
        fs::write(tmp.path().join("mp3s"), b"not a dir")?;

        let missing = ClipDirectories::new(
            tmp.path().join("nope"),
            tmp.path().join("pngs"),
            tmp.path().join("out"),
        )?;
        let err = missing.validate().unwrap_err();
        assert!(err.to_string().contains("image directory"));

        let file = ClipDirectories::new(
            tmp.path().join("pngs"),
            tmp.path().join("mp3s"),
            tmp.path().join("out"),
        )?;
        let err = file.validate().unwrap_err();
        assert!(err.to_string().contains("not a directory"));
        Ok(())
    }
}
