//! # Clip Generation Crate
//!
//! Batch-converts pairs of images and audio clips into short videos, the
//! animated thumbnails used by the sound picker in Messages.
//!
//! For every image in a folder the crate:
//! - resizes it and flattens it onto a solid background with `ImageMagick`,
//! - looks up the audio clip with the same stem in a second folder,
//! - muxes the still image and the audio into a video with `FFmpeg`,
//! - removes the resized image again.
//!
//! Images without an audio clip are skipped. Any tool failure stops the whole
//! batch.
//!
//! ## Requirements
//!
//! - **`ImageMagick`** (`convert`) and **`FFmpeg`** in the system's `PATH`, or
//!   configured by path in the settings.
//!
//! ## Example
//!
//! ```no_run
//! use app_state::{ClipDirectories, load_app_settings};
//! use generate_clips::{ClipConverter, ExternalTools};
//!
//! #[tokio::main]
//! async fn main() -> color_eyre::Result<()> {
//!     let settings = load_app_settings(None)?;
//!     let dirs = ClipDirectories::new("pngs", "mp3s", "out")?;
//!     dirs.validate()?;
//!
//!     let converter = ClipConverter::new(
//!         ExternalTools::from_settings(&settings),
//!         settings.clips.clone(),
//!     );
//!     let report = converter.run(&dirs).await?;
//!     println!("{} clips created", report.created.len());
//!     Ok(())
//! }
//! ```

mod converter;
mod error;
// Builder for `ffmpeg` invocations.
mod ffmpeg;
// Builder for `ImageMagick` invocations.
mod magick;
mod sources;
mod tools;
mod utils;

pub use converter::{ClipConverter, ClipOutcome, RunReport};
pub use error::{ClipError, ToolError};
pub use ffmpeg::FfmpegCommand;
pub use magick::MagickCommand;
pub use sources::{ClipSource, discover_images};
pub use tools::{ExternalTools, MediaTools, run_tool};
