use app_state::{ClipDirectories, load_app_settings};
use clap::Parser;
use color_eyre::Result;
use generate_clips::{ClipConverter, ExternalTools};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Combine mp3 and png images into iMessage sound thumbnails.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory containing pngs to convert
    #[clap(long)]
    pngs: PathBuf,
    /// Directory of mp3 clips
    #[clap(long)]
    mp3s: PathBuf,
    /// Output directory
    #[clap(long)]
    out: PathBuf,
    /// Settings file overriding the built-in defaults
    #[clap(long)]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    let settings = load_app_settings(args.config.as_deref())?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| settings.logging.level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let dirs = ClipDirectories::new(&args.pngs, &args.mp3s, &args.out)?;
    dirs.validate()?;

    let converter = ClipConverter::new(
        ExternalTools::from_settings(&settings),
        settings.clips.clone(),
    );
    let report = converter.run(&dirs).await?;
    info!(
        "Done: {} clips in {}",
        report.created.len(),
        dirs.output_dir.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn all_three_directories_are_required() {
        assert!(Args::try_parse_from(["make_clips", "--pngs", "a", "--mp3s", "b"]).is_err());

        let args =
            Args::try_parse_from(["make_clips", "--pngs", "a", "--mp3s", "b", "--out", "c"])
                .unwrap();
        assert_eq!(args.pngs, PathBuf::from("a"));
        assert_eq!(args.out, PathBuf::from("c"));
        assert!(args.config.is_none());
    }
}
