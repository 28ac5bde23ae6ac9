use std::io;
use std::process::ExitStatus;
use thiserror::Error;

/// A single external tool invocation that did not succeed.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{program} failed ({status}): {stderr}")]
    Failed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
}

/// Errors that abort a whole batch run.
#[derive(Debug, Error)]
pub enum ClipError {
    #[error("Failed to process image {image} for {stem}")]
    Transform {
        stem: String,
        image: String,
        #[source]
        source: ToolError,
    },

    #[error("Failed to create video for {stem}")]
    Mux {
        stem: String,
        #[source]
        source: ToolError,
    },

    #[error("{context}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    #[error("Cannot list images: {0}")]
    Walk(#[from] walkdir::Error),
}

impl ClipError {
    /// Stem of the clip that caused the abort, if the error is tied to one.
    #[must_use]
    pub fn stem(&self) -> Option<&str> {
        match self {
            Self::Transform { stem, .. } | Self::Mux { stem, .. } => Some(stem.as_str()),
            Self::Io { .. } | Self::Walk(_) => None,
        }
    }

    pub(crate) fn io(context: impl Into<String>) -> impl FnOnce(io::Error) -> Self {
        let context = context.into();
        move |source| Self::Io { context, source }
    }
}
