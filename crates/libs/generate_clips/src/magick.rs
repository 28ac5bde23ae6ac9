use crate::error::ToolError;
use crate::tools::run_tool;
use crate::utils;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// A builder for `ImageMagick` `convert` commands: one input, a chain of
/// operators, one output.
pub struct MagickCommand {
    input: PathBuf,
    operations: Vec<OsString>,
}

impl MagickCommand {
    pub fn new(input: &Path) -> Self {
        Self {
            input: input.to_path_buf(),
            operations: Vec::new(),
        }
    }

    /// Resizes to fit inside `width`x`height`, keeping the aspect ratio.
    pub fn add_resize(&mut self, width: u32, height: u32) {
        self.operations
            .extend(["-resize".into(), format!("{width}x{height}").into()]);
    }

    /// Composites the image onto a solid `background`, dropping transparency.
    pub fn add_flatten(&mut self, background: &str) {
        self.operations.extend([
            "-background".into(),
            background.into(),
            "-flatten".into(),
        ]);
    }

    pub fn args(&self, out_path: &Path) -> Vec<OsString> {
        let mut args = vec![utils::path_to_os_string(&self.input)];
        args.extend(self.operations.iter().cloned());
        args.push(utils::path_to_os_string(out_path));
        args
    }

    /// Runs the command with `program` (normally `convert`), writing `out_path`.
    pub async fn run(self, program: &str, out_path: &Path) -> Result<(), ToolError> {
        run_tool(program, &self.args(out_path)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_and_flatten() {
        let mut cmd = MagickCommand::new(Path::new("pngs/boing.png"));
        cmd.add_resize(150, 150);
        cmd.add_flatten("#e8e8e8");
        let args: Vec<String> = cmd
            .args(Path::new("out/boing.png"))
            .into_iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            args,
            [
                "pngs/boing.png",
                "-resize",
                "150x150",
                "-background",
                "#e8e8e8",
                "-flatten",
                "out/boing.png",
            ]
        );
    }
}
