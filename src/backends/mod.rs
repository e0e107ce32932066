pub mod backend_trait;
pub mod imagemagick;
pub mod qlmanage;
pub mod rsvg_convert;

use crate::paths::Paths;

use backend_trait::Backend;
use core::fmt;
use serde_derive::{Deserialize, Serialize};
use std::{fs, io, path::Path, process::Command};

/// The external conversion tools that may be used to rasterize an SVG.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum BackendKind {
    #[serde(rename = "rsvg-convert")]
    RsvgConvert,
    #[serde(rename = "imagemagick")]
    ImageMagick,
    #[serde(rename = "qlmanage")]
    Qlmanage,
}

impl BackendKind {
    /// The default fallback chain, in order of output quality.
    pub fn default_chain() -> Vec<BackendKind> {
        vec![
            BackendKind::RsvgConvert,
            BackendKind::ImageMagick,
            BackendKind::Qlmanage,
        ]
    }

    /// Create the backend for this kind, using the configured tool locations.
    ///
    /// # Arguments
    ///
    /// * `paths` - The tool locations.
    pub fn create(&self, paths: &Paths) -> Box<dyn Backend> {
        match self {
            BackendKind::RsvgConvert => {
                Box::new(rsvg_convert::RsvgConvert::new(&paths.rsvg_convert))
            }
            BackendKind::ImageMagick => {
                Box::new(imagemagick::ImageMagick::new(&paths.imagemagick))
            }
            BackendKind::Qlmanage => {
                Box::new(qlmanage::Qlmanage::new(&paths.qlmanage, &paths.temp))
            }
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BackendKind::RsvgConvert => write!(f, "rsvg-convert"),
            BackendKind::ImageMagick => write!(f, "ImageMagick"),
            BackendKind::Qlmanage => write!(f, "qlmanage"),
        }
    }
}

/// The reason a single backend attempt failed.
#[derive(Debug, PartialEq, Eq)]
pub enum AttemptError {
    /// The tool could not be found.
    ToolNotFound(String),
    /// The tool exited with a non-zero status code.
    ExitStatus(i32),
    /// The tool was terminated before it could exit.
    Terminated,
    /// The tool reported success, but the expected output file was not created.
    MissingOutput(String),
    /// The output file could not be moved into its final location.
    MoveFailed(String),
    /// Any other I/O error.
    Io(String),
}

impl fmt::Display for AttemptError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AttemptError::ToolNotFound(p) => write!(f, "the tool '{p}' could not be found"),
            AttemptError::ExitStatus(c) => write!(f, "the tool exited with status code {c}"),
            AttemptError::Terminated => write!(f, "the tool was terminated by a signal"),
            AttemptError::MissingOutput(p) => write!(f, "no output file was created at '{p}'"),
            AttemptError::MoveFailed(e) => write!(f, "the output file could not be moved: {e}"),
            AttemptError::Io(e) => write!(f, "an I/O error occurred: {e}"),
        }
    }
}

/// Run an external tool to completion. Any output from the tool is discarded.
///
/// # Arguments
///
/// * `program` - The path to, or name of, the tool.
/// * `args` - The arguments to be passed to the tool.
pub fn run_tool(program: &str, args: &[String]) -> Result<(), AttemptError> {
    let r = Command::new(program).args(args).output();

    match r {
        Ok(exit) => match exit.status.code() {
            Some(0) => Ok(()),
            Some(code) => Err(AttemptError::ExitStatus(code)),
            None => Err(AttemptError::Terminated),
        },
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(AttemptError::ToolNotFound(program.to_string()))
        }
        Err(e) => Err(AttemptError::Io(e.to_string())),
    }
}

/// Check that a tool really did produce the file it was asked for.
///
/// # Arguments
///
/// * `path` - The path to the expected output file.
pub fn require_output(path: &Path) -> Result<(), AttemptError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(AttemptError::MissingOutput(path.display().to_string()))
    }
}

/// Move a file, falling back to a copy and delete when a rename is not
/// possible (for example, across file systems).
///
/// # Arguments
///
/// * `from` - The path to the source file.
/// * `to` - The destination path.
pub fn move_file(from: &Path, to: &Path) -> Result<(), AttemptError> {
    if fs::rename(from, to).is_ok() {
        return Ok(());
    }

    fs::copy(from, to).map_err(|e| AttemptError::MoveFailed(e.to_string()))?;
    _ = fs::remove_file(from);

    Ok(())
}
