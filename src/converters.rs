use crate::{
    backends::{BackendKind, backend_trait::Backend},
    logger,
    paths::Paths,
};

/// The result of converting a single target.
#[derive(Debug, PartialEq, Eq)]
pub enum ConversionOutcome {
    /// The conversion succeeded, using the named backend.
    Converted { backend: String },
    /// Every backend failed.
    Failed,
}

/// An ordered list of backends. Each conversion is attempted with every
/// backend in turn, until one of them succeeds.
pub struct FallbackChain {
    backends: Vec<Box<dyn Backend>>,
}

impl FallbackChain {
    pub fn new(backends: Vec<Box<dyn Backend>>) -> Self {
        Self { backends }
    }

    /// Build a chain from a list of backend kinds.
    ///
    /// # Arguments
    ///
    /// * `kinds` - The backend kinds, in order of preference.
    /// * `paths` - The tool locations.
    pub fn from_kinds(kinds: &[BackendKind], paths: &Paths) -> Self {
        Self::new(kinds.iter().map(|k| k.create(paths)).collect())
    }

    /// The name of the preferred backend, if there is one.
    pub fn preferred(&self) -> Option<&str> {
        self.backends.first().map(|b| b.name())
    }

    /// Convert an SVG file into a square PNG file.
    ///
    /// # Arguments
    ///
    /// * `svg_path` - The path to the source SVG file.
    /// * `png_path` - The path at which the PNG file should be written.
    /// * `size` - The width and height of the PNG, in pixels.
    pub fn convert(&self, svg_path: &str, png_path: &str, size: u32) -> ConversionOutcome {
        for backend in &self.backends {
            logger::log_inline(
                format!("Attempting to convert to '{png_path}' using {}... ", backend.name()),
                false,
            );

            match backend.attempt(svg_path, png_path, size) {
                Ok(()) => {
                    logger::log("success.", false);
                    return ConversionOutcome::Converted {
                        backend: backend.name().to_string(),
                    };
                }
                Err(e) => {
                    logger::log(format!("failed: {e}."), false);
                }
            }
        }

        ConversionOutcome::Failed
    }
}
