use crate::{
    backends::{AttemptError, backend_trait::Backend},
    icon_processor::BatchReport,
    logger,
    profile::DesignParams,
    utils,
};

/// Converts a fixed list of design SVGs, each to a PNG of the same size,
/// using a single backend. Each PNG is written alongside its SVG.
pub struct DesignProcessor {
    pub svg_paths: Vec<String>,
    pub size: u32,
}

impl DesignProcessor {
    pub fn new(params: &DesignParams) -> Self {
        let svg_paths = params
            .files
            .iter()
            .map(|f| utils::join_path_segments(&params.base_dir, &[f]))
            .collect();

        Self {
            svg_paths,
            size: params.size,
        }
    }

    /// Convert each of the design files in turn.
    ///
    /// # Arguments
    ///
    /// * `backend` - The backend used for every conversion.
    pub fn process(&self, backend: &dyn Backend) -> BatchReport {
        logger::section("Design Conversion", false);

        let mut report = BatchReport::default();
        for svg_path in &self.svg_paths {
            report.attempted += 1;

            let png_path = utils::swap_file_extension(svg_path, "png");
            match self.convert(backend, svg_path, &png_path) {
                Ok(()) => {
                    logger::log(format!("✓ Converted {svg_path} to {png_path}"), true);
                    if report.method_used.is_none() {
                        report.method_used = Some(backend.name().to_string());
                    }
                    report.succeeded += 1;
                }
                Err(e) => {
                    logger::log(format!("❌ Error: {svg_path}: {e}"), true);
                    report.failed.push(png_path);
                }
            }
        }

        logger::log(
            format!(
                "Converted {} of {} design file{}.",
                report.succeeded,
                report.attempted,
                utils::plural(report.attempted)
            ),
            false,
        );

        report
    }

    fn convert(&self, backend: &dyn Backend, svg_path: &str, png_path: &str) -> Result<(), AttemptError> {
        if !utils::file_exists(svg_path) {
            return Err(AttemptError::Io(format!("the file '{svg_path}' does not exist")));
        }

        backend.attempt(svg_path, png_path, self.size)
    }
}
